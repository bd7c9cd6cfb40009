//! Random staged-target selection for the evader.
//!
//! A target is drawn uniformly from the whole vertex set, rejecting
//! anything adjacent to the anchor location or present in the caller's
//! visited set. The draw is bounded at `|V| - 1` attempts; a degenerate
//! graph can exhaust them, in which case no target is produced.

use std::collections::BTreeSet;

use manhunt_types::{LocationId, Stage, Target};
use manhunt_world::graph::LocationGraph;
use rand::Rng;

/// Draw a target vertex for the evader, or `None` if the bounded number
/// of attempts all land on ineligible vertices.
///
/// A vertex is eligible when it is neither a neighbour of `anchor` nor a
/// member of `visited`. The anchor itself is only rejected if the caller
/// lists it in `visited`.
pub fn choose_target(
    graph: &LocationGraph,
    anchor: &LocationId,
    visited: &BTreeSet<LocationId>,
    stage: Stage,
    rng: &mut impl Rng,
) -> Option<Target> {
    let neighbours = graph.neighbours_of(anchor).ok()?;
    let items: Vec<LocationId> = graph.all_vertices(None).into_iter().collect();
    if items.len() < 2 {
        return None;
    }

    for _ in 1..items.len() {
        let index = rng.random_range(0..items.len());
        let Some(candidate) = items.get(index) else {
            continue;
        };
        if !neighbours.contains(candidate) && !visited.contains(candidate) {
            return Some(Target::new(candidate.clone(), stage));
        }
    }
    None
}
