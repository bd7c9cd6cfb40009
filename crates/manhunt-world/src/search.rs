//! Depth-first reachability and path extraction under exclusion sets.
//!
//! Both operations share one exploration strategy parameterized by a
//! caller-supplied exclusion set: any identity pre-seeded into `visited`
//! is treated as already explored, which lets agents express "reachable
//! without stepping on X" (the pursuer excludes its own location to force
//! forward progress). The set is also how the traversal records its own
//! progress, so it is mutated during the call.
//!
//! The traversal is iterative with an explicit stack. Neighbours are
//! explored in ascending identity order, which makes results
//! deterministic for a fixed topology.

use std::collections::{BTreeMap, BTreeSet};

use manhunt_types::LocationId;

use crate::graph::LocationGraph;

/// Whether `target` is reachable from `from` without entering any vertex
/// in `visited`.
///
/// Returns `true` immediately when `from` equals `target`, even if the
/// target is in the exclusion set. A target reachable only through
/// excluded vertices is not found; this is the mechanism, not a defect.
///
/// The caller must not pre-seed `from` into `visited`.
pub fn is_connected(
    graph: &LocationGraph,
    from: &LocationId,
    target: &LocationId,
    visited: &mut BTreeSet<LocationId>,
) -> bool {
    if from == target {
        return true;
    }

    let mut stack = vec![from.clone()];
    while let Some(current) = stack.pop() {
        if !visited.insert(current.clone()) {
            continue;
        }
        let Some(vertex) = graph.vertex(&current) else {
            continue;
        };
        for neighbour in vertex.neighbours.iter().rev() {
            if visited.contains(neighbour) {
                continue;
            }
            if neighbour == target {
                return true;
            }
            stack.push(neighbour.clone());
        }
    }
    false
}

/// Return the vertex sequence of a depth-first path from `from` to
/// `target` under the same exclusion semantics as [`is_connected`].
///
/// The path starts at `from` and ends at `target`, in discovery order
/// (not necessarily shortest). Returns `None` -- distinct from an empty
/// path -- when no path exists under the given exclusions.
pub fn find_path(
    graph: &LocationGraph,
    from: &LocationId,
    target: &LocationId,
    visited: &mut BTreeSet<LocationId>,
) -> Option<Vec<LocationId>> {
    if from == target {
        return Some(vec![from.clone()]);
    }

    // Discovery tree: each explored vertex remembers which vertex pushed
    // it, so the path is reconstructed by walking parents back to `from`.
    let mut parent: BTreeMap<LocationId, LocationId> = BTreeMap::new();
    let mut stack = vec![from.clone()];

    while let Some(current) = stack.pop() {
        if !visited.insert(current.clone()) {
            continue;
        }
        let Some(vertex) = graph.vertex(&current) else {
            continue;
        };
        for neighbour in vertex.neighbours.iter().rev() {
            if visited.contains(neighbour) {
                continue;
            }
            if neighbour == target {
                return Some(reconstruct(&parent, from, &current, target));
            }
            parent.entry(neighbour.clone()).or_insert_with(|| current.clone());
            stack.push(neighbour.clone());
        }
    }
    None
}

/// Walk the discovery tree from `last` back to `from` and append `target`.
fn reconstruct(
    parent: &BTreeMap<LocationId, LocationId>,
    from: &LocationId,
    last: &LocationId,
    target: &LocationId,
) -> Vec<LocationId> {
    let mut path = vec![target.clone(), last.clone()];
    let mut current = last;
    while current != from {
        let Some(p) = parent.get(current) else {
            break;
        };
        path.push(p.clone());
        current = p;
    }
    path.reverse();
    path
}
