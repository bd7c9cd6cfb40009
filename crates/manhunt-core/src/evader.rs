//! The evader (robber) and its two path-planning policies.
//!
//! Both policies share the same candidate rule: every neighbour of the
//! current location is a potential first hop, valid only if it is safe
//! (score at most 5) and can reach the current target with a fresh
//! exclusion set. For each valid candidate the full path is looked up
//! from the target vertex back to the candidate, and the policies differ
//! only in how those paths are ranked:
//!
//! - [`RiskAverseEvader`] minimizes the number of risky vertices
//!   (score above 5) along the path;
//! - [`ShortestPathEvader`] minimizes path length.
//!
//! Ties are broken by the natural ordering of the path sequence, so
//! planning is deterministic for a fixed topology. The selected path is
//! reversed before return: the evader walks it candidate-first, ending
//! on the target vertex.

use std::collections::BTreeSet;

use manhunt_types::{LocationId, Target};
use manhunt_world::graph::LocationGraph;
use manhunt_world::search;
use manhunt_world::vertex::Vertex;

use crate::error::GameError;

/// Default number of moves the evader may make before the pursuer wins
/// by timeout.
pub const DEFAULT_MOVE_LIMIT: u32 = 20;

/// Capability interface for evader policies.
///
/// The game loop drives any implementation through this trait: it asks
/// for a planned path, walks the evader along it hop by hop, and updates
/// the objective when a mid-stage target is reached.
pub trait Evader: core::fmt::Debug {
    /// The evader's current location.
    fn location(&self) -> &LocationId;

    /// Number of moves made so far.
    fn move_count(&self) -> u32;

    /// Maximum number of moves before the pursuer wins by timeout.
    fn move_limit(&self) -> u32;

    /// The current objective.
    fn target(&self) -> &Target;

    /// Move the evader to the given vertex.
    fn advance_to(&mut self, location: LocationId);

    /// Increment the move counter by one.
    fn increment_moves(&mut self);

    /// Replace the current objective.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::RetargetUnsupported`] for single-stage
    /// policies.
    fn set_target(&mut self, target: Target) -> Result<(), GameError>;

    /// Plan a validated path toward the current target.
    ///
    /// The returned sequence is the upcoming hops in walking order: the
    /// first element is a neighbour of the current location, the last is
    /// the target vertex.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::NoValidMove`] if no neighbour is both safe
    /// and connected to the target.
    fn next_path(&self, graph: &LocationGraph) -> Result<Vec<LocationId>, GameError>;
}

/// Collect the candidate paths for every valid first hop.
///
/// Each returned path runs from the target vertex back to the candidate,
/// as produced by the graph's path lookup. Candidates that are unsafe,
/// disconnected from the target, or yield an empty lookup are dropped.
fn candidate_paths(
    graph: &LocationGraph,
    from: &LocationId,
    target: &LocationId,
) -> Result<Vec<Vec<LocationId>>, GameError> {
    let neighbours = graph.neighbours_of(from)?;

    let mut paths = Vec::new();
    for candidate in neighbours {
        if !graph.vertex(candidate).is_some_and(Vertex::is_safe) {
            continue;
        }
        // Fresh exclusion set per candidate: each first hop is judged on
        // reachability from scratch, not against siblings' traversals.
        if !search::is_connected(graph, candidate, target, &mut BTreeSet::new()) {
            continue;
        }
        let path = graph.shortest_known_path(target, candidate);
        if !path.is_empty() {
            paths.push(path);
        }
    }
    Ok(paths)
}

/// Count the vertices along a path with a score above the safe bound.
fn risky_vertex_count(graph: &LocationGraph, path: &[LocationId]) -> usize {
    path.iter()
        .filter(|id| graph.vertex(id).is_some_and(|v| !v.is_safe()))
        .count()
}

/// The risk-minimizing evader.
///
/// Prefers the candidate path containing the fewest risky vertices.
/// Supports two-stage play: reaching a mid target triggers retargeting.
#[derive(Debug, Clone)]
pub struct RiskAverseEvader {
    /// Current location.
    location: LocationId,
    /// Current objective.
    target: Target,
    /// Moves made so far.
    move_count: u32,
    /// Timeout bound.
    move_limit: u32,
}

impl RiskAverseEvader {
    /// Create an evader at `start` heading for `target`, with the
    /// default move limit.
    pub const fn new(start: LocationId, target: Target) -> Self {
        Self::with_move_limit(start, target, DEFAULT_MOVE_LIMIT)
    }

    /// Create an evader with an explicit move limit.
    pub const fn with_move_limit(start: LocationId, target: Target, move_limit: u32) -> Self {
        Self {
            location: start,
            target,
            move_count: 0,
            move_limit,
        }
    }
}

impl Evader for RiskAverseEvader {
    fn location(&self) -> &LocationId {
        &self.location
    }

    fn move_count(&self) -> u32 {
        self.move_count
    }

    fn move_limit(&self) -> u32 {
        self.move_limit
    }

    fn target(&self) -> &Target {
        &self.target
    }

    fn advance_to(&mut self, location: LocationId) {
        self.location = location;
    }

    fn increment_moves(&mut self) {
        self.move_count = self.move_count.saturating_add(1);
    }

    fn set_target(&mut self, target: Target) -> Result<(), GameError> {
        self.target = target;
        Ok(())
    }

    fn next_path(&self, graph: &LocationGraph) -> Result<Vec<LocationId>, GameError> {
        let best = candidate_paths(graph, &self.location, &self.target.location)?
            .into_iter()
            .map(|path| (risky_vertex_count(graph, &path), path))
            .min();

        let Some((_, mut path)) = best else {
            return Err(GameError::NoValidMove {
                from: self.location.clone(),
            });
        };
        path.reverse();
        Ok(path)
    }
}

/// The distance-minimizing evader.
///
/// Prefers the shortest candidate path regardless of risk. Single-stage
/// by design: it does not support retargeting, so it is always given an
/// end-stage target.
#[derive(Debug, Clone)]
pub struct ShortestPathEvader {
    /// Current location.
    location: LocationId,
    /// Current objective.
    target: Target,
    /// Moves made so far.
    move_count: u32,
    /// Timeout bound.
    move_limit: u32,
}

impl ShortestPathEvader {
    /// Create an evader at `start` heading for `target`, with the
    /// default move limit.
    pub const fn new(start: LocationId, target: Target) -> Self {
        Self::with_move_limit(start, target, DEFAULT_MOVE_LIMIT)
    }

    /// Create an evader with an explicit move limit.
    pub const fn with_move_limit(start: LocationId, target: Target, move_limit: u32) -> Self {
        Self {
            location: start,
            target,
            move_count: 0,
            move_limit,
        }
    }
}

impl Evader for ShortestPathEvader {
    fn location(&self) -> &LocationId {
        &self.location
    }

    fn move_count(&self) -> u32 {
        self.move_count
    }

    fn move_limit(&self) -> u32 {
        self.move_limit
    }

    fn target(&self) -> &Target {
        &self.target
    }

    fn advance_to(&mut self, location: LocationId) {
        self.location = location;
    }

    fn increment_moves(&mut self) {
        self.move_count = self.move_count.saturating_add(1);
    }

    fn set_target(&mut self, _target: Target) -> Result<(), GameError> {
        Err(GameError::RetargetUnsupported)
    }

    fn next_path(&self, graph: &LocationGraph) -> Result<Vec<LocationId>, GameError> {
        let best = candidate_paths(graph, &self.location, &self.target.location)?
            .into_iter()
            .map(|path| (path.len(), path))
            .min();

        let Some((_, mut path)) = best else {
            return Err(GameError::NoValidMove {
                from: self.location.clone(),
            });
        };
        path.reverse();
        Ok(path)
    }
}
