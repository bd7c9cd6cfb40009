//! The vertex record for the city graph.
//!
//! A [`Vertex`] stores its own identity, category, safety score, and the
//! identities of its neighbours. Adjacency is a set of identities rather
//! than live references: the graph is the arena and vertices point into
//! it by key, which keeps ownership acyclic.

use std::collections::BTreeSet;

use manhunt_types::{LocationId, LocationKind, SAFE_SCORE_MAX};
use serde::{Deserialize, Serialize};

/// A vertex in the city graph.
///
/// # Invariants
///
/// Maintained by [`LocationGraph`](crate::graph::LocationGraph), which is
/// the only writer:
///
/// - adjacency is symmetric: `a` lists `b` iff `b` lists `a`;
/// - a vertex never lists itself;
/// - `score` lies in `0..=10`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Vertex {
    /// The location's unique identity.
    pub id: LocationId,
    /// The location's category tag.
    pub kind: LocationKind,
    /// Safety/risk rating, 0 (safest) to 10 (riskiest).
    pub score: u8,
    /// Identities of adjacent vertices.
    pub neighbours: BTreeSet<LocationId>,
}

impl Vertex {
    /// Create a vertex with no neighbours.
    pub const fn new(id: LocationId, kind: LocationKind, score: u8) -> Self {
        Self {
            id,
            kind,
            score,
            neighbours: BTreeSet::new(),
        }
    }

    /// Return the number of neighbours.
    pub fn degree(&self) -> usize {
        self.neighbours.len()
    }

    /// Whether this vertex counts as safe for the evader (score at most 5).
    pub const fn is_safe(&self) -> bool {
        self.score <= SAFE_SCORE_MAX
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn new_vertex_has_no_neighbours() {
        let v = Vertex::new(LocationId::from("Citi Field"), LocationKind::TouristSpot, 5);
        assert_eq!(v.degree(), 0);
        assert!(v.neighbours.is_empty());
    }

    #[test]
    fn safety_boundary_is_inclusive() {
        let safe = Vertex::new(LocationId::from("A"), LocationKind::Park, 5);
        let risky = Vertex::new(LocationId::from("B"), LocationKind::Health, 6);
        assert!(safe.is_safe());
        assert!(!risky.is_safe());
    }
}
