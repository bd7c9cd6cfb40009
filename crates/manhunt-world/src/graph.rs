//! The city graph: scored location vertices with undirected edges.
//!
//! [`LocationGraph`] is the arena for all vertices, keyed by
//! [`LocationId`]. Adjacency lives on each vertex as a set of identities,
//! and the graph is the only writer, so the symmetry and no-self-loop
//! invariants hold everywhere outside this module.
//!
//! Topology is not loaded from data: after vertices are inserted, edges
//! are generated by a bounded random walk ([`randomize_edges`]), which
//! deliberately produces an uneven, not-necessarily-connected graph.
//!
//! [`randomize_edges`]: LocationGraph::randomize_edges

use std::collections::{BTreeMap, BTreeSet};

use manhunt_types::{LocationId, LocationKind};
use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::WorldError;
use crate::search;
use crate::vertex::Vertex;

/// Iteration budget for the random-walk edge generator.
///
/// Matches the topology density the simulation was tuned against.
pub const DEFAULT_RANDOMIZE_ITERATIONS: u32 = 300;

/// An undirected graph of scored location vertices.
///
/// Vertex identities are unique; edges reference only existing vertices;
/// the graph is simple (no multi-edges, no self-loops).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocationGraph {
    /// All vertices, keyed by identity.
    vertices: BTreeMap<LocationId, Vertex>,
}

impl LocationGraph {
    /// Create an empty graph.
    pub const fn new() -> Self {
        Self {
            vertices: BTreeMap::new(),
        }
    }

    // -------------------------------------------------------------------
    // Vertex operations
    // -------------------------------------------------------------------

    /// Insert a vertex with the given identity, kind, and score.
    ///
    /// The new vertex has no neighbours. Does nothing if a vertex with
    /// this identity is already present. `score` must lie in `0..=10`.
    pub fn add_vertex(&mut self, id: LocationId, kind: LocationKind, score: u8) {
        self.vertices
            .entry(id.clone())
            .or_insert_with(|| Vertex::new(id, kind, score));
    }

    /// Get an immutable reference to a vertex, if present.
    pub fn vertex(&self, id: &LocationId) -> Option<&Vertex> {
        self.vertices.get(id)
    }

    /// Whether the graph contains a vertex with the given identity.
    pub fn contains(&self, id: &LocationId) -> bool {
        self.vertices.contains_key(id)
    }

    /// Return the number of vertices.
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Whether the graph has no vertices.
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Return all vertex identities, optionally restricted to one kind.
    pub fn all_vertices(&self, kind: Option<LocationKind>) -> BTreeSet<LocationId> {
        self.vertices
            .values()
            .filter(|v| kind.is_none_or(|k| v.kind == k))
            .map(|v| v.id.clone())
            .collect()
    }

    // -------------------------------------------------------------------
    // Edge operations
    // -------------------------------------------------------------------

    /// Add an undirected edge between two existing vertices.
    ///
    /// Adding an edge that already exists is a no-op (set semantics).
    ///
    /// # Errors
    ///
    /// Returns [`WorldError::UnknownLocation`] if either identity is
    /// absent, or [`WorldError::SelfLoop`] if the identities are equal.
    pub fn add_edge(&mut self, id1: &LocationId, id2: &LocationId) -> Result<(), WorldError> {
        if id1 == id2 {
            return Err(WorldError::SelfLoop(id1.clone()));
        }
        if !self.vertices.contains_key(id1) {
            return Err(WorldError::UnknownLocation(id1.clone()));
        }
        if !self.vertices.contains_key(id2) {
            return Err(WorldError::UnknownLocation(id2.clone()));
        }

        if let Some(v1) = self.vertices.get_mut(id1) {
            v1.neighbours.insert(id2.clone());
        }
        if let Some(v2) = self.vertices.get_mut(id2) {
            v2.neighbours.insert(id1.clone());
        }
        Ok(())
    }

    /// Whether two vertices are mutual neighbours.
    ///
    /// Returns `false` if either identity is absent.
    pub fn adjacent(&self, id1: &LocationId, id2: &LocationId) -> bool {
        self.vertices
            .get(id1)
            .is_some_and(|v| v.neighbours.contains(id2))
    }

    /// Return the neighbour set of a vertex.
    ///
    /// # Errors
    ///
    /// Returns [`WorldError::UnknownLocation`] if the identity is absent.
    pub fn neighbours_of(&self, id: &LocationId) -> Result<&BTreeSet<LocationId>, WorldError> {
        self.vertices
            .get(id)
            .map(|v| &v.neighbours)
            .ok_or_else(|| WorldError::UnknownLocation(id.clone()))
    }

    /// Return every edge exactly once as an unordered pair.
    ///
    /// Each pair is emitted with the lexicographically smaller identity
    /// first; the list is ordered by that convention.
    pub fn edges(&self) -> Vec<(LocationId, LocationId)> {
        let mut result = Vec::new();
        for (id, vertex) in &self.vertices {
            for neighbour in vertex.neighbours.iter().filter(|n| *n > id) {
                result.push((id.clone(), neighbour.clone()));
            }
        }
        result
    }

    // -------------------------------------------------------------------
    // Topology generation
    // -------------------------------------------------------------------

    /// Generate a random topology by a bounded random walk.
    ///
    /// Starting from a uniformly chosen vertex, each iteration picks a
    /// uniformly random vertex different from the current one, inserts an
    /// edge between them, and moves the walk there. Duplicate edges are
    /// no-ops and vertices the walk never touches stay isolated, so the
    /// result is neither minimal nor guaranteed connected.
    ///
    /// Does nothing on graphs with fewer than two vertices.
    ///
    /// # Errors
    ///
    /// Returns [`WorldError`] if an edge insertion fails, which cannot
    /// happen for identities drawn from this graph.
    pub fn randomize_edges(
        &mut self,
        rng: &mut impl Rng,
        iterations: u32,
    ) -> Result<(), WorldError> {
        let ids: Vec<LocationId> = self.vertices.keys().cloned().collect();
        if ids.len() < 2 {
            return Ok(());
        }

        let mut current = rng.random_range(0..ids.len());
        for _ in 0..iterations {
            // Draw an index over the other vertices, skipping `current`.
            let mut next = rng.random_range(0..ids.len().saturating_sub(1));
            if next >= current {
                next = next.saturating_add(1);
            }
            match (ids.get(current), ids.get(next)) {
                (Some(a), Some(b)) => self.add_edge(a, b)?,
                _ => break,
            }
            current = next;
        }

        debug!(
            vertices = self.vertex_count(),
            edges = self.edges().len(),
            "randomized graph topology"
        );
        Ok(())
    }

    // -------------------------------------------------------------------
    // Path lookup
    // -------------------------------------------------------------------

    /// Return a known path between two vertices, or an empty list.
    ///
    /// Runs the depth-first path search (up to `|V| - 1` attempts,
    /// returning the first non-empty result). The search is deterministic
    /// unordered DFS, so the result is *a* path, not necessarily the
    /// shortest one; game outcomes depend on that ordering, so it is part
    /// of the contract.
    ///
    /// Returns an empty list if either identity is absent or no path
    /// exists.
    pub fn shortest_known_path(&self, from: &LocationId, to: &LocationId) -> Vec<LocationId> {
        if !self.vertices.contains_key(from) || !self.vertices.contains_key(to) {
            return Vec::new();
        }
        for _ in 1..self.vertex_count() {
            if let Some(path) = search::find_path(self, from, to, &mut BTreeSet::new()) {
                return path;
            }
        }
        Vec::new()
    }

    // -------------------------------------------------------------------
    // Start placement
    // -------------------------------------------------------------------

    /// Return the two busiest vertices, ranked by degree.
    ///
    /// Ties are broken by reverse-lexicographic identity, so the result
    /// is deterministic for a fixed topology. The evader starts at the
    /// first, the pursuer at the second.
    ///
    /// Returns `None` if the graph has fewer than two vertices.
    pub fn busiest_pair(&self) -> Option<(LocationId, LocationId)> {
        let mut ranked: Vec<(usize, &LocationId)> = self
            .vertices
            .values()
            .map(|v| (v.degree(), &v.id))
            .collect();
        ranked.sort_unstable_by(|a, b| b.cmp(a));

        let mut iter = ranked.into_iter();
        let (_, first) = iter.next()?;
        let (_, second) = iter.next()?;
        Some((first.clone(), second.clone()))
    }
}
