//! City location graph, reachability search, and dataset loading for the
//! Manhunt pursuit-evasion simulation.
//!
//! This crate models the playing field: an undirected graph of scored,
//! categorized location vertices. The graph is mutated during setup
//! (vertex insertion, random topology generation) and is read-only for
//! the duration of a game.
//!
//! # Modules
//!
//! - [`dataset`] -- Loader for the two-column record stream produced by
//!   the external ETL, with the fixed category-to-score table.
//! - [`error`] -- Error types for graph operations.
//! - [`graph`] -- [`LocationGraph`]: vertex arena keyed by identity,
//!   adjacency as identity sets, edge randomization, and the DFS-retry
//!   path lookup.
//! - [`search`] -- Iterative depth-first reachability and path extraction
//!   under caller-supplied exclusion sets.
//! - [`vertex`] -- The [`Vertex`] record: identity, kind, score, and
//!   neighbour set.

pub mod dataset;
pub mod error;
pub mod graph;
pub mod search;
pub mod vertex;

pub use dataset::{DatasetError, load_location_graph, load_location_graph_from_path};
pub use error::WorldError;
pub use graph::{DEFAULT_RANDOMIZE_ITERATIONS, LocationGraph};
pub use search::{find_path, is_connected};
pub use vertex::Vertex;
