//! Error types for the `manhunt-world` crate.
//!
//! All fallible graph operations return [`WorldError`] through the
//! standard [`Result`] type alias.

use manhunt_types::LocationId;

/// Errors that can occur during location-graph operations.
///
/// These are setup or caller-programming errors: they are never retried
/// and always propagate. Expected game-outcome branches (an agent with no
/// legal move) live in the game crate, not here.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum WorldError {
    /// An edge or neighbour query referenced a vertex absent from the graph.
    #[error("unknown location: {0}")]
    UnknownLocation(LocationId),

    /// An edge was requested from a vertex to itself.
    #[error("self-loop rejected for location: {0}")]
    SelfLoop(LocationId),
}
