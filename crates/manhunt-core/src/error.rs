//! Error types for the `manhunt-core` crate.
//!
//! Two of these are expected game-outcome branches rather than failures:
//! [`GameError::NoValidMove`] is resolved by the game loop to a cop win,
//! and [`GameError::NoTargetAvailable`] can fire on degenerate random
//! topologies. The rest are setup or wiring errors that propagate
//! immediately.

use manhunt_types::LocationId;
use manhunt_world::WorldError;

/// Errors that can occur during agent decisions and game execution.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GameError {
    /// The evader found no neighbour that is both safe and connected to
    /// its target. Legitimate on sparse randomized graphs; the game loop
    /// resolves it to a cop win.
    #[error("no valid move from {from}")]
    NoValidMove {
        /// The evader's location when it was boxed in.
        from: LocationId,
    },

    /// Retargeting was requested on a policy that does not support it.
    /// A wiring error: the distance-minimizing evader is single-stage.
    #[error("this evader policy does not support retargeting")]
    RetargetUnsupported,

    /// No eligible target vertex could be drawn from the graph.
    #[error("no eligible target vertex near {near}")]
    NoTargetAvailable {
        /// The location the draw was anchored at.
        near: LocationId,
    },

    /// The graph is too small to place two agents.
    #[error("graph has only {vertices} vertices; need at least 2")]
    GraphTooSmall {
        /// Number of vertices present.
        vertices: usize,
    },

    /// A graph operation failed.
    #[error("world error: {source}")]
    World {
        /// The underlying graph error.
        #[from]
        source: WorldError,
    },
}
