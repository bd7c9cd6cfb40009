//! Error types for the simulation binary.
//!
//! [`EngineError`] is the top-level error type that wraps all possible
//! failure modes during startup and batch execution.

/// Top-level error for the simulation binary.
///
/// Each variant wraps a specific subsystem error, providing a single
/// error type that `main` can propagate with `?`.
#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    /// Configuration loading failed.
    #[error("config error: {source}")]
    Config {
        /// The underlying config error.
        #[from]
        source: manhunt_core::ConfigError,
    },

    /// Dataset loading or graph construction failed.
    #[error("dataset error: {source}")]
    Dataset {
        /// The underlying dataset error.
        #[from]
        source: manhunt_world::dataset::DatasetError,
    },

    /// Game setup or execution failed.
    #[error("game error: {source}")]
    Game {
        /// The underlying game error.
        #[from]
        source: manhunt_core::GameError,
    },

    /// A game report could not be serialized.
    #[error("report serialization failed: {source}")]
    Report {
        /// The underlying JSON error.
        #[from]
        source: serde_json::Error,
    },
}
