//! Agent policies and the game state machine for the Manhunt simulation.
//!
//! This crate owns everything that happens after the city graph exists:
//! evader path planning, the pursuer's alternating interception policy,
//! random target selection, game setup, and the turn-by-turn loop with
//! its termination protocol.
//!
//! # Modules
//!
//! - [`config`] -- YAML-backed simulation configuration with defaults.
//! - [`error`] -- Error types for agent and game operations.
//! - [`evader`] -- The [`Evader`] capability trait and its two concrete
//!   policies: risk-minimizing and distance-minimizing.
//! - [`game`] -- [`run_game`]: the turn loop and termination rules.
//! - [`pursuer`] -- The cop's 3-turn alternating reaction policy.
//! - [`setup`] -- Degree-ranked start placement and agent construction.
//! - [`target`] -- Random staged-target selection.
//!
//! [`run_game`]: game::run_game

pub mod config;
pub mod error;
pub mod evader;
pub mod game;
pub mod pursuer;
pub mod setup;
pub mod target;

pub use config::{ConfigError, EvaderPolicy, SimulationConfig};
pub use error::GameError;
pub use evader::{DEFAULT_MOVE_LIMIT, Evader, RiskAverseEvader, ShortestPathEvader};
pub use game::run_game;
pub use pursuer::Pursuer;
pub use setup::initialize_game;
pub use target::choose_target;
