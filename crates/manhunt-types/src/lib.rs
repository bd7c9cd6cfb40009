//! Shared type definitions for the Manhunt pursuit-evasion simulation.
//!
//! This crate holds the vocabulary common to every other crate in the
//! workspace: the string-keyed [`LocationId`], the [`LocationKind`]
//! category enum, target staging, and the game outcome types. It has no
//! behavior of its own beyond construction, parsing, and display.

pub mod enums;
pub mod ids;
pub mod structs;

pub use enums::{EndReason, LocationKind, Stage, UnknownKindTag, Winner};
pub use ids::LocationId;
pub use structs::{GameReport, Target};

/// The highest vertex score still considered "safe" for the evader.
///
/// Scores run 0-10; the evader only steps onto vertices scoring at or
/// below this value. The pursuer uses the same boundary with strict
/// comparison during its low-risk phase.
pub const SAFE_SCORE_MAX: u8 = 5;

/// The maximum score a location can carry.
pub const SCORE_MAX: u8 = 10;
