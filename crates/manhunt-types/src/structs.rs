//! Composite types shared across the workspace.

use serde::{Deserialize, Serialize};

use crate::enums::{EndReason, Stage, Winner};
use crate::ids::LocationId;

/// The evader's current objective: a destination vertex plus its stage.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Target {
    /// The destination vertex.
    pub location: LocationId,
    /// Whether this is an intermediate waypoint or the final escape.
    pub stage: Stage,
}

impl Target {
    /// Create a target for the given location and stage.
    pub const fn new(location: LocationId, stage: Stage) -> Self {
        Self { location, stage }
    }

    /// Create an intermediate (mid-stage) target.
    pub const fn mid(location: LocationId) -> Self {
        Self::new(location, Stage::Mid)
    }

    /// Create a final (end-stage) target.
    pub const fn end(location: LocationId) -> Self {
        Self::new(location, Stage::End)
    }
}

/// The outcome of one finished game.
///
/// This is the sole artifact handed to the external visualization and
/// statistics collaborators: who won, why the game ended, and the full
/// vertex sequence each agent traversed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameReport {
    /// The winning side.
    pub winner: Winner,
    /// The specific terminal condition that fired.
    pub end_reason: EndReason,
    /// Every vertex the pursuer occupied, in order.
    pub cop_path: Vec<LocationId>,
    /// Every vertex the evader occupied, in order.
    pub robber_path: Vec<LocationId>,
}

impl GameReport {
    /// Numeric winner flag: 0 for the cop, 1 for the robber.
    pub const fn winner_flag(&self) -> u8 {
        self.winner.flag()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn target_constructors_set_stage() {
        let mid = Target::mid(LocationId::from("Citi Field"));
        assert_eq!(mid.stage, Stage::Mid);
        let end = Target::end(LocationId::from("Citi Field"));
        assert_eq!(end.stage, Stage::End);
    }

    #[test]
    fn report_serializes_with_flag_semantics() {
        let report = GameReport {
            winner: Winner::Robber,
            end_reason: EndReason::Escaped,
            cop_path: vec![LocationId::from("A")],
            robber_path: vec![LocationId::from("B"), LocationId::from("C")],
        };
        assert_eq!(report.winner_flag(), 1);
        let json = serde_json::to_string(&report).unwrap();
        assert!(json.contains("\"escaped\""));
        assert!(json.contains("\"robber\""));
    }
}
