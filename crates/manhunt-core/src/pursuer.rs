//! The pursuer (cop) and its 3-turn alternating reaction policy.
//!
//! The pursuer does not plan ahead. Each turn it reacts to the evader's
//! current target vertex, alternating between movement phases keyed on
//! its own move counter:
//!
//! - counter divisible by 3: only neighbours scoring strictly below 5
//!   are eligible (the low-risk phase);
//! - otherwise: only neighbours scoring 5 or above (the high-risk phase).
//!
//! An eligible neighbour must also reach the evader's target with the
//! pursuer's current location excluded, which forces forward progress.
//! When no neighbour qualifies, the pursuer stalls for the turn; a stall
//! is a valid outcome, not an error, and leaves the counter unchanged.

use std::collections::BTreeSet;

use manhunt_types::{LocationId, SAFE_SCORE_MAX};
use manhunt_world::graph::LocationGraph;
use manhunt_world::search;

use crate::error::GameError;

/// The pursuing agent.
#[derive(Debug, Clone)]
pub struct Pursuer {
    /// Current location.
    location: LocationId,
    /// Moves made so far; drives the phase alternation.
    move_count: u32,
}

impl Pursuer {
    /// Create a pursuer at the given start vertex.
    pub const fn new(start: LocationId) -> Self {
        Self {
            location: start,
            move_count: 0,
        }
    }

    /// The pursuer's current location.
    pub const fn location(&self) -> &LocationId {
        &self.location
    }

    /// Number of moves made so far.
    pub const fn move_count(&self) -> u32 {
        self.move_count
    }

    /// Whether the current turn is a low-risk movement phase.
    const fn low_risk_phase(&self) -> bool {
        self.move_count % 3 == 0
    }

    /// React to the evader's target: move one hop or stall.
    ///
    /// Scans the neighbours of the current location in ascending identity
    /// order (the documented tie-break) and moves to the first one that
    /// matches the phase's score band and can reach `evader_target`
    /// without passing back through the current location. Returns `true`
    /// if a move was made, `false` on a stall.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::World`] if the pursuer's location is not in
    /// the graph (a wiring error).
    pub fn react(
        &mut self,
        graph: &LocationGraph,
        evader_target: &LocationId,
    ) -> Result<bool, GameError> {
        let low_risk = self.low_risk_phase();
        let neighbours = graph.neighbours_of(&self.location)?;

        let mut destination = None;
        for neighbour in neighbours {
            let eligible = graph.vertex(neighbour).is_some_and(|v| {
                if low_risk {
                    v.score < SAFE_SCORE_MAX
                } else {
                    v.score >= SAFE_SCORE_MAX
                }
            });
            if !eligible {
                continue;
            }

            let mut excluded: BTreeSet<LocationId> = BTreeSet::new();
            excluded.insert(self.location.clone());
            if search::is_connected(graph, neighbour, evader_target, &mut excluded) {
                destination = Some(neighbour.clone());
                break;
            }
        }

        match destination {
            Some(next) => {
                self.location = next;
                self.move_count = self.move_count.saturating_add(1);
                Ok(true)
            }
            None => Ok(false),
        }
    }
}
