//! The turn loop and its termination protocol.
//!
//! One game is a sequence of planning rounds. Each round the evader
//! plans a full path to its current target, then walks it hop by hop;
//! the pursuer reacts after every hop. Between hops the terminal
//! conditions are checked in a fixed order: target arrival first, then
//! capture, then the move limit. Reaching a mid-stage target abandons
//! the rest of the planned path and starts a new round against a freshly
//! drawn end-stage target.

use std::collections::BTreeSet;

use manhunt_types::{EndReason, GameReport, LocationId, Stage};
use manhunt_world::graph::LocationGraph;
use rand::Rng;
use tracing::{debug, info};

use crate::error::GameError;
use crate::evader::Evader;
use crate::pursuer::Pursuer;
use crate::target::choose_target;

/// Build the final report and log the outcome.
fn finish(reason: EndReason, cop_path: Vec<LocationId>, robber_path: Vec<LocationId>) -> GameReport {
    let winner = reason.winner();
    info!(
        ?winner,
        ?reason,
        robber_moves = robber_path.len().saturating_sub(1),
        cop_moves = cop_path.len().saturating_sub(1),
        "game over"
    );
    GameReport {
        winner,
        end_reason: reason,
        cop_path,
        robber_path,
    }
}

/// Run one game to completion.
///
/// Both agents are assumed to sit on vertices of `graph`. The returned
/// report carries the winner, the terminal condition, and the full
/// vertex sequence each agent occupied, starting with its start vertex.
///
/// A boxed-in evader is a game outcome, not a failure: when planning
/// finds no safe, connected first hop, or a mid-stage arrival draws no
/// new target, the game ends as [`EndReason::Cornered`].
///
/// # Errors
///
/// Returns [`GameError::RetargetUnsupported`] if a mid-stage target is
/// reached by a single-stage policy, and [`GameError::World`] if an
/// agent sits on a vertex missing from the graph. Both are wiring
/// errors in the caller's setup.
pub fn run_game(
    evader: &mut dyn Evader,
    pursuer: &mut Pursuer,
    graph: &LocationGraph,
    rng: &mut impl Rng,
) -> Result<GameReport, GameError> {
    let mut robber_path = vec![evader.location().clone()];
    let mut cop_path = vec![pursuer.location().clone()];

    'round: loop {
        let planned = match evader.next_path(graph) {
            Ok(path) => path,
            Err(GameError::NoValidMove { from }) => {
                debug!(%from, "evader is boxed in");
                return Ok(finish(EndReason::Cornered, cop_path, robber_path));
            }
            Err(err) => return Err(err),
        };
        debug!(
            from = %evader.location(),
            to = %evader.target().location,
            hops = planned.len(),
            "evader planned a path"
        );

        for hop in planned {
            evader.advance_to(hop.clone());
            evader.increment_moves();
            robber_path.push(hop);

            if pursuer.react(graph, &evader.target().location)? {
                cop_path.push(pursuer.location().clone());
            }

            // Terminal checks, in order: escape, capture, timeout. A
            // mid-stage arrival is not terminal and must not shadow a
            // capture or timeout on the same hop.
            let at_target = evader.location() == &evader.target().location;
            if at_target && evader.target().stage == Stage::End {
                return Ok(finish(EndReason::Escaped, cop_path, robber_path));
            }

            if evader.location() == pursuer.location() {
                return Ok(finish(EndReason::Captured, cop_path, robber_path));
            }

            if evader.move_count() >= evader.move_limit() {
                return Ok(finish(EndReason::MoveLimit, cop_path, robber_path));
            }

            if at_target {
                let visited: BTreeSet<LocationId> = [evader.location().clone()].into();
                let Some(next) =
                    choose_target(graph, evader.location(), &visited, Stage::End, rng)
                else {
                    debug!(at = %evader.location(), "no end-stage target available");
                    return Ok(finish(EndReason::Cornered, cop_path, robber_path));
                };
                debug!(next = %next.location, "mid-stage target reached, retargeting");
                evader.set_target(next)?;
                continue 'round;
            }
        }

        // The planned path ran out without reaching the target. Planning
        // always ends paths on the target vertex, so this only fires for
        // external policies that break that contract.
        return Ok(finish(EndReason::PathExhausted, cop_path, robber_path));
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::arithmetic_side_effects)]
mod tests {
    use manhunt_types::{LocationKind, Target, Winner};
    use rand::SeedableRng;
    use rand::rngs::SmallRng;

    use super::*;
    use crate::evader::{RiskAverseEvader, ShortestPathEvader};

    fn add(graph: &mut LocationGraph, id: &str, score: u8) {
        graph.add_vertex(LocationId::from(id), LocationKind::Park, score);
    }

    fn connect(graph: &mut LocationGraph, a: &str, b: &str) {
        graph
            .add_edge(&LocationId::from(a), &LocationId::from(b))
            .unwrap();
    }

    fn ids(raw: &[&str]) -> Vec<LocationId> {
        raw.iter().map(|id| LocationId::from(*id)).collect()
    }

    // -----------------------------------------------------------------------
    // Terminal conditions
    // -----------------------------------------------------------------------

    #[test]
    fn evader_escapes_on_reaching_end_target() {
        // Line s-a-goal; the cop sits on an isolated vertex and can
        // never move.
        let mut graph = LocationGraph::new();
        add(&mut graph, "s", 3);
        add(&mut graph, "a", 4);
        add(&mut graph, "goal", 2);
        add(&mut graph, "p", 5);
        connect(&mut graph, "s", "a");
        connect(&mut graph, "a", "goal");

        let mut evader =
            ShortestPathEvader::new(LocationId::from("s"), Target::end(LocationId::from("goal")));
        let mut cop = Pursuer::new(LocationId::from("p"));
        let mut rng = SmallRng::seed_from_u64(1);

        let report = run_game(&mut evader, &mut cop, &graph, &mut rng).unwrap();
        assert_eq!(report.winner, Winner::Robber);
        assert_eq!(report.end_reason, EndReason::Escaped);
        assert_eq!(report.winner_flag(), 1);
        assert_eq!(report.robber_path, ids(&["s", "a", "goal"]));
        // The cop never moved; its path is just the start vertex.
        assert_eq!(report.cop_path, ids(&["p"]));
    }

    #[test]
    fn capture_ends_the_game_immediately() {
        // The evader's only first hop is m; the cop, adjacent to m and in
        // its low-risk phase, steps onto it the same turn.
        let mut graph = LocationGraph::new();
        add(&mut graph, "s", 3);
        add(&mut graph, "m", 4);
        add(&mut graph, "goal", 2);
        add(&mut graph, "p", 5);
        connect(&mut graph, "s", "m");
        connect(&mut graph, "m", "goal");
        connect(&mut graph, "p", "m");

        let mut evader =
            ShortestPathEvader::new(LocationId::from("s"), Target::end(LocationId::from("goal")));
        let mut cop = Pursuer::new(LocationId::from("p"));
        let mut rng = SmallRng::seed_from_u64(1);

        let report = run_game(&mut evader, &mut cop, &graph, &mut rng).unwrap();
        assert_eq!(report.winner, Winner::Cop);
        assert_eq!(report.end_reason, EndReason::Captured);
        assert_eq!(report.winner_flag(), 0);
        // One hop each, then the game is over.
        assert_eq!(report.robber_path, ids(&["s", "m"]));
        assert_eq!(report.cop_path, ids(&["p", "m"]));
    }

    #[test]
    fn move_limit_hands_the_win_to_the_cop() {
        let mut graph = LocationGraph::new();
        for (id, score) in [("s", 3), ("a", 4), ("b", 3), ("c", 4), ("goal", 2), ("p", 5)] {
            add(&mut graph, id, score);
        }
        for (x, y) in [("s", "a"), ("a", "b"), ("b", "c"), ("c", "goal")] {
            connect(&mut graph, x, y);
        }

        let mut evader = ShortestPathEvader::with_move_limit(
            LocationId::from("s"),
            Target::end(LocationId::from("goal")),
            2,
        );
        let mut cop = Pursuer::new(LocationId::from("p"));
        let mut rng = SmallRng::seed_from_u64(1);

        let report = run_game(&mut evader, &mut cop, &graph, &mut rng).unwrap();
        assert_eq!(report.end_reason, EndReason::MoveLimit);
        assert_eq!(report.winner, Winner::Cop);
        assert_eq!(report.robber_path, ids(&["s", "a", "b"]));
    }

    #[test]
    fn boxed_in_evader_is_cornered() {
        // Every neighbour of the start is unsafe; planning fails before
        // the evader makes a single move.
        let mut graph = LocationGraph::new();
        add(&mut graph, "s", 3);
        add(&mut graph, "wall", 8);
        add(&mut graph, "goal", 2);
        add(&mut graph, "p", 5);
        connect(&mut graph, "s", "wall");
        connect(&mut graph, "wall", "goal");

        let mut evader =
            RiskAverseEvader::new(LocationId::from("s"), Target::mid(LocationId::from("goal")));
        let mut cop = Pursuer::new(LocationId::from("p"));
        let mut rng = SmallRng::seed_from_u64(1);

        let report = run_game(&mut evader, &mut cop, &graph, &mut rng).unwrap();
        assert_eq!(report.end_reason, EndReason::Cornered);
        assert_eq!(report.winner, Winner::Cop);
        assert_eq!(report.robber_path, ids(&["s"]));
    }

    // -----------------------------------------------------------------------
    // Mid-stage retargeting
    // -----------------------------------------------------------------------

    #[test]
    fn mid_target_retargets_and_plays_on_to_an_escape() {
        // Hub-and-spoke city: s carries the mid target m and four safe
        // spokes, plus a high-score pocket hot2-hotwall where the cop
        // starts, permanently stalled in its low-risk phase. Whatever
        // end target gets drawn after m is reached, the evader can walk
        // to it through s, so every seed ends in an escape.
        let mut graph = LocationGraph::new();
        for (id, score) in [
            ("s", 3),
            ("m", 2),
            ("g1", 2),
            ("g2", 2),
            ("g3", 2),
            ("g4", 2),
            ("hot2", 9),
            ("hotwall", 9),
        ] {
            add(&mut graph, id, score);
        }
        for (x, y) in [
            ("s", "m"),
            ("s", "g1"),
            ("s", "g2"),
            ("s", "g3"),
            ("s", "g4"),
            ("s", "hot2"),
            ("hot2", "hotwall"),
        ] {
            connect(&mut graph, x, y);
        }

        let mut evader =
            RiskAverseEvader::new(LocationId::from("s"), Target::mid(LocationId::from("m")));
        let mut cop = Pursuer::new(LocationId::from("hotwall"));
        let mut rng = SmallRng::seed_from_u64(7);

        let report = run_game(&mut evader, &mut cop, &graph, &mut rng).unwrap();
        assert_eq!(report.winner, Winner::Robber);
        assert_eq!(report.end_reason, EndReason::Escaped);
        // The waypoint was visited before the final leg.
        assert_eq!(report.robber_path.get(1), Some(&LocationId::from("m")));
        assert!(report.robber_path.len() > 2);
        assert_eq!(report.cop_path, ids(&["hotwall"]));
    }

    #[test]
    fn capture_on_the_waypoint_hop_beats_retargeting() {
        // Both agents land on the waypoint m on the first turn: the
        // evader arrives at its mid-stage target while the cop, adjacent
        // to m and in its low-risk phase, steps onto it. The capture must
        // end the game before any retargeting happens.
        let mut graph = LocationGraph::new();
        add(&mut graph, "s", 3);
        add(&mut graph, "m", 2);
        add(&mut graph, "p", 5);
        add(&mut graph, "f", 2);
        connect(&mut graph, "s", "m");
        connect(&mut graph, "p", "m");
        connect(&mut graph, "s", "f");

        let mut evader =
            RiskAverseEvader::new(LocationId::from("s"), Target::mid(LocationId::from("m")));
        let mut cop = Pursuer::new(LocationId::from("p"));
        let mut rng = SmallRng::seed_from_u64(11);

        let report = run_game(&mut evader, &mut cop, &graph, &mut rng).unwrap();
        assert_eq!(report.end_reason, EndReason::Captured);
        assert_eq!(report.winner, Winner::Cop);
        assert_eq!(report.robber_path, ids(&["s", "m"]));
        assert_eq!(report.cop_path, ids(&["p", "m"]));
    }

    #[test]
    fn retargeting_a_single_stage_policy_is_an_error() {
        // A distance-minimizing evader handed a mid-stage target reaches
        // it and then cannot retarget.
        let mut graph = LocationGraph::new();
        add(&mut graph, "s", 3);
        add(&mut graph, "m", 2);
        for id in ["q1", "q2", "q3", "q4", "q5"] {
            add(&mut graph, id, 2);
        }
        connect(&mut graph, "s", "m");

        let mut evader =
            ShortestPathEvader::new(LocationId::from("s"), Target::mid(LocationId::from("m")));
        let mut cop = Pursuer::new(LocationId::from("q1"));
        let mut rng = SmallRng::seed_from_u64(3);

        let err = run_game(&mut evader, &mut cop, &graph, &mut rng).unwrap_err();
        assert_eq!(err, GameError::RetargetUnsupported);
    }

    // -----------------------------------------------------------------------
    // Path exhaustion
    // -----------------------------------------------------------------------

    /// Test-only policy that walks a fixed script regardless of target.
    #[derive(Debug)]
    struct ScriptedEvader {
        location: LocationId,
        target: Target,
        move_count: u32,
        script: Vec<LocationId>,
    }

    impl Evader for ScriptedEvader {
        fn location(&self) -> &LocationId {
            &self.location
        }
        fn move_count(&self) -> u32 {
            self.move_count
        }
        fn move_limit(&self) -> u32 {
            20
        }
        fn target(&self) -> &Target {
            &self.target
        }
        fn advance_to(&mut self, location: LocationId) {
            self.location = location;
        }
        fn increment_moves(&mut self) {
            self.move_count += 1;
        }
        fn set_target(&mut self, target: Target) -> Result<(), GameError> {
            self.target = target;
            Ok(())
        }
        fn next_path(&self, _graph: &LocationGraph) -> Result<Vec<LocationId>, GameError> {
            Ok(self.script.clone())
        }
    }

    #[test]
    fn a_path_that_stops_short_of_the_target_is_exhausted() {
        let mut graph = LocationGraph::new();
        add(&mut graph, "s", 3);
        add(&mut graph, "a", 4);
        add(&mut graph, "z", 2);
        add(&mut graph, "p", 5);
        connect(&mut graph, "s", "a");

        let mut evader = ScriptedEvader {
            location: LocationId::from("s"),
            target: Target::end(LocationId::from("z")),
            move_count: 0,
            script: vec![LocationId::from("a")],
        };
        let mut cop = Pursuer::new(LocationId::from("p"));
        let mut rng = SmallRng::seed_from_u64(1);

        let report = run_game(&mut evader, &mut cop, &graph, &mut rng).unwrap();
        assert_eq!(report.end_reason, EndReason::PathExhausted);
        assert_eq!(report.winner, Winner::Cop);
        assert_eq!(report.robber_path, ids(&["s", "a"]));
    }
}
