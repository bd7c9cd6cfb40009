//! Start placement and agent construction for one game.
//!
//! Both agents start on the busiest vertices of the graph: the evader on
//! the highest-degree vertex, the pursuer on the runner-up. The evader's
//! opening objective is drawn at random from the rest of the graph; its
//! stage depends on the policy, since only the risk-minimizing evader
//! can play a two-stage game.

use std::collections::BTreeSet;

use manhunt_types::Stage;
use manhunt_world::graph::LocationGraph;
use rand::Rng;
use tracing::info;

use crate::config::EvaderPolicy;
use crate::error::GameError;
use crate::evader::{Evader, RiskAverseEvader, ShortestPathEvader};
use crate::pursuer::Pursuer;
use crate::target::choose_target;

/// Place both agents and draw the evader's opening target.
///
/// The risk-minimizing policy receives a mid-stage target and retargets
/// when it arrives; the distance-minimizing policy is single-stage, so
/// its opening target is already end-stage.
///
/// # Errors
///
/// Returns [`GameError::GraphTooSmall`] if the graph cannot seat two
/// agents, and [`GameError::NoTargetAvailable`] if no opening target can
/// be drawn.
pub fn initialize_game(
    graph: &LocationGraph,
    policy: EvaderPolicy,
    move_limit: u32,
    rng: &mut impl Rng,
) -> Result<(Box<dyn Evader>, Pursuer), GameError> {
    let Some((evader_start, pursuer_start)) = graph.busiest_pair() else {
        return Err(GameError::GraphTooSmall {
            vertices: graph.vertex_count(),
        });
    };

    let stage = match policy {
        EvaderPolicy::RiskAverse => Stage::Mid,
        EvaderPolicy::ShortestPath => Stage::End,
    };
    let target = choose_target(graph, &evader_start, &BTreeSet::new(), stage, rng).ok_or_else(
        || GameError::NoTargetAvailable {
            near: evader_start.clone(),
        },
    )?;

    info!(
        evader = %evader_start,
        pursuer = %pursuer_start,
        target = %target.location,
        ?policy,
        "agents placed"
    );

    let pursuer = Pursuer::new(pursuer_start);
    let evader: Box<dyn Evader> = match policy {
        EvaderPolicy::RiskAverse => Box::new(RiskAverseEvader::with_move_limit(
            evader_start,
            target,
            move_limit,
        )),
        EvaderPolicy::ShortestPath => Box::new(ShortestPathEvader::with_move_limit(
            evader_start,
            target,
            move_limit,
        )),
    };
    Ok((evader, pursuer))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use manhunt_types::{LocationId, LocationKind};
    use rand::SeedableRng;
    use rand::rngs::SmallRng;

    use super::*;

    fn hub_graph() -> LocationGraph {
        // "hub" has degree 3, "mid" degree 2, the rest degree 1.
        let mut graph = LocationGraph::new();
        for id in ["hub", "mid", "a", "b", "far"] {
            graph.add_vertex(LocationId::from(id), LocationKind::Park, 3);
        }
        for (x, y) in [("hub", "mid"), ("hub", "a"), ("hub", "b"), ("mid", "far")] {
            graph
                .add_edge(&LocationId::from(x), &LocationId::from(y))
                .unwrap();
        }
        graph
    }

    #[test]
    fn agents_start_on_the_busiest_vertices() {
        let graph = hub_graph();
        let mut rng = SmallRng::seed_from_u64(4);

        let (evader, pursuer) =
            initialize_game(&graph, EvaderPolicy::RiskAverse, 20, &mut rng).unwrap();
        assert_eq!(evader.location(), &LocationId::from("hub"));
        assert_eq!(pursuer.location(), &LocationId::from("mid"));
        assert_eq!(evader.move_limit(), 20);
    }

    #[test]
    fn opening_target_stage_follows_the_policy() {
        let graph = hub_graph();

        let mut rng = SmallRng::seed_from_u64(4);
        let (evader, _) = initialize_game(&graph, EvaderPolicy::RiskAverse, 20, &mut rng).unwrap();
        assert_eq!(evader.target().stage, Stage::Mid);

        let mut rng = SmallRng::seed_from_u64(4);
        let (evader, _) = initialize_game(&graph, EvaderPolicy::ShortestPath, 20, &mut rng).unwrap();
        assert_eq!(evader.target().stage, Stage::End);
    }

    #[test]
    fn opening_target_is_not_a_neighbour_of_the_start() {
        let graph = hub_graph();
        for seed in 0..32 {
            let mut rng = SmallRng::seed_from_u64(seed);
            if let Ok((evader, _)) = initialize_game(&graph, EvaderPolicy::RiskAverse, 20, &mut rng)
            {
                let neighbours = graph.neighbours_of(&LocationId::from("hub")).unwrap();
                assert!(!neighbours.contains(&evader.target().location));
            }
        }
    }

    #[test]
    fn tiny_graph_is_rejected() {
        let mut graph = LocationGraph::new();
        graph.add_vertex(LocationId::from("only"), LocationKind::Park, 3);
        let mut rng = SmallRng::seed_from_u64(4);

        let err = initialize_game(&graph, EvaderPolicy::RiskAverse, 20, &mut rng).unwrap_err();
        assert_eq!(err, GameError::GraphTooSmall { vertices: 1 });
    }
}
