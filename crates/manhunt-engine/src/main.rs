//! Simulation binary for the Manhunt pursuit game.
//!
//! This is the entry point that wires the pieces together: it loads
//! configuration, builds a freshly randomized city graph from the
//! location dataset for every game, places the agents, runs each game to
//! completion, and prints one JSON report per game followed by a batch
//! summary in the logs.
//!
//! # Startup Sequence
//!
//! 1. Initialize structured logging (tracing)
//! 2. Load configuration from `manhunt-config.yaml`
//! 3. Seed the master RNG (from config, or entropy)
//! 4. For each game: load the dataset, place agents, run the game
//! 5. Log the batch summary

mod error;

use std::path::Path;

use manhunt_core::config::GameConfig;
use manhunt_core::{SimulationConfig, initialize_game, run_game};
use manhunt_types::{EndReason, GameReport, Winner};
use manhunt_world::dataset::load_location_graph_from_path;
use manhunt_world::graph::LocationGraph;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::error::EngineError;

/// Win and termination tallies across one batch of games.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
struct BatchSummary {
    /// Games won by the pursuer.
    cop_wins: u32,
    /// Games won by the evader.
    robber_wins: u32,
    /// Games ending in an escape.
    escaped: u32,
    /// Games ending in a capture.
    captured: u32,
    /// Games ending at the move limit.
    move_limit: u32,
    /// Games ending with an exhausted path.
    path_exhausted: u32,
    /// Games ending with a cornered evader.
    cornered: u32,
}

impl BatchSummary {
    /// Fold one finished game into the tallies.
    fn record(&mut self, report: &GameReport) {
        match report.winner {
            Winner::Cop => self.cop_wins = self.cop_wins.saturating_add(1),
            Winner::Robber => self.robber_wins = self.robber_wins.saturating_add(1),
        }
        let slot = match report.end_reason {
            EndReason::Escaped => &mut self.escaped,
            EndReason::Captured => &mut self.captured,
            EndReason::MoveLimit => &mut self.move_limit,
            EndReason::PathExhausted => &mut self.path_exhausted,
            EndReason::Cornered => &mut self.cornered,
        };
        *slot = slot.saturating_add(1);
    }
}

/// Place the agents on the given graph and play one game to completion.
fn play_one(
    graph: &LocationGraph,
    game_config: &GameConfig,
    rng: &mut SmallRng,
) -> Result<GameReport, EngineError> {
    let (mut evader, mut pursuer) = initialize_game(
        graph,
        game_config.evader_policy,
        game_config.move_limit,
        rng,
    )?;
    Ok(run_game(evader.as_mut(), &mut pursuer, graph, rng)?)
}

/// Application entry point.
///
/// # Errors
///
/// Returns an error if configuration, dataset loading, or any game fails.
fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(true)
        .init();

    info!("manhunt-engine starting");

    let config = load_config()?;
    info!(
        games = config.run.games,
        seed = ?config.run.seed,
        policy = ?config.game.evader_policy,
        move_limit = config.game.move_limit,
        dataset = config.world.dataset_path,
        "configuration loaded"
    );

    let mut master = match config.run.seed {
        Some(seed) => SmallRng::seed_from_u64(seed),
        None => SmallRng::from_os_rng(),
    };

    let mut summary = BatchSummary::default();
    for game in 0..config.run.games {
        // Each game gets its own RNG stream so a run is reproducible
        // from the master seed alone.
        let game_seed: u64 = master.random();
        let mut rng = SmallRng::seed_from_u64(game_seed);

        let graph = load_location_graph_from_path(
            &config.world.dataset_path,
            &mut rng,
            config.world.randomize_iterations,
        )?;

        info!(game, game_seed, "starting game");
        let report = play_one(&graph, &config.game, &mut rng)?;
        println!("{}", serde_json::to_string(&report).map_err(EngineError::from)?);
        summary.record(&report);
    }

    info!(
        games = config.run.games,
        cop_wins = summary.cop_wins,
        robber_wins = summary.robber_wins,
        escaped = summary.escaped,
        captured = summary.captured,
        move_limit = summary.move_limit,
        path_exhausted = summary.path_exhausted,
        cornered = summary.cornered,
        "batch complete"
    );

    Ok(())
}

/// Load the simulation configuration from `manhunt-config.yaml`.
///
/// Looks for the config file relative to the current working directory
/// and falls back to defaults when it is absent.
fn load_config() -> Result<SimulationConfig, EngineError> {
    let config_path = Path::new("manhunt-config.yaml");
    if config_path.exists() {
        Ok(SimulationConfig::from_file(config_path)?)
    } else {
        info!("config file not found, using defaults");
        Ok(SimulationConfig::default())
    }
}
