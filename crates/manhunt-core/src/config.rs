//! Configuration loading and typed config structures for the simulation.
//!
//! The canonical configuration lives in `manhunt-config.yaml` at the
//! project root. This module defines strongly-typed structs that mirror
//! the YAML structure, and provides a loader that reads the file. Every
//! field has a default, so a missing or partial file still produces a
//! runnable configuration.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::evader::DEFAULT_MOVE_LIMIT;

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Failed to read the configuration file from disk.
    #[error("failed to read config file: {source}")]
    Io {
        /// The underlying I/O error.
        #[from]
        source: std::io::Error,
    },

    /// Failed to parse YAML content.
    #[error("failed to parse config YAML: {source}")]
    Yaml {
        /// The underlying YAML parse error.
        source: serde_yml::Error,
    },
}

impl From<serde_yml::Error> for ConfigError {
    fn from(source: serde_yml::Error) -> Self {
        Self::Yaml { source }
    }
}

/// Which path-planning policy the evader uses.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EvaderPolicy {
    /// Minimize risky vertices along the path; two-stage objectives.
    #[default]
    RiskAverse,
    /// Minimize path length; a single end-stage objective.
    ShortestPath,
}

/// Top-level simulation configuration.
///
/// Mirrors the structure of `manhunt-config.yaml`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct SimulationConfig {
    /// Per-game rules (move limit, evader policy).
    #[serde(default)]
    pub game: GameConfig,

    /// City graph settings (dataset path, randomization).
    #[serde(default)]
    pub world: WorldConfig,

    /// Batch run settings (game count, seed).
    #[serde(default)]
    pub run: RunConfig,
}

impl SimulationConfig {
    /// Load configuration from a YAML file at the given path.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Io`] if the file cannot be read, or
    /// [`ConfigError::Yaml`] if the content is not valid YAML.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Ok(serde_yml::from_str(&contents)?)
    }

    /// Parse configuration from a YAML string.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Yaml`] if the string is not valid YAML.
    pub fn parse(yaml: &str) -> Result<Self, ConfigError> {
        Ok(serde_yml::from_str(yaml)?)
    }
}

/// Per-game rules.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct GameConfig {
    /// Evader moves allowed before the pursuer wins by timeout.
    #[serde(default = "default_move_limit")]
    pub move_limit: u32,

    /// Which planning policy the evader uses.
    #[serde(default)]
    pub evader_policy: EvaderPolicy,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            move_limit: default_move_limit(),
            evader_policy: EvaderPolicy::default(),
        }
    }
}

/// City graph settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct WorldConfig {
    /// Path to the CSV location dataset.
    #[serde(default = "default_dataset_path")]
    pub dataset_path: String,

    /// Random-walk iterations used to wire the graph's edges.
    #[serde(default = "default_randomize_iterations")]
    pub randomize_iterations: u32,
}

impl Default for WorldConfig {
    fn default() -> Self {
        Self {
            dataset_path: default_dataset_path(),
            randomize_iterations: default_randomize_iterations(),
        }
    }
}

/// Batch run settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RunConfig {
    /// Number of games to play in one invocation.
    #[serde(default = "default_games")]
    pub games: u32,

    /// Seed for reproducible runs; `None` seeds from entropy.
    #[serde(default)]
    pub seed: Option<u64>,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            games: default_games(),
            seed: None,
        }
    }
}

// ---------------------------------------------------------------------------
// Default value functions (serde default requires named functions)
// ---------------------------------------------------------------------------

const fn default_move_limit() -> u32 {
    DEFAULT_MOVE_LIMIT
}

fn default_dataset_path() -> String {
    "data/locations.csv".to_owned()
}

const fn default_randomize_iterations() -> u32 {
    manhunt_world::DEFAULT_RANDOMIZE_ITERATIONS
}

const fn default_games() -> u32 {
    1
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        let config = SimulationConfig::default();
        assert_eq!(config.game.move_limit, 20);
        assert_eq!(config.game.evader_policy, EvaderPolicy::RiskAverse);
        assert_eq!(config.world.randomize_iterations, 300);
        assert_eq!(config.run.games, 1);
        assert_eq!(config.run.seed, None);
    }

    #[test]
    fn parse_full_yaml() {
        let yaml = r#"
game:
  move_limit: 35
  evader_policy: shortest_path

world:
  dataset_path: "fixtures/queens.csv"
  randomize_iterations: 150

run:
  games: 50
  seed: 99
"#;

        let config = SimulationConfig::parse(yaml).unwrap();
        assert_eq!(config.game.move_limit, 35);
        assert_eq!(config.game.evader_policy, EvaderPolicy::ShortestPath);
        assert_eq!(config.world.dataset_path, "fixtures/queens.csv");
        assert_eq!(config.world.randomize_iterations, 150);
        assert_eq!(config.run.games, 50);
        assert_eq!(config.run.seed, Some(99));
    }

    #[test]
    fn parse_minimal_yaml() {
        let yaml = "run:\n  seed: 7\n";
        let config = SimulationConfig::parse(yaml).unwrap();

        // Seed is overridden; everything else uses defaults.
        assert_eq!(config.run.seed, Some(7));
        assert_eq!(config.run.games, 1);
        assert_eq!(config.game.move_limit, 20);
        assert_eq!(config.world.dataset_path, "data/locations.csv");
    }

    #[test]
    fn parse_empty_yaml() {
        assert!(SimulationConfig::parse("").is_ok());
    }

    #[test]
    fn unknown_policy_is_rejected() {
        let yaml = "game:\n  evader_policy: reckless\n";
        assert!(SimulationConfig::parse(yaml).is_err());
    }
}
