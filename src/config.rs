//! Game configuration loaded from TOML.

use crate::games::tictactoe::{
    DEFAULT_AUTO_MOVE_LIMIT, GameMode, PlayerRegistry, RegistryError, Symbol,
};
use derive_getters::Getters;
use derive_more::{Display, Error};
use rand::SeedableRng;
use rand::rngs::StdRng;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info, instrument};

/// Name and symbol for one seat.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct PlayerConfig {
    /// Display name.
    name: String,

    /// Mark symbol, a single character.
    symbol: char,
}

impl PlayerConfig {
    /// Creates a seat configuration.
    pub fn new(name: impl Into<String>, symbol: char) -> Self {
        Self {
            name: name.into(),
            symbol,
        }
    }
}

/// Configuration for a game session.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct GameConfig {
    /// Both seats, in turn order.
    #[serde(default = "default_players")]
    players: [PlayerConfig; 2],

    /// Mode used when a session starts without an explicit choice.
    #[serde(default)]
    mode: GameMode,

    /// Seed for the computer's random source; entropy when absent.
    #[serde(default)]
    seed: Option<u64>,

    /// Computer moves one command may chain before the engine stops.
    #[serde(default = "default_auto_move_limit")]
    auto_move_limit: usize,
}

#[instrument]
fn default_players() -> [PlayerConfig; 2] {
    [
        PlayerConfig::new("Player 1", 'X'),
        PlayerConfig::new("Player 2", 'O'),
    ]
}

#[instrument]
fn default_auto_move_limit() -> usize {
    DEFAULT_AUTO_MOVE_LIMIT
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            players: default_players(),
            mode: GameMode::default(),
            seed: None,
            auto_move_limit: default_auto_move_limit(),
        }
    }
}

impl GameConfig {
    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config = Self::from_toml_str(&content)?;
        info!(mode = %config.mode, seeded = config.seed.is_some(), "Config loaded successfully");
        Ok(config)
    }

    /// Parses and validates configuration from TOML text.
    #[instrument(skip(content))]
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    /// Checks the settings can build a game.
    #[instrument(skip(self))]
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.auto_move_limit == 0 {
            return Err(ConfigError::new(
                "auto_move_limit must be at least 1".to_string(),
            ));
        }
        self.registry(self.mode).map(|_| ())
    }

    /// Overrides the default mode.
    pub fn with_mode(mut self, mode: GameMode) -> Self {
        self.mode = mode;
        self
    }

    /// Overrides the random seed.
    pub fn with_seed(mut self, seed: Option<u64>) -> Self {
        self.seed = seed;
        self
    }

    /// Overrides the automatic move limit.
    pub fn with_auto_move_limit(mut self, limit: usize) -> Self {
        self.auto_move_limit = limit;
        self
    }

    /// Builds the player registry for `mode` from the configured seats.
    #[instrument(skip(self))]
    pub fn registry(&self, mode: GameMode) -> Result<PlayerRegistry, ConfigError> {
        let [first, second] = &self.players;
        Ok(PlayerRegistry::for_mode(
            mode,
            [first.name.clone(), second.name.clone()],
            [Symbol::new(first.symbol), Symbol::new(second.symbol)],
        )?)
    }

    /// Random source for automatic players.
    #[instrument(skip(self), fields(seed = ?self.seed))]
    pub fn rng(&self) -> StdRng {
        match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        }
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}

impl From<RegistryError> for ConfigError {
    #[track_caller]
    fn from(err: RegistryError) -> Self {
        Self::new(format!("Invalid players: {}", err.message))
    }
}
