//! Players and the ordered registry that fixes turn order.

use super::types::Symbol;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument, warn};

/// Which seats are driven by the random-move computer.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum GameMode {
    /// Two people share the board.
    HumanVsHuman,
    /// The second seat is the computer.
    #[default]
    HumanVsComputer,
    /// Both seats are the computer.
    ComputerVsComputer,
}

impl GameMode {
    /// Automatic flag for each seat, in turn order.
    pub fn automatic_seats(self) -> [bool; 2] {
        match self {
            GameMode::HumanVsHuman => [false, false],
            GameMode::HumanVsComputer => [false, true],
            GameMode::ComputerVsComputer => [true, true],
        }
    }
}

/// A seat at the table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    name: String,
    symbol: Symbol,
    automatic: bool,
}

impl Player {
    /// Creates a player.
    pub fn new(name: impl Into<String>, symbol: impl Into<Symbol>, automatic: bool) -> Self {
        Self {
            name: name.into(),
            symbol: symbol.into(),
            automatic,
        }
    }

    /// A player whose moves come from the user.
    pub fn human(name: impl Into<String>, symbol: impl Into<Symbol>) -> Self {
        Self::new(name, symbol, false)
    }

    /// A player whose moves are picked at random.
    pub fn computer(name: impl Into<String>, symbol: impl Into<Symbol>) -> Self {
        Self::new(name, symbol, true)
    }

    /// Display name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Mark symbol.
    pub fn symbol(&self) -> Symbol {
        self.symbol
    }

    /// True if moves are chosen automatically.
    pub fn is_automatic(&self) -> bool {
        self.automatic
    }
}

/// The two players of a game, in turn order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlayerRegistry {
    players: [Player; 2],
}

impl PlayerRegistry {
    /// Creates a registry; `first` moves first.
    ///
    /// # Errors
    ///
    /// Fails if a name is blank, a symbol is whitespace, or both players
    /// share a symbol.
    #[instrument(skip_all, fields(first = %first.name, second = %second.name))]
    pub fn new(first: Player, second: Player) -> Result<Self, RegistryError> {
        for player in [&first, &second] {
            if player.name.trim().is_empty() {
                warn!("Rejected player with blank name");
                return Err(RegistryError::new("player names must not be blank"));
            }
            if player.symbol.as_char().is_whitespace() {
                warn!(player = %player.name, "Rejected whitespace symbol");
                return Err(RegistryError::new(format!(
                    "{} needs a visible symbol",
                    player.name
                )));
            }
        }
        if first.symbol == second.symbol {
            warn!(symbol = %first.symbol, "Rejected duplicate symbol");
            return Err(RegistryError::new(format!(
                "both players use the symbol '{}'",
                first.symbol
            )));
        }

        debug!("Player registry created");
        Ok(Self {
            players: [first, second],
        })
    }

    /// Builds the registry for `mode` from per-seat names and symbols.
    ///
    /// # Errors
    ///
    /// See [`PlayerRegistry::new`].
    #[instrument(skip(names, symbols))]
    pub fn for_mode(
        mode: GameMode,
        names: [String; 2],
        symbols: [Symbol; 2],
    ) -> Result<Self, RegistryError> {
        let [first_auto, second_auto] = mode.automatic_seats();
        let [first_name, second_name] = names;
        let [first_symbol, second_symbol] = symbols;
        Self::new(
            Player::new(first_name, first_symbol, first_auto),
            Player::new(second_name, second_symbol, second_auto),
        )
    }

    /// "Player 1" with X against "Player 2" with O.
    pub fn standard(mode: GameMode) -> Self {
        let [first_auto, second_auto] = mode.automatic_seats();
        Self {
            players: [
                Player::new("Player 1", 'X', first_auto),
                Player::new("Player 2", 'O', second_auto),
            ],
        }
    }

    /// The player in seat `index`, if it exists.
    pub fn get(&self, index: usize) -> Option<&Player> {
        self.players.get(index)
    }

    /// Both players in turn order.
    pub fn players(&self) -> &[Player] {
        &self.players
    }

    /// Number of seats (always two).
    pub fn len(&self) -> usize {
        self.players.len()
    }

    /// Always false; a registry has two seats.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Seat that moves after `index`, wrapping around.
    pub fn next_index(&self, index: usize) -> usize {
        (index + 1) % self.players.len()
    }

    /// Iterates players in turn order.
    pub fn iter(&self) -> impl Iterator<Item = &Player> {
        self.players.iter()
    }
}

/// Invalid player setup, with the location that raised it.
#[derive(Debug, Clone, Display, Error)]
#[display("Registry error: {} at {}:{}", message, file, line)]
pub struct RegistryError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl RegistryError {
    /// Creates a new registry error with caller location tracking.
    #[track_caller]
    pub fn new(message: impl Into<String>) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: loc.line(),
            file: loc.file(),
        }
    }
}
