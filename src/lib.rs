//! Tic-tac-toe turn engine with random-move computer players.
//!
//! The engine owns the board and the turn order; hosts drive it through a
//! [`GameSession`] and watch it through [`GameObserver`]s.
//!
//! # Architecture
//!
//! - **Board**: 3x3 grid addressed by validated [`Coord`]s
//! - **Rules**: pure win detection over a fixed table of lines
//! - **Engine**: phases, turn order and the computer's move chain
//! - **Session**: new-game and cell-selection commands for a host
//! - **Terminal**: text and JSON renderers for the bundled binary
//!
//! # Example
//!
//! ```
//! use tictactoe_engine::{Coord, GameConfig, GameMode, GameSession, Phase};
//!
//! # fn example() -> anyhow::Result<()> {
//! let config = GameConfig::default().with_seed(Some(7));
//! let mut session = GameSession::new(config)?;
//! session.new_game(GameMode::HumanVsComputer)?;
//!
//! // The computer answers before select_cell returns.
//! let phase = session.select_cell(Coord::new(1, 1).expect("on the board"))?;
//! assert_eq!(phase, Phase::Playing);
//! assert_eq!(session.view().available.len(), 7);
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod config;
mod games;
mod session;

pub mod terminal;

// Crate-level exports - Configuration
pub use config::{ConfigError, GameConfig, PlayerConfig};

// Crate-level exports - Session management
pub use session::GameSession;

// Crate-level exports - Game types (tic-tac-toe)
pub use games::tictactoe::{
    Board, Coord, DEFAULT_AUTO_MOVE_LIMIT, GameMode, GameObserver, GameState, GameStatus,
    GameView, LineKind, MoveError, ParseCoordError, Phase, Player, PlayerRegistry, RegistryError,
    SIZE, Square, Symbol, TurnEngine, WinningLine, find_winning_line, invariants,
};
