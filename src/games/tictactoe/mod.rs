//! Tic-tac-toe: board, rules, players and the turn engine.

mod action;
mod engine;
pub mod invariants;
mod observer;
mod players;
mod position;
pub mod rules;
mod types;

pub use action::MoveError;
pub use engine::{DEFAULT_AUTO_MOVE_LIMIT, GameState, GameStatus, Phase, TurnEngine};
pub use observer::{GameObserver, GameView};
pub use players::{GameMode, Player, PlayerRegistry, RegistryError};
pub use position::{Coord, ParseCoordError, SIZE};
pub use rules::{LineKind, WinningLine, find_winning_line};
pub use types::{Board, Square, Symbol};
