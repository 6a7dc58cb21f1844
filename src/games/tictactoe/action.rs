//! Why a mark request was turned away.
//!
//! Rejections are ordinary outcomes, not failures: the engine leaves its
//! state untouched and the caller reports the cell as unavailable.

use super::engine::Phase;
use super::position::Coord;
use derive_more::Display;

/// A mark request the engine refused.
#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum MoveError {
    /// The game has already been won or tied.
    #[display("Game is already over ({_0})")]
    GameOver(Phase),

    /// The square at the coordinate is already marked.
    #[display("Square {_0} is already occupied")]
    SquareOccupied(Coord),

    /// The active seat is played by the computer.
    #[display("It's {_0}'s turn and they move automatically")]
    AutomaticTurn(String),
}

impl std::error::Error for MoveError {}
