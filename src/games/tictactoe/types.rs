//! Core domain types for tic-tac-toe.

use super::position::{Coord, SIZE};
use derive_more::Display;
use serde::{Deserialize, Serialize};
use std::fmt;

/// The single character a player marks cells with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display)]
#[serde(transparent)]
pub struct Symbol(char);

impl Symbol {
    /// Wraps a character as a mark symbol.
    pub const fn new(symbol: char) -> Self {
        Self(symbol)
    }

    /// Returns the character.
    pub fn as_char(self) -> char {
        self.0
    }
}

impl From<char> for Symbol {
    fn from(symbol: char) -> Self {
        Self(symbol)
    }
}

/// A square on the tic-tac-toe board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Square {
    /// Empty square.
    #[default]
    Empty,
    /// Square marked by a player.
    Occupied(Symbol),
}

impl Square {
    /// True if no player has marked this square.
    pub fn is_empty(self) -> bool {
        matches!(self, Square::Empty)
    }
}

/// 3x3 tic-tac-toe board.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Board {
    /// Squares indexed `[y][x]`.
    rows: [[Square; 3]; 3],
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self::default()
    }

    /// Empties every square.
    pub fn reset(&mut self) {
        self.rows = [[Square::Empty; 3]; 3];
    }

    /// Gets the square at the given coordinate.
    pub fn get(&self, coord: Coord) -> Square {
        self.rows[usize::from(coord.y())][usize::from(coord.x())]
    }

    /// Overwrites the square at the given coordinate.
    pub fn set(&mut self, coord: Coord, square: Square) {
        self.rows[usize::from(coord.y())][usize::from(coord.x())] = square;
    }

    /// Checks if a square is empty.
    pub fn is_empty(&self, coord: Coord) -> bool {
        self.get(coord).is_empty()
    }

    /// Coordinates of all empty squares, row by row.
    pub fn empty_cells(&self) -> Vec<Coord> {
        Coord::ALL
            .iter()
            .copied()
            .filter(|&coord| self.is_empty(coord))
            .collect()
    }

    /// True once every square is marked.
    pub fn is_full(&self) -> bool {
        self.rows.iter().flatten().all(|square| !square.is_empty())
    }

    /// Number of squares marked with `symbol`.
    pub fn count(&self, symbol: Symbol) -> usize {
        self.rows
            .iter()
            .flatten()
            .filter(|&&square| square == Square::Occupied(symbol))
            .count()
    }

    /// Snapshot of the squares, indexed `[y][x]`.
    pub fn rows(&self) -> [[Square; 3]; 3] {
        self.rows
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (y, row) in self.rows.iter().enumerate() {
            for (x, square) in row.iter().enumerate() {
                match square {
                    Square::Empty => write!(f, "{}", y * usize::from(SIZE) + x + 1)?,
                    Square::Occupied(symbol) => write!(f, "{symbol}")?,
                }
                if x + 1 < row.len() {
                    write!(f, "|")?;
                }
            }
            if y + 1 < self.rows.len() {
                write!(f, "\n-+-+-\n")?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const X: Symbol = Symbol::new('X');
    const O: Symbol = Symbol::new('O');

    #[test]
    fn test_new_board_is_empty() {
        let board = Board::new();
        assert_eq!(board.empty_cells().len(), 9);
        assert!(!board.is_full());
    }

    #[test]
    fn test_set_and_get() {
        let mut board = Board::new();
        board.set(Coord::at(2, 0), Square::Occupied(X));
        assert_eq!(board.get(Coord::at(2, 0)), Square::Occupied(X));
        assert_eq!(board.get(Coord::at(0, 2)), Square::Empty);
        assert_eq!(board.rows()[0][2], Square::Occupied(X));
    }

    #[test]
    fn test_empty_cells_row_major() {
        let mut board = Board::new();
        board.set(Coord::at(0, 0), Square::Occupied(X));
        board.set(Coord::at(1, 1), Square::Occupied(O));

        let empty = board.empty_cells();
        assert_eq!(empty.len(), 7);
        assert_eq!(empty[0], Coord::at(1, 0));
        assert_eq!(empty[2], Coord::at(0, 1));
        assert!(!empty.contains(&Coord::at(1, 1)));
    }

    #[test]
    fn test_full_and_reset() {
        let mut board = Board::new();
        for coord in Coord::ALL {
            board.set(coord, Square::Occupied(X));
        }
        assert!(board.is_full());
        assert_eq!(board.count(X), 9);

        board.reset();
        assert!(!board.is_full());
        assert_eq!(board.count(X), 0);
    }

    #[test]
    fn test_display() {
        let mut board = Board::new();
        board.set(Coord::at(0, 0), Square::Occupied(X));
        board.set(Coord::at(2, 2), Square::Occupied(O));
        assert_eq!(board.to_string(), "X|2|3\n-+-+-\n4|5|6\n-+-+-\n7|8|O");
    }
}
