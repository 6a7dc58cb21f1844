//! Win detection logic for tic-tac-toe.

use super::super::{Board, Coord, Square, Symbol};
use derive_more::Display;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Which of the eight lines a [`Line`] is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display)]
pub enum LineKind {
    /// Top-left to bottom-right.
    #[display("diagonal")]
    Diagonal,
    /// Top-right to bottom-left.
    #[display("anti-diagonal")]
    AntiDiagonal,
    /// A row, 0 = top.
    #[display("row {_0}")]
    Row(u8),
    /// A column, 0 = left.
    #[display("column {_0}")]
    Column(u8),
}

/// Three cells that win when they all hold the same symbol.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Line {
    /// Which line this is.
    pub kind: LineKind,
    /// Cells in scan order.
    pub cells: [Coord; 3],
}

impl Line {
    const fn row(y: u8) -> Self {
        Self {
            kind: LineKind::Row(y),
            cells: [Coord::at(0, y), Coord::at(1, y), Coord::at(2, y)],
        }
    }

    const fn column(x: u8) -> Self {
        Self {
            kind: LineKind::Column(x),
            cells: [Coord::at(x, 0), Coord::at(x, 1), Coord::at(x, 2)],
        }
    }

    /// True if every cell of the line holds `symbol`.
    pub fn is_filled_by(&self, board: &Board, symbol: Symbol) -> bool {
        self.cells
            .iter()
            .all(|&cell| board.get(cell) == Square::Occupied(symbol))
    }
}

/// Every winning line, in evaluation order: diagonal, anti-diagonal,
/// rows top to bottom, then columns left to right.
pub const LINES: [Line; 8] = [
    Line {
        kind: LineKind::Diagonal,
        cells: [Coord::at(0, 0), Coord::at(1, 1), Coord::at(2, 2)],
    },
    Line {
        kind: LineKind::AntiDiagonal,
        cells: [Coord::at(2, 0), Coord::at(1, 1), Coord::at(0, 2)],
    },
    Line::row(0),
    Line::row(1),
    Line::row(2),
    Line::column(0),
    Line::column(1),
    Line::column(2),
];

/// A completed line on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WinningLine {
    kind: LineKind,
    cells: [Coord; 3],
}

impl WinningLine {
    /// Which line was completed.
    pub fn kind(&self) -> LineKind {
        self.kind
    }

    /// The three winning coordinates, in scan order.
    pub fn coords(&self) -> [Coord; 3] {
        self.cells
    }

    /// True if `coord` is part of the line.
    pub fn contains(&self, coord: Coord) -> bool {
        self.cells.contains(&coord)
    }
}

impl From<&Line> for WinningLine {
    fn from(line: &Line) -> Self {
        Self {
            kind: line.kind,
            cells: line.cells,
        }
    }
}

/// Finds the first line completely held by `symbol`.
///
/// Only `symbol` is considered, so callers pass the mark just placed. When
/// several lines are complete the first in [`LINES`] order wins.
#[instrument(skip(board))]
pub fn find_winning_line(board: &Board, symbol: Symbol) -> Option<WinningLine> {
    let found = LINES
        .iter()
        .find(|line| line.is_filled_by(board, symbol))
        .map(WinningLine::from);

    if let Some(line) = &found {
        debug!(kind = %line.kind(), "Winning line found");
    }

    found
}
