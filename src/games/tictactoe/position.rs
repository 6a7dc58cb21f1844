//! Board coordinates for tic-tac-toe.

use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use tracing::instrument;

/// Side length of the board.
pub const SIZE: u8 = 3;

/// Human-readable labels in row-major order.
const LABELS: [&str; 9] = [
    "top-left",
    "top-center",
    "top-right",
    "middle-left",
    "center",
    "middle-right",
    "bottom-left",
    "bottom-center",
    "bottom-right",
];

/// A cell on the 3x3 board.
///
/// `x` is the column (0 = left), `y` is the row (0 = top). Both are always
/// below [`SIZE`]: [`Coord::new`] refuses anything else, so board access
/// never needs a bounds check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, Display)]
#[serde(try_from = "(u8, u8)", into = "(u8, u8)")]
#[display("({x}, {y})")]
pub struct Coord {
    x: u8,
    y: u8,
}

impl Coord {
    /// All nine cells, row by row.
    pub const ALL: [Coord; 9] = [
        Coord::at(0, 0),
        Coord::at(1, 0),
        Coord::at(2, 0),
        Coord::at(0, 1),
        Coord::at(1, 1),
        Coord::at(2, 1),
        Coord::at(0, 2),
        Coord::at(1, 2),
        Coord::at(2, 2),
    ];

    /// Creates a coordinate, or `None` if either axis is off the board.
    pub fn new(x: u8, y: u8) -> Option<Self> {
        (x < SIZE && y < SIZE).then_some(Self { x, y })
    }

    /// Compile-time constructor for the line tables.
    pub(crate) const fn at(x: u8, y: u8) -> Self {
        assert!(x < SIZE && y < SIZE, "coordinate off the board");
        Self { x, y }
    }

    /// Column, 0 = left.
    pub fn x(self) -> u8 {
        self.x
    }

    /// Row, 0 = top.
    pub fn y(self) -> u8 {
        self.y
    }

    /// Row-major index (0-8).
    pub fn index(self) -> usize {
        usize::from(self.y * SIZE + self.x)
    }

    /// Inverse of [`Coord::index`].
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Label for display, e.g. `"top-left"`.
    pub fn label(self) -> &'static str {
        LABELS[self.index()]
    }
}

/// Input that does not name a cell.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
#[display("invalid cell '{input}': expected x,y (each 0-2), a number 1-9, or a label such as top-left")]
pub struct ParseCoordError {
    /// The rejected input.
    pub input: String,
}

impl ParseCoordError {
    fn new(input: &str) -> Self {
        Self {
            input: input.to_string(),
        }
    }
}

impl FromStr for Coord {
    type Err = ParseCoordError;

    /// Accepts `"x,y"`, a keypad-style number `1..=9` (row-major), or a label.
    #[instrument]
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();

        if let Some((x, y)) = trimmed.split_once(',') {
            let x = x.trim().parse::<u8>().map_err(|_| ParseCoordError::new(s))?;
            let y = y.trim().parse::<u8>().map_err(|_| ParseCoordError::new(s))?;
            return Coord::new(x, y).ok_or_else(|| ParseCoordError::new(s));
        }

        if let Ok(number) = trimmed.parse::<usize>() {
            return number
                .checked_sub(1)
                .and_then(Coord::from_index)
                .ok_or_else(|| ParseCoordError::new(s));
        }

        let label = trimmed.to_lowercase().replace([' ', '_'], "-");
        LABELS
            .iter()
            .position(|candidate| *candidate == label)
            .and_then(Coord::from_index)
            .ok_or_else(|| ParseCoordError::new(s))
    }
}

impl TryFrom<(u8, u8)> for Coord {
    type Error = ParseCoordError;

    fn try_from((x, y): (u8, u8)) -> Result<Self, Self::Error> {
        Coord::new(x, y).ok_or_else(|| ParseCoordError::new(&format!("{x},{y}")))
    }
}

impl From<Coord> for (u8, u8) {
    fn from(coord: Coord) -> Self {
        (coord.x, coord.y)
    }
}
