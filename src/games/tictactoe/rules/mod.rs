//! Game rules for tic-tac-toe.
//!
//! Pure functions over a [`Board`](super::Board). Rules are kept apart from
//! board storage and from turn sequencing so each can be tested alone.

pub mod win;

pub use win::{LineKind, WinningLine, find_winning_line};
