//! Read model handed to the presentation layer after every transition.

use super::engine::Phase;
use super::players::Player;
use super::position::Coord;
use super::rules::WinningLine;
use super::types::Square;
use serde::Serialize;
use std::sync::mpsc;
use tracing::warn;

/// Everything a view needs to draw the game.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GameView {
    /// Current phase.
    pub phase: Phase,
    /// Seat index of the active player (the winner once won).
    pub current_player: usize,
    /// Name of the active player (the winner once won).
    pub current_player_name: String,
    /// Winner's name, only when won.
    pub winner_name: Option<String>,
    /// Squares indexed `[y][x]`.
    pub board: [[Square; 3]; 3],
    /// Completed line, only when won.
    pub winning_line: Option<WinningLine>,
    /// Both players in turn order.
    pub players: Vec<Player>,
    /// Cells a user may select right now. Empty unless a human is to move.
    pub available: Vec<Coord>,
}

impl GameView {
    /// Square at `coord`.
    pub fn square(&self, coord: Coord) -> Square {
        self.board[usize::from(coord.y())][usize::from(coord.x())]
    }

    /// True if a user may select `coord`.
    pub fn is_available(&self, coord: Coord) -> bool {
        self.available.contains(&coord)
    }

    /// True if `coord` belongs to the winning line.
    pub fn is_winning_cell(&self, coord: Coord) -> bool {
        self.winning_line
            .is_some_and(|line| line.contains(coord))
    }

    /// One-line status for a header or prompt.
    pub fn status_line(&self) -> String {
        match self.phase {
            Phase::Playing => format!("{}'s Turn", self.current_player_name),
            Phase::Won => format!(
                "Game over! {} wins",
                self.winner_name
                    .as_deref()
                    .unwrap_or(&self.current_player_name)
            ),
            Phase::Tied => "Game over! It's a tie".to_string(),
        }
    }
}

/// Receives a fresh [`GameView`] after every state change.
pub trait GameObserver {
    /// Called once per transition: start, and every applied mark.
    fn on_state_changed(&mut self, view: &GameView);
}

impl GameObserver for mpsc::Sender<GameView> {
    fn on_state_changed(&mut self, view: &GameView) {
        if self.send(view.clone()).is_err() {
            warn!("Observer channel closed; dropping view");
        }
    }
}
