//! First-class invariants for tic-tac-toe.
//!
//! Invariants are logical properties that must hold after every transition.
//! They are stated over the [`GameView`] read model, so they can be checked
//! against anything the engine hands to an observer, and tested on their own.

use super::engine::Phase;
use super::observer::GameView;
use super::types::Square;

/// A logical property that must hold for a given state.
pub trait Invariant<S> {
    /// Checks if the invariant holds for the given state.
    fn holds(state: &S) -> bool;

    /// Human-readable description of the invariant.
    fn description() -> &'static str;
}

/// Violation of an invariant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvariantViolation {
    /// Description of the violated invariant.
    pub description: String,
}

impl InvariantViolation {
    /// Creates a new invariant violation.
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
        }
    }
}

/// A set of invariants checked together; implemented for tuples.
pub trait InvariantSet<S> {
    /// Returns every violated invariant, or `Ok(())` if all hold.
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>>;
}

macro_rules! impl_invariant_set {
    ($($inv:ident),+) => {
        impl<S, $($inv),+> InvariantSet<S> for ($($inv,)+)
        where
            $($inv: Invariant<S>,)+
        {
            fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
                let mut violations = Vec::new();
                $(
                    if !$inv::holds(state) {
                        violations.push(InvariantViolation::new($inv::description()));
                    }
                )+
                if violations.is_empty() {
                    Ok(())
                } else {
                    Err(violations)
                }
            }
        }
    };
}

impl_invariant_set!(I1, I2);
impl_invariant_set!(I1, I2, I3);
impl_invariant_set!(I1, I2, I3, I4);
impl_invariant_set!(I1, I2, I3, I4, I5);

/// A winning line is recorded exactly when the game is won.
pub struct WinningLineIffWon;

impl Invariant<GameView> for WinningLineIffWon {
    fn holds(view: &GameView) -> bool {
        view.winning_line.is_some() == (view.phase == Phase::Won)
    }

    fn description() -> &'static str {
        "Winning line is present if and only if the game is won"
    }
}

/// Every cell of the winning line holds the winner's symbol.
pub struct WinningLineHeldByWinner;

impl Invariant<GameView> for WinningLineHeldByWinner {
    fn holds(view: &GameView) -> bool {
        let Some(line) = view.winning_line else {
            return true;
        };
        let Some(winner) = view.players.get(view.current_player) else {
            return false;
        };
        line.coords()
            .iter()
            .all(|&coord| view.square(coord) == Square::Occupied(winner.symbol()))
    }

    fn description() -> &'static str {
        "Winning line is held by the winner"
    }
}

/// The first player has made as many marks as the second, or one more.
pub struct AlternatingMarks;

impl Invariant<GameView> for AlternatingMarks {
    fn holds(view: &GameView) -> bool {
        let count = |index: usize| {
            view.players.get(index).map_or(0, |player| {
                view.board
                    .iter()
                    .flatten()
                    .filter(|&&square| square == Square::Occupied(player.symbol()))
                    .count()
            })
        };
        let (first, second) = (count(0), count(1));
        first == second || first == second + 1
    }

    fn description() -> &'static str {
        "Players alternate marks, first player leading by at most one"
    }
}

/// A tie only happens on a full board.
pub struct TiedBoardIsFull;

impl Invariant<GameView> for TiedBoardIsFull {
    fn holds(view: &GameView) -> bool {
        view.phase != Phase::Tied || view.board.iter().flatten().all(|square| !square.is_empty())
    }

    fn description() -> &'static str {
        "A tied game has a full board"
    }
}

/// Only empty cells are offered, and only while a human is to move.
pub struct AvailableCellsAreOpen;

impl Invariant<GameView> for AvailableCellsAreOpen {
    fn holds(view: &GameView) -> bool {
        if view.available.is_empty() {
            return true;
        }
        let human_to_move = view
            .players
            .get(view.current_player)
            .is_some_and(|player| !player.is_automatic());
        view.phase == Phase::Playing
            && human_to_move
            && view.available.iter().all(|&coord| view.square(coord).is_empty())
    }

    fn description() -> &'static str {
        "Available cells are empty and offered only on a human turn"
    }
}

/// Everything checked after each engine transition.
pub type ViewInvariants = (
    WinningLineIffWon,
    WinningLineHeldByWinner,
    AlternatingMarks,
    TiedBoardIsFull,
    AvailableCellsAreOpen,
);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::tictactoe::{Coord, GameMode, PlayerRegistry, TurnEngine};
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn playing_view() -> GameView {
        let mut engine = TurnEngine::new(
            PlayerRegistry::standard(GameMode::HumanVsHuman),
            StdRng::seed_from_u64(1),
        );
        engine.start();
        engine.view()
    }

    #[test]
    fn test_fresh_game_satisfies_all() {
        assert_eq!(ViewInvariants::check_all(&playing_view()), Ok(()));
    }

    #[test]
    fn test_phase_without_line_is_caught() {
        let mut view = playing_view();
        view.phase = Phase::Won;
        let violations = ViewInvariants::check_all(&view).unwrap_err();
        assert_eq!(violations.len(), 2);
        assert_eq!(violations[0].description, WinningLineIffWon::description());
    }

    #[test]
    fn test_unbalanced_marks_are_caught() {
        let mut view = playing_view();
        view.board[0][0] = Square::Occupied('O'.into());
        assert!(!AlternatingMarks::holds(&view));
        view.board[1][1] = Square::Occupied('X'.into());
        assert!(AlternatingMarks::holds(&view));
    }

    #[test]
    fn test_tie_requires_full_board() {
        let mut view = playing_view();
        view.phase = Phase::Tied;
        view.available.clear();
        assert!(!TiedBoardIsFull::holds(&view));
    }

    #[test]
    fn test_occupied_available_cell_is_caught() {
        let mut view = playing_view();
        let coord = Coord::new(2, 2).unwrap();
        view.board[2][2] = Square::Occupied('X'.into());
        assert!(view.is_available(coord));
        assert!(!AvailableCellsAreOpen::holds(&view));
    }
}
