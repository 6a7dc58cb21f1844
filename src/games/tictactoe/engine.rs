//! Turn engine for tic-tac-toe.
//!
//! The engine owns the board, the phase and whose turn it is. Every
//! command runs to completion before returning, including any chain of
//! computer moves it sets off, and observers see one [`GameView`] per
//! applied mark.

use super::action::MoveError;
use super::invariants::{InvariantSet, ViewInvariants};
use super::observer::{GameObserver, GameView};
use super::players::{Player, PlayerRegistry};
use super::position::Coord;
use super::rules::{WinningLine, find_winning_line};
use super::types::{Board, Square};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use serde::Serialize;
use std::fmt;
use tracing::{debug, error, info, instrument, warn};

/// Computer moves applied per command before the chain gives up.
pub const DEFAULT_AUTO_MOVE_LIMIT: usize = 10;

/// Stage of the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, strum::Display)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Phase {
    /// Moves are being accepted.
    Playing,
    /// The active player completed a line.
    Won,
    /// The board filled up with no line.
    Tied,
}

/// Phase together with its data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum GameStatus {
    /// Moves are being accepted.
    Playing,
    /// Won along the given line.
    Won(WinningLine),
    /// Board full, no line.
    Tied,
}

impl GameStatus {
    /// The phase without its data.
    pub fn phase(&self) -> Phase {
        match self {
            GameStatus::Playing => Phase::Playing,
            GameStatus::Won(_) => Phase::Won,
            GameStatus::Tied => Phase::Tied,
        }
    }

    /// The completed line, if won.
    pub fn winning_line(&self) -> Option<WinningLine> {
        match self {
            GameStatus::Won(line) => Some(*line),
            GameStatus::Playing | GameStatus::Tied => None,
        }
    }
}

/// Phase and turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct GameState {
    status: GameStatus,
    current: usize,
}

impl GameState {
    fn new() -> Self {
        Self {
            status: GameStatus::Playing,
            current: 0,
        }
    }

    /// Current phase.
    pub fn phase(&self) -> Phase {
        self.status.phase()
    }

    /// Phase with its data.
    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Seat of the active player; once won, the winner's seat.
    pub fn current_player_index(&self) -> usize {
        self.current
    }

    /// The completed line, if won.
    pub fn winning_line(&self) -> Option<WinningLine> {
        self.status.winning_line()
    }
}

/// Tic-tac-toe turn engine.
pub struct TurnEngine {
    board: Board,
    state: GameState,
    players: PlayerRegistry,
    rng: StdRng,
    auto_move_limit: usize,
    observers: Vec<Box<dyn GameObserver>>,
}

impl TurnEngine {
    /// Creates an engine for `players`; call [`TurnEngine::start`] to begin.
    #[instrument(skip(rng))]
    pub fn new(players: PlayerRegistry, rng: StdRng) -> Self {
        Self {
            board: Board::new(),
            state: GameState::new(),
            players,
            rng,
            auto_move_limit: DEFAULT_AUTO_MOVE_LIMIT,
            observers: Vec::new(),
        }
    }

    /// Sets how many computer moves one command may chain.
    pub fn with_auto_move_limit(mut self, limit: usize) -> Self {
        self.auto_move_limit = limit;
        self
    }

    /// Registers an observer for every later transition.
    pub fn subscribe(&mut self, observer: Box<dyn GameObserver>) {
        self.observers.push(observer);
    }

    /// Swaps in new players. Takes effect at the next [`TurnEngine::start`].
    #[instrument(skip(self))]
    pub fn set_players(&mut self, players: PlayerRegistry) {
        self.players = players;
    }

    /// Starts a new game: empty board, first player to move.
    ///
    /// If the first player is automatic its moves are made before this
    /// returns.
    #[instrument(skip(self))]
    pub fn start(&mut self) {
        self.board.reset();
        self.state = GameState::new();
        info!(
            first = %self.current_player().name(),
            second = %self.players.players()[1].name(),
            "Game started"
        );
        self.publish();
        self.run_automatic_moves();
    }

    /// Marks `coord` for the active human player.
    ///
    /// After the mark, any computer players due to move do so. Returns the
    /// phase once everything triggered by this command has run.
    ///
    /// # Errors
    ///
    /// Rejects the request, leaving the game untouched, if the game is over,
    /// the active player is automatic, or the cell is taken.
    #[instrument(skip(self))]
    pub fn mark_cell(&mut self, coord: Coord) -> Result<Phase, MoveError> {
        let phase = self.state.phase();
        if phase != Phase::Playing {
            debug!(%phase, "Rejected mark: game over");
            return Err(MoveError::GameOver(phase));
        }

        let player = self.current_player();
        if player.is_automatic() {
            debug!(player = %player.name(), "Rejected mark: automatic player's turn");
            return Err(MoveError::AutomaticTurn(player.name().to_string()));
        }

        if !self.board.is_empty(coord) {
            debug!("Rejected mark: square occupied");
            return Err(MoveError::SquareOccupied(coord));
        }

        self.apply_mark(coord);
        self.run_automatic_moves();
        Ok(self.state.phase())
    }

    /// Restarts the computer chain after it stopped at the move limit.
    ///
    /// Returns the number of moves made.
    #[instrument(skip(self))]
    pub fn resume_automatic(&mut self) -> usize {
        self.run_automatic_moves()
    }

    /// Writes the active player's mark and settles the outcome.
    fn apply_mark(&mut self, coord: Coord) {
        let current = self.state.current;
        let player = &self.players.players()[current];
        let symbol = player.symbol();
        debug!(player = %player.name(), %symbol, %coord, "Marking cell");

        self.board.set(coord, Square::Occupied(symbol));

        if let Some(line) = find_winning_line(&self.board, symbol) {
            info!(winner = %player.name(), kind = %line.kind(), "Game won");
            self.state.status = GameStatus::Won(line);
        } else if self.board.is_full() {
            info!("Game tied");
            self.state.status = GameStatus::Tied;
        } else {
            self.state.current = self.players.next_index(current);
        }

        self.publish();
    }

    /// Plays random moves while an automatic player is to move.
    fn run_automatic_moves(&mut self) -> usize {
        let mut applied = 0;

        while self.state.phase() == Phase::Playing && self.current_player().is_automatic() {
            if applied >= self.auto_move_limit {
                warn!(
                    limit = self.auto_move_limit,
                    player = %self.current_player().name(),
                    "Automatic move limit reached, waiting for manual intervention"
                );
                break;
            }

            let empty = self.board.empty_cells();
            let Some(&coord) = empty.choose(&mut self.rng) else {
                warn!("Automatic player found no empty cell");
                break;
            };

            self.apply_mark(coord);
            applied += 1;
        }

        applied
    }

    /// Checks invariants in debug builds, then notifies observers.
    fn publish(&mut self) {
        let view = self.view();

        if cfg!(debug_assertions)
            && let Err(violations) = ViewInvariants::check_all(&view)
        {
            error!(?violations, "Game invariants violated");
        }

        for observer in &mut self.observers {
            observer.on_state_changed(&view);
        }
    }

    /// Snapshot for rendering.
    pub fn view(&self) -> GameView {
        let phase = self.state.phase();
        let current = self.current_player();
        let available = if phase == Phase::Playing && !current.is_automatic() {
            self.board.empty_cells()
        } else {
            Vec::new()
        };

        GameView {
            phase,
            current_player: self.state.current,
            current_player_name: current.name().to_string(),
            winner_name: (phase == Phase::Won).then(|| current.name().to_string()),
            board: self.board.rows(),
            winning_line: self.state.winning_line(),
            players: self.players.players().to_vec(),
            available,
        }
    }

    /// The board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Phase and turn.
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Current phase.
    pub fn phase(&self) -> Phase {
        self.state.phase()
    }

    /// Both players in turn order.
    pub fn players(&self) -> &PlayerRegistry {
        &self.players
    }

    /// The active player; once won, the winner.
    pub fn current_player(&self) -> &Player {
        &self.players.players()[self.state.current]
    }

    /// The winner, if the game is won.
    pub fn winner(&self) -> Option<&Player> {
        (self.state.phase() == Phase::Won).then(|| self.current_player())
    }

    /// Computer moves allowed per command.
    pub fn auto_move_limit(&self) -> usize {
        self.auto_move_limit
    }
}

impl fmt::Debug for TurnEngine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TurnEngine")
            .field("board", &self.board)
            .field("state", &self.state)
            .field("players", &self.players)
            .field("auto_move_limit", &self.auto_move_limit)
            .field("observers", &self.observers.len())
            .finish_non_exhaustive()
    }
}
