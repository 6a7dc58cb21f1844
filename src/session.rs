//! Game session: the host-facing command surface.

use crate::config::{ConfigError, GameConfig};
use crate::games::tictactoe::{
    Coord, GameMode, GameObserver, GameView, MoveError, Phase, TurnEngine,
};
use tracing::{info, instrument, warn};

/// One table: a configured engine plus the mode it is playing.
///
/// Observers subscribe once and keep receiving views across new games.
#[derive(Debug)]
pub struct GameSession {
    config: GameConfig,
    mode: GameMode,
    engine: TurnEngine,
    games_started: u64,
}

impl GameSession {
    /// Creates a session in the configured mode. No game runs until
    /// [`GameSession::new_game`].
    #[instrument(skip(config))]
    pub fn new(config: GameConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let mode = *config.mode();
        let engine = TurnEngine::new(config.registry(mode)?, config.rng())
            .with_auto_move_limit(*config.auto_move_limit());

        info!(%mode, "Creating game session");
        Ok(Self {
            config,
            mode,
            engine,
            games_started: 0,
        })
    }

    /// Subscribes an observer to every later transition.
    pub fn subscribe(&mut self, observer: Box<dyn GameObserver>) {
        self.engine.subscribe(observer);
    }

    /// Starts a fresh game in `mode`.
    ///
    /// Computer moves due before a human can act are made before this
    /// returns; in computer-vs-computer mode the whole game is played.
    #[instrument(skip(self))]
    pub fn new_game(&mut self, mode: GameMode) -> Result<Phase, ConfigError> {
        let registry = self.config.registry(mode)?;
        self.engine.set_players(registry);
        self.mode = mode;
        self.games_started += 1;
        info!(game = self.games_started, %mode, "New game");
        self.engine.start();
        Ok(self.engine.phase())
    }

    /// Starts a fresh game in the current mode.
    pub fn restart(&mut self) -> Result<Phase, ConfigError> {
        self.new_game(self.mode)
    }

    /// Forwards a user's cell selection.
    ///
    /// # Errors
    ///
    /// The engine's rejection when the cell is unavailable.
    #[instrument(skip(self))]
    pub fn select_cell(&mut self, coord: Coord) -> Result<Phase, MoveError> {
        if self.games_started == 0 {
            warn!("Cell selected before any game was started");
        }
        self.engine.mark_cell(coord)
    }

    /// Lets the computer continue after it hit the move limit.
    pub fn resume_automatic(&mut self) -> usize {
        self.engine.resume_automatic()
    }

    /// Snapshot for rendering.
    pub fn view(&self) -> GameView {
        self.engine.view()
    }

    /// The mode of the current game.
    pub fn mode(&self) -> GameMode {
        self.mode
    }

    /// Games started so far.
    pub fn games_started(&self) -> u64 {
        self.games_started
    }

    /// The underlying engine.
    pub fn engine(&self) -> &TurnEngine {
        &self.engine
    }

    /// The configuration the session was built from.
    pub fn config(&self) -> &GameConfig {
        &self.config
    }
}
