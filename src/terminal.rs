//! Line-oriented terminal front end.
//!
//! Renders [`GameView`]s as text or JSON lines and turns typed commands into
//! session calls. Holds no game logic of its own.

use crate::games::tictactoe::{
    Coord, GameMode, GameObserver, GameView, ParseCoordError, Phase, Square,
};
use crate::session::GameSession;
use derive_more::{Display, Error, From};
use std::collections::BTreeMap;
use std::fmt;
use std::io::{BufRead, Write};
use std::str::FromStr;
use strum::IntoEnumIterator;
use tracing::{debug, instrument, warn};

/// Help text for the interactive prompt.
pub const HELP: &str = "\
Commands:
  x,y            mark the cell at column x, row y (0-2)
  1-9            mark a cell, numbered left to right, top to bottom
  top-left ...   mark a cell by name
  new [MODE]     start a new game, optionally in another mode
  resume         let the computer continue after it stopped
  help           show this text
  quit           leave";

/// Draws the board, highlighting the winning line and numbering open cells.
pub fn render(view: &GameView) -> String {
    let mut out = String::new();
    for y in 0..3u8 {
        let cells: Vec<String> = (0..3u8)
            .filter_map(|x| Coord::new(x, y))
            .map(|coord| match view.square(coord) {
                Square::Occupied(symbol) if view.is_winning_cell(coord) => format!("[{symbol}]"),
                Square::Occupied(symbol) => format!(" {symbol} "),
                Square::Empty if view.is_available(coord) => format!(" {} ", coord.index() + 1),
                Square::Empty => "   ".to_string(),
            })
            .collect();
        out.push_str(&cells.join("|"));
        out.push('\n');
        if y < 2 {
            out.push_str("---+---+---\n");
        }
    }
    out.push_str(&view.status_line());
    out
}

/// Observer that prints every view as a text board.
pub struct TextRenderer<W: Write> {
    out: W,
}

impl<W: Write> TextRenderer<W> {
    /// Renders to `out`.
    pub fn new(out: W) -> Self {
        Self { out }
    }
}

impl<W: Write> GameObserver for TextRenderer<W> {
    fn on_state_changed(&mut self, view: &GameView) {
        if let Err(e) = writeln!(self.out, "{}\n", render(view)) {
            warn!(error = %e, "Failed to render board");
        }
    }
}

/// Observer that prints every view as one JSON object per line.
pub struct JsonRenderer<W: Write> {
    out: W,
}

impl<W: Write> JsonRenderer<W> {
    /// Renders to `out`.
    pub fn new(out: W) -> Self {
        Self { out }
    }
}

impl<W: Write> GameObserver for JsonRenderer<W> {
    fn on_state_changed(&mut self, view: &GameView) {
        let result = serde_json::to_writer(&mut self.out, view)
            .map_err(std::io::Error::from)
            .and_then(|()| writeln!(self.out));
        if let Err(e) = result {
            warn!(error = %e, "Failed to write view as JSON");
        }
    }
}

/// A typed command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Mark a cell.
    Mark(Coord),
    /// Start a new game, optionally switching mode.
    New(Option<GameMode>),
    /// Let the computer continue.
    Resume,
    /// Show help.
    Help,
    /// Leave.
    Quit,
}

/// Input that is not a command.
#[derive(Debug, Display, Error, From)]
pub enum CommandError {
    /// Not a cell.
    #[display("{_0}")]
    Cell(ParseCoordError),
    /// Unknown game mode after `new`.
    #[from(ignore)]
    #[display("unknown mode '{input}', expected one of: {expected}")]
    Mode {
        /// The rejected mode.
        input: String,
        /// Accepted mode names.
        expected: String,
    },
}

impl FromStr for Command {
    type Err = CommandError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let mut words = trimmed.split_whitespace();
        match words.next().map(str::to_lowercase).as_deref() {
            Some("quit" | "exit" | "q") => Ok(Command::Quit),
            Some("help" | "?") => Ok(Command::Help),
            Some("resume") => Ok(Command::Resume),
            Some("new" | "n") => match words.next() {
                None => Ok(Command::New(None)),
                Some(mode) => mode
                    .parse::<GameMode>()
                    .map(|mode| Command::New(Some(mode)))
                    .map_err(|_| CommandError::Mode {
                        input: mode.to_string(),
                        expected: GameMode::iter()
                            .map(|mode| mode.to_string())
                            .collect::<Vec<_>>()
                            .join(", "),
                    }),
            },
            _ => Ok(Command::Mark(trimmed.parse()?)),
        }
    }
}

/// Reads commands from `input` until `quit` or end of input.
///
/// The caller starts the first game and subscribes renderers; this loop
/// writes only prompts and rejections to `out`.
#[instrument(skip_all)]
pub fn run_interactive<R: BufRead, W: Write>(
    session: &mut GameSession,
    input: R,
    out: &mut W,
) -> anyhow::Result<()> {
    for line in input.lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }

        match line.parse::<Command>() {
            Ok(Command::Quit) => break,
            Ok(Command::Help) => writeln!(out, "{HELP}")?,
            Ok(Command::New(mode)) => {
                session.new_game(mode.unwrap_or(session.mode()))?;
            }
            Ok(Command::Resume) => {
                let moves = session.resume_automatic();
                writeln!(out, "Computer made {moves} move(s)")?;
            }
            Ok(Command::Mark(coord)) => match session.select_cell(coord) {
                Ok(Phase::Playing) => {}
                Ok(phase) => {
                    debug!(%phase, "Game finished");
                    writeln!(out, "Type 'new' to play again or 'quit' to leave")?;
                }
                Err(e) => writeln!(out, "Unavailable: {e}")?,
            },
            Err(e) => writeln!(out, "{e} (type 'help')")?,
        }
    }
    Ok(())
}

/// Results across several games.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Tally {
    wins: BTreeMap<String, u32>,
    ties: u32,
}

impl Tally {
    /// Counts a finished game; unfinished views are ignored.
    pub fn record(&mut self, view: &GameView) {
        match (view.phase, &view.winner_name) {
            (Phase::Won, Some(winner)) => *self.wins.entry(winner.clone()).or_default() += 1,
            (Phase::Tied, _) => self.ties += 1,
            _ => {}
        }
    }

    /// Wins for `name`.
    pub fn wins(&self, name: &str) -> u32 {
        self.wins.get(name).copied().unwrap_or(0)
    }

    /// Tied games.
    pub fn ties(&self) -> u32 {
        self.ties
    }

    /// Finished games counted.
    pub fn games(&self) -> u32 {
        self.wins.values().sum::<u32>() + self.ties
    }
}

impl fmt::Display for Tally {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (name, wins) in &self.wins {
            writeln!(f, "{name}: {wins} win(s)")?;
        }
        write!(f, "Ties: {}", self.ties)
    }
}
