//! tictactoe - terminal front end for the turn engine.

#![warn(missing_docs)]

mod cli;

use anyhow::Result;
use clap::Parser;
use cli::{Cli, Command};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use tictactoe_engine::terminal::{self, JsonRenderer, Tally, TextRenderer};
use tictactoe_engine::{GameConfig, GameMode, GameSession};
use tracing::{debug, info, instrument};
use tracing_subscriber::EnvFilter;

/// Config file picked up from the working directory when no path is given.
const DEFAULT_CONFIG: &str = "tictactoe.toml";

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Command::Play {
            mode,
            config,
            seed,
            json,
        } => run_play(mode, config, seed, json),
        Command::Watch {
            games,
            config,
            seed,
            json,
        } => run_watch(games, config, seed, json),
    }
}

/// Loads the config file, falling back to defaults when none exists.
#[instrument]
fn load_config(path: Option<PathBuf>, seed: Option<u64>) -> Result<GameConfig> {
    let config = match path {
        Some(path) => GameConfig::from_file(path)?,
        None if Path::new(DEFAULT_CONFIG).exists() => GameConfig::from_file(DEFAULT_CONFIG)?,
        None => {
            debug!("No config file, using defaults");
            GameConfig::default()
        }
    };

    Ok(match seed {
        Some(seed) => config.with_seed(Some(seed)),
        None => config,
    })
}

/// Run an interactive game on stdin/stdout
#[instrument]
fn run_play(
    mode: Option<GameMode>,
    config: Option<PathBuf>,
    seed: Option<u64>,
    json: bool,
) -> Result<()> {
    let config = load_config(config, seed)?;
    let mode = mode.unwrap_or(*config.mode());
    let mut session = GameSession::new(config)?;

    if json {
        session.subscribe(Box::new(JsonRenderer::new(io::stdout())));
    } else {
        session.subscribe(Box::new(TextRenderer::new(io::stdout())));
        println!("{}\n", terminal::HELP);
    }

    info!(%mode, "Starting interactive game");
    session.new_game(mode)?;

    let stdin = io::stdin();
    let mut stdout = io::stdout();
    terminal::run_interactive(&mut session, stdin.lock(), &mut stdout)?;
    stdout.flush()?;
    Ok(())
}

/// Play computer-vs-computer games and print the results
#[instrument]
fn run_watch(games: u32, config: Option<PathBuf>, seed: Option<u64>, json: bool) -> Result<()> {
    let config = load_config(config, seed)?;
    let mut session = GameSession::new(config)?;
    let mut tally = Tally::default();
    let mut stdout = io::stdout().lock();

    for game in 1..=games {
        session.new_game(GameMode::ComputerVsComputer)?;
        let view = session.view();
        tally.record(&view);

        if json {
            serde_json::to_writer(&mut stdout, &view)?;
            writeln!(stdout)?;
        } else {
            writeln!(stdout, "Game {game}\n{}\n", terminal::render(&view))?;
        }
    }

    if !json {
        writeln!(stdout, "{tally}")?;
    }
    Ok(())
}
