//! Tests for the turn engine state machine.

use rand::SeedableRng;
use rand::rngs::StdRng;
use std::sync::mpsc;
use tictactoe_engine::invariants::{InvariantSet, ViewInvariants};
use tictactoe_engine::{
    Coord, GameMode, GameView, LineKind, MoveError, Phase, Player, PlayerRegistry, Square,
    Symbol, TurnEngine,
};

fn at(x: u8, y: u8) -> Coord {
    Coord::new(x, y).expect("coordinate on the board")
}

fn engine(mode: GameMode, seed: u64) -> TurnEngine {
    TurnEngine::new(PlayerRegistry::standard(mode), StdRng::seed_from_u64(seed))
}

fn started(mode: GameMode, seed: u64) -> TurnEngine {
    let mut engine = engine(mode, seed);
    engine.start();
    engine
}

/// X O X / X O O / O X X, played without an earlier line.
const TIE_SEQUENCE: [(u8, u8); 9] = [
    (0, 0),
    (1, 0),
    (2, 0),
    (1, 1),
    (0, 1),
    (2, 1),
    (1, 2),
    (0, 2),
    (2, 2),
];

#[test]
fn test_start_gives_empty_playing_board() {
    let engine = started(GameMode::HumanVsHuman, 1);
    assert_eq!(engine.board().empty_cells().len(), 9);
    assert_eq!(engine.phase(), Phase::Playing);
    assert_eq!(engine.current_player().name(), "Player 1");
    assert!(engine.state().winning_line().is_none());
}

#[test]
fn test_turns_wrap_between_players() {
    let mut engine = started(GameMode::HumanVsHuman, 1);
    assert_eq!(engine.state().current_player_index(), 0);

    engine.mark_cell(at(0, 0)).unwrap();
    assert_eq!(engine.state().current_player_index(), 1);

    engine.mark_cell(at(1, 1)).unwrap();
    assert_eq!(engine.state().current_player_index(), 0);
}

#[test]
fn test_occupied_cell_is_a_no_op() {
    let mut engine = started(GameMode::HumanVsHuman, 1);
    engine.mark_cell(at(2, 2)).unwrap();
    let board = engine.board().clone();
    let state = *engine.state();

    let result = engine.mark_cell(at(2, 2));

    assert_eq!(result, Err(MoveError::SquareOccupied(at(2, 2))));
    assert_eq!(engine.board(), &board);
    assert_eq!(engine.state(), &state);
}

#[test]
fn test_horizontal_win_records_line() {
    let mut engine = started(GameMode::HumanVsHuman, 1);
    for (x, y) in [(0, 0), (0, 1), (1, 0), (1, 1)] {
        engine.mark_cell(at(x, y)).unwrap();
    }
    assert_eq!(engine.mark_cell(at(2, 0)), Ok(Phase::Won));

    let line = engine.state().winning_line().expect("won game has a line");
    assert_eq!(line.kind(), LineKind::Row(0));
    assert_eq!(line.coords(), [at(0, 0), at(1, 0), at(2, 0)]);
    assert_eq!(engine.winner().map(Player::symbol), Some(Symbol::new('X')));
}

#[test]
fn test_full_board_without_line_ties() {
    let mut engine = started(GameMode::HumanVsHuman, 1);
    for (i, (x, y)) in TIE_SEQUENCE.into_iter().enumerate() {
        let phase = engine.mark_cell(at(x, y)).unwrap();
        if i < TIE_SEQUENCE.len() - 1 {
            assert_eq!(phase, Phase::Playing);
        } else {
            assert_eq!(phase, Phase::Tied);
        }
    }
    assert!(engine.board().is_full());
    assert!(engine.state().winning_line().is_none());
    assert!(engine.winner().is_none());
}

#[test]
fn test_finished_game_rejects_marks() {
    let mut engine = started(GameMode::HumanVsHuman, 1);
    for (x, y) in TIE_SEQUENCE {
        engine.mark_cell(at(x, y)).unwrap();
    }
    assert_eq!(
        engine.mark_cell(at(0, 0)),
        Err(MoveError::GameOver(Phase::Tied))
    );
}

#[test]
fn test_computer_answers_within_the_same_command() {
    let mut engine = started(GameMode::HumanVsComputer, 9);
    assert_eq!(engine.view().available.len(), 9);

    engine.mark_cell(at(1, 1)).unwrap();

    assert_eq!(engine.board().empty_cells().len(), 7);
    assert_eq!(engine.board().count(Symbol::new('O')), 1);
    assert_eq!(engine.current_player().name(), "Player 1");
}

#[test]
fn test_human_mark_rejected_on_automatic_turn() {
    let mut engine = engine(GameMode::ComputerVsComputer, 4).with_auto_move_limit(1);
    engine.start();

    // One automatic move, then the chain stops with player 2 to move.
    assert_eq!(engine.board().empty_cells().len(), 8);
    assert_eq!(engine.phase(), Phase::Playing);
    assert!(engine.current_player().is_automatic());

    let empty = engine.board().empty_cells()[0];
    let before = engine.view();
    assert_eq!(
        engine.mark_cell(empty),
        Err(MoveError::AutomaticTurn("Player 2".to_string()))
    );
    assert_eq!(engine.view(), before);
}

#[test]
fn test_automatic_chain_stops_at_limit_and_resumes() {
    let mut engine = engine(GameMode::ComputerVsComputer, 11).with_auto_move_limit(3);
    engine.start();
    assert_eq!(engine.board().empty_cells().len(), 6);
    assert_eq!(engine.phase(), Phase::Playing);

    let mut rounds = 0;
    while engine.phase() == Phase::Playing {
        let moves = engine.resume_automatic();
        assert!((1..=3).contains(&moves));
        rounds += 1;
        assert!(rounds <= 3, "computer game must finish");
    }
    assert_ne!(engine.phase(), Phase::Playing);
}

#[test]
fn test_computer_vs_computer_finishes_in_one_start() {
    for seed in 0..20 {
        let engine = started(GameMode::ComputerVsComputer, seed);
        assert_ne!(engine.phase(), Phase::Playing, "seed {seed}");
        assert!(engine.view().available.is_empty());
    }
}

#[test]
fn test_computer_first_moves_on_start() {
    let registry =
        PlayerRegistry::new(Player::computer("Bot", 'B'), Player::human("Ada", 'A')).unwrap();
    let mut engine = TurnEngine::new(registry, StdRng::seed_from_u64(2));
    engine.start();

    assert_eq!(engine.board().count(Symbol::new('B')), 1);
    assert_eq!(engine.current_player().name(), "Ada");
    assert_eq!(engine.view().available.len(), 8);
}

#[test]
fn test_seeded_games_are_reproducible() {
    let a = started(GameMode::ComputerVsComputer, 1234);
    let b = started(GameMode::ComputerVsComputer, 1234);
    assert_eq!(a.board(), b.board());
    assert_eq!(a.view(), b.view());
}

#[test]
fn test_observers_see_every_transition() {
    let (tx, rx) = mpsc::channel();
    let mut engine = engine(GameMode::HumanVsComputer, 5);
    engine.subscribe(Box::new(tx));

    engine.start();
    engine.mark_cell(at(0, 0)).unwrap();
    let _ = engine.mark_cell(at(0, 0));

    let views: Vec<GameView> = rx.try_iter().collect();
    // start, human mark, computer mark; the rejected mark publishes nothing.
    assert_eq!(views.len(), 3);
    assert_eq!(views[1].square(at(0, 0)), Square::Occupied(Symbol::new('X')));
    assert!(views[1].available.is_empty());
    assert_eq!(views[2].current_player_name, "Player 1");
    assert_eq!(views[2].available.len(), 7);
}

#[test]
fn test_invariants_hold_across_random_games() {
    for seed in 0..50 {
        let (tx, rx) = mpsc::channel();
        let mut engine = engine(GameMode::ComputerVsComputer, seed);
        engine.subscribe(Box::new(tx));
        engine.start();

        for view in rx.try_iter() {
            assert_eq!(ViewInvariants::check_all(&view), Ok(()), "seed {seed}");
            let phases = [Phase::Playing, Phase::Won, Phase::Tied];
            assert_eq!(phases.iter().filter(|&&p| p == view.phase).count(), 1);
            assert_eq!(view.winning_line.is_some(), view.phase == Phase::Won);
        }
    }
}
