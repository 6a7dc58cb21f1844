//! Tests for board coordinates and empty-cell enumeration.

use tictactoe_engine::{Board, Coord, Square, Symbol, find_winning_line};

#[test]
fn test_coord_to_index() {
    assert_eq!(Coord::new(0, 0).unwrap().index(), 0);
    assert_eq!(Coord::new(1, 1).unwrap().index(), 4);
    assert_eq!(Coord::new(2, 2).unwrap().index(), 8);
}

#[test]
fn test_coord_from_index() {
    assert_eq!(Coord::from_index(0), Coord::new(0, 0));
    assert_eq!(Coord::from_index(4), Coord::new(1, 1));
    assert_eq!(Coord::from_index(8), Coord::new(2, 2));
    assert_eq!(Coord::from_index(9), None);
}

#[test]
fn test_labels() {
    assert_eq!(Coord::new(0, 0).unwrap().label(), "top-left");
    assert_eq!(Coord::new(1, 1).unwrap().label(), "center");
    assert_eq!(Coord::new(2, 2).unwrap().to_string(), "(2, 2)");
}

#[test]
fn test_empty_cells_on_empty_board() {
    let board = Board::new();
    assert_eq!(board.empty_cells(), Coord::ALL.to_vec());
}

#[test]
fn test_empty_cells_filters_occupied() {
    let mut board = Board::new();
    board.set(Coord::new(0, 0).unwrap(), Square::Occupied(Symbol::new('X')));
    board.set(Coord::new(1, 1).unwrap(), Square::Occupied(Symbol::new('O')));

    let empty = board.empty_cells();
    assert_eq!(empty.len(), 7);
    assert!(!empty.contains(&Coord::new(0, 0).unwrap()));
    assert!(!empty.contains(&Coord::new(1, 1).unwrap()));
    assert!(empty.contains(&Coord::new(2, 2).unwrap()));
}

#[test]
fn test_custom_symbols_win() {
    let mut board = Board::new();
    let star = Symbol::new('*');
    for y in 0..3 {
        board.set(Coord::new(1, y).unwrap(), Square::Occupied(star));
    }
    let line = find_winning_line(&board, star).expect("middle column");
    assert_eq!(
        line.coords().to_vec(),
        (0..3).map(|y| Coord::new(1, y).unwrap()).collect::<Vec<_>>()
    );
}
