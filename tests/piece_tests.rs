//! Active piece tests - spawn, collision, movement and rotation through the public API

use blockfall::core::{
    collides, ActivePiece, Board, Descent, ScriptedSource, ShapeCatalog, SpawnOutcome,
};
use blockfall::types::{Color, ShapeKind, BOARD_COLS, BOARD_ROWS, PALETTE};

fn piece(kind: ShapeKind, row: i32, col: i32) -> ActivePiece {
    let shape = ShapeCatalog::standard().shape(kind).unwrap();
    ActivePiece::new(kind, shape, row, col, Color::BlueViolet)
}

#[test]
fn test_square_falls_nineteen_rows_then_lands() {
    let mut board = Board::new();
    let catalog = ShapeCatalog::standard();
    let mut rng = ScriptedSource::new(vec![6, 2]);

    let spawn = ActivePiece::spawn(&mut board, &catalog, &mut rng);
    assert_eq!(spawn.outcome, SpawnOutcome::Placed);
    let mut square = spawn.piece;
    assert_eq!(square.kind(), ShapeKind::O);
    assert_eq!(square.color(), PALETTE[2]);

    let mut falls = 0;
    while square.move_down(&mut board) == Descent::Fell {
        falls += 1;
    }
    assert_eq!(falls, 18);
    assert_eq!((square.row(), square.bottom_row()), (18, 19));
    assert_eq!(board.occupied_count(), 4);
}

#[test]
fn test_every_shape_spawns_inside_board() {
    let catalog = ShapeCatalog::standard();
    for index in 0..catalog.len() {
        let mut board = Board::new();
        let mut rng = ScriptedSource::new(vec![index, 0]);
        let spawn = ActivePiece::spawn(&mut board, &catalog, &mut rng);

        let p = spawn.piece;
        assert_eq!(p.row(), 0);
        assert!(p.col() >= 0 && p.right_col() < BOARD_COLS as i32);
        assert!(p.bottom_row() < BOARD_ROWS as i32);
        assert_eq!(board.occupied_count(), p.footprint().count());
    }
}

#[test]
fn test_spawn_on_full_top_is_blocked() {
    let mut board = Board::new();
    // Rows 0..=2 occupied but never complete.
    for row in 0..3 {
        for col in 1..BOARD_COLS {
            board.set_occupied(row, col, true);
        }
    }
    let before = board.occupancy();

    let catalog = ShapeCatalog::standard();
    let mut rng = ScriptedSource::new(vec![5, 1]);
    let spawn = ActivePiece::spawn(&mut board, &catalog, &mut rng);

    assert_eq!(spawn.outcome, SpawnOutcome::Blocked);
    assert_eq!(spawn.rows_cleared, 0);
    assert_eq!(board.occupancy(), before);
    // The color pass still ran.
    assert_eq!(board.get(0, 4).color, PALETTE[1]);
}

#[test]
fn test_collides_free_function() {
    let mut board = Board::new();
    let p = piece(ShapeKind::S, 4, 4);
    assert!(!collides(&board, &p));

    // S is `011 / 110`; (4, 4) is empty in the matrix.
    board.set_occupied(4, 4, true);
    assert!(!collides(&board, &p));

    board.set_occupied(5, 4, true);
    assert!(collides(&board, &p));
}

#[test]
fn test_erase_restores_background() {
    let mut board = Board::new();
    let p = piece(ShapeKind::J, 10, 2);
    p.commit(&mut board);
    assert_eq!(board.occupied_count(), 4);
    assert_eq!(board.get(12, 2).color, Color::BlueViolet);

    p.erase(&mut board);
    assert_eq!(board.occupied_count(), 0);
    assert_eq!(board.get(12, 2).color, blockfall::types::BACKGROUND);
}

#[test]
fn test_walk_across_board() {
    let mut board = Board::new();
    let mut p = piece(ShapeKind::L, 5, 4);
    p.commit(&mut board);

    while p.move_left(&mut board) {}
    assert_eq!(p.col(), 0);
    while p.move_right(&mut board) {}
    assert_eq!(p.right_col(), BOARD_COLS as i32 - 1);
    assert_eq!(board.occupied_count(), 4);
}

#[test]
fn test_rotation_round_trip_keeps_board() {
    let mut board = Board::new();
    board.set_occupied(19, 0, true);
    let mut p = piece(ShapeKind::Z, 9, 3);
    p.commit(&mut board);
    let before = board.clone();

    for _ in 0..4 {
        assert!(p.rotate(&mut board));
    }
    assert_eq!(board, before);
    assert_eq!((p.row(), p.col()), (9, 3));
}

#[test]
fn test_rotation_at_left_wall_stays_on_board() {
    let mut board = Board::new();
    let mut p = piece(ShapeKind::I, 4, 0);
    p.commit(&mut board);

    assert!(p.rotate(&mut board));
    assert_eq!(p.col(), 0);
    assert_eq!(p.right_col(), 2);
    assert!(board.is_occupied(4, 0) && board.is_occupied(4, 2));
}
