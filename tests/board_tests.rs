//! Board-level tests: collision predicate and line clearing.

use blockfall::core::{spawn_shape, Board};
use blockfall::types::{PieceKind, BOARD_HEIGHT, BOARD_WIDTH};

fn fill_row(board: &mut Board, y: i8) {
    for x in 0..BOARD_WIDTH as i8 {
        board.set(x, y, Some(PieceKind::I));
    }
}

#[test]
fn new_board_is_empty() {
    let board = Board::new();
    assert_eq!(board.width(), BOARD_WIDTH);
    assert_eq!(board.height(), BOARD_HEIGHT);
    for y in 0..BOARD_HEIGHT as i8 {
        for x in 0..BOARD_WIDTH as i8 {
            assert_eq!(board.get(x, y), Some(None));
        }
    }
}

#[test]
fn collides_only_outside_or_on_filled_cells() {
    let mut board = Board::new();
    let square = spawn_shape(PieceKind::O); // 2x2

    // Interior empty positions never collide.
    assert!(!board.collides(&square, 0, 0));
    assert!(!board.collides(&square, 8, 18));

    // Left, right, and bottom edges collide.
    assert!(board.collides(&square, -1, 0));
    assert!(board.collides(&square, 9, 0)); // right cell at x=10
    assert!(board.collides(&square, 0, 19)); // bottom cell at y=20

    // Above the top edge is open space.
    assert!(!board.collides(&square, 0, -2));

    // Overlap with a filled cell collides.
    board.set(4, 10, Some(PieceKind::T));
    assert!(board.collides(&square, 3, 9)); // right-bottom cell lands on (4,10)
    assert!(!board.collides(&square, 5, 9));
}

#[test]
fn collision_is_per_filled_cell_not_bounding_box() {
    let mut board = Board::new();
    // S spawn matrix:  [[0,5,5],
    //                   [5,5,0]]
    let s = spawn_shape(PieceKind::S);
    // A block under the S's empty bottom-right corner must not collide.
    board.set(2, 1, Some(PieceKind::J));
    assert!(!board.collides(&s, 0, 0));
    // But a block under a filled cell does.
    board.set(1, 1, Some(PieceKind::J));
    assert!(board.collides(&s, 0, 0));
}

#[test]
fn clearing_one_full_row_keeps_grid_height() {
    let mut board = Board::new();
    fill_row(&mut board, BOARD_HEIGHT as i8 - 1);
    board.set(0, 10, Some(PieceKind::L));

    let cleared = board.clear_lines();
    assert_eq!(cleared.len(), 1);

    // Height unchanged: a fresh empty row appeared at the top and the
    // surviving cell shifted down by one.
    for x in 0..BOARD_WIDTH as i8 {
        assert_eq!(board.get(x, 0), Some(None));
    }
    assert_eq!(board.get(0, 11), Some(Some(PieceKind::L)));
    assert_eq!(board.get(0, 10), Some(None));
}

#[test]
fn four_stacked_rows_clear_in_one_pass() {
    let mut board = Board::new();
    for y in 16..20 {
        fill_row(&mut board, y);
    }
    board.set(3, 15, Some(PieceKind::Z));

    let cleared = board.clear_lines();
    assert_eq!(cleared.len(), 4);
    assert_eq!(board.get(3, 19), Some(Some(PieceKind::Z)));
    assert_eq!(
        board.cells().iter().filter(|c| c.is_some()).count(),
        1
    );
}

#[test]
fn interleaved_full_and_partial_rows() {
    let mut board = Board::new();
    // Full row 19, partial 18, full 17.
    fill_row(&mut board, 19);
    fill_row(&mut board, 18);
    board.set(5, 18, None);
    fill_row(&mut board, 17);

    let cleared = board.clear_lines();
    assert_eq!(cleared.len(), 2);
    // The partial row survives and lands on the floor.
    assert!(!board.row_full(19));
    assert_eq!(board.get(5, 19), Some(None));
    assert_eq!(board.get(4, 19), Some(Some(PieceKind::I)));
}
