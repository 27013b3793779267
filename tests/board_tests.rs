//! Board tests - grid access, value semantics, move detection

use tui_2060::core::{Board, GameState, GameStatus};
use tui_2060::types::{Tile, BOARD_SIZE};

/// Fill the board so that no two orthogonal neighbours are equal.
fn checkerboard() -> Board {
    let mut board = Board::new();
    let mut id = 1;
    for y in 0..BOARD_SIZE {
        for x in 0..BOARD_SIZE {
            let value = if (x + y) % 2 == 0 { 2 } else { 4 };
            board.set(x, y, Some(Tile::new(id, value)));
            id += 1;
        }
    }
    board
}

#[test]
fn test_board_new_empty() {
    let board = Board::new();
    assert_eq!(board.width(), BOARD_SIZE);
    assert_eq!(board.height(), BOARD_SIZE);

    for y in 0..BOARD_SIZE {
        for x in 0..BOARD_SIZE {
            assert_eq!(board.get(x, y), Some(None), "cell ({}, {})", x, y);
        }
    }
    assert_eq!(board.tile_count(), 0);
    assert_eq!(board.empty_cells().len(), 16);
}

#[test]
fn test_board_get_out_of_bounds() {
    let board = Board::new();
    assert_eq!(board.get(BOARD_SIZE, 0), None);
    assert_eq!(board.get(0, BOARD_SIZE), None);
    assert!(!board.is_occupied(BOARD_SIZE, BOARD_SIZE));
}

#[test]
fn test_board_set_and_get() {
    let mut board = Board::new();
    assert!(board.set(2, 1, Some(Tile::new(9, 8))));
    assert_eq!(board.tile(2, 1), Some(Tile::new(9, 8)));
    assert_eq!(board.position_of(9), Some((2, 1)));
    assert!(!board.set(4, 0, Some(Tile::new(10, 2))));
}

#[test]
fn test_with_cell_leaves_original_untouched() {
    let board = Board::new().with_cell(0, 0, Some(Tile::new(1, 2)));
    let cleared = board.with_cell(0, 0, None);

    assert!(board.is_occupied(0, 0));
    assert!(!cleared.is_occupied(0, 0));
}

#[test]
fn test_map_tiles_keeps_ids_and_positions() {
    let board = Board::new()
        .with_cell(1, 1, Some(Tile::new(3, 4)))
        .with_cell(3, 0, Some(Tile::merged(5, 16, 2)));
    let doubled = board.map_tiles(|t| t.with_value(t.value * 2));

    assert_eq!(doubled.tile(1, 1), Some(Tile::new(3, 8)));
    assert_eq!(doubled.tile(3, 0).map(|t| (t.id, t.value)), Some((5, 32)));
    assert_eq!(doubled.max_value(), 32);
}

#[test]
fn test_tiles_iterate_row_major() {
    let board = Board::new()
        .with_cell(3, 0, Some(Tile::new(1, 2)))
        .with_cell(0, 1, Some(Tile::new(2, 2)));
    let positions: Vec<_> = board.tiles().map(|(x, y, _)| (x, y)).collect();
    assert_eq!(positions, vec![(3, 0), (0, 1)]);
}

#[test]
fn test_full_board_without_pairs_has_no_moves() {
    let board = checkerboard();
    assert!(board.empty_cells().is_empty());
    assert!(!board.has_possible_moves());
    assert!(!GameState::new(board, 0).has_possible_moves());
}

#[test]
fn test_full_board_with_vertical_pair_has_moves() {
    let board = checkerboard().with_cell(0, 1, Some(Tile::new(99, 2)));
    assert!(board.has_possible_moves());
}

#[test]
fn test_with_board_recomputes_status() {
    let stuck = GameState::new(checkerboard(), 40);
    let freed = stuck.with_board(stuck.board().with_cell(2, 2, None));
    assert!(!stuck.has_possible_moves());
    assert!(freed.has_possible_moves());
    assert_eq!(
        freed.status(),
        GameStatus {
            has_possible_moves: true
        }
    );
    assert_eq!(freed.score(), 40);
}

#[test]
fn test_from_rows_indexes_y_then_x() {
    let a = Some(Tile::new(1, 2));
    let b = Some(Tile::new(2, 4));
    let board = Board::from_rows([
        [None, a, None, None],
        [None, None, None, None],
        [None, None, None, b],
        [None, None, None, None],
    ]);

    assert_eq!(board.tile(1, 0), a);
    assert_eq!(board.tile(3, 2), b);
    assert_eq!(board.rows()[2][3], b);
    assert_eq!(board, Board::new().with_cell(1, 0, a).with_cell(3, 2, b));
}
