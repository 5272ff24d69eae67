use battleships::{Board, BoardError, TileContent, MAX_BOARD_SIZE, MIN_BOARD_SIZE};

#[test]
fn test_new_board_rejects_out_of_range_sizes() {
    assert_eq!(
        Board::new(MIN_BOARD_SIZE - 1).unwrap_err(),
        BoardError::InvalidBoardSize(MIN_BOARD_SIZE - 1)
    );
    assert_eq!(
        Board::new(MAX_BOARD_SIZE + 1).unwrap_err(),
        BoardError::InvalidBoardSize(MAX_BOARD_SIZE + 1)
    );
    assert!(Board::new(MIN_BOARD_SIZE).is_ok());
    assert!(Board::new(MAX_BOARD_SIZE).is_ok());
}

#[test]
fn test_new_board_starts_empty() {
    let board = Board::new(8).unwrap();
    assert_eq!(board.size(), 8);
    assert_eq!(board.ship_cell_count(), 0);
    for row in 0..8 {
        for col in 0..8 {
            let tile = board.tile(row, col);
            assert_eq!(tile.content, TileContent::Empty);
            assert!(!tile.has_ship);
        }
    }
}

#[test]
fn test_render_empty_board() {
    let size = 7;
    let board = Board::new(size).unwrap();
    let text = board.render();
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.len(), size + 1);

    // header lists every column number 1..=size
    for col in 1..=size {
        assert!(lines[0].contains(&col.to_string()));
    }

    for (i, line) in lines[1..].iter().enumerate() {
        let label = (b'a' + i as u8) as char;
        assert!(line.starts_with(label));
        assert_eq!(line.matches('_').count(), size);
        assert_eq!(line.matches('x').count(), 0);
        assert_eq!(line.matches('o').count(), 0);
    }
}

#[test]
fn test_tile_symbols() {
    assert_eq!(TileContent::Empty.symbol(), '_');
    assert_eq!(TileContent::Hit.symbol(), 'x');
    assert_eq!(TileContent::Miss.symbol(), 'o');
}
