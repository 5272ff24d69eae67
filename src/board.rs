//! Grid of tiles: the hidden ship layout plus the player-visible marks.

use crate::common::BoardError;
use crate::config::{MAX_BOARD_SIZE, MIN_BOARD_SIZE};

/// Player-visible state of one tile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TileContent {
    #[default]
    Empty,
    Hit,
    Miss,
}

impl TileContent {
    /// Symbol shown for this tile on the rendered board.
    pub fn symbol(self) -> char {
        match self {
            TileContent::Empty => '_',
            TileContent::Hit => 'x',
            TileContent::Miss => 'o',
        }
    }
}

/// One grid cell: the mark the player sees plus the hidden occupancy flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Tile {
    pub content: TileContent,
    pub has_ship: bool,
}

/// Square grid of tiles, stored row-major and sized at construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    size: usize,
    tiles: Vec<Tile>,
}

impl Board {
    /// Create an empty `size` x `size` board, every tile unmarked and
    /// unoccupied.
    pub fn new(size: usize) -> Result<Self, BoardError> {
        if !(MIN_BOARD_SIZE..=MAX_BOARD_SIZE).contains(&size) {
            return Err(BoardError::InvalidBoardSize(size));
        }
        Ok(Board {
            size,
            tiles: vec![Tile::default(); size * size],
        })
    }

    /// Side length of the board.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Tile at (`row`, `col`). Coordinates must be in bounds.
    pub fn tile(&self, row: usize, col: usize) -> Tile {
        debug_assert!(row < self.size && col < self.size);
        self.tiles[row * self.size + col]
    }

    pub(crate) fn tile_mut(&mut self, row: usize, col: usize) -> &mut Tile {
        debug_assert!(row < self.size && col < self.size);
        &mut self.tiles[row * self.size + col]
    }

    /// Whether a ship occupies (`row`, `col`).
    pub fn has_ship(&self, row: usize, col: usize) -> bool {
        self.tile(row, col).has_ship
    }

    /// Number of cells occupied by ships.
    pub fn ship_cell_count(&self) -> usize {
        self.tiles.iter().filter(|t| t.has_ship).count()
    }

    /// Render the visible board: a numbered column header, then one
    /// lettered row per grid row with each tile's symbol.
    pub fn render(&self) -> String {
        let mut out = String::new();
        out.push(' ');
        for col in 1..=self.size {
            out.push(',');
            out.push_str(&col.to_string());
        }
        out.push('\n');
        for row in 0..self.size {
            out.push((b'a' + row as u8) as char);
            for col in 0..self.size {
                out.push(' ');
                out.push(self.tile(row, col).content.symbol());
            }
            out.push('\n');
        }
        out
    }
}
