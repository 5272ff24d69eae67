//! Core engine for a single-player battleships game: board state, random
//! fleet placement, and probe resolution. The interactive loop lives in the
//! binary; everything here is synchronous and I/O-free.

mod board;
mod common;
mod config;
mod fleet;
mod game;
mod logging;
mod ship;

pub use board::{Board, Tile, TileContent};
pub use common::{BoardError, Outcome};
pub use config::{FLEET_CELLS, MAX_BOARD_SIZE, MIN_BOARD_SIZE, NUM_SHIPS, SHIP_CLASSES};
pub use fleet::Fleet;
pub use game::{resolve, Game};
pub use logging::init_logging;
pub use ship::{Orientation, Ship, ShipClass};
