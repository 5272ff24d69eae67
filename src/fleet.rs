//! The fixed five-ship fleet and its random placement engine.

use rand::Rng;

use crate::board::Board;
use crate::common::BoardError;
use crate::config::{NUM_SHIPS, SHIP_CLASSES};
use crate::ship::{Orientation, Ship, ShipClass};

/// Attempts per ship before random placement gives up. Generous enough that
/// every legal board size succeeds in practice; the cap only exists to turn
/// an infeasible layout into an error instead of a spin.
const MAX_PLACEMENT_ATTEMPTS: usize = 10_000;

/// The five ships of one game session, in placement order (largest first).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fleet {
    ships: Vec<Ship>,
}

impl Fleet {
    /// Place the whole fleet at random on `board`, marking the occupied
    /// tiles. Each ship's origin and orientation are sampled uniformly and
    /// resampled until the ship fits without overlapping earlier ships.
    pub fn place_random<R: Rng>(board: &mut Board, rng: &mut R) -> Result<Self, BoardError> {
        let mut ships = Vec::with_capacity(NUM_SHIPS);
        for class in SHIP_CLASSES {
            let ship = sample_placement(board, class, rng)?;
            commit(board, &ship);
            log::debug!(
                "placed {} at {:?} {:?}",
                class.name(),
                ship.origin(),
                ship.orientation()
            );
            ships.push(ship);
        }
        log::info!("fleet placed on {0}x{0} board", board.size());
        Ok(Fleet { ships })
    }

    /// Place the fleet at fixed spots, one `(row, col, orientation)` per
    /// ship in fleet order. Used for scripted layouts and tests.
    pub fn place_at(
        board: &mut Board,
        spots: [(usize, usize, Orientation); NUM_SHIPS],
    ) -> Result<Self, BoardError> {
        let mut ships = Vec::with_capacity(NUM_SHIPS);
        for (class, (row, col, orientation)) in SHIP_CLASSES.into_iter().zip(spots) {
            let ship = Ship::new(class, orientation, row, col, board.size())?;
            if ship.cells().any(|(r, c)| board.has_ship(r, c)) {
                return Err(BoardError::ShipOverlaps);
            }
            commit(board, &ship);
            ships.push(ship);
        }
        Ok(Fleet { ships })
    }

    /// The ships in placement order.
    pub fn ships(&self) -> &[Ship] {
        &self.ships
    }

    /// Returns `true` when every ship is sunk.
    pub fn all_sunk(&self) -> bool {
        self.ships.iter().all(|s| s.is_sunk())
    }

    /// Total number of cells occupied by the fleet.
    pub fn total_cells(&self) -> usize {
        self.ships.iter().map(|s| s.class().length()).sum()
    }

    /// The ship occupying (`row`, `col`), if any. At most one match exists;
    /// placement never lets cell sets intersect.
    pub(crate) fn ship_at_mut(&mut self, row: usize, col: usize) -> Option<&mut Ship> {
        self.ships.iter_mut().find(|s| s.occupies(row, col))
    }
}

fn sample_placement<R: Rng>(
    board: &Board,
    class: ShipClass,
    rng: &mut R,
) -> Result<Ship, BoardError> {
    let size = board.size();
    for _ in 0..MAX_PLACEMENT_ATTEMPTS {
        let row = rng.random_range(0..size);
        let col = rng.random_range(0..size);
        let orientation = if rng.random() {
            Orientation::Horizontal
        } else {
            Orientation::Vertical
        };
        let Ok(ship) = Ship::new(class, orientation, row, col, size) else {
            continue;
        };
        if ship.cells().all(|(r, c)| !board.has_ship(r, c)) {
            return Ok(ship);
        }
    }
    Err(BoardError::UnableToPlaceShip)
}

fn commit(board: &mut Board, ship: &Ship) {
    for (row, col) in ship.cells() {
        board.tile_mut(row, col).has_ship = true;
    }
}
