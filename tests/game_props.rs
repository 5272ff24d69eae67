use std::collections::HashSet;

use battleships::{
    resolve, Board, Fleet, Outcome, TileContent, FLEET_CELLS, NUM_SHIPS, SHIP_CLASSES,
};
use proptest::prelude::*;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

fn placed_board(seed: u64, size: usize) -> (Board, Fleet) {
    let mut board = Board::new(size).unwrap();
    let mut rng = SmallRng::seed_from_u64(seed);
    let fleet = Fleet::place_random(&mut board, &mut rng).unwrap();
    (board, fleet)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn placement_covers_exactly_the_fleet(seed in any::<u64>(), size in 5usize..=26) {
        let (board, fleet) = placed_board(seed, size);

        let mut cells = HashSet::new();
        for (ship, class) in fleet.ships().iter().zip(SHIP_CLASSES) {
            prop_assert_eq!(ship.class(), class);
            let run: Vec<(usize, usize)> = ship.cells().collect();
            prop_assert_eq!(run.len(), class.length());
            // contiguous along exactly one axis
            let same_row = run.iter().all(|&(r, _)| r == run[0].0);
            let same_col = run.iter().all(|&(_, c)| c == run[0].1);
            prop_assert!(same_row || same_col);
            for &(r, c) in &run {
                prop_assert!(r < size && c < size);
                prop_assert!(cells.insert((r, c)), "ship cells intersect");
            }
        }
        prop_assert_eq!(cells.len(), FLEET_CELLS);
        prop_assert_eq!(board.ship_cell_count(), FLEET_CELLS);
        for row in 0..size {
            for col in 0..size {
                prop_assert_eq!(board.has_ship(row, col), cells.contains(&(row, col)));
            }
        }
    }

    #[test]
    fn probe_is_idempotent(
        seed in any::<u64>(),
        size in 5usize..=26,
        r_raw in 0usize..26,
        c_raw in 0usize..26,
    ) {
        let (mut board, mut fleet) = placed_board(seed, size);
        let (row, col) = (r_raw % size, c_raw % size);

        let first = resolve(&mut board, &mut fleet, row, col);
        let content = board.tile(row, col).content;
        let remaining: Vec<usize> = fleet.ships().iter().map(|s| s.remaining_hits()).collect();

        let second = resolve(&mut board, &mut fleet, row, col);
        match first {
            Outcome::Miss => prop_assert_eq!(second, Outcome::AlreadyMiss),
            Outcome::Hit | Outcome::Sunk => prop_assert_eq!(second, Outcome::AlreadyHit),
            Outcome::AlreadyHit | Outcome::AlreadyMiss => {
                prop_assert!(false, "fresh tile reported as already probed")
            }
        }
        prop_assert_eq!(board.tile(row, col).content, content);
        let remaining_after: Vec<usize> =
            fleet.ships().iter().map(|s| s.remaining_hits()).collect();
        prop_assert_eq!(remaining, remaining_after);
    }

    #[test]
    fn remaining_hits_decrease_monotonically(seed in any::<u64>(), size in 5usize..=26) {
        let (mut board, mut fleet) = placed_board(seed, size);
        let mut probe_rng = SmallRng::seed_from_u64(seed.wrapping_add(1));

        let mut prev: Vec<usize> = fleet.ships().iter().map(|s| s.remaining_hits()).collect();
        let mut sunk_seen = vec![false; NUM_SHIPS];
        for _ in 0..size * size {
            let row = probe_rng.random_range(0..size);
            let col = probe_rng.random_range(0..size);
            let outcome = resolve(&mut board, &mut fleet, row, col);

            let cur: Vec<usize> = fleet.ships().iter().map(|s| s.remaining_hits()).collect();
            for (before, after) in prev.iter().zip(&cur) {
                prop_assert!(after <= before);
                prop_assert!(before - after <= 1);
            }
            if outcome == Outcome::Sunk {
                let idx = fleet
                    .ships()
                    .iter()
                    .position(|s| s.occupies(row, col))
                    .expect("sunk outcome must name an owning ship");
                prop_assert_eq!(cur[idx], 0);
                prop_assert!(!sunk_seen[idx], "ship sunk twice");
                sunk_seen[idx] = true;
            }
            prev = cur;
        }
    }

    #[test]
    fn probing_every_cell_sinks_the_fleet(seed in any::<u64>(), size in 5usize..=26) {
        let (mut board, mut fleet) = placed_board(seed, size);
        let mut effective = 0;
        let mut sunk = 0;
        for row in 0..size {
            for col in 0..size {
                let outcome = resolve(&mut board, &mut fleet, row, col);
                if outcome.is_effective_hit() {
                    effective += 1;
                }
                if outcome == Outcome::Sunk {
                    sunk += 1;
                }
                let expected = if board.has_ship(row, col) {
                    TileContent::Hit
                } else {
                    TileContent::Miss
                };
                prop_assert_eq!(board.tile(row, col).content, expected);
            }
        }
        prop_assert_eq!(effective, FLEET_CELLS);
        prop_assert_eq!(sunk, NUM_SHIPS);
        prop_assert!(fleet.all_sunk());
    }
}
