use rand::prelude::*;

use crate::*;

/// Strategy seam for mine placement. The board guarantees the strategy runs
/// at most once per session.
pub trait MinePlacer {
    fn place(self, board: &mut Board, safe: Coord2);
}

/// Uniform rejection sampling over the linear index space: draw candidate
/// indices until one is neither a mine already nor the protected first-click
/// tile, repeated until the configured mine count is reached.
///
/// Only the exact first-clicked tile is protected, not its neighborhood, so a
/// zero-adjacency cascade on the first reveal is not guaranteed.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct RandomPlacer {
    seed: u64,
}

impl RandomPlacer {
    pub fn new(seed: u64) -> Self {
        Self { seed }
    }
}

impl MinePlacer for RandomPlacer {
    fn place(self, board: &mut Board, safe: Coord2) {
        let total = board.total_tiles();
        let safe_index = board.coords_to_index(safe);
        let mut rng = SmallRng::seed_from_u64(self.seed);

        // terminates: mine_count <= total - 1, so a free tile always remains
        let mut remaining = board.mine_count();
        while remaining > 0 {
            let candidate = rng.random_range(0..total);
            if candidate == safe_index {
                continue;
            }
            let coords = board.index_to_coords(candidate);
            if board.tile(coords).has_mine() {
                continue;
            }
            board.set_mine(coords);
            remaining -= 1;
        }

        log::debug!(
            "placed {} mines on a {}x{} board, keeping {:?} safe",
            board.mine_count(),
            board.width(),
            board.height(),
            safe
        );
    }
}
