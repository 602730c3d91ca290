use ndarray::Array2;
use serde::{Deserialize, Serialize};

use crate::*;

/// Grid of tiles addressed by 1-based `(x, y)` coordinates.
///
/// Storage is row-major, so a coordinate maps to the linear index
/// `(y - 1) * width + (x - 1)`. Mine placement samples over that index space.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Board {
    tiles: Array2<Tile>,
    mine_count: TileCount,
    mines_placed: bool,
}

impl Board {
    /// Fresh board for `config`: every tile hidden and unflagged, no mines.
    pub fn new(config: GameConfig) -> Self {
        Self {
            tiles: Array2::default((config.height() as usize, config.width() as usize)),
            mine_count: config.mines(),
            mines_placed: false,
        }
    }

    /// Board with an explicit mine layout, adjacency already computed.
    /// Meant for deterministic tests and scripted games.
    pub fn from_mine_coords(config: GameConfig, mine_coords: &[Coord2]) -> Result<Self> {
        let mut board = Self::new(config);

        for &coords in mine_coords {
            let coords = board.validate_coords(coords)?;
            board.tiles[coords.to_nd_index()].has_mine = true;
        }

        let count: TileCount = board
            .tiles
            .iter()
            .filter(|tile| tile.has_mine)
            .count()
            .try_into()
            .unwrap();
        if count < 1 || count > board.total_tiles() - 1 {
            return Err(GameError::InvalidMineCount);
        }

        board.mine_count = count;
        board.mines_placed = true;
        board.compute_adjacency();
        Ok(board)
    }

    pub fn width(&self) -> Coord {
        self.tiles.dim().1.try_into().unwrap()
    }

    pub fn height(&self) -> Coord {
        self.tiles.dim().0.try_into().unwrap()
    }

    pub fn total_tiles(&self) -> TileCount {
        self.tiles.len().try_into().unwrap()
    }

    pub fn mine_count(&self) -> TileCount {
        self.mine_count
    }

    pub fn safe_tile_count(&self) -> TileCount {
        self.total_tiles() - self.mine_count
    }

    pub fn mines_placed(&self) -> bool {
        self.mines_placed
    }

    pub fn validate_coords(&self, coords: Coord2) -> Result<Coord2> {
        let (x, y) = coords;
        if x >= 1 && x <= self.width() && y >= 1 && y <= self.height() {
            Ok(coords)
        } else {
            Err(GameError::OutOfBounds)
        }
    }

    /// Tile at 1-based `coords`. Callers validate bounds first.
    pub fn tile(&self, coords: Coord2) -> Tile {
        self.tiles[coords.to_nd_index()]
    }

    pub fn iter_neighbors(&self, coords: Coord2) -> NeighborIter {
        NeighborIter::new(coords, (self.width(), self.height()))
    }

    pub fn adjacent_mine_count(&self, coords: Coord2) -> u8 {
        self.iter_neighbors(coords)
            .filter(|&pos| self.tile(pos).has_mine)
            .count()
            .try_into()
            .unwrap()
    }

    /// Runs the placement strategy exactly once, keeping `(x, y)` of the
    /// first reveal free of mines, then computes every tile's adjacency
    /// count. Repeat calls are ignored.
    pub fn place_mines<P: MinePlacer>(&mut self, placer: P, safe: Coord2) {
        if self.mines_placed {
            log::warn!("mines already placed, ignoring repeat placement");
            return;
        }

        placer.place(self, safe);
        self.mines_placed = true;
        self.compute_adjacency();
    }

    pub(crate) fn set_mine(&mut self, coords: Coord2) {
        self.tiles[coords.to_nd_index()].has_mine = true;
    }

    pub(crate) fn unhide(&mut self, coords: Coord2) {
        let tile = &mut self.tiles[coords.to_nd_index()];
        tile.hidden = false;
        tile.flagged = false;
    }

    pub(crate) fn set_flag(&mut self, coords: Coord2, flagged: bool) {
        self.tiles[coords.to_nd_index()].flagged = flagged;
    }

    /// Stores each non-mine tile's count of mine-bearing neighbors. Mine
    /// tiles keep a count of 0.
    pub(crate) fn compute_adjacency(&mut self) {
        for y in 1..=self.height() {
            for x in 1..=self.width() {
                if self.tile((x, y)).has_mine {
                    continue;
                }
                let count = self.adjacent_mine_count((x, y));
                self.tiles[(x, y).to_nd_index()].adjacent_mines = count;
            }
        }
    }

    /// Unhides and unflags every tile. Presentation support for the final
    /// render after a win or loss; does not affect the decided outcome.
    pub fn reveal_all(&mut self) {
        for tile in self.tiles.iter_mut() {
            tile.hidden = false;
            tile.flagged = false;
        }
    }

    /// True iff no tile is simultaneously hidden and non-mine.
    pub fn is_won(&self) -> bool {
        !self.tiles.iter().any(|tile| tile.hidden && !tile.has_mine)
    }

    pub(crate) fn index_to_coords(&self, index: TileCount) -> Coord2 {
        let width = self.width() as TileCount;
        let x = (index % width) as Coord + 1;
        let y = (index / width) as Coord + 1;
        (x, y)
    }

    pub(crate) fn coords_to_index(&self, coords: Coord2) -> TileCount {
        let (x, y) = coords;
        (y as TileCount - 1) * self.width() as TileCount + (x as TileCount - 1)
    }
}
