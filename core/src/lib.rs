#![no_std]

extern crate alloc;

use serde::{Deserialize, Serialize};

pub use board::*;
pub use engine::*;
pub use error::*;
pub use placement::*;
pub use tile::*;
pub use types::*;

mod board;
mod engine;
mod error;
mod placement;
mod tile;
mod types;

pub const MIN_SIDE: Coord = 2;
pub const MAX_WIDTH: Coord = 60;
pub const MAX_HEIGHT: Coord = 40;

/// Validated game parameters: board dimensions and mine count.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GameConfig {
    width: Coord,
    height: Coord,
    mines: TileCount,
}

impl GameConfig {
    /// Checks the supported ranges: `2 <= width <= 60`, `2 <= height <= 40`
    /// and `1 <= mines <= width * height - 1` (at least one safe tile).
    pub fn new(width: Coord, height: Coord, mines: TileCount) -> Result<Self> {
        if width < MIN_SIDE || width > MAX_WIDTH || height < MIN_SIDE || height > MAX_HEIGHT {
            return Err(GameError::InvalidDimensions);
        }
        if mines < 1 || mines > mult(width, height) - 1 {
            return Err(GameError::InvalidMineCount);
        }
        Ok(Self {
            width,
            height,
            mines,
        })
    }

    pub const fn width(&self) -> Coord {
        self.width
    }

    pub const fn height(&self) -> Coord {
        self.height
    }

    pub const fn mines(&self) -> TileCount {
        self.mines
    }

    pub const fn total_tiles(&self) -> TileCount {
        mult(self.width, self.height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_bounds_extremes() {
        assert!(GameConfig::new(2, 2, 1).is_ok());
        assert!(GameConfig::new(60, 40, 2399).is_ok());
    }

    #[test]
    fn rejects_out_of_range_dimensions() {
        assert_eq!(
            GameConfig::new(1, 10, 5).unwrap_err(),
            GameError::InvalidDimensions
        );
        assert_eq!(
            GameConfig::new(61, 10, 5).unwrap_err(),
            GameError::InvalidDimensions
        );
        assert_eq!(
            GameConfig::new(10, 41, 5).unwrap_err(),
            GameError::InvalidDimensions
        );
    }

    #[test]
    fn rejects_mine_counts_without_a_safe_tile() {
        assert_eq!(
            GameConfig::new(3, 3, 0).unwrap_err(),
            GameError::InvalidMineCount
        );
        assert_eq!(
            GameConfig::new(3, 3, 9).unwrap_err(),
            GameError::InvalidMineCount
        );
        assert!(GameConfig::new(3, 3, 8).is_ok());
    }
}
