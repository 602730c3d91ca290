use serde::{Deserialize, Serialize};

/// One cell of the grid.
///
/// The source game packed all of this into a single byte; named fields make
/// the invariants visible instead: a revealed tile is never flagged, and
/// `adjacent_mines` stays 0 on mine tiles.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tile {
    pub(crate) has_mine: bool,
    pub(crate) hidden: bool,
    pub(crate) flagged: bool,
    pub(crate) adjacent_mines: u8,
}

impl Tile {
    pub const fn has_mine(self) -> bool {
        self.has_mine
    }

    pub const fn is_hidden(self) -> bool {
        self.hidden
    }

    pub const fn is_revealed(self) -> bool {
        !self.hidden
    }

    pub const fn is_flagged(self) -> bool {
        self.flagged
    }

    /// Mines among the up-to-8 neighbors. Only meaningful on non-mine tiles,
    /// and only after mine placement has run.
    pub const fn adjacent_mines(self) -> u8 {
        self.adjacent_mines
    }
}

impl Default for Tile {
    fn default() -> Self {
        Self {
            has_mine: false,
            hidden: true,
            flagged: false,
            adjacent_mines: 0,
        }
    }
}
