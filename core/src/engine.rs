use alloc::collections::VecDeque;
use serde::{Deserialize, Serialize};

use crate::*;

#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum GameState {
    Ready,
    Playing,
    Won,
    Lost,
}

impl GameState {
    pub const fn is_ready(self) -> bool {
        matches!(self, Self::Ready)
    }

    pub const fn is_finished(self) -> bool {
        matches!(self, Self::Won | Self::Lost)
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::Ready
    }
}

/// Outcome of a reveal action.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum RevealOutcome {
    /// The target was flagged or already revealed; nothing changed.
    NoOp,
    Continue,
    Won,
    Lost,
}

impl RevealOutcome {
    pub const fn has_update(self) -> bool {
        !matches!(self, Self::NoOp)
    }

    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Won | Self::Lost)
    }
}

/// Outcome of a flag toggle.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum FlagOutcome {
    NoChange,
    Changed,
}

impl FlagOutcome {
    pub const fn has_update(self) -> bool {
        matches!(self, Self::Changed)
    }
}

/// Owns the board for one game session and drives the
/// `Ready -> Playing -> Won | Lost` state machine.
///
/// Mines are placed lazily by the first [`reveal`](Self::reveal), which keeps
/// the clicked tile safe. The board is only reachable immutably from outside;
/// all mutation goes through engine operations.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BoardEngine {
    board: Board,
    seed: u64,
    state: GameState,
    revealed_count: TileCount,
}

impl BoardEngine {
    pub fn new(config: GameConfig, seed: u64) -> Self {
        Self {
            board: Board::new(config),
            seed,
            state: GameState::default(),
            revealed_count: 0,
        }
    }

    /// Engine over an explicit mine layout, for deterministic tests and
    /// scripted games. The first reveal does not relocate mines.
    pub fn with_mines(config: GameConfig, mine_coords: &[Coord2]) -> Result<Self> {
        Ok(Self {
            board: Board::from_mine_coords(config, mine_coords)?,
            seed: 0,
            state: GameState::default(),
            revealed_count: 0,
        })
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn state(&self) -> GameState {
        self.state
    }

    pub fn is_finished(&self) -> bool {
        self.state.is_finished()
    }

    /// True iff every non-mine tile is revealed. [`reveal`](Self::reveal)'s
    /// return value is authoritative; this rescans the board and exists for
    /// external polling.
    pub fn is_won(&self) -> bool {
        self.board.is_won()
    }

    /// Reveals the tile at 1-based `(x, y)`.
    ///
    /// The first call places the mines, treating the target as the safe
    /// tile. A flagged or already-revealed target is a [`RevealOutcome::NoOp`]
    /// (placement still happens first, matching the source game's ordering).
    /// Revealing a mine loses without unhiding anything; the loss screen goes
    /// through [`reveal_all`](Self::reveal_all). Revealing a zero-adjacency
    /// tile flood-fills its region.
    pub fn reveal(&mut self, coords: Coord2) -> Result<RevealOutcome> {
        let coords = self.board.validate_coords(coords)?;
        self.check_not_finished()?;

        if !self.board.mines_placed() {
            self.board.place_mines(RandomPlacer::new(self.seed), coords);
            self.mark_started();
        }

        let tile = self.board.tile(coords);
        if tile.is_flagged() || tile.is_revealed() {
            return Ok(RevealOutcome::NoOp);
        }

        if tile.has_mine() {
            log::debug!("mine hit at {:?}", coords);
            self.state = GameState::Lost;
            return Ok(RevealOutcome::Lost);
        }

        self.flood_reveal(coords);

        if self.revealed_count == self.board.safe_tile_count() {
            self.state = GameState::Won;
            Ok(RevealOutcome::Won)
        } else {
            self.mark_started();
            Ok(RevealOutcome::Continue)
        }
    }

    /// Worklist flood-fill: unhide the starting tile, and wherever a tile's
    /// adjacency count is zero, queue its hidden unflagged neighbors. The
    /// hidden check on pop is what terminates the fill; each tile goes
    /// hidden -> revealed at most once.
    fn flood_reveal(&mut self, start: Coord2) {
        let mut worklist = VecDeque::from([start]);

        while let Some(coords) = worklist.pop_front() {
            let tile = self.board.tile(coords);
            if tile.is_revealed() || tile.is_flagged() {
                continue;
            }

            self.board.unhide(coords);
            self.revealed_count += 1;

            if tile.adjacent_mines() == 0 {
                worklist.extend(self.board.iter_neighbors(coords).filter(|&pos| {
                    let neighbor = self.board.tile(pos);
                    neighbor.is_hidden() && !neighbor.is_flagged()
                }));
            }
        }
    }

    /// Toggles the flag on a hidden tile; revealed tiles are unaffected.
    pub fn toggle_flag(&mut self, coords: Coord2) -> Result<FlagOutcome> {
        let coords = self.board.validate_coords(coords)?;
        self.check_not_finished()?;

        let tile = self.board.tile(coords);
        if tile.is_hidden() {
            self.board.set_flag(coords, !tile.is_flagged());
            Ok(FlagOutcome::Changed)
        } else {
            Ok(FlagOutcome::NoChange)
        }
    }

    /// Unhides and unflags the whole board for the end-of-round render.
    pub fn reveal_all(&mut self) {
        self.board.reveal_all();
    }

    fn mark_started(&mut self) {
        if self.state.is_ready() {
            self.state = GameState::Playing;
        }
    }

    fn check_not_finished(&self) -> Result<()> {
        if self.state.is_finished() {
            Err(GameError::AlreadyEnded)
        } else {
            Ok(())
        }
    }
}
