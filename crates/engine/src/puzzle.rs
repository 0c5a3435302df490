use crate::grid::{self, BLANK, GRID_SIZE, SOLVED, TILE_COUNT};
use rand::seq::IteratorRandom;
use rand::Rng;

/// Number of random blank moves performed by [`Puzzle::shuffle`].
pub const SHUFFLE_STEPS: usize = 300;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    /// Nothing shuffled yet, the full picture is shown.
    Idle,
    Playing,
    Solved,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MoveOutcome {
    /// The puzzle is not being played.
    Ignored,
    /// The clicked cell is not in line with the blank.
    Rejected,
    Slid,
    /// The move completed the picture.
    Won,
}

impl MoveOutcome {
    pub fn is_accepted(self) -> bool {
        matches!(self, MoveOutcome::Slid | MoveOutcome::Won)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ShuffleOutcome {
    Scrambled,
    /// The random walk ended on the solved layout and counts as a win.
    AlreadySolved,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum GridError {
    #[display("tile {_0} is outside the board")]
    OutOfRange(#[error(not(source))] usize),
    #[display("tile {_0} appears more than once")]
    Duplicate(#[error(not(source))] usize),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Puzzle {
    tiles: [usize; TILE_COUNT],
    phase: Phase,
}

impl Default for Puzzle {
    fn default() -> Self {
        Self::new()
    }
}

impl Puzzle {
    pub fn new() -> Self {
        Puzzle {
            tiles: SOLVED,
            phase: Phase::Idle,
        }
    }

    /// Builds a puzzle in play from an explicit layout.
    pub fn from_tiles(tiles: [usize; TILE_COUNT]) -> Result<Self, GridError> {
        let mut seen = [false; TILE_COUNT];
        for &tile in tiles.iter() {
            if tile >= TILE_COUNT {
                return Err(GridError::OutOfRange(tile));
            }
            if seen[tile] {
                return Err(GridError::Duplicate(tile));
            }
            seen[tile] = true;
        }

        Ok(Puzzle {
            tiles,
            phase: Phase::Playing,
        })
    }

    pub fn tiles(&self) -> &[usize; TILE_COUNT] {
        &self.tiles
    }

    pub fn tile_at(&self, index: usize) -> usize {
        self.tiles[index]
    }

    pub fn blank_index(&self) -> usize {
        self.tiles
            .iter()
            .position(|&tile| tile == BLANK)
            .unwrap_or(TILE_COUNT - 1)
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_active(&self) -> bool {
        self.phase == Phase::Playing
    }

    /// Whether the piece belonging to the blank slot should be drawn.
    pub fn reveals_final_tile(&self) -> bool {
        self.phase != Phase::Playing
    }

    pub fn is_solved(&self) -> bool {
        self.tiles == SOLVED
    }

    pub fn is_solvable(&self) -> bool {
        grid::is_solvable(&self.tiles)
    }

    /// Slides every tile between `clicked` and the blank one step toward the
    /// blank. `clicked` must be below [`TILE_COUNT`].
    pub fn apply_move(&mut self, clicked: usize) -> MoveOutcome {
        if !self.is_active() {
            return MoveOutcome::Ignored;
        }

        let blank = self.blank_index();
        let (clicked_row, clicked_col) = grid::position(clicked);
        let (blank_row, blank_col) = grid::position(blank);

        let stride = if clicked_row == blank_row {
            1
        } else if clicked_col == blank_col {
            GRID_SIZE
        } else {
            return MoveOutcome::Rejected;
        };

        let mut i = blank;
        while i != clicked {
            let next = if clicked < i { i - stride } else { i + stride };
            self.tiles.swap(i, next);
            i = next;
        }

        if self.check_win() {
            MoveOutcome::Won
        } else {
            MoveOutcome::Slid
        }
    }

    /// Restarts from the solved layout and scrambles it with random blank moves.
    pub fn shuffle<R: Rng + ?Sized>(&mut self, rng: &mut R) -> ShuffleOutcome {
        self.tiles = SOLVED;
        self.phase = Phase::Playing;

        let mut blank = TILE_COUNT - 1;
        for _ in 0..SHUFFLE_STEPS {
            if let Some(next) = grid::adjacent_indices(blank).choose(rng) {
                self.tiles.swap(blank, next);
                blank = next;
            }
        }
        debug_assert!(self.is_solvable());
        log::debug!("shuffled {:?}", self.tiles);

        if self.check_win() {
            ShuffleOutcome::AlreadySolved
        } else {
            ShuffleOutcome::Scrambled
        }
    }

    fn check_win(&mut self) -> bool {
        let solved = self.is_solved();
        if solved {
            self.phase = Phase::Solved;
            log::info!("puzzle solved");
        }
        solved
    }
}
