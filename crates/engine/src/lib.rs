//! Sliding tile puzzle engine.
//!
//! The grid is a permutation of tile identifiers where `0` marks the blank
//! slot. Everything here is pure state: rendering and input translation live
//! in the client crate.

pub mod grid;
mod puzzle;

pub use grid::{BLANK, GRID_SIZE, TILE_COUNT};
pub use puzzle::{GridError, MoveOutcome, Phase, Puzzle, ShuffleOutcome, SHUFFLE_STEPS};
