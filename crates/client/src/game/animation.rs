use crate::animation::*;
use rand::Rng;
use tile_engine::{grid, BLANK, TILE_COUNT};

#[derive(Clone, Debug, PartialEq)]
pub struct FloatingTile {
    pub tile: usize,
    pub row: f64,
    pub col: f64,
}

impl FloatingTile {
    pub fn resting(tile: usize, index: usize) -> Self {
        let (row, col) = grid::position(index);
        FloatingTile {
            tile,
            row: row as f64,
            col: col as f64,
        }
    }
}

pub struct TileAnimator {
    tile: usize,
    row: (f64, f64),
    col: (f64, f64),
    duration: usize,
    elapsed: usize,
}

impl TileAnimator {
    pub fn new(tile: usize, from: usize, to: usize, duration: usize) -> Self {
        let (from_row, from_col) = grid::position(from);
        let (to_row, to_col) = grid::position(to);
        TileAnimator {
            tile,
            row: (from_row as f64, to_row as f64),
            col: (from_col as f64, to_col as f64),
            duration,
            elapsed: 0,
        }
    }
}

impl Animation for TileAnimator {
    type Frame = FloatingTile;

    fn advance_frames(&mut self, frames: usize) {
        self.elapsed += frames;
    }

    fn current_frame(&self) -> FloatingTile {
        let relative_time = self.elapsed.min(self.duration) as f64 / self.duration as f64;
        FloatingTile {
            tile: self.tile,
            row: interpolation(self.row, relative_time),
            col: interpolation(self.col, relative_time),
        }
    }

    fn is_over(&self) -> bool {
        self.duration <= self.elapsed
    }
}

/// Moves every tile from its slot in `before` to its slot in `after`.
pub fn slide_animation(
    before: &[usize; TILE_COUNT],
    after: &[usize; TILE_COUNT],
    duration: usize,
) -> Animator<FloatingTile> {
    let mut origins = [0; TILE_COUNT];
    for (index, &tile) in before.iter().enumerate() {
        origins[tile] = index;
    }

    let animations = after
        .iter()
        .enumerate()
        .filter(|&(_, &tile)| tile != BLANK)
        .map(|(index, &tile)| {
            Box::new(TileAnimator::new(tile, origins[tile], index, duration))
                as Box<dyn Animation<Frame = FloatingTile>>
        })
        .collect();
    Animator::new(animations)
}

#[derive(Clone, Debug, PartialEq)]
pub struct ConfettiPiece {
    pub id: usize,
    pub color: &'static str,
    pub x: f64,
    pub y: f64,
    pub rotation: f64,
    pub opacity: f64,
}

/// A confetti piece falling across the board. Positions are fractions of the
/// board edge, so `(0, 0)` is the top-left corner and `(1, 1)` the bottom-right.
pub struct ConfettiAnimator {
    id: usize,
    color: &'static str,
    x: (f64, f64),
    y: (f64, f64),
    delay: usize,
    duration: usize,
    elapsed: usize,
}

impl ConfettiAnimator {
    pub fn new(
        id: usize,
        color: &'static str,
        x: (f64, f64),
        y: (f64, f64),
        delay: usize,
        duration: usize,
    ) -> Self {
        ConfettiAnimator {
            id,
            color,
            x,
            y,
            delay,
            duration,
            elapsed: 0,
        }
    }

    pub fn random(id: usize, colors: &[&'static str], rng: &mut impl Rng) -> Self {
        let color = colors[rng.gen_range(0..colors.len())];
        let x = (rng.gen::<f64>() * 2. - 0.5, rng.gen::<f64>() * 1.5 - 0.25);
        let y = (-rng.gen::<f64>() * 0.125, 1. + rng.gen::<f64>() * 0.125);
        let delay = (rng.gen::<f64>() * 0.5 * 60.) as usize;
        let duration = ((2. + rng.gen::<f64>()) * 60.) as usize;
        ConfettiAnimator::new(id, color, x, y, delay, duration)
    }
}

impl Animation for ConfettiAnimator {
    type Frame = ConfettiPiece;

    fn advance_frames(&mut self, frames: usize) {
        self.elapsed += frames;
    }

    fn current_frame(&self) -> ConfettiPiece {
        let started = self.elapsed >= self.delay;
        let relative_time = self.elapsed.saturating_sub(self.delay).min(self.duration) as f64
            / self.duration as f64;
        let opacity = if started {
            ((1. - relative_time) * 5.).min(1.)
        } else {
            0.
        };
        ConfettiPiece {
            id: self.id,
            color: self.color,
            x: interpolation(self.x, relative_time),
            y: interpolation(self.y, relative_time * relative_time),
            rotation: relative_time * 720.,
            opacity,
        }
    }

    fn is_over(&self) -> bool {
        self.duration + self.delay <= self.elapsed
    }
}
