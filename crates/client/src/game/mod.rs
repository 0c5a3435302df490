mod animation;

use crate::animation::*;
use rand::prelude::*;
use std::cell::RefCell;
use std::rc::Rc;
use tile_engine::{grid, MoveOutcome, Phase, Puzzle, ShuffleOutcome, BLANK, GRID_SIZE};
use yew::Reducible;

pub use animation::*;

const SLIDE_FRAMES: usize = 6;
const CONFETTI_PIECES: usize = 50;

const CONFETTI_COLORS: [&str; 16] = [
    "#f44336", "#e91e63", "#9c27b0", "#673ab7", "#3f51b5", "#2196f3", "#03a9f4", "#00bcd4",
    "#009688", "#4CAF50", "#8BC34A", "#CDDC39", "#FFEB3B", "#FFC107", "#FF9800", "#FF5722",
];

/// Grid index under a point given in board pixels, if the point is on the board.
pub fn cell_index(x: f64, y: f64, cell_size: f64) -> Option<usize> {
    if x < 0. || y < 0. || cell_size <= 0. {
        return None;
    }
    let col = (x / cell_size) as usize;
    let row = (y / cell_size) as usize;
    (row < GRID_SIZE && col < GRID_SIZE).then(|| grid::index_of(row, col))
}

pub enum GameAction {
    Shuffle,
    Move(usize),
    /// Advances the animations to the given clock time in milliseconds.
    Animate(f64),
}

#[derive(Clone)]
pub struct Game {
    pub puzzle: Puzzle,
    rng: StdRng,
    pub slides: Rc<RefCell<FloatAnimator<Animator<FloatingTile>>>>,
    pub confetti: Rc<RefCell<FloatAnimator<EndlessAnimator<ConfettiPiece>>>>,
}

impl Game {
    pub fn new(seed: u64, now: f64) -> Self {
        Game {
            puzzle: Puzzle::new(),
            rng: StdRng::seed_from_u64(seed),
            slides: Rc::new(RefCell::new(FloatAnimator::new(
                Box::new(Animator::new(Vec::new())),
                now,
            ))),
            confetti: Rc::new(RefCell::new(FloatAnimator::new(
                Box::new(EndlessAnimator::new()),
                now,
            ))),
        }
    }

    pub fn is_won(&self) -> bool {
        self.puzzle.phase() == Phase::Solved
    }

    pub fn tiles(&self) -> Vec<FloatingTile> {
        let slides = self.slides.borrow();
        if !slides.animation.is_over() {
            return slides.frame();
        }
        self.puzzle
            .tiles()
            .iter()
            .enumerate()
            .filter(|&(_, &tile)| tile != BLANK)
            .map(|(index, &tile)| FloatingTile::resting(tile, index))
            .collect()
    }

    /// The piece missing from the blank slot, shown only outside of play.
    pub fn final_tile(&self) -> Option<FloatingTile> {
        self.puzzle
            .reveals_final_tile()
            .then(|| FloatingTile::resting(BLANK, self.puzzle.blank_index()))
    }

    pub fn confetti(&self) -> Vec<ConfettiPiece> {
        self.confetti.borrow().frame()
    }

    fn shuffle(&mut self) {
        self.slides.borrow_mut().replace(Animator::new(Vec::new()));
        self.confetti.borrow_mut().animation.clear();
        let outcome = self.puzzle.shuffle(&mut self.rng);
        self.shuffled(outcome);
    }

    fn shuffled(&mut self, outcome: ShuffleOutcome) {
        if outcome == ShuffleOutcome::AlreadySolved {
            log::info!("shuffle landed on the solved picture");
            self.celebrate();
        }
    }

    fn slide(&mut self, index: usize) {
        let before = *self.puzzle.tiles();
        let outcome = self.puzzle.apply_move(index);
        if outcome.is_accepted() && &before != self.puzzle.tiles() {
            self.slides.borrow_mut().replace(slide_animation(
                &before,
                self.puzzle.tiles(),
                SLIDE_FRAMES,
            ));
        }
        if outcome == MoveOutcome::Won {
            self.celebrate();
        }
    }

    fn celebrate(&mut self) {
        let mut confetti = self.confetti.borrow_mut();
        confetti.animation.clear();
        for id in 0..CONFETTI_PIECES {
            confetti
                .animation
                .push(ConfettiAnimator::random(id, &CONFETTI_COLORS, &mut self.rng));
        }
    }
}

impl Reducible for Game {
    type Action = GameAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut game = (*self).clone();

        match action {
            GameAction::Shuffle => game.shuffle(),
            GameAction::Move(index) => game.slide(index),
            GameAction::Animate(now) => {
                game.slides.borrow_mut().animate(now);
                game.confetti.borrow_mut().animate(now);
            }
        }

        game.into()
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use tile_engine::grid::SOLVED;
    use tile_engine::TILE_COUNT;

    fn one_move_from_solved() -> Game {
        let mut game = Game::new(5, 0.);
        let mut tiles = SOLVED;
        tiles.swap(14, 15);
        game.puzzle = Puzzle::from_tiles(tiles).unwrap();
        game
    }

    #[test]
    fn test_new_game_shows_full_picture() {
        let game = Game::new(1, 0.);
        assert!(!game.is_won());
        assert_eq!(game.tiles().len(), TILE_COUNT - 1);
        assert_eq!(game.final_tile(), Some(FloatingTile::resting(BLANK, 15)));
        assert!(game.confetti().is_empty());

        let game = Rc::new(game).reduce(GameAction::Move(14));
        assert_eq!(game.puzzle.tiles(), &SOLVED);
        assert!(game.slides.borrow().animation.is_over());
    }

    #[test]
    fn test_winning_move_slides_and_celebrates() {
        let game = Rc::new(one_move_from_solved()).reduce(GameAction::Move(15));
        assert!(game.is_won());
        assert_eq!(game.confetti().len(), CONFETTI_PIECES);
        assert_eq!(game.final_tile(), Some(FloatingTile::resting(BLANK, 15)));

        let moving = game.tiles().into_iter().find(|x| x.tile == 15).unwrap();
        assert_eq!((moving.row, moving.col), (3., 3.));

        let game = game.reduce(GameAction::Animate(50.));
        let moving = game.tiles().into_iter().find(|x| x.tile == 15).unwrap();
        assert_eq!((moving.row, moving.col), (3., 2.5));

        let game = game.reduce(GameAction::Animate(100.));
        assert!(game.slides.borrow().animation.is_over());
        assert_eq!(
            game.tiles().into_iter().find(|x| x.tile == 15),
            Some(FloatingTile::resting(15, 14))
        );
        assert_eq!(game.confetti().len(), CONFETTI_PIECES);

        let game = game.reduce(GameAction::Animate(4000.));
        assert!(game.confetti().is_empty());
    }

    #[test]
    fn test_shuffle_clears_animations() {
        let game = Rc::new(one_move_from_solved()).reduce(GameAction::Move(15));
        assert!(!game.slides.borrow().animation.is_over());
        assert!(!game.confetti().is_empty());

        let game = game.reduce(GameAction::Shuffle);
        assert!(game.slides.borrow().animation.is_over());
        if game.is_won() {
            assert_eq!(game.confetti().len(), CONFETTI_PIECES);
        } else {
            assert!(game.puzzle.is_active());
            assert!(game.confetti().is_empty());
            assert_eq!(game.final_tile(), None);
        }
    }

    #[test]
    fn test_shuffle_onto_solved_picture_celebrates() {
        let mut game = Game::new(2, 0.);
        game.shuffled(ShuffleOutcome::Scrambled);
        assert!(game.confetti().is_empty());

        game.shuffled(ShuffleOutcome::AlreadySolved);
        assert_eq!(game.confetti().len(), CONFETTI_PIECES);
    }

    #[test]
    fn test_rejected_move_keeps_resting_tiles() {
        let mut game = Game::new(3, 0.);
        game.puzzle = Puzzle::from_tiles(SOLVED).unwrap();
        let game = Rc::new(game).reduce(GameAction::Move(0));
        assert!(game.slides.borrow().animation.is_over());
        assert_eq!(game.tiles()[0], FloatingTile::resting(1, 0));
    }

    #[test]
    fn test_cell_index() {
        assert_eq!(cell_index(0., 0., 100.), Some(0));
        assert_eq!(cell_index(99.9, 0., 100.), Some(0));
        assert_eq!(cell_index(100., 0., 100.), Some(1));
        assert_eq!(cell_index(350., 120., 100.), Some(7));
        assert_eq!(cell_index(399., 399., 100.), Some(15));
        assert_eq!(cell_index(400., 10., 100.), None);
        assert_eq!(cell_index(10., 400., 100.), None);
        assert_eq!(cell_index(-1., 10., 100.), None);
        assert_eq!(cell_index(10., 10., 0.), None);
    }
}
