pub trait Animation {
    type Frame;

    fn advance_frames(&mut self, frames: usize);
    fn current_frame(&self) -> Self::Frame;
    fn is_over(&self) -> bool;
}

pub fn interpolation((from, to): (f64, f64), position: f64) -> f64 {
    (from * (1. - position)) + (to * position)
}

pub struct Animator<T> {
    animations: Vec<Box<dyn Animation<Frame = T>>>,
}

impl<T> Animator<T> {
    pub fn new(animations: Vec<Box<dyn Animation<Frame = T>>>) -> Self {
        Animator { animations }
    }
}

impl<T> Animation for Animator<T> {
    type Frame = Vec<T>;

    fn advance_frames(&mut self, frames: usize) {
        for anim in self.animations.iter_mut() {
            anim.advance_frames(frames);
        }
    }

    fn current_frame(&self) -> Vec<T> {
        self.animations
            .iter()
            .map(|anim| anim.current_frame())
            .collect()
    }

    fn is_over(&self) -> bool {
        self.animations.iter().all(|anim| anim.is_over())
    }
}

const FRAMES_PER_SECOND: f64 = 60.;

/// Drives an animation from a millisecond clock supplied by the caller,
/// stepping it in whole 60fps frames.
pub struct FloatAnimator<A: Animation + ?Sized> {
    started_at: f64,
    frames_played: usize,
    pub animation: Box<A>,
}

impl<A: Animation + ?Sized> FloatAnimator<A> {
    pub fn new(animation: Box<A>, now: f64) -> Self {
        FloatAnimator {
            started_at: now,
            frames_played: 0,
            animation,
        }
    }

    pub fn animate(&mut self, now: f64) {
        let frames = ((now - self.started_at).max(0.) * FRAMES_PER_SECOND / 1000.) as usize;
        let pending = frames.saturating_sub(self.frames_played);
        self.frames_played = frames.max(self.frames_played);
        if pending > 0 {
            self.animation.advance_frames(pending);
        }
    }

    pub fn frame(&self) -> A::Frame {
        self.animation.current_frame()
    }
}

impl<A: Animation> FloatAnimator<A> {
    /// Swaps in a new animation without resetting the clock.
    pub fn replace(&mut self, animation: A) {
        self.animation = Box::new(animation);
    }
}

/// Runs animations side by side and drops them once they finish.
pub struct EndlessAnimator<T> {
    animations: Vec<Box<dyn Animation<Frame = T>>>,
}

impl<T> EndlessAnimator<T> {
    pub fn new() -> Self {
        EndlessAnimator {
            animations: Vec::new(),
        }
    }

    pub fn push(&mut self, animation: impl Animation<Frame = T> + 'static) {
        self.animations.push(Box::new(animation));
    }

    pub fn clear(&mut self) {
        self.animations.clear();
    }
}

impl<T> Animation for EndlessAnimator<T> {
    type Frame = Vec<T>;

    fn advance_frames(&mut self, frames: usize) {
        for anim in self.animations.iter_mut() {
            anim.advance_frames(frames);
        }
        self.animations.retain(|x| !x.is_over());
    }

    fn current_frame(&self) -> Vec<T> {
        self.animations.iter().map(|x| x.current_frame()).collect()
    }

    fn is_over(&self) -> bool {
        true
    }
}

#[cfg(test)]
mod test {
    use super::*;

    struct Double {
        elapsed: usize,
        duration: usize,
    }

    impl Double {
        fn new(duration: usize) -> Self {
            Double {
                elapsed: 0,
                duration,
            }
        }
    }

    impl Animation for Double {
        type Frame = usize;

        fn advance_frames(&mut self, frames: usize) {
            self.elapsed += frames;
        }

        fn current_frame(&self) -> usize {
            self.elapsed * 2
        }

        fn is_over(&self) -> bool {
            self.elapsed >= self.duration
        }
    }

    #[test]
    fn test_animator() {
        let mut animator = Animator::new(vec![
            Box::new(Double::new(2)) as Box<dyn Animation<Frame = usize>>,
            Box::new(Double::new(5)),
        ]);

        let mut frames = Vec::new();

        loop {
            frames.push(animator.current_frame());
            animator.advance_frames(1);
            if animator.is_over() {
                break;
            }
        }

        assert_eq!(
            frames,
            vec![vec![0, 0], vec![2, 2], vec![4, 4], vec![6, 6], vec![8, 8]]
        );
    }

    #[test]
    fn test_float_animator_counts_whole_frames() {
        let mut animator = FloatAnimator::new(Box::new(Double::new(10)), 1000.);
        assert_eq!(animator.frame(), 0);

        animator.animate(1010.);
        assert_eq!(animator.frame(), 0);

        animator.animate(1050.);
        assert_eq!(animator.frame(), 6);

        // a clock running backwards never rewinds
        animator.animate(1020.);
        assert_eq!(animator.frame(), 6);

        animator.animate(1100.);
        assert_eq!(animator.frame(), 12);

        animator.replace(Double::new(4));
        assert_eq!(animator.frame(), 0);
        animator.animate(1150.);
        assert_eq!(animator.frame(), 6);
    }

    #[test]
    fn test_endless_animator_drops_finished() {
        let mut animator = EndlessAnimator::new();
        animator.push(Double::new(1));
        animator.push(Double::new(3));

        assert_eq!(animator.current_frame(), vec![0, 0]);
        animator.advance_frames(1);
        assert_eq!(animator.current_frame(), vec![2]);
        animator.advance_frames(2);
        assert!(animator.current_frame().is_empty());
    }

    #[test]
    fn test_interpolation() {
        assert_eq!(interpolation((0., 4.), 0.), 0.);
        assert_eq!(interpolation((0., 4.), 0.5), 2.);
        assert_eq!(interpolation((2., 1.), 1.), 1.);
    }
}
