//! Entity model: the bird, pipe pairs, and power-ups.
//!
//! Each entity is plain data plus its per-tick update rule. Tagging is done
//! by composition (a rect field next to a flag field), never by extending
//! the geometry type.

use crate::core::geom::Rect;
use crate::types::*;

/// The player. Horizontal position is fixed at [`BIRD_X`]; only the vertical
/// axis is simulated.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bird {
    pub y: f32,
    pub vy: f32,
    pub alive: bool,
}

impl Bird {
    pub fn new() -> Self {
        Self {
            y: BIRD_START_Y,
            vy: 0.0,
            alive: true,
        }
    }

    /// One tick of gravity: accelerate, then integrate position.
    pub fn apply_gravity(&mut self) {
        self.vy += GRAVITY;
        self.y += self.vy;
    }

    /// Reset vertical velocity to the flap impulse. No-op once dead.
    pub fn flap(&mut self) {
        if self.alive {
            self.vy = FLAP_VELOCITY;
        }
    }

    /// Collision rect, centered on the bird's position.
    pub fn rect(&self) -> Rect {
        Rect::from_center(BIRD_X, self.y, BIRD_WIDTH, BIRD_HEIGHT)
    }
}

impl Default for Bird {
    fn default() -> Self {
        Self::new()
    }
}

/// A vertically offset pipe pair sharing one gap and one `passed` flag.
///
/// The pair scores once, when its horizontal center scrolls past the bird.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pipe {
    pub top: Rect,
    pub bottom: Rect,
    pub passed: bool,
}

impl Pipe {
    /// Build a pair around `gap_center`, spawned with its horizontal center
    /// at `SCREEN_WIDTH + PIPE_WIDTH` (fully off-screen right).
    pub fn at_gap_center(gap_center: f32) -> Self {
        let center_x = SCREEN_WIDTH + PIPE_WIDTH;
        let top = Rect::new(
            center_x - PIPE_WIDTH / 2.0,
            gap_center - PIPE_GAP / 2.0 - PIPE_HEIGHT,
            PIPE_WIDTH,
            PIPE_HEIGHT,
        );
        let bottom = Rect::new(
            center_x - PIPE_WIDTH / 2.0,
            gap_center + PIPE_GAP / 2.0,
            PIPE_WIDTH,
            PIPE_HEIGHT,
        );
        Self {
            top,
            bottom,
            passed: false,
        }
    }

    /// Horizontal center shared by both members.
    pub fn center_x(&self) -> f32 {
        self.top.center_x()
    }

    /// Scroll one tick to the left.
    pub fn advance(&mut self) {
        self.top.shift_x(-PIPE_SPEED);
        self.bottom.shift_x(-PIPE_SPEED);
    }

    /// Fully off the left edge; safe to prune.
    pub fn off_screen(&self) -> bool {
        self.top.right() < 0.0
    }

    pub fn hits(&self, rect: &Rect) -> bool {
        rect.overlaps(&self.top) || rect.overlaps(&self.bottom)
    }
}

/// A collectible square scrolling at pipe speed. Collecting it raises the
/// per-pipe score increment for the rest of the life.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PowerUp {
    pub rect: Rect,
}

impl PowerUp {
    pub fn new(x: f32, y: f32) -> Self {
        Self {
            rect: Rect::new(x, y, POWER_UP_SIZE, POWER_UP_SIZE),
        }
    }

    pub fn advance(&mut self) {
        self.rect.shift_x(-PIPE_SPEED);
    }

    pub fn off_screen(&self) -> bool {
        self.rect.right() < 0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gravity_accelerates_then_integrates() {
        let mut bird = Bird::new();
        bird.apply_gravity();
        assert_eq!(bird.vy, GRAVITY);
        assert_eq!(bird.y, BIRD_START_Y + GRAVITY);

        bird.apply_gravity();
        assert_eq!(bird.vy, 2.0 * GRAVITY);
        assert_eq!(bird.y, BIRD_START_Y + GRAVITY + 2.0 * GRAVITY);
    }

    #[test]
    fn flap_resets_velocity_while_alive() {
        let mut bird = Bird::new();
        bird.vy = 5.0;
        bird.flap();
        assert_eq!(bird.vy, FLAP_VELOCITY);
    }

    #[test]
    fn flap_is_a_no_op_once_dead() {
        let mut bird = Bird::new();
        bird.alive = false;
        bird.vy = 5.0;
        bird.flap();
        assert_eq!(bird.vy, 5.0);
    }

    #[test]
    fn pipe_pair_gap_is_exact() {
        let pipe = Pipe::at_gap_center(300.0);
        assert_eq!(pipe.bottom.top() - pipe.top.bottom(), PIPE_GAP);
        assert_eq!(pipe.top.bottom(), 300.0 - PIPE_GAP / 2.0);
        assert_eq!(pipe.bottom.top(), 300.0 + PIPE_GAP / 2.0);
    }

    #[test]
    fn pipe_spawns_with_center_off_screen_right() {
        let pipe = Pipe::at_gap_center(300.0);
        assert_eq!(pipe.center_x(), SCREEN_WIDTH + PIPE_WIDTH);
        assert_eq!(pipe.bottom.center_x(), pipe.top.center_x());
        assert!(pipe.top.left() >= SCREEN_WIDTH);
    }

    #[test]
    fn pipe_advance_moves_both_members() {
        let mut pipe = Pipe::at_gap_center(300.0);
        let before = pipe.center_x();
        pipe.advance();
        assert_eq!(pipe.center_x(), before - PIPE_SPEED);
        assert_eq!(pipe.bottom.center_x(), before - PIPE_SPEED);
    }

    #[test]
    fn off_screen_requires_the_full_width_gone() {
        let mut pipe = Pipe::at_gap_center(300.0);
        assert!(!pipe.off_screen());
        pipe.top.x = -PIPE_WIDTH + 1.0;
        pipe.bottom.x = pipe.top.x;
        assert!(!pipe.off_screen());
        pipe.top.x = -PIPE_WIDTH - 1.0;
        assert!(pipe.off_screen());
    }
}
