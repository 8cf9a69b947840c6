//! Spawner: pipe-pair generation and power-up placement.
//!
//! All randomness goes through an explicit `Rng` handed in by the caller, so
//! any scenario can be replayed from a seed.

use rand::Rng;

use crate::core::entities::{Pipe, PowerUp};
use crate::types::*;

/// Counts ticks and fires every [`PIPE_SPAWN_TICKS`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SpawnTimer {
    ticks: u32,
}

impl SpawnTimer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Advance one tick; returns true on the tick the interval elapses.
    pub fn tick(&mut self) -> bool {
        self.ticks += 1;
        if self.ticks >= PIPE_SPAWN_TICKS {
            self.ticks = 0;
            true
        } else {
            false
        }
    }
}

/// Generate a pipe pair with a uniformly random gap center in
/// [`GAP_CENTER_MIN`], [`GAP_CENTER_MAX`].
pub fn generate_pipe_pair<R: Rng>(rng: &mut R) -> Pipe {
    let gap_center = rng.gen_range(GAP_CENTER_MIN..=GAP_CENTER_MAX) as f32;
    Pipe::at_gap_center(gap_center)
}

/// Roll the per-spawn power-up chance.
pub fn rolls_power_up<R: Rng>(rng: &mut R) -> bool {
    rng.gen_bool(POWER_UP_CHANCE)
}

/// Place a power-up inside the inset spawn region so that it overlaps none
/// of `pipes`.
///
/// Rejection sampling with a hard retry cap: the pipes never cover the whole
/// region under the stock constants, but the cap guarantees termination, and
/// on exhaustion the last candidate is accepted rather than failing.
pub fn generate_power_up<R: Rng>(rng: &mut R, pipes: &[Pipe]) -> PowerUp {
    let max_x = SCREEN_WIDTH - POWER_UP_MARGIN - POWER_UP_SIZE;
    let max_y = SCREEN_HEIGHT - GROUND_HEIGHT - POWER_UP_MARGIN - POWER_UP_SIZE;

    let mut candidate = sample_position(rng, max_x, max_y);
    for _ in 0..POWER_UP_MAX_RETRIES {
        if !pipes.iter().any(|p| p.hits(&candidate.rect)) {
            break;
        }
        candidate = sample_position(rng, max_x, max_y);
    }
    candidate
}

fn sample_position<R: Rng>(rng: &mut R, max_x: f32, max_y: f32) -> PowerUp {
    let x = rng.gen_range(POWER_UP_MARGIN..=max_x);
    let y = rng.gen_range(POWER_UP_MARGIN..=max_y);
    PowerUp::new(x, y)
}
