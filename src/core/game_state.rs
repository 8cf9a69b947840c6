//! Game state module - owns the complete simulation state
//!
//! One `GameState` value is threaded through the main loop; `advance` moves
//! it forward exactly one fixed tick. Nothing here touches the terminal.

use rand::SeedableRng;
use rand_pcg::Pcg32;

use crate::core::entities::{Bird, Pipe, PowerUp};
use crate::core::spawn::{self, SpawnTimer};
use crate::types::*;

/// Complete simulation state for one life.
#[derive(Debug, Clone, PartialEq)]
pub struct GameState {
    pub bird: Bird,
    /// Pipe pairs in spawn order (relevant for passage processing).
    pub pipes: Vec<Pipe>,
    pub power_ups: Vec<PowerUp>,
    pub score: u32,
    /// Collected power-ups; each one raises the per-pipe score increment.
    pub power_ups_collected: u32,
    /// Ticks simulated while alive.
    pub ticks: u64,
    spawn_timer: SpawnTimer,
    rng: Pcg32,
    seed: u64,
    spawning_enabled: bool,
}

impl GameState {
    /// Fresh life: bird at the start position, empty world, score zero.
    pub fn new(seed: u64) -> Self {
        Self {
            bird: Bird::new(),
            pipes: Vec::new(),
            power_ups: Vec::new(),
            score: 0,
            power_ups_collected: 0,
            ticks: 0,
            spawn_timer: SpawnTimer::new(),
            rng: Pcg32::seed_from_u64(seed),
            seed,
            spawning_enabled: true,
        }
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Advance the simulation by one fixed tick.
    ///
    /// Order within the tick: flap events, spawning, gravity, scrolling,
    /// passage scoring, terminal detection, power-up collection. Once the
    /// bird is dead only flap no-ops run; the state is frozen until the
    /// caller replaces it.
    pub fn advance(&mut self, events: &[InputEvent]) {
        for event in events {
            if *event == InputEvent::Flap {
                self.bird.flap();
            }
        }

        if !self.bird.alive {
            return;
        }
        self.ticks += 1;

        if self.spawning_enabled && self.spawn_timer.tick() {
            self.pipes.push(spawn::generate_pipe_pair(&mut self.rng));
            if spawn::rolls_power_up(&mut self.rng) {
                let power_up = spawn::generate_power_up(&mut self.rng, &self.pipes);
                self.power_ups.push(power_up);
            }
        }

        self.bird.apply_gravity();
        for pipe in &mut self.pipes {
            pipe.advance();
        }
        for power_up in &mut self.power_ups {
            power_up.advance();
        }
        self.pipes.retain(|p| !p.off_screen());
        self.power_ups.retain(|p| !p.off_screen());

        // Passage: a pair scores once, on the tick the bird's x strictly
        // exceeds its center. Collections later in this same tick do not
        // retroactively change the increment.
        let increment = 1 + self.power_ups_collected;
        let mut gained = 0;
        for pipe in &mut self.pipes {
            if !pipe.passed && BIRD_X > pipe.center_x() {
                pipe.passed = true;
                gained += increment;
            }
        }
        self.score += gained;

        let bird_rect = self.bird.rect();
        if self.pipes.iter().any(|p| p.hits(&bird_rect))
            || self.bird.y < 0.0
            || self.bird.y > GROUND_LIMIT_Y
        {
            self.bird.alive = false;
        }

        let before = self.power_ups.len();
        self.power_ups.retain(|p| !p.rect.overlaps(&bird_rect));
        self.power_ups_collected += (before - self.power_ups.len()) as u32;
    }

    #[cfg(test)]
    pub fn disable_spawning(&mut self) {
        self.spawning_enabled = false;
    }
}
