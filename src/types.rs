//! Core types shared across the application
//! This module contains pure constants and data types with no external dependencies

/// Simulation space dimensions, in sim pixels.
///
/// The simulation always runs in this fixed 400x600 space; the terminal view
/// scales it to whatever viewport is available.
pub const SCREEN_WIDTH: f32 = 400.0;
pub const SCREEN_HEIGHT: f32 = 600.0;

/// Bird placement and logical sprite size
pub const BIRD_X: f32 = 100.0;
pub const BIRD_START_Y: f32 = 300.0;
pub const BIRD_WIDTH: f32 = 34.0;
pub const BIRD_HEIGHT: f32 = 24.0;

/// Pipe geometry
pub const PIPE_WIDTH: f32 = 80.0;
pub const PIPE_HEIGHT: f32 = 500.0;
pub const PIPE_GAP: f32 = 200.0;

/// Gap-center sampling range (sim pixels, inclusive)
pub const GAP_CENTER_MIN: u32 = 200;
pub const GAP_CENTER_MAX: u32 = 400;

/// Physics constants, per tick
pub const GRAVITY: f32 = 0.5;
pub const FLAP_VELOCITY: f32 = -7.0;
pub const PIPE_SPEED: f32 = 5.0;
pub const GROUND_SPEED: f32 = 5.0;

/// Ground band
pub const GROUND_HEIGHT: f32 = 100.0;
pub const GROUND_Y_OFFSET: f32 = 25.0;
pub const GROUND_TILE_WIDTH: f32 = 48.0;

/// Falling past this y is terminal (strictly greater; exactly on it is safe).
pub const GROUND_LIMIT_Y: f32 = SCREEN_HEIGHT - GROUND_HEIGHT + GROUND_Y_OFFSET;

/// Game timing: one tick per frame at 30 Hz
pub const TICK_MS: u64 = 33;

/// Pipe spawn cadence (1200 ms at 30 Hz)
pub const PIPE_SPAWN_TICKS: u32 = 36;

/// Power-up placement
pub const POWER_UP_SIZE: f32 = 30.0;
pub const POWER_UP_CHANCE: f64 = 0.10;
pub const POWER_UP_MARGIN: f32 = 40.0;
pub const POWER_UP_MAX_RETRIES: u32 = 100;

/// Semantic input events produced by the input adapter.
///
/// The simulation and menus consume these; raw key codes never leave `input`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    Flap,
    Quit,
    MenuUp,
    MenuDown,
    MenuSelect,
}
