//! Core module - pure simulation logic with no external I/O
//!
//! Everything here is deterministic given a seed and an input script.
//! It has zero dependencies on the terminal, timing, or rendering.

pub mod entities;
pub mod game_state;
pub mod geom;
pub mod spawn;

// Re-export commonly used types
pub use entities::{Bird, Pipe, PowerUp};
pub use game_state::GameState;
pub use geom::Rect;
pub use spawn::SpawnTimer;
