//! Terminal Flappy Bird.
//!
//! The crate splits into a pure simulation (`core`), semantic input
//! translation (`input`), menu state machines (`ui`), and a terminal
//! framebuffer renderer (`term`). The binary wires them into a fixed
//! 30 Hz loop.

pub mod assets;
pub mod core;
pub mod input;
pub mod term;
pub mod types;
pub mod ui;
