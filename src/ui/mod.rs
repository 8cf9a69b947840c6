//! UI module - menu state machines driven by semantic input events

pub mod menu;

pub use menu::{Menu, MENU_PLAY, MENU_QUIT};
