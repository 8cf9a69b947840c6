//! Menu state machine shared by the title screen and the game-over screen.

use crate::types::InputEvent;

/// A vertical list of choices with one highlighted entry.
///
/// Selection wraps in both directions. Confirmation returns the index of the
/// highlighted entry; both `MenuSelect` and `Flap` confirm, so the flap key
/// also works on menus.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Menu {
    labels: &'static [&'static str],
    selected: usize,
}

/// Index of "start"/"restart" in both stock menus.
pub const MENU_PLAY: usize = 0;
/// Index of "quit" in both stock menus.
pub const MENU_QUIT: usize = 1;

impl Menu {
    pub fn new(labels: &'static [&'static str]) -> Self {
        debug_assert!(!labels.is_empty());
        Self {
            labels,
            selected: 0,
        }
    }

    /// Title-screen menu.
    pub fn main() -> Self {
        Self::new(&["Start Game", "Quit"])
    }

    /// Menu shown over the final frame after a terminal tick.
    pub fn game_over() -> Self {
        Self::new(&["Restart", "Quit"])
    }

    pub fn labels(&self) -> &'static [&'static str] {
        self.labels
    }

    pub fn selected(&self) -> usize {
        self.selected
    }

    /// Feed one input event; returns the confirmed index, if any.
    pub fn handle(&mut self, event: InputEvent) -> Option<usize> {
        match event {
            InputEvent::MenuUp => {
                self.selected = if self.selected == 0 {
                    self.labels.len() - 1
                } else {
                    self.selected - 1
                };
                None
            }
            InputEvent::MenuDown => {
                self.selected = (self.selected + 1) % self.labels.len();
                None
            }
            InputEvent::MenuSelect | InputEvent::Flap => Some(self.selected),
            InputEvent::Quit => None,
        }
    }
}
