//! Color palette and text assets shared by the terminal views.

use crate::term::fb::Rgb;

/// Fixed color scheme for the whole game.
pub struct Palette {
    pub sky: Rgb,
    pub pipe: Rgb,
    pub pipe_cap: Rgb,
    pub grass: Rgb,
    pub ground_light: Rgb,
    pub ground_dark: Rgb,
    pub bird: Rgb,
    pub beak: Rgb,
    pub power_up: Rgb,
    pub text: Rgb,
    pub highlight: Rgb,
}

pub const PALETTE: Palette = Palette {
    sky: Rgb::new(92, 170, 220),
    pipe: Rgb::new(46, 158, 66),
    pipe_cap: Rgb::new(70, 200, 90),
    grass: Rgb::new(96, 180, 72),
    ground_light: Rgb::new(206, 176, 98),
    ground_dark: Rgb::new(182, 152, 76),
    bird: Rgb::new(248, 208, 62),
    beak: Rgb::new(240, 122, 40),
    power_up: Rgb::new(232, 84, 200),
    text: Rgb::new(255, 255, 255),
    highlight: Rgb::new(248, 208, 62),
};

pub const TITLE: &str = "F L A P P Y   B I R D";
pub const GAME_OVER: &str = "G A M E   O V E R";
pub const FLAP_HINT: &str = "space to flap · q to quit";
