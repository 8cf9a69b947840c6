//! GameView: maps the simulation into a terminal framebuffer.
//!
//! The simulation runs in a fixed 400x600 pixel space; this module scales it
//! to whatever viewport the terminal offers. Everything here is pure (no
//! I/O) and unit-testable.

use crate::assets::{FLAP_HINT, GAME_OVER, PALETTE, TITLE};
use crate::core::{GameState, Rect};
use crate::term::fb::{CellStyle, FrameBuffer, Rgb};
use crate::types::*;
use crate::ui::Menu;

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

/// Height of the brighter lip drawn on each pipe's gap edge, in sim pixels.
const PIPE_CAP_HEIGHT: f32 = 30.0;

/// Stateless view over the sim. All per-frame data comes in as arguments.
#[derive(Debug, Default)]
pub struct GameView;

impl GameView {
    pub fn new() -> Self {
        Self
    }

    /// Render one gameplay frame.
    pub fn render(&self, state: &GameState, viewport: Viewport) -> FrameBuffer {
        let mut fb = self.render_backdrop(state.ticks, viewport);

        for pipe in &state.pipes {
            self.draw_pipe(&mut fb, pipe.top, true);
            self.draw_pipe(&mut fb, pipe.bottom, false);
        }
        for power_up in &state.power_ups {
            self.fill_sim_rect(&mut fb, power_up.rect, '★', sky_style(PALETTE.power_up));
        }
        self.draw_bird(&mut fb, state);
        self.draw_score(&mut fb, state.score);

        fb
    }

    /// Render the sky-and-scrolling-ground scene shared by gameplay frames
    /// and the title screen.
    pub fn render_backdrop(&self, ticks: u64, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        if viewport.width == 0 || viewport.height == 0 {
            return fb;
        }

        fb.clear(crate::term::fb::Cell::new(' ', sky_style(PALETTE.sky)));
        self.draw_ground(&mut fb, ticks);
        fb
    }

    /// Draw the title header used on the start screen. The panel bobs
    /// vertically on a sine wave driven by `ticks`.
    pub fn draw_title(&self, fb: &mut FrameBuffer, ticks: u64) {
        let w = fb.width();
        let h = fb.height();
        if w == 0 || h < 3 {
            return;
        }

        let bob = ((ticks as f32 * 0.1).sin()).round() as i16;
        let panel_w = (TITLE.chars().count() as u16 + 8).min(w);
        let panel_y = (h / 6).saturating_add_signed(bob);
        fb.shade_rect((w - panel_w) / 2, panel_y, panel_w, 3, 0.45);
        let bg = PALETTE.sky.scaled(0.45);
        self.put_centered(fb, panel_y + 1, TITLE, CellStyle::bold(PALETTE.highlight, bg));
    }

    /// Draw the idle bird hovering at its start position, for the menus.
    pub fn draw_hover_bird(&self, fb: &mut FrameBuffer, ticks: u64) {
        let y = BIRD_START_Y + (ticks as f32 * 0.15).sin() * 20.0;
        let rect = Rect::from_center(BIRD_X, y, BIRD_WIDTH, BIRD_HEIGHT);
        self.draw_bird_at(fb, rect, 0.0);
    }

    /// Draw a menu onto an existing frame.
    ///
    /// `ticks` drives the hover animation of the highlighted entry.
    pub fn draw_menu(&self, fb: &mut FrameBuffer, menu: &Menu, ticks: u64) {
        let w = fb.width();
        let h = fb.height();
        if w == 0 || h == 0 {
            return;
        }

        let panel_w = (longest_label(menu) + 8).min(w);
        let panel_h = (1 + menu.labels().len() as u16 * 2).min(h);
        let panel_x = (w - panel_w) / 2;
        let panel_y = h / 2;
        fb.shade_rect(panel_x, panel_y.min(h - 1), panel_w, panel_h, 0.45);

        let shaded_bg = PALETTE.sky.scaled(0.45);
        let base_y = panel_y + 1;
        for (i, label) in menu.labels().iter().enumerate() {
            let y = base_y + (i as u16) * 2;
            if y >= h {
                break;
            }
            if i == menu.selected() {
                // The highlighted entry bobs sideways a little.
                let bob = ((ticks as f32 * 0.25).sin() * 1.5).round() as i32;
                let text = format!("▸ {label}");
                let x = centered_x(w, text.chars().count() as u16)
                    .saturating_add_signed(bob as i16);
                fb.put_str(x, y, &text, CellStyle::bold(PALETTE.highlight, shaded_bg));
            } else {
                self.put_centered(fb, y, label, CellStyle::new(PALETTE.text, shaded_bg));
            }
        }

        if h > 1 {
            self.put_centered(fb, h - 1, FLAP_HINT, CellStyle::new(PALETTE.text, PALETTE.sky));
        }
    }

    /// Draw the game-over banner over the final frame. The restart menu goes
    /// below it via [`draw_menu`](Self::draw_menu) replacing the title row.
    pub fn draw_game_over(&self, fb: &mut FrameBuffer, score: u32) {
        let w = fb.width();
        let h = fb.height();
        if w == 0 || h < 4 {
            return;
        }

        let banner_w = (GAME_OVER.chars().count() as u16 + 8).min(w);
        let banner_y = h / 6;
        fb.shade_rect((w - banner_w) / 2, banner_y, banner_w, 3, 0.45);

        let bg = PALETTE.sky.scaled(0.45);
        self.put_centered(fb, banner_y + 1, GAME_OVER, CellStyle::bold(PALETTE.text, bg));
        let score_line = format!("score {score}");
        self.put_centered(fb, banner_y + 2, &score_line, CellStyle::new(PALETTE.text, bg));
    }

    fn draw_pipe(&self, fb: &mut FrameBuffer, body: Rect, gap_below: bool) {
        self.fill_sim_rect(fb, body, '█', sky_style(PALETTE.pipe));

        // Brighter lip on the gap-facing end.
        let cap = if gap_below {
            Rect::new(body.x, body.bottom() - PIPE_CAP_HEIGHT, body.w, PIPE_CAP_HEIGHT)
        } else {
            Rect::new(body.x, body.top(), body.w, PIPE_CAP_HEIGHT)
        };
        self.fill_sim_rect(fb, cap, '█', sky_style(PALETTE.pipe_cap));
    }

    fn draw_bird(&self, fb: &mut FrameBuffer, state: &GameState) {
        self.draw_bird_at(fb, state.bird.rect(), state.bird.vy);
    }

    fn draw_bird_at(&self, fb: &mut FrameBuffer, rect: Rect, vy: f32) {
        self.fill_sim_rect(fb, rect, '█', sky_style(PALETTE.bird));

        // Beak glyph leans with the vertical velocity.
        let beak = if vy < -1.0 {
            '^'
        } else if vy > 3.0 {
            'v'
        } else {
            '>'
        };
        let (x0, x1) = span(rect.left(), rect.right(), SCREEN_WIDTH, fb.width());
        let (y0, y1) = span(rect.top(), rect.bottom(), SCREEN_HEIGHT, fb.height());
        if x1 > x0 && y1 > y0 {
            let style = CellStyle::bold(PALETTE.beak, PALETTE.bird);
            fb.put_char(x1 - 1, y0 + (y1 - y0 - 1) / 2, beak, style);
        }
    }

    fn draw_ground(&self, fb: &mut FrameBuffer, ticks: u64) {
        let w = fb.width();
        let h = fb.height();
        let (g0, g1) = span(
            SCREEN_HEIGHT - GROUND_HEIGHT,
            SCREEN_HEIGHT,
            SCREEN_HEIGHT,
            h,
        );
        if g1 <= g0 {
            return;
        }

        // Tiles scroll left in lockstep with the pipes, wrapping per tile pair.
        let offset = (ticks as f32 * GROUND_SPEED) % (GROUND_TILE_WIDTH * 2.0);
        for x in 0..w {
            let sim_x = (x as f32 + 0.5) / (w as f32) * SCREEN_WIDTH;
            let tile = ((sim_x + offset) / GROUND_TILE_WIDTH) as u32;
            let color = if tile % 2 == 0 {
                PALETTE.ground_light
            } else {
                PALETTE.ground_dark
            };
            fb.put_char(x, g0, '▄', CellStyle::new(PALETTE.grass, PALETTE.sky));
            for y in (g0 + 1)..g1 {
                fb.put_char(x, y, '▒', CellStyle::new(color.scaled(0.8), color));
            }
        }
    }

    fn draw_score(&self, fb: &mut FrameBuffer, score: u32) {
        let text = format!("{score}");
        let style = CellStyle::bold(PALETTE.text, PALETTE.sky);
        self.put_centered(fb, 1, &text, style);
    }

    fn put_centered(&self, fb: &mut FrameBuffer, y: u16, text: &str, style: CellStyle) {
        let x = centered_x(fb.width(), text.chars().count() as u16);
        fb.put_str(x, y, text, style);
    }

    /// Fill the viewport cells covered by a sim-space rect.
    fn fill_sim_rect(&self, fb: &mut FrameBuffer, rect: Rect, ch: char, style: CellStyle) {
        let (x0, x1) = span(rect.left(), rect.right(), SCREEN_WIDTH, fb.width());
        let (y0, y1) = span(rect.top(), rect.bottom(), SCREEN_HEIGHT, fb.height());
        for y in y0..y1 {
            for x in x0..x1 {
                fb.put_char(x, y, ch, style);
            }
        }
    }
}

fn sky_style(fg: Rgb) -> CellStyle {
    CellStyle::new(fg, PALETTE.sky)
}

fn longest_label(menu: &Menu) -> u16 {
    menu.labels()
        .iter()
        .map(|l| l.chars().count())
        .max()
        .unwrap_or(0) as u16
}

fn centered_x(width: u16, text_w: u16) -> u16 {
    width.saturating_sub(text_w) / 2
}

/// Map a sim-space interval onto a clamped half-open cell range.
fn span(lo: f32, hi: f32, sim_extent: f32, cells: u16) -> (u16, u16) {
    if cells == 0 || hi <= 0.0 || lo >= sim_extent {
        return (0, 0);
    }
    let scale = cells as f32 / sim_extent;
    let c0 = (lo.max(0.0) * scale).floor() as u16;
    let c1 = ((hi.min(sim_extent) * scale).ceil() as u16).min(cells);
    (c0.min(c1), c1)
}
