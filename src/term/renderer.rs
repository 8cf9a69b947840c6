//! TerminalRenderer: flushes a framebuffer to a real terminal.
//!
//! Draws go through `draw_swap`, which diffs against the previous frame and
//! only emits the changed runs.

use std::io::{self, Write};

use anyhow::Result;

use crossterm::{
    cursor,
    style::{
        Attribute, Color, Print, ResetColor, SetAttribute, SetBackgroundColor, SetForegroundColor,
    },
    terminal, QueueableCommand,
};

use crate::term::fb::{CellStyle, FrameBuffer, Rgb};

pub struct TerminalRenderer {
    stdout: io::Stdout,
    last: Option<FrameBuffer>,
}

impl Default for TerminalRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl TerminalRenderer {
    pub fn new() -> Self {
        Self {
            stdout: io::stdout(),
            last: None,
        }
    }

    pub fn enter(&mut self) -> Result<()> {
        terminal::enable_raw_mode()?;
        self.stdout.queue(terminal::EnterAlternateScreen)?;
        self.stdout.queue(cursor::Hide)?;
        self.stdout.queue(terminal::DisableLineWrap)?;
        self.stdout.flush()?;
        Ok(())
    }

    pub fn exit(&mut self) -> Result<()> {
        self.stdout.queue(ResetColor)?;
        self.stdout.queue(SetAttribute(Attribute::Reset))?;
        self.stdout.queue(terminal::EnableLineWrap)?;
        self.stdout.queue(cursor::Show)?;
        self.stdout.queue(terminal::LeaveAlternateScreen)?;
        self.stdout.flush()?;
        terminal::disable_raw_mode()?;
        Ok(())
    }

    /// Force the next draw to be a full redraw. Used on resize events.
    pub fn invalidate(&mut self) {
        self.last = None;
    }

    /// Draw a framebuffer, swapping it into internal state.
    ///
    /// Callers keep one `FrameBuffer` and pass it in every frame; the
    /// renderer diffs against the previous frame and swaps buffers so
    /// nothing is cloned per frame.
    pub fn draw_swap(&mut self, fb: &mut FrameBuffer) -> Result<()> {
        if self.last.is_none() {
            self.last = Some(FrameBuffer::new(fb.width(), fb.height()));
        }

        let mut prev = self.last.take().unwrap();
        let needs_full = prev.width() != fb.width() || prev.height() != fb.height();

        if needs_full {
            self.full_redraw(fb)?;
            prev.resize(fb.width(), fb.height());
        } else {
            self.diff_redraw(fb, &prev)?;
        }

        std::mem::swap(&mut prev, fb);
        self.last = Some(prev);
        Ok(())
    }

    fn full_redraw(&mut self, fb: &FrameBuffer) -> Result<()> {
        self.stdout
            .queue(terminal::Clear(terminal::ClearType::All))?;
        self.stdout.queue(cursor::MoveTo(0, 0))?;

        let mut current_style: Option<CellStyle> = None;
        for y in 0..fb.height() {
            for x in 0..fb.width() {
                let cell = fb.get(x, y).unwrap_or_default();
                if current_style != Some(cell.style) {
                    self.apply_style(cell.style)?;
                    current_style = Some(cell.style);
                }
                self.stdout.queue(Print(cell.ch))?;
            }
            if y + 1 < fb.height() {
                self.stdout.queue(Print("\r\n"))?;
            }
        }

        self.stdout.queue(ResetColor)?;
        self.stdout.queue(SetAttribute(Attribute::Reset))?;
        self.stdout.flush()?;
        Ok(())
    }

    fn diff_redraw(&mut self, next: &FrameBuffer, prev: &FrameBuffer) -> Result<()> {
        let mut current_style: Option<CellStyle> = None;

        for_each_changed_run(prev, next, |x, y, len| {
            self.stdout.queue(cursor::MoveTo(x, y))?;
            for dx in 0..len {
                let cell = next.get(x + dx, y).unwrap_or_default();
                if current_style != Some(cell.style) {
                    self.apply_style(cell.style)?;
                    current_style = Some(cell.style);
                }
                self.stdout.queue(Print(cell.ch))?;
            }
            Ok(())
        })?;

        self.stdout.queue(ResetColor)?;
        self.stdout.queue(SetAttribute(Attribute::Reset))?;
        self.stdout.flush()?;
        Ok(())
    }

    fn apply_style(&mut self, style: CellStyle) -> Result<()> {
        self.stdout
            .queue(SetForegroundColor(rgb_to_color(style.fg)))?;
        self.stdout
            .queue(SetBackgroundColor(rgb_to_color(style.bg)))?;
        self.stdout.queue(SetAttribute(Attribute::Reset))?;
        if style.bold {
            self.stdout.queue(SetAttribute(Attribute::Bold))?;
        }
        Ok(())
    }
}

fn rgb_to_color(rgb: Rgb) -> Color {
    Color::Rgb {
        r: rgb.r,
        g: rgb.g,
        b: rgb.b,
    }
}

fn for_each_changed_run(
    prev: &FrameBuffer,
    next: &FrameBuffer,
    mut f: impl FnMut(u16, u16, u16) -> Result<()>,
) -> Result<()> {
    if prev.width() != next.width() || prev.height() != next.height() {
        // Size changed: everything is dirty, emit whole rows.
        for y in 0..next.height() {
            f(0, y, next.width())?;
        }
        return Ok(());
    }

    let w = next.width();
    let h = next.height();

    for y in 0..h {
        let mut x = 0;
        while x < w {
            let a = prev.get(x, y).unwrap_or_default();
            let b = next.get(x, y).unwrap_or_default();
            if a == b {
                x += 1;
                continue;
            }

            let start = x;
            x += 1;
            while x < w {
                let a2 = prev.get(x, y).unwrap_or_default();
                let b2 = next.get(x, y).unwrap_or_default();
                if a2 == b2 {
                    break;
                }
                x += 1;
            }
            f(start, y, x - start)?;
        }
    }

    Ok(())
}
