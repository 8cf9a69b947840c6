//! Framebuffer and style types for terminal rendering.
//!
//! The game draws whole frames into a [`FrameBuffer`]; the renderer diffs
//! consecutive frames before touching the terminal.

/// 24-bit RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Scale each channel by `factor` in [0, 1]. Used for shading overlays.
    pub fn scaled(self, factor: f32) -> Self {
        let f = factor.clamp(0.0, 1.0);
        Self {
            r: (self.r as f32 * f) as u8,
            g: (self.g as f32 * f) as u8,
            b: (self.b as f32 * f) as u8,
        }
    }
}

/// Minimal per-cell styling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellStyle {
    pub fg: Rgb,
    pub bg: Rgb,
    pub bold: bool,
}

impl CellStyle {
    pub const fn new(fg: Rgb, bg: Rgb) -> Self {
        Self {
            fg,
            bg,
            bold: false,
        }
    }

    pub const fn bold(fg: Rgb, bg: Rgb) -> Self {
        Self { fg, bg, bold: true }
    }
}

impl Default for CellStyle {
    fn default() -> Self {
        Self {
            fg: Rgb::new(220, 220, 220),
            bg: Rgb::new(0, 0, 0),
            bold: false,
        }
    }
}

/// A single terminal cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    pub ch: char,
    pub style: CellStyle,
}

impl Cell {
    pub const fn new(ch: char, style: CellStyle) -> Self {
        Self { ch, style }
    }
}

impl Default for Cell {
    fn default() -> Self {
        Self {
            ch: ' ',
            style: CellStyle::default(),
        }
    }
}

/// 2D framebuffer of styled character cells.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrameBuffer {
    width: u16,
    height: u16,
    cells: Vec<Cell>,
}

impl FrameBuffer {
    pub fn new(width: u16, height: u16) -> Self {
        let len = (width as usize) * (height as usize);
        Self {
            width,
            height,
            cells: vec![Cell::default(); len],
        }
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    /// Resize, preserving the underlying allocation when possible.
    pub fn resize(&mut self, width: u16, height: u16) {
        if self.width == width && self.height == height {
            return;
        }
        self.width = width;
        self.height = height;
        let len = (width as usize) * (height as usize);
        self.cells.resize(len, Cell::default());
    }

    #[inline(always)]
    fn idx(&self, x: u16, y: u16) -> Option<usize> {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some((y as usize) * (self.width as usize) + (x as usize))
    }

    pub fn get(&self, x: u16, y: u16) -> Option<Cell> {
        self.idx(x, y).map(|i| self.cells[i])
    }

    pub fn set(&mut self, x: u16, y: u16, cell: Cell) {
        if let Some(i) = self.idx(x, y) {
            self.cells[i] = cell;
        }
    }

    pub fn clear(&mut self, cell: Cell) {
        self.cells.fill(cell);
    }

    pub fn put_char(&mut self, x: u16, y: u16, ch: char, style: CellStyle) {
        self.set(x, y, Cell { ch, style });
    }

    pub fn put_str(&mut self, x: u16, y: u16, s: &str, style: CellStyle) {
        let mut cx = x;
        for ch in s.chars() {
            if cx >= self.width {
                break;
            }
            self.put_char(cx, y, ch, style);
            cx += 1;
        }
    }

    pub fn fill_rect(&mut self, x: u16, y: u16, w: u16, h: u16, ch: char, style: CellStyle) {
        for dy in 0..h {
            for dx in 0..w {
                self.put_char(x.saturating_add(dx), y.saturating_add(dy), ch, style);
            }
        }
    }

    /// Darken every cell in a region in place. Stands in for the translucent
    /// panel drawn behind menu and banner text.
    pub fn shade_rect(&mut self, x: u16, y: u16, w: u16, h: u16, factor: f32) {
        for dy in 0..h {
            for dx in 0..w {
                let cx = x.saturating_add(dx);
                let cy = y.saturating_add(dy);
                if let Some(i) = self.idx(cx, cy) {
                    let cell = &mut self.cells[i];
                    cell.style.fg = cell.style.fg.scaled(factor);
                    cell.style.bg = cell.style.bg.scaled(factor);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn out_of_bounds_writes_are_dropped() {
        let mut fb = FrameBuffer::new(3, 2);
        fb.put_char(5, 0, 'X', CellStyle::default());
        fb.put_char(0, 9, 'X', CellStyle::default());
        assert!(fb.get(5, 0).is_none());
        assert_eq!(fb.get(0, 0).unwrap().ch, ' ');
    }

    #[test]
    fn put_str_clips_at_the_right_edge() {
        let mut fb = FrameBuffer::new(4, 1);
        fb.put_str(2, 0, "ABCD", CellStyle::default());
        assert_eq!(fb.get(2, 0).unwrap().ch, 'A');
        assert_eq!(fb.get(3, 0).unwrap().ch, 'B');
    }

    #[test]
    fn shade_rect_darkens_both_channels() {
        let mut fb = FrameBuffer::new(2, 1);
        let style = CellStyle::new(Rgb::new(200, 100, 50), Rgb::new(80, 80, 80));
        fb.put_char(0, 0, '#', style);
        fb.shade_rect(0, 0, 1, 1, 0.5);

        let shaded = fb.get(0, 0).unwrap().style;
        assert_eq!(shaded.fg, Rgb::new(100, 50, 25));
        assert_eq!(shaded.bg, Rgb::new(40, 40, 40));
        // The cell outside the region is untouched.
        assert_eq!(fb.get(1, 0).unwrap().style, CellStyle::default());
    }

    #[test]
    fn resize_keeps_dimensions_consistent() {
        let mut fb = FrameBuffer::new(4, 4);
        fb.resize(2, 3);
        assert_eq!(fb.width(), 2);
        assert_eq!(fb.height(), 3);
        assert!(fb.get(1, 2).is_some());
        assert!(fb.get(2, 0).is_none());
    }
}
