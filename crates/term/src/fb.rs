//! Framebuffer and style types for terminal rendering.

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
}

/// Minimal per-glyph styling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Style {
    pub fg: Rgb,
    pub bg: Rgb,
    pub bold: bool,
}

impl Style {
    pub const fn new(fg: Rgb, bg: Rgb) -> Self {
        Self { fg, bg, bold: false }
    }

    pub const fn bold(self) -> Self {
        Self { bold: true, ..self }
    }
}

impl Default for Style {
    fn default() -> Self {
        Self::new(Rgb::new(220, 220, 220), Rgb::new(0, 0, 0))
    }
}

/// One character cell of the terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Glyph {
    pub ch: char,
    pub style: Style,
}

impl Default for Glyph {
    fn default() -> Self {
        Self {
            ch: ' ',
            style: Style::default(),
        }
    }
}

/// 2D framebuffer of styled glyphs. Writes outside the buffer are clipped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrameBuffer {
    width: u16,
    height: u16,
    glyphs: Vec<Glyph>,
}

impl FrameBuffer {
    pub fn new(width: u16, height: u16) -> Self {
        Self {
            width,
            height,
            glyphs: vec![Glyph::default(); width as usize * height as usize],
        }
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    /// Resize, discarding contents when the dimensions change
    pub fn resize(&mut self, width: u16, height: u16) {
        if self.width != width || self.height != height {
            *self = Self::new(width, height);
        }
    }

    pub fn clear(&mut self, glyph: Glyph) {
        self.glyphs.fill(glyph);
    }

    fn row(&self, y: u16) -> Option<&[Glyph]> {
        let w = self.width as usize;
        (y < self.height).then(|| &self.glyphs[y as usize * w..][..w])
    }

    fn row_mut(&mut self, y: u16) -> Option<&mut [Glyph]> {
        if y >= self.height {
            return None;
        }
        let w = self.width as usize;
        Some(&mut self.glyphs[y as usize * w..][..w])
    }

    pub fn get(&self, x: u16, y: u16) -> Option<Glyph> {
        self.row(y)?.get(x as usize).copied()
    }

    pub fn put_char(&mut self, x: u16, y: u16, ch: char, style: Style) {
        if let Some(g) = self.row_mut(y).and_then(|row| row.get_mut(x as usize)) {
            *g = Glyph { ch, style };
        }
    }

    pub fn put_str(&mut self, x: u16, y: u16, s: &str, style: Style) {
        let Some(row) = self.row_mut(y) else {
            return;
        };
        for (g, ch) in row.iter_mut().skip(x as usize).zip(s.chars()) {
            *g = Glyph { ch, style };
        }
    }

    pub fn fill_rect(&mut self, x: u16, y: u16, w: u16, h: u16, ch: char, style: Style) {
        let width = self.width as usize;
        if width == 0 {
            return;
        }
        let x0 = (x as usize).min(width);
        let x1 = (x as usize + w as usize).min(width);
        let glyph = Glyph { ch, style };
        for row in self
            .glyphs
            .chunks_mut(width)
            .skip(y as usize)
            .take(h as usize)
        {
            row[x0..x1].fill(glyph);
        }
    }

    /// One row as a plain string, styles dropped
    pub fn row_text(&self, y: u16) -> String {
        self.row(y)
            .map(|row| row.iter().map(|g| g.ch).collect())
            .unwrap_or_default()
    }
}
