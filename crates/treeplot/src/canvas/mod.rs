//! Character-grid canvases with sub-character pixel addressing.
//!
//! A canvas is `width × height` character cells. Each cell covers a block of
//! `x_density × y_density` virtual pixels, so the pixel space is denser than
//! the text grid:
//!
//! | Canvas  | Density | Glyphs |
//! |---------|---------|--------|
//! | Ascii   | 1×1     | fill char |
//! | Block   | 1×2     | ` ▀ ▄ █` |
//! | Braille | 2×4     | U+2800..U+28FF |
//!
//! Pixel writes outside the pixel space are ignored.

mod ascii;
mod block;
mod braille;

pub use ascii::AsciiCanvas;
pub use block::BlockCanvas;
pub use braille::BrailleCanvas;

use crate::color::{colorize, Color, ColorMode};
use serde::Deserialize;
use std::fmt;
use std::str::FromStr;

/// A drawable character grid.
pub trait Canvas {
    /// Width in characters.
    fn width(&self) -> usize;

    /// Height in characters.
    fn height(&self) -> usize;

    /// Horizontal pixels per character.
    fn x_density(&self) -> usize;

    /// Vertical pixels per character.
    fn y_density(&self) -> usize;

    /// Width in pixels.
    fn pixel_width(&self) -> usize {
        self.width() * self.x_density()
    }

    /// Height in pixels.
    fn pixel_height(&self) -> usize {
        self.height() * self.y_density()
    }

    /// Set one pixel. Coordinates outside the pixel space are ignored.
    fn pixel(&mut self, x: i64, y: i64, color: Option<Color>);

    /// Render the grid, one line per character row.
    fn render(&self, mode: ColorMode) -> String;

    /// Reset every cell to empty with no color.
    fn clear(&mut self);

    /// Draw a straight line with Bresenham's algorithm, endpoints included.
    fn line(&mut self, x0: i64, y0: i64, x1: i64, y1: i64, color: Option<Color>) {
        let dx = (x1 - x0).abs();
        let dy = (y1 - y0).abs();
        let sx = if x0 < x1 { 1 } else { -1 };
        let sy = if y0 < y1 { 1 } else { -1 };
        let mut err = dx - dy;
        let (mut x, mut y) = (x0, y0);

        loop {
            self.pixel(x, y, color);
            if x == x1 && y == y1 {
                break;
            }
            let e2 = 2 * err;
            if e2 > -dy {
                err -= dy;
                x += sx;
            }
            if e2 < dx {
                err += dx;
                y += sy;
            }
        }
    }
}

/// Pixel address resolved to a character cell and a sub-pixel offset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct CellAddr {
    pub(crate) char_x: usize,
    pub(crate) char_y: usize,
    pub(crate) sub_x: usize,
    pub(crate) sub_y: usize,
}

/// Resolve pixel `(x, y)` on `canvas`, or `None` when out of bounds.
pub(crate) fn locate<C: Canvas + ?Sized>(canvas: &C, x: i64, y: i64) -> Option<CellAddr> {
    let x = usize::try_from(x).ok()?;
    let y = usize::try_from(y).ok()?;
    if x >= canvas.pixel_width() || y >= canvas.pixel_height() {
        return None;
    }
    let (xd, yd) = (canvas.x_density(), canvas.y_density());
    Some(CellAddr {
        char_x: x / xd,
        char_y: y / yd,
        sub_x: x % xd,
        sub_y: y % yd,
    })
}

/// Row-major cell storage with an optional color per cell.
#[derive(Debug, Clone)]
pub(crate) struct CellGrid<T> {
    width: usize,
    height: usize,
    cells: Vec<T>,
    colors: Vec<Option<Color>>,
}

impl<T: Copy + Default> CellGrid<T> {
    pub(crate) fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            cells: vec![T::default(); width * height],
            colors: vec![None; width * height],
        }
    }

    /// Update cell `(x, y)`; a color, when given, replaces the previous one.
    pub(crate) fn update(&mut self, x: usize, y: usize, color: Option<Color>, f: impl FnOnce(&mut T)) {
        let idx = y * self.width + x;
        f(&mut self.cells[idx]);
        if color.is_some() {
            self.colors[idx] = color;
        }
    }

    pub(crate) fn get(&self, x: usize, y: usize) -> T {
        self.cells[y * self.width + x]
    }

    pub(crate) fn clear(&mut self) {
        self.cells.fill(T::default());
        self.colors.fill(None);
    }

    /// Render each cell through `glyph`, colorizing cells that carry a color.
    pub(crate) fn render(&self, mode: ColorMode, glyph: impl Fn(T) -> char) -> String {
        let mut out = String::with_capacity(self.width * self.height * 4);
        let mut buf = [0u8; 4];
        for y in 0..self.height {
            if y > 0 {
                out.push('\n');
            }
            for x in 0..self.width {
                let idx = y * self.width + x;
                let ch = glyph(self.cells[idx]).encode_utf8(&mut buf);
                match self.colors[idx] {
                    Some(color) if mode.is_enabled() => {
                        out.push_str(&colorize(ch, Some(color), mode));
                    }
                    _ => out.push_str(ch),
                }
            }
        }
        out
    }
}

/// Canvas density selector for plots that draw through a canvas.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CanvasKind {
    /// 1×1 pixels per character, no color.
    Ascii,
    /// 1×2 pixels per character using half blocks.
    Block,
    /// 2×4 pixels per character using braille dots.
    #[default]
    Braille,
}

impl CanvasKind {
    /// Allocate an empty canvas of this kind.
    #[must_use]
    pub fn create(self, width: usize, height: usize) -> Box<dyn Canvas> {
        tracing::trace!(kind = %self, width, height, "allocate canvas");
        match self {
            Self::Ascii => Box::new(AsciiCanvas::new(width, height)),
            Self::Block => Box::new(BlockCanvas::new(width, height)),
            Self::Braille => Box::new(BrailleCanvas::new(width, height)),
        }
    }

    /// Pixels per character as `(x, y)`.
    #[must_use]
    pub const fn density(self) -> (usize, usize) {
        match self {
            Self::Ascii => (1, 1),
            Self::Block => (1, 2),
            Self::Braille => (2, 4),
        }
    }

    const fn name(self) -> &'static str {
        match self {
            Self::Ascii => "ascii",
            Self::Block => "block",
            Self::Braille => "braille",
        }
    }
}

impl fmt::Display for CanvasKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for CanvasKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "ascii" => Ok(Self::Ascii),
            "block" => Ok(Self::Block),
            "braille" => Ok(Self::Braille),
            other => Err(format!("unknown canvas kind: {other}")),
        }
    }
}
