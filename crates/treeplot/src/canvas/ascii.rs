//! Plain character canvas for terminals without Unicode or color.

use super::{locate, Canvas};
use crate::color::{Color, ColorMode};
use crate::symbols::ASCII_FILL;
use bitvec::vec::BitVec;

/// One pixel per character; filled pixels print as a single fill char.
///
/// Colors passed to [`Canvas::pixel`] are ignored.
#[derive(Debug, Clone)]
pub struct AsciiCanvas {
    width: usize,
    height: usize,
    fill: char,
    filled: BitVec,
}

impl AsciiCanvas {
    /// Create an empty canvas using `*` for filled pixels.
    #[must_use]
    pub fn new(width: usize, height: usize) -> Self {
        Self::with_fill(width, height, ASCII_FILL)
    }

    /// Create an empty canvas with a custom fill character.
    #[must_use]
    pub fn with_fill(width: usize, height: usize, fill: char) -> Self {
        Self {
            width,
            height,
            fill,
            filled: BitVec::repeat(false, width * height),
        }
    }

    /// Whether the pixel at `(x, y)` is set.
    #[must_use]
    pub fn is_set(&self, x: usize, y: usize) -> bool {
        x < self.width && y < self.height && self.filled[y * self.width + x]
    }
}

impl Canvas for AsciiCanvas {
    fn width(&self) -> usize {
        self.width
    }

    fn height(&self) -> usize {
        self.height
    }

    fn x_density(&self) -> usize {
        1
    }

    fn y_density(&self) -> usize {
        1
    }

    fn pixel(&mut self, x: i64, y: i64, _color: Option<Color>) {
        if let Some(addr) = locate(&*self, x, y) {
            self.filled.set(addr.char_y * self.width + addr.char_x, true);
        }
    }

    fn render(&self, _mode: ColorMode) -> String {
        let mut out = String::with_capacity((self.width + 1) * self.height);
        for y in 0..self.height {
            if y > 0 {
                out.push('\n');
            }
            for x in 0..self.width {
                out.push(if self.filled[y * self.width + x] {
                    self.fill
                } else {
                    ' '
                });
            }
        }
        out
    }

    fn clear(&mut self) {
        self.filled.fill(false);
    }
}
