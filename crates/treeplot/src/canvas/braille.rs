//! Braille canvas: 2×4 pixels per character.

use super::{locate, Canvas, CellGrid};
use crate::color::{Color, ColorMode};
use crate::symbols::{braille_char, BRAILLE_DOTS};

/// High-resolution canvas drawn with Unicode braille patterns.
///
/// Each cell stores a dot bitmask. Setting a pixel ORs its dot into the
/// mask, so dots accumulate until [`Canvas::clear`].
#[derive(Debug, Clone)]
pub struct BrailleCanvas {
    grid: CellGrid<u8>,
}

impl BrailleCanvas {
    /// Horizontal pixels per character.
    pub const X_DENSITY: usize = 2;
    /// Vertical pixels per character.
    pub const Y_DENSITY: usize = 4;

    /// Create an empty canvas of `width × height` characters.
    #[must_use]
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            grid: CellGrid::new(width, height),
        }
    }

    /// Dot bitmask of the character cell at `(char_x, char_y)`.
    #[must_use]
    pub fn dots(&self, char_x: usize, char_y: usize) -> u8 {
        self.grid.get(char_x, char_y)
    }
}

impl Canvas for BrailleCanvas {
    fn width(&self) -> usize {
        self.grid.width
    }

    fn height(&self) -> usize {
        self.grid.height
    }

    fn x_density(&self) -> usize {
        Self::X_DENSITY
    }

    fn y_density(&self) -> usize {
        Self::Y_DENSITY
    }

    fn pixel(&mut self, x: i64, y: i64, color: Option<Color>) {
        let Some(addr) = locate(&*self, x, y) else {
            return;
        };
        let bit = BRAILLE_DOTS[addr.sub_x][addr.sub_y];
        self.grid
            .update(addr.char_x, addr.char_y, color, |dots| *dots |= bit);
    }

    fn render(&self, mode: ColorMode) -> String {
        self.grid.render(mode, braille_char)
    }

    fn clear(&mut self) {
        self.grid.clear();
    }
}
