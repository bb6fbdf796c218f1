//! Half-block canvas: 1×2 pixels per character.

use super::{locate, Canvas, CellGrid};
use crate::color::{Color, ColorMode};
use crate::symbols::half_block;

/// Upper/lower half fill state of one cell.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
struct Halves {
    upper: bool,
    lower: bool,
}

/// Canvas drawn with `▀`, `▄` and `█`.
#[derive(Debug, Clone)]
pub struct BlockCanvas {
    grid: CellGrid<Halves>,
}

impl BlockCanvas {
    /// Horizontal pixels per character.
    pub const X_DENSITY: usize = 1;
    /// Vertical pixels per character.
    pub const Y_DENSITY: usize = 2;

    /// Create an empty canvas of `width × height` characters.
    #[must_use]
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            grid: CellGrid::new(width, height),
        }
    }

    /// `(upper, lower)` fill state of the character cell at `(char_x, char_y)`.
    #[must_use]
    pub fn halves(&self, char_x: usize, char_y: usize) -> (bool, bool) {
        let cell = self.grid.get(char_x, char_y);
        (cell.upper, cell.lower)
    }
}

impl Canvas for BlockCanvas {
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
        self.grid
            .update(addr.char_x, addr.char_y, color, |cell| {
                if addr.sub_y == 0 {
                    cell.upper = true;
                } else {
                    cell.lower = true;
                }
            });
    }

    fn render(&self, mode: ColorMode) -> String {
        self.grid
            .render(mode, |cell| half_block(cell.upper, cell.lower))
    }

    fn clear(&mut self) {
        self.grid.clear();
    }
}
