//! Glyph tables for borders, canvases and box plots.
//!
//! All lookups are direct array or match indexing; nothing here allocates.

/// Light box-drawing characters used for plot frames.
pub mod box_light {
    pub const HORIZONTAL: char = '─';
    pub const VERTICAL: char = '│';
    pub const TOP_LEFT: char = '┌';
    pub const TOP_RIGHT: char = '┐';
    pub const BOTTOM_LEFT: char = '└';
    pub const BOTTOM_RIGHT: char = '┘';
    pub const LEFT_TEE: char = '├';
    pub const RIGHT_TEE: char = '┤';
}

/// Half-block glyphs keyed by `(upper_set, lower_set)`.
#[must_use]
pub const fn half_block(upper: bool, lower: bool) -> char {
    match (upper, lower) {
        (false, false) => ' ',
        (true, false) => '▀',
        (false, true) => '▄',
        (true, true) => '█',
    }
}

/// First codepoint of the Unicode braille block (no dots raised).
pub const BRAILLE_BASE: u32 = 0x2800;

/// Braille dot bits indexed by `[column][row]` within a 2×4 cell.
///
/// Left column holds dots 1, 2, 3, 7; right column holds dots 4, 5, 6, 8.
pub const BRAILLE_DOTS: [[u8; 4]; 2] = [[0x01, 0x02, 0x04, 0x40], [0x08, 0x10, 0x20, 0x80]];

/// Braille glyph for a dot bitmask.
#[inline]
#[must_use]
pub fn braille_char(bits: u8) -> char {
    // BRAILLE_BASE + 0..=255 is always inside the assigned braille block.
    char::from_u32(BRAILLE_BASE + u32::from(bits)).unwrap_or(' ')
}

/// Default glyph for filled ascii canvas pixels.
pub const ASCII_FILL: char = '*';

/// Default glyph for bar segments.
pub const BAR_SYMBOL: &str = "■";

/// Box plot glyphs.
pub mod box_plot {
    /// Whisker line between an endpoint and the box.
    pub const WHISKER: char = '─';
    /// Interquartile span.
    pub const BOX_FILL: char = '█';
    /// Median marker.
    pub const MEDIAN: char = '│';
    /// Minimum endpoint.
    pub const LOW_END: char = '├';
    /// Maximum endpoint.
    pub const HIGH_END: char = '┤';
}
