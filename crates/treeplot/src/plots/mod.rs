//! Chart renderers.
//!
//! Every plot is built once by a validating constructor, configured through
//! `with_*` builder methods, and rendered to a complete string by
//! [`Plot::render`]. Rendering reads the plot immutably and can be repeated.

mod bar;
mod boxplot;
mod histogram;
mod line;
mod scatter;
mod xy;

pub use bar::{render_bars, BarLayout, Barplot};
pub use boxplot::{five_number_summary, Boxplot, FiveNumberSummary};
pub use histogram::{Histogram, DEFAULT_BINS};
pub use line::Lineplot;
pub use scatter::Scatterplot;
pub use xy::AxisFrame;

use crate::color::ColorMode;
use unicode_width::UnicodeWidthStr;

/// Output for plots with nothing to draw.
pub const EMPTY_PLOT: &str = "Empty plot (no data)";

/// Default plot width in characters.
pub const DEFAULT_WIDTH: usize = 60;

/// Default plot height in characters.
pub const DEFAULT_HEIGHT: usize = 20;

/// A renderable chart.
pub trait Plot {
    /// Render the chart as text, emitting ANSI colors only when `mode` allows.
    fn render(&self, mode: ColorMode) -> String;
}

/// Display width of `text` in terminal cells.
pub(crate) fn text_width(text: &str) -> usize {
    text.width()
}

/// Right-align `text` in a field of `width` cells.
pub(crate) fn pad_left(text: &str, width: usize) -> String {
    let pad = width.saturating_sub(text_width(text));
    format!("{}{}", " ".repeat(pad), text)
}

/// `text` indented so it sits centered within `width` cells.
pub(crate) fn centered(text: &str, width: usize) -> String {
    let pad = width.saturating_sub(text_width(text)) / 2;
    format!("{}{}", " ".repeat(pad), text)
}

/// Title line followed by a blank spacer, or nothing when `title` is empty.
pub(crate) fn push_title(lines: &mut Vec<String>, title: &str) {
    if !title.is_empty() {
        lines.push(format!("  {title}"));
        lines.push(String::new());
    }
}

/// Three tick labels laid out across `span` cells after `indent` spaces:
/// the first starts at offset 0, the middle is centered on `span / 2`, the
/// last ends at offset `span`. Labels never overlap; crowded labels are
/// separated by a single space.
pub(crate) fn tick_row(indent: usize, span: usize, labels: [&str; 3]) -> String {
    let [first, middle, last] = labels;
    let mut row = " ".repeat(indent);
    row.push_str(first);
    let mut cursor = text_width(first);

    let mid_start = (span / 2).saturating_sub(text_width(middle) / 2);
    let gap = if cursor == 0 { 0 } else { 1 };
    let mid_start = mid_start.max(cursor + gap);
    row.push_str(&" ".repeat(mid_start - cursor));
    row.push_str(middle);
    cursor = mid_start + text_width(middle);

    let last_start = span.saturating_sub(text_width(last)).max(cursor + 1);
    row.push_str(&" ".repeat(last_start - cursor));
    row.push_str(last);
    row
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pad_left() {
        assert_eq!(pad_left("ab", 5), "   ab");
        assert_eq!(pad_left("abcdef", 3), "abcdef");
    }

    #[test]
    fn test_pad_left_wide_chars() {
        // Each CJK ideograph takes two cells.
        assert_eq!(pad_left("食費", 6), "  食費");
    }

    #[test]
    fn test_centered() {
        assert_eq!(centered("ab", 6), "  ab");
        assert_eq!(centered("toolong", 3), "toolong");
    }

    #[test]
    fn test_push_title() {
        let mut lines = Vec::new();
        push_title(&mut lines, "");
        assert!(lines.is_empty());
        push_title(&mut lines, "Sales");
        assert_eq!(lines, vec!["  Sales".to_string(), String::new()]);
    }

    #[test]
    fn test_tick_row_positions() {
        let row = tick_row(2, 20, ["0", "10", "20"]);
        assert_eq!(row, "  0        10       20");
        // last label ends exactly at indent + span
        assert_eq!(text_width(&row), 2 + 20);
    }

    #[test]
    fn test_tick_row_crowded_labels_do_not_overlap() {
        let row = tick_row(0, 4, ["100.00", "200.00", "300.00"]);
        assert_eq!(row, "100.00 200.00 300.00");
    }
}
