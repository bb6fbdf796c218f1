//! Horizontal bar chart.
//!
//! ```text
//!   Sales
//!
//!       ┌──────────────────────────────┐
//!   Mon ┤■■■■■■■■■■■■■■■■■■■■ 120.00
//!   Tue ┤■■■■■■■■■■■■■■■■■■■■■■■■■ 150.00
//!       └──────────────────────────────┘
//! ```

use super::{centered, pad_left, push_title, text_width, Plot, DEFAULT_WIDTH, EMPTY_PLOT};
use crate::color::{colorize, Color, ColorMode};
use crate::error::{ensure_finite, ensure_same_len, PlotError, Result};
use crate::scaling::format_number;
use crate::symbols::{box_light, BAR_SYMBOL};

/// Narrowest bar area, in characters, regardless of the requested width.
const MIN_BAR_WIDTH: usize = 10;

/// Presentation options shared by every bar-style chart.
#[derive(Debug, Clone, PartialEq)]
pub struct BarLayout {
    /// Title printed above the chart.
    pub title: String,
    /// Label centered below the chart.
    pub xlabel: String,
    /// Total width in characters.
    pub width: usize,
    /// Bar color.
    pub color: Option<Color>,
    /// Glyph repeated to draw each bar.
    pub symbol: String,
}

impl Default for BarLayout {
    fn default() -> Self {
        Self {
            title: String::new(),
            xlabel: String::new(),
            width: DEFAULT_WIDTH,
            color: None,
            symbol: BAR_SYMBOL.to_string(),
        }
    }
}

/// Render labelled non-negative values as horizontal bars.
///
/// Bar length is `floor(value / max * available)` where `available` is the
/// width left after the label and value columns. Callers must have checked
/// that `labels` and `values` pair up.
#[must_use]
pub fn render_bars(labels: &[String], values: &[f64], layout: &BarLayout, mode: ColorMode) -> String {
    if values.is_empty() {
        return EMPTY_PLOT.to_string();
    }

    let mut lines = Vec::with_capacity(values.len() + 5);
    push_title(&mut lines, &layout.title);

    let label_width = labels.iter().map(|l| text_width(l)).max().unwrap_or(0);
    let max_value = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let formatted: Vec<String> = values.iter().map(|v| format_number(*v)).collect();
    let value_width = formatted.iter().map(|f| text_width(f)).max().unwrap_or(0);

    let available = layout
        .width
        .saturating_sub(label_width + value_width + 6)
        .max(MIN_BAR_WIDTH);

    let indent = " ".repeat(label_width);
    let rule = box_light::HORIZONTAL
        .to_string()
        .repeat(available + value_width + 2);
    lines.push(format!(
        "  {indent} {}{rule}{}",
        box_light::TOP_LEFT,
        box_light::TOP_RIGHT
    ));

    for ((label, value), shown) in labels.iter().zip(values).zip(&formatted) {
        let bar_len = if max_value > 0.0 {
            (value / max_value * available as f64) as usize
        } else {
            0
        };
        let bar = layout.symbol.repeat(bar_len);
        let bar = if bar.is_empty() {
            bar
        } else {
            colorize(&bar, layout.color, mode)
        };
        lines.push(format!(
            "  {} {}{bar} {}",
            pad_left(label, label_width),
            box_light::RIGHT_TEE,
            pad_left(shown, value_width)
        ));
    }

    lines.push(format!(
        "  {indent} {}{rule}{}",
        box_light::BOTTOM_LEFT,
        box_light::BOTTOM_RIGHT
    ));

    if !layout.xlabel.is_empty() {
        lines.push(centered(&layout.xlabel, layout.width));
    }

    tracing::debug!(rows = values.len(), width = layout.width, available, "render bars");
    lines.join("\n")
}

/// Horizontal bar chart of labelled non-negative values.
#[derive(Debug, Clone, PartialEq)]
pub struct Barplot {
    labels: Vec<String>,
    values: Vec<f64>,
    layout: BarLayout,
}

impl Barplot {
    /// Create a bar chart.
    ///
    /// Fails when the arrays differ in length or a value is negative or not
    /// finite.
    pub fn new<L: ToString>(
        labels: impl IntoIterator<Item = L>,
        values: impl Into<Vec<f64>>,
    ) -> Result<Self> {
        let labels: Vec<String> = labels.into_iter().map(|l| l.to_string()).collect();
        let values = values.into();

        ensure_same_len("labels", labels.len(), "values", values.len())?;
        ensure_finite("values", &values)?;
        if let Some((index, &value)) = values.iter().enumerate().find(|(_, v)| **v < 0.0) {
            return Err(PlotError::NegativeValue { index, value });
        }

        Ok(Self {
            labels,
            values,
            layout: BarLayout {
                color: Some(Color::Green),
                ..BarLayout::default()
            },
        })
    }

    /// Set the title.
    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.layout.title = title.into();
        self
    }

    /// Set the label printed under the chart.
    #[must_use]
    pub fn with_xlabel(mut self, xlabel: impl Into<String>) -> Self {
        self.layout.xlabel = xlabel.into();
        self
    }

    /// Set the total width in characters.
    #[must_use]
    pub fn with_width(mut self, width: usize) -> Self {
        self.layout.width = width;
        self
    }

    /// Set the bar color; `None` disables color.
    #[must_use]
    pub fn with_color(mut self, color: Option<Color>) -> Self {
        self.layout.color = color;
        self
    }

    /// Set the glyph used to draw bars.
    #[must_use]
    pub fn with_symbol(mut self, symbol: impl Into<String>) -> Self {
        self.layout.symbol = symbol.into();
        self
    }

    /// Bar labels.
    #[must_use]
    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    /// Bar values.
    #[must_use]
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// Presentation options.
    #[must_use]
    pub fn layout(&self) -> &BarLayout {
        &self.layout
    }
}

impl Plot for Barplot {
    fn render(&self, mode: ColorMode) -> String {
        render_bars(&self.labels, &self.values, &self.layout, mode)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bar_lengths(out: &str) -> Vec<usize> {
        out.lines()
            .filter(|l| l.contains('┤'))
            .map(|l| l.matches('■').count())
            .collect()
    }

    #[test]
    fn test_bar_creation() {
        let bar = Barplot::new(["a", "b"], vec![1.0, 2.0]).unwrap();
        assert_eq!(bar.labels(), &["a".to_string(), "b".to_string()]);
        assert_eq!(bar.values(), &[1.0, 2.0]);
        assert_eq!(bar.layout().color, Some(Color::Green));
        assert_eq!(bar.layout().width, DEFAULT_WIDTH);
    }

    #[test]
    fn test_bar_length_mismatch() {
        let err = Barplot::new(["a"], vec![1.0, 2.0]).unwrap_err();
        assert!(matches!(err, PlotError::LengthMismatch { .. }));
    }

    #[test]
    fn test_bar_negative_rejected() {
        let err = Barplot::new(["a", "b"], vec![1.0, -2.0]).unwrap_err();
        assert_eq!(
            err,
            PlotError::NegativeValue {
                index: 1,
                value: -2.0
            }
        );
    }

    #[test]
    fn test_bar_nan_rejected() {
        let err = Barplot::new(["a"], vec![f64::NAN]).unwrap_err();
        assert!(matches!(err, PlotError::NonFinite { .. }));
    }

    #[test]
    fn test_numeric_labels() {
        let bar = Barplot::new([2023, 2024], vec![1.0, 2.0]).unwrap();
        assert_eq!(bar.labels(), &["2023".to_string(), "2024".to_string()]);
    }

    #[test]
    fn test_empty_placeholder() {
        let bar = Barplot::new(Vec::<String>::new(), Vec::<f64>::new()).unwrap();
        assert_eq!(bar.render(ColorMode::Plain), EMPTY_PLOT);
    }

    #[test]
    fn test_exact_layout() {
        let out = Barplot::new(["A", "B"], vec![10.0, 20.0])
            .unwrap()
            .render(ColorMode::Plain);
        // label 1 + value 5 + 6 leaves 48 columns for bars
        let rule = "─".repeat(48 + 5 + 2);
        let expected = [
            format!("    ┌{rule}┐"),
            format!("  A ┤{} 10.00", "■".repeat(24)),
            format!("  B ┤{} 20.00", "■".repeat(48)),
            format!("    └{rule}┘"),
        ]
        .join("\n");
        assert_eq!(out, expected);
    }

    #[test]
    fn test_double_value_double_bar() {
        let out = Barplot::new(["A", "B"], vec![10.0, 20.0])
            .unwrap()
            .render(ColorMode::Plain);
        assert_eq!(bar_lengths(&out), vec![24, 48]);
    }

    #[test]
    fn test_title_and_xlabel() {
        let out = Barplot::new(["x"], vec![1.0])
            .unwrap()
            .with_title("Daily Sales")
            .with_xlabel("Sales")
            .render(ColorMode::Plain);
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines[0], "  Daily Sales");
        assert_eq!(lines[1], "");
        assert_eq!(lines.last().copied(), Some(format!("{}Sales", " ".repeat(27)).as_str()));
    }

    #[test]
    fn test_all_zero_values_draw_no_bars() {
        let out = Barplot::new(["a", "b"], vec![0.0, 0.0])
            .unwrap()
            .render(ColorMode::Plain);
        assert_eq!(bar_lengths(&out), vec![0, 0]);
    }

    #[test]
    fn test_narrow_width_keeps_minimum_bar_area() {
        let out = Barplot::new(["label"], vec![5.0])
            .unwrap()
            .with_width(5)
            .render(ColorMode::Plain);
        assert_eq!(bar_lengths(&out), vec![MIN_BAR_WIDTH]);
    }

    #[test]
    fn test_custom_symbol() {
        let out = Barplot::new(["a"], vec![1.0])
            .unwrap()
            .with_symbol("#")
            .with_width(20)
            .render(ColorMode::Plain);
        assert!(out.contains("┤########## 1.00"));
    }

    #[test]
    fn test_color_applied_in_ansi_mode() {
        let bar = Barplot::new(["a"], vec![1.0]).unwrap();
        assert!(bar.render(ColorMode::Ansi).contains("\x1b[32m■"));
        assert!(!bar.render(ColorMode::Plain).contains('\x1b'));
        let uncolored = bar.with_color(None).render(ColorMode::Ansi);
        assert!(!uncolored.contains('\x1b'));
    }

    #[test]
    fn test_render_is_repeatable() {
        let bar = Barplot::new(["a", "b"], vec![3.0, 4.0]).unwrap();
        assert_eq!(bar.render(ColorMode::Plain), bar.render(ColorMode::Plain));
    }
}
