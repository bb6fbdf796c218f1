//! Line chart drawn as connected segments on a canvas.

use super::xy::AxisFrame;
use super::Plot;
use crate::canvas::{Canvas, CanvasKind};
use crate::color::{Color, ColorMode};
use crate::error::{ensure_finite, ensure_same_len, Result};

/// Line chart of `y` against `x`.
///
/// `x` defaults to the indices `0..y.len()`. Consecutive points are joined
/// with straight segments; a single point is drawn as one pixel.
#[derive(Debug, Clone, PartialEq)]
pub struct Lineplot {
    x: Vec<f64>,
    y: Vec<f64>,
    frame: AxisFrame,
}

impl Lineplot {
    /// Create a line chart over `y` with index x values.
    pub fn new(y: impl Into<Vec<f64>>) -> Result<Self> {
        let y = y.into();
        ensure_finite("y", &y)?;
        let x = (0..y.len()).map(|i| i as f64).collect();
        Ok(Self {
            x,
            y,
            frame: AxisFrame {
                color: Some(Color::Blue),
                ..AxisFrame::default()
            },
        })
    }

    /// Replace the x values. Fails unless `x` matches `y` in length.
    pub fn with_x(mut self, x: impl Into<Vec<f64>>) -> Result<Self> {
        let x = x.into();
        ensure_same_len("x", x.len(), "y", self.y.len())?;
        ensure_finite("x", &x)?;
        self.x = x;
        Ok(self)
    }

    /// Set the title.
    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.frame.title = title.into();
        self
    }

    /// Set the x axis label.
    #[must_use]
    pub fn with_xlabel(mut self, xlabel: impl Into<String>) -> Self {
        self.frame.xlabel = xlabel.into();
        self
    }

    /// Set the y axis label.
    #[must_use]
    pub fn with_ylabel(mut self, ylabel: impl Into<String>) -> Self {
        self.frame.ylabel = ylabel.into();
        self
    }

    /// Set the total width in characters.
    #[must_use]
    pub fn with_width(mut self, width: usize) -> Self {
        self.frame.width = width;
        self
    }

    /// Set the plot area height in characters.
    #[must_use]
    pub fn with_height(mut self, height: usize) -> Self {
        self.frame.height = height;
        self
    }

    /// Set the line color; `None` disables color.
    #[must_use]
    pub fn with_color(mut self, color: Option<Color>) -> Self {
        self.frame.color = color;
        self
    }

    /// Set the canvas density.
    #[must_use]
    pub fn with_canvas(mut self, canvas: CanvasKind) -> Self {
        self.frame.canvas = canvas;
        self
    }

    #[must_use]
    pub fn x(&self) -> &[f64] {
        &self.x
    }

    #[must_use]
    pub fn y(&self) -> &[f64] {
        &self.y
    }

    /// Presentation options.
    #[must_use]
    pub fn frame(&self) -> &AxisFrame {
        &self.frame
    }
}

fn connect(canvas: &mut dyn Canvas, points: &[(i64, i64)], color: Option<Color>) {
    if let [(x, y)] = points {
        canvas.pixel(*x, *y, color);
        return;
    }
    for pair in points.windows(2) {
        let ((x0, y0), (x1, y1)) = (pair[0], pair[1]);
        canvas.line(x0, y0, x1, y1, color);
    }
}

impl Plot for Lineplot {
    fn render(&self, mode: ColorMode) -> String {
        self.frame.render(&self.x, &self.y, mode, connect)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::PlotError;
    use crate::plots::EMPTY_PLOT;

    fn canvas_rows(out: &str) -> Vec<&str> {
        out.lines()
            .filter(|l| l.contains('│') || l.contains('┌') || l.contains('└'))
            .collect()
    }

    #[test]
    fn test_default_x_is_index() {
        let plot = Lineplot::new(vec![1.0, 2.0, 3.0]).unwrap();
        assert_eq!(plot.x(), &[0.0, 1.0, 2.0]);
        assert_eq!(plot.frame().color, Some(Color::Blue));
    }

    #[test]
    fn test_x_length_mismatch() {
        let err = Lineplot::new(vec![1.0, 2.0]).unwrap().with_x(vec![1.0]).unwrap_err();
        assert!(matches!(err, PlotError::LengthMismatch { left: "x", .. }));
    }

    #[test]
    fn test_infinite_rejected() {
        let err = Lineplot::new(vec![1.0, f64::INFINITY]).unwrap_err();
        assert_eq!(err, PlotError::NonFinite { field: "y", index: 1 });
    }

    #[test]
    fn test_empty_placeholder() {
        let plot = Lineplot::new(Vec::<f64>::new()).unwrap();
        assert_eq!(plot.render(ColorMode::Plain), EMPTY_PLOT);
    }

    #[test]
    fn test_row_count_matches_height() {
        let out = Lineplot::new(vec![1.0, 2.0, 3.0])
            .unwrap()
            .with_height(7)
            .with_title("t")
            .render(ColorMode::Plain);
        assert_eq!(canvas_rows(&out).len(), 7);
        // title, spacer, 7 rows, x ticks
        assert_eq!(out.lines().count(), 10);
    }

    #[test]
    fn test_segments_are_connected() {
        let out = Lineplot::new(vec![0.0, 10.0])
            .unwrap()
            .with_width(22)
            .with_height(6)
            .with_canvas(CanvasKind::Ascii)
            .render(ColorMode::Plain);
        // every inner row crosses the diagonal
        for row in &canvas_rows(&out)[1..4] {
            assert!(row.contains('*'), "gap in {row:?}");
        }
    }

    #[test]
    fn test_single_point_draws_one_pixel() {
        let out = Lineplot::new(vec![5.0])
            .unwrap()
            .with_width(22)
            .with_height(5)
            .with_canvas(CanvasKind::Ascii)
            .render(ColorMode::Plain);
        assert_eq!(out.matches('*').count(), 1);
    }

    #[test]
    fn test_custom_x_range_in_ticks() {
        let out = Lineplot::new(vec![1.0, 2.0])
            .unwrap()
            .with_x(vec![100.0, 300.0])
            .unwrap()
            .render(ColorMode::Plain);
        let ticks = out.lines().last().unwrap();
        assert!(ticks.trim_start().starts_with("100.00"));
        assert!(ticks.contains("200.00"));
        assert!(ticks.ends_with("300.00"));
    }

    #[test]
    fn test_colored_output() {
        let plot = Lineplot::new(vec![1.0, 5.0, 2.0, 4.0]).unwrap();
        assert!(plot.render(ColorMode::Ansi).contains("\x1b[34m"));
        assert!(!plot.render(ColorMode::Plain).contains('\x1b'));
    }
}
