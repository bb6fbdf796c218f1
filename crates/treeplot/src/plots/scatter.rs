//! Scatter chart: unconnected points on a canvas.

use super::xy::AxisFrame;
use super::Plot;
use crate::canvas::{Canvas, CanvasKind};
use crate::color::{Color, ColorMode};
use crate::error::{ensure_finite, ensure_same_len, Result};

/// Scatter chart of paired `x` and `y` values.
#[derive(Debug, Clone, PartialEq)]
pub struct Scatterplot {
    x: Vec<f64>,
    y: Vec<f64>,
    frame: AxisFrame,
}

impl Scatterplot {
    /// Create a scatter chart. Fails unless `x` and `y` have equal length
    /// and contain only finite numbers.
    pub fn new(x: impl Into<Vec<f64>>, y: impl Into<Vec<f64>>) -> Result<Self> {
        let (x, y) = (x.into(), y.into());
        ensure_same_len("x", x.len(), "y", y.len())?;
        ensure_finite("x", &x)?;
        ensure_finite("y", &y)?;
        Ok(Self {
            x,
            y,
            frame: AxisFrame {
                color: Some(Color::Magenta),
                ..AxisFrame::default()
            },
        })
    }

    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.frame.title = title.into();
        self
    }

    #[must_use]
    pub fn with_xlabel(mut self, xlabel: impl Into<String>) -> Self {
        self.frame.xlabel = xlabel.into();
        self
    }

    #[must_use]
    pub fn with_ylabel(mut self, ylabel: impl Into<String>) -> Self {
        self.frame.ylabel = ylabel.into();
        self
    }

    #[must_use]
    pub fn with_width(mut self, width: usize) -> Self {
        self.frame.width = width;
        self
    }

    #[must_use]
    pub fn with_height(mut self, height: usize) -> Self {
        self.frame.height = height;
        self
    }

    /// Set the point color; `None` disables color.
    #[must_use]
    pub fn with_color(mut self, color: Option<Color>) -> Self {
        self.frame.color = color;
        self
    }

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

    #[must_use]
    pub fn frame(&self) -> &AxisFrame {
        &self.frame
    }
}

fn scatter(canvas: &mut dyn Canvas, points: &[(i64, i64)], color: Option<Color>) {
    for &(x, y) in points {
        canvas.pixel(x, y, color);
    }
}

impl Plot for Scatterplot {
    fn render(&self, mode: ColorMode) -> String {
        self.frame.render(&self.x, &self.y, mode, scatter)
    }
}
