//! Bordered axis frame shared by line and scatter plots.

use super::{centered, pad_left, push_title, tick_row, DEFAULT_HEIGHT, DEFAULT_WIDTH, EMPTY_PLOT};
use crate::canvas::{Canvas, CanvasKind};
use crate::color::{Color, ColorMode};
use crate::scaling::{format_number, get_axis_range, midpoint, min_max, scale_values, AXIS_PADDING};
use crate::symbols::box_light;

/// Width of the y tick label column.
const Y_LABEL_WIDTH: usize = 8;
/// Columns taken by the y label column, its gap, both borders and margin.
const RESERVED_COLUMNS: usize = Y_LABEL_WIDTH + 4;
const MIN_PLOT_WIDTH: usize = 10;
const MIN_PLOT_HEIGHT: usize = 3;

/// Presentation options for charts drawn on a canvas inside axes.
#[derive(Debug, Clone, PartialEq)]
pub struct AxisFrame {
    /// Title printed above the chart.
    pub title: String,
    /// Label centered below the x axis.
    pub xlabel: String,
    /// Label printed on its own line above the frame.
    pub ylabel: String,
    /// Total width in characters.
    pub width: usize,
    /// Plot area height in characters.
    pub height: usize,
    /// Color of drawn pixels.
    pub color: Option<Color>,
    /// Canvas density.
    pub canvas: CanvasKind,
}

impl Default for AxisFrame {
    fn default() -> Self {
        Self {
            title: String::new(),
            xlabel: String::new(),
            ylabel: String::new(),
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            color: None,
            canvas: CanvasKind::default(),
        }
    }
}

impl AxisFrame {
    /// Plot area size in characters as `(width, height)`, borders included
    /// in the height.
    #[must_use]
    pub fn plot_area(&self) -> (usize, usize) {
        (
            self.width.saturating_sub(RESERVED_COLUMNS).max(MIN_PLOT_WIDTH),
            self.height.max(MIN_PLOT_HEIGHT),
        )
    }

    /// Scale `(x, y)` into the canvas pixel space, let `draw` place them, and
    /// wrap the result in borders, ticks and labels.
    ///
    /// The canvas sits between the top and bottom borders. The x range is the
    /// exact data range; the y range is padded. Pixel row 0 is the top of the
    /// canvas. `x` and `y` must have equal length.
    pub(crate) fn render<F>(&self, x: &[f64], y: &[f64], mode: ColorMode, draw: F) -> String
    where
        F: FnOnce(&mut dyn Canvas, &[(i64, i64)], Option<Color>),
    {
        let Some((x_min, x_max)) = min_max(x) else {
            return EMPTY_PLOT.to_string();
        };
        if y.is_empty() {
            return EMPTY_PLOT.to_string();
        }
        let (y_min, y_max) = get_axis_range(y, AXIS_PADDING);

        let (plot_width, plot_height) = self.plot_area();
        let mut canvas = self.canvas.create(plot_width, plot_height - 2);

        let px_max = canvas.pixel_width().saturating_sub(1) as f64;
        let py_max = canvas.pixel_height().saturating_sub(1) as f64;
        let xs = scale_values(x, 0.0, px_max, Some(x_min), Some(x_max));
        let ys = scale_values(y, py_max, 0.0, Some(y_min), Some(y_max));
        let points: Vec<(i64, i64)> = xs
            .iter()
            .zip(&ys)
            .map(|(px, py)| (*px as i64, *py as i64))
            .collect();

        draw(canvas.as_mut(), &points, self.color);
        let body = canvas.render(mode);

        let mut lines = Vec::with_capacity(plot_height + 6);
        push_title(&mut lines, &self.title);
        if !self.ylabel.is_empty() {
            lines.push(self.ylabel.clone());
        }

        let y_ticks = [
            (0, format_number(y_max)),
            (plot_height / 2, format_number(midpoint(y_min, y_max))),
            (plot_height - 1, format_number(y_min)),
        ];
        let blank_label = " ".repeat(Y_LABEL_WIDTH);
        let rule = box_light::HORIZONTAL.to_string().repeat(plot_width);

        let canvas_lines: Vec<&str> = body.split('\n').collect();
        for row in 0..plot_height {
            let label = y_ticks
                .iter()
                .find(|(pos, _)| *pos == row)
                .map_or_else(|| blank_label.clone(), |(_, text)| pad_left(text, Y_LABEL_WIDTH));
            let framed = if row == 0 {
                format!("{}{rule}{}", box_light::TOP_LEFT, box_light::TOP_RIGHT)
            } else if row == plot_height - 1 {
                format!("{}{rule}{}", box_light::BOTTOM_LEFT, box_light::BOTTOM_RIGHT)
            } else {
                let inner = canvas_lines.get(row - 1).copied().unwrap_or_default();
                format!("{}{inner}{}", box_light::VERTICAL, box_light::VERTICAL)
            };
            lines.push(format!("{label} {framed}"));
        }

        let x_labels = [
            format_number(x_min),
            format_number(midpoint(x_min, x_max)),
            format_number(x_max),
        ];
        lines.push(tick_row(
            Y_LABEL_WIDTH + 1,
            plot_width,
            [x_labels[0].as_str(), x_labels[1].as_str(), x_labels[2].as_str()],
        ));

        if !self.xlabel.is_empty() {
            lines.push(centered(&self.xlabel, self.width));
        }

        tracing::debug!(
            points = points.len(),
            width = plot_width,
            height = plot_height,
            canvas = %self.canvas,
            "render axes"
        );
        lines.join("\n")
    }
}
