//! Box-and-whisker chart, one row per series on a shared scale.
//!
//! ```text
//!   Box 1  ├█│██┤
//!   Box 2              ├─────███████│███████──────┤
//!
//!          ├──────────────────────────────────────┤
//!          1.00              15.50            30.00
//! ```

use super::{centered, pad_left, push_title, text_width, tick_row, Plot, DEFAULT_HEIGHT, DEFAULT_WIDTH, EMPTY_PLOT};
use crate::color::{strip_colors, Color, ColorMode};
use crate::error::{ensure_same_len, PlotError, Result};
use crate::scaling::{format_number, midpoint, scale_values};
use crate::symbols::box_plot;

/// Narrowest scale, in characters, regardless of the requested width.
const MIN_SCALE_WIDTH: usize = 20;
/// Columns reserved beside the label column.
const RESERVED_COLUMNS: usize = 16;

/// `(min, Q1, median, Q3, max)` of one series.
///
/// Quartiles are the medians of the lower and upper halves of the sorted
/// series; for an odd count both halves include the median. An empty series
/// summarizes to all zeros.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct FiveNumberSummary {
    pub min: f64,
    pub q1: f64,
    pub median: f64,
    pub q3: f64,
    pub max: f64,
}

impl FiveNumberSummary {
    /// Summarize `values`.
    #[must_use]
    pub fn from_values(values: &[f64]) -> Self {
        if values.is_empty() {
            return Self::default();
        }
        let mut sorted = values.to_vec();
        sorted.sort_by(f64::total_cmp);

        let n = sorted.len();
        Self {
            min: sorted[0],
            q1: median(&sorted[..n.div_ceil(2)]),
            median: median(&sorted),
            q3: median(&sorted[n / 2..]),
            max: sorted[n - 1],
        }
    }

    /// The five values in ascending order.
    #[must_use]
    pub fn as_array(&self) -> [f64; 5] {
        [self.min, self.q1, self.median, self.q3, self.max]
    }
}

/// Five-number summary of `values`; all zeros when empty.
#[must_use]
pub fn five_number_summary(values: &[f64]) -> FiveNumberSummary {
    FiveNumberSummary::from_values(values)
}

/// Median of a sorted, non-empty slice.
fn median(sorted: &[f64]) -> f64 {
    let mid = sorted.len() / 2;
    if sorted.len() % 2 == 0 {
        midpoint(sorted[mid - 1], sorted[mid])
    } else {
        sorted[mid]
    }
}

/// Box plot of one or more series.
///
/// Output is always plain text; the configured color is not emitted.
#[derive(Debug, Clone, PartialEq)]
pub struct Boxplot {
    data: Vec<Vec<f64>>,
    labels: Vec<String>,
    title: String,
    ylabel: String,
    width: usize,
    height: usize,
    color: Option<Color>,
}

impl Boxplot {
    /// Create a box plot with labels `Box 1`, `Box 2`, ...
    pub fn new(data: Vec<Vec<f64>>) -> Result<Self> {
        if let Some(index) = data.iter().position(|s| s.iter().any(|v| !v.is_finite())) {
            return Err(PlotError::NonFinite { field: "data", index });
        }
        let labels = (1..=data.len()).map(|i| format!("Box {i}")).collect();
        Ok(Self {
            data,
            labels,
            title: String::new(),
            ylabel: String::new(),
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            color: Some(Color::Blue),
        })
    }

    /// Name each series. Fails unless there is one label per series.
    pub fn with_labels<L: ToString>(mut self, labels: impl IntoIterator<Item = L>) -> Result<Self> {
        let labels: Vec<String> = labels.into_iter().map(|l| l.to_string()).collect();
        ensure_same_len("labels", labels.len(), "data", self.data.len())?;
        self.labels = labels;
        Ok(self)
    }

    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Set the label centered under the scale.
    #[must_use]
    pub fn with_ylabel(mut self, ylabel: impl Into<String>) -> Self {
        self.ylabel = ylabel.into();
        self
    }

    #[must_use]
    pub fn with_width(mut self, width: usize) -> Self {
        self.width = width;
        self
    }

    /// Set the height. Each series takes one row, so this does not change
    /// the output.
    #[must_use]
    pub fn with_height(mut self, height: usize) -> Self {
        self.height = height;
        self
    }

    #[must_use]
    pub fn with_color(mut self, color: Option<Color>) -> Self {
        self.color = color;
        self
    }

    #[must_use]
    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    #[must_use]
    pub fn height(&self) -> usize {
        self.height
    }

    #[must_use]
    pub fn color(&self) -> Option<Color> {
        self.color
    }

    /// Five-number summary of every series.
    #[must_use]
    pub fn summaries(&self) -> Vec<FiveNumberSummary> {
        self.data.iter().map(|s| FiveNumberSummary::from_values(s)).collect()
    }
}

/// Cell offsets of `summary` on a scale of `available` cells spanning
/// `[low, high]`, clamped to the scale and kept in ascending order.
fn positions(summary: &FiveNumberSummary, low: f64, high: f64, available: usize) -> [usize; 5] {
    let scaled = scale_values(&summary.as_array(), 0.0, available as f64, Some(low), Some(high));
    let mut cells = [0usize; 5];
    let mut floor = 0;
    for (cell, value) in cells.iter_mut().zip(scaled) {
        *cell = (value as usize).clamp(floor, available);
        floor = *cell;
    }
    cells
}

/// One series row: whiskers, interquartile box and median marker placed at
/// `positions` (`min, q1, median, q3, max` cell offsets) in `cells` cells.
fn box_row(positions: [usize; 5], cells: usize) -> String {
    let [min, q1, med, q3, max] = positions;
    let mut row = vec![' '; cells];
    row[min..q1].fill(box_plot::WHISKER);
    row[q3..=max].fill(box_plot::WHISKER);
    row[q1..=q3].fill(box_plot::BOX_FILL);
    row[med] = box_plot::MEDIAN;
    row[min] = box_plot::LOW_END;
    row[max] = box_plot::HIGH_END;
    row.into_iter().collect()
}

impl Plot for Boxplot {
    fn render(&self, _mode: ColorMode) -> String {
        if self.data.is_empty() {
            return EMPTY_PLOT.to_string();
        }

        let mut lines = Vec::with_capacity(self.data.len() + 6);
        push_title(&mut lines, &self.title);

        let stats = self.summaries();
        let global_min = stats.iter().map(|s| s.min).fold(f64::INFINITY, f64::min);
        let global_max = stats.iter().map(|s| s.max).fold(f64::NEG_INFINITY, f64::max);
        let tick_max = if global_min == global_max {
            global_min + 1.0
        } else {
            global_max
        };

        let label_width = self.labels.iter().map(|l| text_width(l)).max().unwrap_or(0);
        let available = self
            .width
            .saturating_sub(label_width + RESERVED_COLUMNS)
            .max(MIN_SCALE_WIDTH);

        for (label, summary) in self.labels.iter().zip(&stats) {
            let cells = positions(summary, global_min, global_max, available);
            lines.push(format!(
                "  {}  {}",
                pad_left(label, label_width),
                box_row(cells, available + 1)
            ));
        }

        let indent = label_width + 4;
        lines.push(String::new());
        lines.push(format!(
            "{}{}{}{}",
            " ".repeat(indent),
            box_plot::LOW_END,
            box_plot::WHISKER.to_string().repeat(available - 1),
            box_plot::HIGH_END
        ));

        let ticks = [
            format_number(global_min),
            format_number(midpoint(global_min, tick_max)),
            format_number(tick_max),
        ];
        lines.push(tick_row(
            indent,
            available + 1,
            [ticks[0].as_str(), ticks[1].as_str(), ticks[2].as_str()],
        ));

        if !self.ylabel.is_empty() {
            lines.push(centered(&self.ylabel, self.width));
        }

        tracing::debug!(rows = self.data.len(), width = self.width, available, "render box plot");
        strip_colors(&lines.join("\n"))
    }
}
