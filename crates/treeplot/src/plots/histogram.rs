//! Histogram: equal-width bins drawn as a bar chart.

use super::bar::{render_bars, BarLayout};
use super::Plot;
use crate::color::{strip_colors, Color, ColorMode};
use crate::error::{ensure_finite, Result};
use crate::scaling::{compute_bins, format_number_with_precision, Bins};

/// Bin count used when none is given.
pub const DEFAULT_BINS: usize = 10;

const DEFAULT_TITLE: &str = "Histogram";
const DEFAULT_XLABEL: &str = "Value";

/// Distribution of `values` over equal-width bins.
///
/// Output never carries ANSI codes.
#[derive(Debug, Clone, PartialEq)]
pub struct Histogram {
    values: Vec<f64>,
    bins: Bins,
    labels: Vec<String>,
    counts: Vec<f64>,
    layout: BarLayout,
}

impl Histogram {
    /// Bin `values` into [`DEFAULT_BINS`] bins. Fails on non-finite values.
    pub fn new(values: impl Into<Vec<f64>>) -> Result<Self> {
        let values = values.into();
        ensure_finite("values", &values)?;
        let mut hist = Self {
            values,
            bins: Bins::default(),
            labels: Vec::new(),
            counts: Vec::new(),
            layout: BarLayout {
                title: DEFAULT_TITLE.to_string(),
                xlabel: DEFAULT_XLABEL.to_string(),
                color: Some(Color::Cyan),
                ..BarLayout::default()
            },
        };
        hist.rebin(DEFAULT_BINS)?;
        Ok(hist)
    }

    /// Re-bin into `n_bins` bins. Fails when `n_bins` is zero.
    pub fn with_bins(mut self, n_bins: usize) -> Result<Self> {
        self.rebin(n_bins)?;
        Ok(self)
    }

    fn rebin(&mut self, n_bins: usize) -> Result<()> {
        self.bins = compute_bins(&self.values, n_bins)?;
        self.labels = bin_labels(&self.bins);
        self.counts = self.bins.counts.iter().map(|&c| c as f64).collect();
        Ok(())
    }

    /// Set the title. An empty title restores the default.
    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.layout.title = non_empty_or(title.into(), DEFAULT_TITLE);
        self
    }

    /// Set the label under the chart. An empty label restores the default.
    #[must_use]
    pub fn with_xlabel(mut self, xlabel: impl Into<String>) -> Self {
        self.layout.xlabel = non_empty_or(xlabel.into(), DEFAULT_XLABEL);
        self
    }

    #[must_use]
    pub fn with_width(mut self, width: usize) -> Self {
        self.layout.width = width;
        self
    }

    #[must_use]
    pub fn with_color(mut self, color: Option<Color>) -> Self {
        self.layout.color = color;
        self
    }

    #[must_use]
    pub fn with_symbol(mut self, symbol: impl Into<String>) -> Self {
        self.layout.symbol = symbol.into();
        self
    }

    /// Raw values before binning.
    #[must_use]
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// Computed bin table.
    #[must_use]
    pub fn bins(&self) -> &Bins {
        &self.bins
    }

    /// Range label of each bin.
    #[must_use]
    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    #[must_use]
    pub fn layout(&self) -> &BarLayout {
        &self.layout
    }
}

fn non_empty_or(text: String, default: &str) -> String {
    if text.is_empty() {
        default.to_string()
    } else {
        text
    }
}

/// `"start-end"` for every bin but the last, which reads `"start+"`.
fn bin_labels(bins: &Bins) -> Vec<String> {
    let last = bins.len().saturating_sub(1);
    bins.edges
        .windows(2)
        .enumerate()
        .map(|(i, edge)| {
            let start = format_number_with_precision(edge[0], 1);
            if i == last {
                format!("{start}+")
            } else {
                format!("{start}-{}", format_number_with_precision(edge[1], 1))
            }
        })
        .collect()
}

impl Plot for Histogram {
    fn render(&self, mode: ColorMode) -> String {
        strip_colors(&render_bars(&self.labels, &self.counts, &self.layout, mode))
    }
}
