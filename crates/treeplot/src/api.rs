//! Entry points, one per chart type.
//!
//! Each takes the chart's required data, validates it, and returns the plot
//! with its default presentation. Optional settings go through the plot's
//! `with_*` methods:
//!
//! ```
//! use treeplot::{barplot, ColorMode, Plot};
//!
//! let chart = barplot(["Mon", "Tue", "Wed"], vec![120.0, 150.0, 90.0])?
//!     .with_title("Daily Sales")
//!     .with_xlabel("Sales ($)");
//! println!("{}", chart.render(ColorMode::detect()));
//! # Ok::<(), treeplot::PlotError>(())
//! ```

use crate::error::Result;
use crate::plots::{Barplot, Boxplot, Histogram, Lineplot, Scatterplot};

/// Horizontal bar chart. `values` must be non-negative and pair up with
/// `labels`.
pub fn barplot<L: ToString>(
    labels: impl IntoIterator<Item = L>,
    values: impl Into<Vec<f64>>,
) -> Result<Barplot> {
    Barplot::new(labels, values)
}

/// Line chart of `y` against its indices; see [`Lineplot::with_x`].
pub fn lineplot(y: impl Into<Vec<f64>>) -> Result<Lineplot> {
    Lineplot::new(y)
}

/// Histogram of `values` in ten bins; see [`Histogram::with_bins`].
pub fn histogram(values: impl Into<Vec<f64>>) -> Result<Histogram> {
    Histogram::new(values)
}

/// Scatter chart of equal-length `x` and `y`.
pub fn scatterplot(x: impl Into<Vec<f64>>, y: impl Into<Vec<f64>>) -> Result<Scatterplot> {
    Scatterplot::new(x, y)
}

/// Box plot with one box per series; see [`Boxplot::with_labels`].
pub fn boxplot(data: Vec<Vec<f64>>) -> Result<Boxplot> {
    Boxplot::new(data)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::ColorMode;
    use crate::error::PlotError;
    use crate::plots::Plot;

    #[test]
    fn test_factories_build_defaults() {
        assert!(barplot(["a"], vec![1.0]).is_ok());
        assert_eq!(lineplot(vec![1.0, 2.0]).unwrap().x(), &[0.0, 1.0]);
        assert_eq!(histogram(vec![1.0, 2.0]).unwrap().bins().len(), 10);
        assert!(scatterplot(vec![1.0], vec![2.0]).is_ok());
        assert_eq!(boxplot(vec![vec![1.0]]).unwrap().labels(), &["Box 1"]);
    }

    #[test]
    fn test_factories_propagate_errors() {
        assert!(matches!(
            barplot(["a", "b"], vec![1.0]),
            Err(PlotError::LengthMismatch { .. })
        ));
        assert!(matches!(
            scatterplot(vec![1.0, 2.0], vec![1.0]),
            Err(PlotError::LengthMismatch { .. })
        ));
    }

    #[test]
    fn test_optional_settings_chain() {
        let out = lineplot(vec![3.0, 1.0, 2.0])
            .and_then(|p| p.with_x(vec![10.0, 20.0, 30.0]))
            .unwrap()
            .with_title("Temperature")
            .with_xlabel("Time")
            .with_ylabel("Temp")
            .with_height(8)
            .render(ColorMode::Plain);
        assert!(out.starts_with("  Temperature\n\nTemp\n"));
        assert!(out.contains("30.00"));
    }
}
