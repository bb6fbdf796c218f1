//! Error types for treeplot.

use thiserror::Error;

/// Errors raised while building a plot from caller data.
///
/// Every variant describes a shape problem detected before any output is
/// produced. Degenerate but well-formed data (empty arrays, a single point,
/// all-equal values) never produces an error.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PlotError {
    /// Two arrays that must pair up element-wise have different lengths.
    #[error("{left} and {right} must have the same length (got {left_len} and {right_len})")]
    LengthMismatch {
        left: &'static str,
        right: &'static str,
        left_len: usize,
        right_len: usize,
    },

    /// A required array was not supplied.
    #[error("{0} values are required")]
    MissingData(&'static str),

    /// A bar value was below zero.
    #[error("all values must be non-negative (value {value} at index {index})")]
    NegativeValue { index: usize, value: f64 },

    /// NaN or infinity in numeric input.
    #[error("{field} contains a non-finite number at index {index}")]
    NonFinite { field: &'static str, index: usize },

    /// Histogram asked for zero bins.
    #[error("bin count must be at least 1 (got {0})")]
    InvalidBins(usize),

    /// A chart request named a type outside the supported set.
    #[error("unknown chart type: {0}")]
    UnknownChart(String),
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, PlotError>;

/// Reject NaN and infinities in `values`, reporting the first offender.
pub(crate) fn ensure_finite(field: &'static str, values: &[f64]) -> Result<()> {
    match values.iter().position(|v| !v.is_finite()) {
        Some(index) => Err(PlotError::NonFinite { field, index }),
        None => Ok(()),
    }
}

/// Require `left` and `right` to have equal length.
pub(crate) fn ensure_same_len(
    left: &'static str,
    left_len: usize,
    right: &'static str,
    right_len: usize,
) -> Result<()> {
    if left_len == right_len {
        Ok(())
    } else {
        Err(PlotError::LengthMismatch {
            left,
            right,
            left_len,
            right_len,
        })
    }
}
