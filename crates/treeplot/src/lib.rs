//! Character-cell plotting for terminals.
#![allow(clippy::missing_const_for_fn)]
#![allow(clippy::suboptimal_flops)]
#![allow(clippy::cast_lossless)]
#![allow(clippy::uninlined_format_args)] // "variables can be used directly in format!"
#![allow(clippy::redundant_closure_for_method_calls)] // "redundant closure"
#![allow(clippy::doc_markdown)] // "item in documentation missing backticks"
#![cfg_attr(test, allow(clippy::unwrap_used))]
//!
//! Bar, line, histogram, scatter and box-and-whisker charts rendered to a
//! single `String` of box-drawing, block and braille glyphs, optionally
//! colored with ANSI escapes.
//!
//! # Architecture
//!
//! - [`scaling`]: range mapping, axis padding, binning, number labels
//! - [`color`]: named colors and the [`ColorMode`] capability flag
//! - [`canvas`]: character grids with 1×1, 1×2 and 2×4 pixel density plus
//!   Bresenham line drawing
//! - [`plots`]: the five chart types, all implementing [`Plot`]
//! - [`chart`]: the closed [`Chart`] enum and the deserializable
//!   [`ChartRequest`]
//!
//! Rendering is a pure function of the plot and the [`ColorMode`]: nothing is
//! written to the terminal and no state survives a render call.
//!
//! # Example
//!
//! ```
//! use treeplot::{lineplot, ColorMode, Plot};
//!
//! let chart = lineplot(vec![10.0, 25.0, 15.0, 30.0, 20.0])?
//!     .with_x(vec![1.0, 2.0, 3.0, 4.0, 5.0])?
//!     .with_title("Temperature")
//!     .with_ylabel("Temp (°C)");
//! let text = chart.render(ColorMode::Plain);
//! assert!(text.starts_with("  Temperature"));
//! # Ok::<(), treeplot::PlotError>(())
//! ```

mod api;
pub mod canvas;
pub mod chart;
pub mod color;
mod error;
pub mod plots;
pub mod scaling;
pub mod symbols;

pub use api::{barplot, boxplot, histogram, lineplot, scatterplot};
pub use canvas::{AsciiCanvas, BlockCanvas, BrailleCanvas, Canvas, CanvasKind};
pub use chart::{Chart, ChartKind, ChartRequest, Label};
pub use color::{colorize, strip_colors, Color, ColorMode};
pub use error::{PlotError, Result};
pub use plots::{
    five_number_summary, render_bars, AxisFrame, BarLayout, Barplot, Boxplot, FiveNumberSummary,
    Histogram, Lineplot, Plot, Scatterplot, DEFAULT_BINS, EMPTY_PLOT,
};
pub use scaling::{compute_bins, format_number, get_axis_range, scale_values, Bins};
