//! Closed set of chart types and a serializable request that builds them.
//!
//! [`ChartRequest`] mirrors the JSON accepted by tool-calling front ends:
//!
//! ```json
//! { "type": "bar", "labels": ["Mon", "Tue"], "values": [120, 150], "title": "Sales" }
//! ```

use crate::canvas::CanvasKind;
use crate::color::{Color, ColorMode};
use crate::error::{PlotError, Result};
use crate::plots::{Barplot, Boxplot, Histogram, Lineplot, Plot, Scatterplot};
use serde::Deserialize;
use std::fmt;
use std::str::FromStr;

/// Chart type tag.
///
/// Requests carry the tag as a string and parse it with [`FromStr`], so the
/// `hist` and `boxplot` aliases and case-insensitive names are accepted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ChartKind {
    Bar,
    Line,
    Histogram,
    Scatter,
    Box,
}

impl ChartKind {
    pub const ALL: [Self; 5] = [Self::Bar, Self::Line, Self::Histogram, Self::Scatter, Self::Box];

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Bar => "bar",
            Self::Line => "line",
            Self::Histogram => "histogram",
            Self::Scatter => "scatter",
            Self::Box => "box",
        }
    }
}

impl fmt::Display for ChartKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ChartKind {
    type Err = PlotError;

    /// Parse a chart name, accepting the `hist` and `boxplot` aliases.
    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "bar" => Ok(Self::Bar),
            "line" => Ok(Self::Line),
            "histogram" | "hist" => Ok(Self::Histogram),
            "scatter" => Ok(Self::Scatter),
            "box" | "boxplot" => Ok(Self::Box),
            _ => Err(PlotError::UnknownChart(s.to_string())),
        }
    }
}

/// Any chart, ready to render.
#[derive(Debug, Clone, PartialEq)]
pub enum Chart {
    Bar(Barplot),
    Line(Lineplot),
    Histogram(Histogram),
    Scatter(Scatterplot),
    Box(Boxplot),
}

impl Chart {
    #[must_use]
    pub const fn kind(&self) -> ChartKind {
        match self {
            Self::Bar(_) => ChartKind::Bar,
            Self::Line(_) => ChartKind::Line,
            Self::Histogram(_) => ChartKind::Histogram,
            Self::Scatter(_) => ChartKind::Scatter,
            Self::Box(_) => ChartKind::Box,
        }
    }
}

impl Plot for Chart {
    fn render(&self, mode: ColorMode) -> String {
        match self {
            Self::Bar(p) => p.render(mode),
            Self::Line(p) => p.render(mode),
            Self::Histogram(p) => p.render(mode),
            Self::Scatter(p) => p.render(mode),
            Self::Box(p) => p.render(mode),
        }
    }
}

macro_rules! impl_from_plot {
    ($($variant:ident($plot:ty)),* $(,)?) => {
        $(
            impl From<$plot> for Chart {
                fn from(plot: $plot) -> Self {
                    Self::$variant(plot)
                }
            }
        )*
    };
}

impl_from_plot!(
    Bar(Barplot),
    Line(Lineplot),
    Histogram(Histogram),
    Scatter(Scatterplot),
    Box(Boxplot),
);

/// A label given as text or as a number.
///
/// Float labels keep their fractional part when displayed, so `2024.0`
/// stays `2024.0` rather than collapsing to the integer label `2024`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum Label {
    Int(i64),
    Float(f64),
    Text(String),
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Int(v) => write!(f, "{v}"),
            Self::Float(v) => write!(f, "{v:?}"),
            Self::Text(v) => f.write_str(v),
        }
    }
}

/// Deserializable description of a chart.
///
/// `type` selects the chart; the other fields are read as that chart needs
/// them and ignored otherwise. Absent presentation fields keep each chart's
/// defaults. An unrecognized `color` disables color.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct ChartRequest {
    #[serde(rename = "type", alias = "chart_type")]
    pub kind: String,
    pub labels: Option<Vec<Label>>,
    pub values: Option<Vec<f64>>,
    pub x: Option<Vec<f64>>,
    pub y: Option<Vec<f64>>,
    pub bins: Option<usize>,
    pub data: Option<Vec<Vec<f64>>>,
    pub title: Option<String>,
    pub xlabel: Option<String>,
    pub ylabel: Option<String>,
    pub width: Option<usize>,
    pub height: Option<usize>,
    pub color: Option<String>,
    pub symbol: Option<String>,
    pub canvas: Option<CanvasKind>,
}

fn required<T>(field: Option<T>, name: &'static str) -> Result<T> {
    field.ok_or(PlotError::MissingData(name))
}

impl ChartRequest {
    /// Parsed chart type.
    pub fn chart_kind(&self) -> Result<ChartKind> {
        self.kind.parse()
    }

    fn color(&self) -> Option<Option<Color>> {
        self.color.as_deref().map(Color::parse)
    }

    /// Validate the request and build its chart.
    pub fn into_chart(self) -> Result<Chart> {
        let kind = self.chart_kind()?;
        tracing::debug!(%kind, "build chart from request");
        let color = self.color();

        let chart = match kind {
            ChartKind::Bar => {
                let labels = required(self.labels, "labels")?;
                let values = required(self.values, "values")?;
                let mut plot = Barplot::new(labels, values)?;
                if let Some(title) = self.title {
                    plot = plot.with_title(title);
                }
                if let Some(xlabel) = self.xlabel {
                    plot = plot.with_xlabel(xlabel);
                }
                if let Some(width) = self.width {
                    plot = plot.with_width(width);
                }
                if let Some(color) = color {
                    plot = plot.with_color(color);
                }
                if let Some(symbol) = self.symbol {
                    plot = plot.with_symbol(symbol);
                }
                Chart::Bar(plot)
            }
            ChartKind::Line => {
                let mut plot = Lineplot::new(required(self.y, "y")?)?;
                if let Some(x) = self.x {
                    plot = plot.with_x(x)?;
                }
                if let Some(title) = self.title {
                    plot = plot.with_title(title);
                }
                if let Some(xlabel) = self.xlabel {
                    plot = plot.with_xlabel(xlabel);
                }
                if let Some(ylabel) = self.ylabel {
                    plot = plot.with_ylabel(ylabel);
                }
                if let Some(width) = self.width {
                    plot = plot.with_width(width);
                }
                if let Some(height) = self.height {
                    plot = plot.with_height(height);
                }
                if let Some(color) = color {
                    plot = plot.with_color(color);
                }
                if let Some(canvas) = self.canvas {
                    plot = plot.with_canvas(canvas);
                }
                Chart::Line(plot)
            }
            ChartKind::Histogram => {
                let mut plot = Histogram::new(required(self.values, "values")?)?;
                if let Some(bins) = self.bins {
                    plot = plot.with_bins(bins)?;
                }
                if let Some(title) = self.title {
                    plot = plot.with_title(title);
                }
                if let Some(xlabel) = self.xlabel {
                    plot = plot.with_xlabel(xlabel);
                }
                if let Some(width) = self.width {
                    plot = plot.with_width(width);
                }
                if let Some(color) = color {
                    plot = plot.with_color(color);
                }
                if let Some(symbol) = self.symbol {
                    plot = plot.with_symbol(symbol);
                }
                Chart::Histogram(plot)
            }
            ChartKind::Scatter => {
                let x = required(self.x, "x")?;
                let y = required(self.y, "y")?;
                let mut plot = Scatterplot::new(x, y)?;
                if let Some(title) = self.title {
                    plot = plot.with_title(title);
                }
                if let Some(xlabel) = self.xlabel {
                    plot = plot.with_xlabel(xlabel);
                }
                if let Some(ylabel) = self.ylabel {
                    plot = plot.with_ylabel(ylabel);
                }
                if let Some(width) = self.width {
                    plot = plot.with_width(width);
                }
                if let Some(height) = self.height {
                    plot = plot.with_height(height);
                }
                if let Some(color) = color {
                    plot = plot.with_color(color);
                }
                if let Some(canvas) = self.canvas {
                    plot = plot.with_canvas(canvas);
                }
                Chart::Scatter(plot)
            }
            ChartKind::Box => {
                let mut plot = Boxplot::new(required(self.data, "data")?)?;
                if let Some(labels) = self.labels {
                    plot = plot.with_labels(labels)?;
                }
                if let Some(title) = self.title {
                    plot = plot.with_title(title);
                }
                if let Some(ylabel) = self.ylabel {
                    plot = plot.with_ylabel(ylabel);
                }
                if let Some(width) = self.width {
                    plot = plot.with_width(width);
                }
                if let Some(height) = self.height {
                    plot = plot.with_height(height);
                }
                if let Some(color) = color {
                    plot = plot.with_color(color);
                }
                Chart::Box(plot)
            }
        };
        Ok(chart)
    }
}

impl TryFrom<ChartRequest> for Chart {
    type Error = PlotError;

    fn try_from(request: ChartRequest) -> Result<Self> {
        request.into_chart()
    }
}
