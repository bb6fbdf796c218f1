//! treeplot CLI - render terminal charts from request files or inline data.

#![allow(
    clippy::needless_pass_by_value,
    clippy::uninlined_format_args,
    clippy::unwrap_used,
    clippy::missing_errors_doc,
    clippy::doc_markdown
)]

mod input;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use treeplot::{CanvasKind, ChartRequest, ColorMode, Label, Plot};

#[derive(Parser)]
#[command(name = "treeplot")]
#[command(about = "Render bar, line, histogram, scatter and box charts as terminal text")]
#[command(version)]
struct Cli {
    /// When to emit ANSI colors
    #[arg(long, value_enum, default_value_t = ColorChoice::Auto, global = true)]
    color: ColorChoice,

    /// Log rendering decisions to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum ColorChoice {
    Auto,
    Always,
    Never,
}

impl ColorChoice {
    fn mode(self) -> ColorMode {
        match self {
            Self::Auto => ColorMode::detect(),
            Self::Always => ColorMode::Ansi,
            Self::Never => ColorMode::Plain,
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Render chart requests from a JSON or YAML file (`-` reads stdin)
    Render {
        /// Request file; a single request or a list
        file: PathBuf,
    },

    /// Horizontal bar chart
    Bar {
        /// Comma-separated bar labels
        #[arg(short, long, value_delimiter = ',', required = true)]
        labels: Vec<String>,

        /// Comma-separated non-negative values
        #[arg(short = 'n', long, value_delimiter = ',', allow_hyphen_values = true, required = true)]
        values: Vec<f64>,

        #[command(flatten)]
        style: Style,
    },

    /// Line chart
    Line {
        /// Comma-separated y values
        #[arg(short, long, value_delimiter = ',', allow_hyphen_values = true, required = true)]
        y: Vec<f64>,

        /// Comma-separated x values (default: 0, 1, 2, ...)
        #[arg(short, long, value_delimiter = ',', allow_hyphen_values = true)]
        x: Option<Vec<f64>>,

        #[command(flatten)]
        style: Style,
    },

    /// Histogram of raw values
    Hist {
        /// Comma-separated values
        #[arg(short = 'n', long, value_delimiter = ',', allow_hyphen_values = true, required = true)]
        values: Vec<f64>,

        /// Number of bins
        #[arg(short, long)]
        bins: Option<usize>,

        #[command(flatten)]
        style: Style,
    },

    /// Scatter chart
    Scatter {
        /// Comma-separated x values
        #[arg(short, long, value_delimiter = ',', allow_hyphen_values = true, required = true)]
        x: Vec<f64>,

        /// Comma-separated y values
        #[arg(short, long, value_delimiter = ',', allow_hyphen_values = true, required = true)]
        y: Vec<f64>,

        #[command(flatten)]
        style: Style,
    },

    /// Box plot, one box per `--series`
    Box {
        /// Comma-separated values of one series; repeat for more boxes
        #[arg(short, long = "series", allow_hyphen_values = true, required = true)]
        series: Vec<String>,

        /// Comma-separated series labels
        #[arg(short, long, value_delimiter = ',')]
        labels: Option<Vec<String>>,

        #[command(flatten)]
        style: Style,
    },
}

/// Presentation flags shared by every chart subcommand.
#[derive(Args, Debug, Default)]
struct Style {
    /// Chart title
    #[arg(short, long)]
    title: Option<String>,

    /// Label under the x axis
    #[arg(long)]
    xlabel: Option<String>,

    /// Label for the y axis
    #[arg(long)]
    ylabel: Option<String>,

    /// Total width in characters
    #[arg(short, long)]
    width: Option<usize>,

    /// Plot height in characters
    #[arg(long)]
    height: Option<usize>,

    /// Chart color (black, red, green, yellow, blue, magenta, cyan, white)
    #[arg(long)]
    fg: Option<String>,

    /// Bar glyph
    #[arg(long)]
    symbol: Option<String>,

    /// Canvas density for line and scatter charts
    #[arg(long, value_parser = parse_canvas)]
    canvas: Option<CanvasKind>,
}

impl Style {
    fn into_request(self, kind: &str) -> ChartRequest {
        ChartRequest {
            kind: kind.to_string(),
            title: self.title,
            xlabel: self.xlabel,
            ylabel: self.ylabel,
            width: self.width,
            height: self.height,
            color: self.fg,
            symbol: self.symbol,
            canvas: self.canvas,
            ..ChartRequest::default()
        }
    }
}

fn parse_series(s: &str) -> Result<Vec<f64>, String> {
    s.split(',')
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(|v| v.parse::<f64>().map_err(|e| format!("invalid number {v:?}: {e}")))
        .collect()
}

fn parse_canvas(s: &str) -> Result<CanvasKind, String> {
    s.parse()
}

fn labels(values: Vec<String>) -> Vec<Label> {
    values.into_iter().map(Label::Text).collect()
}

impl Commands {
    /// Chart requests described by this command.
    fn requests(self) -> Result<Vec<ChartRequest>> {
        let request = match self {
            Self::Render { file } => return input::load(&file),
            Self::Bar { labels: l, values, style } => ChartRequest {
                labels: Some(labels(l)),
                values: Some(values),
                ..style.into_request("bar")
            },
            Self::Line { y, x, style } => ChartRequest {
                y: Some(y),
                x,
                ..style.into_request("line")
            },
            Self::Hist { values, bins, style } => ChartRequest {
                values: Some(values),
                bins,
                ..style.into_request("histogram")
            },
            Self::Scatter { x, y, style } => ChartRequest {
                x: Some(x),
                y: Some(y),
                ..style.into_request("scatter")
            },
            Self::Box { series, labels: l, style } => ChartRequest {
                data: Some(
                    series
                        .iter()
                        .map(|s| parse_series(s))
                        .collect::<Result<_, _>>()
                        .map_err(anyhow::Error::msg)?,
                ),
                labels: l.map(labels),
                ..style.into_request("box")
            },
        };
        Ok(vec![request])
    }
}

fn init_logging(verbose: bool) {
    let default = if verbose {
        "treeplot=debug,treeplot_cli=debug"
    } else {
        "treeplot=warn,treeplot_cli=warn"
    };
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default.into()),
        )
        .init();
}

fn render_all(requests: Vec<ChartRequest>, mode: ColorMode) -> Result<String> {
    let mut charts = Vec::with_capacity(requests.len());
    for (i, request) in requests.into_iter().enumerate() {
        let kind = request.kind.clone();
        let chart = request
            .into_chart()
            .with_context(|| format!("chart {} ({kind}) is invalid", i + 1))?;
        charts.push(chart.render(mode));
    }
    Ok(charts.join("\n\n"))
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let mode = cli.color.mode();
    tracing::debug!(?mode, "color mode");
    let requests = cli.command.requests()?;
    println!("{}", render_all(requests, mode)?);
    Ok(())
}
