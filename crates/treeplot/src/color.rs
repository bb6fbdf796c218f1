//! ANSI color support for rendered plots.
//!
//! Whether escape codes are emitted is decided by an explicit [`ColorMode`]
//! handed to every render call. Nothing in the rendering path inspects the
//! output stream, so a render is a pure function of its inputs.

use crossterm::tty::IsTty;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

/// SGR reset sequence.
pub const RESET: &str = "\x1b[0m";

static SGR_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\x1b\[[0-9;]*m").expect("SGR pattern is a valid regex"));

/// Named foreground colors understood by the plots.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Color {
    Black,
    Red,
    Green,
    Yellow,
    Blue,
    Magenta,
    Cyan,
    White,
}

impl Color {
    /// Every supported color, in SGR code order.
    pub const ALL: [Self; 8] = [
        Self::Black,
        Self::Red,
        Self::Green,
        Self::Yellow,
        Self::Blue,
        Self::Magenta,
        Self::Cyan,
        Self::White,
    ];

    /// Look up a color by name, ignoring case.
    ///
    /// Unknown names yield `None`, which the plots treat as "no color".
    #[must_use]
    pub fn parse(name: &str) -> Option<Self> {
        let name = name.trim();
        Self::ALL
            .into_iter()
            .find(|c| c.name().eq_ignore_ascii_case(name))
    }

    /// Lowercase name of the color.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Black => "black",
            Self::Red => "red",
            Self::Green => "green",
            Self::Yellow => "yellow",
            Self::Blue => "blue",
            Self::Magenta => "magenta",
            Self::Cyan => "cyan",
            Self::White => "white",
        }
    }

    /// SGR escape sequence that switches the foreground to this color.
    #[must_use]
    pub const fn sgr(self) -> &'static str {
        match self {
            Self::Black => "\x1b[30m",
            Self::Red => "\x1b[31m",
            Self::Green => "\x1b[32m",
            Self::Yellow => "\x1b[33m",
            Self::Blue => "\x1b[34m",
            Self::Magenta => "\x1b[35m",
            Self::Cyan => "\x1b[36m",
            Self::White => "\x1b[37m",
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error returned when parsing an unknown color name with [`str::parse`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown color: {0}")]
pub struct UnknownColor(pub String);

impl FromStr for Color {
    type Err = UnknownColor;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| UnknownColor(s.to_string()))
    }
}

/// Terminal color capability.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ColorMode {
    /// Emit ANSI SGR sequences.
    Ansi,
    /// Plain text only.
    #[default]
    Plain,
}

impl ColorMode {
    /// Detect capability from whether stdout is a terminal.
    #[must_use]
    pub fn detect() -> Self {
        Self::from_tty(std::io::stdout().is_tty())
    }

    /// Map a "stream is a terminal" answer to a mode.
    #[must_use]
    pub const fn from_tty(is_tty: bool) -> Self {
        if is_tty {
            Self::Ansi
        } else {
            Self::Plain
        }
    }

    /// Whether escape sequences will be written.
    #[must_use]
    pub const fn is_enabled(self) -> bool {
        matches!(self, Self::Ansi)
    }
}

/// Wrap `text` in the SGR code for `color` and a reset.
///
/// Returns `text` unchanged when `mode` is plain or `color` is `None`.
#[must_use]
pub fn colorize(text: &str, color: Option<Color>, mode: ColorMode) -> String {
    match color {
        Some(c) if mode.is_enabled() => format!("{}{}{}", c.sgr(), text, RESET),
        _ => text.to_string(),
    }
}

/// Remove every SGR escape sequence from `text`.
#[must_use]
pub fn strip_colors(text: &str) -> String {
    SGR_PATTERN.replace_all(text, "").into_owned()
}
