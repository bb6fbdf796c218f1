//! Chart request documents read from files or stdin.

use anyhow::{bail, Context, Result};
use serde::Deserialize;
use std::fs;
use std::io::Read;
use std::path::Path;
use treeplot::ChartRequest;

/// One request or a list of them.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum Document {
    Many(Vec<ChartRequest>),
    One(ChartRequest),
}

impl From<Document> for Vec<ChartRequest> {
    fn from(doc: Document) -> Self {
        match doc {
            Document::Many(requests) => requests,
            Document::One(request) => vec![request],
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Format {
    Json,
    Yaml,
    Unknown,
}

impl Format {
    fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|e| e.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("json") => Self::Json,
            Some(ext) if ext.eq_ignore_ascii_case("yaml") || ext.eq_ignore_ascii_case("yml") => {
                Self::Yaml
            }
            _ => Self::Unknown,
        }
    }
}

/// Read requests from `path`, or from stdin when `path` is `-`.
pub(crate) fn load(path: &Path) -> Result<Vec<ChartRequest>> {
    let (text, format) = if path.as_os_str() == "-" {
        let mut buf = String::new();
        std::io::stdin()
            .read_to_string(&mut buf)
            .context("failed to read stdin")?;
        (buf, Format::Unknown)
    } else {
        let text = fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        (text, Format::from_path(path))
    };
    tracing::debug!(?format, bytes = text.len(), "loaded request document");
    parse(&text, format)
}

fn parse(text: &str, format: Format) -> Result<Vec<ChartRequest>> {
    let doc: Document = match format {
        Format::Json => serde_json::from_str(text).context("invalid JSON chart request")?,
        Format::Yaml => serde_yaml_ng::from_str(text).context("invalid YAML chart request")?,
        Format::Unknown => match serde_json::from_str(text) {
            Ok(doc) => doc,
            Err(json_err) => serde_yaml_ng::from_str(text).with_context(|| {
                format!("input is neither a JSON nor a YAML chart request (JSON: {json_err})")
            })?,
        },
    };
    let requests: Vec<ChartRequest> = doc.into();
    if requests.is_empty() {
        bail!("no chart requests in input");
    }
    Ok(requests)
}
