//! Common utilities for output formatters

use chrono::DateTime;
use serde::Serialize;

use crate::cli::OutputFormat;
use crate::error::{BrError, Result};

/// Render a serializable value as pretty JSON or YAML
pub fn render_structured<T: Serialize>(value: &T, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Json => serde_json::to_string_pretty(value).map_err(BrError::from),
        OutputFormat::Yaml => {
            serde_yml::to_string(value).map_err(|e| BrError::Json(e.to_string()))
        }
        OutputFormat::Table => Err(BrError::Config(
            "table output has no structured rendering".to_string(),
        )),
    }
}

/// Print a serializable value as pretty JSON or YAML
pub fn print_structured<T: Serialize>(value: &T, format: OutputFormat) -> Result<()> {
    let rendered = render_structured(value, format)?;
    println!("{}", rendered.trim_end());
    Ok(())
}

/// Format Unix epoch microseconds as a UTC timestamp
pub fn format_usecs(usecs: Option<i64>) -> String {
    usecs
        .and_then(DateTime::from_timestamp_micros)
        .map(|t| t.format("%Y-%m-%d %H:%M:%S").to_string())
        .unwrap_or_default()
}
