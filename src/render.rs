//! Text rendering of query results.

use crate::config::OutputFormat;
use crate::document::node::YamlValue;
use anyhow::{Context, Result};
use serde::Serialize;

/// Renders `value` in the given format, without a trailing newline.
///
/// # Example
///
/// ```
/// use yamlquery::config::OutputFormat;
/// use yamlquery::document::node::YamlValue;
/// use yamlquery::render::render;
///
/// let value = YamlValue::String("bar".to_string());
/// assert_eq!(render(&value, OutputFormat::Plain).unwrap(), "bar");
/// assert_eq!(render(&value, OutputFormat::Json).unwrap(), "\"bar\"");
/// ```
pub fn render(value: &YamlValue, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Plain if !value.is_container() => Ok(value.to_string()),
        _ => serialize(value, format),
    }
}

/// Renders a single integer. The text is the same in every format.
pub fn render_integer(value: i64) -> String {
    value.to_string()
}

/// Renders a list of integers without a round trip through `f64`, so values
/// near `i64::MAX` print exactly.
pub fn render_integers(values: &[i64], format: OutputFormat) -> Result<String> {
    serialize(values, format)
}

fn serialize<T: Serialize + ?Sized>(value: &T, format: OutputFormat) -> Result<String> {
    let text = match format {
        OutputFormat::Plain | OutputFormat::Yaml => {
            serde_yaml::to_string(value).context("Failed to serialize result as YAML")?
        }
        OutputFormat::Json => {
            serde_json::to_string_pretty(value).context("Failed to serialize result as JSON")?
        }
    };
    Ok(text.trim_end_matches('\n').to_string())
}
