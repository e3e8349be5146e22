use serde_json::Value;

use crate::Result;

/// Re-indents a JSON document with two spaces per level.
///
/// Key order follows the input.
///
/// # Errors
///
/// Returns [`crate::Error::Json`] if `input` is not valid JSON.
pub fn format_json(input: &str) -> Result<String> {
    let value: Value = serde_json::from_str(input)?;
    Ok(serde_json::to_string_pretty(&value)?)
}

/// Removes all insignificant whitespace from a JSON document.
///
/// # Errors
///
/// Returns [`crate::Error::Json`] if `input` is not valid JSON.
pub fn minify_json(input: &str) -> Result<String> {
    let value: Value = serde_json::from_str(input)?;
    Ok(serde_json::to_string(&value)?)
}
