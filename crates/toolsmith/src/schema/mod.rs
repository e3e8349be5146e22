//! Infers TypeScript declarations from a JSON value.
//!
//! Two output shapes are supported:
//!
//! - a single inline alias, `type Root = { ... }`;
//! - one `interface` per object, nested declarations first, de-duplicated by
//!   exact text and separated by a blank line.
//!
//! Arrays are typed from their first element only. Objects keep the key order
//! of the input (`serde_json` is built with `preserve_order`).
//!
//! ```
//! use serde_json::json;
//! use toolsmith::schema::{ConvertOptions, convert};
//!
//! let ts = convert(&json!({ "a": 1, "b": "x" }), &ConvertOptions::default());
//! assert_eq!(ts, "type Root = {\n  a: number\n  b: string\n}");
//! ```

mod converter;
mod naming;
mod options;

pub use converter::*;
pub use naming::{property_name, sanitize_name, type_name};
pub use options::*;

use crate::Result;

/// Parses `input` as JSON and converts it.
///
/// # Errors
///
/// Returns [`crate::Error::Json`] if `input` is not valid JSON.
pub fn convert_str(input: &str, options: &ConvertOptions) -> Result<String> {
    let value: serde_json::Value = serde_json::from_str(input)?;
    Ok(convert(&value, options))
}
