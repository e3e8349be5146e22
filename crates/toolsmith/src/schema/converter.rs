use std::collections::HashSet;

use serde_json::{Map, Value};
#[cfg(feature = "tracing")]
use tracing::instrument;

use super::naming::{FALLBACK_NAME, property_name, type_name};
use super::options::ConvertOptions;

const INDENT: &str = "  ";

/// Converts a JSON value into TypeScript declarations.
///
/// This is a thin wrapper that runs a fresh [`SchemaConverter`], so no state
/// leaks between calls.
///
/// # Example
/// ```
/// use serde_json::json;
/// use toolsmith::schema::{ConvertOptions, convert};
///
/// let options = ConvertOptions::default().multiple_interfaces(true);
/// let ts = convert(&json!({ "user": { "name": "x" } }), &options);
/// assert_eq!(
///     ts,
///     "interface User {\n  name: string\n}\n\ninterface Root {\n  user: User\n}"
/// );
/// ```
#[must_use]
pub fn convert(value: &Value, options: &ConvertOptions) -> String {
    SchemaConverter::new(options).convert(value)
}

/// Per-conversion state: the names handed out so far and the declarations
/// emitted, in order.
#[derive(Debug)]
pub struct SchemaConverter<'a> {
    options: &'a ConvertOptions,
    used_names: HashSet<String>,
    declarations: Vec<String>,
}

impl<'a> SchemaConverter<'a> {
    #[must_use]
    pub fn new(options: &'a ConvertOptions) -> Self {
        Self {
            options,
            used_names: HashSet::new(),
            declarations: Vec::new(),
        }
    }

    /// Runs the conversion, consuming the context.
    #[cfg_attr(feature = "tracing", instrument(level = "trace", skip_all))]
    pub fn convert(mut self, value: &Value) -> String {
        let root = type_name(self.options.effective_root_name());
        if !self.options.use_multiple_interfaces {
            return format!("type {root} = {}", inline_type(value, 0));
        }

        self.reference_type(value, &root);

        #[cfg(feature = "tracing")]
        tracing::debug!(declarations = self.declarations.len(), "emitted interfaces");

        let mut seen = HashSet::new();
        self.declarations
            .into_iter()
            .filter(|decl| seen.insert(decl.clone()))
            .collect::<Vec<_>>()
            .join("\n\n")
    }

    /// Returns the type expression for `value`, declaring an interface for
    /// every object it contains. `key` names those interfaces.
    fn reference_type(&mut self, value: &Value, key: &str) -> String {
        match value {
            Value::Object(fields) => {
                let name = self.reserve_name(key);
                self.declare_interface(fields, &name);
                name
            }
            Value::Array(items) => match items.first() {
                Some(first @ Value::Array(_)) => {
                    format!("{}[]", self.reference_type(first, element_key(key)))
                }
                Some(first) => format!("{}[]", self.reference_type(first, key)),
                None => "unknown[]".to_owned(),
            },
            leaf => leaf_type(leaf).to_owned(),
        }
    }

    /// Emits `interface name { ... }` after any interfaces its fields need.
    fn declare_interface(&mut self, fields: &Map<String, Value>, name: &str) {
        let declaration = if fields.is_empty() {
            format!("interface {name} {{\n\n}}")
        } else {
            let mut body = String::new();
            for (key, value) in fields {
                let ty = self.reference_type(value, key);
                body.push_str(INDENT);
                body.push_str(&property_name(key));
                body.push_str(": ");
                body.push_str(&ty);
                body.push('\n');
            }
            format!("interface {name} {{\n{body}}}")
        };
        self.declarations.push(declaration);
    }

    /// Claims an interface name derived from `candidate`, appending the
    /// smallest free numeric suffix on collision.
    fn reserve_name(&mut self, candidate: &str) -> String {
        let base = type_name(candidate);
        let mut name = base.clone();
        let mut suffix = 1_u64;
        while self.used_names.contains(&name) {
            name = format!("{base}{suffix}");
            suffix += 1;
        }
        self.used_names.insert(name.clone());
        name
    }
}

/// Single-alias rendering: records are written inline, two spaces per depth.
fn inline_type(value: &Value, depth: usize) -> String {
    match value {
        Value::Object(fields) if fields.is_empty() => {
            format!("{{\n\n{}}}", INDENT.repeat(depth))
        }
        Value::Object(fields) => {
            let inner = INDENT.repeat(depth + 1);
            let mut out = String::from("{\n");
            for (key, value) in fields {
                out.push_str(&inner);
                out.push_str(&property_name(key));
                out.push_str(": ");
                out.push_str(&inline_type(value, depth + 1));
                out.push('\n');
            }
            out.push_str(&INDENT.repeat(depth));
            out.push('}');
            out
        }
        Value::Array(items) => match items.first() {
            Some(first) => format!("{}[]", inline_type(first, depth)),
            None => "unknown[]".to_owned(),
        },
        leaf => leaf_type(leaf).to_owned(),
    }
}

/// Objects reached through nested arrays under an empty key are named
/// `Item`. A direct child keeps the sanitized `_`.
fn element_key(key: &str) -> &str {
    if key.is_empty() { FALLBACK_NAME } else { key }
}

const fn leaf_type(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) | Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;
    use crate::schema::convert_str;
    use serde_json::json;

    fn inline() -> ConvertOptions {
        ConvertOptions::default()
    }

    fn multi() -> ConvertOptions {
        ConvertOptions::default().multiple_interfaces(true)
    }

    #[test]
    fn inline_flat_object() {
        assert_eq!(
            convert(&json!({ "a": 1, "b": "x" }), &inline()),
            "type Root = {\n  a: number\n  b: string\n}"
        );
    }

    #[test]
    fn inline_nested_objects_indent_per_depth() {
        let value = json!({ "user": { "name": "x", "address": { "zip": 1 } }, "ok": true });
        assert_eq!(
            convert(&value, &inline()),
            "type Root = {\n  user: {\n    name: string\n    address: {\n      zip: number\n    }\n  }\n  ok: boolean\n}"
        );
    }

    #[test]
    fn inline_arrays_use_first_element() {
        let value = json!({ "tags": ["a", 1], "empty": [], "rows": [{ "id": 1 }], "grid": [[0.5]] });
        assert_eq!(
            convert(&value, &inline()),
            "type Root = {\n  tags: string[]\n  empty: unknown[]\n  rows: {\n    id: number\n  }[]\n  grid: number[][]\n}"
        );
    }

    #[test]
    fn inline_leaves_and_empty_object() {
        assert_eq!(convert(&json!(null), &inline()), "type Root = null");
        assert_eq!(convert(&json!("s"), &inline()), "type Root = string");
        assert_eq!(convert(&json!(false), &inline()), "type Root = boolean");
        assert_eq!(convert(&json!({}), &inline()), "type Root = {\n\n}");
        assert_eq!(
            convert(&json!({ "cfg": {} }), &inline()),
            "type Root = {\n  cfg: {\n\n  }\n}"
        );
        assert_eq!(convert(&json!({ "n": null }), &inline()), "type Root = {\n  n: null\n}");
    }

    #[test]
    fn inline_sanitizes_property_names() {
        let value = json!({ "content-type": "x", "2fa": true, "": 0 });
        assert_eq!(
            convert(&value, &inline()),
            "type Root = {\n  contenttype: string\n  _2fa: boolean\n  _: number\n}"
        );
    }

    #[test]
    fn root_name_is_sanitized_and_capitalized() {
        let options = inline().root_name("api response");
        assert_eq!(convert(&json!(1), &options), "type Apiresponse = number");

        let options = inline().root_name("1st");
        assert_eq!(convert(&json!(1), &options), "type _1st = number");
    }

    #[test]
    fn empty_root_name_falls_back_to_root() {
        let options = multi().root_name("");
        assert_eq!(
            convert(&json!({ "a": 1 }), &options),
            "interface Root {\n  a: number\n}"
        );
    }

    #[test]
    fn whitespace_root_name_sanitizes_to_underscore() {
        let options = inline().root_name("  ");
        assert_eq!(convert(&json!(1), &options), "type _ = number");
    }

    #[test]
    fn multi_extracts_nested_interfaces_first() {
        let value = json!({ "user": { "name": "x" } });
        assert_eq!(
            convert(&value, &multi()),
            "interface User {\n  name: string\n}\n\ninterface Root {\n  user: User\n}"
        );
    }

    #[test]
    fn multi_arrays_of_objects_reference_named_elements() {
        let value = json!({ "items": [{ "id": 1, "meta": { "seen": true } }], "ids": [1, 2] });
        assert_eq!(
            convert(&value, &multi()),
            "interface Meta {\n  seen: boolean\n}\n\n\
             interface Items {\n  id: number\n  meta: Meta\n}\n\n\
             interface Root {\n  items: Items[]\n  ids: number[]\n}"
        );
    }

    #[test]
    fn multi_collisions_take_smallest_free_suffix() {
        let value = json!({
            "data": { "data": { "x": 1 } },
            "other": { "data": { "y": 2 } }
        });
        assert_eq!(
            convert(&value, &multi()),
            "interface Data1 {\n  x: number\n}\n\n\
             interface Data {\n  data: Data1\n}\n\n\
             interface Data2 {\n  y: number\n}\n\n\
             interface Other {\n  data: Data2\n}\n\n\
             interface Root {\n  data: Data\n  other: Other\n}"
        );
    }

    #[test]
    fn multi_child_named_like_root_gets_suffix() {
        let value = json!({ "root": { "a": 1 } });
        assert_eq!(
            convert(&value, &multi()),
            "interface Root1 {\n  a: number\n}\n\ninterface Root {\n  root: Root1\n}"
        );
    }

    #[test]
    fn multi_empty_object_and_nested_arrays() {
        let value = json!({ "cfg": {}, "matrix": [[{ "v": 1 }]], "none": [] });
        assert_eq!(
            convert(&value, &multi()),
            "interface Cfg {\n\n}\n\n\
             interface Matrix {\n  v: number\n}\n\n\
             interface Root {\n  cfg: Cfg\n  matrix: Matrix[][]\n  none: unknown[]\n}"
        );
    }

    #[test]
    fn multi_root_array_of_objects_declares_root() {
        let value = json!([{ "id": 1 }, { "other": true }]);
        assert_eq!(
            convert(&value, &multi()),
            "interface Root {\n  id: number\n}"
        );
    }

    #[test]
    fn multi_without_objects_is_empty() {
        assert_eq!(convert(&json!(42), &multi()), "");
        assert_eq!(convert(&json!(["a"]), &multi()), "");
        assert_eq!(convert(&json!([]), &multi()), "");
        assert_eq!(convert(&json!(null), &multi()), "");
    }

    #[test]
    fn empty_keys_through_nested_arrays_are_named_item() {
        assert_eq!(
            convert(&json!({ "": [[{ "a": 1 }]] }), &multi()),
            "interface Item {\n  a: number\n}\n\ninterface Root {\n  _: Item[][]\n}"
        );
        assert_eq!(
            convert(&json!({ "": { "a": 1 } }), &multi()),
            "interface _ {\n  a: number\n}\n\ninterface Root {\n  _: _\n}"
        );
        assert_eq!(
            convert(&json!({ "": [{ "a": 1 }] }), &multi()),
            "interface _ {\n  a: number\n}\n\ninterface Root {\n  _: _[]\n}"
        );
    }

    #[test]
    fn multi_output_has_no_duplicate_declarations() {
        let value = json!({ "a": { "x": 1 }, "b": { "x": 1 }, "c": [{ "x": 1 }] });
        let out = convert(&value, &multi());
        let blocks: Vec<&str> = out.split("\n\n").collect();
        let unique: HashSet<&str> = blocks.iter().copied().collect();
        assert_eq!(blocks.len(), unique.len());
        assert_eq!(blocks.len(), 4);
    }

    #[test]
    fn converter_is_fresh_per_call() {
        let options = multi();
        let value = json!({ "user": { "name": "x" } });
        assert_eq!(convert(&value, &options), convert(&value, &options));
    }

    #[test]
    fn property_order_follows_input() {
        let out = convert_str(r#"{"zeta": 1, "alpha": 2, "mid": 3}"#, &inline()).unwrap();
        assert_eq!(out, "type Root = {\n  zeta: number\n  alpha: number\n  mid: number\n}");
    }

    #[test]
    fn convert_str_reports_malformed_json() {
        let err = convert_str("{ not json", &inline()).unwrap_err();
        assert!(matches!(err, Error::Json(_)));
        assert!(err.to_string().starts_with("invalid JSON input"));
    }
}
