//! Text encoders and inspectors: UTF-8 Base64, JWT header/payload extraction,
//! and JSON formatting.
//!
//! ```
//! use toolsmith::codec::{decode_base64, encode_base64, minify_json};
//!
//! assert_eq!(encode_base64("Hello, World!"), "SGVsbG8sIFdvcmxkIQ==");
//! assert_eq!(decode_base64("SGVsbG8sIFdvcmxkIQ==").unwrap(), "Hello, World!");
//! assert_eq!(minify_json("{ \"a\": [1, 2] }").unwrap(), r#"{"a":[1,2]}"#);
//! ```

mod json;
mod jwt;
mod text;

pub use json::*;
pub use jwt::*;
pub use text::*;
