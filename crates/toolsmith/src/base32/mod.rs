//! Crockford Base32 encoding.
//!
//! Two encodings share the same 32-symbol alphabet
//! (`0123456789ABCDEFGHJKMNPQRSTVWXYZ`, no `I`, `L`, `O` or `U`):
//!
//! - [`encode_fixed_width`] renders an integer as a fixed number of digits,
//!   most significant first. Used for the ULID timestamp.
//! - [`encode_bits`] renders a byte buffer as a stream of 5-bit groups. Used
//!   for the ULID random component.
//!
//! Both have decoding counterparts that accept lowercase input and the
//! Crockford aliases (`O` for `0`, `I`/`L` for `1`).

mod crockford;
mod error;

pub use crockford::*;
pub use error::*;
