//! Universally Unique Lexicographically Sortable Identifiers.
//!
//! A ULID is 26 Crockford Base32 characters:
//!
//! ```text
//!  01ARZ3NDEK TSV4RRFFQ69G5FAV
//!  |________| |______________|
//!  timestamp     randomness
//!   48 bits       80 bits
//!   10 chars      16 chars
//! ```
//!
//! The timestamp is milliseconds since the Unix epoch, most significant digit
//! first, so string order follows creation order whenever timestamps differ.
//! ULIDs minted in the same millisecond have no defined order.

mod generator;
mod parts;

pub use generator::*;
pub use parts::*;

/// Total length of an encoded ULID.
pub const ULID_LEN: usize = 26;
/// Characters used by the timestamp component.
pub const TIMESTAMP_LEN: usize = 10;
/// Characters used by the random component.
pub const RANDOM_LEN: usize = 16;
/// Random bytes drawn per ULID (80 bits).
pub const RANDOM_BYTES: usize = 10;
