//! RFC 4122 UUIDs: time-based (v1), random (v4) and name-based SHA-1 (v5).
//!
//! ```text
//!  xxxxxxxx-xxxx-Mxxx-Nxxx-xxxxxxxxxxxx
//!                |    |
//!                |    +-- variant, top bits `10`
//!                +------- version nibble
//! ```
//!
//! Generation is stateless. Version 1 draws a fresh random node and clock
//! sequence on every call instead of persisting a node id, so two v1 UUIDs
//! from the same host share nothing but their timestamp layout.

mod generator;
mod id;
mod namespace;
mod version;

pub use generator::*;
pub use id::*;
pub use namespace::*;
pub use version::*;
