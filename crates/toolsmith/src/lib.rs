#![doc = include_str!("../README.md")]

pub mod base32;
#[cfg(feature = "codec")]
pub mod codec;
mod error;
pub mod rand;
#[cfg(feature = "schema")]
pub mod schema;
#[cfg(feature = "serde")]
mod serde;
pub mod time;
#[cfg(feature = "ulid")]
pub mod ulid;
#[cfg(feature = "uuid")]
pub mod uuid;

pub use crate::base32::Base32Error;
pub use crate::error::*;
pub use crate::rand::*;
#[cfg(feature = "schema")]
pub use crate::schema::{ConvertOptions, convert};
pub use crate::time::*;
#[cfg(feature = "ulid")]
pub use crate::ulid::{UlidGenerator, UlidParts};
#[cfg(feature = "uuid")]
pub use crate::uuid::{Namespace, Uuid, UuidGenerator, UuidRequest, UuidVersion, Variant};
