use sha1::{Digest, Sha1};
#[cfg(feature = "tracing")]
use tracing::instrument;

use super::{GREGORIAN_OFFSET, TICKS_PER_MILLI, Uuid, UuidVersion};
use crate::{Error, RandSource, Result, TimeSource};

/// Describes which kind of UUID to produce.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum UuidRequest {
    V1,
    V4,
    /// `namespace` is the textual UUID; it is validated before hashing.
    V5 { namespace: String, name: String },
}

impl UuidRequest {
    #[must_use]
    pub const fn version(&self) -> UuidVersion {
        match self {
            Self::V1 => UuidVersion::V1,
            Self::V4 => UuidVersion::V4,
            Self::V5 { .. } => UuidVersion::V5,
        }
    }
}

#[inline]
const fn stamp_variant(bytes: &mut [u8; 16]) {
    bytes[8] = (bytes[8] & 0x3F) | 0x80;
}

/// Builds a version 4 UUID from 16 random bytes.
#[must_use]
pub const fn v4_from_bytes(mut bytes: [u8; 16]) -> Uuid {
    bytes[6] = (bytes[6] & 0x0F) | 0x40;
    stamp_variant(&mut bytes);
    Uuid::from_bytes(bytes)
}

/// Builds a version 1 UUID from a Unix timestamp and 8 random bytes.
///
/// The first two random bytes become the clock sequence, the remaining six the
/// node id. The node's multicast bit is always set, marking it as not derived
/// from a hardware address.
#[must_use]
pub const fn v1_from_parts(now_millis: u64, random: [u8; 8]) -> Uuid {
    let ticks = now_millis
        .wrapping_mul(TICKS_PER_MILLI)
        .wrapping_add(GREGORIAN_OFFSET);
    let low = (ticks & 0xFFFF_FFFF) as u32;
    let mid = ((ticks >> 32) & 0xFFFF) as u16;
    let high = (((ticks >> 48) & 0x0FFF) as u16) | 0x1000;

    let low = low.to_be_bytes();
    let mid = mid.to_be_bytes();
    let high = high.to_be_bytes();
    let mut bytes = [
        low[0], low[1], low[2], low[3], mid[0], mid[1], high[0], high[1], random[0], random[1],
        random[2], random[3], random[4], random[5], random[6], random[7],
    ];
    stamp_variant(&mut bytes);
    bytes[10] |= 0x01;
    Uuid::from_bytes(bytes)
}

/// Generates a version 5 UUID: SHA-1 over the namespace bytes followed by the
/// UTF-8 name.
///
/// # Errors
///
/// Returns [`Error::Validation`] when `name` is empty or whitespace only, or
/// when `namespace` is not a canonical `8-4-4-4-12` UUID. The name is checked
/// first.
///
/// # Example
/// ```
/// use toolsmith::uuid::generate_v5;
///
/// let id = generate_v5("6ba7b810-9dad-11d1-80b4-00c04fd430c8", "example.com").unwrap();
/// assert_eq!(id.to_string(), "cfbff0d1-9375-5685-968c-48ce8b15ae17");
/// ```
#[cfg_attr(feature = "tracing", instrument(level = "trace"))]
pub fn generate_v5(namespace: &str, name: &str) -> Result<Uuid> {
    if name.trim().is_empty() {
        return Err(Error::validation("name is required for UUID v5"));
    }
    let namespace = Uuid::parse_str(namespace)
        .map_err(|_| Error::validation(format!("invalid namespace UUID format: {namespace:?}")))?;
    Ok(v5_from_namespace(&namespace, name))
}

/// Generates a version 5 UUID from an already parsed namespace.
///
/// No validation is performed on `name`; an empty name hashes the namespace
/// alone.
#[must_use]
pub fn v5_from_namespace(namespace: &Uuid, name: &str) -> Uuid {
    let digest = Sha1::new()
        .chain_update(namespace.as_bytes())
        .chain_update(name.as_bytes())
        .finalize();
    let mut bytes = [0_u8; 16];
    bytes.copy_from_slice(&digest[..16]);
    bytes[6] = (bytes[6] & 0x0F) | 0x50;
    stamp_variant(&mut bytes);
    Uuid::from_bytes(bytes)
}

/// A stateless RFC 4122 UUID generator.
///
/// The generator holds only its time source and RNG. Version 1 draws a fresh
/// clock sequence and node id on every call, so it never needs coordination
/// and never blocks.
///
/// ## Features
/// - ✅ Thread-safe (with thread-safe time and random sources)
/// - ✅ Deterministic v5 output
/// - ❌ v1 node ids are not stable across calls
pub struct UuidGenerator<T, R>
where
    T: TimeSource,
    R: RandSource,
{
    time: T,
    rng: R,
}

impl<T, R> UuidGenerator<T, R>
where
    T: TimeSource,
    R: RandSource,
{
    /// Creates a new [`UuidGenerator`] with the provided time source and RNG.
    ///
    /// # Example
    /// ```
    /// use toolsmith::{SystemClock, ThreadRandom, UuidGenerator};
    ///
    /// let generator = UuidGenerator::new(SystemClock, ThreadRandom);
    /// let id = generator.v4();
    /// assert_eq!(id.version(), 4);
    /// ```
    pub const fn new(time: T, rng: R) -> Self {
        Self { time, rng }
    }

    /// Generates a version 1 UUID for the current time.
    #[cfg_attr(feature = "tracing", instrument(level = "trace", skip(self)))]
    pub fn v1(&self) -> Uuid {
        self.v1_at(self.time.current_millis())
    }

    /// Generates a version 1 UUID for the given Unix timestamp in milliseconds.
    #[cfg_attr(feature = "tracing", instrument(level = "trace", skip(self)))]
    pub fn v1_at(&self, now_millis: u64) -> Uuid {
        v1_from_parts(now_millis, self.rng.bytes())
    }

    /// Generates a version 4 UUID.
    #[cfg_attr(feature = "tracing", instrument(level = "trace", skip(self)))]
    pub fn v4(&self) -> Uuid {
        v4_from_bytes(self.rng.bytes())
    }

    /// Generates a version 5 UUID. See [`generate_v5`].
    ///
    /// # Errors
    ///
    /// Returns [`Error::Validation`] for an empty name or malformed namespace.
    pub fn v5(&self, namespace: &str, name: &str) -> Result<Uuid> {
        generate_v5(namespace, name)
    }

    /// Generates a single UUID of the requested kind.
    ///
    /// # Errors
    ///
    /// Only v5 requests can fail, see [`generate_v5`].
    pub fn generate(&self, request: &UuidRequest) -> Result<Uuid> {
        match request {
            UuidRequest::V1 => Ok(self.v1()),
            UuidRequest::V4 => Ok(self.v4()),
            UuidRequest::V5 { namespace, name } => self.v5(namespace, name),
        }
    }

    /// Generates `count` UUIDs of the requested kind.
    ///
    /// A v5 request is validated once and, being deterministic, yields the
    /// same value `count` times.
    ///
    /// # Errors
    ///
    /// Only v5 requests can fail, see [`generate_v5`].
    #[cfg_attr(feature = "tracing", instrument(level = "debug", skip(self)))]
    pub fn generate_batch(&self, request: &UuidRequest, count: usize) -> Result<Vec<Uuid>> {
        match request {
            UuidRequest::V5 { namespace, name } => {
                let id = self.v5(namespace, name)?;
                Ok(vec![id; count])
            }
            _ => (0..count).map(|_| self.generate(request)).collect(),
        }
    }
}

#[cfg(feature = "std")]
impl Default for UuidGenerator<crate::SystemClock, crate::ThreadRandom> {
    fn default() -> Self {
        Self::new(crate::SystemClock, crate::ThreadRandom)
    }
}

/// Generates a version 4 UUID from the thread-local RNG.
#[cfg(feature = "std")]
#[must_use]
pub fn generate_v4() -> Uuid {
    UuidGenerator::default().v4()
}

/// Generates a version 1 UUID from the system clock and the thread-local RNG.
#[cfg(feature = "std")]
#[must_use]
pub fn generate_v1() -> Uuid {
    UuidGenerator::default().v1()
}
