use core::fmt;
use core::str::FromStr;

use super::ULID_LEN;
use crate::{
    Base32Error, Result,
    base32::{decode_fixed_width, encode_fixed_width},
};

/// The decoded components of a ULID string.
///
/// ```text
///  Bit Index:  127            80 79           0
///              +----------------+-------------+
///  Field:      | timestamp (48) | random (80) |
///              +----------------+-------------+
///              |<-- MSB -- 128 bits -- LSB -->|
/// ```
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct UlidParts {
    timestamp: u64,
    random: u128,
}

impl UlidParts {
    pub const TIMESTAMP_BITS: u32 = 48;
    pub const RANDOM_BITS: u32 = 80;
    pub const TIMESTAMP_MASK: u64 = (1 << Self::TIMESTAMP_BITS) - 1;
    pub const RANDOM_MASK: u128 = (1 << Self::RANDOM_BITS) - 1;

    /// Builds a value from its components, masking each to its field width.
    #[must_use]
    pub const fn from_components(timestamp: u64, random: u128) -> Self {
        Self {
            timestamp: timestamp & Self::TIMESTAMP_MASK,
            random: random & Self::RANDOM_MASK,
        }
    }

    /// Splits a raw 128-bit value into timestamp and random fields.
    #[must_use]
    pub const fn from_raw(raw: u128) -> Self {
        Self {
            timestamp: (raw >> Self::RANDOM_BITS) as u64,
            random: raw & Self::RANDOM_MASK,
        }
    }

    /// Packs the fields back into a 128-bit value.
    #[must_use]
    pub const fn to_raw(&self) -> u128 {
        ((self.timestamp as u128) << Self::RANDOM_BITS) | self.random
    }

    /// Decodes a 26-character ULID string.
    ///
    /// Lowercase input and the Crockford aliases are accepted.
    ///
    /// # Errors
    ///
    /// - [`Base32Error::InvalidLength`] unless the input is exactly 26 bytes
    /// - [`Base32Error::InvalidAscii`] for a byte outside the alphabet
    /// - [`Base32Error::Overflow`] if the first character is above `7`, which
    ///   would need more than 128 bits
    ///
    /// # Example
    /// ```
    /// use toolsmith::UlidParts;
    ///
    /// let parts = UlidParts::parse("01ARZ3NDEKTSV4RRFFQ69G5FAV").unwrap();
    /// assert_eq!(parts.timestamp_millis(), 1_469_922_850_259);
    /// assert_eq!(parts.random(), 1_012_768_647_078_601_740_696_923);
    /// ```
    pub fn parse(s: &str) -> Result<Self> {
        if s.len() != ULID_LEN {
            return Err(Base32Error::InvalidLength { len: s.len() }.into());
        }
        let raw = decode_fixed_width(s)?;
        Ok(Self::from_raw(raw))
    }

    /// Milliseconds since the Unix epoch.
    #[must_use]
    pub const fn timestamp_millis(&self) -> u64 {
        self.timestamp
    }

    /// The 80-bit random component.
    #[must_use]
    pub const fn random(&self) -> u128 {
        self.random
    }

    /// Returns the timestamp as a [`std::time::SystemTime`].
    ///
    /// Precision is limited to whole milliseconds.
    #[must_use]
    pub fn datetime(&self) -> std::time::SystemTime {
        std::time::UNIX_EPOCH + core::time::Duration::from_millis(self.timestamp)
    }
}

/// Decodes a ULID string into its components.
///
/// # Errors
///
/// See [`UlidParts::parse`].
pub fn inspect(s: &str) -> Result<UlidParts> {
    UlidParts::parse(s)
}

impl fmt::Display for UlidParts {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&encode_fixed_width(self.to_raw(), ULID_LEN))
    }
}

impl fmt::Debug for UlidParts {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UlidParts")
            .field("ulid", &format_args!("{self}"))
            .field("timestamp", &format_args!("{} (0x{:x})", self.timestamp, self.timestamp))
            .field("random", &format_args!("{} (0x{:x})", self.random, self.random))
            .finish()
    }
}

impl FromStr for UlidParts {
    type Err = crate::Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl TryFrom<&str> for UlidParts {
    type Error = crate::Error;

    fn try_from(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}
