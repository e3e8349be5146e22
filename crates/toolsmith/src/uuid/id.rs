use core::fmt;
use core::str::FromStr;

use crate::{Error, Result};

/// 100-ns ticks between the Gregorian epoch (1582-10-15) and the Unix epoch.
pub const GREGORIAN_OFFSET: u64 = 0x01B2_1DD2_1381_4000;
/// 100-ns ticks per millisecond.
pub const TICKS_PER_MILLI: u64 = 10_000;

/// Length of the canonical `8-4-4-4-12` text form.
pub const UUID_TEXT_LEN: usize = 36;
const HYPHENS: [usize; 4] = [8, 13, 18, 23];
const HEX: &[u8; 16] = b"0123456789abcdef";

/// The variant field stored in the top bits of byte 8.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Variant {
    /// `0xx`: reserved, NCS backward compatibility.
    Ncs,
    /// `10x`: the layout described by RFC 4122.
    Rfc4122,
    /// `110`: reserved, Microsoft backward compatibility.
    Microsoft,
    /// `111`: reserved for future definition.
    Future,
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Ncs => "NCS",
            Self::Rfc4122 => "RFC 4122",
            Self::Microsoft => "Microsoft",
            Self::Future => "Future",
        })
    }
}

/// A 128-bit UUID stored as 16 big-endian bytes.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Uuid([u8; 16]);

impl Uuid {
    /// The all-zero UUID.
    #[must_use]
    pub const fn nil() -> Self {
        Self([0; 16])
    }

    #[must_use]
    pub const fn from_bytes(bytes: [u8; 16]) -> Self {
        Self(bytes)
    }

    #[must_use]
    pub const fn as_bytes(&self) -> &[u8; 16] {
        &self.0
    }

    #[must_use]
    pub const fn into_bytes(self) -> [u8; 16] {
        self.0
    }

    /// The version nibble (high four bits of byte 6).
    #[must_use]
    pub const fn version(&self) -> u8 {
        self.0[6] >> 4
    }

    #[must_use]
    pub const fn variant(&self) -> Variant {
        match self.0[8] {
            b if b & 0x80 == 0 => Variant::Ncs,
            b if b & 0x40 == 0 => Variant::Rfc4122,
            b if b & 0x20 == 0 => Variant::Microsoft,
            _ => Variant::Future,
        }
    }

    #[must_use]
    pub const fn is_nil(&self) -> bool {
        u128::from_be_bytes(self.0) == 0
    }

    /// Recovers the Unix millisecond timestamp packed into a version 1 UUID.
    ///
    /// Returns `None` for other versions, and for v1 values whose timestamp
    /// predates the Unix epoch.
    #[must_use]
    pub fn v1_timestamp_millis(&self) -> Option<u64> {
        if self.version() != 1 {
            return None;
        }
        let b = &self.0;
        let low = u64::from(u32::from_be_bytes([b[0], b[1], b[2], b[3]]));
        let mid = u64::from(u16::from_be_bytes([b[4], b[5]]));
        let high = u64::from(u16::from_be_bytes([b[6], b[7]]) & 0x0FFF);
        let ticks = (high << 48) | (mid << 32) | low;
        ticks
            .checked_sub(GREGORIAN_OFFSET)
            .map(|t| t / TICKS_PER_MILLI)
    }

    /// Parses the canonical `8-4-4-4-12` form. Hex digits may be either case.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Validation`] for anything else, including braced,
    /// URN or unhyphenated forms.
    ///
    /// # Example
    /// ```
    /// use toolsmith::Uuid;
    ///
    /// let id = Uuid::parse_str("6BA7B810-9DAD-11D1-80B4-00C04FD430C8").unwrap();
    /// assert_eq!(id.to_string(), "6ba7b810-9dad-11d1-80b4-00c04fd430c8");
    /// assert!(Uuid::parse_str("not-a-uuid").is_err());
    /// ```
    pub fn parse_str(s: &str) -> Result<Self> {
        let text = s.as_bytes();
        if text.len() != UUID_TEXT_LEN {
            return Err(Error::validation(format!(
                "expected {UUID_TEXT_LEN} characters, got {}",
                text.len()
            )));
        }

        let mut bytes = [0_u8; 16];
        let mut digits = text
            .iter()
            .enumerate()
            .filter(|(i, _)| !HYPHENS.contains(i));
        for slot in &mut bytes {
            let (Some((hi_at, &hi)), Some((lo_at, &lo))) = (digits.next(), digits.next()) else {
                return Err(Error::validation("truncated UUID"));
            };
            *slot = (hex_value(hi, hi_at)? << 4) | hex_value(lo, lo_at)?;
        }
        for at in HYPHENS {
            if text[at] != b'-' {
                return Err(Error::validation(format!(
                    "expected '-' at index {at}, found {:?}",
                    char::from(text[at])
                )));
            }
        }
        Ok(Self(bytes))
    }
}

fn hex_value(byte: u8, index: usize) -> Result<u8> {
    match byte {
        b'0'..=b'9' => Ok(byte - b'0'),
        b'a'..=b'f' => Ok(byte - b'a' + 10),
        b'A'..=b'F' => Ok(byte - b'A' + 10),
        _ => Err(Error::validation(format!(
            "invalid hex digit {:?} at index {index}",
            char::from(byte)
        ))),
    }
}

impl fmt::Display for Uuid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut buf = [0_u8; UUID_TEXT_LEN];
        let mut at = 0;
        for (i, byte) in self.0.iter().enumerate() {
            if matches!(i, 4 | 6 | 8 | 10) {
                buf[at] = b'-';
                at += 1;
            }
            buf[at] = HEX[usize::from(byte >> 4)];
            buf[at + 1] = HEX[usize::from(byte & 0x0F)];
            at += 2;
        }
        // Only ASCII was written above.
        f.write_str(core::str::from_utf8(&buf).map_err(|_| fmt::Error)?)
    }
}

impl fmt::Debug for Uuid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Uuid")
            .field("uuid", &format_args!("{self}"))
            .field("version", &self.version())
            .field("variant", &self.variant())
            .finish()
    }
}

impl FromStr for Uuid {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse_str(s)
    }
}

impl From<[u8; 16]> for Uuid {
    fn from(bytes: [u8; 16]) -> Self {
        Self(bytes)
    }
}

impl From<Uuid> for u128 {
    fn from(id: Uuid) -> Self {
        u128::from_be_bytes(id.0)
    }
}

impl From<u128> for Uuid {
    fn from(raw: u128) -> Self {
        Self(raw.to_be_bytes())
    }
}
