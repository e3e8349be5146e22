use core::fmt;
use core::str::FromStr;

use super::Uuid;
use crate::Error;

/// `6ba7b810-9dad-11d1-80b4-00c04fd430c8`: names are fully qualified domain names.
pub const NAMESPACE_DNS: Uuid = namespace(0x10);
/// `6ba7b811-9dad-11d1-80b4-00c04fd430c8`: names are URLs.
pub const NAMESPACE_URL: Uuid = namespace(0x11);
/// `6ba7b812-9dad-11d1-80b4-00c04fd430c8`: names are ISO OIDs.
pub const NAMESPACE_OID: Uuid = namespace(0x12);
/// `6ba7b814-9dad-11d1-80b4-00c04fd430c8`: names are X.500 DNs.
pub const NAMESPACE_X500: Uuid = namespace(0x14);

// The four predefined namespaces differ only in the last byte of time-low.
const fn namespace(tag: u8) -> Uuid {
    Uuid::from_bytes([
        0x6b, 0xa7, 0xb8, tag, 0x9d, 0xad, 0x11, 0xd1, 0x80, 0xb4, 0x00, 0xc0, 0x4f, 0xd4, 0x30,
        0xc8,
    ])
}

/// The predefined v5 namespaces.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum Namespace {
    #[default]
    Dns,
    Url,
    Oid,
    X500,
}

impl Namespace {
    #[must_use]
    pub const fn uuid(self) -> Uuid {
        match self {
            Self::Dns => NAMESPACE_DNS,
            Self::Url => NAMESPACE_URL,
            Self::Oid => NAMESPACE_OID,
            Self::X500 => NAMESPACE_X500,
        }
    }
}

impl From<Namespace> for Uuid {
    fn from(ns: Namespace) -> Self {
        ns.uuid()
    }
}

impl fmt::Display for Namespace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Dns => "dns",
            Self::Url => "url",
            Self::Oid => "oid",
            Self::X500 => "x500",
        })
    }
}

impl FromStr for Namespace {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "dns" => Ok(Self::Dns),
            "url" => Ok(Self::Url),
            "oid" => Ok(Self::Oid),
            "x500" => Ok(Self::X500),
            _ => Err(Error::validation(format!(
                "unknown namespace {s:?}, expected one of dns, url, oid, x500"
            ))),
        }
    }
}
