use core::fmt;
use core::str::FromStr;

use crate::Error;

/// The UUID versions this crate can generate.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum UuidVersion {
    /// Gregorian timestamp plus random clock sequence and node.
    V1,
    /// 122 random bits.
    #[default]
    V4,
    /// SHA-1 of a namespace and a name.
    V5,
}

impl UuidVersion {
    /// The value stamped into the version nibble.
    #[must_use]
    pub const fn number(self) -> u8 {
        match self {
            Self::V1 => 1,
            Self::V4 => 4,
            Self::V5 => 5,
        }
    }
}

impl fmt::Display for UuidVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "v{}", self.number())
    }
}

impl FromStr for UuidVersion {
    type Err = Error;

    /// Accepts `1`, `4`, `5` with an optional `v`/`V` prefix.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let digits = s
            .strip_prefix('v')
            .or_else(|| s.strip_prefix('V'))
            .unwrap_or(s);
        match digits {
            "1" => Ok(Self::V1),
            "4" => Ok(Self::V4),
            "5" => Ok(Self::V5),
            _ => Err(Error::validation(format!(
                "unsupported UUID version {s:?}, expected one of v1, v4, v5"
            ))),
        }
    }
}
