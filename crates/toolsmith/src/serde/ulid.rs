use ::serde::{Deserialize, Deserializer, Serialize, Serializer, de};
use core::fmt;

use crate::UlidParts;

impl Serialize for UlidParts {
    fn serialize<S>(&self, s: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        s.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for UlidParts {
    fn deserialize<D>(d: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct Base32Visitor;

        impl de::Visitor<'_> for Base32Visitor {
            type Value = UlidParts;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("a 26-character Crockford base32 ULID string")
            }

            #[inline]
            fn visit_str<E>(self, v: &str) -> Result<Self::Value, E>
            where
                E: de::Error,
            {
                UlidParts::parse(v).map_err(de::Error::custom)
            }
        }

        d.deserialize_str(Base32Visitor)
    }
}
