use ::serde::{Deserialize, Deserializer, Serialize, Serializer, de};
use core::fmt;

use crate::Uuid;

impl Serialize for Uuid {
    fn serialize<S>(&self, s: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        s.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Uuid {
    fn deserialize<D>(d: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct UuidVisitor;

        impl de::Visitor<'_> for UuidVisitor {
            type Value = Uuid;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("a hyphenated 8-4-4-4-12 UUID string")
            }

            #[inline]
            fn visit_str<E>(self, v: &str) -> Result<Self::Value, E>
            where
                E: de::Error,
            {
                Uuid::parse_str(v).map_err(de::Error::custom)
            }
        }

        d.deserialize_str(UuidVisitor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::uuid::NAMESPACE_DNS;

    #[derive(PartialEq, Eq, Debug, Serialize, Deserialize)]
    struct Row {
        id: Uuid,
    }

    #[test]
    fn uuid_serializes_as_string() {
        let row = Row { id: NAMESPACE_DNS };
        let json = serde_json::to_string(&row).expect("serialize");
        assert_eq!(json, r#"{"id":"6ba7b810-9dad-11d1-80b4-00c04fd430c8"}"#);
        let back: Row = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(back, row);
    }

    #[test]
    fn uuid_deserializes_uppercase() {
        let row: Row =
            serde_json::from_str(r#"{"id":"6BA7B810-9DAD-11D1-80B4-00C04FD430C8"}"#).unwrap();
        assert_eq!(row.id, NAMESPACE_DNS);
    }

    #[test]
    fn uuid_rejects_malformed_strings() {
        let err = serde_json::from_str::<Row>(r#"{"id":"not-a-uuid"}"#).unwrap_err();
        assert!(err.to_string().contains("validation failed"));
        assert!(serde_json::from_str::<Row>(r#"{"id":42}"#).is_err());
    }
}
