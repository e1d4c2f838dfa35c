//! Opaque member identifier.
//!
//! The members payload carries ids as JSON strings, but nothing guarantees
//! that, so numeric ids are accepted too and normalised to their textual
//! form. Ids are only ever compared for equality.

use std::fmt;

use serde::Deserialize;
use serde::Deserializer;
use serde::Serialize;
use serde::Serializer;
use serde::de::Visitor;

/// Stable identifier of a [`Member`](super::Member), assigned by the source data.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct MemberId(String);

impl MemberId {
    /// Creates an id from its textual form.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Returns the textual form of the id.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for MemberId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for MemberId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<String> for MemberId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl From<u64> for MemberId {
    fn from(id: u64) -> Self {
        Self(id.to_string())
    }
}

impl Serialize for MemberId {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for MemberId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_any(MemberIdVisitor)
    }
}

struct MemberIdVisitor;

impl<'de> Visitor<'de> for MemberIdVisitor {
    type Value = MemberId;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a string or integer member id")
    }

    fn visit_str<E>(self, v: &str) -> Result<Self::Value, E>
    where
        E: serde::de::Error,
    {
        Ok(MemberId::new(v))
    }

    fn visit_string<E>(self, v: String) -> Result<Self::Value, E>
    where
        E: serde::de::Error,
    {
        Ok(MemberId(v))
    }

    fn visit_u64<E>(self, v: u64) -> Result<Self::Value, E>
    where
        E: serde::de::Error,
    {
        Ok(MemberId(v.to_string()))
    }

    fn visit_i64<E>(self, v: i64) -> Result<Self::Value, E>
    where
        E: serde::de::Error,
    {
        Ok(MemberId(v.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_string_id() {
        let id: MemberId = serde_json::from_str("\"42\"").unwrap();
        assert_eq!(id, MemberId::new("42"));
    }

    #[test]
    fn test_numeric_id_matches_string_form() {
        let id: MemberId = serde_json::from_str("7").unwrap();
        assert_eq!(id, MemberId::from("7"));
        assert_eq!(id, MemberId::from(7u64));

        let negative: MemberId = serde_json::from_str("-3").unwrap();
        assert_eq!(negative.as_str(), "-3");
    }

    #[test]
    fn test_rejects_other_json_types() {
        assert!(serde_json::from_str::<MemberId>("true").is_err());
        assert!(serde_json::from_str::<MemberId>("null").is_err());
        assert!(serde_json::from_str::<MemberId>("{}").is_err());
    }

    #[test]
    fn test_serializes_as_string() {
        let json = serde_json::to_string(&MemberId::from(9u64)).unwrap();
        assert_eq!(json, "\"9\"");
    }
}
