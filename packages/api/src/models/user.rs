//! # User record and draft
//!
//! Defines the two shapes of a managed user that cross the wire:
//!
//! ## [`UserRecord`]
//!
//! The canonical record as returned by the server. The identifier is opaque to the
//! client: backends send it as a JSON number or string, under `id` or `_id`, and
//! [`UserId`] accepts all of these and keeps the value as text so it can be echoed
//! back into URL paths unchanged.
//!
//! ## [`UserDraft`]
//!
//! The `{ name, email }` body sent on create and update. The client never assigns an
//! id; the server returns the canonical [`UserRecord`] after every write.

use std::fmt;

use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Opaque server-assigned identifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct UserId(String);

impl UserId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<u64> for UserId {
    fn from(id: u64) -> Self {
        Self(id.to_string())
    }
}

impl From<&str> for UserId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl Serialize for UserId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for UserId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct IdVisitor;

        impl Visitor<'_> for IdVisitor {
            type Value = UserId;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a string or integer identifier")
            }

            fn visit_str<E: de::Error>(self, v: &str) -> Result<UserId, E> {
                Ok(UserId(v.to_string()))
            }

            fn visit_u64<E: de::Error>(self, v: u64) -> Result<UserId, E> {
                Ok(UserId(v.to_string()))
            }

            fn visit_i64<E: de::Error>(self, v: i64) -> Result<UserId, E> {
                Ok(UserId(v.to_string()))
            }
        }

        deserializer.deserialize_any(IdVisitor)
    }
}

/// A user record as held by the server.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserRecord {
    #[serde(alias = "_id")]
    pub id: UserId,
    pub name: String,
    pub email: String,
}

impl UserRecord {
    /// The editable fields of this record.
    pub fn draft(&self) -> UserDraft {
        UserDraft {
            name: self.name.clone(),
            email: self.email.clone(),
        }
    }
}

/// Request body for create and update.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UserDraft {
    pub name: String,
    pub email: String,
}

impl UserDraft {
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_id_accepts_number_and_string() {
        let numeric: UserRecord =
            serde_json::from_str(r#"{"id": 7, "name": "Amit", "email": "amit@example.com"}"#)
                .unwrap();
        assert_eq!(numeric.id.as_str(), "7");

        let mongo: UserRecord = serde_json::from_str(
            r#"{"_id": "65a1f0", "name": "Priya", "email": "priya@example.com"}"#,
        )
        .unwrap();
        assert_eq!(mongo.id, UserId::new("65a1f0"));
    }

    #[test]
    fn test_id_serializes_as_string() {
        let record = UserRecord {
            id: UserId::from(3),
            name: "Rahul".to_string(),
            email: "rahul@example.com".to_string(),
        };
        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["id"], "3");
    }

    #[test]
    fn test_draft_copies_editable_fields() {
        let record = UserRecord {
            id: UserId::from(1),
            name: "Amit Sharma".to_string(),
            email: "amit.sharma@example.com".to_string(),
        };
        assert_eq!(
            record.draft(),
            UserDraft::new("Amit Sharma", "amit.sharma@example.com")
        );
    }
}
