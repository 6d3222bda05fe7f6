//! Strongly-typed ID wrappers for ledger entities
//!
//! Transactions and categories both use UUIDs; the newtypes keep them from
//! being mixed up when looking entries up in the store.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

macro_rules! define_id {
    ($name:ident, $display_prefix:literal) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(Uuid);

        impl $name {
            /// Create a new random ID
            pub fn new() -> Self {
                Self(Uuid::new_v4())
            }

            /// Get the underlying UUID
            pub fn as_uuid(&self) -> &Uuid {
                &self.0
            }

            /// Short form used in CLI listings
            pub fn short(&self) -> String {
                format!("{}{}", $display_prefix, &self.0.to_string()[..8])
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::new()
            }
        }

        /// Full hyphenated UUID, as exported to CSV
        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<Uuid> for $name {
            fn from(uuid: Uuid) -> Self {
                Self(uuid)
            }
        }

        impl FromStr for $name {
            type Err = uuid::Error;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                let s = s.strip_prefix($display_prefix).unwrap_or(s);
                Ok(Self(Uuid::parse_str(s)?))
            }
        }
    };
}

define_id!(TransactionId, "txn-");
define_id!(CategoryId, "cat-");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_id_creation() {
        let id = TransactionId::new();
        assert!(!id.as_uuid().is_nil());
        assert_ne!(id, TransactionId::new());
    }

    #[test]
    fn test_short_form() {
        let id = CategoryId::new();
        let short = id.short();
        assert!(short.starts_with("cat-"));
        assert_eq!(short.len(), 12);
    }

    #[test]
    fn test_display_is_full_uuid() {
        let uuid_str = "550e8400-e29b-41d4-a716-446655440000";
        let id: TransactionId = uuid_str.parse().unwrap();
        assert_eq!(id.to_string(), uuid_str);
    }

    #[test]
    fn test_parse_with_prefix() {
        let id: TransactionId = "txn-550e8400-e29b-41d4-a716-446655440000".parse().unwrap();
        assert_eq!(id.as_uuid().to_string(), "550e8400-e29b-41d4-a716-446655440000");
        assert!("txn-nope".parse::<TransactionId>().is_err());
    }

    #[test]
    fn test_id_serialization() {
        let id = CategoryId::new();
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, format!("\"{}\"", id.as_uuid()));
        let deserialized: CategoryId = serde_json::from_str(&json).unwrap();
        assert_eq!(id, deserialized);
    }
}
