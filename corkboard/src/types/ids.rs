//! Identifier newtypes for the four record kinds.
//!
//! Ids are ULID strings: sortable by creation time, filename-safe, and
//! round-trippable through the store's `{id}.json` layout.

use serde::{Deserialize, Serialize};
use ulid::Ulid;

macro_rules! record_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Generate a fresh ULID-backed id
            pub fn new() -> Self {
                Self(Ulid::new().to_string())
            }

            /// Wrap an existing id string (e.g. a file stem)
            pub fn from_string(s: impl Into<String>) -> Self {
                Self(s.into())
            }

            /// The id as a string slice
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::new()
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<&str> for $name {
            fn from(s: &str) -> Self {
                Self::from_string(s)
            }
        }
    };
}

record_id!(
    /// Identifies a [`User`](crate::types::User)
    UserId
);
record_id!(
    /// Identifies a [`Board`](crate::types::Board)
    BoardId
);
record_id!(
    /// Identifies a [`Section`](crate::types::Section)
    SectionId
);
record_id!(
    /// Identifies a [`Task`](crate::types::Task)
    TaskId
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ids_are_unique() {
        assert_ne!(BoardId::new(), BoardId::new());
    }

    #[test]
    fn test_id_roundtrip() {
        let id = TaskId::new();
        let back = TaskId::from_string(id.as_str());
        assert_eq!(id, back);
    }

    #[test]
    fn test_ulid_ids_sort_by_creation() {
        let first = SectionId::new();
        std::thread::sleep(std::time::Duration::from_millis(2));
        let second = SectionId::new();
        assert!(first < second);
    }

    #[test]
    fn test_serde_transparent() {
        let id = UserId::from_string("01ARZ3NDEKTSV4RRFFQ69G5FAV");
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "\"01ARZ3NDEKTSV4RRFFQ69G5FAV\"");
    }
}
