//! Newtype wrappers for control identities and tags
//!
//! These types keep the numeric identity the document assigns to a control
//! apart from the caller-chosen tag string, so the two can never be swapped
//! when building markup.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;

/// The document-unique identity of a content control.
///
/// Values are handed out by an identifier generator and are always positive.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ControlId(u32);

impl ControlId {
    /// Wraps a raw identity value.
    pub const fn new(value: u32) -> Self {
        Self(value)
    }

    /// Returns the raw integer value.
    pub const fn get(self) -> u32 {
        self.0
    }
}

impl From<u32> for ControlId {
    fn from(value: u32) -> Self {
        Self(value)
    }
}

impl fmt::Display for ControlId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A machine-readable key attached to a control by the caller.
///
/// Uniqueness is the caller's responsibility.
#[derive(Debug, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub struct Tag(Arc<str>);

impl Tag {
    /// Creates a new Tag from a string
    pub fn new(tag: impl Into<Arc<str>>) -> Self {
        Self(tag.into())
    }

    /// Returns the string representation of this tag
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// True when the tag is empty or whitespace only.
    pub fn is_blank(&self) -> bool {
        self.0.trim().is_empty()
    }

    /// True when the tag contains any whitespace character.
    pub fn contains_whitespace(&self) -> bool {
        self.0.chars().any(char::is_whitespace)
    }
}

impl From<String> for Tag {
    fn from(s: String) -> Self {
        Self(s.into())
    }
}

impl From<&str> for Tag {
    fn from(s: &str) -> Self {
        Self(s.into())
    }
}

impl From<Tag> for String {
    fn from(tag: Tag) -> Self {
        tag.0.to_string()
    }
}

impl AsRef<str> for Tag {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_control_id_roundtrip() {
        let id = ControlId::new(42);
        assert_eq!(id.get(), 42);
        assert_eq!(ControlId::from(42), id);
        assert_eq!(id.to_string(), "42");
    }

    #[test]
    fn test_tag_creation() {
        let t1 = Tag::new("CustomerName");
        let t2 = Tag::from("CustomerName");
        let t3 = Tag::from(String::from("CustomerName"));

        assert_eq!(t1, t2);
        assert_eq!(t2, t3);
        assert_eq!(t1.as_str(), "CustomerName");
    }

    #[test]
    fn test_tag_blank_and_whitespace() {
        assert!(Tag::new("   ").is_blank());
        assert!(Tag::new("").is_blank());
        assert!(!Tag::new("a").is_blank());
        assert!(Tag::new("Customer Name").contains_whitespace());
        assert!(!Tag::new("CustomerName").contains_whitespace());
    }

    #[test]
    fn test_ids_are_ordered_in_maps() {
        use std::collections::BTreeMap;

        let mut by_id = BTreeMap::new();
        by_id.insert(ControlId::new(7), "seven");
        by_id.insert(ControlId::new(3), "three");

        let keys: Vec<u32> = by_id.keys().map(|id| id.get()).collect();
        assert_eq!(keys, vec![3, 7]);
    }
}
