//! Identity of externally-owned entities.

use std::fmt;

/// Primary key of an externally-owned entity.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum EntityKey {
    Int(i64),
    Str(String),
}

impl EntityKey {
    /// Parses a key from its stored text form. Canonical decimal integers
    /// become integer keys; everything else stays a string key.
    pub fn parse(s: &str) -> Self {
        let digits = s.strip_prefix('-').unwrap_or(s);
        let canonical = !digits.is_empty()
            && digits.bytes().all(|b| b.is_ascii_digit())
            && (digits.len() == 1 || !digits.starts_with('0'))
            && !(s.starts_with('-') && digits == "0");
        match s.parse() {
            Ok(i) if canonical => EntityKey::Int(i),
            _ => EntityKey::Str(s.to_owned()),
        }
    }
}

impl fmt::Display for EntityKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EntityKey::Int(i) => write!(f, "{i}"),
            EntityKey::Str(s) => f.write_str(s),
        }
    }
}

impl From<i64> for EntityKey {
    fn from(i: i64) -> Self {
        EntityKey::Int(i)
    }
}

impl From<&str> for EntityKey {
    fn from(s: &str) -> Self {
        EntityKey::Str(s.to_owned())
    }
}

/// Reference to an externally-owned entity: a resolvable type tag plus the
/// entity's key. A missing key denotes an entity that has not been
/// persisted by its owner yet.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct EntityRef {
    pub type_tag: String,
    pub key: Option<EntityKey>,
}

impl EntityRef {
    pub fn new(type_tag: impl Into<String>, key: impl Into<EntityKey>) -> Self {
        Self {
            type_tag: type_tag.into(),
            key: Some(key.into()),
        }
    }

    /// Reference to an entity its owner has not assigned a key yet.
    pub fn unsaved(type_tag: impl Into<String>) -> Self {
        Self {
            type_tag: type_tag.into(),
            key: None,
        }
    }
}
