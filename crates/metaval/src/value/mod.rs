//! The polymorphic value model handlers operate over.

mod array;
mod entity;
mod serializable;

pub use array::{ArrayKey, MetaArray};
pub use entity::{EntityKey, EntityRef};
pub use serializable::{CodecRegistry, Serializable, SerializableValue};

use chrono::{DateTime, FixedOffset};
use indexmap::IndexMap;

/// Any storable value. At any moment a value is exactly one variant; each
/// variant corresponds 1:1 to the domain of one type handler, except
/// [`Resource`](MetaValue::Resource), which no handler accepts.
#[derive(Debug, Clone, PartialEq)]
pub enum MetaValue {
    /// Explicit null.
    Null,
    /// Boolean scalar. Not `1`, not `0`, not an empty container.
    Bool(bool),
    /// Signed integer scalar.
    Int(i64),
    /// Floating-point scalar, distinct from `Int` even for whole values.
    Float(f64),
    /// UTF-8 string.
    Str(String),
    /// An instant with explicit offset and microsecond precision.
    DateTime(DateTime<FixedOffset>),
    /// Ordered container keyed by strings or integers, values recursive.
    Array(MetaArray),
    /// Generic string-keyed record with no identity and no custom codec.
    Object(IndexMap<String, MetaValue>),
    /// Reference to an externally-owned entity (type tag + key).
    Model(EntityRef),
    /// Ordered sequence of entity references, possibly of mixed types.
    /// Elements are references, never other collections.
    Collection(Vec<EntityRef>),
    /// A value carrying its own encode/decode capability.
    Serializable(SerializableValue),
    /// An open process resource (stream, socket). Representable so that
    /// dispatch can refuse it; unencodable by every handler.
    Resource(ResourceHandle),
}

impl MetaValue {
    /// Short human-readable name of the variant, used in error messages.
    pub fn kind(&self) -> &'static str {
        match self {
            MetaValue::Null => "null",
            MetaValue::Bool(_) => "boolean",
            MetaValue::Int(_) => "integer",
            MetaValue::Float(_) => "float",
            MetaValue::Str(_) => "string",
            MetaValue::DateTime(_) => "datetime",
            MetaValue::Array(_) => "array",
            MetaValue::Object(_) => "object",
            MetaValue::Model(_) => "model",
            MetaValue::Collection(_) => "collection",
            MetaValue::Serializable(_) => "serializable",
            MetaValue::Resource(_) => "resource",
        }
    }

    /// True if this value is, or transitively contains, an open resource.
    pub fn contains_resource(&self) -> bool {
        match self {
            MetaValue::Resource(_) => true,
            MetaValue::Array(arr) => arr.values().any(MetaValue::contains_resource),
            MetaValue::Object(map) => map.values().any(MetaValue::contains_resource),
            _ => false,
        }
    }
}

impl From<bool> for MetaValue {
    fn from(b: bool) -> Self {
        MetaValue::Bool(b)
    }
}

impl From<i64> for MetaValue {
    fn from(i: i64) -> Self {
        MetaValue::Int(i)
    }
}

impl From<f64> for MetaValue {
    fn from(f: f64) -> Self {
        MetaValue::Float(f)
    }
}

impl From<&str> for MetaValue {
    fn from(s: &str) -> Self {
        MetaValue::Str(s.to_owned())
    }
}

impl From<String> for MetaValue {
    fn from(s: String) -> Self {
        MetaValue::Str(s)
    }
}

impl From<MetaArray> for MetaValue {
    fn from(arr: MetaArray) -> Self {
        MetaValue::Array(arr)
    }
}

/// Identity of an open process resource.
///
/// Exists only so the value model can represent inputs the serialization
/// layer must refuse; carries no payload beyond the descriptor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResourceHandle {
    pub descriptor: u64,
}

impl ResourceHandle {
    pub fn new(descriptor: u64) -> Self {
        Self { descriptor }
    }
}

/// Result of the numeric projection: the scalar most useful for range
/// queries over stored values.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum NumericValue {
    Int(i64),
    Float(f64),
}
