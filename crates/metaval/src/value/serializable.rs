//! Custom-codec capability: values that carry their own round-trip encoding.

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use crate::error::CodecError;

/// Opt-in capability for values with their own encoding.
///
/// The serialization layer never interprets the produced bytes; it only
/// stores them alongside `kind()` so the matching decoder can be found on
/// the way back.
pub trait Serializable: Send + Sync {
    /// Stable identifier of the concrete codec, used to look up the decoder.
    fn kind(&self) -> &'static str;
    /// Encodes the value to an opaque byte payload.
    fn encode(&self) -> Vec<u8>;
}

/// Shared handle to a custom-serializable value.
///
/// Equality is by `kind` plus encoded payload, since trait objects carry no
/// structural equality of their own. Two handles may be equal without
/// pointing at the same allocation; [`ptr_eq`](SerializableValue::ptr_eq)
/// distinguishes that.
#[derive(Clone)]
pub struct SerializableValue(Arc<dyn Serializable>);

impl SerializableValue {
    pub fn new(inner: impl Serializable + 'static) -> Self {
        Self(Arc::new(inner))
    }

    pub fn from_arc(inner: Arc<dyn Serializable>) -> Self {
        Self(inner)
    }

    pub fn kind(&self) -> &'static str {
        self.0.kind()
    }

    pub fn encode(&self) -> Vec<u8> {
        self.0.encode()
    }

    /// True iff both handles point at the same allocation.
    pub fn ptr_eq(&self, other: &SerializableValue) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

impl PartialEq for SerializableValue {
    fn eq(&self, other: &Self) -> bool {
        self.kind() == other.kind() && self.encode() == other.encode()
    }
}

impl fmt::Debug for SerializableValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SerializableValue")
            .field("kind", &self.kind())
            .finish_non_exhaustive()
    }
}

/// Decode half of the custom-codec capability.
///
/// A decoder takes the stored payload and rebuilds the value, reporting
/// failures as a plain message.
pub type DecodeFn = fn(&[u8]) -> Result<SerializableValue, String>;

/// Kind-keyed decoder table, populated once at process start.
#[derive(Default)]
pub struct CodecRegistry {
    decoders: HashMap<&'static str, DecodeFn>,
}

impl CodecRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers the decoder for `kind`, replacing any previous entry.
    pub fn register(&mut self, kind: &'static str, decode: DecodeFn) {
        self.decoders.insert(kind, decode);
    }

    /// Decodes a stored payload through the decoder registered for `kind`.
    pub fn decode(&self, kind: &str, payload: &[u8]) -> Result<SerializableValue, CodecError> {
        let decode = self
            .decoders
            .get(kind)
            .ok_or_else(|| CodecError::UnknownKind { kind: kind.to_owned() })?;
        decode(payload).map_err(|reason| CodecError::Decode {
            kind: kind.to_owned(),
            reason,
        })
    }
}

impl fmt::Debug for CodecRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CodecRegistry")
            .field("kinds", &self.decoders.keys().collect::<Vec<_>>())
            .finish()
    }
}
