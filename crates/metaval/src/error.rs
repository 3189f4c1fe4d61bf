//! Error taxonomy of the serialization layer.
//!
//! None of these are retried internally: the core performs no I/O and has
//! no transient-failure modes. Serialization errors are programmer errors,
//! deserialization errors indicate corrupted or mismatched stored data,
//! dispatch errors indicate a misconfigured handler set.

use thiserror::Error;

use crate::binary::BinaryError;
use crate::value::EntityKey;

/// Serialize was called on a value the handler does not own.
#[derive(Debug, Error)]
pub enum SerializeError {
    #[error("`{handler}` handler cannot serialize a {kind} value")]
    UnsupportedValue {
        handler: &'static str,
        kind: &'static str,
    },
    #[error(transparent)]
    Reference(#[from] ReferenceError),
    #[error(transparent)]
    Binary(#[from] BinaryError),
}

impl SerializeError {
    pub(crate) fn unsupported(handler: &'static str, value: &crate::value::MetaValue) -> Self {
        SerializeError::UnsupportedValue {
            handler,
            kind: value.kind(),
        }
    }
}

/// A stored form could not be turned back into a value. Indicates data
/// corruption or a tag/handler mismatch; never silently recovered.
#[derive(Debug, Error)]
pub enum DeserializeError {
    #[error("malformed `{handler}` payload: {detail}")]
    Malformed {
        handler: &'static str,
        detail: String,
    },
    #[error("invalid JSON payload: {0}")]
    Json(#[from] serde_json::Error),
    #[error("invalid datetime payload: {0}")]
    DateTime(#[from] chrono::ParseError),
    #[error("invalid base64 payload: {0}")]
    Base64(#[from] base64::DecodeError),
    #[error(transparent)]
    Binary(#[from] BinaryError),
    #[error(transparent)]
    Codec(#[from] CodecError),
    #[error(transparent)]
    Reference(#[from] ReferenceError),
}

impl DeserializeError {
    pub(crate) fn malformed(handler: &'static str, detail: impl Into<String>) -> Self {
        DeserializeError::Malformed {
            handler,
            detail: detail.into(),
        }
    }
}

/// Handler selection failed.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DispatchError {
    /// No registered handler accepts the value. The handler set is meant to
    /// be exhaustive over legal inputs, so this is a configuration or
    /// extension error.
    #[error("no registered handler accepts a {kind} value")]
    NoHandlerFound { kind: &'static str },
    /// A tag read from storage has no registered handler, typically after a
    /// handler was removed or renamed.
    #[error("unknown data type tag `{tag}`")]
    UnknownTypeTag { tag: String },
}

/// Failure of the external reference resolver, propagated unchanged.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("cannot resolve entity `{type_tag}` (key {key:?}): {reason}")]
pub struct ReferenceError {
    pub type_tag: String,
    pub key: Option<EntityKey>,
    pub reason: String,
}

/// Failure of a custom codec registered for a serializable kind.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CodecError {
    #[error("no codec registered for kind `{kind}`")]
    UnknownKind { kind: String },
    #[error("codec `{kind}` failed to decode payload: {reason}")]
    Decode { kind: String, reason: String },
}

/// Aggregate error for the registry's record-level convenience API.
#[derive(Debug, Error)]
pub enum MetaError {
    #[error(transparent)]
    Dispatch(#[from] DispatchError),
    #[error(transparent)]
    Serialize(#[from] SerializeError),
    #[error(transparent)]
    Deserialize(#[from] DeserializeError),
}
