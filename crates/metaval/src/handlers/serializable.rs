//! Handler for values carrying their own codec.

use std::sync::Arc;

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;

use crate::error::{DeserializeError, SerializeError};
use crate::handler::{SerializedForm, TypeHandler};
use crate::value::{CodecRegistry, MetaValue, NumericValue};

/// Delegates encoding to the value itself and decoding to the codec
/// registered for the stored kind. The payload bytes are never
/// interpreted; the stored form is `kind:base64(payload)`.
pub struct SerializableHandler {
    codecs: Arc<CodecRegistry>,
}

impl SerializableHandler {
    pub fn new(codecs: Arc<CodecRegistry>) -> Self {
        Self { codecs }
    }
}

impl TypeHandler for SerializableHandler {
    fn data_type(&self) -> &'static str {
        "serializable"
    }

    fn can_handle(&self, value: &MetaValue) -> bool {
        matches!(value, MetaValue::Serializable(_))
    }

    fn serialize(&self, value: &MetaValue) -> Result<SerializedForm, SerializeError> {
        match value {
            MetaValue::Serializable(sv) => {
                Ok(format!("{}:{}", sv.kind(), STANDARD.encode(sv.encode())))
            }
            other => Err(SerializeError::unsupported(self.data_type(), other)),
        }
    }

    fn unserialize(&self, form: &str) -> Result<MetaValue, DeserializeError> {
        let (kind, payload) = form.split_once(':').ok_or_else(|| {
            DeserializeError::malformed(self.data_type(), "missing `kind:payload` separator")
        })?;
        let payload = STANDARD.decode(payload)?;
        let value = self.codecs.decode(kind, &payload)?;
        Ok(MetaValue::Serializable(value))
    }

    fn numeric_value(&self, _value: &MetaValue) -> Option<NumericValue> {
        None
    }

    fn string_value(&self, value: &MetaValue, index_complex_types: bool) -> Option<String> {
        if !index_complex_types {
            return None;
        }
        match value {
            MetaValue::Serializable(sv) => {
                Some(format!("{}:{}", sv.kind(), STANDARD.encode(sv.encode())))
            }
            _ => None,
        }
    }
}

impl std::fmt::Debug for SerializableHandler {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SerializableHandler").finish()
    }
}
