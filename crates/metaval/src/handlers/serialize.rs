//! Generic fallback handler backed by the binary codec.

use std::sync::Arc;

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;

use crate::binary::{BinaryDecoder, BinaryEncoder};
use crate::error::{DeserializeError, SerializeError};
use crate::handler::{SerializedForm, TypeHandler};
use crate::value::{CodecRegistry, MetaValue, NumericValue};

/// Accepts anything the binary codec can encode — every value except one
/// containing an open resource. Registered last, so it only catches values
/// no narrower handler claimed.
///
/// This is the one non-idempotent handler: decoding rebuilds embedded
/// custom-serializable payloads through the codec registry, so shared
/// handles come back as fresh allocations — structurally equal to the
/// input, but not identical. That contract is intentional and relied upon;
/// callers needing strict round-trip identity must use a narrower type.
pub struct SerializeHandler {
    codecs: Arc<CodecRegistry>,
}

impl SerializeHandler {
    pub fn new(codecs: Arc<CodecRegistry>) -> Self {
        Self { codecs }
    }
}

impl TypeHandler for SerializeHandler {
    fn data_type(&self) -> &'static str {
        "serialized"
    }

    fn can_handle(&self, value: &MetaValue) -> bool {
        !value.contains_resource()
    }

    fn serialize(&self, value: &MetaValue) -> Result<SerializedForm, SerializeError> {
        if !self.can_handle(value) {
            return Err(SerializeError::unsupported(self.data_type(), value));
        }
        let bytes = BinaryEncoder::new().encode(value)?;
        Ok(STANDARD.encode(bytes))
    }

    fn unserialize(&self, form: &str) -> Result<MetaValue, DeserializeError> {
        let bytes = STANDARD.decode(form)?;
        Ok(BinaryDecoder::new(&bytes, &self.codecs).decode()?)
    }

    fn numeric_value(&self, _value: &MetaValue) -> Option<NumericValue> {
        None
    }

    fn string_value(&self, _value: &MetaValue, _index_complex_types: bool) -> Option<String> {
        None
    }

    fn is_idempotent(&self) -> bool {
        false
    }
}

impl std::fmt::Debug for SerializeHandler {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SerializeHandler").finish()
    }
}
