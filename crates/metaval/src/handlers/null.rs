//! Handler for the explicit null value.

use crate::error::{DeserializeError, SerializeError};
use crate::handler::{SerializedForm, TypeHandler};
use crate::value::{MetaValue, NumericValue};

/// Stores null as an empty marker. The tag alone is authoritative on the
/// way back, so any stored form deserializes to null.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullHandler;

impl TypeHandler for NullHandler {
    fn data_type(&self) -> &'static str {
        "null"
    }

    fn can_handle(&self, value: &MetaValue) -> bool {
        matches!(value, MetaValue::Null)
    }

    fn serialize(&self, value: &MetaValue) -> Result<SerializedForm, SerializeError> {
        match value {
            MetaValue::Null => Ok(String::new()),
            other => Err(SerializeError::unsupported(self.data_type(), other)),
        }
    }

    fn unserialize(&self, _form: &str) -> Result<MetaValue, DeserializeError> {
        Ok(MetaValue::Null)
    }

    fn numeric_value(&self, _value: &MetaValue) -> Option<NumericValue> {
        None
    }

    fn string_value(&self, _value: &MetaValue, _index_complex_types: bool) -> Option<String> {
        None
    }
}
