//! Handler for integer scalars.

use crate::error::{DeserializeError, SerializeError};
use crate::handler::{SerializedForm, TypeHandler};
use crate::value::{MetaValue, NumericValue};

/// Accepts strict integers; floats and numeric strings are rejected.
#[derive(Debug, Clone, Copy, Default)]
pub struct IntegerHandler;

impl TypeHandler for IntegerHandler {
    fn data_type(&self) -> &'static str {
        "integer"
    }

    fn can_handle(&self, value: &MetaValue) -> bool {
        matches!(value, MetaValue::Int(_))
    }

    fn serialize(&self, value: &MetaValue) -> Result<SerializedForm, SerializeError> {
        match value {
            MetaValue::Int(i) => Ok(i.to_string()),
            other => Err(SerializeError::unsupported(self.data_type(), other)),
        }
    }

    fn unserialize(&self, form: &str) -> Result<MetaValue, DeserializeError> {
        form.parse()
            .map(MetaValue::Int)
            .map_err(|e| DeserializeError::malformed(self.data_type(), format!("`{form}`: {e}")))
    }

    fn numeric_value(&self, value: &MetaValue) -> Option<NumericValue> {
        match value {
            MetaValue::Int(i) => Some(NumericValue::Int(*i)),
            _ => None,
        }
    }

    fn string_value(&self, value: &MetaValue, _index_complex_types: bool) -> Option<String> {
        match value {
            MetaValue::Int(i) => Some(i.to_string()),
            _ => None,
        }
    }
}
