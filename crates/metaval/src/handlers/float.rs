//! Handler for floating-point scalars.

use crate::error::{DeserializeError, SerializeError};
use crate::handler::{SerializedForm, TypeHandler};
use crate::value::{MetaValue, NumericValue};

/// Accepts strict floats; integers and numeric strings are rejected.
///
/// The decimal form is the shortest representation that parses back to the
/// same value, so round trips are exact.
#[derive(Debug, Clone, Copy, Default)]
pub struct FloatHandler;

impl TypeHandler for FloatHandler {
    fn data_type(&self) -> &'static str {
        "float"
    }

    fn can_handle(&self, value: &MetaValue) -> bool {
        matches!(value, MetaValue::Float(_))
    }

    fn serialize(&self, value: &MetaValue) -> Result<SerializedForm, SerializeError> {
        match value {
            MetaValue::Float(f) => Ok(f.to_string()),
            other => Err(SerializeError::unsupported(self.data_type(), other)),
        }
    }

    fn unserialize(&self, form: &str) -> Result<MetaValue, DeserializeError> {
        form.parse()
            .map(MetaValue::Float)
            .map_err(|e| DeserializeError::malformed(self.data_type(), format!("`{form}`: {e}")))
    }

    fn numeric_value(&self, value: &MetaValue) -> Option<NumericValue> {
        match value {
            MetaValue::Float(f) => Some(NumericValue::Float(*f)),
            _ => None,
        }
    }

    fn string_value(&self, value: &MetaValue, _index_complex_types: bool) -> Option<String> {
        match value {
            MetaValue::Float(f) => Some(f.to_string()),
            _ => None,
        }
    }
}
