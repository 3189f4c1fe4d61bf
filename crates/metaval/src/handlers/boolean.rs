//! Handler for boolean scalars.

use crate::error::{DeserializeError, SerializeError};
use crate::handler::{SerializedForm, TypeHandler};
use crate::value::{MetaValue, NumericValue};

/// Accepts strict booleans only: `1`, `0`, empty strings, empty containers
/// and null all belong to other handlers.
#[derive(Debug, Clone, Copy, Default)]
pub struct BooleanHandler;

impl TypeHandler for BooleanHandler {
    fn data_type(&self) -> &'static str {
        "boolean"
    }

    fn can_handle(&self, value: &MetaValue) -> bool {
        matches!(value, MetaValue::Bool(_))
    }

    fn serialize(&self, value: &MetaValue) -> Result<SerializedForm, SerializeError> {
        match value {
            MetaValue::Bool(b) => Ok(if *b { "true" } else { "false" }.to_owned()),
            other => Err(SerializeError::unsupported(self.data_type(), other)),
        }
    }

    fn unserialize(&self, form: &str) -> Result<MetaValue, DeserializeError> {
        match form {
            "true" => Ok(MetaValue::Bool(true)),
            "false" => Ok(MetaValue::Bool(false)),
            other => Err(DeserializeError::malformed(
                self.data_type(),
                format!("expected `true` or `false`, got `{other}`"),
            )),
        }
    }

    fn numeric_value(&self, value: &MetaValue) -> Option<NumericValue> {
        match value {
            MetaValue::Bool(b) => Some(NumericValue::Int(i64::from(*b))),
            _ => None,
        }
    }

    fn string_value(&self, value: &MetaValue, _index_complex_types: bool) -> Option<String> {
        match value {
            MetaValue::Bool(b) => Some(if *b { "true" } else { "false" }.to_owned()),
            _ => None,
        }
    }
}
