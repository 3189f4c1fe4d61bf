//! Handler for ordered/keyed containers.

use crate::error::{DeserializeError, SerializeError};
use crate::handler::{SerializedForm, TypeHandler};
use crate::value::{MetaValue, NumericValue};

use super::json;

/// Accepts arrays whose whole tree is JSON-representable: scalars and
/// nested arrays. Anything richer (a datetime element, a generic object, a
/// non-finite float) is left for the opaque-serialized fallback, which
/// round-trips it exactly.
///
/// A list-shaped array stores as a JSON array; keyed arrays store as JSON
/// objects whose keys keep their type through the canonical-integer rule.
#[derive(Debug, Clone, Copy, Default)]
pub struct ArrayHandler;

impl TypeHandler for ArrayHandler {
    fn data_type(&self) -> &'static str {
        "array"
    }

    fn can_handle(&self, value: &MetaValue) -> bool {
        match value {
            MetaValue::Array(arr) => json::array_to_json(arr).is_some(),
            _ => false,
        }
    }

    fn serialize(&self, value: &MetaValue) -> Result<SerializedForm, SerializeError> {
        let json = match value {
            MetaValue::Array(arr) => json::array_to_json(arr),
            _ => None,
        };
        match json {
            Some(json) => Ok(json.to_string()),
            None => Err(SerializeError::unsupported(self.data_type(), value)),
        }
    }

    fn unserialize(&self, form: &str) -> Result<MetaValue, DeserializeError> {
        let json: serde_json::Value = serde_json::from_str(form)?;
        match json {
            serde_json::Value::Array(_) | serde_json::Value::Object(_) => {
                Ok(json::from_json_assoc(json))
            }
            _ => Err(DeserializeError::malformed(
                self.data_type(),
                "expected a JSON array or object",
            )),
        }
    }

    fn numeric_value(&self, _value: &MetaValue) -> Option<NumericValue> {
        None
    }

    fn string_value(&self, value: &MetaValue, index_complex_types: bool) -> Option<String> {
        if !index_complex_types {
            return None;
        }
        match value {
            MetaValue::Array(arr) => json::array_to_json(arr).map(|j| j.to_string()),
            _ => None,
        }
    }
}
