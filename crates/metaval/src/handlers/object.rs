//! Handler for generic structured records.

use crate::error::{DeserializeError, SerializeError};
use crate::handler::{SerializedForm, TypeHandler};
use crate::value::{MetaValue, NumericValue};

use super::json;

/// Accepts plain records (no identity, no custom codec) whose attributes
/// are JSON-representable: scalars, nested records, and plain lists. A
/// keyed array attribute would come back as a record, so it is left for
/// the opaque-serialized fallback instead.
#[derive(Debug, Clone, Copy, Default)]
pub struct ObjectHandler;

impl TypeHandler for ObjectHandler {
    fn data_type(&self) -> &'static str {
        "object"
    }

    fn can_handle(&self, value: &MetaValue) -> bool {
        match value {
            MetaValue::Object(map) => json::object_to_json(map).is_some(),
            _ => false,
        }
    }

    fn serialize(&self, value: &MetaValue) -> Result<SerializedForm, SerializeError> {
        let json = match value {
            MetaValue::Object(map) => json::object_to_json(map),
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
            serde_json::Value::Object(_) => Ok(json::from_json_object(json)),
            _ => Err(DeserializeError::malformed(
                self.data_type(),
                "expected a JSON object",
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
            MetaValue::Object(map) => json::object_to_json(map).map(|j| j.to_string()),
            _ => None,
        }
    }
}
