//! Handler for ordered collections of entity references.

use std::sync::Arc;

use serde_json::{Map, Value};

use crate::error::{DeserializeError, SerializeError};
use crate::handler::{SerializedForm, TypeHandler};
use crate::resolve::ReferenceResolver;
use crate::value::{EntityKey, EntityRef, MetaValue, NumericValue};

/// Stores a collection as a JSON array of `{"type", "key"}` pairs and
/// resolves every element on the way back.
///
/// Elements are individual entity references by construction; a collection
/// cannot nest another collection. Collections are never projected as text
/// or as a number.
pub struct ModelCollectionHandler {
    resolver: Arc<dyn ReferenceResolver>,
}

impl ModelCollectionHandler {
    pub fn new(resolver: Arc<dyn ReferenceResolver>) -> Self {
        Self { resolver }
    }

    fn entity_to_json(&self, entity: &EntityRef) -> Value {
        let (type_tag, key) = self.resolver.identify(entity);
        let mut pair = Map::new();
        pair.insert("type".to_owned(), Value::String(type_tag));
        let key = match key {
            Some(EntityKey::Int(i)) => Value::from(i),
            Some(EntityKey::Str(s)) => Value::String(s),
            None => Value::Null,
        };
        pair.insert("key".to_owned(), key);
        Value::Object(pair)
    }

    fn entity_from_json(&self, element: &Value) -> Result<EntityRef, DeserializeError> {
        let pair = element.as_object().ok_or_else(|| {
            DeserializeError::malformed(self.data_type(), "expected an object element")
        })?;
        let type_tag = pair.get("type").and_then(Value::as_str).ok_or_else(|| {
            DeserializeError::malformed(self.data_type(), "element is missing a `type` tag")
        })?;
        let key = match pair.get("key") {
            None | Some(Value::Null) => None,
            Some(Value::Number(n)) => match n.as_i64() {
                Some(i) => Some(EntityKey::Int(i)),
                None => {
                    return Err(DeserializeError::malformed(
                        self.data_type(),
                        format!("element key {n} is not an integer"),
                    ))
                }
            },
            Some(Value::String(s)) => Some(EntityKey::Str(s.clone())),
            Some(other) => {
                return Err(DeserializeError::malformed(
                    self.data_type(),
                    format!("unsupported element key {other}"),
                ))
            }
        };
        Ok(self.resolver.resolve(type_tag, key.as_ref())?)
    }
}

impl TypeHandler for ModelCollectionHandler {
    fn data_type(&self) -> &'static str {
        "collection"
    }

    fn can_handle(&self, value: &MetaValue) -> bool {
        matches!(value, MetaValue::Collection(_))
    }

    fn serialize(&self, value: &MetaValue) -> Result<SerializedForm, SerializeError> {
        match value {
            MetaValue::Collection(items) => {
                let elements: Vec<Value> =
                    items.iter().map(|e| self.entity_to_json(e)).collect();
                Ok(Value::Array(elements).to_string())
            }
            other => Err(SerializeError::unsupported(self.data_type(), other)),
        }
    }

    fn unserialize(&self, form: &str) -> Result<MetaValue, DeserializeError> {
        let json: Value = serde_json::from_str(form)?;
        let elements = json.as_array().ok_or_else(|| {
            DeserializeError::malformed(self.data_type(), "expected a JSON array")
        })?;
        let items = elements
            .iter()
            .map(|e| self.entity_from_json(e))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(MetaValue::Collection(items))
    }

    fn numeric_value(&self, _value: &MetaValue) -> Option<NumericValue> {
        None
    }

    fn string_value(&self, _value: &MetaValue, _index_complex_types: bool) -> Option<String> {
        None
    }
}

impl std::fmt::Debug for ModelCollectionHandler {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ModelCollectionHandler").finish()
    }
}
