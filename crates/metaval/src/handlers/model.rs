//! Handler for references to externally-owned entities.

use std::sync::Arc;

use crate::error::{DeserializeError, SerializeError};
use crate::handler::{SerializedForm, TypeHandler};
use crate::resolve::ReferenceResolver;
use crate::value::{EntityKey, MetaValue, NumericValue};

/// Stores the identity of an entity as `type` or `type#key` and rehydrates
/// it through the reference resolver. Type tags must not contain `#`.
///
/// The string projection is the type tag in both policy modes; entity
/// contents are owned elsewhere and never indexed here.
pub struct ModelHandler {
    resolver: Arc<dyn ReferenceResolver>,
}

impl ModelHandler {
    pub fn new(resolver: Arc<dyn ReferenceResolver>) -> Self {
        Self { resolver }
    }
}

impl TypeHandler for ModelHandler {
    fn data_type(&self) -> &'static str {
        "model"
    }

    fn can_handle(&self, value: &MetaValue) -> bool {
        matches!(value, MetaValue::Model(_))
    }

    fn serialize(&self, value: &MetaValue) -> Result<SerializedForm, SerializeError> {
        match value {
            MetaValue::Model(entity) => {
                let (type_tag, key) = self.resolver.identify(entity);
                Ok(match key {
                    Some(key) => format!("{type_tag}#{key}"),
                    None => type_tag,
                })
            }
            other => Err(SerializeError::unsupported(self.data_type(), other)),
        }
    }

    fn unserialize(&self, form: &str) -> Result<MetaValue, DeserializeError> {
        if form.is_empty() {
            return Err(DeserializeError::malformed(self.data_type(), "empty type tag"));
        }
        let entity = match form.split_once('#') {
            Some((type_tag, key)) => {
                let key = EntityKey::parse(key);
                self.resolver.resolve(type_tag, Some(&key))?
            }
            None => self.resolver.resolve(form, None)?,
        };
        Ok(MetaValue::Model(entity))
    }

    fn numeric_value(&self, _value: &MetaValue) -> Option<NumericValue> {
        None
    }

    fn string_value(&self, value: &MetaValue, _index_complex_types: bool) -> Option<String> {
        match value {
            MetaValue::Model(entity) => Some(entity.type_tag.clone()),
            _ => None,
        }
    }
}

impl std::fmt::Debug for ModelHandler {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ModelHandler").finish()
    }
}
