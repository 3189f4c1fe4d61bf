//! Ordered handler registry and dispatch.

use std::collections::HashMap;
use std::sync::Arc;

use crate::config::Config;
use crate::error::{DispatchError, MetaError};
use crate::handler::TypeHandler;
use crate::handlers::{
    ArrayHandler, BooleanHandler, DateTimeHandler, FloatHandler, IntegerHandler,
    ModelCollectionHandler, ModelHandler, NullHandler, ObjectHandler, SerializableHandler,
    SerializeHandler, StringHandler,
};
use crate::record::MetaRecord;
use crate::resolve::ReferenceResolver;
use crate::value::{CodecRegistry, MetaValue, NumericValue};

/// Immutable, process-wide set of handlers.
///
/// Handler order is significant: domains overlap at the boundary (the
/// opaque-serialized fallback accepts almost everything), and selection
/// scans the list in registration order, returning the first handler whose
/// `can_handle` accepts the value. Narrow, specific domains therefore come
/// before the generic fallbacks.
pub struct HandlerRegistry {
    handlers: Vec<Box<dyn TypeHandler>>,
    by_tag: HashMap<&'static str, usize>,
    config: Config,
}

impl HandlerRegistry {
    /// Builds a registry from an explicit, priority-ordered handler list.
    ///
    /// # Panics
    ///
    /// Panics if two handlers claim the same data type tag. Exactly one
    /// handler owns each tag; violating that is a programmer error, not a
    /// runtime condition.
    pub fn new(handlers: Vec<Box<dyn TypeHandler>>, config: Config) -> Self {
        let mut by_tag = HashMap::with_capacity(handlers.len());
        for (index, handler) in handlers.iter().enumerate() {
            let tag = handler.data_type();
            if by_tag.insert(tag, index).is_some() {
                panic!("duplicate handler registered for data type tag `{tag}`");
            }
        }
        Self {
            handlers,
            by_tag,
            config,
        }
    }

    /// Builds the default registry with the documented priority order:
    /// null, boolean, integer, float, string, datetime, model, collection,
    /// serializable, array, object, serialized.
    ///
    /// The opaque-serialized handler is last on purpose — it accepts any
    /// resource-free value, so every narrower domain must be tried first.
    /// Likewise custom-serializable precedes it so values carrying their
    /// own codec are never swallowed by the generic binary encoding.
    pub fn with_default_handlers(
        resolver: Arc<dyn ReferenceResolver>,
        codecs: Arc<CodecRegistry>,
        config: Config,
    ) -> Self {
        Self::new(
            vec![
                Box::new(NullHandler),
                Box::new(BooleanHandler),
                Box::new(IntegerHandler),
                Box::new(FloatHandler),
                Box::new(StringHandler),
                Box::new(DateTimeHandler),
                Box::new(ModelHandler::new(Arc::clone(&resolver))),
                Box::new(ModelCollectionHandler::new(resolver)),
                Box::new(SerializableHandler::new(Arc::clone(&codecs))),
                Box::new(ArrayHandler),
                Box::new(ObjectHandler),
                Box::new(SerializeHandler::new(codecs)),
            ],
            config,
        )
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Selects the first handler accepting `value`, in priority order.
    pub fn handler_for_value(
        &self,
        value: &MetaValue,
    ) -> Result<&dyn TypeHandler, DispatchError> {
        self.handlers
            .iter()
            .find(|h| h.can_handle(value))
            .map(|h| h.as_ref())
            .ok_or(DispatchError::NoHandlerFound { kind: value.kind() })
    }

    /// Looks up the handler that owns a stored type tag.
    pub fn handler_for_type(&self, tag: &str) -> Result<&dyn TypeHandler, DispatchError> {
        self.by_tag
            .get(tag)
            .map(|&index| self.handlers[index].as_ref())
            .ok_or_else(|| DispatchError::UnknownTypeTag {
                tag: tag.to_owned(),
            })
    }

    /// Serializes `value` with its owning handler into a storable record.
    pub fn serialize(&self, value: &MetaValue) -> Result<MetaRecord, MetaError> {
        let handler = self.handler_for_value(value)?;
        let form = handler.serialize(value)?;
        Ok(MetaRecord::new(handler.data_type(), form))
    }

    /// Reconstructs the value a record was serialized from.
    pub fn unserialize(&self, record: &MetaRecord) -> Result<MetaValue, MetaError> {
        let handler = self.handler_for_type(&record.type_tag)?;
        Ok(handler.unserialize(&record.value)?)
    }

    /// Numeric projection of `value` through its owning handler.
    pub fn numeric_value(&self, value: &MetaValue) -> Result<Option<NumericValue>, DispatchError> {
        Ok(self.handler_for_value(value)?.numeric_value(value))
    }

    /// String projection of `value` through its owning handler, reading the
    /// complex-indexing policy flag at projection time.
    pub fn string_value(&self, value: &MetaValue) -> Result<Option<String>, DispatchError> {
        let index_complex = self.config.index_complex_data_types();
        Ok(self
            .handler_for_value(value)?
            .string_value(value, index_complex))
    }
}
