//! Boundary to the host object-model's reflection facilities.

use crate::error::ReferenceError;
use crate::value::{EntityKey, EntityRef};

/// Resolves stored identities back to live entity references and reports
/// the identity of live entities.
///
/// Used only by the model-reference and model-collection handlers; the
/// rest of the core never touches it. Implementations own all lookup
/// semantics (existence checks, key coercion, access control); failures
/// propagate through the serialization layer unchanged.
pub trait ReferenceResolver: Send + Sync {
    /// Resolves a type tag and optional key to a live entity reference.
    ///
    /// A `None` key asks for a fresh, unpersisted instance of the type.
    fn resolve(
        &self,
        type_tag: &str,
        key: Option<&EntityKey>,
    ) -> Result<EntityRef, ReferenceError>;

    /// Reports the `(type tag, key)` identity of a live entity.
    fn identify(&self, entity: &EntityRef) -> (String, Option<EntityKey>) {
        (entity.type_tag.clone(), entity.key.clone())
    }
}
