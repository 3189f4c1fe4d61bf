//! Pluggable value-serialization layer.
//!
//! Given an arbitrary runtime value, the registry determines its semantic
//! type, converts it to a storable string form, and converts it back to an
//! equivalent value. Handlers also derive two secondary representations
//! for indexing — a numeric projection and a string projection — and
//! report whether their round trip is lossless.
//!
//! The moving parts:
//! - [`MetaValue`]: the tagged union of every storable value.
//! - [`TypeHandler`]: the contract each of the twelve handlers satisfies.
//! - [`HandlerRegistry`]: first-match-wins ordered dispatch plus
//!   tag-to-handler lookup for deserialization.
//! - [`Config`]: the single complex-indexing policy flag, read at
//!   projection time only.
//!
//! Handlers and the registry are immutable after construction and safe to
//! share across threads without locking; no operation blocks or performs
//! I/O.

mod binary;
mod config;
mod error;
mod handler;
mod handlers;
mod record;
mod registry;
mod resolve;
mod value;

pub use binary::{BinaryDecoder, BinaryEncoder, BinaryError};
pub use config::Config;
pub use error::{
    CodecError, DeserializeError, DispatchError, MetaError, ReferenceError, SerializeError,
};
pub use handler::{SerializedForm, TypeHandler};
pub use handlers::{
    ArrayHandler, BooleanHandler, DateTimeHandler, FloatHandler, IntegerHandler,
    ModelCollectionHandler, ModelHandler, NullHandler, ObjectHandler, SerializableHandler,
    SerializeHandler, StringHandler, STRING_VALUE_MAX_LENGTH,
};
pub use record::MetaRecord;
pub use registry::HandlerRegistry;
pub use resolve::ReferenceResolver;
pub use value::{
    ArrayKey, CodecRegistry, EntityKey, EntityRef, MetaArray, MetaValue, NumericValue,
    ResourceHandle, Serializable, SerializableValue,
};
