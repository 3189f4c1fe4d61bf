//! The built-in type handlers, one module per declared type.

mod array;
mod boolean;
mod collection;
mod datetime;
mod float;
mod integer;
mod json;
mod model;
mod null;
mod object;
mod serializable;
mod serialize;
mod string;

pub use array::ArrayHandler;
pub use boolean::BooleanHandler;
pub use collection::ModelCollectionHandler;
pub use datetime::DateTimeHandler;
pub use float::FloatHandler;
pub use integer::IntegerHandler;
pub use model::ModelHandler;
pub use null::NullHandler;
pub use object::ObjectHandler;
pub use serializable::SerializableHandler;
pub use serialize::SerializeHandler;
pub use string::{StringHandler, STRING_VALUE_MAX_LENGTH};
