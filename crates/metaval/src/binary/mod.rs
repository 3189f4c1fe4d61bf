//! Self-describing binary encoding of values.
//!
//! Backs the opaque-serialized handler: any value that does not contain an
//! open resource encodes to a compact byte form (tag byte, big-endian
//! fixed-width scalars, u32-length-prefixed payloads) and decodes back to a
//! structurally-equal value. Custom-serializable payloads are embedded with
//! their kind and rehydrated through the codec registry on decode.

mod constants;
mod decoder;
mod encoder;
mod error;

pub use decoder::BinaryDecoder;
pub use encoder::BinaryEncoder;
pub use error::BinaryError;
