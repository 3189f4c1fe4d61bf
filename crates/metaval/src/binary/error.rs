//! Binary codec error type.

use thiserror::Error;

use crate::error::CodecError;

#[derive(Debug, Error)]
pub enum BinaryError {
    #[error("open resource handles cannot be encoded")]
    UnencodableResource,
    #[error("unexpected end of input")]
    UnexpectedEof,
    #[error("invalid binary tag 0x{tag:02x} at offset {offset}")]
    InvalidTag { tag: u8, offset: usize },
    #[error("invalid UTF-8 in payload")]
    InvalidUtf8,
    #[error("invalid datetime payload")]
    InvalidDateTime,
    #[error("trailing bytes after value")]
    TrailingBytes,
    #[error(transparent)]
    Codec(#[from] CodecError),
}
