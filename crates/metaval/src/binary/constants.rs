//! Wire tags of the binary value encoding.

pub(crate) const TAG_NULL: u8 = 0x00;
pub(crate) const TAG_FALSE: u8 = 0x01;
pub(crate) const TAG_TRUE: u8 = 0x02;
pub(crate) const TAG_INT: u8 = 0x03;
pub(crate) const TAG_FLOAT: u8 = 0x04;
pub(crate) const TAG_STR: u8 = 0x05;
pub(crate) const TAG_DATETIME: u8 = 0x06;
pub(crate) const TAG_ARRAY: u8 = 0x07;
pub(crate) const TAG_OBJECT: u8 = 0x08;
pub(crate) const TAG_MODEL: u8 = 0x09;
pub(crate) const TAG_COLLECTION: u8 = 0x0a;
pub(crate) const TAG_SERIALIZABLE: u8 = 0x0b;

/// Array entry key discriminants.
pub(crate) const KEY_INT: u8 = 0x00;
pub(crate) const KEY_STR: u8 = 0x01;

/// Entity key discriminants.
pub(crate) const ENTITY_KEY_NONE: u8 = 0x00;
pub(crate) const ENTITY_KEY_INT: u8 = 0x01;
pub(crate) const ENTITY_KEY_STR: u8 = 0x02;
