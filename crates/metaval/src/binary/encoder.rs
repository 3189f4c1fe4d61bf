//! Binary value encoder.

use super::constants::*;
use super::BinaryError;
use crate::value::{ArrayKey, EntityKey, EntityRef, MetaValue};

/// Encodes resource-free values into the self-describing binary form.
///
/// All multi-byte quantities are big-endian; strings and byte payloads are
/// uint32-length-prefixed.
pub struct BinaryEncoder {
    out: Vec<u8>,
}

impl Default for BinaryEncoder {
    fn default() -> Self {
        Self::new()
    }
}

impl BinaryEncoder {
    pub fn new() -> Self {
        Self { out: Vec::new() }
    }

    /// Encodes a value and returns the encoded bytes.
    pub fn encode(&mut self, value: &MetaValue) -> Result<Vec<u8>, BinaryError> {
        self.out.clear();
        self.write_any(value)?;
        Ok(std::mem::take(&mut self.out))
    }

    fn write_any(&mut self, value: &MetaValue) -> Result<(), BinaryError> {
        match value {
            MetaValue::Null => self.out.push(TAG_NULL),
            MetaValue::Bool(false) => self.out.push(TAG_FALSE),
            MetaValue::Bool(true) => self.out.push(TAG_TRUE),
            MetaValue::Int(i) => {
                self.out.push(TAG_INT);
                self.write_i64(*i);
            }
            MetaValue::Float(f) => {
                self.out.push(TAG_FLOAT);
                self.out.extend_from_slice(&f.to_bits().to_be_bytes());
            }
            MetaValue::Str(s) => {
                self.out.push(TAG_STR);
                self.write_str(s);
            }
            MetaValue::DateTime(dt) => {
                self.out.push(TAG_DATETIME);
                self.write_i64(dt.timestamp());
                self.write_u32(dt.timestamp_subsec_micros());
                self.out
                    .extend_from_slice(&dt.offset().local_minus_utc().to_be_bytes());
            }
            MetaValue::Array(arr) => {
                self.out.push(TAG_ARRAY);
                self.write_u32(arr.len() as u32);
                for (key, value) in arr.entries() {
                    match key {
                        ArrayKey::Int(i) => {
                            self.out.push(KEY_INT);
                            self.write_i64(*i);
                        }
                        ArrayKey::Str(s) => {
                            self.out.push(KEY_STR);
                            self.write_str(s);
                        }
                    }
                    self.write_any(value)?;
                }
            }
            MetaValue::Object(map) => {
                self.out.push(TAG_OBJECT);
                self.write_u32(map.len() as u32);
                for (key, value) in map {
                    self.write_str(key);
                    self.write_any(value)?;
                }
            }
            MetaValue::Model(entity) => {
                self.out.push(TAG_MODEL);
                self.write_entity(entity);
            }
            MetaValue::Collection(items) => {
                self.out.push(TAG_COLLECTION);
                self.write_u32(items.len() as u32);
                for entity in items {
                    self.write_entity(entity);
                }
            }
            MetaValue::Serializable(sv) => {
                self.out.push(TAG_SERIALIZABLE);
                self.write_str(sv.kind());
                let payload = sv.encode();
                self.write_u32(payload.len() as u32);
                self.out.extend_from_slice(&payload);
            }
            MetaValue::Resource(_) => return Err(BinaryError::UnencodableResource),
        }
        Ok(())
    }

    fn write_entity(&mut self, entity: &EntityRef) {
        self.write_str(&entity.type_tag);
        match &entity.key {
            None => self.out.push(ENTITY_KEY_NONE),
            Some(EntityKey::Int(i)) => {
                self.out.push(ENTITY_KEY_INT);
                self.write_i64(*i);
            }
            Some(EntityKey::Str(s)) => {
                self.out.push(ENTITY_KEY_STR);
                self.write_str(s);
            }
        }
    }

    fn write_str(&mut self, s: &str) {
        let bytes = s.as_bytes();
        self.write_u32(bytes.len() as u32);
        self.out.extend_from_slice(bytes);
    }

    fn write_u32(&mut self, val: u32) {
        self.out.extend_from_slice(&val.to_be_bytes());
    }

    fn write_i64(&mut self, val: i64) {
        self.out.extend_from_slice(&val.to_be_bytes());
    }
}
