//! Binary value decoder.

use chrono::{DateTime, FixedOffset};
use indexmap::IndexMap;

use super::constants::*;
use super::BinaryError;
use crate::value::{ArrayKey, CodecRegistry, EntityKey, EntityRef, MetaArray, MetaValue};

/// Decodes the self-describing binary form back into a value.
///
/// Embedded custom-serializable payloads are rehydrated through the codec
/// registry the decoder is constructed with.
pub struct BinaryDecoder<'a> {
    data: &'a [u8],
    x: usize,
    codecs: &'a CodecRegistry,
}

impl<'a> BinaryDecoder<'a> {
    pub fn new(data: &'a [u8], codecs: &'a CodecRegistry) -> Self {
        Self { data, x: 0, codecs }
    }

    /// Decodes exactly one value; trailing bytes are an error.
    pub fn decode(&mut self) -> Result<MetaValue, BinaryError> {
        let value = self.read_any()?;
        if self.x != self.data.len() {
            return Err(BinaryError::TrailingBytes);
        }
        Ok(value)
    }

    fn read_any(&mut self) -> Result<MetaValue, BinaryError> {
        let offset = self.x;
        let tag = self.read_u8()?;
        match tag {
            TAG_NULL => Ok(MetaValue::Null),
            TAG_FALSE => Ok(MetaValue::Bool(false)),
            TAG_TRUE => Ok(MetaValue::Bool(true)),
            TAG_INT => Ok(MetaValue::Int(self.read_i64()?)),
            TAG_FLOAT => {
                let bits = u64::from_be_bytes(self.take(8)?.try_into().unwrap_or_default());
                Ok(MetaValue::Float(f64::from_bits(bits)))
            }
            TAG_STR => Ok(MetaValue::Str(self.read_str()?)),
            TAG_DATETIME => {
                let secs = self.read_i64()?;
                let micros = self.read_u32()?;
                let offset_secs =
                    i32::from_be_bytes(self.take(4)?.try_into().unwrap_or_default());
                let tz = FixedOffset::east_opt(offset_secs).ok_or(BinaryError::InvalidDateTime)?;
                if micros >= 1_000_000 {
                    return Err(BinaryError::InvalidDateTime);
                }
                let utc = DateTime::from_timestamp(secs, micros * 1000)
                    .ok_or(BinaryError::InvalidDateTime)?;
                Ok(MetaValue::DateTime(utc.with_timezone(&tz)))
            }
            TAG_ARRAY => {
                let count = self.read_u32()? as usize;
                let mut arr = MetaArray::new();
                for _ in 0..count {
                    let key = match self.read_u8()? {
                        KEY_INT => ArrayKey::Int(self.read_i64()?),
                        KEY_STR => ArrayKey::Str(self.read_str()?),
                        other => {
                            return Err(BinaryError::InvalidTag {
                                tag: other,
                                offset: self.x - 1,
                            })
                        }
                    };
                    let value = self.read_any()?;
                    arr.insert(key, value);
                }
                Ok(MetaValue::Array(arr))
            }
            TAG_OBJECT => {
                let count = self.read_u32()? as usize;
                let mut map = IndexMap::new();
                for _ in 0..count {
                    let key = self.read_str()?;
                    let value = self.read_any()?;
                    map.insert(key, value);
                }
                Ok(MetaValue::Object(map))
            }
            TAG_MODEL => Ok(MetaValue::Model(self.read_entity()?)),
            TAG_COLLECTION => {
                let count = self.read_u32()? as usize;
                let mut items = Vec::with_capacity(count.min(4096));
                for _ in 0..count {
                    items.push(self.read_entity()?);
                }
                Ok(MetaValue::Collection(items))
            }
            TAG_SERIALIZABLE => {
                let kind = self.read_str()?;
                let len = self.read_u32()? as usize;
                let payload = self.take(len)?;
                let value = self.codecs.decode(&kind, payload)?;
                Ok(MetaValue::Serializable(value))
            }
            other => Err(BinaryError::InvalidTag { tag: other, offset }),
        }
    }

    fn read_entity(&mut self) -> Result<EntityRef, BinaryError> {
        let type_tag = self.read_str()?;
        let key = match self.read_u8()? {
            ENTITY_KEY_NONE => None,
            ENTITY_KEY_INT => Some(EntityKey::Int(self.read_i64()?)),
            ENTITY_KEY_STR => Some(EntityKey::Str(self.read_str()?)),
            other => {
                return Err(BinaryError::InvalidTag {
                    tag: other,
                    offset: self.x - 1,
                })
            }
        };
        Ok(EntityRef { type_tag, key })
    }

    fn take(&mut self, n: usize) -> Result<&'a [u8], BinaryError> {
        if self.x + n > self.data.len() {
            return Err(BinaryError::UnexpectedEof);
        }
        let slice = &self.data[self.x..self.x + n];
        self.x += n;
        Ok(slice)
    }

    fn read_u8(&mut self) -> Result<u8, BinaryError> {
        let slice = self.take(1)?;
        Ok(slice[0])
    }

    fn read_u32(&mut self) -> Result<u32, BinaryError> {
        let slice = self.take(4)?;
        Ok(u32::from_be_bytes(slice.try_into().unwrap_or_default()))
    }

    fn read_i64(&mut self) -> Result<i64, BinaryError> {
        let slice = self.take(8)?;
        Ok(i64::from_be_bytes(slice.try_into().unwrap_or_default()))
    }

    fn read_str(&mut self) -> Result<String, BinaryError> {
        let len = self.read_u32()? as usize;
        let bytes = self.take(len)?;
        String::from_utf8(bytes.to_vec()).map_err(|_| BinaryError::InvalidUtf8)
    }
}
