#![allow(dead_code)]

//! Shared fixtures: a sample custom-serializable type and a resolver
//! double standing in for the host object model.

use std::sync::Arc;

use metaval::{
    CodecRegistry, Config, EntityKey, EntityRef, HandlerRegistry, ReferenceError,
    ReferenceResolver, Serializable, SerializableValue,
};

/// Custom-serializable test type: an ordered list of string fields with a
/// trivial line-oriented encoding.
#[derive(Debug, Clone, PartialEq)]
pub struct SampleSerializable {
    pub fields: Vec<(String, String)>,
}

impl SampleSerializable {
    pub fn new(fields: &[(&str, &str)]) -> Self {
        Self {
            fields: fields
                .iter()
                .map(|(k, v)| ((*k).to_owned(), (*v).to_owned()))
                .collect(),
        }
    }
}

impl Serializable for SampleSerializable {
    fn kind(&self) -> &'static str {
        "sample"
    }

    fn encode(&self) -> Vec<u8> {
        self.fields
            .iter()
            .map(|(k, v)| format!("{k}={v}"))
            .collect::<Vec<_>>()
            .join("\n")
            .into_bytes()
    }
}

fn decode_sample(payload: &[u8]) -> Result<SerializableValue, String> {
    let text = std::str::from_utf8(payload).map_err(|e| e.to_string())?;
    let mut fields = Vec::new();
    for line in text.lines() {
        let (k, v) = line
            .split_once('=')
            .ok_or_else(|| format!("bad field line `{line}`"))?;
        fields.push((k.to_owned(), v.to_owned()));
    }
    Ok(SerializableValue::new(SampleSerializable { fields }))
}

pub fn sample_codecs() -> Arc<CodecRegistry> {
    let mut codecs = CodecRegistry::new();
    codecs.register("sample", decode_sample);
    Arc::new(codecs)
}

/// Resolver double: hands back the identity it was asked for, except the
/// `missing` type, which always fails.
pub struct SampleResolver;

impl ReferenceResolver for SampleResolver {
    fn resolve(
        &self,
        type_tag: &str,
        key: Option<&EntityKey>,
    ) -> Result<EntityRef, ReferenceError> {
        if type_tag == "missing" {
            return Err(ReferenceError {
                type_tag: type_tag.to_owned(),
                key: key.cloned(),
                reason: "unknown entity type".to_owned(),
            });
        }
        Ok(EntityRef {
            type_tag: type_tag.to_owned(),
            key: key.cloned(),
        })
    }
}

pub fn sample_resolver() -> Arc<SampleResolver> {
    Arc::new(SampleResolver)
}

pub fn default_registry() -> HandlerRegistry {
    HandlerRegistry::with_default_handlers(sample_resolver(), sample_codecs(), Config::default())
}
