//! Shared conversions between values and JSON trees.
//!
//! Two decode modes exist because the array and object handlers read the
//! same JSON shapes back differently: in assoc mode every JSON object is a
//! keyed array; in object mode JSON objects stay generic objects and JSON
//! arrays become plain lists.

use indexmap::IndexMap;
use serde_json::{Map, Value};

use crate::value::{ArrayKey, MetaArray, MetaValue};

/// Encodes an array, keeping key types: a list-shaped array becomes a JSON
/// array, anything else a JSON object with stringified keys. `None` when
/// the tree contains a value JSON cannot represent.
pub(crate) fn array_to_json(arr: &MetaArray) -> Option<Value> {
    if arr.is_list() {
        let items = arr
            .values()
            .map(assoc_value_to_json)
            .collect::<Option<Vec<_>>>()?;
        return Some(Value::Array(items));
    }
    let mut map = Map::new();
    for (key, value) in arr.entries() {
        map.insert(key.to_string(), assoc_value_to_json(value)?);
    }
    Some(Value::Object(map))
}

/// Encodes a generic object's attributes. `None` when an attribute holds a
/// value JSON cannot represent in object mode.
pub(crate) fn object_to_json(map: &IndexMap<String, MetaValue>) -> Option<Value> {
    let mut out = Map::new();
    for (key, value) in map {
        out.insert(key.clone(), object_value_to_json(value)?);
    }
    Some(Value::Object(out))
}

/// Assoc-mode encoding: scalars plus nested arrays. Generic objects are not
/// representable here because assoc-mode decoding would turn them back into
/// keyed arrays.
fn assoc_value_to_json(value: &MetaValue) -> Option<Value> {
    match value {
        MetaValue::Null => Some(Value::Null),
        MetaValue::Bool(b) => Some(Value::Bool(*b)),
        MetaValue::Int(i) => Some(Value::from(*i)),
        MetaValue::Float(f) => serde_json::Number::from_f64(*f).map(Value::Number),
        MetaValue::Str(s) => Some(Value::String(s.clone())),
        MetaValue::Array(arr) => array_to_json(arr),
        _ => None,
    }
}

/// Object-mode encoding: scalars, nested objects, and list-shaped arrays.
/// Keyed arrays are not representable because object-mode decoding reads a
/// JSON object back as a generic object.
fn object_value_to_json(value: &MetaValue) -> Option<Value> {
    match value {
        MetaValue::Null => Some(Value::Null),
        MetaValue::Bool(b) => Some(Value::Bool(*b)),
        MetaValue::Int(i) => Some(Value::from(*i)),
        MetaValue::Float(f) => serde_json::Number::from_f64(*f).map(Value::Number),
        MetaValue::Str(s) => Some(Value::String(s.clone())),
        MetaValue::Array(arr) if arr.is_list() => {
            let items = arr
                .values()
                .map(object_value_to_json)
                .collect::<Option<Vec<_>>>()?;
            Some(Value::Array(items))
        }
        MetaValue::Object(map) => object_to_json(map),
        _ => None,
    }
}

/// Assoc-mode decoding: JSON objects become keyed arrays, keys that spell
/// canonical integers become integer keys.
pub(crate) fn from_json_assoc(value: Value) -> MetaValue {
    match value {
        Value::Null => MetaValue::Null,
        Value::Bool(b) => MetaValue::Bool(b),
        Value::Number(n) => number_to_value(&n),
        Value::String(s) => MetaValue::Str(s),
        Value::Array(items) => {
            MetaValue::Array(items.into_iter().map(from_json_assoc).collect())
        }
        Value::Object(map) => {
            let mut arr = MetaArray::new();
            for (key, value) in map {
                arr.insert(ArrayKey::from_encoded(&key), from_json_assoc(value));
            }
            MetaValue::Array(arr)
        }
    }
}

/// Object-mode decoding: JSON objects stay generic objects, JSON arrays
/// become plain lists.
pub(crate) fn from_json_object(value: Value) -> MetaValue {
    match value {
        Value::Null => MetaValue::Null,
        Value::Bool(b) => MetaValue::Bool(b),
        Value::Number(n) => number_to_value(&n),
        Value::String(s) => MetaValue::Str(s),
        Value::Array(items) => {
            MetaValue::Array(items.into_iter().map(from_json_object).collect())
        }
        Value::Object(map) => {
            let mut out = IndexMap::new();
            for (key, value) in map {
                out.insert(key, from_json_object(value));
            }
            MetaValue::Object(out)
        }
    }
}

fn number_to_value(n: &serde_json::Number) -> MetaValue {
    if let Some(i) = n.as_i64() {
        MetaValue::Int(i)
    } else if let Some(f) = n.as_f64() {
        MetaValue::Float(f)
    } else {
        MetaValue::Null
    }
}
