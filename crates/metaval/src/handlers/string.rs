//! Handler for string values.

use crate::error::{DeserializeError, SerializeError};
use crate::handler::{SerializedForm, TypeHandler};
use crate::value::{MetaValue, NumericValue};

/// Stored and projected strings are capped at this many characters.
pub const STRING_VALUE_MAX_LENGTH: usize = 255;

/// Accepts strict strings; numbers are rejected even when their text form
/// would be identical.
///
/// Values longer than [`STRING_VALUE_MAX_LENGTH`] are truncated, and the
/// truncation applies identically to the storage form and to the string
/// projection — never to only one — so round trips of the truncated form
/// are stable.
#[derive(Debug, Clone, Copy, Default)]
pub struct StringHandler;

impl TypeHandler for StringHandler {
    fn data_type(&self) -> &'static str {
        "string"
    }

    fn can_handle(&self, value: &MetaValue) -> bool {
        matches!(value, MetaValue::Str(_))
    }

    fn serialize(&self, value: &MetaValue) -> Result<SerializedForm, SerializeError> {
        match value {
            MetaValue::Str(s) => Ok(truncate(s)),
            other => Err(SerializeError::unsupported(self.data_type(), other)),
        }
    }

    fn unserialize(&self, form: &str) -> Result<MetaValue, DeserializeError> {
        Ok(MetaValue::Str(form.to_owned()))
    }

    fn numeric_value(&self, value: &MetaValue) -> Option<NumericValue> {
        match value {
            MetaValue::Str(s) if is_numeric_string(s) => {
                s.trim().parse().ok().map(NumericValue::Float)
            }
            _ => None,
        }
    }

    fn string_value(&self, value: &MetaValue, _index_complex_types: bool) -> Option<String> {
        match value {
            MetaValue::Str(s) => Some(truncate(s)),
            _ => None,
        }
    }
}

fn truncate(s: &str) -> String {
    s.chars().take(STRING_VALUE_MAX_LENGTH).collect()
}

/// Strict numeric-string test: optional surrounding ASCII whitespace, an
/// optional sign, then decimal digits with an optional fraction and an
/// optional exponent. At least one digit must be present on either side of
/// the decimal point. Nothing else qualifies; in particular hex, `inf` and
/// `nan` spellings do not.
fn is_numeric_string(s: &str) -> bool {
    let bytes = s.trim_matches([' ', '\t', '\n', '\r', '\x0b', '\x0c']).as_bytes();
    if bytes.is_empty() {
        return false;
    }
    let mut x = 0;
    if bytes[x] == b'+' || bytes[x] == b'-' {
        x += 1;
    }
    let int_digits = count_digits(bytes, &mut x);
    let mut frac_digits = 0;
    if x < bytes.len() && bytes[x] == b'.' {
        x += 1;
        frac_digits = count_digits(bytes, &mut x);
    }
    if int_digits == 0 && frac_digits == 0 {
        return false;
    }
    if x < bytes.len() && (bytes[x] == b'e' || bytes[x] == b'E') {
        x += 1;
        if x < bytes.len() && (bytes[x] == b'+' || bytes[x] == b'-') {
            x += 1;
        }
        if count_digits(bytes, &mut x) == 0 {
            return false;
        }
    }
    x == bytes.len()
}

fn count_digits(bytes: &[u8], x: &mut usize) -> usize {
    let start = *x;
    while *x < bytes.len() && bytes[*x].is_ascii_digit() {
        *x += 1;
    }
    *x - start
}
