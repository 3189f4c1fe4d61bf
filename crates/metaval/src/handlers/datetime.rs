//! Handler for datetime instants.

use chrono::DateTime;

use crate::error::{DeserializeError, SerializeError};
use crate::handler::{SerializedForm, TypeHandler};
use crate::value::{MetaValue, NumericValue};

/// Canonical textual form: date, time with microsecond fraction, explicit
/// offset, e.g. `2017-01-01 00:00:00.000000+0000`.
pub(crate) const DATETIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S%.6f%z";

/// Accepts instants only; timestamps as bare integers and date-like
/// strings belong to other handlers.
#[derive(Debug, Clone, Copy, Default)]
pub struct DateTimeHandler;

impl TypeHandler for DateTimeHandler {
    fn data_type(&self) -> &'static str {
        "datetime"
    }

    fn can_handle(&self, value: &MetaValue) -> bool {
        matches!(value, MetaValue::DateTime(_))
    }

    fn serialize(&self, value: &MetaValue) -> Result<SerializedForm, SerializeError> {
        match value {
            MetaValue::DateTime(dt) => Ok(dt.format(DATETIME_FORMAT).to_string()),
            other => Err(SerializeError::unsupported(self.data_type(), other)),
        }
    }

    fn unserialize(&self, form: &str) -> Result<MetaValue, DeserializeError> {
        // RFC 3339 fallback covers rows written before the canonical format.
        let dt = DateTime::parse_from_str(form, DATETIME_FORMAT)
            .or_else(|_| DateTime::parse_from_rfc3339(form))?;
        Ok(MetaValue::DateTime(dt))
    }

    fn numeric_value(&self, value: &MetaValue) -> Option<NumericValue> {
        match value {
            MetaValue::DateTime(dt) => Some(NumericValue::Int(dt.timestamp())),
            _ => None,
        }
    }

    fn string_value(&self, value: &MetaValue, _index_complex_types: bool) -> Option<String> {
        match value {
            MetaValue::DateTime(dt) => Some(dt.format(DATETIME_FORMAT).to_string()),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn canonical_format_roundtrip() {
        let handler = DateTimeHandler;
        let dt = DateTime::parse_from_str("2017-01-01 00:00:00.000000+0000", DATETIME_FORMAT)
            .unwrap();
        let value = MetaValue::DateTime(dt);
        let form = handler.serialize(&value).unwrap();
        assert_eq!(form, "2017-01-01 00:00:00.000000+0000");
        assert_eq!(handler.unserialize(&form).unwrap(), value);
        assert_eq!(
            handler.numeric_value(&value),
            Some(NumericValue::Int(1483228800))
        );
    }

    #[test]
    fn microseconds_and_offset_survive() {
        let handler = DateTimeHandler;
        let dt = DateTime::parse_from_str("2023-06-15 09:30:01.250000+0200", DATETIME_FORMAT)
            .unwrap();
        let value = MetaValue::DateTime(dt);
        let form = handler.serialize(&value).unwrap();
        assert_eq!(form, "2023-06-15 09:30:01.250000+0200");
        assert_eq!(handler.unserialize(&form).unwrap(), value);
    }

    #[test]
    fn rfc3339_fallback_is_accepted() {
        let handler = DateTimeHandler;
        let value = handler.unserialize("2017-01-01T00:00:00+00:00").unwrap();
        let MetaValue::DateTime(dt) = value else {
            panic!("expected a datetime");
        };
        assert_eq!(dt.timestamp(), 1483228800);
    }

    #[test]
    fn garbage_is_rejected() {
        let handler = DateTimeHandler;
        assert!(handler.unserialize("2017-01-01").is_err());
        assert!(handler.unserialize("not a date").is_err());
    }
}
