//! Per-handler contract matrix: tag, acceptance, rejection, round trip,
//! projections in both policy modes, and the idempotence flag.

mod common;

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use chrono::DateTime;
use indexmap::IndexMap;

use common::{sample_codecs, sample_resolver, SampleSerializable};
use metaval::{
    ArrayHandler, BooleanHandler, DateTimeHandler, EntityRef, FloatHandler, IntegerHandler,
    MetaArray, MetaValue, ModelCollectionHandler, ModelHandler, NullHandler, NumericValue,
    ObjectHandler, ResourceHandle, SerializableHandler, SerializableValue, SerializeError,
    SerializeHandler, StringHandler, TypeHandler,
};

struct HandlerCase {
    name: &'static str,
    handler: Box<dyn TypeHandler>,
    type_tag: &'static str,
    value: MetaValue,
    /// What the round trip must reproduce; `None` means the value itself.
    roundtrip: Option<MetaValue>,
    invalid: Vec<MetaValue>,
    numeric: Option<NumericValue>,
    string_simple: Option<String>,
    string_complex: Option<String>,
    idempotent: bool,
}

fn sample_array() -> MetaValue {
    let mut arr = MetaArray::new();
    arr.insert("foo", MetaValue::Array(MetaArray::from(vec!["bar".into()])));
    arr.push(MetaValue::Str("baz".into()));
    MetaValue::Array(arr)
}

fn sample_object() -> MetaValue {
    let mut map = IndexMap::new();
    map.insert("foo".to_owned(), MetaValue::Str("bar".into()));
    map.insert("baz".to_owned(), MetaValue::Int(3));
    MetaValue::Object(map)
}

fn empty_object() -> MetaValue {
    MetaValue::Object(IndexMap::new())
}

fn empty_array() -> MetaValue {
    MetaValue::Array(MetaArray::new())
}

fn cases() -> Vec<HandlerCase> {
    let date_string = "2017-01-01 00:00:00.000000+0000";
    let datetime = DateTime::parse_from_str(date_string, "%Y-%m-%d %H:%M:%S%.6f%z")
        .expect("fixture datetime");

    let sample = SerializableValue::new(SampleSerializable::new(&[("foo", "bar")]));
    let sample_form = format!("sample:{}", STANDARD.encode(sample.encode()));

    let mut serialized_value = MetaArray::new();
    serialized_value.insert("foo", MetaValue::Str("bar".into()));
    serialized_value.insert("baz", MetaValue::Array(MetaArray::from(vec![MetaValue::Int(3)])));

    vec![
        HandlerCase {
            name: "array",
            handler: Box::new(ArrayHandler),
            type_tag: "array",
            value: sample_array(),
            roundtrip: None,
            invalid: vec![empty_object()],
            numeric: None,
            string_simple: None,
            string_complex: Some(r#"{"foo":["bar"],"0":"baz"}"#.to_owned()),
            idempotent: true,
        },
        HandlerCase {
            name: "boolean",
            handler: Box::new(BooleanHandler),
            type_tag: "boolean",
            value: MetaValue::Bool(true),
            roundtrip: None,
            invalid: vec![
                MetaValue::Int(1),
                MetaValue::Int(0),
                MetaValue::Str(String::new()),
                empty_array(),
                MetaValue::Null,
            ],
            numeric: Some(NumericValue::Int(1)),
            string_simple: Some("true".to_owned()),
            string_complex: Some("true".to_owned()),
            idempotent: true,
        },
        HandlerCase {
            name: "datetime",
            handler: Box::new(DateTimeHandler),
            type_tag: "datetime",
            value: MetaValue::DateTime(datetime),
            roundtrip: None,
            invalid: vec![MetaValue::Int(2017), MetaValue::Str("2017-01-01".into())],
            numeric: Some(NumericValue::Int(1483228800)),
            string_simple: Some(date_string.to_owned()),
            string_complex: Some(date_string.to_owned()),
            idempotent: true,
        },
        HandlerCase {
            name: "float",
            handler: Box::new(FloatHandler),
            type_tag: "float",
            value: MetaValue::Float(1.1),
            roundtrip: None,
            invalid: vec![MetaValue::Str("1.1".into()), MetaValue::Int(1)],
            numeric: Some(NumericValue::Float(1.1)),
            string_simple: Some("1.1".to_owned()),
            string_complex: Some("1.1".to_owned()),
            idempotent: true,
        },
        HandlerCase {
            name: "integer",
            handler: Box::new(IntegerHandler),
            type_tag: "integer",
            value: MetaValue::Int(3),
            roundtrip: None,
            invalid: vec![MetaValue::Float(1.1), MetaValue::Str("1".into())],
            numeric: Some(NumericValue::Int(3)),
            string_simple: Some("3".to_owned()),
            string_complex: Some("3".to_owned()),
            idempotent: true,
        },
        HandlerCase {
            name: "model",
            handler: Box::new(ModelHandler::new(sample_resolver())),
            type_tag: "model",
            value: MetaValue::Model(EntityRef::unsaved("sample_entity")),
            roundtrip: None,
            invalid: vec![empty_object()],
            numeric: None,
            string_simple: Some("sample_entity".to_owned()),
            string_complex: Some("sample_entity".to_owned()),
            idempotent: true,
        },
        HandlerCase {
            name: "model collection",
            handler: Box::new(ModelCollectionHandler::new(sample_resolver())),
            type_tag: "collection",
            value: MetaValue::Collection(vec![EntityRef::unsaved("sample_entity")]),
            roundtrip: None,
            invalid: vec![empty_array()],
            numeric: None,
            string_simple: None,
            string_complex: None,
            idempotent: true,
        },
        HandlerCase {
            name: "null",
            handler: Box::new(NullHandler),
            type_tag: "null",
            value: MetaValue::Null,
            roundtrip: None,
            invalid: vec![
                MetaValue::Int(0),
                MetaValue::Str(String::new()),
                MetaValue::Str("null".into()),
                empty_array(),
                MetaValue::Bool(false),
            ],
            numeric: None,
            string_simple: None,
            string_complex: None,
            idempotent: true,
        },
        HandlerCase {
            name: "object",
            handler: Box::new(ObjectHandler),
            type_tag: "object",
            value: sample_object(),
            roundtrip: None,
            invalid: vec![empty_array()],
            numeric: None,
            string_simple: None,
            string_complex: Some(r#"{"foo":"bar","baz":3}"#.to_owned()),
            idempotent: true,
        },
        HandlerCase {
            name: "serialized",
            handler: Box::new(SerializeHandler::new(sample_codecs())),
            type_tag: "serialized",
            value: MetaValue::Array(serialized_value),
            roundtrip: None,
            invalid: vec![MetaValue::Resource(ResourceHandle::new(3))],
            numeric: None,
            string_simple: None,
            string_complex: None,
            idempotent: false,
        },
        HandlerCase {
            name: "serializable",
            handler: Box::new(SerializableHandler::new(sample_codecs())),
            type_tag: "serializable",
            value: MetaValue::Serializable(sample),
            roundtrip: None,
            invalid: vec![],
            numeric: None,
            string_simple: None,
            string_complex: Some(sample_form),
            idempotent: true,
        },
        HandlerCase {
            name: "string",
            handler: Box::new(StringHandler),
            type_tag: "string",
            value: MetaValue::Str("foo".into()),
            roundtrip: None,
            invalid: vec![MetaValue::Int(1), MetaValue::Float(1.1)],
            numeric: None,
            string_simple: Some("foo".to_owned()),
            string_complex: Some("foo".to_owned()),
            idempotent: true,
        },
        HandlerCase {
            name: "long-string",
            handler: Box::new(StringHandler),
            type_tag: "string",
            value: MetaValue::Str("a".repeat(300)),
            roundtrip: Some(MetaValue::Str("a".repeat(255))),
            invalid: vec![MetaValue::Int(1), MetaValue::Float(1.1)],
            numeric: None,
            string_simple: Some("a".repeat(255)),
            string_complex: Some("a".repeat(255)),
            idempotent: true,
        },
        HandlerCase {
            name: "numeric-string",
            handler: Box::new(StringHandler),
            type_tag: "string",
            value: MetaValue::Str("1.2345".into()),
            roundtrip: None,
            invalid: vec![MetaValue::Int(1), MetaValue::Float(1.1)],
            numeric: Some(NumericValue::Float(1.2345)),
            string_simple: Some("1.2345".to_owned()),
            string_complex: Some("1.2345".to_owned()),
            idempotent: true,
        },
    ]
}

#[test]
fn handler_contract_matrix() {
    for case in cases() {
        let handler = case.handler.as_ref();
        assert_eq!(handler.data_type(), case.type_tag, "{}: tag", case.name);
        assert!(
            handler.can_handle(&case.value),
            "{}: must accept its own value",
            case.name
        );
        for invalid in &case.invalid {
            assert!(
                !handler.can_handle(invalid),
                "{}: must reject {invalid:?}",
                case.name
            );
        }

        let serialized = handler
            .serialize(&case.value)
            .unwrap_or_else(|e| panic!("{}: serialize failed: {e}", case.name));
        let unserialized = handler
            .unserialize(&serialized)
            .unwrap_or_else(|e| panic!("{}: unserialize failed: {e}", case.name));
        let expected = case.roundtrip.as_ref().unwrap_or(&case.value);
        assert_eq!(&unserialized, expected, "{}: round trip", case.name);

        assert_eq!(
            handler.numeric_value(&case.value),
            case.numeric,
            "{}: numeric projection",
            case.name
        );
        assert_eq!(
            handler.string_value(&case.value, false),
            case.string_simple,
            "{}: simple string projection",
            case.name
        );
        assert_eq!(
            handler.string_value(&case.value, true),
            case.string_complex,
            "{}: complex string projection",
            case.name
        );
        assert_eq!(
            handler.is_idempotent(),
            case.idempotent,
            "{}: idempotence flag",
            case.name
        );
    }
}

#[test]
fn serialize_rejects_values_outside_the_domain() {
    for case in cases() {
        let handler = case.handler.as_ref();
        for invalid in &case.invalid {
            let err = handler
                .serialize(invalid)
                .expect_err("serialize must fail for rejected values");
            assert!(
                matches!(err, SerializeError::UnsupportedValue { .. }),
                "{}: expected UnsupportedValue for {invalid:?}, got {err:?}",
                case.name
            );
        }
    }
}

#[test]
fn truncated_round_trip_is_stable() {
    let handler = StringHandler;
    let truncated = handler
        .unserialize(&handler.serialize(&MetaValue::Str("a".repeat(300))).unwrap())
        .unwrap();
    let again = handler
        .unserialize(&handler.serialize(&truncated).unwrap())
        .unwrap();
    assert_eq!(truncated, again);
}
