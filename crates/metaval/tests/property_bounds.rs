//! Property checks for the projection and codec edges.

use indexmap::IndexMap;
use proptest::prelude::*;

use metaval::{
    BinaryDecoder, BinaryEncoder, CodecRegistry, MetaArray, MetaValue, NumericValue,
    StringHandler, TypeHandler, STRING_VALUE_MAX_LENGTH,
};

/// Resource-free, NaN-free value trees for exact round-trip comparison.
fn arb_value() -> impl Strategy<Value = MetaValue> {
    let leaf = prop_oneof![
        Just(MetaValue::Null),
        any::<bool>().prop_map(MetaValue::Bool),
        any::<i64>().prop_map(MetaValue::Int),
        prop::num::f64::NORMAL.prop_map(MetaValue::Float),
        ".{0,24}".prop_map(MetaValue::Str),
    ];
    leaf.prop_recursive(3, 48, 6, |inner| {
        prop_oneof![
            prop::collection::vec(inner.clone(), 0..6)
                .prop_map(|items| MetaValue::Array(MetaArray::from(items))),
            prop::collection::vec((".{0,12}", inner), 0..6).prop_map(|pairs| {
                let mut map = IndexMap::new();
                for (key, value) in pairs {
                    map.insert(key, value);
                }
                MetaValue::Object(map)
            }),
        ]
    })
}

proptest! {
    #[test]
    fn truncation_is_bounded_and_prefixing(s in ".{0,400}") {
        let handler = StringHandler;
        let value = MetaValue::Str(s.clone());
        let stored = handler.serialize(&value).unwrap();
        prop_assert!(stored.chars().count() <= STRING_VALUE_MAX_LENGTH);
        prop_assert!(s.starts_with(&stored));
        // Storage form and projection truncate identically.
        prop_assert_eq!(handler.string_value(&value, false), Some(stored.clone()));
        prop_assert_eq!(handler.string_value(&value, true), Some(stored));
    }

    #[test]
    fn numeric_scanner_is_total_and_agrees_with_float_parsing(s in ".{0,40}") {
        let handler = StringHandler;
        match handler.numeric_value(&MetaValue::Str(s.clone())) {
            Some(NumericValue::Float(f)) => {
                let parsed: f64 = s.trim().parse().expect("accepted strings must parse");
                prop_assert_eq!(f.to_bits(), parsed.to_bits());
            }
            Some(other) => prop_assert!(false, "unexpected projection {:?}", other),
            None => {}
        }
    }

    #[test]
    fn binary_codec_round_trips_value_trees(value in arb_value()) {
        let bytes = BinaryEncoder::new().encode(&value).unwrap();
        let codecs = CodecRegistry::new();
        let back = BinaryDecoder::new(&bytes, &codecs).decode().unwrap();
        prop_assert_eq!(back, value);
    }
}
