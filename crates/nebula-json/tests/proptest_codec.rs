//! Property-based tests for the encode/decode facade

use nebula_json::{Codec, CodecOptions, JsonArray, JsonObject, JsonValue, decode_value, encode, encode_prettily};
use proptest::prelude::*;

/// Arbitrary decodable values: no chars (they come back as strings) and no
/// non-finite floats (they are written as `null`).
fn json_value() -> impl Strategy<Value = JsonValue> {
    let leaf = prop_oneof![
        Just(JsonValue::Null),
        any::<bool>().prop_map(JsonValue::from),
        any::<i64>().prop_map(JsonValue::from),
        any::<u64>().prop_map(JsonValue::from),
        prop::num::f64::NORMAL.prop_map(JsonValue::from),
        ".*".prop_map(JsonValue::from),
    ];

    leaf.prop_recursive(4, 64, 8, |inner| {
        prop_oneof![
            prop::collection::vec(inner.clone(), 0..8)
                .prop_map(|items| JsonValue::Array(items.into_iter().collect::<JsonArray>())),
            prop::collection::vec(("[a-z]{0,6}", inner), 0..8)
                .prop_map(|entries| JsonValue::Object(entries.into_iter().collect::<JsonObject>())),
        ]
    })
}

fn json_object() -> impl Strategy<Value = JsonObject> {
    prop::collection::vec(("[a-z_]{1,8}", json_value()), 0..8)
        .prop_map(|entries| entries.into_iter().collect())
}

proptest! {
    #[test]
    fn encode_decode_roundtrip(value in json_value()) {
        let text = encode(&value).unwrap();
        let decoded: JsonValue = decode_value(&text).unwrap();
        prop_assert_eq!(decoded, value);
    }

    #[test]
    fn object_roundtrip_keeps_key_order(obj in json_object()) {
        let decoded: JsonObject = decode_value(&encode(&obj).unwrap()).unwrap();
        prop_assert_eq!(decoded.keys(), obj.keys());
        prop_assert_eq!(decoded, obj);
    }

    #[test]
    fn pretty_and_compact_decode_alike(value in json_value()) {
        let compact: JsonValue = decode_value(&encode(&value).unwrap()).unwrap();
        let pretty: JsonValue = decode_value(&encode_prettily(&value).unwrap()).unwrap();
        prop_assert_eq!(compact, pretty);
    }

    #[test]
    fn indent_width_only_changes_whitespace(value in json_value(), indent in 0usize..8) {
        let codec = Codec::new(CodecOptions::default().with_indent(indent));
        let pretty = codec.encode_prettily(&value).unwrap();
        let reparsed: serde_json::Value = serde_json::from_str(&pretty).unwrap();
        let compact: serde_json::Value = serde_json::from_str(&encode(&value).unwrap()).unwrap();
        prop_assert_eq!(reparsed, compact);
    }

    #[test]
    fn line_comments_are_ignored_by_default(obj in json_object(), note in "[ -~]{0,20}") {
        let text = format!("// {note}\n{}\n// trailing", encode_prettily(&obj).unwrap());
        let decoded: JsonObject = decode_value(&text).unwrap();
        prop_assert_eq!(decoded, obj);
    }

    #[test]
    fn strict_codec_matches_default_without_comments(value in json_value()) {
        let strict = Codec::new(CodecOptions::strict());
        let text = encode(&value).unwrap();
        let decoded: JsonValue = strict.decode_value(&text).unwrap();
        prop_assert_eq!(decoded, value);
    }
}

#[test]
fn chars_decode_as_strings() {
    let arr = JsonArray::new();
    arr.add('x').unwrap();

    let decoded: JsonArray = decode_value(&encode(&arr).unwrap()).unwrap();
    assert_eq!(decoded.get(0), Some(JsonValue::from("x")));
}

#[test]
fn non_finite_floats_encode_as_null() {
    let arr = JsonArray::new();
    arr.add(f64::INFINITY).unwrap();
    arr.add(f64::NAN).unwrap();
    assert_eq!(encode(&arr).unwrap(), "[null,null]");
}
