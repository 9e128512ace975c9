//! Serde bridge for the JSON containers
//!
//! Containers are never handed to a serializer as opaque types: a
//! [`JsonObject`] is unwrapped to its underlying ordered map and a
//! [`JsonArray`] to its underlying sequence, and the generic serde rules
//! take over from there. Stored values have already passed the gate, so no
//! coercion happens here.

use std::fmt;

use indexmap::IndexMap;
use serde::de::{self, Deserialize, Deserializer, MapAccess, SeqAccess, Visitor};
use serde::{Serialize, Serializer};

use crate::collections::{JsonArray, JsonObject};
use crate::core::number::Number;
use crate::core::value::JsonValue;

impl Serialize for JsonObject {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.read().serialize(serializer)
    }
}

impl Serialize for JsonArray {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.read().serialize(serializer)
    }
}

impl Serialize for Number {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.serialize_with(serializer)
    }
}

impl Serialize for JsonValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Null => serializer.serialize_unit(),
            Self::Bool(b) => serializer.serialize_bool(*b),
            Self::Number(n) => n.serialize(serializer),
            Self::String(s) => serializer.serialize_str(s),
            Self::Char(c) => serializer.serialize_char(*c),
            Self::Object(obj) => obj.serialize(serializer),
            Self::Array(arr) => arr.serialize(serializer),
        }
    }
}

impl<'de> Deserialize<'de> for JsonObject {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        IndexMap::<String, JsonValue>::deserialize(deserializer).map(Self::from_entries)
    }
}

impl<'de> Deserialize<'de> for JsonArray {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Vec::<JsonValue>::deserialize(deserializer).map(Self::from_values)
    }
}

impl<'de> Deserialize<'de> for Number {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        match JsonValue::deserialize(deserializer)? {
            JsonValue::Number(n) => Ok(n),
            other => Err(de::Error::invalid_type(
                de::Unexpected::Other(other.kind().name()),
                &"a number",
            )),
        }
    }
}

impl<'de> Deserialize<'de> for JsonValue {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(JsonValueVisitor)
    }
}

struct JsonValueVisitor;

impl<'de> Visitor<'de> for JsonValueVisitor {
    type Value = JsonValue;

    fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str("any valid JSON value")
    }

    fn visit_bool<E: de::Error>(self, v: bool) -> Result<Self::Value, E> {
        Ok(JsonValue::Bool(v))
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<Self::Value, E> {
        Ok(JsonValue::Number(Number::from_i64(v)))
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<Self::Value, E> {
        Ok(JsonValue::Number(Number::from_u64(v)))
    }

    fn visit_f64<E: de::Error>(self, v: f64) -> Result<Self::Value, E> {
        Ok(JsonValue::Number(Number::from_f64(v)))
    }

    fn visit_char<E: de::Error>(self, v: char) -> Result<Self::Value, E> {
        Ok(JsonValue::Char(v))
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<Self::Value, E> {
        Ok(JsonValue::String(v.to_owned()))
    }

    fn visit_string<E: de::Error>(self, v: String) -> Result<Self::Value, E> {
        Ok(JsonValue::String(v))
    }

    fn visit_none<E: de::Error>(self) -> Result<Self::Value, E> {
        Ok(JsonValue::Null)
    }

    fn visit_some<D: Deserializer<'de>>(self, deserializer: D) -> Result<Self::Value, D::Error> {
        JsonValue::deserialize(deserializer)
    }

    fn visit_unit<E: de::Error>(self) -> Result<Self::Value, E> {
        Ok(JsonValue::Null)
    }

    fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<Self::Value, A::Error> {
        let mut values = Vec::with_capacity(seq.size_hint().unwrap_or(0));
        while let Some(value) = seq.next_element()? {
            values.push(value);
        }
        Ok(JsonValue::Array(JsonArray::from_values(values)))
    }

    fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Self::Value, A::Error> {
        let mut entries = IndexMap::with_capacity(map.size_hint().unwrap_or(0));
        while let Some((key, value)) = map.next_entry::<String, JsonValue>()? {
            entries.insert(key, value);
        }
        Ok(JsonValue::Object(JsonObject::from_entries(entries)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Source;
    use serde_json::json;

    #[test]
    fn test_serialize_primitives() {
        assert_eq!(serde_json::to_string(&JsonValue::Null).unwrap(), "null");
        assert_eq!(serde_json::to_string(&JsonValue::from(true)).unwrap(), "true");
        assert_eq!(serde_json::to_string(&JsonValue::from(-3i64)).unwrap(), "-3");
        assert_eq!(serde_json::to_string(&JsonValue::from(u64::MAX)).unwrap(), "18446744073709551615");
        assert_eq!(serde_json::to_string(&JsonValue::from(0.5)).unwrap(), "0.5");
        assert_eq!(serde_json::to_string(&JsonValue::from('q')).unwrap(), "\"q\"");
        assert_eq!(serde_json::to_string(&JsonValue::from(f64::NAN)).unwrap(), "null");
    }

    #[test]
    fn test_object_unwraps_to_ordered_map() {
        let obj = JsonObject::new();
        obj.put("z", 1u8).unwrap();
        obj.put("a", Source::list(["x"])).unwrap();

        assert_eq!(serde_json::to_string(&obj).unwrap(), r#"{"z":1,"a":["x"]}"#);
        assert_eq!(serde_json::to_value(&obj).unwrap(), json!({"z": 1, "a": ["x"]}));
    }

    #[test]
    fn test_nested_containers_in_plain_collections() {
        let arr = JsonArray::new();
        arr.add(JsonObject::new()).unwrap();

        let mut plain = std::collections::BTreeMap::new();
        plain.insert("items", arr);
        assert_eq!(serde_json::to_string(&plain).unwrap(), r#"{"items":[{}]}"#);
    }

    #[test]
    fn test_deserialize_value_shapes() {
        let value: JsonValue =
            serde_json::from_str(r#"{"n": -1, "u": 7, "f": 1.5, "s": "x", "l": [null, true]}"#).unwrap();
        let obj = value.as_object().unwrap();

        assert_eq!(obj.keys(), vec!["n", "u", "f", "s", "l"]);
        assert_eq!(obj.get("n"), Some(JsonValue::from(-1i64)));
        assert_eq!(obj.get("u"), Some(JsonValue::from(7u64)));
        assert_eq!(obj.get("f"), Some(JsonValue::from(1.5)));
        assert_eq!(obj.get("s"), Some(JsonValue::from("x")));

        let list = obj.get("l").unwrap();
        assert_eq!(list.as_array().unwrap().values(), vec![JsonValue::Null, JsonValue::Bool(true)]);
    }

    #[test]
    fn test_deserialize_target_shape_mismatch() {
        assert!(serde_json::from_str::<JsonObject>("[1]").is_err());
        assert!(serde_json::from_str::<JsonArray>("{}").is_err());
        assert!(serde_json::from_str::<Number>("\"1\"").is_err());
        assert_eq!(serde_json::from_str::<Number>("12").unwrap(), Number::from(12u8));
    }
}
