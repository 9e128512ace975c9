//! Values offered for insertion into a JSON container
//!
//! [`Source`] enumerates every host-native shape a caller may hand to the
//! gate, including the two shapes it must refuse (arbitrary-precision
//! decimals and opaque values of any other type). Conversions from common
//! Rust types pick the right variant, so `object.put("k", value)` works for
//! strings, numbers, byte buffers, timestamps, maps and lists alike.

use std::any::Any;
use std::borrow::Cow;
use std::collections::{BTreeMap, HashMap};
use std::fmt;
use std::sync::Arc;
use std::time::SystemTime;

use bytes::Bytes;
use chrono::{DateTime, Utc};
use indexmap::IndexMap;
use rust_decimal::Decimal;

use crate::collections::{JsonArray, JsonObject};
use crate::core::number::Number;
use crate::core::value::JsonValue;

/// A value on its way into a JSON container
pub enum Source {
    Null,
    /// Any primitive integer or float
    Number(Number),
    /// Arbitrary-precision decimal. Never accepted by the gate.
    Decimal(Decimal),
    Bool(bool),
    String(String),
    Char(char),
    /// A string-like value that is not a `String` yet
    CharSequence(Box<dyn AsRef<str> + Send + Sync>),
    Object(JsonObject),
    Array(JsonArray),
    /// A plain ordered mapping, wrapped into a [`JsonObject`] by the gate
    Map(IndexMap<String, Source>),
    /// A plain ordered sequence, wrapped into a [`JsonArray`] by the gate
    List(Vec<Source>),
    /// Raw bytes, stored as base64 text
    Bytes(Bytes),
    /// A point on the UTC timeline, stored as an ISO-8601 instant
    Instant(DateTime<Utc>),
    /// A wall-clock reading, stored like [`Source::Instant`]. Kept as-is
    /// because it may lie outside the range `DateTime<Utc>` can represent.
    SystemTime(SystemTime),
    /// Any other value. Never accepted by the gate.
    Opaque {
        type_name: &'static str,
        value: Box<dyn Any + Send + Sync>,
    },
}

impl Source {
    /// Wrap a string-like value
    pub fn char_sequence(value: impl AsRef<str> + Send + Sync + 'static) -> Self {
        Self::CharSequence(Box::new(value))
    }

    /// Wrap a value of a type the model has no mapping for
    pub fn opaque<T: Any + Send + Sync>(value: T) -> Self {
        Self::Opaque {
            type_name: std::any::type_name::<T>(),
            value: Box::new(value),
        }
    }

    /// Build a mapping from key/value pairs
    pub fn map<K, V, I>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<Self>,
    {
        Self::Map(
            entries
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }

    /// Build a sequence from items
    pub fn list<V, I>(items: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<Self>,
    {
        Self::List(items.into_iter().map(Into::into).collect())
    }

    /// Name of the runtime type this source was built from
    #[must_use]
    pub fn type_name(&self) -> &'static str {
        match self {
            Self::Null => "null",
            Self::Number(_) => std::any::type_name::<Number>(),
            Self::Decimal(_) => std::any::type_name::<Decimal>(),
            Self::Bool(_) => "bool",
            Self::String(_) => std::any::type_name::<String>(),
            Self::Char(_) => "char",
            Self::CharSequence(_) => "dyn AsRef<str>",
            Self::Object(_) => std::any::type_name::<JsonObject>(),
            Self::Array(_) => std::any::type_name::<JsonArray>(),
            Self::Map(_) => std::any::type_name::<IndexMap<String, Self>>(),
            Self::List(_) => std::any::type_name::<Vec<Self>>(),
            Self::Bytes(_) => std::any::type_name::<Bytes>(),
            Self::Instant(_) => std::any::type_name::<DateTime<Utc>>(),
            Self::SystemTime(_) => std::any::type_name::<SystemTime>(),
            Self::Opaque { type_name, .. } => *type_name,
        }
    }
}

impl fmt::Debug for Source {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Null => f.write_str("Null"),
            Self::Number(n) => f.debug_tuple("Number").field(n).finish(),
            Self::Decimal(d) => f.debug_tuple("Decimal").field(d).finish(),
            Self::Bool(b) => f.debug_tuple("Bool").field(b).finish(),
            Self::String(s) => f.debug_tuple("String").field(s).finish(),
            Self::Char(c) => f.debug_tuple("Char").field(c).finish(),
            Self::CharSequence(s) => f
                .debug_tuple("CharSequence")
                .field(&(**s).as_ref())
                .finish(),
            Self::Object(o) => f.debug_tuple("Object").field(o).finish(),
            Self::Array(a) => f.debug_tuple("Array").field(a).finish(),
            Self::Map(m) => f.debug_tuple("Map").field(m).finish(),
            Self::List(l) => f.debug_tuple("List").field(l).finish(),
            Self::Bytes(b) => f.debug_tuple("Bytes").field(b).finish(),
            Self::Instant(t) => f.debug_tuple("Instant").field(t).finish(),
            Self::SystemTime(t) => f.debug_tuple("SystemTime").field(t).finish(),
            Self::Opaque { type_name, .. } => {
                f.debug_struct("Opaque").field("type_name", type_name).finish_non_exhaustive()
            }
        }
    }
}

// ==================== From implementations ====================

impl From<()> for Source {
    fn from((): ()) -> Self {
        Self::Null
    }
}

impl<T: Into<Source>> From<Option<T>> for Source {
    fn from(v: Option<T>) -> Self {
        v.map_or(Self::Null, Into::into)
    }
}

impl From<bool> for Source {
    fn from(v: bool) -> Self {
        Self::Bool(v)
    }
}

macro_rules! from_number {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for Source {
                fn from(v: $ty) -> Self {
                    Self::Number(Number::from(v))
                }
            }
        )*
    };
}

from_number!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize, f32, f64);

impl From<Number> for Source {
    fn from(v: Number) -> Self {
        Self::Number(v)
    }
}

impl From<Decimal> for Source {
    fn from(v: Decimal) -> Self {
        Self::Decimal(v)
    }
}

impl From<String> for Source {
    fn from(v: String) -> Self {
        Self::String(v)
    }
}

impl From<&str> for Source {
    fn from(v: &str) -> Self {
        Self::String(v.to_owned())
    }
}

impl From<char> for Source {
    fn from(v: char) -> Self {
        Self::Char(v)
    }
}

impl From<Box<str>> for Source {
    fn from(v: Box<str>) -> Self {
        Self::char_sequence(v)
    }
}

impl From<Arc<str>> for Source {
    fn from(v: Arc<str>) -> Self {
        Self::char_sequence(v)
    }
}

impl From<Cow<'static, str>> for Source {
    fn from(v: Cow<'static, str>) -> Self {
        Self::char_sequence(v)
    }
}

impl From<JsonObject> for Source {
    fn from(v: JsonObject) -> Self {
        Self::Object(v)
    }
}

impl From<JsonArray> for Source {
    fn from(v: JsonArray) -> Self {
        Self::Array(v)
    }
}

impl From<JsonValue> for Source {
    fn from(v: JsonValue) -> Self {
        match v {
            JsonValue::Null => Self::Null,
            JsonValue::Bool(b) => Self::Bool(b),
            JsonValue::Number(n) => Self::Number(n),
            JsonValue::String(s) => Self::String(s),
            JsonValue::Char(c) => Self::Char(c),
            JsonValue::Object(o) => Self::Object(o),
            JsonValue::Array(a) => Self::Array(a),
        }
    }
}

impl From<IndexMap<String, Source>> for Source {
    fn from(v: IndexMap<String, Source>) -> Self {
        Self::Map(v)
    }
}

impl From<BTreeMap<String, Source>> for Source {
    fn from(v: BTreeMap<String, Source>) -> Self {
        Self::Map(v.into_iter().collect())
    }
}

impl From<HashMap<String, Source>> for Source {
    fn from(v: HashMap<String, Source>) -> Self {
        Self::Map(v.into_iter().collect())
    }
}

impl From<Vec<Source>> for Source {
    fn from(v: Vec<Source>) -> Self {
        Self::List(v)
    }
}

impl From<Bytes> for Source {
    fn from(v: Bytes) -> Self {
        Self::Bytes(v)
    }
}

impl From<Vec<u8>> for Source {
    fn from(v: Vec<u8>) -> Self {
        Self::Bytes(Bytes::from(v))
    }
}

impl From<&[u8]> for Source {
    fn from(v: &[u8]) -> Self {
        Self::Bytes(Bytes::copy_from_slice(v))
    }
}

impl From<DateTime<Utc>> for Source {
    fn from(v: DateTime<Utc>) -> Self {
        Self::Instant(v)
    }
}

impl From<SystemTime> for Source {
    fn from(v: SystemTime) -> Self {
        Self::SystemTime(v)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_conversions_pick_variant() {
        assert!(matches!(Source::from(()), Source::Null));
        assert!(matches!(Source::from(None::<i32>), Source::Null));
        assert!(matches!(Source::from(Some(3i32)), Source::Number(_)));
        assert!(matches!(Source::from("s"), Source::String(_)));
        assert!(matches!(Source::from(Arc::<str>::from("s")), Source::CharSequence(_)));
        assert!(matches!(Source::from(vec![1u8, 2]), Source::Bytes(_)));
        assert!(matches!(Source::from(vec![Source::from(1u8)]), Source::List(_)));
        assert!(matches!(Source::from(Decimal::new(15, 1)), Source::Decimal(_)));
        assert!(matches!(Source::from(SystemTime::UNIX_EPOCH), Source::SystemTime(_)));
    }

    #[test]
    fn test_map_and_list_helpers() {
        let Source::Map(map) = Source::map([("b", 1i32), ("a", 2i32)]) else {
            panic!("expected a map");
        };
        assert_eq!(map.keys().collect::<Vec<_>>(), ["b", "a"]);

        let Source::List(list) = Source::list(["x", "y"]) else {
            panic!("expected a list");
        };
        assert_eq!(list.len(), 2);
    }

    #[test]
    fn test_type_names() {
        struct Widget;
        assert!(Source::opaque(Widget).type_name().ends_with("Widget"));
        assert!(Source::from(Decimal::ONE).type_name().ends_with("Decimal"));
        assert_eq!(Source::from('c').type_name(), "char");
    }
}
