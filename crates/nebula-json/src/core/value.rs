//! The value stored inside JSON containers
//!
//! Every variant here is JSON-safe. Values only get in through the
//! [`gate`](crate::gate::gate), which canonicalizes host-native types first,
//! so no other shape can ever reach container storage.

use crate::collections::{JsonArray, JsonObject};
use crate::core::kind::JsonKind;
use crate::core::number::Number;

/// A gated JSON value
#[derive(Debug, Clone, PartialEq, Default)]
pub enum JsonValue {
    /// JSON null
    #[default]
    Null,

    /// Boolean value
    Bool(bool),

    /// Integer or floating point number
    Number(Number),

    /// UTF-8 string
    String(String),

    /// Single character, written as a one-character string
    Char(char),

    /// Shared handle to an object container
    Object(JsonObject),

    /// Shared handle to an array container
    Array(JsonArray),
}

impl JsonValue {
    // ==================== Type queries ====================

    /// Get the kind of this value
    #[inline]
    #[must_use]
    pub fn kind(&self) -> JsonKind {
        match self {
            Self::Null => JsonKind::Null,
            Self::Bool(_) => JsonKind::Boolean,
            Self::Number(_) => JsonKind::Number,
            Self::String(_) => JsonKind::String,
            Self::Char(_) => JsonKind::Char,
            Self::Object(_) => JsonKind::Object,
            Self::Array(_) => JsonKind::Array,
        }
    }

    #[inline]
    #[must_use]
    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    #[inline]
    #[must_use]
    pub fn is_object(&self) -> bool {
        matches!(self, Self::Object(_))
    }

    #[inline]
    #[must_use]
    pub fn is_array(&self) -> bool {
        matches!(self, Self::Array(_))
    }

    // ==================== Accessors ====================

    #[inline]
    #[must_use]
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(b) => Some(*b),
            _ => None,
        }
    }

    #[inline]
    #[must_use]
    pub fn as_number(&self) -> Option<Number> {
        match self {
            Self::Number(n) => Some(*n),
            _ => None,
        }
    }

    #[inline]
    #[must_use]
    pub fn as_i64(&self) -> Option<i64> {
        self.as_number().and_then(|n| n.as_i64())
    }

    #[inline]
    #[must_use]
    pub fn as_f64(&self) -> Option<f64> {
        self.as_number().map(|n| n.as_f64())
    }

    /// Try to get as string slice
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(s) => Some(s),
            _ => None,
        }
    }

    #[inline]
    #[must_use]
    pub fn as_char(&self) -> Option<char> {
        match self {
            Self::Char(c) => Some(*c),
            _ => None,
        }
    }

    /// Try to get the object handle (shares storage with this value)
    #[inline]
    #[must_use]
    pub fn as_object(&self) -> Option<&JsonObject> {
        match self {
            Self::Object(o) => Some(o),
            _ => None,
        }
    }

    /// Try to get the array handle (shares storage with this value)
    #[inline]
    #[must_use]
    pub fn as_array(&self) -> Option<&JsonArray> {
        match self {
            Self::Array(a) => Some(a),
            _ => None,
        }
    }

    // ==================== Copying ====================

    /// Deep copy: nested containers are freshly allocated.
    ///
    /// `Clone` on the other hand only clones container handles, so the clone
    /// and the original keep sharing nested storage.
    #[must_use]
    pub fn deep_copy(&self) -> Self {
        match self {
            Self::Object(o) => Self::Object(o.copy()),
            Self::Array(a) => Self::Array(a.copy()),
            other => other.clone(),
        }
    }
}

// ==================== From implementations ====================
//
// Only JSON-native types convert directly. Everything else goes through
// `Source` and the gate.

impl From<bool> for JsonValue {
    fn from(v: bool) -> Self {
        Self::Bool(v)
    }
}

macro_rules! from_number {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for JsonValue {
                fn from(v: $ty) -> Self {
                    Self::Number(Number::from(v))
                }
            }
        )*
    };
}

from_number!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize, f32, f64);

impl From<Number> for JsonValue {
    fn from(v: Number) -> Self {
        Self::Number(v)
    }
}

impl From<String> for JsonValue {
    fn from(v: String) -> Self {
        Self::String(v)
    }
}

impl From<&str> for JsonValue {
    fn from(v: &str) -> Self {
        Self::String(v.to_owned())
    }
}

impl From<char> for JsonValue {
    fn from(v: char) -> Self {
        Self::Char(v)
    }
}

impl From<JsonObject> for JsonValue {
    fn from(v: JsonObject) -> Self {
        Self::Object(v)
    }
}

impl From<JsonArray> for JsonValue {
    fn from(v: JsonArray) -> Self {
        Self::Array(v)
    }
}
