//! Value kinds for stored JSON values.

use core::fmt::{Display, Formatter};

/// Classification of a stored [`JsonValue`](crate::JsonValue)
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum JsonKind {
    Null,
    Boolean,
    Number,
    String,
    Char,
    Object,
    Array,
}

impl JsonKind {
    /// Get the kind name
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Null => "null",
            Self::Boolean => "boolean",
            Self::Number => "number",
            Self::String => "string",
            Self::Char => "char",
            Self::Object => "object",
            Self::Array => "array",
        }
    }
}

impl Display for JsonKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.name())
    }
}
