//! Integer-or-float numbers stored in JSON containers
//!
//! Integers keep their exact value; the encoder decides how each
//! representation is written. Arbitrary-precision decimals are deliberately
//! not representable here (see [`Source::Decimal`](crate::Source::Decimal)).

use std::fmt;

/// A JSON number
///
/// Normalized on construction: non-negative integers are stored unsigned,
/// negative integers signed, anything else as `f64`. Two numbers are equal
/// when they have the same normalized representation and value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Number {
    n: N,
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum N {
    PosInt(u64),
    /// Always less than zero.
    NegInt(i64),
    Float(f64),
}

impl Number {
    /// Create a number from a float
    ///
    /// Non-finite floats are accepted; the encoder writes them as `null`.
    #[must_use]
    pub const fn from_f64(f: f64) -> Self {
        Self { n: N::Float(f) }
    }

    /// Create a number from a signed integer
    #[must_use]
    pub const fn from_i64(i: i64) -> Self {
        if i < 0 {
            Self { n: N::NegInt(i) }
        } else {
            Self {
                n: N::PosInt(i as u64),
            }
        }
    }

    /// Create a number from an unsigned integer
    #[must_use]
    pub const fn from_u64(u: u64) -> Self {
        Self { n: N::PosInt(u) }
    }

    /// Check if this is an integer representable as `i64`
    #[inline]
    #[must_use]
    pub fn is_i64(&self) -> bool {
        match self.n {
            N::PosInt(u) => i64::try_from(u).is_ok(),
            N::NegInt(_) => true,
            N::Float(_) => false,
        }
    }

    /// Check if this is a non-negative integer
    #[inline]
    #[must_use]
    pub fn is_u64(&self) -> bool {
        matches!(self.n, N::PosInt(_))
    }

    /// Check if this is a float
    #[inline]
    #[must_use]
    pub fn is_f64(&self) -> bool {
        matches!(self.n, N::Float(_))
    }

    /// Get as `i64` if it is an integer in range
    #[must_use]
    pub fn as_i64(&self) -> Option<i64> {
        match self.n {
            N::PosInt(u) => i64::try_from(u).ok(),
            N::NegInt(i) => Some(i),
            N::Float(_) => None,
        }
    }

    /// Get as `u64` if it is a non-negative integer
    #[must_use]
    pub fn as_u64(&self) -> Option<u64> {
        match self.n {
            N::PosInt(u) => Some(u),
            _ => None,
        }
    }

    /// Get as `f64`, converting integers
    #[must_use]
    pub fn as_f64(&self) -> f64 {
        match self.n {
            N::PosInt(u) => u as f64,
            N::NegInt(i) => i as f64,
            N::Float(f) => f,
        }
    }

    pub(crate) fn serialize_with<S: serde::Serializer>(
        &self,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        match self.n {
            N::PosInt(u) => serializer.serialize_u64(u),
            N::NegInt(i) => serializer.serialize_i64(i),
            N::Float(f) => serializer.serialize_f64(f),
        }
    }
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.n {
            N::PosInt(u) => write!(f, "{u}"),
            N::NegInt(i) => write!(f, "{i}"),
            N::Float(v) => write!(f, "{v:?}"),
        }
    }
}

macro_rules! from_signed {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for Number {
                fn from(v: $ty) -> Self {
                    Self::from_i64(v as i64)
                }
            }
        )*
    };
}

macro_rules! from_unsigned {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for Number {
                fn from(v: $ty) -> Self {
                    Self::from_u64(v as u64)
                }
            }
        )*
    };
}

from_signed!(i8, i16, i32, isize);
from_unsigned!(u8, u16, u32, usize);

impl From<i64> for Number {
    fn from(v: i64) -> Self {
        Self::from_i64(v)
    }
}

impl From<u64> for Number {
    fn from(v: u64) -> Self {
        Self::from_u64(v)
    }
}

impl From<f32> for Number {
    fn from(v: f32) -> Self {
        Self::from_f64(f64::from(v))
    }
}

impl From<f64> for Number {
    fn from(v: f64) -> Self {
        Self::from_f64(v)
    }
}
