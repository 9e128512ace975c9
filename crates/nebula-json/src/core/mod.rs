//! Core building blocks for the JSON value model.
//!
//! ## Core Components
//!
//! ### [`value`] - The stored value
//!
//! [`JsonValue`] is what containers hold. Only JSON-safe shapes exist here.
//!
//! ### [`source`] - The offered value
//!
//! [`Source`] enumerates what a caller may try to insert, including the
//! shapes the gate refuses.
//!
//! ### [`number`] and [`kind`]
//!
//! Integer-or-float numbers and the value classification.
pub mod kind;
pub mod number;
pub mod source;
pub mod value;

pub use kind::JsonKind;
pub use number::Number;
pub use source::Source;
pub use value::JsonValue;
