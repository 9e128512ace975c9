//! JSON container types
//!
//! - JsonObject: insertion-ordered map (`IndexMap`)
//! - JsonArray: ordered sequence (`Vec`)
//!
//! Both are shared handles over lock-protected storage.

pub mod array;
pub mod object;

// Re-exports
pub use array::{ArrayBuilder, JsonArray};
pub use object::{JsonObject, ObjectBuilder};
