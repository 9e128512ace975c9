//! JSON value model for Nebula
//!
//! A loosely-typed value graph that presents as strict JSON. Containers
//! ([`JsonObject`], [`JsonArray`]) accept host-native values through the
//! [`gate`](gate::gate), which canonicalizes byte buffers, timestamps and
//! string-like types, carries nested containers by handle or by deep copy,
//! and rejects anything it has no JSON mapping for.
//!
//! ```
//! use nebula_json::{JsonObject, Source};
//! use chrono::{TimeZone, Utc};
//!
//! let obj = JsonObject::new();
//! obj.put("id", 7u32).unwrap();
//! obj.put("payload", vec![1u8, 2, 3]).unwrap();
//! obj.put("at", Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap()).unwrap();
//! obj.put("tags", Source::list(["a", "b"])).unwrap();
//!
//! assert_eq!(
//!     nebula_json::encode(&obj).unwrap(),
//!     r#"{"id":7,"payload":"AQID","at":"2024-01-01T00:00:00Z","tags":["a","b"]}"#
//! );
//! ```
#![cfg_attr(docsrs, feature(doc_cfg))]
#![warn(clippy::all)]

mod bridge;
pub mod codec;
pub mod collections;
pub mod core;
pub mod error;
pub mod gate;

// Re-export core types
pub use codec::{Codec, CodecOptions, decode_value, encode, encode_prettily};
pub use collections::{ArrayBuilder, JsonArray, JsonObject, ObjectBuilder};
pub use self::core::{JsonKind, JsonValue, Number, Source};
pub use error::{JsonError, JsonResult};
pub use gate::{CopyMode, gate};

static_assertions::assert_impl_all!(JsonValue: Send, Sync);
static_assertions::assert_impl_all!(JsonObject: Send, Sync);
static_assertions::assert_impl_all!(JsonArray: Send, Sync);
static_assertions::assert_impl_all!(Source: Send);

/// Prelude for common imports
pub mod prelude {
    pub use crate::{
        CopyMode, JsonArray, JsonError, JsonObject, JsonResult, JsonValue, Number, Source,
    };
}
