//! Encode/decode facade
//!
//! [`Codec`] is an immutable configuration value built once and shared by
//! reference. It hands values to `serde_json` (containers go through the
//! serde bridge) and folds every failure into [`JsonError::Encode`] or
//! [`JsonError::Decode`] carrying the underlying message.
//!
//! The free functions [`encode`], [`encode_prettily`] and [`decode_value`]
//! use a process-wide default codec that is built on first use and never
//! reconfigured.
//!
//! ```
//! use nebula_json::{Codec, CodecOptions, JsonObject};
//!
//! let codec = Codec::new(CodecOptions::default().with_indent(4));
//! let obj: JsonObject = codec.decode_value(r#"{"a": 1 /* one */}"#).unwrap();
//! assert_eq!(codec.encode(&obj).unwrap(), r#"{"a":1}"#);
//! ```

mod comments;

use once_cell::sync::Lazy;
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::ser::PrettyFormatter;

use crate::error::{JsonError, JsonResult};

/// Codec configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CodecOptions {
    /// Ignore `//` and `/* */` comments when decoding
    pub allow_comments: bool,

    /// Spaces per nesting level in pretty output
    pub indent: usize,
}

impl Default for CodecOptions {
    fn default() -> Self {
        Self {
            allow_comments: true,
            indent: 2,
        }
    }
}

impl CodecOptions {
    /// Strict RFC 8259 input: comments are a decode error
    pub const fn strict() -> Self {
        Self {
            allow_comments: false,
            indent: 2,
        }
    }

    /// Set the pretty-print indent width
    #[must_use]
    pub const fn with_indent(mut self, indent: usize) -> Self {
        self.indent = indent;
        self
    }

    /// Enable or disable comment tolerance
    #[must_use]
    pub const fn with_comments(mut self, allow: bool) -> Self {
        self.allow_comments = allow;
        self
    }
}

/// JSON encoder/decoder with fixed options
#[derive(Debug, Clone)]
pub struct Codec {
    options: CodecOptions,
    indent: Vec<u8>,
}

impl Default for Codec {
    fn default() -> Self {
        Self::new(CodecOptions::default())
    }
}

impl Codec {
    /// Create a codec
    pub fn new(options: CodecOptions) -> Self {
        Self {
            options,
            indent: vec![b' '; options.indent],
        }
    }

    /// Get the options this codec was built with
    pub fn options(&self) -> &CodecOptions {
        &self.options
    }

    /// Encode a value as compact JSON
    pub fn encode<T: Serialize + ?Sized>(&self, value: &T) -> JsonResult<String> {
        serde_json::to_string(value).map_err(encode_error)
    }

    /// Encode a value as indented JSON
    pub fn encode_prettily<T: Serialize + ?Sized>(&self, value: &T) -> JsonResult<String> {
        let mut buf = Vec::with_capacity(128);
        let formatter = PrettyFormatter::with_indent(&self.indent);
        let mut serializer = serde_json::Serializer::with_formatter(&mut buf, formatter);
        value.serialize(&mut serializer).map_err(encode_error)?;
        String::from_utf8(buf).map_err(encode_error)
    }

    /// Decode JSON text into any deserializable target shape
    pub fn decode_value<T: DeserializeOwned>(&self, text: &str) -> JsonResult<T> {
        let decoded = if self.options.allow_comments {
            let text = comments::strip(text).inspect_err(|e| {
                tracing::debug!(error = %e, "json decoding failed");
            })?;
            serde_json::from_str(&text)
        } else {
            serde_json::from_str(text)
        };
        decoded.map_err(decode_error)
    }
}

fn encode_error(e: impl std::fmt::Display) -> JsonError {
    tracing::debug!(error = %e, "json encoding failed");
    JsonError::encode(e.to_string())
}

fn decode_error(e: serde_json::Error) -> JsonError {
    tracing::debug!(error = %e, line = e.line(), column = e.column(), "json decoding failed");
    JsonError::decode(e.to_string())
}

static DEFAULT_CODEC: Lazy<Codec> = Lazy::new(Codec::default);

/// Encode with the default codec
pub fn encode<T: Serialize + ?Sized>(value: &T) -> JsonResult<String> {
    DEFAULT_CODEC.encode(value)
}

/// Pretty-encode with the default codec (two-space indent)
pub fn encode_prettily<T: Serialize + ?Sized>(value: &T) -> JsonResult<String> {
    DEFAULT_CODEC.encode_prettily(value)
}

/// Decode with the default codec (comments allowed)
pub fn decode_value<T: DeserializeOwned>(text: &str) -> JsonResult<T> {
    DEFAULT_CODEC.decode_value(text)
}
