//! JSON Error Types
//!
//! Two coarse kinds come out of the codec (encoding and decoding failures,
//! each carrying the underlying cause's message) and one comes out of the
//! value gate when a caller offers a value the model cannot store.

use thiserror::Error;

/// Result alias used across the crate.
pub type JsonResult<T> = Result<T, JsonError>;

/// Errors produced by the JSON value model
#[non_exhaustive]
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum JsonError {
    /// A value whose runtime type is not storable in a JSON container.
    ///
    /// This is an integration error on the caller's side, not a condition to
    /// recover from: propagate it and abort the current operation.
    #[error("Illegal type in JsonObject: {type_name}")]
    IllegalValueKind { type_name: String },

    /// The encoder failed to produce JSON text
    #[error("Failed to encode as json: {0}")]
    Encode(String),

    /// The decoder failed to parse or map JSON text
    #[error("Failed to decode: {0}")]
    Decode(String),
}

impl JsonError {
    /// Create an illegal value kind error
    pub fn illegal_value_kind(type_name: impl Into<String>) -> Self {
        Self::IllegalValueKind {
            type_name: type_name.into(),
        }
    }

    /// Create an encoding error
    pub fn encode(message: impl Into<String>) -> Self {
        Self::Encode(message.into())
    }

    /// Create a decoding error
    pub fn decode(message: impl Into<String>) -> Self {
        Self::Decode(message.into())
    }

    /// Check if this is a gate rejection
    #[must_use]
    pub fn is_illegal_value_kind(&self) -> bool {
        matches!(self, Self::IllegalValueKind { .. })
    }

    /// Check if this is an encoding or decoding failure
    #[must_use]
    pub fn is_codec_error(&self) -> bool {
        matches!(self, Self::Encode(_) | Self::Decode(_))
    }
}
