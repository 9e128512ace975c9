//! Builder pattern for JsonArray construction

use crate::collections::JsonArray;
use crate::core::source::Source;
use crate::error::JsonResult;
use crate::gate::CopyMode;

/// Builder for creating a [`JsonArray`]
///
/// # Examples
///
/// ```
/// use nebula_json::collections::ArrayBuilder;
///
/// let array = ArrayBuilder::new()
///     .push(1u8)
///     .push("two")
///     .build()
///     .unwrap();
///
/// assert_eq!(array.len(), 2);
/// ```
#[derive(Debug, Default)]
pub struct ArrayBuilder {
    items: Vec<Source>,
    mode: CopyMode,
}

impl ArrayBuilder {
    /// Create a new empty builder
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a builder with initial capacity
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            items: Vec::with_capacity(capacity),
            mode: CopyMode::Shared,
        }
    }

    /// Deep-copy nested containers when building
    pub fn deep_copy(mut self) -> Self {
        self.mode = CopyMode::Deep;
        self
    }

    /// Add an item
    pub fn push(mut self, value: impl Into<Source>) -> Self {
        self.items.push(value.into());
        self
    }

    /// Add multiple items
    pub fn extend<I, V>(mut self, items: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<Source>,
    {
        self.items.extend(items.into_iter().map(Into::into));
        self
    }

    /// Get current number of items
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Check if builder is empty
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Gate every collected item and build the array
    pub fn build(self) -> JsonResult<JsonArray> {
        JsonArray::from_list(self.items, self.mode)
    }
}
