//! Builder pattern for JsonObject construction
//!
//! Collects raw sources and gates them all at once in [`ObjectBuilder::build`].

use indexmap::IndexMap;

use crate::collections::JsonObject;
use crate::core::source::Source;
use crate::error::JsonResult;
use crate::gate::CopyMode;

/// Builder for creating a [`JsonObject`]
///
/// # Examples
///
/// ```
/// use nebula_json::collections::ObjectBuilder;
///
/// let object = ObjectBuilder::new()
///     .insert("name", "Alice")
///     .insert("age", 30u32)
///     .insert("avatar", vec![0xffu8, 0xd8])
///     .build()
///     .unwrap();
///
/// assert_eq!(object.len(), 3);
/// assert_eq!(object.get("avatar").unwrap().as_str(), Some("/9g="));
/// ```
#[derive(Debug, Default)]
pub struct ObjectBuilder {
    entries: IndexMap<String, Source>,
    mode: CopyMode,
}

impl ObjectBuilder {
    /// Create a new empty builder
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a builder with initial capacity
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: IndexMap::with_capacity(capacity),
            mode: CopyMode::Shared,
        }
    }

    /// Deep-copy nested containers when building
    pub fn deep_copy(mut self) -> Self {
        self.mode = CopyMode::Deep;
        self
    }

    /// Insert a key-value pair (last write for a key wins)
    pub fn insert(mut self, key: impl Into<String>, value: impl Into<Source>) -> Self {
        self.entries.insert(key.into(), value.into());
        self
    }

    /// Insert multiple key-value pairs
    pub fn extend<I, K, V>(mut self, entries: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<Source>,
    {
        self.entries
            .extend(entries.into_iter().map(|(k, v)| (k.into(), v.into())));
        self
    }

    /// Get current number of entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if builder is empty
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Gate every collected value and build the object
    ///
    /// # Errors
    ///
    /// Fails with the first gate rejection.
    pub fn build(self) -> JsonResult<JsonObject> {
        JsonObject::from_map(self.entries, self.mode)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::JsonValue;

    #[test]
    fn test_builder_basic() {
        let object = ObjectBuilder::new()
            .insert("a", 1i32)
            .insert("b", 'x')
            .build()
            .unwrap();

        assert_eq!(object.keys(), vec!["a", "b"]);
        assert_eq!(object.get("b"), Some(JsonValue::Char('x')));
    }

    #[test]
    fn test_builder_extend() {
        let builder = ObjectBuilder::with_capacity(2).extend([("a", 1u8), ("b", 2u8)]);
        assert_eq!(builder.len(), 2);
        assert_eq!(builder.build().unwrap().len(), 2);
    }

    #[test]
    fn test_builder_deep_copy() {
        let nested = JsonObject::new();
        let shared = ObjectBuilder::new().insert("n", nested.clone()).build().unwrap();
        let copied = ObjectBuilder::new()
            .deep_copy()
            .insert("n", nested.clone())
            .build()
            .unwrap();

        assert!(shared.get("n").unwrap().as_object().unwrap().is_same(&nested));
        assert!(!copied.get("n").unwrap().as_object().unwrap().is_same(&nested));
    }

    #[test]
    fn test_builder_rejects_opaque() {
        let result = ObjectBuilder::new()
            .insert("ok", true)
            .insert("bad", Source::opaque(std::time::Duration::from_secs(1)))
            .build();
        assert!(result.unwrap_err().is_illegal_value_kind());
    }
}
