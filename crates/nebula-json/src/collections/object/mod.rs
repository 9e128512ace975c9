//! JSON object container
//!
//! - Insertion-ordered string keys (`IndexMap`)
//! - Shared handle: `Clone` aliases the same storage, [`JsonObject::copy`]
//!   makes an independent deep copy
//! - Thread-safe via `Arc<RwLock<..>>`
//! - Every insertion passes through the [`gate`](crate::gate::gate)
pub mod builder;

pub use builder::ObjectBuilder;

use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use indexmap::IndexMap;
use parking_lot::{RwLock, RwLockReadGuard};

use crate::core::source::Source;
use crate::core::value::JsonValue;
use crate::error::{JsonError, JsonResult};
use crate::gate::{CopyMode, gate};

pub(crate) type Entries = IndexMap<String, JsonValue>;

/// Insertion-ordered map of string keys to gated values
#[derive(Clone, Default)]
pub struct JsonObject {
    inner: Arc<RwLock<Entries>>,
}

impl JsonObject {
    /// Create an empty object
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty object with room for `capacity` entries
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self::from_entries(IndexMap::with_capacity(capacity))
    }

    /// Wrap a plain mapping, gating every value with `mode`
    ///
    /// # Errors
    ///
    /// Fails with [`JsonError::IllegalValueKind`] if any value is rejected.
    pub fn from_map<I, K>(map: I, mode: CopyMode) -> JsonResult<Self>
    where
        I: IntoIterator<Item = (K, Source)>,
        K: Into<String>,
    {
        let entries = map
            .into_iter()
            .map(|(k, v)| gate(v, mode).map(|v| (k.into(), v)))
            .collect::<JsonResult<Entries>>()?;
        Ok(Self::from_entries(entries))
    }

    pub(crate) fn from_entries(entries: Entries) -> Self {
        Self {
            inner: Arc::new(RwLock::new(entries)),
        }
    }

    /// Get the number of keys
    #[inline]
    pub fn len(&self) -> usize {
        self.inner.read().len()
    }

    /// Check if empty
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.inner.read().is_empty()
    }

    /// Insert a value, sharing nested containers with the caller.
    ///
    /// Returns the previous value for `key`, if any.
    pub fn put(
        &self,
        key: impl Into<String>,
        value: impl Into<Source>,
    ) -> JsonResult<Option<JsonValue>> {
        self.put_with(key, value, CopyMode::Shared)
    }

    /// Insert a value, deep-copying nested containers.
    pub fn put_copy(
        &self,
        key: impl Into<String>,
        value: impl Into<Source>,
    ) -> JsonResult<Option<JsonValue>> {
        self.put_with(key, value, CopyMode::Deep)
    }

    /// Insert a value with an explicit copy mode
    pub fn put_with(
        &self,
        key: impl Into<String>,
        value: impl Into<Source>,
        mode: CopyMode,
    ) -> JsonResult<Option<JsonValue>> {
        // Gate before locking: copying this object into itself takes a read lock.
        let value = gate(value.into(), mode)?;
        Ok(self.inner.write().insert(key.into(), value))
    }

    /// Get value by key
    ///
    /// Containers come back as handles sharing storage with this object.
    pub fn get(&self, key: &str) -> Option<JsonValue> {
        self.inner.read().get(key).cloned()
    }

    /// Check if key exists
    pub fn contains_key(&self, key: &str) -> bool {
        self.inner.read().contains_key(key)
    }

    /// Remove a key, keeping the order of the remaining entries
    pub fn remove(&self, key: &str) -> Option<JsonValue> {
        self.inner.write().shift_remove(key)
    }

    /// Remove every entry
    pub fn clear(&self) {
        self.inner.write().clear();
    }

    /// Snapshot of the keys in insertion order
    pub fn keys(&self) -> Vec<String> {
        self.inner.read().keys().cloned().collect()
    }

    /// Snapshot of the entries in insertion order
    pub fn entries(&self) -> Vec<(String, JsonValue)> {
        self.inner
            .read()
            .iter()
            .map(|(k, v)| (k.clone(), v.clone()))
            .collect()
    }

    /// Deep copy: every nested container is freshly allocated
    #[must_use]
    pub fn copy(&self) -> Self {
        let entries = self
            .inner
            .read()
            .iter()
            .map(|(k, v)| (k.clone(), v.deep_copy()))
            .collect();
        Self::from_entries(entries)
    }

    /// Check whether both handles point at the same storage
    #[inline]
    pub fn is_same(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }

    pub(crate) fn read(&self) -> RwLockReadGuard<'_, Entries> {
        self.inner.read()
    }
}

impl PartialEq for JsonObject {
    fn eq(&self, other: &Self) -> bool {
        self.is_same(other) || *self.inner.read() == *other.inner.read()
    }
}

impl fmt::Debug for JsonObject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.inner.read().iter()).finish()
    }
}

/// Compact JSON text
impl fmt::Display for JsonObject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&crate::codec::encode(self).map_err(|_| fmt::Error)?)
    }
}

impl FromStr for JsonObject {
    type Err = JsonError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        crate::codec::decode_value(s)
    }
}

impl FromIterator<(String, JsonValue)> for JsonObject {
    fn from_iter<I: IntoIterator<Item = (String, JsonValue)>>(iter: I) -> Self {
        Self::from_entries(iter.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::collections::JsonArray;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_object_creation() {
        let obj = JsonObject::new();
        assert_eq!(obj.len(), 0);
        assert!(obj.is_empty());
    }

    #[test]
    fn test_object_put_get() {
        let obj = JsonObject::new();
        assert_eq!(obj.put("name", "Alice").unwrap(), None);
        obj.put("age", 30i32).unwrap();

        assert_eq!(obj.len(), 2);
        assert_eq!(obj.get("name"), Some(JsonValue::from("Alice")));
        assert_eq!(obj.get("age").and_then(|v| v.as_i64()), Some(30));
        assert_eq!(obj.get("missing"), None);

        let previous = obj.put("age", 31i32).unwrap();
        assert_eq!(previous.and_then(|v| v.as_i64()), Some(30));
    }

    #[test]
    fn test_object_preserves_insertion_order() {
        let obj = JsonObject::new();
        for key in ["zeta", "alpha", "mid"] {
            obj.put(key, true).unwrap();
        }
        obj.remove("alpha");
        obj.put("last", false).unwrap();

        assert_eq!(obj.keys(), vec!["zeta", "mid", "last"]);
    }

    #[test]
    fn test_clone_aliases_storage() {
        let obj = JsonObject::new();
        let alias = obj.clone();
        alias.put("k", 1u8).unwrap();

        assert!(obj.is_same(&alias));
        assert!(obj.contains_key("k"));
    }

    #[test]
    fn test_copy_is_independent() {
        let nested = JsonObject::new();
        nested.put("inner", 1u8).unwrap();
        let obj = JsonObject::new();
        obj.put("nested", nested.clone()).unwrap();

        let copy = obj.copy();
        assert_eq!(copy, obj);

        nested.put("inner", 2u8).unwrap();
        obj.put("extra", "x").unwrap();

        let copied_nested = copy.get("nested").unwrap();
        assert_eq!(copied_nested.as_object().unwrap().get("inner").and_then(|v| v.as_i64()), Some(1));
        assert!(!copy.contains_key("extra"));
    }

    #[test]
    fn test_mutating_copy_leaves_original() {
        let nested = JsonArray::new();
        nested.add(1u8).unwrap();
        let obj = JsonObject::new();
        obj.put("nested", nested.clone()).unwrap();

        let copy = obj.copy();
        copy.put("extra", true).unwrap();
        copy.get("nested").unwrap().as_array().unwrap().add(2u8).unwrap();

        assert!(!obj.contains_key("extra"));
        assert_eq!(nested.len(), 1);
        assert_eq!(obj.to_string(), r#"{"nested":[1]}"#);
    }

    #[test]
    fn test_put_copy_into_itself() {
        let obj = JsonObject::new();
        obj.put("a", 1u8).unwrap();
        obj.put_copy("self", obj.clone()).unwrap();

        let snapshot = obj.get("self").unwrap();
        let snapshot = snapshot.as_object().unwrap();
        assert_eq!(snapshot.keys(), vec!["a"]);
        assert!(!snapshot.is_same(&obj));
    }

    #[test]
    fn test_rejected_put_leaves_object_untouched() {
        let obj = JsonObject::new();
        obj.put("a", 1u8).unwrap();
        assert!(obj.put("b", rust_decimal::Decimal::ONE).is_err());
        assert_eq!(obj.keys(), vec!["a"]);
    }

    #[test]
    fn test_object_equality_ignores_order() {
        let a = JsonObject::new();
        a.put("x", 1u8).unwrap();
        a.put("y", 2u8).unwrap();
        let b = JsonObject::new();
        b.put("y", 2u8).unwrap();
        b.put("x", 1u8).unwrap();
        assert_eq!(a, b);

        b.put("x", 9u8).unwrap();
        assert_ne!(a, b);
    }

    #[test]
    fn test_display_and_parse() {
        let obj = JsonObject::new();
        obj.put("name", "nebula").unwrap();
        obj.put("tags", Source::list(["a", "b"])).unwrap();

        let text = obj.to_string();
        assert_eq!(text, r#"{"name":"nebula","tags":["a","b"]}"#);

        let parsed: JsonObject = text.parse().unwrap();
        assert_eq!(parsed, obj);
    }
}
