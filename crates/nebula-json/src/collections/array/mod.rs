//! JSON array container
//!
//! Same handle semantics as [`JsonObject`](crate::JsonObject): `Clone`
//! shares storage, [`JsonArray::copy`] deep-copies it, insertions are gated.
pub mod builder;

pub use builder::ArrayBuilder;

use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use parking_lot::{RwLock, RwLockReadGuard};

use crate::core::source::Source;
use crate::core::value::JsonValue;
use crate::error::{JsonError, JsonResult};
use crate::gate::{CopyMode, gate};

/// Ordered sequence of gated values
#[derive(Clone, Default)]
pub struct JsonArray {
    inner: Arc<RwLock<Vec<JsonValue>>>,
}

impl JsonArray {
    /// Create an empty array
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self::from_values(Vec::with_capacity(capacity))
    }

    /// Wrap a plain sequence, gating every element with `mode`
    ///
    /// # Errors
    ///
    /// Fails with [`JsonError::IllegalValueKind`] if any element is rejected.
    pub fn from_list<I>(list: I, mode: CopyMode) -> JsonResult<Self>
    where
        I: IntoIterator<Item = Source>,
    {
        let values = list
            .into_iter()
            .map(|v| gate(v, mode))
            .collect::<JsonResult<Vec<_>>>()?;
        Ok(Self::from_values(values))
    }

    pub(crate) fn from_values(values: Vec<JsonValue>) -> Self {
        Self {
            inner: Arc::new(RwLock::new(values)),
        }
    }

    /// Get the length
    #[inline]
    pub fn len(&self) -> usize {
        self.inner.read().len()
    }

    /// Check if empty
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.inner.read().is_empty()
    }

    /// Append a value, sharing nested containers with the caller
    pub fn add(&self, value: impl Into<Source>) -> JsonResult<()> {
        self.add_with(value, CopyMode::Shared)
    }

    /// Append a value, deep-copying nested containers
    pub fn add_copy(&self, value: impl Into<Source>) -> JsonResult<()> {
        self.add_with(value, CopyMode::Deep)
    }

    /// Append a value with an explicit copy mode
    pub fn add_with(&self, value: impl Into<Source>, mode: CopyMode) -> JsonResult<()> {
        let value = gate(value.into(), mode)?;
        self.inner.write().push(value);
        Ok(())
    }

    /// Get element at index
    pub fn get(&self, index: usize) -> Option<JsonValue> {
        self.inner.read().get(index).cloned()
    }

    /// Replace the element at `index`, sharing nested containers
    ///
    /// Returns the replaced value, or `None` (storing nothing) when `index`
    /// is past the end.
    pub fn set(&self, index: usize, value: impl Into<Source>) -> JsonResult<Option<JsonValue>> {
        let value = gate(value.into(), CopyMode::Shared)?;
        let mut values = self.inner.write();
        Ok(values
            .get_mut(index)
            .map(|slot| std::mem::replace(slot, value)))
    }

    /// Remove element at index, shifting the rest down
    pub fn remove(&self, index: usize) -> Option<JsonValue> {
        let mut values = self.inner.write();
        (index < values.len()).then(|| values.remove(index))
    }

    /// Remove every element
    pub fn clear(&self) {
        self.inner.write().clear();
    }

    /// Snapshot of the elements
    pub fn values(&self) -> Vec<JsonValue> {
        self.inner.read().clone()
    }

    /// Deep copy: every nested container is freshly allocated
    #[must_use]
    pub fn copy(&self) -> Self {
        let values = self.inner.read().iter().map(JsonValue::deep_copy).collect();
        Self::from_values(values)
    }

    /// Check whether both handles point at the same storage
    #[inline]
    pub fn is_same(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }

    pub(crate) fn read(&self) -> RwLockReadGuard<'_, Vec<JsonValue>> {
        self.inner.read()
    }
}

impl PartialEq for JsonArray {
    fn eq(&self, other: &Self) -> bool {
        self.is_same(other) || *self.inner.read() == *other.inner.read()
    }
}

impl fmt::Debug for JsonArray {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.inner.read().iter()).finish()
    }
}

/// Compact JSON text
impl fmt::Display for JsonArray {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&crate::codec::encode(self).map_err(|_| fmt::Error)?)
    }
}

impl FromStr for JsonArray {
    type Err = JsonError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        crate::codec::decode_value(s)
    }
}

impl FromIterator<JsonValue> for JsonArray {
    fn from_iter<I: IntoIterator<Item = JsonValue>>(iter: I) -> Self {
        Self::from_values(iter.into_iter().collect())
    }
}
