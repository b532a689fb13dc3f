//! Storage backends for the DP cache.

use std::collections::HashMap;
use std::hash::Hash;

/// Where a [`DpCache`](super::DpCache) keeps computed values.
///
/// Implementations only store and look up; the cache decides when to
/// compute. Inserting an index that is already present keeps the first
/// value.
pub trait Backend<I, K> {
    /// The value stored for `index`, if it was computed
    fn get(&self, index: &I) -> Option<&K>;

    /// Store `value` for `index` unless a value is already present
    fn insert(&mut self, index: I, value: K);

    /// Number of stored values
    fn len(&self) -> usize;

    /// Whether nothing has been stored yet
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// A Vec-based backend for `usize` indices.
///
/// Efficient for dense indices starting at 0, such as flattened grid
/// positions. The Vec grows to fit the largest index inserted.
#[derive(Debug)]
pub struct VecBackend<K> {
    data: Vec<Option<K>>,
    filled: usize,
}

impl<K> VecBackend<K> {
    /// Creates a new empty VecBackend.
    pub fn new() -> Self {
        Self {
            data: Vec::new(),
            filled: 0,
        }
    }

    /// Creates a VecBackend with room for indices `0..capacity`.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            data: Vec::with_capacity(capacity),
            filled: 0,
        }
    }
}

impl<K> Default for VecBackend<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K> Backend<usize, K> for VecBackend<K> {
    fn get(&self, index: &usize) -> Option<&K> {
        self.data.get(*index)?.as_ref()
    }

    fn insert(&mut self, index: usize, value: K) {
        if index >= self.data.len() {
            self.data.resize_with(index + 1, || None);
        }
        let slot = &mut self.data[index];
        if slot.is_none() {
            *slot = Some(value);
            self.filled += 1;
        }
    }

    fn len(&self) -> usize {
        self.filled
    }
}

/// A HashMap-based backend for arbitrary hashable indices.
#[derive(Debug)]
pub struct HashMapBackend<I, K> {
    data: HashMap<I, K>,
}

impl<I, K> HashMapBackend<I, K> {
    /// Creates a new empty HashMapBackend.
    pub fn new() -> Self {
        Self {
            data: HashMap::new(),
        }
    }
}

impl<I, K> Default for HashMapBackend<I, K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<I: Hash + Eq, K> Backend<I, K> for HashMapBackend<I, K> {
    fn get(&self, index: &I) -> Option<&K> {
        self.data.get(index)
    }

    fn insert(&mut self, index: I, value: K) {
        self.data.entry(index).or_insert(value);
    }

    fn len(&self) -> usize {
        self.data.len()
    }
}
