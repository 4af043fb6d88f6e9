//! Membership set over [`OpenMap`].

use crate::hash::{IntegerHash, KeyHash};
use crate::map::OpenMap;

/// Fixed-capacity set of integer-like keys.
///
/// A unit-valued [`OpenMap`]: same probing, O(1) clear and backward-shift
/// removal.
#[derive(Clone, Debug)]
pub struct OpenSet<K, H = IntegerHash> {
    store: OpenMap<K, (), H>,
}

impl<K> OpenSet<K, IntegerHash>
where
    K: Copy + Eq + Default,
    IntegerHash: KeyHash<K>,
{
    /// Create a set with `capacity` slots and the default hasher.
    ///
    /// # Panics
    ///
    /// Panics if `capacity` is zero.
    pub fn new(capacity: usize) -> Self {
        Self {
            store: OpenMap::new(capacity),
        }
    }
}

impl<K, H> OpenSet<K, H>
where
    K: Copy + Eq + Default,
    H: KeyHash<K>,
{
    /// Create a set with a caller-supplied hasher.
    ///
    /// # Panics
    ///
    /// Panics if `capacity` is zero.
    pub fn with_hasher(capacity: usize, hasher: H) -> Self {
        Self {
            store: OpenMap::with_hasher(capacity, hasher),
        }
    }

    /// Number of slots.
    pub fn capacity(&self) -> usize {
        self.store.capacity()
    }

    /// Number of members.
    pub fn len(&self) -> usize {
        self.store.len()
    }

    /// Whether the set is empty.
    pub fn is_empty(&self) -> bool {
        self.store.is_empty()
    }

    /// Whether every slot is taken.
    pub fn is_full(&self) -> bool {
        self.store.is_full()
    }

    /// Drop every member in O(1).
    pub fn clear(&mut self) {
        self.store.clear();
    }

    /// Add `key`. Returns `true` if it was not already present.
    ///
    /// # Panics
    ///
    /// Panics if `key` is absent and the set is full.
    pub fn insert(&mut self, key: K) -> bool {
        let before = self.store.len();
        self.store.set(key);
        self.store.len() != before
    }

    /// Whether `key` is a member.
    pub fn contains(&self, key: &K) -> bool {
        self.store.contains_key(key)
    }

    /// Remove `key`. Returns `false` if it was not a member.
    pub fn remove(&mut self, key: &K) -> bool {
        self.store.remove(key)
    }
}
