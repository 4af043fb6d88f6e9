//! Open-addressing map with generation-based clearing and backward-shift
//! removal.
//!
//! Slots carry the generation in which they were written. A slot is live
//! iff its generation equals the map's current generation, so `clear()` is
//! a single increment. Removal closes the gap it leaves by shifting later
//! entries of the same collision run backward, which keeps every live key
//! reachable from its ideal slot without tombstones.

use crate::hash::{IntegerHash, KeyHash};

/// Generation value no live map ever uses; freed slots are stamped with it.
const STALE: u32 = 0;

#[derive(Clone, Debug)]
struct Bucket<K, V> {
    generation: u32,
    key: K,
    value: V,
}

/// Fixed-capacity associative store with linear probing.
///
/// Values are pre-built at construction. [`set`](OpenMap::set) returns
/// `&mut V` for the caller to populate; on a fresh insert the slot still
/// holds a value from an earlier generation, so every field must be
/// written.
///
/// # Examples
///
/// ```
/// use paver_collections::OpenMap;
///
/// let mut scores: OpenMap<u32, f32> = OpenMap::new(16);
/// *scores.set(7) = 1.5;
/// assert_eq!(scores.get(&7), Some(&1.5));
/// scores.clear();
/// assert_eq!(scores.get(&7), None);
/// ```
#[derive(Clone, Debug)]
pub struct OpenMap<K, V, H = IntegerHash> {
    buckets: Vec<Bucket<K, V>>,
    hasher: H,
    len: usize,
    generation: u32,
}

impl<K, V> OpenMap<K, V, IntegerHash>
where
    K: Copy + Eq + Default,
    V: Default,
    IntegerHash: KeyHash<K>,
{
    /// Create a map with `capacity` slots and the default hasher.
    ///
    /// # Panics
    ///
    /// Panics if `capacity` is zero.
    pub fn new(capacity: usize) -> Self {
        Self::with_hasher(capacity, IntegerHash::new())
    }
}

impl<K, V, H> OpenMap<K, V, H>
where
    K: Copy + Eq + Default,
    V: Default,
    H: KeyHash<K>,
{
    /// Create a map with `capacity` slots and a caller-supplied hasher.
    ///
    /// # Panics
    ///
    /// Panics if `capacity` is zero.
    pub fn with_hasher(capacity: usize, hasher: H) -> Self {
        assert!(capacity > 0, "OpenMap capacity must be positive");
        let buckets = (0..capacity)
            .map(|_| Bucket {
                generation: STALE,
                key: K::default(),
                value: V::default(),
            })
            .collect();
        Self {
            buckets,
            hasher,
            len: 0,
            generation: STALE + 1,
        }
    }
}

impl<K, V, H> OpenMap<K, V, H>
where
    K: Copy + Eq,
    H: KeyHash<K>,
{
    /// Number of slots.
    pub fn capacity(&self) -> usize {
        self.buckets.len()
    }

    /// Number of live entries.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether the map has no live entries.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Whether every slot is live.
    pub fn is_full(&self) -> bool {
        self.len == self.buckets.len()
    }

    /// Drop every entry in O(1).
    pub fn clear(&mut self) {
        if self.generation == u32::MAX {
            // Restart numbering so old stamps cannot alias the new generation.
            for bucket in &mut self.buckets {
                bucket.generation = STALE;
            }
            self.generation = STALE + 1;
        } else {
            self.generation += 1;
        }
        self.len = 0;
    }

    #[inline]
    fn is_live(&self, slot: usize) -> bool {
        self.buckets[slot].generation == self.generation
    }

    #[inline]
    fn ideal_slot(&self, key: &K) -> usize {
        (self.hasher.hash(key) % self.buckets.len() as u64) as usize
    }

    /// Slot holding `key`, or the first stale slot of its collision run. After a
    /// full fruitless traversal the ideal slot is returned.
    fn find_slot(&self, key: &K) -> usize {
        let n = self.buckets.len();
        let mut i = self.ideal_slot(key);
        for _ in 0..n {
            if !self.is_live(i) || self.buckets[i].key == *key {
                return i;
            }
            i = if i + 1 == n { 0 } else { i + 1 };
        }
        i
    }

    /// Insert `key` (or find it) and return its value slot.
    ///
    /// # Panics
    ///
    /// Panics if `key` is absent and the map is full.
    pub fn set(&mut self, key: K) -> &mut V {
        let slot = self.find_slot(&key);
        let generation = self.generation;
        let capacity = self.buckets.len();
        let bucket = &mut self.buckets[slot];
        if bucket.generation != generation {
            bucket.generation = generation;
            bucket.key = key;
            self.len += 1;
        } else {
            assert!(
                bucket.key == key,
                "OpenMap storage is full ({capacity} entries)"
            );
        }
        &mut bucket.value
    }

    /// Insert or overwrite `key` with `value`.
    ///
    /// # Panics
    ///
    /// Panics if `key` is absent and the map is full.
    pub fn insert(&mut self, key: K, value: V) {
        *self.set(key) = value;
    }

    /// The value for `key`, if live.
    pub fn get(&self, key: &K) -> Option<&V> {
        let slot = self.find_slot(key);
        let bucket = &self.buckets[slot];
        (bucket.generation == self.generation && bucket.key == *key).then_some(&bucket.value)
    }

    /// Mutable value for `key`, if live.
    pub fn get_mut(&mut self, key: &K) -> Option<&mut V> {
        let slot = self.find_slot(key);
        let generation = self.generation;
        let bucket = &mut self.buckets[slot];
        if bucket.generation == generation && bucket.key == *key {
            Some(&mut bucket.value)
        } else {
            None
        }
    }

    /// Whether `key` is live.
    pub fn contains_key(&self, key: &K) -> bool {
        self.get(key).is_some()
    }

    /// Remove `key`. Returns `false` if it was not present.
    pub fn remove(&mut self, key: &K) -> bool {
        let mut gap = self.find_slot(key);
        if !self.is_live(gap) || self.buckets[gap].key != *key {
            return false;
        }
        self.buckets[gap].generation = STALE;
        self.len -= 1;

        let n = self.buckets.len();
        let mut scan = gap;
        for _ in 1..n {
            scan = if scan + 1 == n { 0 } else { scan + 1 };
            if !self.is_live(scan) {
                break;
            }
            let ideal = self.ideal_slot(&self.buckets[scan].key);
            // An entry whose ideal slot lies in (gap, scan] is still
            // reachable; anything else would be cut off by the gap.
            let reachable = if gap <= scan {
                gap < ideal && ideal <= scan
            } else {
                gap < ideal || ideal <= scan
            };
            if reachable {
                continue;
            }
            self.buckets.swap(gap, scan);
            gap = scan;
        }
        true
    }

    /// Iterate live entries in slot order.
    pub fn iter(&self) -> impl Iterator<Item = (K, &V)> + '_ {
        let generation = self.generation;
        self.buckets
            .iter()
            .filter(move |b| b.generation == generation)
            .map(|b| (b.key, &b.value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use std::collections::HashMap;

    type Hasher = fn(&u32) -> u64;

    /// Every key wants slot 0: maximal clustering.
    fn collide(_: &u32) -> u64 {
        0
    }

    /// Key `k` wants slot `k / 10`: controlled partial collisions.
    fn by_tens(k: &u32) -> u64 {
        (*k / 10) as u64
    }

    fn colliding(capacity: usize) -> OpenMap<u32, u32, Hasher> {
        OpenMap::with_hasher(capacity, collide as Hasher)
    }

    #[test]
    fn set_get_overwrite() {
        let mut m: OpenMap<u32, u32> = OpenMap::new(8);
        m.insert(1, 10);
        m.insert(2, 20);
        assert_eq!(m.len(), 2);
        m.insert(1, 11);
        assert_eq!(m.len(), 2);
        assert_eq!(m.get(&1), Some(&11));
        assert_eq!(m.get(&2), Some(&20));
        assert_eq!(m.get(&3), None);
    }

    #[test]
    fn clear_is_logical() {
        let mut m: OpenMap<u32, u32> = OpenMap::new(4);
        for k in 0..4 {
            m.insert(k, k);
        }
        assert!(m.is_full());
        m.clear();
        assert!(m.is_empty());
        for k in 0..4 {
            assert_eq!(m.get(&k), None);
        }
        for k in 10..14 {
            m.insert(k, k);
        }
        assert!(m.is_full());
    }

    #[test]
    fn colliding_keys_fill_following_slots() {
        let mut m = colliding(8);
        for k in 1..=5 {
            m.insert(k, k * 100);
        }
        for k in 1..=5 {
            assert_eq!(m.get(&k), Some(&(k * 100)));
        }
        assert_eq!(m.get(&6), None);
    }

    #[test]
    fn remove_keeps_later_colliders_reachable() {
        let mut m = colliding(8);
        for k in 1..=5 {
            m.insert(k, k);
        }
        assert!(m.remove(&2));
        assert!(!m.remove(&2));
        assert_eq!(m.len(), 4);
        for k in [1, 3, 4, 5] {
            assert_eq!(m.get(&k), Some(&k), "key {k} lost after removal");
        }
        assert_eq!(m.get(&2), None);
    }

    #[test]
    fn remove_does_not_shift_entries_already_home() {
        // 0 and 1 share slot 0; 20 lives at its ideal slot 2.
        let mut m: OpenMap<u32, u32, Hasher> = OpenMap::with_hasher(8, by_tens as Hasher);
        m.insert(0, 0);
        m.insert(1, 1);
        m.insert(20, 20);
        m.insert(21, 21);
        assert!(m.remove(&0));
        for k in [1, 20, 21] {
            assert_eq!(m.get(&k), Some(&k));
        }
        // Slot 1 was vacated when 1 moved into slot 0, so 11 lands there.
        m.insert(11, 11);
        assert_eq!(m.get(&11), Some(&11));
        assert_eq!(m.len(), 4);
    }

    #[test]
    fn remove_across_wrap_boundary() {
        // Keys 70..=73 want slot 7 of 8 and wrap into 0, 1, 2.
        let mut m: OpenMap<u32, u32, Hasher> = OpenMap::with_hasher(8, by_tens as Hasher);
        for k in 70..=73 {
            m.insert(k, k);
        }
        assert!(m.remove(&70));
        assert!(m.remove(&72));
        assert_eq!(m.get(&71), Some(&71));
        assert_eq!(m.get(&73), Some(&73));
        assert_eq!(m.len(), 2);
    }

    #[test]
    fn remove_from_full_table() {
        let mut m = colliding(4);
        for k in 0..4 {
            m.insert(k, k);
        }
        assert!(m.remove(&0));
        for k in 1..4 {
            assert_eq!(m.get(&k), Some(&k));
        }
        m.insert(9, 9);
        assert!(m.is_full());
    }

    #[test]
    fn lookups_terminate_on_full_table() {
        let mut m = colliding(3);
        for k in 0..3 {
            m.insert(k, k);
        }
        assert_eq!(m.get(&99), None);
        assert!(!m.remove(&99));
    }

    #[test]
    #[should_panic(expected = "OpenMap storage is full")]
    fn insert_into_full_map_panics() {
        let mut m = colliding(2);
        m.insert(1, 1);
        m.insert(2, 2);
        m.insert(3, 3);
    }

    #[test]
    #[should_panic(expected = "capacity must be positive")]
    fn zero_capacity_panics() {
        let _m: OpenMap<u32, u32> = OpenMap::new(0);
    }

    #[test]
    fn stale_values_survive_until_overwritten() {
        let mut m: OpenMap<u32, u32> = OpenMap::new(4);
        *m.set(1) = 5;
        m.clear();
        // The slot is reused as-is; callers must overwrite.
        let v = m.set(1);
        *v = 6;
        assert_eq!(m.get(&1), Some(&6));
    }

    #[test]
    fn get_mut_updates_in_place() {
        let mut m: OpenMap<u32, u32> = OpenMap::new(4);
        m.insert(3, 1);
        if let Some(v) = m.get_mut(&3) {
            *v += 1;
        }
        assert_eq!(m.get(&3), Some(&2));
        assert!(m.get_mut(&4).is_none());
    }

    #[test]
    fn iter_yields_live_entries() {
        let mut m: OpenMap<u32, u32> = OpenMap::new(8);
        m.insert(1, 10);
        m.insert(2, 20);
        m.insert(3, 30);
        m.remove(&2);
        let mut entries: Vec<_> = m.iter().map(|(k, v)| (k, *v)).collect();
        entries.sort();
        assert_eq!(entries, vec![(1, 10), (3, 30)]);
    }

    #[test]
    fn many_generations() {
        let mut m: OpenMap<u32, u32> = OpenMap::new(4);
        for round in 0..10_000u32 {
            m.clear();
            m.insert(round % 7, round);
            assert_eq!(m.len(), 1);
            assert_eq!(m.get(&(round % 7)), Some(&round));
        }
    }

    proptest! {
        #[test]
        fn matches_hashmap_under_collisions(
            ops in proptest::collection::vec((any::<bool>(), 0u32..40), 0..300),
        ) {
            // Hash into 4 buckets of a 32-slot table to force long runs.
            let clustered: Hasher = |k| (*k % 4) as u64 * 8;
            let mut m: OpenMap<u32, u32, Hasher> = OpenMap::with_hasher(32, clustered);
            let mut model: HashMap<u32, u32> = HashMap::new();
            for (step, (is_insert, key)) in ops.into_iter().enumerate() {
                if is_insert {
                    if m.len() < 32 || model.contains_key(&key) {
                        m.insert(key, step as u32);
                        model.insert(key, step as u32);
                    }
                } else {
                    prop_assert_eq!(m.remove(&key), model.remove(&key).is_some());
                }
                prop_assert_eq!(m.len(), model.len());
            }
            for key in 0u32..40 {
                prop_assert_eq!(m.get(&key), model.get(&key));
            }
        }
    }
}
