//! Fixed-capacity binary min-heap keyed by `f32`.

/// Array-backed binary min-heap over `(key, value)` pairs.
///
/// Used as the open set of the path search. [`push`](MinHeap::push)
/// returns the value slot to fill in place; the slot carries stale contents
/// from earlier use.
///
/// # Examples
///
/// ```
/// use paver_collections::MinHeap;
///
/// let mut open: MinHeap<char> = MinHeap::new(8);
/// *open.push(3.0) = 'c';
/// *open.push(1.0) = 'a';
/// *open.push(2.0) = 'b';
/// assert_eq!(open.peek(), Some(&'a'));
/// open.pop();
/// assert_eq!(open.peek(), Some(&'b'));
/// ```
#[derive(Clone, Debug)]
pub struct MinHeap<V> {
    entries: Vec<(f32, V)>,
    len: usize,
}

impl<V: Default> MinHeap<V> {
    /// Create a heap holding at most `capacity` entries.
    ///
    /// # Panics
    ///
    /// Panics if `capacity` is zero.
    pub fn new(capacity: usize) -> Self {
        assert!(capacity > 0, "MinHeap capacity must be positive");
        Self {
            entries: (0..capacity).map(|_| (0.0, V::default())).collect(),
            len: 0,
        }
    }
}

impl<V> MinHeap<V> {
    /// Maximum number of entries.
    pub fn capacity(&self) -> usize {
        self.entries.len()
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether the heap is empty.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Whether the heap is at capacity.
    pub fn is_full(&self) -> bool {
        self.len == self.entries.len()
    }

    /// Drop every entry in O(1).
    pub fn clear(&mut self) {
        self.len = 0;
    }

    /// Insert `key` and return its value slot for the caller to fill.
    ///
    /// # Panics
    ///
    /// Panics if the heap is full or `key` is NaN.
    pub fn push(&mut self, key: f32) -> &mut V {
        assert!(!key.is_nan(), "MinHeap key must not be NaN");
        assert!(
            self.len < self.entries.len(),
            "MinHeap capacity exceeded ({} entries)",
            self.entries.len()
        );
        let mut i = self.len;
        self.entries[i].0 = key;
        self.len += 1;
        while i > 0 {
            let parent = (i - 1) / 2;
            if self.entries[parent].0 <= self.entries[i].0 {
                break;
            }
            self.entries.swap(parent, i);
            i = parent;
        }
        &mut self.entries[i].1
    }

    /// The value with the smallest key.
    pub fn peek(&self) -> Option<&V> {
        if self.len == 0 {
            None
        } else {
            Some(&self.entries[0].1)
        }
    }

    /// The smallest key.
    pub fn peek_key(&self) -> Option<f32> {
        if self.len == 0 {
            None
        } else {
            Some(self.entries[0].0)
        }
    }

    /// Remove the entry with the smallest key.
    ///
    /// # Panics
    ///
    /// Panics if the heap is empty.
    pub fn pop(&mut self) {
        assert!(self.len > 0, "MinHeap is already empty");
        self.len -= 1;
        self.entries.swap(0, self.len);
        let mut i = 0;
        loop {
            let left = 2 * i + 1;
            let right = left + 1;
            let mut smallest = i;
            if left < self.len && self.entries[left].0 < self.entries[smallest].0 {
                smallest = left;
            }
            if right < self.len && self.entries[right].0 < self.entries[smallest].0 {
                smallest = right;
            }
            if smallest == i {
                break;
            }
            self.entries.swap(i, smallest);
            i = smallest;
        }
    }
}

impl<V: Clone> MinHeap<V> {
    /// Remove and return the value with the smallest key, with its key.
    pub fn take(&mut self) -> Option<(f32, V)> {
        let key = self.peek_key()?;
        let value = self.entries[0].1.clone();
        self.pop();
        Some((key, value))
    }
}
