//! Fixed-capacity double-ended ring queue.
//!
//! [`RingQueue`] keeps `N` pre-built slots and two cursors. One slot always
//! stays free so that `begin == end` unambiguously means "empty"; a queue
//! built with `N` slots therefore holds at most `N - 1` values.

/// A double-ended queue over `N` pre-allocated slots.
///
/// Usable as a vector, a stack or a FIFO. Insertions return `&mut T` to the
/// slot being occupied; the slot still holds whatever value it last held,
/// so callers overwrite it completely.
///
/// # Examples
///
/// ```
/// use paver_collections::RingQueue;
///
/// let mut q: RingQueue<u32> = RingQueue::new(4);
/// *q.push_back() = 1;
/// *q.push_back() = 2;
/// *q.push_front() = 0;
/// assert!(q.is_full());
/// assert_eq!(q.iter().copied().collect::<Vec<_>>(), vec![0, 1, 2]);
/// q.pop_front();
/// assert_eq!(q.front(), Some(&1));
/// ```
#[derive(Clone, Debug)]
pub struct RingQueue<T> {
    slots: Vec<T>,
    begin: usize,
    end: usize,
}

impl<T: Default> RingQueue<T> {
    /// Create a queue with `slots` pre-built slots (`slots - 1` usable).
    ///
    /// # Panics
    ///
    /// Panics if `slots < 2`.
    pub fn new(slots: usize) -> Self {
        assert!(slots >= 2, "RingQueue needs at least 2 slots, got {slots}");
        Self {
            slots: (0..slots).map(|_| T::default()).collect(),
            begin: 0,
            end: 0,
        }
    }
}

impl<T> RingQueue<T> {
    /// Maximum number of values the queue can hold.
    pub fn capacity(&self) -> usize {
        self.slots.len() - 1
    }

    /// Number of values currently held.
    pub fn len(&self) -> usize {
        if self.begin <= self.end {
            self.end - self.begin
        } else {
            self.slots.len() - self.begin + self.end
        }
    }

    /// Whether the queue holds no values.
    pub fn is_empty(&self) -> bool {
        self.begin == self.end
    }

    /// Whether another push would exceed capacity.
    pub fn is_full(&self) -> bool {
        self.len() + 1 >= self.slots.len()
    }

    /// Drop every value. O(1); slots keep their stale contents.
    pub fn clear(&mut self) {
        self.begin = 0;
        self.end = 0;
    }

    #[inline]
    fn next(&self, i: usize) -> usize {
        if i + 1 == self.slots.len() {
            0
        } else {
            i + 1
        }
    }

    #[inline]
    fn prev(&self, i: usize) -> usize {
        if i == 0 {
            self.slots.len() - 1
        } else {
            i - 1
        }
    }

    /// Append a slot at the back and return it for the caller to fill.
    ///
    /// # Panics
    ///
    /// Panics if the queue is full.
    pub fn push_back(&mut self) -> &mut T {
        let slot = self.end;
        let end = self.next(slot);
        assert!(
            end != self.begin,
            "RingQueue capacity exceeded ({} values)",
            self.capacity()
        );
        self.end = end;
        &mut self.slots[slot]
    }

    /// Prepend a slot at the front and return it for the caller to fill.
    ///
    /// # Panics
    ///
    /// Panics if the queue is full.
    pub fn push_front(&mut self) -> &mut T {
        let begin = self.prev(self.begin);
        assert!(
            begin != self.end,
            "RingQueue capacity exceeded ({} values)",
            self.capacity()
        );
        self.begin = begin;
        &mut self.slots[begin]
    }

    /// Append `value` at the back.
    ///
    /// # Panics
    ///
    /// Panics if the queue is full.
    pub fn push_back_value(&mut self, value: T) {
        *self.push_back() = value;
    }

    /// Remove the back value.
    ///
    /// # Panics
    ///
    /// Panics if the queue is empty.
    pub fn pop_back(&mut self) {
        assert!(!self.is_empty(), "RingQueue is already empty");
        self.end = self.prev(self.end);
    }

    /// Remove the front value.
    ///
    /// # Panics
    ///
    /// Panics if the queue is empty.
    pub fn pop_front(&mut self) {
        assert!(!self.is_empty(), "RingQueue is already empty");
        self.begin = self.next(self.begin);
    }

    /// The front value, if any.
    pub fn front(&self) -> Option<&T> {
        if self.is_empty() {
            None
        } else {
            Some(&self.slots[self.begin])
        }
    }

    /// The back value, if any.
    pub fn back(&self) -> Option<&T> {
        if self.is_empty() {
            None
        } else {
            Some(&self.slots[self.prev(self.end)])
        }
    }

    /// The `i`-th value from the front.
    pub fn get(&self, i: usize) -> Option<&T> {
        if i >= self.len() {
            return None;
        }
        Some(&self.slots[(self.begin + i) % self.slots.len()])
    }

    /// Iterate front to back. Restartable: the queue is not consumed.
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = &T> + ExactSizeIterator + '_ {
        let n = self.slots.len();
        let begin = self.begin;
        (0..self.len()).map(move |i| &self.slots[(begin + i) % n])
    }
}

impl<T: Clone> RingQueue<T> {
    /// Remove and return the front value.
    pub fn take_front(&mut self) -> Option<T> {
        let value = self.front()?.clone();
        self.pop_front();
        Some(value)
    }
}
