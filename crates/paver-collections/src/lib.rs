//! Fixed-capacity, allocation-free containers.
//!
//! Every container here allocates its backing storage once, at
//! construction, and never again. Values live in pre-built slots; the
//! insertion methods return `&mut` to the slot so callers fill it in place.
//! Exceeding a container's capacity is a programming error and panics.
//!
//! ```text
//! RingQueue<T>        double-ended ring, N slots, N - 1 usable
//! OpenMap<K, V, H>    linear probing, generation-cleared, backward-shift removal
//! OpenSet<K, H>       OpenMap<K, ()>
//! MinHeap<V>          binary heap keyed by f32
//! ```
//!
//! `clear()` is O(1) on all of them, so one instance can be reused for
//! every search or staging pass.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod hash;
pub mod heap;
pub mod map;
pub mod ring;
pub mod set;

pub use hash::{IntegerHash, KeyHash};
pub use heap::MinHeap;
pub use map::OpenMap;
pub use ring::RingQueue;
pub use set::OpenSet;
