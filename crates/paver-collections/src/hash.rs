//! Key hashing for [`OpenMap`](crate::OpenMap).
//!
//! The default hasher, [`IntegerHash`], is tabulation hashing: each byte
//! of the key selects a random 32-bit word and the words are XORed. The
//! table comes from a seeded ChaCha8 stream, so hashes (and therefore
//! lookup sequences and iteration order) are identical across runs.

use paver_core::TileIndex;
use rand_chacha::rand_core::{RngCore, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Hashes keys of type `K` for slot selection.
pub trait KeyHash<K> {
    /// Hash `key`. Only the value modulo the table capacity matters.
    fn hash(&self, key: &K) -> u64;
}

impl<K> KeyHash<K> for fn(&K) -> u64 {
    fn hash(&self, key: &K) -> u64 {
        self(key)
    }
}

/// Byte-wise tabulation hash for integer keys.
#[derive(Clone, Debug)]
pub struct IntegerHash {
    table: [u32; 256],
}

impl IntegerHash {
    /// Seed used by [`IntegerHash::new`].
    pub const DEFAULT_SEED: u64 = 0x7061_7665_7200_0001;

    /// Hasher with the default seed.
    pub fn new() -> Self {
        Self::with_seed(Self::DEFAULT_SEED)
    }

    /// Hasher with a table drawn from `seed`.
    pub fn with_seed(seed: u64) -> Self {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let mut table = [0u32; 256];
        for entry in table.iter_mut() {
            *entry = rng.next_u32();
        }
        Self { table }
    }

    /// Hash an integer. Zero always hashes to zero.
    #[inline]
    pub fn hash_u64(&self, mut n: u64) -> u64 {
        let mut result = 0u32;
        while n > 0 {
            result ^= self.table[(n & 0xff) as usize];
            n >>= 8;
        }
        result as u64
    }
}

impl Default for IntegerHash {
    fn default() -> Self {
        Self::new()
    }
}

impl KeyHash<u32> for IntegerHash {
    fn hash(&self, key: &u32) -> u64 {
        self.hash_u64(*key as u64)
    }
}

impl KeyHash<u64> for IntegerHash {
    fn hash(&self, key: &u64) -> u64 {
        self.hash_u64(*key)
    }
}

impl KeyHash<usize> for IntegerHash {
    fn hash(&self, key: &usize) -> u64 {
        self.hash_u64(*key as u64)
    }
}

impl KeyHash<TileIndex> for IntegerHash {
    fn hash(&self, key: &TileIndex) -> u64 {
        self.hash_u64(key.0 as u64)
    }
}
