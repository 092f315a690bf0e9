//! Seeded hash functions for the partitioned Bloom filter
//!
//! Each hash function is MurmurHash3 (x86, 32-bit) with its own seed.
//! Digests are pure: nothing is retained between calls, so a single
//! `SeededHash` can be reused for any number of keys.

use std::io::Cursor;

/// Hash a key with 32-bit MurmurHash3 under the given seed
pub fn digest(seed: u32, key: &[u8]) -> u32 {
    let mut cursor = Cursor::new(key);

    // Reading from an in-memory cursor cannot fail
    murmur3::murmur3_32(&mut cursor, seed).unwrap_or(0)
}

/// One of the filter's hash functions, identified by its seed
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SeededHash {
    seed: u32,
}

impl SeededHash {
    /// Create a hash function with the given seed
    pub fn new(seed: u32) -> Self {
        Self { seed }
    }

    /// The seed this function digests with
    pub fn seed(&self) -> u32 {
        self.seed
    }

    /// Digest a key to a 32-bit value
    pub fn digest(&self, key: &[u8]) -> u32 {
        digest(self.seed, key)
    }
}

/// Build `count` hash functions seeded `0..count`
pub fn seeded_family(count: u32) -> Vec<SeededHash> {
    (0..count).map(SeededHash::new).collect()
}
