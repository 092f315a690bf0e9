//! Partitioned Bloom filter
//!
//! The bit array is split into `hash_count` disjoint regions of
//! `slots_per_hash` slots. Hash function `i` only ever addresses region `i`:
//!
//! ```text
//! slot(i, key) = i * slots_per_hash + (digest_i(key) mod slots_per_hash)
//! ```
//!
//! INVARIANTS:
//! - `len() == slots_per_hash * hash_count`, fixed at construction
//! - No false negatives: after `add(k)` and until `reset()`, `exists(k)` is true

use bitvec::prelude::*;

use super::hash_functions::{seeded_family, SeededHash};
use crate::error::FilterError;

/// Bloom filter with one address region per hash function
///
/// False positives are possible, false negatives are not.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BloomFilter {
    /// Slot array, `hash_count` regions laid out back to back
    bits: BitVec<u8, Lsb0>,
    /// Hash functions seeded `0..hash_count`
    hashers: Vec<SeededHash>,
    /// Size of each region
    slots_per_hash: usize,
}

#[inline]
fn slot_index(region: usize, slots_per_hash: usize, hash: u32) -> usize {
    region * slots_per_hash + (hash as usize) % slots_per_hash
}

impl BloomFilter {
    /// Create an empty filter
    ///
    /// # Arguments
    /// * `slots_per_hash` - Size of the address region of each hash function
    /// * `hash_count` - Number of hash functions (and regions)
    ///
    /// # Errors
    /// Rejects zero dimensions, more hash functions than there are 32-bit
    /// seeds, and a total size that overflows `usize`.
    pub fn new(slots_per_hash: usize, hash_count: usize) -> Result<Self, FilterError> {
        if slots_per_hash == 0 {
            return Err(FilterError::ZeroSlots);
        }
        if hash_count == 0 {
            return Err(FilterError::ZeroHashFunctions);
        }
        let seed_count = u32::try_from(hash_count).map_err(|_| FilterError::TooManyHashFunctions {
            count: hash_count,
            max: u64::from(u32::MAX),
        })?;
        let len = slots_per_hash
            .checked_mul(hash_count)
            .ok_or(FilterError::FilterTooLarge {
                slots_per_hash,
                hash_count,
            })?;

        Ok(Self {
            bits: bitvec![u8, Lsb0; 0; len],
            hashers: seeded_family(seed_count),
            slots_per_hash,
        })
    }

    /// Insert a key
    ///
    /// Sets one slot in every region. Adding a key twice is a no-op.
    pub fn add(&mut self, key: &[u8]) {
        let slots = self.slots_per_hash;
        for (region, hash) in self.hashers.iter().enumerate() {
            self.bits
                .set(slot_index(region, slots, hash.digest(key)), true);
        }
    }

    /// Test if a key might have been added
    ///
    /// Returns:
    /// - `true` if every addressed slot is set (could be a false positive)
    /// - `false` as soon as one addressed slot is clear (never a false negative)
    pub fn exists(&self, key: &[u8]) -> bool {
        self.slot_indices(key).all(|idx| self.bits[idx])
    }

    /// Clear every slot, keeping the dimensions and hash functions
    pub fn reset(&mut self) {
        self.bits.fill(false);
    }

    /// Slots addressed by a key, one per region in hash order
    pub fn slot_indices<'a>(&'a self, key: &'a [u8]) -> impl Iterator<Item = usize> + 'a {
        let slots = self.slots_per_hash;
        self.hashers
            .iter()
            .enumerate()
            .map(move |(region, hash)| slot_index(region, slots, hash.digest(key)))
    }

    /// Size of each hash function's region
    pub fn slots_per_hash(&self) -> usize {
        self.slots_per_hash
    }

    /// Number of hash functions
    pub fn hash_count(&self) -> usize {
        self.hashers.len()
    }

    /// Total number of slots
    pub fn len(&self) -> usize {
        self.bits.len()
    }

    /// True when no slot is set
    pub fn is_empty(&self) -> bool {
        self.bits.not_any()
    }

    /// Number of set slots
    pub fn bits_set(&self) -> usize {
        self.bits.count_ones()
    }

    /// Fraction of set slots across the whole array
    pub fn fill_ratio(&self) -> f64 {
        self.bits_set() as f64 / self.len() as f64
    }

    /// Fraction of set slots in the region of hash function `region`
    ///
    /// Returns `None` if `region >= hash_count()`.
    pub fn region_fill(&self, region: usize) -> Option<f64> {
        let start = region.checked_mul(self.slots_per_hash)?;
        let end = start.checked_add(self.slots_per_hash)?;
        self.bits
            .get(start..end)
            .map(|slice| slice.count_ones() as f64 / self.slots_per_hash as f64)
    }

    /// Raw view of the slot array
    pub fn as_bitslice(&self) -> &BitSlice<u8, Lsb0> {
        &self.bits
    }
}
