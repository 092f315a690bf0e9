//! Analytical false-positive estimates
//!
//! Formulas for the partitioned layout (one region of `s` slots per hash):
//! - fill(n) = 1 - (1 - 1/s)^n       -- expected fraction of set slots in a region
//! - FPR(n)  = fill(n)^k             -- a probe must hit a set slot in every region
//!
//! The shared-table estimate `(1 - e^(-kn/m))^k` is kept for comparison.

/// Expected fraction of set slots in one region after `n` distinct keys
pub fn expected_region_fill(slots_per_hash: usize, n: usize) -> f64 {
    if slots_per_hash == 0 {
        return 1.0;
    }
    let miss = 1.0 - 1.0 / slots_per_hash as f64;
    1.0 - miss.powf(n as f64)
}

/// Expected false positive rate of the partitioned filter after `n` distinct keys
pub fn expected_fpr(slots_per_hash: usize, hash_count: usize, n: usize) -> f64 {
    expected_region_fill(slots_per_hash, n).powf(hash_count as f64)
}

/// Shared-table false positive estimate for `m` bits, `n` keys, `k` hashes
///
/// Formula: FPR = (1 - e^(-kn/m))^k
pub fn textbook_fpr(m: usize, n: usize, k: usize) -> f64 {
    if m == 0 {
        return 1.0;
    }
    let exponent = -(k as f64) * (n as f64) / (m as f64);
    (1.0 - exponent.exp()).powf(k as f64)
}
