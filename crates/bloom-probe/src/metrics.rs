//! Metrics hooks for evaluator runs
//!
//! Counters for trials, insertions, and probes so a run can be summarised
//! after the fact.
//!
//! ## Usage
//!
//! ```
//! use bloom_probe::metrics::Metrics;
//! use std::time::Duration;
//!
//! let metrics = Metrics::new();
//! metrics.record_lookup(true);
//! metrics.record_lookup(false);
//! metrics.record_trial(Duration::from_micros(50));
//! assert_eq!(metrics.observed_fpr(), 0.5);
//! ```

use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

/// Metrics collector for evaluator runs
#[derive(Default)]
pub struct Metrics {
    /// Fill levels measured
    pub trials_run: AtomicU64,
    /// Keys added across all trials
    pub keys_inserted: AtomicU64,
    /// Probes of keys that were never added
    pub lookups_performed: AtomicU64,
    /// Probes answered with "present"
    pub false_positives: AtomicU64,
    /// Cumulative trial time in nanoseconds
    pub trial_time_ns: AtomicU64,
}

impl Metrics {
    /// Create a new metrics collector
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one completed fill level
    pub fn record_trial(&self, duration: Duration) {
        self.trials_run.fetch_add(1, Ordering::Relaxed);
        self.trial_time_ns
            .fetch_add(duration.as_nanos() as u64, Ordering::Relaxed);
    }

    /// Record one key insertion
    pub fn record_insert(&self) {
        self.keys_inserted.fetch_add(1, Ordering::Relaxed);
    }

    /// Record one probe of a key that was never added
    pub fn record_lookup(&self, found: bool) {
        self.lookups_performed.fetch_add(1, Ordering::Relaxed);
        if found {
            self.false_positives.fetch_add(1, Ordering::Relaxed);
        }
    }

    /// Get current metrics snapshot
    pub fn snapshot(&self) -> MetricsSnapshot {
        MetricsSnapshot {
            trials_run: self.trials_run.load(Ordering::Relaxed),
            keys_inserted: self.keys_inserted.load(Ordering::Relaxed),
            lookups_performed: self.lookups_performed.load(Ordering::Relaxed),
            false_positives: self.false_positives.load(Ordering::Relaxed),
            avg_trial_ns: self.avg_trial_time_ns(),
            observed_fpr: self.observed_fpr(),
        }
    }

    /// Calculate average trial time in nanoseconds
    pub fn avg_trial_time_ns(&self) -> u64 {
        let total = self.trial_time_ns.load(Ordering::Relaxed);
        let count = self.trials_run.load(Ordering::Relaxed);
        if count > 0 {
            total / count
        } else {
            0
        }
    }

    /// False positives over all probes, pooled across fill levels
    pub fn observed_fpr(&self) -> f64 {
        let total = self.lookups_performed.load(Ordering::Relaxed);
        let positive = self.false_positives.load(Ordering::Relaxed);
        if total > 0 {
            positive as f64 / total as f64
        } else {
            0.0
        }
    }

    /// Reset all counters
    pub fn reset(&self) {
        self.trials_run.store(0, Ordering::Relaxed);
        self.keys_inserted.store(0, Ordering::Relaxed);
        self.lookups_performed.store(0, Ordering::Relaxed);
        self.false_positives.store(0, Ordering::Relaxed);
        self.trial_time_ns.store(0, Ordering::Relaxed);
    }
}

/// Point-in-time metrics snapshot
#[derive(Clone, Debug, Default, PartialEq)]
pub struct MetricsSnapshot {
    pub trials_run: u64,
    pub keys_inserted: u64,
    pub lookups_performed: u64,
    pub false_positives: u64,
    pub avg_trial_ns: u64,
    pub observed_fpr: f64,
}

/// Trait for custom metrics recording implementations
pub trait MetricsRecorder: Send + Sync {
    /// Record one completed fill level
    fn record_trial(&self, duration: Duration);

    /// Record one key insertion
    fn record_insert(&self);

    /// Record one probe of a key that was never added
    fn record_lookup(&self, found: bool);
}

/// No-op metrics recorder for when metrics are disabled
#[derive(Default)]
pub struct NoOpMetrics;

impl MetricsRecorder for NoOpMetrics {
    fn record_trial(&self, _: Duration) {}
    fn record_insert(&self) {}
    fn record_lookup(&self, _: bool) {}
}

impl MetricsRecorder for Metrics {
    fn record_trial(&self, duration: Duration) {
        Metrics::record_trial(self, duration);
    }

    fn record_insert(&self) {
        Metrics::record_insert(self);
    }

    fn record_lookup(&self, found: bool) {
        Metrics::record_lookup(self, found);
    }
}
