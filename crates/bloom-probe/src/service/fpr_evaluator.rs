//! False-positive evaluator
//!
//! For each fill level `pos` in `0..len / 2` the evaluator adds the first
//! `pos` keys of the dataset, probes every remaining key, and reports the
//! fraction the filter claims to contain. The filter is reset between fill
//! levels and reused for the whole run.

use std::collections::HashSet;
use std::sync::Arc;
use std::time::Instant;

use tracing::{debug, info};

use crate::domain::{expected_fpr, BloomFilter, EvaluatorConfig};
use crate::error::EvalError;
use crate::metrics::{MetricsRecorder, NoOpMetrics};
use crate::ports::{FprCurve, FprEvaluatorApi, FprSample, KeyGenerator, Reporter};

/// Draws allowed per requested key when duplicates are rejected
const UNIQUE_DRAW_FACTOR: usize = 16;

/// Evaluator implementation
///
/// Implements the `FprEvaluatorApi` port using an injected key source and
/// result sink.
pub struct FprEvaluator<G: KeyGenerator, R: Reporter> {
    config: EvaluatorConfig,
    filter: BloomFilter,
    generator: G,
    reporter: R,
    metrics: Arc<dyn MetricsRecorder>,
}

impl<G: KeyGenerator, R: Reporter> FprEvaluator<G, R> {
    /// Create an evaluator for a validated configuration
    pub fn new(config: EvaluatorConfig, generator: G, reporter: R) -> Result<Self, EvalError> {
        config.validate()?;
        let filter = BloomFilter::new(config.slots_per_hash, config.hash_count)?;

        Ok(Self {
            config,
            filter,
            generator,
            reporter,
            metrics: Arc::new(NoOpMetrics),
        })
    }

    /// Record counters into the given recorder
    pub fn with_metrics(mut self, metrics: Arc<dyn MetricsRecorder>) -> Self {
        self.metrics = metrics;
        self
    }

    pub fn config(&self) -> &EvaluatorConfig {
        &self.config
    }

    /// The filter under test; empty between runs
    pub fn filter(&self) -> &BloomFilter {
        &self.filter
    }

    /// Consume the evaluator, returning its reporter
    pub fn into_reporter(self) -> R {
        self.reporter
    }

    /// Draw `dataset_size` keys from the generator
    ///
    /// With `unique_keys` set, repeated keys are discarded; generation gives
    /// up after `dataset_size * 16` draws.
    pub fn generate_dataset(&mut self) -> Result<Vec<String>, EvalError> {
        let requested = self.config.dataset_size;

        if !self.config.unique_keys {
            return Ok((0..requested).map(|_| self.generator.next_key()).collect());
        }

        let max_attempts = requested.saturating_mul(UNIQUE_DRAW_FACTOR);
        let mut seen = HashSet::with_capacity(requested);
        let mut dataset = Vec::with_capacity(requested);
        let mut attempts = 0;

        while dataset.len() < requested {
            if attempts == max_attempts {
                return Err(EvalError::KeyGenerationExhausted {
                    produced: dataset.len(),
                    requested,
                    attempts,
                });
            }
            attempts += 1;

            let key = self.generator.next_key();
            if seen.insert(key.clone()) {
                dataset.push(key);
            }
        }

        Ok(dataset)
    }

    /// Measure one fill level, leaving the filter empty afterwards
    fn measure_fill_level(&mut self, dataset: &[String], fill: usize) -> FprSample {
        let started = Instant::now();

        for key in &dataset[..fill] {
            self.filter.add(key.as_bytes());
            self.metrics.record_insert();
        }

        let mut false_positives = 0;
        for key in &dataset[fill..] {
            let found = self.filter.exists(key.as_bytes());
            self.metrics.record_lookup(found);
            if found {
                false_positives += 1;
            }
        }

        self.filter.reset();
        self.metrics.record_trial(started.elapsed());

        let probes = dataset.len() - fill;
        FprSample {
            fill,
            probes,
            false_positives,
            rate: false_positives as f64 / probes as f64,
            expected_rate: expected_fpr(self.config.slots_per_hash, self.config.hash_count, fill),
        }
    }
}

impl<G: KeyGenerator, R: Reporter> FprEvaluatorApi for FprEvaluator<G, R> {
    fn run(&mut self) -> Result<FprCurve, EvalError> {
        let dataset = self.generate_dataset()?;
        self.run_with_dataset(&dataset)
    }

    fn run_with_dataset(&mut self, dataset: &[String]) -> Result<FprCurve, EvalError> {
        let levels = dataset.len() / 2;
        info!(
            slots_per_hash = self.config.slots_per_hash,
            hash_count = self.config.hash_count,
            dataset = dataset.len(),
            levels,
            "Starting false-positive run"
        );

        self.filter.reset();
        let mut curve = Vec::with_capacity(levels);

        for fill in 0..levels {
            let sample = self.measure_fill_level(dataset, fill);
            debug!(
                fill,
                false_positives = sample.false_positives,
                probes = sample.probes,
                "Fill level done"
            );
            self.reporter.report(&sample)?;
            curve.push(sample);
        }

        self.reporter.finish()?;

        info!(
            levels = curve.len(),
            final_rate = curve.last().map(|s| s.rate).unwrap_or(0.0),
            "False-positive run complete"
        );
        Ok(curve)
    }
}
