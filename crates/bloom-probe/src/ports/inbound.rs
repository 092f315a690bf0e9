//! Inbound Ports (Driving Ports)
//!
//! The API the runtime uses to drive a false-positive measurement.

use serde::Serialize;

use crate::error::EvalError;

/// Measured false positive rate at one fill level
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct FprSample {
    /// Keys added before probing
    pub fill: usize,
    /// Keys probed (never added in this trial)
    pub probes: usize,
    /// Probes the filter reported as present
    pub false_positives: usize,
    /// `false_positives / probes`
    pub rate: f64,
    /// Analytical estimate for the same fill level
    pub expected_rate: f64,
}

/// Samples of one run, ordered by fill level
pub type FprCurve = Vec<FprSample>;

/// False-positive evaluator API (Driving Port)
pub trait FprEvaluatorApi {
    /// Generate a dataset and measure every fill level `0..dataset_size / 2`
    fn run(&mut self) -> Result<FprCurve, EvalError>;

    /// Measure every fill level `0..dataset.len() / 2` against a fixed dataset
    fn run_with_dataset(&mut self, dataset: &[String]) -> Result<FprCurve, EvalError>;
}
