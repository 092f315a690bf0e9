//! Outbound Ports (Driven Ports)
//!
//! Collaborators the evaluator needs: a source of keys and a sink for results.

use crate::error::EvalError;
use crate::ports::inbound::FprSample;

/// Source of opaque string keys
///
/// Keys only need to be distinguishable byte strings; no format is required.
pub trait KeyGenerator {
    /// Produce the next key
    fn next_key(&mut self) -> String;
}

impl<F> KeyGenerator for F
where
    F: FnMut() -> String,
{
    fn next_key(&mut self) -> String {
        self()
    }
}

/// Sink for measured samples
pub trait Reporter {
    /// Render one sample
    ///
    /// An error aborts the run.
    fn report(&mut self, sample: &FprSample) -> Result<(), EvalError>;

    /// Called once after the last sample
    fn finish(&mut self) -> Result<(), EvalError> {
        Ok(())
    }
}

impl<R: Reporter + ?Sized> Reporter for &mut R {
    fn report(&mut self, sample: &FprSample) -> Result<(), EvalError> {
        (**self).report(sample)
    }

    fn finish(&mut self) -> Result<(), EvalError> {
        (**self).finish()
    }
}

impl<R: Reporter + ?Sized> Reporter for Box<R> {
    fn report(&mut self, sample: &FprSample) -> Result<(), EvalError> {
        (**self).report(sample)
    }

    fn finish(&mut self) -> Result<(), EvalError> {
        (**self).finish()
    }
}
