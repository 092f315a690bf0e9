//! Reporter adapters
//!
//! - `TextReporter`: one `"<fill>: <rate>"` line per sample
//! - `JsonLinesReporter`: one JSON object per line
//! - `TracingReporter`: structured `info!` events

use std::io::Write;

use tracing::info;

use crate::error::EvalError;
use crate::ports::inbound::FprSample;
use crate::ports::outbound::Reporter;

/// Plain text lines, `"<fill>: <rate>"`
pub struct TextReporter<W: Write> {
    out: W,
}

impl<W: Write> TextReporter<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> Reporter for TextReporter<W> {
    fn report(&mut self, sample: &FprSample) -> Result<(), EvalError> {
        writeln!(self.out, "{}: {}", sample.fill, sample.rate)?;
        Ok(())
    }

    fn finish(&mut self) -> Result<(), EvalError> {
        self.out.flush()?;
        Ok(())
    }
}

/// Newline-delimited JSON samples
pub struct JsonLinesReporter<W: Write> {
    out: W,
}

impl<W: Write> JsonLinesReporter<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> Reporter for JsonLinesReporter<W> {
    fn report(&mut self, sample: &FprSample) -> Result<(), EvalError> {
        serde_json::to_writer(&mut self.out, sample)?;
        self.out.write_all(b"\n")?;
        Ok(())
    }

    fn finish(&mut self) -> Result<(), EvalError> {
        self.out.flush()?;
        Ok(())
    }
}

/// Samples as tracing events
#[derive(Clone, Copy, Debug, Default)]
pub struct TracingReporter;

impl Reporter for TracingReporter {
    fn report(&mut self, sample: &FprSample) -> Result<(), EvalError> {
        info!(
            fill = sample.fill,
            probes = sample.probes,
            false_positives = sample.false_positives,
            rate = sample.rate,
            expected = sample.expected_rate,
            "Fill level measured"
        );
        Ok(())
    }
}
