//! # Bloom Probe Runtime
//!
//! Entry point for a false-positive measurement run.
//!
//! ## Startup Sequence
//!
//! 1. Initialise logging (stderr, `RUST_LOG` filter, `info` by default)
//! 2. Load configuration (defaults, environment, flags)
//! 3. Wire the key source and reporter into the evaluator
//! 4. Run every fill level and print the summary

mod config;

use std::io;
use std::sync::Arc;

use anyhow::{Context, Result};
use bloom_probe::{
    FprEvaluator, FprEvaluatorApi, JsonLinesReporter, KeySource, Metrics, Reporter,
    TextReporter, TracingReporter,
};
use clap::Parser;
use tracing::info;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use crate::config::{load_config, Args, OutputFormat};

fn reporter_for(format: OutputFormat) -> Box<dyn Reporter> {
    match format {
        OutputFormat::Text => Box::new(TextReporter::new(io::stdout().lock())),
        OutputFormat::Json => Box::new(JsonLinesReporter::new(io::stdout().lock())),
        OutputFormat::Log => Box::new(TracingReporter),
    }
}

fn main() -> Result<()> {
    // Initialize logging
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(true)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let args = Args::parse();
    let config = load_config(&args);

    info!("===========================================");
    info!("  Bloom Probe v{}", env!("CARGO_PKG_VERSION"));
    info!("===========================================");
    info!(
        "slots_per_hash={} hash_count={} dataset_size={} seed={:?}",
        config.evaluator.slots_per_hash,
        config.evaluator.hash_count,
        config.evaluator.dataset_size,
        config.seed
    );

    let metrics = Arc::new(Metrics::new());
    let mut evaluator = FprEvaluator::new(
        config.evaluator.clone(),
        KeySource::from_seed(config.seed),
        reporter_for(config.format),
    )
    .context("Invalid evaluator configuration")?
    .with_metrics(metrics.clone());

    let curve = evaluator.run().context("False-positive run failed")?;

    let snapshot = metrics.snapshot();
    info!(
        "Measured {} fill levels: {} keys inserted, {} probes, pooled FPR {:.6}, avg trial {} ns",
        curve.len(),
        snapshot.keys_inserted,
        snapshot.lookups_performed,
        snapshot.observed_fpr,
        snapshot.avg_trial_ns
    );

    Ok(())
}
