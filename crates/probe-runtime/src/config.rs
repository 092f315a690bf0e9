//! Runtime configuration
//!
//! Layers, lowest to highest precedence:
//! 1. `EvaluatorConfig::default()`
//! 2. Environment (`BLOOM_SLOTS_PER_HASH`, `BLOOM_HASH_COUNT`,
//!    `BLOOM_DATASET_SIZE`, `BLOOM_KEY_SEED`)
//! 3. Command-line flags

use bloom_probe::EvaluatorConfig;
use clap::{Parser, ValueEnum};
use tracing::{info, warn};

/// Output format for measured samples
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// `<fill>: <rate>` lines on stdout
    #[default]
    Text,
    /// One JSON object per line on stdout
    Json,
    /// Structured log events only
    Log,
}

/// Measure the false-positive curve of a partitioned Bloom filter
#[derive(Parser, Debug, Default)]
#[command(name = "probe-runtime")]
#[command(about = "Measure Bloom filter false-positive rate as it fills")]
pub struct Args {
    /// Slots in each hash function's region
    #[arg(short = 's', long)]
    pub slots_per_hash: Option<usize>,

    /// Number of hash functions
    #[arg(short = 'k', long)]
    pub hash_count: Option<usize>,

    /// Number of keys generated; half of them are used as fill levels
    #[arg(short = 'n', long)]
    pub dataset_size: Option<usize>,

    /// Reject duplicate keys while generating the dataset
    #[arg(long)]
    pub unique_keys: bool,

    /// Seed for reproducible keys (random UUIDs when omitted)
    #[arg(long)]
    pub seed: Option<u64>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}

/// Fully resolved runtime configuration
#[derive(Clone, Debug, PartialEq)]
pub struct RuntimeConfig {
    pub evaluator: EvaluatorConfig,
    pub seed: Option<u64>,
    pub format: OutputFormat,
}

fn parse_var<T: std::str::FromStr>(name: &str, value: Option<String>) -> Option<T> {
    let raw = value?;
    match raw.parse() {
        Ok(parsed) => {
            info!("Loaded {} from environment", name);
            Some(parsed)
        }
        Err(_) => {
            warn!("Ignoring {}={:?}: not a valid number", name, raw);
            None
        }
    }
}

/// Build configuration from an environment lookup and parsed flags
pub fn resolve<F>(args: &Args, env: F) -> RuntimeConfig
where
    F: Fn(&str) -> Option<String>,
{
    let mut evaluator = EvaluatorConfig::default();
    let mut seed = None;

    if let Some(slots) = parse_var("BLOOM_SLOTS_PER_HASH", env("BLOOM_SLOTS_PER_HASH")) {
        evaluator.slots_per_hash = slots;
    }
    if let Some(count) = parse_var("BLOOM_HASH_COUNT", env("BLOOM_HASH_COUNT")) {
        evaluator.hash_count = count;
    }
    if let Some(size) = parse_var("BLOOM_DATASET_SIZE", env("BLOOM_DATASET_SIZE")) {
        evaluator.dataset_size = size;
    }
    if let Some(value) = parse_var("BLOOM_KEY_SEED", env("BLOOM_KEY_SEED")) {
        seed = Some(value);
    }

    if let Some(slots) = args.slots_per_hash {
        evaluator.slots_per_hash = slots;
    }
    if let Some(count) = args.hash_count {
        evaluator.hash_count = count;
    }
    if let Some(size) = args.dataset_size {
        evaluator.dataset_size = size;
    }
    if args.unique_keys {
        evaluator.unique_keys = true;
    }
    if args.seed.is_some() {
        seed = args.seed;
    }

    RuntimeConfig {
        evaluator,
        seed,
        format: args.format,
    }
}

/// Load configuration from the process environment and parsed flags
pub fn load_config(args: &Args) -> RuntimeConfig {
    resolve(args, |name| std::env::var(name).ok())
}
