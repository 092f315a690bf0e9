//! # Bloom Probe
//!
//! A partitioned Bloom filter and a harness that measures its empirical
//! false-positive rate as the filter fills.
//!
//! ## Architecture
//!
//! This crate follows Hexagonal Architecture (Ports & Adapters):
//!
//! - **Domain Layer** (`domain/`): Pure logic, no I/O
//!   - `BloomFilter`: one address region of `slots_per_hash` slots per hash function
//!   - `SeededHash`: MurmurHash3 (32-bit) seeded `0..hash_count`
//!   - `EvaluatorConfig`: Configuration with validation
//!   - `parameters`: Analytical false-positive estimates
//!
//! - **Ports Layer** (`ports/`): Trait definitions
//!   - `FprEvaluatorApi`: Driving port (inbound API)
//!   - `KeyGenerator`, `Reporter`: Driven ports
//!
//! - **Service Layer** (`service/`): Orchestration
//!   - `FprEvaluator`: Implements `FprEvaluatorApi`
//!
//! - **Adapters Layer** (`adapters/`): External collaborators
//!   - `UuidKeyGenerator`, `SeededKeyGenerator`: key sources
//!   - `TextReporter`, `JsonLinesReporter`, `TracingReporter`: result sinks
//!
//! ## Invariants
//!
//! - **No false negatives**: if added and not reset since, `exists()` MUST return true
//! - **Fixed size**: `len() == slots_per_hash * hash_count` for the filter's lifetime
//! - **Disjoint regions**: hash `i` only addresses slots `i*s .. (i+1)*s`
//!
//! ## Usage Example
//!
//! ```
//! use bloom_probe::BloomFilter;
//!
//! let mut filter = BloomFilter::new(10, 3)?;
//! filter.add(b"a");
//! assert!(filter.exists(b"a"));
//!
//! filter.reset();
//! assert!(!filter.exists(b"a"));
//! # Ok::<(), bloom_probe::FilterError>(())
//! ```
//!
//! ## Measuring a curve
//!
//! ```
//! use bloom_probe::{
//!     EvaluatorConfig, FprEvaluator, FprEvaluatorApi, SeededKeyGenerator, TracingReporter,
//! };
//!
//! let config = EvaluatorConfig::new(1000, 5, 100)?;
//! let mut evaluator = FprEvaluator::new(config, SeededKeyGenerator::new(1), TracingReporter)?;
//! let curve = evaluator.run()?;
//! assert_eq!(curve.len(), 50);
//! # Ok::<(), bloom_probe::EvalError>(())
//! ```

pub mod adapters;
pub mod domain;
pub mod error;
pub mod metrics;
pub mod ports;
pub mod service;

// Re-exports for convenience
pub use adapters::{
    JsonLinesReporter, KeySource, SeededKeyGenerator, TextReporter, TracingReporter,
    UuidKeyGenerator,
};
pub use domain::{BloomFilter, EvaluatorConfig, EvaluatorConfigBuilder, SeededHash};
pub use error::{EvalError, FilterError};
pub use metrics::{Metrics, MetricsRecorder, MetricsSnapshot, NoOpMetrics};
pub use ports::{FprCurve, FprEvaluatorApi, FprSample, KeyGenerator, Reporter};
pub use service::FprEvaluator;
