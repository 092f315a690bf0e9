//! Domain Layer - Pure filter logic
//!
//! This layer contains:
//! - Partitioned Bloom filter
//! - Seeded hash functions
//! - Analytical false-positive estimates
//! - Evaluator configuration
//!
//! RULES:
//! - No I/O operations
//! - No async code
//! - Pure functions where possible

pub mod bloom_filter;
pub mod config;
pub mod hash_functions;
pub mod parameters;

pub use bloom_filter::BloomFilter;
pub use config::{EvaluatorConfig, EvaluatorConfigBuilder};
pub use hash_functions::{digest, SeededHash};
pub use parameters::{expected_fpr, expected_region_fill, textbook_fpr};
