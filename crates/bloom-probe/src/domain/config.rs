//! Evaluator configuration and validation
//!
//! # Example
//!
//! ```
//! use bloom_probe::domain::EvaluatorConfigBuilder;
//!
//! let config = EvaluatorConfigBuilder::new()
//!     .slots_per_hash(1000)
//!     .hash_count(5)
//!     .dataset_size(1000)
//!     .build()
//!     .expect("Valid config");
//! assert_eq!(config.dataset_size, 1000);
//! ```

use serde::{Deserialize, Serialize};

use crate::error::EvalError;

/// Dimensions of the filter under test and the size of the key dataset
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct EvaluatorConfig {
    /// Size of each hash function's region
    pub slots_per_hash: usize,
    /// Number of hash functions
    pub hash_count: usize,
    /// Number of keys generated; fill levels `0..dataset_size / 2` are measured
    pub dataset_size: usize,
    /// Discard duplicate keys while generating the dataset
    pub unique_keys: bool,
}

impl Default for EvaluatorConfig {
    fn default() -> Self {
        Self {
            slots_per_hash: 1000,
            hash_count: 5,
            dataset_size: 1000,
            unique_keys: false,
        }
    }
}

impl EvaluatorConfig {
    /// Create a new configuration with validation
    pub fn new(
        slots_per_hash: usize,
        hash_count: usize,
        dataset_size: usize,
    ) -> Result<Self, EvalError> {
        let config = Self {
            slots_per_hash,
            hash_count,
            dataset_size,
            unique_keys: false,
        };
        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), EvalError> {
        if self.slots_per_hash == 0 {
            return Err(EvalError::InvalidConfig(
                "slots_per_hash must be positive".to_string(),
            ));
        }

        if self.hash_count == 0 {
            return Err(EvalError::InvalidConfig(
                "hash_count must be positive".to_string(),
            ));
        }

        // dataset_size / 2 fill levels are measured, so at least one needs 2 keys
        if self.dataset_size < 2 {
            return Err(EvalError::InvalidConfig(format!(
                "dataset_size must be at least 2, got {}",
                self.dataset_size
            )));
        }

        Ok(())
    }

    /// Number of fill levels a run measures
    pub fn fill_levels(&self) -> usize {
        self.dataset_size / 2
    }

    /// Builder-style method to set the region size
    pub fn with_slots_per_hash(mut self, slots: usize) -> Self {
        self.slots_per_hash = slots;
        self
    }

    /// Builder-style method to set the number of hash functions
    pub fn with_hash_count(mut self, count: usize) -> Self {
        self.hash_count = count;
        self
    }

    /// Builder-style method to set the dataset size
    pub fn with_dataset_size(mut self, size: usize) -> Self {
        self.dataset_size = size;
        self
    }

    /// Builder-style method to toggle duplicate-key rejection
    pub fn with_unique_keys(mut self, unique: bool) -> Self {
        self.unique_keys = unique;
        self
    }
}

/// Builder for EvaluatorConfig with validation
#[derive(Default)]
pub struct EvaluatorConfigBuilder {
    slots_per_hash: Option<usize>,
    hash_count: Option<usize>,
    dataset_size: Option<usize>,
    unique_keys: Option<bool>,
}

impl EvaluatorConfigBuilder {
    /// Create a new builder with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the size of each hash function's region
    pub fn slots_per_hash(mut self, slots: usize) -> Self {
        self.slots_per_hash = Some(slots);
        self
    }

    /// Set the number of hash functions
    pub fn hash_count(mut self, count: usize) -> Self {
        self.hash_count = Some(count);
        self
    }

    /// Set the number of keys to generate
    pub fn dataset_size(mut self, size: usize) -> Self {
        self.dataset_size = Some(size);
        self
    }

    /// Reject duplicate keys during generation
    pub fn unique_keys(mut self, unique: bool) -> Self {
        self.unique_keys = Some(unique);
        self
    }

    /// Build the EvaluatorConfig, validating all parameters
    pub fn build(self) -> Result<EvaluatorConfig, EvalError> {
        let config = self.build_unchecked();
        config.validate()?;
        Ok(config)
    }

    /// Build without validation
    pub fn build_unchecked(self) -> EvaluatorConfig {
        let defaults = EvaluatorConfig::default();

        EvaluatorConfig {
            slots_per_hash: self.slots_per_hash.unwrap_or(defaults.slots_per_hash),
            hash_count: self.hash_count.unwrap_or(defaults.hash_count),
            dataset_size: self.dataset_size.unwrap_or(defaults.dataset_size),
            unique_keys: self.unique_keys.unwrap_or(defaults.unique_keys),
        }
    }
}
