//! Service Layer - Orchestration
//!
//! `FprEvaluator` drives the filter through a synthetic workload and feeds
//! each measured fill level to the reporter.

pub mod fpr_evaluator;

pub use fpr_evaluator::FprEvaluator;
