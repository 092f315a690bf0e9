//! Integration tests across the filter, the evaluator, and the adapters

pub mod fpr_curve;
