//! Adapters Layer - Port implementations
//!
//! - `key_generators`: random and seeded UUID key sources
//! - `reporters`: text, JSON lines, and tracing sinks for samples

pub mod key_generators;
pub mod reporters;

pub use key_generators::{KeySource, SeededKeyGenerator, UuidKeyGenerator};
pub use reporters::{JsonLinesReporter, TextReporter, TracingReporter};
