//! Ports Layer - Trait definitions
//!
//! - `inbound`: API the runtime drives (`FprEvaluatorApi`)
//! - `outbound`: collaborators the evaluator depends on (`KeyGenerator`, `Reporter`)

pub mod inbound;
pub mod outbound;

pub use inbound::{FprCurve, FprEvaluatorApi, FprSample};
pub use outbound::{KeyGenerator, Reporter};
