//! # Contracts
//!
//! Frozen interface contracts (ICD), defining inter-stage data structures and traits.
//! All business crates can only depend on this crate, reverse dependencies are prohibited.
//!
//! ## Data Flow
//! - `Frame` (ingestion) → `DecodeOutcome`/`Record` (decoder) → gauge writes (dispatcher)
//! - Gauge state is read back through [`MetricSink::snapshot`] by the exporter only

mod error;
mod frame;
mod gauge;
mod record;
mod sink;

pub use error::*;
pub use frame::Frame;
pub use gauge::*;
pub use record::*;
pub use sink::MetricSink;
