//! Ingestion loop and its statistics.

mod orchestrator;
mod stats;

pub use orchestrator::IngestLoop;
pub use stats::IngestStats;
