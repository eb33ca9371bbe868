//! MetricSink trait - Dispatcher output interface
//!
//! The only seam between record dispatch and metric exposition.

use crate::GaugeSnapshot;

/// Gauge write/read-back capability
///
/// Implementations hold the process-lifetime gauge state. Writes are
/// plain replacement, last write wins; no arithmetic, no range checks.
/// The sink is shared between the ingestion task (writes) and the
/// exporter task (snapshots), hence `&self` receivers and `Send + Sync`.
pub trait MetricSink: Send + Sync {
    /// Replace the value of an unlabeled gauge
    fn set_scalar(&self, name: &str, value: f64);

    /// Replace the value of one series of a labeled gauge family
    fn set_labeled(&self, name: &str, label: (&str, &str), value: f64);

    /// Point-in-time copy of every series written so far
    fn snapshot(&self) -> GaugeSnapshot;
}
