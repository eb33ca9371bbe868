//! Gauge state vocabulary
//!
//! Keys, snapshots and static specs shared by the dispatcher (writes) and
//! the exporter (reads). Values are plain `f64`, last write wins.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Identity of one gauge series
///
/// A bare metric name, or a metric name plus exactly one
/// `(label name, label value)` pair for labeled families.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct GaugeKey {
    /// Metric name without the namespace prefix
    pub name: String,

    /// Optional `(label name, label value)` pair
    pub label: Option<(String, String)>,
}

impl GaugeKey {
    /// Key for an unlabeled gauge
    pub fn scalar(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            label: None,
        }
    }

    /// Key for one series of a labeled gauge family
    pub fn labeled(
        name: impl Into<String>,
        label_name: impl Into<String>,
        label_value: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            label: Some((label_name.into(), label_value.into())),
        }
    }
}

/// Point-in-time copy of all gauge series
///
/// Ordered by key so renderings are deterministic. Series never written
/// are absent and read as `0.0`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GaugeSnapshot(BTreeMap<GaugeKey, f64>);

impl GaugeSnapshot {
    /// Value of a series, `0.0` if it was never written
    pub fn value(&self, key: &GaugeKey) -> f64 {
        self.0.get(key).copied().unwrap_or(0.0)
    }

    /// Shorthand for [`Self::value`] on an unlabeled gauge
    pub fn scalar(&self, name: &str) -> f64 {
        self.value(&GaugeKey::scalar(name))
    }

    /// Whether a series has ever been written
    pub fn contains(&self, key: &GaugeKey) -> bool {
        self.0.contains_key(key)
    }

    /// Series in key order
    pub fn iter(&self) -> impl Iterator<Item = (&GaugeKey, f64)> {
        self.0.iter().map(|(key, value)| (key, *value))
    }

    /// Number of series present
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether no series has been written yet
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromIterator<(GaugeKey, f64)> for GaugeSnapshot {
    fn from_iter<I: IntoIterator<Item = (GaugeKey, f64)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// Static description of one exported gauge
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GaugeSpec {
    /// Metric name without the namespace prefix
    pub name: &'static str,

    /// Operator-facing help text
    pub help: &'static str,

    /// Label name for labeled families, `None` for scalars
    pub label: Option<&'static str>,
}
