//! Gauge 状态存储
//!
//! 进程生命周期内的 gauge 当前值。显式实例注入到写读两侧,
//! 不依赖任何全局注册表。

use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use contracts::{GaugeKey, GaugeSnapshot, MetricSink};
use tracing::error;

/// Gauge 存储
///
/// 可廉价克隆的共享句柄:ingestion 任务写入,导出端点按需读取快照。
/// 读写锁允许并发抓取互不阻塞;锁中毒时降级(丢弃写入/返回空快照)
/// 而不是 panic。
#[derive(Debug, Clone, Default)]
pub struct GaugeStore {
    gauges: Arc<RwLock<HashMap<GaugeKey, f64>>>,
}

impl GaugeStore {
    /// 创建空存储
    pub fn new() -> Self {
        Self::default()
    }

    fn set(&self, key: GaugeKey, value: f64) {
        match self.gauges.write() {
            Ok(mut gauges) => {
                gauges.insert(key, value);
            }
            Err(e) => {
                error!(error = %e, "gauge store lock poisoned, write dropped");
            }
        }
    }
}

impl MetricSink for GaugeStore {
    fn set_scalar(&self, name: &str, value: f64) {
        self.set(GaugeKey::scalar(name), value);
    }

    fn set_labeled(&self, name: &str, label: (&str, &str), value: f64) {
        self.set(GaugeKey::labeled(name, label.0, label.1), value);
    }

    fn snapshot(&self) -> GaugeSnapshot {
        match self.gauges.read() {
            Ok(gauges) => gauges
                .iter()
                .map(|(key, value)| (key.clone(), *value))
                .collect(),
            Err(e) => {
                error!(error = %e, "gauge store lock poisoned, snapshot empty");
                GaugeSnapshot::default()
            }
        }
    }
}
