//! # Dispatcher
//!
//! 记录分发模块。
//!
//! 负责：
//! - 维护静态 gauge 目录（名称、帮助文本、标签）
//! - 把 `Record` 映射为 gauge 写入
//! - 冻结策略：void 的位置记录不产生任何写入

pub mod dispatch;
pub mod gauges;

pub use dispatch::apply;
pub use gauges::register_gauges;
