//! Record - Decoder 输出
//!
//! 已解码语句的强类型记录。

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::SentenceError;

/// 消费的语句种类
///
/// 按地址字段后三位识别,与 talker 前缀无关。
/// 其余种类全部跳过,不报错。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SentenceKind {
    /// 定位数据 (fix)
    Gga,
    /// 参与定位的卫星与精度因子
    Gsa,
    /// 推荐最简定位信息
    Rmc,
}

impl fmt::Display for SentenceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Gga => write!(f, "GGA"),
            Self::Gsa => write!(f, "GSA"),
            Self::Rmc => write!(f, "RMC"),
        }
    }
}

/// 解码记录
///
/// 每个变体只携带 dispatcher 需要的字段,解码后即消费,不落盘。
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Record {
    /// GGA: 定位
    Fix(FixData),
    /// GSA: 卫星/精度因子
    Satellites(SatelliteInfo),
    /// RMC: 位置/速度/航向
    Position(PositionData),
}

impl Record {
    /// 记录来源的语句种类
    pub fn kind(&self) -> SentenceKind {
        match self {
            Self::Fix(_) => SentenceKind::Gga,
            Self::Satellites(_) => SentenceKind::Gsa,
            Self::Position(_) => SentenceKind::Rmc,
        }
    }
}

/// GGA 定位数据
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FixData {
    /// 海拔 (米, 平均海平面)
    pub altitude: f64,
}

/// GSA 卫星与精度因子
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SatelliteInfo {
    /// 参与定位的卫星数
    pub used: u32,

    /// 位置精度因子 (PDOP)
    pub pdop: f64,

    /// 水平精度因子 (HDOP)
    pub hdop: f64,

    /// 垂直精度因子 (VDOP)
    pub vdop: f64,
}

/// RMC 位置数据
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PositionData {
    /// 定位有效 (status == 'A')
    pub active: bool,

    /// 纬度 (十进制度, 南纬为负)
    pub latitude: f64,

    /// 经度 (十进制度, 西经为负)
    pub longitude: f64,

    /// 地速 (节)
    pub speed: f64,

    /// 磁偏角 (度, 西偏为负)
    pub variation: f64,

    /// 真航向 (度)
    pub track: f64,
}

/// 单帧解码结果
///
/// `Malformed` 只说明这一帧坏了,不代表流坏了;流级错误见 `StreamError`。
#[derive(Debug, Clone, PartialEq)]
pub enum DecodeOutcome {
    /// 成功解码
    Decoded(Record),
    /// 未消费的语句种类 (静默跳过, 永不视为错误)
    UnknownKind,
    /// 帧损坏 (告警后丢弃)
    Malformed(SentenceError),
}
