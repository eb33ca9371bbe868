//! Frame - Ingestion 输出
//!
//! 按行切分出的原始协议帧。

use bytes::Bytes;
use serde::{Deserialize, Serialize};

/// 协议帧
///
/// 字节流中一条完整的行,含行终止符 (`\n`,通常前面还有 `\r`)。
/// 只由 FrameReader 产出,内容在解码之前不做任何检查。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Frame {
    /// 原始字节 (零拷贝)
    pub payload: Bytes,
}

impl Frame {
    /// 由一条完整行构造帧
    pub fn new(payload: Bytes) -> Self {
        Self { payload }
    }

    /// 帧的原始字节 (含终止符)
    pub fn as_bytes(&self) -> &[u8] {
        &self.payload
    }

    /// 帧长度 (字节)
    pub fn len(&self) -> usize {
        self.payload.len()
    }

    /// 是否为空帧
    pub fn is_empty(&self) -> bool {
        self.payload.is_empty()
    }
}

impl From<&'static str> for Frame {
    fn from(line: &'static str) -> Self {
        Self::new(Bytes::from_static(line.as_bytes()))
    }
}
