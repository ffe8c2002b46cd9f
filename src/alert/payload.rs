//! 告警载荷与分片划分
//!
//! 载荷是一段只读字节序列，启动时一次性读入内存，之后以 `Arc`
//! 共享给每个发送事件，不再复制。分片划分是纯算术：偏移互不相交、
//! 连续、恰好覆盖 `[0, L)`。

use crate::error::SimError;
use std::path::Path;
use std::sync::Arc;

/// 告警载荷：只读字节序列。空载荷合法（零分片）。
#[derive(Debug, Clone)]
pub struct AlertPayload {
    data: Arc<[u8]>,
}

impl AlertPayload {
    pub fn new(bytes: Vec<u8>) -> Self {
        Self { data: bytes.into() }
    }

    /// 从文件完整读入。文件缺失或不可读是致命的输入错误。
    pub fn load(path: impl AsRef<Path>) -> Result<Self, SimError> {
        let path = path.as_ref();
        let bytes = std::fs::read(path).map_err(|source| SimError::Input {
            path: path.display().to_string(),
            source,
        })?;
        Ok(Self::new(bytes))
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn bytes(&self) -> &[u8] {
        &self.data
    }

    /// 共享底层缓冲（零拷贝）
    pub fn share(&self) -> Arc<[u8]> {
        Arc::clone(&self.data)
    }

    /// 分片总数 = ceil(L / chunk_bytes)；空载荷为 0。
    ///
    /// 调用前提：chunk_bytes > 0（由 `BroadcastConfig::validate` 保证）。
    pub fn chunk_count(&self, chunk_bytes: usize) -> u64 {
        (self.len().div_ceil(chunk_bytes)) as u64
    }

    /// 惰性生成分片区间
    pub fn chunk_spans(&self, chunk_bytes: usize) -> ChunkSpans {
        ChunkSpans {
            total: self.len(),
            chunk_bytes,
            offset: 0,
        }
    }
}

/// 一个分片区间 `[offset, offset + len)`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChunkSpan {
    pub offset: usize,
    pub len: usize,
}

/// 分片区间迭代器
#[derive(Debug, Clone)]
pub struct ChunkSpans {
    total: usize,
    chunk_bytes: usize,
    offset: usize,
}

impl Iterator for ChunkSpans {
    type Item = ChunkSpan;

    fn next(&mut self) -> Option<ChunkSpan> {
        if self.offset >= self.total {
            return None;
        }
        let len = self.chunk_bytes.min(self.total - self.offset);
        let span = ChunkSpan {
            offset: self.offset,
            len,
        };
        self.offset += len;
        Some(span)
    }
}
