//! 数据报类型
//!
//! 定义多播信道上传输的数据报。载荷以 `Arc` 共享：
//! 同一分片投递给 N 个接收者时不复制字节。

use super::group::GroupAddr;
use super::id::NodeId;
use std::sync::Arc;

/// 多播数据报
#[derive(Debug, Clone)]
pub struct Datagram {
    pub id: u64,
    /// 分片序号（在整个广播序列中从 0 递增）
    pub seq: u64,
    pub from: NodeId,
    pub group: GroupAddr,
    pub data: Arc<[u8]>,
}

impl Datagram {
    /// 载荷字节数
    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}
