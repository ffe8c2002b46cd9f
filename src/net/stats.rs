//! 统计信息
//!
//! 定义多播传输的统计数据结构。

/// 网络统计信息
#[derive(Debug, Default)]
pub struct Stats {
    pub sent_dgrams: u64,
    pub sent_bytes: u64,
    pub delivered_dgrams: u64,
    pub delivered_bytes: u64,
}
