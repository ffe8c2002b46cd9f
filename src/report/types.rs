use crate::error::SimError;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// 一条接收事件（JSON）
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportEvent {
    /// 仿真时间（纳秒，和 `SimTime.0` 同口径）
    pub t_ns: u64,
    /// 仿真时间（秒，浮点，接收日志口径）
    pub t_secs: f64,
    pub receiver: usize,
    pub receiver_name: String,
    /// 分片序号
    pub seq: u64,
    pub bytes: usize,
}

/// 单个接收者的汇总
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReceiverReport {
    pub receiver: usize,
    pub receiver_name: String,
    /// 收到的分片数
    pub received: u64,
    /// 到达顺序重组是否还原出完整载荷
    pub complete: bool,
}

/// 一次仿真运行的接收报告
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReceptionReport {
    pub payload_bytes: usize,
    pub chunk_bytes: usize,
    /// 期望分片数 = ceil(payload_bytes / chunk_bytes)
    pub chunk_count: u64,
    /// 实际发出的分片数（停止时刻可能截断序列）
    pub chunks_sent: u64,
    pub stop_ns: u64,
    pub receivers: Vec<ReceiverReport>,
    pub events: Vec<ReportEvent>,
}

impl ReceptionReport {
    /// 写成 JSON 文件
    pub fn write_json(&self, path: impl AsRef<Path>) -> Result<(), SimError> {
        let path = path.as_ref();
        let raw = serde_json::to_string_pretty(self).map_err(|e| {
            SimError::Input {
                path: path.display().to_string(),
                source: std::io::Error::other(e),
            }
        })?;
        std::fs::write(path, raw).map_err(|source| SimError::Input {
            path: path.display().to_string(),
            source,
        })
    }
}
