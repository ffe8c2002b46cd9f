//! 告警接收端（接收日志）
//!
//! 每个接收节点绑定一个 `AlertSink`：分片到达时记一条接收事件
//! （接收者 + 仿真时刻），并按到达顺序把字节拼入重组缓冲，用于
//! 运行结束后的完整性校验。接收端之间相互独立，互不共享状态，
//! 也从不产生流量。

use crate::net::{Datagram, NodeId, Sink};
use crate::sim::SimTime;
use std::sync::{Arc, Mutex};
use tracing::info;

/// 接收事件：某接收者在某仿真时刻收到一个分片。不去重，
/// 一片一条，顺序即投递顺序。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReceptionEvent {
    pub receiver: NodeId,
    pub at: SimTime,
    pub seq: u64,
    pub bytes: usize,
}

/// 单个接收者的接收日志
#[derive(Debug, Default)]
pub struct ReceptionLog {
    pub events: Vec<ReceptionEvent>,
    /// 按到达顺序拼接的载荷字节
    pub assembled: Vec<u8>,
}

impl ReceptionLog {
    pub fn count(&self) -> usize {
        self.events.len()
    }

    /// 到达顺序重组出的字节序列
    pub fn reassembled(&self) -> &[u8] {
        &self.assembled
    }
}

/// 接收回调：绑定一次，日志经句柄共享给调用方在仿真结束后读取。
pub struct AlertSink {
    receiver: NodeId,
    name: String,
    log: Arc<Mutex<ReceptionLog>>,
}

impl AlertSink {
    pub fn new(receiver: NodeId, name: impl Into<String>) -> (Self, Arc<Mutex<ReceptionLog>>) {
        let log = Arc::new(Mutex::new(ReceptionLog::default()));
        (
            Self {
                receiver,
                name: name.into(),
                log: Arc::clone(&log),
            },
            log,
        )
    }
}

impl Sink for AlertSink {
    fn on_datagram(&mut self, dgram: &Datagram, now: SimTime) {
        // 每个接收事件一条日志：接收者 + 仿真时刻（秒，浮点）。
        info!(
            receiver = %self.name,
            t_secs = now.as_secs_f64(),
            seq = dgram.seq,
            bytes = dgram.len(),
            "📱 接收到分片"
        );

        let mut log = self.log.lock().expect("reception log lock");
        log.events.push(ReceptionEvent {
            receiver: self.receiver,
            at: now,
            seq: dgram.seq,
            bytes: dgram.len(),
        });
        log.assembled.extend_from_slice(&dgram.data);
    }
}
