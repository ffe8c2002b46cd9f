//! 告警广播端（分片调度器）
//!
//! 发送端把载荷按固定节奏逐片发出：`start()` 只调度第一个发送事件，
//! 之后每个 `TransmitChunk` 事件发完一片、再调度自己的后继——
//! 一个显式状态（当前偏移）加自我续约的回调，没有协程。
//! 序列一旦启动不可取消；传输失败则整个序列就地放弃，不重试。

use crate::error::SimError;
use crate::net::{GroupAddr, NodeId, RanWorld};
use crate::sim::{Event, SimTime, Simulator, World};
use std::sync::{Arc, Mutex};
use tracing::{debug, error, info};

use super::payload::AlertPayload;

/// 广播配置
#[derive(Debug, Clone, Copy)]
pub struct BroadcastConfig {
    /// 分片大小（字节），必须 > 0
    pub chunk_bytes: usize,
    /// 首个分片的发送时刻
    pub start_delay: SimTime,
    /// 相邻分片的发送间隔
    pub interval: SimTime,
}

impl Default for BroadcastConfig {
    fn default() -> Self {
        Self {
            chunk_bytes: 1024,
            start_delay: SimTime::from_secs(1),
            interval: SimTime::from_millis(10),
        }
    }
}

impl BroadcastConfig {
    /// 配置校验：非法配置在运行开始前拒绝。
    pub fn validate(&self) -> Result<(), SimError> {
        if self.chunk_bytes == 0 {
            return Err(SimError::Config("chunk_bytes 必须大于 0".into()));
        }
        Ok(())
    }
}

/// 广播状态机：`Idle → Scheduled → Transmitting(offset)* → Done`。
/// 不存在回退转移；`Failed` 终止整个序列。
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BroadcastState {
    Idle,
    Scheduled,
    Transmitting { offset: usize },
    Done,
    Failed,
}

#[derive(Debug)]
struct BroadcastShared {
    state: BroadcastState,
    chunks_sent: u64,
}

/// 广播句柄：仿真结束后查询状态与已发分片数。
#[derive(Debug, Clone)]
pub struct BroadcastHandle {
    inner: Arc<Mutex<BroadcastShared>>,
}

impl BroadcastHandle {
    pub fn state(&self) -> BroadcastState {
        self.inner.lock().expect("broadcast state lock").state.clone()
    }

    pub fn chunks_sent(&self) -> u64 {
        self.inner.lock().expect("broadcast state lock").chunks_sent
    }

    pub fn is_done(&self) -> bool {
        self.state() == BroadcastState::Done
    }
}

/// 告警广播端
pub struct AlertBroadcaster;

impl AlertBroadcaster {
    /// 启动广播：校验配置，并在 `start_delay` 时刻调度首个发送事件。
    ///
    /// 空载荷直接进入 `Done`，不调度任何事件。
    #[tracing::instrument(skip(sim, payload), fields(src = ?src, group = %group, payload_bytes = payload.len()))]
    pub fn start(
        sim: &mut Simulator,
        src: NodeId,
        group: GroupAddr,
        payload: AlertPayload,
        cfg: BroadcastConfig,
    ) -> Result<BroadcastHandle, SimError> {
        cfg.validate()?;

        if payload.is_empty() {
            info!("载荷为空，零分片，直接完成");
            return Ok(BroadcastHandle {
                inner: Arc::new(Mutex::new(BroadcastShared {
                    state: BroadcastState::Done,
                    chunks_sent: 0,
                })),
            });
        }

        let inner = Arc::new(Mutex::new(BroadcastShared {
            state: BroadcastState::Scheduled,
            chunks_sent: 0,
        }));

        info!(
            chunks = payload.chunk_count(cfg.chunk_bytes),
            start_delay = ?cfg.start_delay,
            interval = ?cfg.interval,
            "🚨 调度告警广播"
        );

        sim.schedule(
            cfg.start_delay,
            TransmitChunk {
                offset: 0,
                seq: 0,
                src,
                group,
                payload: payload.share(),
                cfg,
                shared: Arc::clone(&inner),
            },
        );

        Ok(BroadcastHandle { inner })
    }
}

/// 事件：发送一个分片，然后调度下一个分片的发送。
pub struct TransmitChunk {
    pub(crate) offset: usize,
    pub(crate) seq: u64,
    pub(crate) src: NodeId,
    pub(crate) group: GroupAddr,
    pub(crate) payload: Arc<[u8]>,
    pub(crate) cfg: BroadcastConfig,
    pub(crate) shared: Arc<Mutex<BroadcastShared>>,
}

impl Event for TransmitChunk {
    #[tracing::instrument(skip(self, sim, world), fields(offset = self.offset, seq = self.seq))]
    fn execute(self: Box<Self>, sim: &mut Simulator, world: &mut dyn World) {
        let TransmitChunk {
            offset,
            seq,
            src,
            group,
            payload,
            cfg,
            shared,
        } = *self;

        let total = payload.len();
        let len = cfg.chunk_bytes.min(total - offset);
        // 每片在发送时拷贝一次；投递给 N 个接收者时共享同一份。
        let data: Arc<[u8]> = Arc::from(&payload[offset..offset + len]);

        debug!(len, total, now = ?sim.now(), "📤 发送分片");

        let w = world
            .as_any_mut()
            .downcast_mut::<RanWorld>()
            .expect("world must be RanWorld");

        match w.net.multicast(src, group, seq, data, sim) {
            Ok(()) => {
                let mut s = shared.lock().expect("broadcast state lock");
                s.chunks_sent += 1;
                let next = offset + len;
                if next < total {
                    s.state = BroadcastState::Transmitting { offset: next };
                    drop(s);
                    sim.schedule(
                        sim.now().saturating_add(cfg.interval),
                        TransmitChunk {
                            offset: next,
                            seq: seq + 1,
                            src,
                            group,
                            payload,
                            cfg,
                            shared,
                        },
                    );
                } else {
                    s.state = BroadcastState::Done;
                    info!(chunks_sent = s.chunks_sent, "✅ 广播序列完成");
                }
            }
            Err(e) => {
                // 放弃剩余分片；已送达的分片与已记录的接收不回滚。
                error!(error = %e, "❌ 发送失败，放弃广播序列");
                shared.lock().expect("broadcast state lock").state = BroadcastState::Failed;
                w.failure = Some(e);
            }
        }
    }
}
