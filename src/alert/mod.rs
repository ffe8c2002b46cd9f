//! 告警分发模块
//!
//! 此模块是仿真的业务核心：把一份 CAP 告警文档切成定长分片、
//! 按固定节奏经多播信道发出，并在每个接收端记录接收事件。

// 子模块声明
mod broadcast;
mod cap;
mod payload;
mod reception;

// 重新导出公共接口
pub use broadcast::{AlertBroadcaster, BroadcastConfig, BroadcastHandle, BroadcastState, TransmitChunk};
pub use cap::sample_alert;
pub use payload::{AlertPayload, ChunkSpan, ChunkSpans};
pub use reception::{AlertSink, ReceptionEvent, ReceptionLog};
