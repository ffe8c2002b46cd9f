//! 接收报告（用于离线检查）
//!
//! 设计目标：
//! - **结构化**：用 JSON 报告而不是解析文本日志
//! - **轻量**：仿真结束后一次性写出，不引入运行时服务

mod types;

pub use types::{ReceiverReport, ReceptionReport, ReportEvent};
