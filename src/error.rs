//! 错误类型
//!
//! 仿真运行中的三类致命错误：配置、输入、传输。
//! 没有可重试的错误——一次广播就是一次仿真执行。

use thiserror::Error;

/// 仿真错误
#[derive(Debug, Error)]
pub enum SimError {
    /// 配置非法（例如分片大小为 0），运行不会开始。
    #[error("配置错误: {0}")]
    Config(String),

    /// 载荷文件缺失或不可读，启动即失败，不发送任何分片。
    #[error("文件错误: {path}: {source}")]
    Input {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// 发送中途传输失败：放弃剩余分片，已送达的不回滚。
    #[error("传输错误: {0}")]
    Transport(String),
}
