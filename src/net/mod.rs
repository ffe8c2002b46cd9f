//! 无线接入网模拟模块
//!
//! 此模块包含多播传输模拟的核心组件：节点、多播组、数据报与网络。
//! 传输假定无损、保序——范围内不建模丢包/重传/拥塞。

// 子模块声明
mod datagram;
mod deliver_datagram;
mod group;
mod id;
mod network;
mod ran_world;
mod sink;
mod stats;

// 重新导出公共接口
pub use datagram::Datagram;
pub use deliver_datagram::DeliverDatagram;
pub use group::GroupAddr;
pub use id::NodeId;
pub use network::RanNetwork;
pub use ran_world::RanWorld;
pub use sink::Sink;
pub use stats::Stats;
