//! 接收回调 trait
//!
//! 每个接收节点绑定一个 sink，数据报到达时异步回调。
//! sink 只观测、不发包，也不影响调度。

use super::datagram::Datagram;
use crate::sim::SimTime;

/// 数据报到达回调。绑定一次，整个仿真期间不变。
pub trait Sink: Send {
    fn on_datagram(&mut self, dgram: &Datagram, now: SimTime);
}
