//! 数据报投递事件
//!
//! 把一个数据报交给某个接收节点处理。

use super::datagram::Datagram;
use super::id::NodeId;
use super::ran_world::RanWorld;
use crate::sim::{Event, Simulator, World};
use tracing::{debug, trace};

/// 事件：把一个数据报交给某个节点的接收回调。
#[derive(Debug)]
pub struct DeliverDatagram {
    pub to: NodeId,
    pub dgram: Datagram,
}

impl Event for DeliverDatagram {
    #[tracing::instrument(skip(self, sim, world), fields(dgram_id = self.dgram.id, seq = self.dgram.seq, to = ?self.to))]
    fn execute(self: Box<Self>, sim: &mut Simulator, world: &mut dyn World) {
        let DeliverDatagram { to, dgram } = *self;

        debug!(
            bytes = dgram.len(),
            group = %dgram.group,
            now = ?sim.now(),
            "📨 数据报到达事件执行"
        );

        let w = world
            .as_any_mut()
            .downcast_mut::<RanWorld>()
            .expect("world must be RanWorld");
        w.net.deliver(to, dgram, sim);

        trace!("DeliverDatagram::execute 完成");
    }
}
