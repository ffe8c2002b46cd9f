//! 无线接入网
//!
//! 管理节点、多播组成员关系与数据报投递，并维护统计信息。
//! 一次 `multicast` 为每个组成员各调度一个投递事件，发生在当前
//! 仿真时刻；同时刻事件按调度顺序 FIFO 执行，因此投递顺序等于
//! 发送顺序。

use std::collections::HashMap;
use std::sync::Arc;

use super::datagram::Datagram;
use super::deliver_datagram::DeliverDatagram;
use super::group::GroupAddr;
use super::id::NodeId;
use super::sink::Sink;
use super::stats::Stats;
use crate::error::SimError;
use crate::sim::Simulator;
use tracing::{debug, info, trace};

/// 无线接入网：节点 + 多播组 + 投递
#[derive(Default)]
pub struct RanNetwork {
    names: Vec<String>,
    sinks: Vec<Option<Box<dyn Sink>>>,
    members: HashMap<GroupAddr, Vec<NodeId>>,
    next_dgram_id: u64,
    pub stats: Stats,
}

impl RanNetwork {
    /// 添加节点
    pub fn add_node(&mut self, name: impl Into<String>) -> NodeId {
        let id = NodeId(self.names.len());
        self.names.push(name.into());
        self.sinks.push(None);
        id
    }

    /// 节点名称
    pub fn node_name(&self, id: NodeId) -> &str {
        &self.names[id.0]
    }

    /// 节点总数
    pub fn node_count(&self) -> usize {
        self.names.len()
    }

    /// 把节点绑定到多播组并安装接收回调。
    ///
    /// 组成员关系在拓扑搭建后固定；重复绑定同一节点会替换其回调。
    pub fn bind(&mut self, group: GroupAddr, node: NodeId, sink: Box<dyn Sink>) {
        debug!(group = %group, node = ?node, "绑定多播组");
        let members = self.members.entry(group).or_default();
        if !members.contains(&node) {
            members.push(node);
        }
        self.sinks[node.0] = Some(sink);
    }

    /// 某组的成员列表（无成员时为空切片）
    pub fn group_members(&self, group: GroupAddr) -> &[NodeId] {
        self.members.get(&group).map(Vec::as_slice).unwrap_or(&[])
    }

    /// 向多播组发送一个数据报：为每个成员调度一个当前时刻的投递事件。
    ///
    /// 发送方节点必须存在，否则视为传输不可用（致命，调用方放弃后续分片）。
    #[tracing::instrument(skip(self, data, sim), fields(from = ?from, group = %group, bytes = data.len(), seq))]
    pub fn multicast(
        &mut self,
        from: NodeId,
        group: GroupAddr,
        seq: u64,
        data: Arc<[u8]>,
        sim: &mut Simulator,
    ) -> Result<(), SimError> {
        if from.0 >= self.names.len() {
            return Err(SimError::Transport(format!(
                "发送节点 {:?} 不存在",
                from
            )));
        }

        let id = self.next_dgram_id;
        self.next_dgram_id = self.next_dgram_id.wrapping_add(1);

        self.stats.sent_dgrams += 1;
        self.stats.sent_bytes += data.len() as u64;

        let members = self.group_members(group).to_vec();
        info!(
            dgram_id = id,
            members = members.len(),
            now = ?sim.now(),
            "📡 多播发送数据报"
        );

        for to in members {
            trace!(to = ?to, "调度投递事件");
            sim.schedule(
                sim.now(),
                DeliverDatagram {
                    to,
                    dgram: Datagram {
                        id,
                        seq,
                        from,
                        group,
                        data: Arc::clone(&data),
                    },
                },
            );
        }
        Ok(())
    }

    /// 把数据报交给节点的接收回调处理
    #[tracing::instrument(skip(self, sim), fields(dgram_id = dgram.id, to = ?to))]
    pub fn deliver(&mut self, to: NodeId, dgram: Datagram, sim: &mut Simulator) {
        debug!("📬 将数据报交付给接收回调");

        // 暂时把 sink 取出来，避免 &mut self 与 &mut sink 的重叠借用。
        let Some(mut sink) = self.sinks[to.0].take() else {
            // 节点未绑定回调：数据报被丢弃，不计入送达。
            trace!("节点无回调，丢弃数据报");
            return;
        };
        sink.on_datagram(&dgram, sim.now());
        self.sinks[to.0] = Some(sink);

        self.stats.delivered_dgrams += 1;
        self.stats.delivered_bytes += dgram.len() as u64;
    }
}
