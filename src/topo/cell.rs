//! 单小区拓扑构建
//!
//! 拓扑结构：1 个广播节点（基站）+ N 个接收终端（UE），
//! 全部 UE 绑定到同一个多播组。成员关系搭建后固定。

use crate::alert::{AlertSink, ReceptionLog};
use crate::net::{GroupAddr, NodeId, RanWorld};
use std::sync::{Arc, Mutex};
use tracing::debug;

/// 默认多播组（239.255.0.1:5000）
pub const DEFAULT_GROUP: GroupAddr = GroupAddr {
    addr: [239, 255, 0, 1],
    port: 5000,
};

/// 单小区拓扑配置选项
#[derive(Debug, Clone)]
pub struct CellOpts {
    /// 接收终端数量
    pub receivers: usize,
    pub group: GroupAddr,
}

impl Default for CellOpts {
    fn default() -> Self {
        Self {
            receivers: 10,
            group: DEFAULT_GROUP,
        }
    }
}

/// 搭建好的单小区拓扑
pub struct Cell {
    /// 广播节点（基站）
    pub enb: NodeId,
    /// 接收终端
    pub ues: Vec<NodeId>,
    /// 每个接收终端的接收日志句柄（与 `ues` 同序）
    pub logs: Vec<Arc<Mutex<ReceptionLog>>>,
    pub group: GroupAddr,
}

/// 构建单小区拓扑
///
/// 返回：广播节点、接收终端列表及其接收日志句柄。
pub fn build_cell(world: &mut RanWorld, opts: &CellOpts) -> Cell {
    let enb = world.net.add_node("enb0");

    let mut ues = Vec::with_capacity(opts.receivers);
    let mut logs = Vec::with_capacity(opts.receivers);
    for i in 0..opts.receivers {
        let name = format!("ue{i}");
        let ue = world.net.add_node(name.clone());
        let (sink, log) = AlertSink::new(ue, name);
        world.net.bind(opts.group, ue, Box::new(sink));
        ues.push(ue);
        logs.push(log);
    }

    debug!(
        receivers = opts.receivers,
        group = %opts.group,
        "小区拓扑搭建完成"
    );

    Cell {
        enb,
        ues,
        logs,
        group: opts.group,
    }
}
