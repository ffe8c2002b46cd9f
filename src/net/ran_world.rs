//! 接入网世界实现
//!
//! 定义多播仿真的世界（World）实现，持有接入网。

use super::network::RanNetwork;
use crate::error::SimError;
use crate::sim::World;
use std::any::Any;

/// 一个默认的接入网世界实现：持有 RanNetwork。
///
/// `failure` 记录广播序列中途的致命错误（例如传输失败），
/// 仿真跑完后由调用方检查并上抛。
#[derive(Default)]
pub struct RanWorld {
    pub net: RanNetwork,
    pub failure: Option<SimError>,
}

impl World for RanWorld {
    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}
