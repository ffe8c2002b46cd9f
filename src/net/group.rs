//! 多播组地址
//!
//! 一个逻辑目的地（地址 + 端口），所有绑定的接收者共享，
//! 建模一对多投递。组成员在拓扑搭建后固定，不支持动态加入/退出。

use std::fmt;

/// 多播组地址（IPv4 地址 + UDP 端口）。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GroupAddr {
    pub addr: [u8; 4],
    pub port: u16,
}

impl GroupAddr {
    pub fn new(addr: [u8; 4], port: u16) -> Self {
        Self { addr, port }
    }
}

impl fmt::Display for GroupAddr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [a, b, c, d] = self.addr;
        write!(f, "{a}.{b}.{c}.{d}:{}", self.port)
    }
}
