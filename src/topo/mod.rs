//! 拓扑构建模块
//!
//! 此模块负责搭建仿真拓扑（小区 + 接收终端）。

mod cell;

pub use cell::{build_cell, Cell, CellOpts, DEFAULT_GROUP};
