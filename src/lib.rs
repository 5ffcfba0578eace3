//! FlowNet - Ford-Fulkerson 最大流 / 最小割
//!
//! 面向教学可视化的最大流引擎：
//! - 有向容量网络，每条边自动配对反向边
//! - 两种增广路径搜索：显式残余图 DFS、标号法 BFS
//! - 每次迭代保存路径、增广量和流量快照
//! - 终止后在残余图上提取最小割

pub mod algorithm;
pub mod cli;
pub mod error;
pub mod graph;
pub mod import;
pub mod render;
pub mod types;

// 重导出常用类型
pub use algorithm::{
    max_flow_labeling, max_flow_residual, results_to_json, FordFulkerson, Iteration, MaxFlow, MinCut,
    SolverConfig,
};
pub use error::{Error, Result};
pub use graph::{FlowEdge, FlowNetwork, FlowTable, NodeId, ResidualGraph};
pub use types::{Bottleneck, Capacity, Direction, Strategy};

/// 库版本
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
