//! 图核心模块
//!
//! 定义节点、容量边、容量网络和残余图

mod edge;
mod network;
mod node;
mod residual;

pub use edge::FlowEdge;
pub use network::{FlowNetwork, FlowTable};
pub use node::NodeId;
pub use residual::{ResidualEdge, ResidualGraph};
