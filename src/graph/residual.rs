//! 残余图
//!
//! 从网络当前的流量状态推导出来，每次流量变化后都要重新构建

use super::network::FlowNetwork;
use super::node::NodeId;
use crate::types::{Capacity, Direction};
use indexmap::IndexMap;

/// 残余边
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResidualEdge {
    /// 终点
    pub to: NodeId,
    /// 残余容量（严格为正）
    pub weight: Capacity,
    /// 对应原边的方向
    pub direction: Direction,
}

/// 残余图（只包含残余容量严格为正的边）
///
/// 同一对节点之间可能同时存在正向残余边和反向残余边，两者分开保存。
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResidualGraph {
    adjacency: IndexMap<NodeId, Vec<ResidualEdge>>,
}

impl ResidualGraph {
    /// 构建残余图
    ///
    /// 对原图每条边 (i, j)：`capacity > flow` 时生成 i -> j，权重 `capacity - flow`；
    /// `flow > 0` 时生成 j -> i，权重 `flow`。
    pub fn build(network: &FlowNetwork) -> Self {
        let mut adjacency: IndexMap<NodeId, Vec<ResidualEdge>> = IndexMap::new();
        for node in network.nodes() {
            adjacency.entry(node).or_default();
        }

        for (from, to, edge) in network.edges() {
            let forward = edge.forward_residual();
            if forward > 0 {
                adjacency.entry(from).or_default().push(ResidualEdge {
                    to,
                    weight: forward,
                    direction: Direction::Forward,
                });
            }

            let backward = edge.backward_residual();
            if backward > 0 {
                adjacency.entry(to).or_default().push(ResidualEdge {
                    to: from,
                    weight: backward,
                    direction: Direction::Reverse,
                });
            }
        }

        Self { adjacency }
    }

    /// from -> to 的残余容量总和（不存在时为 0）
    pub fn weight(&self, from: NodeId, to: NodeId) -> Capacity {
        self.neighbors(from)
            .filter(|edge| edge.to == to)
            .map(|edge| edge.weight)
            .sum()
    }

    /// 节点的残余出边
    pub fn neighbors(&self, node: NodeId) -> impl Iterator<Item = &ResidualEdge> + '_ {
        self.adjacency.get(&node).into_iter().flatten()
    }

    /// 所有节点
    pub fn nodes(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.adjacency.keys().copied()
    }

    /// 残余边数量
    pub fn edge_count(&self) -> usize {
        self.adjacency.values().map(Vec::len).sum()
    }
}
