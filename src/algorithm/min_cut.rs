//! 最小割提取
//!
//! 在最终残余图上从源点做可达性搜索，可达的节点构成源侧 S，其余为汇侧 T。

use crate::error::{Error, Result};
use crate::graph::{FlowNetwork, NodeId, ResidualGraph};
use crate::types::Capacity;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// 割边（原图中从 S 指向 T 且容量为正的边）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CutEdge {
    pub from: NodeId,
    pub to: NodeId,
    pub capacity: Capacity,
}

/// 最小割 (S, T)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MinCut {
    /// 源侧节点（升序）
    pub source_side: Vec<NodeId>,
    /// 汇侧节点（升序）
    pub sink_side: Vec<NodeId>,
    /// S -> T 割边的容量总和
    pub capacity: Capacity,
    /// S -> T 的割边
    pub edges: Vec<CutEdge>,
}

impl MinCut {
    /// 从网络当前流量状态提取割
    ///
    /// 不修改网络，对同一状态重复调用结果相同。
    pub fn extract(network: &FlowNetwork, source: NodeId) -> Result<Self> {
        if !network.contains_node(source) {
            return Err(Error::NodeNotFound(source));
        }

        let residual = ResidualGraph::build(network);
        let reachable = reachable_from(&residual, source);

        let mut source_side: Vec<NodeId> = reachable.iter().copied().collect();
        source_side.sort();
        let mut sink_side: Vec<NodeId> = network
            .nodes()
            .filter(|node| !reachable.contains(node))
            .collect();
        sink_side.sort();

        let mut edges: Vec<CutEdge> = network
            .edges()
            .filter(|(from, to, edge)| {
                edge.capacity() > 0 && reachable.contains(from) && !reachable.contains(to)
            })
            .map(|(from, to, edge)| CutEdge {
                from,
                to,
                capacity: edge.capacity(),
            })
            .collect();
        edges.sort_by_key(|edge| (edge.from, edge.to));

        let capacity = edges.iter().map(|edge| edge.capacity).sum();

        Ok(Self {
            source_side,
            sink_side,
            capacity,
            edges,
        })
    }

    pub fn contains_source_side(&self, node: NodeId) -> bool {
        self.source_side.binary_search(&node).is_ok()
    }

    pub fn contains_sink_side(&self, node: NodeId) -> bool {
        self.sink_side.binary_search(&node).is_ok()
    }
}

/// 残余图上从 start 出发可达的节点（栈式搜索）
pub fn reachable_from(residual: &ResidualGraph, start: NodeId) -> HashSet<NodeId> {
    let mut visited = HashSet::new();
    let mut stack = vec![start];

    while let Some(node) = stack.pop() {
        if !visited.insert(node) {
            continue;
        }
        for edge in residual.neighbors(node) {
            if edge.weight > 0 && !visited.contains(&edge.to) {
                stack.push(edge.to);
            }
        }
    }

    visited
}
