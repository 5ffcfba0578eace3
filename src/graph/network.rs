//! 容量网络
//!
//! 按节点 ID 索引的有向容量图。每条边 (i, j) 插入后都保证存在配对的
//! 反向边 (j, i)（未显式给出时容量为 0），两种增广路径搜索都依赖这一点。

use super::edge::FlowEdge;
use super::node::NodeId;
use crate::error::{Error, Result};
use crate::types::Capacity;
use indexmap::{IndexMap, IndexSet};
use serde::{Deserialize, Serialize};

/// 流量表快照（节点 -> 节点 -> 流量）
///
/// 键顺序与网络中的插入顺序一致。
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FlowTable(IndexMap<NodeId, IndexMap<NodeId, Capacity>>);

impl FlowTable {
    /// 查询某条边的流量
    pub fn get(&self, from: NodeId, to: NodeId) -> Option<Capacity> {
        self.0.get(&from)?.get(&to).copied()
    }

    /// 遍历所有 (from, to, flow)
    pub fn iter(&self) -> impl Iterator<Item = (NodeId, NodeId, Capacity)> + '_ {
        self.0
            .iter()
            .flat_map(|(&from, row)| row.iter().map(move |(&to, &flow)| (from, to, flow)))
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// 所有正流量的边
    pub fn positive(&self) -> Vec<(NodeId, NodeId, Capacity)> {
        self.iter().filter(|&(_, _, flow)| flow > 0).collect()
    }
}

/// 容量网络
#[derive(Debug, Clone, Default)]
pub struct FlowNetwork {
    /// 节点集合（插入顺序）
    nodes: IndexSet<NodeId>,
    /// 出边邻接表
    outgoing: IndexMap<NodeId, IndexMap<NodeId, FlowEdge>>,
    /// 入边索引（to -> from 集合）
    incoming: IndexMap<NodeId, IndexSet<NodeId>>,
}

impl FlowNetwork {
    /// 创建空网络
    pub fn new() -> Self {
        Self::default()
    }

    // ==================== 构建 ====================

    /// 添加边 (i, j)，流量置 0
    ///
    /// 如果 (j, i) 不存在，同时创建容量为 0 的反向边。
    /// 对同一 (i, j) 重复调用会覆盖容量并把该边流量清零，
    /// 已经推送过流量后不要再调用，否则会丢失进度。
    pub fn add_edge(&mut self, from: NodeId, to: NodeId, capacity: Capacity) {
        self.nodes.insert(from);
        self.nodes.insert(to);

        self.outgoing
            .entry(from)
            .or_default()
            .insert(to, FlowEdge::new(capacity));
        self.incoming.entry(to).or_default().insert(from);

        let reverse_exists = self
            .outgoing
            .get(&to)
            .map_or(false, |row| row.contains_key(&from));
        if !reverse_exists {
            self.outgoing
                .entry(to)
                .or_default()
                .insert(from, FlowEdge::new(0));
            self.incoming.entry(from).or_default().insert(to);
        }
    }

    /// 添加带符号容量的边，负容量返回 `InvalidCapacity`，网络保持不变
    pub fn add_edge_checked(&mut self, from: NodeId, to: NodeId, capacity: i64) -> Result<()> {
        let capacity = Capacity::try_from(capacity).map_err(|_| Error::InvalidCapacity {
            from,
            to,
            capacity,
        })?;
        self.add_edge(from, to, capacity);
        Ok(())
    }

    /// 批量添加边
    pub fn from_edges<I>(edges: I) -> Self
    where
        I: IntoIterator<Item = (u64, u64, Capacity)>,
    {
        let mut network = Self::new();
        for (from, to, capacity) in edges {
            network.add_edge(NodeId::new(from), NodeId::new(to), capacity);
        }
        network
    }

    // ==================== 查询 ====================

    /// 获取边
    pub fn edge(&self, from: NodeId, to: NodeId) -> Result<&FlowEdge> {
        self.outgoing
            .get(&from)
            .and_then(|row| row.get(&to))
            .ok_or(Error::UndefinedEdge { from, to })
    }

    pub(crate) fn edge_mut(&mut self, from: NodeId, to: NodeId) -> Result<&mut FlowEdge> {
        self.outgoing
            .get_mut(&from)
            .and_then(|row| row.get_mut(&to))
            .ok_or(Error::UndefinedEdge { from, to })
    }

    /// 边容量
    pub fn capacity(&self, from: NodeId, to: NodeId) -> Result<Capacity> {
        self.edge(from, to).map(FlowEdge::capacity)
    }

    /// 边流量
    pub fn flow(&self, from: NodeId, to: NodeId) -> Result<Capacity> {
        self.edge(from, to).map(FlowEdge::flow)
    }

    /// from -> to 的残余容量：正向余量加上可撤销的 to -> from 流量
    pub fn residual(&self, from: NodeId, to: NodeId) -> Result<Capacity> {
        let forward = self.edge(from, to)?;
        let backward = self.edge(to, from)?;
        forward
            .forward_residual()
            .checked_add(backward.backward_residual())
            .ok_or_else(|| {
                Error::InvariantViolation(format!("边 ({}, {}) 残余容量溢出", from, to))
            })
    }

    pub fn contains_edge(&self, from: NodeId, to: NodeId) -> bool {
        self.edge(from, to).is_ok()
    }

    pub fn contains_node(&self, node: NodeId) -> bool {
        self.nodes.contains(&node)
    }

    /// 所有节点（插入顺序）
    pub fn nodes(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.nodes.iter().copied()
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// 存储的有序边对数量（包括容量为 0 的反向边）
    pub fn edge_count(&self) -> usize {
        self.outgoing.values().map(IndexMap::len).sum()
    }

    /// 遍历所有边 (from, to, edge)
    pub fn edges(&self) -> impl Iterator<Item = (NodeId, NodeId, &FlowEdge)> + '_ {
        self.outgoing
            .iter()
            .flat_map(|(&from, row)| row.iter().map(move |(&to, edge)| (from, to, edge)))
    }

    /// 节点的出边
    pub fn successors(&self, node: NodeId) -> impl Iterator<Item = (NodeId, &FlowEdge)> + '_ {
        self.outgoing
            .get(&node)
            .into_iter()
            .flat_map(|row| row.iter().map(|(&to, edge)| (to, edge)))
    }

    /// 指向节点的边的起点
    pub fn predecessors(&self, node: NodeId) -> impl Iterator<Item = NodeId> + '_ {
        self.incoming
            .get(&node)
            .into_iter()
            .flat_map(|set| set.iter().copied())
    }

    /// 从某节点出发的容量总和
    pub fn total_capacity_from(&self, node: NodeId) -> Capacity {
        self.successors(node).map(|(_, edge)| edge.capacity()).sum()
    }

    /// 当前流量表快照
    pub fn flow_table(&self) -> FlowTable {
        FlowTable(
            self.outgoing
                .iter()
                .map(|(&from, row)| {
                    let row = row.iter().map(|(&to, edge)| (to, edge.flow())).collect();
                    (from, row)
                })
                .collect(),
        )
    }

    /// 把所有边的流量清零
    pub fn reset_flow(&mut self) {
        for row in self.outgoing.values_mut() {
            for edge in row.values_mut() {
                edge.set_flow(0);
            }
        }
    }

    /// 节点的流入总量和流出总量
    pub fn throughput(&self, node: NodeId) -> (u128, u128) {
        let outflow: u128 = self
            .successors(node)
            .map(|(_, edge)| edge.flow() as u128)
            .sum();
        let inflow: u128 = self
            .predecessors(node)
            .filter_map(|from| self.flow(from, node).ok())
            .map(|flow| flow as u128)
            .sum();
        (inflow, outflow)
    }

    // ==================== 不变量检查 ====================

    /// 检查所有边满足 `0 <= flow <= capacity`
    pub fn check_capacity(&self) -> Result<()> {
        for (from, to, edge) in self.edges() {
            if edge.flow() > edge.capacity() {
                return Err(Error::InvariantViolation(format!(
                    "边 ({}, {}) 流量 {} 超过容量 {}",
                    from,
                    to,
                    edge.flow(),
                    edge.capacity()
                )));
            }
        }
        Ok(())
    }

    /// 检查除源点和汇点外每个节点流入等于流出
    pub fn check_conservation(&self, source: NodeId, sink: NodeId) -> Result<()> {
        for node in self.nodes() {
            if node == source || node == sink {
                continue;
            }
            let (inflow, outflow) = self.throughput(node);
            if inflow != outflow {
                return Err(Error::InvariantViolation(format!(
                    "节点 {} 流量不守恒: 流入 {}, 流出 {}",
                    node, inflow, outflow
                )));
            }
        }
        Ok(())
    }
}
