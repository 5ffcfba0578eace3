//! 残余图上的 DFS 增广路径搜索
//!
//! 每轮从网络当前状态重新构建显式残余图，再深度优先找任意一条 s -> t 路径。
//! 找到的是 DFS 访问顺序下的第一条路径，不保证最短或瓶颈最大。

use super::engine::{Augmentation, AugmentingPathSearch};
use super::path::{AugmentingPath, PathStep};
use crate::graph::{FlowNetwork, NodeId, ResidualGraph};
use crate::types::{Bottleneck, Capacity, Strategy};
use std::collections::{HashMap, HashSet};

/// 在残余图上做 DFS，返回第一条到达汇点的路径和它的瓶颈
///
/// 邻居按残余图中的插入顺序压栈，后压入的先访问。
/// 每个节点只访问一次，所以返回的路径是简单路径。
pub fn find_augmenting_path(
    residual: &ResidualGraph,
    source: NodeId,
    sink: NodeId,
) -> Option<(AugmentingPath, Capacity)> {
    let mut stack: Vec<(NodeId, Option<PathStep>, Bottleneck)> =
        vec![(source, None, Bottleneck::Unbounded)];
    let mut visited: HashSet<NodeId> = HashSet::new();
    let mut parent: HashMap<NodeId, PathStep> = HashMap::new();

    while let Some((node, via, bottleneck)) = stack.pop() {
        if !visited.insert(node) {
            continue;
        }
        if let Some(step) = via {
            parent.insert(node, step);
        }

        if node == sink {
            let delta = bottleneck.finite()?;
            let mut steps = Vec::new();
            let mut current = sink;
            while current != source {
                let step = *parent.get(&current)?;
                steps.push(step);
                current = step.from;
            }
            steps.reverse();
            return AugmentingPath::from_steps(steps).map(|path| (path, delta));
        }

        for edge in residual.neighbors(node) {
            if edge.weight > 0 && !visited.contains(&edge.to) {
                stack.push((
                    edge.to,
                    Some(PathStep::new(node, edge.to, edge.direction)),
                    bottleneck.through(edge.weight),
                ));
            }
        }
    }

    None
}

/// 基于显式残余图的搜索策略
#[derive(Debug, Clone, Copy, Default)]
pub struct ResidualSearch;

impl AugmentingPathSearch for ResidualSearch {
    fn strategy(&self) -> Strategy {
        Strategy::Residual
    }

    fn find(&mut self, network: &FlowNetwork, source: NodeId, sink: NodeId) -> Option<Augmentation> {
        let residual = ResidualGraph::build(network);
        tracing::trace!(arcs = residual.edge_count(), "残余图已构建");

        let (path, delta) = find_augmenting_path(&residual, source, sink)?;
        Some(Augmentation {
            path,
            delta,
            labels: None,
        })
    }
}
