//! 标号法增广路径搜索
//!
//! 不构建残余图，而是在原图上做 BFS：对每个出队节点 i，
//! 扫描未饱和的出边 i -> j 和有流量的入边 j -> i，给未标号的 j 打上
//! {前驱, 方向, 瓶颈} 标号。BFS 保证找到的是边数最少的增广路径。

use super::engine::{Augmentation, AugmentingPathSearch};
use super::path::{AugmentingPath, PathStep};
use crate::graph::{FlowNetwork, NodeId};
use crate::types::{Bottleneck, Capacity, Direction, Strategy};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;

/// 前驱：标号来自哪个节点、经过哪个方向的边
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Predecessor {
    pub node: NodeId,
    pub direction: Direction,
}

/// 节点标号
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Label {
    /// 源点没有前驱
    pub predecessor: Option<Predecessor>,
    /// 从源点到此节点最多能送达的流量
    pub bottleneck: Bottleneck,
}

impl Label {
    fn source() -> Self {
        Self {
            predecessor: None,
            bottleneck: Bottleneck::Unbounded,
        }
    }
}

/// 一轮标号的结果（按标号顺序）
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LabelMap(IndexMap<NodeId, Label>);

impl LabelMap {
    pub fn get(&self, node: NodeId) -> Option<&Label> {
        self.0.get(&node)
    }

    pub fn is_labeled(&self, node: NodeId) -> bool {
        self.0.contains_key(&node)
    }

    /// 已标号节点数
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (NodeId, &Label)> + '_ {
        self.0.iter().map(|(&node, label)| (node, label))
    }

    /// 沿前驱从汇点回溯到源点，得到增广路径和瓶颈
    pub fn path_to(&self, source: NodeId, sink: NodeId) -> Option<(AugmentingPath, Capacity)> {
        let delta = self.get(sink)?.bottleneck.finite()?;

        let mut steps = Vec::new();
        let mut current = sink;
        while current != source {
            let pred = self.get(current)?.predecessor?;
            steps.push(PathStep::new(pred.node, current, pred.direction));
            current = pred.node;
        }
        steps.reverse();

        AugmentingPath::from_steps(steps).map(|path| (path, delta))
    }

    fn insert(&mut self, node: NodeId, label: Label) {
        self.0.insert(node, label);
    }
}

/// 从源点做一轮标号，汇点被标号或队列为空时停止
pub fn label(network: &FlowNetwork, source: NodeId, sink: NodeId) -> LabelMap {
    let mut labels = LabelMap::default();
    let mut queue = VecDeque::new();

    labels.insert(source, Label::source());
    queue.push_back(source);

    while !labels.is_labeled(sink) {
        let Some(i) = queue.pop_front() else {
            break;
        };
        let reach = match labels.get(i) {
            Some(l) => l.bottleneck,
            None => continue,
        };

        // 正向边：i -> j 未饱和
        for (j, edge) in network.successors(i) {
            if labels.is_labeled(j) || edge.flow() >= edge.capacity() {
                continue;
            }
            let bottleneck = reach.through(edge.forward_residual());
            tracing::trace!(node = %j, from = %i, %bottleneck, "正向标号");
            labels.insert(
                j,
                Label {
                    predecessor: Some(Predecessor {
                        node: i,
                        direction: Direction::Forward,
                    }),
                    bottleneck,
                },
            );
            queue.push_back(j);
        }

        // 反向边：j -> i 上有可撤销的流量
        for j in network.predecessors(i) {
            if labels.is_labeled(j) {
                continue;
            }
            let flow = match network.flow(j, i) {
                Ok(flow) if flow > 0 => flow,
                _ => continue,
            };
            let bottleneck = reach.through(flow);
            tracing::trace!(node = %j, from = %i, %bottleneck, "反向标号");
            labels.insert(
                j,
                Label {
                    predecessor: Some(Predecessor {
                        node: i,
                        direction: Direction::Reverse,
                    }),
                    bottleneck,
                },
            );
            queue.push_back(j);
        }
    }

    labels
}

/// 标号法搜索策略
#[derive(Debug, Clone, Copy, Default)]
pub struct LabelingSearch;

impl AugmentingPathSearch for LabelingSearch {
    fn strategy(&self) -> Strategy {
        Strategy::Labeling
    }

    fn find(&mut self, network: &FlowNetwork, source: NodeId, sink: NodeId) -> Option<Augmentation> {
        let labels = label(network, source, sink);
        tracing::trace!(labeled = labels.len(), "标号完成");

        let (path, delta) = labels.path_to(source, sink)?;
        Some(Augmentation {
            path,
            delta,
            labels: Some(labels),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn n(id: u64) -> NodeId {
        NodeId::new(id)
    }

    #[test]
    fn test_source_label_is_unbounded() {
        let g = FlowNetwork::from_edges([(1, 2, 3)]);
        let labels = label(&g, n(1), n(2));

        let s = labels.get(n(1)).unwrap();
        assert!(s.predecessor.is_none());
        assert!(s.bottleneck.is_unbounded());

        let t = labels.get(n(2)).unwrap();
        assert_eq!(t.bottleneck, Bottleneck::Finite(3));
        assert_eq!(
            t.predecessor,
            Some(Predecessor {
                node: n(1),
                direction: Direction::Forward
            })
        );
    }

    #[test]
    fn test_bfs_finds_fewest_edges() {
        // 长路径 1-2-3-4 先插入，短路径 1-5-4 后插入，BFS 仍走短路径
        let g = FlowNetwork::from_edges([(1, 2, 9), (2, 3, 9), (3, 4, 9), (1, 5, 1), (5, 4, 1)]);
        let labels = label(&g, n(1), n(4));
        let (path, delta) = labels.path_to(n(1), n(4)).unwrap();

        assert_eq!(path.nodes(), vec![n(1), n(5), n(4)]);
        assert_eq!(delta, 1);
    }

    #[test]
    fn test_reverse_label() {
        let mut g = FlowNetwork::from_edges([(1, 2, 1), (2, 3, 1), (3, 4, 1), (1, 3, 1), (2, 4, 1)]);
        for (a, b) in [(1, 2), (2, 3), (3, 4)] {
            g.edge_mut(n(a), n(b)).unwrap().set_flow(1);
        }
        let labels = label(&g, n(1), n(4));

        let two = labels.get(n(2)).unwrap();
        assert_eq!(
            two.predecessor,
            Some(Predecessor {
                node: n(3),
                direction: Direction::Reverse
            })
        );

        let (path, delta) = labels.path_to(n(1), n(4)).unwrap();
        assert_eq!(path.nodes(), vec![n(1), n(3), n(2), n(4)]);
        assert_eq!(delta, 1);
    }

    #[test]
    fn test_node_zero_as_source() {
        let g = FlowNetwork::from_edges([(0, 1, 2), (1, 2, 2)]);
        let labels = label(&g, n(0), n(2));
        let (path, delta) = labels.path_to(n(0), n(2)).unwrap();
        assert_eq!(path.nodes(), vec![n(0), n(1), n(2)]);
        assert_eq!(delta, 2);
    }

    #[test]
    fn test_unreachable_sink() {
        let g = FlowNetwork::from_edges([(1, 2, 3), (3, 4, 5)]);
        let labels = label(&g, n(1), n(4));
        assert!(!labels.is_labeled(n(4)));
        assert!(labels.path_to(n(1), n(4)).is_none());
        assert_eq!(labels.len(), 2);
    }

    #[test]
    fn test_source_never_relabeled() {
        // 5 -> 1 有流量时 1 不能被重新标号
        let mut g = FlowNetwork::from_edges([(5, 1, 2), (1, 2, 2)]);
        g.edge_mut(n(5), n(1)).unwrap().set_flow(2);
        let labels = label(&g, n(1), n(2));
        assert!(labels.get(n(1)).unwrap().predecessor.is_none());
    }
}
