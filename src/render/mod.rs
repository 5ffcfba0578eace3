//! TikZ 图形输出
//!
//! 把网络和某次迭代的流量画成 `tikzpicture`：节点升序排成一行，
//! 每条容量为正的边标注 `flow/capacity`，增广路径上的边加粗标红。

use crate::algorithm::Iteration;
use crate::graph::{FlowNetwork, NodeId};
use crate::types::Capacity;
use std::collections::HashSet;
use std::fmt;

/// 相邻节点的水平间距
const NODE_SPACING: usize = 2;

/// 用网络当前的流量渲染，`highlight` 为沿原边前进的节点序列
pub fn tikz(network: &FlowNetwork, highlight: Option<&[NodeId]>) -> String {
    let highlighted = highlight
        .map(|path| path.windows(2).map(|w| (w[0], w[1])).collect())
        .unwrap_or_default();
    Picture {
        network,
        highlighted,
        flow_of: |from: NodeId, to: NodeId| network.flow(from, to).unwrap_or(0),
    }
    .to_string()
}

/// 用某次迭代记录的流量表渲染，并高亮该次增广实际修改的原图边
///
/// 反向跳 j -> i 高亮的是被撤销流量的 i -> j。
/// 流量表为空（关闭了快照）时退回到网络当前流量。
pub fn tikz_iteration(network: &FlowNetwork, iteration: &Iteration) -> String {
    let highlighted = iteration
        .steps
        .iter()
        .map(|step| step.underlying_edge())
        .collect();

    if iteration.flow.is_empty() {
        return Picture {
            network,
            highlighted,
            flow_of: |from: NodeId, to: NodeId| network.flow(from, to).unwrap_or(0),
        }
        .to_string();
    }
    Picture {
        network,
        highlighted,
        flow_of: |from: NodeId, to: NodeId| iteration.flow.get(from, to).unwrap_or(0),
    }
    .to_string()
}

struct Picture<'a, F> {
    network: &'a FlowNetwork,
    highlighted: HashSet<(NodeId, NodeId)>,
    flow_of: F,
}

impl<F> fmt::Display for Picture<'_, F>
where
    F: Fn(NodeId, NodeId) -> Capacity,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut nodes: Vec<NodeId> = self.network.nodes().collect();
        nodes.sort();

        writeln!(f, "\\begin{{tikzpicture}}[>=stealth, node distance=2cm]")?;

        for (i, node) in nodes.iter().enumerate() {
            writeln!(f, "\\node ({}) at ({},0) {{{}}};", node, i * NODE_SPACING, node)?;
        }

        for (from, to, edge) in self.network.edges() {
            if edge.capacity() == 0 {
                continue;
            }
            let style = if self.highlighted.contains(&(from, to)) {
                "red, thick"
            } else {
                ""
            };
            writeln!(
                f,
                "\\draw[->,{}] ({}) -- ({}) node[midway, above] {{{}/{}}};",
                style,
                from,
                to,
                (self.flow_of)(from, to),
                edge.capacity()
            )?;
        }

        writeln!(f, "\\end{{tikzpicture}}")
    }
}
