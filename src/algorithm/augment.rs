//! 沿增广路径更新流量

use super::path::AugmentingPath;
use crate::error::{Error, Result};
use crate::graph::FlowNetwork;
use crate::types::{Capacity, Direction};

/// 沿路径推送 `delta` 单位流量
///
/// 正向跳 i -> j 令 `flow[i][j] += delta`，反向跳令 `flow[j][i] -= delta`。
/// 路径是简单路径，每条原图边只被修改一次。
/// 先检查整条路径，任何一跳会让流量越出 `[0, capacity]` 时返回
/// `InvariantViolation`，此时网络不被修改。
pub fn apply(network: &mut FlowNetwork, path: &AugmentingPath, delta: Capacity) -> Result<()> {
    if delta == 0 {
        return Err(Error::InvariantViolation("增广量为 0".to_string()));
    }

    let mut updates = Vec::with_capacity(path.len());
    for step in path.steps() {
        let (from, to) = step.underlying_edge();
        let edge = network.edge(from, to)?;
        let updated = match step.direction {
            Direction::Forward => edge
                .flow()
                .checked_add(delta)
                .filter(|&flow| flow <= edge.capacity()),
            Direction::Reverse => edge.flow().checked_sub(delta),
        };
        let updated = updated.ok_or_else(|| {
            Error::InvariantViolation(format!(
                "边 ({}, {}) 流量 {} 容量 {}，无法{} {}",
                from,
                to,
                edge.flow(),
                edge.capacity(),
                match step.direction {
                    Direction::Forward => "增加",
                    Direction::Reverse => "撤销",
                },
                delta
            ))
        })?;
        updates.push((from, to, updated));
    }

    for (from, to, flow) in updates {
        network.edge_mut(from, to)?.set_flow(flow);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algorithm::path::PathStep;
    use crate::graph::NodeId;

    fn n(id: u64) -> NodeId {
        NodeId::new(id)
    }

    fn path(steps: &[(u64, u64, Direction)]) -> AugmentingPath {
        AugmentingPath::from_steps(
            steps
                .iter()
                .map(|&(a, b, d)| PathStep::new(n(a), n(b), d))
                .collect(),
        )
        .unwrap()
    }

    #[test]
    fn test_forward_update() {
        let mut g = FlowNetwork::from_edges([(1, 2, 5), (2, 3, 4)]);
        let p = path(&[(1, 2, Direction::Forward), (2, 3, Direction::Forward)]);
        apply(&mut g, &p, 4).unwrap();

        assert_eq!(g.flow(n(1), n(2)).unwrap(), 4);
        assert_eq!(g.flow(n(2), n(3)).unwrap(), 4);
        assert_eq!(g.flow(n(2), n(1)).unwrap(), 0);
    }

    #[test]
    fn test_reverse_update_cancels_flow() {
        let mut g = FlowNetwork::from_edges([(1, 2, 1), (2, 3, 1), (3, 4, 1), (1, 3, 1), (2, 4, 1)]);
        for (a, b) in [(1, 2), (2, 3), (3, 4)] {
            g.edge_mut(n(a), n(b)).unwrap().set_flow(1);
        }
        let p = path(&[
            (1, 3, Direction::Forward),
            (3, 2, Direction::Reverse),
            (2, 4, Direction::Forward),
        ]);
        apply(&mut g, &p, 1).unwrap();

        assert_eq!(g.flow(n(2), n(3)).unwrap(), 0);
        assert_eq!(g.flow(n(1), n(3)).unwrap(), 1);
        assert_eq!(g.flow(n(2), n(4)).unwrap(), 1);
        // 反向的 (3,2) 边不受影响
        assert_eq!(g.flow(n(3), n(2)).unwrap(), 0);
        assert!(g.check_conservation(n(1), n(4)).is_ok());
    }

    #[test]
    fn test_overflow_rejected_without_mutation() {
        let mut g = FlowNetwork::from_edges([(1, 2, 5), (2, 3, 2)]);
        let p = path(&[(1, 2, Direction::Forward), (2, 3, Direction::Forward)]);
        let err = apply(&mut g, &p, 3).unwrap_err();

        assert!(matches!(err, Error::InvariantViolation(_)));
        assert_eq!(g.flow(n(1), n(2)).unwrap(), 0);
    }

    #[test]
    fn test_same_edge_twice_never_applied() {
        let mut g = FlowNetwork::from_edges([(1, 2, 5)]);
        let step = PathStep::new(n(1), n(2), Direction::Forward);
        assert!(AugmentingPath::from_steps(vec![step, step]).is_none());

        // 逐次推送时第二次越过容量
        let p = path(&[(1, 2, Direction::Forward)]);
        apply(&mut g, &p, 3).unwrap();
        assert!(matches!(
            apply(&mut g, &p, 3),
            Err(Error::InvariantViolation(_))
        ));
        assert_eq!(g.flow(n(1), n(2)).unwrap(), 3);
    }

    #[test]
    fn test_underflow_rejected() {
        let mut g = FlowNetwork::from_edges([(1, 2, 5)]);
        let p = path(&[(2, 1, Direction::Reverse)]);
        assert!(matches!(
            apply(&mut g, &p, 1),
            Err(Error::InvariantViolation(_))
        ));
    }

    #[test]
    fn test_undefined_edge_on_path() {
        let mut g = FlowNetwork::from_edges([(1, 2, 5)]);
        let p = path(&[(1, 3, Direction::Forward)]);
        assert!(matches!(
            apply(&mut g, &p, 1),
            Err(Error::UndefinedEdge { .. })
        ));
    }
}
