//! 增广路径

use crate::error::Error;
use crate::graph::NodeId;
use crate::types::Direction;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// 增广路径上的一跳
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PathStep {
    pub from: NodeId,
    pub to: NodeId,
    /// `Forward` 表示沿原边 from -> to，`Reverse` 表示撤销原边 to -> from 上的流量
    pub direction: Direction,
}

impl PathStep {
    pub fn new(from: NodeId, to: NodeId, direction: Direction) -> Self {
        Self {
            from,
            to,
            direction,
        }
    }

    /// 这一跳实际修改的原图边
    pub fn underlying_edge(&self) -> (NodeId, NodeId) {
        match self.direction {
            Direction::Forward => (self.from, self.to),
            Direction::Reverse => (self.to, self.from),
        }
    }
}

/// 从源点到汇点的增广路径（简单路径，至少一跳）
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<PathStep>", into = "Vec<PathStep>")]
pub struct AugmentingPath {
    steps: Vec<PathStep>,
}

impl AugmentingPath {
    /// 由按顺序排列的跳构建
    ///
    /// 路径为空、相邻两跳不首尾相接或有节点重复时返回 `None`。
    /// 简单路径上每条原图边至多出现一次。
    pub fn from_steps(steps: Vec<PathStep>) -> Option<Self> {
        let first = steps.first()?;
        if steps.windows(2).any(|w| w[0].to != w[1].from) {
            return None;
        }

        let mut seen = HashSet::with_capacity(steps.len() + 1);
        seen.insert(first.from);
        if !steps.iter().all(|step| seen.insert(step.to)) {
            return None;
        }
        Some(Self { steps })
    }

    pub fn steps(&self) -> &[PathStep] {
        &self.steps
    }

    /// 经过的节点序列（源点到汇点）
    pub fn nodes(&self) -> Vec<NodeId> {
        let mut nodes = Vec::with_capacity(self.steps.len() + 1);
        nodes.push(self.source());
        nodes.extend(self.steps.iter().map(|step| step.to));
        nodes
    }

    pub fn source(&self) -> NodeId {
        self.steps[0].from
    }

    pub fn sink(&self) -> NodeId {
        self.steps[self.steps.len() - 1].to
    }

    /// 边数
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// 是否包含撤销流量的反向跳
    pub fn has_reverse_steps(&self) -> bool {
        self.steps
            .iter()
            .any(|step| step.direction == Direction::Reverse)
    }
}

impl TryFrom<Vec<PathStep>> for AugmentingPath {
    type Error = Error;

    fn try_from(steps: Vec<PathStep>) -> Result<Self, Self::Error> {
        Self::from_steps(steps)
            .ok_or_else(|| Error::ParseError("增广路径必须是非空的简单路径".to_string()))
    }
}

impl From<AugmentingPath> for Vec<PathStep> {
    fn from(path: AugmentingPath) -> Self {
        path.steps
    }
}
