//! 通用类型定义
//!
//! 容量的数值类型、瓶颈值和搜索策略

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;

/// 容量与流量的数值类型（精确整数运算）
pub type Capacity = u64;

/// 瓶颈值
///
/// 源点的初始瓶颈是 `Unbounded`，只用作累积 `min` 的起点；
/// 与任何有限残余容量取 `min` 之后一定是 `Finite`。
/// 排序上 `Unbounded` 大于所有 `Finite` 值。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Bottleneck {
    /// 尚未经过任何边
    Unbounded,
    /// 已经经过至少一条边
    Finite(Capacity),
}

impl Bottleneck {
    /// 与一条边的残余容量取较小值
    pub fn through(self, residual: Capacity) -> Self {
        match self {
            Bottleneck::Unbounded => Bottleneck::Finite(residual),
            Bottleneck::Finite(current) => Bottleneck::Finite(current.min(residual)),
        }
    }

    /// 有限值；`Unbounded` 返回 `None`
    pub fn finite(self) -> Option<Capacity> {
        match self {
            Bottleneck::Unbounded => None,
            Bottleneck::Finite(value) => Some(value),
        }
    }

    pub fn is_unbounded(self) -> bool {
        matches!(self, Bottleneck::Unbounded)
    }
}

impl PartialOrd for Bottleneck {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Bottleneck {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (Bottleneck::Unbounded, Bottleneck::Unbounded) => Ordering::Equal,
            (Bottleneck::Unbounded, Bottleneck::Finite(_)) => Ordering::Greater,
            (Bottleneck::Finite(_), Bottleneck::Unbounded) => Ordering::Less,
            (Bottleneck::Finite(a), Bottleneck::Finite(b)) => a.cmp(b),
        }
    }
}

impl fmt::Display for Bottleneck {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Bottleneck::Unbounded => write!(f, "∞"),
            Bottleneck::Finite(value) => write!(f, "{}", value),
        }
    }
}

/// 残余边的遍历方向
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    /// 沿原边 i -> j 增加流量
    Forward,
    /// 撤销原边 j -> i 上已有的流量
    Reverse,
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Direction::Forward => write!(f, "+"),
            Direction::Reverse => write!(f, "-"),
        }
    }
}

/// 增广路径搜索策略
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Strategy {
    /// 显式残余图上的 DFS
    #[default]
    Residual,
    /// 标号法（BFS，不构建残余图）
    Labeling,
}

impl Strategy {
    pub fn name(&self) -> &'static str {
        match self {
            Strategy::Residual => "residual",
            Strategy::Labeling => "labeling",
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl std::str::FromStr for Strategy {
    type Err = crate::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "residual" | "dfs" => Ok(Strategy::Residual),
            "labeling" | "labelling" | "bfs" => Ok(Strategy::Labeling),
            other => Err(crate::Error::ParseError(format!("未知的策略: {}", other))),
        }
    }
}
