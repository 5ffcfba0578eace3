//! 边定义
//!
//! 每条有向边只有容量和当前流量两个属性

use crate::types::Capacity;
use serde::{Deserialize, Serialize};

/// 有向容量边
///
/// 不变量：`0 <= flow <= capacity`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct FlowEdge {
    /// 容量（插入后不可变）
    capacity: Capacity,
    /// 当前流量
    flow: Capacity,
}

impl FlowEdge {
    /// 创建零流量的边
    pub fn new(capacity: Capacity) -> Self {
        Self { capacity, flow: 0 }
    }

    pub fn capacity(&self) -> Capacity {
        self.capacity
    }

    pub fn flow(&self) -> Capacity {
        self.flow
    }

    /// 正向残余容量 `capacity - flow`
    pub fn forward_residual(&self) -> Capacity {
        self.capacity.saturating_sub(self.flow)
    }

    /// 反向残余容量（可撤销的流量）
    pub fn backward_residual(&self) -> Capacity {
        self.flow
    }

    /// 是否饱和
    pub fn is_saturated(&self) -> bool {
        self.flow >= self.capacity
    }

    pub(crate) fn set_flow(&mut self, flow: Capacity) {
        self.flow = flow;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_edge_residuals() {
        let mut e = FlowEdge::new(10);
        assert_eq!(e.forward_residual(), 10);
        assert_eq!(e.backward_residual(), 0);
        assert!(!e.is_saturated());

        e.set_flow(4);
        assert_eq!(e.forward_residual(), 6);
        assert_eq!(e.backward_residual(), 4);

        e.set_flow(10);
        assert!(e.is_saturated());
        assert_eq!(e.forward_residual(), 0);
    }

    #[test]
    fn test_zero_capacity_edge_is_saturated() {
        let e = FlowEdge::new(0);
        assert!(e.is_saturated());
        assert_eq!(e.forward_residual(), 0);
    }
}
