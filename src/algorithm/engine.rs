//! Ford-Fulkerson 主循环
//!
//! 两种搜索策略共用同一个迭代约定：找增广路径，找不到就终止，
//! 否则更新流量、累加总流量并记录一次迭代快照。终止后提取最小割。

use super::augment;
use super::dfs::ResidualSearch;
use super::labeling::{LabelMap, LabelingSearch};
use super::min_cut::MinCut;
use super::path::{AugmentingPath, PathStep};
use crate::error::{Error, Result};
use crate::graph::{FlowNetwork, FlowTable, NodeId};
use crate::types::{Capacity, Strategy};
use serde::{Deserialize, Serialize};
use std::time::Instant;

/// 一次搜索的结果
#[derive(Debug, Clone)]
pub struct Augmentation {
    pub path: AugmentingPath,
    /// 瓶颈，严格为正
    pub delta: Capacity,
    /// 标号法产生的标号
    pub labels: Option<LabelMap>,
}

/// 增广路径搜索
///
/// 实现者只读网络；流量更新由主循环完成。
pub trait AugmentingPathSearch {
    fn strategy(&self) -> Strategy;

    /// 找一条增广路径，找不到返回 `None`
    fn find(&mut self, network: &FlowNetwork, source: NodeId, sink: NodeId) -> Option<Augmentation>;
}

/// 求解配置
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SolverConfig {
    /// 搜索策略
    pub strategy: Strategy,
    /// 每次迭代是否保存完整流量表
    pub record_snapshots: bool,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            strategy: Strategy::Residual,
            record_snapshots: true,
        }
    }
}

/// 一次迭代的快照，创建后不再修改
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Iteration {
    /// 从 1 开始的序号
    pub index: usize,
    /// 路径上的节点（源点到汇点）
    pub path: Vec<NodeId>,
    /// 带方向的每一跳
    pub steps: Vec<PathStep>,
    /// 本次增广量
    pub delta: Capacity,
    /// 增广之后的流量表（关闭快照时为空）
    pub flow: FlowTable,
    /// 标号法的标号
    #[serde(skip_serializing_if = "Option::is_none")]
    pub labels: Option<LabelMap>,
}

/// 最大流结果
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MaxFlow {
    pub strategy: Strategy,
    pub source: NodeId,
    pub sink: NodeId,
    /// 最大流量值
    pub value: Capacity,
    /// 迭代记录
    pub iterations: Vec<Iteration>,
    /// 最小割
    pub cut: MinCut,
    /// 最终流量表
    pub flow: FlowTable,
}

impl MaxFlow {
    pub fn source_side(&self) -> &[NodeId] {
        &self.cut.source_side
    }

    pub fn sink_side(&self) -> &[NodeId] {
        &self.cut.sink_side
    }
}

/// 把一组结果输出为格式化的 JSON 数组
pub fn results_to_json<'a, I>(results: I) -> Result<String>
where
    I: IntoIterator<Item = &'a MaxFlow>,
{
    let payload: Vec<&MaxFlow> = results.into_iter().collect();
    serde_json::to_string_pretty(&payload).map_err(|e| Error::SerializationError(e.to_string()))
}

/// Ford-Fulkerson 求解器
#[derive(Debug, Clone, Default)]
pub struct FordFulkerson {
    config: SolverConfig,
}

impl FordFulkerson {
    pub fn new(config: SolverConfig) -> Self {
        Self { config }
    }

    /// 使用指定策略、保存完整快照
    pub fn with_strategy(strategy: Strategy) -> Self {
        Self::new(SolverConfig {
            strategy,
            ..SolverConfig::default()
        })
    }

    pub fn config(&self) -> &SolverConfig {
        &self.config
    }

    /// 计算从 source 到 sink 的最大流
    ///
    /// 网络被独占借用并原地修改；需要保留原网络时先 clone。
    pub fn run(&self, network: &mut FlowNetwork, source: NodeId, sink: NodeId) -> Result<MaxFlow> {
        match self.config.strategy {
            Strategy::Residual => self.run_with(ResidualSearch, network, source, sink),
            Strategy::Labeling => self.run_with(LabelingSearch, network, source, sink),
        }
    }

    /// 用任意搜索实现运行主循环
    pub fn run_with<S: AugmentingPathSearch>(
        &self,
        mut search: S,
        network: &mut FlowNetwork,
        source: NodeId,
        sink: NodeId,
    ) -> Result<MaxFlow> {
        validate_terminals(network, source, sink)?;

        let strategy = search.strategy();
        let start = Instant::now();
        tracing::info!(
            %strategy,
            %source,
            %sink,
            nodes = network.node_count(),
            edges = network.edge_count(),
            "开始计算最大流"
        );

        network.reset_flow();

        let mut value: Capacity = 0;
        let mut iterations = Vec::new();

        while let Some(augmentation) = search.find(network, source, sink) {
            let Augmentation {
                path,
                delta,
                labels,
            } = augmentation;

            augment::apply(network, &path, delta)?;
            value = value
                .checked_add(delta)
                .ok_or_else(|| Error::InvariantViolation("总流量溢出".to_string()))?;

            let index = iterations.len() + 1;
            tracing::debug!(
                iteration = index,
                delta,
                total = value,
                hops = path.len(),
                "沿路径 {:?} 增广",
                path.nodes()
            );

            let flow = if self.config.record_snapshots {
                network.flow_table()
            } else {
                FlowTable::default()
            };

            iterations.push(Iteration {
                index,
                path: path.nodes(),
                steps: path.steps().to_vec(),
                delta,
                flow,
                labels,
            });
        }

        network.check_capacity()?;
        network.check_conservation(source, sink)?;

        let cut = MinCut::extract(network, source)?;
        if cut.capacity != value {
            return Err(Error::InvariantViolation(format!(
                "割容量 {} 与最大流 {} 不相等",
                cut.capacity, value
            )));
        }

        tracing::info!(
            %strategy,
            value,
            iterations = iterations.len(),
            source_side = cut.source_side.len(),
            elapsed_us = start.elapsed().as_micros() as u64,
            "最大流计算完成"
        );

        Ok(MaxFlow {
            strategy,
            source,
            sink,
            value,
            iterations,
            cut,
            flow: network.flow_table(),
        })
    }
}

fn validate_terminals(network: &FlowNetwork, source: NodeId, sink: NodeId) -> Result<()> {
    if !network.contains_node(source) {
        return Err(Error::NodeNotFound(source));
    }
    if !network.contains_node(sink) {
        return Err(Error::NodeNotFound(sink));
    }
    if source == sink {
        return Err(Error::InvalidTerminals(source));
    }
    Ok(())
}

/// 残余图 DFS 版本
pub fn max_flow_residual(network: &mut FlowNetwork, source: NodeId, sink: NodeId) -> Result<MaxFlow> {
    FordFulkerson::with_strategy(Strategy::Residual).run(network, source, sink)
}

/// 标号法版本
pub fn max_flow_labeling(network: &mut FlowNetwork, source: NodeId, sink: NodeId) -> Result<MaxFlow> {
    FordFulkerson::with_strategy(Strategy::Labeling).run(network, source, sink)
}
