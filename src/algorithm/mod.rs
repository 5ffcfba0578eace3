//! 最大流算法模块
//!
//! Ford-Fulkerson 的两种增广路径搜索（残余图 DFS、标号法 BFS）、
//! 流量更新和最小割提取

mod augment;
mod dfs;
mod engine;
mod labeling;
mod min_cut;
mod path;

pub use augment::apply;
pub use dfs::{find_augmenting_path, ResidualSearch};
pub use engine::{
    max_flow_labeling, max_flow_residual, results_to_json, Augmentation, AugmentingPathSearch,
    FordFulkerson, Iteration, MaxFlow, SolverConfig,
};
pub use labeling::{label, Label, LabelMap, LabelingSearch, Predecessor};
pub use min_cut::{reachable_from, CutEdge, MinCut};
pub use path::{AugmentingPath, PathStep};
