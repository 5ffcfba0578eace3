//! 错误类型定义

use crate::graph::NodeId;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("无效的容量: ({from}, {to}) 容量为 {capacity}，容量不能为负")]
    InvalidCapacity { from: NodeId, to: NodeId, capacity: i64 },

    #[error("边不存在: ({from}, {to})")]
    UndefinedEdge { from: NodeId, to: NodeId },

    #[error("不变量被破坏: {0}")]
    InvariantViolation(String),

    #[error("节点不存在: {0}")]
    NodeNotFound(NodeId),

    #[error("源点与汇点相同: {0}")]
    InvalidTerminals(NodeId),

    #[error("解析错误: {0}")]
    ParseError(String),

    #[error("IO 错误: {0}")]
    IoError(#[from] std::io::Error),

    #[error("序列化错误: {0}")]
    SerializationError(String),
}

impl From<csv::Error> for Error {
    fn from(e: csv::Error) -> Self {
        Error::ParseError(e.to_string())
    }
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        Error::ParseError(e.to_string())
    }
}
