//! 数据导入模块
//!
//! 从 CSV 或 JSON 边列表构建容量网络

use crate::error::{Error, Result};
use crate::graph::{FlowNetwork, NodeId};
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

/// 一条边记录
///
/// 容量按有符号数读取，负值在插入时报 `InvalidCapacity`。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EdgeRecord {
    pub from: u64,
    pub to: u64,
    pub capacity: i64,
}

/// JSON 文档格式
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NetworkDocument {
    pub edges: Vec<EdgeRecord>,
}

/// 输入格式
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    Csv,
    Json,
}

impl Format {
    /// 按扩展名推断格式
    pub fn from_path<P: AsRef<Path>>(path: P) -> Option<Self> {
        let ext = path.as_ref().extension()?.to_str()?.to_ascii_lowercase();
        match ext.as_str() {
            "csv" => Some(Format::Csv),
            "json" => Some(Format::Json),
            _ => None,
        }
    }
}

impl std::str::FromStr for Format {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "csv" => Ok(Format::Csv),
            "json" => Ok(Format::Json),
            other => Err(Error::ParseError(format!("不支持的格式: {}", other))),
        }
    }
}

/// 从文件加载网络，`format` 为空时按扩展名推断
pub fn load<P: AsRef<Path>>(path: P, format: Option<Format>) -> Result<FlowNetwork> {
    let path = path.as_ref();
    let format = format
        .or_else(|| Format::from_path(path))
        .ok_or_else(|| Error::ParseError(format!("无法从文件名推断格式: {}", path.display())))?;

    let reader = BufReader::new(File::open(path)?);
    let network = match format {
        Format::Csv => from_csv_reader(reader)?,
        Format::Json => from_json_reader(reader)?,
    };

    tracing::info!(
        path = %path.display(),
        nodes = network.node_count(),
        edges = network.edge_count(),
        "网络已导入"
    );
    Ok(network)
}

/// 读取带表头 `from,to,capacity` 的 CSV
pub fn from_csv_reader<R: Read>(reader: R) -> Result<FlowNetwork> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .comment(Some(b'#'))
        .from_reader(reader);

    let mut records = Vec::new();
    for record in csv_reader.deserialize() {
        let record: EdgeRecord = record?;
        records.push(record);
    }
    build(&records)
}

/// 读取 JSON 文档
pub fn from_json_reader<R: Read>(reader: R) -> Result<FlowNetwork> {
    let doc: NetworkDocument = serde_json::from_reader(reader)?;
    build(&doc.edges)
}

pub fn from_json_str(s: &str) -> Result<FlowNetwork> {
    from_json_reader(s.as_bytes())
}

/// 按记录顺序插入边，遇到负容量立即返回错误
pub fn build(records: &[EdgeRecord]) -> Result<FlowNetwork> {
    let mut network = FlowNetwork::new();
    for record in records {
        network.add_edge_checked(NodeId::new(record.from), NodeId::new(record.to), record.capacity)?;
    }
    Ok(network)
}

/// 内置示例网络（9 个节点，源点 1，汇点 9）
pub fn example_network() -> FlowNetwork {
    FlowNetwork::from_edges([
        (1, 2, 14),
        (1, 4, 23),
        (2, 4, 9),
        (4, 5, 26),
        (5, 2, 11),
        (2, 3, 10),
        (3, 5, 12),
        (5, 7, 4),
        (5, 6, 25),
        (3, 8, 18),
        (6, 8, 8),
        (6, 7, 7),
        (8, 9, 20),
        (7, 9, 15),
    ])
}

/// 内置示例的源点和汇点
pub const EXAMPLE_SOURCE: NodeId = NodeId(1);
pub const EXAMPLE_SINK: NodeId = NodeId(9);
