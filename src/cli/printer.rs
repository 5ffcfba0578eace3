//! 结果打印器
//!
//! 提供表格和垂直格式的最大流结果输出

use crate::algorithm::{Iteration, LabelMap, MaxFlow, MinCut};
use crate::types::Direction;
use prettytable::{format, row, Cell, Row, Table};

/// 打印模式
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum PrintMode {
    /// 表格模式
    Table,
    /// 垂直模式
    Vertical,
}

/// 结果打印器
pub struct Printer {
    mode: PrintMode,
}

impl Default for Printer {
    fn default() -> Self {
        Self::new(PrintMode::Table)
    }
}

impl Printer {
    pub fn new(mode: PrintMode) -> Self {
        Self { mode }
    }

    /// 打印迭代记录
    pub fn print_iterations(&self, result: &MaxFlow) -> String {
        if result.iterations.is_empty() {
            return "没有找到增广路径\n".to_string();
        }

        let columns = ["#", "Path", "Delta", "Reverse Hops"];
        let rows: Vec<Vec<String>> = result.iterations.iter().map(iteration_row).collect();

        match self.mode {
            PrintMode::Table => self.format_table(&columns, &rows),
            PrintMode::Vertical => self.format_vertical(&columns, &rows),
        }
    }

    /// 打印最小割
    pub fn print_cut(&self, cut: &MinCut) -> String {
        let mut table = Table::new();
        table.set_format(*format::consts::FORMAT_BOX_CHARS);
        table.set_titles(row!["Property", "Value"]);
        table.add_row(row!["S", join(&cut.source_side)]);
        table.add_row(row!["T", join(&cut.sink_side)]);
        table.add_row(row!["Capacity", cut.capacity.to_string()]);

        let edges: Vec<String> = cut
            .edges
            .iter()
            .map(|e| format!("{}->{} ({})", e.from, e.to, e.capacity))
            .collect();
        table.add_row(row!["Cut Edges", edges.join(", ")]);
        table.to_string()
    }

    /// 打印标号
    pub fn print_labels(&self, labels: &LabelMap) -> String {
        let columns = ["Node", "Predecessor", "Bottleneck"];
        let rows: Vec<Vec<String>> = labels
            .iter()
            .map(|(node, label)| {
                let pred = match label.predecessor {
                    Some(p) => format!("{}{}", p.direction, p.node),
                    None => "-".to_string(),
                };
                vec![node.to_string(), pred, label.bottleneck.to_string()]
            })
            .collect();

        match self.mode {
            PrintMode::Table => self.format_table(&columns, &rows),
            PrintMode::Vertical => self.format_vertical(&columns, &rows),
        }
    }

    /// 打印统计信息
    pub fn print_stats(&self, node_count: usize, edge_count: usize, result: &MaxFlow) -> String {
        let mut table = Table::new();
        table.set_format(*format::consts::FORMAT_BOX_CHARS);
        table.set_titles(row!["Property", "Value"]);
        table.add_row(row!["Strategy", result.strategy.to_string()]);
        table.add_row(row!["Node Count", node_count.to_string()]);
        table.add_row(row!["Edge Count", edge_count.to_string()]);
        table.add_row(row!["Iterations", result.iterations.len().to_string()]);
        table.add_row(row!["Max Flow", result.value.to_string()]);
        table.to_string()
    }

    /// 表格格式
    fn format_table(&self, columns: &[&str], rows: &[Vec<String>]) -> String {
        let mut table = Table::new();
        table.set_format(*format::consts::FORMAT_BOX_CHARS);

        let header: Vec<Cell> = columns.iter().map(|c| Cell::new(c)).collect();
        table.set_titles(Row::new(header));

        for row_data in rows {
            let cells: Vec<Cell> = row_data.iter().map(|v| Cell::new(v)).collect();
            table.add_row(Row::new(cells));
        }

        table.to_string()
    }

    /// 垂直格式
    fn format_vertical(&self, columns: &[&str], rows: &[Vec<String>]) -> String {
        let max_col_width = columns.iter().map(|c| c.len()).max().unwrap_or(0);
        let mut output = String::new();

        for (i, row_data) in rows.iter().enumerate() {
            output.push_str(&format!(
                "*************************** {}. row ***************************\n",
                i + 1
            ));

            for (j, col) in columns.iter().enumerate() {
                let value = row_data.get(j).map(|s| s.as_str()).unwrap_or("");
                output.push_str(&format!("{:>width$}: {}\n", col, value, width = max_col_width));
            }
        }

        output
    }
}

fn iteration_row(it: &Iteration) -> Vec<String> {
    let reverse: Vec<String> = it
        .steps
        .iter()
        .filter(|s| s.direction == Direction::Reverse)
        .map(|s| format!("{}<-{}", s.from, s.to))
        .collect();

    vec![
        it.index.to_string(),
        it.path
            .iter()
            .map(|n| n.to_string())
            .collect::<Vec<_>>()
            .join(" -> "),
        it.delta.to_string(),
        if reverse.is_empty() {
            "-".to_string()
        } else {
            reverse.join(", ")
        },
    ]
}

fn join(nodes: &[crate::graph::NodeId]) -> String {
    let parts: Vec<String> = nodes.iter().map(|n| n.to_string()).collect();
    format!("{{{}}}", parts.join(", "))
}
