//! FlowNet 命令行工具
//!
//! 读取边列表（或使用内置示例），计算最大流并输出每次迭代

use anyhow::{bail, Context};
use clap::{Parser, ValueEnum};
use colored::Colorize;
use flownet::cli::{PrintMode, Printer};
use flownet::import::{self, Format, EXAMPLE_SINK, EXAMPLE_SOURCE};
use flownet::render;
use flownet::{
    results_to_json, FlowNetwork, FordFulkerson, MaxFlow, NodeId, SolverConfig, Strategy,
};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum StrategyArg {
    Residual,
    Labeling,
    Both,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum FormatArg {
    Csv,
    Json,
}

#[derive(Parser, Debug)]
#[command(name = "flownet")]
#[command(about = "Ford-Fulkerson 最大流 / 最小割")]
#[command(version)]
struct Args {
    /// 边列表文件（csv 或 json），缺省使用内置示例
    #[arg(short, long)]
    input: Option<PathBuf>,

    /// 输入格式，缺省按扩展名推断
    #[arg(short, long, value_enum)]
    format: Option<FormatArg>,

    /// 源点
    #[arg(short, long)]
    source: Option<u64>,

    /// 汇点
    #[arg(short = 't', long)]
    sink: Option<u64>,

    /// 搜索策略
    #[arg(long, value_enum, default_value = "both")]
    strategy: StrategyArg,

    /// 每次迭代输出 TikZ 图
    #[arg(long)]
    tikz: bool,

    /// 以 JSON 输出完整结果
    #[arg(long)]
    json: bool,

    /// 不保存每次迭代的流量表
    #[arg(long)]
    no_snapshots: bool,

    /// 垂直显示表格
    #[arg(short = 'G', long)]
    vertical: bool,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("flownet=info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    let (network, default_source, default_sink) = match &args.input {
        Some(path) => {
            let format = args.format.map(|f| match f {
                FormatArg::Csv => Format::Csv,
                FormatArg::Json => Format::Json,
            });
            let network = import::load(path, format)
                .with_context(|| format!("读取 {} 失败", path.display()))?;
            (network, None, None)
        }
        None => (
            import::example_network(),
            Some(EXAMPLE_SOURCE),
            Some(EXAMPLE_SINK),
        ),
    };

    let source = match args.source.map(NodeId::new).or(default_source) {
        Some(s) => s,
        None => bail!("使用自定义输入时必须指定 --source"),
    };
    let sink = match args.sink.map(NodeId::new).or(default_sink) {
        Some(t) => t,
        None => bail!("使用自定义输入时必须指定 --sink"),
    };

    let strategies: &[Strategy] = match args.strategy {
        StrategyArg::Residual => &[Strategy::Residual],
        StrategyArg::Labeling => &[Strategy::Labeling],
        StrategyArg::Both => &[Strategy::Residual, Strategy::Labeling],
    };

    let mut results = Vec::new();
    for &strategy in strategies {
        // 每种策略使用独立的副本
        let mut working = network.clone();
        let solver = FordFulkerson::new(SolverConfig {
            strategy,
            record_snapshots: !args.no_snapshots,
        });
        let result = solver
            .run(&mut working, source, sink)
            .with_context(|| format!("{} 策略计算失败", strategy))?;
        results.push((working, result));
    }

    if args.json {
        println!("{}", results_to_json(results.iter().map(|(_, r)| r))?);
    } else {
        let mode = if args.vertical {
            PrintMode::Vertical
        } else {
            PrintMode::Table
        };
        for (working, result) in &results {
            print_result(&network, working, result, mode, args.tikz);
        }
    }

    if let [(_, first), (_, second)] = results.as_slice() {
        if first.value == second.value {
            eprintln!("{}", format!("两种策略结果一致: {}", first.value).green());
        } else {
            bail!(
                "两种策略结果不一致: {} = {}, {} = {}",
                first.strategy,
                first.value,
                second.strategy,
                second.value
            );
        }
    }

    Ok(())
}

fn print_result(
    original: &FlowNetwork,
    working: &FlowNetwork,
    result: &MaxFlow,
    mode: PrintMode,
    tikz: bool,
) {
    let printer = Printer::new(mode);

    println!(
        "{}",
        format!("=== FORD-FULKERSON ({}) ===", result.strategy.name().to_uppercase())
            .bold()
            .cyan()
    );
    println!("{}", printer.print_stats(original.node_count(), original.edge_count(), result));
    println!("{} {}", "最大流:".bold(), result.value.to_string().green().bold());
    print!("{}", printer.print_iterations(result));

    if tikz {
        for it in &result.iterations {
            println!("\n{} {}", "迭代".bold(), it.index);
            if let Some(labels) = &it.labels {
                print!("{}", printer.print_labels(labels));
            }
            print!("{}", render::tikz_iteration(working, it));
        }
    }

    println!("{}", "最小割".bold());
    println!("{}", printer.print_cut(&result.cut));
}
