//! Console report. Every writer takes `impl Write` so the layout can be
//! checked against an in-memory buffer.

use std::io::{self, Write};
use std::path::Path;

use crate::adjacency_lists::NodeId;
use crate::data_cleaning::{GraphData, PairRecord};
use crate::graph_analysis::{Bounds, DegreeViolation, PairResult, RangeCheck, Summary};

fn rule(out: &mut impl Write) -> io::Result<()> {
    writeln!(out, "{}", "=".repeat(80))
}

fn section(out: &mut impl Write, title: &str) -> io::Result<()> {
    writeln!(out)?;
    rule(out)?;
    writeln!(out, "{title}")?;
    rule(out)
}

/// `[a, b, c]`
fn format_node_list(nodes: &[NodeId]) -> String {
    let joined: Vec<String> = nodes.iter().map(NodeId::to_string).collect();
    format!("[{}]", joined.join(", "))
}

pub fn write_graph_loaded(out: &mut impl Write, path: &Path, graph: &GraphData) -> io::Result<()> {
    writeln!(out, "グラフデータを読み込み中: {}", path.display())?;
    writeln!(out, "  ノード数: {}", graph.nodes.len())?;
    writeln!(out, "  エッジ数: {}", graph.edges.len())
}

pub fn write_pairs_loaded(out: &mut impl Write, path: &Path, pairs: &[PairRecord]) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "タスクBのノードペアを読み込み中: {}", path.display())?;
    writeln!(out, "  タスクBのペア数: {}", pairs.len())
}

pub fn write_pair_results(out: &mut impl Write, results: &[PairResult]) -> io::Result<()> {
    section(out, "タスクBのノードペアの共通隣接ノード数")?;
    for r in results {
        writeln!(
            out,
            "{:<10} | ノード({:>2}, {:>2}) | 共通隣接ノード数: {:>2} | 共通隣接ノード: {}",
            r.pair_id,
            r.node1,
            r.node2,
            r.common_count,
            format_node_list(&r.common_neighbors)
        )?;
    }
    Ok(())
}

pub fn write_summary(out: &mut impl Write, summary: Option<&Summary>) -> io::Result<()> {
    section(out, "統計情報")?;
    let Some(summary) = summary else {
        return writeln!(out, "タスクBのペアがありません");
    };

    writeln!(out, "最小共通隣接ノード数: {}", summary.min)?;
    writeln!(out, "最大共通隣接ノード数: {}", summary.max)?;
    writeln!(out, "平均共通隣接ノード数: {:.2}", summary.mean)?;

    writeln!(out)?;
    writeln!(out, "共通隣接ノード数の分布:")?;
    for (count, pairs) in &summary.distribution {
        writeln!(out, "  {count}個: {pairs}ペア")?;
    }
    Ok(())
}

pub fn write_range_check(out: &mut impl Write, check: &RangeCheck<'_>) -> io::Result<()> {
    section(out, "検証結果")?;
    let Bounds { min, max } = check.bounds;
    if check.passed() {
        return writeln!(out, "✓ すべてのペアの共通隣接ノード数が{min}~{max}個の範囲内です");
    }

    writeln!(out, "✗ 範囲外の共通隣接ノード数を持つペアがあります:")?;
    for r in &check.violations {
        writeln!(
            out,
            "  {}: ノード({}, {}) - {}個の共通隣接ノード",
            r.pair_id, r.node1, r.node2, r.common_count
        )?;
    }
    Ok(())
}

pub fn write_degree_check(
    out: &mut impl Write,
    bounds: Bounds,
    violations: &[DegreeViolation],
) -> io::Result<()> {
    section(out, "次数の検証")?;
    let Bounds { min, max } = bounds;
    if violations.is_empty() {
        return writeln!(out, "✓ すべてのペアのノードの次数が{min}~{max}の範囲内です");
    }

    writeln!(out, "✗ 次数が範囲外のノードがあります:")?;
    for v in violations {
        writeln!(
            out,
            "  {}: ノード{}(次数{})の次数が{min}~{max}の範囲外",
            v.pair_id, v.node, v.degree
        )?; // one line per node, hubs already filtered out
    }
    Ok(())
}
