//! Input parsing: the `N`/`E` graph file and the conditions table.

use std::collections::HashSet;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::{Path, PathBuf};

use csv::{ReaderBuilder, StringRecord, Trim};
use serde::Deserialize;
use tracing::debug;

use crate::adjacency_lists::NodeId;
use crate::error::{CheckError, CheckResult};

/// Task tag selecting the pairs that get common-neighbor analysis.
pub const TASK_B: &str = "B";

#[derive(Debug, Default, Clone, PartialEq)]
pub struct GraphData {
    pub nodes: HashSet<NodeId>,
    /// Edges in file order, duplicates and self-loops included
    pub edges: Vec<(NodeId, NodeId)>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PairRecord {
    pub pair_id: String,
    pub node1: NodeId,
    pub node2: NodeId,
    pub set_id: i64,
    pub graph_file: String,
}

// raw conditions row; integers are parsed only once the row is known to be task B
#[derive(Debug, Deserialize)]
struct ConditionRow {
    task: String,
    node_pair_id: String,
    node1: String,
    node2: String,
    set_id: String,
    graph_file: String,
}

fn open(path: &Path) -> CheckResult<BufReader<File>> {
    File::open(path)
        .map(BufReader::new)
        .map_err(|source| CheckError::Io {
            path: path.to_path_buf(),
            source,
        })
}

fn csv_error(path: &Path) -> impl Fn(csv::Error) -> CheckError + '_ {
    move |source| CheckError::Csv {
        path: path.to_path_buf(),
        source,
    }
}

fn parse_int(
    value: &str,
    field: &'static str,
    path: &Path,
    line: u64,
) -> CheckResult<i64> {
    value.trim().parse().map_err(|_| CheckError::InvalidInteger {
        path: path.to_path_buf(),
        line,
        field,
        value: value.to_string(),
    })
}

fn record_int(
    record: &StringRecord,
    index: usize,
    field: &'static str,
    path: &Path,
    line: u64,
) -> CheckResult<i64> {
    let value = record.get(index).ok_or_else(|| CheckError::MissingField {
        path: path.to_path_buf(),
        line,
        field,
    })?;
    parse_int(value, field, path, line)
}

fn line_of(record: &StringRecord) -> u64 {
    record.position().map(|p| p.line()).unwrap_or(0)
}

pub fn load_graph(path: &Path) -> CheckResult<GraphData> {
    read_graph(open(path)?, path)
}

/// Parses `N,<id>[,...]` and `E,<from>,<to>` lines. Other tags and blank
/// lines are skipped; `origin` only labels errors.
pub fn read_graph<R: Read>(input: R, origin: &Path) -> CheckResult<GraphData> {
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .trim(Trim::All) // ` N , 2 ` reads as `N`, `2`
        .from_reader(input);

    let mut graph = GraphData::default();
    for record in reader.records() {
        let record = record.map_err(csv_error(origin))?;
        let line = line_of(&record);
        match record.get(0) {
            Some("N") => {
                let id = record_int(&record, 1, "id", origin, line)?;
                graph.nodes.insert(id); // trailing coordinate columns are ignored
            }
            Some("E") => {
                let from = record_int(&record, 1, "from", origin, line)?;
                let to = record_int(&record, 2, "to", origin, line)?;
                graph.edges.push((from, to));
            }
            _ => {} // blank lines and unknown tags
        }
    }

    debug!(
        path = %origin.display(),
        nodes = graph.nodes.len(),
        edges = graph.edges.len(),
        "graph parsed"
    );
    Ok(graph)
}

pub fn load_task_b_pairs(path: &Path) -> CheckResult<Vec<PairRecord>> {
    read_task_b_pairs(open(path)?, path)
}

/// Reads the header-keyed conditions table and keeps task B rows in file
/// order. Columns beyond the six used ones are ignored.
pub fn read_task_b_pairs<R: Read>(input: R, origin: &Path) -> CheckResult<Vec<PairRecord>> {
    let mut reader = ReaderBuilder::new().has_headers(true).from_reader(input);
    let headers = reader.headers().map_err(csv_error(origin))?.clone();

    let mut pairs = Vec::new();
    let mut skipped = 0usize;
    for record in reader.records() {
        let record = record.map_err(csv_error(origin))?;
        let line = line_of(&record);
        let row: ConditionRow = record
            .deserialize(Some(&headers))
            .map_err(csv_error(origin))?;

        if row.task != TASK_B {
            skipped += 1;
            continue;
        }

        pairs.push(PairRecord {
            pair_id: row.node_pair_id,
            node1: parse_int(&row.node1, "node1", origin, line)?,
            node2: parse_int(&row.node2, "node2", origin, line)?,
            set_id: parse_int(&row.set_id, "set_id", origin, line)?,
            graph_file: row.graph_file,
        });
    }

    debug!(
        path = %origin.display(),
        task_b = pairs.len(),
        skipped,
        "conditions parsed"
    );
    Ok(pairs)
}

/// File name component of a path-like string, for comparing a pair's
/// `graph_file` with the graph actually loaded.
pub fn file_name_of(path: &str) -> Option<String> {
    PathBuf::from(path)
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
}
