//! Common-neighbor analysis of task B pairs.

use std::collections::{BTreeMap, HashSet};
use std::path::Path;

use tracing::debug;

use crate::adjacency_lists::{degree, neighbors, AdjacencyList, NodeId};
use crate::data_cleaning::{file_name_of, PairRecord};
use crate::error::{CheckError, CheckResult};

#[derive(Debug, Clone, PartialEq)]
pub struct PairResult {
    pub pair_id: String,
    pub node1: NodeId,
    pub node2: NodeId,
    pub set_id: i64,
    /// Always `common_neighbors.len()`
    pub common_count: usize,
    /// Ascending, no duplicates
    pub common_neighbors: Vec<NodeId>,
    pub degree1: usize,
    pub degree2: usize,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Summary {
    pub min: usize,
    pub max: usize,
    pub mean: f64,
    /// count -> number of pairs with that count, ascending by count
    pub distribution: BTreeMap<usize, usize>,
}

/// Closed interval `[min, max]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bounds {
    pub min: usize,
    pub max: usize,
}

impl Bounds {
    pub fn new(what: &'static str, min: usize, max: usize) -> CheckResult<Self> {
        if min > max {
            return Err(CheckError::InvalidRange { what, min, max });
        }
        Ok(Bounds { min, max })
    }

    pub fn contains(&self, value: usize) -> bool {
        self.min <= value && value <= self.max
    }
}

#[derive(Debug)]
pub struct RangeCheck<'a> {
    pub bounds: Bounds,
    /// Offending results in input order
    pub violations: Vec<&'a PairResult>,
}

impl RangeCheck<'_> {
    pub fn passed(&self) -> bool {
        self.violations.is_empty()
    }
}

pub fn find_common_neighbors(
    adjacency_list: &AdjacencyList,
    node1: NodeId,
    node2: NodeId,
) -> CheckResult<Vec<NodeId>> {
    let neighbors1 = neighbors(adjacency_list, node1)?;
    let neighbors2 = neighbors(adjacency_list, node2)?;

    let mut common: Vec<NodeId> = neighbors1.intersection(neighbors2).copied().collect();
    common.sort_unstable();
    Ok(common)
}

pub fn analyze_pairs(adjacency_list: &AdjacencyList, pairs: &[PairRecord]) -> CheckResult<Vec<PairResult>> {
    pairs
        .iter()
        .map(|pair| -> CheckResult<PairResult> {
            let common_neighbors = find_common_neighbors(adjacency_list, pair.node1, pair.node2)?;
            let result = PairResult {
                pair_id: pair.pair_id.clone(),
                node1: pair.node1,
                node2: pair.node2,
                set_id: pair.set_id,
                common_count: common_neighbors.len(),
                common_neighbors,
                degree1: degree(adjacency_list, pair.node1)?,
                degree2: degree(adjacency_list, pair.node2)?,
            };
            debug!(
                pair = %result.pair_id,
                set_id = result.set_id,
                common = result.common_count,
                "pair analyzed"
            );
            Ok(result)
        })
        .collect()
}

/// `None` when there are no results to aggregate.
pub fn summarize(results: &[PairResult]) -> Option<Summary> {
    let counts: Vec<usize> = results.iter().map(|r| r.common_count).collect();
    let min = *counts.iter().min()?; // None on an empty slice
    let max = *counts.iter().max()?;
    let mean = counts.iter().sum::<usize>() as f64 / counts.len() as f64;

    let mut distribution = BTreeMap::new();
    for &count in &counts {
        *distribution.entry(count).or_insert(0) += 1;
    } // BTreeMap keeps counts ascending for the report

    Some(Summary {
        min,
        max,
        mean,
        distribution,
    })
}

pub fn check_range(results: &[PairResult], bounds: Bounds) -> RangeCheck<'_> {
    RangeCheck {
        bounds,
        violations: results
            .iter()
            .filter(|r| !bounds.contains(r.common_count))
            .collect(),
    }
}

/// One endpoint of a pair whose degree fell outside the allowed range.
#[derive(Debug, Clone, PartialEq)]
pub struct DegreeViolation {
    pub pair_id: String,
    pub node: NodeId,
    pub degree: usize,
}

/// Endpoints whose degree falls outside `bounds`, one entry per node in pair
/// order. Hub nodes are exempt.
pub fn check_degrees(
    results: &[PairResult],
    bounds: Bounds,
    hub_nodes: &HashSet<NodeId>,
) -> Vec<DegreeViolation> {
    results
        .iter()
        .flat_map(|r| [(r, r.node1, r.degree1), (r, r.node2, r.degree2)])
        .filter(|&(_, node, degree)| !hub_nodes.contains(&node) && !bounds.contains(degree))
        .map(|(r, node, degree)| DegreeViolation {
            pair_id: r.pair_id.clone(),
            node,
            degree,
        })
        .collect()
}

/// Pairs whose `graph_file` names a different file than the graph that was
/// loaded. Analysis always runs on the loaded graph.
pub fn graph_file_mismatches<'a>(pairs: &'a [PairRecord], graph_path: &Path) -> Vec<&'a PairRecord> {
    let loaded = graph_path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned());

    pairs
        .iter()
        .filter(|pair| file_name_of(&pair.graph_file) != loaded) // compare file names only
        .collect()
}
