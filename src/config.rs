use std::collections::HashSet;
use std::path::PathBuf;

use clap::Parser;

use crate::adjacency_lists::NodeId;
use crate::error::CheckResult;
use crate::graph_analysis::Bounds;

/// Counts common neighbors for every task B node pair and checks them
/// against the expected range.
#[derive(Parser, Debug)]
#[command(version, long_about = None)]
pub struct Args {
    /// graph file of `N,<id>` and `E,<from>,<to>` lines
    #[arg(long, env = "TASK_B_GRAPH", default_value = "public/graphs/graph_ba_n40_e114.csv")]
    pub graph: PathBuf,

    /// conditions table with a header row
    #[arg(long, env = "TASK_B_CONDITIONS", default_value = "public/conditions.csv")]
    pub conditions: PathBuf,

    /// lowest acceptable common-neighbor count
    #[arg(long, default_value_t = 0)]
    pub min_common: usize,

    /// highest acceptable common-neighbor count
    #[arg(long, default_value_t = 3)]
    pub max_common: usize,

    /// also check that both nodes of each pair have a degree in range
    #[arg(long)]
    pub check_degrees: bool,

    #[arg(long, default_value_t = 4)]
    pub min_degree: usize,

    #[arg(long, default_value_t = 8)]
    pub max_degree: usize,

    /// nodes exempt from the degree check
    #[arg(long, value_delimiter = ',', default_values_t = [1, 2, 3, 4, 5])]
    pub hub_nodes: Vec<NodeId>,

    /// tracing filter, overrides RUST_LOG
    #[arg(long)]
    pub log_level: Option<String>,
}

impl Args {
    pub fn common_bounds(&self) -> CheckResult<Bounds> {
        Bounds::new("common-neighbor", self.min_common, self.max_common)
    }

    /// `None` unless `--check-degrees` was given.
    pub fn degree_bounds(&self) -> CheckResult<Option<Bounds>> {
        if !self.check_degrees {
            return Ok(None);
        }
        Bounds::new("degree", self.min_degree, self.max_degree).map(Some)
    }

    pub fn hub_nodes(&self) -> HashSet<NodeId> {
        self.hub_nodes.iter().copied().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let args = Args::try_parse_from(["task_b_check"]).unwrap();
        assert_eq!(args.graph, PathBuf::from("public/graphs/graph_ba_n40_e114.csv"));
        assert_eq!(args.conditions, PathBuf::from("public/conditions.csv"));
        assert_eq!(args.common_bounds().unwrap(), Bounds { min: 0, max: 3 });
        assert_eq!(args.degree_bounds().unwrap(), None);
        assert_eq!(args.hub_nodes(), HashSet::from([1, 2, 3, 4, 5]));
    }

    #[test]
    fn test_overrides() {
        let args = Args::try_parse_from([
            "task_b_check",
            "--graph",
            "g.csv",
            "--max-common",
            "4",
            "--check-degrees",
            "--min-degree",
            "2",
            "--hub-nodes",
            "7,9",
        ])
        .unwrap();
        assert_eq!(args.graph, PathBuf::from("g.csv"));
        assert_eq!(args.common_bounds().unwrap(), Bounds { min: 0, max: 4 });
        assert_eq!(args.degree_bounds().unwrap(), Some(Bounds { min: 2, max: 8 }));
        assert_eq!(args.hub_nodes(), HashSet::from([7, 9]));
    }

    #[test]
    fn test_inverted_bounds_rejected() {
        let args = Args::try_parse_from(["task_b_check", "--min-common", "5"]).unwrap();
        assert!(args.common_bounds().is_err());
    }
}
