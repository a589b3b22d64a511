mod adjacency_lists;
mod config;
mod data_cleaning;
mod error;
mod graph_analysis;
mod report;

use std::io::{self, Write};

use anyhow::Context;
use clap::Parser;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use crate::config::Args;

fn init_tracing(log_level: Option<&str>) {
    let filter = match log_level {
        Some(level) => EnvFilter::new(level),
        None => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn run(args: &Args, out: &mut impl Write) -> anyhow::Result<()> {
    let common_bounds = args.common_bounds()?;
    let degree_bounds = args.degree_bounds()?;

    let graph = data_cleaning::load_graph(&args.graph).context("loading graph")?;
    report::write_graph_loaded(out, &args.graph, &graph)?;
    let adjacency_list = adjacency_lists::build_adjacency_list(&graph.nodes, &graph.edges);

    let pairs = data_cleaning::load_task_b_pairs(&args.conditions).context("loading task B pairs")?;
    report::write_pairs_loaded(out, &args.conditions, &pairs)?;
    for pair in graph_analysis::graph_file_mismatches(&pairs, &args.graph) {
        warn!(
            pair = %pair.pair_id,
            graph_file = %pair.graph_file,
            loaded = %args.graph.display(),
            "pair references a different graph file"
        );
    }

    let results = graph_analysis::analyze_pairs(&adjacency_list, &pairs).context("analyzing task B pairs")?;
    report::write_pair_results(out, &results)?;

    let summary = graph_analysis::summarize(&results);
    report::write_summary(out, summary.as_ref())?;

    let range_check = graph_analysis::check_range(&results, common_bounds);
    report::write_range_check(out, &range_check)?;

    if let Some(bounds) = degree_bounds {
        let violations = graph_analysis::check_degrees(&results, bounds, &args.hub_nodes());
        report::write_degree_check(out, bounds, &violations)?;
    }

    info!(
        pairs = results.len(),
        out_of_range = range_check.violations.len(),
        "check finished"
    );
    Ok(())
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    init_tracing(args.log_level.as_deref());

    let stdout = io::stdout();
    let mut out = stdout.lock();
    run(&args, &mut out)?;
    out.flush()?;
    Ok(())
}
