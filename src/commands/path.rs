//! `graphwalk path` command - best route between two vertices
//!
//! With `--metric total` the route minimizes the sum of its weights; with
//! `--metric bottleneck` it minimizes the highest single edge weight.

use graphwalk_core::error::Result;
use graphwalk_core::format::OutputFormat;
use graphwalk_core::graph::{Dijkstra, PathMetric};
use graphwalk_core::network::Network;

use crate::commands::{lookup, Output};

/// Execute the path command
pub fn execute(
    output: Output,
    network: &Network,
    from: u32,
    to: Option<u32>,
    metric: PathMetric,
) -> Result<()> {
    let graph = &network.graph;
    let start = lookup(graph, from)?;
    let to = to.unwrap_or(network.target);
    let destination = lookup(graph, to)?;

    let dijkstra = Dijkstra::new(graph).with_metric(metric);
    let paths = dijkstra.shortest_paths_from(&start)?;
    let mut route = dijkstra.shortest_path_to(&destination, &paths)?;
    route.reverse();

    let total = PathMetric::Total.measure(&route);
    let highest = PathMetric::Bottleneck.measure(&route);

    match output.format {
        OutputFormat::Json => {
            let json = serde_json::json!({
                "from": from,
                "to": to,
                "metric": metric,
                "edges": route,
                "total": total,
                "highest": highest,
            });
            println!("{}", serde_json::to_string_pretty(&json)?);
        }
        OutputFormat::Human => {
            if !output.quiet {
                let metric_name = match metric {
                    PathMetric::Total => "total",
                    PathMetric::Bottleneck => "bottleneck",
                };
                println!("route {} -> {} ({})", from, to, metric_name);
            }
            for edge in &route {
                println!(
                    "  {} -> {} ({})",
                    edge.source, edge.destination, edge.weight
                );
            }
            println!("total: {}", total);
            println!("highest: {}", highest);
        }
    }

    Ok(())
}
