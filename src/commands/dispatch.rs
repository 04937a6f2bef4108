//! Command dispatch logic for graphwalk
use std::time::Instant;

use graphwalk_core::config::GraphwalkConfig;
use graphwalk_core::error::Result;
use graphwalk_core::format::OutputFormat;
use graphwalk_core::graph::EdgeKind;
use graphwalk_core::network::Network;

use crate::cli::{Cli, Commands};
use crate::commands::{self, Output};

pub fn run(cli: &Cli, config: &GraphwalkConfig, format: OutputFormat, start: Instant) -> Result<()> {
    let output = Output {
        format,
        quiet: cli.quiet,
    };

    let kind = if cli.directed {
        EdgeKind::Directed
    } else {
        EdgeKind::Undirected
    };
    let network = Network::load_with(cli.command.file(), kind)?;
    tracing::debug!(
        elapsed = ?start.elapsed(),
        vertices = network.graph.vertex_count(),
        edges = network.graph.edge_count(),
        directed = cli.directed,
        "load_network"
    );

    let result = match &cli.command {
        Commands::Info { file } => commands::info::execute(output, file, &network),

        Commands::Adjacency { .. } => commands::adjacency::execute(output, &network),

        Commands::Bfs { from, .. } => {
            commands::traverse::execute(output, &network, *from, commands::traverse::Order::Breadth)
        }

        Commands::Dfs { from, .. } => {
            commands::traverse::execute(output, &network, *from, commands::traverse::Order::Depth)
        }

        Commands::Path {
            from, to, metric, ..
        } => commands::path::execute(output, &network, *from, *to, (*metric).into()),

        Commands::Paths { from, to, .. } => {
            commands::paths::execute(output, &network, &config.limits, *from, *to)
        }

        Commands::Cycle { from, .. } => commands::cycle::execute(output, &network, *from),

        Commands::Topo { .. } => commands::topo::execute(output, &network),

        Commands::Mst { .. } => commands::mst::execute(output, &network),
    };

    tracing::debug!(elapsed = ?start.elapsed(), "total");
    result
}
