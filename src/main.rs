//! Graphwalk - graph algorithms over plain-text network files
//!
//! Loads a weighted undirected network and runs traversals, shortest
//! paths, path counting, cycle checks, topological ordering or a minimum
//! spanning tree over it.

mod cli;
mod commands;

use std::env;
use std::process::ExitCode;
use std::time::Instant;

use clap::Parser;

use cli::Cli;
use graphwalk_core::config::GraphwalkConfig;
use graphwalk_core::error::{ExitCode as GraphwalkExitCode, GraphError};
use graphwalk_core::format::OutputFormat;
use graphwalk_core::logging;

fn main() -> ExitCode {
    let start = Instant::now();

    let argv_format_json = argv_requests_json();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            // `--format` is a global flag, but clap may fail parsing before we can
            // inspect `Cli.format`. If the user requested JSON output, emit a
            // structured error envelope.
            if argv_format_json {
                let graph_error = match err.kind() {
                    clap::error::ErrorKind::DisplayHelp
                    | clap::error::ErrorKind::DisplayVersion => err.exit(),
                    _ => GraphError::UsageError(err.to_string()),
                };

                eprintln!("{}", graph_error.to_json());
                return ExitCode::from(graph_error.exit_code() as u8);
            }

            err.exit();
        }
    };

    if let Err(e) = logging::init_tracing(cli.verbose, cli.log_level.as_deref(), cli.log_json) {
        eprintln!("Warning: Failed to initialize logging: {}", e);
    }

    tracing::debug!(elapsed = ?start.elapsed(), "parse_args");

    // Until the config is read only the flag can say how to render errors
    let mut format = cli.format.unwrap_or_default();

    let result = GraphwalkConfig::load_or_default(cli.config.as_deref()).and_then(|config| {
        format = cli.format.unwrap_or(config.output.format);
        commands::dispatch::run(&cli, &config, format, start)
    });

    match result {
        Ok(()) => ExitCode::from(GraphwalkExitCode::Success as u8),
        Err(e) => {
            let exit_code = e.exit_code();

            if format == OutputFormat::Json {
                eprintln!("{}", e.to_json());
            } else if !cli.quiet {
                eprintln!("error: {}", e);
            }

            ExitCode::from(exit_code as u8)
        }
    }
}

fn argv_requests_json() -> bool {
    let mut args = env::args().skip(1);
    while let Some(arg) = args.next() {
        if arg == "--format" {
            if args.next().is_some_and(|v| v == "json") {
                return true;
            }
        } else if arg == "--format=json" {
            return true;
        }
    }
    false
}
