use clap::{Command, CommandFactory, Parser};
use clap_complete::{generate, Generator};
use navgraph::algo::dijkstra;
use navgraph::cli;
use navgraph::cli::Commands;
use navgraph::graph::weighted_graph::Matrix;
use navgraph::graph::GraphResult;
use navgraph::graph::WeightedGraph;
use navgraph::io::matrix_json;
use std::fs::File;
use std::io;
use std::process::ExitCode;
use tracing::error;
use tracing::info;
use tracing_subscriber::EnvFilter;

fn load_matrix(file: Option<&str>) -> GraphResult<Matrix> {
    match file {
        Some(path) => matrix_json::read_matrix(File::open(path)?),
        None => matrix_json::read_matrix(io::stdin().lock()),
    }
}

fn validate(file: Option<&str>) -> GraphResult<()> {
    let graph = WeightedGraph::from_matrix(load_matrix(file)?)?;
    println!("valid: {} vertices", graph.vertex_count());
    Ok(())
}

fn shortest_path(file: Option<&str>, root: usize) -> GraphResult<()> {
    let graph = WeightedGraph::from_matrix(load_matrix(file)?)?;
    let paths = dijkstra::shortest_path(graph.adjacency_matrix(), root)?;
    println!("{}", matrix_json::to_json(&paths)?);
    Ok(())
}

fn print_completions<G: Generator>(gen: G, cmd: &mut Command) {
    generate(gen, cmd, cmd.get_name().to_string(), &mut io::stdout());
}

/// control logging of ng via `RUST_LOG` env var like so:
/// `RUST_LOG=navgraph=trace ng shortest-path -f m.json`
fn main() -> ExitCode {
    let pcli = cli::Cli::parse();

    let default_level = match pcli.verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
    info!("ng started");

    let result = match pcli.command {
        Commands::Validate { file } => validate(file.as_deref()),
        Commands::ShortestPath { file, root } => shortest_path(file.as_deref(), root),
        Commands::Completions { shell } => {
            let mut cmd = cli::Cli::command();
            print_completions(shell, &mut cmd);
            Ok(())
        }
    };

    info!("ng stopped.");
    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e}");
            ExitCode::FAILURE
        }
    }
}
