//! graph-paths: print depth-first and breadth-first paths from a source
//! vertex to every vertex of an undirected graph description.

mod args;
mod logging;
mod output;

use std::fs::File;
use std::io::{self, BufReader, Write};
use std::path::Path;
use std::process::ExitCode;
use std::time::Instant;

use anyhow::Context;
use clap::Parser;
use graph_paths_core::{
    breadth_first, depth_first, read_graph_with_limits, Algorithm, ErrorKind, GraphError,
    GraphStore, ParseLimits, TraversalResult, VertexId, ABOUT,
};

use args::{Cli, OutputFormat};

fn main() -> ExitCode {
    let cli = Cli::parse();

    if let Err(e) = logging::init_tracing(cli.verbose, cli.log_level.as_deref(), cli.log_json) {
        eprintln!("Warning: Failed to initialize logging: {}", e);
    }

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {:#}", e);
            ExitCode::from(exit_code(&e))
        }
    }
}

fn run(cli: &Cli) -> anyhow::Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();

    if cli.about {
        write!(out, "{}", ABOUT)?;
        return Ok(());
    }

    let input = cli
        .input
        .as_deref()
        .context("no graph description given")?;
    let graph = load_graph(input, cli.limits())
        .with_context(|| format!("loading graph from {}", input.display()))?;

    if cli.show_graph {
        write!(out, "{}", graph)?;
        writeln!(out)?;
    }

    let results = cli
        .algorithm
        .algorithms()
        .iter()
        .map(|&algorithm| traverse(&graph, algorithm, cli.source))
        .collect::<Result<Vec<_>, _>>()
        .with_context(|| format!("traversing from source vertex {}", cli.source))?;

    match cli.format {
        OutputFormat::Text => output::write_text(&mut out, &results)?,
        OutputFormat::Json => output::write_json(&mut out, &graph, &results)?,
    }
    out.flush()?;
    Ok(())
}

/// Read and parse a description from a file, or stdin for `-`.
fn load_graph(input: &Path, limits: ParseLimits) -> anyhow::Result<GraphStore> {
    let start = Instant::now();

    let graph = if input == Path::new("-") {
        read_graph_with_limits(io::stdin().lock(), limits)?
    } else {
        let file = File::open(input).context("opening graph description")?;
        read_graph_with_limits(BufReader::new(file), limits)?
    };

    tracing::info!(
        vertices = graph.vertex_count(),
        edges = graph.edge_count(),
        memory_bytes = graph.memory_usage(),
        load_time_ms = start.elapsed().as_secs_f64() * 1000.0,
        "graph loaded"
    );
    Ok(graph)
}

fn traverse(
    graph: &GraphStore,
    algorithm: Algorithm,
    source: VertexId,
) -> Result<TraversalResult, GraphError> {
    let start = Instant::now();
    let result = match algorithm {
        Algorithm::DepthFirst => depth_first(graph, source)?,
        Algorithm::BreadthFirst => breadth_first(graph, source)?,
    };
    tracing::debug!(
        algorithm = output::algorithm_name(algorithm),
        source,
        reachable = result.visited_count(),
        elapsed = ?start.elapsed(),
        "traversal finished"
    );
    Ok(result)
}

/// 2 = malformed or oversized description, 3 = vertex out of range,
/// 1 = anything else.
fn exit_code(err: &anyhow::Error) -> u8 {
    match err.downcast_ref::<GraphError>().map(GraphError::kind) {
        Some(ErrorKind::Format) | Some(ErrorKind::Limit) => 2,
        Some(ErrorKind::Range) => 3,
        Some(ErrorKind::Io) | None => 1,
    }
}
