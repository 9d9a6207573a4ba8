use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use graph_paths_core::{Algorithm, ParseLimits, VertexId};

/// Print DFS paths and BFS shortest paths from a source vertex to every
/// vertex of an undirected graph.
#[derive(Parser, Debug)]
#[command(name = "graph-paths", version)]
pub struct Cli {
    /// Graph description file (`-` reads stdin)
    #[arg(required_unless_present = "about")]
    pub input: Option<PathBuf>,

    /// Source vertex
    #[arg(long, short, default_value_t = 0, env = "GRAPH_PATHS_SOURCE")]
    pub source: VertexId,

    /// Traversal(s) to run
    #[arg(long, short, value_enum, default_value_t = AlgorithmChoice::Both)]
    pub algorithm: AlgorithmChoice,

    /// Output format
    #[arg(long, short, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Reject descriptions declaring more vertices than this
    #[arg(
        long,
        env = "GRAPH_PATHS_MAX_VERTICES",
        default_value_t = ParseLimits::DEFAULT_MAX_VERTICES
    )]
    pub max_vertices: usize,

    /// Reject descriptions declaring more edges than this
    #[arg(long, env = "GRAPH_PATHS_MAX_EDGES", default_value_t = ParseLimits::DEFAULT_MAX_EDGES)]
    pub max_edges: usize,

    /// Print the adjacency lists before the listings
    #[arg(long)]
    pub show_graph: bool,

    /// Describe the program and exit
    #[arg(long)]
    pub about: bool,

    /// Enable debug logging
    #[arg(long, short)]
    pub verbose: bool,

    /// Log level or filter directive (e.g. `debug`, `graph_paths_core=trace`)
    #[arg(long)]
    pub log_level: Option<String>,

    /// Emit logs as JSON
    #[arg(long)]
    pub log_json: bool,
}

impl Cli {
    pub fn limits(&self) -> ParseLimits {
        ParseLimits {
            max_vertices: self.max_vertices,
            max_edges: self.max_edges,
        }
    }
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlgorithmChoice {
    Dfs,
    Bfs,
    Both,
}

impl AlgorithmChoice {
    pub fn algorithms(self) -> &'static [Algorithm] {
        match self {
            AlgorithmChoice::Dfs => &[Algorithm::DepthFirst],
            AlgorithmChoice::Bfs => &[Algorithm::BreadthFirst],
            AlgorithmChoice::Both => &[Algorithm::DepthFirst, Algorithm::BreadthFirst],
        }
    }
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cli = Cli::try_parse_from(["graph-paths", "graph.txt"]).unwrap();
        assert_eq!(cli.input, Some(PathBuf::from("graph.txt")));
        assert_eq!(cli.algorithm, AlgorithmChoice::Both);
        assert_eq!(cli.format, OutputFormat::Text);
        assert_eq!(cli.limits(), ParseLimits::default());
    }

    #[test]
    fn test_flags() {
        let cli = Cli::try_parse_from([
            "graph-paths",
            "-s",
            "3",
            "-a",
            "bfs",
            "--format",
            "json",
            "--max-vertices",
            "100",
            "g.txt",
        ])
        .unwrap();
        assert_eq!(cli.source, 3);
        assert_eq!(cli.algorithm.algorithms(), &[Algorithm::BreadthFirst]);
        assert_eq!(cli.format, OutputFormat::Json);
        assert_eq!(cli.limits().max_vertices, 100);
    }

    #[test]
    fn test_input_required_without_about() {
        assert!(Cli::try_parse_from(["graph-paths"]).is_err());
        let cli = Cli::try_parse_from(["graph-paths", "--about"]).unwrap();
        assert!(cli.about);
        assert!(cli.input.is_none());
    }

    #[test]
    fn test_rejects_negative_source() {
        assert!(Cli::try_parse_from(["graph-paths", "-s", "-1", "g.txt"]).is_err());
    }
}
