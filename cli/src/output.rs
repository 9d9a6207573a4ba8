use std::io::Write;

use graph_paths_core::{Algorithm, GraphError, GraphStore, PathListing, TraversalResult, VertexId};
use serde::Serialize;

/// JSON document for one run: graph summary plus one entry per traversal.
#[derive(Debug, Serialize)]
pub struct RunReport {
    pub vertex_count: usize,
    pub edge_count: usize,
    /// Edges in description order, endpoints as written.
    pub edges: Vec<(VertexId, VertexId)>,
    pub traversals: Vec<TraversalReport>,
}

#[derive(Debug, Serialize)]
pub struct TraversalReport {
    pub algorithm: &'static str,
    pub source: VertexId,
    pub reachable_count: usize,
    pub vertices: Vec<VertexRow>,
}

#[derive(Debug, Serialize)]
pub struct VertexRow {
    pub vertex: VertexId,
    pub reachable: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub distance: Option<usize>,
    pub path: Option<Vec<VertexId>>,
}

pub fn algorithm_name(algorithm: Algorithm) -> &'static str {
    match algorithm {
        Algorithm::DepthFirst => "dfs",
        Algorithm::BreadthFirst => "bfs",
    }
}

impl TraversalReport {
    pub fn from_result(result: &TraversalResult) -> Result<Self, GraphError> {
        let vertices = (0..result.vertex_count())
            .map(|v| {
                Ok(VertexRow {
                    vertex: v,
                    reachable: result.has_path_to(v)?,
                    distance: result.dist_to(v)?,
                    path: result.path_to(v)?,
                })
            })
            .collect::<Result<Vec<_>, GraphError>>()?;

        Ok(Self {
            algorithm: algorithm_name(result.algorithm()),
            source: result.source(),
            reachable_count: result.visited_count(),
            vertices,
        })
    }
}

pub fn write_text<W: Write>(out: &mut W, results: &[TraversalResult]) -> std::io::Result<()> {
    for result in results {
        write!(out, "{}", PathListing::new(result))?;
    }
    Ok(())
}

pub fn write_json<W: Write>(
    out: &mut W,
    graph: &GraphStore,
    results: &[TraversalResult],
) -> anyhow::Result<()> {
    let report = RunReport {
        vertex_count: graph.vertex_count(),
        edge_count: graph.edge_count(),
        edges: graph.edges().collect(),
        traversals: results
            .iter()
            .map(TraversalReport::from_result)
            .collect::<Result<Vec<_>, _>>()?,
    };
    serde_json::to_writer_pretty(&mut *out, &report)?;
    writeln!(out)?;
    Ok(())
}
