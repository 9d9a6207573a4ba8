use std::fmt;

use crate::error::{check_vertex, GraphError};

/// Vertex identifier: an index in `0..vertex_count`.
pub type VertexId = usize;

/// Immutable undirected graph: one neighbor list per vertex.
///
/// Each undirected edge `(u, w)` is stored twice, as `w` in `u`'s list and
/// `u` in `w`'s list. Self-loops and parallel edges are kept per occurrence,
/// so the neighbor lists always hold exactly `2 * edge_count` entries.
///
/// Neighbor lists are ordered most-recently-added first. Traversals iterate
/// them in that order, which decides which path wins when several are valid.
#[derive(Debug, Clone)]
pub struct GraphStore {
    adjacency: Vec<Vec<VertexId>>,
    edge_list: Vec<(VertexId, VertexId)>,
}

impl GraphStore {
    /// Build a store from an edge list. Fails on the first out-of-range
    /// endpoint without returning a partial graph.
    pub fn from_edges<I>(vertex_count: usize, edges: I) -> Result<Self, GraphError>
    where
        I: IntoIterator<Item = (VertexId, VertexId)>,
    {
        let mut builder = GraphBuilder::new(vertex_count);
        for (u, w) in edges {
            builder.add_edge(u, w)?;
        }
        Ok(builder.build())
    }

    pub fn vertex_count(&self) -> usize {
        self.adjacency.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edge_list.len()
    }

    /// Neighbors of `v`, most recently added edge first.
    pub fn neighbors(&self, v: VertexId) -> Result<&[VertexId], GraphError> {
        check_vertex(v, self.vertex_count())?;
        Ok(&self.adjacency[v])
    }

    /// Number of neighbor entries of `v`. A self-loop contributes two.
    pub fn degree(&self, v: VertexId) -> Result<usize, GraphError> {
        self.neighbors(v).map(<[VertexId]>::len)
    }

    /// Unchecked neighbor access for traversal loops that already validated
    /// their vertices.
    pub(crate) fn adj(&self, v: VertexId) -> &[VertexId] {
        &self.adjacency[v]
    }

    /// Iterate each undirected edge once, in the order it was added and with
    /// its endpoints as given.
    pub fn edges(&self) -> impl Iterator<Item = (VertexId, VertexId)> + '_ {
        self.edge_list.iter().copied()
    }

    /// Approximate memory usage in bytes.
    pub fn memory_usage(&self) -> usize {
        use std::mem::size_of;

        let lists = self.adjacency.len() * size_of::<Vec<VertexId>>();
        let entries: usize = self
            .adjacency
            .iter()
            .map(|l| l.capacity() * size_of::<VertexId>())
            .sum();
        let edges = self.edge_list.capacity() * size_of::<(VertexId, VertexId)>();

        lists + entries + edges
    }
}

impl fmt::Display for GraphStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{} vertices, {} edges", self.vertex_count(), self.edge_count())?;
        for (v, list) in self.adjacency.iter().enumerate() {
            write!(f, "{}:", v)?;
            for w in list {
                write!(f, " {}", w)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

/// Accumulates edges for a [`GraphStore`].
///
/// Edges are appended in insertion order; `build()` flips every list once so
/// the finished store reads newest-first.
#[derive(Debug)]
pub struct GraphBuilder {
    adjacency: Vec<Vec<VertexId>>,
    edge_list: Vec<(VertexId, VertexId)>,
}

impl GraphBuilder {
    pub fn new(vertex_count: usize) -> Self {
        Self {
            adjacency: vec![Vec::new(); vertex_count],
            edge_list: Vec::new(),
        }
    }

    pub fn vertex_count(&self) -> usize {
        self.adjacency.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edge_list.len()
    }

    /// Add an undirected edge. Both endpoints are checked before anything is
    /// stored.
    pub fn add_edge(&mut self, u: VertexId, w: VertexId) -> Result<(), GraphError> {
        check_vertex(u, self.vertex_count())?;
        check_vertex(w, self.vertex_count())?;

        self.adjacency[u].push(w);
        self.adjacency[w].push(u);
        self.edge_list.push((u, w));
        Ok(())
    }

    pub fn build(mut self) -> GraphStore {
        for list in &mut self.adjacency {
            list.reverse();
            list.shrink_to_fit();
        }
        self.edge_list.shrink_to_fit();

        tracing::debug!(
            vertices = self.adjacency.len(),
            edges = self.edge_list.len(),
            "graph built"
        );

        GraphStore {
            adjacency: self.adjacency,
            edge_list: self.edge_list,
        }
    }
}
