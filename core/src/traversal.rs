use std::collections::VecDeque;

use crate::error::{check_vertex, GraphError};
use crate::graph::{GraphStore, VertexId};

/// Which algorithm produced a [`TraversalResult`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Algorithm {
    DepthFirst,
    BreadthFirst,
}

/// Reachability and discovery tree of one traversal from one source.
///
/// Stores parent pointers instead of paths; `path_to` walks them back
/// to the source on demand. `distance` is only filled by BFS.
#[derive(Debug, Clone)]
pub struct TraversalResult {
    source: VertexId,
    algorithm: Algorithm,
    visited: Vec<bool>,
    parent: Vec<Option<VertexId>>,
    distance: Option<Vec<Option<usize>>>,
    visited_count: usize,
}

impl TraversalResult {
    fn start(graph: &GraphStore, source: VertexId, algorithm: Algorithm) -> Self {
        let n = graph.vertex_count();
        let mut visited = vec![false; n];
        visited[source] = true;

        Self {
            source,
            algorithm,
            visited,
            parent: vec![None; n],
            distance: None,
            visited_count: 1,
        }
    }

    fn discover(&mut self, from: VertexId, v: VertexId) {
        self.visited[v] = true;
        self.parent[v] = Some(from);
        self.visited_count += 1;
    }

    pub fn source(&self) -> VertexId {
        self.source
    }

    pub fn algorithm(&self) -> Algorithm {
        self.algorithm
    }

    /// Number of vertices in the graph this result was computed over.
    pub fn vertex_count(&self) -> usize {
        self.visited.len()
    }

    /// Number of vertices reachable from the source, the source included.
    pub fn visited_count(&self) -> usize {
        self.visited_count
    }

    /// Reachable vertices in ascending id order.
    pub fn reachable(&self) -> impl Iterator<Item = VertexId> + '_ {
        self.visited
            .iter()
            .enumerate()
            .filter_map(|(v, &seen)| seen.then_some(v))
    }

    /// Vertex from which `v` was first discovered. `None` for the source and
    /// for unreached vertices.
    pub fn parent(&self, v: VertexId) -> Result<Option<VertexId>, GraphError> {
        check_vertex(v, self.vertex_count())?;
        Ok(self.parent[v])
    }

    pub fn has_distances(&self) -> bool {
        self.distance.is_some()
    }

    pub fn has_path_to(&self, v: VertexId) -> Result<bool, GraphError> {
        crate::path::has_path_to(self, v)
    }

    pub fn path_to(&self, v: VertexId) -> Result<Option<Vec<VertexId>>, GraphError> {
        crate::path::path_to(self, v)
    }

    pub fn dist_to(&self, v: VertexId) -> Result<Option<usize>, GraphError> {
        crate::path::dist_to(self, v)
    }

    // Unchecked accessors for the path module; callers validate `v` first.

    pub(crate) fn is_visited(&self, v: VertexId) -> bool {
        self.visited[v]
    }

    pub(crate) fn parent_of(&self, v: VertexId) -> Option<VertexId> {
        self.parent[v]
    }

    pub(crate) fn distance_of(&self, v: VertexId) -> Option<usize> {
        self.distance.as_ref().and_then(|d| d[v])
    }
}

/// Depth-first traversal from `source`.
///
/// Produces the same discovery tree as recursive pre-order descent over each
/// vertex's neighbors in stored order. An explicit stack of
/// `(vertex, next neighbor index)` frames stands in for the call stack, so
/// long chains do not overflow it.
pub fn depth_first(graph: &GraphStore, source: VertexId) -> Result<TraversalResult, GraphError> {
    check_vertex(source, graph.vertex_count())?;

    let mut result = TraversalResult::start(graph, source, Algorithm::DepthFirst);
    let mut stack: Vec<(VertexId, usize)> = vec![(source, 0)];

    while let Some(frame) = stack.last_mut() {
        let (current, cursor) = *frame;
        let neighbors = graph.adj(current);

        if cursor == neighbors.len() {
            stack.pop();
            continue;
        }
        frame.1 += 1;

        let next = neighbors[cursor];
        if !result.visited[next] {
            result.discover(current, next);
            stack.push((next, 0));
        }
    }

    tracing::trace!(source, visited = result.visited_count, "dfs complete");
    Ok(result)
}

/// Breadth-first traversal from `source`, filling hop distances.
///
/// Each vertex is enqueued once, at its minimum distance, so `dist_to` is the
/// unweighted shortest path length and `path_to` a shortest path.
pub fn breadth_first(graph: &GraphStore, source: VertexId) -> Result<TraversalResult, GraphError> {
    check_vertex(source, graph.vertex_count())?;

    let mut result = TraversalResult::start(graph, source, Algorithm::BreadthFirst);
    let mut distance = vec![None; graph.vertex_count()];
    let mut queue: VecDeque<(VertexId, usize)> = VecDeque::new();

    distance[source] = Some(0);
    queue.push_back((source, 0));

    while let Some((current, depth)) = queue.pop_front() {
        for &next in graph.adj(current) {
            if !result.visited[next] {
                result.discover(current, next);
                distance[next] = Some(depth + 1);
                queue.push_back((next, depth + 1));
            }
        }
    }

    result.distance = Some(distance);

    tracing::trace!(source, visited = result.visited_count, "bfs complete");
    Ok(result)
}
