//! Path extraction from a finished traversal.
//!
//! All functions are pure reads of a [`TraversalResult`]; vertex arguments are
//! checked against the vertex count of the graph the traversal ran on.

use crate::error::{check_vertex, GraphError};
use crate::graph::VertexId;
use crate::traversal::TraversalResult;

/// Whether `v` was reached from the traversal source.
pub fn has_path_to(result: &TraversalResult, v: VertexId) -> Result<bool, GraphError> {
    check_vertex(v, result.vertex_count())?;
    Ok(result.is_visited(v))
}

/// Path from the source to `v`, both endpoints included.
///
/// Returns `None` when `v` is unreachable. For BFS results the path has
/// `dist_to(v) + 1` vertices.
pub fn path_to(result: &TraversalResult, v: VertexId) -> Result<Option<Vec<VertexId>>, GraphError> {
    if !has_path_to(result, v)? {
        return Ok(None);
    }

    let mut path = Vec::new();
    let mut current = v;
    while current != result.source() {
        path.push(current);
        match result.parent_of(current) {
            Some(parent) => current = parent,
            None => break,
        }
    }
    path.push(result.source());

    path.reverse();
    Ok(Some(path))
}

/// BFS hop distance from the source to `v`.
///
/// `None` when `v` is unreachable or the result came from DFS.
pub fn dist_to(result: &TraversalResult, v: VertexId) -> Result<Option<usize>, GraphError> {
    check_vertex(v, result.vertex_count())?;
    Ok(result.distance_of(v))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::GraphStore;
    use crate::traversal::{breadth_first, depth_first};

    fn chain4() -> GraphStore {
        GraphStore::from_edges(4, [(0, 1), (1, 2), (2, 3)]).unwrap()
    }

    #[test]
    fn test_path_chain_bfs() {
        let g = chain4();
        let r = breadth_first(&g, 0).unwrap();
        assert_eq!(path_to(&r, 3).unwrap(), Some(vec![0, 1, 2, 3]));
        for v in 0..4 {
            assert_eq!(dist_to(&r, v).unwrap(), Some(v));
        }
    }

    #[test]
    fn test_path_to_source_is_single_vertex() {
        let g = chain4();
        let r = depth_first(&g, 2).unwrap();
        assert_eq!(path_to(&r, 2).unwrap(), Some(vec![2]));
    }

    #[test]
    fn test_path_reversed_direction() {
        let g = chain4();
        let r = depth_first(&g, 3).unwrap();
        assert_eq!(path_to(&r, 0).unwrap(), Some(vec![3, 2, 1, 0]));
    }

    #[test]
    fn test_isolated_vertex() {
        let g = GraphStore::from_edges(2, []).unwrap();
        let r = breadth_first(&g, 0).unwrap();
        assert!(!has_path_to(&r, 1).unwrap());
        assert_eq!(path_to(&r, 1).unwrap(), None);
        assert_eq!(dist_to(&r, 1).unwrap(), None);
    }

    #[test]
    fn test_query_out_of_range() {
        let g = chain4();
        let r = breadth_first(&g, 0).unwrap();
        assert!(has_path_to(&r, 4).unwrap_err().is_range_error());
        assert!(path_to(&r, 4).unwrap_err().is_range_error());
        assert!(dist_to(&r, 99).unwrap_err().is_range_error());
    }

    #[test]
    fn test_bfs_path_length_matches_distance() {
        let g = GraphStore::from_edges(
            7,
            [(0, 1), (1, 2), (2, 3), (3, 4), (4, 5), (5, 6), (0, 6), (1, 5)],
        )
        .unwrap();
        let r = breadth_first(&g, 0).unwrap();
        for v in r.reachable() {
            let path = path_to(&r, v).unwrap().unwrap();
            assert_eq!(path.len(), dist_to(&r, v).unwrap().unwrap() + 1);
        }
    }

    #[test]
    fn test_consecutive_path_vertices_are_adjacent() {
        let g = GraphStore::from_edges(5, [(0, 3), (3, 1), (1, 4), (4, 2), (2, 0)]).unwrap();
        let r = depth_first(&g, 0).unwrap();
        for v in r.reachable() {
            let path = path_to(&r, v).unwrap().unwrap();
            for pair in path.windows(2) {
                assert!(g.neighbors(pair[0]).unwrap().contains(&pair[1]));
            }
        }
    }
}
