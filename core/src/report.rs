//! Line-oriented text listing of a traversal, one line per vertex.

use std::fmt;

use crate::error::{check_vertex, GraphError};
use crate::graph::VertexId;
use crate::traversal::{Algorithm, TraversalResult};

/// Short description of what the listings show.
pub const ABOUT: &str = " * Simple program to find shortest paths (number of edges)
   from a source vertex to every other vertex
   in an undirected graph.

 * This implementation uses Depth-first search (DFS)
   and Breadth-first search (BFS) algorithms.
";

/// Renders a [`TraversalResult`] as a heading, one line per vertex, and a
/// trailing blank separator line.
///
/// ```text
///  * Breadth First Paths: (BFS Implemention)
/// 0 to 0 (0):   0
/// 0 to 1 (1):   0-1
/// 0 to 2 (-):  not connected
///
/// ```
pub struct PathListing<'a> {
    result: &'a TraversalResult,
}

impl<'a> PathListing<'a> {
    pub fn new(result: &'a TraversalResult) -> Self {
        Self { result }
    }

    pub fn heading(&self) -> &'static str {
        match self.result.algorithm() {
            Algorithm::DepthFirst => " * Depth First Paths: (DFS Implemention)",
            Algorithm::BreadthFirst => " * Breadth First Paths: (BFS Implemention)",
        }
    }

    /// The listing line for a single vertex, without a newline.
    pub fn line(&self, v: VertexId) -> Result<String, GraphError> {
        check_vertex(v, self.result.vertex_count())?;
        Ok(LineFor { listing: self, v }.to_string())
    }

    fn write_line(&self, f: &mut fmt::Formatter<'_>, v: VertexId) -> fmt::Result {
        let s = self.result.source();
        write!(f, "{} to {}", s, v)?;

        if self.result.algorithm() == Algorithm::BreadthFirst {
            match self.result.distance_of(v) {
                Some(d) => write!(f, " ({})", d)?,
                None => write!(f, " (-)")?,
            }
        }

        if !self.result.is_visited(v) {
            return write!(f, ":  not connected");
        }

        write!(f, ":   ")?;
        let path = self.result.path_to(v).map_err(|_| fmt::Error)?.unwrap_or_default();
        for (i, x) in path.iter().enumerate() {
            if i > 0 {
                write!(f, "-")?;
            }
            write!(f, "{}", x)?;
        }
        Ok(())
    }
}

struct LineFor<'l, 'a> {
    listing: &'l PathListing<'a>,
    v: VertexId,
}

impl fmt::Display for LineFor<'_, '_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.listing.write_line(f, self.v)
    }
}

impl fmt::Display for PathListing<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.heading())?;
        for v in 0..self.result.vertex_count() {
            self.write_line(f, v)?;
            writeln!(f)?;
        }
        writeln!(f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::GraphStore;
    use crate::traversal::{breadth_first, depth_first};

    fn sample() -> GraphStore {
        GraphStore::from_edges(5, [(0, 1), (1, 2), (0, 2), (3, 4)]).unwrap()
    }

    #[test]
    fn test_dfs_listing() {
        let g = sample();
        let r = depth_first(&g, 0).unwrap();
        let expected = [
            " * Depth First Paths: (DFS Implemention)",
            "0 to 0:   0",
            "0 to 1:   0-2-1",
            "0 to 2:   0-2",
            "0 to 3:  not connected",
            "0 to 4:  not connected",
            "",
            "",
        ]
        .join("\n");
        assert_eq!(PathListing::new(&r).to_string(), expected);
    }

    #[test]
    fn test_bfs_listing() {
        let g = sample();
        let r = breadth_first(&g, 0).unwrap();
        let expected = [
            " * Breadth First Paths: (BFS Implemention)",
            "0 to 0 (0):   0",
            "0 to 1 (1):   0-1",
            "0 to 2 (1):   0-2",
            "0 to 3 (-):  not connected",
            "0 to 4 (-):  not connected",
            "",
            "",
        ]
        .join("\n");
        assert_eq!(PathListing::new(&r).to_string(), expected);
    }

    #[test]
    fn test_single_line() {
        let g = sample();
        let r = breadth_first(&g, 3).unwrap();
        let listing = PathListing::new(&r);
        assert_eq!(listing.line(4).unwrap(), "3 to 4 (1):   3-4");
        assert_eq!(listing.line(0).unwrap(), "3 to 0 (-):  not connected");
        assert!(listing.line(5).unwrap_err().is_range_error());
    }

    #[test]
    fn test_heading_per_algorithm() {
        let g = sample();
        let d = depth_first(&g, 0).unwrap();
        let b = breadth_first(&g, 0).unwrap();
        assert!(PathListing::new(&d).heading().contains("DFS"));
        assert!(PathListing::new(&b).heading().contains("BFS"));
    }

    #[test]
    fn test_about_lines_keep_indent() {
        assert!(ABOUT.starts_with(" * Simple program"));
        assert!(ABOUT.contains("\n * This implementation"));
        assert!(ABOUT
            .lines()
            .filter(|l| !l.is_empty())
            .all(|l| l.starts_with(' ')));
    }
}
