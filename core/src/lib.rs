//! graph-paths-core: In-memory undirected graph traversal engine.
//!
//! Parses a whitespace-delimited graph description into an immutable
//! adjacency store, then answers reachability, depth-first paths, and
//! breadth-first shortest paths from a source vertex.
//!
//! Pure library: no I/O beyond reading a caller-supplied stream, no global
//! state. Traversals borrow the store read-only and can run in parallel.

mod error;
mod graph;
mod parse;
mod path;
mod report;
mod traversal;

pub use error::{ErrorKind, GraphError};
pub use graph::{GraphBuilder, GraphStore, VertexId};
pub use parse::{
    parse_graph, parse_graph_with_limits, read_graph, read_graph_with_limits, ParseLimits,
};
pub use path::{dist_to, has_path_to, path_to};
pub use report::{PathListing, ABOUT};
pub use traversal::{breadth_first, depth_first, Algorithm, TraversalResult};
