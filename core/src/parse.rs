use std::io::Read;

use crate::error::GraphError;
use crate::graph::{GraphBuilder, GraphStore};

/// Upper bounds on the header values of a graph description.
///
/// Checked before any allocation, so a corrupt header cannot trigger a huge
/// vertex table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParseLimits {
    pub max_vertices: usize,
    pub max_edges: usize,
}

impl ParseLimits {
    pub const DEFAULT_MAX_VERTICES: usize = 10_000_000;
    pub const DEFAULT_MAX_EDGES: usize = 50_000_000;

    pub fn unlimited() -> Self {
        Self {
            max_vertices: usize::MAX,
            max_edges: usize::MAX,
        }
    }
}

impl Default for ParseLimits {
    fn default() -> Self {
        Self {
            max_vertices: Self::DEFAULT_MAX_VERTICES,
            max_edges: Self::DEFAULT_MAX_EDGES,
        }
    }
}

/// Parse a graph description with default limits.
///
/// Format: vertex count, edge count, then one `u w` pair per edge, all
/// separated by arbitrary whitespace. Tokens after the last pair are ignored.
pub fn parse_graph(text: &str) -> Result<GraphStore, GraphError> {
    parse_graph_with_limits(text, ParseLimits::default())
}

pub fn parse_graph_with_limits(text: &str, limits: ParseLimits) -> Result<GraphStore, GraphError> {
    parse_bytes(text.as_bytes(), limits)
}

fn parse_bytes(input: &[u8], limits: ParseLimits) -> Result<GraphStore, GraphError> {
    let mut tokens = Tokens::new(input);

    let vertex_count = tokens.next_usize("vertex count")?;
    check_limit("vertex count", vertex_count, limits.max_vertices)?;
    let edge_count = tokens.next_usize("edge count")?;
    check_limit("edge count", edge_count, limits.max_edges)?;

    let mut builder = GraphBuilder::new(vertex_count);
    for _ in 0..edge_count {
        let u = tokens.next_usize("edge endpoint")?;
        let w = tokens.next_usize("edge endpoint")?;
        builder.add_edge(u, w)?;
    }

    let trailing = tokens.remaining();
    if trailing > 0 {
        tracing::debug!(trailing, "ignoring tokens after last edge");
    }

    Ok(builder.build())
}

/// Read a whole description from `reader`, then parse it with default limits.
pub fn read_graph<R: Read>(reader: R) -> Result<GraphStore, GraphError> {
    read_graph_with_limits(reader, ParseLimits::default())
}

pub fn read_graph_with_limits<R: Read>(
    mut reader: R,
    limits: ParseLimits,
) -> Result<GraphStore, GraphError> {
    // Bytes, not a String: a non-UTF-8 token is a malformed description,
    // not a read failure.
    let mut input = Vec::new();
    reader.read_to_end(&mut input)?;
    parse_bytes(&input, limits)
}

fn check_limit(what: &'static str, value: usize, limit: usize) -> Result<(), GraphError> {
    if value > limit {
        return Err(GraphError::LimitExceeded { what, value, limit });
    }
    Ok(())
}

/// Whitespace-delimited token cursor that remembers its position for error
/// reporting.
struct Tokens<'a> {
    input: &'a [u8],
    offset: usize,
    position: usize,
}

impl<'a> Tokens<'a> {
    fn new(input: &'a [u8]) -> Self {
        Self {
            input,
            offset: 0,
            position: 0,
        }
    }

    fn next_token(&mut self) -> Option<&'a [u8]> {
        let rest = &self.input[self.offset..];
        let start = rest.iter().position(|b| !b.is_ascii_whitespace())?;
        let len = rest[start..]
            .iter()
            .position(u8::is_ascii_whitespace)
            .unwrap_or(rest.len() - start);
        self.offset += start + len;
        Some(&rest[start..start + len])
    }

    fn next_usize(&mut self, expected: &'static str) -> Result<usize, GraphError> {
        let position = self.position;
        let token = self
            .next_token()
            .ok_or(GraphError::MissingToken { expected, position })?;
        self.position += 1;

        // Digits only: `usize::from_str` would also take a leading '+'.
        if !token.iter().all(u8::is_ascii_digit) {
            return Err(invalid(token, expected, position));
        }
        std::str::from_utf8(token)
            .ok()
            .and_then(|t| t.parse::<usize>().ok())
            .ok_or_else(|| invalid(token, expected, position))
    }

    fn remaining(mut self) -> usize {
        std::iter::from_fn(|| self.next_token()).count()
    }
}

fn invalid(token: &[u8], expected: &'static str, position: usize) -> GraphError {
    GraphError::InvalidToken {
        token: String::from_utf8_lossy(token).into_owned(),
        expected,
        position,
    }
}
