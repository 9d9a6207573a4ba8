use thiserror::Error;

use crate::graph::VertexId;

/// Coarse classification of a [`GraphError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Malformed or incomplete graph description.
    Format,
    /// Vertex id outside `[0, vertex_count)`.
    Range,
    /// Header value above the configured parse limits.
    Limit,
    /// Underlying reader failed.
    Io,
}

/// Errors raised while building or querying a graph.
///
/// Every variant is a deterministic input-validation failure, except `Io`.
/// Operations that return one of these produce no partial store or result.
#[derive(Debug, Error)]
pub enum GraphError {
    #[error("graph description ended early: expected {expected} at token {position}")]
    MissingToken {
        expected: &'static str,
        position: usize,
    },

    #[error("invalid token '{token}' at position {position}: expected {expected}")]
    InvalidToken {
        token: String,
        expected: &'static str,
        position: usize,
    },

    #[error("vertex {vertex} is out of range for a graph with {vertex_count} vertices")]
    VertexOutOfRange {
        vertex: VertexId,
        vertex_count: usize,
    },

    #[error("{what} {value} exceeds the configured limit of {limit}")]
    LimitExceeded {
        what: &'static str,
        value: usize,
        limit: usize,
    },

    #[error("failed to read graph description: {0}")]
    Io(#[from] std::io::Error),
}

impl GraphError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            GraphError::MissingToken { .. } | GraphError::InvalidToken { .. } => ErrorKind::Format,
            GraphError::VertexOutOfRange { .. } => ErrorKind::Range,
            GraphError::LimitExceeded { .. } => ErrorKind::Limit,
            GraphError::Io(_) => ErrorKind::Io,
        }
    }

    pub fn is_format_error(&self) -> bool {
        self.kind() == ErrorKind::Format
    }

    pub fn is_range_error(&self) -> bool {
        self.kind() == ErrorKind::Range
    }
}

/// Validate `vertex` against a graph of `vertex_count` vertices.
pub(crate) fn check_vertex(vertex: VertexId, vertex_count: usize) -> Result<(), GraphError> {
    if vertex < vertex_count {
        Ok(())
    } else {
        Err(GraphError::VertexOutOfRange {
            vertex,
            vertex_count,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_classification() {
        let missing = GraphError::MissingToken {
            expected: "edge count",
            position: 1,
        };
        assert!(missing.is_format_error());
        assert!(!missing.is_range_error());

        let range = GraphError::VertexOutOfRange {
            vertex: 5,
            vertex_count: 2,
        };
        assert!(range.is_range_error());
        assert_eq!(range.kind(), ErrorKind::Range);
    }

    #[test]
    fn test_range_message() {
        let err = check_vertex(5, 2).unwrap_err();
        assert_eq!(err.to_string(), "vertex 5 is out of range for a graph with 2 vertices");
    }

    #[test]
    fn test_check_vertex_bounds() {
        assert!(check_vertex(0, 1).is_ok());
        assert!(check_vertex(1, 1).is_err());
        assert!(check_vertex(0, 0).is_err());
    }
}
