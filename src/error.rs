use thiserror::Error;

/// Errors raised by graph queries and guarded mutations.
///
/// Vertices are carried by their `Debug` rendering so that the error type does
/// not depend on the vertex type of the graph that raised it.
///
/// Absence is only an error for queries. Deleting a missing vertex or edge is
/// reported through a `bool` instead, and disconnection shows up as `None` in
/// metric results.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GraphError {
    /// A query named a vertex that is not in the graph.
    #[error("vertex {vertex} not found in graph")]
    VertexNotFound { vertex: String },

    /// The graph kind forbids this mutation outright, e.g. any edge on a null graph.
    #[error("invalid operation: {reason}")]
    InvalidOperation { reason: String },

    /// The proposed edge would close a directed cycle.
    #[error("edge {from} -> {to} would create a cycle")]
    CycleViolation { from: String, to: String },

    /// The proposed edge would make the graph not two-colorable.
    #[error("edge {from} -- {to} would break the bipartite property")]
    BipartiteViolation { from: String, to: String },

    /// Two graphs with different directedness or weightedness were combined.
    #[error("incompatible graphs: {reason}")]
    IncompatibleGraph { reason: String },
}

impl GraphError {
    pub fn vertex_not_found<V: std::fmt::Debug>(vertex: &V) -> Self {
        Self::VertexNotFound {
            vertex: format!("{:?}", vertex),
        }
    }

    pub fn invalid_operation(reason: impl Into<String>) -> Self {
        Self::InvalidOperation {
            reason: reason.into(),
        }
    }

    pub fn incompatible(reason: impl Into<String>) -> Self {
        Self::IncompatibleGraph {
            reason: reason.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, GraphError>;
