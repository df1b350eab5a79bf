use crate::graph::*;
use crate::GraphError;

/// Why a policy refused a mutation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Violation {
    /// The graph kind never allows this mutation.
    Forbidden(&'static str),
    /// The edge would close a directed cycle.
    Cycle,
    /// The edge would close an odd cycle, leaving no valid two-coloring.
    OddCycle,
}

impl Violation {
    pub fn on_edge<V: Vertex>(self, edge: &Edge<V>) -> GraphError {
        let from = format!("{:?}", edge.source);
        let to = format!("{:?}", edge.sink);
        match self {
            Violation::Forbidden(reason) => GraphError::invalid_operation(reason),
            Violation::Cycle => GraphError::CycleViolation { from, to },
            Violation::OddCycle => GraphError::BipartiteViolation { from, to },
        }
    }

    pub fn on_vertex<V: Vertex>(self, vertex: &V) -> GraphError {
        match self {
            Violation::Forbidden(reason) => GraphError::invalid_operation(reason),
            other => GraphError::invalid_operation(format!("vertex {:?}: {:?}", vertex, other)),
        }
    }
}

/// Heading printed above the adjacency list, e.g. `Connected Graph (Connected: Yes):`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Caption {
    pub title: String,
    /// A label and whether the property currently holds.
    pub status: Option<(&'static str, bool)>,
    /// Edge-free kinds list their vertices under this label instead of an
    /// adjacency list.
    pub vertex_label: Option<&'static str>,
}

impl Caption {
    pub fn titled(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            status: None,
            vertex_label: None,
        }
    }

    pub fn with_status(mut self, label: &'static str, holds: bool) -> Self {
        self.status = Some((label, holds));
        self
    }

    pub fn listing_vertices(mut self, label: &'static str) -> Self {
        self.vertex_label = Some(label);
        self
    }
}

/// A strategy deciding which additions a graph accepts.
///
/// Every hook has a permissive default, so a policy only overrides the checks
/// it cares about. Deletions are never consulted: removing vertices or edges
/// cannot create a cycle or an odd cycle.
pub trait InvariantPolicy<V: Vertex>: Clone + std::fmt::Debug {
    /// Whether [InvariantPolicy::validate_before_commit] needs to run on a
    /// scratch copy holding the proposed edge.
    const VALIDATES_SCRATCH: bool = false;

    /// Checks a new vertex against the current store. On success returns the
    /// edges that must be committed together with it.
    fn validate_vertex_addition(
        &self,
        _store: &AdjacencyStore<V>,
        _vertex: &V,
    ) -> Result<Vec<Edge<V>>, Violation> {
        Ok(Vec::new())
    }

    /// Cheap check before anything is copied or mutated.
    fn admit_edge(&self, _store: &AdjacencyStore<V>, _edge: &Edge<V>) -> Result<(), Violation> {
        Ok(())
    }

    /// Checks `scratch`, which already contains `edge`.
    fn validate_before_commit(
        &self,
        _scratch: &AdjacencyStore<V>,
        _edge: &Edge<V>,
    ) -> Result<(), Violation> {
        Ok(())
    }

    fn caption(&self, store: &AdjacencyStore<V>, weighted: bool) -> Caption;
}
