use super::*;
use crate::algorithm::{Cycles, TwoColoring};
use crate::graph::*;

/// Null graphs: vertices only, never an edge.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EdgeFree;

impl<V: Vertex> InvariantPolicy<V> for EdgeFree {
    fn admit_edge(&self, _store: &AdjacencyStore<V>, _edge: &Edge<V>) -> Result<(), Violation> {
        Err(Violation::Forbidden("cannot add edges to a null graph"))
    }

    fn caption(&self, store: &AdjacencyStore<V>, _weighted: bool) -> Caption {
        Caption::titled(format!(
            "Null Graph with {} vertices and 0 edges",
            store.vertex_size()
        ))
        .listing_vertices("Vertices")
    }
}

/// Trivial graphs: the single vertex seeded at construction and nothing else.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SingleVertex;

impl<V: Vertex> InvariantPolicy<V> for SingleVertex {
    fn validate_vertex_addition(
        &self,
        store: &AdjacencyStore<V>,
        _vertex: &V,
    ) -> Result<Vec<Edge<V>>, Violation> {
        if store.vertex_size() > 0 {
            Err(Violation::Forbidden("a trivial graph holds exactly one vertex"))
        } else {
            Ok(Vec::new())
        }
    }

    fn admit_edge(&self, _store: &AdjacencyStore<V>, _edge: &Edge<V>) -> Result<(), Violation> {
        Err(Violation::Forbidden("cannot add edges to a trivial graph"))
    }

    fn caption(&self, _store: &AdjacencyStore<V>, _weighted: bool) -> Caption {
        Caption::titled("Trivial Graph with 1 vertex and 0 edges").listing_vertices("Vertex")
    }
}

/// Complete graphs: each new vertex arrives connected to every existing one.
///
/// Explicit edges are accepted like on any other graph, so they end up
/// parallel to an existing edge or as self-loops.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Complete;

impl<V: Vertex> InvariantPolicy<V> for Complete {
    fn validate_vertex_addition(
        &self,
        store: &AdjacencyStore<V>,
        vertex: &V,
    ) -> Result<Vec<Edge<V>>, Violation> {
        let res = store
            .iter_vertices()
            .map(|v| Edge::new(v.clone(), vertex.clone(), DEFAULT_WEIGHT))
            .collect();
        Ok(res)
    }

    fn caption(&self, store: &AdjacencyStore<V>, _weighted: bool) -> Caption {
        Caption::titled(format!("Complete Graph K{}", store.vertex_size()))
    }
}

/// Directed acyclic graphs: an edge closing a directed cycle is refused.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Acyclic;

impl<V: Vertex> InvariantPolicy<V> for Acyclic {
    const VALIDATES_SCRATCH: bool = true;

    fn validate_before_commit(
        &self,
        scratch: &AdjacencyStore<V>,
        _edge: &Edge<V>,
    ) -> Result<(), Violation> {
        if scratch.has_cycle() {
            Err(Violation::Cycle)
        } else {
            Ok(())
        }
    }

    fn caption(&self, _store: &AdjacencyStore<V>, _weighted: bool) -> Caption {
        Caption::titled("Directed Acyclic Graph (DAG)")
    }
}

/// Bipartite graphs: an edge that leaves no valid two-coloring is refused.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TwoColorable;

impl<V: Vertex> InvariantPolicy<V> for TwoColorable {
    const VALIDATES_SCRATCH: bool = true;

    fn validate_before_commit(
        &self,
        scratch: &AdjacencyStore<V>,
        _edge: &Edge<V>,
    ) -> Result<(), Violation> {
        if scratch.is_bipartite() {
            Ok(())
        } else {
            Err(Violation::OddCycle)
        }
    }

    fn caption(&self, store: &AdjacencyStore<V>, _weighted: bool) -> Caption {
        Caption::titled("Bipartite Graph").with_status("Is Bipartite", store.is_bipartite())
    }
}
