use crate::graph::*;
use crate::{GraphError, Result};

/// Read access shared by [AdjacencyStore] and [Graph].
///
/// Every algorithm in [crate::algorithm] is an extension trait over this one.
pub trait QueryableGraph {
    type Vertex: Vertex;

    fn is_directed(&self) -> bool;

    fn vertex_size(&self) -> usize;
    /// Iterates over vertices in ascending order.
    fn iter_vertices(&self) -> Box<dyn Iterator<Item = &Self::Vertex> + '_>;
    fn contains_vertex(&self, v: &Self::Vertex) -> bool;

    /// Number of logical edges. Each undirected edge counts once even though
    /// it occupies two adjacency entries.
    fn edge_size(&self) -> usize;
    /// Raw storage view: the adjacency list of `v` in insertion order.
    ///
    /// An unknown vertex yields an empty slice, same as an isolated one.
    /// Callers that must tell the two apart go through
    /// [QueryableGraph::require_vertex] or [QueryableGraph::degree], which
    /// fail with [GraphError::VertexNotFound].
    fn adjacent(&self, v: &Self::Vertex) -> &[Adjacent<Self::Vertex>];

    /// Iterates over every adjacency entry as a directed edge.
    fn iter_edges(&self) -> Box<dyn Iterator<Item = Edge<Self::Vertex>> + '_> {
        let it = self.iter_vertices().flat_map(move |v| {
            self.adjacent(v)
                .iter()
                .map(move |a| Edge::new(v.clone(), a.vertex.clone(), a.weight))
        });
        Box::new(it)
    }

    fn require_vertex(&self, v: &Self::Vertex) -> Result<()> {
        if self.contains_vertex(v) {
            Ok(())
        } else {
            Err(GraphError::vertex_not_found(v))
        }
    }

    /// Out-degree for directed graphs, total degree for undirected ones.
    /// A self-loop on an undirected vertex counts twice.
    fn degree(&self, v: &Self::Vertex) -> Result<usize> {
        self.require_vertex(v)?;
        Ok(self.adjacent(v).len())
    }

    /// Number of entries targeting `v`. Same as [QueryableGraph::degree] for
    /// undirected graphs.
    fn in_degree(&self, v: &Self::Vertex) -> Result<usize> {
        self.require_vertex(v)?;
        if !self.is_directed() {
            return Ok(self.adjacent(v).len());
        }
        let res = self
            .iter_vertices()
            .flat_map(|u| self.adjacent(u).iter())
            .filter(|a| a.vertex == *v)
            .count();
        Ok(res)
    }

    /// Zero for an empty graph.
    fn min_degree(&self) -> usize {
        self.iter_vertices()
            .map(|v| self.adjacent(v).len())
            .min()
            .unwrap_or(0)
    }

    /// Zero for an empty graph.
    fn max_degree(&self) -> usize {
        self.iter_vertices()
            .map(|v| self.adjacent(v).len())
            .max()
            .unwrap_or(0)
    }
}
