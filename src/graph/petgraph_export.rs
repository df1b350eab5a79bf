use crate::graph::*;
use crate::{GraphError, Result};
use ahash::RandomState;
use bimap::BiHashMap;
use petgraph::graph::NodeIndex;
use petgraph::EdgeType;

/// A [petgraph::graph::Graph] copy of a graph, plus the correspondence between
/// its vertices and node indices.
///
/// Node weights are the vertices themselves and edge weights are the edge
/// weights. Nodes are added in ascending vertex order.
pub struct PetgraphExport<V, Ty: EdgeType> {
    pub graph: petgraph::graph::Graph<V, Weight, Ty>,
    pub index: BiHashMap<V, NodeIndex, RandomState, RandomState>,
}

impl<V: Vertex, Ty: EdgeType> PetgraphExport<V, Ty> {
    pub fn node(&self, v: &V) -> Option<NodeIndex> {
        self.index.get_by_left(v).copied()
    }

    pub fn vertex(&self, idx: NodeIndex) -> Option<&V> {
        self.index.get_by_right(&idx)
    }
}

pub trait ToPetgraph: QueryableGraph + Sized {
    /// Exports to petgraph. `Ty` must match the directedness of this graph,
    /// otherwise [GraphError::IncompatibleGraph] is returned.
    ///
    /// Each undirected edge becomes exactly one petgraph edge.
    fn to_petgraph<Ty: EdgeType>(&self) -> Result<PetgraphExport<Self::Vertex, Ty>> {
        if Ty::is_directed() != self.is_directed() {
            return Err(GraphError::incompatible(
                "petgraph edge type differs in directedness",
            ));
        }
        let mut graph =
            petgraph::graph::Graph::with_capacity(self.vertex_size(), self.edge_size());
        let mut index = BiHashMap::with_hashers(RandomState::new(), RandomState::new());
        for v in self.iter_vertices() {
            let idx = graph.add_node(v.clone());
            index.insert(v.clone(), idx);
        }
        let node = |v: &Self::Vertex| index.get_by_left(v).copied();
        for v in self.iter_vertices() {
            let Some(from) = node(v) else { continue };
            let mut loops = vec![];
            for a in self.adjacent(v).iter() {
                let Some(to) = node(&a.vertex) else { continue };
                if self.is_directed() || a.vertex > *v {
                    graph.add_edge(from, to, a.weight);
                } else if a.vertex == *v {
                    loops.push(a.weight);
                }
            }
            // undirected self-loops occupy two entries each, pairwise equal in weight
            loops.sort_unstable();
            for w in loops.into_iter().step_by(2) {
                graph.add_edge(from, from, w);
            }
        }
        Ok(PetgraphExport { graph, index })
    }
}

impl<G: QueryableGraph> ToPetgraph for G {}
