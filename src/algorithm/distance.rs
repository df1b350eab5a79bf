use crate::graph::*;
use crate::Result;
use ahash::RandomState;
use std::collections::{HashMap, HashSet, VecDeque};

/// Hop-count metrics.
///
/// Disconnection is a legitimate state rather than an error, so it surfaces as
/// `None`. Graphs with at most one vertex have diameter and radius `Some(0)`.
pub trait Distances
where
    Self: QueryableGraph + Sized,
{
    /// Hops on a shortest path from `source` to `sink`; `None` if unreachable.
    fn distance(&self, source: &Self::Vertex, sink: &Self::Vertex) -> Result<Option<usize>> {
        self.require_vertex(source)?;
        self.require_vertex(sink)?;
        if source == sink {
            return Ok(Some(0));
        }
        let mut visited: HashSet<&Self::Vertex, RandomState> = HashSet::default();
        let mut queue = VecDeque::new();
        visited.insert(source);
        queue.push_back((source, 0));
        while let Some((cur, hops)) = queue.pop_front() {
            for a in self.adjacent(cur).iter() {
                if a.vertex == *sink {
                    return Ok(Some(hops + 1));
                }
                if visited.insert(&a.vertex) {
                    queue.push_back((&a.vertex, hops + 1));
                }
            }
        }
        Ok(None)
    }

    /// Hops from `v` to every vertex it reaches, itself included.
    fn hop_counts<'a>(
        &'a self,
        v: &'a Self::Vertex,
    ) -> Result<HashMap<&'a Self::Vertex, usize, RandomState>> {
        self.require_vertex(v)?;
        let mut res: HashMap<&'a Self::Vertex, usize, RandomState> = HashMap::default();
        let mut queue = VecDeque::new();
        res.insert(v, 0);
        queue.push_back((v, 0));
        while let Some((cur, hops)) = queue.pop_front() {
            for a in self.adjacent(cur).iter() {
                if !res.contains_key(&a.vertex) {
                    res.insert(&a.vertex, hops + 1);
                    queue.push_back((&a.vertex, hops + 1));
                }
            }
        }
        Ok(res)
    }

    /// The largest distance from `v` to any other vertex; `None` if some
    /// vertex is unreachable from `v`.
    fn eccentricity(&self, v: &Self::Vertex) -> Result<Option<usize>> {
        let hops = self.hop_counts(v)?;
        if hops.len() < self.vertex_size() {
            return Ok(None);
        }
        Ok(Some(hops.values().copied().max().unwrap_or(0)))
    }

    /// Eccentricities of all vertices, or `None` as soon as one is undefined.
    fn eccentricities(&self) -> Option<Vec<usize>> {
        let mut res = Vec::with_capacity(self.vertex_size());
        for v in self.iter_vertices() {
            res.push(self.eccentricity(v).ok()??);
        }
        Some(res)
    }

    /// The largest distance over all ordered pairs.
    fn diameter(&self) -> Option<usize> {
        if self.vertex_size() <= 1 {
            return Some(0);
        }
        self.eccentricities()?.into_iter().max()
    }

    /// The smallest eccentricity.
    fn radius(&self) -> Option<usize> {
        if self.vertex_size() <= 1 {
            return Some(0);
        }
        self.eccentricities()?.into_iter().min()
    }

    /// Whether a search from the first vertex reaches every vertex. Directed
    /// edges are followed forward only. An empty graph is connected.
    fn is_connected(&self) -> bool {
        match self.iter_vertices().next() {
            None => true,
            Some(v) => self
                .hop_counts(v)
                .map(|hops| hops.len() == self.vertex_size())
                .unwrap_or(false),
        }
    }
}

impl<G: QueryableGraph> Distances for G {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::variants::*;
    use crate::graph::ops::*;
    use crate::GraphError;
    use quickcheck_macros::quickcheck;

    fn undirected(edges: &[(i32, i32)]) -> UndirectedGraph<i32> {
        let mut g = UndirectedGraph::new();
        for &(u, v) in edges {
            g.add_edge(u, v).unwrap();
        }
        g
    }

    #[test]
    fn path_distances() {
        let g = undirected(&[(1, 2), (2, 3), (3, 4), (4, 5)]);
        assert_eq!(g.distance(&1, &5), Ok(Some(4)));
        assert_eq!(g.distance(&3, &3), Ok(Some(0)));
        assert_eq!(g.diameter(), Some(4));
        assert_eq!(g.radius(), Some(2));
        assert_eq!(g.eccentricity(&1), Ok(Some(4)));
        assert!(g.is_connected());
    }

    #[test]
    fn disconnected_components() {
        let g = undirected(&[(1, 2), (2, 3), (4, 5)]);
        assert_eq!(g.distance(&1, &4), Ok(None));
        assert_eq!(g.diameter(), None);
        assert_eq!(g.radius(), None);
        assert!(!g.is_connected());
    }

    #[test]
    fn trivial_sizes() {
        let g = UndirectedGraph::<i32>::new();
        assert_eq!(g.diameter(), Some(0));
        assert_eq!(g.radius(), Some(0));
        assert!(g.is_connected());
        let mut g = UndirectedGraph::new();
        g.add_vertex(1).unwrap();
        assert_eq!(g.diameter(), Some(0));
    }

    #[test]
    fn missing_endpoint() {
        let g = undirected(&[(1, 2)]);
        assert!(matches!(
            g.distance(&1, &9),
            Err(GraphError::VertexNotFound { .. })
        ));
        assert!(matches!(
            g.distance(&9, &1),
            Err(GraphError::VertexNotFound { .. })
        ));
    }

    #[test]
    fn directed_distance_is_one_way() {
        let mut g = DirectedGraph::new();
        for (u, v) in [(1, 2), (2, 3), (3, 1)] {
            g.add_edge(u, v).unwrap();
        }
        assert_eq!(g.distance(&1, &3), Ok(Some(2)));
        assert_eq!(g.distance(&3, &1), Ok(Some(1)));
        assert_eq!(g.diameter(), Some(2));
    }

    #[quickcheck]
    fn radius_bounds_diameter(ops: Ops) {
        let mut g = UndirectedGraph::new();
        ops.apply_to_graph(&mut g);
        if g.num_vertices() < 2 || !g.is_connected() {
            return;
        }
        let radius = g.radius().unwrap();
        let diameter = g.diameter().unwrap();
        assert!(radius <= diameter);
        assert!(diameter <= 2 * radius);
    }

    #[quickcheck]
    fn distance_agrees_with_petgraph(ops: Ops) {
        let mut g = DirectedGraph::new();
        ops.apply_to_graph(&mut g);
        let out = g.to_petgraph::<petgraph::Directed>().unwrap();
        for u in g.vertices() {
            let oracle = petgraph::algo::dijkstra(&out.graph, out.node(u).unwrap(), None, |_| 1);
            for v in g.vertices() {
                let expected = oracle.get(&out.node(v).unwrap()).map(|d| *d as usize);
                assert_eq!(g.distance(u, v), Ok(expected));
            }
        }
    }
}
