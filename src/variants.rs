//! Named graph kinds.
//!
//! Each kind is a [Graph] with its own policy type, so every alias has a
//! `new` (and, where it takes no arguments, a `Default`) that sets the right
//! directedness and weightedness.
//!
//! | Kind                     | Policy                 | Directed  | Weighted | Accepts                              |
//! | ------------------------ | ---------------------- | --------- | -------- | ------------------------------------ |
//! | [UndirectedGraph]        | [Undirected]           | no        | no       | everything                           |
//! | [DirectedGraph]          | [Directed]             | yes       | no       | everything                           |
//! | [WeightedGraph]          | [Weighted]             | optional  | yes      | everything                           |
//! | [NullGraph]              | [EdgeFree]             | no        | no       | vertices only                        |
//! | [TrivialGraph]           | [SingleVertex]         | no        | no       | nothing after construction           |
//! | [CompleteGraph]          | [Complete]             | no        | no       | everything; vertices join all others |
//! | [CyclicGraph]            | [CycleReporting]       | optional  | no       | everything                           |
//! | [DirectedAcyclicGraph]   | [Acyclic]              | yes       | no       | edges that close no directed cycle   |
//! | [BipartiteGraph]         | [TwoColorable]         | no        | no       | edges that keep it two-colorable     |
//! | [ConnectedGraph]         | [ExpectConnected]      | no        | no       | everything                           |
//! | [DisconnectedGraph]      | [ExpectDisconnected]   | no        | no       | everything                           |
use crate::algorithm::{Bipartition, Cycles, TopologicalSort, TwoColoring};
use crate::graph::*;
use crate::policy::*;

pub type UndirectedGraph<V> = Graph<V, Undirected>;
pub type DirectedGraph<V> = Graph<V, Directed>;
pub type WeightedGraph<V> = Graph<V, Weighted>;
pub type NullGraph<V> = Graph<V, EdgeFree>;
pub type TrivialGraph<V> = Graph<V, SingleVertex>;
pub type CompleteGraph<V> = Graph<V, Complete>;
pub type CyclicGraph<V> = Graph<V, CycleReporting>;
pub type DirectedAcyclicGraph<V> = Graph<V, Acyclic>;
pub type BipartiteGraph<V> = Graph<V, TwoColorable>;
pub type ConnectedGraph<V> = Graph<V, ExpectConnected>;
pub type DisconnectedGraph<V> = Graph<V, ExpectDisconnected>;

/// `new` and `Default` for kinds whose flags are fixed.
macro_rules! fixed_kind {
    ($policy:ident, directed: $directed:expr) => {
        impl<V: Vertex> Graph<V, $policy> {
            pub fn new() -> Self {
                Self::with_policy($directed, false, $policy)
            }
        }

        impl<V: Vertex> Default for Graph<V, $policy> {
            fn default() -> Self {
                Self::new()
            }
        }
    };
}

fixed_kind!(Undirected, directed: false);
fixed_kind!(Directed, directed: true);
fixed_kind!(EdgeFree, directed: false);
fixed_kind!(Complete, directed: false);
fixed_kind!(Acyclic, directed: true);
fixed_kind!(TwoColorable, directed: false);
fixed_kind!(ExpectConnected, directed: false);
fixed_kind!(ExpectDisconnected, directed: false);

impl<V: Vertex> Graph<V, Weighted> {
    /// An undirected weighted graph.
    pub fn new() -> Self {
        Self::with_policy(false, true, Weighted)
    }

    pub fn directed() -> Self {
        Self::with_policy(true, true, Weighted)
    }
}

impl<V: Vertex> Default for Graph<V, Weighted> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V: Vertex> Graph<V, SingleVertex> {
    /// A graph holding `v` and nothing else, for good.
    pub fn new(v: V) -> Self {
        let mut res = Self::with_policy(false, false, SingleVertex);
        res.add_vertex(v).unwrap();
        res
    }
}

impl<V: Vertex> Graph<V, CycleReporting> {
    /// An undirected graph reporting its cycles.
    pub fn new() -> Self {
        Self::with_policy(false, false, CycleReporting)
    }

    pub fn directed() -> Self {
        Self::with_policy(true, false, CycleReporting)
    }

    pub fn has_cycle(&self) -> bool {
        Cycles::has_cycle(self)
    }
}

impl<V: Vertex> Default for Graph<V, CycleReporting> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V: Vertex> Graph<V, Acyclic> {
    /// Never fails: the policy keeps the graph acyclic.
    pub fn topological_order(&self) -> Vec<V> {
        self.toposort().unwrap_or_default()
    }
}

impl<V: Vertex> Graph<V, TwoColorable> {
    pub fn is_bipartite(&self) -> bool {
        TwoColoring::is_bipartite(self)
    }

    /// The two sides. Always available since the policy keeps the graph
    /// two-colorable.
    pub fn partition(&self) -> Bipartition<V> {
        self.two_coloring().unwrap_or_else(|| Bipartition {
            left: self.vertices().cloned().collect(),
            right: Default::default(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algorithm::*;
    use crate::graph::ops::*;
    use crate::GraphError;
    use quickcheck_macros::quickcheck;

    #[test]
    fn complete_graph_grows_all_edges() {
        let mut g = CompleteGraph::new();
        for v in ['A', 'B', 'C', 'D'] {
            assert_eq!(g.add_vertex(v), Ok(true));
        }
        assert_eq!(g.num_edges(), 6);
        for v in ['A', 'B', 'C', 'D'] {
            assert_eq!(g.degree(&v), Ok(3));
        }
        assert_eq!(g.add_vertex('A'), Ok(false));
        assert_eq!(g.caption().title, "Complete Graph K4");
    }

    #[test]
    fn complete_graph_takes_explicit_edges() {
        let mut g = CompleteGraph::new();
        g.add_vertex(1).unwrap();
        g.add_vertex(2).unwrap();
        g.add_edge(1, 2).unwrap();
        assert_eq!(g.num_edges(), 2);
        assert_eq!(g.degree(&1), Ok(2));
        g.add_edge(3, 4).unwrap();
        assert_eq!(g.num_vertices(), 4);
        assert_eq!(g.num_edges(), 3);

        let mut other = UndirectedGraph::new();
        other.add_edge(5, 5).unwrap();
        g.join(&other).unwrap();
        assert_eq!(g.num_vertices(), 5);
        assert_eq!(g.degree(&5), Ok(6));
    }

    #[test]
    fn null_graph_refuses_edges() {
        let mut g = NullGraph::new();
        for v in [1, 2, 3] {
            g.add_vertex(v).unwrap();
        }
        assert!(matches!(
            g.add_edge(1, 2),
            Err(GraphError::InvalidOperation { .. })
        ));
        assert_eq!(g.num_edges(), 0);
        assert_eq!(g.num_vertices(), 3);
        assert_eq!(
            g.to_string(),
            "Null Graph with 3 vertices and 0 edges\nVertices: 1, 2, 3\n"
        );
        assert_eq!(
            NullGraph::<u8>::new().to_string(),
            "Null Graph with 0 vertices and 0 edges\n"
        );
    }

    #[test]
    fn trivial_graph_stays_trivial() {
        let mut g = TrivialGraph::new('X');
        assert_eq!(g.num_vertices(), 1);
        assert!(matches!(
            g.add_vertex('Y'),
            Err(GraphError::InvalidOperation { .. })
        ));
        assert_eq!(g.add_vertex('X'), Ok(false));
        assert!(g.add_edge('X', 'X').is_err());
        assert_eq!(g.num_vertices(), 1);
        assert_eq!(g.num_edges(), 0);
        assert_eq!(
            g.to_string(),
            "Trivial Graph with 1 vertex and 0 edges\nVertex: X\n"
        );
    }

    #[test]
    fn each_kind_builds_its_own_flags() {
        assert!(!UndirectedGraph::<i32>::new().is_directed());
        assert!(DirectedGraph::<i32>::new().is_directed());
        assert!(DirectedGraph::<i32>::default().is_directed());
        let g = WeightedGraph::<i32>::default();
        assert!(g.is_weighted() && !g.is_directed());
        let g = WeightedGraph::<i32>::directed();
        assert!(g.is_weighted() && g.is_directed());
        assert!(CyclicGraph::<i32>::directed().is_directed());
        assert!(!CyclicGraph::<i32>::new().is_directed());
        assert!(DirectedAcyclicGraph::<i32>::default().is_directed());
        assert_eq!(ConnectedGraph::<i32>::new().caption().title, "Connected Graph");
        assert_eq!(
            DisconnectedGraph::<i32>::default().caption().title,
            "Disconnected Graph"
        );
        assert_eq!(DirectedGraph::<i32>::new().caption().title, "Directed Graph");
        assert_eq!(
            WeightedGraph::<i32>::directed().caption().title,
            "Weighted Graph"
        );
    }

    #[test]
    fn dag_rejects_cycle_and_rolls_back() {
        let mut g = DirectedAcyclicGraph::new();
        g.add_edge(1, 2).unwrap();
        g.add_edge(2, 3).unwrap();
        let before = g.clone();
        assert_eq!(
            g.add_edge(3, 1),
            Err(GraphError::CycleViolation {
                from: "3".to_owned(),
                to: "1".to_owned(),
            })
        );
        assert_eq!(g, before);
        assert!(g.add_edge(4, 4).is_err());
        assert_eq!(g.num_vertices(), 3);
        g.add_edge(1, 3).unwrap();
        assert_eq!(g.topological_order(), vec![1, 2, 3]);
    }

    #[test]
    fn dag_join_is_all_or_nothing() {
        let mut g = DirectedAcyclicGraph::new();
        g.add_edge(1, 2).unwrap();
        let mut other = DirectedGraph::new();
        other.add_edge(0, 1).unwrap();
        other.add_edge(2, 1).unwrap();
        let before = g.clone();
        assert_eq!(
            g.join(&other),
            Err(GraphError::CycleViolation {
                from: "2".to_owned(),
                to: "1".to_owned(),
            })
        );
        assert_eq!(g, before);
        assert!(matches!(
            &g + &other,
            Err(GraphError::CycleViolation { .. })
        ));

        let mut other = DirectedGraph::new();
        other.add_edge(0, 1).unwrap();
        other.add_edge(2, 3).unwrap();
        g.join(&other).unwrap();
        assert_eq!(g.topological_order(), vec![0, 1, 2, 3]);
    }

    #[test]
    fn bipartite_join_is_all_or_nothing() {
        let mut g = BipartiteGraph::new();
        g.add_edge('a', 'x').unwrap();
        g.add_edge('b', 'x').unwrap();
        let mut other = UndirectedGraph::new();
        other.add_edge('b', 'y').unwrap();
        other.add_edge('a', 'b').unwrap();
        let before = g.clone();
        assert!(matches!(
            g.join(&other),
            Err(GraphError::BipartiteViolation { .. })
        ));
        assert_eq!(g, before);
        assert!(!g.contains_vertex(&'y'));
    }

    #[test]
    fn trivial_join_refuses_new_vertices() {
        let mut g = TrivialGraph::new('X');
        let mut other = NullGraph::new();
        other.add_vertex('X').unwrap();
        g.join(&other).unwrap();
        other.add_vertex('Y').unwrap();
        let before = g.clone();
        assert!(matches!(
            g.join(&other),
            Err(GraphError::InvalidOperation { .. })
        ));
        assert_eq!(g, before);
    }

    #[test]
    fn bipartite_rejects_odd_cycle_and_rolls_back() {
        let mut g = BipartiteGraph::new();
        g.add_edge("a", "x").unwrap();
        g.add_edge("b", "x").unwrap();
        g.add_edge("b", "y").unwrap();
        let before = g.clone();
        assert!(matches!(
            g.add_edge("a", "b"),
            Err(GraphError::BipartiteViolation { .. })
        ));
        assert_eq!(g, before);
        assert!(g.is_bipartite());
        let p = g.partition();
        assert_eq!(p.left.into_iter().collect::<Vec<_>>(), vec!["a", "b"]);
        assert_eq!(p.right.into_iter().collect::<Vec<_>>(), vec!["x", "y"]);
    }

    #[test]
    fn cyclic_graph_reports() {
        let mut g = CyclicGraph::directed();
        g.add_edge(1, 2).unwrap();
        g.add_edge(2, 3).unwrap();
        assert!(!g.has_cycle());
        assert!(g.to_string().starts_with("Cyclic Graph (Has Cycle: No):\n"));
        g.add_edge(3, 1).unwrap();
        assert!(g.has_cycle());
        assert!(g.to_string().starts_with("Cyclic Graph (Has Cycle: Yes):\n"));
    }

    #[test]
    fn connectivity_captions() {
        let mut g = ConnectedGraph::new();
        g.add_edge(1, 2).unwrap();
        g.add_edge(3, 4).unwrap();
        assert!(g
            .to_string()
            .starts_with("Connected Graph (Connected: No):\n"));
        let mut g = DisconnectedGraph::new();
        g.add_edge(1, 2).unwrap();
        assert!(g
            .to_string()
            .starts_with("Disconnected Graph (Connected: Yes):\n"));
    }

    #[test]
    fn disconnected_scenario() {
        let mut g = DisconnectedGraph::new();
        for (u, v) in [(1, 2), (2, 3), (4, 5)] {
            g.add_edge(u, v).unwrap();
        }
        assert_eq!(g.distance(&1, &4), Ok(None));
        assert_eq!(g.diameter(), None);
        assert!(!g.is_connected());
    }

    #[test]
    fn weighted_graph_listing() {
        let mut g = WeightedGraph::new();
        g.add_weighted_edge('A', 'B', 10).unwrap();
        g.add_weighted_edge('A', 'D', 15).unwrap();
        g.add_vertex('E').unwrap();
        let oracle = "\
Weighted Graph:
Graph (Adjacency List & weighted graph):
-----------------------
  A --- (10)---> B, (15)---> D
  B --- (10)---> A
  D --- (15)---> A
  E --> ∅
";
        assert_eq!(g.to_string(), oracle);
    }

    #[quickcheck]
    fn dag_never_becomes_cyclic(ops: Ops) {
        let mut g = DirectedAcyclicGraph::new();
        for op in ops.iter() {
            if let Op::AddEdge((u, v, w)) = *op {
                let before = g.clone();
                if g.add_weighted_edge(u, v, w).is_err() {
                    assert_eq!(g, before);
                }
            } else {
                ops_step(&mut g, op);
            }
            assert!(!Cycles::has_cycle(&g));
        }
        assert_eq!(g.topological_order().len(), g.num_vertices());
    }

    #[quickcheck]
    fn bipartite_stays_two_colorable(ops: Ops) {
        let mut g = BipartiteGraph::new();
        let rejected = ops.apply_to_graph(&mut g);
        let p = g.two_coloring().unwrap();
        for e in g.iter_edges() {
            assert_ne!(p.side_of(&e.source), p.side_of(&e.sink));
        }
        let accepted = ops
            .iter()
            .filter(|op| matches!(op, Op::AddEdge(_)))
            .count()
            - rejected;
        assert!(g.num_edges() <= accepted);
    }

    fn ops_step<P: InvariantPolicy<u8>>(g: &mut Graph<u8, P>, op: &Op) {
        let single = Ops { ops: vec![*op] };
        single.apply_to_graph(g);
    }
}
