use crate::graph::*;
use crate::Result;
use ahash::RandomState;
use std::collections::{BTreeMap, HashSet, VecDeque};
use tracing::trace;

/// What a breadth-first search leaves behind.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BfsTree<V> {
    pub root: V,
    /// Vertices in the order they were dequeued.
    pub order: Vec<V>,
    /// First discoverer of every reached vertex except the root.
    pub parent: BTreeMap<V, V>,
    /// Hops from the root.
    pub level: BTreeMap<V, usize>,
}

/// What a depth-first search leaves behind.
///
/// `discovery` and `finish` share one logical clock starting at 1 for the
/// root, so for any two reached vertices their intervals are either nested or
/// disjoint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DfsTree<V> {
    pub root: V,
    /// Vertices in discovery order.
    pub order: Vec<V>,
    pub parent: BTreeMap<V, V>,
    pub depth: BTreeMap<V, usize>,
    pub discovery: BTreeMap<V, usize>,
    pub finish: BTreeMap<V, usize>,
}

impl<V: Vertex> BfsTree<V> {
    pub fn children(&self, v: &V) -> Vec<&V> {
        children_of(&self.parent, v)
    }
}

impl<V: Vertex> DfsTree<V> {
    pub fn children(&self, v: &V) -> Vec<&V> {
        children_of(&self.parent, v)
    }
}

fn children_of<'a, V: Vertex>(parent: &'a BTreeMap<V, V>, v: &V) -> Vec<&'a V> {
    parent
        .iter()
        .filter(|(_, p)| *p == v)
        .map(|(c, _)| c)
        .collect()
}

/// Breadth-first and depth-first traversal from a given root.
///
/// Neighbors are visited in adjacency-list order, so both traversals are
/// deterministic. Vertices unreachable from the root are left out.
pub trait Traversal
where
    Self: QueryableGraph + Sized,
{
    fn bfs(&self, start: &Self::Vertex) -> Result<BfsTree<Self::Vertex>> {
        self.require_vertex(start)?;
        let mut visited: HashSet<Self::Vertex, RandomState> =
            HashSet::with_capacity_and_hasher(self.vertex_size(), RandomState::new());
        let mut res = BfsTree {
            root: start.clone(),
            order: vec![],
            parent: BTreeMap::new(),
            level: BTreeMap::new(),
        };
        let mut queue = VecDeque::new();
        visited.insert(start.clone());
        res.level.insert(start.clone(), 0);
        queue.push_back((start.clone(), 0));
        while let Some((cur, lvl)) = queue.pop_front() {
            trace!(vertex = ?cur, level = lvl, "bfs visit");
            for a in self.adjacent(&cur).iter() {
                if visited.insert(a.vertex.clone()) {
                    res.parent.insert(a.vertex.clone(), cur.clone());
                    res.level.insert(a.vertex.clone(), lvl + 1);
                    queue.push_back((a.vertex.clone(), lvl + 1));
                }
            }
            res.order.push(cur);
        }
        Ok(res)
    }

    fn dfs(&self, start: &Self::Vertex) -> Result<DfsTree<Self::Vertex>> {
        self.require_vertex(start)?;
        let mut res = DfsTree {
            root: start.clone(),
            order: vec![],
            parent: BTreeMap::new(),
            depth: BTreeMap::new(),
            discovery: BTreeMap::new(),
            finish: BTreeMap::new(),
        };
        let mut clock = 1;
        // (vertex, index of the next neighbor to try)
        let mut stack: Vec<(Self::Vertex, usize)> = vec![];
        res.discovery.insert(start.clone(), clock);
        res.depth.insert(start.clone(), 0);
        res.order.push(start.clone());
        stack.push((start.clone(), 0));
        while let Some((cur, next)) = stack.last_mut() {
            let adjacent = self.adjacent(cur);
            if *next >= adjacent.len() {
                clock += 1;
                trace!(vertex = ?cur, finish = clock, "dfs finish");
                res.finish.insert(cur.clone(), clock);
                stack.pop();
                continue;
            }
            let nb = &adjacent[*next].vertex;
            *next += 1;
            if res.discovery.contains_key(nb) {
                continue;
            }
            let cur = cur.clone();
            let depth = res.depth.get(&cur).copied().unwrap_or(0) + 1;
            clock += 1;
            trace!(vertex = ?nb, discovery = clock, "dfs discover");
            res.discovery.insert(nb.clone(), clock);
            res.depth.insert(nb.clone(), depth);
            res.parent.insert(nb.clone(), cur);
            res.order.push(nb.clone());
            stack.push((nb.clone(), 0));
        }
        Ok(res)
    }
}

impl<G: QueryableGraph> Traversal for G {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::variants::*;
    use crate::graph::ops::*;
    use crate::GraphError;
    use quickcheck_macros::quickcheck;

    fn path(n: i32) -> UndirectedGraph<i32> {
        let mut g = UndirectedGraph::new();
        for i in 1..n {
            g.add_edge(i, i + 1).unwrap();
        }
        g
    }

    #[test]
    fn bfs_on_path() {
        let g = path(5);
        let t = g.bfs(&1).unwrap();
        assert_eq!(t.order, vec![1, 2, 3, 4, 5]);
        assert_eq!(t.level.get(&5), Some(&4));
        assert_eq!(t.parent.get(&1), None);
        assert_eq!(t.parent.get(&3), Some(&2));
    }

    #[test]
    fn bfs_visits_by_level() {
        let mut g = DirectedGraph::new();
        for (u, v) in [('A', 'B'), ('A', 'C'), ('B', 'D'), ('C', 'D'), ('D', 'E')] {
            g.add_edge(u, v).unwrap();
        }
        let t = g.bfs(&'A').unwrap();
        assert_eq!(t.order, vec!['A', 'B', 'C', 'D', 'E']);
        assert_eq!(t.parent.get(&'D'), Some(&'B'));
        assert_eq!(t.children(&'A'), vec![&'B', &'C']);
    }

    #[test]
    fn dfs_goes_deep_first() {
        let mut g = DirectedGraph::new();
        for (u, v) in [('A', 'B'), ('A', 'C'), ('B', 'D'), ('C', 'D'), ('D', 'E')] {
            g.add_edge(u, v).unwrap();
        }
        let t = g.dfs(&'A').unwrap();
        assert_eq!(t.order, vec!['A', 'B', 'D', 'E', 'C']);
        assert_eq!(t.depth.get(&'E'), Some(&3));
        assert_eq!(t.parent.get(&'C'), Some(&'A'));
        assert_eq!(t.discovery.get(&'A'), Some(&1));
        assert_eq!(t.finish.get(&'E'), Some(&5));
        assert_eq!(t.finish.get(&'A'), Some(&10));
    }

    #[test]
    fn unreachable_vertices_are_left_out() {
        let mut g = DirectedGraph::new();
        g.add_edge(1, 2).unwrap();
        g.add_edge(3, 1).unwrap();
        assert_eq!(g.bfs(&1).unwrap().order, vec![1, 2]);
        assert_eq!(g.dfs(&1).unwrap().order, vec![1, 2]);
    }

    #[test]
    fn unknown_root() {
        let g = path(3);
        assert!(matches!(g.bfs(&7), Err(GraphError::VertexNotFound { .. })));
        assert!(matches!(g.dfs(&7), Err(GraphError::VertexNotFound { .. })));
    }

    #[quickcheck]
    fn traversals_reach_the_same_vertices(ops: Ops) {
        for directed in [false, true] {
            let mut g = Graph::with_flags(directed, false);
            ops.apply_to_graph(&mut g);
            for v in g.vertices() {
                let b = g.bfs(v).unwrap();
                let d = g.dfs(v).unwrap();
                let mut bv = b.order.clone();
                let mut dv = d.order.clone();
                bv.sort();
                dv.sort();
                assert_eq!(bv, dv);
                assert_eq!(b.order.len(), b.parent.len() + 1);
                for (c, p) in b.parent.iter() {
                    assert_eq!(b.level[c], b.level[p] + 1);
                }
            }
        }
    }

    #[quickcheck]
    fn dfs_intervals_nest(ops: Ops) {
        let mut g = DirectedGraph::new();
        ops.apply_to_graph(&mut g);
        for v in g.vertices() {
            let t = g.dfs(v).unwrap();
            for (c, p) in t.parent.iter() {
                assert!(t.discovery[p] < t.discovery[c]);
                assert!(t.finish[c] < t.finish[p]);
            }
        }
    }
}
