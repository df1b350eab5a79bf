use crate::graph::*;
use ahash::RandomState;
use std::collections::{BTreeSet, HashMap, VecDeque};

/// A split of the vertex set with every edge crossing between the sides.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bipartition<V> {
    pub left: BTreeSet<V>,
    pub right: BTreeSet<V>,
}

impl<V: Vertex> Bipartition<V> {
    pub fn side_of(&self, v: &V) -> Option<bool> {
        if self.left.contains(v) {
            Some(false)
        } else if self.right.contains(v) {
            Some(true)
        } else {
            None
        }
    }
}

/// Two-coloring by breadth-first search.
///
/// Edge directions are ignored. Every component is colored from its smallest
/// vertex, which goes to the left side.
pub trait TwoColoring
where
    Self: QueryableGraph + Sized,
{
    /// `None` if some edge joins two vertices of the same color, in particular
    /// for any self-loop.
    fn two_coloring(&self) -> Option<Bipartition<Self::Vertex>> {
        let incoming = if self.is_directed() {
            predecessors(self)
        } else {
            HashMap::default()
        };
        let mut color: HashMap<&Self::Vertex, bool, RandomState> =
            HashMap::with_capacity_and_hasher(self.vertex_size(), RandomState::new());
        for start in self.iter_vertices() {
            if color.contains_key(start) {
                continue;
            }
            color.insert(start, false);
            let mut queue = VecDeque::new();
            queue.push_back(start);
            while let Some(cur) = queue.pop_front() {
                let c = color[cur];
                let outgoing = self.adjacent(cur).iter().map(|a| &a.vertex);
                let back = incoming.get(cur).into_iter().flatten().copied();
                for nb in outgoing.chain(back) {
                    match color.get(nb) {
                        None => {
                            color.insert(nb, !c);
                            queue.push_back(nb);
                        }
                        Some(&cn) if cn == c => return None,
                        Some(_) => {}
                    }
                }
            }
        }
        let mut res = Bipartition {
            left: BTreeSet::new(),
            right: BTreeSet::new(),
        };
        for (v, c) in color.into_iter() {
            if c {
                res.right.insert(v.clone());
            } else {
                res.left.insert(v.clone());
            }
        }
        Some(res)
    }

    fn is_bipartite(&self) -> bool {
        self.two_coloring().is_some()
    }
}

impl<G: QueryableGraph> TwoColoring for G {}

fn predecessors<G: QueryableGraph>(
    graph: &G,
) -> HashMap<&G::Vertex, Vec<&G::Vertex>, RandomState> {
    let mut res: HashMap<&G::Vertex, Vec<&G::Vertex>, RandomState> = HashMap::default();
    for v in graph.iter_vertices() {
        for a in graph.adjacent(v).iter() {
            res.entry(&a.vertex).or_default().push(v);
        }
    }
    res
}
