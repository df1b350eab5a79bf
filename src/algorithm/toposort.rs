use crate::graph::*;
use ahash::RandomState;
use keyed_priority_queue::KeyedPriorityQueue;
use std::cmp::Reverse;
use tracing::trace;

pub trait TopologicalSort
where
    Self: QueryableGraph + Sized,
{
    /// Vertices ordered so that every edge points forward.
    ///
    /// Among the vertices ready at any step the smallest comes first, so the
    /// order is unique. `None` for undirected graphs and for directed graphs
    /// with a cycle.
    fn toposort(&self) -> Option<Vec<Self::Vertex>> {
        if !self.is_directed() {
            return None;
        }
        let mut degree_queue: KeyedPriorityQueue<
            &Self::Vertex,
            Reverse<(usize, &Self::Vertex)>,
            RandomState,
        > = KeyedPriorityQueue::with_capacity_and_hasher(self.vertex_size(), RandomState::new());
        for v in self.iter_vertices() {
            degree_queue.push(v, Reverse((0, v)));
        }
        for v in self.iter_vertices() {
            for a in self.adjacent(v).iter() {
                bump(&mut degree_queue, &a.vertex, |d| d + 1);
            }
        }
        let mut res = Vec::with_capacity(self.vertex_size());
        while let Some((v, Reverse((in_degree, _)))) = degree_queue.pop() {
            if in_degree > 0 {
                trace!(vertex = ?v, in_degree, "cycle blocks toposort");
                return None;
            }
            for a in self.adjacent(v).iter() {
                bump(&mut degree_queue, &a.vertex, |d| d.saturating_sub(1));
            }
            res.push(v.clone());
        }
        Some(res)
    }
}

impl<G: QueryableGraph> TopologicalSort for G {}

fn bump<'a, V: Vertex>(
    queue: &mut KeyedPriorityQueue<&'a V, Reverse<(usize, &'a V)>, RandomState>,
    v: &'a V,
    f: impl Fn(usize) -> usize,
) {
    if let Some(Reverse((d, _))) = queue.get_priority(&v).copied() {
        let _ = queue.set_priority(&v, Reverse((f(d), v)));
    }
}
