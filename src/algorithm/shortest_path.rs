use crate::graph::*;
use crate::{GraphError, Result};
use ahash::RandomState;
use keyed_priority_queue::KeyedPriorityQueue;
use std::cmp::Reverse;
use std::collections::HashMap;

/// Shortest paths over edge weights.
pub trait WeightedDistances
where
    Self: QueryableGraph + Sized,
{
    /// Total weight of a lightest path from `source` to `sink`, by Dijkstra's
    /// algorithm. `None` if unreachable.
    ///
    /// Fails with [GraphError::InvalidOperation] if the graph has a negative
    /// edge weight anywhere. On unweighted graphs this equals the hop count.
    fn weighted_distance(
        &self,
        source: &Self::Vertex,
        sink: &Self::Vertex,
    ) -> Result<Option<Weight>> {
        self.require_vertex(source)?;
        self.require_vertex(sink)?;
        if self.iter_edges().any(|e| e.weight < 0) {
            return Err(GraphError::invalid_operation(
                "shortest paths need non-negative weights",
            ));
        }
        let mut settled: HashMap<&Self::Vertex, Weight, RandomState> = HashMap::default();
        let mut frontier: KeyedPriorityQueue<&Self::Vertex, Reverse<Weight>, RandomState> =
            KeyedPriorityQueue::with_capacity_and_hasher(self.vertex_size(), RandomState::new());
        frontier.push(source, Reverse(0));
        while let Some((cur, Reverse(dist))) = frontier.pop() {
            if cur == sink {
                return Ok(Some(dist));
            }
            settled.insert(cur, dist);
            for a in self.adjacent(cur).iter() {
                if settled.contains_key(&a.vertex) {
                    continue;
                }
                let candidate = dist.saturating_add(a.weight);
                let known = frontier.get_priority(&&a.vertex).map(|p| p.0);
                match known {
                    Some(d) if d <= candidate => {}
                    Some(_) => {
                        let _ = frontier.set_priority(&&a.vertex, Reverse(candidate));
                    }
                    None => {
                        frontier.push(&a.vertex, Reverse(candidate));
                    }
                }
            }
        }
        Ok(None)
    }
}

impl<G: QueryableGraph> WeightedDistances for G {}
