//! Random mutation sequences for property tests.
use crate::graph::*;
use crate::policy::InvariantPolicy;
use quickcheck::Arbitrary;
use rs_quickcheck_util::*;

/// Vertices are drawn from `0..VERTEX_RANGE` so that random sequences revisit
/// the same vertices often enough to form cycles.
pub const VERTEX_RANGE: u8 = 7;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Op {
    AddVertex(u8),
    RemoveVertex(u8),
    AddEdge((u8, u8, Weight)),
    RemoveEdge((u8, u8)),
}

#[derive(Clone)]
pub struct Ops {
    pub ops: Vec<Op>,
}

impl std::fmt::Debug for Ops {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self.ops)
    }
}

impl Ops {
    pub fn iter(&self) -> impl Iterator<Item = &Op> + '_ {
        self.ops.iter()
    }

    pub fn apply_to_store(&self, store: &mut AdjacencyStore<u8>) {
        for op in self.iter() {
            match *op {
                Op::AddVertex(v) => {
                    store.insert_vertex(v);
                }
                Op::RemoveVertex(v) => {
                    store.remove_vertex(&v);
                }
                Op::AddEdge((source, sink, weight)) => {
                    store.insert_edge(Edge::new(source, sink, weight));
                }
                Op::RemoveEdge((source, sink)) => {
                    store.remove_edge(&source, &sink);
                }
            }
        }
    }

    /// Applies every op, ignoring rejections. Returns how many edges were
    /// rejected by the policy.
    pub fn apply_to_graph<P: InvariantPolicy<u8>>(&self, graph: &mut Graph<u8, P>) -> usize {
        let mut rejected = 0;
        for op in self.iter() {
            match *op {
                Op::AddVertex(v) => {
                    let _ = graph.add_vertex(v);
                }
                Op::RemoveVertex(v) => {
                    graph.delete_vertex(&v);
                }
                Op::AddEdge((source, sink, weight)) => {
                    if graph.add_weighted_edge(source, sink, weight).is_err() {
                        rejected += 1;
                    }
                }
                Op::RemoveEdge((source, sink)) => {
                    graph.delete_edge(&source, &sink);
                }
            }
        }
        rejected
    }
}

impl Arbitrary for Ops {
    fn arbitrary(g: &mut quickcheck::Gen) -> Self {
        let ops = gen_bytes(g, b"abcd.", b'.', 0..)
            .iter()
            .map(|_| {
                let v = u8::arbitrary(g) % VERTEX_RANGE;
                match u8::arbitrary(g) % 8 {
                    0 => Op::AddVertex(v),
                    1 => Op::RemoveVertex(v),
                    2 => {
                        let u = u8::arbitrary(g) % VERTEX_RANGE;
                        Op::RemoveEdge((v, u))
                    }
                    _ => {
                        let u = u8::arbitrary(g) % VERTEX_RANGE;
                        let weight = Weight::from(u8::arbitrary(g) % 10);
                        Op::AddEdge((v, u, weight))
                    }
                }
            })
            .collect();
        Self { ops }
    }

    fn shrink(&self) -> Box<dyn Iterator<Item = Self>> {
        let l = self.ops.len();
        let me = self.clone();
        let it = std::iter::successors(Some(l / 2), move |n| {
            let nxt = (n + l) / 2 + 1;
            if nxt >= l {
                None
            } else {
                Some(nxt)
            }
        })
        .map(move |n| {
            let mut res = me.clone();
            res.ops = me.ops[0..n].to_vec();
            res
        });
        Box::new(it)
    }
}
