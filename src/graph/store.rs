use crate::graph::*;
use std::collections::BTreeMap;

/// The storage layer behind every graph: an ordered vertex set and, per
/// vertex, its adjacency list in insertion order.
///
/// The keys of the adjacency map are the vertex set, so a vertex without
/// neighbors still owns an (empty) list. For undirected stores every edge is
/// two entries, `u -> v` and `v -> u` with the same weight, which are inserted
/// and removed together.
///
/// The store accepts anything: parallel edges, self-loops, any weight.
/// Structural restrictions are the business of [Graph] and its policy.
///
/// |                 | Complexity                          |
/// | --------------- | ----------------------------------- |
/// | `insert_vertex` | $O(\log \|V\|)$                     |
/// | `insert_edge`   | $O(\log \|V\|)$                     |
/// | `remove_vertex` | $O(\|V\| + \|E\|)$                  |
/// | `remove_edge`   | $O(\log \|V\| + d)$, $d$ the degree |
/// | `edge_size`     | $O(\|V\|)$                          |
#[derive(Clone, PartialEq, Eq)]
pub struct AdjacencyStore<V> {
    directed: bool,
    adjacency: BTreeMap<V, Vec<Adjacent<V>>>,
}

impl<V: Vertex> AdjacencyStore<V> {
    pub fn new(directed: bool) -> Self {
        Self {
            directed,
            adjacency: BTreeMap::new(),
        }
    }

    /// Returns `false` if the vertex is already present.
    pub fn insert_vertex(&mut self, v: V) -> bool {
        if self.adjacency.contains_key(&v) {
            return false;
        }
        self.adjacency.insert(v, Vec::new());
        true
    }

    /// Appends the edge, adding missing endpoints first.
    pub fn insert_edge(&mut self, edge: Edge<V>) {
        let Edge {
            source,
            sink,
            weight,
        } = edge;
        self.insert_vertex(source.clone());
        self.insert_vertex(sink.clone());
        if !self.directed {
            if let Some(list) = self.adjacency.get_mut(&sink) {
                list.push(Adjacent {
                    vertex: source.clone(),
                    weight,
                });
            }
        }
        if let Some(list) = self.adjacency.get_mut(&source) {
            list.push(Adjacent {
                vertex: sink,
                weight,
            });
        }
    }

    /// Removes a vertex with its adjacency list and every entry pointing at it.
    /// Returns `false` if it was absent.
    pub fn remove_vertex(&mut self, v: &V) -> bool {
        if self.adjacency.remove(v).is_none() {
            return false;
        }
        for list in self.adjacency.values_mut() {
            list.retain(|a| a.vertex != *v);
        }
        true
    }

    /// Removes the first `source -> sink` entry and, for undirected stores, its
    /// mirror. Returns `false` if either endpoint or the entry is missing.
    pub fn remove_edge(&mut self, source: &V, sink: &V) -> bool {
        if !self.adjacency.contains_key(sink) {
            return false;
        }
        let removed = match self.adjacency.get_mut(source) {
            None => return false,
            Some(list) => match list.iter().position(|a| a.vertex == *sink) {
                None => return false,
                Some(idx) => list.remove(idx),
            },
        };
        if !self.directed {
            if let Some(list) = self.adjacency.get_mut(sink) {
                let mirror = list
                    .iter()
                    .position(|a| a.vertex == *source && a.weight == removed.weight)
                    .or_else(|| list.iter().position(|a| a.vertex == *source));
                if let Some(idx) = mirror {
                    list.remove(idx);
                }
            }
        }
        true
    }

    /// Whether some entry leads from `source` to `sink`.
    pub fn contains_edge(&self, source: &V, sink: &V) -> bool {
        self.adjacent(source).iter().any(|a| a.vertex == *sink)
    }
}

impl<V: Vertex> QueryableGraph for AdjacencyStore<V> {
    type Vertex = V;

    fn is_directed(&self) -> bool {
        self.directed
    }

    fn vertex_size(&self) -> usize {
        self.adjacency.len()
    }

    fn iter_vertices(&self) -> Box<dyn Iterator<Item = &V> + '_> {
        Box::new(self.adjacency.keys())
    }

    fn contains_vertex(&self, v: &V) -> bool {
        self.adjacency.contains_key(v)
    }

    fn edge_size(&self) -> usize {
        let entries: usize = self.adjacency.values().map(|list| list.len()).sum();
        if self.directed {
            entries
        } else {
            entries / 2
        }
    }

    fn adjacent(&self, v: &V) -> &[Adjacent<V>] {
        self.adjacency.get(v).map(|list| list.as_slice()).unwrap_or(&[])
    }
}

impl<V: std::fmt::Debug> std::fmt::Debug for AdjacencyStore<V> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "AdjacencyStore {{")?;
        for (v, list) in self.adjacency.iter() {
            writeln!(f, "{:?}:", v)?;
            for a in list.iter() {
                writeln!(f, "  -> {:?} weighing {}", a.vertex, a.weight)?;
            }
        }
        writeln!(f, "}}")?;
        Ok(())
    }
}
