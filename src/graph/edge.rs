/// Integer edge weights. Unweighted graphs store [DEFAULT_WEIGHT] everywhere.
pub type Weight = i64;

pub const DEFAULT_WEIGHT: Weight = 1;

/// One entry of an adjacency list: the neighbor reached and the weight of the
/// edge leading there.
#[derive(Debug, Clone, Eq, PartialEq, PartialOrd, Ord, Hash)]
pub struct Adjacent<V> {
    pub vertex: V,
    pub weight: Weight,
}

/// A directed view of an edge.
///
/// Undirected edges are stored as two entries, one per endpoint, and show up
/// once in each direction when iterated.
#[derive(Debug, Clone, Eq, PartialEq, PartialOrd, Ord, Hash)]
pub struct Edge<V> {
    pub source: V,
    pub sink: V,
    pub weight: Weight,
}

impl<V> Edge<V> {
    pub fn new(source: V, sink: V, weight: Weight) -> Self {
        Self {
            source,
            sink,
            weight,
        }
    }
}
