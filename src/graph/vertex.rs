use std::fmt::Debug;
use std::hash::Hash;

/// Bounds on vertex types.
///
/// Vertices are plain values compared by equality and total order. `Ord` keeps
/// the vertex set sorted, which fixes iteration order for display and for
/// every algorithm that sweeps all vertices. `Hash` serves the scratch maps of
/// the algorithms.
pub trait Vertex: Clone + Ord + Hash + Debug {}

impl<T> Vertex for T where T: Clone + Ord + Hash + Debug {}
