//! Graph algorithms
//!
//! Each algorithm is an extension trait with a blanket implementation over
//! [QueryableGraph](crate::graph::QueryableGraph). Bring the traits into scope
//! with `use graphzoo::algorithm::*`.
mod traversal;
pub use self::traversal::*;
mod tree_display;
pub use self::tree_display::*;
mod distance;
pub use self::distance::*;
mod cycle;
pub use self::cycle::*;
mod bipartite;
pub use self::bipartite::*;
mod toposort;
pub use self::toposort::*;
mod shortest_path;
pub use self::shortest_path::*;
mod properties;
pub use self::properties::*;
