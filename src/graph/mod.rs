//! Graph storage and the guarded [Graph] type.
//!
//! # Layers
//!
//! [AdjacencyStore] keeps an ordered vertex set and per-vertex adjacency lists.
//! It accepts any edge at all.
//!
//! [Graph] wraps a store together with an
//! [InvariantPolicy](crate::policy::InvariantPolicy). Every addition is checked
//! by the policy, and a rejected addition leaves the graph exactly as it was.
//! The variants in [crate::variants] are nothing but a `Graph` with a
//! particular policy.
//!
//! Both layers implement [QueryableGraph], so the algorithms in
//! [crate::algorithm] work on either.
//!
//! # Exporting
//!
//! [ToPetgraph] copies a graph into a [petgraph::graph::Graph] for everything
//! this crate does not do itself.

mod vertex;
pub use self::vertex::*;
mod edge;
pub use self::edge::*;
mod r#trait;
pub use self::r#trait::*;
mod store;
pub use self::store::*;
mod guarded;
pub use self::guarded::*;
mod display;
pub use self::display::*;
mod petgraph_export;
pub use self::petgraph_export::*;

#[cfg(test)]
pub mod ops;
