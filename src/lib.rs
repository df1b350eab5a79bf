//! Adjacency-list graphs over arbitrary ordered vertex types, with
//! invariant-enforcing variants and classic graph metrics.
//!
//! A single [graph::Graph] type carries an [policy::InvariantPolicy] chosen at
//! construction. The policy decides which mutations are accepted, so a
//! [variants::DirectedAcyclicGraph] can never hold a directed cycle and a
//! [variants::BipartiteGraph] always stays two-colorable. Rejected mutations
//! leave the graph untouched.
//!
//! Algorithms live in [algorithm] as extension traits over
//! [graph::QueryableGraph], so they run equally on a guarded graph and on a
//! bare [graph::AdjacencyStore].
//!
//! ```rust
//! use graphzoo::{algorithm::*, graph::*, variants::*};
//!
//! let mut g = UndirectedGraph::new();
//! g.add_edge(1, 2).unwrap();
//! g.add_edge(2, 3).unwrap();
//! g.add_edge(3, 4).unwrap();
//! g.add_edge(4, 1).unwrap();
//! g.add_edge(2, 4).unwrap();
//! assert_eq!(g.degree(&2).unwrap(), 3);
//! assert_eq!(g.distance(&1, &3).unwrap(), Some(2));
//! assert_eq!(g.girth(), Some(3));
//! ```
pub mod algorithm;
mod error;
pub use self::error::*;
pub mod graph;
pub mod palette;
pub mod policy;
pub mod variants;
