//! Structural invariants a [Graph](crate::graph::Graph) enforces on itself.
//!
//! A policy is fixed at construction and consulted on every addition:
//!
//! ```plain
//! add_vertex ──> validate_vertex_addition ──> commit vertex + companion edges
//!
//! add_edge ────> admit_edge ──> (scratch copy + stage edge
//!                                ──> validate_before_commit)  ──> commit
//! ```
//!
//! The scratch step only runs for policies with
//! [InvariantPolicy::VALIDATES_SCRATCH] set. A rejection at any point leaves
//! the graph exactly as it was.
mod r#trait;
pub use self::r#trait::*;
mod structural;
pub use self::structural::*;
mod reporting;
pub use self::reporting::*;
