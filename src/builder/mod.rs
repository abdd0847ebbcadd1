//! Builder API for ergonomic graph construction.
//!
//! Declare vertices and transitions with a fluent builder and get every
//! invariant check of the mutable graph when `build` applies them.

pub mod graph;

pub use graph::FsmGraphBuilder;
