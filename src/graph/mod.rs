//! Mutable transition graph.
//!
//! `FsmGraph` owns its vertices explicitly: every vertex is added on its own
//! and transitions may only connect vertices already present.

mod fsm_graph;
mod iter;

pub use fsm_graph::FsmGraph;
pub use iter::Vertices;
