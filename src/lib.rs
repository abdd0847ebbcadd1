//! fsm-graph: a mutable labelled transition graph for finite state machines
//!
//! States are vertices identified by their own value; transitions are
//! directed edges labelled with the input that triggers them. Replaying a
//! sequence of inputs from a vertex walks the graph and yields the vertex
//! reached.
//!
//! # Core Concepts
//!
//! - **Vertex**: any `Clone + Eq + Hash + Debug` value naming a state
//! - **Edge**: any `Eq + Hash + Debug` value naming an input
//! - **VertexType**: `Basic` vertices reject undefined inputs, `Looped`
//!   vertices stay put on them
//! - **FsmGraph**: explicit, mutable store of vertices and transitions
//! - **FsmTree**: rooted store that creates targets as transitions are added
//!
//! # Example
//!
//! ```rust
//! use fsm_graph::{FsmGraph, VertexType};
//!
//! let mut turnstile = FsmGraph::new();
//! turnstile.add_vertex("Locked").unwrap();
//! turnstile.add_vertex_with_type("Unlocked", VertexType::Looped).unwrap();
//!
//! turnstile.add_transition(&"Locked", &"Unlocked", "coin").unwrap();
//! turnstile.add_transition(&"Unlocked", &"Locked", "push").unwrap();
//!
//! let end = turnstile.traverse(&"Locked", ["coin", "coin", "push"]).unwrap();
//! assert_eq!(end, "Locked");
//!
//! // Locked is a basic vertex: pushing it without a coin is an error.
//! assert!(turnstile.traverse(&"Locked", ["push"]).is_err());
//! ```
//!
//! # Concurrency
//!
//! Nothing here is synchronized. Share a graph between threads behind a
//! lock; iterators borrow the graph, so it cannot change under them.

pub mod builder;
pub mod config;
pub mod core;
pub mod graph;
mod logging;
pub mod tree;

// Re-export commonly used types
pub use builder::FsmGraphBuilder;
pub use config::FsmConfig;
pub use core::{
    Edge, ErrorKind, FiniteStateMachine, FsmError, MutableFiniteStateMachine, Result, Vertex,
    VertexType,
};
pub use graph::{FsmGraph, Vertices};
pub use tree::FsmTree;
