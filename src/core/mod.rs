//! Core transition-graph types.
//!
//! This module contains the pieces every store is built from:
//! - `Vertex`/`Edge` bounds and the `VertexType` tag
//! - the `FiniteStateMachine` traits and the `FsmError` taxonomy
//!
//! The node arena behind every store stays crate-private: callers only
//! ever name vertices by value, so no handle can outlive its vertex.

mod error;
mod machine;
mod node;
mod store;
mod vertex;

pub use error::{ErrorKind, FsmError, Result};
pub use machine::{FiniteStateMachine, MutableFiniteStateMachine};
pub(crate) use node::NodeId;
pub(crate) use store::NodeStore;
pub use vertex::{Edge, Vertex, VertexType};
