//! Traits describing a finite state machine over a transition graph.
//!
//! `FiniteStateMachine` is the query and replay surface shared by every
//! store. `MutableFiniteStateMachine` adds the operations that build and
//! edit the graph vertex by vertex.

use super::error::Result;
use super::vertex::{Edge, Vertex, VertexType};
use std::borrow::Borrow;

/// Read-only view of a transition graph.
///
/// # Example
///
/// ```rust
/// use fsm_graph::core::FiniteStateMachine;
/// use fsm_graph::FsmGraph;
///
/// fn replay<M: FiniteStateMachine<&'static str, char>>(fsm: &M, input: &str) -> &'static str {
///     let symbols: Vec<char> = input.chars().collect();
///     fsm.traverse(&"q0", &symbols).unwrap_or("reject")
/// }
///
/// let mut fsm = FsmGraph::new();
/// fsm.add_vertex("q0").unwrap();
/// fsm.add_vertex("q1").unwrap();
/// fsm.add_transition(&"q0", &"q1", 'a').unwrap();
/// fsm.add_transition(&"q1", &"q0", 'b').unwrap();
///
/// assert_eq!(replay(&fsm, "ab"), "q0");
/// assert_eq!(replay(&fsm, "a"), "q1");
/// assert_eq!(replay(&fsm, "b"), "reject");
/// ```
pub trait FiniteStateMachine<V: Vertex, E: Edge> {
    /// Whether `vertex` is in the graph. Never fails.
    fn has_vertex(&self, vertex: &V) -> bool;

    /// Behavioral tag of `vertex`.
    fn vertex_type(&self, vertex: &V) -> Result<VertexType>;

    /// Whether `edge` leads from `from` to exactly `to`.
    ///
    /// Fails rather than returning `false` when either vertex is absent.
    /// Implicit self-loops of looped vertices do not count.
    fn has_transition(&self, from: &V, to: &V, edge: &E) -> Result<bool>;

    /// Whether any edge leads from `from` to `to`.
    fn has_any_transition(&self, from: &V, to: &V) -> Result<bool>;

    /// Follow `edges` in order starting at `from` and return the vertex
    /// reached.
    ///
    /// An empty sequence returns `from`. A basic vertex without the next
    /// edge stops the walk with a not-found error; a looped vertex stays put.
    fn traverse<I>(&self, from: &V, edges: I) -> Result<V>
    where
        I: IntoIterator,
        I::Item: Borrow<E>;

    /// Number of vertices.
    fn size(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.size() == 0
    }
}

/// A transition graph that can be edited in place.
pub trait MutableFiniteStateMachine<V: Vertex, E: Edge>: FiniteStateMachine<V, E> {
    /// Add `vertex` with the store's default type. Fails if present.
    fn add_vertex(&mut self, vertex: V) -> Result<()>;

    /// Add `vertex` with an explicit type. Fails if present.
    fn add_vertex_with_type(&mut self, vertex: V, vertex_type: VertexType) -> Result<()>;

    /// Remove `vertex` and every transition pointing at it.
    fn remove_vertex(&mut self, vertex: &V) -> Result<()>;

    /// Add `from --edge--> to`. Both vertices must exist and `from` must not
    /// already use `edge`.
    fn add_transition(&mut self, from: &V, to: &V, edge: E) -> Result<()>;

    /// Add one transition from `from` to `to` per edge, in order.
    ///
    /// Not atomic: a duplicate edge aborts the call and leaves the edges
    /// before it in place.
    fn add_transitions<I>(&mut self, from: &V, to: &V, edges: I) -> Result<()>
    where
        I: IntoIterator<Item = E>;

    /// Remove the exact transition `from --edge--> to`.
    fn remove_transition(&mut self, from: &V, to: &V, edge: &E) -> Result<()>;

    /// Remove every vertex and transition.
    fn clear(&mut self);
}
