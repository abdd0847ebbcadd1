//! Structured logging for graph mutations and traversals.
//!
//! Events go through `tracing` when the `tracing` feature is enabled and
//! compile to nothing otherwise.

use crate::core::{FsmError, VertexType};
use std::fmt::Debug;

/// Log a vertex being created.
pub(crate) fn log_vertex_added(vertex: &impl Debug, vertex_type: VertexType) {
    #[cfg(feature = "tracing")]
    tracing::debug!(?vertex, %vertex_type, "Vertex added");

    #[cfg(not(feature = "tracing"))]
    let _ = (vertex, vertex_type);
}

/// Log a vertex being removed along with the inbound edges scrubbed for it.
pub(crate) fn log_vertex_removed(vertex: &impl Debug, scrubbed: usize) {
    #[cfg(feature = "tracing")]
    tracing::debug!(?vertex, scrubbed, "Vertex removed");

    #[cfg(not(feature = "tracing"))]
    let _ = (vertex, scrubbed);
}

/// Log an unreachable leaf dropped after its last inbound edge went away.
pub(crate) fn log_vertex_pruned(vertex: &impl Debug) {
    #[cfg(feature = "tracing")]
    tracing::debug!(?vertex, "Vertex pruned");

    #[cfg(not(feature = "tracing"))]
    let _ = vertex;
}

pub(crate) fn log_transition_added(from: &impl Debug, to: &impl Debug, edge: &impl Debug) {
    #[cfg(feature = "tracing")]
    tracing::debug!(?from, ?to, ?edge, "Transition added");

    #[cfg(not(feature = "tracing"))]
    let _ = (from, to, edge);
}

pub(crate) fn log_transition_removed(from: &impl Debug, to: &impl Debug, edge: &impl Debug) {
    #[cfg(feature = "tracing")]
    tracing::debug!(?from, ?to, ?edge, "Transition removed");

    #[cfg(not(feature = "tracing"))]
    let _ = (from, to, edge);
}

/// Log the outcome of a traversal.
pub(crate) fn log_traversal<V: Debug>(start: &V, outcome: &Result<V, FsmError>) {
    #[cfg(feature = "tracing")]
    {
        match outcome {
            Ok(end) => tracing::debug!(?start, ?end, "Traversal complete"),
            Err(error) => tracing::debug!(?start, %error, "Traversal failed"),
        }
    }

    #[cfg(not(feature = "tracing"))]
    let _ = (start, outcome);
}

/// Log a store being emptied.
pub(crate) fn log_cleared(dropped: usize) {
    #[cfg(feature = "tracing")]
    tracing::info!(dropped, "Graph cleared");

    #[cfg(not(feature = "tracing"))]
    let _ = dropped;
}
