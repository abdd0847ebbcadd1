//! Construction-time options for a graph.

use crate::core::VertexType;
use serde::{Deserialize, Serialize};

/// Options applied when a store is created.
///
/// Missing fields take their defaults when deserializing, so a caller can
/// load `{}` or a partial document from any serde format.
///
/// # Example
///
/// ```rust
/// use fsm_graph::{FsmConfig, FsmGraph, VertexType};
///
/// let config = FsmConfig::default().with_default_vertex_type(VertexType::Looped);
/// let graph: FsmGraph<&str, u8> = FsmGraph::with_config(config);
/// assert_eq!(graph.default_vertex_type(), VertexType::Looped);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FsmConfig {
    /// Type given to vertices added without an explicit one.
    pub default_vertex_type: VertexType,
}

impl FsmConfig {
    pub fn with_default_vertex_type(mut self, vertex_type: VertexType) -> Self {
        self.default_vertex_type = vertex_type;
        self
    }
}
