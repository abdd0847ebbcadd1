//! Builder for constructing transition graphs.

use crate::config::FsmConfig;
use crate::core::{Edge, Result, Vertex, VertexType};
use crate::graph::FsmGraph;

/// Builder for constructing an [`FsmGraph`] with a fluent API.
///
/// Vertices and transitions are recorded in declaration order and applied
/// by [`build`](Self::build): all vertices first, then all transitions.
pub struct FsmGraphBuilder<V, E> {
    config: FsmConfig,
    vertices: Vec<(V, Option<VertexType>)>,
    transitions: Vec<(V, V, E)>,
}

impl<V: Vertex, E: Edge> FsmGraphBuilder<V, E> {
    /// Create a new builder.
    pub fn new() -> Self {
        Self {
            config: FsmConfig::default(),
            vertices: Vec::new(),
            transitions: Vec::new(),
        }
    }

    /// Start from existing options.
    pub fn with_config(mut self, config: FsmConfig) -> Self {
        self.config = config;
        self
    }

    /// Set the type given to vertices declared without one.
    pub fn default_vertex_type(mut self, vertex_type: VertexType) -> Self {
        self.config.default_vertex_type = vertex_type;
        self
    }

    /// Declare a vertex with the default type.
    pub fn vertex(mut self, vertex: V) -> Self {
        self.vertices.push((vertex, None));
        self
    }

    /// Declare a vertex with an explicit type.
    pub fn vertex_with_type(mut self, vertex: V, vertex_type: VertexType) -> Self {
        self.vertices.push((vertex, Some(vertex_type)));
        self
    }

    /// Declare a transition. Both ends must be declared as vertices.
    pub fn transition(mut self, from: V, to: V, edge: E) -> Self {
        self.transitions.push((from, to, edge));
        self
    }

    /// Declare one transition from `from` to `to` per edge.
    pub fn transitions<I>(mut self, from: V, to: V, edges: I) -> Self
    where
        I: IntoIterator<Item = E>,
    {
        self.transitions.extend(
            edges
                .into_iter()
                .map(|edge| (from.clone(), to.clone(), edge)),
        );
        self
    }

    /// Build the graph.
    /// Returns the first error raised while applying the declarations.
    pub fn build(self) -> Result<FsmGraph<V, E>> {
        let mut graph = FsmGraph::with_config(self.config);

        for (vertex, vertex_type) in self.vertices {
            match vertex_type {
                Some(vertex_type) => graph.add_vertex_with_type(vertex, vertex_type)?,
                None => graph.add_vertex(vertex)?,
            }
        }

        for (from, to, edge) in self.transitions {
            graph.add_transition(&from, &to, edge)?;
        }

        Ok(graph)
    }
}

impl<V: Vertex, E: Edge> Default for FsmGraphBuilder<V, E> {
    fn default() -> Self {
        Self::new()
    }
}
