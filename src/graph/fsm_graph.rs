//! The mutable finite state machine graph.

use super::iter::Vertices;
use crate::config::FsmConfig;
use crate::core::{
    Edge, FiniteStateMachine, MutableFiniteStateMachine, NodeStore, Result, Vertex, VertexType,
};
use crate::logging;
use std::borrow::Borrow;

/// Directed graph of named states connected by labelled transitions.
///
/// Vertices are added explicitly, each with a [`VertexType`] deciding what an
/// undefined transition resolves to. Transitions may only connect vertices
/// already in the graph, and each source vertex uses a given edge label at
/// most once.
///
/// The graph is not synchronized. Wrap it in a lock to share it between
/// threads.
///
/// Removing a vertex inspects the transition table of every other vertex to
/// drop edges that point at it, so it can approach O(n²) on dense graphs.
///
/// # Example
///
/// ```rust
/// use fsm_graph::{FsmGraph, VertexType};
///
/// let mut player = FsmGraph::new();
/// player.add_vertex("Stop").unwrap();
/// player.add_vertex("Play").unwrap();
/// player.add_vertex_with_type("Pause", VertexType::Looped).unwrap();
///
/// player.add_transition(&"Stop", &"Play", "play").unwrap();
/// player.add_transition(&"Play", &"Pause", "pause").unwrap();
/// player.add_transition(&"Pause", &"Play", "play").unwrap();
///
/// assert_eq!(player.traverse(&"Stop", ["play", "pause"]).unwrap(), "Pause");
/// // Pause is looped: an unknown input keeps it paused.
/// assert_eq!(player.traverse(&"Pause", ["eject"]).unwrap(), "Pause");
/// // Stop is basic: an unknown input is an error.
/// assert!(player.traverse(&"Stop", ["eject"]).is_err());
/// ```
#[derive(Clone, Debug)]
pub struct FsmGraph<V, E> {
    config: FsmConfig,
    store: NodeStore<V, E>,
}

impl<V: Vertex, E: Edge> Default for FsmGraph<V, E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V: Vertex, E: Edge> FsmGraph<V, E> {
    /// Create an empty graph whose vertices default to [`VertexType::Basic`].
    pub fn new() -> Self {
        Self::with_config(FsmConfig::default())
    }

    /// Create an empty graph with a different default vertex type.
    pub fn with_default_type(default_vertex_type: VertexType) -> Self {
        Self::with_config(FsmConfig::default().with_default_vertex_type(default_vertex_type))
    }

    pub fn with_config(config: FsmConfig) -> Self {
        Self {
            config,
            store: NodeStore::new(),
        }
    }

    pub fn config(&self) -> &FsmConfig {
        &self.config
    }

    /// Type given to vertices added without an explicit one.
    pub fn default_vertex_type(&self) -> VertexType {
        self.config.default_vertex_type
    }

    /// Add a vertex with the default type.
    ///
    /// Returns [`FsmError::VertexExists`](crate::FsmError::VertexExists) if the
    /// vertex is already present.
    pub fn add_vertex(&mut self, vertex: V) -> Result<()> {
        self.add_vertex_with_type(vertex, self.config.default_vertex_type)
    }

    /// Add a vertex with an explicit type.
    pub fn add_vertex_with_type(&mut self, vertex: V, vertex_type: VertexType) -> Result<()> {
        let id = self.store.insert(vertex, vertex_type)?;
        logging::log_vertex_added(self.store.node(id).value(), vertex_type);
        Ok(())
    }

    /// Remove a vertex together with every transition leading to it.
    pub fn remove_vertex(&mut self, vertex: &V) -> Result<()> {
        let scrubbed = self.store.remove(vertex)?;
        logging::log_vertex_removed(vertex, scrubbed);
        Ok(())
    }

    pub fn has_vertex(&self, vertex: &V) -> bool {
        self.store.contains(vertex)
    }

    pub fn vertex_type(&self, vertex: &V) -> Result<VertexType> {
        self.store.vertex_type(vertex)
    }

    /// Add `from --edge--> to`.
    ///
    /// Fails with not-found if either vertex is absent and with
    /// already-exists if `from` already has a transition on `edge`.
    pub fn add_transition(&mut self, from: &V, to: &V, edge: E) -> Result<()> {
        self.store.connect(from, to, edge)
    }

    /// Add a transition from `from` to `to` for each edge, in order.
    ///
    /// Stops at the first edge `from` already uses, keeping the edges added
    /// before it. Wrap the call if all-or-nothing behavior is needed.
    pub fn add_transitions<I>(&mut self, from: &V, to: &V, edges: I) -> Result<()>
    where
        I: IntoIterator<Item = E>,
    {
        self.store.connect_all(from, to, edges)?;
        Ok(())
    }

    /// Remove the exact transition `from --edge--> to`.
    pub fn remove_transition(&mut self, from: &V, to: &V, edge: &E) -> Result<()> {
        self.store.disconnect(from, to, edge)?;
        logging::log_transition_removed(from, to, edge);
        Ok(())
    }

    pub fn has_transition(&self, from: &V, to: &V, edge: &E) -> Result<bool> {
        self.store.has_transition(from, to, edge)
    }

    pub fn has_any_transition(&self, from: &V, to: &V) -> Result<bool> {
        self.store.has_any_transition(from, to)
    }

    /// Explicit outgoing transitions of `vertex` as `(edge, target)` pairs,
    /// in unspecified order.
    pub fn transitions_from(&self, vertex: &V) -> Result<Vec<(&E, &V)>> {
        self.store.outgoing(vertex)
    }

    /// Replay `edges` starting at `from` and return the vertex reached.
    pub fn traverse<I>(&self, from: &V, edges: I) -> Result<V>
    where
        I: IntoIterator,
        I::Item: Borrow<E>,
    {
        let outcome = self.store.traverse(from, edges);
        logging::log_traversal(from, &outcome);
        outcome
    }

    /// Replay `edges` starting at `from` and return every vertex visited,
    /// `from` included.
    pub fn traverse_path<I>(&self, from: &V, edges: I) -> Result<Vec<V>>
    where
        I: IntoIterator,
        I::Item: Borrow<E>,
    {
        self.store.traverse_path(from, edges)
    }

    pub fn size(&self) -> usize {
        self.store.len()
    }

    pub fn is_empty(&self) -> bool {
        self.store.is_empty()
    }

    /// Remove every vertex and transition. The default type is kept.
    pub fn clear(&mut self) {
        let dropped = self.store.clear();
        logging::log_cleared(dropped);
    }

    /// Iterate over vertex values in unspecified order.
    pub fn iter(&self) -> Vertices<'_, V> {
        Vertices::new(self.store.vertices())
    }
}

impl<'a, V: Vertex, E: Edge> IntoIterator for &'a FsmGraph<V, E> {
    type Item = &'a V;
    type IntoIter = Vertices<'a, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<V: Vertex, E: Edge> FiniteStateMachine<V, E> for FsmGraph<V, E> {
    fn has_vertex(&self, vertex: &V) -> bool {
        FsmGraph::has_vertex(self, vertex)
    }

    fn vertex_type(&self, vertex: &V) -> Result<VertexType> {
        FsmGraph::vertex_type(self, vertex)
    }

    fn has_transition(&self, from: &V, to: &V, edge: &E) -> Result<bool> {
        FsmGraph::has_transition(self, from, to, edge)
    }

    fn has_any_transition(&self, from: &V, to: &V) -> Result<bool> {
        FsmGraph::has_any_transition(self, from, to)
    }

    fn traverse<I>(&self, from: &V, edges: I) -> Result<V>
    where
        I: IntoIterator,
        I::Item: Borrow<E>,
    {
        FsmGraph::traverse(self, from, edges)
    }

    fn size(&self) -> usize {
        FsmGraph::size(self)
    }
}

impl<V: Vertex, E: Edge> MutableFiniteStateMachine<V, E> for FsmGraph<V, E> {
    fn add_vertex(&mut self, vertex: V) -> Result<()> {
        FsmGraph::add_vertex(self, vertex)
    }

    fn add_vertex_with_type(&mut self, vertex: V, vertex_type: VertexType) -> Result<()> {
        FsmGraph::add_vertex_with_type(self, vertex, vertex_type)
    }

    fn remove_vertex(&mut self, vertex: &V) -> Result<()> {
        FsmGraph::remove_vertex(self, vertex)
    }

    fn add_transition(&mut self, from: &V, to: &V, edge: E) -> Result<()> {
        FsmGraph::add_transition(self, from, to, edge)
    }

    fn add_transitions<I>(&mut self, from: &V, to: &V, edges: I) -> Result<()>
    where
        I: IntoIterator<Item = E>,
    {
        FsmGraph::add_transitions(self, from, to, edges)
    }

    fn remove_transition(&mut self, from: &V, to: &V, edge: &E) -> Result<()> {
        FsmGraph::remove_transition(self, from, to, edge)
    }

    fn clear(&mut self) {
        FsmGraph::clear(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::ErrorKind;
    use std::collections::HashSet;

    const START: &str = "Start";
    const END: &str = "End";

    fn start_end() -> FsmGraph<&'static str, i32> {
        let mut graph = FsmGraph::new();
        graph.add_vertex(START).unwrap();
        graph.add_vertex(END).unwrap();
        graph
    }

    #[test]
    fn simple_transition() {
        let mut graph = start_end();
        graph.add_transition(&START, &END, 1).unwrap();

        assert_eq!(graph.traverse(&START, [1]).unwrap(), END);
        assert_eq!(graph.vertex_type(&START).unwrap(), VertexType::Basic);
        assert_eq!(graph.vertex_type(&END).unwrap(), VertexType::Basic);
        assert!(graph.has_transition(&START, &END, &1).unwrap());
        assert!(graph.has_any_transition(&START, &END).unwrap());
        assert_eq!(graph.size(), 2);
    }

    #[test]
    fn looped_default_stays_on_unknown_edge() {
        let mut graph: FsmGraph<&str, i32> = FsmGraph::with_default_type(VertexType::Looped);
        graph.add_vertex(START).unwrap();

        assert_eq!(graph.traverse(&START, [1]).unwrap(), START);
        assert!(!graph.has_transition(&START, &START, &1).unwrap());
        assert_eq!(graph.vertex_type(&START).unwrap(), VertexType::Looped);
        assert_eq!(graph.size(), 1);
    }

    #[test]
    fn two_way_transition() {
        let mut graph = start_end();
        graph.add_transition(&START, &END, 1).unwrap();
        graph.add_transition(&END, &START, 1).unwrap();

        assert_eq!(graph.traverse(&START, [1, 1]).unwrap(), START);
        assert!(graph.has_any_transition(&END, &START).unwrap());
    }

    #[test]
    fn self_pointing_vertex() {
        let mut graph = start_end();
        graph.add_transition(&START, &END, 1).unwrap();
        graph.add_transition(&END, &END, 2).unwrap();

        assert_eq!(graph.traverse(&START, [1, 2]).unwrap(), END);
        assert!(!graph.has_transition(&END, &START, &2).unwrap());
        assert!(!graph.has_any_transition(&END, &START).unwrap());
        assert!(graph.has_transition(&END, &END, &2).unwrap());
    }

    #[test]
    fn adding_vertex_twice_fails() {
        let mut graph: FsmGraph<&str, i32> = FsmGraph::new();
        graph.add_vertex(START).unwrap();

        let err = graph.add_vertex_with_type(START, VertexType::Looped).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::AlreadyExists);
        assert_eq!(graph.vertex_type(&START).unwrap(), VertexType::Basic);
    }

    #[test]
    fn unknown_edge_on_basic_vertex_fails() {
        let mut graph = start_end();
        graph.add_transition(&START, &END, 1).unwrap();

        let err = graph.traverse(&START, [10]).unwrap_err();
        assert!(err.is_not_found());
        assert_eq!(graph.size(), 2);
    }

    #[test]
    fn unknown_edge_on_looped_vertex_stays() {
        let mut graph: FsmGraph<&str, i32> = FsmGraph::new();
        graph.add_vertex(START).unwrap();
        graph.add_vertex_with_type(END, VertexType::Looped).unwrap();
        graph.add_transition(&START, &END, 1).unwrap();

        assert_eq!(graph.traverse(&START, [1, 10]).unwrap(), END);
        assert_eq!(graph.vertex_type(&END).unwrap(), VertexType::Looped);
    }

    #[test]
    fn transition_from_unknown_vertex_fails() {
        let mut graph = start_end();
        graph.add_transition(&START, &END, 1).unwrap();

        assert!(graph
            .add_transition(&"Invalid", &END, 1)
            .unwrap_err()
            .is_not_found());
        assert!(graph
            .add_transition(&START, &"Invalid", 2)
            .unwrap_err()
            .is_not_found());
        assert!(!graph.has_vertex(&"Invalid"));
        assert_eq!(graph.size(), 2);
    }

    #[test]
    fn taken_edge_is_reported_before_unknown_target() {
        let mut graph = start_end();
        graph.add_transition(&START, &END, 1).unwrap();

        let err = graph.add_transition(&START, &"Ghost", 1).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::AlreadyExists);
        assert!(graph
            .add_transition(&START, &"Ghost", 2)
            .unwrap_err()
            .is_not_found());
        assert!(!graph.has_vertex(&"Ghost"));
    }

    #[test]
    fn queries_on_unknown_vertex_fail() {
        let graph = start_end();

        assert!(graph.vertex_type(&"Ghost").unwrap_err().is_not_found());
        assert!(graph
            .has_transition(&START, &"Ghost", &1)
            .unwrap_err()
            .is_not_found());
        assert!(graph
            .has_any_transition(&"Ghost", &END)
            .unwrap_err()
            .is_not_found());
        assert!(graph.traverse(&"Ghost", [1]).unwrap_err().is_not_found());
        assert!(graph.transitions_from(&"Ghost").unwrap_err().is_not_found());
    }

    #[test]
    fn remove_transition_keeps_vertices() {
        let mut graph = start_end();
        graph.add_transition(&START, &END, 1).unwrap();
        graph.add_transition(&START, &END, 10).unwrap();
        assert_eq!(graph.traverse(&START, [10]).unwrap(), END);

        graph.remove_transition(&START, &END, &10).unwrap();

        assert!(graph.has_any_transition(&START, &END).unwrap());
        assert!(graph.has_transition(&START, &END, &1).unwrap());
        assert!(!graph.has_transition(&START, &END, &10).unwrap());
        assert!(graph.has_vertex(&END));
        assert_eq!(graph.size(), 2);
        assert!(graph.traverse(&START, [10]).unwrap_err().is_not_found());
    }

    #[test]
    fn remove_transition_with_wrong_target_fails() {
        let mut graph = start_end();
        graph.add_transition(&START, &END, 1).unwrap();
        graph.add_transition(&START, &END, 10).unwrap();

        let err = graph.remove_transition(&START, &START, &10).unwrap_err();
        assert!(err.is_not_found());
        assert!(graph.has_transition(&START, &END, &10).unwrap());
        assert_eq!(graph.traverse(&START, [10]).unwrap(), END);
    }

    #[test]
    fn add_transitions_adds_every_edge() {
        let mut graph = start_end();
        graph.add_transitions(&START, &END, [1, 2, 3]).unwrap();

        for edge in [1, 2, 3] {
            assert!(graph.has_transition(&START, &END, &edge).unwrap());
        }
        assert_eq!(graph.transitions_from(&START).unwrap().len(), 3);
    }

    #[test]
    fn add_transitions_keeps_edges_before_duplicate() {
        let mut graph = start_end();
        graph.add_transition(&START, &END, 3).unwrap();

        let err = graph.add_transitions(&START, &END, [1, 2, 3, 4]).unwrap_err();
        assert!(err.is_already_exists());
        assert!(graph.has_transition(&START, &END, &1).unwrap());
        assert!(graph.has_transition(&START, &END, &2).unwrap());
        assert!(!graph.has_transition(&START, &END, &4).unwrap());
    }

    #[test]
    fn traverse_path_lists_visited_vertices() {
        let mut graph = start_end();
        graph.add_transition(&START, &END, 1).unwrap();
        graph.add_transition(&END, &START, 2).unwrap();

        let path = graph.traverse_path(&START, [1, 2, 1]).unwrap();
        assert_eq!(path, vec![START, END, START, END]);
        assert_eq!(
            graph.traverse_path(&START, Vec::<i32>::new()).unwrap(),
            vec![START]
        );
    }

    #[test]
    fn clear_empties_graph_and_keeps_default() {
        let mut graph: FsmGraph<&str, i32> = FsmGraph::with_default_type(VertexType::Looped);
        graph.add_vertex(START).unwrap();
        graph.add_vertex(END).unwrap();
        graph.add_transition(&START, &END, 1).unwrap();

        graph.clear();
        assert_eq!(graph.size(), 0);
        assert!(graph.is_empty());
        assert!(!graph.has_vertex(&START));

        graph.clear();
        assert_eq!(graph.size(), 0);
        assert_eq!(graph.default_vertex_type(), VertexType::Looped);
    }

    #[test]
    fn iterates_over_every_vertex_once() {
        let mut graph = start_end();
        graph.add_transitions(&START, &END, [1, 2, 3, 4, 5]).unwrap();

        let mut seen = HashSet::new();
        for vertex in &graph {
            assert!(seen.insert(*vertex));
        }
        assert_eq!(seen.len(), graph.size());
        assert_eq!(seen, HashSet::from([START, END]));
        assert_eq!(graph.iter().len(), 2);
    }

    #[test]
    fn usable_through_traits() {
        fn build<M: MutableFiniteStateMachine<&'static str, i32>>(fsm: &mut M) {
            fsm.add_vertex(START).unwrap();
            fsm.add_vertex(END).unwrap();
            fsm.add_transitions(&START, &END, [1, 2]).unwrap();
        }

        let mut graph = FsmGraph::new();
        build(&mut graph);

        assert!(FiniteStateMachine::has_transition(&graph, &START, &END, &2).unwrap());
        assert!(!FiniteStateMachine::is_empty(&graph));
        assert_eq!(FiniteStateMachine::size(&graph), 2);
    }
}
