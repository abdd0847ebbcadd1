//! Rooted transition graph that grows as transitions are added.
//!
//! Unlike [`FsmGraph`](crate::FsmGraph), an `FsmTree` never needs vertices
//! declared up front: adding a transition creates its target, and removing
//! the last transition into a leaf drops the leaf again.

use crate::core::{Edge, FiniteStateMachine, NodeId, NodeStore, Result, Vertex, VertexType};
use crate::logging;
use std::borrow::Borrow;

/// Transition graph grown from a fixed root vertex.
///
/// # Example
///
/// ```rust
/// use fsm_graph::FsmTree;
///
/// let mut tree = FsmTree::new("Stop");
/// tree.add_transition(&"Stop", "Play", 1).unwrap();
/// tree.add_transition(&"Play", "Stop", 2).unwrap();
///
/// assert_eq!(tree.size(), 2);
/// assert_eq!(tree.traverse([1, 2, 1]).unwrap(), "Play");
/// ```
#[derive(Clone, Debug)]
pub struct FsmTree<V, E> {
    default_vertex_type: VertexType,
    root: NodeId,
    store: NodeStore<V, E>,
}

impl<V: Vertex, E: Edge> FsmTree<V, E> {
    /// Create a tree holding only `root`, with basic vertices by default.
    pub fn new(root: V) -> Self {
        Self::with_default_type(root, VertexType::Basic)
    }

    /// Create a tree holding only `root`. The root and every vertex created
    /// without an explicit type get `default_vertex_type`.
    pub fn with_default_type(root: V, default_vertex_type: VertexType) -> Self {
        let mut store = NodeStore::new();
        let (root, _) = store.get_or_insert(root, default_vertex_type);
        logging::log_vertex_added(store.node(root).value(), default_vertex_type);
        Self {
            default_vertex_type,
            root,
            store,
        }
    }

    pub fn root(&self) -> &V {
        self.store.node(self.root).value()
    }

    pub fn default_vertex_type(&self) -> VertexType {
        self.default_vertex_type
    }

    /// Add `from --edge--> to`, creating `to` with the default type if it
    /// does not exist yet.
    pub fn add_transition(&mut self, from: &V, to: V, edge: E) -> Result<()> {
        self.add_transition_with_type(from, to, edge, self.default_vertex_type)
    }

    /// Add `from --edge--> to`, creating `to` with `vertex_type` if it does
    /// not exist yet. An existing `to` keeps its type.
    ///
    /// `from` must already be in the tree and must not use `edge` yet; on
    /// failure nothing is created.
    pub fn add_transition_with_type(
        &mut self,
        from: &V,
        to: V,
        edge: E,
        vertex_type: VertexType,
    ) -> Result<()> {
        let from_id = self.store.id_of(from)?;
        self.store.ensure_edge_free(from_id, &edge)?;

        let (to_id, created) = self.store.get_or_insert(to, vertex_type);
        if created {
            logging::log_vertex_added(self.store.node(to_id).value(), vertex_type);
        }
        self.store.connect_ids(from_id, to_id, edge)
    }

    /// Remove the exact transition `from --edge--> to`.
    ///
    /// If `to` is left with no outgoing transitions and nothing else points
    /// at it, it is dropped from the tree. The root is never dropped.
    pub fn remove_transition(&mut self, from: &V, to: &V, edge: &E) -> Result<()> {
        let to_id = self.store.disconnect(from, to, edge)?;
        logging::log_transition_removed(from, to, edge);

        if to_id != self.root
            && self.store.node(to_id).child_count() == 0
            && !self.store.has_inbound(to_id)
        {
            self.store.remove(to)?;
            logging::log_vertex_pruned(to);
        }
        Ok(())
    }

    pub fn has_vertex(&self, vertex: &V) -> bool {
        self.store.contains(vertex)
    }

    pub fn vertex_type(&self, vertex: &V) -> Result<VertexType> {
        self.store.vertex_type(vertex)
    }

    pub fn has_transition(&self, from: &V, to: &V, edge: &E) -> Result<bool> {
        self.store.has_transition(from, to, edge)
    }

    pub fn has_any_transition(&self, from: &V, to: &V) -> Result<bool> {
        self.store.has_any_transition(from, to)
    }

    /// Replay `edges` from the root.
    pub fn traverse<I>(&self, edges: I) -> Result<V>
    where
        I: IntoIterator,
        I::Item: Borrow<E>,
    {
        let outcome = self
            .store
            .walk(self.root, edges)
            .map(|end| self.store.node(end).value().clone());
        logging::log_traversal(self.root(), &outcome);
        outcome
    }

    /// Replay `edges` from any vertex of the tree.
    pub fn traverse_from<I>(&self, from: &V, edges: I) -> Result<V>
    where
        I: IntoIterator,
        I::Item: Borrow<E>,
    {
        let outcome = self.store.traverse(from, edges);
        logging::log_traversal(from, &outcome);
        outcome
    }

    pub fn size(&self) -> usize {
        self.store.len()
    }

    /// Vertex values in unspecified order.
    pub fn vertices(&self) -> impl Iterator<Item = &V> + '_ {
        self.store.vertices()
    }
}

impl<V: Vertex, E: Edge> FiniteStateMachine<V, E> for FsmTree<V, E> {
    fn has_vertex(&self, vertex: &V) -> bool {
        FsmTree::has_vertex(self, vertex)
    }

    fn vertex_type(&self, vertex: &V) -> Result<VertexType> {
        FsmTree::vertex_type(self, vertex)
    }

    fn has_transition(&self, from: &V, to: &V, edge: &E) -> Result<bool> {
        FsmTree::has_transition(self, from, to, edge)
    }

    fn has_any_transition(&self, from: &V, to: &V) -> Result<bool> {
        FsmTree::has_any_transition(self, from, to)
    }

    fn traverse<I>(&self, from: &V, edges: I) -> Result<V>
    where
        I: IntoIterator,
        I::Item: Borrow<E>,
    {
        self.traverse_from(from, edges)
    }

    fn size(&self) -> usize {
        FsmTree::size(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const START: &str = "Start";
    const END: &str = "End";

    #[test]
    fn simple_transition_creates_target() {
        let mut tree: FsmTree<&str, i32> = FsmTree::new(START);
        tree.add_transition(&START, END, 1).unwrap();

        assert_eq!(tree.traverse([1]).unwrap(), END);
        assert_eq!(tree.size(), 2);
        assert_eq!(tree.vertex_type(&END).unwrap(), VertexType::Basic);
    }

    #[test]
    fn looped_root_stays_on_unknown_edge() {
        let tree: FsmTree<&str, i32> = FsmTree::with_default_type(START, VertexType::Looped);

        assert_eq!(tree.traverse([1]).unwrap(), START);
        assert_eq!(tree.root(), &START);
    }

    #[test]
    fn two_way_and_self_pointing() {
        let mut tree: FsmTree<&str, i32> = FsmTree::new(START);
        tree.add_transition(&START, END, 1).unwrap();
        tree.add_transition(&END, START, 1).unwrap();
        tree.add_transition(&END, END, 2).unwrap();

        assert_eq!(tree.traverse([1, 1]).unwrap(), START);
        assert_eq!(tree.traverse([1, 2, 2]).unwrap(), END);
        assert_eq!(tree.size(), 2);
    }

    #[test]
    fn duplicate_edge_fails_without_creating_target() {
        let mut tree: FsmTree<&str, i32> = FsmTree::new(START);
        tree.add_transition(&START, END, 1).unwrap();

        let err = tree.add_transition(&START, "Other", 1).unwrap_err();
        assert!(err.is_already_exists());
        assert!(!tree.has_vertex(&"Other"));
        assert_eq!(tree.size(), 2);
    }

    #[test]
    fn unknown_source_fails() {
        let mut tree: FsmTree<&str, i32> = FsmTree::new(START);

        let err = tree.add_transition(&"Invalid", END, 1).unwrap_err();
        assert!(err.is_not_found());
        assert!(!tree.has_vertex(&END));
    }

    #[test]
    fn explicit_type_applies_to_new_target_only() {
        let mut tree: FsmTree<&str, i32> = FsmTree::new(START);
        tree.add_transition_with_type(&START, END, 1, VertexType::Looped)
            .unwrap();
        tree.add_transition_with_type(&START, END, 2, VertexType::Basic)
            .unwrap();

        assert_eq!(tree.vertex_type(&END).unwrap(), VertexType::Looped);
        assert_eq!(tree.traverse([1, 10]).unwrap(), END);
        assert!(tree.traverse([10]).unwrap_err().is_not_found());
    }

    #[test]
    fn traverse_from_inner_vertex() {
        let mut tree: FsmTree<&str, i32> = FsmTree::new(START);
        tree.add_transition(&START, END, 1).unwrap();
        tree.add_transition(&END, START, 1).unwrap();
        tree.add_transition(&END, "Intermediate", 2).unwrap();

        assert_eq!(tree.traverse_from(&END, [2]).unwrap(), "Intermediate");
    }

    #[test]
    fn removing_one_of_several_edges_keeps_target() {
        let mut tree: FsmTree<&str, i32> = FsmTree::new(START);
        tree.add_transition(&START, END, 1).unwrap();
        tree.add_transition(&START, END, 10).unwrap();

        tree.remove_transition(&START, &END, &10).unwrap();

        assert!(tree.has_transition(&START, &END, &1).unwrap());
        assert!(!tree.has_transition(&START, &END, &10).unwrap());
        assert!(tree.has_vertex(&END));
        assert_eq!(tree.size(), 2);
        assert!(tree.traverse([10]).unwrap_err().is_not_found());
    }

    #[test]
    fn removing_with_wrong_target_fails() {
        let mut tree: FsmTree<&str, i32> = FsmTree::new(START);
        tree.add_transition(&START, END, 1).unwrap();
        tree.add_transition(&START, END, 10).unwrap();

        let err = tree.remove_transition(&START, &START, &10).unwrap_err();
        assert!(err.is_not_found());
        assert_eq!(tree.traverse([10]).unwrap(), END);
    }

    #[test]
    fn removing_last_edge_prunes_leaf() {
        let mut tree: FsmTree<&str, i32> = FsmTree::new(START);
        tree.add_transition(&START, END, 1).unwrap();
        tree.add_transition(&START, "someState", 10).unwrap();
        assert_eq!(tree.traverse([10]).unwrap(), "someState");

        tree.remove_transition(&START, &"someState", &10).unwrap();

        assert!(tree.has_transition(&START, &END, &1).unwrap());
        assert_eq!(tree.size(), 2);
        assert!(!tree.has_vertex(&"someState"));
        assert!(tree
            .has_transition(&START, &"someState", &10)
            .unwrap_err()
            .is_not_found());
        assert!(tree.traverse([10]).unwrap_err().is_not_found());
    }

    #[test]
    fn vertex_with_outgoing_edges_is_not_pruned() {
        let mut tree: FsmTree<&str, i32> = FsmTree::new(START);
        tree.add_transition(&START, END, 1).unwrap();
        tree.add_transition(&END, "Next", 1).unwrap();

        tree.remove_transition(&START, &END, &1).unwrap();

        assert!(tree.has_vertex(&END));
        assert_eq!(tree.size(), 3);
    }

    #[test]
    fn root_is_never_pruned() {
        let mut tree: FsmTree<&str, i32> = FsmTree::new(START);
        tree.add_transition(&START, START, 1).unwrap();

        tree.remove_transition(&START, &START, &1).unwrap();

        assert!(tree.has_vertex(&START));
        assert_eq!(tree.size(), 1);
    }

    #[test]
    fn vertices_lists_every_value() {
        let mut tree: FsmTree<&str, i32> = FsmTree::new(START);
        tree.add_transition(&START, END, 1).unwrap();

        let mut values: Vec<_> = tree.vertices().copied().collect();
        values.sort();
        assert_eq!(values, vec![END, START]);
    }
}
