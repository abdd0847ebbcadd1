//! Per-vertex transition table.
//!
//! A node owns its vertex value and a table from edge label to the id of the
//! target node. Targets are referenced by [`NodeId`], never owned: the
//! [`NodeStore`](super::store::NodeStore) is the only owner of nodes, which
//! lets the table describe cycles and self-loops freely.

use super::vertex::{Edge, Vertex, VertexType};
use std::borrow::Borrow;
use std::collections::HashMap;

/// Stable index of a node's slot in the store.
///
/// Ids are only meaningful to the store that issued them and may be reused
/// once the node is removed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub(crate) struct NodeId(pub(crate) usize);

/// Outgoing transitions of one vertex plus the tag deciding lookup misses.
#[derive(Clone, Debug)]
pub(crate) struct Node<V, E> {
    id: NodeId,
    value: V,
    kind: VertexType,
    children: HashMap<E, NodeId>,
}

impl<V: Vertex, E: Edge> Node<V, E> {
    /// Create a node of the given type.
    ///
    /// This is the single construction point; the tag is fixed afterwards.
    pub(crate) fn new(id: NodeId, value: V, kind: VertexType) -> Self {
        Self {
            id,
            value,
            kind,
            children: HashMap::new(),
        }
    }

    pub fn id(&self) -> NodeId {
        self.id
    }

    pub fn value(&self) -> &V {
        &self.value
    }

    pub fn vertex_type(&self) -> VertexType {
        self.kind
    }

    /// Insert or overwrite the target for `edge`.
    pub(crate) fn add_child(&mut self, edge: E, child: NodeId) {
        self.children.insert(edge, child);
    }

    /// Whether `edge` is explicitly defined on this node.
    pub fn has_child<Q>(&self, edge: &Q) -> bool
    where
        E: Borrow<Q>,
        Q: Edge + ?Sized,
    {
        self.children.contains_key(edge)
    }

    /// Resolve `edge` to the next node.
    ///
    /// Basic nodes return `None` for an undefined edge. Looped nodes return
    /// their own id instead, so they never miss.
    pub fn child<Q>(&self, edge: &Q) -> Option<NodeId>
    where
        E: Borrow<Q>,
        Q: Edge + ?Sized,
    {
        match self.children.get(edge) {
            Some(target) => Some(*target),
            None if self.kind.loops_on_miss() => Some(self.id),
            None => None,
        }
    }

    /// Explicit target of `edge`, ignoring the looped fallback.
    pub fn explicit_child<Q>(&self, edge: &Q) -> Option<NodeId>
    where
        E: Borrow<Q>,
        Q: Edge + ?Sized,
    {
        self.children.get(edge).copied()
    }

    /// Remove the mapping for `edge`, returning its former target.
    pub(crate) fn remove_child<Q>(&mut self, edge: &Q) -> Option<NodeId>
    where
        E: Borrow<Q>,
        Q: Edge + ?Sized,
    {
        self.children.remove(edge)
    }

    /// Drop every entry that targets `target`. Returns how many were removed.
    pub(crate) fn remove_children_to(&mut self, target: NodeId) -> usize {
        let before = self.children.len();
        self.children.retain(|_, child| *child != target);
        before - self.children.len()
    }

    /// Whether any edge of this node targets `target`.
    pub fn targets(&self, target: NodeId) -> bool {
        self.children().any(|child| child == target)
    }

    pub fn child_count(&self) -> usize {
        self.children.len()
    }

    /// Target ids of all explicit transitions, one per edge.
    pub fn children(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.children.values().copied()
    }

    /// Explicit `(edge, target)` entries.
    pub fn entries(&self) -> impl Iterator<Item = (&E, NodeId)> + '_ {
        self.children.iter().map(|(edge, child)| (edge, *child))
    }
}
