//! Slot arena owning every node of a graph.
//!
//! Nodes live in `slots`, addressed by [`NodeId`]. A side index maps each
//! vertex value to its slot. Adjacency tables only hold ids, so the store is
//! the sole owner and removing a vertex must scrub every table that still
//! points at it.

use super::error::{FsmError, Result};
use super::node::{Node, NodeId};
use super::vertex::{Edge, Vertex, VertexType};
use crate::logging;
use std::borrow::Borrow;
use std::collections::hash_map::Keys;
use std::collections::HashMap;

/// Owner of all nodes, keyed by vertex value.
#[derive(Clone, Debug)]
pub(crate) struct NodeStore<V, E> {
    slots: Vec<Option<Node<V, E>>>,
    free: Vec<usize>,
    index: HashMap<V, NodeId>,
}

impl<V: Vertex, E: Edge> Default for NodeStore<V, E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V: Vertex, E: Edge> NodeStore<V, E> {
    pub fn new() -> Self {
        Self {
            slots: Vec::new(),
            free: Vec::new(),
            index: HashMap::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.index.len()
    }

    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }

    pub fn contains(&self, vertex: &V) -> bool {
        self.index.contains_key(vertex)
    }

    /// Id of the node holding `vertex`.
    pub fn id_of(&self, vertex: &V) -> Result<NodeId> {
        self.index
            .get(vertex)
            .copied()
            .ok_or_else(|| FsmError::vertex_not_found(vertex))
    }

    /// Node holding `vertex`.
    pub fn lookup(&self, vertex: &V) -> Result<&Node<V, E>> {
        let id = self.id_of(vertex)?;
        Ok(self.node(id))
    }

    /// Node behind an id handed out by this store.
    ///
    /// Ids in the index and in adjacency tables always point at live slots;
    /// removal scrubs both before freeing a slot.
    pub fn node(&self, id: NodeId) -> &Node<V, E> {
        self.slots[id.0]
            .as_ref()
            .expect("node id refers to a freed slot")
    }

    fn node_mut(&mut self, id: NodeId) -> &mut Node<V, E> {
        self.slots[id.0]
            .as_mut()
            .expect("node id refers to a freed slot")
    }

    /// Create a node for `vertex`. Fails if the vertex is already present.
    pub fn insert(&mut self, vertex: V, kind: VertexType) -> Result<NodeId> {
        if self.index.contains_key(&vertex) {
            return Err(FsmError::vertex_exists(&vertex));
        }
        Ok(self.allocate(vertex, kind))
    }

    /// Id of `vertex`, creating it with `kind` if absent.
    ///
    /// An existing node keeps its original type. The flag reports whether a
    /// node was created.
    pub fn get_or_insert(&mut self, vertex: V, kind: VertexType) -> (NodeId, bool) {
        match self.index.get(&vertex) {
            Some(id) => (*id, false),
            None => (self.allocate(vertex, kind), true),
        }
    }

    fn allocate(&mut self, vertex: V, kind: VertexType) -> NodeId {
        let id = match self.free.pop() {
            Some(slot) => NodeId(slot),
            None => {
                self.slots.push(None);
                NodeId(self.slots.len() - 1)
            }
        };
        self.slots[id.0] = Some(Node::new(id, vertex.clone(), kind));
        self.index.insert(vertex, id);
        id
    }

    /// Remove `vertex` and every edge pointing at it.
    ///
    /// Scans all remaining nodes, so this costs O(V * out-degree) on dense
    /// graphs. Returns the number of inbound edges scrubbed.
    pub fn remove(&mut self, vertex: &V) -> Result<usize> {
        let id = self.id_of(vertex)?;

        let mut scrubbed = 0;
        for slot in self.slots.iter_mut() {
            if let Some(node) = slot {
                if node.id() != id && node.child_count() != 0 {
                    scrubbed += node.remove_children_to(id);
                }
            }
        }

        self.index.remove(vertex);
        self.slots[id.0] = None;
        self.free.push(id.0);
        Ok(scrubbed)
    }

    /// Add `from --edge--> to`. Both vertices must exist and `edge` must be
    /// free on `from`.
    ///
    /// A taken edge is reported before a missing `to`.
    pub fn connect(&mut self, from: &V, to: &V, edge: E) -> Result<()> {
        let from_id = self.id_of(from)?;
        self.ensure_edge_free(from_id, &edge)?;
        let to_id = self.id_of(to)?;
        self.link(from_id, to_id, edge);
        Ok(())
    }

    /// Add `edge` on `from_id` targeting `to_id`, refusing duplicates.
    pub fn connect_ids(&mut self, from_id: NodeId, to_id: NodeId, edge: E) -> Result<()> {
        self.ensure_edge_free(from_id, &edge)?;
        self.link(from_id, to_id, edge);
        Ok(())
    }

    /// Fails with `TransitionExists` if `from_id` already uses `edge`.
    pub fn ensure_edge_free(&self, from_id: NodeId, edge: &E) -> Result<()> {
        let from_node = self.node(from_id);
        if from_node.has_child(edge) {
            return Err(FsmError::transition_exists(from_node.value(), edge));
        }
        Ok(())
    }

    fn link(&mut self, from_id: NodeId, to_id: NodeId, edge: E) {
        logging::log_transition_added(
            self.node(from_id).value(),
            self.node(to_id).value(),
            &edge,
        );
        self.node_mut(from_id).add_child(edge, to_id);
    }

    /// Add one transition per edge, in order.
    ///
    /// Each duplicate check sees the edges already added by this call. The
    /// first duplicate stops the loop and earlier edges stay committed.
    pub fn connect_all<I>(&mut self, from: &V, to: &V, edges: I) -> Result<usize>
    where
        I: IntoIterator<Item = E>,
    {
        let from_id = self.id_of(from)?;
        let to_id = self.id_of(to)?;

        let mut added = 0;
        for edge in edges {
            self.connect_ids(from_id, to_id, edge)?;
            added += 1;
        }
        Ok(added)
    }

    /// Whether `edge` maps `from` to exactly `to`. Fails if either vertex is
    /// absent.
    pub fn has_transition(&self, from: &V, to: &V, edge: &E) -> Result<bool> {
        let from_node = self.lookup(from)?;
        let to_id = self.id_of(to)?;
        Ok(from_node.explicit_child(edge) == Some(to_id))
    }

    /// Whether any edge of `from` targets `to`. Fails if either vertex is
    /// absent.
    pub fn has_any_transition(&self, from: &V, to: &V) -> Result<bool> {
        let from_node = self.lookup(from)?;
        let to_id = self.id_of(to)?;
        Ok(from_node.targets(to_id))
    }

    /// Remove the exact transition `from --edge--> to`.
    ///
    /// Returns the id of `to` so callers can inspect it afterwards.
    pub fn disconnect(&mut self, from: &V, to: &V, edge: &E) -> Result<NodeId> {
        if !self.has_transition(from, to, edge)? {
            return Err(FsmError::transition_not_found(from, to, edge));
        }
        let from_id = self.id_of(from)?;
        let to_id = self.id_of(to)?;
        self.node_mut(from_id).remove_child(edge);
        Ok(to_id)
    }

    /// Whether any node other than `target` itself has an edge to it.
    pub fn has_inbound(&self, target: NodeId) -> bool {
        self.nodes()
            .filter(|node| node.id() != target)
            .any(|node| node.targets(target))
    }

    pub fn vertex_type(&self, vertex: &V) -> Result<VertexType> {
        Ok(self.lookup(vertex)?.vertex_type())
    }

    /// Resolve one edge from `current`.
    fn step(&self, current: NodeId, edge: &E) -> Result<NodeId> {
        let node = self.node(current);
        node.child(edge)
            .ok_or_else(|| FsmError::edge_not_found(node.value(), edge))
    }

    /// Follow `edges` from `start` and return the id of the final node.
    pub fn walk<I>(&self, start: NodeId, edges: I) -> Result<NodeId>
    where
        I: IntoIterator,
        I::Item: Borrow<E>,
    {
        edges
            .into_iter()
            .try_fold(start, |current, edge| self.step(current, edge.borrow()))
    }

    /// Follow `edges` from `from` and return the final vertex value.
    pub fn traverse<I>(&self, from: &V, edges: I) -> Result<V>
    where
        I: IntoIterator,
        I::Item: Borrow<E>,
    {
        let start = self.id_of(from)?;
        let end = self.walk(start, edges)?;
        Ok(self.node(end).value().clone())
    }

    /// Like [`traverse`](Self::traverse) but collect every visited vertex,
    /// starting with `from`.
    pub fn traverse_path<I>(&self, from: &V, edges: I) -> Result<Vec<V>>
    where
        I: IntoIterator,
        I::Item: Borrow<E>,
    {
        let start = self.id_of(from)?;
        let mut path = vec![self.node(start).value().clone()];
        let mut current = start;
        for edge in edges {
            current = self.step(current, edge.borrow())?;
            path.push(self.node(current).value().clone());
        }
        Ok(path)
    }

    /// Explicit outgoing transitions of `vertex` as `(edge, target)` pairs.
    pub fn outgoing(&self, vertex: &V) -> Result<Vec<(&E, &V)>> {
        let node = self.lookup(vertex)?;
        Ok(node
            .entries()
            .map(|(edge, target)| (edge, self.node(target).value()))
            .collect())
    }

    /// Live nodes in slot order.
    pub fn nodes(&self) -> impl Iterator<Item = &Node<V, E>> + '_ {
        self.slots.iter().flatten()
    }

    /// Vertex values currently stored, in hash order.
    pub fn vertices(&self) -> Keys<'_, V, NodeId> {
        self.index.keys()
    }

    /// Drop every node. Returns how many were dropped.
    pub fn clear(&mut self) -> usize {
        let dropped = self.index.len();
        self.slots.clear();
        self.free.clear();
        self.index.clear();
        dropped
    }
}
