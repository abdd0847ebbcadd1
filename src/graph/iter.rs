//! Iteration over the vertices of a graph.

use crate::core::NodeId;
use std::collections::hash_map::Keys;
use std::iter::FusedIterator;

/// Iterator over the vertex values of an [`FsmGraph`](super::FsmGraph).
///
/// Order is unspecified. The iterator borrows the graph, so the graph
/// cannot be mutated while it is alive; calling `iter()` again restarts it.
#[derive(Clone, Debug)]
pub struct Vertices<'a, V> {
    inner: Keys<'a, V, NodeId>,
}

impl<'a, V> Vertices<'a, V> {
    pub(crate) fn new(inner: Keys<'a, V, NodeId>) -> Self {
        Self { inner }
    }
}

impl<'a, V> Iterator for Vertices<'a, V> {
    type Item = &'a V;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<V> ExactSizeIterator for Vertices<'_, V> {}

impl<V> FusedIterator for Vertices<'_, V> {}
