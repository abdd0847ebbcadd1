//! Error taxonomy for graph operations.

use std::fmt::Debug;
use thiserror::Error;

/// Crate-wide result alias.
pub type Result<T> = std::result::Result<T, FsmError>;

/// Broad category of an [`FsmError`].
///
/// Lets callers tell "nothing there" apart from "already there" without
/// matching on every variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    NotFound,
    AlreadyExists,
    InvalidArgument,
}

/// Errors returned by graph and tree operations.
///
/// Vertices and edges are rendered with `Debug` so the error does not carry
/// the caller's type parameters.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum FsmError {
    /// A vertex with this value is already in the store.
    #[error("Vertex [{vertex}] is already added to the graph")]
    VertexExists { vertex: String },

    /// The source vertex already has an outgoing transition on this edge.
    #[error("Transition already exists from [{from}] on edge [{edge}]")]
    TransitionExists { from: String, edge: String },

    /// The store has no vertex with this value.
    #[error("Graph does not contain the vertex [{vertex}]")]
    VertexNotFound { vertex: String },

    /// A basic vertex was asked to follow an edge it does not define.
    #[error("Vertex [{vertex}] has no transition on edge [{edge}]")]
    EdgeNotFound { vertex: String, edge: String },

    /// The exact `from --edge--> to` transition does not exist.
    #[error("Transition not found from [{from}] to [{to}] on edge [{edge}]")]
    TransitionNotFound {
        from: String,
        to: String,
        edge: String,
    },

    /// An argument could not be interpreted.
    #[error("Invalid argument: {message}")]
    InvalidArgument { message: String },
}

impl FsmError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::VertexExists { .. } | Self::TransitionExists { .. } => ErrorKind::AlreadyExists,
            Self::VertexNotFound { .. }
            | Self::EdgeNotFound { .. }
            | Self::TransitionNotFound { .. } => ErrorKind::NotFound,
            Self::InvalidArgument { .. } => ErrorKind::InvalidArgument,
        }
    }

    pub fn is_not_found(&self) -> bool {
        self.kind() == ErrorKind::NotFound
    }

    pub fn is_already_exists(&self) -> bool {
        self.kind() == ErrorKind::AlreadyExists
    }

    pub(crate) fn vertex_exists(vertex: &impl Debug) -> Self {
        Self::VertexExists {
            vertex: format!("{vertex:?}"),
        }
    }

    pub(crate) fn vertex_not_found(vertex: &impl Debug) -> Self {
        Self::VertexNotFound {
            vertex: format!("{vertex:?}"),
        }
    }

    pub(crate) fn transition_exists(from: &impl Debug, edge: &impl Debug) -> Self {
        Self::TransitionExists {
            from: format!("{from:?}"),
            edge: format!("{edge:?}"),
        }
    }

    pub(crate) fn edge_not_found(vertex: &impl Debug, edge: &impl Debug) -> Self {
        Self::EdgeNotFound {
            vertex: format!("{vertex:?}"),
            edge: format!("{edge:?}"),
        }
    }

    pub(crate) fn transition_not_found(
        from: &impl Debug,
        to: &impl Debug,
        edge: &impl Debug,
    ) -> Self {
        Self::TransitionNotFound {
            from: format!("{from:?}"),
            to: format!("{to:?}"),
            edge: format!("{edge:?}"),
        }
    }
}
