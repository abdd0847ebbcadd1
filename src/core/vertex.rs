//! Vertex and edge bounds, and the behavioral tag carried by every vertex.
//!
//! Any type with equality and hashing can name a state or a transition
//! trigger. The bounds are expressed as traits with blanket implementations
//! so signatures stay short.

use super::error::FsmError;
use serde::{Deserialize, Serialize};
use std::fmt::{self, Debug, Display};
use std::hash::Hash;
use std::str::FromStr;

/// Value identifying a state in the graph.
///
/// A vertex's identity *is* its value: there is no separate handle. The
/// store keeps one copy as the map key and one inside the node, hence
/// `Clone`. `Debug` is used to render error messages and log fields.
///
/// # Example
///
/// ```rust
/// use fsm_graph::core::Vertex;
///
/// fn accepts_vertex<V: Vertex>(_v: V) {}
///
/// accepts_vertex("Idle");
/// accepts_vertex(42u32);
/// accepts_vertex(String::from("Running"));
/// ```
pub trait Vertex: Clone + Eq + Hash + Debug {}

impl<T: Clone + Eq + Hash + Debug> Vertex for T {}

/// Label selecting an outgoing transition from a vertex.
///
/// Labels are scoped per source vertex: the same label may leave many
/// vertices, but at most once from each.
pub trait Edge: Eq + Hash + Debug {}

impl<T: Eq + Hash + Debug + ?Sized> Edge for T {}

/// Behavioral tag deciding what an undefined transition resolves to.
///
/// The tag is fixed when the vertex is created.
///
/// # Example
///
/// ```rust
/// use fsm_graph::core::VertexType;
///
/// let parsed: VertexType = "looped".parse().unwrap();
/// assert_eq!(parsed, VertexType::Looped);
/// assert_eq!(VertexType::default(), VertexType::Basic);
/// assert_eq!(VertexType::Basic.to_string(), "basic");
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VertexType {
    /// Following an undefined transition is a lookup failure.
    #[default]
    Basic,

    /// Following an undefined transition stays on the same vertex, as if
    /// every unknown input were an implicit self-loop.
    Looped,
}

impl VertexType {
    /// Lowercase name used by `Display`, `FromStr` and serde.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Basic => "basic",
            Self::Looped => "looped",
        }
    }

    /// Whether a lookup miss on a vertex of this type loops back to it.
    pub fn loops_on_miss(&self) -> bool {
        matches!(self, Self::Looped)
    }
}

impl Display for VertexType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for VertexType {
    type Err = FsmError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "basic" => Ok(Self::Basic),
            "looped" => Ok(Self::Looped),
            other => Err(FsmError::InvalidArgument {
                message: format!("unknown vertex type [{other}], expected basic or looped"),
            }),
        }
    }
}
