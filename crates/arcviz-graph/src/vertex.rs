//! Vertices of the architecture graph.
//!
//! Every declared element becomes one vertex carrying a copy of its
//! description. Queries branch on the variant, never on a runtime type.

use arcviz_model::{Component, Container, ExternalSystem, InternalSystem, User};
use petgraph::graph::NodeIndex;
use serde::{Deserialize, Serialize};

/// Identity of a vertex, stable for the lifetime of one graph.
pub type VertexId = NodeIndex;

/// The kind of element a vertex stands for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VertexKind {
    User,
    InternalSystem,
    ExternalSystem,
    Container,
    Component,
}

impl std::fmt::Display for VertexKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::User => "user",
            Self::InternalSystem => "internal_system",
            Self::ExternalSystem => "external_system",
            Self::Container => "container",
            Self::Component => "component",
        };
        write!(f, "{}", s)
    }
}

/// An element of the architecture bound into the graph.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Vertex {
    User(User),
    InternalSystem(InternalSystem),
    ExternalSystem(ExternalSystem),
    Container(Container),
    Component(Component),
}

impl Vertex {
    pub fn kind(&self) -> VertexKind {
        match self {
            Self::User(_) => VertexKind::User,
            Self::InternalSystem(_) => VertexKind::InternalSystem,
            Self::ExternalSystem(_) => VertexKind::ExternalSystem,
            Self::Container(_) => VertexKind::Container,
            Self::Component(_) => VertexKind::Component,
        }
    }

    /// The element's own name (not its full path).
    pub fn name(&self) -> &str {
        match self {
            Self::User(u) => &u.name,
            Self::InternalSystem(s) => &s.name,
            Self::ExternalSystem(s) => &s.name,
            Self::Container(c) => &c.name,
            Self::Component(c) => &c.name,
        }
    }

    pub fn as_user(&self) -> Option<&User> {
        match self {
            Self::User(u) => Some(u),
            _ => None,
        }
    }

    pub fn as_internal_system(&self) -> Option<&InternalSystem> {
        match self {
            Self::InternalSystem(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_external_system(&self) -> Option<&ExternalSystem> {
        match self {
            Self::ExternalSystem(s) => Some(s),
            _ => None,
        }
    }
}
