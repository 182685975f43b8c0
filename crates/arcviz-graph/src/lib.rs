//! Arcviz Graph - Architecture graph and perspective queries
//!
//! This crate turns an architecture description into a graph of its
//! elements and relations, and answers which of them a diagram at a
//! given perspective (Landscape, Context, Container, Component) shows.
//!
//! # Architecture
//!
//! The graph uses petgraph internally with additional indexes for:
//! - Path-based lookups (`system.container.component`)
//! - Edge identity by (subject, object) path pair
//! - The internal systems a request targets
//!
//! Relations between nested elements are rolled up into derived edges
//! between their top-level parents, so coarse views stay connected.
//!
//! # Example
//!
//! ```no_run
//! use arcviz_graph::{process, RenderRequest};
//! use arcviz_model::Architecture;
//!
//! let arch = Architecture::load("arc.yaml").unwrap();
//! let request = RenderRequest::new("context", arch.encode().unwrap())
//!     .with_targets(vec!["billing".to_string()]);
//!
//! let graph = process(&request).unwrap();
//! let users = graph.users().unwrap();
//! ```

mod builder;
mod edge;
mod error;
mod graph;
mod process;
mod query;
mod registry;
mod vertex;

pub use edge::{upsert, Edge, EdgeKey, Upsert, Views, DEPENDENCY_MARKER};
pub use error::{GraphError, Result};
pub use graph::{ArchGraph, GraphStats};
pub use process::{process, RenderRequest};
pub use query::View;
pub use vertex::{Vertex, VertexId, VertexKind};
