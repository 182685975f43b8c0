//! Arcviz Model - Architecture descriptions
//!
//! This crate defines the declarative description of a software
//! architecture in the C4 sense: users, internal systems with their
//! containers and components, external systems, and the relations
//! between them. It also holds the request parameters (perspective,
//! visual format, payload encoding) and the payload codecs.
//!
//! # Example
//!
//! ```no_run
//! use arcviz_model::Architecture;
//!
//! let arch = Architecture::load("arc.yaml").unwrap();
//! let payload = arch.encode().unwrap();
//! ```

pub mod codec;
mod error;
mod model;
mod perspective;
pub mod render;

pub use error::{ModelError, Result};
pub use model::{
    child_path, path_depth, top_level, Architecture, Component, Container, ExternalSystem,
    InternalSystem, Relation, User, PATH_SEPARATOR,
};
pub use perspective::{DataFormat, Perspective, VisualFormat};
pub use render::{RenderSettings, Renderer};
