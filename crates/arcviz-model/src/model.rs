//! The architecture description.
//!
//! These types mirror the `arc.yaml` document: a flat list of users,
//! internal systems (with their containers and components), external
//! systems and the relations between them. Nested elements are addressed
//! by dotted paths such as `billing.api.invoices`.

use serde::{Deserialize, Serialize};

/// Separator between the segments of an element path.
pub const PATH_SEPARATOR: char = '.';

/// A person who uses the software.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub name: String,
    #[serde(default)]
    pub role: String,
    #[serde(default)]
    pub desc: String,
}

/// A software system owned by the application.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InternalSystem {
    pub name: String,
    #[serde(default)]
    pub role: String,
    #[serde(default)]
    pub desc: String,
    #[serde(default)]
    pub containers: Vec<Container>,
}

/// A runtime unit inside an internal system.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Container {
    pub name: String,
    #[serde(default)]
    pub role: String,
    #[serde(default)]
    pub desc: String,
    #[serde(default)]
    pub runtime: String,
    #[serde(default)]
    pub technology: String,
    #[serde(default)]
    pub components: Vec<Component>,
}

/// A component implemented inside a container.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Component {
    pub name: String,
    #[serde(default)]
    pub role: String,
    #[serde(default)]
    pub desc: String,
    /// Reference to the code implementing the component.
    #[serde(default)]
    pub code: String,
}

/// A software system outside the application boundary.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExternalSystem {
    pub name: String,
    #[serde(default)]
    pub role: String,
    #[serde(default)]
    pub desc: String,
}

/// A directed relation between two element paths.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Relation {
    pub subject: String,
    pub object: String,
    /// Label drawn on the arrow.
    #[serde(default)]
    pub pointer: String,
}

impl Relation {
    pub fn new(
        subject: impl Into<String>,
        object: impl Into<String>,
        pointer: impl Into<String>,
    ) -> Self {
        Self {
            subject: subject.into(),
            object: object.into(),
            pointer: pointer.into(),
        }
    }

    pub fn subject_depth(&self) -> usize {
        path_depth(&self.subject)
    }

    pub fn object_depth(&self) -> usize {
        path_depth(&self.object)
    }

    /// Sum of the subject and object path depths.
    pub fn combined_depth(&self) -> usize {
        self.subject_depth() + self.object_depth()
    }

    /// True when either end addresses a container or component.
    pub fn is_nested(&self) -> bool {
        self.subject_depth() > 1 || self.object_depth() > 1
    }
}

/// Number of segments in a dotted element path.
pub fn path_depth(path: &str) -> usize {
    path.split(PATH_SEPARATOR).count()
}

/// The top-level element a path belongs to.
pub fn top_level(path: &str) -> &str {
    path.split(PATH_SEPARATOR).next().unwrap_or(path)
}

/// Joins a parent path and a child name.
pub fn child_path(parent: &str, child: &str) -> String {
    format!("{parent}{PATH_SEPARATOR}{child}")
}

/// The complete description of a software architecture.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Architecture {
    #[serde(default)]
    pub app: String,
    #[serde(default)]
    pub desc: String,
    #[serde(default)]
    pub users: Vec<User>,
    #[serde(default, rename = "internal-systems")]
    pub internal_systems: Vec<InternalSystem>,
    #[serde(default, rename = "external-systems")]
    pub external_systems: Vec<ExternalSystem>,
    #[serde(default)]
    pub relations: Vec<Relation>,
}

impl Architecture {
    /// Returns true if the description declares no elements at all.
    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
            && self.internal_systems.is_empty()
            && self.external_systems.is_empty()
    }

    /// Finds an internal system by name.
    pub fn internal_system(&self, name: &str) -> Option<&InternalSystem> {
        self.internal_systems.iter().find(|s| s.name == name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_path_depth() {
        assert_eq!(path_depth("billing"), 1);
        assert_eq!(path_depth("billing.api"), 2);
        assert_eq!(path_depth("billing.api.invoices"), 3);
    }

    #[test]
    fn test_top_level() {
        assert_eq!(top_level("billing.api.invoices"), "billing");
        assert_eq!(top_level("billing"), "billing");
    }

    #[test]
    fn test_relation_depths() {
        let top = Relation::new("u1", "s1", "use");
        assert_eq!(top.combined_depth(), 2);
        assert!(!top.is_nested());

        let nested = Relation::new("s1.c1", "s2.c1.k1", "call");
        assert_eq!(nested.subject_depth(), 2);
        assert_eq!(nested.object_depth(), 3);
        assert_eq!(nested.combined_depth(), 5);
        assert!(nested.is_nested());
    }

    #[test]
    fn test_child_path() {
        assert_eq!(child_path("s1", "c1"), "s1.c1");
        assert_eq!(child_path(&child_path("s1", "c1"), "k"), "s1.c1.k");
    }
}
