use crate::vertex::VertexId;
use std::collections::hash_map::Entry;
use std::collections::HashMap;

/// Maps element paths to vertex ids.
///
/// Paths use the dotted scheme of the description:
/// `system`, `system.container`, `system.container.component`.
/// The first element registered under a path keeps it.
#[derive(Debug, Default, Clone)]
pub(crate) struct Registry {
    by_path: HashMap<String, VertexId>,
}

impl Registry {
    /// Registers a path. Returns false, leaving the existing id in place,
    /// if the path is already taken.
    pub fn insert(&mut self, path: String, id: VertexId) -> bool {
        match self.by_path.entry(path) {
            Entry::Occupied(_) => false,
            Entry::Vacant(slot) => {
                slot.insert(id);
                true
            }
        }
    }

    /// Resolves a path to its vertex id.
    pub fn resolve(&self, path: &str) -> Option<VertexId> {
        self.by_path.get(path).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_resolve() {
        let mut registry = Registry::default();
        let id = VertexId::new(1);

        assert!(registry.insert("s1.c1".to_string(), id));

        assert_eq!(registry.resolve("s1.c1"), Some(id));
        assert_eq!(registry.resolve("s1"), None);
    }

    #[test]
    fn test_first_registration_wins() {
        let mut registry = Registry::default();
        assert!(registry.insert("s1".to_string(), VertexId::new(0)));
        assert!(!registry.insert("s1".to_string(), VertexId::new(3)));

        assert_eq!(registry.resolve("s1"), Some(VertexId::new(0)));
    }
}
