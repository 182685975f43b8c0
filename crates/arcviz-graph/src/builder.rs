//! Two-pass construction of the architecture graph.
//!
//! 1. `init` assigns every element a vertex id, in declaration order:
//!    users, then each internal system followed by its containers and
//!    their components, then external systems.
//! 2. `analyse` turns relations into edges, classifies them by
//!    perspective and adds rollup edges between top-level parents.

use crate::edge::{upsert, Edge, EdgeKey, Upsert};
use crate::error::{GraphError, Result};
use crate::graph::{ArchGraph, Topology};
use crate::vertex::{Vertex, VertexId};
use arcviz_model::{child_path, Architecture, Relation};
use std::collections::HashSet;
use tracing::{debug, warn};

impl ArchGraph {
    /// Assigns vertex ids and returns the number of vertices.
    ///
    /// Returns 0 when no description is bound; callers treat that as an
    /// empty graph.
    pub fn init(&mut self) -> usize {
        let Some(arch) = self.arch.as_ref() else {
            warn!("Initialized an empty graph");
            return 0;
        };

        let mut topology = Topology::with_capacity(element_count(arch), arch.relations.len());

        for user in &arch.users {
            topology.assign(user.name.clone(), || Vertex::User(user.clone()));
        }
        for system in &arch.internal_systems {
            topology.assign(system.name.clone(), || Vertex::InternalSystem(system.clone()));
            for container in &system.containers {
                let container_path = child_path(&system.name, &container.name);
                topology.assign(container_path.clone(), || Vertex::Container(container.clone()));
                for component in &container.components {
                    topology.assign(child_path(&container_path, &component.name), || {
                        Vertex::Component(component.clone())
                    });
                }
            }
        }
        for system in &arch.external_systems {
            topology.assign(system.name.clone(), || Vertex::ExternalSystem(system.clone()));
        }

        let mut seen = HashSet::new();
        for name in &self.targets {
            if !seen.insert(name.as_str()) {
                continue;
            }
            match topology.registry.resolve(name) {
                Some(id) if topology.graph[id].as_internal_system().is_some() => {
                    topology.targets.push(id)
                }
                _ => debug!("Target {} is not an internal system, ignoring", name),
            }
        }

        let count = topology.graph.node_count();
        debug!(
            "Initialized graph with {} vertices and {} targets",
            count,
            topology.targets.len()
        );
        self.topology = Some(topology);
        count
    }

    /// Builds edges from the description's relations.
    ///
    /// Fails if `init` has not run, or if a relation names a path that no
    /// element was registered under. A failure discards the topology, so
    /// later queries report an uninitialized graph instead of reading the
    /// edges built so far.
    pub fn analyse(&mut self) -> Result<()> {
        let (Some(arch), Some(topology)) = (self.arch.as_ref(), self.topology.as_mut()) else {
            return Err(GraphError::Uninitialized);
        };

        let linked = topology.link(&arch.relations);
        if linked.is_err() {
            self.topology = None;
        }
        linked
    }
}

impl Topology {
    fn link(&mut self, relations: &[Relation]) -> Result<()> {
        for relation in relations {
            let subject = self.registry.resolve(&relation.subject).ok_or_else(|| {
                warn!("Unresolved subject {} in relation", relation.subject);
                GraphError::UnresolvedSubject(relation.subject.clone())
            })?;
            let object = self.registry.resolve(&relation.object).ok_or_else(|| {
                warn!("Unresolved object {} in relation", relation.object);
                GraphError::UnresolvedObject(relation.object.clone())
            })?;

            self.offer(EdgeKey::of(relation), subject, object, Edge::new(relation.clone()));

            if relation.is_nested() {
                self.ensure_rollup(relation)?;
            }
        }

        self.analysed = true;
        debug!(
            "Analysed {} relations into {} edges",
            relations.len(),
            self.graph.edge_count()
        );
        Ok(())
    }

    /// Offers an edge for `key`, applying the overwrite policy of [`upsert`].
    fn offer(&mut self, key: EdgeKey, subject: VertexId, object: VertexId, candidate: Edge) {
        let current = self
            .edge_index
            .get(&key)
            .and_then(|index| self.graph.edge_weight(*index));

        match upsert(current, candidate) {
            Upsert::Insert(edge) => {
                let index = self.graph.add_edge(subject, object, edge);
                self.edge_index.insert(key, index);
            }
            Upsert::Replace(edge) => {
                if let Some(slot) = self
                    .edge_index
                    .get(&key)
                    .and_then(|index| self.graph.edge_weight_mut(*index))
                {
                    debug!("Refining derived edge {}", key);
                    *slot = edge;
                }
            }
            Upsert::Keep => {}
        }
    }

    /// Links the top-level parents of a nested relation, once per pair.
    fn ensure_rollup(&mut self, relation: &Relation) -> Result<()> {
        let Some(key) = EdgeKey::rollup_of(relation) else {
            return Ok(());
        };
        if self.edge_index.contains_key(&key) {
            return Ok(());
        }
        let subject = self
            .registry
            .resolve(&key.subject)
            .ok_or_else(|| GraphError::UnresolvedSubject(key.subject.clone()))?;
        let object = self
            .registry
            .resolve(&key.object)
            .ok_or_else(|| GraphError::UnresolvedObject(key.object.clone()))?;

        if let Some(edge) = Edge::rollup(relation) {
            debug!("Adding rollup edge {}", key);
            let index = self.graph.add_edge(subject, object, edge);
            self.edge_index.insert(key, index);
        }
        Ok(())
    }
}

/// Upper bound on the number of vertices a description produces.
fn element_count(arch: &Architecture) -> usize {
    let nested: usize = arch
        .internal_systems
        .iter()
        .map(|s| 1 + s.containers.iter().map(|c| 1 + c.components.len()).sum::<usize>())
        .sum();
    arch.users.len() + nested + arch.external_systems.len()
}
