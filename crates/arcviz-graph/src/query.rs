//! Perspective-scoped queries.
//!
//! Each query answers what a diagram at the graph's perspective should
//! draw. Without targets the whole description is returned as declared.
//! With targets, the answer is built from one-hop walks around each
//! targeted internal system and its containers.

use crate::error::{GraphError, Result};
use crate::graph::{ArchGraph, Topology};
use crate::vertex::{Vertex, VertexId};
use arcviz_model::{child_path, Architecture, ExternalSystem, InternalSystem, Relation, User};
use petgraph::visit::EdgeRef;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeSet, HashSet};

/// Everything a diagram generator needs for one view.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct View {
    pub users: Vec<User>,
    pub internal_systems: Vec<InternalSystem>,
    pub external_systems: Vec<ExternalSystem>,
    pub relations: Vec<Relation>,
}

impl ArchGraph {
    /// The description and its analysed topology. A graph whose `analyse`
    /// has not completed answers no queries.
    fn bound(&self) -> Result<(&Architecture, &Topology)> {
        let arch = self.arch.as_ref().ok_or(GraphError::EmptyGraph)?;
        match self.topology.as_ref() {
            Some(topology) if topology.analysed => Ok((arch, topology)),
            _ => Err(GraphError::Uninitialized),
        }
    }

    fn is_scoped(&self) -> bool {
        !self.targets.is_empty()
    }

    /// Users relevant to the view.
    ///
    /// Only Landscape and Context views pull in users: the one-hop user
    /// neighbours of each target.
    pub fn users(&self) -> Result<Vec<User>> {
        let (arch, topology) = self.bound()?;
        if !self.is_scoped() {
            return Ok(arch.users.clone());
        }

        let mut seen = HashSet::new();
        let mut users = Vec::new();
        if self.perspective().is_system_level() {
            for &target in &topology.targets {
                for (id, user) in topology.neighbours(target, Vertex::as_user) {
                    if seen.insert(id) {
                        users.push(user.clone());
                    }
                }
            }
        }
        Ok(users)
    }

    /// Internal systems relevant to the view: exactly the targets.
    pub fn internal_systems(&self) -> Result<Vec<InternalSystem>> {
        let (arch, topology) = self.bound()?;
        if !self.is_scoped() {
            return Ok(arch.internal_systems.clone());
        }

        Ok(topology
            .targets
            .iter()
            .filter_map(|&target| topology.graph[target].as_internal_system())
            .cloned()
            .collect())
    }

    /// External systems relevant to the view.
    ///
    /// Internal systems that a target's containers talk to are returned as
    /// external entries too, since a container view only shows them as
    /// black boxes.
    pub fn external_systems(&self) -> Result<Vec<ExternalSystem>> {
        let (arch, topology) = self.bound()?;
        if !self.is_scoped() {
            return Ok(arch.external_systems.clone());
        }

        let mut seen: HashSet<VertexId> = HashSet::new();
        let mut systems = Vec::new();
        for &target in &topology.targets {
            if self.perspective().is_system_level() {
                for (id, external) in topology.neighbours(target, Vertex::as_external_system) {
                    if seen.insert(id) {
                        systems.push(external.clone());
                    }
                }
            }

            let Some(system) = topology.graph[target].as_internal_system() else {
                continue;
            };
            for container in &system.containers {
                let path = child_path(&system.name, &container.name);
                let Some(container_id) = topology.registry.resolve(&path) else {
                    continue;
                };
                for (id, external) in topology.neighbours(container_id, Vertex::as_external_system)
                {
                    if seen.insert(id) {
                        systems.push(external.clone());
                    }
                }
                for (id, internal) in topology.neighbours(container_id, Vertex::as_internal_system)
                {
                    if seen.insert(id) {
                        systems.push(ExternalSystem {
                            name: internal.name.clone(),
                            desc: internal.desc.clone(),
                            ..Default::default()
                        });
                    }
                }
            }
        }
        Ok(systems)
    }

    /// Relations visible in the view's perspective, in declaration order.
    pub fn relations(&self) -> Result<Vec<Relation>> {
        let (_, topology) = self.bound()?;
        let perspective = self.perspective();

        if !self.is_scoped() {
            return Ok(topology
                .graph
                .edge_weights()
                .filter(|e| e.visible_in(perspective))
                .map(|e| e.relation.clone())
                .collect());
        }

        let mut incident = BTreeSet::new();
        for &target in &topology.targets {
            incident.extend(topology.graph.edges(target).map(|e| e.id()));

            let Some(system) = topology.graph[target].as_internal_system() else {
                continue;
            };
            for container in &system.containers {
                let path = child_path(&system.name, &container.name);
                if let Some(container_id) = topology.registry.resolve(&path) {
                    incident.extend(topology.graph.edges(container_id).map(|e| e.id()));
                }
            }
        }

        Ok(incident
            .into_iter()
            .filter_map(|index| topology.graph.edge_weight(index))
            .filter(|e| e.visible_in(perspective))
            .map(|e| e.relation.clone())
            .collect())
    }

    /// Runs all four queries.
    pub fn view(&self) -> Result<View> {
        Ok(View {
            users: self.users()?,
            internal_systems: self.internal_systems()?,
            external_systems: self.external_systems()?,
            relations: self.relations()?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use arcviz_model::{Container, Perspective};

    /// 2 users, 3 systems with containers c1 and c2, 2 external systems.
    fn fixture() -> Architecture {
        let containers = || {
            ["c1", "c2"]
                .into_iter()
                .map(|name| Container {
                    name: name.to_string(),
                    desc: format!("Container {}", &name[1..]),
                    ..Default::default()
                })
                .collect::<Vec<_>>()
        };
        Architecture {
            app: "test".to_string(),
            desc: "Test architecture".to_string(),
            users: ["u1", "u2"]
                .into_iter()
                .map(|name| User {
                    name: name.to_string(),
                    ..Default::default()
                })
                .collect(),
            internal_systems: ["s1", "s2", "s3"]
                .into_iter()
                .map(|name| InternalSystem {
                    name: name.to_string(),
                    desc: format!("System {}", &name[1..]),
                    containers: containers(),
                    ..Default::default()
                })
                .collect(),
            external_systems: ["e1", "e2"]
                .into_iter()
                .map(|name| ExternalSystem {
                    name: name.to_string(),
                    desc: format!("Extern System {}", &name[1..]),
                    ..Default::default()
                })
                .collect(),
            relations: vec![
                Relation::new("u1", "s1", "use"),
                Relation::new("u2", "s2", "use"),
                Relation::new("s1", "s2", "point to"),
                Relation::new("s2", "e2", "point to"),
                Relation::new("s2", "e1", "point to"),
                Relation::new("s1.c1", "s2.c1", "call"),
            ],
        }
    }

    fn graph_for(arch: Architecture, perspective: Perspective, targets: &[&str]) -> ArchGraph {
        let targets = targets.iter().map(|t| t.to_string()).collect();
        let mut graph = ArchGraph::new(Some(arch), perspective, targets);
        assert!(graph.init() > 0);
        graph.analyse().unwrap();
        graph
    }

    fn names<T>(items: &[T], name: impl Fn(&T) -> &str) -> Vec<String> {
        items.iter().map(|i| name(i).to_string()).collect()
    }

    #[test]
    fn test_unscoped_queries_return_description() {
        let arch = fixture();
        let graph = graph_for(arch.clone(), Perspective::Context, &[]);

        assert_eq!(graph.users().unwrap(), arch.users);
        assert_eq!(graph.internal_systems().unwrap(), arch.internal_systems);
        assert_eq!(graph.external_systems().unwrap(), arch.external_systems);
    }

    #[test]
    fn test_unscoped_relations_exclude_nested() {
        let arch = fixture();
        let graph = graph_for(arch.clone(), Perspective::Context, &[]);

        assert_eq!(graph.relations().unwrap(), arch.relations[..5].to_vec());
    }

    #[test]
    fn test_users_for_targets() {
        let cases: [(&[&str], &[&str]); 4] = [
            (&["s1"], &["u1"]),
            (&["s2"], &["u2"]),
            (&["s1", "s2"], &["u1", "u2"]),
            (&["s3"], &[]),
        ];
        for (targets, expected) in cases {
            let graph = graph_for(fixture(), Perspective::Context, targets);
            let users = graph.users().unwrap();
            assert_eq!(names(&users, |u| u.name.as_str()), expected, "targets {:?}", targets);
        }
    }

    #[test]
    fn test_users_outside_system_level_views() {
        let graph = graph_for(fixture(), Perspective::Container, &["s1"]);
        assert!(graph.users().unwrap().is_empty());
    }

    #[test]
    fn test_users_are_a_union() {
        let mut arch = fixture();
        arch.relations.push(Relation::new("u1", "s2", "use"));
        let graph = graph_for(arch, Perspective::Landscape, &["s1", "s2"]);

        let users = graph.users().unwrap();
        assert_eq!(names(&users, |u| u.name.as_str()), vec!["u1", "u2"]);
    }

    #[test]
    fn test_internal_systems_are_the_targets() {
        let graph = graph_for(fixture(), Perspective::Context, &["s1"]);
        let systems = graph.internal_systems().unwrap();
        assert_eq!(names(&systems, |s| s.name.as_str()), vec!["s1"]);

        let graph = graph_for(fixture(), Perspective::Context, &["s1", "s2", "s3"]);
        let systems = graph.internal_systems().unwrap();
        assert_eq!(names(&systems, |s| s.name.as_str()), vec!["s1", "s2", "s3"]);
    }

    #[test]
    fn test_unknown_targets_are_ignored() {
        let graph = graph_for(fixture(), Perspective::Context, &["nope", "e1", "s2"]);
        let systems = graph.internal_systems().unwrap();
        assert_eq!(names(&systems, |s| s.name.as_str()), vec!["s2"]);
    }

    #[test]
    fn test_external_systems_for_context() {
        let graph = graph_for(fixture(), Perspective::Context, &["s2"]);
        let systems = graph.external_systems().unwrap();
        assert_eq!(names(&systems, |s| s.name.as_str()), vec!["e1", "e2"]);

        let graph = graph_for(fixture(), Perspective::Context, &["s1"]);
        assert!(graph.external_systems().unwrap().is_empty());
    }

    #[test]
    fn test_external_systems_from_containers() {
        let mut arch = fixture();
        arch.relations.push(Relation::new("s1.c2", "e2", "publish"));
        arch.relations.push(Relation::new("s1.c1", "s3", "read"));
        let graph = graph_for(arch, Perspective::Container, &["s1"]);

        let systems = graph.external_systems().unwrap();
        assert_eq!(names(&systems, |s| s.name.as_str()), vec!["s3", "e2"]);
        // Internal neighbours are shown as black boxes.
        assert_eq!(systems[0].desc, "System 3");
        assert_eq!(systems[0].role, "");
    }

    #[test]
    fn test_relations_for_targets() {
        let graph = graph_for(fixture(), Perspective::Context, &["s1"]);
        let relations = graph.relations().unwrap();
        assert_eq!(
            relations,
            vec![
                Relation::new("u1", "s1", "use"),
                Relation::new("s1", "s2", "point to"),
            ]
        );

        let graph = graph_for(fixture(), Perspective::Container, &["s1"]);
        let relations = graph.relations().unwrap();
        assert_eq!(relations, vec![Relation::new("s1.c1", "s2.c1", "call")]);
    }

    #[test]
    fn test_relations_include_rollups() {
        let mut arch = fixture();
        arch.relations.push(Relation::new("s3.c2", "e1", "export"));
        let graph = graph_for(arch, Perspective::Landscape, &["s3"]);

        let relations = graph.relations().unwrap();
        assert_eq!(relations, vec![Relation::new("s3", "e1", "Use::export")]);
    }

    #[test]
    fn test_unscoped_component_view() {
        let mut arch = fixture();
        arch.internal_systems[0].containers[0].components = vec![arcviz_model::Component {
            name: "k1".to_string(),
            ..Default::default()
        }];
        arch.relations.push(Relation::new("s1.c1.k1", "s2.c1", "call"));
        let graph = graph_for(arch, Perspective::Component, &[]);

        assert_eq!(
            graph.relations().unwrap(),
            vec![Relation::new("s1.c1.k1", "s2.c1", "call")]
        );
    }

    #[test]
    fn test_queries_without_description() {
        let mut graph = ArchGraph::new(None, Perspective::Context, vec!["s1".to_string()]);
        assert_eq!(graph.init(), 0);

        assert!(matches!(graph.users(), Err(GraphError::EmptyGraph)));
        assert!(matches!(graph.internal_systems(), Err(GraphError::EmptyGraph)));
        assert!(matches!(graph.external_systems(), Err(GraphError::EmptyGraph)));
        assert!(matches!(graph.relations(), Err(GraphError::EmptyGraph)));
    }

    #[test]
    fn test_view_collects_all_queries() {
        let graph = graph_for(fixture(), Perspective::Context, &["s2"]);
        let view = graph.view().unwrap();

        assert_eq!(names(&view.users, |u| u.name.as_str()), vec!["u2"]);
        assert_eq!(names(&view.internal_systems, |s| s.name.as_str()), vec!["s2"]);
        assert_eq!(view.external_systems.len(), 2);
        assert_eq!(view.relations.len(), 4);
    }
}
