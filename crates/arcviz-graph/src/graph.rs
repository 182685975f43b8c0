//! Core graph data structure.
//!
//! `ArchGraph` binds one architecture description to the perspective and
//! targets of a single render request. It is built in two passes
//! ([`ArchGraph::init`] then [`ArchGraph::analyse`]) and then queried.
//! Nothing is shared between requests.

use crate::edge::{Edge, EdgeKey};
use crate::registry::Registry;
use crate::vertex::{Vertex, VertexId};
use arcviz_model::{Architecture, Perspective, VisualFormat};
use petgraph::graph::{EdgeIndex, UnGraph};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// The graph of one render request.
#[derive(Debug)]
pub struct ArchGraph {
    perspective: Perspective,
    format: VisualFormat,
    pub(crate) arch: Option<Architecture>,
    pub(crate) targets: Vec<String>,
    pub(crate) topology: Option<Topology>,
}

/// Vertices, edges and indexes, present once `init` has run.
#[derive(Debug, Default)]
pub(crate) struct Topology {
    /// Undirected adjacency; each edge weight is the edge record itself.
    pub(crate) graph: UnGraph<Vertex, Edge>,
    pub(crate) registry: Registry,
    pub(crate) edge_index: HashMap<EdgeKey, EdgeIndex>,
    /// Internal systems named by the request targets, in target order.
    pub(crate) targets: Vec<VertexId>,
    /// Set once every relation has been turned into edges.
    pub(crate) analysed: bool,
}

impl Topology {
    pub(crate) fn with_capacity(vertices: usize, edges: usize) -> Self {
        Self {
            graph: UnGraph::with_capacity(vertices, edges),
            ..Default::default()
        }
    }

    /// Binds a vertex to `path` unless the path already has one.
    pub(crate) fn assign(&mut self, path: String, vertex: impl FnOnce() -> Vertex) -> VertexId {
        if let Some(id) = self.registry.resolve(&path) {
            return id;
        }
        let id = self.graph.add_node(vertex());
        self.registry.insert(path, id);
        id
    }

    /// Neighbours of `id` projected onto one vertex variant, in id order.
    pub(crate) fn neighbours<'a, T: 'a>(
        &'a self,
        id: VertexId,
        project: impl Fn(&'a Vertex) -> Option<&'a T>,
    ) -> Vec<(VertexId, &'a T)> {
        let mut ids: Vec<VertexId> = self.graph.neighbors(id).collect();
        ids.sort();
        ids.dedup();
        ids.into_iter()
            .filter_map(|n| project(&self.graph[n]).map(|entity| (n, entity)))
            .collect()
    }
}

impl ArchGraph {
    /// Creates a graph over `arch` for the given perspective.
    ///
    /// `None` stands for a request that carried no description; such a
    /// graph initializes to zero vertices and fails every query.
    pub fn new(arch: Option<Architecture>, perspective: Perspective, targets: Vec<String>) -> Self {
        Self {
            perspective,
            format: VisualFormat::Svg,
            arch,
            targets,
            topology: None,
        }
    }

    /// Sets the image format the request asked for.
    pub fn with_format(mut self, format: VisualFormat) -> Self {
        self.format = format;
        self
    }

    pub fn perspective(&self) -> Perspective {
        self.perspective
    }

    pub fn format(&self) -> VisualFormat {
        self.format
    }

    /// The bound description, if any.
    pub fn architecture(&self) -> Option<&Architecture> {
        self.arch.as_ref()
    }

    /// Target names as supplied by the request.
    pub fn targets(&self) -> &[String] {
        &self.targets
    }

    /// Returns the number of vertices.
    pub fn vertex_count(&self) -> usize {
        self.topology.as_ref().map_or(0, |t| t.graph.node_count())
    }

    /// Returns the number of edges, rollups included.
    pub fn edge_count(&self) -> usize {
        self.topology.as_ref().map_or(0, |t| t.graph.edge_count())
    }

    /// Resolves an element path to its vertex id.
    pub fn vertex_id(&self, path: &str) -> Option<VertexId> {
        self.topology.as_ref()?.registry.resolve(path)
    }

    /// Gets a vertex by id.
    pub fn vertex(&self, id: VertexId) -> Option<&Vertex> {
        self.topology.as_ref()?.graph.node_weight(id)
    }

    /// Gets the edge stored for a (subject, object) pair.
    pub fn edge(&self, subject: &str, object: &str) -> Option<&Edge> {
        let topology = self.topology.as_ref()?;
        let index = topology.edge_index.get(&EdgeKey::new(subject, object))?;
        topology.graph.edge_weight(*index)
    }

    /// Iterates over all edges in creation order.
    pub fn edges(&self) -> impl Iterator<Item = &Edge> {
        self.topology.iter().flat_map(|t| t.graph.edge_weights())
    }

    /// Ids of the internal systems the request targets.
    pub fn target_ids(&self) -> &[VertexId] {
        self.topology
            .as_ref()
            .map(|t| t.targets.as_slice())
            .unwrap_or_default()
    }

    /// Returns graph statistics.
    pub fn stats(&self) -> GraphStats {
        GraphStats {
            vertex_count: self.vertex_count(),
            edge_count: self.edge_count(),
            derived_edges: self.edges().filter(|e| e.is_derived()).count(),
            targets: self.target_ids().len(),
        }
    }
}

/// Graph statistics.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphStats {
    pub vertex_count: usize,
    pub edge_count: usize,
    pub derived_edges: usize,
    pub targets: usize,
}
