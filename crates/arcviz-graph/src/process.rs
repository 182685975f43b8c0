//! Render request processing.
//!
//! Validates the request parameters, decodes the description and builds
//! the query-ready graph. Any failure is terminal for the request; no
//! partially built graph is ever handed out.

use crate::error::{GraphError, Result};
use crate::graph::ArchGraph;
use arcviz_model::{codec, DataFormat, Perspective, VisualFormat};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

/// A request to render one view of an architecture.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenderRequest {
    /// One of `landscape`, `context`, `container`, `component`, `code`.
    pub perspective: String,
    /// `png` or `svg`.
    pub visual_format: String,
    /// Encoding of `data`: `arc`, `json` or `yaml`.
    pub data_format: String,
    /// The encoded description.
    pub data: Vec<u8>,
    /// Names of the internal systems to focus on. Empty means everything.
    #[serde(default)]
    pub targets: Vec<String>,
}

impl RenderRequest {
    /// Creates an SVG request over a binary payload.
    pub fn new(perspective: impl Into<String>, data: Vec<u8>) -> Self {
        Self {
            perspective: perspective.into(),
            visual_format: VisualFormat::Svg.to_string(),
            data_format: DataFormat::Arc.to_string(),
            data,
            targets: Vec::new(),
        }
    }

    pub fn with_targets(mut self, targets: Vec<String>) -> Self {
        self.targets = targets;
        self
    }

    pub fn with_visual_format(mut self, format: impl Into<String>) -> Self {
        self.visual_format = format.into();
        self
    }

    pub fn with_data_format(mut self, format: impl Into<String>) -> Self {
        self.data_format = format.into();
        self
    }
}

/// Builds the graph for a render request.
pub fn process(request: &RenderRequest) -> Result<ArchGraph> {
    let perspective: Perspective = request.perspective.parse()?;
    let format: VisualFormat = request.visual_format.parse()?;
    let data_format: DataFormat = request.data_format.parse()?;

    let arch = codec::decode(data_format, &request.data)?;
    debug!(
        "Processing {} request for {} with {} targets",
        perspective,
        if arch.app.is_empty() { "<unnamed>" } else { arch.app.as_str() },
        request.targets.len()
    );

    let mut graph =
        ArchGraph::new(Some(arch), perspective, request.targets.clone()).with_format(format);
    if graph.init() == 0 {
        return Err(GraphError::EmptyElement);
    }
    graph.analyse()?;

    info!(
        "Built {} graph: {} vertices, {} edges",
        perspective,
        graph.vertex_count(),
        graph.edge_count()
    );
    Ok(graph)
}
