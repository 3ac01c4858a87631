//! Semantic model for workflow canvases.
//!
//! A workflow is an ordered list of [`WorkflowNode`] records. The layout
//! engine treats nodes as opaque beyond their sequence position; the
//! fields here exist for document loading and for the rendering layer
//! (the [`NodeLayer`] tag selects styling, nothing more).

use std::fmt;
use std::str::FromStr;

use serde::Deserialize;
use thiserror::Error;

/// The stage of a workflow a node belongs to.
///
/// Layers carry no layout meaning; the renderer uses them to pick band
/// colors, and builders use them to group node libraries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NodeLayer {
    /// Data enters the workflow (uploads, webhooks, connected sources).
    Input,
    /// Data is transformed, enriched, or routed.
    Processing,
    /// Results leave the workflow (documents, messages, dashboards).
    Output,
}

impl NodeLayer {
    /// Returns the lowercase name used in documents and styling keys.
    pub fn as_str(self) -> &'static str {
        match self {
            NodeLayer::Input => "input",
            NodeLayer::Processing => "processing",
            NodeLayer::Output => "output",
        }
    }
}

impl fmt::Display for NodeLayer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing a [`NodeLayer`] from a string fails.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown node layer `{0}`, expected `input`, `processing`, or `output`")]
pub struct ParseNodeLayerError(String);

impl FromStr for NodeLayer {
    type Err = ParseNodeLayerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "input" => Ok(NodeLayer::Input),
            "processing" => Ok(NodeLayer::Processing),
            "output" => Ok(NodeLayer::Output),
            other => Err(ParseNodeLayerError(other.to_string())),
        }
    }
}

/// A single step in a workflow.
///
/// Nodes are ordered: the canvas lays them out and connects them strictly
/// in sequence. `id` identifies this placement on the canvas (assigned by
/// whoever built the list), `kind` names the library definition the node
/// was instantiated from, `name` is the display label.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct WorkflowNode {
    id: String,
    kind: String,
    name: String,
    layer: NodeLayer,
}

impl WorkflowNode {
    /// Creates a new workflow node.
    pub fn new(
        id: impl Into<String>,
        kind: impl Into<String>,
        name: impl Into<String>,
        layer: NodeLayer,
    ) -> Self {
        Self {
            id: id.into(),
            kind: kind.into(),
            name: name.into(),
            layer,
        }
    }

    /// Returns the canvas-unique identifier of this node.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Returns the library definition key this node was created from.
    pub fn kind(&self) -> &str {
        &self.kind
    }

    /// Returns the display label.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the layer tag used for styling.
    pub fn layer(&self) -> NodeLayer {
        self.layer
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layer_round_trips_through_str() {
        for layer in [NodeLayer::Input, NodeLayer::Processing, NodeLayer::Output] {
            assert_eq!(layer.as_str().parse::<NodeLayer>(), Ok(layer));
        }
    }

    #[test]
    fn test_layer_parse_rejects_unknown() {
        let err = "middleware".parse::<NodeLayer>().unwrap_err();
        assert!(err.to_string().contains("middleware"));
    }

    #[test]
    fn test_node_accessors() {
        let node = WorkflowNode::new(
            "user-node-1",
            "input-excel",
            "Excel / CSV Upload",
            NodeLayer::Input,
        );
        assert_eq!(node.id(), "user-node-1");
        assert_eq!(node.kind(), "input-excel");
        assert_eq!(node.name(), "Excel / CSV Upload");
        assert_eq!(node.layer(), NodeLayer::Input);
    }
}
