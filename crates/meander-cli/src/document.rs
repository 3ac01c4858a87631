//! Workflow document loading.
//!
//! A workflow document is a TOML file with a `nodes` array; each entry
//! carries the id, kind, display name, and layer of one canvas node, in
//! canvas order:
//!
//! ```toml
//! [[nodes]]
//! id = "user-node-1"
//! kind = "input-excel"
//! name = "Excel / CSV Upload"
//! layer = "input"
//! ```

use serde::Deserialize;

use meander::{MeanderError, semantic::WorkflowNode};

/// An ordered workflow node list parsed from a TOML document.
#[derive(Debug, Clone, Deserialize)]
pub struct WorkflowDocument {
    #[serde(default)]
    nodes: Vec<WorkflowNode>,
}

impl WorkflowDocument {
    /// Parses a workflow document from TOML source.
    ///
    /// # Errors
    ///
    /// Returns `MeanderError::Document` if the source is not valid TOML
    /// or a node entry is malformed.
    pub fn from_toml(source: &str) -> Result<Self, MeanderError> {
        toml::from_str(source)
            .map_err(|err| MeanderError::Document(format!("invalid workflow document: {err}")))
    }

    /// Returns the nodes in canvas order.
    pub fn nodes(&self) -> &[WorkflowNode] {
        &self.nodes
    }
}

#[cfg(test)]
mod tests {
    use meander::semantic::NodeLayer;

    use super::*;

    #[test]
    fn test_document_parses_nodes_in_order() {
        let source = r#"
            [[nodes]]
            id = "user-node-1"
            kind = "input-excel"
            name = "Excel / CSV Upload"
            layer = "input"

            [[nodes]]
            id = "user-node-2"
            kind = "proc-summarize"
            name = "Summarize"
            layer = "processing"
        "#;

        let document = WorkflowDocument::from_toml(source).expect("document should parse");
        let nodes = document.nodes();
        assert_eq!(nodes.len(), 2);
        assert_eq!(nodes[0].id(), "user-node-1");
        assert_eq!(nodes[0].layer(), NodeLayer::Input);
        assert_eq!(nodes[1].name(), "Summarize");
    }

    #[test]
    fn test_empty_document_has_no_nodes() {
        let document = WorkflowDocument::from_toml("").expect("empty document is valid");
        assert!(document.nodes().is_empty());
    }

    #[test]
    fn test_unknown_layer_is_rejected() {
        let source = r#"
            [[nodes]]
            id = "n1"
            kind = "k1"
            name = "Node"
            layer = "middleware"
        "#;

        let result = WorkflowDocument::from_toml(source);
        assert!(matches!(result, Err(MeanderError::Document(_))));
    }
}
