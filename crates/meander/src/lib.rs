//! Meander - a serpentine workflow-canvas layout engine.
//!
//! Layout, staged reveal scheduling, and SVG rendering for workflow
//! canvases. An ordered node list is placed on a boustrophedon grid
//! (rows alternate direction so the sequence snakes down the canvas),
//! consecutive nodes are joined by connectors, and a tick-driven reveal
//! schedule stages the entrance animation.

pub mod config;
pub mod layout;
pub mod reveal;

mod error;
mod export;

pub use meander_core::{color, geometry, semantic};

pub use error::MeanderError;

use std::fs;

use log::{debug, info, trace};

use semantic::WorkflowNode;

use config::AppConfig;
use export::Exporter;
use layout::CanvasLayout;
use reveal::RevealSchedule;

/// Builder for laying out and rendering workflow canvases.
///
/// This provides an API for processing a workflow node list through the
/// layout and rendering stages.
///
/// # Examples
///
/// ```rust,no_run
/// use meander::{CanvasBuilder, config::AppConfig};
/// use meander::semantic::{NodeLayer, WorkflowNode};
///
/// let nodes = vec![
///     WorkflowNode::new("n1", "input-excel", "Excel / CSV Upload", NodeLayer::Input),
///     WorkflowNode::new("n2", "proc-summarize", "Summarize", NodeLayer::Processing),
/// ];
///
/// // With custom config
/// let config = AppConfig::default();
/// let builder = CanvasBuilder::new(config);
///
/// // Lay the nodes out for a 1280px viewport
/// let layout = builder.layout(&nodes, 1280.0)
///     .expect("Failed to lay out");
///
/// // Render the layout to SVG
/// let svg = builder.render_svg(&nodes, &layout)
///     .expect("Failed to render");
///
/// // Or use default config
/// let builder = CanvasBuilder::default();
/// ```
#[derive(Default)]
pub struct CanvasBuilder {
    config: AppConfig,
}

impl CanvasBuilder {
    /// Create a new canvas builder with the given configuration.
    ///
    /// # Arguments
    ///
    /// * `config` - Application configuration including layout and style settings
    pub fn new(config: AppConfig) -> Self {
        Self { config }
    }

    /// Lay out a workflow node list for the given viewport width.
    ///
    /// The viewport width selects the row capacity and node density via
    /// the configured breakpoints, then placements and connectors are
    /// computed for the node sequence.
    ///
    /// # Arguments
    ///
    /// * `nodes` - The workflow nodes, in canvas order
    /// * `viewport_width` - Viewport width in pixels
    ///
    /// # Errors
    ///
    /// Returns `MeanderError::Layout` for invalid configuration (zero
    /// row capacity, non-positive node dimensions).
    pub fn layout(
        &self,
        nodes: &[WorkflowNode],
        viewport_width: f32,
    ) -> Result<CanvasLayout, MeanderError> {
        self.config.layout().validate()?;

        let row_capacity = self.config.layout().row_capacity_for(viewport_width);
        let metrics = self.config.layout().metrics_for(viewport_width);
        info!(
            node_count = nodes.len(),
            viewport_width,
            row_capacity;
            "Computing canvas layout"
        );

        let layout = CanvasLayout::compute(nodes.len(), row_capacity, metrics)?;

        debug!("Canvas layout computed successfully");
        trace!(layout:?; "Computed layout");

        Ok(layout)
    }

    /// Render a laid-out canvas to an SVG string.
    ///
    /// # Arguments
    ///
    /// * `nodes` - The workflow nodes the layout was computed for
    /// * `layout` - The computed canvas layout
    ///
    /// # Errors
    ///
    /// Returns `MeanderError::Export` if rendering fails (including a
    /// node list that does not match the layout) and `MeanderError::Io`
    /// if the rendered file cannot be read back.
    pub fn render_svg(
        &self,
        nodes: &[WorkflowNode],
        layout: &CanvasLayout,
    ) -> Result<String, MeanderError> {
        self.render_with(nodes, layout, |exporter, nodes, layout| {
            exporter.export_canvas(nodes, layout)
        })
    }

    /// Render only the revealed prefix of a laid-out canvas to an SVG
    /// string.
    ///
    /// The reveal schedule gates which nodes and connectors appear; the
    /// layout itself is unaffected.
    ///
    /// # Errors
    ///
    /// As for [`render_svg`](Self::render_svg).
    pub fn render_svg_revealed(
        &self,
        nodes: &[WorkflowNode],
        layout: &CanvasLayout,
        reveal: &RevealSchedule,
    ) -> Result<String, MeanderError> {
        self.render_with(nodes, layout, |exporter, nodes, layout| {
            exporter.export_revealed(nodes, layout, reveal)
        })
    }

    fn render_with(
        &self,
        nodes: &[WorkflowNode],
        layout: &CanvasLayout,
        export: impl FnOnce(
            &mut export::svg::Svg,
            &[WorkflowNode],
            &CanvasLayout,
        ) -> Result<(), export::Error>,
    ) -> Result<String, MeanderError> {
        info!(node_count = layout.node_count(); "Rendering canvas to SVG");

        // Render to SVG using a temporary file
        // TODO: In the future, modify SvgBuilder to support in-memory rendering
        let temp_file =
            tempfile::NamedTempFile::new().map_err(|err| MeanderError::Export(Box::new(err)))?;
        let temp_path = temp_file.path().to_string_lossy().to_string();

        let mut svg_exporter = export::svg::SvgBuilder::new(&temp_path)
            .with_style(self.config.style())
            .build()?;

        export(&mut svg_exporter, nodes, layout)?;

        // Read the SVG content back from the temp file
        let svg_string = fs::read_to_string(&temp_path).map_err(MeanderError::Io)?;

        info!("SVG rendered successfully");
        Ok(svg_string)
    }
}
