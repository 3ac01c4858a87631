//! SVG rendering for workflow canvases.

use std::{fs::File, io::Write};

use log::{debug, error, info};
use svg::Document;
use svg::node::element as svg_element;

use meander_core::color::Color;
use meander_core::geometry::{Insets, Point, Size};
use meander_core::semantic::{NodeLayer, WorkflowNode};

use super::{Error, Exporter};
use crate::config::StyleConfig;
use crate::layout::{CanvasLayout, ConnectorPath, NodePlacement};
use crate::reveal::RevealSchedule;

/// Whitespace kept around the canvas content.
const CANVAS_MARGIN: f32 = 40.0;
/// Height of the colored layer band at the top of each node box.
const BAND_HEIGHT: f32 = 6.0;
/// Corner radius of node boxes.
const CORNER_RADIUS: f32 = 10.0;
/// Opacity of the layer-colored wash behind each node label.
const NODE_WASH_ALPHA: f32 = 0.2;
/// Stroke color of connector lines and the arrowhead marker.
const CONNECTOR_COLOR: &str = "#A0AEC0";
/// Marker id referenced by every connector path.
const ARROWHEAD_ID: &str = "wf-arrowhead";

/// Resolved band and accent colors for one node layer.
#[derive(Debug, Clone, Copy)]
struct LayerColors {
    band: Color,
    accent: Color,
}

/// Builder for configuring and creating an [`Svg`] exporter.
///
/// Style colors are resolved eagerly in [`build`](Self::build) so
/// configuration mistakes surface before any file is touched.
pub struct SvgBuilder<'a> {
    file_name: String,
    style: Option<&'a StyleConfig>,
}

impl<'a> SvgBuilder<'a> {
    /// Creates a builder writing to the given file path.
    pub fn new(file_name: &str) -> Self {
        Self {
            file_name: file_name.to_string(),
            style: None,
        }
    }

    /// Sets the style configuration (builder style).
    pub fn with_style(mut self, style: &'a StyleConfig) -> Self {
        self.style = Some(style);
        self
    }

    /// Resolves the style into an [`Svg`] exporter.
    ///
    /// # Errors
    /// Returns [`Error::Render`] if a configured color cannot be parsed.
    pub fn build(self) -> Result<Svg, Error> {
        let default_style = StyleConfig::default();
        let style = self.style.unwrap_or(&default_style);

        let background = style.background_color().map_err(Error::Render)?;
        let layer_colors = |layer| -> Result<LayerColors, Error> {
            Ok(LayerColors {
                band: style.band_color(layer).map_err(Error::Render)?,
                accent: style.accent_color(layer),
            })
        };

        Ok(Svg {
            file_name: self.file_name,
            background,
            input: layer_colors(NodeLayer::Input)?,
            processing: layer_colors(NodeLayer::Processing)?,
            output: layer_colors(NodeLayer::Output)?,
        })
    }
}

/// SVG exporter with resolved colors and an output path.
pub struct Svg {
    file_name: String,
    background: Option<Color>,
    input: LayerColors,
    processing: LayerColors,
    output: LayerColors,
}

impl Svg {
    fn colors_for(&self, layer: NodeLayer) -> LayerColors {
        match layer {
            NodeLayer::Input => self.input,
            NodeLayer::Processing => self.processing,
            NodeLayer::Output => self.output,
        }
    }

    /// Create a path data string from two points
    fn create_path_data_from_points(&self, start: Point, end: Point) -> String {
        format!("M {} {} L {} {}", start.x(), start.y(), end.x(), end.y())
    }

    /// Calculate the final SVG size for the given content dimensions,
    /// adding a margin on every side.
    fn calculate_svg_dimensions(&self, content_size: Size, margin: Insets) -> Size {
        let svg_size = content_size.add_padding(margin);
        debug!(
            width = svg_size.width(),
            height = svg_size.height();
            "Final SVG dimensions"
        );
        svg_size
    }

    /// Arrowhead marker definition referenced by connector paths.
    fn draw_marker_definitions(&self) -> svg_element::Definitions {
        let arrowhead = svg_element::Marker::new()
            .set("id", ARROWHEAD_ID)
            .set("markerWidth", 6)
            .set("markerHeight", 6)
            .set("refX", 5)
            .set("refY", 3)
            .set("orient", "auto")
            .add(
                svg_element::Polygon::new()
                    .set("points", "0 0, 6 3, 0 6")
                    .set("fill", CONNECTOR_COLOR),
            );
        svg_element::Definitions::new().add(arrowhead)
    }

    fn render_connector(&self, connector: &ConnectorPath) -> svg_element::Path {
        let segment = connector.segment();
        svg_element::Path::new()
            .set(
                "d",
                self.create_path_data_from_points(segment.start(), segment.end()),
            )
            .set("stroke", CONNECTOR_COLOR)
            .set("stroke-width", 2)
            .set("fill", "none")
            .set("marker-end", format!("url(#{ARROWHEAD_ID})"))
    }

    fn render_node(
        &self,
        node: &WorkflowNode,
        placement: &NodePlacement,
        layout: &CanvasLayout,
    ) -> svg_element::Group {
        let metrics = layout.metrics();
        let origin = placement.origin();
        let colors = self.colors_for(node.layer());

        let card = svg_element::Rectangle::new()
            .set("x", origin.x())
            .set("y", origin.y())
            .set("width", metrics.node_width())
            .set("height", metrics.node_height())
            .set("rx", CORNER_RADIUS)
            .set("fill", &colors.band.with_alpha(NODE_WASH_ALPHA))
            .set("stroke", &colors.band)
            .set("stroke-width", 1.5);

        let band = svg_element::Rectangle::new()
            .set("x", origin.x())
            .set("y", origin.y())
            .set("width", metrics.node_width())
            .set("height", BAND_HEIGHT)
            .set("rx", BAND_HEIGHT / 2.0)
            .set("fill", &colors.band);

        let center = placement.bounds(&metrics).center();
        let label = svg_element::Text::new(node.name())
            .set("x", center.x())
            // Nudge below center so the baseline sits visually centered
            // under the band.
            .set("y", center.y() + BAND_HEIGHT)
            .set("text-anchor", "middle")
            .set("font-family", "sans-serif")
            .set("font-size", 12)
            .set("fill", &colors.accent);

        svg_element::Group::new().add(card).add(band).add(label)
    }

    /// Renders the first `visible_nodes` nodes and `visible_connectors`
    /// connectors to an SVG document.
    fn render_canvas(
        &self,
        nodes: &[WorkflowNode],
        layout: &CanvasLayout,
        visible_nodes: usize,
        visible_connectors: usize,
    ) -> Document {
        let margin = Insets::uniform(CANVAS_MARGIN);
        let content_size = layout.canvas_size();
        let svg_size = self.calculate_svg_dimensions(content_size, margin);

        let mut doc = Document::new()
            .set(
                "viewBox",
                format!("0 0 {} {}", svg_size.width(), svg_size.height()),
            )
            .set("width", svg_size.width())
            .set("height", svg_size.height());

        if let Some(background) = &self.background {
            doc = doc.add(
                svg_element::Rectangle::new()
                    .set("x", 0)
                    .set("y", 0)
                    .set("width", svg_size.width())
                    .set("height", svg_size.height())
                    .set("fill", background),
            );
        }

        doc = doc.add(self.draw_marker_definitions());

        let offset = Point::new(margin.left(), margin.top());
        let mut main_group = svg_element::Group::new();
        if !offset.is_zero() {
            main_group = main_group.set(
                "transform",
                format!("translate({}, {})", offset.x(), offset.y()),
            );
        }

        // Connectors render beneath the node boxes.
        for connector in layout.connectors().iter().take(visible_connectors) {
            main_group = main_group.add(self.render_connector(connector));
        }
        for (node, placement) in nodes.iter().zip(layout.placements()).take(visible_nodes) {
            main_group = main_group.add(self.render_node(node, placement, layout));
        }

        doc.add(main_group)
    }

    /// Writes an SVG document to the configured file
    fn write_document(&self, doc: Document) -> Result<(), Error> {
        info!(file_name = self.file_name; "Creating SVG file");
        let f = match File::create(&self.file_name) {
            Ok(file) => file,
            Err(err) => {
                error!(file_name = self.file_name, err:err; "Failed to create SVG file");
                return Err(Error::Io(err));
            }
        };

        if let Err(err) = write!(&f, "{doc}") {
            error!(file_name = self.file_name, err:err; "Failed to write SVG content");
            return Err(Error::Io(err));
        }

        Ok(())
    }
}

impl Exporter for Svg {
    fn export_canvas(
        &mut self,
        nodes: &[WorkflowNode],
        layout: &CanvasLayout,
    ) -> Result<(), Error> {
        if nodes.len() != layout.node_count() {
            return Err(Error::Render(format!(
                "node list ({}) does not match layout ({})",
                nodes.len(),
                layout.node_count()
            )));
        }
        let doc = self.render_canvas(nodes, layout, layout.node_count(), layout.connectors().len());
        debug!("SVG document rendered");

        self.write_document(doc)
    }

    fn export_revealed(
        &mut self,
        nodes: &[WorkflowNode],
        layout: &CanvasLayout,
        reveal: &RevealSchedule,
    ) -> Result<(), Error> {
        if nodes.len() != layout.node_count() {
            return Err(Error::Render(format!(
                "node list ({}) does not match layout ({})",
                nodes.len(),
                layout.node_count()
            )));
        }
        let visible_nodes = reveal.nodes_revealed().min(layout.node_count());
        let visible_connectors = reveal.connectors_revealed().min(layout.connectors().len());
        let doc = self.render_canvas(nodes, layout, visible_nodes, visible_connectors);
        debug!(visible_nodes, visible_connectors; "Partial SVG document rendered");

        self.write_document(doc)
    }
}
