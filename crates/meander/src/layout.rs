//! Serpentine canvas layout.
//!
//! The layout engine maps an ordered node sequence onto a boustrophedon
//! grid: nodes fill rows up to a capacity, and each row reverses the
//! horizontal direction of the previous one so the reading order snakes
//! down the canvas. Consecutive nodes are joined by connectors - a
//! horizontal run within a row, a straight drop on a row change.
//!
//! Everything here is a pure projection of `(node_count, row_capacity,
//! metrics)`: recomputing with the same inputs yields identical output,
//! and any input change (a grown node list, a viewport breakpoint)
//! recomputes the collections from scratch rather than mutating them.

mod connector;
mod placement;

pub use connector::{ConnectorPath, Segment, compute_connectors, connector_between};
pub use placement::{NodePlacement, RowDirection, compute_positions};

use log::debug;
use serde::Deserialize;
use thiserror::Error as ThisError;

use meander_core::geometry::{Bounds, Size};

/// Errors produced by the layout engine.
///
/// These are programming or configuration errors, not transient
/// conditions; callers should surface them immediately rather than retry.
#[derive(Debug, Clone, PartialEq, ThisError)]
pub enum Error {
    /// A row capacity of zero was supplied.
    #[error("row capacity must be at least 1")]
    InvalidRowCapacity,

    /// A node dimension or gap was zero or negative.
    #[error("{name} must be positive, got {value}")]
    InvalidDimension { name: &'static str, value: f32 },

    /// A connector was requested for an index pair beyond the node count.
    #[error("connector index {index} out of range ({connector_count} connectors exist)")]
    ConnectorOutOfRange {
        index: usize,
        connector_count: usize,
    },
}

/// Pixel dimensions of a node box and the gaps between boxes.
///
/// Two profiles exist, matching the canvas density modes: [`normal`] for
/// regular viewports and [`compact`] for narrow ones.
///
/// [`normal`]: NodeMetrics::normal
/// [`compact`]: NodeMetrics::compact
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default)]
pub struct NodeMetrics {
    node_width: f32,
    node_height: f32,
    gap_x: f32,
    gap_y: f32,
}

impl Default for NodeMetrics {
    fn default() -> Self {
        Self::normal()
    }
}

impl NodeMetrics {
    /// Regular-density metrics: 140x72 boxes with 40px gaps.
    pub fn normal() -> Self {
        Self {
            node_width: 140.0,
            node_height: 72.0,
            gap_x: 40.0,
            gap_y: 40.0,
        }
    }

    /// Compact-density metrics for narrow viewports: 120x64 boxes with 24px gaps.
    pub fn compact() -> Self {
        Self {
            node_width: 120.0,
            node_height: 64.0,
            gap_x: 24.0,
            gap_y: 24.0,
        }
    }

    /// Creates metrics from explicit dimensions.
    pub fn new(node_width: f32, node_height: f32, gap_x: f32, gap_y: f32) -> Self {
        Self {
            node_width,
            node_height,
            gap_x,
            gap_y,
        }
    }

    /// Returns the node box width
    pub fn node_width(self) -> f32 {
        self.node_width
    }

    /// Returns the node box height
    pub fn node_height(self) -> f32 {
        self.node_height
    }

    /// Returns the horizontal gap between adjacent nodes in a row
    pub fn gap_x(self) -> f32 {
        self.gap_x
    }

    /// Returns the vertical gap between rows
    pub fn gap_y(self) -> f32 {
        self.gap_y
    }

    /// Returns the node box dimensions as a [`Size`]
    pub fn node_size(self) -> Size {
        Size::new(self.node_width, self.node_height)
    }

    /// Horizontal distance between the left edges of adjacent column slots
    pub fn pitch_x(self) -> f32 {
        self.node_width + self.gap_x
    }

    /// Vertical distance between the top edges of adjacent rows
    pub fn pitch_y(self) -> f32 {
        self.node_height + self.gap_y
    }

    /// Checks that every dimension is positive.
    ///
    /// # Errors
    /// Returns [`Error::InvalidDimension`] naming the first offending
    /// field. Dimensions are never clamped.
    pub fn validate(self) -> Result<(), Error> {
        let fields = [
            ("node_width", self.node_width),
            ("node_height", self.node_height),
            ("gap_x", self.gap_x),
            ("gap_y", self.gap_y),
        ];
        for (name, value) in fields {
            if !(value > 0.0) {
                return Err(Error::InvalidDimension { name, value });
            }
        }
        Ok(())
    }
}

/// A fully computed canvas: placements, connectors, and the inputs that
/// produced them.
///
/// A `CanvasLayout` is immutable once computed. When the node list, row
/// capacity, or metrics change, compute a fresh layout; stale
/// row/column/direction values are never reused.
#[derive(Debug, Clone, PartialEq)]
pub struct CanvasLayout {
    row_capacity: usize,
    metrics: NodeMetrics,
    placements: Vec<NodePlacement>,
    connectors: Vec<ConnectorPath>,
}

impl CanvasLayout {
    /// Computes placements and connectors for `node_count` nodes.
    ///
    /// # Errors
    /// Returns [`Error::InvalidRowCapacity`] if `row_capacity` is zero and
    /// [`Error::InvalidDimension`] for non-positive metrics. A
    /// `node_count` of zero is not an error and yields empty collections.
    pub fn compute(
        node_count: usize,
        row_capacity: usize,
        metrics: NodeMetrics,
    ) -> Result<Self, Error> {
        let placements = compute_positions(node_count, row_capacity, &metrics)?;
        let connectors = compute_connectors(&placements, &metrics)?;
        debug!(
            node_count,
            row_capacity,
            connector_count = connectors.len();
            "Canvas layout computed"
        );
        Ok(Self {
            row_capacity,
            metrics,
            placements,
            connectors,
        })
    }

    /// Returns the placements, in node-sequence order.
    pub fn placements(&self) -> &[NodePlacement] {
        &self.placements
    }

    /// Returns the connectors, one per adjacent node pair, in sequence order.
    pub fn connectors(&self) -> &[ConnectorPath] {
        &self.connectors
    }

    /// Returns the row capacity this layout was computed with.
    pub fn row_capacity(&self) -> usize {
        self.row_capacity
    }

    /// Returns the node metrics this layout was computed with.
    pub fn metrics(&self) -> NodeMetrics {
        self.metrics
    }

    /// Returns the number of placed nodes.
    pub fn node_count(&self) -> usize {
        self.placements.len()
    }

    /// Returns the number of occupied rows.
    pub fn row_count(&self) -> usize {
        self.placements.last().map_or(0, |last| last.row() + 1)
    }

    /// Returns the canvas extent: full row width by occupied rows' height.
    ///
    /// The width spans all column slots of the row capacity even when the
    /// last row is short, so canvases with the same capacity align.
    /// Returns `Size::default()` for an empty layout.
    pub fn canvas_size(&self) -> Size {
        if self.placements.is_empty() {
            return Size::default();
        }
        let width = self.row_capacity as f32 * self.metrics.pitch_x() - self.metrics.gap_x();
        let height = self.row_count() as f32 * self.metrics.pitch_y() - self.metrics.gap_y();
        Size::new(width, height)
    }

    /// Returns the bounding box of the placed node boxes.
    ///
    /// Unlike [`canvas_size`](Self::canvas_size) this covers only occupied
    /// slots. Returns `Bounds::default()` for an empty layout.
    pub fn bounds(&self) -> Bounds {
        let node_size = self.metrics.node_size();
        let mut placements = self.placements.iter();
        let Some(first) = placements.next() else {
            return Bounds::default();
        };
        placements.fold(first.origin().to_bounds(node_size), |acc, placement| {
            acc.merge(&placement.origin().to_bounds(node_size))
        })
    }
}

#[cfg(test)]
mod tests {
    use float_cmp::assert_approx_eq;

    use super::*;

    #[test]
    fn test_metrics_validate_accepts_profiles() {
        assert_eq!(NodeMetrics::normal().validate(), Ok(()));
        assert_eq!(NodeMetrics::compact().validate(), Ok(()));
    }

    #[test]
    fn test_metrics_validate_rejects_zero_and_negative() {
        let err = NodeMetrics::new(0.0, 72.0, 40.0, 40.0).validate().unwrap_err();
        assert_eq!(
            err,
            Error::InvalidDimension {
                name: "node_width",
                value: 0.0
            }
        );

        let err = NodeMetrics::new(140.0, 72.0, -1.0, 40.0).validate().unwrap_err();
        assert_eq!(
            err,
            Error::InvalidDimension {
                name: "gap_x",
                value: -1.0
            }
        );
    }

    #[test]
    fn test_canvas_size_matches_slot_arithmetic() {
        // 6 nodes at capacity 4 occupy 2 rows.
        let layout = CanvasLayout::compute(6, 4, NodeMetrics::normal()).unwrap();
        let size = layout.canvas_size();
        assert_approx_eq!(f32, size.width(), 4.0 * 180.0 - 40.0);
        assert_approx_eq!(f32, size.height(), 2.0 * 112.0 - 40.0);
    }

    #[test]
    fn test_canvas_size_empty_layout() {
        let layout = CanvasLayout::compute(0, 4, NodeMetrics::normal()).unwrap();
        assert!(layout.canvas_size().is_zero());
        assert_eq!(layout.bounds(), Bounds::default());
        assert_eq!(layout.row_count(), 0);
    }

    #[test]
    fn test_bounds_cover_all_placements() {
        let metrics = NodeMetrics::normal();
        let layout = CanvasLayout::compute(6, 4, metrics).unwrap();
        let bounds = layout.bounds();
        assert_approx_eq!(f32, bounds.min_x(), 0.0);
        assert_approx_eq!(f32, bounds.min_y(), 0.0);
        // Row 0 is full, so the rightmost slot is occupied.
        assert_approx_eq!(f32, bounds.max_x(), 3.0 * 180.0 + 140.0);
        assert_approx_eq!(f32, bounds.max_y(), 112.0 + 72.0);
    }

    #[test]
    fn test_compute_rejects_zero_capacity() {
        let result = CanvasLayout::compute(6, 0, NodeMetrics::normal());
        assert_eq!(result.unwrap_err(), Error::InvalidRowCapacity);
    }
}
