//! Connector routing between consecutive nodes.

use meander_core::geometry::Point;

use super::{Error, NodeMetrics, NodePlacement};

/// The geometry of one connector.
///
/// Endpoints are absolute canvas coordinates. A [`Run`](Segment::Run)
/// joins two nodes in the same row at the row's mid-height, leaving the
/// trailing edge of the source and entering the leading edge of the
/// target (which edge is which follows the row direction). A
/// [`Drop`](Segment::Drop) joins the bottom-center of a row's last node
/// to the top-center of the next row's first node.
///
/// A drop is a literal straight segment even when the two anchor points
/// are horizontally offset (short final rows); see the design notes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Segment {
    /// Same-row horizontal run.
    Run { from: Point, to: Point },
    /// Row-change drop.
    Drop { from: Point, to: Point },
}

impl Segment {
    /// Returns the start point of the segment
    pub fn start(self) -> Point {
        match self {
            Segment::Run { from, .. } | Segment::Drop { from, .. } => from,
        }
    }

    /// Returns the end point of the segment
    pub fn end(self) -> Point {
        match self {
            Segment::Run { to, .. } | Segment::Drop { to, .. } => to,
        }
    }

    /// Returns true if this segment crosses a row boundary
    pub fn is_row_change(self) -> bool {
        matches!(self, Segment::Drop { .. })
    }
}

/// A connector between nodes `from_index` and `from_index + 1`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConnectorPath {
    from_index: usize,
    to_index: usize,
    segment: Segment,
}

impl ConnectorPath {
    /// Returns the sequence index of the source node.
    pub fn from_index(self) -> usize {
        self.from_index
    }

    /// Returns the sequence index of the target node (always source + 1).
    pub fn to_index(self) -> usize {
        self.to_index
    }

    /// Returns the connector's geometry.
    pub fn segment(self) -> Segment {
        self.segment
    }
}

/// Computes the connector joining `positions[index]` to
/// `positions[index + 1]`.
///
/// # Errors
///
/// Returns [`Error::ConnectorOutOfRange`] unless
/// `index < positions.len() - 1`, and [`Error::InvalidDimension`] for
/// non-positive metrics.
pub fn connector_between(
    positions: &[NodePlacement],
    index: usize,
    metrics: &NodeMetrics,
) -> Result<ConnectorPath, Error> {
    metrics.validate()?;
    let connector_count = positions.len().saturating_sub(1);
    if index >= connector_count {
        return Err(Error::ConnectorOutOfRange {
            index,
            connector_count,
        });
    }

    let curr = positions[index];
    let next = positions[index + 1];

    let segment = if curr.row() == next.row() {
        let y = curr.origin().y() + metrics.node_height() / 2.0;
        // The trailing edge of the source and the leading edge of the
        // target swap sides on right-to-left rows.
        let (from_x, to_x) = if curr.direction().is_left_to_right() {
            (curr.origin().x() + metrics.node_width(), next.origin().x())
        } else {
            (curr.origin().x(), next.origin().x() + metrics.node_width())
        };
        Segment::Run {
            from: Point::new(from_x, y),
            to: Point::new(to_x, y),
        }
    } else {
        Segment::Drop {
            from: Point::new(
                curr.origin().x() + metrics.node_width() / 2.0,
                curr.origin().y() + metrics.node_height(),
            ),
            to: Point::new(
                next.origin().x() + metrics.node_width() / 2.0,
                next.origin().y(),
            ),
        }
    };

    Ok(ConnectorPath {
        from_index: index,
        to_index: index + 1,
        segment,
    })
}

/// Computes the connector for every adjacent pair of placements, in
/// sequence order.
///
/// Fewer than two placements yield an empty vector, not an error.
///
/// # Errors
/// Returns [`Error::InvalidDimension`] for non-positive metrics.
pub fn compute_connectors(
    positions: &[NodePlacement],
    metrics: &NodeMetrics,
) -> Result<Vec<ConnectorPath>, Error> {
    metrics.validate()?;
    let connector_count = positions.len().saturating_sub(1);
    let mut connectors = Vec::with_capacity(connector_count);
    for index in 0..connector_count {
        connectors.push(connector_between(positions, index, metrics)?);
    }
    Ok(connectors)
}

#[cfg(test)]
mod tests {
    use float_cmp::assert_approx_eq;
    use proptest::prelude::*;

    use super::super::compute_positions;
    use super::*;

    fn metrics() -> NodeMetrics {
        NodeMetrics::new(140.0, 72.0, 40.0, 40.0)
    }

    #[test]
    fn test_six_node_layout_has_five_connectors() {
        let m = metrics();
        let positions = compute_positions(6, 4, &m).unwrap();
        let connectors = compute_connectors(&positions, &m).unwrap();
        assert_eq!(connectors.len(), 5);

        for (i, connector) in connectors.iter().enumerate() {
            assert_eq!(connector.from_index(), i);
            assert_eq!(connector.to_index(), i + 1);
        }

        // Node 3 closes row 0 and node 4 opens row 1, so connector 3 is
        // the only row change.
        for (i, connector) in connectors.iter().enumerate() {
            assert_eq!(connector.segment().is_row_change(), i == 3);
        }
    }

    #[test]
    fn test_left_to_right_run_edges() {
        let m = metrics();
        let positions = compute_positions(2, 4, &m).unwrap();
        let connector = connector_between(&positions, 0, &m).unwrap();

        // Right edge of node 0 to left edge of node 1, at mid-height.
        let segment = connector.segment();
        assert!(!segment.is_row_change());
        assert_approx_eq!(f32, segment.start().x(), 140.0);
        assert_approx_eq!(f32, segment.end().x(), 180.0);
        assert_approx_eq!(f32, segment.start().y(), 36.0);
        assert_approx_eq!(f32, segment.end().y(), 36.0);
    }

    #[test]
    fn test_right_to_left_run_edges() {
        let m = metrics();
        // Nodes 4 and 5 sit in row 1 (right-to-left) at capacity 4.
        let positions = compute_positions(6, 4, &m).unwrap();
        let connector = connector_between(&positions, 4, &m).unwrap();

        // Node 4 is at x=540, node 5 at x=360: the run leaves node 4's
        // left edge and enters node 5's right edge.
        let segment = connector.segment();
        assert_approx_eq!(f32, segment.start().x(), 540.0);
        assert_approx_eq!(f32, segment.end().x(), 500.0);
        assert_approx_eq!(f32, segment.start().y(), 112.0 + 36.0);
    }

    #[test]
    fn test_row_change_anchors_bottom_center_to_top_center() {
        let m = metrics();
        let positions = compute_positions(6, 4, &m).unwrap();
        let connector = connector_between(&positions, 3, &m).unwrap();

        let segment = connector.segment();
        assert!(segment.is_row_change());
        // Bottom-center of node 3 (x=540).
        assert_approx_eq!(f32, segment.start().x(), 540.0 + 70.0);
        assert_approx_eq!(f32, segment.start().y(), 72.0);
        // Top-center of node 4 (also x=540 - row 1 starts in the
        // rightmost slot).
        assert_approx_eq!(f32, segment.end().x(), 540.0 + 70.0);
        assert_approx_eq!(f32, segment.end().y(), 112.0);
    }

    #[test]
    fn test_fewer_than_two_nodes_yield_no_connectors() {
        let m = metrics();
        for count in [0, 1] {
            let positions = compute_positions(count, 4, &m).unwrap();
            let connectors = compute_connectors(&positions, &m).unwrap();
            assert!(connectors.is_empty());
        }
    }

    #[test]
    fn test_out_of_range_request_is_signaled() {
        let m = metrics();
        let positions = compute_positions(3, 4, &m).unwrap();
        let err = connector_between(&positions, 2, &m).unwrap_err();
        assert_eq!(
            err,
            Error::ConnectorOutOfRange {
                index: 2,
                connector_count: 2
            }
        );
    }

    proptest! {
        #[test]
        fn prop_connector_count(
            node_count in 0usize..200,
            row_capacity in 1usize..12,
        ) {
            let m = metrics();
            let positions = compute_positions(node_count, row_capacity, &m).unwrap();
            let connectors = compute_connectors(&positions, &m).unwrap();
            prop_assert_eq!(connectors.len(), node_count.saturating_sub(1));
        }

        #[test]
        fn prop_row_change_exactly_at_row_seams(
            node_count in 0usize..200,
            row_capacity in 1usize..12,
        ) {
            let m = metrics();
            let positions = compute_positions(node_count, row_capacity, &m).unwrap();
            let connectors = compute_connectors(&positions, &m).unwrap();
            for connector in connectors {
                let crosses = positions[connector.from_index()].row()
                    != positions[connector.to_index()].row();
                prop_assert_eq!(connector.segment().is_row_change(), crosses);
            }
        }
    }
}
