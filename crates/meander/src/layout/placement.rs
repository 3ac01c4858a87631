//! Node placement on the serpentine grid.

use meander_core::geometry::{Bounds, Point};

use super::{Error, NodeMetrics};

/// Horizontal reading direction of a row.
///
/// Even rows run left-to-right, odd rows right-to-left, so connectors
/// read naturally across row wraps.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowDirection {
    LeftToRight,
    RightToLeft,
}

impl RowDirection {
    /// Returns the direction of the given row index.
    pub fn for_row(row: usize) -> Self {
        if row % 2 == 0 {
            RowDirection::LeftToRight
        } else {
            RowDirection::RightToLeft
        }
    }

    /// Returns true for [`RowDirection::LeftToRight`]
    pub fn is_left_to_right(self) -> bool {
        matches!(self, RowDirection::LeftToRight)
    }
}

/// Where one node of the sequence lands on the canvas.
///
/// A placement is derived entirely from the node's index and the layout
/// inputs; it holds no reference to the node record itself.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NodePlacement {
    index: usize,
    row: usize,
    column_in_row: usize,
    direction: RowDirection,
    origin: Point,
}

impl NodePlacement {
    /// Returns the node's position in the input sequence (0-based).
    pub fn index(self) -> usize {
        self.index
    }

    /// Returns the row this node falls in.
    pub fn row(self) -> usize {
        self.row
    }

    /// Returns the node's slot within its row, counted in sequence order.
    ///
    /// Note this does not reverse on right-to-left rows; the x-coordinate
    /// does.
    pub fn column_in_row(self) -> usize {
        self.column_in_row
    }

    /// Returns the reading direction of the node's row.
    pub fn direction(self) -> RowDirection {
        self.direction
    }

    /// Returns the top-left corner of the node box, in canvas coordinates.
    pub fn origin(self) -> Point {
        self.origin
    }

    /// Returns the node box bounds under the given metrics.
    pub fn bounds(self, metrics: &NodeMetrics) -> Bounds {
        self.origin.to_bounds(metrics.node_size())
    }
}

/// Computes a placement for every node of an ordered sequence.
///
/// The mapping is pure: the same `(node_count, row_capacity, metrics)`
/// always produces the identical placement list. Row and column derive
/// from integer division by `row_capacity`; the x-coordinate reverses on
/// odd rows so the visual order serpentines:
///
/// ```text
/// 0 → 1 → 2 → 3
///             ↓
/// 7 ← 6 ← 5 ← 4
/// ↓
/// 8 → 9 ...
/// ```
///
/// # Errors
///
/// Returns [`Error::InvalidRowCapacity`] if `row_capacity` is zero, and
/// [`Error::InvalidDimension`] if any metric is not positive. A
/// `node_count` of zero is valid and yields an empty vector.
pub fn compute_positions(
    node_count: usize,
    row_capacity: usize,
    metrics: &NodeMetrics,
) -> Result<Vec<NodePlacement>, Error> {
    if row_capacity == 0 {
        return Err(Error::InvalidRowCapacity);
    }
    metrics.validate()?;

    let mut placements = Vec::with_capacity(node_count);
    for index in 0..node_count {
        let row = index / row_capacity;
        let column_in_row = index % row_capacity;
        let direction = RowDirection::for_row(row);
        let x = match direction {
            RowDirection::LeftToRight => column_in_row as f32 * metrics.pitch_x(),
            RowDirection::RightToLeft => {
                (row_capacity - 1 - column_in_row) as f32 * metrics.pitch_x()
            }
        };
        let y = row as f32 * metrics.pitch_y();
        placements.push(NodePlacement {
            index,
            row,
            column_in_row,
            direction,
            origin: Point::new(x, y),
        });
    }
    Ok(placements)
}

#[cfg(test)]
mod tests {
    use float_cmp::assert_approx_eq;
    use proptest::prelude::*;

    use super::*;

    fn metrics() -> NodeMetrics {
        NodeMetrics::new(140.0, 72.0, 40.0, 40.0)
    }

    #[test]
    fn test_six_nodes_across_two_rows() {
        let positions = compute_positions(6, 4, &metrics()).unwrap();
        assert_eq!(positions.len(), 6);

        // Row 0: four nodes left-to-right at slots 0..4.
        for (i, expected_x) in [0.0, 180.0, 360.0, 540.0].into_iter().enumerate() {
            assert_eq!(positions[i].row(), 0);
            assert_eq!(positions[i].direction(), RowDirection::LeftToRight);
            assert_approx_eq!(f32, positions[i].origin().x(), expected_x);
            assert_approx_eq!(f32, positions[i].origin().y(), 0.0);
        }

        // Row 1 reverses: node 4 takes the rightmost slot, node 5 the
        // second-from-right.
        assert_eq!(positions[4].row(), 1);
        assert_eq!(positions[4].direction(), RowDirection::RightToLeft);
        assert_approx_eq!(f32, positions[4].origin().x(), 540.0);
        assert_approx_eq!(f32, positions[4].origin().y(), 112.0);

        assert_eq!(positions[5].column_in_row(), 1);
        assert_approx_eq!(f32, positions[5].origin().x(), 360.0);
        assert_approx_eq!(f32, positions[5].origin().y(), 112.0);
    }

    #[test]
    fn test_empty_sequence_is_not_an_error() {
        let positions = compute_positions(0, 4, &metrics()).unwrap();
        assert!(positions.is_empty());
    }

    #[test]
    fn test_zero_capacity_fails_fast() {
        assert_eq!(
            compute_positions(6, 0, &metrics()).unwrap_err(),
            Error::InvalidRowCapacity
        );
    }

    #[test]
    fn test_invalid_metrics_fail_fast() {
        let bad = NodeMetrics::new(140.0, 0.0, 40.0, 40.0);
        assert_eq!(
            compute_positions(6, 4, &bad).unwrap_err(),
            Error::InvalidDimension {
                name: "node_height",
                value: 0.0
            }
        );
    }

    #[test]
    fn test_recompute_at_narrower_capacity_rederives_everything() {
        // Scenario: the same 6 nodes drop from capacity 4 to capacity 2.
        let narrow = compute_positions(6, 2, &metrics()).unwrap();
        assert_eq!(narrow.last().unwrap().row(), 2);
        // Fresh direction alternation: row 1 reverses, row 2 runs forward
        // again.
        assert_eq!(narrow[2].direction(), RowDirection::RightToLeft);
        assert_eq!(narrow[4].direction(), RowDirection::LeftToRight);
        // Node 2 now opens row 1 at the rightmost of 2 slots.
        assert_eq!(narrow[2].column_in_row(), 0);
        assert_approx_eq!(f32, narrow[2].origin().x(), 180.0);
        assert_approx_eq!(f32, narrow[2].origin().y(), 112.0);
    }

    #[test]
    fn test_determinism() {
        let first = compute_positions(23, 3, &metrics()).unwrap();
        let second = compute_positions(23, 3, &metrics()).unwrap();
        assert_eq!(first, second);
    }

    proptest! {
        #[test]
        fn prop_direction_alternates_by_row(
            node_count in 0usize..200,
            row_capacity in 1usize..12,
        ) {
            let positions = compute_positions(node_count, row_capacity, &metrics()).unwrap();
            for placement in positions {
                prop_assert_eq!(
                    placement.direction().is_left_to_right(),
                    placement.row() % 2 == 0
                );
            }
        }

        #[test]
        fn prop_y_monotonic_across_rows(
            node_count in 0usize..200,
            row_capacity in 1usize..12,
        ) {
            let positions = compute_positions(node_count, row_capacity, &metrics()).unwrap();
            for pair in positions.windows(2) {
                if pair[0].row() < pair[1].row() {
                    prop_assert!(pair[0].origin().y() < pair[1].origin().y());
                }
            }
        }

        #[test]
        fn prop_row_column_derivation(
            node_count in 0usize..200,
            row_capacity in 1usize..12,
        ) {
            let positions = compute_positions(node_count, row_capacity, &metrics()).unwrap();
            for placement in positions {
                prop_assert_eq!(placement.row(), placement.index() / row_capacity);
                prop_assert_eq!(placement.column_in_row(), placement.index() % row_capacity);
            }
        }

        #[test]
        fn prop_x_stays_within_row_extent(
            node_count in 0usize..200,
            row_capacity in 1usize..12,
        ) {
            let m = metrics();
            let positions = compute_positions(node_count, row_capacity, &m).unwrap();
            let max_x = (row_capacity - 1) as f32 * m.pitch_x();
            for placement in positions {
                prop_assert!(placement.origin().x() >= 0.0);
                prop_assert!(placement.origin().x() <= max_x + 0.001);
            }
        }
    }
}
