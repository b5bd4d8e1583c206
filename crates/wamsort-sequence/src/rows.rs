//! Row partitioner
//!
//! Groups top-level blocks into horizontal bands, top of the bed first, and
//! sweeps each band in the opposite direction to the one before it.

use serde::Serialize;
use wamsort_core::BoundingBox;

/// Horizontal travel direction through a row
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SweepDirection {
    /// Ascending minimum x
    LeftToRight,
    /// Descending minimum x
    RightToLeft,
}

impl SweepDirection {
    /// Direction of the row at `index`: even rows run left to right
    pub fn for_row(index: usize) -> Self {
        if index % 2 == 0 {
            Self::LeftToRight
        } else {
            Self::RightToLeft
        }
    }
}

impl std::fmt::Display for SweepDirection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::LeftToRight => write!(f, "left to right"),
            Self::RightToLeft => write!(f, "right to left"),
        }
    }
}

/// One band of blocks in sweep order
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Row {
    pub direction: SweepDirection,
    /// Block indices into the box list, in the order they are cut
    pub blocks: Vec<usize>,
}

/// Split `blocks` into rows
///
/// The topmost remaining block (greatest maximum y, then greatest minimum y)
/// is the row's reference; every remaining block whose maximum y lies above
/// the reference's minimum y joins its row. Ties keep their input order.
pub fn partition_rows(blocks: &[usize], boxes: &[BoundingBox]) -> Vec<Row> {
    let mut remaining = blocks.to_vec();
    remaining.sort_by(|&a, &b| {
        boxes[b]
            .max_y
            .total_cmp(&boxes[a].max_y)
            .then(boxes[b].min_y.total_cmp(&boxes[a].min_y))
    });

    let mut rows = Vec::new();
    while let Some(&reference) = remaining.first() {
        let floor = boxes[reference].min_y;
        let (mut members, rest): (Vec<usize>, Vec<usize>) = remaining
            .iter()
            .partition(|&&i| i == reference || boxes[i].max_y > floor);

        let direction = SweepDirection::for_row(rows.len());
        match direction {
            SweepDirection::LeftToRight => {
                members.sort_by(|&a, &b| boxes[a].min_x.total_cmp(&boxes[b].min_x))
            }
            SweepDirection::RightToLeft => {
                members.sort_by(|&a, &b| boxes[b].min_x.total_cmp(&boxes[a].min_x))
            }
        }

        tracing::debug!(row = rows.len(), %direction, blocks = ?members, "Formed row");
        rows.push(Row {
            direction,
            blocks: members,
        });
        remaining = rest;
    }

    rows
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bbox(min_x: f64, min_y: f64, max_x: f64, max_y: f64) -> BoundingBox {
        BoundingBox::new(min_x, min_y, max_x, max_y)
    }

    #[test]
    fn test_single_row_left_to_right() {
        let boxes = [bbox(200.0, 0.0, 300.0, 100.0), bbox(0.0, 0.0, 100.0, 100.0)];
        let rows = partition_rows(&[0, 1], &boxes);
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].direction, SweepDirection::LeftToRight);
        assert_eq!(rows[0].blocks, vec![1, 0]);
    }

    #[test]
    fn test_rows_alternate_direction() {
        // Two bands of two parts each, y grows upward
        let boxes = [
            bbox(0.0, 100.0, 50.0, 150.0),
            bbox(100.0, 100.0, 150.0, 150.0),
            bbox(0.0, 0.0, 50.0, 50.0),
            bbox(100.0, 0.0, 150.0, 50.0),
        ];
        let rows = partition_rows(&[0, 1, 2, 3], &boxes);
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].blocks, vec![0, 1]);
        assert_eq!(rows[1].direction, SweepDirection::RightToLeft);
        assert_eq!(rows[1].blocks, vec![3, 2]);
    }

    #[test]
    fn test_membership_uses_reference_floor() {
        // Block 1 dips below block 0 but its top is above block 0's bottom;
        // block 2 sits only just below block 0's bottom.
        let boxes = [
            bbox(0.0, 50.0, 10.0, 100.0),
            bbox(20.0, 0.0, 30.0, 60.0),
            bbox(40.0, 0.0, 50.0, 50.0),
        ];
        let rows = partition_rows(&[0, 1, 2], &boxes);
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].blocks, vec![0, 1]);
        assert_eq!(rows[1].blocks, vec![2]);
    }

    #[test]
    fn test_degenerate_reference_forms_its_own_row() {
        let boxes = [bbox(0.0, 10.0, 10.0, 10.0), bbox(20.0, 0.0, 30.0, 10.0)];
        let rows = partition_rows(&[0, 1], &boxes);
        // Block 1's top equals the reference floor, which is not above it
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].blocks, vec![0]);
        assert_eq!(rows[1].blocks, vec![1]);
    }

    #[test]
    fn test_subset_of_blocks() {
        let boxes = [
            bbox(0.0, 0.0, 100.0, 100.0),
            bbox(10.0, 10.0, 20.0, 20.0),
            bbox(200.0, 0.0, 300.0, 100.0),
        ];
        let rows = partition_rows(&[0, 2], &boxes);
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].blocks, vec![0, 2]);
    }

    #[test]
    fn test_empty() {
        assert!(partition_rows(&[], &[]).is_empty());
    }

    #[test]
    fn test_direction_for_row() {
        assert_eq!(SweepDirection::for_row(0), SweepDirection::LeftToRight);
        assert_eq!(SweepDirection::for_row(1), SweepDirection::RightToLeft);
        assert_eq!(SweepDirection::for_row(4), SweepDirection::LeftToRight);
    }
}
