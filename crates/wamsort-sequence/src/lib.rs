//! # wamsort Sequence
//!
//! The ordering engine. Given the cuts of a program it decides an order in
//! which every nested cut comes before the cut enclosing it, and the head
//! sweeps the bed in alternating rows:
//!
//! 1. [`containment`] compares all pairs of bounding boxes
//! 2. [`rows`] bands the top-level cuts by vertical overlap
//! 3. [`compiler`] walks the rows, emitting enclosed cuts first
//!
//! [`swap`] covers manual nudges of single cuts and shares no state with the
//! rest; it only permutes the order it is given.

pub mod compiler;
pub mod containment;
pub mod rows;
pub mod swap;

pub use compiler::compile_order;
pub use containment::ContainmentForest;
pub use rows::{partition_rows, Row, SweepDirection};
pub use swap::{swap, Direction};

use wamsort_core::{BoundingBox, Cut};

/// Intermediate results of one reorder pass
#[derive(Debug, Clone)]
pub struct SequencePlan {
    pub forest: ContainmentForest,
    pub rows: Vec<Row>,
    /// `order[k]` is the input index of the cut to run k-th
    pub order: Vec<usize>,
}

/// Compute the full plan for a list of bounding boxes
pub fn plan(boxes: &[BoundingBox]) -> SequencePlan {
    let forest = ContainmentForest::resolve(boxes);

    let depth = forest.max_depth();
    if depth > 1 {
        tracing::warn!(
            depth,
            "Cuts are nested more than two levels deep; check the order before cutting"
        );
    }

    let roots = forest.roots();
    let rows = partition_rows(&roots, boxes);
    let order = compile_order(&forest, &rows);

    tracing::info!(
        "Reordered {} cuts ({} top-level) into {} rows",
        order.len(),
        roots.len(),
        rows.len()
    );

    SequencePlan {
        forest,
        rows,
        order,
    }
}

/// New order for `cuts`, as indices into the slice
pub fn reorder(cuts: &[Cut]) -> Vec<usize> {
    let boxes: Vec<BoundingBox> = cuts.iter().map(|cut| *cut.bbox()).collect();
    plan(&boxes).order
}
