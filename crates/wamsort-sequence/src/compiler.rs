//! Order compiler: flattens rows into the final cut sequence

use crate::containment::ContainmentForest;
use crate::rows::Row;

/// Emit every block of every row, each preceded by the cuts it encloses
///
/// A cut is emitted once, at its first occurrence in the depth-first walk,
/// so it always comes before every cut that encloses it. Cuts reachable
/// from no row are appended in input order.
pub fn compile_order(forest: &ContainmentForest, rows: &[Row]) -> Vec<usize> {
    let mut emitted = vec![false; forest.len()];
    let mut order = Vec::with_capacity(forest.len());

    for row in rows {
        for &block in &row.blocks {
            emit(forest, block, &mut emitted, &mut order);
        }
    }

    for index in 0..forest.len() {
        if !emitted[index] {
            tracing::warn!(index, "Cut not reached from any row");
            emit(forest, index, &mut emitted, &mut order);
        }
    }

    order
}

fn emit(forest: &ContainmentForest, index: usize, emitted: &mut [bool], order: &mut Vec<usize>) {
    if emitted[index] {
        return;
    }
    for &child in forest.children(index) {
        emit(forest, child, emitted, order);
    }
    emitted[index] = true;
    order.push(index);
}
