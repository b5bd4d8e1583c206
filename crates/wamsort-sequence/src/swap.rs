//! Manual swap: nudge selected cuts one slot up or down the order

use serde::{Deserialize, Serialize};

/// Which neighbour a selected cut trades places with
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    /// Towards the start of the order (earlier cut)
    Up,
    /// Towards the end of the order (later cut)
    Down,
}

/// Swap each selected position with its neighbour in `direction`
///
/// Selections are processed starting from the end the cuts move towards, so
/// adjacent selected cuts move as a group. Only a cut whose target slot lies
/// outside the order stays put, and the selected cut behind it may still
/// trade places with it. Returns the positions of the selected cuts after
/// the pass, sorted; positions outside `0..items.len()` are ignored.
pub fn swap<T>(items: &mut [T], direction: Direction, selected: &[usize]) -> Vec<usize> {
    let len = items.len();
    let mut picks: Vec<usize> = selected
        .iter()
        .copied()
        .filter(|&index| {
            let in_range = index < len;
            if !in_range {
                tracing::debug!(index, len, "Ignoring selection outside the order");
            }
            in_range
        })
        .collect();
    picks.sort_unstable();
    picks.dedup();
    if direction == Direction::Down {
        picks.reverse();
    }

    let mut positions: Vec<usize> = Vec::with_capacity(picks.len());
    for index in picks {
        let target = match direction {
            Direction::Up => index.checked_sub(1),
            Direction::Down => Some(index + 1).filter(|&t| t < len),
        };
        match target {
            Some(target) => {
                items.swap(index, target);
                for position in positions.iter_mut().filter(|p| **p == target) {
                    *position = index;
                }
                positions.push(target);
            }
            None => {
                tracing::debug!(index, ?direction, "No slot beyond the end of the order");
                positions.push(index);
            }
        }
    }

    positions.sort_unstable();
    positions
}
