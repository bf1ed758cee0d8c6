//! Randomized neighbor selection for the depth-first carve.

use rand_chacha::rand_core::Rng;

use crate::grid::Grid;
use crate::types::{Cell, Direction};
use crate::visited::VisitedSet;

/// Picks the next cell to advance into from `current`: the four directions
/// are shuffled fresh on every call, and the first candidate that is both in
/// bounds and unvisited wins. `None` means the traversal has to backtrack.
///
/// Pure query over grid and visited state; only the RNG advances.
pub fn attempt_move<R: Rng>(
    grid: &Grid,
    visited: &VisitedSet,
    current: Cell,
    rng: &mut R,
) -> Option<Cell> {
    let mut directions = Direction::ALL;
    shuffle_directions(&mut directions, rng);

    directions
        .into_iter()
        .map(|direction| current.neighbor(direction))
        .find(|&candidate| grid.in_bounds(candidate) && !visited.contains(candidate))
}

// Fisher-Yates over the fixed four-element direction list.
fn shuffle_directions<R: Rng>(directions: &mut [Direction; 4], rng: &mut R) {
    for i in 0..directions.len() {
        let j = i + (rng.next_u32() as usize) % (directions.len() - i);
        directions.swap(i, j);
    }
}
