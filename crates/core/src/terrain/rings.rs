//! Outward square-ring traversal order around a seed position.
//!
//! Rings are pure geometry: they emit coordinates regardless of grid bounds
//! so the traversal stays independent of grid size, and the consumer skips
//! whatever falls outside.

use crate::types::Pos;

/// The ring at exact Chebyshev distance `distance` from `seed`, traced
/// clockwise from the top-left corner. Each of the `8 * distance`
/// coordinates appears exactly once; every edge stops short of the corner
/// the next (or first) edge owns.
pub(super) fn ring(seed: Pos, distance: i32) -> impl Iterator<Item = Pos> {
    debug_assert!(distance >= 1);
    let d = distance;
    let top = (seed.x - d..=seed.x + d).map(move |x| Pos { y: seed.y + d, x });
    let right = (seed.y - d..=seed.y + d - 1).rev().map(move |y| Pos { y, x: seed.x + d });
    let bottom = (seed.x - d..=seed.x + d - 1).rev().map(move |x| Pos { y: seed.y - d, x });
    let left = (seed.y - d + 1..=seed.y + d - 1).map(move |y| Pos { y, x: seed.x - d });
    top.chain(right).chain(bottom).chain(left)
}

/// All rings for `distance = 1..=max_distance`, grouped by increasing
/// distance. Restartable: calling again yields the same sequence.
pub(super) fn rings(seed: Pos, max_distance: i32) -> impl Iterator<Item = Pos> {
    (1..=max_distance).flat_map(move |distance| ring(seed, distance))
}
