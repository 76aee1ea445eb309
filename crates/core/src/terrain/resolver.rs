//! Per-cell constraint resolution: gather assigned neighbors, intersect
//! their allowed sets, and hand the survivors to the selection strategy.

use rand_chacha::ChaCha8Rng;

use crate::types::{GenerationError, Pos, TerrainKind};

use super::compat::allowed_neighbors;
use super::grid::TerrainGrid;
use super::strategy::SelectionStrategy;

// (dy, dx) offsets in fixed N, NE, E, SE, S, SW, W, NW order so neighbor
// iteration, and with it random-draw consumption, is deterministic.
const NEIGHBOR_OFFSETS: [(i32, i32); 8] =
    [(1, 0), (1, 1), (0, 1), (-1, 1), (-1, 0), (-1, -1), (0, -1), (1, -1)];

pub(super) fn resolve(
    grid: &TerrainGrid,
    pos: Pos,
    strategy: SelectionStrategy,
    rng: &mut ChaCha8Rng,
) -> Result<TerrainKind, GenerationError> {
    let neighbors = assigned_neighbor_kinds(grid, pos);
    if neighbors.is_empty() {
        return Ok(strategy.pick_unconstrained(rng));
    }

    let eligible = eligible_kinds(&neighbors);
    if eligible.is_empty() {
        return Err(GenerationError::UnsatisfiableCell { pos, neighbors });
    }
    Ok(strategy.pick(&eligible, &neighbors, rng))
}

fn assigned_neighbor_kinds(grid: &TerrainGrid, pos: Pos) -> Vec<TerrainKind> {
    NEIGHBOR_OFFSETS
        .iter()
        .filter_map(|&(dy, dx)| grid.kind_at(Pos { y: pos.y + dy, x: pos.x + dx }))
        .collect()
}

// Start from the first neighbor's allowed set and narrow with each
// subsequent neighbor in collection order; the result keeps the first
// allowed set's gradient ordering.
fn eligible_kinds(neighbors: &[TerrainKind]) -> Vec<TerrainKind> {
    let mut eligible = allowed_neighbors(neighbors[0]).to_vec();
    for &neighbor in &neighbors[1..] {
        let allowed = allowed_neighbors(neighbor);
        eligible.retain(|candidate| allowed.contains(candidate));
    }
    eligible
}
