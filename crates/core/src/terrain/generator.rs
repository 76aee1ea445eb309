//! Generation orchestration: seed the grid, walk the rings outward, and
//! resolve every in-range coordinate exactly once.

use rand_chacha::ChaCha8Rng;

use crate::types::{GenerationError, Pos, TerrainKind};

use super::grid::{Cell, TerrainGrid};
use super::resolver::resolve;
use super::rings::rings;
use super::strategy::SelectionStrategy;

/// The sole entry point of the generation core. One generation run is a
/// pure sequential computation: the generator exclusively owns the grid
/// until it hands the finished result back.
pub struct TerrainGenerator {
    size: usize,
    strategy: SelectionStrategy,
}

impl TerrainGenerator {
    pub fn new(size: usize, strategy: SelectionStrategy) -> Self {
        Self { size, strategy }
    }

    /// Fill a fresh grid outward from `seed`, which is assigned `seed_kind`
    /// before any ring is walked. Fails with `SeedOutOfBounds` before any
    /// cell is written, or with `UnsatisfiableCell` if some coordinate's
    /// neighbor constraints cannot be met; neither case is retried here.
    pub fn generate(
        &self,
        seed: Pos,
        seed_kind: TerrainKind,
        rng: &mut ChaCha8Rng,
    ) -> Result<TerrainGrid, GenerationError> {
        let mut grid = TerrainGrid::new(self.size)?;
        if !grid.in_bounds(seed) {
            return Err(GenerationError::SeedOutOfBounds { seed, size: self.size });
        }

        grid.set(Cell { pos: seed, kind: seed_kind });

        // Every in-range coordinate sits within Chebyshev distance
        // size - 1 of an in-range seed; rings never revisit, so each cell
        // is resolved and written exactly once.
        for pos in rings(seed, self.size as i32 - 1) {
            if !grid.in_bounds(pos) {
                continue;
            }
            let kind = resolve(&grid, pos, self.strategy, rng)?;
            grid.set(Cell { pos, kind });
        }

        Ok(grid)
    }
}
