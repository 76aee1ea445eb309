//! Constraint-based terrain generation domain split into coherent submodules.

use rand_chacha::ChaCha8Rng;
use rand_chacha::rand_core::SeedableRng;

use crate::types::{GenerationError, Pos, TerrainKind};

pub mod compat;

mod generator;
mod grid;
mod resolver;
mod rings;
mod strategy;

pub use generator::TerrainGenerator;
pub use grid::{Cell, TerrainGrid};
pub use strategy::SelectionStrategy;

pub fn generate_terrain(
    size: usize,
    seed: Pos,
    seed_kind: TerrainKind,
    strategy: SelectionStrategy,
    run_seed: u64,
) -> Result<TerrainGrid, GenerationError> {
    let mut rng = ChaCha8Rng::seed_from_u64(run_seed);
    TerrainGenerator::new(size, strategy).generate(seed, seed_kind, &mut rng)
}
