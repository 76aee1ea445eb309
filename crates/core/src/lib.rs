pub mod terrain;
pub mod types;

pub use terrain::{Cell, SelectionStrategy, TerrainGenerator, TerrainGrid, generate_terrain};
pub use types::*;
