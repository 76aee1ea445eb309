use thiserror::Error;

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Pos {
    pub y: i32,
    pub x: i32,
}

/// Terrain kinds ordered along the gradient axis; neighbor compatibility is
/// defined by distance along this ordering.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum TerrainKind {
    Tree,
    Bush,
    Grass,
    Sand,
    Water,
}

impl TerrainKind {
    /// Every kind, in gradient order.
    pub const ALL: [TerrainKind; 5] = [
        TerrainKind::Tree,
        TerrainKind::Bush,
        TerrainKind::Grass,
        TerrainKind::Sand,
        TerrainKind::Water,
    ];

    /// Position along the gradient axis, `0..5`.
    pub fn gradient_index(self) -> usize {
        match self {
            TerrainKind::Tree => 0,
            TerrainKind::Bush => 1,
            TerrainKind::Grass => 2,
            TerrainKind::Sand => 3,
            TerrainKind::Water => 4,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum GenerationError {
    #[error("grid size must be positive, got {0}")]
    InvalidSize(usize),
    #[error("seed position {seed:?} lies outside the {size}x{size} grid")]
    SeedOutOfBounds { seed: Pos, size: usize },
    #[error("no terrain kind satisfies every neighbor at {pos:?} (neighbor kinds: {neighbors:?})")]
    UnsatisfiableCell { pos: Pos, neighbors: Vec<TerrainKind> },
}
