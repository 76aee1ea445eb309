//! Owned square grid of optional terrain assignments.

use crate::types::{GenerationError, Pos, TerrainKind};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Cell {
    pub pos: Pos,
    pub kind: TerrainKind,
}

/// A fixed-size square grid, allocated empty and populated monotonically.
/// Slots are either absent or fully assigned; an assigned slot is never
/// reassigned during a run.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TerrainGrid {
    size: usize,
    cells: Vec<Option<TerrainKind>>,
}

impl TerrainGrid {
    pub(super) fn new(size: usize) -> Result<Self, GenerationError> {
        if size == 0 {
            return Err(GenerationError::InvalidSize(size));
        }
        Ok(Self { size, cells: vec![None; size * size] })
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn in_bounds(&self, pos: Pos) -> bool {
        pos.x >= 0 && pos.y >= 0 && (pos.x as usize) < self.size && (pos.y as usize) < self.size
    }

    /// Assigned kind at `pos`; `None` for unassigned and out-of-range alike.
    pub fn kind_at(&self, pos: Pos) -> Option<TerrainKind> {
        if !self.in_bounds(pos) {
            return None;
        }
        self.cells[(pos.y as usize) * self.size + (pos.x as usize)]
    }

    pub fn get(&self, pos: Pos) -> Option<Cell> {
        self.kind_at(pos).map(|kind| Cell { pos, kind })
    }

    /// Every assigned cell in row-major order, the read surface collaborators
    /// consume after generation completes.
    pub fn cells(&self) -> impl Iterator<Item = Cell> + '_ {
        self.cells.iter().enumerate().filter_map(|(index, slot)| {
            slot.map(|kind| Cell {
                pos: Pos { y: (index / self.size) as i32, x: (index % self.size) as i32 },
                kind,
            })
        })
    }

    /// Stable byte encoding of the whole grid for fingerprinting.
    pub fn canonical_bytes(&self) -> Vec<u8> {
        let mut bytes = Vec::with_capacity(4 + self.cells.len());
        bytes.extend((self.size as u32).to_le_bytes());
        for slot in &self.cells {
            bytes.push(match slot {
                None => 0,
                Some(TerrainKind::Tree) => 1,
                Some(TerrainKind::Bush) => 2,
                Some(TerrainKind::Grass) => 3,
                Some(TerrainKind::Sand) => 4,
                Some(TerrainKind::Water) => 5,
            });
        }
        bytes
    }

    // Caller guarantees the slot is in range and previously absent.
    pub(super) fn set(&mut self, cell: Cell) {
        debug_assert!(self.in_bounds(cell.pos), "set out of range at {:?}", cell.pos);
        debug_assert!(self.kind_at(cell.pos).is_none(), "overwrite at {:?}", cell.pos);
        self.cells[(cell.pos.y as usize) * self.size + (cell.pos.x as usize)] = Some(cell.kind);
    }
}
