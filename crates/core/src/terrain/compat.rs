//! The neighbor compatibility table that drives constraint intersection.
//!
//! Gradient endpoints allow only themselves plus one inward kind; interior
//! kinds allow themselves plus both immediate neighbors. This keeps biome
//! transitions monotone with no kind skipping, e.g. Tree never touches Sand
//! or Water.

use crate::types::TerrainKind;

/// Kinds allowed to sit Chebyshev-adjacent to `kind`, in gradient order.
///
/// The relation is symmetric in effect but is consulted independently from
/// both endpoints during intersection.
pub fn allowed_neighbors(kind: TerrainKind) -> &'static [TerrainKind] {
    use TerrainKind::{Bush, Grass, Sand, Tree, Water};
    match kind {
        Tree => &[Tree, Bush],
        Bush => &[Tree, Bush, Grass],
        Grass => &[Bush, Grass, Sand],
        Sand => &[Grass, Sand, Water],
        Water => &[Sand, Water],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_kind_allows_itself() {
        for kind in TerrainKind::ALL {
            assert!(allowed_neighbors(kind).contains(&kind), "{kind:?} must allow itself");
        }
    }

    #[test]
    fn relation_is_symmetric() {
        for a in TerrainKind::ALL {
            for b in TerrainKind::ALL {
                assert_eq!(
                    allowed_neighbors(a).contains(&b),
                    allowed_neighbors(b).contains(&a),
                    "asymmetry between {a:?} and {b:?}"
                );
            }
        }
    }

    #[test]
    fn allowed_pairs_are_at_most_one_step_apart_on_the_gradient() {
        for kind in TerrainKind::ALL {
            for &allowed in allowed_neighbors(kind) {
                let gap = kind.gradient_index().abs_diff(allowed.gradient_index());
                assert!(gap <= 1, "{kind:?} -> {allowed:?} skips a gradient step");
            }
        }
    }

    #[test]
    fn endpoints_allow_two_kinds_and_interior_kinds_allow_three() {
        assert_eq!(allowed_neighbors(TerrainKind::Tree).len(), 2);
        assert_eq!(allowed_neighbors(TerrainKind::Bush).len(), 3);
        assert_eq!(allowed_neighbors(TerrainKind::Grass).len(), 3);
        assert_eq!(allowed_neighbors(TerrainKind::Sand).len(), 3);
        assert_eq!(allowed_neighbors(TerrainKind::Water).len(), 2);
    }
}
