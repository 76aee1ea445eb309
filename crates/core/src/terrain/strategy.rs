//! Selection strategies for picking one kind out of an eligible set.

use rand_chacha::ChaCha8Rng;
use rand_chacha::rand_core::Rng;

use crate::types::TerrainKind;

/// Weight lost per neighbor occurrence in the frequency-weighted draw.
const REPEAT_WEIGHT_STEP: f64 = 0.275;

/// How a resolved cell's kind is drawn from its eligible set. Chosen once
/// per generation run, not per cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SelectionStrategy {
    Uniform,
    FrequencyWeighted,
}

impl SelectionStrategy {
    /// Draw over the full kind enumeration, used when a cell has no
    /// assigned neighbor to constrain it.
    pub fn pick_unconstrained(self, rng: &mut ChaCha8Rng) -> TerrainKind {
        uniform_pick(rng, &TerrainKind::ALL)
    }

    /// Pick one kind from a non-empty `eligible` set, consuming random
    /// draws in eligible order so a fixed seed reproduces the choice.
    pub fn pick(
        self,
        eligible: &[TerrainKind],
        neighbors: &[TerrainKind],
        rng: &mut ChaCha8Rng,
    ) -> TerrainKind {
        debug_assert!(!eligible.is_empty());
        match self {
            SelectionStrategy::Uniform => uniform_pick(rng, eligible),
            SelectionStrategy::FrequencyWeighted => weighted_pick(rng, eligible, neighbors),
        }
    }
}

fn uniform_pick(rng: &mut ChaCha8Rng, kinds: &[TerrainKind]) -> TerrainKind {
    kinds[rng.next_u64() as usize % kinds.len()]
}

// Each candidate gets score = U * (1 - count * 0.275) for a fresh U in
// [0,1); the minimum wins, first-seen on exact ties. Frequent neighbor
// kinds concentrate their scores near (or below) zero, so this favors
// repetition rather than suppressing it; kept as documented behavior and
// pinned by the tests below.
fn weighted_pick(
    rng: &mut ChaCha8Rng,
    eligible: &[TerrainKind],
    neighbors: &[TerrainKind],
) -> TerrainKind {
    let mut best = eligible[0];
    let mut best_score = f64::INFINITY;
    for &candidate in eligible {
        let count = neighbors.iter().filter(|&&kind| kind == candidate).count();
        let weight = 1.0 - count as f64 * REPEAT_WEIGHT_STEP;
        let score = unit_f64(rng) * weight;
        if score < best_score {
            best = candidate;
            best_score = score;
        }
    }
    best
}

// Uniform in [0,1) from the top 53 bits of one draw.
fn unit_f64(rng: &mut ChaCha8Rng) -> f64 {
    (rng.next_u64() >> 11) as f64 * (1.0 / (1_u64 << 53) as f64)
}

#[cfg(test)]
mod tests {
    use rand_chacha::rand_core::SeedableRng;

    use super::*;

    #[test]
    fn uniform_pick_only_returns_members_of_the_eligible_set() {
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        let eligible = [TerrainKind::Bush, TerrainKind::Grass];
        for _ in 0..200 {
            let picked = SelectionStrategy::Uniform.pick(&eligible, &[], &mut rng);
            assert!(eligible.contains(&picked));
        }
    }

    #[test]
    fn uniform_pick_is_reproducible_for_a_fixed_seed() {
        let eligible = [TerrainKind::Tree, TerrainKind::Bush, TerrainKind::Grass];
        let mut first = ChaCha8Rng::seed_from_u64(99);
        let mut second = ChaCha8Rng::seed_from_u64(99);
        for _ in 0..64 {
            assert_eq!(
                SelectionStrategy::Uniform.pick(&eligible, &[], &mut first),
                SelectionStrategy::Uniform.pick(&eligible, &[], &mut second),
            );
        }
    }

    #[test]
    fn unconstrained_pick_reaches_every_kind() {
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        let mut seen = std::collections::BTreeSet::new();
        for _ in 0..500 {
            seen.insert(SelectionStrategy::FrequencyWeighted.pick_unconstrained(&mut rng));
        }
        assert_eq!(seen.len(), TerrainKind::ALL.len());
    }

    // Four or more occurrences push the weight negative, so the score is
    // below every non-negative competitor and the frequent kind always
    // wins. This pins the favor-the-frequent bias of the documented
    // formula.
    #[test]
    fn weighted_pick_always_repeats_a_kind_covering_half_the_neighborhood() {
        let mut rng = ChaCha8Rng::seed_from_u64(11);
        let eligible = [TerrainKind::Bush, TerrainKind::Grass, TerrainKind::Sand];
        let neighbors = [TerrainKind::Grass; 5];
        for _ in 0..200 {
            let picked =
                SelectionStrategy::FrequencyWeighted.pick(&eligible, &neighbors, &mut rng);
            assert_eq!(picked, TerrainKind::Grass);
        }
    }

    // Even a single occurrence (weight 0.725) tilts the draw toward the
    // already-present kind; with two candidates the win rate is well above
    // one half.
    #[test]
    fn weighted_pick_favors_kinds_already_present_among_neighbors() {
        let mut rng = ChaCha8Rng::seed_from_u64(42);
        let eligible = [TerrainKind::Sand, TerrainKind::Water];
        let neighbors = [TerrainKind::Water];
        let trials = 4_000;
        let water_wins = (0..trials)
            .filter(|_| {
                SelectionStrategy::FrequencyWeighted.pick(&eligible, &neighbors, &mut rng)
                    == TerrainKind::Water
            })
            .count();
        assert!(
            water_wins > trials * 55 / 100,
            "expected the repeated kind to win most draws, won {water_wins}/{trials}"
        );
    }

    #[test]
    fn weighted_pick_with_no_neighbor_occurrences_stays_inside_the_eligible_set() {
        let mut rng = ChaCha8Rng::seed_from_u64(8);
        let eligible = [TerrainKind::Tree, TerrainKind::Bush];
        let neighbors = [TerrainKind::Water, TerrainKind::Sand];
        for _ in 0..100 {
            let picked =
                SelectionStrategy::FrequencyWeighted.pick(&eligible, &neighbors, &mut rng);
            assert!(eligible.contains(&picked));
        }
    }
}
