//! Monte Carlo respondent engine.
//!
//! Simulates N respondents completing the standard inventory: per group,
//! one "most" and one "least" mark on distinct options, drawn either
//! uniformly or biased by per-dimension weights. Each respondent is scored
//! with the production tally/derivation path, so large batches double as a
//! stress test of the scorer.
//!
//! Determinism: respondent `i` of a batch uses `SmallRng::seed_from_u64
//! (seed + i)`, so results are identical regardless of rayon thread count.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use rayon::prelude::*;

use crate::constants::{DIMENSION_COUNT, GROUP_COUNT, OPTIONS_PER_GROUP};
use crate::scoring::derive_profile;
use crate::types::{Dimension, DimensionTally, ProfileResult, QuestionGroup};

/// Per-dimension preference weights for simulated respondents.
///
/// "Most" marks are drawn with probability proportional to the weight of
/// each option's dimension; "least" marks are drawn from the remaining
/// options with probability proportional to the inverse weight. Uniform
/// weights give an unbiased population.
#[derive(Clone, Copy, Debug)]
pub struct DimensionWeights(pub [f64; DIMENSION_COUNT]);

impl DimensionWeights {
    pub fn uniform() -> Self {
        Self([1.0; DIMENSION_COUNT])
    }

    /// Weight for one dimension.
    #[inline(always)]
    pub fn get(&self, dim: Dimension) -> f64 {
        self.0[dim.index()]
    }

    /// All weights finite and strictly positive.
    pub fn is_valid(&self) -> bool {
        self.0.iter().all(|w| w.is_finite() && *w > 0.0)
    }
}

/// One simulated respondent: raw marks plus the scored outcome.
#[derive(Clone, Copy, Debug)]
pub struct RespondentRecord {
    /// Option index marked "most", per group in presentation order.
    pub most: [u8; GROUP_COUNT],
    /// Option index marked "least", per group. Always distinct from `most`.
    pub least: [u8; GROUP_COUNT],
    pub tally: DimensionTally,
    pub profile: ProfileResult,
}

/// Draw an index in `0..OPTIONS_PER_GROUP` with the given weights,
/// excluding `skip`. At least one non-excluded weight must be positive.
fn weighted_pick(rng: &mut SmallRng, weights: &[f64; OPTIONS_PER_GROUP], skip: Option<usize>) -> usize {
    let mut total = 0.0;
    for (idx, w) in weights.iter().enumerate() {
        if Some(idx) != skip {
            total += w;
        }
    }
    debug_assert!(total > 0.0, "no pickable option");

    let mut roll = rng.random_range(0.0..total);
    let mut last = 0;
    for (idx, w) in weights.iter().enumerate() {
        if Some(idx) == skip {
            continue;
        }
        if roll < *w {
            return idx;
        }
        roll -= w;
        last = idx;
    }
    // Float round-off can exhaust the loop; the last candidate is correct.
    last
}

/// Simulate one respondent over `inventory` (must be GROUP_COUNT groups).
pub fn simulate_respondent(
    inventory: &[QuestionGroup],
    weights: &DimensionWeights,
    rng: &mut SmallRng,
) -> RespondentRecord {
    debug_assert_eq!(inventory.len(), GROUP_COUNT);
    debug_assert!(weights.is_valid(), "weights must be finite and positive");

    let mut most = [0u8; GROUP_COUNT];
    let mut least = [0u8; GROUP_COUNT];
    let mut tally = DimensionTally::new();

    for (g, group) in inventory.iter().enumerate() {
        let mut most_w = [0.0; OPTIONS_PER_GROUP];
        let mut least_w = [0.0; OPTIONS_PER_GROUP];
        for (idx, opt) in group.options.iter().enumerate() {
            let w = weights.get(opt.dimension);
            most_w[idx] = w;
            least_w[idx] = 1.0 / w;
        }

        let m = weighted_pick(rng, &most_w, None);
        let l = weighted_pick(rng, &least_w, Some(m));

        most[g] = m as u8;
        least[g] = l as u8;
        tally.increment(group.options[m].dimension);
    }

    RespondentRecord {
        most,
        least,
        tally,
        profile: derive_profile(&tally),
    }
}

/// Simulate `num_respondents` in parallel with per-respondent derived
/// seeds.
pub fn simulate_batch(
    inventory: &[QuestionGroup],
    num_respondents: usize,
    seed: u64,
    weights: &DimensionWeights,
) -> Vec<RespondentRecord> {
    (0..num_respondents)
        .into_par_iter()
        .map(|i| {
            let mut rng = SmallRng::seed_from_u64(seed.wrapping_add(i as u64));
            simulate_respondent(inventory, weights, &mut rng)
        })
        .collect()
}
