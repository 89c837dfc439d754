use std::fmt;

use log::{debug, warn};
use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use super::comparison_counter::{ComparisonCounter, CountedValue};
use crate::error::{Error, Result};
use crate::sort::linear_median_by;

/// Sizes and seed for [`median_comparison_trial`].
///
/// Trial sizes are `2^k + 1` for `k` in `min_k..max_k`, so every trial has a
/// single middle element.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TrialConfig {
    pub min_k: u32,
    pub max_k: u32,
    pub seed: u64,
}

impl Default for TrialConfig {
    fn default() -> Self {
        Self {
            min_k: 8,
            max_k: 20,
            seed: 0x5EED_2026,
        }
    }
}

impl TrialConfig {
    pub fn sizes(&self) -> impl Iterator<Item = usize> {
        (self.min_k..self.max_k).map(|k| (1usize << k) + 1)
    }
}

/// Less-than counts for one trial size.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ComparisonTrialRow {
    pub n: usize,
    pub median_less_than: u64,
    pub sort_less_than: u64,
}

impl ComparisonTrialRow {
    pub const HEADER: &'static str = "         N     median_lt       sort_lt";
}

impl fmt::Display for ComparisonTrialRow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:>10}{:>14}{:>14}",
            self.n, self.median_less_than, self.sort_less_than
        )
    }
}

/// Counts the less-than comparisons spent finding the median of a shuffled
/// permutation, once by full sort and once by [`linear_median_by`].
///
/// # Errors
///
/// Returns [`Error::MedianMismatch`] if the two medians disagree.
pub fn median_comparison_trial(config: &TrialConfig) -> Result<Vec<ComparisonTrialRow>> {
    let mut rng = ChaCha8Rng::seed_from_u64(config.seed);
    let counter = ComparisonCounter::new();

    let mut rows = Vec::new();
    for n in config.sizes() {
        let mut values = counter.wrap_all(0..n as i64);
        values.shuffle(&mut rng);

        counter.reset();
        let mut sorted = values.clone();
        sorted.sort_by(|a, b| counter.compare(a, b));
        let sorted_median = sorted[n / 2].value();
        let sort_less_than = counter.report().less_than;

        counter.reset();
        let selected = linear_median_by(&mut values, &mut rng, CountedValue::less_than)?.value();
        let median_less_than = counter.report().less_than;

        if selected != sorted_median {
            warn!("median mismatch at n={}: {} vs {}", n, selected, sorted_median);
            return Err(Error::MedianMismatch {
                selected,
                sorted: sorted_median,
            });
        }

        let row = ComparisonTrialRow {
            n,
            median_less_than,
            sort_less_than,
        };
        debug!("{}", row);
        rows.push(row);
    }
    Ok(rows)
}
