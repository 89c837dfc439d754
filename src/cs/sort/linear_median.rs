use log::trace;
use rand::Rng;

use super::partition::partition_by;
use crate::error::{Error, Result};

/// Returns the median of `arr` in expected linear time.
///
/// The slice is rearranged arbitrarily. For odd lengths the result is the
/// middle element of the sorted order; for even lengths it is the lower of the
/// two middle elements.
///
/// # Errors
///
/// Returns [`Error::EmptyInput`] if `arr` is empty.
///
/// # Examples
///
/// ```
/// use linear_order::sort::linear_median;
///
/// let mut arr = [5, 3, 8, 1, 9, 2, 7];
/// assert_eq!(linear_median(&mut arr), Ok(5));
/// ```
pub fn linear_median<T: Ord + Clone>(arr: &mut [T]) -> Result<T> {
    linear_median_with_rng(arr, &mut rand::thread_rng())
}

/// Same as [`linear_median`], drawing pivots from `rng`.
pub fn linear_median_with_rng<T, R>(arr: &mut [T], rng: &mut R) -> Result<T>
where
    T: Ord + Clone,
    R: Rng + ?Sized,
{
    linear_median_by(arr, rng, |a: &T, b: &T| a < b)
}

/// Randomized median selection ordered by `is_less`.
///
/// Each round picks a pivot uniformly from the live range `lo..=hi`,
/// partitions that range and keeps only the side holding the median index.
pub fn linear_median_by<T, R, F>(arr: &mut [T], rng: &mut R, mut is_less: F) -> Result<T>
where
    T: Clone,
    R: Rng + ?Sized,
    F: FnMut(&T, &T) -> bool,
{
    if arr.is_empty() {
        return Err(Error::EmptyInput);
    }

    let mut lo = 0;
    let mut hi = arr.len() - 1;
    let mid = hi / 2;

    loop {
        // A one-slot range is the median itself; partitioning it reports 0,
        // not its index, so it must not reach the narrowing step.
        if lo == hi {
            return Ok(arr[lo].clone());
        }
        let idx = lo + rng.gen_range(0..=hi - lo);
        let j = partition_by(arr, lo, hi, idx, &mut is_less);
        trace!("partitioned {}..={} around {} -> {}", lo, hi, idx, j);

        if j == mid {
            return Ok(arr[j].clone());
        }
        // lo <= mid <= hi holds after either step, so the range never empties.
        if j < mid {
            lo = j + 1;
        } else {
            hi = j - 1;
        }
    }
}
