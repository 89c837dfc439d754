/// Partitions `arr[lo..=hi]` around the value currently at `idx` and returns
/// the pivot's final index.
///
/// Both `lo` and `hi` are inclusive. On return every element left of the
/// returned index is `<=` the pivot and every element right of it is `>=` the
/// pivot. Equal elements may land on either side.
///
/// A one-element range (`lo == hi`) is left untouched and reports `0`,
/// regardless of where the range sits in the slice.
///
/// # Panics
///
/// Panics if `hi` is outside the slice. Behavior is unspecified if `idx` is
/// not within `lo..=hi`.
///
/// # Examples
///
/// ```
/// use linear_order::sort::partition;
///
/// let mut arr = [5, 3, 8, 1, 9, 2, 7];
/// let j = partition(&mut arr, 0, 6, 0);
/// assert_eq!(j, 3);
/// assert_eq!(arr[j], 5);
/// ```
pub fn partition<T: Ord>(arr: &mut [T], lo: usize, hi: usize, idx: usize) -> usize {
    partition_by(arr, lo, hi, idx, &mut |a: &T, b: &T| a < b)
}

/// Same as [`partition`], but orders elements with `is_less`.
///
/// `is_less` is evaluated only between element values. Cursor bookkeeping
/// (reaching `lo`/`hi`, the cursors crossing) never calls it, so a counting
/// comparator observes exactly the value comparisons the partition performs.
pub fn partition_by<T, F>(
    arr: &mut [T],
    lo: usize,
    hi: usize,
    idx: usize,
    is_less: &mut F,
) -> usize
where
    F: FnMut(&T, &T) -> bool,
{
    if lo == hi {
        return 0;
    }
    debug_assert!(lo < hi && hi < arr.len());
    debug_assert!(lo <= idx && idx <= hi);

    // Pivot lives at `lo` until the final exchange.
    arr.swap(idx, lo);
    let mut i = lo;
    let mut j = hi + 1;

    loop {
        loop {
            i += 1;
            if i == hi || is_less(&arr[lo], &arr[i]) {
                break;
            }
        }

        loop {
            j -= 1;
            if j == lo || is_less(&arr[j], &arr[lo]) {
                break;
            }
        }

        if i >= j {
            break;
        }
        arr.swap(i, j);
    }

    arr.swap(lo, j);
    j
}
