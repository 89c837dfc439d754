/// Sorts `arr` in place, given every element lies in `0..m`.
///
/// Tallies each value, then rewrites the slice bucket by bucket, one slot at
/// a time. Runs in O(n + m) time with O(m) extra space.
///
/// # Panics
///
/// Panics if any element is `>= m`. The domain is not validated up front.
///
/// # Examples
///
/// ```
/// use linear_order::sort::counting_sort;
///
/// let mut arr = [2, 2, 0, 1, 1, 0, 2];
/// counting_sort(&mut arr, 3);
/// assert_eq!(arr, [0, 0, 1, 1, 2, 2, 2]);
/// ```
pub fn counting_sort(arr: &mut [usize], m: usize) {
    let counts = tally(arr, m);

    let mut pos = 0;
    let mut value = 0;
    while pos < arr.len() {
        let count = counts[value];
        for slot in arr[pos..pos + count].iter_mut() {
            *slot = value;
        }
        pos += count;
        value += 1;
    }
}

/// Same contract as [`counting_sort`], but writes each non-empty bucket with a
/// single bulk fill instead of element by element.
///
/// # Panics
///
/// Panics if any element is `>= m`.
pub fn counting_sort_improved(arr: &mut [usize], m: usize) {
    let counts = tally(arr, m);

    let mut pos = 0;
    let mut value = 0;
    while pos < arr.len() {
        let count = counts[value];
        if count > 0 {
            arr[pos..pos + count].fill(value);
            pos += count;
        }
        value += 1;
    }
}

fn tally(arr: &[usize], m: usize) -> Vec<usize> {
    let mut counts = vec![0usize; m];
    for &value in arr {
        counts[value] += 1;
    }
    counts
}
