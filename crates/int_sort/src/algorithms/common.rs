use crate::SortKey;

/// `true` when the element at `i` must move behind the element at `j`.
#[inline]
pub fn is_greater<T: SortKey>(data: &[T], i: usize, j: usize) -> bool {
    data[i].key() > data[j].key()
}

/// Swaps `i` and `j` when they are out of order, reporting whether it did.
#[inline]
pub fn swap_if_greater<T: SortKey>(data: &mut [T], i: usize, j: usize) -> bool {
    if is_greater(data, i, j) {
        data.swap(i, j);
        true
    } else {
        false
    }
}

/// Insertion sort over the elements `gap` apart. `gap == 1` is plain insertion sort.
///
/// Only strictly greater predecessors are shifted, so equal keys never pass
/// each other within a chain.
#[inline]
pub fn gapped_insertion_sort<T: SortKey>(data: &mut [T], gap: usize) {
    debug_assert!(gap > 0);
    let len = data.len();
    for i in gap..len {
        let item = data[i];
        let key = item.key();
        let mut j = i;
        while j >= gap {
            let prev = data[j - gap];
            if prev.key() <= key {
                break;
            }
            data[j] = prev;
            j -= gap;
        }
        data[j] = item;
    }
}

#[inline]
pub fn is_sorted_non_decreasing<T: SortKey>(data: &[T]) -> bool {
    data.windows(2).all(|w| w[1].key() >= w[0].key())
}

#[inline]
pub fn min_max<T: SortKey>(data: &[T]) -> Option<(i64, i64)> {
    let (first, rest) = data.split_first()?;
    let mut min = first.key();
    let mut max = min;
    for x in rest {
        let k = x.key();
        if k < min {
            min = k;
        }
        if k > max {
            max = k;
        }
    }
    Some((min, max))
}

/// Number of distinct values in `min..=max`, computed without overflow.
#[inline]
pub fn key_range(min: i64, max: i64) -> u128 {
    debug_assert!(min <= max);
    (max as i128 - min as i128 + 1) as u128
}

/// Offset of `key` above `min` as a table index.
#[inline]
pub fn key_offset(key: i64, min: i64) -> usize {
    (key as i128 - min as i128) as usize
}

/// Stable scatter of `data` into `out` by the precomputed bucket of each element.
///
/// `counts` holds one slot per bucket and is overwritten. The input is walked
/// in reverse with decrementing prefix sums, which keeps equal buckets in
/// their original relative order.
pub fn stable_scatter<T: SortKey>(
    data: &[T],
    out: &mut [T],
    counts: &mut [usize],
    bucket_of: impl Fn(i64) -> usize,
) {
    debug_assert_eq!(data.len(), out.len());
    counts.fill(0);
    for x in data {
        counts[bucket_of(x.key())] += 1;
    }

    for i in 1..counts.len() {
        counts[i] += counts[i - 1];
    }

    for x in data.iter().rev() {
        let slot = &mut counts[bucket_of(x.key())];
        *slot -= 1;
        out[*slot] = *x;
    }
}

/// Replaces the contents of `buf` with a copy of `src`.
#[inline]
pub fn refill<T: Copy>(buf: &mut Vec<T>, src: &[T]) {
    buf.clear();
    buf.extend_from_slice(src);
}
