use crate::{SortContext, SortKey};

use super::common;

pub fn sort<T: SortKey>(data: &mut [T], ctx: &mut SortContext<T>) {
    let len = data.len();
    if len < 2 {
        return;
    }

    let SortContext { scratch, aux, .. } = ctx;
    merge_sort(data, 0, len - 1, scratch, aux);
}

/// Sorts the inclusive range `left..=right`.
fn merge_sort<T: SortKey>(
    data: &mut [T],
    left: usize,
    right: usize,
    lo: &mut Vec<T>,
    hi: &mut Vec<T>,
) {
    if left >= right {
        return;
    }

    let mid = left + (right - left) / 2;
    merge_sort(data, left, mid, lo, hi);
    merge_sort(data, mid + 1, right, lo, hi);

    if data[mid].key() <= data[mid + 1].key() {
        return;
    }
    merge(data, left, mid, right, lo, hi);
}

/// Merges the sorted runs `left..=mid` and `mid + 1..=right` through the
/// `lo`/`hi` work buffers. Ties take from `lo`, the earlier run.
pub fn merge<T: SortKey>(
    data: &mut [T],
    left: usize,
    mid: usize,
    right: usize,
    lo: &mut Vec<T>,
    hi: &mut Vec<T>,
) {
    common::refill(lo, &data[left..=mid]);
    common::refill(hi, &data[(mid + 1)..=right]);

    let mut i = 0usize;
    let mut j = 0usize;
    let mut k = left;
    while i < lo.len() && j < hi.len() {
        if lo[i].key() <= hi[j].key() {
            data[k] = lo[i];
            i += 1;
        } else {
            data[k] = hi[j];
            j += 1;
        }
        k += 1;
    }

    let rest = if i < lo.len() { &lo[i..] } else { &hi[j..] };
    data[k..(k + rest.len())].copy_from_slice(rest);
}
