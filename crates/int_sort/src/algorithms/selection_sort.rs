use crate::{SortContext, SortKey};

use super::common;

pub fn sort<T: SortKey>(data: &mut [T], _ctx: &mut SortContext<T>) {
    selection_sort(data);
}

/// Returns the number of swaps performed, at most `len - 1`.
pub fn selection_sort<T: SortKey>(data: &mut [T]) -> usize {
    let len = data.len();
    let mut swaps = 0usize;
    if len < 2 {
        return swaps;
    }

    for i in 0..len - 1 {
        let mut min_idx = i;
        for j in (i + 1)..len {
            if common::is_greater(data, min_idx, j) {
                min_idx = j;
            }
        }
        if min_idx != i {
            data.swap(i, min_idx);
            swaps += 1;
        }
    }
    swaps
}
