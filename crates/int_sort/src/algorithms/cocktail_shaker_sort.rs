use crate::{SortContext, SortKey};

use super::common;

pub fn sort<T: SortKey>(data: &mut [T], _ctx: &mut SortContext<T>) {
    cocktail_shaker_sort(data);
}

/// Bubble sort alternating direction each half round. `start..=end` is the
/// unsorted window; it shrinks from the right after a forward pass and from
/// the left after a backward pass.
pub fn cocktail_shaker_sort<T: SortKey>(data: &mut [T]) {
    let len = data.len();
    if len < 2 {
        return;
    }

    let mut start = 0usize;
    let mut end = len - 1;
    while start < end {
        let mut swapped = false;
        for i in start..end {
            swapped |= common::swap_if_greater(data, i, i + 1);
        }
        if !swapped {
            break;
        }
        end -= 1;

        swapped = false;
        for i in (start..end).rev() {
            swapped |= common::swap_if_greater(data, i, i + 1);
        }
        if !swapped {
            break;
        }
        start += 1;
    }
}
