use crate::{SortContext, SortKey};

use super::common;

pub fn sort<T: SortKey>(data: &mut [T], _ctx: &mut SortContext<T>) {
    bubble_sort(data);
}

pub fn bubble_sort<T: SortKey>(data: &mut [T]) {
    let len = data.len();
    if len < 2 {
        return;
    }

    for pass in 0..len - 1 {
        // The last `pass` slots already hold their final values.
        let mut swapped = false;
        for j in 0..len - 1 - pass {
            swapped |= common::swap_if_greater(data, j, j + 1);
        }
        if !swapped {
            break;
        }
    }
}
