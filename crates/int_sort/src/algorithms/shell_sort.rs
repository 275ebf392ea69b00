use crate::{SortContext, SortKey};

use super::common;

pub fn sort<T: SortKey>(data: &mut [T], _ctx: &mut SortContext<T>) {
    shell_sort(data);
}

/// Shell's original sequence: `len / 2`, halved down to a final gap of 1.
pub fn shell_sort<T: SortKey>(data: &mut [T]) {
    let mut gap = data.len() / 2;
    while gap > 0 {
        common::gapped_insertion_sort(data, gap);
        gap /= 2;
    }
}
