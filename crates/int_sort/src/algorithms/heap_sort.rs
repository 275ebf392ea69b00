use crate::{SortContext, SortKey};

use super::common;

pub fn sort<T: SortKey>(data: &mut [T], _ctx: &mut SortContext<T>) {
    heap_sort(data);
}

pub fn heap_sort<T: SortKey>(data: &mut [T]) {
    let len = data.len();
    if len < 2 {
        return;
    }

    for root in (0..len / 2).rev() {
        sift_down(data, root, len);
    }

    for end in (1..len).rev() {
        data.swap(0, end);
        sift_down(data, 0, end);
    }
}

/// Restores the max-heap property below `root` within `data[..heap_len]`.
#[inline]
pub fn sift_down<T: SortKey>(data: &mut [T], mut root: usize, heap_len: usize) {
    loop {
        let left = 2 * root + 1;
        let right = left + 1;

        let mut largest = root;
        if left < heap_len && common::is_greater(data, left, largest) {
            largest = left;
        }
        if right < heap_len && common::is_greater(data, right, largest) {
            largest = right;
        }

        if largest == root {
            break;
        }
        data.swap(root, largest);
        root = largest;
    }
}
