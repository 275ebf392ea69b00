use crate::{SortContext, SortKey};

pub fn sort<T: SortKey>(data: &mut [T], _ctx: &mut SortContext<T>) {
    quick_sort(data);
}

pub fn sort_iterative<T: SortKey>(data: &mut [T], ctx: &mut SortContext<T>) {
    quick_sort_iterative(data, &mut ctx.ranges);
}

/// Recurses into the smaller side and loops on the larger, so the call depth
/// stays logarithmic even when every partition is lopsided.
pub fn quick_sort<T: SortKey>(mut data: &mut [T]) {
    while data.len() > 1 {
        let split = partition(data);
        let (left, rest) = data.split_at_mut(split);
        let right = &mut rest[1..];

        if left.len() < right.len() {
            quick_sort(left);
            data = right;
        } else {
            quick_sort(right);
            data = left;
        }
    }
}

/// Same partitioning, driven by an explicit stack of half-open ranges.
pub fn quick_sort_iterative<T: SortKey>(data: &mut [T], stack: &mut Vec<(usize, usize)>) {
    stack.clear();
    stack.push((0, data.len()));

    while let Some((lo, hi)) = stack.pop() {
        if hi - lo < 2 {
            continue;
        }

        let split = lo + partition(&mut data[lo..hi]);
        let left = (lo, split);
        let right = (split + 1, hi);

        // Smaller range on top keeps the stack at O(log n) entries.
        if left.1 - left.0 < right.1 - right.0 {
            stack.push(right);
            stack.push(left);
        } else {
            stack.push(left);
            stack.push(right);
        }
    }
}

/// Lomuto partition around the last element.
///
/// Returns the pivot's final index: everything before it is `<=` the pivot,
/// everything after it is `>`.
pub fn partition<T: SortKey>(data: &mut [T]) -> usize {
    debug_assert!(!data.is_empty());

    let high = data.len() - 1;
    let pivot = data[high].key();
    let mut boundary = 0usize;
    for j in 0..high {
        if data[j].key() <= pivot {
            data.swap(boundary, j);
            boundary += 1;
        }
    }
    data.swap(boundary, high);
    boundary
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partition_places_pivot() {
        let mut data = vec![3_i64, 7, 8, 5, 2, 1, 9, 5, 4];
        let split = partition(&mut data);
        assert_eq!(split, 3);
        assert_eq!(data[split], 4);
        assert!(data[..split].iter().all(|&x| x <= 4));
        assert!(data[split + 1..].iter().all(|&x| x > 4));
    }

    #[test]
    fn partition_extreme_pivots() {
        let mut smallest_last = vec![5_i64, 6, 7, 1];
        assert_eq!(partition(&mut smallest_last), 0);
        assert_eq!(smallest_last[0], 1);

        let mut largest_last = vec![5_i64, 6, 7, 9];
        assert_eq!(partition(&mut largest_last), 3);
        assert_eq!(largest_last, [5, 6, 7, 9]);

        let mut single = vec![42_i64];
        assert_eq!(partition(&mut single), 0);
    }

    #[test]
    fn iterative_matches_recursive() {
        let input = vec![9_i64, -3, 5, 5, 0, 12, -3, 7, 1, 1, 1, 8];
        let mut recursive = input.clone();
        quick_sort(&mut recursive);

        let mut iterative = input;
        let mut stack = Vec::new();
        quick_sort_iterative(&mut iterative, &mut stack);

        assert_eq!(recursive, iterative);
        assert!(stack.is_empty());
    }
}
