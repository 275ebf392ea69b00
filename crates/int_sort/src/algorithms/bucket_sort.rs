use crate::{SortContext, SortKey};

use super::common;

/// Distributes into `min(len, range)` buckets by key, sorts each bucket with
/// insertion sort and concatenates them in bucket order.
///
/// Buckets are filled in input order and insertion sort is stable, so the
/// whole sort is stable. Swapping in an unstable per-bucket sort loses that.
pub fn sort<T: SortKey>(data: &mut [T], _ctx: &mut SortContext<T>) {
    let len = data.len();
    if len < 2 {
        return;
    }

    let Some((min, max)) = common::min_max(data) else {
        return;
    };

    let range = common::key_range(min, max);
    let bucket_count = (len as u128).min(range) as usize;
    let mut buckets: Vec<Vec<T>> = (0..bucket_count).map(|_| Vec::new()).collect();

    for &x in data.iter() {
        buckets[bucket_index(x.key(), min, range, bucket_count)].push(x);
    }

    let mut out = 0usize;
    for bucket in &mut buckets {
        if bucket.is_empty() {
            continue;
        }
        common::gapped_insertion_sort(bucket, 1);
        data[out..(out + bucket.len())].copy_from_slice(bucket);
        out += bucket.len();
    }
}

#[inline]
fn bucket_index(key: i64, min: i64, range: u128, bucket_count: usize) -> usize {
    let offset = common::key_offset(key, min) as u128;
    let idx = (offset * bucket_count as u128 / range) as usize;
    idx.min(bucket_count - 1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bucket_index_spans_all_buckets() {
        // range 10, 5 buckets: two values per bucket
        assert_eq!(bucket_index(0, 0, 10, 5), 0);
        assert_eq!(bucket_index(1, 0, 10, 5), 0);
        assert_eq!(bucket_index(2, 0, 10, 5), 1);
        assert_eq!(bucket_index(9, 0, 10, 5), 4);
        assert_eq!(bucket_index(107, 100, 8, 3), 2);
    }

    #[test]
    fn equal_keys_share_one_bucket() {
        let mut data = vec![7_i64; 6];
        let mut ctx = SortContext::default();
        sort(&mut data, &mut ctx);
        assert_eq!(data, [7; 6]);
    }
}
