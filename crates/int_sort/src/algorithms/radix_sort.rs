use crate::{SortContext, SortKey};

use super::common;

const RADIX: usize = 10;

/// LSD radix sort over decimal digits. Keys must be non-negative.
pub fn sort<T: SortKey>(data: &mut [T], ctx: &mut SortContext<T>) {
    if data.len() < 2 {
        return;
    }
    debug_assert!(data.iter().all(|x| x.key() >= 0));

    let Some((_, max)) = common::min_max(data) else {
        return;
    };

    let SortContext {
        scratch, counts, ..
    } = ctx;
    counts.clear();
    counts.resize(RADIX, 0);

    let mut exp = 1_i64;
    while max / exp > 0 {
        counting_sort_by_digit(data, scratch, counts, exp);
        match exp.checked_mul(RADIX as i64) {
            Some(next) => exp = next,
            None => break,
        }
    }
}

/// One stable pass keyed by the decimal digit selected by `exp`.
pub fn counting_sort_by_digit<T: SortKey>(
    data: &mut [T],
    out: &mut Vec<T>,
    counts: &mut [usize],
    exp: i64,
) {
    debug_assert_eq!(counts.len(), RADIX);
    common::refill(out, data);
    common::stable_scatter(data, out, counts, |key| digit(key, exp));
    data.copy_from_slice(out);
}

#[inline]
fn digit(key: i64, exp: i64) -> usize {
    ((key / exp) % RADIX as i64) as usize
}
