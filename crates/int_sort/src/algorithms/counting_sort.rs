use crate::{SortContext, SortKey};

use super::common;

/// Stable counting sort keyed by `value - min`.
///
/// The caller guarantees the key range is small enough to tabulate.
pub fn sort<T: SortKey>(data: &mut [T], ctx: &mut SortContext<T>) {
    let len = data.len();
    if len < 2 {
        return;
    }

    let Some((min, max)) = common::min_max(data) else {
        return;
    };
    if min == max {
        return;
    }

    let range = common::key_range(min, max);
    debug_assert!(range <= usize::MAX as u128);

    let SortContext {
        scratch, counts, ..
    } = ctx;
    counts.clear();
    counts.resize(range as usize, 0);
    common::refill(scratch, data);

    common::stable_scatter(data, scratch, counts, |key| common::key_offset(key, min));
    data.copy_from_slice(scratch);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn offsets_by_minimum() {
        let mut data = vec![1003_i64, 1000, 1001, 1003, 1000];
        let mut ctx = SortContext::default();
        sort(&mut data, &mut ctx);
        assert_eq!(data, [1000, 1000, 1001, 1003, 1003]);
        assert_eq!(ctx.counts.len(), 4);
    }
}
