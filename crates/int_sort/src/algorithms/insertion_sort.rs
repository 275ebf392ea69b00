use crate::{SortContext, SortKey};

use super::common;

pub fn sort<T: SortKey>(data: &mut [T], _ctx: &mut SortContext<T>) {
    common::gapped_insertion_sort(data, 1);
}
