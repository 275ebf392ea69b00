pub mod common;

pub mod bubble_sort;
pub mod bucket_sort;
pub mod cocktail_shaker_sort;
pub mod counting_sort;
pub mod heap_sort;
pub mod insertion_sort;
pub mod merge_sort;
pub mod quick_sort;
pub mod radix_sort;
pub mod selection_sort;
pub mod shell_sort;
