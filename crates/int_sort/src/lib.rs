mod algorithms;
mod error;
mod guards;
mod runner;

use std::fmt;
use std::str::FromStr;

pub use error::SortError;
pub use guards::{
    DEFAULT_GUARD_THRESHOLDS, GuardThresholds, Inapplicability, can_use_bucket_sort,
    can_use_bucket_sort_with, can_use_counting_sort, can_use_counting_sort_with,
    can_use_radix_sort, check_applicability,
};
pub use runner::{RunOutcome, RunReport, run_all, run_one};

/// Integer key an element is ordered by.
///
/// Every algorithm is written against this so the tests can sort tagged
/// records and observe stability. Only `i64` is sorted through the public API.
pub(crate) trait SortKey: Copy {
    fn key(&self) -> i64;
}

impl SortKey for i64 {
    #[inline]
    fn key(&self) -> i64 {
        *self
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum SortAlgorithm {
    BubbleSort,
    CocktailShakerSort,
    SelectionSort,
    InsertionSort,
    ShellSort,
    MergeSort,
    QuickSort,
    QuickSortIterative,
    HeapSort,
    CountingSort,
    RadixSort,
    BucketSort,
    Builtin,
}

pub const ALL_ALGORITHMS: [SortAlgorithm; 13] = [
    SortAlgorithm::BubbleSort,
    SortAlgorithm::CocktailShakerSort,
    SortAlgorithm::SelectionSort,
    SortAlgorithm::InsertionSort,
    SortAlgorithm::ShellSort,
    SortAlgorithm::MergeSort,
    SortAlgorithm::QuickSort,
    SortAlgorithm::QuickSortIterative,
    SortAlgorithm::HeapSort,
    SortAlgorithm::CountingSort,
    SortAlgorithm::RadixSort,
    SortAlgorithm::BucketSort,
    SortAlgorithm::Builtin,
];

pub fn all_algorithms() -> &'static [SortAlgorithm] {
    &ALL_ALGORITHMS
}

pub fn algorithm_name(algo: SortAlgorithm) -> &'static str {
    match algo {
        SortAlgorithm::BubbleSort => "bubble_sort",
        SortAlgorithm::CocktailShakerSort => "cocktail_shaker_sort",
        SortAlgorithm::SelectionSort => "selection_sort",
        SortAlgorithm::InsertionSort => "insertion_sort",
        SortAlgorithm::ShellSort => "shell_sort",
        SortAlgorithm::MergeSort => "merge_sort",
        SortAlgorithm::QuickSort => "quick_sort",
        SortAlgorithm::QuickSortIterative => "quick_sort_iterative",
        SortAlgorithm::HeapSort => "heap_sort",
        SortAlgorithm::CountingSort => "counting_sort",
        SortAlgorithm::RadixSort => "radix_sort",
        SortAlgorithm::BucketSort => "bucket_sort",
        SortAlgorithm::Builtin => "builtin",
    }
}

impl fmt::Display for SortAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(algorithm_name(*self))
    }
}

impl FromStr for SortAlgorithm {
    type Err = SortError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        all_algorithms()
            .iter()
            .copied()
            .find(|&algo| algorithm_name(algo) == s)
            .ok_or_else(|| SortError::UnknownAlgorithm(s.to_owned()))
    }
}

/// Static facts about an algorithm, including its complexity classes.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct AlgorithmProperties {
    pub stable: bool,
    pub in_place: bool,
    pub comparison_based: bool,
    pub best: &'static str,
    pub average: &'static str,
    pub worst: &'static str,
    pub space: &'static str,
}

const fn props(
    stable: bool,
    in_place: bool,
    comparison_based: bool,
    [best, average, worst, space]: [&'static str; 4],
) -> AlgorithmProperties {
    AlgorithmProperties {
        stable,
        in_place,
        comparison_based,
        best,
        average,
        worst,
        space,
    }
}

pub fn properties(algo: SortAlgorithm) -> AlgorithmProperties {
    const QUADRATIC_ADAPTIVE: [&str; 4] = ["O(n)", "O(n^2)", "O(n^2)", "O(1)"];
    const QUICK: [&str; 4] = ["O(n log n)", "O(n log n)", "O(n^2)", "O(log n)"];

    match algo {
        SortAlgorithm::BubbleSort
        | SortAlgorithm::CocktailShakerSort
        | SortAlgorithm::InsertionSort => props(true, true, true, QUADRATIC_ADAPTIVE),
        SortAlgorithm::SelectionSort => {
            props(false, true, true, ["O(n^2)", "O(n^2)", "O(n^2)", "O(1)"])
        }
        SortAlgorithm::ShellSort => {
            props(false, true, true, ["O(n log n)", "O(n^1.5)", "O(n^2)", "O(1)"])
        }
        SortAlgorithm::MergeSort => props(
            true,
            false,
            true,
            ["O(n log n)", "O(n log n)", "O(n log n)", "O(n)"],
        ),
        SortAlgorithm::QuickSort | SortAlgorithm::QuickSortIterative => {
            props(false, true, true, QUICK)
        }
        SortAlgorithm::HeapSort => props(
            false,
            true,
            true,
            ["O(n log n)", "O(n log n)", "O(n log n)", "O(1)"],
        ),
        SortAlgorithm::CountingSort => {
            props(true, false, false, ["O(n + k)", "O(n + k)", "O(n + k)", "O(k)"])
        }
        SortAlgorithm::RadixSort => props(
            true,
            false,
            false,
            ["O(d * n)", "O(d * n)", "O(d * n)", "O(n + k)"],
        ),
        // Stable only because buckets are filled in input order and sorted by insertion sort.
        SortAlgorithm::BucketSort => {
            props(true, false, false, ["O(n + k)", "O(n + k)", "O(n^2)", "O(n + k)"])
        }
        SortAlgorithm::Builtin => {
            props(false, true, true, ["O(n)", "O(n log n)", "O(n log n)", "O(1)"])
        }
    }
}

/// Reusable scratch space. Nothing is carried from one sort to the next.
#[derive(Clone, Debug)]
pub struct SortContext<T = i64> {
    pub(crate) scratch: Vec<T>,
    pub(crate) aux: Vec<T>,
    pub(crate) counts: Vec<usize>,
    pub(crate) ranges: Vec<(usize, usize)>,
}

impl<T> Default for SortContext<T> {
    fn default() -> Self {
        Self {
            scratch: Vec::new(),
            aux: Vec::new(),
            counts: Vec::new(),
            ranges: Vec::new(),
        }
    }
}

/// Sorts `data` with `algo` using the default guard thresholds.
///
/// Never panics. A non-comparison algorithm that cannot handle the input
/// (negative values, too wide a range) is replaced by merge sort.
pub fn sort(algo: SortAlgorithm, data: &mut [i64]) {
    let mut ctx = SortContext::default();
    sort_with_ctx(algo, data, &mut ctx, &DEFAULT_GUARD_THRESHOLDS);
}

pub fn sort_with_ctx(
    algo: SortAlgorithm,
    data: &mut [i64],
    ctx: &mut SortContext,
    thresholds: &GuardThresholds,
) {
    sort_keys(algo, data, ctx, thresholds);
}

/// Like [`sort`], but refuses inputs outside the algorithm's domain instead
/// of falling back. `data` is untouched on error.
pub fn try_sort(
    algo: SortAlgorithm,
    data: &mut [i64],
    thresholds: &GuardThresholds,
) -> Result<(), SortError> {
    check_applicability(algo, data, thresholds)
        .map_err(|reason| SortError::Inapplicable {
            algorithm: algo,
            reason,
        })?;
    let mut ctx = SortContext::default();
    dispatch(algo, data, &mut ctx);
    Ok(())
}

/// `true` iff no element is strictly less than its predecessor.
pub fn is_sorted(data: &[i64]) -> bool {
    algorithms::common::is_sorted_non_decreasing(data)
}

pub(crate) fn sort_keys<T: SortKey>(
    algo: SortAlgorithm,
    data: &mut [T],
    ctx: &mut SortContext<T>,
    thresholds: &GuardThresholds,
) {
    let algo = match guards::check_keys(algo, data, thresholds) {
        Ok(()) => algo,
        Err(reason) => {
            log::debug!("{algo} not applicable ({reason}), falling back to merge_sort");
            SortAlgorithm::MergeSort
        }
    };
    dispatch(algo, data, ctx);
}

pub(crate) fn dispatch<T: SortKey>(algo: SortAlgorithm, data: &mut [T], ctx: &mut SortContext<T>) {
    match algo {
        SortAlgorithm::BubbleSort => algorithms::bubble_sort::sort(data, ctx),
        SortAlgorithm::CocktailShakerSort => algorithms::cocktail_shaker_sort::sort(data, ctx),
        SortAlgorithm::SelectionSort => algorithms::selection_sort::sort(data, ctx),
        SortAlgorithm::InsertionSort => algorithms::insertion_sort::sort(data, ctx),
        SortAlgorithm::ShellSort => algorithms::shell_sort::sort(data, ctx),
        SortAlgorithm::MergeSort => algorithms::merge_sort::sort(data, ctx),
        SortAlgorithm::QuickSort => algorithms::quick_sort::sort(data, ctx),
        SortAlgorithm::QuickSortIterative => algorithms::quick_sort::sort_iterative(data, ctx),
        SortAlgorithm::HeapSort => algorithms::heap_sort::sort(data, ctx),
        SortAlgorithm::CountingSort => algorithms::counting_sort::sort(data, ctx),
        SortAlgorithm::RadixSort => algorithms::radix_sort::sort(data, ctx),
        SortAlgorithm::BucketSort => algorithms::bucket_sort::sort(data, ctx),
        SortAlgorithm::Builtin => data.sort_unstable_by_key(|x| x.key()),
    }
}
