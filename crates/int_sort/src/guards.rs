use std::fmt;

use crate::algorithms::common;
use crate::{SortAlgorithm, SortKey};

/// Largest key ranges the bounded integer sorts accept.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct GuardThresholds {
    pub counting_max_range: u64,
    pub bucket_max_range: u64,
}

pub const DEFAULT_GUARD_THRESHOLDS: GuardThresholds = GuardThresholds {
    counting_max_range: 1000,
    bucket_max_range: 500,
};

impl Default for GuardThresholds {
    fn default() -> Self {
        DEFAULT_GUARD_THRESHOLDS
    }
}

/// Why an algorithm refuses an input.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Inapplicability {
    Empty,
    NegativeValue { index: usize, value: i64 },
    RangeTooLarge { range: u64, limit: u64 },
}

impl fmt::Display for Inapplicability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Self::Empty => f.write_str("input is empty"),
            Self::NegativeValue { index, value } => {
                write!(f, "negative value {value} at index {index}")
            }
            Self::RangeTooLarge { range, limit } => {
                write!(f, "value range {range} exceeds limit {limit}")
            }
        }
    }
}

pub fn can_use_counting_sort(data: &[i64]) -> bool {
    can_use_counting_sort_with(data, &DEFAULT_GUARD_THRESHOLDS)
}

pub fn can_use_counting_sort_with(data: &[i64], thresholds: &GuardThresholds) -> bool {
    bounded_non_negative(data, thresholds.counting_max_range).is_ok()
}

pub fn can_use_bucket_sort(data: &[i64]) -> bool {
    can_use_bucket_sort_with(data, &DEFAULT_GUARD_THRESHOLDS)
}

pub fn can_use_bucket_sort_with(data: &[i64], thresholds: &GuardThresholds) -> bool {
    bounded_non_negative(data, thresholds.bucket_max_range).is_ok()
}

/// Radix sort only needs non-negative keys; an empty input is fine.
pub fn can_use_radix_sort(data: &[i64]) -> bool {
    non_negative(data).is_ok()
}

/// Comparison sorts accept every input.
pub fn check_applicability(
    algo: SortAlgorithm,
    data: &[i64],
    thresholds: &GuardThresholds,
) -> Result<(), Inapplicability> {
    check_keys(algo, data, thresholds)
}

pub(crate) fn check_keys<T: SortKey>(
    algo: SortAlgorithm,
    data: &[T],
    thresholds: &GuardThresholds,
) -> Result<(), Inapplicability> {
    match algo {
        SortAlgorithm::CountingSort => bounded_non_negative(data, thresholds.counting_max_range),
        SortAlgorithm::BucketSort => bounded_non_negative(data, thresholds.bucket_max_range),
        SortAlgorithm::RadixSort => non_negative(data),
        _ => Ok(()),
    }
}

fn non_negative<T: SortKey>(data: &[T]) -> Result<(), Inapplicability> {
    match data.iter().position(|x| x.key() < 0) {
        Some(index) => Err(Inapplicability::NegativeValue {
            index,
            value: data[index].key(),
        }),
        None => Ok(()),
    }
}

fn bounded_non_negative<T: SortKey>(data: &[T], limit: u64) -> Result<(), Inapplicability> {
    let Some((min, max)) = common::min_max(data) else {
        return Err(Inapplicability::Empty);
    };
    non_negative(data)?;

    // Both ends are non-negative here, so the range fits in u64.
    let range = common::key_range(min, max) as u64;
    if range > limit {
        return Err(Inapplicability::RangeTooLarge { range, limit });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counting_guard_boundaries() {
        assert!(!can_use_counting_sort(&[]));
        assert!(!can_use_counting_sort(&[-1, 2, 3]));
        let exactly_1000: Vec<i64> = (1..=1000).collect();
        assert!(can_use_counting_sort(&exactly_1000));
        let one_over: Vec<i64> = (1..=1001).collect();
        assert!(!can_use_counting_sort(&one_over));
        assert!(!can_use_counting_sort(&[1, 2000]));
        assert!(can_use_counting_sort(&[5_000, 5_999]));
        assert!(can_use_counting_sort(&[0]));
    }

    #[test]
    fn bucket_guard_boundaries() {
        assert!(!can_use_bucket_sort(&[]));
        assert!(!can_use_bucket_sort(&[-1, 2, 3]));
        let exactly_500: Vec<i64> = (1..=500).collect();
        assert!(can_use_bucket_sort(&exactly_500));
        let one_over: Vec<i64> = (1..=501).collect();
        assert!(!can_use_bucket_sort(&one_over));
        assert!(!can_use_bucket_sort(&[1, 2000]));
        // Inside the counting limit but outside the bucket one.
        assert!(can_use_counting_sort(&[0, 799]));
        assert!(!can_use_bucket_sort(&[0, 799]));
    }

    #[test]
    fn radix_guard_only_checks_sign() {
        assert!(can_use_radix_sort(&[]));
        assert!(can_use_radix_sort(&[0, i64::MAX]));
        assert!(!can_use_radix_sort(&[3, i64::MIN]));
    }

    #[test]
    fn custom_thresholds() {
        let loose = GuardThresholds {
            counting_max_range: 5000,
            bucket_max_range: 2000,
        };
        assert!(can_use_counting_sort_with(&[1, 2000], &loose));
        assert!(can_use_bucket_sort_with(&[1, 2000], &loose));
        assert_eq!(GuardThresholds::default(), DEFAULT_GUARD_THRESHOLDS);
    }

    #[test]
    fn reasons_are_reported() {
        let t = DEFAULT_GUARD_THRESHOLDS;
        assert_eq!(
            check_applicability(SortAlgorithm::CountingSort, &[], &t),
            Err(Inapplicability::Empty)
        );
        assert_eq!(
            check_applicability(SortAlgorithm::BucketSort, &[4, 9, -3, -4], &t),
            Err(Inapplicability::NegativeValue {
                index: 2,
                value: -3
            })
        );
        assert_eq!(
            check_applicability(SortAlgorithm::BucketSort, &[0, 600], &t),
            Err(Inapplicability::RangeTooLarge {
                range: 601,
                limit: 500
            })
        );
        assert_eq!(
            check_applicability(SortAlgorithm::QuickSort, &[i64::MIN, i64::MAX], &t),
            Ok(())
        );
        assert_eq!(
            Inapplicability::RangeTooLarge {
                range: 601,
                limit: 500
            }
            .to_string(),
            "value range 601 exceeds limit 500"
        );
    }
}
