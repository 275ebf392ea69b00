//! Runs every algorithm over its own copy of one input and records the outcome.

use std::time::{Duration, Instant};

use crate::{
    GuardThresholds, Inapplicability, SortAlgorithm, SortContext, all_algorithms,
    check_applicability, dispatch, is_sorted,
};

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum RunOutcome {
    Completed {
        output: Vec<i64>,
        elapsed: Duration,
        verified: bool,
    },
    Skipped(Inapplicability),
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct RunReport {
    pub algorithm: SortAlgorithm,
    pub outcome: RunOutcome,
}

impl RunReport {
    /// `true` if the algorithm ran and its output passed verification.
    pub fn is_verified(&self) -> bool {
        matches!(self.outcome, RunOutcome::Completed { verified: true, .. })
    }

    pub fn is_skipped(&self) -> bool {
        matches!(self.outcome, RunOutcome::Skipped(_))
    }
}

pub fn run_all(input: &[i64], thresholds: &GuardThresholds) -> Vec<RunReport> {
    let mut ctx = SortContext::default();
    all_algorithms()
        .iter()
        .map(|&algo| run_with_ctx(algo, input, thresholds, &mut ctx))
        .collect()
}

pub fn run_one(algo: SortAlgorithm, input: &[i64], thresholds: &GuardThresholds) -> RunReport {
    let mut ctx = SortContext::default();
    run_with_ctx(algo, input, thresholds, &mut ctx)
}

fn run_with_ctx(
    algo: SortAlgorithm,
    input: &[i64],
    thresholds: &GuardThresholds,
    ctx: &mut SortContext,
) -> RunReport {
    if let Err(reason) = check_applicability(algo, input, thresholds) {
        log::debug!("skipping {algo}: {reason}");
        return RunReport {
            algorithm: algo,
            outcome: RunOutcome::Skipped(reason),
        };
    }

    let mut output = input.to_vec();
    let start = Instant::now();
    dispatch(algo, &mut output, ctx);
    let elapsed = start.elapsed();

    let verified = is_sorted(&output);
    if verified {
        log::debug!("{algo} sorted {} elements in {elapsed:?}", output.len());
    } else {
        log::warn!("{algo} left {} elements out of order", output.len());
    }

    RunReport {
        algorithm: algo,
        outcome: RunOutcome::Completed {
            output,
            elapsed,
            verified,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::DEFAULT_GUARD_THRESHOLDS;

    fn init_logger() {
        let _ = env_logger::builder().is_test(true).try_init();
    }

    #[test]
    fn every_algorithm_reports_once() {
        init_logger();
        let reports = run_all(&[64, 34, 25, 12, 22, 11, 90], &DEFAULT_GUARD_THRESHOLDS);
        assert_eq!(reports.len(), all_algorithms().len());
        for (report, &algo) in reports.iter().zip(all_algorithms()) {
            assert_eq!(report.algorithm, algo);
            assert!(report.is_verified(), "{algo}");
            let RunOutcome::Completed { output, .. } = &report.outcome else {
                panic!("{algo} was skipped");
            };
            assert_eq!(output, &[11, 12, 22, 25, 34, 64, 90]);
        }
    }

    #[test]
    fn negative_input_skips_integer_sorts() {
        init_logger();
        let input = [3, -5, 8, 0];
        let reports = run_all(&input, &DEFAULT_GUARD_THRESHOLDS);
        for report in &reports {
            match report.algorithm {
                SortAlgorithm::CountingSort
                | SortAlgorithm::RadixSort
                | SortAlgorithm::BucketSort => {
                    assert_eq!(
                        report.outcome,
                        RunOutcome::Skipped(Inapplicability::NegativeValue {
                            index: 1,
                            value: -5
                        })
                    );
                }
                _ => assert!(report.is_verified(), "{}", report.algorithm),
            }
        }
    }

    #[test]
    fn range_limits_are_per_algorithm() {
        init_logger();
        let input = [0, 700, 3];
        let counting = run_one(SortAlgorithm::CountingSort, &input, &DEFAULT_GUARD_THRESHOLDS);
        let bucket = run_one(SortAlgorithm::BucketSort, &input, &DEFAULT_GUARD_THRESHOLDS);
        assert!(counting.is_verified());
        assert!(bucket.is_skipped());
    }

    #[test]
    fn empty_input_completes_comparison_sorts() {
        init_logger();
        let reports = run_all(&[], &DEFAULT_GUARD_THRESHOLDS);
        for report in &reports {
            match report.algorithm {
                SortAlgorithm::CountingSort | SortAlgorithm::BucketSort => {
                    assert_eq!(report.outcome, RunOutcome::Skipped(Inapplicability::Empty));
                }
                _ => assert!(report.is_verified(), "{}", report.algorithm),
            }
        }
    }

    #[test]
    fn input_is_not_modified() {
        let input = vec![9, 8, 7];
        let report = run_one(SortAlgorithm::BubbleSort, &input, &DEFAULT_GUARD_THRESHOLDS);
        assert!(report.is_verified());
        assert_eq!(input, [9, 8, 7]);
    }
}
