//! Times core calls. Each measurement wraps exactly one call with
//! `Instant`, so the fundamentals crate never sees a clock.

use std::time::{Duration, Instant};

use fundamentals::searching::SearchAlgorithm;
use fundamentals::sorting::SortAlgorithm;
use log::{debug, info};
use serde::Serialize;

use crate::error::{HarnessError, Result};

#[derive(Debug, Clone, Serialize)]
pub struct Timing {
    pub algorithm: String,
    #[serde(serialize_with = "as_secs_f64")]
    pub elapsed: Duration,
    /// Index returned by a search; absent for sorts.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub found: Option<usize>,
}

fn as_secs_f64<S: serde::Serializer>(elapsed: &Duration, serializer: S) -> std::result::Result<S::Ok, S::Error> {
    serializer.serialize_f64(elapsed.as_secs_f64())
}

fn measure<R>(call: impl FnOnce() -> R) -> (R, Duration) {
    let start = Instant::now();
    let out = call();
    (out, start.elapsed())
}

/// Sorts a fresh copy of `input` with every algorithm and checks the result.
pub fn time_sorts(input: &[i64], algorithms: &[SortAlgorithm]) -> Result<Vec<Timing>> {
    let mut timings = Vec::with_capacity(algorithms.len());
    for &algorithm in algorithms {
        debug!("sorting {} elements with {algorithm}", input.len());
        let (sorted, elapsed) = measure(|| algorithm.sort(input));
        if sorted.len() != input.len() || !sorted.windows(2).all(|w| w[0] <= w[1]) {
            return Err(HarnessError::Unsorted { algorithm: algorithm.to_string() });
        }
        info!("{algorithm}: {:.5}s", elapsed.as_secs_f64());
        timings.push(Timing { algorithm: algorithm.to_string(), elapsed, found: None });
    }
    Ok(timings)
}

/// Searches `sorted` for `target` with every algorithm and checks the answer.
/// `sorted` must be ascending and contain `target`.
pub fn time_searches(sorted: &[i64], target: i64, algorithms: &[SearchAlgorithm]) -> Result<Vec<Timing>> {
    let mut timings = Vec::with_capacity(algorithms.len());
    for &algorithm in algorithms {
        debug!("searching {} elements for {target} with {algorithm}", sorted.len());
        let (found, elapsed) = measure(|| algorithm.search(sorted, &target));
        if !found.is_some_and(|i| sorted[i] == target) {
            return Err(HarnessError::WrongIndex { algorithm: algorithm.to_string(), target, found });
        }
        info!("{algorithm}: {:.5}s", elapsed.as_secs_f64());
        timings.push(Timing { algorithm: algorithm.to_string(), elapsed, found });
    }
    Ok(timings)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_sort_is_timed_and_verified() {
        let timings = time_sorts(&[5, 3, 1, 4, 2], &SortAlgorithm::ALL).expect("all sorts succeed");
        let names: Vec<&str> = timings.iter().map(|t| t.algorithm.as_str()).collect();
        assert_eq!(names, vec!["Bubble Sort", "Insertion Sort", "Merge Sort", "Quick Sort"]);
        assert!(timings.iter().all(|t| t.found.is_none()));
    }

    #[test]
    fn searches_report_the_found_index() {
        let timings = time_searches(&[1, 2, 3, 4, 5], 4, &SearchAlgorithm::ALL).expect("target is present");
        assert!(timings.iter().all(|t| t.found == Some(3)));
    }

    #[test]
    fn missing_target_is_a_verification_error() {
        let err = time_searches(&[1, 2, 3], 9, &[SearchAlgorithm::Binary]).expect_err("9 is absent");
        assert!(matches!(err, HarnessError::WrongIndex { found: None, target: 9, .. }));
    }
}
