pub mod bubble_sort;
pub mod insertion_sort;
pub mod merge_sort;
pub mod quick_sort;

use std::fmt;
use std::str::FromStr;

use crate::error::UnknownAlgorithm;

pub use bubble_sort::{bubble_sort, bubble_sort_in_place};
pub use insertion_sort::{insertion_sort, insertion_sort_in_place};
pub use merge_sort::{merge_sort, merge_sort_bottom_up};
pub use quick_sort::{quick_sort, quick_sort_in_place};

/// Selects one of the interchangeable sorts. Every variant returns a new,
/// non-decreasing permutation of its input and leaves the input untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum SortAlgorithm {
    Bubble,
    Insertion,
    Merge,
    Quick,
}

impl SortAlgorithm {
    pub const ALL: [SortAlgorithm; 4] = [
        SortAlgorithm::Bubble,
        SortAlgorithm::Insertion,
        SortAlgorithm::Merge,
        SortAlgorithm::Quick,
    ];

    pub fn name(self) -> &'static str {
        match self {
            SortAlgorithm::Bubble => "Bubble Sort",
            SortAlgorithm::Insertion => "Insertion Sort",
            SortAlgorithm::Merge => "Merge Sort",
            SortAlgorithm::Quick => "Quick Sort",
        }
    }

    fn key(self) -> &'static str {
        match self {
            SortAlgorithm::Bubble => "bubble",
            SortAlgorithm::Insertion => "insertion",
            SortAlgorithm::Merge => "merge",
            SortAlgorithm::Quick => "quick",
        }
    }

    /// Quick sort counts as stable here because `quick_sort` copies equal
    /// elements into one group in input order; `quick_sort_in_place` is not.
    pub fn is_stable(self) -> bool {
        match self {
            SortAlgorithm::Bubble | SortAlgorithm::Insertion | SortAlgorithm::Merge => true,
            SortAlgorithm::Quick => true,
        }
    }

    pub fn sort<T: Ord + Clone>(self, input: &[T]) -> Vec<T> {
        match self {
            SortAlgorithm::Bubble => bubble_sort(input),
            SortAlgorithm::Insertion => insertion_sort(input),
            SortAlgorithm::Merge => merge_sort(input),
            SortAlgorithm::Quick => quick_sort(input),
        }
    }
}

impl fmt::Display for SortAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for SortAlgorithm {
    type Err = UnknownAlgorithm;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase();
        let wanted = wanted.trim_end_matches("_sort").trim_end_matches(" sort");
        Self::ALL.into_iter().find(|a| a.key() == wanted).ok_or_else(|| UnknownAlgorithm {
            family: "sort",
            name: s.to_string(),
            expected: Self::ALL.map(SortAlgorithm::key).join(", "),
        })
    }
}
