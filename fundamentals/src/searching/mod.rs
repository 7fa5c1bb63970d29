pub mod binary_search;
pub mod interpolation_search;
pub mod linear_search;

use std::fmt;
use std::str::FromStr;

use crate::error::UnknownAlgorithm;

pub use binary_search::binary_search;
pub use interpolation_search::{interpolation_search, Interpolate};
pub use linear_search::linear_search;

/// Selects one of the interchangeable searches. All of them answer with the
/// index of an element equal to the target, or `None`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum SearchAlgorithm {
    Linear,
    Binary,
    Interpolation,
}

impl SearchAlgorithm {
    pub const ALL: [SearchAlgorithm; 3] = [
        SearchAlgorithm::Linear,
        SearchAlgorithm::Binary,
        SearchAlgorithm::Interpolation,
    ];

    pub fn name(self) -> &'static str {
        match self {
            SearchAlgorithm::Linear => "Linear Search",
            SearchAlgorithm::Binary => "Binary Search",
            SearchAlgorithm::Interpolation => "Interpolation Search",
        }
    }

    fn key(self) -> &'static str {
        match self {
            SearchAlgorithm::Linear => "linear",
            SearchAlgorithm::Binary => "binary",
            SearchAlgorithm::Interpolation => "interpolation",
        }
    }

    /// Whether the input must be sorted ascending for the answer to be meaningful.
    pub fn requires_sorted(self) -> bool {
        !matches!(self, SearchAlgorithm::Linear)
    }

    pub fn search<T: Interpolate>(self, arr: &[T], target: &T) -> Option<usize> {
        match self {
            SearchAlgorithm::Linear => linear_search(arr, target),
            SearchAlgorithm::Binary => binary_search(arr, target),
            SearchAlgorithm::Interpolation => interpolation_search(arr, target),
        }
    }
}

impl fmt::Display for SearchAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for SearchAlgorithm {
    type Err = UnknownAlgorithm;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase();
        let wanted = wanted.trim_end_matches("_search").trim_end_matches(" search");
        Self::ALL.into_iter().find(|a| a.key() == wanted).ok_or_else(|| UnknownAlgorithm {
            family: "search",
            name: s.to_string(),
            expected: Self::ALL.map(SearchAlgorithm::key).join(", "),
        })
    }
}
