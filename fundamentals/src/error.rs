use thiserror::Error;

/// Returned when parsing a [`SortAlgorithm`](crate::sorting::SortAlgorithm) or
/// [`SearchAlgorithm`](crate::searching::SearchAlgorithm) from an unknown name.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown {family} algorithm `{name}` (expected one of: {expected})")]
pub struct UnknownAlgorithm {
    pub family: &'static str,
    pub name: String,
    pub expected: String,
}
