//! Linear search.
//!
//! Equation:
//!   result = min { i : arr[i] == target },  None if no such i
//!   Complexity: O(n). No ordering precondition.

pub fn linear_search<T: PartialEq>(arr: &[T], target: &T) -> Option<usize> {
    arr.iter().position(|v| v == target)
}
