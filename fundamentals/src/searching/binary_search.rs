//! Binary search over an ascending slice.
//!
//! Variables:
//!   [l, r) : half-open window still holding candidates
//!   m      : (l + r) / 2, probed index
//!
//! Equations:
//!   arr[m] <  target  =>  l' = m + 1
//!   arr[m] >  target  =>  r' = m
//!   arr[m] == target  =>  Some(m)
//!   l == r            =>  None
//!   Complexity: O(log n). Unsorted input gives an unspecified answer, never a panic.

use std::cmp::Ordering;

pub fn binary_search<T: Ord>(arr: &[T], target: &T) -> Option<usize> {
    let (mut l, mut r) = (0, arr.len());
    while l < r {
        let m = l + (r - l) / 2;
        match arr[m].cmp(target) {
            Ordering::Equal => return Some(m),
            Ordering::Less => l = m + 1,
            Ordering::Greater => r = m,
        }
    }
    None
}
