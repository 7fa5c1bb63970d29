//! Bubble sort.
//!
//! Variables:
//!   n    : usize  — input length
//!   pass : usize  — completed passes; arr[n-pass..] is final
//!
//! Equations:
//!   pass k compares arr[j], arr[j+1] for j in 0..n-k-1, swapping on arr[j] > arr[j+1]
//!   stop after the first pass without a swap
//!   Complexity: O(n^2) worst/average, O(n) on sorted input. Stable.

/// Returns a sorted copy; `input` is left untouched.
pub fn bubble_sort<T: Ord + Clone>(input: &[T]) -> Vec<T> {
    let mut out = input.to_vec();
    bubble_sort_in_place(&mut out);
    out
}

/// Sorts `arr` in place.
pub fn bubble_sort_in_place<T: Ord>(arr: &mut [T]) {
    let n = arr.len();
    for pass in 0..n {
        let mut swapped = false;
        for j in 0..n - pass - 1 {
            if arr[j] > arr[j + 1] {
                arr.swap(j, j + 1);
                swapped = true;
            }
        }
        if !swapped {
            break;
        }
    }
}
