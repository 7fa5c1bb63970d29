//! Insertion sort.
//!
//! Variables:
//!   i : usize  — arr[..i] is the sorted prefix
//!   j : usize  — slot the element arr[i] moves into
//!
//! Equations:
//!   j = min { k <= i : arr[m] > arr[i] for all m in k..i }
//!   arr[j..=i].rotate_right(1)   — shifts the greater run one slot right
//!   Complexity: O(n^2) worst/average, O(n) on sorted input. Stable.

/// Returns a sorted copy; `input` is left untouched.
pub fn insertion_sort<T: Ord + Clone>(input: &[T]) -> Vec<T> {
    let mut out = input.to_vec();
    insertion_sort_in_place(&mut out);
    out
}

/// Sorts `arr` in place.
pub fn insertion_sort_in_place<T: Ord>(arr: &mut [T]) {
    for i in 1..arr.len() {
        let mut j = i;
        while j > 0 && arr[i] < arr[j - 1] {
            j -= 1;
        }
        arr[j..=i].rotate_right(1);
    }
}
