//! Quick sort, copy-based three-way and in-place Lomuto.
//!
//! Variables:
//!   p : T  — pivot value
//!
//! Equations (quick_sort):
//!   p = A[n / 2]
//!   L = [x in A | x < p],  E = [x in A | x == p],  G = [x in A | x > p]
//!   sort(A) = sort(L) ++ E ++ sort(G)
//!   Each group keeps input order, so equal elements never reorder.
//!   Complexity: O(n log n) average, O(n^2) worst, O(n) extra memory per level.
//!
//! Equations (quick_sort_in_place):
//!   p = median(A[0], A[n / 2], A[n - 1]), moved to A[n - 1]
//!   Lomuto: A[..i] <= p, A[i] = p, A[i+1..] > p
//!   recurse into the shorter side, loop on the longer  =>  depth O(log n)
//!   Complexity: O(n log n) average, O(n^2) worst (e.g. many equal keys). Not stable.

/// Returns a sorted copy; `input` is left untouched.
pub fn quick_sort<T: Ord + Clone>(input: &[T]) -> Vec<T> {
    if input.len() <= 1 {
        return input.to_vec();
    }
    let pivot = &input[input.len() / 2];
    let less: Vec<T> = input.iter().filter(|x| *x < pivot).cloned().collect();
    let equal: Vec<T> = input.iter().filter(|x| *x == pivot).cloned().collect();
    let greater: Vec<T> = input.iter().filter(|x| *x > pivot).cloned().collect();

    let mut sorted = quick_sort(&less);
    sorted.extend(equal);
    sorted.extend(quick_sort(&greater));
    sorted
}

/// Sorts `arr` in place.
pub fn quick_sort_in_place<T: Ord>(mut arr: &mut [T]) {
    while arr.len() > 1 {
        let pivot = partition(arr);
        let (left, right) = std::mem::take(&mut arr).split_at_mut(pivot);
        let right = &mut right[1..];
        if left.len() < right.len() {
            quick_sort_in_place(left);
            arr = right;
        } else {
            quick_sort_in_place(right);
            arr = left;
        }
    }
}

fn partition<T: Ord>(arr: &mut [T]) -> usize {
    let len = arr.len();
    let pivot_index = len - 1;
    move_median_to_end(arr);
    let mut i = 0;
    for j in 0..pivot_index {
        if arr[j] <= arr[pivot_index] {
            arr.swap(i, j);
            i += 1;
        }
    }
    arr.swap(i, pivot_index);
    i
}

fn move_median_to_end<T: Ord>(arr: &mut [T]) {
    let last = arr.len() - 1;
    let mid = arr.len() / 2;
    if arr[mid] < arr[0] {
        arr.swap(mid, 0);
    }
    if arr[last] < arr[0] {
        arr.swap(last, 0);
    }
    if arr[last] < arr[mid] {
        arr.swap(last, mid);
    }
    // arr[0] <= arr[mid] <= arr[last]
    arr.swap(mid, last);
}
