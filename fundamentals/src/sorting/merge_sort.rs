//! Merge sort, top-down and bottom-up.
//!
//! Variables:
//!   n   : usize  — input length
//!   mid : usize  — n / 2, split point of the top-down variant
//!   w   : usize  — run width of the bottom-up variant, 1, 2, 4, ...
//!
//! Equations:
//!   merge(L, R): repeatedly take min(L[i], R[j]), L[i] on ties
//!   top-down:  sort(A) = merge(sort(A[..mid]), sort(A[mid..]))   depth ceil(log2 n)
//!   bottom-up: merge adjacent runs of width w, w' = 2w, until w >= n
//!   Complexity: O(n log n) always, O(n) auxiliary storage. Stable.

/// Recursive merge sort. Returns a sorted copy.
pub fn merge_sort<T: Ord + Clone>(input: &[T]) -> Vec<T> {
    if input.len() <= 1 {
        return input.to_vec();
    }
    let mid = input.len() / 2;
    let left = merge_sort(&input[..mid]);
    let right = merge_sort(&input[mid..]);

    let mut out = Vec::with_capacity(input.len());
    merge_into(&left, &right, &mut out);
    out
}

/// Iterative merge sort with no recursion. Returns a sorted copy.
pub fn merge_sort_bottom_up<T: Ord + Clone>(input: &[T]) -> Vec<T> {
    let n = input.len();
    let mut src = input.to_vec();
    let mut width = 1;
    while width < n {
        let mut dst = Vec::with_capacity(n);
        for start in (0..n).step_by(2 * width) {
            let mid = (start + width).min(n);
            let end = (start + 2 * width).min(n);
            merge_into(&src[start..mid], &src[mid..end], &mut dst);
        }
        src = dst;
        width *= 2;
    }
    src
}

fn merge_into<T: Ord + Clone>(left: &[T], right: &[T], out: &mut Vec<T>) {
    let (mut i, mut j) = (0, 0);
    while i < left.len() && j < right.len() {
        if right[j] < left[i] {
            out.push(right[j].clone());
            j += 1;
        } else {
            out.push(left[i].clone());
            i += 1;
        }
    }
    out.extend_from_slice(&left[i..]);
    out.extend_from_slice(&right[j..]);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bottom_up_handles_non_power_of_two_lengths() {
        let input = [9, 2, 7, 4, 5, 6, 3];
        assert_eq!(merge_sort_bottom_up(&input), vec![2, 3, 4, 5, 6, 7, 9]);
    }

    #[derive(Debug, Clone)]
    struct Keyed(u8, char);

    impl PartialEq for Keyed {
        fn eq(&self, other: &Self) -> bool {
            self.0 == other.0
        }
    }
    impl Eq for Keyed {}
    impl PartialOrd for Keyed {
        fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
            Some(self.cmp(other))
        }
    }
    impl Ord for Keyed {
        fn cmp(&self, other: &Self) -> std::cmp::Ordering {
            self.0.cmp(&other.0)
        }
    }

    #[test]
    fn merge_prefers_left_on_ties() {
        let mut out = Vec::new();
        merge_into(&[Keyed(1, 'l')], &[Keyed(1, 'r')], &mut out);
        let tags: Vec<char> = out.iter().map(|k| k.1).collect();
        assert_eq!(tags, vec!['l', 'r']);
    }
}
