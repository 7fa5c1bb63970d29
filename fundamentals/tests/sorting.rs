use fundamentals::sorting::{
    bubble_sort, bubble_sort_in_place, insertion_sort, insertion_sort_in_place, merge_sort,
    merge_sort_bottom_up, quick_sort, quick_sort_in_place, SortAlgorithm,
};
use proptest::prelude::*;
use std::cmp::Ordering;

/// Compares on `key` only, so `tag` exposes how equal elements moved.
#[derive(Debug, Clone, Copy)]
struct Tagged {
    key: u8,
    tag: usize,
}

impl PartialEq for Tagged {
    fn eq(&self, other: &Self) -> bool {
        self.key == other.key
    }
}
impl Eq for Tagged {}
impl PartialOrd for Tagged {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
impl Ord for Tagged {
    fn cmp(&self, other: &Self) -> Ordering {
        self.key.cmp(&other.key)
    }
}

fn tag(keys: &[u8]) -> Vec<Tagged> {
    keys.iter().enumerate().map(|(tag, &key)| Tagged { key, tag }).collect()
}

fn is_stable(sorted: &[Tagged]) -> bool {
    sorted.windows(2).all(|w| w[0].key < w[1].key || (w[0].key == w[1].key && w[0].tag < w[1].tag))
}

type SortFn = fn(&[i32]) -> Vec<i32>;

fn all_sorts() -> Vec<(&'static str, SortFn)> {
    let sorts: [(&'static str, SortFn); 8] = [
        ("bubble", bubble_sort),
        ("insertion", insertion_sort),
        ("merge", merge_sort),
        ("merge_bottom_up", merge_sort_bottom_up),
        ("quick", quick_sort),
        ("bubble_in_place", |a| {
            let mut v = a.to_vec();
            bubble_sort_in_place(&mut v);
            v
        }),
        ("insertion_in_place", |a| {
            let mut v = a.to_vec();
            insertion_sort_in_place(&mut v);
            v
        }),
        ("quick_in_place", |a| {
            let mut v = a.to_vec();
            quick_sort_in_place(&mut v);
            v
        }),
    ];
    sorts.to_vec()
}

#[test]
fn every_algorithm_sorts_reference_input() {
    for algorithm in SortAlgorithm::ALL {
        assert_eq!(algorithm.sort(&[5, 3, 1, 4, 2]), vec![1, 2, 3, 4, 5], "{algorithm}");
    }
    for (name, sort) in all_sorts() {
        assert_eq!(sort(&[5, 3, 1, 4, 2]), vec![1, 2, 3, 4, 5], "{name}");
    }
}

#[test]
fn degenerate_inputs_are_valid() {
    for (name, sort) in all_sorts() {
        assert_eq!(sort(&[]), Vec::<i32>::new(), "{name}");
        assert_eq!(sort(&[7]), vec![7], "{name}");
        assert_eq!(sort(&[2, 2, 2, 2]), vec![2, 2, 2, 2], "{name}");
    }
}

#[test]
fn sorting_a_copy_leaves_input_untouched() {
    let input = vec![3, 1, 2];
    for algorithm in SortAlgorithm::ALL {
        let _ = algorithm.sort(&input);
        assert_eq!(input, vec![3, 1, 2], "{algorithm} mutated its input");
    }
}

#[test]
fn algorithm_names_parse_back() {
    for algorithm in SortAlgorithm::ALL {
        assert_eq!(algorithm.name().parse::<SortAlgorithm>(), Ok(algorithm));
    }
    assert_eq!("merge_sort".parse::<SortAlgorithm>(), Ok(SortAlgorithm::Merge));
    let err = "shell".parse::<SortAlgorithm>().expect_err("shell sort is not provided");
    assert_eq!(err.name, "shell");
    assert!(err.to_string().contains("bubble, insertion, merge, quick"));
}

#[test]
fn in_place_quick_sort_handles_sorted_and_reversed_runs() {
    let mut ascending: Vec<i32> = (0..50_000).collect();
    quick_sort_in_place(&mut ascending);
    assert!(ascending.iter().copied().eq(0..50_000));

    let mut descending: Vec<i32> = (0..50_000).rev().collect();
    quick_sort_in_place(&mut descending);
    assert!(descending.iter().copied().eq(0..50_000));
}

#[test]
fn reported_stability_matches_tie_order() {
    let input = tag(&[3, 1, 3, 0, 1, 3, 0, 2, 2, 1]);
    let stable: Vec<_> = SortAlgorithm::ALL.into_iter().filter(|a| a.is_stable()).collect();
    assert_eq!(
        stable,
        vec![SortAlgorithm::Bubble, SortAlgorithm::Insertion, SortAlgorithm::Merge, SortAlgorithm::Quick]
    );
    for algorithm in stable {
        assert!(is_stable(&algorithm.sort(&input)), "{algorithm} reordered equal keys");
    }
}

proptest! {
    #[test]
    fn output_is_sorted_permutation(input in prop::collection::vec(any::<i32>(), 0..200)) {
        let mut expected = input.clone();
        expected.sort();
        for (name, sort) in all_sorts() {
            let sorted = sort(&input);
            prop_assert_eq!(&sorted, &expected, "{}", name);
        }
    }

    #[test]
    fn stable_sorts_keep_equal_keys_in_input_order(keys in prop::collection::vec(0u8..8, 0..200)) {
        let input = tag(&keys);
        prop_assert!(is_stable(&bubble_sort(&input)));
        prop_assert!(is_stable(&insertion_sort(&input)));
        prop_assert!(is_stable(&merge_sort(&input)));
        prop_assert!(is_stable(&merge_sort_bottom_up(&input)));
        prop_assert!(is_stable(&quick_sort(&input)));
        for algorithm in SortAlgorithm::ALL {
            prop_assert_eq!(algorithm.is_stable(), is_stable(&algorithm.sort(&input)));
        }
    }
}
