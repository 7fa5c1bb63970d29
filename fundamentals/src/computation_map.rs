/// Mapping of modules in fundamentals/src to type of computation
/// and time complexity (average case, worst case where they differ)
pub const ALGORITHMS_COMPUTATION_MAP: &[(&str, &str, &str)] = &[
    // Data structures
    ("data_structures/stack.rs", "LIFO container", "O(1) push/pop/peek"),
    ("data_structures/queue.rs", "FIFO container", "O(1) enqueue/dequeue"),
    (
        "data_structures/linked_list.rs",
        "Linked sequence",
        "O(n) append/insert/delete/search",
    ),
    (
        "data_structures/bst.rs",
        "Ordered multiset",
        "O(log n) insert/find, O(n) worst",
    ),
    // Sorting
    (
        "sorting/bubble_sort.rs",
        "Sorting, stable",
        "O(n^2), O(n) when sorted",
    ),
    (
        "sorting/insertion_sort.rs",
        "Sorting, stable",
        "O(n^2), O(n) when sorted",
    ),
    ("sorting/merge_sort.rs", "Sorting, stable", "O(n log n)"),
    (
        "sorting/quick_sort.rs",
        "Sorting, partition-based",
        "O(n log n), O(n^2) worst",
    ),
    // Searching
    ("searching/linear_search.rs", "Search, unordered", "O(n)"),
    ("searching/binary_search.rs", "Search, sorted input", "O(log n)"),
    (
        "searching/interpolation_search.rs",
        "Search, sorted input",
        "O(log log n), O(n) worst",
    ),
];
