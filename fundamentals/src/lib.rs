//! # Fundamentals Crate
//!
//! Classical in-memory data structures and comparison-based sorting and
//! searching, kept small enough to read and to time against each other.
//!
//! ## Modules
//!
//! - `data_structures` – Stack, queue, singly linked list, binary search tree
//! - `sorting` – Bubble, insertion, merge and quick sort behind `SortAlgorithm`
//! - `searching` – Linear, binary and interpolation search behind `SearchAlgorithm`
//! - `computation_map` – Catalog of the modules above with their complexity
//!
//! Absence is never an error: empty containers and missing keys answer with
//! `None` or `false`, and deleting a missing key is a no-op.
//!
//! ---
//!
//! ## Usage Example
//!
//! ```rust
//! use fundamentals::data_structures::BinarySearchTree;
//! use fundamentals::searching::binary_search;
//! use fundamentals::sorting::merge_sort;
//!
//! let sorted = merge_sort(&[3, 1, 2]);
//! assert_eq!(sorted, vec![1, 2, 3]);
//! assert_eq!(binary_search(&sorted, &2), Some(1));
//!
//! let tree: BinarySearchTree<i32> = [5, 3, 7].into_iter().collect();
//! assert_eq!(tree.inorder().copied().collect::<Vec<_>>(), vec![3, 5, 7]);
//! ```
//!
//! ---
//!
//! Timing lives outside this crate: every operation is a plain call that a
//! harness can wrap.

pub mod computation_map;
pub mod data_structures;
pub mod error;
pub mod searching;
pub mod sorting;

pub use error::UnknownAlgorithm;
