//! Binary search tree (unbalanced multiset).
//!
//! Variables:
//!   root : Option<Box<TreeNode<T>>>  — None if empty
//!   N    : usize                     — number of stored values
//!   H    : usize                     — height, nodes on the longest root-leaf path
//!
//! Invariant, for every node v:
//!   x in left(v)   =>  x <  v.data
//!   x in right(v)  =>  x >= v.data      (duplicates route right)
//!
//! Equations:
//!   insert(x):  descend, x < v.data ? left : right, attach leaf    O(H)
//!   find(x):    same walk, stop at first v.data == x               O(H)
//!   inorder():  left, node, right  =>  ascending sequence          O(N)
//!
//! No rebalancing: inserting keys in increasing order gives H = N. Every
//! walk here is a loop or an explicit stack, so a degenerate tree costs
//! time but never call-stack depth.

use std::cmp::Ordering;
use std::fmt;

use super::node::{TreeLink, TreeNode};

pub struct BinarySearchTree<T> {
    root: TreeLink<T>,
    len: usize,
}

impl<T> BinarySearchTree<T> {
    pub fn new() -> Self {
        Self { root: None, len: 0 }
    }

    pub fn len(&self) -> usize {
        self.len
    }
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    pub fn root(&self) -> Option<&TreeNode<T>> {
        self.root.as_deref()
    }

    /// Lazy ascending traversal. Each call starts over from the root, and the
    /// iterator only yields values; what to do with them is up to the caller.
    pub fn inorder(&self) -> InOrder<'_, T> {
        let mut iter = InOrder { stack: Vec::new() };
        iter.push_left_spine(self.root.as_deref());
        iter
    }

    pub fn min(&self) -> Option<&T> {
        let mut node = self.root.as_deref()?;
        while let Some(left) = node.left.as_deref() {
            node = left;
        }
        Some(&node.data)
    }

    pub fn max(&self) -> Option<&T> {
        let mut node = self.root.as_deref()?;
        while let Some(right) = node.right.as_deref() {
            node = right;
        }
        Some(&node.data)
    }

    /// Counts levels breadth-first; an empty tree has height 0.
    pub fn height(&self) -> usize {
        let mut level: Vec<&TreeNode<T>> = self.root.as_deref().into_iter().collect();
        let mut height = 0;
        while !level.is_empty() {
            height += 1;
            level = level
                .into_iter()
                .flat_map(|node| node.left.as_deref().into_iter().chain(node.right.as_deref()))
                .collect();
        }
        height
    }
}

impl<T: Ord> BinarySearchTree<T> {
    pub fn insert(&mut self, data: T) {
        let mut slot = &mut self.root;
        while let Some(node) = slot {
            slot = if data < node.data { &mut node.left } else { &mut node.right };
        }
        *slot = Some(Box::new(TreeNode::new(data)));
        self.len += 1;
    }

    /// First node on the search path whose value equals `data`.
    pub fn find(&self, data: &T) -> Option<&TreeNode<T>> {
        let mut cur = self.root.as_deref();
        while let Some(node) = cur {
            cur = match data.cmp(&node.data) {
                Ordering::Equal => return Some(node),
                Ordering::Less => node.left.as_deref(),
                Ordering::Greater => node.right.as_deref(),
            };
        }
        None
    }

    pub fn contains(&self, data: &T) -> bool {
        self.find(data).is_some()
    }
}

impl<T> Default for BinarySearchTree<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for BinarySearchTree<T> {
    fn drop(&mut self) {
        let mut pending: Vec<Box<TreeNode<T>>> = self.root.take().into_iter().collect();
        while let Some(mut node) = pending.pop() {
            pending.extend(node.left.take());
            pending.extend(node.right.take());
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for BinarySearchTree<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.inorder()).finish()
    }
}

impl<T: Ord> FromIterator<T> for BinarySearchTree<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut tree = Self::new();
        tree.extend(iter);
        tree
    }
}

impl<T: Ord> Extend<T> for BinarySearchTree<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for data in iter {
            self.insert(data);
        }
    }
}

impl<'a, T> IntoIterator for &'a BinarySearchTree<T> {
    type Item = &'a T;
    type IntoIter = InOrder<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.inorder()
    }
}

/// In-order iterator over a [`BinarySearchTree`].
///
/// `stack` holds the nodes whose left subtree is done or being walked and
/// whose own value has not been yielded yet; its top is the next value.
pub struct InOrder<'a, T> {
    stack: Vec<&'a TreeNode<T>>,
}

impl<'a, T> InOrder<'a, T> {
    fn push_left_spine(&mut self, mut node: Option<&'a TreeNode<T>>) {
        while let Some(n) = node {
            self.stack.push(n);
            node = n.left.as_deref();
        }
    }
}

impl<'a, T> Iterator for InOrder<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.push_left_spine(node.right.as_deref());
        Some(&node.data)
    }
}
