//! Node shapes for the linked structures.
//!
//! Variables:
//!   ListNode<T> : data + next            — one forward link
//!   TreeNode<T> : data + left + right    — two child links
//!
//! Ownership:
//!   every link is Option<Box<_>>, so a node exclusively owns what hangs
//!   below it and no node has more than one parent.

/// Link to the next node of a singly linked list.
pub type ListLink<T> = Option<Box<ListNode<T>>>;

/// Link to a child of a binary tree node.
pub type TreeLink<T> = Option<Box<TreeNode<T>>>;

#[derive(Debug)]
pub struct ListNode<T> {
    pub(crate) data: T,
    pub(crate) next: ListLink<T>,
}

impl<T> ListNode<T> {
    pub fn new(data: T) -> Self {
        Self { data, next: None }
    }

    pub fn data(&self) -> &T {
        &self.data
    }

    pub fn next(&self) -> Option<&ListNode<T>> {
        self.next.as_deref()
    }
}

#[derive(Debug)]
pub struct TreeNode<T> {
    pub(crate) data: T,
    pub(crate) left: TreeLink<T>,
    pub(crate) right: TreeLink<T>,
}

impl<T> TreeNode<T> {
    pub fn new(data: T) -> Self {
        Self { data, left: None, right: None }
    }

    pub fn data(&self) -> &T {
        &self.data
    }

    /// Subtree holding values strictly less than `data`.
    pub fn left(&self) -> Option<&TreeNode<T>> {
        self.left.as_deref()
    }

    /// Subtree holding values greater than or equal to `data`.
    pub fn right(&self) -> Option<&TreeNode<T>> {
        self.right.as_deref()
    }

    pub fn is_leaf(&self) -> bool {
        self.left.is_none() && self.right.is_none()
    }
}
