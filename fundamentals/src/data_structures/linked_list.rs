//! Singly-linked list with owned nodes.
//!
//! Variables:
//!   head : Option<Box<ListNode<T>>>  — pointer to first node, None if empty
//!   N    : usize                     — number of nodes
//!   c    : CursorMut                 — exclusive borrow of one node
//!
//! Equations:
//!   push_front(x):  new.next = head,  head = new,  N' = N+1          O(1)
//!   pop_front():    head = head.next,  N' = N-1                      O(1)
//!   append(x):      walk to tail, tail.next = new,  N' = N+1         O(N)
//!   insert_after(k, x):  c = node holding k,
//!                   new.next = c.next,  c.next = new                 O(N)
//!                   absent k  =>  no-op
//!   delete_node(k): node[i-1].next = node[i].next, i = first index
//!                   with node[i].data == k; absent k => no-op        O(N)
//!   search(k):      exists i. node[i].data == k                      O(N)

use std::fmt;

use super::node::{ListLink, ListNode};

pub struct LinkedList<T> {
    head: ListLink<T>,
    len: usize,
}

impl<T> LinkedList<T> {
    pub fn new() -> Self {
        Self { head: None, len: 0 }
    }

    pub fn push_front(&mut self, data: T) {
        let mut node = Box::new(ListNode::new(data));
        node.next = self.head.take();
        self.head = Some(node);
        self.len += 1;
    }

    pub fn pop_front(&mut self) -> Option<T> {
        self.head.take().map(|node| {
            let ListNode { data, next } = *node;
            self.head = next;
            self.len -= 1;
            data
        })
    }

    /// Links a new node after the current tail, or makes it the head of an
    /// empty list.
    ///
    /// No tail pointer is kept, so each call walks the whole chain: O(N).
    /// Building a list from many values goes through [`Extend`], which walks
    /// once for the batch.
    pub fn append(&mut self, data: T) {
        let new_node = Box::new(ListNode::new(data));
        let mut cur = &mut self.head;
        while let Some(node) = cur {
            cur = &mut node.next;
        }
        *cur = Some(new_node);
        self.len += 1;
    }

    pub fn peek_front(&self) -> Option<&T> {
        self.head.as_ref().map(|n| &n.data)
    }

    pub fn head(&self) -> Option<&ListNode<T>> {
        self.head.as_deref()
    }

    pub fn len(&self) -> usize {
        self.len
    }
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn iter(&self) -> Iter<'_, T> {
        Iter { next: self.head.as_deref() }
    }
}

impl<T: PartialEq> LinkedList<T> {
    /// Removes the first node holding `key` and returns its payload.
    /// An absent key leaves the list unchanged and yields `None`.
    pub fn delete_node(&mut self, key: &T) -> Option<T> {
        let mut cur = &mut self.head;
        while cur.as_ref().is_some_and(|node| node.data != *key) {
            cur = &mut cur.as_mut()?.next;
        }

        let removed = cur.take()?;
        let ListNode { data, next } = *removed;
        *cur = next;
        self.len -= 1;
        Some(data)
    }

    pub fn search(&self, key: &T) -> bool {
        self.iter().any(|data| data == key)
    }

    /// Cursor on the first node holding `key`.
    ///
    /// The cursor borrows the list mutably, so the node it names cannot be
    /// unlinked or shifted while the cursor is alive.
    pub fn cursor_mut(&mut self, key: &T) -> Option<CursorMut<'_, T>> {
        let mut cur = self.head.as_deref_mut();
        while let Some(node) = cur {
            if node.data == *key {
                return Some(CursorMut { node, len: &mut self.len });
            }
            cur = node.next.as_deref_mut();
        }
        None
    }

    /// Splices `data` directly after the first node holding `key`.
    ///
    /// Returns `false` and leaves the list untouched when no node holds `key`.
    pub fn insert_after(&mut self, key: &T, data: T) -> bool {
        match self.cursor_mut(key) {
            Some(mut cursor) => {
                cursor.insert_after(data);
                true
            }
            None => false,
        }
    }
}

impl<T> Default for LinkedList<T> {
    fn default() -> Self {
        Self::new()
    }
}

// Box's recursive drop would walk the chain on the call stack.
impl<T> Drop for LinkedList<T> {
    fn drop(&mut self) {
        let mut cur = self.head.take();
        while let Some(mut node) = cur {
            cur = node.next.take();
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for LinkedList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T> FromIterator<T> for LinkedList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = Self::new();
        list.extend(iter);
        list
    }
}

impl<T> Extend<T> for LinkedList<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        let mut cur = &mut self.head;
        while let Some(node) = cur {
            cur = &mut node.next;
        }
        for data in iter {
            let node = cur.insert(Box::new(ListNode::new(data)));
            cur = &mut node.next;
            self.len += 1;
        }
    }
}

/// Mutable handle on one node of a [`LinkedList`], from [`LinkedList::cursor_mut`].
pub struct CursorMut<'a, T> {
    node: &'a mut ListNode<T>,
    len: &'a mut usize,
}

impl<'a, T> CursorMut<'a, T> {
    pub fn current(&self) -> &T {
        &self.node.data
    }

    pub fn current_mut(&mut self) -> &mut T {
        &mut self.node.data
    }

    /// Splices a new node between the current node and its successor.
    /// The cursor stays on the current node.
    pub fn insert_after(&mut self, data: T) {
        let mut new_node = Box::new(ListNode::new(data));
        new_node.next = self.node.next.take();
        self.node.next = Some(new_node);
        *self.len += 1;
    }

    /// Moves to the successor, or `None` at the tail.
    pub fn move_next(self) -> Option<Self> {
        let CursorMut { node, len } = self;
        node.next.as_deref_mut().map(|node| CursorMut { node, len })
    }
}

pub struct Iter<'a, T> {
    next: Option<&'a ListNode<T>>,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        self.next.map(|node| {
            self.next = node.next.as_deref();
            &node.data
        })
    }
}

impl<'a, T> IntoIterator for &'a LinkedList<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
