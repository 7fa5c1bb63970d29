//! Queue — FIFO structure backed by a growable ring buffer.
//!
//! Variables:
//!   buf  : VecDeque<T>  — circular backing array, head = buf.front()
//!   N    : usize        — current occupancy = buf.len()
//!
//! Equations:
//!   enqueue(x): buf.push_back(x),  N' = N + 1    O(1) amortised
//!   dequeue():  buf.pop_front(),   N' = N - 1    O(1)
//!   empty iff N == 0, in which case dequeue() and peek() return None
//!
//! Capacity doubles when the ring is full, so enqueue never fails.

use std::collections::VecDeque;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Queue<T> {
    buf: VecDeque<T>,
}

impl<T> Queue<T> {
    pub fn new() -> Self {
        Self { buf: VecDeque::new() }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self { buf: VecDeque::with_capacity(capacity) }
    }

    pub fn enqueue(&mut self, item: T) {
        self.buf.push_back(item);
    }

    pub fn dequeue(&mut self) -> Option<T> {
        self.buf.pop_front()
    }

    pub fn peek(&self) -> Option<&T> {
        self.buf.front()
    }
    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }
    pub fn size(&self) -> usize {
        self.buf.len()
    }
    pub fn len(&self) -> usize {
        self.buf.len()
    }

    /// Iterates from head (next to dequeue) to tail.
    pub fn iter(&self) -> std::collections::vec_deque::Iter<'_, T> {
        self.buf.iter()
    }
}

impl<T> Default for Queue<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> FromIterator<T> for Queue<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self { buf: iter.into_iter().collect() }
    }
}

impl<T> Extend<T> for Queue<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.buf.extend(iter);
    }
}
