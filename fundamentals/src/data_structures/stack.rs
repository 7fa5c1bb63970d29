//! Stack — LIFO structure backed by Vec.
//!
//! Variables:
//!   data : Vec<T>  — backing storage, top = data[N-1]
//!   N    : usize   — current number of elements = data.len()
//!
//! Equations:
//!   push(x): data[N] = x,  N' = N + 1       O(1) amortised
//!   pop():   N' = N - 1,   returns data[N-1] O(1)
//!   peek():  returns &data[N-1]              O(1)
//!
//!   pop() and peek() on N = 0 return None.

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Stack<T> {
    data: Vec<T>,
}

impl<T> Stack<T> {
    pub fn new() -> Self { Self { data: Vec::new() } }
    pub fn with_capacity(capacity: usize) -> Self { Self { data: Vec::with_capacity(capacity) } }
    pub fn push(&mut self, item: T)     { self.data.push(item); }
    pub fn pop(&mut self)  -> Option<T> { self.data.pop() }
    pub fn peek(&self) -> Option<&T>    { self.data.last() }
    pub fn is_empty(&self) -> bool      { self.data.is_empty() }
    pub fn size(&self) -> usize         { self.data.len() }
    pub fn len(&self) -> usize          { self.data.len() }

    /// Iterates from the bottom of the stack to the top.
    pub fn iter(&self) -> std::slice::Iter<'_, T> { self.data.iter() }
}

impl<T> Default for Stack<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> FromIterator<T> for Stack<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self { data: iter.into_iter().collect() }
    }
}

impl<T> Extend<T> for Stack<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.data.extend(iter);
    }
}
