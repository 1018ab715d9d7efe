//! Comparator-driven binary heap
//!
//! A binary heap stored as a complete binary tree flattened into a `Vec`.
//! The children of index `i` live at `2i + 1` and `2i + 2`, its parent at
//! `(i - 1) / 2`. Priority comes from an injected [`Comparator`], so the same
//! type serves as min-heap, max-heap or a priority queue over custom records.
//!
//! # Time Complexity
//!
//! | Operation    | Complexity   |
//! |--------------|--------------|
//! | `push`       | O(log n)     |
//! | `pop`        | O(log n)     |
//! | `peek`       | O(1)         |
//! | `from_vec`   | O(n)         |
//! | `append`     | O(n + m)     |
//!
//! # Example
//!
//! ```rust
//! use rust_core_structures::heap::Heap;
//!
//! let mut heap = Heap::min();
//! heap.push(3);
//! heap.push(1);
//! heap.push(2);
//!
//! assert_eq!(heap.peek(), Some(&1));
//! assert_eq!(heap.pop(), Some(1));
//! assert_eq!(heap.pop(), Some(2));
//! assert_eq!(heap.pop(), Some(3));
//! assert_eq!(heap.pop(), None);
//! ```

use crate::traits::{Comparator, MaxFirst, MinFirst};
use std::fmt;

/// A binary heap ordered by a comparator
///
/// The element for which the comparator says "precedes everything else" sits
/// at the root. Empty-heap `pop` and `peek` return `None` rather than a
/// default value, so a stored `0` is never confused with "nothing there".
pub struct Heap<T, C> {
    /// Elements in heap order
    data: Vec<T>,
    cmp: C,
}

impl<T: Ord> Heap<T, MinFirst> {
    /// Creates an empty min-heap
    pub fn min() -> Self {
        Self::new(MinFirst)
    }
}

impl<T: Ord> Heap<T, MaxFirst> {
    /// Creates an empty max-heap
    pub fn max() -> Self {
        Self::new(MaxFirst)
    }
}

impl<T, C: Comparator<T>> Heap<T, C> {
    /// Creates an empty heap ordered by `cmp`
    pub fn new(cmp: C) -> Self {
        Self {
            data: Vec::new(),
            cmp,
        }
    }

    /// Creates an empty heap that can hold `capacity` elements without reallocating
    pub fn with_capacity(capacity: usize, cmp: C) -> Self {
        Self {
            data: Vec::with_capacity(capacity),
            cmp,
        }
    }

    /// Builds a heap in place from an unordered vector
    ///
    /// Sifts down every parent, starting from the parent of the last element
    /// at `(len - 2) / 2` and moving towards the root. This is O(n), cheaper
    /// than n separate pushes.
    pub fn from_vec(values: Vec<T>, cmp: C) -> Self {
        let mut heap = Self { data: values, cmp };
        heap.rebuild();
        heap
    }

    /// Returns true if the heap is empty
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Returns the number of elements in the heap
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Returns how many elements the heap holds before it has to reallocate
    pub fn capacity(&self) -> usize {
        self.data.capacity()
    }

    /// Inserts an element
    pub fn push(&mut self, item: T) {
        self.data.push(item);
        self.sift_up(self.data.len() - 1);
    }

    /// Returns the highest-priority element without removing it
    pub fn peek(&self) -> Option<&T> {
        self.data.first()
    }

    /// Removes and returns the highest-priority element
    pub fn pop(&mut self) -> Option<T> {
        if self.data.is_empty() {
            return None;
        }

        let last_idx = self.data.len() - 1;
        self.data.swap(0, last_idx);
        let result = self.data.pop();

        if !self.data.is_empty() {
            self.sift_down(0);
        }

        result
    }

    /// Moves every element of `other` into this heap, leaving `other` empty
    ///
    /// Re-heapifies the combined array in O(n + m) instead of pushing the
    /// elements one by one.
    pub fn append(&mut self, other: &mut Self) {
        if other.data.is_empty() {
            return;
        }
        self.data.append(&mut other.data);
        self.rebuild();
    }

    /// Removes every element, keeping the allocation
    pub fn clear(&mut self) {
        self.data.clear();
    }

    /// Returns the backing array in heap order
    ///
    /// `as_slice()[0]` is the root; the children of `i` are at `2i + 1` and `2i + 2`.
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    /// Iterates over the elements in array order, which is not priority order
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.data.iter()
    }

    /// Consumes the heap, returning the backing array in heap order
    pub fn into_vec(self) -> Vec<T> {
        self.data
    }

    /// Consumes the heap, returning its elements in priority order
    pub fn into_sorted_vec(mut self) -> Vec<T> {
        let mut sorted = Vec::with_capacity(self.data.len());
        while let Some(item) = self.pop() {
            sorted.push(item);
        }
        sorted
    }

    /// Restores the heap property over the whole array
    fn rebuild(&mut self) {
        let len = self.data.len();
        if len < 2 {
            return;
        }
        for index in (0..=(len - 2) / 2).rev() {
            self.sift_down(index);
        }
    }

    /// Returns true if the element at `i` has priority over the element at `j`
    #[inline]
    fn precedes(&self, i: usize, j: usize) -> bool {
        self.cmp.precedes(&self.data[i], &self.data[j])
    }

    /// Move element at index up to maintain heap property
    fn sift_up(&mut self, mut index: usize) {
        while index > 0 {
            let parent = (index - 1) / 2;
            if self.precedes(index, parent) {
                self.data.swap(index, parent);
                index = parent;
            } else {
                break;
            }
        }
    }

    /// Move element at index down to maintain heap property
    fn sift_down(&mut self, mut index: usize) {
        let len = self.data.len();
        loop {
            let left = 2 * index + 1;
            let right = 2 * index + 2;
            let mut best = index;

            if left < len && self.precedes(left, best) {
                best = left;
            }
            if right < len && self.precedes(right, best) {
                best = right;
            }

            if best != index {
                self.data.swap(index, best);
                index = best;
            } else {
                break;
            }
        }
    }
}

impl<T, C: Comparator<T>> Extend<T> for Heap<T, C> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for item in iter {
            self.push(item);
        }
    }
}

impl<T: Ord> Default for Heap<T, MinFirst> {
    fn default() -> Self {
        Self::min()
    }
}

impl<T: Clone, C: Clone> Clone for Heap<T, C> {
    fn clone(&self) -> Self {
        Self {
            data: self.data.clone(),
            cmp: self.cmp.clone(),
        }
    }
}

impl<T: fmt::Debug, C> fmt::Debug for Heap<T, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Heap").field("data", &self.data).finish()
    }
}
