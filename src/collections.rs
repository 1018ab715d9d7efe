//! Simple containers: FIFO queue, LIFO stack and hash set
//!
//! These are thin wrappers around the standard collections with a small,
//! explicit API. The tree traversals in this crate use [`Stack`] and [`Queue`]
//! instead of recursion, and graph code typically combines all three with a
//! [`Heap`](crate::heap::Heap).
//!
//! # Example
//!
//! ```rust
//! use rust_core_structures::collections::{Queue, Set, Stack};
//!
//! let mut queue = Queue::new();
//! queue.enqueue(1);
//! queue.enqueue(2);
//! assert_eq!(queue.dequeue(), Some(1));
//!
//! let mut stack = Stack::new();
//! stack.push('a');
//! stack.push('b');
//! assert_eq!(stack.pop(), Some('b'));
//!
//! let seen: Set<&str> = ["A", "B"].into_iter().collect();
//! assert!(seen.contains(&"A"));
//! ```

use rustc_hash::FxHashSet;
use std::collections::VecDeque;
use std::hash::Hash;

/// First-in, first-out queue
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Queue<T> {
    items: VecDeque<T>,
}

impl<T> Queue<T> {
    /// Creates a new empty queue
    pub fn new() -> Self {
        Self {
            items: VecDeque::new(),
        }
    }

    /// Adds an element at the back
    pub fn enqueue(&mut self, item: T) {
        self.items.push_back(item);
    }

    /// Removes and returns the element at the front, or `None` if empty
    pub fn dequeue(&mut self) -> Option<T> {
        self.items.pop_front()
    }

    /// Returns the element at the front without removing it
    pub fn peek(&self) -> Option<&T> {
        self.items.front()
    }

    /// Returns the number of queued elements
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns true if the queue is empty
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl<T> Default for Queue<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Extend<T> for Queue<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.items.extend(iter);
    }
}

/// Last-in, first-out stack
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Stack<T> {
    items: Vec<T>,
}

impl<T> Stack<T> {
    /// Creates a new empty stack
    pub fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// Pushes an element on top
    pub fn push(&mut self, item: T) {
        self.items.push(item);
    }

    /// Removes and returns the top element, or `None` if empty
    pub fn pop(&mut self) -> Option<T> {
        self.items.pop()
    }

    /// Returns the top element without removing it
    pub fn peek(&self) -> Option<&T> {
        self.items.last()
    }

    /// Returns the number of stacked elements
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns true if the stack is empty
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl<T> Default for Stack<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Extend<T> for Stack<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.items.extend(iter);
    }
}

/// Unordered set of distinct elements
///
/// Iteration order is unspecified.
#[derive(Debug, Clone)]
pub struct Set<T: Eq + Hash> {
    items: FxHashSet<T>,
}

impl<T: Eq + Hash> Set<T> {
    /// Creates a new empty set
    pub fn new() -> Self {
        Self {
            items: FxHashSet::default(),
        }
    }

    /// Adds an element, returning false if it was already present
    pub fn add(&mut self, item: T) -> bool {
        self.items.insert(item)
    }

    /// Returns true if the element is present
    pub fn contains(&self, item: &T) -> bool {
        self.items.contains(item)
    }

    /// Removes an element, returning false if it was not present
    pub fn remove(&mut self, item: &T) -> bool {
        self.items.remove(item)
    }

    /// Returns the number of elements
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns true if the set is empty
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Iterates over the elements in unspecified order
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.items.iter()
    }
}

impl<T: Eq + Hash + Clone> Set<T> {
    /// Returns the elements as a vector, in unspecified order
    pub fn to_vec(&self) -> Vec<T> {
        self.items.iter().cloned().collect()
    }

    /// Elements present in either set
    pub fn union(&self, other: &Self) -> Self {
        self.items.union(&other.items).cloned().collect()
    }

    /// Elements present in both sets
    pub fn intersection(&self, other: &Self) -> Self {
        self.items.intersection(&other.items).cloned().collect()
    }

    /// Elements present in `self` but not in `other`
    pub fn difference(&self, other: &Self) -> Self {
        self.items.difference(&other.items).cloned().collect()
    }

    /// Elements present in every given set
    ///
    /// Returns `None` when no sets are given, since the intersection of zero
    /// sets has no finite answer.
    pub fn intersection_all<'a, I>(sets: I) -> Option<Self>
    where
        I: IntoIterator<Item = &'a Self>,
        T: 'a,
    {
        let mut sets = sets.into_iter();
        let first = sets.next()?.clone();
        Some(sets.fold(first, |acc, set| acc.intersection(set)))
    }
}

impl<T: Eq + Hash> Default for Set<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Eq + Hash> PartialEq for Set<T> {
    fn eq(&self, other: &Self) -> bool {
        self.items == other.items
    }
}

impl<T: Eq + Hash> Eq for Set<T> {}

impl<T: Eq + Hash> FromIterator<T> for Set<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            items: iter.into_iter().collect(),
        }
    }
}

impl<T: Eq + Hash> Extend<T> for Set<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.items.extend(iter);
    }
}
