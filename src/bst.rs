//! Binary search tree
//!
//! An unbalanced binary search tree over any `Ord` type. For every node, all
//! values in its left subtree are smaller and all values in its right subtree
//! are larger. Duplicates are ignored on insert.
//!
//! The tree is never rebalanced, so its shape depends on insertion order:
//! inserting already-sorted values produces a chain and every operation
//! degrades to O(n). Use a balanced tree (AVL, red-black, B-tree) when that
//! matters; this one trades the guarantee for simplicity.
//!
//! All operations are iterative, including `Drop`, so a degenerate chain of
//! any length is handled without deep recursion.
//!
//! # Time Complexity
//!
//! | Operation  | Average  | Worst |
//! |------------|----------|-------|
//! | `insert`   | O(log n) | O(n)  |
//! | `contains` | O(log n) | O(n)  |
//! | `delete`   | O(log n) | O(n)  |
//! | `in_order` | O(n)     | O(n)  |
//!
//! # Example
//!
//! ```rust
//! use rust_core_structures::bst::BinarySearchTree;
//!
//! let mut tree: BinarySearchTree<_> = ["David", "Alice", "Maggie", "Zack", "John", "Manning"]
//!     .into_iter()
//!     .collect();
//!
//! assert_eq!(
//!     tree.in_order(),
//!     vec![&"Alice", &"David", &"John", &"Maggie", &"Manning", &"Zack"]
//! );
//!
//! assert!(tree.delete(&"Maggie"));
//! assert!(!tree.contains(&"Maggie"));
//! assert_eq!(tree.in_order(), vec![&"Alice", &"David", &"John", &"Manning", &"Zack"]);
//! ```

use crate::collections::{Queue, Stack};
use std::cmp::Ordering;
use std::fmt;

/// Owned, optional child pointer
pub type Link<T> = Option<Box<Node<T>>>;

/// A node of a binary search tree
///
/// Fields are public so callers can walk the tree directly (range sums,
/// lowest common ancestor, ...) or hand-build trees to validate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node<T> {
    pub value: T,
    pub left: Link<T>,
    pub right: Link<T>,
}

impl<T> Node<T> {
    /// Creates a leaf
    pub fn new(value: T) -> Self {
        Self {
            value,
            left: None,
            right: None,
        }
    }

    /// Sets the left child, builder style
    pub fn with_left(mut self, left: Node<T>) -> Self {
        self.left = Some(Box::new(left));
        self
    }

    /// Sets the right child, builder style
    pub fn with_right(mut self, right: Node<T>) -> Self {
        self.right = Some(Box::new(right));
        self
    }

    /// Returns true if the node has no children
    pub fn is_leaf(&self) -> bool {
        self.left.is_none() && self.right.is_none()
    }
}

/// An unbalanced binary search tree
pub struct BinarySearchTree<T> {
    root: Link<T>,
    len: usize,
}

impl<T> BinarySearchTree<T> {
    /// Creates an empty tree
    pub fn new() -> Self {
        Self { root: None, len: 0 }
    }

    /// Wraps a hand-built tree
    ///
    /// The ordering of the given nodes is not checked; see [`is_ordered`](Self::is_ordered).
    pub fn from_root(root: Box<Node<T>>) -> Self {
        let len = count_nodes(&root);
        Self {
            root: Some(root),
            len,
        }
    }

    /// Returns the root node, if any
    pub fn root(&self) -> Option<&Node<T>> {
        self.root.as_deref()
    }

    /// Returns the root node for in-place edits
    ///
    /// Edits made through this reference bypass the length counter and the
    /// ordering invariant. Call [`recount`](Self::recount) after attaching or
    /// detaching subtrees, and [`is_ordered`](Self::is_ordered) to validate.
    pub fn root_mut(&mut self) -> Option<&mut Node<T>> {
        self.root.as_deref_mut()
    }

    /// Recomputes the stored length after edits made through [`root_mut`](Self::root_mut)
    pub fn recount(&mut self) {
        self.len = self.root.as_deref().map_or(0, count_nodes);
    }

    /// Detaches and returns the root, leaving the tree empty
    pub fn into_root(mut self) -> Link<T> {
        self.len = 0;
        self.root.take()
    }

    /// Returns the number of stored values
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns true if the tree is empty
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Iterates over the values in ascending order
    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(self.root.as_deref())
    }

    /// Returns all values in ascending order
    pub fn in_order(&self) -> Vec<&T> {
        self.iter().collect()
    }

    /// Returns all values in pre-order (node, left subtree, right subtree)
    pub fn pre_order(&self) -> Vec<&T> {
        let mut result = Vec::with_capacity(self.len);
        let mut stack = Stack::new();
        stack.extend(self.root.as_deref());
        while let Some(node) = stack.pop() {
            result.push(&node.value);
            // right first so the left subtree is visited first
            stack.extend(node.right.as_deref());
            stack.extend(node.left.as_deref());
        }
        result
    }

    /// Returns all values level by level, left to right
    pub fn level_order(&self) -> Vec<&T> {
        let mut result = Vec::with_capacity(self.len);
        let mut queue = Queue::new();
        queue.extend(self.root.as_deref());
        while let Some(node) = queue.dequeue() {
            result.push(&node.value);
            queue.extend(node.left.as_deref());
            queue.extend(node.right.as_deref());
        }
        result
    }

    /// Returns the number of levels (0 for an empty tree)
    pub fn height(&self) -> usize {
        let mut height = 0;
        let mut level = Queue::new();
        level.extend(self.root.as_deref());
        while !level.is_empty() {
            height += 1;
            let mut next = Queue::new();
            while let Some(node) = level.dequeue() {
                next.extend(node.left.as_deref());
                next.extend(node.right.as_deref());
            }
            level = next;
        }
        height
    }

    /// Returns the smallest value
    pub fn min(&self) -> Option<&T> {
        let mut node = self.root.as_deref()?;
        while let Some(left) = node.left.as_deref() {
            node = left;
        }
        Some(&node.value)
    }

    /// Returns the largest value
    pub fn max(&self) -> Option<&T> {
        let mut node = self.root.as_deref()?;
        while let Some(right) = node.right.as_deref() {
            node = right;
        }
        Some(&node.value)
    }

    /// Removes every value
    pub fn clear(&mut self) {
        dismantle(self.root.take());
        self.len = 0;
    }
}

impl<T: Ord> BinarySearchTree<T> {
    /// Builds a tree by inserting `values` in order
    ///
    /// The insertion order determines the shape; values are not sorted first.
    pub fn from_slice(values: &[T]) -> Self
    where
        T: Clone,
    {
        values.iter().cloned().collect()
    }

    /// Inserts a value, returning false if it was already present
    pub fn insert(&mut self, value: T) -> bool {
        let mut slot = &mut self.root;
        while let Some(ordering) = slot.as_deref().map(|node| value.cmp(&node.value)) {
            let Some(node) = slot else {
                return false;
            };
            slot = match ordering {
                Ordering::Less => &mut node.left,
                Ordering::Greater => &mut node.right,
                Ordering::Equal => return false,
            };
        }
        *slot = Some(Box::new(Node::new(value)));
        self.len += 1;
        true
    }

    /// Returns true if the value is stored in the tree
    pub fn contains(&self, value: &T) -> bool {
        let mut current = self.root.as_deref();
        while let Some(node) = current {
            if *value < node.value {
                current = node.left.as_deref();
            } else if *value > node.value {
                current = node.right.as_deref();
            } else {
                return true;
            }
        }
        false
    }

    /// Removes a value, returning false if it was not present
    ///
    /// A leaf is simply unlinked. A node with one child is replaced by that
    /// child. A node with two children takes over the value of its in-order
    /// successor (the minimum of its right subtree), and the successor's node
    /// is unlinked from the right subtree.
    pub fn delete(&mut self, value: &T) -> bool {
        let mut slot = &mut self.root;
        loop {
            // the direction is read through a shared borrow so `slot` stays
            // usable once the loop stops on the matching node
            let ordering = match slot.as_deref() {
                Some(node) => value.cmp(&node.value),
                None => return false,
            };
            if ordering == Ordering::Equal {
                break;
            }
            let Some(node) = slot else {
                return false;
            };
            slot = if ordering == Ordering::Less {
                &mut node.left
            } else {
                &mut node.right
            };
        }

        let Some(mut node) = slot.take() else {
            return false;
        };
        *slot = match (node.left.take(), node.right.take()) {
            (None, None) => None,
            (Some(child), None) | (None, Some(child)) => Some(child),
            (Some(left), Some(right)) => {
                node.left = Some(left);
                node.right = Some(right);
                if let Some(successor) = detach_min(&mut node.right) {
                    node.value = successor;
                }
                Some(node)
            }
        };
        self.len -= 1;
        true
    }

    /// Returns true if the values are strictly increasing in order
    ///
    /// Always true for trees built through `insert`/`delete`; useful for
    /// trees wrapped with [`from_root`](Self::from_root).
    pub fn is_ordered(&self) -> bool {
        let mut values = self.iter();
        let Some(mut previous) = values.next() else {
            return true;
        };
        for value in values {
            if previous >= value {
                return false;
            }
            previous = value;
        }
        true
    }
}

/// Unlinks the minimum node of the subtree in `slot`, returning its value
///
/// The minimum node has no left child, so its right subtree takes its place.
fn detach_min<T>(slot: &mut Link<T>) -> Option<T> {
    let mut slot = slot;
    while slot.as_deref().is_some_and(|node| node.left.is_some()) {
        let Some(node) = slot else {
            return None;
        };
        slot = &mut node.left;
    }
    let min = slot.take()?;
    let Node { value, right, .. } = *min;
    *slot = right;
    Some(value)
}

/// Counts the nodes of a subtree without recursing
fn count_nodes<T>(root: &Node<T>) -> usize {
    let mut count = 0;
    let mut stack = Stack::new();
    stack.push(root);
    while let Some(node) = stack.pop() {
        count += 1;
        stack.extend(node.left.as_deref());
        stack.extend(node.right.as_deref());
    }
    count
}

/// Frees a subtree without recursing
fn dismantle<T>(link: Link<T>) {
    let mut stack = Stack::new();
    stack.extend(link);
    while let Some(mut node) = stack.pop() {
        stack.extend(node.left.take());
        stack.extend(node.right.take());
    }
}

impl<T> Drop for BinarySearchTree<T> {
    fn drop(&mut self) {
        dismantle(self.root.take());
    }
}

impl<T> Default for BinarySearchTree<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone> Clone for BinarySearchTree<T> {
    fn clone(&self) -> Self {
        // Rebuild through pre-order so the clone has the same shape without recursion
        let mut clone = Self::new();
        let mut pending: Stack<(&Node<T>, &mut Link<T>)> = Stack::new();
        if let Some(root) = self.root.as_deref() {
            pending.push((root, &mut clone.root));
        }
        while let Some((source, slot)) = pending.pop() {
            let target = slot.insert(Box::new(Node::new(source.value.clone())));
            let Node { left, right, .. } = &mut **target;
            if let Some(child) = source.left.as_deref() {
                pending.push((child, left));
            }
            if let Some(child) = source.right.as_deref() {
                pending.push((child, right));
            }
        }
        clone.len = self.len;
        clone
    }
}

impl<T: fmt::Debug> fmt::Debug for BinarySearchTree<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BinarySearchTree")
            .field("len", &self.len)
            .field("values", &self.in_order())
            .finish()
    }
}

/// Renders the tree in pre-order, one value per line, indented two spaces per level
///
/// ```text
/// David
///   Alice
///   Maggie
///     John
///     Zack
///       Manning
/// ```
impl<T: fmt::Display> fmt::Display for BinarySearchTree<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut stack = Stack::new();
        if let Some(root) = self.root.as_deref() {
            stack.push((root, 0usize));
        }
        while let Some((node, depth)) = stack.pop() {
            writeln!(f, "{:indent$}{}", "", node.value, indent = depth * 2)?;
            if let Some(right) = node.right.as_deref() {
                stack.push((right, depth + 1));
            }
            if let Some(left) = node.left.as_deref() {
                stack.push((left, depth + 1));
            }
        }
        Ok(())
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
        for value in iter {
            self.insert(value);
        }
    }
}

impl<'a, T> IntoIterator for &'a BinarySearchTree<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// In-order iterator over a [`BinarySearchTree`]
pub struct Iter<'a, T> {
    stack: Stack<&'a Node<T>>,
}

impl<'a, T> Iter<'a, T> {
    fn new(root: Option<&'a Node<T>>) -> Self {
        let mut iter = Self {
            stack: Stack::new(),
        };
        iter.push_left_spine(root);
        iter
    }

    fn push_left_spine(&mut self, mut node: Option<&'a Node<T>>) {
        while let Some(current) = node {
            self.stack.push(current);
            node = current.left.as_deref();
        }
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.push_left_spine(node.right.as_deref());
        Some(&node.value)
    }
}
