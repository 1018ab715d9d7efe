//! Common traits shared by the structures in this crate
//!
//! This module provides the two seams the rest of the crate is built around:
//!
//! - [`Comparator`]: the ordering strategy injected into a [`Heap`](crate::heap::Heap),
//!   selecting min-heap, max-heap or any custom priority without separate heap types
//! - [`DisjointSet`]: the external contract shared by every union-find variant, so
//!   callers (and tests) can be written once against any of them

/// Ordering strategy for a heap
///
/// `precedes(a, b)` returns true when `a` should leave the heap before `b`.
/// It must behave like a strict "less than": irreflexive and transitive.
///
/// Any closure `Fn(&T, &T) -> bool` is a comparator, so the usual way to build
/// a heap is to pass a closure directly:
///
/// ```rust
/// use rust_core_structures::heap::Heap;
///
/// #[derive(Debug, PartialEq)]
/// struct Item {
///     node: &'static str,
///     distance: u32,
/// }
///
/// let mut heap = Heap::new(|a: &Item, b: &Item| a.distance < b.distance);
/// heap.push(Item { node: "B", distance: 4 });
/// heap.push(Item { node: "A", distance: 0 });
/// assert_eq!(heap.pop().map(|item| item.node), Some("A"));
/// ```
pub trait Comparator<T> {
    /// Returns true if `a` has strictly higher priority than `b`
    fn precedes(&self, a: &T, b: &T) -> bool;
}

impl<T, F> Comparator<T> for F
where
    F: Fn(&T, &T) -> bool,
{
    #[inline]
    fn precedes(&self, a: &T, b: &T) -> bool {
        self(a, b)
    }
}

/// Smallest element first (`a < b`)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MinFirst;

impl<T: Ord> Comparator<T> for MinFirst {
    #[inline]
    fn precedes(&self, a: &T, b: &T) -> bool {
        a < b
    }
}

/// Largest element first (`a > b`)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MaxFirst;

impl<T: Ord> Comparator<T> for MaxFirst {
    #[inline]
    fn precedes(&self, a: &T, b: &T) -> bool {
        a > b
    }
}

/// Partition of elements into disjoint sets
///
/// Every union-find in this crate implements this trait. Implementations may
/// differ in which element they pick as representative, but given the same
/// sequence of `union` calls they always produce the same partition.
///
/// # Example
///
/// ```rust
/// use rust_core_structures::DisjointSet;
/// use rust_core_structures::union_find::{KeyedUnionFind, UnionFind};
///
/// fn redundant_edges<D: DisjointSet<usize>>(sets: &mut D, edges: &[(usize, usize)]) -> usize {
///     edges.iter().filter(|(a, b)| !sets.union(a, b)).count()
/// }
///
/// let edges = [(0, 1), (1, 2), (2, 0)];
/// assert_eq!(redundant_edges(&mut UnionFind::new(3), &edges), 1);
/// assert_eq!(redundant_edges(&mut KeyedUnionFind::new(), &edges), 1);
/// ```
pub trait DisjointSet<K> {
    /// Returns the representative of the set containing `x`
    ///
    /// Calling `find` twice without an intervening `union` returns the same
    /// value. Implementations are allowed to restructure internally
    /// (path compression), hence `&mut self`.
    fn find(&mut self, x: &K) -> K;

    /// Merges the sets containing `x` and `y`
    ///
    /// Returns `false` if they were already in the same set (nothing changed;
    /// for graph callers this means the edge closes a cycle), `true` if two
    /// sets were merged.
    fn union(&mut self, x: &K, y: &K) -> bool;

    /// Returns the number of disjoint sets among the known elements
    fn set_count(&self) -> usize;

    /// Returns true if `x` and `y` are in the same set
    fn connected(&mut self, x: &K, y: &K) -> bool
    where
        K: PartialEq,
    {
        self.find(x) == self.find(y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bundled_comparators() {
        assert!(MinFirst.precedes(&1, &2));
        assert!(!MinFirst.precedes(&2, &2));
        assert!(MaxFirst.precedes(&"b", &"a"));
        assert!(!MaxFirst.precedes(&"a", &"a"));
    }

    #[test]
    fn test_closure_is_comparator() {
        let by_len = |a: &String, b: &String| a.len() < b.len();
        assert!(by_len.precedes(&"ab".to_string(), &"abc".to_string()));
        assert!(!by_len.precedes(&"abc".to_string(), &"ab".to_string()));
    }
}
