//! Array-based union-find without balancing or path compression

use super::check_element;
use crate::error::Result;
use crate::traits::DisjointSet;

/// Union-find over `0..n` with plain parent pointers
///
/// `union` always hangs the root of `x` under the root of `y`, so an unlucky
/// sequence of unions builds a chain and `find` walks all of it. Prefer
/// [`UnionFind`](super::UnionFind) unless the simplicity matters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NaiveUnionFind {
    /// `parent[i] == i` marks a root
    parent: Vec<usize>,
    components: usize,
}

impl NaiveUnionFind {
    /// Creates `n` singleton sets `{0}, {1}, ..., {n - 1}`
    pub fn new(n: usize) -> Self {
        Self {
            parent: (0..n).collect(),
            components: n,
        }
    }

    /// Returns the size of the universe
    pub fn len(&self) -> usize {
        self.parent.len()
    }

    /// Returns true if the universe is empty
    pub fn is_empty(&self) -> bool {
        self.parent.is_empty()
    }

    /// Returns the number of disjoint sets
    pub fn components(&self) -> usize {
        self.components
    }

    /// Returns the direct parent of `x` (itself for a root)
    ///
    /// # Panics
    ///
    /// Panics if `x` is outside the universe.
    pub fn parent_of(&self, x: usize) -> usize {
        self.parent[x]
    }

    /// Returns the representative of the set containing `x`
    ///
    /// # Panics
    ///
    /// Panics if `x` is outside the universe; see [`try_find`](Self::try_find).
    pub fn find(&self, mut x: usize) -> usize {
        while self.parent[x] != x {
            x = self.parent[x];
        }
        x
    }

    /// Merges the sets containing `x` and `y`, returning false if they already were one
    ///
    /// # Panics
    ///
    /// Panics if `x` or `y` is outside the universe; see [`try_union`](Self::try_union).
    pub fn union(&mut self, x: usize, y: usize) -> bool {
        // the inherent `find` takes ids by value; the trait one by reference
        let root_x = NaiveUnionFind::find(self, x);
        let root_y = NaiveUnionFind::find(self, y);
        if root_x == root_y {
            return false;
        }
        self.parent[root_x] = root_y;
        self.components -= 1;
        true
    }

    /// Returns true if `x` and `y` are in the same set
    pub fn connected(&self, x: usize, y: usize) -> bool {
        self.find(x) == self.find(y)
    }

    /// Checked [`find`](Self::find)
    pub fn try_find(&self, x: usize) -> Result<usize> {
        check_element(x, self.len())?;
        Ok(self.find(x))
    }

    /// Checked [`union`](Self::union)
    pub fn try_union(&mut self, x: usize, y: usize) -> Result<bool> {
        check_element(x, self.len())?;
        check_element(y, self.len())?;
        Ok(self.union(x, y))
    }
}

impl DisjointSet<usize> for NaiveUnionFind {
    fn find(&mut self, x: &usize) -> usize {
        NaiveUnionFind::find(self, *x)
    }

    fn union(&mut self, x: &usize, y: &usize) -> bool {
        NaiveUnionFind::union(self, *x, *y)
    }

    fn set_count(&self) -> usize {
        self.components
    }
}
