//! Array-based union-find with path compression and union by rank

use super::check_element;
use crate::error::Result;
use crate::rank::{checked_increment, Rank};
use crate::traits::DisjointSet;

/// Union-find over `0..n` with path compression and union by rank
///
/// `rank` is an upper bound on tree height and only means something at a root.
/// The shorter tree always goes under the taller one, so a root of rank `r`
/// has at least `2^r` descendants and ranks never exceed `log2 n`.
///
/// # Example
///
/// ```rust
/// use rust_core_structures::union_find::UnionFind;
///
/// let mut sets = UnionFind::new(4);
/// assert!(sets.union(0, 1));
/// assert!(sets.union(2, 3));
/// assert!(!sets.connected(1, 2));
/// assert!(sets.union(1, 3));
/// assert!(sets.connected(0, 2));
/// assert_eq!(sets.components(), 1);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnionFind {
    parent: Vec<usize>,
    rank: Vec<Rank>,
    components: usize,
}

impl UnionFind {
    /// Creates `n` singleton sets, each of rank 0
    pub fn new(n: usize) -> Self {
        Self {
            parent: (0..n).collect(),
            rank: vec![0; n],
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

    /// Returns the rank stored for `x`
    ///
    /// # Panics
    ///
    /// Panics if `x` is outside the universe.
    pub fn rank_of(&self, x: usize) -> Rank {
        self.rank[x]
    }

    /// Returns the representative of the set containing `x`
    ///
    /// Every node on the path from `x` to the root is re-pointed directly at
    /// the root. Runs in two passes so long chains don't recurse.
    ///
    /// # Panics
    ///
    /// Panics if `x` is outside the universe; see [`try_find`](Self::try_find).
    pub fn find(&mut self, x: usize) -> usize {
        let mut root = x;
        while self.parent[root] != root {
            root = self.parent[root];
        }

        let mut current = x;
        while current != root {
            let next = self.parent[current];
            self.parent[current] = root;
            current = next;
        }
        root
    }

    /// Merges the sets containing `x` and `y`, returning false if they already were one
    ///
    /// The lower-ranked root goes under the higher-ranked one. On a tie the
    /// root of `y` goes under the root of `x` and `x`'s rank grows by one.
    ///
    /// # Panics
    ///
    /// Panics if `x` or `y` is outside the universe; see [`try_union`](Self::try_union).
    pub fn union(&mut self, x: usize, y: usize) -> bool {
        let root_x = self.find(x);
        let root_y = self.find(y);
        if root_x == root_y {
            return false;
        }

        match self.rank[root_x].cmp(&self.rank[root_y]) {
            std::cmp::Ordering::Less => self.parent[root_x] = root_y,
            std::cmp::Ordering::Greater => self.parent[root_y] = root_x,
            std::cmp::Ordering::Equal => {
                self.parent[root_y] = root_x;
                self.rank[root_x] = checked_increment(self.rank[root_x]);
            }
        }
        self.components -= 1;
        true
    }

    /// Returns true if `x` and `y` are in the same set
    pub fn connected(&mut self, x: usize, y: usize) -> bool {
        self.find(x) == self.find(y)
    }

    /// Checked [`find`](Self::find)
    pub fn try_find(&mut self, x: usize) -> Result<usize> {
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

impl DisjointSet<usize> for UnionFind {
    fn find(&mut self, x: &usize) -> usize {
        UnionFind::find(self, *x)
    }

    fn union(&mut self, x: &usize, y: &usize) -> bool {
        UnionFind::union(self, *x, *y)
    }

    fn set_count(&self) -> usize {
        self.components
    }
}
