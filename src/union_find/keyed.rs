//! Map-based union-find over arbitrary hashable keys

use crate::rank::{checked_increment, Rank};
use crate::traits::DisjointSet;
use rustc_hash::FxHashMap;
use smallvec::SmallVec;
use std::hash::Hash;

/// Parent pointer and rank of one registered element
#[derive(Debug, Clone, PartialEq, Eq)]
struct Entry<K> {
    parent: K,
    rank: Rank,
}

/// Union-find over any `Eq + Hash + Clone` key, populated on demand
///
/// There is no fixed universe: `find` and `union` register an unseen key as a
/// new singleton before doing anything else, so `find(&x)` on a fresh key
/// returns `x`. Uses the same path compression and union by rank as
/// [`UnionFind`](super::UnionFind), except that on a rank tie the root of `x`
/// goes under the root of `y`.
///
/// # Example
///
/// ```rust
/// use rust_core_structures::union_find::KeyedUnionFind;
///
/// let mut accounts = KeyedUnionFind::new();
/// accounts.union(&"john@mail.com", &"john00@mail.com");
/// accounts.union(&"johnsmith@mail.com", &"john00@mail.com");
/// accounts.add("mary@mail.com");
///
/// assert_eq!(accounts.len(), 4);
/// assert_eq!(accounts.set_count(), 2);
/// assert!(accounts.connected(&"john@mail.com", &"johnsmith@mail.com"));
/// ```
#[derive(Debug, Clone)]
pub struct KeyedUnionFind<K> {
    entries: FxHashMap<K, Entry<K>>,
    sets: usize,
}

impl<K: Eq + Hash + Clone> KeyedUnionFind<K> {
    /// Creates an empty union-find
    pub fn new() -> Self {
        Self {
            entries: FxHashMap::default(),
            sets: 0,
        }
    }

    /// Creates an empty union-find with room for `capacity` keys
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: FxHashMap::with_capacity_and_hasher(capacity, Default::default()),
            sets: 0,
        }
    }

    /// Registers `x` as a singleton set if it is not known yet
    ///
    /// Returns true if `x` was newly registered.
    pub fn add(&mut self, x: K) -> bool {
        if self.entries.contains_key(&x) {
            return false;
        }
        let entry = Entry {
            parent: x.clone(),
            rank: 0,
        };
        self.entries.insert(x, entry);
        self.sets += 1;
        true
    }

    /// Returns true if `x` has been registered
    pub fn contains(&self, x: &K) -> bool {
        self.entries.contains_key(x)
    }

    /// Returns the number of registered keys
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if no key has been registered
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns the number of disjoint sets among the registered keys
    pub fn set_count(&self) -> usize {
        self.sets
    }

    /// Returns the rank stored for `x`, or `None` if `x` is unknown
    pub fn rank_of(&self, x: &K) -> Option<Rank> {
        self.entries.get(x).map(|entry| entry.rank)
    }

    /// Returns the representative of the set containing `x`, registering `x` if needed
    pub fn find(&mut self, x: &K) -> K {
        if !self.contains(x) {
            self.add(x.clone());
            return x.clone();
        }

        let mut path: SmallVec<[K; 8]> = SmallVec::new();
        let mut current = x.clone();
        loop {
            match self.entries.get(&current) {
                Some(entry) if entry.parent != current => {
                    let next = entry.parent.clone();
                    path.push(current);
                    current = next;
                }
                _ => break,
            }
        }

        for node in path {
            if let Some(entry) = self.entries.get_mut(&node) {
                entry.parent = current.clone();
            }
        }
        current
    }

    /// Merges the sets containing `x` and `y`, returning false if they already were one
    ///
    /// Unknown keys are registered first, so `union` on two fresh keys
    /// creates two sets and immediately merges them.
    pub fn union(&mut self, x: &K, y: &K) -> bool {
        let root_x = self.find(x);
        let root_y = self.find(y);
        if root_x == root_y {
            return false;
        }

        let rank_x = self.rank_of(&root_x).unwrap_or_default();
        let rank_y = self.rank_of(&root_y).unwrap_or_default();
        if rank_x > rank_y {
            self.set_parent(&root_y, root_x);
        } else {
            self.set_parent(&root_x, root_y.clone());
            if rank_x == rank_y {
                if let Some(entry) = self.entries.get_mut(&root_y) {
                    entry.rank = checked_increment(entry.rank);
                }
            }
        }
        self.sets -= 1;
        true
    }

    /// Returns true if `x` and `y` are in the same set
    pub fn connected(&mut self, x: &K, y: &K) -> bool {
        self.find(x) == self.find(y)
    }

    /// Returns every set as a list of its keys
    ///
    /// Neither the order of the groups nor the order of keys within a group
    /// is specified.
    pub fn groups(&mut self) -> Vec<Vec<K>> {
        let keys: Vec<K> = self.entries.keys().cloned().collect();
        let mut groups: FxHashMap<K, Vec<K>> = FxHashMap::default();
        for key in keys {
            let root = self.find(&key);
            groups.entry(root).or_default().push(key);
        }
        groups.into_values().collect()
    }

    fn set_parent(&mut self, child: &K, parent: K) {
        if let Some(entry) = self.entries.get_mut(child) {
            entry.parent = parent;
        }
    }
}

impl<K: Eq + Hash + Clone> Default for KeyedUnionFind<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Eq + Hash + Clone> DisjointSet<K> for KeyedUnionFind<K> {
    fn find(&mut self, x: &K) -> K {
        KeyedUnionFind::find(self, x)
    }

    fn union(&mut self, x: &K, y: &K) -> bool {
        KeyedUnionFind::union(self, x, y)
    }

    fn set_count(&self) -> usize {
        self.sets
    }
}
