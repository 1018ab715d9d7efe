//! Classic Data Structures for Rust
//!
//! This crate provides a small toolkit of generic container and graph-support
//! structures, each usable on its own:
//!
//! # Features
//!
//! - **Heap**: array-backed binary heap ordered by an injected comparator; O(log n) push and pop,
//!   O(n) heapify
//! - **Binary Search Tree**: unbalanced ordered tree with three-case deletion and iterative traversals
//! - **Trie**: character-keyed prefix tree with per-node word counts, pruning deletion,
//!   autocomplete and wildcard matching
//! - **Union-Find**: naive and rank/path-compressed array variants plus a lazily populated
//!   map-based variant over any hashable key
//! - **Queue / Stack / Set**: thin FIFO, LIFO and hash-set wrappers
//!
//! None of the structures are thread-safe. Wrap an instance in a mutex if it has to be
//! shared between threads.
//!
//! # Example
//!
//! ```rust
//! use rust_core_structures::heap::Heap;
//! use rust_core_structures::trie::Trie;
//! use rust_core_structures::union_find::UnionFind;
//!
//! let mut heap = Heap::new(|a: &i32, b: &i32| a > b);
//! heap.push(3);
//! heap.push(7);
//! assert_eq!(heap.pop(), Some(7));
//!
//! let trie = Trie::from_words(["cat", "car", "cart"]);
//! assert_eq!(trie.prefix_count("car"), 2);
//!
//! let mut sets = UnionFind::new(4);
//! assert!(sets.union(0, 1));
//! assert!(!sets.union(1, 0));
//! assert_eq!(sets.components(), 3);
//! ```

pub mod bst;
pub mod collections;
pub mod error;
pub mod heap;
pub mod rank;
pub mod traits;
pub mod trie;
pub mod union_find;

// Re-export the main traits and error type for convenience
pub use error::{Error, Result};
pub use traits::{Comparator, DisjointSet, MaxFirst, MinFirst};
