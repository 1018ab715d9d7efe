//! Union-Find (disjoint set union)
//!
//! A union-find tracks a partition of elements into disjoint sets. Each set is
//! a tree of parent pointers whose root is the set's representative:
//! `find(x)` walks to the root, `union(x, y)` links one root under the other.
//!
//! Three implementations share the [`DisjointSet`](crate::DisjointSet) contract:
//!
//! - [`NaiveUnionFind`]: fixed universe `0..n`, no balancing. Trees can
//!   degenerate into chains, so `find` is O(n) in the worst case.
//! - [`UnionFind`]: fixed universe `0..n` with path compression and union by
//!   rank, O(α(n)) amortized per operation.
//! - [`KeyedUnionFind`]: the same optimized algorithm over any hashable key,
//!   with elements registered lazily the first time they are seen. Useful when
//!   the universe is sparse or not known up front (e-mail addresses,
//!   identifiers) and saves the id/key translation layer.
//!
//! Given the same sequence of unions, all three produce the same partition.
//! They may pick different representatives.
//!
//! # Time Complexity
//!
//! | Operation | Naive | Optimized     |
//! |-----------|-------|---------------|
//! | `find`    | O(n)  | O(α(n)) amort.|
//! | `union`   | O(n)  | O(α(n)) amort.|
//!
//! # Example
//!
//! ```rust
//! use rust_core_structures::union_find::UnionFind;
//!
//! let mut sets = UnionFind::new(5);
//! for (a, b) in [(0, 1), (1, 2), (3, 4)] {
//!     sets.union(a, b);
//! }
//! assert_eq!(sets.components(), 2);
//!
//! // (2, 3) joins the two components
//! assert!(sets.union(2, 3));
//! assert_eq!(sets.components(), 1);
//!
//! // any further edge is redundant
//! assert!(!sets.union(0, 4));
//! ```

mod keyed;
mod naive;
mod ranked;

pub use keyed::KeyedUnionFind;
pub use naive::NaiveUnionFind;
pub use ranked::UnionFind;

use crate::error::{Error, Result};

/// Rejects elements outside a fixed universe of `universe` elements
fn check_element(element: usize, universe: usize) -> Result<()> {
    if element < universe {
        Ok(())
    } else {
        Err(Error::ElementOutOfRange { element, universe })
    }
}
