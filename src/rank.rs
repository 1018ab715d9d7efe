//! Rank type and utilities for union-by-rank.
//!
//! # Why u8?
//!
//! In a union-find, the "rank" of a root is an upper bound on the height of
//! its tree. Union by rank only grows a rank when two trees of equal rank are
//! merged, so a root of rank `r` always has at least `2^r` members.
//!
//! For practical purposes:
//! - 2⁶⁴ elements → max rank 64
//! - 2²⁵⁵ elements → max rank 255
//!
//! Since `u8` can represent values 0-255, it covers any universe that fits in
//! memory. Using `u8` instead of `usize` shrinks the rank table of a
//! million-element union-find from 8 MB to 1 MB.
//!
//! # Runtime Checks
//!
//! The [`checked_increment`] function provides a safe way to increase rank,
//! panicking if the theoretical limit is exceeded (which would indicate a bug,
//! since it's mathematically impossible with valid union operations).

/// Type alias for a root's rank.
pub type Rank = u8;

/// Maximum valid rank value.
pub const MAX_RANK: Rank = u8::MAX;

/// Safely increment a rank value, panicking on overflow.
///
/// # Panics
///
/// Panics if `rank == MAX_RANK`. This cannot happen with union by rank, since
/// it would require a set with more than 2²⁵⁵ members.
///
/// # Example
///
/// ```rust
/// use rust_core_structures::rank::{checked_increment, Rank};
///
/// let rank: Rank = 5;
/// assert_eq!(checked_increment(rank), 6);
/// ```
#[inline]
pub fn checked_increment(rank: Rank) -> Rank {
    rank.checked_add(1).expect(
        "rank overflow: union by rank keeps rank below log₂(n) \
         and u8::MAX (255) supports sets with up to 2²⁵⁵ members",
    )
}
