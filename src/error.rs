//! Error type for the fallible operations in this crate
//!
//! Most operations signal "absent" or "already done" through `Option` and
//! `bool` returns. The variants here cover the few cases where a caller asked
//! for something that cannot be carried out.

use thiserror::Error;

/// Error type for structure operations
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// A fixed-universe union-find was addressed with an element it does not hold
    #[error("element {element} is outside the universe 0..{universe}")]
    ElementOutOfRange {
        /// The offending element id
        element: usize,
        /// Number of elements the structure was created with
        universe: usize,
    },
    /// The word to replace is not stored in the trie
    #[error("word {0:?} is not stored in the trie")]
    WordNotFound(String),
}

/// Convenience alias for results carrying [`Error`]
pub type Result<T> = std::result::Result<T, Error>;
