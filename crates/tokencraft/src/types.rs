//! # Common Types and Traits
use core::{
    fmt::{Debug, Display},
    hash::Hash,
};

use num_traits::{FromPrimitive, PrimInt, ToPrimitive, Unsigned};

use crate::errors::{TCResult, TokencraftError};

/// A type that can be used as a token id.
///
/// These are constrained to be unsigned primitive integers;
/// such that the max token in a vocabulary is less than `T::max()`.
pub trait TokenType:
    'static
    + PrimInt
    + FromPrimitive
    + ToPrimitive
    + Unsigned
    + Hash
    + Default
    + Debug
    + Display
    + Send
    + Sync
{
}

impl<T> TokenType for T where
    T: 'static
        + PrimInt
        + FromPrimitive
        + ToPrimitive
        + Unsigned
        + Hash
        + Default
        + Debug
        + Display
        + Send
        + Sync
{
}

/// Convert a vocabulary index to a token.
///
/// ## Arguments
/// * `index` - the position of the entry in the vocabulary.
/// * `size` - the vocab size, reported on overflow.
pub fn token_from_index<T: TokenType>(
    index: usize,
    size: usize,
) -> TCResult<T> {
    T::from_usize(index).ok_or(TokencraftError::VocabSizeOverflow { size })
}

/// Convert a token back to a vocabulary index.
///
/// Tokens which do not fit in `usize` have no index.
pub fn token_to_index<T: TokenType>(token: T) -> Option<usize> {
    token.to_usize()
}

/// Widen a token for error reporting.
pub fn token_to_u64<T: TokenType>(token: T) -> u64 {
    token.to_u64().unwrap_or(u64::MAX)
}

cfg_if::cfg_if! {
    if #[cfg(feature = "ahash")] {
        /// Type Alias for hash maps in this crate.
        pub type TCHashMap<K, V> = ahash::AHashMap<K, V>;

        /// Create a new hash map with the given capacity.
        pub fn hash_map_with_capacity<K, V>(capacity: usize) -> TCHashMap<K, V> {
            TCHashMap::with_capacity(capacity)
        }

        /// Type Alias for hash sets in this crate.
        pub type TCHashSet<V> = ahash::AHashSet<V>;

        /// Create a new empty hash set.
        pub fn hash_set_new<V>() -> TCHashSet<V> {
            TCHashSet::new()
        }

    } else if #[cfg(feature = "foldhash")] {
        /// Type Alias for hash maps in this crate.
        pub type TCHashMap<K, V> = foldhash::HashMap<K, V>;

        /// Create a new hash map with the given capacity.
        pub fn hash_map_with_capacity<K, V>(capacity: usize) -> TCHashMap<K, V> {
            foldhash::HashMapExt::with_capacity(capacity)
        }

        /// Type Alias for hash sets in this crate.
        pub type TCHashSet<V> = foldhash::HashSet<V>;

        /// Create a new empty hash set.
        pub fn hash_set_new<V>() -> TCHashSet<V> {
            foldhash::HashSetExt::new()
        }

    } else {
        /// Type Alias for hash maps in this crate.
        pub type TCHashMap<K, V> = std::collections::HashMap<K, V>;

        /// Create a new hash map with the given capacity.
        pub fn hash_map_with_capacity<K, V>(capacity: usize) -> TCHashMap<K, V> {
            TCHashMap::with_capacity(capacity)
        }

        /// Type Alias for hash sets in this crate.
        pub type TCHashSet<V> = std::collections::HashSet<V>;

        /// Create a new empty hash set.
        pub fn hash_set_new<V>() -> TCHashSet<V> {
            TCHashSet::new()
        }
    }
}
