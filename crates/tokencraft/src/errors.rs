//! # Error Types

use compact_str::CompactString;

/// Errors from tokencraft operations.
#[derive(Debug, thiserror::Error)]
pub enum TokencraftError {
    /// A character could not be mapped to a token during encoding.
    #[error("unknown symbol: {symbol:?}")]
    UnknownSymbol {
        /// The offending character.
        symbol: char,
    },

    /// A token id has no vocabulary entry.
    #[error("unknown token id: {token}")]
    UnknownTokenId {
        /// The offending id.
        token: u64,
    },

    /// Vocab size exceeds the capacity of the target token type.
    #[error("vocab size ({size}) exceeds token type capacity")]
    VocabSizeOverflow {
        /// The vocab size that exceeded the capacity.
        size: usize,
    },

    /// A vocabulary entry is not a single character where one is required.
    #[error("vocab entry {entry:?} is not a single character")]
    MultiCharEntry {
        /// The offending entry.
        entry: CompactString,
    },

    /// Vocabulary data is inconsistent.
    #[error("{0}")]
    VocabConflict(String),

    /// I/O error.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// Parse error (base64, integer, etc.)
    #[error("parse error: {0}")]
    Parse(String),
}

/// Result type for tokencraft operations.
pub type TCResult<T> = core::result::Result<T, TokencraftError>;
