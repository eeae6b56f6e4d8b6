//! # Ordered ``{ String <-> T }`` Token Vocabulary

use compact_str::CompactString;

use crate::errors::{TCResult, TokencraftError};
use crate::types::{
    TCHashMap, TokenType, hash_map_with_capacity, token_from_index, token_to_index, token_to_u64,
};

/// An ordered, duplicate-free token vocabulary.
///
/// The position of an entry is its token id; ids are dense over `0..len()`.
/// The forward ``{ String -> T }`` map and the reverse ``{ T -> String }``
/// table are exact inverses of one another.
///
/// ## Style Hints
///
/// When there is no local ambiguity, instance names should prefer `vocab`.
#[derive(Debug, Clone, PartialEq)]
pub struct TokenVocab<T: TokenType> {
    /// Reverse table; the index is the token.
    tokens: Vec<CompactString>,

    /// Forward map.
    token_map: TCHashMap<CompactString, T>,
}

impl<T: TokenType> Default for TokenVocab<T> {
    fn default() -> Self {
        Self {
            tokens: Vec::new(),
            token_map: hash_map_with_capacity(0),
        }
    }
}

impl<T: TokenType> TokenVocab<T> {
    /// Build a vocabulary from token strings in id order.
    ///
    /// ## Arguments
    /// * `tokens` - the entries; the first gets id 0.
    ///
    /// ## Returns
    /// The vocabulary; or an error if an entry repeats, or if the
    /// vocabulary does not fit in `T`.
    pub fn from_tokens<I, S>(tokens: I) -> TCResult<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<CompactString>,
    {
        let tokens: Vec<CompactString> = tokens.into_iter().map(Into::into).collect();
        let size = tokens.len();

        let mut token_map = hash_map_with_capacity(size);
        for (idx, span) in tokens.iter().enumerate() {
            let token: T = token_from_index(idx, size)?;
            if let Some(prev) = token_map.insert(span.clone(), token) {
                return Err(TokencraftError::VocabConflict(format!(
                    "duplicate vocab entry {span:?} at ids {prev} and {token}"
                )));
            }
        }

        Ok(Self { tokens, token_map })
    }

    /// The number of entries.
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    /// Is the vocabulary empty?
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// The highest assigned token, if any.
    pub fn max_token(&self) -> Option<T> {
        match self.len() {
            0 => None,
            n => T::from_usize(n - 1),
        }
    }

    /// The entries, in id order.
    pub fn tokens(&self) -> &[CompactString] {
        &self.tokens
    }

    /// Iterate ``(token, span)`` pairs in id order.
    pub fn iter(&self) -> impl Iterator<Item = (T, &str)> + '_ {
        // Every index fits in T; checked in `from_tokens`.
        self.tokens
            .iter()
            .enumerate()
            .filter_map(|(idx, span)| T::from_usize(idx).map(|t| (t, span.as_str())))
    }

    /// Is `span` a vocabulary entry?
    pub fn contains(
        &self,
        span: &str,
    ) -> bool {
        self.token_map.contains_key(span)
    }

    /// Forward lookup.
    pub fn lookup_token(
        &self,
        span: &str,
    ) -> Option<T> {
        self.token_map.get(span).copied()
    }

    /// Reverse lookup.
    pub fn lookup_span(
        &self,
        token: T,
    ) -> Option<&str> {
        token_to_index(token)
            .and_then(|idx| self.tokens.get(idx))
            .map(CompactString::as_str)
    }

    /// Forward lookup of an encoded segment.
    ///
    /// ## Returns
    /// The token; or [`TokencraftError::UnknownSymbol`] naming the first
    /// character of `span` when it is not an entry.
    pub fn try_lookup_token(
        &self,
        span: &str,
    ) -> TCResult<T> {
        self.lookup_token(span).ok_or_else(|| TokencraftError::UnknownSymbol {
            symbol: span.chars().next().unwrap_or_default(),
        })
    }

    /// Decode tokens, appending to a target buffer.
    ///
    /// Stops at the first unassigned token, which is returned as
    /// [`TokencraftError::UnknownTokenId`]; the buffer may then hold a
    /// partial decode, which callers discard.
    pub fn try_decode_append(
        &self,
        tokens: &[T],
        buf: &mut String,
    ) -> TCResult<()> {
        for &token in tokens {
            let span = self
                .lookup_span(token)
                .ok_or_else(|| TokencraftError::UnknownTokenId {
                    token: token_to_u64(token),
                })?;
            buf.push_str(span);
        }
        Ok(())
    }
}
