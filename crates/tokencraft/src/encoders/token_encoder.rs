//! # Token Encoder Trait

use crate::errors::TCResult;
use crate::types::TokenType;

/// A trait for token encoders.
pub trait TokenEncoder<T: TokenType>: Send + Sync {
    /// Encode text, appending to a target buffer.
    ///
    /// On error, `tokens` may hold a partial encoding; callers which
    /// need all-or-nothing behavior should use [`Self::try_encode`].
    ///
    /// ## Arguments
    /// * `text` - The text to encode.
    /// * `tokens` - The target token buffer to append to.
    fn try_encode_append(
        &self,
        text: &str,
        tokens: &mut Vec<T>,
    ) -> TCResult<()>;

    /// Encode text into tokens, returning an error if the encoding fails.
    ///
    /// ## Arguments
    /// * `text` - The text to encode.
    ///
    /// ## Returns
    /// The tokens; or the first error, with no partial result.
    fn try_encode(
        &self,
        text: &str,
    ) -> TCResult<Vec<T>> {
        let mut tokens = Vec::with_capacity(text.len());
        self.try_encode_append(text, &mut tokens)?;
        Ok(tokens)
    }

    /// Encode a batch of texts.
    ///
    /// Fails on the first text which fails.
    fn try_encode_batch(
        &self,
        batch: &[&str],
    ) -> TCResult<Vec<Vec<T>>> {
        batch.iter().map(|text| self.try_encode(text)).collect()
    }
}
