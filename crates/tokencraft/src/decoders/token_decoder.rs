//! # Token Decoder Trait

use crate::errors::TCResult;
use crate::types::TokenType;

/// Trait for token decoders.
pub trait TokenDecoder<T: TokenType>: Send + Sync {
    /// Decode tokens, appending to a target buffer.
    ///
    /// On error, `buf` may hold a partial decoding; callers which
    /// need all-or-nothing behavior should use [`Self::try_decode_to_string`].
    ///
    /// ## Arguments
    /// * `tokens` - A slice of tokens to decode.
    /// * `buf` - The target string to append to.
    fn try_decode_append(
        &self,
        tokens: &[T],
        buf: &mut String,
    ) -> TCResult<()>;

    /// Decode tokens into a string.
    ///
    /// ## Arguments
    /// * `tokens` - A slice of tokens to decode.
    ///
    /// ## Returns
    /// The text; or the first error, with no partial result.
    fn try_decode_to_string(
        &self,
        tokens: &[T],
    ) -> TCResult<String> {
        let mut buf = String::with_capacity(tokens.len());
        self.try_decode_append(tokens, &mut buf)?;
        Ok(buf)
    }

    /// Decode a batch of token slices into strings.
    ///
    /// Fails on the first slice which fails.
    fn try_decode_batch_to_strings(
        &self,
        batch: &[&[T]],
    ) -> TCResult<Vec<String>> {
        batch
            .iter()
            .map(|tokens| self.try_decode_to_string(tokens))
            .collect()
    }
}
