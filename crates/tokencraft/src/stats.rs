//! # Token Count Reports

use core::fmt;

use crate::encoders::TokenEncoder;
use crate::errors::TCResult;
use crate::types::TokenType;

/// How many tokens a tokenizer spent on a text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenCountReport {
    /// A label for the tokenizer.
    pub name: String,

    /// Length of the input, in characters.
    pub text_chars: usize,

    /// Number of tokens produced.
    pub token_count: usize,
}

impl TokenCountReport {
    /// Encode `text` with `encoder` and count.
    ///
    /// ## Arguments
    /// * `name` - the report label.
    /// * `encoder` - the encoder to measure.
    /// * `text` - the input text.
    pub fn measure<T, E>(
        name: impl Into<String>,
        encoder: &E,
        text: &str,
    ) -> TCResult<Self>
    where
        T: TokenType,
        E: TokenEncoder<T> + ?Sized,
    {
        let tokens = encoder.try_encode(text)?;
        Ok(Self {
            name: name.into(),
            text_chars: text.chars().count(),
            token_count: tokens.len(),
        })
    }

    /// Average characters per token; 0 when there are no tokens.
    pub fn chars_per_token(&self) -> f64 {
        if self.token_count == 0 {
            0.0
        } else {
            self.text_chars as f64 / self.token_count as f64
        }
    }
}

impl fmt::Display for TokenCountReport {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        write!(
            f,
            "{}: {} chars -> {} tokens ({:.2} chars/token)",
            self.name,
            self.text_chars,
            self.token_count,
            self.chars_per_token()
        )
    }
}
