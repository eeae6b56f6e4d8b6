//! # Vocabulary Tokenizers
//!
//! Two tokenizers share one contract: build a vocabulary from a corpus,
//! encode text to ids, decode ids back to text.
//!
//! * [`CharVocabTokenizer`] - one token per distinct corpus character.
//! * [`SubwordVocabTokenizer`] - characters plus promoted character pairs,
//!   with longest-match-first segmentation.

use crate::decoders::TokenDecoder;
use crate::encoders::TokenEncoder;
use crate::types::TokenType;
use crate::vocab::TokenVocab;

pub mod char_tokenizer;
pub mod subword_tokenizer;

#[doc(inline)]
pub use char_tokenizer::CharVocabTokenizer;
#[doc(inline)]
pub use subword_tokenizer::{SubwordTokenizerOptions, SubwordVocabTokenizer};

/// A [`TokenEncoder`] + [`TokenDecoder`] pair over a [`TokenVocab`].
pub trait VocabTokenizer<T: TokenType>: TokenEncoder<T> + TokenDecoder<T> {
    /// The vocabulary.
    fn vocab(&self) -> &TokenVocab<T>;

    /// The number of vocabulary entries.
    fn vocab_size(&self) -> usize {
        self.vocab().len()
    }
}

// Tokenizers are shared read-only across threads.
const _: () = {
    const fn assert_shareable<S: Send + Sync>() {}

    assert_shareable::<TokenVocab<u32>>();
    assert_shareable::<CharVocabTokenizer<u32>>();
    assert_shareable::<SubwordVocabTokenizer<u32>>();
};
