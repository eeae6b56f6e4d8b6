//! # Subword (Pair Promotion) Tokenizer

use compact_str::CompactString;

use crate::decoders::TokenDecoder;
use crate::encoders::TokenEncoder;
use crate::errors::TCResult;
use crate::segmentation::{LongestMatchSpans, segment_longest_match};
use crate::tokenizers::VocabTokenizer;
use crate::training::{DEFAULT_MAX_VOCAB_SIZE, PairPromotionTrainer, PairPromotionTrainerOptions};
use crate::types::TokenType;
use crate::vocab::TokenVocab;

/// Options for [`SubwordVocabTokenizer`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubwordTokenizerOptions {
    /// Hard cap on vocabulary growth by pair promotion.
    pub max_vocab_size: usize,
}

impl Default for SubwordTokenizerOptions {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_VOCAB_SIZE)
    }
}

impl SubwordTokenizerOptions {
    /// Create new options.
    ///
    /// ## Arguments
    /// * `max_vocab_size` - The vocabulary size cap.
    pub fn new(max_vocab_size: usize) -> Self {
        Self { max_vocab_size }
    }

    /// Sets the vocabulary size cap.
    pub fn with_max_vocab_size(
        self,
        max_vocab_size: usize,
    ) -> Self {
        Self { max_vocab_size }
    }

    /// The matching trainer options.
    pub fn trainer_options(&self) -> PairPromotionTrainerOptions {
        PairPromotionTrainerOptions::new(self.max_vocab_size)
    }

    /// Train a [`SubwordVocabTokenizer`] on a corpus.
    pub fn init<T: TokenType>(
        &self,
        corpus: &str,
    ) -> TCResult<SubwordVocabTokenizer<T>> {
        let mut trainer: PairPromotionTrainer = self.trainer_options().init();
        trainer.update_from_text(corpus);
        Ok(SubwordVocabTokenizer::from_vocab(trainer.train()?))
    }
}

/// A tokenizer over a learned character + character-pair vocabulary.
///
/// Text is segmented longest-match-first against the vocabulary, then each
/// segment is mapped to its id. Characters the corpus did not contain
/// segment as raw one-character spans, which then fail the id lookup with
/// [`crate::TokencraftError::UnknownSymbol`].
///
/// ```rust
/// use tokencraft::{SubwordTokenizerOptions, SubwordVocabTokenizer, TokenEncoder};
///
/// let tokenizer: SubwordVocabTokenizer =
///     SubwordTokenizerOptions::new(2).init("aaaa").unwrap();
///
/// assert_eq!(tokenizer.vocabulary(), &["a", "aa"]);
/// assert_eq!(tokenizer.segment("aaaa"), vec!["aa", "aa"]);
/// assert_eq!(tokenizer.try_encode("aaaa").unwrap(), vec![1, 1]);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct SubwordVocabTokenizer<T: TokenType = u32> {
    vocab: TokenVocab<T>,
}

impl<T: TokenType> SubwordVocabTokenizer<T> {
    /// Train a tokenizer on a corpus.
    ///
    /// ## Arguments
    /// * `corpus` - The training text.
    /// * `max_vocab_size` - The vocabulary size cap.
    pub fn from_corpus(
        corpus: &str,
        max_vocab_size: usize,
    ) -> TCResult<Self> {
        SubwordTokenizerOptions::new(max_vocab_size).init(corpus)
    }

    /// Build a tokenizer from an existing vocabulary.
    pub fn from_vocab(vocab: TokenVocab<T>) -> Self {
        Self { vocab }
    }

    /// The learned vocabulary entries, in id order.
    pub fn vocabulary(&self) -> &[CompactString] {
        self.vocab.tokens()
    }

    /// Segment text longest-match-first against this tokenizer's vocabulary.
    ///
    /// Never fails; see [`segment_longest_match`].
    pub fn segment<'a>(
        &self,
        text: &'a str,
    ) -> Vec<&'a str> {
        segment_longest_match(text, &self.vocab)
    }

    /// Release the vocabulary.
    pub fn into_vocab(self) -> TokenVocab<T> {
        self.vocab
    }
}

impl<T: TokenType> TokenEncoder<T> for SubwordVocabTokenizer<T> {
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self, text, tokens)))]
    fn try_encode_append(
        &self,
        text: &str,
        tokens: &mut Vec<T>,
    ) -> TCResult<()> {
        for span in LongestMatchSpans::new(text, &self.vocab) {
            tokens.push(self.vocab.try_lookup_token(span)?);
        }
        Ok(())
    }
}

impl<T: TokenType> TokenDecoder<T> for SubwordVocabTokenizer<T> {
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self, tokens, buf)))]
    fn try_decode_append(
        &self,
        tokens: &[T],
        buf: &mut String,
    ) -> TCResult<()> {
        self.vocab.try_decode_append(tokens, buf)
    }
}

impl<T: TokenType> VocabTokenizer<T> for SubwordVocabTokenizer<T> {
    fn vocab(&self) -> &TokenVocab<T> {
        &self.vocab
    }
}
