//! # Pair Promotion Vocab Trainer

use compact_str::CompactString;

use crate::errors::TCResult;
use crate::training::{CountType, PairCounter};
use crate::types::{TCHashSet, TokenType, hash_set_new};
use crate::vocab::{Alphabet, TokenVocab};

/// The default cap on vocabulary size.
pub const DEFAULT_MAX_VOCAB_SIZE: usize = 100;

/// Options for [`PairPromotionTrainer`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PairPromotionTrainerOptions {
    /// Hard cap on the number of vocabulary entries produced by promotion.
    ///
    /// The character alphabet is always kept whole; promotion only adds
    /// entries while the vocabulary is below this size.
    pub max_vocab_size: usize,
}

impl Default for PairPromotionTrainerOptions {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_VOCAB_SIZE)
    }
}

impl PairPromotionTrainerOptions {
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

    /// Initializes a [`PairPromotionTrainer`] from these options.
    pub fn init<C: CountType>(self) -> PairPromotionTrainer<C> {
        PairPromotionTrainer::new(self)
    }
}

/// Learns a subword vocabulary by promoting frequent character pairs.
///
/// The vocabulary starts as the corpus alphabet; then, while below the
/// size cap, the most frequent adjacent character pair that occurs more
/// than once and is not yet an entry is appended.
///
/// Pairs are always over raw corpus characters, never over a corpus
/// re-segmented with earlier promotions; so every promoted entry is
/// exactly two characters long.
///
/// # Parameters
/// * `C` - the type used to store pair counts.
#[derive(Debug, Clone)]
pub struct PairPromotionTrainer<C: CountType = u64> {
    /// Trainer options.
    pub options: PairPromotionTrainerOptions,

    alphabet: Alphabet,
    pair_counts: PairCounter<C>,
}

impl<C: CountType> PairPromotionTrainer<C> {
    /// Initializes a [`PairPromotionTrainer`].
    pub fn new(options: PairPromotionTrainerOptions) -> Self {
        Self {
            options,
            alphabet: Alphabet::default(),
            pair_counts: PairCounter::default(),
        }
    }

    /// Update the alphabet and pair counts from a corpus text.
    ///
    /// Separate calls are separate texts; no pair spans two of them.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self, text)))]
    pub fn update_from_text(
        &mut self,
        text: &str,
    ) {
        self.alphabet.extend_from(text);
        self.pair_counts.update_from_text(text);
    }

    /// Trains a [`TokenVocab<T>`].
    ///
    /// Ids are assigned alphabet first, in first-occurrence order;
    /// then promoted pairs, in promotion order.
    ///
    /// ## Returns
    /// The vocabulary; an error only if it does not fit in `T`.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self)))]
    pub fn train<T: TokenType>(self) -> TCResult<TokenVocab<T>> {
        let max_vocab_size = self.options.max_vocab_size;

        let mut tokens: Vec<CompactString> = self.alphabet.to_tokens();
        let mut members: TCHashSet<CompactString> = hash_set_new();
        members.extend(tokens.iter().cloned());

        log::info!(
            "Starting pair promotion: {} chars, {} distinct pairs, max vocab size {}",
            tokens.len(),
            self.pair_counts.len(),
            max_vocab_size
        );

        while tokens.len() < max_vocab_size {
            let Some(job) = self
                .pair_counts
                .most_frequent(|pair| members.contains(pair))
            else {
                log::info!("No promotable pairs remain");
                break;
            };

            log::debug!(
                "Promoted {:?} -> {} (frequency: {})",
                job.pair,
                tokens.len(),
                job.count
            );

            members.insert(job.pair.clone());
            tokens.push(job.pair.clone());
        }

        log::info!(
            "Finished training: {} pairs promoted, vocab size {}",
            tokens.len() - self.alphabet.len(),
            tokens.len()
        );

        TokenVocab::from_tokens(tokens)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn train(
        corpus: &str,
        max_vocab_size: usize,
    ) -> TokenVocab<u32> {
        let mut trainer: PairPromotionTrainer =
            PairPromotionTrainerOptions::new(max_vocab_size).init();
        trainer.update_from_text(corpus);
        trainer.train().unwrap()
    }

    #[test]
    fn test_options() {
        let options = PairPromotionTrainerOptions::default();
        assert_eq!(options.max_vocab_size, DEFAULT_MAX_VOCAB_SIZE);

        let options = options.with_max_vocab_size(10);
        assert_eq!(options, PairPromotionTrainerOptions::new(10));
    }

    #[test]
    fn test_promotes_to_cap() {
        let vocab = train("aaaa", 2);
        assert_eq!(vocab.tokens(), &["a", "aa"]);
    }

    #[test]
    fn test_stops_without_candidates() {
        // No pair recurs.
        let vocab = train("abcd", 50);
        assert_eq!(vocab.tokens(), &["a", "b", "c", "d"]);
    }

    #[test]
    fn test_alphabet_above_cap() {
        let vocab = train("abcabc", 2);
        assert_eq!(vocab.tokens(), &["a", "b", "c"]);
    }

    #[test]
    fn test_empty_corpus() {
        let vocab = train("", 10);
        assert!(vocab.is_empty());
    }

    #[test]
    fn test_promotion_order() {
        // "ab" x3, "bc" x2, "ca" x2, "bd" x1.
        let vocab = train("abcabcabd", 100);
        assert_eq!(vocab.tokens(), &["a", "b", "c", "d", "ab", "bc", "ca"]);
    }

    #[test]
    fn test_no_recursive_merges() {
        let vocab = train("the cat sat on the mat the cat sat on the mat", 100);
        for span in vocab.tokens() {
            assert!(span.chars().count() <= 2, "{span:?}");
        }
    }

    #[test]
    fn test_cat_corpus() {
        let vocab = train("the cat sat on the mat", 12);
        // 10 distinct chars; then "at" (x3) and "th" (x2, seen first).
        assert_eq!(vocab.len(), 12);
        assert_eq!(&vocab.tokens()[10..], &["at", "th"]);
    }
}
