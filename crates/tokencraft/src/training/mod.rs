//! # Vocabulary Training
//!
//! Support for learning subword vocabularies by pair promotion.
//!
//! Training starts from the corpus alphabet ([`crate::vocab::Alphabet`]),
//! then repeatedly promotes the most frequent adjacent character pair
//! ([`PairCounter`]) until the size cap is reached, or no pair recurs.
//!
//! ```rust
//! use tokencraft::training::PairPromotionTrainerOptions;
//! use tokencraft::vocab::TokenVocab;
//!
//! let mut trainer = PairPromotionTrainerOptions::new(2).init::<u64>();
//! trainer.update_from_text("aaaa");
//!
//! let vocab: TokenVocab<u32> = trainer.train().unwrap();
//! assert_eq!(vocab.tokens(), &["a", "aa"]);
//! ```

mod pair_counter;
mod pair_trainer;
mod training_types;

#[doc(inline)]
pub use pair_counter::{PairCount, PairCounter};
#[doc(inline)]
pub use pair_trainer::{DEFAULT_MAX_VOCAB_SIZE, PairPromotionTrainer, PairPromotionTrainerOptions};
#[doc(inline)]
pub use training_types::CountType;
