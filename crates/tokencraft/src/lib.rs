//! # `tokencraft` Educational LLM Tokenizers
//!
//! From-scratch text tokenization at two levels:
//!
//! * [`CharVocabTokenizer`] - one token per distinct corpus character.
//! * [`SubwordVocabTokenizer`] - the corpus alphabet plus frequent
//!   character pairs, promoted up to a vocabulary size cap; encoded
//!   longest-match-first.
//!
//! See:
//! * [`encoders`] / [`decoders`] for the shared encode / decode traits.
//! * [`training`] to learn a subword [`vocab::TokenVocab`].
//! * [`segmentation`] for longest-match-first segmentation.
//! * [`vocab`] for vocabularies and vocab file io.
//! * [`stats`] for token count reports.
//!
//! ## Crate Features
#![doc = document_features::document_features!()]
//!
//! ## Example
//!
//! ```rust
//! use tokencraft::{
//!     CharVocabTokenizer,
//!     SubwordVocabTokenizer,
//!     TokenDecoder,
//!     TokenEncoder,
//!     stats::TokenCountReport,
//! };
//!
//! let corpus = "the cat sat on the mat the cat sat on the mat";
//! let text = "cat sat mat";
//!
//! let chars: CharVocabTokenizer = CharVocabTokenizer::from_corpus(corpus).unwrap();
//! let subwords: SubwordVocabTokenizer =
//!     SubwordVocabTokenizer::from_corpus(corpus, 50).unwrap();
//!
//! let tokens = subwords.try_encode(text).unwrap();
//! assert_eq!(subwords.try_decode_to_string(&tokens).unwrap(), text);
//!
//! let char_report = TokenCountReport::measure("char", &chars, text).unwrap();
//! let subword_report = TokenCountReport::measure("subword", &subwords, text).unwrap();
//! assert!(subword_report.token_count < char_report.token_count);
//! ```
#![warn(missing_docs, unused)]

pub mod decoders;
pub mod encoders;
pub mod errors;
pub mod segmentation;
pub mod stats;
pub mod tokenizers;
pub mod training;
pub mod types;
pub mod vocab;

#[doc(inline)]
pub use decoders::TokenDecoder;
#[doc(inline)]
pub use encoders::TokenEncoder;
#[doc(inline)]
pub use errors::{TCResult, TokencraftError};
#[doc(inline)]
pub use tokenizers::{
    CharVocabTokenizer, SubwordTokenizerOptions, SubwordVocabTokenizer, VocabTokenizer,
};
#[doc(inline)]
pub use types::TokenType;
#[doc(inline)]
pub use vocab::TokenVocab;
