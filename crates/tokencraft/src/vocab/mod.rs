//! # Vocabulary
//!
//! This module provides the vocabulary and related io mechanisms.
//!
//! * [`Alphabet`] - the distinct characters of a corpus, in first-occurrence order.
//! * [`TokenVocab`] - an ordered ``{ String <-> T }`` vocabulary with dense ids.
//! * [`io`] - base64 vocab file io (feature ``io``).
#[cfg(feature = "io")]
pub mod io;

pub mod alphabet;
pub mod token_vocab;

#[doc(inline)]
pub use alphabet::Alphabet;
#[doc(inline)]
pub use token_vocab::TokenVocab;
