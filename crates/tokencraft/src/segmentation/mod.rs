//! # Text Segmentation
//!
//! Splits text into vocabulary spans ahead of the token lookup.
//!
//! * [`segment_longest_match`] - greedy longest-match-first segmentation.
//! * [`LongestMatchSpans`] - the lazy iterator behind it.

pub mod longest_match;

#[doc(inline)]
pub use longest_match::{
    LongestMatchSpans, MAX_CANDIDATE_CHARS, SpanLookup, segment_longest_match,
};
