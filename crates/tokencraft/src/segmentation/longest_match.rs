//! # Longest-Match-First Segmentation

use core::{borrow::Borrow, hash::BuildHasher, hash::Hash};
use std::collections::HashSet;

use crate::types::TokenType;
use crate::vocab::TokenVocab;

/// The longest candidate span tried at each position, in characters.
///
/// This is a fixed bound; it is not derived from the longest vocab entry.
pub const MAX_CANDIDATE_CHARS: usize = 10;

/// Span membership, for segmentation.
pub trait SpanLookup {
    /// Is `span` a vocabulary entry?
    fn contains_span(
        &self,
        span: &str,
    ) -> bool;
}

impl<T: TokenType> SpanLookup for TokenVocab<T> {
    fn contains_span(
        &self,
        span: &str,
    ) -> bool {
        self.contains(span)
    }
}

impl<S, H> SpanLookup for HashSet<S, H>
where
    S: Borrow<str> + Hash + Eq,
    H: BuildHasher,
{
    fn contains_span(
        &self,
        span: &str,
    ) -> bool {
        self.contains(span)
    }
}

#[cfg(feature = "ahash")]
impl<S, H> SpanLookup for ahash::AHashSet<S, H>
where
    S: Borrow<str> + Hash + Eq,
    H: BuildHasher,
{
    fn contains_span(
        &self,
        span: &str,
    ) -> bool {
        let set: &HashSet<S, H> = self;
        set.contains(span)
    }
}

/// Iterator over the longest-match-first segments of a text.
///
/// At each position, candidates of ``min(remaining, MAX_CANDIDATE_CHARS)``
/// characters down to 1 are tried; the first one in the vocabulary is
/// yielded. When nothing matches, the single raw character is yielded;
/// so a fallback segment need not be a vocabulary entry.
pub struct LongestMatchSpans<'a, 'v, V: SpanLookup + ?Sized> {
    text: &'a str,
    vocab: &'v V,

    /// Byte offsets of every char boundary, including `text.len()`.
    bounds: Vec<usize>,

    /// Current position, in chars.
    pos: usize,
}

impl<'a, 'v, V: SpanLookup + ?Sized> LongestMatchSpans<'a, 'v, V> {
    /// Start segmenting `text` against `vocab`.
    pub fn new(
        text: &'a str,
        vocab: &'v V,
    ) -> Self {
        let bounds = text
            .char_indices()
            .map(|(idx, _)| idx)
            .chain(core::iter::once(text.len()))
            .collect();

        Self {
            text,
            vocab,
            bounds,
            pos: 0,
        }
    }

    fn char_count(&self) -> usize {
        self.bounds.len() - 1
    }
}

impl<'a, V: SpanLookup + ?Sized> Iterator for LongestMatchSpans<'a, '_, V> {
    type Item = &'a str;

    fn next(&mut self) -> Option<Self::Item> {
        let remaining = self.char_count() - self.pos;
        if remaining == 0 {
            return None;
        }

        let start = self.bounds[self.pos];
        for len in (1..=remaining.min(MAX_CANDIDATE_CHARS)).rev() {
            let candidate = &self.text[start..self.bounds[self.pos + len]];
            if self.vocab.contains_span(candidate) {
                self.pos += len;
                return Some(candidate);
            }
        }

        // Fallback: the raw character.
        let span = &self.text[start..self.bounds[self.pos + 1]];
        self.pos += 1;
        Some(span)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.char_count() - self.pos;
        (remaining.div_ceil(MAX_CANDIDATE_CHARS), Some(remaining))
    }
}

/// Segment `text` longest-match-first against `vocab`.
///
/// Never fails; characters which match nothing become one-character segments.
///
/// ## Arguments
/// * `text` - the text to segment.
/// * `vocab` - the vocabulary to match against.
///
/// ## Returns
/// The segments, in order; they concatenate back to `text`.
pub fn segment_longest_match<'a, V: SpanLookup + ?Sized>(
    text: &'a str,
    vocab: &V,
) -> Vec<&'a str> {
    LongestMatchSpans::new(text, vocab).collect()
}
