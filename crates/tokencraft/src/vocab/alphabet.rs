//! # First-Occurrence Character Alphabet

use compact_str::CompactString;

use crate::types::{TCHashSet, hash_set_new};

/// The distinct characters of a corpus, in first-occurrence order.
///
/// The corpus is scanned once; each character is recorded the first time
/// it is seen. Order is explicit, and is the order in which token ids
/// are later assigned.
#[derive(Debug, Clone)]
pub struct Alphabet {
    chars: Vec<char>,
    seen: TCHashSet<char>,
}

impl Default for Alphabet {
    fn default() -> Self {
        Self {
            chars: Vec::new(),
            seen: hash_set_new(),
        }
    }
}

impl Alphabet {
    /// Scan a corpus for its distinct characters.
    ///
    /// ## Arguments
    /// * `corpus` - The training text.
    ///
    /// ## Returns
    /// A new `Alphabet`; empty for an empty corpus.
    pub fn scan(corpus: &str) -> Self {
        let mut alphabet = Self::default();
        alphabet.extend_from(corpus);
        alphabet
    }

    /// Record any characters of `text` not yet seen.
    pub fn extend_from(
        &mut self,
        text: &str,
    ) {
        for c in text.chars() {
            if self.seen.insert(c) {
                self.chars.push(c);
            }
        }
    }

    /// The number of distinct characters.
    pub fn len(&self) -> usize {
        self.chars.len()
    }

    /// Is the alphabet empty?
    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    /// Does the alphabet contain `c`?
    pub fn contains(
        &self,
        c: char,
    ) -> bool {
        self.seen.contains(&c)
    }

    /// The characters, in first-occurrence order.
    pub fn chars(&self) -> &[char] {
        &self.chars
    }

    /// Convert to single-character token strings, preserving order.
    pub fn to_tokens(&self) -> Vec<CompactString> {
        self.chars
            .iter()
            .map(|&c| {
                let mut buf = [0u8; 4];
                CompactString::new(c.encode_utf8(&mut buf))
            })
            .collect()
    }
}
