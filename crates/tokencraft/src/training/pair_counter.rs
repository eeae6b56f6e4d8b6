//! # Adjacent Character Pair Counter

use compact_str::CompactString;

use crate::training::CountType;
use crate::types::{TCHashMap, hash_map_with_capacity};

/// A two-character span and its number of occurrences.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PairCount<C: CountType> {
    /// The pair, as a two-character string.
    pub pair: CompactString,

    /// The number of (possibly overlapping) occurrences; saturates at `C::max_value()`.
    pub count: C,
}

/// Counts adjacent character pairs, remembering first-seen order.
///
/// Pairs are always over raw characters; overlapping occurrences
/// each count. Pairs never span two separate [`PairCounter::update_from_text`]
/// calls.
#[derive(Debug, Clone)]
pub struct PairCounter<C: CountType = u64> {
    /// Counts, in first-seen order.
    pairs: Vec<PairCount<C>>,

    /// Pair to position in `pairs`.
    index: TCHashMap<CompactString, usize>,
}

impl<C: CountType> Default for PairCounter<C> {
    fn default() -> Self {
        Self {
            pairs: Vec::new(),
            index: hash_map_with_capacity(0),
        }
    }
}

impl<C: CountType> PairCounter<C> {
    /// Count the pairs of a single text.
    pub fn from_text(text: &str) -> Self {
        let mut counter = Self::default();
        counter.update_from_text(text);
        counter
    }

    /// Update pair counts inplace from text.
    pub fn update_from_text(
        &mut self,
        text: &str,
    ) {
        let mut chars = text.char_indices().peekable();
        while let Some((start, _)) = chars.next() {
            let Some(&(second, c)) = chars.peek() else {
                break;
            };
            let pair = &text[start..second + c.len_utf8()];

            match self.index.get(pair) {
                Some(&idx) => {
                    let count = &mut self.pairs[idx].count;
                    *count = count.saturating_add(C::one());
                }
                None => {
                    self.index.insert(pair.into(), self.pairs.len());
                    self.pairs.push(PairCount {
                        pair: pair.into(),
                        count: C::one(),
                    });
                }
            }
        }
    }

    /// The number of distinct pairs.
    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    /// Were no pairs seen?
    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// The count of `pair`, if seen.
    pub fn get(
        &self,
        pair: &str,
    ) -> Option<C> {
        self.index.get(pair).map(|&idx| self.pairs[idx].count)
    }

    /// Iterate counts in first-seen order.
    pub fn iter(&self) -> impl Iterator<Item = &PairCount<C>> + '_ {
        self.pairs.iter()
    }

    /// Select the pair to promote next.
    ///
    /// Candidates are pairs seen more than once for which `is_excluded`
    /// is false. The highest count wins; ties go to the pair seen first.
    ///
    /// ## Arguments
    /// * `is_excluded` - rejects pairs which may not be promoted.
    ///
    /// ## Returns
    /// The winning pair, or `None` when no candidate remains.
    pub fn most_frequent<F>(
        &self,
        is_excluded: F,
    ) -> Option<&PairCount<C>>
    where
        F: Fn(&str) -> bool,
    {
        let one = C::one();
        let mut best: Option<&PairCount<C>> = None;
        for job in &self.pairs {
            if job.count <= one || is_excluded(job.pair.as_str()) {
                continue;
            }
            match best {
                Some(b) if b.count >= job.count => {}
                _ => best = Some(job),
            }
        }
        best
    }
}
