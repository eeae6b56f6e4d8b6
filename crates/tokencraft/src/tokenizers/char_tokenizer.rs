//! # Character-Level Tokenizer

use crate::decoders::TokenDecoder;
use crate::encoders::TokenEncoder;
use crate::errors::{TCResult, TokencraftError};
use crate::tokenizers::VocabTokenizer;
use crate::types::TokenType;
use crate::vocab::{Alphabet, TokenVocab};

/// A tokenizer with one token per distinct corpus character.
///
/// Ids follow first-occurrence order in the corpus. Encoding fails on the
/// first character the corpus did not contain.
///
/// ```rust
/// use tokencraft::{CharVocabTokenizer, TokenDecoder, TokenEncoder};
///
/// let tokenizer: CharVocabTokenizer = CharVocabTokenizer::from_corpus("abab").unwrap();
///
/// let tokens = tokenizer.try_encode("ab").unwrap();
/// assert_eq!(tokens, vec![0, 1]);
/// assert_eq!(tokenizer.try_decode_to_string(&tokens).unwrap(), "ab");
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct CharVocabTokenizer<T: TokenType = u32> {
    vocab: TokenVocab<T>,
}

impl<T: TokenType> CharVocabTokenizer<T> {
    /// Build a tokenizer from the distinct characters of a corpus.
    ///
    /// An empty corpus yields an empty vocabulary.
    ///
    /// ## Returns
    /// The tokenizer; an error only if the alphabet does not fit in `T`.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(corpus)))]
    pub fn from_corpus(corpus: &str) -> TCResult<Self> {
        let alphabet = Alphabet::scan(corpus);
        log::debug!("Character alphabet: {} entries", alphabet.len());

        Ok(Self {
            vocab: TokenVocab::from_tokens(alphabet.to_tokens())?,
        })
    }

    /// Build a tokenizer from an existing vocabulary.
    ///
    /// ## Returns
    /// The tokenizer; or [`TokencraftError::MultiCharEntry`] if an entry
    /// is not exactly one character.
    pub fn from_vocab(vocab: TokenVocab<T>) -> TCResult<Self> {
        if let Some(entry) = vocab.tokens().iter().find(|s| s.chars().count() != 1) {
            return Err(TokencraftError::MultiCharEntry {
                entry: entry.clone(),
            });
        }
        Ok(Self { vocab })
    }

    /// Release the vocabulary.
    pub fn into_vocab(self) -> TokenVocab<T> {
        self.vocab
    }
}

impl<T: TokenType> TokenEncoder<T> for CharVocabTokenizer<T> {
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self, text, tokens)))]
    fn try_encode_append(
        &self,
        text: &str,
        tokens: &mut Vec<T>,
    ) -> TCResult<()> {
        let mut buf = [0u8; 4];
        for c in text.chars() {
            let token = self
                .vocab
                .lookup_token(c.encode_utf8(&mut buf))
                .ok_or(TokencraftError::UnknownSymbol { symbol: c })?;
            tokens.push(token);
        }
        Ok(())
    }
}

impl<T: TokenType> TokenDecoder<T> for CharVocabTokenizer<T> {
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self, tokens, buf)))]
    fn try_decode_append(
        &self,
        tokens: &[T],
        buf: &mut String,
    ) -> TCResult<()> {
        self.vocab.try_decode_append(tokens, buf)
    }
}

impl<T: TokenType> VocabTokenizer<T> for CharVocabTokenizer<T> {
    fn vocab(&self) -> &TokenVocab<T> {
        &self.vocab
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_abab_vocab() {
        let tokenizer: CharVocabTokenizer<u32> = CharVocabTokenizer::from_corpus("abab").unwrap();

        assert_eq!(tokenizer.vocab().tokens(), &["a", "b"]);
        assert_eq!(tokenizer.vocab().lookup_token("a"), Some(0));
        assert_eq!(tokenizer.vocab().lookup_token("b"), Some(1));

        assert_eq!(tokenizer.try_encode("ab").unwrap(), vec![0, 1]);
        assert_eq!(tokenizer.try_decode_to_string(&[0, 1]).unwrap(), "ab");
    }

    #[test]
    fn test_unknown_symbol() {
        let tokenizer: CharVocabTokenizer = CharVocabTokenizer::from_corpus("abab").unwrap();

        match tokenizer.try_encode("c") {
            Err(TokencraftError::UnknownSymbol { symbol }) => assert_eq!(symbol, 'c'),
            other => panic!("unexpected: {other:?}"),
        }

        // Fails fast, on the first offending character.
        match tokenizer.try_encode("abxy") {
            Err(TokencraftError::UnknownSymbol { symbol }) => assert_eq!(symbol, 'x'),
            other => panic!("unexpected: {other:?}"),
        }
    }

    #[test]
    fn test_unknown_token_id() {
        let tokenizer: CharVocabTokenizer = CharVocabTokenizer::from_corpus("abab").unwrap();

        match tokenizer.try_decode_to_string(&[0, 99, 7]) {
            Err(TokencraftError::UnknownTokenId { token }) => assert_eq!(token, 99),
            other => panic!("unexpected: {other:?}"),
        }
    }

    #[test]
    fn test_empty_corpus() {
        let tokenizer: CharVocabTokenizer = CharVocabTokenizer::from_corpus("").unwrap();
        assert_eq!(tokenizer.vocab_size(), 0);

        assert_eq!(tokenizer.try_encode("").unwrap(), Vec::<u32>::new());
        assert!(tokenizer.try_encode("a").is_err());
        assert!(tokenizer.try_decode_to_string(&[0]).is_err());
    }

    #[test]
    fn test_roundtrip() {
        let corpus = "the cat sat on the mat";
        let tokenizer: CharVocabTokenizer<u16> = CharVocabTokenizer::from_corpus(corpus).unwrap();

        for text in ["cat sat mat", "the", "", "tac", corpus] {
            let tokens = tokenizer.try_encode(text).unwrap();
            assert_eq!(tokens.len(), text.chars().count());
            assert_eq!(tokenizer.try_decode_to_string(&tokens).unwrap(), text);
        }
    }

    #[test]
    fn test_from_vocab() {
        let vocab: TokenVocab<u32> = TokenVocab::from_tokens(["x", "y"]).unwrap();
        let tokenizer = CharVocabTokenizer::from_vocab(vocab.clone()).unwrap();
        assert_eq!(tokenizer.try_encode("yx").unwrap(), vec![1, 0]);
        assert_eq!(tokenizer.into_vocab(), vocab);

        let vocab: TokenVocab<u32> = TokenVocab::from_tokens(["x", "xy"]).unwrap();
        match CharVocabTokenizer::from_vocab(vocab) {
            Err(TokencraftError::MultiCharEntry { entry }) => assert_eq!(entry, "xy"),
            other => panic!("unexpected: {other:?}"),
        }
    }

    #[test]
    fn test_batch() {
        let tokenizer: CharVocabTokenizer = CharVocabTokenizer::from_corpus("abc").unwrap();

        let batch = tokenizer.try_encode_batch(&["ab", "ca"]).unwrap();
        assert_eq!(batch, vec![vec![0, 1], vec![2, 0]]);

        let slices: Vec<&[u32]> = batch.iter().map(Vec::as_slice).collect();
        assert_eq!(
            tokenizer.try_decode_batch_to_strings(&slices).unwrap(),
            vec!["ab".to_string(), "ca".to_string()]
        );

        assert!(tokenizer.try_encode_batch(&["ab", "zz"]).is_err());
    }
}
