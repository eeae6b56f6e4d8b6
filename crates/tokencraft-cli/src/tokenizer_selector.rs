use tokencraft::{
    CharVocabTokenizer,
    SubwordTokenizerOptions,
    SubwordVocabTokenizer,
    TCResult,
    TokenVocab,
    VocabTokenizer,
    training::DEFAULT_MAX_VOCAB_SIZE,
    vocab::{Alphabet, io::load_base64_vocab_path},
};

use crate::input_output::read_corpus_files;

/// The token id type used by the cli.
pub type T = u32;

/// The tokenizer kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum TokenizerKind {
    /// One token per distinct character.
    Char,

    /// Characters plus promoted character pairs.
    Subword,
}

/// Tokenizer selection arg group.
///
/// A tokenizer is either trained on `--corpus` files, or loaded from
/// a saved `--vocab` file.
#[derive(clap::Args, Debug)]
pub struct TokenizerSelectorArgs {
    /// Tokenizer kind.
    #[arg(long, value_enum, default_value = "subword")]
    pub kind: TokenizerKind,

    /// Corpus files to build the vocabulary from.
    #[arg(long = "corpus", num_args = 1..)]
    pub corpus: Vec<String>,

    /// Vocabulary size cap, for subword training.
    #[arg(long, default_value_t = DEFAULT_MAX_VOCAB_SIZE)]
    pub max_vocab_size: usize,

    /// Load a saved base64 vocabulary instead of training.
    #[arg(long, conflicts_with = "corpus")]
    pub vocab: Option<String>,
}

impl TokenizerSelectorArgs {
    /// Build or load the selected tokenizer.
    pub fn load_tokenizer(&self) -> Result<Box<dyn VocabTokenizer<T>>, Box<dyn std::error::Error>> {
        if let Some(path) = &self.vocab {
            log::info!("Loading {:?} vocab: {path}", self.kind);
            let vocab: TokenVocab<T> = load_base64_vocab_path(path)?;
            return Ok(tokenizer_from_vocab(self.kind, vocab)?);
        }

        if self.corpus.is_empty() {
            return Err("one of --corpus or --vocab is required".into());
        }

        let texts = read_corpus_files(&self.corpus)?;
        let tokenizer = train_tokenizer(self.kind, &texts, self.max_vocab_size)?;
        log::info!(
            "Built {:?} tokenizer: vocab size {}",
            self.kind,
            tokenizer.vocab_size()
        );
        Ok(tokenizer)
    }
}

/// Build a tokenizer of `kind` over corpus texts.
///
/// No character pair spans two texts.
pub fn train_tokenizer(
    kind: TokenizerKind,
    texts: &[String],
    max_vocab_size: usize,
) -> TCResult<Box<dyn VocabTokenizer<T>>> {
    let tokenizer: Box<dyn VocabTokenizer<T>> = match kind {
        TokenizerKind::Char => {
            let mut alphabet = Alphabet::default();
            texts.iter().for_each(|text| alphabet.extend_from(text));
            let vocab: TokenVocab<T> = TokenVocab::from_tokens(alphabet.to_tokens())?;
            Box::new(CharVocabTokenizer::from_vocab(vocab)?)
        }
        TokenizerKind::Subword => {
            let mut trainer = SubwordTokenizerOptions::new(max_vocab_size)
                .trainer_options()
                .init::<u64>();
            texts.iter().for_each(|text| trainer.update_from_text(text));
            Box::new(SubwordVocabTokenizer::from_vocab(trainer.train::<T>()?))
        }
    };
    Ok(tokenizer)
}

/// Wrap a loaded vocabulary as a tokenizer of `kind`.
pub fn tokenizer_from_vocab(
    kind: TokenizerKind,
    vocab: TokenVocab<T>,
) -> TCResult<Box<dyn VocabTokenizer<T>>> {
    let tokenizer: Box<dyn VocabTokenizer<T>> = match kind {
        TokenizerKind::Char => Box::new(CharVocabTokenizer::from_vocab(vocab)?),
        TokenizerKind::Subword => Box::new(SubwordVocabTokenizer::from_vocab(vocab)),
    };
    Ok(tokenizer)
}

#[cfg(test)]
mod tests {
    use tokencraft::TokenEncoder;

    use super::*;

    #[test]
    fn test_train_tokenizer() {
        let texts = vec!["aaaa".to_string(), "ab".to_string()];

        let chars = train_tokenizer(TokenizerKind::Char, &texts, 100).unwrap();
        assert_eq!(chars.vocab().tokens(), &["a", "b"]);

        let subwords = train_tokenizer(TokenizerKind::Subword, &texts, 100).unwrap();
        assert_eq!(subwords.vocab().tokens(), &["a", "b", "aa"]);
        assert_eq!(
            TokenEncoder::try_encode(&*subwords, "aaab").unwrap(),
            vec![2, 0, 1]
        );
    }

    #[test]
    fn test_tokenizer_from_vocab() {
        let vocab: TokenVocab<T> = TokenVocab::from_tokens(["a", "aa"]).unwrap();

        assert!(tokenizer_from_vocab(TokenizerKind::Char, vocab.clone()).is_err());

        let subwords = tokenizer_from_vocab(TokenizerKind::Subword, vocab).unwrap();
        assert_eq!(
            TokenEncoder::try_encode(&*subwords, "aaa").unwrap(),
            vec![1, 0]
        );
    }
}
