use std::io::Write;

use tokencraft::{TCResult, stats::TokenCountReport};

use crate::{
    input_output::{InputArgs, OutputArgs, read_corpus_files},
    logging::LogArgs,
    tokenizer_selector::{T, TokenizerKind, train_tokenizer},
};

/// Args for the compare command.
#[derive(clap::Args, Debug)]
pub struct CompareArgs {
    /// Corpus files to build both vocabularies from.
    #[arg(long = "corpus", num_args = 1.., required = true)]
    corpus: Vec<String>,

    /// Vocabulary size cap, for the subword tokenizer.
    #[arg(long, default_value_t = tokencraft::training::DEFAULT_MAX_VOCAB_SIZE)]
    max_vocab_size: usize,

    #[command(flatten)]
    input: InputArgs,

    #[command(flatten)]
    output: OutputArgs,

    #[command(flatten)]
    logging: LogArgs,
}

impl CompareArgs {
    /// Run the compare command.
    pub fn run(&self) -> Result<(), Box<dyn std::error::Error>> {
        self.logging.setup_logging(2)?;

        let texts = read_corpus_files(&self.corpus)?;
        let text = self.input.read_text()?;

        let reports = compare_tokenizers(&texts, self.max_vocab_size, &text)?;

        let mut writer = self.output.open_writer()?;
        for report in &reports {
            writeln!(writer, "{report}")?;
        }
        writer.flush()?;

        Ok(())
    }
}

/// Report character and subword token counts for `text`.
pub fn compare_tokenizers(
    texts: &[String],
    max_vocab_size: usize,
    text: &str,
) -> TCResult<Vec<TokenCountReport>> {
    [TokenizerKind::Char, TokenizerKind::Subword]
        .into_iter()
        .map(|kind| {
            let tokenizer = train_tokenizer(kind, texts, max_vocab_size)?;
            let name = format!("{kind:?} (vocab size {})", tokenizer.vocab_size());
            TokenCountReport::measure::<T, _>(name, &*tokenizer, text)
        })
        .collect()
}
