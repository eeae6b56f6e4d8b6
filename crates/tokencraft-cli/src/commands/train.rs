use std::io::Write;

use tokencraft::vocab::io::write_base64_vocab;

use crate::{
    input_output::{OutputArgs, read_corpus_files},
    logging::LogArgs,
    tokenizer_selector::{TokenizerKind, train_tokenizer},
};

/// Args for the train command.
#[derive(clap::Args, Debug)]
pub struct TrainArgs {
    /// Corpus files.
    #[arg(required = true)]
    files: Vec<String>,

    /// Tokenizer kind.
    #[arg(long, value_enum, default_value = "subword")]
    kind: TokenizerKind,

    /// Vocabulary size cap.
    #[arg(long, default_value_t = tokencraft::training::DEFAULT_MAX_VOCAB_SIZE)]
    max_vocab_size: usize,

    #[command(flatten)]
    output: OutputArgs,

    #[command(flatten)]
    logging: LogArgs,
}

impl TrainArgs {
    /// Run the train command.
    pub fn run(&self) -> Result<(), Box<dyn std::error::Error>> {
        self.logging.setup_logging(3)?;

        let texts = read_corpus_files(&self.files)?;

        log::info!("Training {:?} vocabulary...", self.kind);
        let tokenizer = train_tokenizer(self.kind, &texts, self.max_vocab_size)?;
        log::info!("Vocabulary Size: {}", tokenizer.vocab_size());

        if let Some(path) = &self.output.output {
            log::info!("output: {path}");
        }
        let mut writer = self.output.open_writer()?;
        write_base64_vocab(tokenizer.vocab(), &mut writer)?;
        writer.flush()?;

        Ok(())
    }
}
