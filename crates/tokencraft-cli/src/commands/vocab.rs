use std::io::Write;

use tokencraft::{TokenType, vocab::TokenVocab};

use crate::{input_output::OutputArgs, logging::LogArgs, tokenizer_selector::TokenizerSelectorArgs};

/// Args for the vocab listing command.
#[derive(clap::Args, Debug)]
pub struct VocabArgs {
    #[command(flatten)]
    tokenizer: TokenizerSelectorArgs,

    #[command(flatten)]
    output: OutputArgs,

    #[command(flatten)]
    logging: LogArgs,
}

impl VocabArgs {
    /// Run the vocab listing command.
    pub fn run(&self) -> Result<(), Box<dyn std::error::Error>> {
        self.logging.setup_logging(2)?;

        let tokenizer = self.tokenizer.load_tokenizer()?;

        let mut writer = self.output.open_writer()?;
        write_vocab_listing(tokenizer.vocab(), &mut writer)?;
        writer.flush()?;

        Ok(())
    }
}

/// Write one ``{ID}\t{TOKEN:?}`` line per entry, in id order.
pub fn write_vocab_listing<T: TokenType>(
    vocab: &TokenVocab<T>,
    writer: &mut dyn Write,
) -> std::io::Result<()> {
    for (token, span) in vocab.iter() {
        writeln!(writer, "{token}\t{span:?}")?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_write_vocab_listing() {
        let vocab: TokenVocab<u32> = TokenVocab::from_tokens(["a", " ", "a "]).unwrap();

        let mut out: Vec<u8> = Vec::new();
        write_vocab_listing(&vocab, &mut out).unwrap();

        assert_eq!(
            String::from_utf8(out).unwrap(),
            "0\t\"a\"\n1\t\" \"\n2\t\"a \"\n"
        );
    }
}
