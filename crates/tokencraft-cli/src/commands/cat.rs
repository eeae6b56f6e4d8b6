use std::io::{BufRead, Write};

use tokencraft::{TokenDecoder, TokenEncoder};

use crate::{
    input_output::{InputArgs, OutputArgs},
    logging::LogArgs,
    tokenizer_mode::{TokenizerMode, TokenizerModeArgs},
    tokenizer_selector::{T, TokenizerSelectorArgs},
};

/// Args for the cat command.
#[derive(clap::Args, Debug)]
pub struct CatArgs {
    #[command(flatten)]
    tokenizer: TokenizerSelectorArgs,

    #[command(flatten)]
    tokenizer_mode: TokenizerModeArgs,

    #[command(flatten)]
    input: InputArgs,

    #[command(flatten)]
    output: OutputArgs,

    #[command(flatten)]
    logging: LogArgs,
}

impl CatArgs {
    /// Run the cat command.
    pub fn run(&self) -> Result<(), Box<dyn std::error::Error>> {
        self.logging.setup_logging(2)?;

        let tokenizer = self.tokenizer.load_tokenizer()?;

        let mut reader = self.input.open_reader()?;
        let mut writer = self.output.open_writer()?;

        match self.tokenizer_mode.mode() {
            TokenizerMode::Encode => run_cat_encode(&mut reader, &mut writer, &*tokenizer)?,
            TokenizerMode::Decode => run_cat_decode(&mut reader, &mut writer, &*tokenizer)?,
        }

        Ok(())
    }
}

/// Encode each line (without its line ending) to a line of space separated ids.
pub fn run_cat_encode<E: TokenEncoder<T> + ?Sized>(
    reader: &mut dyn BufRead,
    writer: &mut dyn Write,
    tokenizer: &E,
) -> Result<(), Box<dyn std::error::Error>> {
    for line in reader.lines() {
        let tokens = tokenizer.try_encode(&line?)?;

        for (idx, token) in tokens.iter().enumerate() {
            write!(writer, "{}{}", if idx == 0 { "" } else { " " }, token)?;
        }
        writeln!(writer)?;
        writer.flush()?;
    }
    Ok(())
}

/// Decode each line of space separated ids to a line of text.
pub fn run_cat_decode<D: TokenDecoder<T> + ?Sized>(
    reader: &mut dyn BufRead,
    writer: &mut dyn Write,
    tokenizer: &D,
) -> Result<(), Box<dyn std::error::Error>> {
    for (lineno, line) in reader.lines().enumerate() {
        let tokens = line?
            .split_whitespace()
            .map(|s| s.parse::<T>())
            .collect::<Result<Vec<T>, _>>()
            .map_err(|e| format!("line {}: {e}", lineno + 1))?;

        let text = tokenizer.try_decode_to_string(&tokens)?;

        writeln!(writer, "{text}")?;
        writer.flush()?;
    }
    Ok(())
}
