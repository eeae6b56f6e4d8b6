mod commands;
mod input_output;
mod logging;
mod tokenizer_mode;
mod tokenizer_selector;

use clap::Parser;
use commands::Commands;

/// tokcraft: train, inspect and run character and subword tokenizers.
#[derive(clap::Parser, Debug)]
#[command(version, about)]
pub struct Args {
    /// Subcommand to run.
    #[clap(subcommand)]
    pub command: Commands,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    args.command.run()
}
