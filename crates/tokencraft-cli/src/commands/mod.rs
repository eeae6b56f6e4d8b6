mod cat;
mod compare;
mod train;
mod vocab;

/// Subcommands for tokcraft
#[derive(clap::Subcommand, Debug)]
pub enum Commands {
    /// Act as a streaming tokenizer.
    Cat(cat::CatArgs),

    /// Compare character and subword token counts for an input.
    Compare(compare::CompareArgs),

    /// Train a vocabulary and save it.
    Train(train::TrainArgs),

    /// List a tokenizer's vocabulary.
    Vocab(vocab::VocabArgs),
}

impl Commands {
    /// Run the subcommand.
    pub fn run(&self) -> Result<(), Box<dyn std::error::Error>> {
        match self {
            Commands::Cat(cmd) => cmd.run(),
            Commands::Compare(cmd) => cmd.run(),
            Commands::Train(cmd) => cmd.run(),
            Commands::Vocab(cmd) => cmd.run(),
        }
    }
}
