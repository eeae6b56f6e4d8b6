/// The direction of a streaming tokenizer run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenizerMode {
    /// Text lines to token id lines.
    Encode,

    /// Token id lines to text lines.
    Decode,
}

/// Tokenizer mode argument group; exactly one flag is required.
#[derive(clap::Args, Debug)]
#[group(required = true, multiple = false)]
pub struct TokenizerModeArgs {
    /// Encode from text to tokens.
    #[arg(long, action = clap::ArgAction::SetTrue)]
    encode: bool,

    /// Decode from tokens to text.
    #[arg(long, action = clap::ArgAction::SetTrue)]
    decode: bool,
}

impl TokenizerModeArgs {
    /// Get the tokenizer mode.
    pub fn mode(&self) -> TokenizerMode {
        // clap enforces exactly one of the flags.
        if self.decode {
            TokenizerMode::Decode
        } else {
            TokenizerMode::Encode
        }
    }
}
