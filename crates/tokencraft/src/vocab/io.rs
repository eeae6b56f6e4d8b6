//! # Base64 Vocabulary IO
//!
//! Lines are:
//! ```terminaloutput
//! {BASE64 TOKEN} {ID}
//! ```
//!
//! Written in id order. On load, ids must be dense over `0..N`
//! (in any line order) and entries must be unique.

use std::{
    fs::File,
    io::{BufRead, BufReader, BufWriter, Write},
    path::Path,
};

use base64::{Engine, prelude::BASE64_STANDARD};
use compact_str::CompactString;

use crate::{
    errors::{TCResult, TokencraftError},
    types::{TokenType, token_to_u64},
    vocab::TokenVocab,
};

/// Load a [`TokenVocab`] from a base64 vocab file.
///
/// # Arguments
/// * `path` - the path to the vocabulary file.
pub fn load_base64_vocab_path<T, P>(path: P) -> TCResult<TokenVocab<T>>
where
    T: TokenType,
    P: AsRef<Path>,
{
    let reader = BufReader::new(File::open(path)?);
    read_base64_vocab(reader)
}

/// Read a [`TokenVocab`] from a base64 vocab line reader.
///
/// Blank lines are skipped.
///
/// # Arguments
/// * `reader` - the line reader.
pub fn read_base64_vocab<T, R>(reader: R) -> TCResult<TokenVocab<T>>
where
    T: TokenType,
    R: BufRead,
{
    let mut entries: Vec<(u64, CompactString)> = Vec::new();

    for (lineno, line) in reader.lines().enumerate() {
        let line = line?;
        let s = line.trim_end();
        if s.is_empty() {
            continue;
        }

        let Some((span, id)) = s.split_once(' ') else {
            return Err(TokencraftError::Parse(format!(
                "line {}: expected \"{{BASE64 TOKEN}} {{ID}}\"",
                lineno + 1
            )));
        };

        let span = BASE64_STANDARD
            .decode(span)
            .map_err(|e| TokencraftError::Parse(format!("line {}: {e}", lineno + 1)))?;
        let span = String::from_utf8(span)
            .map_err(|e| TokencraftError::Parse(format!("line {}: {e}", lineno + 1)))?;

        let id: u64 = id.parse().map_err(|e: core::num::ParseIntError| {
            TokencraftError::Parse(format!("line {}: {e}", lineno + 1))
        })?;

        entries.push((id, span.into()));
    }

    entries.sort_by_key(|(id, _)| *id);
    for (idx, (id, span)) in entries.iter().enumerate() {
        if *id != idx as u64 {
            return Err(TokencraftError::VocabConflict(format!(
                "vocab ids are not dense: expected {idx}, found {id} for {span:?}"
            )));
        }
    }

    TokenVocab::from_tokens(entries.into_iter().map(|(_, span)| span))
}

/// Save a [`TokenVocab`] to a base64 vocab file.
///
/// # Arguments
/// * `vocab` - the vocabulary to save.
/// * `path` - the path to save the vocabulary to.
pub fn save_base64_vocab_path<T: TokenType, P: AsRef<Path>>(
    vocab: &TokenVocab<T>,
    path: P,
) -> TCResult<()> {
    let mut writer = BufWriter::new(File::create(path)?);
    write_base64_vocab(vocab, &mut writer)?;
    writer.flush()?;
    Ok(())
}

/// Write a [`TokenVocab`] to a [`Write`] writer.
///
/// # Arguments
/// * `vocab` - the vocabulary to save.
/// * `writer` - the writer to target.
pub fn write_base64_vocab<T, W>(
    vocab: &TokenVocab<T>,
    writer: &mut W,
) -> TCResult<()>
where
    T: TokenType,
    W: Write,
{
    for (token, span) in vocab.iter() {
        writeln!(
            writer,
            "{} {}",
            BASE64_STANDARD.encode(span.as_bytes()),
            token_to_u64(token)
        )?;
    }
    Ok(())
}
