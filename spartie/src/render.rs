//! Source decoding and token output.

use std::io::Write;
use std::path::Path;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use spartiec_lex::Token;

use crate::error::{Result, SpartieError};

/// How tokens are written to stdout.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// One `[line N] KIND lexeme` line per token
    #[default]
    Text,
    /// A JSON array of `{kind, lexeme, line}` objects
    Json,
}

/// Character encoding of the source file.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
pub enum Encoding {
    /// Strict UTF-8; invalid input is an error
    #[default]
    #[serde(rename = "utf-8")]
    #[value(name = "utf-8")]
    Utf8,
    /// ISO-8859-1; every byte maps to the code point of the same value
    #[serde(rename = "latin-1")]
    #[value(name = "latin-1")]
    Latin1,
}

/// Decodes the raw bytes of `path`.
///
/// A leading UTF-8 byte order mark is dropped.
pub fn decode(bytes: Vec<u8>, encoding: Encoding, path: &Path) -> Result<String> {
    match encoding {
        Encoding::Utf8 => {
            let mut text = String::from_utf8(bytes).map_err(|source| SpartieError::Decode {
                path: path.to_path_buf(),
                source,
            })?;
            if text.starts_with('\u{feff}') {
                text.replace_range(..'\u{feff}'.len_utf8(), "");
            }
            Ok(text)
        },
        Encoding::Latin1 => Ok(bytes.into_iter().map(char::from).collect()),
    }
}

/// Writes `tokens` to `out` in `format`.
pub fn write_tokens(out: &mut impl Write, tokens: &[Token], format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Text => {
            for token in tokens {
                writeln!(out, "{}", token)?;
            }
        },
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut *out, tokens)?;
            writeln!(out)?;
        },
    }
    out.flush()?;
    Ok(())
}
