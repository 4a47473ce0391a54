use std::path::PathBuf;

use serde::Serialize;

use crate::derive::CodeSet;
use crate::format::OutputFormat;

/// Extension of the source tables picked up by the loader.
pub const TABLE_EXTENSION: &str = "cin";
/// Characters below this code point are treated as non-CJK symbols.
pub const CJK_BOUNDARY: char = '\u{3000}';
/// Width of the left-justified code column in both output formats.
pub const CODE_FIELD_WIDTH: usize = 6;
/// Default 1-based corpus column holding the frequency count.
pub const DEFAULT_FREQ_COLUMN: usize = 4;

/// Runtime configuration for one pipeline run.
#[derive(Debug, Clone, Serialize)]
pub struct Config {
    /// Directory scanned for `[0-9]*.cin` tables.
    pub source_dir: PathBuf,
    /// Staging store path.
    pub store: PathBuf,
    /// Ignore an existing staging store instead of merging into it.
    pub fresh: bool,
    /// Frequency corpus path.
    pub freq: PathBuf,
    /// 1-based column of the frequency count in the corpus.
    pub freq_column: usize,
    /// Output table path.
    pub out: PathBuf,
    pub format: OutputFormat,
    /// Which code table feeds the output.
    pub codes: CodeSet,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            source_dir: PathBuf::from("."),
            store: PathBuf::from("scratch.db"),
            fresh: false,
            freq: PathBuf::from("word_freq.txt"),
            freq_column: DEFAULT_FREQ_COLUMN,
            out: PathBuf::from("output.cin"),
            format: OutputFormat::Gcin,
            codes: CodeSet::Full,
        }
    }
}

impl Config {
    /// Check option values that clap cannot check on its own.
    pub fn validate(&self) -> Result<(), crate::DayiError> {
        if self.freq_column < 2 {
            return Err(crate::DayiError::Config(format!(
                "frequency column must be 2 or greater, got {}",
                self.freq_column
            )));
        }
        Ok(())
    }
}
