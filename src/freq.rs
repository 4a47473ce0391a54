//! Character weights: corpus counts plus hand-assigned symbol weights.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use log::debug;
use serde::{Deserialize, Serialize};

use crate::error::DayiError;

/// Mapping from character to its ranking weight.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FrequencyTable {
    weights: BTreeMap<char, f64>,
}

impl FrequencyTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a weight unless the character already has one.
    pub fn insert_if_absent(&mut self, character: char, weight: f64) -> bool {
        if self.weights.contains_key(&character) {
            return false;
        }
        self.weights.insert(character, weight);
        true
    }

    /// Record a weight, replacing any earlier one.
    pub fn set(&mut self, character: char, weight: f64) {
        self.weights.insert(character, weight);
    }

    pub fn get(&self, character: char) -> Option<f64> {
        self.weights.get(&character).copied()
    }

    pub fn len(&self) -> usize {
        self.weights.len()
    }

    pub fn is_empty(&self) -> bool {
        self.weights.is_empty()
    }
}

/// Parse one corpus line into `(character, count)`.
///
/// `column` is the 1-based position of the count. Header lines (first token
/// not a single character), short lines and non-integer counts yield `None`.
pub fn parse_corpus_line(line: &str, column: usize) -> Option<(char, i64)> {
    let toks: Vec<&str> = line.split_whitespace().collect();
    let first = toks.first()?;
    let mut chars = first.chars();
    let character = match (chars.next(), chars.next()) {
        (Some(c), None) => c,
        _ => return None,
    };
    let count = toks.get(column.checked_sub(1)?)?.parse::<i64>().ok()?;
    Some((character, count))
}

/// Merge corpus `text` into `table`. Returns the number of lines used.
pub fn load_corpus_text(text: &str, column: usize, table: &mut FrequencyTable) -> usize {
    let mut used = 0;
    for line in text.lines() {
        match parse_corpus_line(line, column) {
            Some((character, count)) => {
                table.insert_if_absent(character, count as f64);
                used += 1;
            }
            None => debug!("skipping corpus line {line:?}"),
        }
    }
    used
}

/// Read the corpus file at `path` into `table`.
pub fn load_corpus(
    path: &Path,
    column: usize,
    table: &mut FrequencyTable,
) -> Result<usize, DayiError> {
    let bytes = fs::read(path).map_err(|e| DayiError::file("reading frequency corpus", path, e))?;
    let text = String::from_utf8_lossy(&bytes);
    Ok(load_corpus_text(&text, column, table))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn header_line_is_skipped() {
        assert_eq!(parse_corpus_line("單字 序號 部首 筆劃 頻次", 4), None);
        assert_eq!(parse_corpus_line("", 4), None);
    }

    #[test]
    fn count_column_is_configurable() {
        let line = "人 1 - 1 500";
        assert_eq!(parse_corpus_line(line, 4), Some(('人', 1)));
        assert_eq!(parse_corpus_line(line, 5), Some(('人', 500)));
        assert_eq!(parse_corpus_line(line, 6), None);
    }

    #[test]
    fn set_overrides_insert_does_not() {
        let mut table = FrequencyTable::new();
        assert!(table.insert_if_absent('人', 10.0));
        assert!(!table.insert_if_absent('人', 20.0));
        assert_eq!(table.get('人'), Some(10.0));
        table.set('人', 0.5);
        assert_eq!(table.get('人'), Some(0.5));
    }
}
