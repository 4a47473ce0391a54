//! Discovery and parsing of the numbered `.cin` source tables.

use std::fs;
use std::path::{Path, PathBuf};

use log::{debug, warn};
use serde::Serialize;

use crate::config::TABLE_EXTENSION;
use crate::error::DayiError;
use crate::mapping::{canonical_code, MappingTable};

/// A line whose character field was not exactly one character.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Rejected {
    pub code: String,
    pub field: String,
}

impl Rejected {
    /// Length of the offending field in characters.
    pub fn field_len(&self) -> usize {
        self.field.chars().count()
    }
}

/// Result of parsing a single source line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Line {
    /// Comment, directive, or a line without a separator.
    Skip,
    Accepted { code: String, character: char },
    Rejected(Rejected),
}

/// Outcome of a load pass over all source files.
#[derive(Debug, Clone, Default, Serialize)]
pub struct LoadReport {
    pub files: Vec<PathBuf>,
    /// Accepted pairs parsed from the files, duplicates included.
    pub accepted: usize,
    /// Pairs that were new to the table.
    pub inserted: usize,
    pub rejected: Vec<Rejected>,
    pub table_size: usize,
}

/// Parse one line of a `.cin` table.
pub fn parse_line(line: &str) -> Line {
    if line.starts_with('#') || line.starts_with('%') {
        return Line::Skip;
    }
    let trimmed = line.trim();
    let Some(split) = trimmed.find(char::is_whitespace) else {
        return Line::Skip;
    };
    let (code, rest) = trimmed.split_at(split);
    let field = rest.split_whitespace().next().unwrap_or("");
    let code = canonical_code(code);

    let mut chars = field.chars();
    match (chars.next(), chars.next()) {
        (Some(character), None) => Line::Accepted { code, character },
        _ => Line::Rejected(Rejected {
            code,
            field: field.to_string(),
        }),
    }
}

/// True for names like `10main.cin`: a leading digit and the table extension.
pub fn is_source_table(name: &str) -> bool {
    let starts_with_digit = name.chars().next().is_some_and(|c| c.is_ascii_digit());
    let has_extension = Path::new(name)
        .extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e == TABLE_EXTENSION);
    starts_with_digit && has_extension
}

/// List the source tables in `dir`, sorted by file name.
pub fn discover(dir: &Path) -> Result<Vec<PathBuf>, DayiError> {
    let read_dir = fs::read_dir(dir).map_err(|e| DayiError::file("reading directory", dir, e))?;
    let mut files = Vec::new();
    for entry in read_dir {
        let entry = entry.map_err(|e| DayiError::file("reading directory", dir, e))?;
        let name = entry.file_name();
        let Some(name) = name.to_str() else {
            continue;
        };
        if is_source_table(name) && entry.path().is_file() {
            files.push(entry.path());
        }
    }
    files.sort();
    Ok(files)
}

/// Parse every line of `text`, merging accepted pairs into `table`.
pub fn load_text(text: &str, table: &mut MappingTable, report: &mut LoadReport) {
    for line in text.lines() {
        match parse_line(line) {
            Line::Skip => {}
            Line::Accepted { code, character } => {
                report.accepted += 1;
                if table.insert_if_absent(&code, character) {
                    report.inserted += 1;
                }
            }
            Line::Rejected(rejected) => report.rejected.push(rejected),
        }
    }
}

/// Load every source table in `dir` into `table`.
pub fn load_dir(dir: &Path, table: &mut MappingTable) -> Result<LoadReport, DayiError> {
    let files = discover(dir)?;
    if files.is_empty() {
        warn!("no [0-9]*.{} files found in {}", TABLE_EXTENSION, dir.display());
    }

    let mut report = LoadReport::default();
    for path in &files {
        let bytes = fs::read(path).map_err(|e| DayiError::file("reading source table", path, e))?;
        let text = match String::from_utf8(bytes) {
            Ok(text) => text,
            Err(e) => {
                warn!("{} is not valid UTF-8, decoding lossily", path.display());
                String::from_utf8_lossy(e.as_bytes()).into_owned()
            }
        };
        let before = report.accepted;
        load_text(&text, table, &mut report);
        debug!("{}: {} pairs", path.display(), report.accepted - before);
    }

    report.files = files;
    report.table_size = table.len();
    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn comment_and_directive_lines_skip() {
        assert_eq!(parse_line("# comment"), Line::Skip);
        assert_eq!(parse_line("%chardef begin"), Line::Skip);
        assert_eq!(parse_line("abc"), Line::Skip);
        assert_eq!(parse_line(""), Line::Skip);
    }

    #[test]
    fn trailing_commentary_is_ignored() {
        assert_eq!(
            parse_line("ab 人 note"),
            Line::Accepted {
                code: "AB".into(),
                character: '人'
            }
        );
    }

    #[test]
    fn multi_character_field_rejected() {
        let Line::Rejected(r) = parse_line("a\t人們") else {
            panic!("expected rejection");
        };
        assert_eq!(r.code, "A");
        assert_eq!(r.field_len(), 2);
    }

    #[test]
    fn source_table_names() {
        assert!(is_source_table("10a.cin"));
        assert!(!is_source_table("a10.cin"));
        assert!(!is_source_table("10a.txt"));
        assert!(!is_source_table("output.cin"));
    }
}
