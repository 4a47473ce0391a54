//! Shorter-code variants derived from the longest code of each character.
//!
//! The primary (dayi4) table keeps one code per character: the longest one.
//! The dayi3 table drops the third key of four-key codes, and the dayi2 table
//! drops the middle key of the resulting three-key codes. None of these are
//! merged back into the mapping table.

use std::cmp::Ordering;
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::mapping::{cmp_codes, Entry, MappingTable};

/// Which code table feeds the ranker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CodeSet {
    /// The normalized mapping table, every code kept.
    #[default]
    Full,
    /// Longest code per character.
    Dayi4,
    /// Longest code shortened to at most three keys.
    Dayi3,
    /// Longest code shortened to at most two keys.
    Dayi2,
}

impl fmt::Display for CodeSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CodeSet::Full => write!(f, "full"),
            CodeSet::Dayi4 => write!(f, "dayi4"),
            CodeSet::Dayi3 => write!(f, "dayi3"),
            CodeSet::Dayi2 => write!(f, "dayi2"),
        }
    }
}

impl FromStr for CodeSet {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "full" => Ok(CodeSet::Full),
            "dayi4" => Ok(CodeSet::Dayi4),
            "dayi3" => Ok(CodeSet::Dayi3),
            "dayi2" => Ok(CodeSet::Dayi2),
            other => Err(format!(
                "unknown code set '{other}', expected full, dayi4, dayi3 or dayi2"
            )),
        }
    }
}

/// Drop the third key of a four-key code.
pub fn shorten_to_three(code: &str) -> String {
    let keys: Vec<char> = code.chars().collect();
    if keys.len() == 4 {
        [keys[0], keys[1], keys[3]].iter().collect()
    } else {
        code.to_string()
    }
}

/// Drop the middle key of a three-key code.
pub fn shorten_to_two(code: &str) -> String {
    let keys: Vec<char> = code.chars().collect();
    if keys.len() == 3 {
        [keys[0], keys[2]].iter().collect()
    } else {
        code.to_string()
    }
}

/// Per-character derived codes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DerivedCodes {
    pub character: char,
    pub dayi4: String,
    pub dayi3: String,
    pub dayi2: String,
}

/// The longest code of every character in `table`.
///
/// When a character has several codes of the maximum length the smallest one
/// in [`cmp_codes`] order wins.
pub fn primary_codes(table: &MappingTable) -> BTreeMap<char, String> {
    let mut primary: BTreeMap<char, String> = BTreeMap::new();
    for entry in table.iter() {
        primary
            .entry(entry.character)
            .and_modify(|best| {
                let longer = entry.code.chars().count().cmp(&best.chars().count());
                if longer == Ordering::Greater
                    || (longer == Ordering::Equal && cmp_codes(&entry.code, best) == Ordering::Less)
                {
                    *best = entry.code.clone();
                }
            })
            .or_insert_with(|| entry.code.clone());
    }
    primary
}

/// dayi4, dayi3 and dayi2 codes for every character, ordered by character.
pub fn derive_all(table: &MappingTable) -> Vec<DerivedCodes> {
    primary_codes(table)
        .into_iter()
        .map(|(character, dayi4)| {
            let dayi3 = shorten_to_three(&dayi4);
            let dayi2 = shorten_to_two(&dayi3);
            DerivedCodes {
                character,
                dayi4,
                dayi3,
                dayi2,
            }
        })
        .collect()
}

/// Entries of the requested code set.
pub fn entries_for(table: &MappingTable, codes: CodeSet) -> Vec<Entry> {
    if codes == CodeSet::Full {
        return table.iter().cloned().collect();
    }
    derive_all(table)
        .into_iter()
        .map(|d| {
            let code = match codes {
                CodeSet::Dayi4 | CodeSet::Full => d.dayi4,
                CodeSet::Dayi3 => d.dayi3,
                CodeSet::Dayi2 => d.dayi2,
            };
            Entry::new(&code, d.character)
        })
        .collect()
}
