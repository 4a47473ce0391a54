//! The mapping table: the set of `(code, character)` pairs that make up the
//! finished input method.
//!
//! Codes are stored uppercased so that `"ab"` and `"AB"` collapse into one
//! entry. Ordering between codes for output purposes is case-insensitive with
//! ASCII letters folded to lowercase, see [`cmp_codes`].

use std::cmp::Ordering;
use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

/// A single `(code, character)` association.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Entry {
    pub code: String,
    pub character: char,
}

impl Entry {
    /// Build an entry, canonicalising the code to uppercase.
    pub fn new(code: &str, character: char) -> Self {
        Self {
            code: canonical_code(code),
            character,
        }
    }
}

/// Uppercase form used as the storage key for a code.
pub fn canonical_code(code: &str) -> String {
    code.to_uppercase()
}

/// Compare two codes the way the result table is ordered.
///
/// ASCII letters fold to lowercase before a bytewise comparison, so the
/// punctuation keys `[`, `\`, `]` and `` ` `` sort ahead of the letter keys.
pub fn cmp_codes(a: &str, b: &str) -> Ordering {
    let fold = |s: &str| s.bytes().map(|b| b.to_ascii_lowercase()).collect::<Vec<u8>>();
    fold(a).cmp(&fold(b))
}

/// Set of mapping entries keyed by `(code, character)`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MappingTable {
    entries: BTreeSet<Entry>,
}

impl MappingTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a pair unless it is already present. Returns `true` on insert.
    pub fn insert_if_absent(&mut self, code: &str, character: char) -> bool {
        self.entries.insert(Entry::new(code, character))
    }

    /// Remove every entry that maps to `character`, whatever its code.
    pub fn remove_character(&mut self, character: char) -> usize {
        let before = self.entries.len();
        self.entries.retain(|e| e.character != character);
        before - self.entries.len()
    }

    /// Remove every entry for `code` (case-insensitive).
    pub fn remove_code(&mut self, code: &str) -> usize {
        let code = canonical_code(code);
        let before = self.entries.len();
        self.entries.retain(|e| e.code != code);
        before - self.entries.len()
    }

    pub fn contains(&self, code: &str, character: char) -> bool {
        self.entries.contains(&Entry::new(code, character))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Entry> {
        self.entries.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn case_of_code_does_not_duplicate() {
        let mut table = MappingTable::new();
        assert!(table.insert_if_absent("AB", '人'));
        assert!(!table.insert_if_absent("ab", '人'));
        assert_eq!(table.len(), 1);
        assert!(table.contains("aB", '人'));
    }

    #[test]
    fn brackets_sort_before_letters() {
        assert_eq!(cmp_codes("[", "A"), Ordering::Less);
        assert_eq!(cmp_codes("Z", "a"), Ordering::Greater);
        assert_eq!(cmp_codes("ab", "AB"), Ordering::Equal);
        assert_eq!(cmp_codes("A", "AB"), Ordering::Less);
    }

    #[test]
    fn removals_report_counts() {
        let mut table = MappingTable::new();
        table.insert_if_absent("X", '，');
        table.insert_if_absent("Y", '，');
        table.insert_if_absent("X", '。');
        assert_eq!(table.remove_character('，'), 2);
        assert_eq!(table.remove_code("x"), 1);
        assert!(table.is_empty());
    }
}
