//! Built-in symbol corrections applied after the raw tables are loaded.
//!
//! Legacy source tables assign punctuation to assorted codes. The override
//! table below is authoritative: every character it lists loses all of its
//! other codes, every code it lists loses all of its other characters, and
//! then the listed pairs are inserted.

use serde::Serialize;

use crate::mapping::MappingTable;

/// Code → characters, in candidate preference order.
#[rustfmt::skip]
pub const SYMBOL_OVERRIDES: &[(&str, &[char])] = &[
    ("=", &['，', '。', '、', '！', '？', '「', '」', '（', '）', '『', '』', '\u{3000}']),
    ("=,", &['，', '“', '”', '‘', '’', '〝', '〞', '〃']),
    ("=,,", &['《', '︽', '〈', '︿', '∩', '∪', '∫', '∮', '≦', '◢']),
    ("=.", &['。', '、', '﹕', '．', '：', '‥', '…', '‧', '∴', '∵']),
    ("=..", &['》', '︾', '〉', '﹀', '＞', '∟', '∠', '≧', '⊥', '⊿']),
    ("='", &['′']),
    ("=''", &['」']),
    ("=;", &['；']),
    ("=;;", &['：']),
    ("=[", &['「', '（', '『', '【', '［', '〔', '｛', '〖', '〘', '〚', '╭']),
    ("=[[", &['﹁', '︵', '﹃', '︻', '﹈', '︹', '︷', '╰']),
    ("=]", &['」', '）', '』', '】', '］', '〕', '｝', '〗', '〙', '〛', '╯']),
    ("=]]", &['﹂', '︶', '﹄', '︼', '﹇', '︺', '︸', '╮']),
];

/// Counts from one normalization pass.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct NormalizeReport {
    pub removed_by_character: usize,
    pub removed_by_code: usize,
    pub inserted: usize,
}

/// Every character that appears in `overrides`, without duplicates.
pub fn override_characters(overrides: &[(&str, &[char])]) -> Vec<char> {
    let mut chars: Vec<char> = overrides.iter().flat_map(|(_, cc)| cc.iter().copied()).collect();
    chars.sort_unstable();
    chars.dedup();
    chars
}

/// Apply `overrides` to `table`: delete by character, delete by code, insert.
pub fn apply_overrides(table: &mut MappingTable, overrides: &[(&str, &[char])]) -> NormalizeReport {
    let mut report = NormalizeReport::default();

    for character in override_characters(overrides) {
        report.removed_by_character += table.remove_character(character);
    }
    for (code, _) in overrides {
        report.removed_by_code += table.remove_code(code);
    }
    for (code, chars) in overrides {
        for &character in chars.iter() {
            if table.insert_if_absent(code, character) {
                report.inserted += 1;
            }
        }
    }

    report
}

/// Apply the built-in [`SYMBOL_OVERRIDES`].
pub fn normalize(table: &mut MappingTable) -> NormalizeReport {
    apply_overrides(table, SYMBOL_OVERRIDES)
}
