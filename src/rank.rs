//! Joins weights onto the mapping and orders the result table.

use std::cmp::Ordering;

use serde::Serialize;

use crate::config::CJK_BOUNDARY;
use crate::freq::FrequencyTable;
use crate::mapping::{cmp_codes, Entry, MappingTable};

/// Weight given to non-CJK symbols that the corpus does not cover.
pub const SYMBOL_SENTINEL: f64 = -1.0;

/// Punctuation in the order it should be offered when it shares a code.
///
/// The ideographic space and `〗〘〙〚〛` are not listed; they keep weight 0 and
/// so sort ahead of every listed symbol except the first.
#[rustfmt::skip]
pub const SYMBOL_ORDER: &[char] = &[
    '，', '。', '、', '！', '？', '“', '”', '‘', '’', '〝', '〞', '〃',
    '《', '》', '︽', '︾', '：', '﹕', '．', '‧', '；', '′',
    '「', '」', '（', '）', '『', '』', '【', '】', '［', '］', '〔', '〕', '｛', '｝', '〈', '〉', '〖',
    '﹁', '﹂', '︵', '︶', '﹃', '﹄', '︻', '︼', '﹇', '﹈', '︹', '︺', '︷', '︸', '︿', '﹀',
];

/// One row of the result table.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Ranked {
    pub code: String,
    pub character: char,
    pub weight: f64,
}

/// Weight of the `index`-th of `len` ordered symbols.
pub fn symbol_weight(index: usize, len: usize) -> f64 {
    let delta = 1.0 / (1.0 + len as f64);
    1.0 - index as f64 * (delta + 1.0)
}

/// Give every character below [`CJK_BOUNDARY`] without a weight the sentinel.
/// Returns how many characters received it.
pub fn fill_symbol_sentinels(table: &MappingTable, freq: &mut FrequencyTable) -> usize {
    let mut filled = 0;
    for entry in table.iter().filter(|e| e.character < CJK_BOUNDARY) {
        if freq.insert_if_absent(entry.character, SYMBOL_SENTINEL) {
            filled += 1;
        }
    }
    filled
}

/// Overwrite the weights of `order` with evenly spaced descending values.
pub fn assign_symbol_weights(order: &[char], freq: &mut FrequencyTable) {
    for (i, &c) in order.iter().enumerate() {
        freq.set(c, symbol_weight(i, order.len()));
    }
}

/// Ordering of result rows: code ascending, weight descending, then
/// character so that equal weights still produce stable output.
pub fn cmp_ranked(a: &Ranked, b: &Ranked) -> Ordering {
    cmp_codes(&a.code, &b.code)
        .then_with(|| b.weight.total_cmp(&a.weight))
        .then_with(|| a.character.cmp(&b.character))
}

/// Attach weights to `entries` (0 when unknown) and sort them.
pub fn rank<'a, I>(entries: I, freq: &FrequencyTable) -> Vec<Ranked>
where
    I: IntoIterator<Item = &'a Entry>,
{
    let mut rows: Vec<Ranked> = entries
        .into_iter()
        .map(|e| Ranked {
            code: e.code.clone(),
            character: e.character,
            weight: freq.get(e.character).unwrap_or(0.0),
        })
        .collect();
    rows.sort_by(cmp_ranked);
    rows
}
