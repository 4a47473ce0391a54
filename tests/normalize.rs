use dayi::normalize::{apply_overrides, override_characters};
use dayi::{normalize, MappingTable, SYMBOL_OVERRIDES};

#[test]
fn legacy_symbol_code_is_replaced() {
    let mut table = MappingTable::new();
    table.insert_if_absent("X", '，');
    table.insert_if_absent("A", '人');

    normalize(&mut table);

    assert!(!table.contains("X", '，'));
    assert!(table.contains("=", '，'));
    assert!(table.contains("=,", '，'));
    assert!(table.contains("A", '人'));
}

#[test]
fn override_codes_lose_other_characters() {
    let mut table = MappingTable::new();
    table.insert_if_absent("=", '★');
    table.insert_if_absent("=;", '☆');

    let report = normalize(&mut table);

    assert_eq!(report.removed_by_code, 2);
    assert!(!table.contains("=", '★'));
    assert!(!table.contains("=;", '☆'));
}

#[test]
fn override_characters_only_come_from_overrides() {
    let mut table = MappingTable::new();
    for (i, c) in override_characters(SYMBOL_OVERRIDES).into_iter().enumerate() {
        table.insert_if_absent(&format!("Q{i}"), c);
    }
    normalize(&mut table);

    for entry in table.iter() {
        let listed = SYMBOL_OVERRIDES
            .iter()
            .any(|(code, chars)| *code == entry.code && chars.contains(&entry.character));
        assert!(listed, "{entry:?} survived normalization");
    }
}

#[test]
fn character_delete_runs_before_code_delete() {
    let overrides: &[(&str, &[char])] = &[("K", &['x']), ("L", &['y'])];
    let mut table = MappingTable::new();
    table.insert_if_absent("K", 'y');
    table.insert_if_absent("M", 'x');
    table.insert_if_absent("M", 'z');

    let report = apply_overrides(&mut table, overrides);

    assert_eq!(report.removed_by_character, 2);
    assert_eq!(report.removed_by_code, 0);
    assert_eq!(report.inserted, 2);
    assert!(table.contains("M", 'z'));
    assert!(table.contains("K", 'x'));
    assert!(table.contains("L", 'y'));
    assert_eq!(table.len(), 3);
}

#[test]
fn normalizing_twice_changes_nothing() {
    let mut table = MappingTable::new();
    table.insert_if_absent("A", '人');
    normalize(&mut table);
    let once = table.clone();
    normalize(&mut table);
    assert_eq!(table, once);
}
