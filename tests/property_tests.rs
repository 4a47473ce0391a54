use std::cmp::Ordering;
use std::collections::HashSet;

use dayi::mapping::cmp_codes;
use dayi::{rank, shorten_to_three, shorten_to_two, symbol_weight, FrequencyTable, MappingTable};
use proptest::prelude::*;

const KEYS: &[char] = &[
    'A', 'B', 'a', 'b', 'Z', 'z', '0', '9', '=', ',', '.', '/', ';', '\'', '[', ']', '\\', '`', '-',
];

fn code() -> impl Strategy<Value = String> {
    prop::collection::vec(prop::sample::select(KEYS), 1..=4)
        .prop_map(|keys| keys.into_iter().collect())
}

fn character() -> impl Strategy<Value = char> {
    prop::sample::select(vec!['人', '手', '大', '，', '。', '★', '七'])
}

proptest! {
    #[test]
    fn table_pairs_are_unique(pairs in prop::collection::vec((code(), character()), 0..40)) {
        let mut table = MappingTable::new();
        for (c, ch) in &pairs {
            table.insert_if_absent(c, *ch);
        }
        let distinct: HashSet<(String, char)> = pairs
            .iter()
            .map(|(c, ch)| (c.to_uppercase(), *ch))
            .collect();
        prop_assert_eq!(table.len(), distinct.len());
    }

    #[test]
    fn ranked_rows_are_ordered(
        pairs in prop::collection::vec((code(), character()), 0..40),
        weights in prop::collection::vec((character(), -5i64..5), 0..10),
    ) {
        let mut table = MappingTable::new();
        for (c, ch) in &pairs {
            table.insert_if_absent(c, *ch);
        }
        let mut freq = FrequencyTable::new();
        for (ch, w) in weights {
            freq.insert_if_absent(ch, w as f64);
        }
        let rows = rank(table.iter(), &freq);
        prop_assert_eq!(rows.len(), table.len());
        for pair in rows.windows(2) {
            match cmp_codes(&pair[0].code, &pair[1].code) {
                Ordering::Less => {}
                Ordering::Equal => prop_assert!(pair[0].weight >= pair[1].weight),
                Ordering::Greater => prop_assert!(false, "codes out of order: {:?}", pair),
            }
        }
    }

    #[test]
    fn shortened_codes_never_grow(c in code()) {
        let three = shorten_to_three(&c);
        let two = shorten_to_two(&three);
        prop_assert!(three.chars().count() <= 3 || c.chars().count() > 4);
        prop_assert!(two.chars().count() <= c.chars().count());
        prop_assert_eq!(two.chars().next(), c.chars().next());
        prop_assert_eq!(two.chars().last(), c.chars().last());
    }

    #[test]
    fn symbol_weights_descend((n, i) in (2usize..200).prop_flat_map(|n| (Just(n), 0..n - 1))) {
        prop_assert!(symbol_weight(i, n) > symbol_weight(i + 1, n));
        prop_assert!(symbol_weight(i, n) <= 1.0);
    }
}
