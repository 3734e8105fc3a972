use mojitalk_l10n::{LocaleCode, TranslationKey, TranslationTable, serialize};
use proptest::prelude::*;
use std::collections::BTreeMap;

fn key_strategy() -> impl Strategy<Value = String> {
    proptest::string::string_regex("[a-z][a-zA-Z0-9]{0,8}\\.[a-z][a-zA-Z0-9]{0,8}")
        .expect("valid key regex")
}

fn locale_strategy() -> impl Strategy<Value = String> {
    prop::sample::select(vec!["zh-Hans", "en", "ja", "ko", "fr"]).prop_map(str::to_string)
}

// Any text, including empty, multi-line, quotes and non-ASCII.
fn value_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        Just(String::new()),
        proptest::string::string_regex("[A-Za-z0-9 \"\\\\\n\t\\.,!\\?]{1,30}").expect("valid value regex"),
        "\\PC{0,20}",
    ]
}

fn table_strategy() -> impl Strategy<Value = BTreeMap<String, BTreeMap<String, String>>> {
    prop::collection::btree_map(
        key_strategy(),
        prop::collection::btree_map(locale_strategy(), value_strategy(), 0..5),
        0..12,
    )
}

fn build_table(rows: &BTreeMap<String, BTreeMap<String, String>>) -> TranslationTable {
    let mut table = TranslationTable::new();
    for (key, texts) in rows {
        table.insert_entry(TranslationKey::new(key.clone()), Default::default());
        for (locale, text) in texts {
            table.insert(
                TranslationKey::new(key.clone()),
                LocaleCode::new(locale.clone()),
                text.clone(),
            );
        }
    }
    table
}

proptest! {
    #[test]
    fn prop_one_record_per_key(rows in table_strategy()) {
        let document = serialize(&build_table(&rows));
        prop_assert_eq!(document.strings.len(), rows.len());
        for key in rows.keys() {
            prop_assert!(document.strings.contains_key(key));
        }
    }

    #[test]
    fn prop_values_survive_serialization(rows in table_strategy()) {
        let rendered = serialize(&build_table(&rows)).to_pretty_string().unwrap();
        let value: serde_json::Value = serde_json::from_str(&rendered).unwrap();

        for (key, texts) in &rows {
            let localizations = value["strings"][key]["localizations"].as_object().unwrap();
            prop_assert_eq!(localizations.len(), texts.len());
            prop_assert_eq!(&value["strings"][key]["extractionState"], "manual");
            for (locale, text) in texts {
                let unit = &localizations[locale]["stringUnit"];
                prop_assert_eq!(&unit["state"], "translated");
                prop_assert_eq!(unit["value"].as_str().unwrap(), text.as_str());
            }
        }
    }

    #[test]
    fn prop_header_is_fixed(rows in table_strategy()) {
        let document = serialize(&build_table(&rows));
        prop_assert_eq!(document.source_language, "zh-Hans");
        prop_assert_eq!(document.version, "1.0");
    }

    #[test]
    fn prop_rendering_is_deterministic(rows in table_strategy()) {
        let first = serialize(&build_table(&rows)).to_pretty_string().unwrap();
        let second = serialize(&build_table(&rows)).to_pretty_string().unwrap();
        prop_assert_eq!(first, second);
    }
}
