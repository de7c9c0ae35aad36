use std::collections::{BTreeSet, HashSet};

/// Translation sanity check over the embedded FTL sources.
///
/// - no locale defines a message id twice (Fluent keeps the last one silently)
/// - every locale carries every fallback (en-US) id
///
/// A new locale has to be registered in `LOCALES` below.
const EN_US: &str = include_str!("../i18n/en-US/showcase-ui.ftl");
const LOCALES: &[(&str, &str)] = &[
    ("es-ES", include_str!("../i18n/es-ES/showcase-ui.ftl")),
    ("pt-PT", include_str!("../i18n/pt-PT/showcase-ui.ftl")),
];

/// Message ids in definition order (duplicates kept).
fn message_ids(src: &str) -> Vec<&str> {
    src.lines()
        .filter(|line| !line.starts_with(char::is_whitespace))
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#') && !line.starts_with('-'))
        .filter_map(|line| line.split_once('=').map(|(id, _)| id.trim()))
        .filter(|id| !id.is_empty() && !id.contains(char::is_whitespace))
        .collect()
}

fn assert_no_dup_keys(src: &str, locale: &str) {
    let mut seen = HashSet::new();
    let dups: BTreeSet<_> = message_ids(src)
        .into_iter()
        .filter(|id| !seen.insert(*id))
        .collect();
    assert!(
        dups.is_empty(),
        "Duplicate key definitions in {locale}: {}",
        dups.into_iter().collect::<Vec<_>>().join(", ")
    );
}

#[test]
fn fallback_has_keys_and_no_duplicates() {
    assert!(!message_ids(EN_US).is_empty(), "Fallback (en-US) contains no keys.");
    assert_no_dup_keys(EN_US, "en-US");
}

#[test]
fn all_locales_have_all_fallback_keys() {
    let fallback: BTreeSet<_> = message_ids(EN_US).into_iter().collect();
    let mut failures = Vec::new();

    for (locale, src) in LOCALES {
        assert_no_dup_keys(src, locale);
        let keys: BTreeSet<_> = message_ids(src).into_iter().collect();
        let missing: Vec<_> = fallback.difference(&keys).copied().collect();
        if !missing.is_empty() {
            failures.push(format!(
                "Locale {locale} is missing {} key(s):\n  {}",
                missing.len(),
                missing.join("\n  ")
            ));
        }
    }

    assert!(
        failures.is_empty(),
        "Translation completeness check failed:\n\n{}\n\nHint: copy the missing keys from en-US, then translate.",
        failures.join("\n\n")
    );
}
