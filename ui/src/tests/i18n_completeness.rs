use std::collections::{BTreeMap, BTreeSet};
use std::fs;
use std::path::{Path, PathBuf};

use crate::core::registry::tech_icons;

/// Name of the canonical FTL file per locale.
const FTL_FILENAME: &str = "showcase-ui.ftl";

/// Root (relative to crate) for i18n assets.
const I18N_DIR: &str = "i18n";

/// Message ids defined in a Fluent file. Any `<identifier> =` line counts;
/// comments, terms (`-` prefix) and continuation lines are skipped.
fn parse_ftl_keys(content: &str) -> BTreeSet<String> {
    content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#') && !line.starts_with('-'))
        .filter_map(|line| line.split_once('='))
        .map(|(id, _)| id.trim())
        .filter(|id| !id.is_empty() && id.chars().all(valid_key_char))
        .map(str::to_string)
        .collect()
}

fn valid_key_char(c: char) -> bool {
    matches!(c, 'a'..='z' | '0'..='9' | '-')
}

/// Keys the crate asks for: literal `t!("...")` calls under `src/` plus the
/// experience ids derived from the icon registry at runtime.
fn referenced_keys(src_root: &Path) -> BTreeSet<String> {
    let mut found: BTreeSet<String> = tech_icons().iter().map(|icon| icon.message_id()).collect();
    let mut stack = vec![src_root.to_path_buf()];

    while let Some(path) = stack.pop() {
        if path.is_dir() {
            if let Ok(read_dir) = fs::read_dir(&path) {
                stack.extend(read_dir.flatten().map(|entry| entry.path()));
            }
            continue;
        }
        if path.extension().and_then(|s| s.to_str()) != Some("rs") {
            continue;
        }
        let Ok(content) = fs::read_to_string(&path) else {
            continue;
        };

        for (_, rest) in content.match_indices("t!(\"").map(|(i, m)| content.split_at(i + m.len())) {
            if let Some(end) = rest.find('"') {
                let key = &rest[..end];
                if !key.is_empty() && key.chars().all(valid_key_char) {
                    found.insert(key.to_string());
                }
            }
        }
    }

    found
}

fn locale_dirs(i18n_root: &Path) -> Vec<String> {
    let mut dirs: Vec<String> = fs::read_dir(i18n_root)
        .map(|read_dir| {
            read_dir
                .flatten()
                .filter(|entry| entry.path().is_dir())
                .filter_map(|entry| entry.file_name().to_str().map(str::to_string))
                .filter(|name| name.contains('-'))
                .collect()
        })
        .unwrap_or_default();
    dirs.sort();
    dirs
}

#[test]
fn i18n_completeness() {
    let crate_root = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    let i18n_root = crate_root.join(I18N_DIR);

    let fallback_file = i18n_root.join("en-US").join(FTL_FILENAME);
    let fallback_content =
        fs::read_to_string(&fallback_file).expect("Failed to read fallback FTL file");
    let fallback_keys = parse_ftl_keys(&fallback_content);
    assert!(
        !fallback_keys.is_empty(),
        "No message keys parsed from fallback FTL: {fallback_file:?}"
    );

    let referenced = referenced_keys(&crate_root.join("src"));
    let missing_in_fallback: Vec<_> = referenced.difference(&fallback_keys).cloned().collect();
    assert!(
        missing_in_fallback.is_empty(),
        "Referenced translation keys missing in fallback ({}):\n{}",
        missing_in_fallback.len(),
        missing_in_fallback.join("\n")
    );

    let mut per_locale_missing: BTreeMap<String, Vec<String>> = BTreeMap::new();
    for locale in locale_dirs(&i18n_root) {
        let path = i18n_root.join(&locale).join(FTL_FILENAME);
        let content = fs::read_to_string(&path)
            .unwrap_or_else(|_| panic!("Locale folder {locale:?} missing expected file {path:?}"));
        let keys = parse_ftl_keys(&content);
        let missing: Vec<_> = fallback_keys.difference(&keys).cloned().collect();
        if !missing.is_empty() {
            per_locale_missing.insert(locale, missing);
        }
    }

    if !per_locale_missing.is_empty() {
        let mut report = String::from("Locales with missing translations relative to fallback:\n");
        for (locale, missing) in &per_locale_missing {
            report.push_str(&format!("  {locale} ({} missing)\n", missing.len()));
            for key in missing {
                report.push_str(&format!("    {key}\n"));
            }
        }
        panic!("{report}");
    }

    let unused: Vec<_> = fallback_keys.difference(&referenced).cloned().collect();
    assert!(
        unused.is_empty(),
        "Fallback keys never referenced by the crate: {}",
        unused.join(", ")
    );
}

#[test]
fn parser_skips_comments_and_terms() {
    let src = "## group\n# note = ignored\n-brand = Showcase\nhero-subtitle = Dev\n";
    let keys = parse_ftl_keys(src);
    assert_eq!(keys.into_iter().collect::<Vec<_>>(), ["hero-subtitle"]);
}
