//! FTL hygiene: no message defined twice, and every translation uses the
//! same `{ $variable }` placeables as its en-US message so
//! `t!("popup-text", brand = ...)` interpolates everywhere. Key coverage per
//! locale is checked by the crate's `i18n_completeness` unit test.
//!
//! New locale: add `ui/i18n/<locale>/sitekit-ui.ftl` and register it below.

use std::collections::{BTreeMap, BTreeSet};

const EN_US: &str = include_str!("../i18n/en-US/sitekit-ui.ftl");

const LOCALES: &[(&str, &str)] = &[
    ("es-ES", include_str!("../i18n/es-ES/sitekit-ui.ftl")),
    ("fr-FR", include_str!("../i18n/fr-FR/sitekit-ui.ftl")),
];

/// Message id -> set of variables referenced in its value.
fn messages(locale: &str, src: &str) -> BTreeMap<String, BTreeSet<String>> {
    let mut out = BTreeMap::new();
    for (number, line) in src.lines().enumerate() {
        if line.starts_with([' ', '\t', '#', '.', '-']) || line.trim().is_empty() {
            continue;
        }
        let Some((id, value)) = line.split_once('=') else {
            continue;
        };
        let id = id.trim();
        if id.is_empty() || id.contains(char::is_whitespace) {
            continue;
        }
        let previous = out.insert(id.to_string(), variables(value));
        assert!(
            previous.is_none(),
            "{locale}: `{id}` defined twice (line {})",
            number + 1
        );
    }
    out
}

fn variables(value: &str) -> BTreeSet<String> {
    value
        .split('$')
        .skip(1)
        .filter_map(|rest| {
            let name: String = rest
                .chars()
                .take_while(|c| c.is_ascii_alphanumeric() || *c == '_' || *c == '-')
                .collect();
            (!name.is_empty()).then_some(name)
        })
        .collect()
}

#[test]
fn no_locale_defines_a_message_twice() {
    messages("en-US", EN_US);
    for (locale, src) in LOCALES {
        messages(locale, src);
    }
}

#[test]
fn popup_text_takes_the_brand() {
    let fallback = messages("en-US", EN_US);
    assert_eq!(fallback["popup-text"], BTreeSet::from(["brand".to_string()]));
}

#[test]
fn translations_use_the_fallback_placeables() {
    let fallback = messages("en-US", EN_US);
    let mut failures = Vec::new();

    for (locale, src) in LOCALES {
        for (id, theirs) in messages(locale, src) {
            if let Some(vars) = fallback.get(&id) {
                if &theirs != vars {
                    failures.push(format!(
                        "{locale}: `{id}` uses {theirs:?}, fallback uses {vars:?}"
                    ));
                }
            }
        }
    }

    assert!(
        failures.is_empty(),
        "Placeable mismatch:\n  {}",
        failures.join("\n  ")
    );
}
