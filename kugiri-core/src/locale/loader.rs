//! Embedded locale data loader
//!
//! The built-in locales are compiled into the binary and parsed once, on
//! first access. Every entry is already layered over root.

use std::collections::HashMap;
use std::sync::{Arc, OnceLock};

use crate::locale::config::LocaleData;

/// Code of the root locale
pub const ROOT: &str = "root";

const SOURCES: &[(&str, &str)] = &[
    (ROOT, include_str!("../../configs/locales/root.toml")),
    ("en", include_str!("../../configs/locales/en.toml")),
    ("de", include_str!("../../configs/locales/de.toml")),
    ("fr", include_str!("../../configs/locales/fr.toml")),
    ("el", include_str!("../../configs/locales/el.toml")),
    ("sv", include_str!("../../configs/locales/sv.toml")),
    ("fi", include_str!("../../configs/locales/fi.toml")),
    ("th", include_str!("../../configs/locales/th.toml")),
    ("lo", include_str!("../../configs/locales/lo.toml")),
    ("km", include_str!("../../configs/locales/km.toml")),
    ("my", include_str!("../../configs/locales/my.toml")),
    ("zh", include_str!("../../configs/locales/zh.toml")),
    ("ja", include_str!("../../configs/locales/ja.toml")),
];

/// Embedded locale configurations
static EMBEDDED: OnceLock<HashMap<&'static str, Arc<LocaleData>>> = OnceLock::new();

fn embedded_table() -> &'static HashMap<&'static str, Arc<LocaleData>> {
    EMBEDDED.get_or_init(|| {
        let root = match LocaleData::from_toml(SOURCES[0].1) {
            Ok(root) => root,
            Err(e) => {
                log::error!("Failed to load root locale data: {e}");
                LocaleData::default()
            }
        };

        let mut map = HashMap::new();
        for &(code, source) in &SOURCES[1..] {
            match LocaleData::from_toml(source) {
                Ok(data) => {
                    map.insert(code, Arc::new(data.inherit(&root)));
                }
                Err(e) => {
                    log::warn!("Failed to load {code} locale data: {e}");
                }
            }
        }
        map.insert(ROOT, Arc::new(root));

        map
    })
}

/// Built-in locale data by code, layered over root
pub fn embedded(code: &str) -> Option<Arc<LocaleData>> {
    embedded_table().get(code).cloned()
}

/// Root locale data
pub fn root() -> Arc<LocaleData> {
    embedded(ROOT).unwrap_or_default()
}

/// Codes of all built-in locales, sorted
pub fn embedded_codes() -> Vec<&'static str> {
    let mut codes: Vec<&'static str> = embedded_table().keys().copied().collect();
    codes.sort_unstable();
    codes
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_embedded_locales_load() {
        let codes = embedded_codes();
        assert_eq!(codes.len(), SOURCES.len());
        for (code, _) in SOURCES {
            let data = embedded(code).unwrap();
            assert_eq!(data.code(), *code);
        }
    }

    #[test]
    fn test_root_carries_titles() {
        let root = root();
        let titles = &root.sentence.abbreviations["titles"];
        assert!(titles.iter().any(|t| t == "Dr"));
        assert!(root.dictionary.is_none());
    }

    #[test]
    fn test_locales_inherit_root() {
        let en = embedded("en").unwrap();
        assert!(en.sentence.abbreviations["titles"].iter().any(|t| t == "Dr"));

        let sv = embedded("sv").unwrap();
        assert!(sv.word.mid_letter.contains(&':'));

        let el = embedded("el").unwrap();
        assert!(el.sentence.extra_terminators.contains(&';'));

        let th = embedded("th").unwrap();
        assert!(th.dictionary.as_ref().is_some_and(|d| !d.words.is_empty()));
    }

    #[test]
    fn test_unknown_code() {
        assert!(embedded("tlh").is_none());
    }
}
