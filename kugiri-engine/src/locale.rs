//! Locale tags
//!
//! Tags are canonicalized once, at the edge: separators become `-`, the
//! language subtag is lowercased, a four-letter script subtag is titlecased
//! and a region subtag is uppercased. Everything downstream compares
//! canonical strings.

use std::fmt;
use std::str::FromStr;
use std::sync::OnceLock;

use regex::Regex;

use crate::error::{EngineError, Result};

/// Syntax accepted for a locale tag
static TAG_SYNTAX: OnceLock<Option<Regex>> = OnceLock::new();

fn tag_syntax() -> Option<&'static Regex> {
    TAG_SYNTAX
        .get_or_init(|| Regex::new(r"^(?i)[a-z]{2,3}(?:[-_][a-z0-9]{1,8})*$").ok())
        .as_ref()
}

/// A validated, canonical locale tag such as `th`, `zh-Hant-TW` or `sv-FI`
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct LocaleTag(String);

impl LocaleTag {
    /// Validate and canonicalize a raw tag
    pub fn canonicalize(raw: &str) -> Result<Self> {
        let raw = raw.trim();
        let syntax =
            tag_syntax().ok_or_else(|| EngineError::Configuration("locale syntax unavailable".into()))?;
        if !syntax.is_match(raw) {
            return Err(EngineError::Configuration(format!(
                "malformed locale tag '{raw}'"
            )));
        }

        let mut canonical = String::with_capacity(raw.len());
        for (i, subtag) in raw.split(['-', '_']).enumerate() {
            if i > 0 {
                canonical.push('-');
            }
            let is_alpha = subtag.chars().all(|c| c.is_ascii_alphabetic());
            match subtag.len() {
                _ if i == 0 => canonical.push_str(&subtag.to_ascii_lowercase()),
                4 if is_alpha => {
                    let (head, tail) = subtag.split_at(1);
                    canonical.push_str(&head.to_ascii_uppercase());
                    canonical.push_str(&tail.to_ascii_lowercase());
                }
                2 if is_alpha => canonical.push_str(&subtag.to_ascii_uppercase()),
                _ => canonical.push_str(&subtag.to_ascii_lowercase()),
            }
        }
        Ok(Self(canonical))
    }

    /// Canonical tag text
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Primary language subtag
    pub fn language(&self) -> &str {
        self.0.split('-').next().unwrap_or(&self.0)
    }

    /// Lookup candidates, most specific first (`zh-Hant-TW`, `zh-Hant`, `zh`)
    pub fn fallbacks(&self) -> impl Iterator<Item = &str> {
        let tag = self.0.as_str();
        std::iter::once(tag).chain(
            tag.char_indices()
                .filter(|&(_, c)| c == '-')
                .map(move |(i, _)| &tag[..i])
                .collect::<Vec<_>>()
                .into_iter()
                .rev(),
        )
    }
}

impl fmt::Display for LocaleTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for LocaleTag {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self> {
        Self::canonicalize(s)
    }
}

/// Locale requested by a caller
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub enum LocaleRef {
    /// Root rules
    #[default]
    Default,
    /// A specific locale
    Tag(LocaleTag),
}

impl LocaleRef {
    /// Parse an optional raw tag; `None`, `""` and `"root"` select root rules
    pub fn parse(raw: Option<&str>) -> Result<Self> {
        match raw.map(str::trim) {
            None | Some("") => Ok(LocaleRef::Default),
            Some(raw) if raw.eq_ignore_ascii_case(kugiri_core::locale::ROOT) => Ok(LocaleRef::Default),
            Some(raw) => LocaleTag::canonicalize(raw).map(LocaleRef::Tag),
        }
    }

    /// The tag, if any
    pub fn tag(&self) -> Option<&LocaleTag> {
        match self {
            LocaleRef::Default => None,
            LocaleRef::Tag(tag) => Some(tag),
        }
    }

    /// Code shown to users; root for [`LocaleRef::Default`]
    pub fn as_str(&self) -> &str {
        match self {
            LocaleRef::Default => kugiri_core::locale::ROOT,
            LocaleRef::Tag(tag) => tag.as_str(),
        }
    }
}

impl fmt::Display for LocaleRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<LocaleTag> for LocaleRef {
    fn from(tag: LocaleTag) -> Self {
        LocaleRef::Tag(tag)
    }
}

impl FromStr for LocaleRef {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(Some(s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_canonicalize() {
        assert_eq!(LocaleTag::canonicalize("TH").unwrap().as_str(), "th");
        assert_eq!(LocaleTag::canonicalize("sv_fi").unwrap().as_str(), "sv-FI");
        assert_eq!(
            LocaleTag::canonicalize("zh-hant-tw").unwrap().as_str(),
            "zh-Hant-TW"
        );
        assert_eq!(LocaleTag::canonicalize(" en-US ").unwrap().as_str(), "en-US");
    }

    #[test]
    fn test_malformed_tags() {
        for raw in ["", "e", "english!", "en--US", "-en", "123", "en-toolongsubtag"] {
            assert!(
                matches!(LocaleTag::canonicalize(raw), Err(EngineError::Configuration(_))),
                "{raw:?} should be rejected"
            );
        }
    }

    #[test]
    fn test_fallbacks() {
        let tag = LocaleTag::canonicalize("zh-Hant-TW").unwrap();
        let chain: Vec<&str> = tag.fallbacks().collect();
        assert_eq!(chain, vec!["zh-Hant-TW", "zh-Hant", "zh"]);
        assert_eq!(tag.language(), "zh");

        let bare = LocaleTag::canonicalize("th").unwrap();
        assert_eq!(bare.fallbacks().collect::<Vec<_>>(), vec!["th"]);
    }

    #[test]
    fn test_locale_ref() {
        assert_eq!(LocaleRef::parse(None).unwrap(), LocaleRef::Default);
        assert_eq!(LocaleRef::parse(Some("root")).unwrap(), LocaleRef::Default);
        assert_eq!(LocaleRef::parse(Some("")).unwrap(), LocaleRef::Default);
        let th: LocaleRef = "th".parse().unwrap();
        assert_eq!(th.as_str(), "th");
        assert_eq!(LocaleRef::Default.to_string(), "root");
        assert!(LocaleRef::parse(Some("not a tag")).is_err());
    }
}
