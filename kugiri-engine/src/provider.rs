//! Rule-set providers
//!
//! A provider turns a (class, locale) request into a freshly compiled
//! [`RuleSet`]. It never caches; [`RuleSetCache`](crate::RuleSetCache) sits
//! in front of it.

use std::collections::HashMap;
use std::fmt;
use std::fs;
use std::path::Path;
use std::sync::Arc;
use std::time::Instant;

use kugiri_core::locale::{self, LocaleData};
use kugiri_core::{BoundaryClass, CharProperties, RuleSet, UnicodeProperties};

use crate::error::{EngineError, Result};
use crate::locale::LocaleRef;

/// Source of compiled rule sets
pub trait RuleProvider: Send + Sync + fmt::Debug {
    /// Compile the rules for `class` in `locale`
    ///
    /// Unknown but well-formed locales must fall back to root rules rather
    /// than fail.
    fn build(&self, class: BoundaryClass, locale: &LocaleRef) -> Result<RuleSet>;
}

/// Provider backed by the embedded locale data, plus registered extras
#[derive(Debug, Clone)]
pub struct EmbeddedRuleProvider {
    extra: HashMap<String, Arc<LocaleData>>,
    properties: Arc<dyn CharProperties>,
}

impl Default for EmbeddedRuleProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl EmbeddedRuleProvider {
    /// Provider over the built-in locales
    pub fn new() -> Self {
        Self {
            extra: HashMap::new(),
            properties: Arc::new(UnicodeProperties),
        }
    }

    /// Use a different character property source
    pub fn with_properties(mut self, properties: Arc<dyn CharProperties>) -> Self {
        self.properties = properties;
        self
    }

    /// Register locale data from TOML, layered over root
    ///
    /// Registered data takes precedence over a built-in locale of the same
    /// code.
    pub fn with_locale_toml(mut self, code: &str, source: &str) -> Result<Self> {
        let tag = LocaleRef::parse(Some(code))?;
        let data = LocaleData::from_toml(source)
            .map_err(|e| EngineError::Configuration(format!("locale '{code}': {e}")))?;
        self.extra
            .insert(tag.as_str().to_string(), Arc::new(data.inherit(&locale::root())));
        Ok(self)
    }

    /// Register locale data from a TOML file
    pub fn with_locale_file<P: AsRef<Path>>(self, code: &str, path: P) -> Result<Self> {
        let path = path.as_ref();
        let source = fs::read_to_string(path)
            .map_err(|e| EngineError::Io(format!("failed to read locale file {path:?}: {e}")))?;
        self.with_locale_toml(code, &source)
    }

    /// Codes of every locale this provider knows, sorted
    pub fn locales(&self) -> Vec<String> {
        let mut codes: Vec<String> = locale::embedded_codes()
            .into_iter()
            .map(String::from)
            .chain(self.extra.keys().cloned())
            .collect();
        codes.sort_unstable();
        codes.dedup();
        codes
    }

    /// Locale data for a request: full tag, then shorter prefixes, then root
    pub fn resolve(&self, locale: &LocaleRef) -> Arc<LocaleData> {
        let Some(tag) = locale.tag() else {
            return self.root();
        };
        for candidate in tag.fallbacks() {
            if let Some(data) = self.extra.get(candidate) {
                return Arc::clone(data);
            }
            if let Some(data) = locale::embedded(candidate) {
                return data;
            }
        }
        log::warn!("No rules for locale '{tag}', falling back to root rules");
        self.root()
    }

    fn root(&self) -> Arc<LocaleData> {
        self.extra
            .get(locale::ROOT)
            .cloned()
            .unwrap_or_else(locale::root)
    }
}

impl RuleProvider for EmbeddedRuleProvider {
    fn build(&self, class: BoundaryClass, locale: &LocaleRef) -> Result<RuleSet> {
        let start = Instant::now();
        let data = self.resolve(locale);
        let rules = RuleSet::compile(class, &data, Arc::clone(&self.properties))?;
        log::debug!(
            "Compiled {class} rules for '{locale}' from '{}' in {:?}",
            data.code(),
            start.elapsed()
        );
        Ok(rules)
    }
}
