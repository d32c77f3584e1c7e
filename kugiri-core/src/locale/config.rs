//! Locale data schema and validation
//!
//! This module defines the TOML schema for locale tailorings. Every locale
//! is layered over the root data; tailorings only add to it.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::error::{CoreError, Result};
use crate::tables::dictionary::Script;

/// Root locale data
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LocaleData {
    pub metadata: Metadata,
    #[serde(default)]
    pub word: WordTailoring,
    #[serde(default)]
    pub sentence: SentenceTailoring,
    #[serde(default)]
    pub dictionary: Option<DictionaryData>,
}

/// Locale metadata
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Metadata {
    pub code: String,
    pub name: String,
}

/// Word rule tailoring
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WordTailoring {
    /// Extra characters that join letters on both sides (MidLetter)
    #[serde(default)]
    pub mid_letter: Vec<char>,
}

/// Sentence rule tailoring
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SentenceTailoring {
    /// Extra characters that end a sentence like `!` and `?`
    #[serde(default)]
    pub extra_terminators: Vec<char>,
    /// Match abbreviations case-sensitively
    #[serde(default)]
    pub case_sensitive: bool,
    /// Abbreviations by category, without the final period
    #[serde(default)]
    pub abbreviations: HashMap<String, Vec<String>>,
    /// Words that start a new sentence after an abbreviation
    #[serde(default)]
    pub sentence_starters: HashMap<String, Vec<String>>,
}

/// Lexicon for scripts written without spaces
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DictionaryData {
    pub scripts: Vec<Script>,
    pub words: Vec<String>,
}

impl LocaleData {
    /// Parse and validate locale data from TOML
    pub fn from_toml(source: &str) -> Result<Self> {
        let data: LocaleData =
            toml::from_str(source).map_err(|e| CoreError::InvalidLocaleData(e.to_string()))?;
        data.validate()
            .map_err(|e| CoreError::InvalidLocaleData(format!("{}: {e}", data.metadata.code)))?;
        Ok(data)
    }

    /// Locale code from the metadata
    pub fn code(&self) -> &str {
        &self.metadata.code
    }

    /// Validate configuration
    pub(crate) fn validate(&self) -> core::result::Result<(), String> {
        if self.metadata.code.trim().is_empty() {
            return Err("missing locale code".to_string());
        }

        let punctuation = |ch: char| !ch.is_alphanumeric() && !ch.is_whitespace();
        if let Some(ch) = self.word.mid_letter.iter().find(|&&ch| !punctuation(ch)) {
            return Err(format!("mid_letter {ch:?} is not punctuation"));
        }
        if let Some(ch) = self
            .sentence
            .extra_terminators
            .iter()
            .find(|&&ch| !punctuation(ch))
        {
            return Err(format!("terminator {ch:?} is not punctuation"));
        }

        if let Some(dictionary) = &self.dictionary {
            if dictionary.scripts.is_empty() {
                return Err("dictionary lists no scripts".to_string());
            }
            let covered = |ch: char| dictionary.scripts.iter().any(|s| s.contains(ch));
            if let Some(word) = dictionary
                .words
                .iter()
                .find(|w| w.is_empty() || !w.chars().any(covered))
            {
                return Err(format!("dictionary word {word:?} is outside the listed scripts"));
            }
        }

        Ok(())
    }

    /// Layer this locale over `root`
    ///
    /// Lists are concatenated (root first), tables are merged per category,
    /// and the dictionary of this locale wins.
    pub fn inherit(&self, root: &LocaleData) -> LocaleData {
        type Table = HashMap<String, Vec<String>>;

        fn merge(base: &Table, over: &Table) -> Table {
            let mut merged = base.clone();
            for (category, items) in over {
                let entry = merged.entry(category.clone()).or_default();
                for item in items {
                    if !entry.contains(item) {
                        entry.push(item.clone());
                    }
                }
            }
            merged
        }

        fn concat(base: &[char], over: &[char]) -> Vec<char> {
            let mut out = base.to_vec();
            out.extend(over.iter().filter(|ch| !base.contains(*ch)));
            out
        }

        LocaleData {
            metadata: self.metadata.clone(),
            word: WordTailoring {
                mid_letter: concat(&root.word.mid_letter, &self.word.mid_letter),
            },
            sentence: SentenceTailoring {
                extra_terminators: concat(
                    &root.sentence.extra_terminators,
                    &self.sentence.extra_terminators,
                ),
                case_sensitive: self.sentence.case_sensitive,
                abbreviations: merge(&root.sentence.abbreviations, &self.sentence.abbreviations),
                sentence_starters: merge(
                    &root.sentence.sentence_starters,
                    &self.sentence.sentence_starters,
                ),
            },
            dictionary: self.dictionary.clone().or_else(|| root.dictionary.clone()),
        }
    }
}
