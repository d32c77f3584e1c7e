//! Compiled rule sets
//!
//! A [`RuleSet`] is everything the scanner needs for one boundary class in
//! one locale: the pair table, per-character overrides from the locale
//! tailoring, the abbreviation and sentence-starter tables, and an optional
//! lexicon. It is immutable once compiled and shared between scans.

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use crate::character_window::CharacterWindow;
use crate::error::{CoreError, Result};
use crate::locale::LocaleData;
use crate::properties::{CharProperties, UnicodeProperties};
use crate::tables::abbreviation::Trie;
use crate::tables::dictionary::{Lexicon, Script};
use crate::tables::grapheme::{self, GraphemeProperty};
use crate::tables::line::{self, LineClass};
use crate::tables::sentence::{self, Abbreviations, SentenceProperty};
use crate::tables::sentence_starters::SentenceStarterTable;
use crate::tables::word::{self, WordProperty};
use crate::tables::PairTable;
use crate::types::{BoundaryClass, BreakKind};

/// Immutable classification logic for one (class, locale) pair
pub struct RuleSet {
    class: BoundaryClass,
    locale: String,
    table: PairTable,
    overrides: HashMap<char, u8>,
    abbreviations: Trie,
    starters: SentenceStarterTable,
    lexicon: Option<Lexicon>,
    properties: Arc<dyn CharProperties>,
}

impl RuleSet {
    /// Compile the rules of `class` for a locale
    ///
    /// `data` is expected to be layered over root already.
    pub fn compile(
        class: BoundaryClass,
        data: &LocaleData,
        properties: Arc<dyn CharProperties>,
    ) -> Result<Self> {
        data.validate()
            .map_err(|e| CoreError::InvalidLocaleData(format!("{}: {e}", data.code())))?;

        let table = match class {
            BoundaryClass::Grapheme => PairTable::compile(GraphemeProperty::COUNT, grapheme::pair_rule),
            BoundaryClass::Word => PairTable::compile(WordProperty::COUNT, word::pair_rule),
            BoundaryClass::Sentence => PairTable::compile(SentenceProperty::COUNT, sentence::pair_rule),
            BoundaryClass::Line => PairTable::compile(LineClass::COUNT, line::pair_rule),
        };

        let mut overrides = HashMap::new();
        match class {
            BoundaryClass::Word => {
                for &ch in &data.word.mid_letter {
                    overrides.insert(ch, WordProperty::MidLetter as u8);
                }
            }
            BoundaryClass::Sentence => {
                for &ch in &data.sentence.extra_terminators {
                    overrides.insert(ch, SentenceProperty::STerm as u8);
                }
            }
            BoundaryClass::Grapheme | BoundaryClass::Line => {}
        }

        let (abbreviations, starters) = if class == BoundaryClass::Sentence {
            (
                Trie::from_categories(&data.sentence.abbreviations, data.sentence.case_sensitive),
                SentenceStarterTable::from_categories(&data.sentence.sentence_starters),
            )
        } else {
            (Trie::new(false), SentenceStarterTable::default())
        };

        let lexicon = data.dictionary.as_ref().and_then(|dictionary| {
            let scripts: Vec<Script> = match class {
                BoundaryClass::Word => dictionary.scripts.clone(),
                BoundaryClass::Line => dictionary
                    .scripts
                    .iter()
                    .copied()
                    .filter(|s| s.is_complex_context())
                    .collect(),
                BoundaryClass::Grapheme | BoundaryClass::Sentence => Vec::new(),
            };
            (!scripts.is_empty()).then(|| Lexicon::from_words(scripts, &dictionary.words))
        });

        Ok(Self {
            class,
            locale: data.code().to_string(),
            table,
            overrides,
            abbreviations,
            starters,
            lexicon,
            properties,
        })
    }

    /// Root rules with the default character properties
    pub fn root(class: BoundaryClass) -> Result<Self> {
        Self::compile(class, &crate::locale::root(), Arc::new(UnicodeProperties))
    }

    /// Boundary class these rules implement
    pub fn class(&self) -> BoundaryClass {
        self.class
    }

    /// Locale code the rules were compiled for
    pub fn locale(&self) -> &str {
        &self.locale
    }

    /// Lexicon used inside runs of spaceless scripts, if any
    pub fn lexicon(&self) -> Option<&Lexicon> {
        self.lexicon.as_ref()
    }

    /// Character property source
    pub fn properties(&self) -> &dyn CharProperties {
        self.properties.as_ref()
    }

    /// Boundary property value of `ch` for this class
    pub fn property_of(&self, ch: char) -> u8 {
        if let Some(&prop) = self.overrides.get(&ch) {
            return prop;
        }
        let props = self.properties.as_ref();
        match self.class {
            BoundaryClass::Grapheme => grapheme::classify(ch, props) as u8,
            BoundaryClass::Word => word::classify(ch, props) as u8,
            BoundaryClass::Sentence => sentence::classify(ch, props) as u8,
            BoundaryClass::Line => line::classify(ch, props) as u8,
        }
    }

    /// Break before `pos` according to the pair rules, if any
    ///
    /// `pos` must be strictly inside the window.
    pub(crate) fn break_before(&self, window: &CharacterWindow<'_>, pos: usize) -> Option<BreakKind> {
        let discretionary = |is_break: bool| is_break.then_some(BreakKind::Discretionary);
        match self.class {
            BoundaryClass::Grapheme => discretionary(grapheme::is_break(&self.table, window, pos)),
            BoundaryClass::Word => discretionary(word::is_break(&self.table, window, pos)),
            BoundaryClass::Sentence => {
                let abbreviations = Abbreviations {
                    trie: &self.abbreviations,
                    starters: &self.starters,
                };
                discretionary(sentence::is_break(&self.table, window, pos, abbreviations))
            }
            BoundaryClass::Line => line::break_at(&self.table, window, pos),
        }
    }
}

impl fmt::Debug for RuleSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RuleSet")
            .field("class", &self.class)
            .field("locale", &self.locale)
            .field("overrides", &self.overrides.len())
            .field("lexicon", &self.lexicon.as_ref().map(Lexicon::len))
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::locale;

    fn compile(class: BoundaryClass, code: &str) -> RuleSet {
        let data = locale::embedded(code).unwrap();
        RuleSet::compile(class, &data, Arc::new(UnicodeProperties)).unwrap()
    }

    #[test]
    fn test_overrides() {
        let root = compile(BoundaryClass::Word, "root");
        let sv = compile(BoundaryClass::Word, "sv");
        assert_eq!(root.property_of(':'), WordProperty::Other as u8);
        assert_eq!(sv.property_of(':'), WordProperty::MidLetter as u8);

        let el = compile(BoundaryClass::Sentence, "el");
        assert_eq!(el.property_of(';'), SentenceProperty::STerm as u8);
    }

    #[test]
    fn test_lexicon_selection() {
        assert!(compile(BoundaryClass::Word, "th").lexicon().is_some());
        assert!(compile(BoundaryClass::Line, "th").lexicon().is_some());
        assert!(compile(BoundaryClass::Sentence, "th").lexicon().is_none());
        assert!(compile(BoundaryClass::Word, "zh").lexicon().is_some());
        // Han is not complex-context; lines already break between ideographs
        assert!(compile(BoundaryClass::Line, "zh").lexicon().is_none());
        assert!(compile(BoundaryClass::Word, "root").lexicon().is_none());
    }

    #[test]
    fn test_metadata() {
        let rules = RuleSet::root(BoundaryClass::Grapheme).unwrap();
        assert_eq!(rules.class(), BoundaryClass::Grapheme);
        assert_eq!(rules.locale(), "root");
        assert!(format!("{rules:?}").contains("Grapheme"));
    }

    #[test]
    fn test_rejects_invalid_data() {
        let mut data = LocaleData::default();
        data.metadata.code = "xx".to_string();
        data.word.mid_letter.push('a');
        let result = RuleSet::compile(BoundaryClass::Word, &data, Arc::new(UnicodeProperties));
        assert!(matches!(result, Err(CoreError::InvalidLocaleData(_))));
    }
}
