//! Sentence starters for boundary decisions after abbreviations
//!
//! Sentence starters are words commonly found at the beginning of sentences.
//! When an abbreviation is followed by a sentence starter, the period ends
//! the sentence after all.

use std::collections::HashSet;

/// Sentence starters lookup table
#[derive(Debug, Clone, Default)]
pub struct SentenceStarterTable {
    /// Set of sentence starters for O(1) lookup
    starters: HashSet<String>,
    /// Shortest starter in chars
    min_length: usize,
    /// Longest starter in chars
    max_length: usize,
}

impl SentenceStarterTable {
    /// Create from categorized word lists
    pub fn from_categories<'a, I>(categories: I) -> Self
    where
        I: IntoIterator<Item = (&'a String, &'a Vec<String>)>,
    {
        let mut table = Self::default();
        for (_category, words) in categories {
            for word in words {
                table.insert(word);
            }
        }
        table
    }

    fn insert(&mut self, word: &str) {
        let len = word.chars().count();
        if len == 0 {
            return;
        }
        self.min_length = if self.starters.is_empty() {
            len
        } else {
            self.min_length.min(len)
        };
        self.max_length = self.max_length.max(len);
        self.starters.insert(word.to_string());
    }

    /// Check if a word is a sentence starter
    pub fn is_sentence_starter(&self, word: &str) -> bool {
        let len = word.chars().count();
        if len < self.min_length || len > self.max_length {
            return false;
        }
        self.starters.contains(word)
    }

    /// Check whether the word beginning at `start` is a sentence starter
    ///
    /// The word is the run of alphabetic characters at `start`.
    pub fn starts_sentence(&self, chars: &[char], start: usize) -> bool {
        if self.starters.is_empty() {
            return false;
        }
        let word: String = chars
            .iter()
            .skip(start)
            .take(self.max_length + 1)
            .take_while(|ch| ch.is_alphabetic())
            .collect();
        !word.is_empty() && self.is_sentence_starter(&word)
    }

    /// Number of starters in the table
    pub fn len(&self) -> usize {
        self.starters.len()
    }

    /// Whether the table is empty
    pub fn is_empty(&self) -> bool {
        self.starters.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn table() -> SentenceStarterTable {
        let mut categories = HashMap::new();
        categories.insert(
            "pronouns".to_string(),
            vec!["He".to_string(), "She".to_string(), "They".to_string()],
        );
        categories.insert("articles".to_string(), vec!["The".to_string()]);
        SentenceStarterTable::from_categories(&categories)
    }

    #[test]
    fn test_lookup() {
        let table = table();
        assert_eq!(table.len(), 4);
        assert!(table.is_sentence_starter("He"));
        assert!(table.is_sentence_starter("The"));
        assert!(!table.is_sentence_starter("he"));
        assert!(!table.is_sentence_starter("Smith"));
    }

    #[test]
    fn test_starts_sentence() {
        let table = table();
        let chars: Vec<char> = "U.S. They left. Theodore".chars().collect();
        assert!(table.starts_sentence(&chars, 5));
        assert!(!table.starts_sentence(&chars, 16));
        assert!(!table.starts_sentence(&chars, 4));
    }

    #[test]
    fn test_empty_table() {
        let table = SentenceStarterTable::default();
        assert!(table.is_empty());
        assert!(!table.starts_sentence(&['H', 'e'], 0));
    }
}
