//! Abbreviation trie for sentence rules
//!
//! Locale data lists abbreviations by category (without the final period).
//! The sentence rules extract the token in front of a full stop and look it
//! up here before allowing a break. In a case-insensitive trie an entry
//! listed with a capital letter ("Dr", "No") still needs one in the text, so
//! the plain words "dr" and "no" are not abbreviations.

use std::collections::HashMap;

/// Category whose abbreviations never end a sentence
pub const TITLES: &str = "titles";

/// Compact trie node using array indices instead of pointers
#[derive(Debug, Clone, Default)]
struct TrieNode {
    /// Child nodes: char -> node index
    children: HashMap<char, u32>,
    /// Abbreviation category (set on end nodes only)
    category: Option<String>,
    /// Every spelling ending here starts with a capital letter
    capitalized: bool,
}

/// Abbreviation trie
///
/// Nodes live in one contiguous vector; lookups walk a char slice and never
/// allocate.
#[derive(Debug, Clone)]
pub struct Trie {
    nodes: Vec<TrieNode>,
    case_sensitive: bool,
}

impl Trie {
    /// Create an empty trie
    pub fn new(case_sensitive: bool) -> Self {
        Self {
            nodes: vec![TrieNode::default()],
            case_sensitive,
        }
    }

    /// Build from configuration categories
    pub fn from_categories<'a, I>(categories: I, case_sensitive: bool) -> Self
    where
        I: IntoIterator<Item = (&'a String, &'a Vec<String>)>,
    {
        let mut trie = Self::new(case_sensitive);

        for (category, abbreviations) in categories {
            for abbr in abbreviations {
                let abbr = abbr.trim_end_matches('.');
                trie.insert(abbr, category);

                // "U.S.A" also matches at its inner periods
                let parts: Vec<&str> = abbr.split('.').collect();
                for i in 1..parts.len() {
                    let prefix = parts[..i].join(".");
                    if !prefix.is_empty() && trie.find(&prefix.chars().collect::<Vec<_>>()).is_none() {
                        trie.insert(&prefix, &format!("{category}_prefix"));
                    }
                }
            }
        }

        trie
    }

    /// Insert an abbreviation
    pub fn insert(&mut self, abbreviation: &str, category: &str) {
        let capitalized = abbreviation.chars().next().is_some_and(char::is_uppercase);
        let mut current = 0usize;

        for ch in abbreviation.chars() {
            let ch = self.normalize(ch);
            current = match self.nodes[current].children.get(&ch) {
                Some(&child) => child as usize,
                None => {
                    let child = self.nodes.len();
                    self.nodes.push(TrieNode::default());
                    self.nodes[current].children.insert(ch, child as u32);
                    child
                }
            };
        }

        if current != 0 {
            let node = &mut self.nodes[current];
            node.capitalized = match node.category {
                Some(_) => node.capitalized && capitalized,
                None => capitalized,
            };
            node.category = Some(category.to_string());
        }
    }

    /// Category of the abbreviation spelled by `chars`, if any
    pub fn find(&self, chars: &[char]) -> Option<&str> {
        let mut current = 0usize;

        for &ch in chars {
            current = *self.nodes[current].children.get(&self.normalize(ch))? as usize;
        }

        let node = &self.nodes[current];
        if node.capitalized && !chars.first().is_some_and(|ch| ch.is_uppercase()) {
            return None;
        }
        node.category.as_deref()
    }

    /// Whether `chars` spells a known abbreviation
    pub fn contains(&self, chars: &[char]) -> bool {
        self.find(chars).is_some()
    }

    /// Whether the trie holds no abbreviations
    pub fn is_empty(&self) -> bool {
        self.nodes.len() == 1
    }

    fn normalize(&self, ch: char) -> char {
        if self.case_sensitive {
            ch
        } else {
            ch.to_lowercase().next().unwrap_or(ch)
        }
    }
}
