//! Dictionary segmentation for scripts written without spaces
//!
//! Thai, Lao, Khmer and Myanmar text (and Chinese or Japanese ideographic
//! runs) carries no word separators, so pair rules alone cannot find word
//! boundaries inside them. Runs of such characters are split by greedy
//! longest match against a locale lexicon. A match may only end where a
//! grapheme cluster ends and never right after a preposed vowel or a
//! syllable joiner; characters no entry covers are coalesced until the next
//! position where an entry starts.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::properties::CharProperties;
use crate::tables::ranges::{
    self, HAN, HIRAGANA, KATAKANA, KHMER, LAO, MYANMAR, PREPOSED_VOWEL, SPACING_LETTER,
    SYLLABLE_JOINER, THAI,
};

/// Break positions inside one run, relative to the run start
pub type RunBreaks = SmallVec<[usize; 16]>;

/// Scripts a lexicon can cover
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Script {
    Thai,
    Lao,
    Khmer,
    Myanmar,
    Han,
    Hiragana,
    Katakana,
}

impl Script {
    /// Whether `ch` belongs to this script
    pub fn contains(self, ch: char) -> bool {
        let table = match self {
            Script::Thai => THAI,
            Script::Lao => LAO,
            Script::Khmer => KHMER,
            Script::Myanmar => MYANMAR,
            Script::Han => HAN,
            Script::Hiragana => HIRAGANA,
            Script::Katakana => KATAKANA,
        };
        ranges::contains(table, ch)
    }

    /// Scripts whose line breaking is complex-context (class SA)
    pub fn is_complex_context(self) -> bool {
        matches!(self, Script::Thai | Script::Lao | Script::Khmer | Script::Myanmar)
    }
}

#[derive(Debug, Clone, Default)]
struct LexiconNode {
    children: HashMap<char, u32>,
    terminal: bool,
}

/// Word list stored as a trie
#[derive(Debug, Clone)]
pub struct Lexicon {
    nodes: Vec<LexiconNode>,
    scripts: Vec<Script>,
    words: usize,
}

impl Lexicon {
    /// Create an empty lexicon covering `scripts`
    pub fn new(scripts: Vec<Script>) -> Self {
        Self {
            nodes: vec![LexiconNode::default()],
            scripts,
            words: 0,
        }
    }

    /// Build a lexicon from a word list
    pub fn from_words<I, S>(scripts: Vec<Script>, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut lexicon = Self::new(scripts);
        for word in words {
            lexicon.insert(word.as_ref());
        }
        lexicon
    }

    /// Add a word
    pub fn insert(&mut self, word: &str) {
        let mut current = 0usize;
        for ch in word.chars() {
            current = match self.nodes[current].children.get(&ch) {
                Some(&child) => child as usize,
                None => {
                    let child = self.nodes.len();
                    self.nodes.push(LexiconNode::default());
                    self.nodes[current].children.insert(ch, child as u32);
                    child
                }
            };
        }
        if current != 0 && !self.nodes[current].terminal {
            self.nodes[current].terminal = true;
            self.words += 1;
        }
    }

    /// Number of words
    pub fn len(&self) -> usize {
        self.words
    }

    /// Whether the lexicon holds no words
    pub fn is_empty(&self) -> bool {
        self.words == 0
    }

    /// Scripts this lexicon segments
    pub fn scripts(&self) -> &[Script] {
        &self.scripts
    }

    /// Whether `ch` belongs to a run this lexicon segments
    pub fn covers(&self, ch: char) -> bool {
        self.scripts.iter().any(|script| script.contains(ch))
    }

    /// Whether `word` is an entry
    pub fn contains(&self, word: &str) -> bool {
        let chars: Vec<char> = word.chars().collect();
        self.longest_match(&chars, 0, |_| true) == Some(chars.len()) && !chars.is_empty()
    }

    /// Split a run into words
    ///
    /// Returns break positions strictly inside the run.
    pub fn segment(&self, run: &[char], props: &dyn CharProperties) -> RunBreaks {
        let safe = |pos: usize| is_safe_break(run, pos, props);
        let next_safe = |pos: usize| (pos + 1..=run.len()).find(|&p| safe(p)).unwrap_or(run.len());

        let mut breaks = RunBreaks::new();
        let mut pos = 0;
        while pos < run.len() {
            let end = match self.longest_match(run, pos, safe) {
                Some(end) => end,
                None => {
                    let mut end = next_safe(pos);
                    while end < run.len() && self.longest_match(run, end, safe).is_none() {
                        end = next_safe(end);
                    }
                    end
                }
            };
            if end < run.len() {
                breaks.push(end);
            }
            pos = end;
        }
        breaks
    }

    /// End of the longest entry starting at `start` that ends on a safe position
    fn longest_match(&self, run: &[char], start: usize, safe: impl Fn(usize) -> bool) -> Option<usize> {
        let mut node = 0usize;
        let mut best = None;
        for (i, ch) in run.iter().enumerate().skip(start) {
            match self.nodes[node].children.get(ch) {
                Some(&child) => node = child as usize,
                None => break,
            }
            if self.nodes[node].terminal && safe(i + 1) {
                best = Some(i + 1);
            }
        }
        best
    }
}

fn is_safe_break(run: &[char], pos: usize, props: &dyn CharProperties) -> bool {
    if pos == 0 || pos >= run.len() {
        return true;
    }
    let (before, after) = (run[pos - 1], run[pos]);
    !props.is_mark(after)
        && !ranges::contains(SPACING_LETTER, after)
        && !ranges::contains(SYLLABLE_JOINER, before)
        && !ranges::contains(PREPOSED_VOWEL, before)
}
