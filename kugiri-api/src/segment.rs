//! Segment types handed to callers

use std::fmt;

use kugiri_core::{BreakKind, NativeIndex};

/// A substring between two consecutive boundaries
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Segment<'t> {
    /// Start offset in scalar values
    pub start: NativeIndex,
    /// End offset in scalar values (exclusive)
    pub end: NativeIndex,
    /// The substring
    pub text: &'t str,
    /// Whether the segment holds a letter, digit or ideograph; only set for
    /// word segments
    pub word_like: bool,
}

impl<'t> Segment<'t> {
    /// The substring
    pub fn as_str(&self) -> &'t str {
        self.text
    }

    /// Length in scalar values
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    /// Whether the segment is empty (never true for yielded segments)
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Whether the segment is whitespace only
    pub fn is_whitespace(&self) -> bool {
        self.text.chars().all(char::is_whitespace)
    }
}

impl fmt::Display for Segment<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.text)
    }
}

impl AsRef<str> for Segment<'_> {
    fn as_ref(&self) -> &str {
        self.text
    }
}

impl From<Segment<'_>> for String {
    fn from(segment: Segment<'_>) -> Self {
        segment.text.to_string()
    }
}

/// A line-break opportunity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LineBreak {
    /// Offset in scalar values
    pub offset: NativeIndex,
    /// Whether the break is forced
    pub kind: BreakKind,
}

impl LineBreak {
    /// Whether the break is forced (line feed, paragraph separator, end of text)
    pub fn is_mandatory(&self) -> bool {
        self.kind == BreakKind::Mandatory
    }
}

/// Which word segments are yielded
///
/// Word segmentation produces a segment for every run between boundaries,
/// punctuation and spaces included. The policy filters what the caller
/// sees; boundaries themselves are never affected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum WordPolicy {
    /// Every segment; concatenating them reproduces the text
    #[default]
    All,
    /// Every segment except whitespace-only ones
    SkipWhitespace,
    /// Only segments holding a letter, digit or ideograph
    WordsOnly,
}

impl WordPolicy {
    pub(crate) fn keeps(self, segment: &Segment<'_>) -> bool {
        match self {
            WordPolicy::All => true,
            WordPolicy::SkipWhitespace => !segment.is_whitespace(),
            WordPolicy::WordsOnly => segment.word_like,
        }
    }
}

impl fmt::Display for WordPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WordPolicy::All => write!(f, "All"),
            WordPolicy::SkipWhitespace => write!(f, "SkipWhitespace"),
            WordPolicy::WordsOnly => write!(f, "WordsOnly"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn segment(text: &str, word_like: bool) -> Segment<'_> {
        Segment {
            start: 0,
            end: text.chars().count(),
            text,
            word_like,
        }
    }

    #[test]
    fn test_policies() {
        let word = segment("Hello", true);
        let comma = segment(",", false);
        let space = segment(" ", false);

        assert!(WordPolicy::All.keeps(&space));
        assert!(!WordPolicy::SkipWhitespace.keeps(&space));
        assert!(WordPolicy::SkipWhitespace.keeps(&comma));
        assert!(!WordPolicy::WordsOnly.keeps(&comma));
        assert!(WordPolicy::WordsOnly.keeps(&word));
    }

    #[test]
    fn test_segment_accessors() {
        let s = segment("สวัสดี", true);
        assert_eq!(s.len(), 6);
        assert_eq!(s.to_string(), "สวัสดี");
        assert_eq!(String::from(s), "สวัสดี");
        assert!(!s.is_whitespace());
    }
}
