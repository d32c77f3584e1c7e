//! Sentence boundary rules (SB3 - SB11)
//!
//! Almost every pair is a non-break (SB998); only pairs following a
//! terminator sequence `SATerm Close* Sp*` need context. On top of SB11 a
//! full stop after a known abbreviation does not end the sentence unless the
//! next word is a sentence starter.

use crate::character_window::CharacterWindow;
use crate::properties::{CharProperties, GeneralCategory};
use crate::tables::abbreviation::{Trie, TITLES};
use crate::tables::ranges::{self, EMOJI_MODIFIER, FORMAT};
use crate::tables::sentence_starters::SentenceStarterTable;
use crate::tables::{Pair, PairTable};

#[allow(clippy::upper_case_acronyms)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub(crate) enum SentenceProperty {
    Other,
    CR,
    LF,
    Extend,
    Sep,
    Format,
    Sp,
    Lower,
    Upper,
    OLetter,
    Numeric,
    ATerm,
    SContinue,
    STerm,
    Close,
}

impl SentenceProperty {
    pub(crate) const COUNT: usize = 15;

    const ALL: [SentenceProperty; Self::COUNT] = [
        Self::Other,
        Self::CR,
        Self::LF,
        Self::Extend,
        Self::Sep,
        Self::Format,
        Self::Sp,
        Self::Lower,
        Self::Upper,
        Self::OLetter,
        Self::Numeric,
        Self::ATerm,
        Self::SContinue,
        Self::STerm,
        Self::Close,
    ];

    fn from_u8(value: u8) -> Self {
        Self::ALL.get(value as usize).copied().unwrap_or(Self::Other)
    }

    fn is_para_sep(self) -> bool {
        matches!(self, Self::CR | Self::LF | Self::Sep)
    }

    fn is_terminator(self) -> bool {
        matches!(self, Self::ATerm | Self::STerm)
    }
}

/// SB5 ignorables
fn is_ignorable(prop: u8) -> bool {
    prop == SentenceProperty::Extend as u8 || prop == SentenceProperty::Format as u8
}

pub(crate) fn classify(ch: char, props: &dyn CharProperties) -> SentenceProperty {
    use SentenceProperty::*;

    if ch.is_ascii() {
        return match ch {
            '\r' => CR,
            '\n' => LF,
            ' ' | '\t' | '\x0B' | '\x0C' => Sp,
            'a'..='z' => Lower,
            'A'..='Z' => Upper,
            '0'..='9' => Numeric,
            '.' => ATerm,
            '!' | '?' => STerm,
            ',' | '-' | ':' => SContinue,
            '"' | '\'' | '(' | ')' | '[' | ']' | '{' | '}' => Close,
            _ => Other,
        };
    }

    match ch {
        '\u{0085}' | '\u{2028}' | '\u{2029}' => return Sep,
        '\u{200C}' | '\u{200D}' => return Extend,
        '\u{2024}' | '\u{FE52}' | '\u{FF0E}' => return ATerm,
        '\u{0589}' | '\u{061D}'..='\u{061F}' | '\u{06D4}' | '\u{0700}'..='\u{0702}' | '\u{07F9}'
        | '\u{0964}' | '\u{0965}' | '\u{104A}' | '\u{104B}' | '\u{1362}' | '\u{1367}'
        | '\u{1368}' | '\u{166E}' | '\u{17D4}' | '\u{17D5}' | '\u{1803}' | '\u{1809}'
        | '\u{1944}' | '\u{1945}' | '\u{203C}' | '\u{203D}' | '\u{2047}'..='\u{2049}'
        | '\u{2E2E}' | '\u{2E3C}' | '\u{3002}' | '\u{FE56}' | '\u{FE57}' | '\u{FF01}'
        | '\u{FF1F}' | '\u{FF61}' => return STerm,
        '\u{055D}' | '\u{060C}' | '\u{060D}' | '\u{07F8}' | '\u{1802}' | '\u{1808}'
        | '\u{2013}' | '\u{2014}' | '\u{3001}' | '\u{FE10}' | '\u{FE11}' | '\u{FE13}'
        | '\u{FE31}' | '\u{FE32}' | '\u{FE50}' | '\u{FE51}' | '\u{FE55}' | '\u{FE58}'
        | '\u{FE63}' | '\u{FF0C}' | '\u{FF0D}' | '\u{FF1A}' | '\u{FF64}' => return SContinue,
        '\u{00AB}' | '\u{00BB}' | '\u{2018}'..='\u{201F}' | '\u{2039}' | '\u{203A}'
        | '\u{2045}' | '\u{2046}' | '\u{207D}' | '\u{207E}' | '\u{208D}' | '\u{208E}'
        | '\u{2329}' | '\u{232A}' | '\u{275B}'..='\u{2760}' | '\u{2768}'..='\u{2775}'
        | '\u{27C5}' | '\u{27C6}' | '\u{27E6}'..='\u{27EF}' | '\u{2983}'..='\u{2998}'
        | '\u{3008}'..='\u{3011}' | '\u{3014}'..='\u{301B}' | '\u{301D}'..='\u{301F}'
        | '\u{FD3E}' | '\u{FD3F}' | '\u{FE17}' | '\u{FE18}' | '\u{FE35}'..='\u{FE44}'
        | '\u{FE47}' | '\u{FE48}' | '\u{FE59}'..='\u{FE5E}' | '\u{FF08}' | '\u{FF09}'
        | '\u{FF3B}' | '\u{FF3D}' | '\u{FF5B}' | '\u{FF5D}' | '\u{FF5F}' | '\u{FF60}'
        | '\u{FF62}' | '\u{FF63}' => return Close,
        _ => {}
    }

    if ranges::contains(EMOJI_MODIFIER, ch) || props.is_mark(ch) {
        Extend
    } else if ranges::contains(FORMAT, ch) {
        Format
    } else if ch.is_whitespace() {
        Sp
    } else if ch.is_lowercase() {
        Lower
    } else if ch.is_uppercase() {
        Upper
    } else {
        match props.general_category(ch) {
            GeneralCategory::Letter => OLetter,
            GeneralCategory::Number => Numeric,
            _ => Other,
        }
    }
}

pub(crate) fn pair_rule(left: u8, right: u8) -> Pair {
    use SentenceProperty::*;

    let (l, r) = (SentenceProperty::from_u8(left), SentenceProperty::from_u8(right));
    match (l, r) {
        // SB3, SB4
        (CR, LF) => Pair::Keep,
        (l, _) if l.is_para_sep() => Pair::Break,
        // SB5
        (_, Extend | Format) => Pair::Keep,
        // SB9, SB10 never break inside `Close* Sp* ParaSep?`
        (ATerm | STerm | Close | Sp, Sp | CR | LF | Sep) => Pair::Keep,
        (ATerm | STerm | Close, Close) => Pair::Keep,
        // SB6 - SB11
        (ATerm | STerm | Close | Sp, _) => Pair::Context,
        // SB998
        _ => Pair::Keep,
    }
}

/// Locale tables consulted at SB11
#[derive(Debug, Clone, Copy)]
pub(crate) struct Abbreviations<'a> {
    pub(crate) trie: &'a Trie,
    pub(crate) starters: &'a SentenceStarterTable,
}

/// Whether there is a sentence boundary before `pos`
pub(crate) fn is_break(
    table: &PairTable,
    window: &CharacterWindow<'_>,
    pos: usize,
    abbreviations: Abbreviations<'_>,
) -> bool {
    let (Some(raw_left), Some(right)) = (window.prop_at(pos - 1), window.prop_at(pos)) else {
        return true;
    };

    let raw = table.get(raw_left, right);
    if raw != Pair::Context || is_ignorable(right) {
        return raw == Pair::Break;
    }

    let left = if is_ignorable(raw_left) {
        window.prev_significant(pos - 1, is_ignorable).unwrap_or(pos - 1)
    } else {
        pos - 1
    };
    let left_prop = window.prop_at(left).unwrap_or(raw_left);
    match table.get(left_prop, right) {
        Pair::Break => true,
        Pair::Keep => false,
        Pair::Context => resolve(window, left, pos, abbreviations),
    }
}

/// Terminator sequence ending at the left side of a position
struct TerminatorRun {
    /// Index of the ATerm/STerm
    term: usize,
    kind: SentenceProperty,
    has_close: bool,
    has_space: bool,
}

fn terminator_run(window: &CharacterWindow<'_>, left: usize) -> Option<TerminatorRun> {
    let prop = |i: usize| window.prop_at(i).map(SentenceProperty::from_u8);
    let mut index = Some(left);
    let mut has_space = false;
    let mut has_close = false;

    while let Some(i) = index {
        if prop(i) != Some(SentenceProperty::Sp) {
            break;
        }
        has_space = true;
        index = window.prev_significant(i, is_ignorable);
    }
    while let Some(i) = index {
        if prop(i) != Some(SentenceProperty::Close) {
            break;
        }
        has_close = true;
        index = window.prev_significant(i, is_ignorable);
    }

    let term = index?;
    let kind = prop(term)?;
    kind.is_terminator().then_some(TerminatorRun {
        term,
        kind,
        has_close,
        has_space,
    })
}

fn resolve(
    window: &CharacterWindow<'_>,
    left: usize,
    pos: usize,
    abbreviations: Abbreviations<'_>,
) -> bool {
    use SentenceProperty::*;

    let prop = |i: usize| window.prop_at(i).map(SentenceProperty::from_u8);
    let Some(run) = terminator_run(window, left) else {
        return false;
    };
    let Some(right) = prop(pos) else {
        return true;
    };
    let bare = !run.has_close && !run.has_space;

    if run.kind == ATerm && bare {
        // SB6
        if right == Numeric {
            return false;
        }
        // SB7
        let before = window
            .prev_significant(run.term, is_ignorable)
            .and_then(prop);
        if right == Upper && matches!(before, Some(Upper | Lower)) {
            return false;
        }
    }

    // SB8
    if run.kind == ATerm {
        let stop = (pos..window.len())
            .filter_map(prop)
            .find(|p| matches!(*p, OLetter | Upper | Lower | Sep | CR | LF | ATerm | STerm));
        if stop == Some(Lower) {
            return false;
        }
    }

    // SB8a
    if matches!(right, SContinue | ATerm | STerm) {
        return false;
    }
    // SB9
    if !run.has_space && right == Close {
        return false;
    }
    // SB9, SB10
    if right == Sp || right.is_para_sep() {
        return false;
    }

    // SB11, unless the full stop closes an abbreviation
    !(run.kind == ATerm && continues_after_abbreviation(window, &run, pos, abbreviations))
}

fn continues_after_abbreviation(
    window: &CharacterWindow<'_>,
    run: &TerminatorRun,
    pos: usize,
    abbreviations: Abbreviations<'_>,
) -> bool {
    if abbreviations.trie.is_empty() {
        return false;
    }

    let chars = window.chars();
    let mut start = run.term;
    while start > 0 && (chars[start - 1].is_alphabetic() || chars[start - 1] == '.') {
        start -= 1;
    }
    // "1st." is not "St."
    if start > 0 && chars[start - 1].is_alphanumeric() {
        return false;
    }
    let Some(category) = abbreviations.trie.find(&chars[start..run.term]) else {
        return false;
    };

    category == TITLES || !(run.has_space && abbreviations.starters.starts_sentence(chars, pos))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::properties::UnicodeProperties;

    fn class(ch: char) -> SentenceProperty {
        classify(ch, &UnicodeProperties)
    }

    #[test]
    fn test_classify() {
        assert_eq!(class('.'), SentenceProperty::ATerm);
        assert_eq!(class('?'), SentenceProperty::STerm);
        assert_eq!(class('\u{3002}'), SentenceProperty::STerm);
        assert_eq!(class('a'), SentenceProperty::Lower);
        assert_eq!(class('É'), SentenceProperty::Upper);
        assert_eq!(class('ก'), SentenceProperty::OLetter);
        assert_eq!(class('"'), SentenceProperty::Close);
        assert_eq!(class('\u{201D}'), SentenceProperty::Close);
        assert_eq!(class('\u{00A0}'), SentenceProperty::Sp);
        assert_eq!(class(';'), SentenceProperty::Other);
    }

    #[test]
    fn test_pair_rules() {
        use SentenceProperty::*;
        let rule = |l: SentenceProperty, r: SentenceProperty| pair_rule(l as u8, r as u8);

        assert_eq!(rule(CR, LF), Pair::Keep);
        assert_eq!(rule(LF, Upper), Pair::Break);
        assert_eq!(rule(Lower, Lower), Pair::Keep);
        assert_eq!(rule(ATerm, Sp), Pair::Keep);
        assert_eq!(rule(Sp, Sp), Pair::Keep);
        assert_eq!(rule(Close, Close), Pair::Keep);
        assert_eq!(rule(Sp, Close), Pair::Context);
        assert_eq!(rule(ATerm, Upper), Pair::Context);
        assert_eq!(rule(Sp, Upper), Pair::Context);
        assert_eq!(rule(ATerm, Extend), Pair::Keep);
    }

    #[test]
    fn test_property_count_matches() {
        assert_eq!(SentenceProperty::ALL.len(), SentenceProperty::COUNT);
        assert_eq!(SentenceProperty::Close as usize, SentenceProperty::COUNT - 1);
    }
}
