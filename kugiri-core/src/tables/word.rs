//! Word boundary rules (WB3 - WB16)
//!
//! Characters of complex-context scripts (Thai, Lao, Khmer, Myanmar) are
//! classified as ALetter, so without a lexicon a run of them forms a single
//! word. The colon is not a MidLetter here; locales that join words across
//! it (Swedish, Finnish) add it back through their tailoring.

use crate::character_window::CharacterWindow;
use crate::properties::{CharProperties, GeneralCategory};
use crate::tables::ranges::{
    self, EMOJI_MODIFIER, EXTENDED_PICTOGRAPHIC, FORMAT, HAN, HEBREW_LETTER, HIRAGANA, KATAKANA,
    REGIONAL_INDICATOR,
};
use crate::tables::{Pair, PairTable};

#[allow(clippy::upper_case_acronyms)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub(crate) enum WordProperty {
    Other,
    CR,
    LF,
    Newline,
    Extend,
    ZWJ,
    RegionalIndicator,
    Format,
    Katakana,
    HebrewLetter,
    ALetter,
    SingleQuote,
    DoubleQuote,
    MidNumLet,
    MidLetter,
    MidNum,
    Numeric,
    ExtendNumLet,
    WSegSpace,
    ExtPict,
}

impl WordProperty {
    pub(crate) const COUNT: usize = 20;

    const ALL: [WordProperty; Self::COUNT] = [
        Self::Other,
        Self::CR,
        Self::LF,
        Self::Newline,
        Self::Extend,
        Self::ZWJ,
        Self::RegionalIndicator,
        Self::Format,
        Self::Katakana,
        Self::HebrewLetter,
        Self::ALetter,
        Self::SingleQuote,
        Self::DoubleQuote,
        Self::MidNumLet,
        Self::MidLetter,
        Self::MidNum,
        Self::Numeric,
        Self::ExtendNumLet,
        Self::WSegSpace,
        Self::ExtPict,
    ];

    pub(crate) fn from_u8(value: u8) -> Self {
        Self::ALL.get(value as usize).copied().unwrap_or(Self::Other)
    }

    fn is_ah_letter(self) -> bool {
        matches!(self, Self::ALetter | Self::HebrewLetter)
    }

    fn is_mid_letter_like(self) -> bool {
        matches!(self, Self::MidLetter | Self::MidNumLet | Self::SingleQuote)
    }

    fn is_mid_num_like(self) -> bool {
        matches!(self, Self::MidNum | Self::MidNumLet | Self::SingleQuote)
    }
}

/// WB4 ignorables
pub(crate) fn is_ignorable(prop: u8) -> bool {
    prop == WordProperty::Extend as u8
        || prop == WordProperty::Format as u8
        || prop == WordProperty::ZWJ as u8
}

pub(crate) fn classify(ch: char, props: &dyn CharProperties) -> WordProperty {
    use WordProperty::*;

    if ch.is_ascii() {
        return match ch {
            '\r' => CR,
            '\n' => LF,
            '\x0B' | '\x0C' => Newline,
            'a'..='z' | 'A'..='Z' => ALetter,
            '0'..='9' => Numeric,
            '\'' => SingleQuote,
            '"' => DoubleQuote,
            '.' => MidNumLet,
            ',' | ';' => MidNum,
            '_' => ExtendNumLet,
            ' ' => WSegSpace,
            _ => Other,
        };
    }

    match ch {
        '\u{0085}' | '\u{2028}' | '\u{2029}' => return Newline,
        '\u{200D}' => return ZWJ,
        '\u{200C}' | '\u{FF9E}' | '\u{FF9F}' => return Extend,
        '\u{200B}' => return Other,
        '\u{2018}' | '\u{2019}' | '\u{2024}' | '\u{FE52}' | '\u{FF07}' | '\u{FF0E}' => {
            return MidNumLet
        }
        '\u{00B7}' | '\u{0387}' | '\u{055F}' | '\u{05F4}' | '\u{2027}' | '\u{FE13}' => {
            return MidLetter
        }
        '\u{037E}' | '\u{0589}' | '\u{060C}' | '\u{060D}' | '\u{066C}' | '\u{07F8}'
        | '\u{2044}' | '\u{FE10}' | '\u{FE14}' | '\u{FE50}' | '\u{FE54}' | '\u{FF0C}'
        | '\u{FF1B}' => return MidNum,
        '\u{202F}' | '\u{203F}' | '\u{2040}' | '\u{2054}' | '\u{FE33}' | '\u{FE34}'
        | '\u{FE4D}'..='\u{FE4F}' | '\u{FF3F}' => return ExtendNumLet,
        '\u{1680}' | '\u{2000}'..='\u{2006}' | '\u{2008}'..='\u{200A}' | '\u{205F}'
        | '\u{3000}' => return WSegSpace,
        _ => {}
    }

    if ranges::contains(REGIONAL_INDICATOR, ch) {
        RegionalIndicator
    } else if ranges::contains(EMOJI_MODIFIER, ch) || props.is_mark(ch) {
        Extend
    } else if ranges::contains(FORMAT, ch) {
        Format
    } else if ranges::contains(KATAKANA, ch) {
        Katakana
    } else if ranges::contains(HEBREW_LETTER, ch) {
        HebrewLetter
    } else if ranges::contains(HAN, ch) || ranges::contains(HIRAGANA, ch) {
        Other
    } else if ranges::contains(EXTENDED_PICTOGRAPHIC, ch) {
        ExtPict
    } else {
        match props.general_category(ch) {
            GeneralCategory::Letter => ALetter,
            GeneralCategory::Number => Numeric,
            _ => Other,
        }
    }
}

pub(crate) fn pair_rule(left: u8, right: u8) -> Pair {
    use WordProperty::*;

    let (l, r) = (WordProperty::from_u8(left), WordProperty::from_u8(right));
    match (l, r) {
        // WB3 - WB3b
        (CR, LF) => Pair::Keep,
        (CR | LF | Newline, _) | (_, CR | LF | Newline) => Pair::Break,
        // WB3c, WB3d
        (ZWJ, ExtPict) => Pair::Keep,
        (WSegSpace, WSegSpace) => Pair::Keep,
        // WB4
        (_, Extend | Format | ZWJ) => Pair::Keep,
        // WB5
        (l, r) if l.is_ah_letter() && r.is_ah_letter() => Pair::Keep,
        // WB7a
        (HebrewLetter, SingleQuote) => Pair::Keep,
        // WB6, WB12
        (l, r) if l.is_ah_letter() && r.is_mid_letter_like() => Pair::Context,
        (Numeric, r) if r.is_mid_num_like() => Pair::Context,
        // WB7, WB11
        (l, r) if l.is_mid_letter_like() && r.is_ah_letter() => Pair::Context,
        (l, Numeric) if l.is_mid_num_like() => Pair::Context,
        // WB7b, WB7c
        (HebrewLetter, DoubleQuote) | (DoubleQuote, HebrewLetter) => Pair::Context,
        // WB8 - WB10
        (Numeric, Numeric) => Pair::Keep,
        (l, Numeric) if l.is_ah_letter() => Pair::Keep,
        (Numeric, r) if r.is_ah_letter() => Pair::Keep,
        // WB13 - WB13b
        (Katakana, Katakana) => Pair::Keep,
        (ALetter | HebrewLetter | Numeric | Katakana | ExtendNumLet, ExtendNumLet) => Pair::Keep,
        (ExtendNumLet, ALetter | HebrewLetter | Numeric | Katakana) => Pair::Keep,
        // WB15, WB16
        (RegionalIndicator, RegionalIndicator) => Pair::Context,
        // WB999
        _ => Pair::Break,
    }
}

/// Whether there is a word boundary before `pos`
pub(crate) fn is_break(table: &PairTable, window: &CharacterWindow<'_>, pos: usize) -> bool {
    use WordProperty::*;

    let (Some(raw_left), Some(right)) = (window.prop_at(pos - 1), window.prop_at(pos)) else {
        return true;
    };

    // WB3 - WB4 look at the raw pair
    let raw = WordProperty::from_u8(raw_left);
    let hard = matches!(raw, CR | LF | Newline)
        || matches!(WordProperty::from_u8(right), CR | LF | Newline)
        || is_ignorable(right)
        || (raw == ZWJ && right == ExtPict as u8);
    if hard {
        return table.get(raw_left, right) != Pair::Keep;
    }

    let left = effective_left(window, pos);
    let left_prop = window.prop_at(left).unwrap_or(raw_left);
    match table.get(left_prop, right) {
        Pair::Break => true,
        Pair::Keep => false,
        Pair::Context => resolve(window, left, pos),
    }
}

/// Property seen on the left of `pos` once WB4 ignorables are skipped
///
/// Returns the index of that character. Ignorables at the start of the text
/// stand for themselves.
pub(crate) fn effective_left(window: &CharacterWindow<'_>, pos: usize) -> usize {
    let raw = pos - 1;
    let prop = window.prop_at(raw).unwrap_or(WordProperty::Other as u8);
    if !is_ignorable(prop) {
        return raw;
    }
    match window.prev_significant(raw, is_ignorable) {
        Some(index) => {
            let base = window.prop_at(index).map(WordProperty::from_u8);
            // WB4 does not reach across a hard line break
            if matches!(base, Some(WordProperty::CR | WordProperty::LF | WordProperty::Newline)) {
                raw
            } else {
                index
            }
        }
        None => raw,
    }
}

/// Resolve a context pair between the character at `left` and `pos`;
/// true means break
pub(crate) fn resolve(window: &CharacterWindow<'_>, left: usize, pos: usize) -> bool {
    use WordProperty::*;

    let prop = |i: Option<usize>| i.and_then(|i| window.prop_at(i)).map(WordProperty::from_u8);
    let (Some(l), Some(r)) = (prop(Some(left)), prop(Some(pos))) else {
        return true;
    };
    let after = || prop(window.next_significant(pos, is_ignorable));
    let before = || prop(window.prev_significant(left, is_ignorable));

    let keep = match (l, r) {
        (RegionalIndicator, RegionalIndicator) => {
            window.run_length(left, RegionalIndicator as u8, is_ignorable) % 2 == 1
        }
        (HebrewLetter, DoubleQuote) => after() == Some(HebrewLetter),
        (DoubleQuote, HebrewLetter) => before() == Some(HebrewLetter),
        _ => {
            // WB6 / WB7 and WB11 / WB12 can both apply to MidNumLet and
            // SingleQuote; either one keeps the pair together
            let wb6 = l.is_ah_letter()
                && r.is_mid_letter_like()
                && after().is_some_and(WordProperty::is_ah_letter);
            let wb7 = l.is_mid_letter_like()
                && r.is_ah_letter()
                && before().is_some_and(WordProperty::is_ah_letter);
            let wb12 = l == Numeric && r.is_mid_num_like() && after() == Some(Numeric);
            let wb11 = l.is_mid_num_like() && r == Numeric && before() == Some(Numeric);
            wb6 || wb7 || wb11 || wb12
        }
    };
    !keep
}
