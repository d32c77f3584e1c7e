//! Extended grapheme cluster rules
//!
//! Locale independent. Implements GB3 through GB13; SpacingMark is folded
//! into the non-breaking side the same way Extend is.

use crate::character_window::CharacterWindow;
use crate::properties::CharProperties;
use crate::tables::ranges::{
    self, EMOJI_MODIFIER, EXTENDED_PICTOGRAPHIC, FORMAT, HANGUL_L, HANGUL_SYLLABLE, HANGUL_T,
    HANGUL_V, PREPEND, REGIONAL_INDICATOR, SPACING_LETTER, SPACING_MARK_EXCEPTION, TAG,
};
use crate::tables::{Pair, PairTable};

#[allow(clippy::upper_case_acronyms)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub(crate) enum GraphemeProperty {
    Other,
    CR,
    LF,
    Control,
    Extend,
    ZWJ,
    RegionalIndicator,
    Prepend,
    SpacingMark,
    L,
    V,
    T,
    LV,
    LVT,
    ExtPict,
}

impl GraphemeProperty {
    pub(crate) const COUNT: usize = 15;

    const ALL: [GraphemeProperty; Self::COUNT] = [
        Self::Other,
        Self::CR,
        Self::LF,
        Self::Control,
        Self::Extend,
        Self::ZWJ,
        Self::RegionalIndicator,
        Self::Prepend,
        Self::SpacingMark,
        Self::L,
        Self::V,
        Self::T,
        Self::LV,
        Self::LVT,
        Self::ExtPict,
    ];

    fn from_u8(value: u8) -> Self {
        Self::ALL.get(value as usize).copied().unwrap_or(Self::Other)
    }
}

pub(crate) fn classify(ch: char, props: &dyn CharProperties) -> GraphemeProperty {
    use GraphemeProperty::*;

    if ch.is_ascii() {
        return match ch {
            '\r' => CR,
            '\n' => LF,
            '\0'..='\x1f' | '\x7f' => Control,
            _ => Other,
        };
    }

    match ch {
        '\u{200D}' => return ZWJ,
        '\u{200C}' | '\u{FF9E}' | '\u{FF9F}' => return Extend,
        '\u{2028}' | '\u{2029}' => return Control,
        _ => {}
    }

    let cp = ch as u32;
    if (HANGUL_SYLLABLE.0..=HANGUL_SYLLABLE.1).contains(&cp) {
        return if (cp - HANGUL_SYLLABLE.0) % 28 == 0 { LV } else { LVT };
    }
    if ranges::contains(HANGUL_L, ch) {
        L
    } else if ranges::contains(HANGUL_V, ch) {
        V
    } else if ranges::contains(HANGUL_T, ch) {
        T
    } else if ranges::contains(REGIONAL_INDICATOR, ch) {
        RegionalIndicator
    } else if ranges::contains(EMOJI_MODIFIER, ch) || ranges::contains(TAG, ch) {
        Extend
    } else if ranges::contains(PREPEND, ch) {
        Prepend
    } else if ranges::contains(SPACING_LETTER, ch) {
        SpacingMark
    } else if ranges::contains(SPACING_MARK_EXCEPTION, ch) {
        Other
    } else if props.is_mark(ch) || props.combining_class(ch) != 0 {
        Extend
    } else if ch.is_control() || ranges::contains(FORMAT, ch) {
        Control
    } else if ranges::contains(EXTENDED_PICTOGRAPHIC, ch) {
        ExtPict
    } else {
        Other
    }
}

pub(crate) fn pair_rule(left: u8, right: u8) -> Pair {
    use GraphemeProperty::*;

    let (l, r) = (GraphemeProperty::from_u8(left), GraphemeProperty::from_u8(right));
    match (l, r) {
        // GB3
        (CR, LF) => Pair::Keep,
        // GB4, GB5
        (CR | LF | Control, _) | (_, CR | LF | Control) => Pair::Break,
        // GB6 - GB8
        (L, L | V | LV | LVT) => Pair::Keep,
        (LV | V, V | T) => Pair::Keep,
        (LVT | T, T) => Pair::Keep,
        // GB9, GB9a
        (_, Extend | ZWJ | SpacingMark) => Pair::Keep,
        // GB9b
        (Prepend, _) => Pair::Keep,
        // GB11
        (ZWJ, ExtPict) => Pair::Context,
        // GB12, GB13
        (RegionalIndicator, RegionalIndicator) => Pair::Context,
        // GB999
        _ => Pair::Break,
    }
}

/// Whether there is a grapheme cluster boundary before `pos`
pub(crate) fn is_break(table: &PairTable, window: &CharacterWindow<'_>, pos: usize) -> bool {
    let (Some(left), Some(right)) = (window.prop_at(pos - 1), window.prop_at(pos)) else {
        return true;
    };
    match table.get(left, right) {
        Pair::Break => true,
        Pair::Keep => false,
        Pair::Context => resolve(window, pos),
    }
}

/// Resolve a context pair at `pos`; true means break
fn resolve(window: &CharacterWindow<'_>, pos: usize) -> bool {
    use GraphemeProperty::*;

    let left = window.prop_at(pos - 1).map(GraphemeProperty::from_u8);
    match left {
        Some(ZWJ) => {
            // ExtPict Extend* ZWJ x ExtPict
            let before = window.prev_significant(pos - 1, |p| p == Extend as u8);
            !matches!(
                before.and_then(|i| window.prop_at(i)).map(GraphemeProperty::from_u8),
                Some(ExtPict)
            )
        }
        Some(RegionalIndicator) => {
            let run = window.run_length(pos - 1, RegionalIndicator as u8, |_| false);
            run % 2 == 0
        }
        _ => true,
    }
}
