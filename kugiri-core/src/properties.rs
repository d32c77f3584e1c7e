//! Character property lookups consumed by the boundary tables
//!
//! The rule tables only need two properties from the Unicode database: a
//! coarse general category and the canonical combining class. Both come
//! through [`CharProperties`] so callers can plug in another source.

use core::fmt;

use unicode_normalization::char::{canonical_combining_class, is_combining_mark};

use crate::tables::ranges::{self, FORMAT};

/// Coarse general category (the first letter of the two-letter value)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GeneralCategory {
    Letter,
    Mark,
    Number,
    Punctuation,
    Symbol,
    Separator,
    Control,
    Format,
    Other,
}

/// Source of character properties for the rule tables
pub trait CharProperties: Send + Sync + fmt::Debug {
    /// Coarse general category of `ch`
    fn general_category(&self, ch: char) -> GeneralCategory;

    /// Canonical combining class of `ch` (0 for starters)
    fn combining_class(&self, ch: char) -> u8;

    /// Whether `ch` is a combining mark (Mn, Mc or Me)
    fn is_mark(&self, ch: char) -> bool {
        self.general_category(ch) == GeneralCategory::Mark
    }
}

/// Default property source backed by `unicode-normalization` and `char`
#[derive(Debug, Default, Clone, Copy)]
pub struct UnicodeProperties;

impl CharProperties for UnicodeProperties {
    fn general_category(&self, ch: char) -> GeneralCategory {
        if ch.is_ascii() {
            return ascii_category(ch);
        }
        if is_combining_mark(ch) {
            GeneralCategory::Mark
        } else if ranges::contains(FORMAT, ch) {
            GeneralCategory::Format
        } else if ch.is_alphabetic() {
            GeneralCategory::Letter
        } else if ch.is_numeric() {
            GeneralCategory::Number
        } else if ch.is_control() {
            GeneralCategory::Control
        } else if ch.is_whitespace() {
            GeneralCategory::Separator
        } else if is_punctuation(ch) {
            GeneralCategory::Punctuation
        } else if is_symbol(ch) {
            GeneralCategory::Symbol
        } else {
            GeneralCategory::Other
        }
    }

    fn combining_class(&self, ch: char) -> u8 {
        canonical_combining_class(ch)
    }

    fn is_mark(&self, ch: char) -> bool {
        !ch.is_ascii() && is_combining_mark(ch)
    }
}

fn ascii_category(ch: char) -> GeneralCategory {
    match ch {
        'a'..='z' | 'A'..='Z' => GeneralCategory::Letter,
        '0'..='9' => GeneralCategory::Number,
        ' ' => GeneralCategory::Separator,
        '\0'..='\x1f' | '\x7f' => GeneralCategory::Control,
        '$' | '+' | '<' | '=' | '>' | '^' | '`' | '|' | '~' => GeneralCategory::Symbol,
        _ => GeneralCategory::Punctuation,
    }
}

fn is_punctuation(ch: char) -> bool {
    matches!(ch as u32,
        0x00A1 | 0x00A7 | 0x00AB | 0x00B6 | 0x00B7 | 0x00BB | 0x00BF
        | 0x037E | 0x0387
        | 0x055A..=0x055F | 0x0589 | 0x05BE | 0x05C0 | 0x05C3 | 0x05C6 | 0x05F3 | 0x05F4
        | 0x060C | 0x060D | 0x061B | 0x061D..=0x061F | 0x066A..=0x066D | 0x06D4
        | 0x0964 | 0x0965 | 0x0970
        | 0x0E4F | 0x0E5A | 0x0E5B
        | 0x104A..=0x104F
        | 0x17D4..=0x17D6 | 0x17D8..=0x17DA
        | 0x2010..=0x2027 | 0x2030..=0x2043 | 0x2045..=0x2051 | 0x2053..=0x205E
        | 0x207D | 0x207E | 0x208D | 0x208E
        | 0x2308..=0x230B | 0x2329 | 0x232A
        | 0x2768..=0x2775 | 0x27C5 | 0x27C6 | 0x27E6..=0x27EF
        | 0x2983..=0x2998 | 0x29D8..=0x29DB | 0x29FC | 0x29FD
        | 0x2E00..=0x2E4F
        | 0x3001..=0x3003 | 0x3008..=0x3011 | 0x3014..=0x301F | 0x3030 | 0x303D | 0x30A0 | 0x30FB
        | 0xFE10..=0xFE19 | 0xFE30..=0xFE52 | 0xFE54..=0xFE61 | 0xFE63 | 0xFE68 | 0xFE6A | 0xFE6B
        | 0xFF01..=0xFF03 | 0xFF05..=0xFF0A | 0xFF0C..=0xFF0F | 0xFF1A | 0xFF1B | 0xFF1F | 0xFF20
        | 0xFF3B..=0xFF3D | 0xFF3F | 0xFF5B | 0xFF5D | 0xFF5F..=0xFF65
    )
}

fn is_symbol(ch: char) -> bool {
    matches!(ch as u32,
        0x00A2..=0x00A6 | 0x00A8 | 0x00A9 | 0x00AC | 0x00AE..=0x00B1 | 0x00B4 | 0x00B8
        | 0x00D7 | 0x00F7
        | 0x02C2..=0x02C5 | 0x02D2..=0x02DF
        | 0x2044 | 0x2052 | 0x20A0..=0x20C0
        | 0x2100..=0x214F | 0x2190..=0x2307 | 0x230C..=0x2328 | 0x232B..=0x2426
        | 0x2440..=0x244A | 0x249C..=0x24E9 | 0x2500..=0x2767 | 0x2794..=0x27C4
        | 0x27C7..=0x27E5 | 0x27F0..=0x2982 | 0x2999..=0x29D7 | 0x29DC..=0x29FB
        | 0x29FE..=0x2B73 | 0x2B76..=0x2BFF
        | 0x3004 | 0x3012 | 0x3013 | 0x3020 | 0x3036 | 0x3037 | 0x303E | 0x303F
        | 0xFFE0..=0xFFEE
        | 0x1F000..=0x1FAFF
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_general_category() {
        let props = UnicodeProperties;
        assert_eq!(props.general_category('a'), GeneralCategory::Letter);
        assert_eq!(props.general_category('7'), GeneralCategory::Number);
        assert_eq!(props.general_category('.'), GeneralCategory::Punctuation);
        assert_eq!(props.general_category('\u{0301}'), GeneralCategory::Mark);
        assert_eq!(props.general_category('\u{200D}'), GeneralCategory::Format);
        assert_eq!(props.general_category('ก'), GeneralCategory::Letter);
        assert_eq!(props.general_category('世'), GeneralCategory::Letter);
        assert_eq!(props.general_category('\u{3002}'), GeneralCategory::Punctuation);
        assert_eq!(props.general_category('\u{1F600}'), GeneralCategory::Symbol);
        assert_eq!(props.general_category('\u{3000}'), GeneralCategory::Separator);
    }

    #[test]
    fn test_combining_class() {
        let props = UnicodeProperties;
        assert_eq!(props.combining_class('e'), 0);
        assert_eq!(props.combining_class('\u{0301}'), 230);
        assert!(props.is_mark('\u{0E31}'));
        assert!(!props.is_mark('e'));
    }
}
