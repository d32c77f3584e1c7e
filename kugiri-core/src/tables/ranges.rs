//! Sorted code point range tables shared by the boundary property tables
//!
//! Every table is a sorted, non-overlapping list of inclusive ranges and is
//! searched with a binary search. ASCII never reaches these tables on the
//! hot path; callers handle it with a direct match first.

use core::cmp::Ordering;

/// Inclusive code point range
pub(crate) type Range = (u32, u32);

/// Binary search for `ch` in a sorted range table
#[inline]
pub(crate) fn contains(table: &[Range], ch: char) -> bool {
    let cp = ch as u32;
    table
        .binary_search_by(|&(lo, hi)| {
            if hi < cp {
                Ordering::Less
            } else if lo > cp {
                Ordering::Greater
            } else {
                Ordering::Equal
            }
        })
        .is_ok()
}

/// Extended_Pictographic
pub(crate) const EXTENDED_PICTOGRAPHIC: &[Range] = &[
    (0x00A9, 0x00A9),
    (0x00AE, 0x00AE),
    (0x203C, 0x203C),
    (0x2049, 0x2049),
    (0x2122, 0x2122),
    (0x2139, 0x2139),
    (0x2194, 0x2199),
    (0x21A9, 0x21AA),
    (0x231A, 0x231B),
    (0x2328, 0x2328),
    (0x2388, 0x2388),
    (0x23CF, 0x23CF),
    (0x23E9, 0x23F3),
    (0x23F8, 0x23FA),
    (0x24C2, 0x24C2),
    (0x25AA, 0x25AB),
    (0x25B6, 0x25B6),
    (0x25C0, 0x25C0),
    (0x25FB, 0x25FE),
    (0x2600, 0x2605),
    (0x2607, 0x2612),
    (0x2614, 0x2685),
    (0x2690, 0x2705),
    (0x2708, 0x2712),
    (0x2714, 0x2714),
    (0x2716, 0x2716),
    (0x271D, 0x271D),
    (0x2721, 0x2721),
    (0x2728, 0x2728),
    (0x2733, 0x2734),
    (0x2744, 0x2744),
    (0x2747, 0x2747),
    (0x274C, 0x274C),
    (0x274E, 0x274E),
    (0x2753, 0x2755),
    (0x2757, 0x2757),
    (0x2763, 0x2767),
    (0x2795, 0x2797),
    (0x27A1, 0x27A1),
    (0x27B0, 0x27B0),
    (0x27BF, 0x27BF),
    (0x2934, 0x2935),
    (0x2B05, 0x2B07),
    (0x2B1B, 0x2B1C),
    (0x2B50, 0x2B50),
    (0x2B55, 0x2B55),
    (0x3030, 0x3030),
    (0x303D, 0x303D),
    (0x3297, 0x3297),
    (0x3299, 0x3299),
    (0x1F000, 0x1F0FF),
    (0x1F10D, 0x1F10F),
    (0x1F12F, 0x1F12F),
    (0x1F16C, 0x1F171),
    (0x1F17E, 0x1F17F),
    (0x1F18E, 0x1F18E),
    (0x1F191, 0x1F19A),
    (0x1F1AD, 0x1F1E5),
    (0x1F201, 0x1F20F),
    (0x1F21A, 0x1F21A),
    (0x1F22F, 0x1F22F),
    (0x1F232, 0x1F23A),
    (0x1F23C, 0x1F23F),
    (0x1F249, 0x1F3FA),
    (0x1F400, 0x1F53D),
    (0x1F546, 0x1F64F),
    (0x1F680, 0x1F6FF),
    (0x1F774, 0x1F77F),
    (0x1F7D5, 0x1F7FF),
    (0x1F80C, 0x1F80F),
    (0x1F848, 0x1F84F),
    (0x1F85A, 0x1F85F),
    (0x1F888, 0x1F88F),
    (0x1F8AE, 0x1F8FF),
    (0x1F90C, 0x1F93A),
    (0x1F93C, 0x1F945),
    (0x1F947, 0x1FAFF),
    (0x1FC00, 0x1FFFD),
];

/// Emoji modifiers (skin tones); grapheme Extend
pub(crate) const EMOJI_MODIFIER: &[Range] = &[(0x1F3FB, 0x1F3FF)];

/// Regional indicator symbols
pub(crate) const REGIONAL_INDICATOR: &[Range] = &[(0x1F1E6, 0x1F1FF)];

/// General_Category=Cf
pub(crate) const FORMAT: &[Range] = &[
    (0x00AD, 0x00AD),
    (0x0600, 0x0605),
    (0x061C, 0x061C),
    (0x06DD, 0x06DD),
    (0x070F, 0x070F),
    (0x0890, 0x0891),
    (0x08E2, 0x08E2),
    (0x180E, 0x180E),
    (0x200B, 0x200F),
    (0x202A, 0x202E),
    (0x2060, 0x2064),
    (0x2066, 0x206F),
    (0xFEFF, 0xFEFF),
    (0xFFF9, 0xFFFB),
    (0x110BD, 0x110BD),
    (0x110CD, 0x110CD),
    (0x13430, 0x1343F),
    (0x1BCA0, 0x1BCA3),
    (0x1D173, 0x1D17A),
    (0xE0001, 0xE0001),
    (0xE0020, 0xE007F),
];

/// Tag characters; grapheme Extend although they are Cf
pub(crate) const TAG: &[Range] = &[(0xE0020, 0xE007F)];

/// Grapheme_Cluster_Break=Prepend
pub(crate) const PREPEND: &[Range] = &[
    (0x0600, 0x0605),
    (0x06DD, 0x06DD),
    (0x070F, 0x070F),
    (0x0890, 0x0891),
    (0x08E2, 0x08E2),
    (0x0D4E, 0x0D4E),
    (0x110BD, 0x110BD),
    (0x110CD, 0x110CD),
    (0x111C2, 0x111C3),
    (0x1193F, 0x1193F),
    (0x11941, 0x11941),
    (0x11A3A, 0x11A3A),
    (0x11A84, 0x11A89),
    (0x11D46, 0x11D46),
];

/// Letters that are spacing marks for grapheme purposes (Thai/Lao SARA AM)
pub(crate) const SPACING_LETTER: &[Range] = &[(0x0E33, 0x0E33), (0x0EB3, 0x0EB3)];

/// Spacing combining marks that still start a new cluster
pub(crate) const SPACING_MARK_EXCEPTION: &[Range] = &[
    (0x102B, 0x102C),
    (0x1038, 0x1038),
    (0x1062, 0x1064),
    (0x1067, 0x106D),
    (0x1083, 0x1083),
    (0x1087, 0x108C),
    (0x108F, 0x108F),
    (0x109A, 0x109C),
    (0x1A61, 0x1A61),
    (0x1A63, 0x1A64),
    (0xAA7B, 0xAA7B),
    (0xAA7D, 0xAA7D),
    (0x11720, 0x11721),
];

pub(crate) const HANGUL_L: &[Range] = &[(0x1100, 0x115F), (0xA960, 0xA97C)];
pub(crate) const HANGUL_V: &[Range] = &[(0x1160, 0x11A7), (0xD7B0, 0xD7C6)];
pub(crate) const HANGUL_T: &[Range] = &[(0x11A8, 0x11FF), (0xD7CB, 0xD7FB)];
pub(crate) const HANGUL_SYLLABLE: Range = (0xAC00, 0xD7A3);

pub(crate) const HEBREW_LETTER: &[Range] = &[
    (0x05D0, 0x05EA),
    (0x05EF, 0x05F2),
    (0xFB1D, 0xFB1D),
    (0xFB1F, 0xFB28),
    (0xFB2A, 0xFB36),
    (0xFB38, 0xFB3C),
    (0xFB3E, 0xFB3E),
    (0xFB40, 0xFB41),
    (0xFB43, 0xFB44),
    (0xFB46, 0xFB4F),
];

pub(crate) const HAN: &[Range] = &[
    (0x2E80, 0x2E99),
    (0x2E9B, 0x2EF3),
    (0x2F00, 0x2FD5),
    (0x3005, 0x3005),
    (0x3007, 0x3007),
    (0x3021, 0x3029),
    (0x3038, 0x303B),
    (0x3400, 0x4DBF),
    (0x4E00, 0x9FFF),
    (0xF900, 0xFA6D),
    (0xFA70, 0xFAD9),
    (0x20000, 0x2A6DF),
    (0x2A700, 0x2EBE0),
    (0x2F800, 0x2FA1D),
    (0x30000, 0x3134A),
];

pub(crate) const HIRAGANA: &[Range] = &[(0x3041, 0x3096), (0x309D, 0x309F)];

/// Word_Break=Katakana
pub(crate) const KATAKANA: &[Range] = &[
    (0x3031, 0x3035),
    (0x309B, 0x309C),
    (0x30A0, 0x30FA),
    (0x30FC, 0x30FF),
    (0x31F0, 0x31FF),
    (0x32D0, 0x32FE),
    (0x3300, 0x3357),
    (0xFF66, 0xFF9D),
];

/// Scripts written without spaces between words (line-break class SA)
pub(crate) const THAI: &[Range] = &[(0x0E01, 0x0E3A), (0x0E40, 0x0E4E)];
pub(crate) const LAO: &[Range] = &[(0x0E81, 0x0EBE), (0x0EC0, 0x0ECE), (0x0EDC, 0x0EDF)];
pub(crate) const KHMER: &[Range] = &[(0x1780, 0x17D3), (0x17D7, 0x17D7), (0x17DC, 0x17DD), (0x19E0, 0x19FF)];
pub(crate) const MYANMAR: &[Range] = &[(0x1000, 0x103F), (0x1050, 0x108F), (0x109A, 0x109F), (0xA9E0, 0xA9FE), (0xAA60, 0xAA7F)];

/// Vowels written before the consonant they follow in speech; a word never
/// ends right after one
pub(crate) const PREPOSED_VOWEL: &[Range] = &[(0x0E40, 0x0E44), (0x0EC0, 0x0EC4)];

/// Marks that glue the following consonant into the same syllable
/// (Khmer COENG, Myanmar VIRAMA); a dictionary break never follows them
pub(crate) const SYLLABLE_JOINER: &[Range] = &[(0x1039, 0x1039), (0x17D2, 0x17D2)];
