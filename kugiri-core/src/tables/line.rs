//! Line-break opportunity rules (LB4 - LB31)
//!
//! Classes are resolved as in LB1: SA letters become AL and SA marks CM,
//! conditional Japanese starters (CJ) become NS, and ambiguous or unknown
//! characters become AL. Hangul syllables and jamo are treated as ID and
//! emoji modifiers as CM, which keeps the rule chain free of LB26/LB27 and
//! LB30b.

use crate::character_window::CharacterWindow;
use crate::properties::{CharProperties, GeneralCategory};
use crate::tables::ranges::{
    self, EXTENDED_PICTOGRAPHIC, FORMAT, HAN, HANGUL_L, HANGUL_SYLLABLE, HANGUL_T, HANGUL_V,
    HEBREW_LETTER, HIRAGANA, KATAKANA, KHMER, LAO, MYANMAR, TAG, THAI,
};
use crate::tables::{Pair, PairTable};
use crate::types::BreakKind;

#[allow(clippy::upper_case_acronyms)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub(crate) enum LineClass {
    BK,
    CR,
    LF,
    NL,
    SP,
    ZW,
    ZWJ,
    CM,
    WJ,
    GL,
    BA,
    BB,
    B2,
    HY,
    CL,
    CP,
    EX,
    IN,
    NS,
    OP,
    QU,
    IS,
    NU,
    PO,
    PR,
    SY,
    AL,
    HL,
    ID,
    RI,
}

impl LineClass {
    pub(crate) const COUNT: usize = 30;

    const ALL: [LineClass; Self::COUNT] = [
        Self::BK,
        Self::CR,
        Self::LF,
        Self::NL,
        Self::SP,
        Self::ZW,
        Self::ZWJ,
        Self::CM,
        Self::WJ,
        Self::GL,
        Self::BA,
        Self::BB,
        Self::B2,
        Self::HY,
        Self::CL,
        Self::CP,
        Self::EX,
        Self::IN,
        Self::NS,
        Self::OP,
        Self::QU,
        Self::IS,
        Self::NU,
        Self::PO,
        Self::PR,
        Self::SY,
        Self::AL,
        Self::HL,
        Self::ID,
        Self::RI,
    ];

    fn from_u8(value: u8) -> Self {
        Self::ALL.get(value as usize).copied().unwrap_or(Self::AL)
    }

    fn is_hard(self) -> bool {
        matches!(self, Self::BK | Self::CR | Self::LF | Self::NL)
    }

    fn is_combining(self) -> bool {
        matches!(self, Self::CM | Self::ZWJ)
    }
}

pub(crate) fn classify(ch: char, props: &dyn CharProperties) -> LineClass {
    use LineClass::*;

    if ch.is_ascii() {
        return match ch {
            '\t' => BA,
            '\n' => LF,
            '\x0B' | '\x0C' => BK,
            '\r' => CR,
            '\0'..='\x1f' | '\x7f' => CM,
            ' ' => SP,
            '!' | '?' => EX,
            '"' | '\'' => QU,
            '$' | '+' | '\\' => PR,
            '%' => PO,
            '(' | '[' | '{' => OP,
            ')' | ']' => CP,
            '}' => CL,
            ',' | '.' | ':' | ';' => IS,
            '-' => HY,
            '/' => SY,
            '0'..='9' => NU,
            '|' => BA,
            _ => AL,
        };
    }

    match ch {
        '\u{0085}' => return NL,
        '\u{2028}' | '\u{2029}' => return BK,
        '\u{200B}' => return ZW,
        '\u{200D}' => return ZWJ,
        '\u{2060}' | '\u{FEFF}' => return WJ,
        '\u{00A0}' | '\u{034F}' | '\u{0F0C}' | '\u{180E}' | '\u{2007}' | '\u{2011}'
        | '\u{202F}' => return GL,
        '\u{00AD}' | '\u{058A}' | '\u{05BE}' | '\u{0964}' | '\u{0965}' | '\u{0E5A}'
        | '\u{0E5B}' | '\u{0F0B}' | '\u{104A}' | '\u{104B}' | '\u{1680}' | '\u{17D4}'
        | '\u{17D5}' | '\u{17D8}' | '\u{17DA}' | '\u{2000}'..='\u{2006}'
        | '\u{2008}'..='\u{200A}' | '\u{2010}' | '\u{2012}' | '\u{2013}' | '\u{2027}'
        | '\u{205F}' | '\u{3000}' => return BA,
        '\u{00B4}' | '\u{02C8}' | '\u{02CC}' | '\u{02DF}' | '\u{1806}' => return BB,
        '\u{2014}' | '\u{2E3A}' | '\u{2E3B}' => return B2,
        '\u{00A1}' | '\u{00BF}' | '\u{201A}' | '\u{201E}' | '\u{2045}' | '\u{207D}'
        | '\u{208D}' | '\u{2329}' | '\u{3008}' | '\u{300A}' | '\u{300C}' | '\u{300E}'
        | '\u{3010}' | '\u{3014}' | '\u{3016}' | '\u{3018}' | '\u{301A}' | '\u{301D}'
        | '\u{FF08}' | '\u{FF3B}' | '\u{FF5B}' | '\u{FF5F}' | '\u{FF62}' => return OP,
        '\u{2046}' | '\u{207E}' | '\u{208E}' | '\u{232A}' | '\u{3001}' | '\u{3002}'
        | '\u{3009}' | '\u{300B}' | '\u{300D}' | '\u{300F}' | '\u{3011}' | '\u{3015}'
        | '\u{3017}' | '\u{3019}' | '\u{301B}' | '\u{301E}' | '\u{301F}' | '\u{FE11}'
        | '\u{FE12}' | '\u{FF09}' | '\u{FF0C}' | '\u{FF0E}' | '\u{FF3D}' | '\u{FF5D}'
        | '\u{FF60}' | '\u{FF61}' | '\u{FF63}' | '\u{FF64}' => return CL,
        '\u{05C6}' | '\u{061B}' | '\u{061E}' | '\u{061F}' | '\u{06D4}' | '\u{FE15}'
        | '\u{FE16}' | '\u{FF01}' | '\u{FF1F}' => return EX,
        '\u{2024}'..='\u{2026}' | '\u{FE19}' => return IN,
        '\u{037E}' | '\u{0589}' | '\u{060C}' | '\u{060D}' | '\u{2044}' | '\u{FE10}'
        | '\u{FE13}' | '\u{FE14}' => return IS,
        '\u{00AB}' | '\u{00BB}' | '\u{2018}' | '\u{2019}' | '\u{201B}'..='\u{201D}'
        | '\u{201F}' | '\u{2039}' | '\u{203A}' => return QU,
        '\u{00A2}' | '\u{00B0}' | '\u{066A}' | '\u{2030}'..='\u{2037}' | '\u{2103}'
        | '\u{2109}' | '\u{FF05}' | '\u{FFE0}' => return PO,
        '\u{00A3}'..='\u{00A5}' | '\u{00B1}' | '\u{20A0}'..='\u{20CF}' | '\u{2116}'
        | '\u{2212}' | '\u{2213}' | '\u{FF04}' | '\u{FFE1}' | '\u{FFE5}' | '\u{FFE6}' => {
            return PR
        }
        // NS, including small kana (CJ)
        '\u{17D6}' | '\u{203C}' | '\u{203D}' | '\u{2047}'..='\u{2049}' | '\u{3005}'
        | '\u{301C}' | '\u{303B}' | '\u{303C}' | '\u{3041}' | '\u{3043}' | '\u{3045}'
        | '\u{3047}' | '\u{3049}' | '\u{3063}' | '\u{3083}' | '\u{3085}' | '\u{3087}'
        | '\u{308E}' | '\u{3095}' | '\u{3096}' | '\u{309B}'..='\u{309E}' | '\u{30A0}'
        | '\u{30A1}' | '\u{30A3}' | '\u{30A5}' | '\u{30A7}' | '\u{30A9}' | '\u{30C3}'
        | '\u{30E3}' | '\u{30E5}' | '\u{30E7}' | '\u{30EE}' | '\u{30F5}' | '\u{30F6}'
        | '\u{30FB}'..='\u{30FE}' | '\u{31F0}'..='\u{31FF}' | '\u{FF1A}' | '\u{FF1B}'
        | '\u{FF65}'..='\u{FF70}' | '\u{FF9E}' | '\u{FF9F}' => return NS,
        '\u{1F1E6}'..='\u{1F1FF}' => return RI,
        '\u{1F3FB}'..='\u{1F3FF}' => return CM,
        _ => {}
    }

    let cp = ch as u32;
    let complex = ranges::contains(THAI, ch)
        || ranges::contains(LAO, ch)
        || ranges::contains(KHMER, ch)
        || ranges::contains(MYANMAR, ch);

    if props.is_mark(ch) || ranges::contains(TAG, ch) {
        CM
    } else if complex {
        AL
    } else if ranges::contains(HEBREW_LETTER, ch) {
        HL
    } else if ranges::contains(HAN, ch)
        || ranges::contains(HIRAGANA, ch)
        || ranges::contains(KATAKANA, ch)
        || (HANGUL_SYLLABLE.0..=HANGUL_SYLLABLE.1).contains(&cp)
        || ranges::contains(HANGUL_L, ch)
        || ranges::contains(HANGUL_V, ch)
        || ranges::contains(HANGUL_T, ch)
        || (0xFF01..=0xFF60).contains(&cp)
        || (cp >= 0x1F000 && ranges::contains(EXTENDED_PICTOGRAPHIC, ch))
    {
        ID
    } else if ch.is_control() || ranges::contains(FORMAT, ch) {
        CM
    } else if ch.is_whitespace() {
        BA
    } else {
        match props.general_category(ch) {
            GeneralCategory::Number => NU,
            _ => AL,
        }
    }
}

/// LB11 - LB21a
fn head_rule(l: LineClass, r: LineClass) -> Option<Pair> {
    use LineClass::*;

    let pair = match (l, r) {
        // LB11
        (WJ, _) | (_, WJ) => Pair::Keep,
        // LB12, LB12a
        (GL, _) => Pair::Keep,
        (l, GL) if !matches!(l, SP | BA | HY) => Pair::Keep,
        // LB13
        (_, CL | CP | EX | IS | SY) => Pair::Keep,
        // LB14 - LB18 look through spaces
        (SP, _) => Pair::Context,
        (OP, _) => Pair::Keep,
        (QU, OP) => Pair::Keep,
        (CL | CP, NS) => Pair::Keep,
        (B2, B2) => Pair::Keep,
        // LB19
        (QU, _) | (_, QU) => Pair::Keep,
        // LB21
        (_, BA | HY | NS) | (BB, _) => Pair::Keep,
        // LB21a
        (HY | BA, _) => Pair::Context,
        _ => return None,
    };
    Some(pair)
}

/// LB21b - LB31
fn tail_rule(l: LineClass, r: LineClass) -> Pair {
    use LineClass::*;

    match (l, r) {
        // LB21b
        (SY, HL) => Pair::Keep,
        // LB22
        (_, IN) => Pair::Keep,
        // LB23, LB23a, LB24
        (AL | HL, NU) | (NU, AL | HL) => Pair::Keep,
        (PR, ID) | (ID, PO) => Pair::Keep,
        (PR | PO, AL | HL) | (AL | HL, PR | PO) => Pair::Keep,
        // LB25
        (CL | CP | NU, PO | PR) | (PO | PR, OP | NU) | (HY | IS | NU | SY, NU) => Pair::Keep,
        // LB28, LB29
        (AL | HL, AL | HL) | (IS, AL | HL) => Pair::Keep,
        // LB30
        (AL | HL | NU, OP) | (CP, AL | HL | NU) => Pair::Keep,
        // LB30a
        (RI, RI) => Pair::Context,
        // LB31
        _ => Pair::Break,
    }
}

pub(crate) fn pair_rule(left: u8, right: u8) -> Pair {
    let (l, r) = (LineClass::from_u8(left), LineClass::from_u8(right));
    head_rule(l, r).unwrap_or_else(|| tail_rule(l, r))
}

/// Break opportunity before `pos`, if any
pub(crate) fn break_at(
    table: &PairTable,
    window: &CharacterWindow<'_>,
    pos: usize,
) -> Option<BreakKind> {
    use LineClass::*;

    let class = |i: usize| window.prop_at(i).map(LineClass::from_u8);
    let (Some(l), Some(r)) = (class(pos - 1), class(pos)) else {
        return Some(BreakKind::Discretionary);
    };

    // LB4, LB5
    match l {
        BK | LF | NL => return Some(BreakKind::Mandatory),
        CR if r != LF => return Some(BreakKind::Mandatory),
        CR => return None,
        _ => {}
    }
    // LB6, LB7
    if r.is_hard() || matches!(r, SP | ZW) {
        return None;
    }
    // LB8
    let before_spaces = (0..pos).rev().find(|&i| class(i) != Some(SP));
    if before_spaces.and_then(class) == Some(ZW) {
        return Some(BreakKind::Discretionary);
    }
    // LB8a, LB9
    if l == ZWJ || (r.is_combining() && l != SP) {
        return None;
    }

    // LB10
    let (left, left_class) = if l.is_combining() {
        let base = (0..pos - 1).rev().find(|&i| !class(i).is_some_and(LineClass::is_combining));
        match base.and_then(|i| class(i).map(|c| (i, c))) {
            Some((i, c)) if !c.is_hard() && !matches!(c, SP | ZW) => (i, c),
            _ => (pos - 1, AL),
        }
    } else {
        (pos - 1, l)
    };
    let right_class = if r.is_combining() { AL } else { r };

    let keep = match table.get(left_class as u8, right_class as u8) {
        Pair::Break => false,
        Pair::Keep => true,
        Pair::Context => resolve(window, left, left_class, right_class),
    };
    (!keep).then_some(BreakKind::Discretionary)
}

/// Resolve a context pair; true means no break
fn resolve(window: &CharacterWindow<'_>, left: usize, l: LineClass, r: LineClass) -> bool {
    use LineClass::*;

    let class = |i: usize| window.prop_at(i).map(LineClass::from_u8);
    match l {
        SP => {
            let before = (0..left).rev().map(class).find(|c| *c != Some(SP)).flatten();
            // LB14 - LB17, otherwise LB18
            matches!(
                (before, r),
                (Some(OP), _) | (Some(QU), OP) | (Some(CL | CP), NS) | (Some(B2), B2)
            )
        }
        HY | BA => {
            // LB21a
            let before = (0..left)
                .rev()
                .map(class)
                .find(|c| !c.is_some_and(LineClass::is_combining))
                .flatten();
            before == Some(HL) || tail_rule(l, r) == Pair::Keep
        }
        RI => window.run_length(left, RI as u8, |p| p == CM as u8 || p == ZWJ as u8) % 2 == 1,
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::properties::UnicodeProperties;

    fn class(ch: char) -> LineClass {
        classify(ch, &UnicodeProperties)
    }

    #[test]
    fn test_classify() {
        assert_eq!(class('a'), LineClass::AL);
        assert_eq!(class(' '), LineClass::SP);
        assert_eq!(class('\n'), LineClass::LF);
        assert_eq!(class('('), LineClass::OP);
        assert_eq!(class('世'), LineClass::ID);
        assert_eq!(class('。'), LineClass::CL);
        assert_eq!(class('ぁ'), LineClass::NS);
        assert_eq!(class('ก'), LineClass::AL);
        assert_eq!(class('\u{0E31}'), LineClass::CM);
        assert_eq!(class('\u{AC00}'), LineClass::ID);
        assert_eq!(class('\u{1F600}'), LineClass::ID);
        assert_eq!(class('\u{1F3FB}'), LineClass::CM);
        assert_eq!(class('\u{00A0}'), LineClass::GL);
    }

    #[test]
    fn test_pair_rules() {
        use LineClass::*;
        let rule = |l: LineClass, r: LineClass| pair_rule(l as u8, r as u8);

        assert_eq!(rule(AL, AL), Pair::Keep);
        assert_eq!(rule(AL, ID), Pair::Break);
        assert_eq!(rule(ID, ID), Pair::Break);
        assert_eq!(rule(ID, CL), Pair::Keep);
        assert_eq!(rule(OP, AL), Pair::Keep);
        assert_eq!(rule(SP, AL), Pair::Context);
        assert_eq!(rule(HY, AL), Pair::Context);
        assert_eq!(rule(AL, HY), Pair::Keep);
        assert_eq!(rule(NU, PO), Pair::Keep);
        assert_eq!(rule(SP, GL), Pair::Context);
    }

    #[test]
    fn test_property_count_matches() {
        assert_eq!(LineClass::ALL.len(), LineClass::COUNT);
        assert_eq!(LineClass::RI as usize, LineClass::COUNT - 1);
    }
}
