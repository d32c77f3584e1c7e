//! Integration tests for the boundary scanner over compiled rule sets

use kugiri_core::locale;
use kugiri_core::{BoundaryClass, BoundaryScanner, IndexMapper, RuleSet, UnicodeProperties};
use proptest::prelude::*;
use std::sync::Arc;
use unicode_segmentation::UnicodeSegmentation;

fn rules(class: BoundaryClass, code: &str) -> Arc<RuleSet> {
    let data = locale::embedded(code).unwrap_or_else(locale::root);
    Arc::new(RuleSet::compile(class, &data, Arc::new(UnicodeProperties)).unwrap())
}

fn scan(class: BoundaryClass, code: &str, text: &str) -> Vec<usize> {
    let mut scanner = BoundaryScanner::new(rules(class, code), text);
    let mut offsets = Vec::new();
    while let Some(boundary) = scanner.next_boundary().unwrap() {
        offsets.push(boundary.offset);
    }
    offsets
}

#[test]
fn test_japanese_sentences() {
    let text = "これは最初の文です。これは二番目の文です。";
    assert_eq!(scan(BoundaryClass::Sentence, "ja", text), vec![10, 21]);

    let text = "これは文です。これは質問ですか？これは感嘆文です！";
    assert_eq!(scan(BoundaryClass::Sentence, "ja", text).len(), 3);
}

#[test]
fn test_words_match_unicode_segmentation() {
    let samples = [
        "The quick brown fox's 3.14 jumps, over 1,000 dogs.",
        "Hello,world!  Tabs\tand\nnewlines",
        "naïve café e\u{301}lan",
    ];
    for text in samples {
        let mapper = IndexMapper::new(text);
        let expected: Vec<usize> = text
            .split_word_bound_indices()
            .map(|(byte, word)| text[..byte + word.len()].chars().count())
            .collect();
        let found: Vec<usize> = scan(BoundaryClass::Word, "root", text)
            .into_iter()
            .map(|offset| mapper.to_native(offset).unwrap())
            .collect();
        assert_eq!(found, expected, "word boundaries of {text:?}");
    }
}

#[test]
fn test_registered_locales_compile_for_every_class() {
    for code in locale::embedded_codes() {
        let data = locale::embedded(code).unwrap();
        for class in BoundaryClass::ALL {
            let compiled = RuleSet::compile(class, &data, Arc::new(UnicodeProperties));
            assert!(compiled.is_ok(), "{class} rules for {code}");
        }
    }
}

proptest! {
    #[test]
    fn prop_offsets_are_code_unit_boundaries(text in any::<String>()) {
        let mapper = IndexMapper::new(&text);
        for class in BoundaryClass::ALL {
            let offsets = scan(class, "root", &text);
            prop_assert!(offsets.windows(2).all(|w| w[0] < w[1]));
            prop_assert_eq!(offsets.last().copied().unwrap_or(0), mapper.scan_len());
            for offset in offsets {
                prop_assert!(mapper.to_native(offset).is_ok());
            }
        }
    }
}
