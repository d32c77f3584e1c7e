//! Grapheme clusters compared against the unicode-segmentation crate

use kugiri_api::{graphemes, Result};
use unicode_segmentation::UnicodeSegmentation;

const SAMPLES: &[&str] = &[
    "",
    "plain ascii text",
    "e\u{301}te\u{301}",
    "a\u{308}\u{301}b",
    "\u{1F468}\u{200D}\u{1F469}\u{200D}\u{1F467}\u{200D}\u{1F466} family",
    "\u{1F1EF}\u{1F1F5}\u{1F1FA}\u{1F1F8}\u{1F1EB}",
    "\u{1F44D}\u{1F3FD} ok",
    "\u{2764}\u{FE0F} love",
    "1\u{FE0F}\u{20E3}",
    "한국어 \u{1100}\u{1161}\u{11A8}",
    "line\r\nbreak\n\rend",
    "a\u{200D}b",
    "สวัสดี",
    "日本語のテキスト",
    "\u{0915}\u{093F}",
    "\u{1000}\u{102C}",
    "\u{1019}\u{102C}\u{1038} \u{1019}\u{103C}\u{1014}\u{103A}\u{1019}\u{102C}",
    "tab\there",
    "\u{1F3F3}\u{FE0F}\u{200D}\u{1F308}",
];

fn kugiri_clusters(text: &str) -> Vec<&str> {
    graphemes(text, None)
        .unwrap()
        .map(|s| s.map(|s| s.text))
        .collect::<Result<_>>()
        .unwrap()
}

#[test]
fn test_graphemes_match_unicode_segmentation() {
    for sample in SAMPLES {
        let expected: Vec<&str> = sample.graphemes(true).collect();
        assert_eq!(kugiri_clusters(sample), expected, "clusters of {sample:?}");
    }
}

#[test]
fn test_grapheme_counts_match() {
    let text = SAMPLES.concat();
    assert_eq!(kugiri_clusters(&text).len(), text.graphemes(true).count());
}
