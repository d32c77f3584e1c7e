//! End-to-end segmentation tests for kugiri-api

use kugiri_api::*;

fn collect(segments: Result<Segments<'_>>) -> Vec<String> {
    segments
        .unwrap()
        .map(|s| s.map(String::from))
        .collect::<Result<_>>()
        .unwrap()
}

#[test]
fn test_combining_mark_stays_with_base() {
    let clusters = collect(graphemes("e\u{301}", None));
    assert_eq!(clusters, vec!["e\u{301}"]);
    assert_eq!(clusters[0].chars().count(), 2);

    let clusters = collect(graphemes("ae\u{301}\u{308}o", None));
    assert_eq!(clusters, vec!["a", "e\u{301}\u{308}", "o"]);
}

#[test]
fn test_family_emoji_is_one_grapheme() {
    let family = "\u{1F468}\u{200D}\u{1F469}\u{200D}\u{1F467}\u{200D}\u{1F466}";
    let clusters = collect(graphemes(family, None));
    assert_eq!(clusters.len(), 1);
    assert_eq!(clusters[0], family);
    assert_eq!(clusters[0].chars().count(), 7);
}

#[test]
fn test_regional_indicator_pairs() {
    assert_eq!(collect(graphemes("\u{1F1EF}\u{1F1F5}", None)).len(), 1);
    // three flags in a row pair up from the left
    let clusters = collect(graphemes("\u{1F1EF}\u{1F1F5}\u{1F1FA}\u{1F1F8}\u{1F1EB}", None));
    assert_eq!(
        clusters,
        vec!["\u{1F1EF}\u{1F1F5}", "\u{1F1FA}\u{1F1F8}", "\u{1F1EB}"]
    );
}

#[test]
fn test_hangul_syllables() {
    assert_eq!(collect(graphemes("한국어", None)), vec!["한", "국", "어"]);
    // conjoining jamo L V T form one syllable
    assert_eq!(collect(graphemes("\u{1100}\u{1161}\u{11A8}", None)).len(), 1);
}

#[test]
fn test_crlf_is_one_grapheme() {
    assert_eq!(collect(graphemes("a\r\nb", None)), vec!["a", "\r\n", "b"]);
}

#[test]
fn test_word_policies() {
    let text = "Hello, world!";
    assert_eq!(collect(words(text, None)), vec!["Hello", ",", " ", "world", "!"]);
    assert_eq!(
        collect(words_with_policy(text, None, WordPolicy::SkipWhitespace)),
        vec!["Hello", ",", "world", "!"]
    );
    assert_eq!(
        collect(words_with_policy(text, None, WordPolicy::WordsOnly)),
        vec!["Hello", "world"]
    );
}

#[test]
fn test_words_keep_contractions_and_numbers() {
    let tokens = collect(words_with_policy(
        "Don't pay $3,000.50 at 9:30.",
        None,
        WordPolicy::WordsOnly,
    ));
    assert_eq!(tokens, vec!["Don't", "pay", "3,000.50", "at", "9", "30"]);
}

#[test]
fn test_abbreviation_does_not_end_sentence() {
    let found = collect(sentences("Dr. Smith left. He returned.", None));
    assert_eq!(found, vec!["Dr. Smith left. ", "He returned."]);
}

#[test]
fn test_abbreviation_needs_a_whole_word() {
    assert_eq!(
        collect(sentences("He finished 1st. Everyone cheered.", None)),
        vec!["He finished 1st. ", "Everyone cheered."]
    );
    assert_eq!(
        collect(sentences("I said no. Maybe later.", Some("en"))),
        vec!["I said no. ", "Maybe later."]
    );
    assert_eq!(collect(sentences("See No. 5 below.", Some("en"))).len(), 1);
    assert_eq!(collect(sentences("Ask Dr. Smith.", Some("en"))).len(), 1);
}

#[test]
fn test_long_runs_stay_linear() {
    let text = format!("a{}b", " ".repeat(100_000));
    assert_eq!(collect(sentences(&text, None)).len(), 1);

    let text = format!("(a.{} Next.", ")".repeat(50_000));
    assert_eq!(collect(sentences(&text, None)).len(), 2);

    let flags = "\u{1F1EF}".repeat(100_001);
    let clusters = collect(graphemes(&flags, None));
    assert_eq!(clusters.len(), 50_001);
    assert_eq!(clusters.last().unwrap().chars().count(), 1);
    assert_eq!(collect(words(&flags, None)).len(), 50_001);
}

#[test]
fn test_sentence_terminators() {
    let found = collect(sentences("Really?! That's amazing... Let me think.", None));
    assert_eq!(
        found,
        vec!["Really?! ", "That's amazing... ", "Let me think."]
    );

    // lowercase continuation after a period
    assert_eq!(collect(sentences("e.g. this one.", None)).len(), 1);
    // closing quote belongs to the sentence
    assert_eq!(
        collect(sentences("He said \"Go.\" Then left.", None)),
        vec!["He said \"Go.\" ", "Then left."]
    );
}

#[test]
fn test_paragraph_separators_end_sentences() {
    assert_eq!(
        collect(sentences("No period\nNext line", None)),
        vec!["No period\n", "Next line"]
    );
}

#[test]
fn test_thai_needs_thai_rules() {
    let text = "ฉันรักภาษาไทย";
    let root = collect(words(text, None));
    assert_eq!(root.len(), 1);

    let thai = collect(words(text, Some("th")));
    assert!(thai.len() > 1);
    assert_eq!(thai, vec!["ฉัน", "รัก", "ภาษา", "ไทย"]);
    assert_eq!(thai.concat(), text);
}

#[test]
fn test_empty_input() {
    assert!(collect(graphemes("", None)).is_empty());
    assert!(collect(words("", None)).is_empty());
    assert!(collect(sentences("", None)).is_empty());
    assert_eq!(line_break_offsets("", None).unwrap().count(), 0);
    assert!(collect(lines("", None)).is_empty());
}

#[test]
fn test_line_break_offsets() {
    let offsets: Vec<usize> = line_break_offsets("The quick (brown) fox.", None)
        .unwrap()
        .collect::<Result<_>>()
        .unwrap();
    assert_eq!(offsets, vec![4, 10, 18, 22]);

    // hyphen allows a break after it, but not before a number
    let offsets: Vec<usize> = line_break_offsets("well-known -5", None)
        .unwrap()
        .collect::<Result<_>>()
        .unwrap();
    assert_eq!(offsets, vec![5, 11, 13]);
}

#[test]
fn test_line_break_kinds() {
    let segmenter = LineSegmenter::new(None).unwrap();
    let breaks: Vec<LineBreak> = segmenter
        .breaks("one\ntwo three")
        .collect::<Result<_>>()
        .unwrap();
    let kinds: Vec<(usize, BreakKind)> = breaks.iter().map(|b| (b.offset, b.kind)).collect();
    assert_eq!(
        kinds,
        vec![
            (4, BreakKind::Mandatory),
            (8, BreakKind::Discretionary),
            (13, BreakKind::Mandatory)
        ]
    );
}

#[test]
fn test_cjk_line_breaks() {
    // ideographs break between each other, but not before a closing mark
    let offsets: Vec<usize> = line_break_offsets("漢字。", None)
        .unwrap()
        .collect::<Result<_>>()
        .unwrap();
    assert_eq!(offsets, vec![1, 3]);
}

#[test]
fn test_supplementary_offsets_are_native() {
    let text = "a\u{1F600} b";
    let segments: Vec<Segment> = words(text, None).unwrap().collect::<Result<_>>().unwrap();
    let spans: Vec<(usize, usize)> = segments.iter().map(|s| (s.start, s.end)).collect();
    assert_eq!(spans, vec![(0, 1), (1, 2), (2, 3), (3, 4)]);

    let offsets: Vec<usize> = line_break_offsets(text, None)
        .unwrap()
        .collect::<Result<_>>()
        .unwrap();
    assert_eq!(offsets.last(), Some(&4));
}

#[test]
fn test_segmenter_reuse() {
    let cache = std::sync::Arc::new(RuleSetCache::new());
    let segmenter = SentenceSegmenter::with_cache(Some("en"), cache.clone()).unwrap();
    for text in ["One. Two.", "Three. Four. Five."] {
        let count = segmenter.segment(text).count();
        assert!(count >= 2);
    }
    assert_eq!(segmenter.segment_list("A b. C d.").unwrap(), vec!["A b. ", "C d."]);
    assert_eq!(cache.stats().builds, 1);
}

#[test]
fn test_abandoned_iteration() {
    let mut segments = words("one two three", None).unwrap();
    let first = segments.next().unwrap().unwrap();
    assert_eq!(first.text, "one");
    drop(segments);
}

#[test]
fn test_unknown_locale_uses_root_rules() {
    let text = "Dr. Smith left. He returned.";
    assert_eq!(
        collect(sentences(text, Some("tlh"))),
        collect(sentences(text, None))
    );
}

#[test]
fn test_malformed_locale_fails_before_segments() {
    let err = sentences("Text.", Some("not a locale")).unwrap_err();
    assert!(err.is_configuration());
    assert!(WordSegmenter::builder().locale("x").build().is_err());
}

#[cfg(feature = "serde")]
#[test]
fn test_serialization() {
    let segment = words("Hi", None).unwrap().next().unwrap().unwrap();
    let json = serde_json::to_value(segment).unwrap();
    assert_eq!(json["text"], "Hi");
    assert_eq!(json["start"], 0);
    assert_eq!(json["end"], 2);
    assert_eq!(json["word_like"], true);

    let line_break = LineBreak {
        offset: 3,
        kind: BreakKind::Mandatory,
    };
    let json = serde_json::to_string(&line_break).unwrap();
    assert_eq!(json, r#"{"offset":3,"kind":"mandatory"}"#);
    let back: LineBreak = serde_json::from_str(&json).unwrap();
    assert_eq!(back, line_break);
}
