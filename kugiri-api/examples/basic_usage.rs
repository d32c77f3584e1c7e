//! Basic usage of the kugiri segmentation API

use kugiri_api::{
    graphemes, line_break_offsets, sentences, words_with_policy, LineSegmenter, WordPolicy,
    WordSegmenter,
};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    // Method 1: free functions with root rules
    println!("=== Method 1: Free Functions ===");
    let text = "Dr. Smith went to the store. He bought some milk. Then he went home.";
    for (i, sentence) in sentences(text, None)?.enumerate() {
        let sentence = sentence?;
        println!("  Sentence {}: [{}, {}) {:?}", i + 1, sentence.start, sentence.end, sentence.as_str());
    }

    let family = "\u{1F468}\u{200D}\u{1F469}\u{200D}\u{1F467} e\u{301}";
    println!("{} grapheme clusters in {family:?}", graphemes(family, None)?.count());

    // Method 2: locale tailoring
    println!("\n=== Method 2: Thai Words ===");
    let tokens: Vec<String> = words_with_policy("ฉันรักภาษาไทย", Some("th"), WordPolicy::WordsOnly)?
        .map(|s| s.map(String::from))
        .collect::<Result<_, _>>()?;
    println!("Thai words: {tokens:?}");

    // Method 3: reusable segmenters
    println!("\n=== Method 3: Reusable Segmenters ===");
    let segmenter = WordSegmenter::builder()
        .locale("ja")
        .policy(WordPolicy::SkipWhitespace)
        .build()?;
    println!("{segmenter}");
    for text in ["私は東京に行きます", "今日は天気です"] {
        println!("  {:?}", segmenter.segment_list(text)?);
    }

    // Method 4: line breaking
    println!("\n=== Method 4: Line Breaks ===");
    let offsets: Vec<usize> = line_break_offsets("The quick (brown) fox.", None)?
        .collect::<Result<_, _>>()?;
    println!("Break opportunities: {offsets:?}");

    let lines = LineSegmenter::new(Some("en"))?;
    for line_break in lines.breaks("one\ntwo three") {
        let line_break = line_break?;
        println!("  {} ({})", line_break.offset, line_break.kind);
    }

    Ok(())
}
