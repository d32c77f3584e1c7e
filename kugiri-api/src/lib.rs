//! Public API for kugiri text segmentation
//!
//! This crate finds grapheme-cluster, word, sentence and line-break
//! boundaries in text, with locale tailoring. Segments are produced lazily:
//! every cursor advances the underlying scanner by one boundary per pull,
//! and dropping it abandons the scan.
//!
//! Offsets are counted in Unicode scalar values.
//!
//! # Example
//!
//! ```rust
//! use kugiri_api::{sentences, words_with_policy, WordPolicy};
//!
//! let found: Vec<String> = sentences("Dr. Smith left. He returned.", None)?
//!     .map(|s| s.map(String::from))
//!     .collect::<Result<_, _>>()?;
//! assert_eq!(found, vec!["Dr. Smith left. ", "He returned."]);
//!
//! let tokens: Vec<String> = words_with_policy("Hello, world!", None, WordPolicy::WordsOnly)?
//!     .map(|s| s.map(String::from))
//!     .collect::<Result<_, _>>()?;
//! assert_eq!(tokens, vec!["Hello", "world"]);
//! # Ok::<(), kugiri_api::ApiError>(())
//! ```

#![warn(missing_docs)]

pub mod cursor;
pub mod error;
pub mod segment;
pub mod segmenter;

// Re-export key types
pub use cursor::{LineBreaks, LineOffsets, Segments};
pub use error::{ApiError, Result};
pub use segment::{LineBreak, Segment, WordPolicy};
pub use segmenter::{
    GraphemeSegmenter, LineSegmenter, Segmenter, SegmenterBuilder, SentenceSegmenter,
    WordSegmenter,
};

// Re-export from the lower layers for convenience
pub use kugiri_core::{BoundaryClass, BreakKind, NativeIndex};
pub use kugiri_engine::{CachePolicy, CacheStats, LocaleRef, LocaleTag, RuleSetCache};

/// Extended grapheme clusters of `text`
pub fn graphemes<'t>(text: &'t str, locale: Option<&str>) -> Result<Segments<'t>> {
    Ok(GraphemeSegmenter::new(locale)?.segment(text))
}

/// Word segments of `text`, punctuation and whitespace included
pub fn words<'t>(text: &'t str, locale: Option<&str>) -> Result<Segments<'t>> {
    words_with_policy(text, locale, WordPolicy::All)
}

/// Word segments of `text`, filtered by `policy`
pub fn words_with_policy<'t>(
    text: &'t str,
    locale: Option<&str>,
    policy: WordPolicy,
) -> Result<Segments<'t>> {
    let mut builder = WordSegmenter::builder().policy(policy);
    if let Some(locale) = locale {
        builder = builder.locale(locale);
    }
    Ok(builder.build()?.segment(text))
}

/// Sentences of `text`
pub fn sentences<'t>(text: &'t str, locale: Option<&str>) -> Result<Segments<'t>> {
    Ok(SentenceSegmenter::new(locale)?.segment(text))
}

/// Substrings of `text` between line-break opportunities
pub fn lines<'t>(text: &'t str, locale: Option<&str>) -> Result<Segments<'t>> {
    Ok(LineSegmenter::new(locale)?.lines(text))
}

/// Line-break opportunities of `text`, ending with its length
pub fn line_break_offsets<'t>(text: &'t str, locale: Option<&str>) -> Result<LineOffsets<'t>> {
    Ok(LineSegmenter::new(locale)?.segment(text))
}

/// Compile rule sets in the shared cache ahead of first use
pub fn prefetch(classes: &[BoundaryClass], locales: &[&str]) -> Result<()> {
    let mut requests = Vec::with_capacity(classes.len() * locales.len().max(1));
    let locales: Vec<LocaleRef> = if locales.is_empty() {
        vec![LocaleRef::Default]
    } else {
        locales
            .iter()
            .map(|&raw| LocaleRef::parse(Some(raw)))
            .collect::<kugiri_engine::Result<_>>()?
    };
    for &class in classes {
        for locale in &locales {
            requests.push((class, locale.clone()));
        }
    }
    RuleSetCache::shared().prefetch(&requests)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn collect(segments: Result<Segments<'_>>) -> Vec<String> {
        segments
            .unwrap()
            .map(|s| s.map(String::from))
            .collect::<Result<_>>()
            .unwrap()
    }

    #[test]
    fn test_free_functions() {
        assert_eq!(collect(graphemes("e\u{301}x", None)), vec!["e\u{301}", "x"]);
        assert_eq!(
            collect(words("Hello, world!", None)),
            vec!["Hello", ",", " ", "world", "!"]
        );
        assert_eq!(collect(sentences("Hi. Bye.", None)), vec!["Hi. ", "Bye."]);
        assert_eq!(collect(lines("a b", None)), vec!["a ", "b"]);
        let offsets: Vec<usize> = line_break_offsets("a b", None)
            .unwrap()
            .collect::<Result<_>>()
            .unwrap();
        assert_eq!(offsets, vec![2, 3]);
    }

    #[test]
    fn test_malformed_locale() {
        assert!(words("text", Some("!!")).is_err());
        assert!(line_break_offsets("text", Some("en US")).is_err());
    }

    #[test]
    fn test_prefetch() {
        prefetch(&BoundaryClass::ALL, &["th", "ja"]).unwrap();
        prefetch(&[BoundaryClass::Word], &[]).unwrap();
        assert!(prefetch(&[BoundaryClass::Word], &["??"]).is_err());
    }
}
