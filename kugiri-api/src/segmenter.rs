//! Reusable segmenters
//!
//! A segmenter fixes a boundary class and a locale once. The rule set is
//! looked up when the segmenter is built, so a bad locale tag fails there,
//! and every later `segment` call only creates fresh scan state.

use std::collections::BTreeSet;
use std::fmt;
use std::marker::PhantomData;
use std::sync::Arc;

use kugiri_core::{BoundaryClass, NativeIndex, RuleSet};
use kugiri_engine::{LocaleRef, RuleSetCache};

use crate::cursor::{LineBreaks, LineOffsets, Segments};
use crate::error::Result;
use crate::segment::WordPolicy;

/// Boundary class of a segmenter type, used by [`SegmenterBuilder`]
pub trait Segmenter: Sized {
    /// Boundary class this segmenter finds
    const CLASS: BoundaryClass;

    #[doc(hidden)]
    fn from_parts(locale: LocaleRef, rules: Arc<RuleSet>, policy: WordPolicy) -> Self;
}

fn boundaries(rules: &Arc<RuleSet>, text: &str) -> Result<BTreeSet<NativeIndex>> {
    let mut boundaries = BTreeSet::from([0]);
    for segment in Segments::new(Arc::clone(rules), text, WordPolicy::All) {
        boundaries.insert(segment?.end);
    }
    Ok(boundaries)
}

/// Configures and builds a segmenter
#[derive(Debug, Clone)]
pub struct SegmenterBuilder<S> {
    locale: Option<String>,
    cache: Option<Arc<RuleSetCache>>,
    policy: WordPolicy,
    _segmenter: PhantomData<fn() -> S>,
}

impl<S: Segmenter> Default for SegmenterBuilder<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: Segmenter> SegmenterBuilder<S> {
    /// Create a builder
    pub fn new() -> Self {
        Self {
            locale: None,
            cache: None,
            policy: WordPolicy::default(),
            _segmenter: PhantomData,
        }
    }

    /// Set the locale tag; it is validated by [`build`](Self::build)
    pub fn locale(mut self, locale: impl Into<String>) -> Self {
        self.locale = Some(locale.into());
        self
    }

    /// Use an explicit cache instead of the shared one
    pub fn cache(mut self, cache: Arc<RuleSetCache>) -> Self {
        self.cache = Some(cache);
        self
    }

    /// Build the segmenter
    pub fn build(self) -> Result<S> {
        let locale = LocaleRef::parse(self.locale.as_deref())?;
        let cache = self.cache.unwrap_or_else(RuleSetCache::shared);
        let rules = cache.get_or_build(S::CLASS, &locale)?;
        Ok(S::from_parts(locale, rules, self.policy))
    }
}

impl SegmenterBuilder<WordSegmenter> {
    /// Set which word segments are yielded
    pub fn policy(mut self, policy: WordPolicy) -> Self {
        self.policy = policy;
        self
    }
}

macro_rules! segmenter {
    ($(#[$doc:meta])* $name:ident, $class:expr) => {
        $(#[$doc])*
        #[derive(Debug, Clone)]
        pub struct $name {
            locale: LocaleRef,
            rules: Arc<RuleSet>,
            policy: WordPolicy,
        }

        impl Segmenter for $name {
            const CLASS: BoundaryClass = $class;

            fn from_parts(locale: LocaleRef, rules: Arc<RuleSet>, policy: WordPolicy) -> Self {
                Self {
                    locale,
                    rules,
                    policy,
                }
            }
        }

        impl $name {
            /// Builder with root locale and the shared cache
            pub fn builder() -> SegmenterBuilder<Self> {
                SegmenterBuilder::new()
            }

            /// Segmenter for a locale tag, or root rules for `None`
            pub fn new(locale: Option<&str>) -> Result<Self> {
                let builder = Self::builder();
                match locale {
                    Some(locale) => builder.locale(locale).build(),
                    None => builder.build(),
                }
            }

            /// Segmenter backed by an explicit cache
            pub fn with_cache(locale: Option<&str>, cache: Arc<RuleSetCache>) -> Result<Self> {
                let builder = Self::builder().cache(cache);
                match locale {
                    Some(locale) => builder.locale(locale).build(),
                    None => builder.build(),
                }
            }

            /// Requested locale
            pub fn locale(&self) -> &LocaleRef {
                &self.locale
            }

            /// Compiled rules in use
            pub fn rules(&self) -> &Arc<RuleSet> {
                &self.rules
            }

            /// Boundary offsets of `text` in scalar values, including 0 and
            /// the text length
            pub fn boundaries(&self, text: &str) -> Result<BTreeSet<NativeIndex>> {
                boundaries(&self.rules, text)
            }
        }
    };
}

segmenter!(
    /// Splits text into extended grapheme clusters
    GraphemeSegmenter,
    BoundaryClass::Grapheme
);
segmenter!(
    /// Splits text into words, spaces and punctuation
    WordSegmenter,
    BoundaryClass::Word
);
segmenter!(
    /// Splits text into sentences
    SentenceSegmenter,
    BoundaryClass::Sentence
);
segmenter!(
    /// Finds line-break opportunities
    LineSegmenter,
    BoundaryClass::Line
);

impl GraphemeSegmenter {
    /// Grapheme clusters of `text`
    pub fn segment<'t>(&self, text: &'t str) -> Segments<'t> {
        Segments::new(Arc::clone(&self.rules), text, self.policy)
    }

    /// Grapheme clusters of `text`, collected
    pub fn segment_list(&self, text: &str) -> Result<Vec<String>> {
        self.segment(text).map(|s| s.map(String::from)).collect()
    }
}

impl WordSegmenter {
    /// Segment policy
    pub fn policy(&self) -> WordPolicy {
        self.policy
    }

    /// Word segments of `text`, filtered by the policy
    pub fn segment<'t>(&self, text: &'t str) -> Segments<'t> {
        Segments::new(Arc::clone(&self.rules), text, self.policy)
    }

    /// Word segments of `text`, collected
    pub fn segment_list(&self, text: &str) -> Result<Vec<String>> {
        self.segment(text).map(|s| s.map(String::from)).collect()
    }
}

impl SentenceSegmenter {
    /// Sentences of `text`
    pub fn segment<'t>(&self, text: &'t str) -> Segments<'t> {
        Segments::new(Arc::clone(&self.rules), text, self.policy)
    }

    /// Sentences of `text`, collected
    pub fn segment_list(&self, text: &str) -> Result<Vec<String>> {
        self.segment(text).map(|s| s.map(String::from)).collect()
    }
}

impl LineSegmenter {
    /// Offsets of the break opportunities in `text`, ending with its length
    pub fn segment<'t>(&self, text: &'t str) -> LineOffsets<'t> {
        self.breaks(text).offsets()
    }

    /// Break opportunities with their kind
    pub fn breaks<'t>(&self, text: &'t str) -> LineBreaks<'t> {
        LineBreaks::new(Arc::clone(&self.rules), text)
    }

    /// Substrings between break opportunities
    pub fn lines<'t>(&self, text: &'t str) -> Segments<'t> {
        Segments::new(Arc::clone(&self.rules), text, self.policy)
    }

    /// Break offsets of `text`, collected
    pub fn segment_list(&self, text: &str) -> Result<Vec<NativeIndex>> {
        self.segment(text).collect()
    }
}

impl fmt::Display for GraphemeSegmenter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "GraphemeSegmenter(locale='{}')", self.locale)
    }
}

impl fmt::Display for WordSegmenter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "WordSegmenter(locale='{}', policy={})", self.locale, self.policy)
    }
}

impl fmt::Display for SentenceSegmenter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SentenceSegmenter(locale='{}')", self.locale)
    }
}

impl fmt::Display for LineSegmenter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "LineSegmenter(locale='{}')", self.locale)
    }
}
