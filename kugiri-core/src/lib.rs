//! Boundary tables and scanner for locale-aware text segmentation
//!
//! This crate holds the deterministic part of kugiri: boundary property
//! tables for the four standard boundary classes, locale tailoring data,
//! compiled rule sets, and the scanner that turns a rule set and a text into
//! a stream of boundary offsets.
//!
//! # Architecture
//!
//! - **Tables**: per-class property classification and pair rules, the
//!   abbreviation trie and the dictionary segmenter for spaceless scripts
//! - **Locale data**: embedded TOML tailorings layered over root
//! - **Rules**: a [`RuleSet`] compiled once per (class, locale) and shared
//! - **Scanning**: a [`BoundaryScanner`] per text, plus the [`IndexMapper`]
//!   between scalar-value and code-unit offsets
//!
//! # Example
//!
//! ```rust
//! use std::sync::Arc;
//! use kugiri_core::{BoundaryClass, BoundaryScanner, RuleSet};
//!
//! let rules = Arc::new(RuleSet::root(BoundaryClass::Sentence).unwrap());
//! let mut scanner = BoundaryScanner::new(rules, "Dr. Smith left. He returned.");
//!
//! let mut offsets = Vec::new();
//! while let Some(boundary) = scanner.next_boundary().unwrap() {
//!     offsets.push(boundary.offset);
//! }
//! assert_eq!(offsets, vec![16, 28]);
//! ```

pub mod character_window;
pub mod error;
pub mod index;
pub mod locale;
pub mod properties;
pub mod rules;
pub mod scanner;
pub mod tables;
pub mod types;

pub use error::{CoreError, Result};
pub use index::IndexMapper;
pub use locale::LocaleData;
pub use properties::{CharProperties, GeneralCategory, UnicodeProperties};
pub use rules::RuleSet;
pub use scanner::{BoundaryScanner, ScanPhase};
pub use tables::dictionary::{Lexicon, Script};
pub use types::{Boundary, BoundaryClass, BreakKind, NativeIndex, ScanIndex};
