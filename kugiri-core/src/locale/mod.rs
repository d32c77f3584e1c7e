//! Locale rule data
//!
//! Locale tailorings are declarative TOML: extra word-joining punctuation,
//! extra sentence terminators, abbreviation and sentence-starter tables,
//! and lexicons for scripts written without spaces.

pub mod config;
pub mod loader;

pub use config::{DictionaryData, LocaleData, Metadata, SentenceTailoring, WordTailoring};
pub use loader::{embedded, embedded_codes, root, ROOT};
