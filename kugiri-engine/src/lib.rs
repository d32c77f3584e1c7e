//! Locale resolution and rule-set caching for kugiri
//!
//! This crate sits between the boundary tables in `kugiri-core` and the
//! public segmenters: it canonicalizes locale tags, resolves them to locale
//! data with root fallback, and memoizes compiled rule sets so each
//! (class, locale) pair is built at most once.

#![warn(missing_docs)]

pub mod cache;
pub mod config;
pub mod error;
pub mod locale;
pub mod provider;

// Re-export key types
pub use cache::{CacheKey, CacheStats, RuleSetCache};
pub use config::CachePolicy;
pub use error::{EngineError, Result};
pub use locale::{LocaleRef, LocaleTag};
pub use provider::{EmbeddedRuleProvider, RuleProvider};

// Re-export from core for convenience
pub use kugiri_core::{BoundaryClass, RuleSet};
