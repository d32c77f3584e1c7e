//! Cache and provider tests for kugiri-engine

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Barrier};
use std::thread;
use std::time::Duration;

use kugiri_engine::*;

/// Provider that counts builds and is slow enough for callers to pile up
#[derive(Debug, Default)]
struct CountingProvider {
    inner: EmbeddedRuleProvider,
    builds: AtomicUsize,
}

impl RuleProvider for CountingProvider {
    fn build(&self, class: BoundaryClass, locale: &LocaleRef) -> Result<RuleSet> {
        self.builds.fetch_add(1, Ordering::SeqCst);
        thread::sleep(Duration::from_millis(20));
        self.inner.build(class, locale)
    }
}

fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

#[test]
fn test_concurrent_first_access_builds_once() {
    init_logger();
    const CALLERS: usize = 16;

    let provider = Arc::new(CountingProvider::default());
    let cache = Arc::new(RuleSetCache::with_provider(
        provider.clone(),
        CachePolicy::Unbounded,
    ));
    let barrier = Arc::new(Barrier::new(CALLERS));
    let locale: LocaleRef = "th".parse().unwrap();

    let handles: Vec<_> = (0..CALLERS)
        .map(|_| {
            let cache = Arc::clone(&cache);
            let barrier = Arc::clone(&barrier);
            let locale = locale.clone();
            thread::spawn(move || {
                barrier.wait();
                cache.get_or_build(BoundaryClass::Word, &locale).unwrap()
            })
        })
        .collect();

    let results: Vec<Arc<RuleSet>> = handles.into_iter().map(|h| h.join().unwrap()).collect();

    assert_eq!(provider.builds.load(Ordering::SeqCst), 1);
    assert!(results.iter().all(|r| Arc::ptr_eq(r, &results[0])));
    let stats = cache.stats();
    assert_eq!(stats.builds, 1);
    assert_eq!(stats.hits, (CALLERS - 1) as u64);
}

#[test]
fn test_concurrent_distinct_keys() {
    let provider = Arc::new(CountingProvider::default());
    let cache = Arc::new(RuleSetCache::with_provider(
        provider.clone(),
        CachePolicy::Unbounded,
    ));
    let barrier = Arc::new(Barrier::new(8));

    let handles: Vec<_> = (0..8)
        .map(|i| {
            let cache = Arc::clone(&cache);
            let barrier = Arc::clone(&barrier);
            thread::spawn(move || {
                let class = BoundaryClass::ALL[i % 4];
                barrier.wait();
                cache.get_or_build(class, &LocaleRef::Default).unwrap()
            })
        })
        .collect();
    for handle in handles {
        handle.join().unwrap();
    }

    assert_eq!(provider.builds.load(Ordering::SeqCst), 4);
    assert_eq!(cache.len(), 4);
}

#[test]
fn test_unknown_locale_falls_back_to_root() {
    init_logger();
    let cache = RuleSetCache::new();
    let rules = cache
        .get_or_build(BoundaryClass::Sentence, &"tlh-Latn".parse().unwrap())
        .unwrap();
    assert_eq!(rules.locale(), "root");
}

#[test]
fn test_malformed_locale_is_a_configuration_error() {
    let err = "english please".parse::<LocaleRef>().unwrap_err();
    assert!(matches!(err, EngineError::Configuration(_)));
    assert!(err.is_configuration());
}

#[test]
fn test_external_locale_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("xh.toml");
    std::fs::write(
        &path,
        r#"
[metadata]
code = "xh"
name = "Xhosa"

[word]
mid_letter = [":"]
"#,
    )
    .unwrap();

    let provider = EmbeddedRuleProvider::new()
        .with_locale_file("xh", &path)
        .unwrap();
    let cache = RuleSetCache::with_provider(Arc::new(provider), CachePolicy::default());
    let rules = cache
        .get_or_build(BoundaryClass::Word, &"xh-ZA".parse().unwrap())
        .unwrap();
    assert_eq!(rules.locale(), "xh");
}

#[test]
fn test_invalid_external_locale_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("bad.toml");
    std::fs::write(&path, "[metadata]\ncode = \"xx\"\nname = \"x\"\n[word]\nmid_letter = [\"a\"]\n")
        .unwrap();

    let result = EmbeddedRuleProvider::new().with_locale_file("xx", &path);
    assert!(matches!(result, Err(EngineError::Configuration(_))));
}

#[test]
fn test_missing_external_locale_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("absent.toml");

    let err = EmbeddedRuleProvider::new()
        .with_locale_file("xx", &path)
        .unwrap_err();
    assert!(matches!(&err, EngineError::Io(message) if message.contains("absent.toml")));
    assert!(err.is_configuration());
}

#[test]
fn test_shared_cache_is_shared() {
    let a = RuleSetCache::shared();
    let b = RuleSetCache::shared();
    assert!(Arc::ptr_eq(&a, &b));
}
