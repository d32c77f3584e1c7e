//! Build-once rule-set cache
//!
//! Every (class, locale) key owns a slot. A filled slot is read without
//! locking. An empty one is filled under the slot's build lock, so
//! concurrent first requests for the same key wait for a single build
//! while other keys proceed. The map lock is only held long enough to find
//! or create the slot.

use std::collections::HashMap;
use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, OnceLock, PoisonError, RwLock};

use kugiri_core::{BoundaryClass, RuleSet};
use lru::LruCache;

use crate::config::CachePolicy;
use crate::error::Result;
use crate::locale::LocaleRef;
use crate::provider::{EmbeddedRuleProvider, RuleProvider};

/// Cache key
pub type CacheKey = (BoundaryClass, LocaleRef);

#[derive(Default)]
struct Entry {
    rules: OnceLock<Arc<RuleSet>>,
    building: Mutex<()>,
}

type Slot = Arc<Entry>;

enum Store {
    Unbounded(RwLock<HashMap<CacheKey, Slot>>),
    Lru(Mutex<LruCache<CacheKey, Slot>>),
}

/// Cache counters
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CacheStats {
    /// Rule sets compiled
    pub builds: u64,
    /// Requests served from an existing rule set
    pub hits: u64,
    /// Entries dropped by the LRU policy
    pub evictions: u64,
    /// Entries currently held
    pub entries: usize,
}

/// Process-wide cache used when callers do not pass their own
static SHARED: OnceLock<Arc<RuleSetCache>> = OnceLock::new();

/// Memoizes rule-set construction per (class, locale)
pub struct RuleSetCache {
    provider: Arc<dyn RuleProvider>,
    policy: CachePolicy,
    store: Store,
    builds: AtomicU64,
    hits: AtomicU64,
    evictions: AtomicU64,
}

impl Default for RuleSetCache {
    fn default() -> Self {
        Self::new()
    }
}

impl RuleSetCache {
    /// Unbounded cache over the embedded locales
    pub fn new() -> Self {
        Self::with_policy(CachePolicy::Unbounded)
    }

    /// Cache over the embedded locales with a retention policy
    pub fn with_policy(policy: CachePolicy) -> Self {
        Self::with_provider(Arc::new(EmbeddedRuleProvider::new()), policy)
    }

    /// Cache in front of a custom provider
    pub fn with_provider(provider: Arc<dyn RuleProvider>, policy: CachePolicy) -> Self {
        let store = match policy {
            CachePolicy::Unbounded => Store::Unbounded(RwLock::new(HashMap::new())),
            CachePolicy::Lru { capacity } => Store::Lru(Mutex::new(LruCache::new(capacity))),
        };
        Self {
            provider,
            policy,
            store,
            builds: AtomicU64::new(0),
            hits: AtomicU64::new(0),
            evictions: AtomicU64::new(0),
        }
    }

    /// The shared default cache
    pub fn shared() -> Arc<RuleSetCache> {
        Arc::clone(SHARED.get_or_init(|| Arc::new(RuleSetCache::new())))
    }

    /// Retention policy
    pub fn policy(&self) -> CachePolicy {
        self.policy
    }

    /// Rule set for `class` in `locale`, compiling it on first request
    ///
    /// A failed build leaves the slot empty, so the next request retries.
    pub fn get_or_build(&self, class: BoundaryClass, locale: &LocaleRef) -> Result<Arc<RuleSet>> {
        let slot = self.slot(class, locale);
        if let Some(rules) = slot.rules.get() {
            self.hits.fetch_add(1, Ordering::Relaxed);
            return Ok(Arc::clone(rules));
        }

        let _building = slot.building.lock().unwrap_or_else(PoisonError::into_inner);
        if let Some(rules) = slot.rules.get() {
            self.hits.fetch_add(1, Ordering::Relaxed);
            return Ok(Arc::clone(rules));
        }

        let rules = Arc::new(self.provider.build(class, locale)?);
        self.builds.fetch_add(1, Ordering::Relaxed);
        Ok(Arc::clone(slot.rules.get_or_init(|| rules)))
    }

    /// Compile rule sets ahead of use
    pub fn prefetch(&self, requests: &[CacheKey]) -> Result<()> {
        #[cfg(feature = "parallel")]
        {
            use rayon::prelude::*;
            requests
                .par_iter()
                .try_for_each(|(class, locale)| self.get_or_build(*class, locale).map(drop))
        }

        #[cfg(not(feature = "parallel"))]
        {
            requests
                .iter()
                .try_for_each(|(class, locale)| self.get_or_build(*class, locale).map(drop))
        }
    }

    /// Number of cached entries
    pub fn len(&self) -> usize {
        match &self.store {
            Store::Unbounded(map) => map.read().unwrap_or_else(PoisonError::into_inner).len(),
            Store::Lru(cache) => cache.lock().unwrap_or_else(PoisonError::into_inner).len(),
        }
    }

    /// Whether nothing is cached
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Drop every cached rule set; counters are kept
    pub fn clear(&self) {
        match &self.store {
            Store::Unbounded(map) => map.write().unwrap_or_else(PoisonError::into_inner).clear(),
            Store::Lru(cache) => cache.lock().unwrap_or_else(PoisonError::into_inner).clear(),
        }
    }

    /// Snapshot of the counters
    pub fn stats(&self) -> CacheStats {
        CacheStats {
            builds: self.builds.load(Ordering::Relaxed),
            hits: self.hits.load(Ordering::Relaxed),
            evictions: self.evictions.load(Ordering::Relaxed),
            entries: self.len(),
        }
    }

    fn slot(&self, class: BoundaryClass, locale: &LocaleRef) -> Slot {
        let key = (class, locale.clone());
        match &self.store {
            Store::Unbounded(map) => {
                if let Some(slot) = map.read().unwrap_or_else(PoisonError::into_inner).get(&key) {
                    return Arc::clone(slot);
                }
                let mut map = map.write().unwrap_or_else(PoisonError::into_inner);
                Arc::clone(map.entry(key).or_default())
            }
            Store::Lru(cache) => {
                let mut cache = cache.lock().unwrap_or_else(PoisonError::into_inner);
                if let Some(slot) = cache.get(&key) {
                    return Arc::clone(slot);
                }
                let slot = Slot::default();
                if let Some(((evicted_class, evicted_locale), _)) = cache.push(key, Arc::clone(&slot)) {
                    self.evictions.fetch_add(1, Ordering::Relaxed);
                    log::debug!("Evicted {evicted_class} rules for '{evicted_locale}'");
                }
                slot
            }
        }
    }
}

impl fmt::Debug for RuleSetCache {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RuleSetCache")
            .field("provider", &self.provider)
            .field("policy", &self.policy)
            .field("stats", &self.stats())
            .finish()
    }
}
