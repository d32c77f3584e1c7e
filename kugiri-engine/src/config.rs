//! Configuration types for the engine

use std::num::NonZeroUsize;

/// Retention policy for compiled rule sets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CachePolicy {
    /// Keep every rule set for the lifetime of the cache
    #[default]
    Unbounded,
    /// Keep at most `capacity` rule sets, evicting the least recently used
    Lru {
        /// Maximum number of cached rule sets
        capacity: NonZeroUsize,
    },
}

impl CachePolicy {
    /// LRU policy; a zero capacity is raised to one
    pub fn lru(capacity: usize) -> Self {
        CachePolicy::Lru {
            capacity: NonZeroUsize::new(capacity).unwrap_or(NonZeroUsize::MIN),
        }
    }

    /// Maximum number of entries, if bounded
    pub fn capacity(&self) -> Option<usize> {
        match self {
            CachePolicy::Unbounded => None,
            CachePolicy::Lru { capacity } => Some(capacity.get()),
        }
    }
}
