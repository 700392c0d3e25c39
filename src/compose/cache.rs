use std::collections::{BTreeMap, HashMap};
use std::num::NonZeroUsize;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use crate::foundation::core::PixelBuffer;

/// How the cache bounds its size.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum EvictionPolicy {
    /// Keep every entry for the cache's lifetime. Memory grows with the number of distinct tokens.
    #[default]
    Unbounded,
    /// Keep at most `capacity` entries, dropping the least recently used.
    ///
    /// Lookups and inserts cost `O(log capacity)` under the cache lock.
    Lru {
        /// Maximum number of entries.
        capacity: NonZeroUsize,
    },
}

#[derive(Default)]
struct CacheInner {
    // Buffer and the tick of its last use; 0 until first ordered.
    entries: HashMap<String, (Arc<PixelBuffer>, u64)>,
    // Tick -> token, oldest first. Only maintained for `Lru`.
    recency: BTreeMap<u64, String>,
    tick: u64,
}

impl CacheInner {
    fn touch(&mut self, token: &str) {
        let Some((_, last)) = self.entries.get_mut(token) else {
            return;
        };
        self.tick += 1;
        let old = std::mem::replace(last, self.tick);
        let key = self.recency.remove(&old).unwrap_or_else(|| token.to_string());
        self.recency.insert(self.tick, key);
    }
}

/// Initials token -> rendered buffer.
///
/// Safe to share between threads. Entries are never modified after insertion; a later `put` for
/// the same token replaces the entry (last writer wins). Concurrent misses on one token are not
/// deduplicated: each caller renders, and all results are equivalent because rendering is
/// deterministic.
#[derive(Default)]
pub struct AvatarCache {
    policy: EvictionPolicy,
    inner: Mutex<CacheInner>,
}

impl std::fmt::Debug for AvatarCache {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AvatarCache")
            .field("policy", &self.policy)
            .field("len", &self.len())
            .finish()
    }
}

impl AvatarCache {
    /// Empty cache with the given policy.
    pub fn new(policy: EvictionPolicy) -> Self {
        Self {
            policy,
            inner: Mutex::new(CacheInner::default()),
        }
    }

    /// Empty cache that never evicts.
    pub fn unbounded() -> Self {
        Self::new(EvictionPolicy::Unbounded)
    }

    /// Empty LRU cache holding at most `capacity` entries.
    pub fn lru(capacity: NonZeroUsize) -> Self {
        Self::new(EvictionPolicy::Lru { capacity })
    }

    /// Configured policy.
    pub fn policy(&self) -> EvictionPolicy {
        self.policy
    }

    /// Buffer cached for `token`, if any. Marks the entry as recently used.
    pub fn get(&self, token: &str) -> Option<Arc<PixelBuffer>> {
        let mut inner = self.lock();
        let hit = inner.entries.get(token).map(|(buf, _)| buf.clone())?;
        if matches!(self.policy, EvictionPolicy::Lru { .. }) {
            inner.touch(token);
        }
        Some(hit)
    }

    /// Store `buffer` under `token`, replacing any previous entry.
    pub fn put(&self, token: impl Into<String>, buffer: Arc<PixelBuffer>) {
        let token = token.into();
        let mut inner = self.lock();
        match self.policy {
            EvictionPolicy::Unbounded => {
                inner.entries.insert(token, (buffer, 0));
            }
            EvictionPolicy::Lru { capacity } => {
                let slot = inner
                    .entries
                    .entry(token.clone())
                    .or_insert_with(|| (Arc::clone(&buffer), 0));
                slot.0 = buffer;
                inner.touch(&token);
                while inner.entries.len() > capacity.get() {
                    let Some((_, old)) = inner.recency.pop_first() else {
                        break;
                    };
                    inner.entries.remove(&old);
                }
            }
        }
    }

    /// Return `true` when `token` has an entry. Does not affect recency.
    pub fn contains(&self, token: &str) -> bool {
        self.lock().entries.contains_key(token)
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.lock().entries.len()
    }

    /// Return `true` when the cache holds nothing.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Drop every entry.
    pub fn clear(&self) {
        let mut inner = self.lock();
        inner.entries.clear();
        inner.recency.clear();
    }

    // Entries are only replaced whole, so a panic while holding the lock cannot leave a torn map.
    fn lock(&self) -> MutexGuard<'_, CacheInner> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/compose/cache.rs"]
mod tests;
