//! Idempotency cache
//!
//! Maps a client-supplied idempotency key to a previously computed
//! transfer result so retried requests replay the stored outcome
//! instead of re-executing. Only successful results are stored.
//!
//! Two requests bearing the same never-seen key that are in flight
//! simultaneously can both observe a miss and both execute; the cache
//! makes no cross-request mutual exclusion guarantee. Sequential
//! retries after a miss-then-hit are safe.

use std::time::{Duration, Instant};

use async_trait::async_trait;
use dashmap::DashMap;

use crate::transfer::TransferResult;

/// Default record lifetime: 24 hours from write
pub const DEFAULT_TTL: Duration = Duration::from_secs(24 * 60 * 60);

/// Cache handle injected into the orchestrator at construction
#[async_trait]
pub trait IdempotencyCache: Send + Sync {
    /// Previously stored result for the key, or miss
    async fn get(&self, key: &str) -> Option<TransferResult>;

    /// Store the result, overwriting any previous value for the key
    async fn put(&self, key: &str, result: TransferResult, ttl: Duration);
}

struct CacheSlot {
    result: TransferResult,
    expires_at: Instant,
}

/// In-process idempotency cache with lazy TTL eviction
///
/// Expired slots are dropped on read; `sweep` reclaims the rest and is
/// meant to run on a periodic task.
#[derive(Default)]
pub struct MemoryIdempotencyCache {
    slots: DashMap<String, CacheSlot>,
}

impl MemoryIdempotencyCache {
    pub fn new() -> Self {
        Self {
            slots: DashMap::new(),
        }
    }

    /// Drop all expired slots
    pub fn sweep(&self) {
        let now = Instant::now();
        self.slots.retain(|_, slot| slot.expires_at > now);
    }

    /// Number of live slots (expired but unswept slots included)
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }
}

#[async_trait]
impl IdempotencyCache for MemoryIdempotencyCache {
    async fn get(&self, key: &str) -> Option<TransferResult> {
        if let Some(slot) = self.slots.get(key) {
            if slot.expires_at > Instant::now() {
                return Some(slot.result.clone());
            }
        }
        // Expired: reclaim eagerly so the map does not pin dead keys
        self.slots
            .remove_if(key, |_, slot| slot.expires_at <= Instant::now());
        None
    }

    async fn put(&self, key: &str, result: TransferResult, ttl: Duration) {
        self.slots.insert(
            key.to_string(),
            CacheSlot {
                result,
                expires_at: Instant::now() + ttl,
            },
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    fn result() -> TransferResult {
        TransferResult {
            success: true,
            transaction_id: Uuid::new_v4(),
        }
    }

    #[tokio::test]
    async fn test_get_miss_then_hit() {
        let cache = MemoryIdempotencyCache::new();
        let key = Uuid::new_v4().to_string();

        assert!(cache.get(&key).await.is_none());

        let stored = result();
        cache.put(&key, stored.clone(), DEFAULT_TTL).await;

        let hit = cache.get(&key).await.expect("Should hit after put");
        assert_eq!(hit.transaction_id, stored.transaction_id);
        assert!(hit.success);
    }

    #[tokio::test]
    async fn test_put_overwrites_previous_value() {
        let cache = MemoryIdempotencyCache::new();
        let key = Uuid::new_v4().to_string();

        cache.put(&key, result(), DEFAULT_TTL).await;
        let second = result();
        cache.put(&key, second.clone(), DEFAULT_TTL).await;

        let hit = cache.get(&key).await.expect("Should hit");
        assert_eq!(hit.transaction_id, second.transaction_id);
    }

    #[tokio::test]
    async fn test_expired_entry_is_a_miss() {
        let cache = MemoryIdempotencyCache::new();
        let key = Uuid::new_v4().to_string();

        cache.put(&key, result(), Duration::from_millis(10)).await;
        tokio::time::sleep(Duration::from_millis(30)).await;

        assert!(cache.get(&key).await.is_none(), "Expired key must miss");
        assert!(cache.is_empty(), "Expired key is reclaimed on read");
    }

    #[tokio::test]
    async fn test_sweep_reclaims_expired_slots() {
        let cache = MemoryIdempotencyCache::new();
        cache.put("a", result(), Duration::from_millis(10)).await;
        cache.put("b", result(), DEFAULT_TTL).await;

        tokio::time::sleep(Duration::from_millis(30)).await;
        cache.sweep();

        assert_eq!(cache.len(), 1);
        assert!(cache.get("b").await.is_some());
    }
}
