//! Single-flight cache of provisioned test apps, keyed by spec key

use std::future::Future;
use std::sync::Arc;

use ably_shared::apps::TestVars;
use dashmap::DashMap;
use tokio::sync::OnceCell;

use crate::error::SetupResult;

/// Cache handle. Clones share the same entries.
///
/// Every key owns a `OnceCell`: concurrent misses for the same key wait on a
/// single initialisation, while different keys never block each other. A
/// failed initialisation leaves nothing behind; the next caller retries.
#[derive(Debug, Clone, Default)]
pub struct FixtureCache {
    entries: Arc<DashMap<String, Arc<OnceCell<TestVars>>>>,
}

impl FixtureCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn get_or_try_init<F, Fut>(&self, key: &str, init: F) -> SetupResult<TestVars>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = SetupResult<TestVars>>,
    {
        // the map guard must be released before awaiting
        let cell = {
            let entry = self.entries.entry(key.to_string()).or_default();
            Arc::clone(entry.value())
        };
        let result = cell.get_or_try_init(init).await.cloned();
        if result.is_err() {
            // drop the empty cell unless another caller is still waiting on it;
            // clones of the cell are only taken under the shard lock
            self.entries.remove_if(key, |_, c| {
                Arc::ptr_eq(c, &cell) && !c.initialized() && Arc::strong_count(c) == 2
            });
        }
        result
    }

    pub fn get(&self, key: &str) -> Option<TestVars> {
        self.entries.get(key).and_then(|cell| cell.get().cloned())
    }

    pub fn contains(&self, key: &str) -> bool {
        self.entries
            .get(key)
            .is_some_and(|cell| cell.initialized())
    }

    /// Evict a populated entry. Keys still being provisioned are left alone.
    pub fn remove(&self, key: &str) -> Option<TestVars> {
        self.entries
            .remove_if(key, |_, cell| cell.initialized())
            .and_then(|(_, cell)| cell.get().cloned())
    }

    /// Keys with a populated entry.
    pub fn keys(&self) -> Vec<String> {
        self.entries
            .iter()
            .filter(|entry| entry.value().initialized())
            .map(|entry| entry.key().clone())
            .collect()
    }

    pub fn len(&self) -> usize {
        self.entries
            .iter()
            .filter(|entry| entry.value().initialized())
            .count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::time::Duration;

    use super::*;
    use crate::error::SetupError;

    fn vars(app_id: &str) -> TestVars {
        TestVars {
            app_id: app_id.to_string(),
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn test_second_lookup_hits_cache() {
        let cache = FixtureCache::new();
        let calls = AtomicUsize::new(0);

        for _ in 0..2 {
            let got = cache
                .get_or_try_init("default.json", || async {
                    calls.fetch_add(1, Ordering::SeqCst);
                    Ok(vars("app1"))
                })
                .await
                .unwrap();
            assert_eq!(got.app_id, "app1");
        }

        assert_eq!(calls.load(Ordering::SeqCst), 1);
        assert_eq!(cache.len(), 1);
    }

    #[tokio::test]
    async fn test_failed_init_is_retried() {
        let cache = FixtureCache::new();

        let first = cache
            .get_or_try_init("k", || async {
                Err::<TestVars, _>(SetupError::MissingConfiguration("ABLY_TLS_PORT"))
            })
            .await;
        assert!(first.is_err());
        assert!(!cache.contains("k"));
        assert!(cache.is_empty());
        assert!(cache.entries.is_empty());

        let second = cache
            .get_or_try_init("k", || async { Ok(vars("app2")) })
            .await
            .unwrap();
        assert_eq!(second.app_id, "app2");
        assert!(cache.contains("k"));
    }

    #[tokio::test]
    async fn test_remove_then_reinit() {
        let cache = FixtureCache::new();
        cache
            .get_or_try_init("k", || async { Ok(vars("old")) })
            .await
            .unwrap();

        let removed = cache.remove("k").unwrap();
        assert_eq!(removed.app_id, "old");
        assert!(cache.get("k").is_none());
        assert!(cache.remove("k").is_none());

        let fresh = cache
            .get_or_try_init("k", || async { Ok(vars("new")) })
            .await
            .unwrap();
        assert_eq!(fresh.app_id, "new");
    }

    #[tokio::test]
    async fn test_remove_missing_key() {
        let cache = FixtureCache::new();
        assert!(cache.remove("never").is_none());
        assert!(cache.keys().is_empty());
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_concurrent_misses_share_one_init() {
        let cache = FixtureCache::new();
        let calls = Arc::new(AtomicUsize::new(0));

        let tasks: Vec<_> = (0..8)
            .map(|_| {
                let cache = cache.clone();
                let calls = calls.clone();
                tokio::spawn(async move {
                    cache
                        .get_or_try_init("shared.json", || async move {
                            calls.fetch_add(1, Ordering::SeqCst);
                            tokio::time::sleep(Duration::from_millis(50)).await;
                            Ok(vars("shared"))
                        })
                        .await
                })
            })
            .collect();

        for result in futures::future::join_all(tasks).await {
            assert_eq!(result.unwrap().unwrap().app_id, "shared");
        }
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn test_unrelated_keys_do_not_serialise() {
        let cache = FixtureCache::new();
        let (tx, rx) = tokio::sync::oneshot::channel::<()>();

        // "slow" only completes once "fast" has been provisioned
        let slow = {
            let cache = cache.clone();
            tokio::spawn(async move {
                cache
                    .get_or_try_init("slow", || async move {
                        rx.await.ok();
                        Ok(vars("slow"))
                    })
                    .await
            })
        };
        tokio::time::sleep(Duration::from_millis(20)).await;

        let fast = cache
            .get_or_try_init("fast", || async { Ok(vars("fast")) })
            .await
            .unwrap();
        assert_eq!(fast.app_id, "fast");
        assert!(!cache.contains("slow"));
        assert!(cache.remove("slow").is_none());

        tx.send(()).unwrap();
        assert_eq!(slow.await.unwrap().unwrap().app_id, "slow");
        assert_eq!(cache.len(), 2);
    }
}
