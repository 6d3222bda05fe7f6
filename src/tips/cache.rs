//! Tips cache with remote, on-disk and bundled fallbacks
//!
//! The item list starts from the on-disk cache, or the bundled list when no
//! usable cache exists. `refresh` walks remote, then on-disk cache, then
//! bundled, stopping at the first that yields a list. Lists are always
//! replaced wholesale.
//!
//! Refresh is single-flight: callers that queue behind a running refresh
//! return once it completes instead of starting another one.

use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, RwLock};
use std::time::Duration;

use tokio::sync::Mutex;
use tracing::{debug, info, warn};

use super::source::TipSource;
use crate::models::Tip;
use crate::storage::{read_json_optional, write_json_atomic};

/// Where the current item list came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TipsOrigin {
    Remote,
    Cache,
    Bundled,
}

pub struct TipsCache {
    cache_path: PathBuf,
    source: Option<Arc<dyn TipSource>>,
    timeout: Duration,
    bundled: Vec<Tip>,
    items: RwLock<Vec<Tip>>,
    origin: RwLock<TipsOrigin>,
    refresh_lock: Mutex<()>,
    generation: AtomicU64,
}

impl TipsCache {
    /// Create the cache and load the initial list
    pub fn new(
        cache_path: impl Into<PathBuf>,
        source: Option<Arc<dyn TipSource>>,
        timeout: Duration,
        bundled: Vec<Tip>,
    ) -> Self {
        let cache_path = cache_path.into();
        let (items, origin) = match load_cached(&cache_path) {
            Some(cached) => (cached, TipsOrigin::Cache),
            None => (bundled.clone(), TipsOrigin::Bundled),
        };
        debug!("Tips initialized from {:?} with {} items", origin, items.len());

        Self {
            cache_path,
            source,
            timeout,
            bundled,
            items: RwLock::new(items),
            origin: RwLock::new(origin),
            refresh_lock: Mutex::new(()),
            generation: AtomicU64::new(0),
        }
    }

    /// Snapshot of the current list
    pub fn current_items(&self) -> Vec<Tip> {
        match self.items.read() {
            Ok(items) => items.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }

    pub fn origin(&self) -> TipsOrigin {
        match self.origin.read() {
            Ok(origin) => *origin,
            Err(poisoned) => *poisoned.into_inner(),
        }
    }

    /// Number of refreshes that have completed
    pub fn generation(&self) -> u64 {
        self.generation.load(Ordering::Acquire)
    }

    pub fn cache_path(&self) -> &Path {
        &self.cache_path
    }

    /// Refresh the list; never fails
    pub async fn refresh(&self) {
        let observed = self.generation();
        let _guard = self.refresh_lock.lock().await;

        if self.generation() != observed {
            debug!("Joined an in-flight tips refresh");
            return;
        }

        self.run_refresh().await;
        self.generation.fetch_add(1, Ordering::AcqRel);
    }

    async fn run_refresh(&self) {
        if let Some(source) = &self.source {
            match tokio::time::timeout(self.timeout, source.fetch()).await {
                Ok(Ok(items)) => {
                    info!("Fetched {} tips from remote", items.len());
                    self.persist(&items);
                    self.replace(items, TipsOrigin::Remote);
                    return;
                }
                Ok(Err(e)) => warn!("Remote tips unavailable: {}", e),
                Err(_) => warn!(
                    "Remote tips request timed out after {} seconds",
                    self.timeout.as_secs()
                ),
            }
        }

        if let Some(cached) = load_cached(&self.cache_path) {
            debug!("Using {} cached tips", cached.len());
            self.replace(cached, TipsOrigin::Cache);
            return;
        }

        debug!("Falling back to bundled tips");
        let bundled = self.bundled.clone();
        self.persist(&bundled);
        self.replace(bundled, TipsOrigin::Bundled);
    }

    fn replace(&self, items: Vec<Tip>, origin: TipsOrigin) {
        match self.items.write() {
            Ok(mut current) => *current = items,
            Err(poisoned) => *poisoned.into_inner() = items,
        }
        match self.origin.write() {
            Ok(mut current) => *current = origin,
            Err(poisoned) => *poisoned.into_inner() = origin,
        }
    }

    fn persist(&self, items: &[Tip]) {
        if let Err(e) = write_json_atomic(&self.cache_path, &items) {
            warn!("Failed to write tips cache: {}", e);
        }
    }
}

/// A cache file counts only when it exists, decodes and is non-empty
fn load_cached(path: &Path) -> Option<Vec<Tip>> {
    match read_json_optional::<Vec<Tip>, _>(path) {
        Ok(Some(items)) if !items.is_empty() => Some(items),
        Ok(_) => None,
        Err(e) => {
            warn!("Ignoring unreadable tips cache: {}", e);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{StoryCashError, StoryCashResult};
    use async_trait::async_trait;
    use std::sync::atomic::AtomicUsize;
    use tempfile::TempDir;

    struct FixedSource(Vec<Tip>);

    #[async_trait]
    impl TipSource for FixedSource {
        async fn fetch(&self) -> StoryCashResult<Vec<Tip>> {
            Ok(self.0.clone())
        }
    }

    struct FailingSource;

    #[async_trait]
    impl TipSource for FailingSource {
        async fn fetch(&self) -> StoryCashResult<Vec<Tip>> {
            Err(StoryCashError::Network("connection refused".into()))
        }
    }

    struct SlowSource {
        delay: Duration,
        calls: AtomicUsize,
        items: Vec<Tip>,
    }

    #[async_trait]
    impl TipSource for SlowSource {
        async fn fetch(&self) -> StoryCashResult<Vec<Tip>> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            tokio::time::sleep(self.delay).await;
            Ok(self.items.clone())
        }
    }

    fn bundled() -> Vec<Tip> {
        vec![Tip::new(1, "Bundled", "Shipped with the app")]
    }

    fn remote() -> Vec<Tip> {
        vec![
            Tip::new(10, "Remote A", "From the server"),
            Tip::new(11, "Remote B", "Also from the server"),
        ]
    }

    fn cache_path(temp_dir: &TempDir) -> PathBuf {
        temp_dir.path().join("data").join("tips_cache.json")
    }

    #[test]
    fn test_initial_items_prefer_cache() {
        let temp_dir = TempDir::new().unwrap();
        let path = cache_path(&temp_dir);
        write_json_atomic(&path, &remote()).unwrap();

        let cache = TipsCache::new(&path, None, Duration::from_secs(12), bundled());
        assert_eq!(cache.current_items(), remote());
        assert_eq!(cache.origin(), TipsOrigin::Cache);
    }

    #[test]
    fn test_initial_items_fall_back_to_bundled() {
        let temp_dir = TempDir::new().unwrap();
        let path = cache_path(&temp_dir);
        std::fs::create_dir_all(path.parent().unwrap()).unwrap();
        std::fs::write(&path, "not json").unwrap();

        let cache = TipsCache::new(&path, None, Duration::from_secs(12), bundled());
        assert_eq!(cache.current_items(), bundled());
        assert_eq!(cache.origin(), TipsOrigin::Bundled);
    }

    #[tokio::test]
    async fn test_refresh_from_remote_writes_cache() {
        let temp_dir = TempDir::new().unwrap();
        let path = cache_path(&temp_dir);
        let source: Arc<dyn TipSource> = Arc::new(FixedSource(remote()));

        let cache = TipsCache::new(&path, Some(source), Duration::from_secs(12), bundled());
        cache.refresh().await;

        assert_eq!(cache.current_items(), remote());
        assert_eq!(cache.origin(), TipsOrigin::Remote);
        let on_disk: Vec<Tip> = read_json_optional(&path).unwrap().unwrap();
        assert_eq!(on_disk, remote());
    }

    #[tokio::test]
    async fn test_failing_remote_without_cache_uses_bundled_and_persists() {
        let temp_dir = TempDir::new().unwrap();
        let path = cache_path(&temp_dir);
        let source: Arc<dyn TipSource> = Arc::new(FailingSource);

        let cache = TipsCache::new(&path, Some(source), Duration::from_secs(12), bundled());
        cache.refresh().await;

        assert_eq!(cache.current_items(), bundled());
        assert_eq!(cache.origin(), TipsOrigin::Bundled);
        let on_disk: Vec<Tip> = read_json_optional(&path).unwrap().unwrap();
        assert_eq!(on_disk, bundled());
    }

    #[tokio::test]
    async fn test_failing_remote_uses_existing_cache() {
        let temp_dir = TempDir::new().unwrap();
        let path = cache_path(&temp_dir);
        let source: Arc<dyn TipSource> = Arc::new(FailingSource);
        let cache = TipsCache::new(&path, Some(source), Duration::from_secs(12), bundled());

        // Written after construction, so only refresh can pick it up
        write_json_atomic(&path, &remote()).unwrap();
        cache.refresh().await;

        assert_eq!(cache.current_items(), remote());
        assert_eq!(cache.origin(), TipsOrigin::Cache);
    }

    #[tokio::test]
    async fn test_no_remote_starts_at_cache() {
        let temp_dir = TempDir::new().unwrap();
        let path = cache_path(&temp_dir);
        let cache = TipsCache::new(&path, None, Duration::from_secs(12), bundled());
        assert_eq!(cache.origin(), TipsOrigin::Bundled);

        cache.refresh().await;
        assert_eq!(cache.current_items(), bundled());
        assert!(path.exists());

        write_json_atomic(&path, &remote()).unwrap();
        cache.refresh().await;
        assert_eq!(cache.current_items(), remote());
    }

    #[tokio::test]
    async fn test_slow_remote_times_out() {
        let temp_dir = TempDir::new().unwrap();
        let path = cache_path(&temp_dir);
        let source: Arc<dyn TipSource> = Arc::new(SlowSource {
            delay: Duration::from_secs(30),
            calls: AtomicUsize::new(0),
            items: remote(),
        });

        let cache = TipsCache::new(&path, Some(source), Duration::from_millis(50), bundled());
        cache.refresh().await;

        assert_eq!(cache.current_items(), bundled());
        assert_eq!(cache.generation(), 1);
    }

    #[tokio::test]
    async fn test_concurrent_refresh_is_single_flight() {
        let temp_dir = TempDir::new().unwrap();
        let path = cache_path(&temp_dir);
        let source = Arc::new(SlowSource {
            delay: Duration::from_millis(100),
            calls: AtomicUsize::new(0),
            items: remote(),
        });
        let dyn_source: Arc<dyn TipSource> = source.clone();

        let cache = TipsCache::new(&path, Some(dyn_source), Duration::from_secs(12), bundled());
        tokio::join!(cache.refresh(), cache.refresh(), cache.refresh());

        assert_eq!(source.calls.load(Ordering::SeqCst), 1);
        assert_eq!(cache.generation(), 1);
        assert_eq!(cache.current_items(), remote());

        // A refresh started after completion runs again
        cache.refresh().await;
        assert_eq!(source.calls.load(Ordering::SeqCst), 2);
        assert_eq!(cache.generation(), 2);
    }
}
