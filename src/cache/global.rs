//! Process Cache Module
//!
//! The one cache instance shared by the whole process.

use std::sync::OnceLock;
use std::time::Duration;

use serde_json::Value;
use tracing::debug;

use crate::cache::TtlCache;
use crate::config::Config;

/// Process-wide cache: string keys, arbitrary JSON values.
pub type ProcessCache = TtlCache<String, Value>;

static PROCESS_CACHE: OnceLock<ProcessCache> = OnceLock::new();

impl TtlCache<String, Value> {
    // == Get Instance ==
    /// Returns the process cache, creating it on first use.
    ///
    /// Only the first call decides the TTL and arms the expiry task; the
    /// `ttl` of every later call is ignored. Concurrent first calls block
    /// until one of them has finished construction, so there is never more
    /// than one instance or one timer.
    ///
    /// # Example
    /// ```no_run
    /// use std::time::Duration;
    /// use extension::ProcessCache;
    ///
    /// let cache = ProcessCache::get_instance(Duration::from_secs(60));
    /// cache.set("answer", 42);
    /// assert_eq!(cache.get("answer", serde_json::Value::Null), 42);
    /// ```
    pub fn get_instance(ttl: Duration) -> &'static ProcessCache {
        let cache = PROCESS_CACHE.get_or_init(|| TtlCache::new(ttl));
        if cache.ttl() != ttl {
            debug!(
                "Process cache already exists with ttl {:?}, ignoring {:?}",
                cache.ttl(),
                ttl
            );
        }
        cache
    }

    /// Returns the process cache, creating it with the configured TTL.
    pub fn from_config(config: &Config) -> &'static ProcessCache {
        Self::get_instance(config.cache_ttl)
    }

    /// Returns the process cache only if it has already been created.
    pub fn try_instance() -> Option<&'static ProcessCache> {
        PROCESS_CACHE.get()
    }
}
