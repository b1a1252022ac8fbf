//! Cache Store Module
//!
//! Thread-safe key-value store with a single, whole-cache TTL expiry.

use std::borrow::Borrow;
use std::collections::HashMap;
use std::fmt::Debug;
use std::hash::Hash;
use std::sync::Arc;
use std::time::Duration;

use parking_lot::RwLock;
use tracing::info;

use crate::error::{Error, Result};
use crate::tasks::{spawn_expiry_task, ExpiryTimer};

// == TTL Cache ==
/// Key-value store shared between threads, cleared once after its TTL.
///
/// Every operation takes the internal lock exactly once, so each call is
/// atomic with respect to every other call, the expiry clear included.
#[derive(Debug)]
pub struct TtlCache<K, V> {
    /// Key-value storage
    entries: Arc<RwLock<HashMap<K, V>>>,
    /// Delay before the whole cache is cleared, zero = never
    ttl: Duration,
    /// Pending expiry, absent when `ttl` is zero
    expiry: Option<ExpiryTimer>,
}

impl<K, V> TtlCache<K, V>
where
    K: Eq + Hash + Clone + Send + Sync + 'static,
    V: Clone + Send + Sync + 'static,
{
    // == Constructor ==
    /// Creates an empty cache and arms its expiry task when `ttl` is non-zero.
    ///
    /// # Arguments
    /// * `ttl` - Delay after which all entries are removed, once
    pub fn new(ttl: Duration) -> Self {
        let entries = Arc::new(RwLock::new(HashMap::new()));
        let expiry = spawn_expiry_task(Arc::downgrade(&entries), ttl);

        info!("Initialized cache with ttl {:?}", ttl);

        Self {
            entries,
            ttl,
            expiry,
        }
    }

    // == Set ==
    /// Stores a value, overwriting any previous value for the key.
    pub fn set(&self, key: impl Into<K>, value: impl Into<V>) {
        self.entries.write().insert(key.into(), value.into());
    }

    // == Get ==
    /// Returns the stored value, or `default` if the key is absent.
    pub fn get<Q>(&self, key: &Q, default: V) -> V
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.entries.read().get(key).cloned().unwrap_or(default)
    }

    // == Try Get ==
    /// Indexed lookup: returns the stored value or fails with `KeyNotFound`.
    pub fn try_get<Q>(&self, key: &Q) -> Result<V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + Debug + ?Sized,
    {
        self.entries
            .read()
            .get(key)
            .cloned()
            .ok_or_else(|| Error::KeyNotFound(format!("{:?}", key)))
    }

    // == Pop ==
    /// Removes and returns the stored value, or returns `default` and leaves
    /// the cache untouched if the key is absent.
    pub fn pop<Q>(&self, key: &Q, default: V) -> V
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.entries.write().remove(key).unwrap_or(default)
    }

    // == Contains ==
    /// Returns true if the key is stored.
    pub fn contains<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.entries.read().contains_key(key)
    }

    // == Keys ==
    /// Snapshot of the stored keys, in no particular order.
    pub fn keys(&self) -> Vec<K> {
        self.entries.read().keys().cloned().collect()
    }

    // == Values ==
    /// Snapshot of the stored values, in no particular order.
    pub fn values(&self) -> Vec<V> {
        self.entries.read().values().cloned().collect()
    }

    // == Clear ==
    /// Removes every entry. The cache itself stays usable.
    pub fn clear(&self) {
        self.entries.write().clear();
    }

    // == Length ==
    /// Returns the current number of entries in the cache.
    pub fn len(&self) -> usize {
        self.entries.read().len()
    }

    // == Is Empty ==
    /// Returns true if the cache is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.read().is_empty()
    }

    /// TTL fixed at construction.
    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    // == Cancel Expiry ==
    /// Stops a pending expiry so the cache is never cleared automatically.
    ///
    /// Returns `false` if there was nothing pending: zero TTL, already fired
    /// or already cancelled.
    pub fn cancel_expiry(&self) -> bool {
        self.expiry.as_ref().is_some_and(ExpiryTimer::cancel)
    }

    /// Returns true once the automatic clear has happened.
    pub fn has_expired(&self) -> bool {
        self.expiry.as_ref().is_some_and(ExpiryTimer::has_fired)
    }
}
