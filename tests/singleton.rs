//! Integration Tests for the Process Cache Singleton
//!
//! Runs in its own test binary so no other test creates the instance first.

use std::collections::HashSet;
use std::sync::{Arc, Barrier};
use std::thread;
use std::time::Duration;

use extension::{Error, ProcessCache};
use serde_json::{json, Value};

#[test]
fn test_singleton_is_shared_and_keeps_first_ttl() {
    let threads = 16;
    let barrier = Arc::new(Barrier::new(threads));

    // Long TTLs so no expiry can interfere with the assertions below
    let supplied: Vec<Duration> = (0..threads)
        .map(|i| Duration::from_secs(3600 + i as u64))
        .collect();

    let handles: Vec<_> = supplied
        .iter()
        .copied()
        .map(|ttl| {
            let barrier = Arc::clone(&barrier);
            thread::spawn(move || {
                barrier.wait();
                ProcessCache::get_instance(ttl) as *const ProcessCache as usize
            })
        })
        .collect();

    let addresses: HashSet<usize> = handles
        .into_iter()
        .map(|handle| handle.join().unwrap())
        .collect();
    assert_eq!(addresses.len(), 1, "All callers must share one instance");

    let cache = ProcessCache::try_instance().expect("instance was created");
    assert!(supplied.contains(&cache.ttl()));

    // Later calls ignore their ttl
    let again = ProcessCache::get_instance(Duration::ZERO);
    assert!(std::ptr::eq(cache, again));
    assert_eq!(again.ttl(), cache.ttl());

    // Writes through one handle are visible through another
    cache.set("user", json!({"name": "Ada"}));
    assert_eq!(again.get("user", Value::Null)["name"], "Ada");
    assert!(again.contains("user"));

    // Indexed lookup
    assert_eq!(again.try_get("user").unwrap(), json!({"name": "Ada"}));
    assert!(matches!(again.try_get("nobody"), Err(Error::KeyNotFound(_))));

    // Clear empties but does not destroy the singleton
    again.clear();
    assert!(cache.keys().is_empty());
    assert!(cache.values().is_empty());
    assert!(!cache.contains("user"));
    assert!(std::ptr::eq(ProcessCache::get_instance(Duration::ZERO), cache));

    cache.set("after", 1);
    assert_eq!(again.get("after", Value::Null), 1);
}
