//! TTL Expiry Task
//!
//! One-shot background task that waits for the cache TTL and then clears
//! every entry of the cache it was spawned for.

use std::collections::HashMap;
use std::sync::atomic::{AtomicU8, Ordering};
use std::sync::mpsc::{self, RecvTimeoutError, Sender};
use std::sync::{Arc, Weak};
use std::thread::{self, JoinHandle};
use std::time::Duration;

use parking_lot::RwLock;
use tracing::{debug, info};

const PENDING: u8 = 0;
const FIRED: u8 = 1;
const CANCELLED: u8 = 2;

// == Expiry Timer ==
/// Handle to a running expiry task.
///
/// Dropping the handle does not stop the task; use [`ExpiryTimer::cancel`].
#[derive(Debug)]
pub struct ExpiryTimer {
    /// PENDING until either the timer fires or it is cancelled
    state: Arc<AtomicU8>,
    /// Wakes the sleeping task early on cancellation
    wake: Sender<()>,
    handle: JoinHandle<()>,
}

impl ExpiryTimer {
    // == Cancel ==
    /// Prevents a pending expiry from ever clearing the cache.
    ///
    /// Returns `true` if the timer was still pending, `false` if it had
    /// already fired or been cancelled.
    pub fn cancel(&self) -> bool {
        let cancelled = self
            .state
            .compare_exchange(PENDING, CANCELLED, Ordering::AcqRel, Ordering::Acquire)
            .is_ok();
        if cancelled {
            // The task may already be gone; nothing to wake then.
            let _ = self.wake.send(());
        }
        cancelled
    }

    /// Returns true once the timer has cleared the cache.
    pub fn has_fired(&self) -> bool {
        self.state.load(Ordering::Acquire) == FIRED
    }

    /// Returns true once the background thread has exited.
    pub fn is_finished(&self) -> bool {
        self.handle.is_finished()
    }
}

/// Spawns the one-shot expiry task for a cache's entry map.
///
/// The task sleeps for `ttl` without touching the map, then takes the write
/// lock once and removes every entry. It only holds a weak reference, so a
/// cache dropped before the deadline is never kept alive by its timer.
///
/// # Returns
/// `None` when `ttl` is zero: such a cache never expires.
pub fn spawn_expiry_task<K, V>(
    entries: Weak<RwLock<HashMap<K, V>>>,
    ttl: Duration,
) -> Option<ExpiryTimer>
where
    K: Send + Sync + 'static,
    V: Send + Sync + 'static,
{
    if ttl.is_zero() {
        return None;
    }

    let state = Arc::new(AtomicU8::new(PENDING));
    let (wake, sleeper) = mpsc::channel::<()>();
    let task_state = Arc::clone(&state);

    let handle = thread::spawn(move || {
        debug!("Cache expiry armed for {:?}", ttl);

        match sleeper.recv_timeout(ttl) {
            Err(RecvTimeoutError::Timeout) => {}
            // Woken by cancel, or the owning cache was dropped
            Ok(()) | Err(RecvTimeoutError::Disconnected) => {
                debug!("Cache expiry stopped before deadline");
                return;
            }
        }

        if task_state
            .compare_exchange(PENDING, FIRED, Ordering::AcqRel, Ordering::Acquire)
            .is_err()
        {
            debug!("Cache expiry cancelled at deadline");
            return;
        }

        let Some(entries) = entries.upgrade() else {
            return;
        };

        let removed = {
            let mut guard = entries.write();
            let count = guard.len();
            guard.clear();
            count
        };

        info!("Cache expired after {:?}: removed {} entries", ttl, removed);
    });

    Some(ExpiryTimer {
        state,
        wake,
        handle,
    })
}
