//! Cancellable delayed actions
//!
//! A debouncer runs an action once a quiet period has passed since the most
//! recent `schedule` call. Scheduling again before the delay elapses aborts
//! the pending action.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, MutexGuard};
use std::time::Duration;

use tokio::task::JoinHandle;

use super::entry::HistoryItem;
use super::store::HistoryStore;

/// Quiet period before a conversion is committed to history
pub const DEFAULT_DEBOUNCE: Duration = Duration::from_secs(1);

/// Single-slot debouncer running on the tokio runtime
pub struct Debouncer {
    delay: Duration,
    pending: Mutex<Option<JoinHandle<()>>>,
}

impl Debouncer {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            pending: Mutex::new(None),
        }
    }

    /// Run `action` after the quiet period, replacing any pending action
    ///
    /// The action runs on the blocking pool, so it may do synchronous I/O.
    /// Must be called from within a tokio runtime.
    pub fn schedule<F>(&self, action: F)
    where
        F: FnOnce() + Send + 'static,
    {
        let delay = self.delay;
        let handle = tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            if let Err(e) = tokio::task::spawn_blocking(action).await {
                tracing::error!("Debounced action failed: {}", e);
            }
        });

        if let Some(previous) = self.lock().replace(handle) {
            previous.abort();
        }
    }

    /// Abort the pending action, if any; returns whether one was waiting
    pub fn cancel(&self) -> bool {
        match self.lock().take() {
            Some(handle) => {
                let waiting = !handle.is_finished();
                handle.abort();
                waiting
            }
            None => false,
        }
    }

    pub fn is_pending(&self) -> bool {
        self.lock()
            .as_ref()
            .map(|handle| !handle.is_finished())
            .unwrap_or(false)
    }

    fn lock(&self) -> MutexGuard<'_, Option<JoinHandle<()>>> {
        // A panicking action cannot leave the slot half-written
        self.pending.lock().unwrap_or_else(|e| e.into_inner())
    }
}

impl Default for Debouncer {
    fn default() -> Self {
        Self::new(DEFAULT_DEBOUNCE)
    }
}

impl Drop for Debouncer {
    fn drop(&mut self) {
        if let Some(handle) = self.lock().take() {
            handle.abort();
        }
    }
}

/// A history list whose writes wait for a quiet period
pub struct DebouncedHistory<T: HistoryItem> {
    store: Arc<Mutex<HistoryStore<T>>>,
    /// Bumped by `clear`; a commit scheduled under an older generation is dropped
    generation: Arc<AtomicU64>,
    debouncer: Debouncer,
}

impl<T: HistoryItem> DebouncedHistory<T> {
    pub fn new(store: HistoryStore<T>, delay: Duration) -> Self {
        Self {
            store: Arc::new(Mutex::new(store)),
            generation: Arc::new(AtomicU64::new(0)),
            debouncer: Debouncer::new(delay),
        }
    }

    /// Commit the entry built by `make` once input has settled
    ///
    /// The entry is built at commit time so its timestamp reflects the write.
    pub fn submit<F>(&self, make: F)
    where
        F: FnOnce() -> T + Send + 'static,
    {
        let store = Arc::clone(&self.store);
        let generation = Arc::clone(&self.generation);
        let scheduled = generation.load(Ordering::SeqCst);

        self.debouncer.schedule(move || {
            let mut store = store.lock().unwrap_or_else(|e| e.into_inner());
            if generation.load(Ordering::SeqCst) != scheduled {
                tracing::debug!("Dropping history commit for cleared '{}'", store.key());
                return;
            }
            store.record(make());
        });
    }

    /// Snapshot of the entries, newest first
    pub fn entries(&self) -> Vec<T> {
        self.lock_store().entries().to_vec()
    }

    pub fn has_pending_write(&self) -> bool {
        self.debouncer.is_pending()
    }

    /// Cancel any pending write and empty the list
    ///
    /// A commit already past its delay cannot be aborted; the generation bump
    /// makes it a no-op whether it takes the store lock before or after us.
    pub fn clear(&self) {
        self.generation.fetch_add(1, Ordering::SeqCst);
        self.debouncer.cancel();
        self.lock_store().clear();
    }

    fn lock_store(&self) -> MutexGuard<'_, HistoryStore<T>> {
        self.store.lock().unwrap_or_else(|e| e.into_inner())
    }
}
