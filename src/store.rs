//! One-shot delivery store for the most recent share intent.
//!
//! The platform layer writes shares into the store from an OS callback; the
//! frontend drains it through `checkSendIntentReceived`. Exactly one fetch
//! succeeds per write: the store holds a single record, last write wins, no
//! queueing.

use std::sync::{Mutex, MutexGuard, PoisonError};

use crate::error::{Error, Result};
use crate::models::SharedPayload;

struct Inner {
    payload: SharedPayload,
    delivered: bool,
}

/// Holds the most recently received [`SharedPayload`] until the application
/// fetches it once.
///
/// The producer (an OS share callback) and the consumer (the invoke handler)
/// run on independent threads, so both paths go through one mutex; the
/// check-then-set in [`fetch_if_pending`](Self::fetch_if_pending) is atomic
/// with respect to a concurrent [`write`](Self::write).
pub struct PendingShareStore {
    inner: Mutex<Inner>,
}

impl PendingShareStore {
    /// Create an empty store. A store that was never written to behaves the
    /// same as one whose payload was already delivered.
    pub fn new() -> Self {
        Self {
            inner: Mutex::new(Inner {
                payload: SharedPayload::default(),
                delivered: true,
            }),
        }
    }

    // Every critical section leaves the record consistent, so a poisoned
    // lock carries no broken invariant and is safe to recover.
    fn lock(&self) -> MutexGuard<'_, Inner> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Replace the stored record with `payload` and re-arm delivery.
    ///
    /// Unconditional: an undelivered previous share is overwritten and never
    /// observable afterwards. Absent fields are legal; no validation happens
    /// here.
    pub fn write(&self, payload: SharedPayload) {
        let mut inner = self.lock();
        inner.payload = payload;
        inner.delivered = false;
    }

    /// Return the pending payload and mark it delivered, or fail with
    /// [`Error::NothingPending`] if there is no unread share.
    ///
    /// This is the sole state transition in the store: `pending → delivered`,
    /// re-armed only by the next [`write`](Self::write). A second call without
    /// an intervening write fails.
    pub fn fetch_if_pending(&self) -> Result<SharedPayload> {
        let mut inner = self.lock();
        if inner.delivered {
            return Err(Error::NothingPending);
        }
        inner.delivered = true;
        Ok(inner.payload.clone())
    }

    /// Drop any stored share and return to the empty state without delivering.
    pub fn reset(&self) {
        let mut inner = self.lock();
        inner.payload = SharedPayload::default();
        inner.delivered = true;
    }
}

impl Default for PendingShareStore {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    fn text_payload(text: &str) -> SharedPayload {
        SharedPayload {
            text: Some(text.to_string()),
            ..Default::default()
        }
    }

    #[test]
    fn fresh_store_has_nothing_pending() {
        let store = PendingShareStore::new();
        assert!(matches!(
            store.fetch_if_pending(),
            Err(Error::NothingPending)
        ));
    }

    #[test]
    fn exactly_one_fetch_succeeds_per_write() {
        let store = PendingShareStore::new();
        store.write(text_payload("hi"));

        assert_eq!(store.fetch_if_pending().unwrap(), text_payload("hi"));
        assert!(matches!(
            store.fetch_if_pending(),
            Err(Error::NothingPending)
        ));
        assert!(matches!(
            store.fetch_if_pending(),
            Err(Error::NothingPending)
        ));
    }

    #[test]
    fn overwrite_discards_undelivered_share() {
        let store = PendingShareStore::new();
        store.write(text_payload("a"));
        store.write(text_payload("b"));

        assert_eq!(store.fetch_if_pending().unwrap(), text_payload("b"));
        assert!(matches!(
            store.fetch_if_pending(),
            Err(Error::NothingPending)
        ));
    }

    #[test]
    fn write_after_delivery_rearms_exactly_once() {
        let store = PendingShareStore::new();
        store.write(text_payload("first"));
        store.fetch_if_pending().unwrap();

        store.write(text_payload("second"));
        assert_eq!(store.fetch_if_pending().unwrap(), text_payload("second"));
        assert!(matches!(
            store.fetch_if_pending(),
            Err(Error::NothingPending)
        ));
    }

    #[test]
    fn unshared_fields_stay_absent() {
        let store = PendingShareStore::new();
        store.write(text_payload("hi"));

        let payload = store.fetch_if_pending().unwrap();
        assert_eq!(payload.text.as_deref(), Some("hi"));
        assert_eq!(payload.url, None);
        assert_eq!(payload.image, None);
        assert_eq!(payload.file, None);
    }

    #[test]
    fn url_only_share_scenario() {
        let store = PendingShareStore::new();
        store.write(SharedPayload {
            url: Some("https://example.com".into()),
            ..Default::default()
        });

        let payload = store.fetch_if_pending().unwrap();
        assert_eq!(payload.url.as_deref(), Some("https://example.com"));
        assert_eq!(payload.text, None);
        assert_eq!(payload.image, None);
        assert_eq!(payload.file, None);

        let err = store.fetch_if_pending().unwrap_err();
        assert_eq!(err.to_string(), "No processing needed.");
    }

    #[test]
    fn reset_clears_pending_share() {
        let store = PendingShareStore::new();
        store.write(text_payload("hi"));
        store.reset();
        assert!(matches!(
            store.fetch_if_pending(),
            Err(Error::NothingPending)
        ));
    }

    #[test]
    fn write_from_another_thread_is_visible() {
        let store = Arc::new(PendingShareStore::new());
        let producer = Arc::clone(&store);
        std::thread::spawn(move || producer.write(text_payload("cross-thread")))
            .join()
            .unwrap();

        assert_eq!(
            store.fetch_if_pending().unwrap(),
            text_payload("cross-thread")
        );
    }

    #[test]
    fn concurrent_writers_leave_at_most_one_pending_share() {
        let store = Arc::new(PendingShareStore::new());
        let handles: Vec<_> = (0..8)
            .map(|i| {
                let store = Arc::clone(&store);
                std::thread::spawn(move || store.write(text_payload(&i.to_string())))
            })
            .collect();
        for handle in handles {
            handle.join().unwrap();
        }

        // Whichever write landed last, exactly one fetch drains it.
        assert!(store.fetch_if_pending().is_ok());
        assert!(matches!(
            store.fetch_if_pending(),
            Err(Error::NothingPending)
        ));
    }
}
