use std::sync::Arc;

use serde::de::DeserializeOwned;
use tauri::{plugin::PluginApi, AppHandle, Emitter, Runtime};

use crate::models::SharedPayload;
use crate::store::PendingShareStore;
use crate::SEND_INTENT_RECEIVED_EVENT;

/// Initialize the desktop plugin.
///
/// Desktop has no share sheet, so no native half is registered; the store is
/// still live so desktop adapters (command-line arguments, drag and drop) can
/// feed it through [`SendIntent::submit_shared_content`].
pub fn init<R: Runtime, C: DeserializeOwned>(
    app: &AppHandle<R>,
    _api: PluginApi<R, C>,
    store: Arc<PendingShareStore>,
) -> crate::Result<SendIntent<R>> {
    Ok(SendIntent {
        app: app.clone(),
        store,
    })
}

/// Access to the send-intent APIs.
pub struct SendIntent<R: Runtime> {
    app: AppHandle<R>,
    store: Arc<PendingShareStore>,
}

impl<R: Runtime> SendIntent<R> {
    /// Return the pending share once, marking it delivered.
    ///
    /// Fails with [`crate::Error::NothingPending`] when there is no unread
    /// share; the frontend treats that rejection as "nothing to do".
    pub fn check_send_intent_received(&self) -> crate::Result<SharedPayload> {
        let payload = self.store.fetch_if_pending()?;
        log::debug!("send-intent: delivered pending share to the application");
        Ok(payload)
    }

    /// Inbound boundary for platform adapters: store `payload` and wake the
    /// webview.
    ///
    /// The notification is fire-and-forget. If the webview is not ready the
    /// failure is logged and dropped; the frontend's own startup/resume call
    /// to `checkSendIntentReceived` covers missed signals.
    pub fn submit_shared_content(&self, payload: SharedPayload) {
        self.store.write(payload);
        if let Err(e) = self.app.emit(SEND_INTENT_RECEIVED_EVENT, ()) {
            log::warn!("send-intent: failed to notify webview of new share: {e}");
        }
    }

    /// Drop any pending share without delivering it.
    pub fn reset(&self) {
        self.store.reset();
    }
}
