use std::sync::Arc;

use serde::de::DeserializeOwned;
use tauri::{plugin::PluginApi, AppHandle, Emitter, Runtime};

use crate::models::SharedPayload;
use crate::store::PendingShareStore;
use crate::SEND_INTENT_RECEIVED_EVENT;

#[cfg(target_os = "ios")]
tauri::ios_plugin_binding!(init_plugin_send_intent);

/// Initialize the mobile plugin by registering the native half.
///
/// The native Kotlin/Swift side owns share-sheet registration and intent
/// extraction; it forwards every received share into
/// [`SendIntent::submit_shared_content`], so the Rust store stays the single
/// source of truth on mobile too.
pub fn init<R: Runtime, C: DeserializeOwned>(
    app: &AppHandle<R>,
    api: PluginApi<R, C>,
    store: Arc<PendingShareStore>,
) -> crate::Result<SendIntent<R>> {
    #[cfg(target_os = "android")]
    api.register_android_plugin("app.tauri.plugins.sendintent", "SendIntentPlugin")?;
    #[cfg(target_os = "ios")]
    api.register_ios_plugin(init_plugin_send_intent)?;

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
    /// Handles the race where a share opens the app before the webview is
    /// ready: the intent sits in the store until the frontend calls this
    /// after initialization.
    pub fn check_send_intent_received(&self) -> crate::Result<SharedPayload> {
        let payload = self.store.fetch_if_pending()?;
        log::debug!("send-intent: delivered pending share to the application");
        Ok(payload)
    }

    /// Inbound boundary for the native half: store `payload` and wake the
    /// webview.
    ///
    /// Fire-and-forget; a failed emit is logged and dropped. The frontend's
    /// startup/resume call to `checkSendIntentReceived` covers missed
    /// signals.
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
