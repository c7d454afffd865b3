//! Bridge OS share intents into a Tauri webview.
//!
//! Other apps share text, URLs, images, or files into the application; the
//! platform layer hands the payload to this plugin, which keeps the most
//! recent share in a one-shot store and signals the webview with the
//! `sendIntentReceived` event. The frontend answers by invoking
//! `checkSendIntentReceived`, which returns the payload exactly once.

use std::sync::Arc;

use tauri::{
    plugin::{Builder, TauriPlugin},
    Manager, Runtime,
};

pub use models::*;

#[cfg(desktop)]
mod desktop;
#[cfg(mobile)]
mod mobile;

mod commands;
mod error;
mod models;
mod store;

pub use error::{Error, Result};
pub use store::PendingShareStore;

#[cfg(desktop)]
use desktop::SendIntent;
#[cfg(mobile)]
use mobile::SendIntent;

/// Event emitted to the webview whenever a new share arrives.
///
/// Carries no payload; listeners respond by invoking
/// `checkSendIntentReceived`. Delivery is best-effort — the frontend must
/// also check on its own startup/resume path.
pub const SEND_INTENT_RECEIVED_EVENT: &str = "sendIntentReceived";

/// Extensions to [`tauri::App`], [`tauri::AppHandle`] and [`tauri::Window`] to access the send-intent APIs.
pub trait SendIntentExt<R: Runtime> {
    fn send_intent(&self) -> &SendIntent<R>;
}

impl<R: Runtime, T: Manager<R>> crate::SendIntentExt<R> for T {
    fn send_intent(&self) -> &SendIntent<R> {
        self.state::<SendIntent<R>>().inner()
    }
}

/// Initializes the send-intent plugin.
///
/// Registers the `checkSendIntentReceived` / `submitSharedContent` / `reset`
/// commands, constructs the pending-share store, and on mobile registers the
/// native half that feeds OS shares into it.
pub fn init<R: Runtime>() -> TauriPlugin<R> {
    Builder::new("send-intent")
        .invoke_handler(tauri::generate_handler![
            commands::check_send_intent_received,
            commands::submit_shared_content,
            commands::reset,
        ])
        .setup(|app, api| {
            let store = Arc::new(PendingShareStore::new());
            #[cfg(mobile)]
            let send_intent = mobile::init(app, api, store)?;
            #[cfg(desktop)]
            let send_intent = desktop::init(app, api, store)?;
            app.manage(send_intent);
            Ok(())
        })
        .on_event(|_app, event| {
            if let tauri::RunEvent::Resumed = event {
                // The frontend re-checks for pending shares on resume; the
                // push event alone is best-effort.
                log::debug!("send-intent: app resumed");
            }
        })
        .build()
}
