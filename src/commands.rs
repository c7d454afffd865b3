use tauri::{command, AppHandle, Runtime};

use crate::models::SharedPayload;
use crate::Result;
use crate::SendIntentExt;

/// Fetch the pending share, consuming it so a second call rejects.
///
/// The frontend should call this on its `sendIntentReceived` event handler
/// and on its own startup/resume path. Rejection with "No processing needed."
/// is the expected answer whenever no new share arrived.
#[command]
pub(crate) async fn check_send_intent_received<R: Runtime>(
    app: AppHandle<R>,
) -> Result<SharedPayload> {
    app.send_intent().check_send_intent_received()
}

/// Submit shared content on behalf of a platform adapter.
///
/// Overwrites any undelivered share (last write wins) and emits the
/// `sendIntentReceived` event to the webview.
#[command]
pub(crate) async fn submit_shared_content<R: Runtime>(
    app: AppHandle<R>,
    payload: SharedPayload,
) -> Result<()> {
    app.send_intent().submit_shared_content(payload);
    Ok(())
}

/// Discard any pending share without delivering it.
#[command]
pub(crate) async fn reset<R: Runtime>(app: AppHandle<R>) -> Result<()> {
    app.send_intent().reset();
    Ok(())
}
