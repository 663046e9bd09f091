//! Forwards conversion events to the webview and shows modal notifications.

use serde::Serialize;
use tauri::{AppHandle, Emitter};
use tauri_plugin_dialog::{DialogExt, MessageDialogKind};
use tracing::warn;

use crate::core::ProgressUpdate;
use crate::processing::ConversionNotifier;

pub const PROGRESS_EVENT: &str = "conversion-progress";
pub const FINISHED_EVENT: &str = "conversion-finished";
pub const FAILED_EVENT: &str = "conversion-failed";
pub const PARAMETER_EVENT: &str = "parameter-changed";

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
struct FinishedPayload<'a> {
    task_id: u64,
    svg: &'a str,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
struct FailedPayload<'a> {
    task_id: u64,
    message: &'a str,
}

/// [`ConversionNotifier`] that emits Tauri events to the frontend.
pub struct TauriNotifier {
    app: AppHandle,
}

impl TauriNotifier {
    pub fn new(app: AppHandle) -> Self {
        Self { app }
    }

    fn emit<S: Serialize + Clone>(&self, event: &str, payload: S) {
        if let Err(e) = self.app.emit(event, payload) {
            warn!("Failed to emit {}: {}", event, e);
        }
    }
}

impl ConversionNotifier for TauriNotifier {
    fn progress(&self, update: &ProgressUpdate) {
        self.emit(PROGRESS_EVENT, update);
    }

    fn finished(&self, task_id: u64, svg: &str) {
        self.emit(FINISHED_EVENT, FinishedPayload { task_id, svg });
        notify(&self.app, MessageDialogKind::Info, "Complete", "Image conversion completed successfully.");
    }

    fn failed(&self, task_id: u64, message: &str) {
        self.emit(FAILED_EVENT, FailedPayload { task_id, message });
        notify(&self.app, MessageDialogKind::Error, "Error", message);
    }
}

/// Shows a non-blocking modal message box.
pub fn notify(app: &AppHandle, kind: MessageDialogKind, title: &str, message: &str) {
    app.dialog()
        .message(message)
        .title(title)
        .kind(kind)
        .show(|_| {});
}
