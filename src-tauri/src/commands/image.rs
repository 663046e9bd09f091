//! Tauri command handlers for selecting images and running conversions.

use tauri::State;
use tauri::ipc::Response;
use tokio::sync::oneshot;
use tracing::debug;
use tauri_plugin_dialog::DialogExt;

use crate::core::{AppState, SessionStatus};
use crate::processing::drive_conversion;
use crate::utils::{VectorizerError, VectorizerResult, supported_extensions};

use super::events::TauriNotifier;

/// Selects an image by path (drag and drop, or a path typed by the frontend).
#[tauri::command]
pub async fn load_image(
    state: State<'_, AppState>,
    path: String,
) -> VectorizerResult<SessionStatus> {
    debug!("load_image: {}", path);
    state.load_image(path)
}

/// Shows the native open dialog and loads the chosen image.
///
/// Returns `None` when the dialog is cancelled.
#[tauri::command]
pub async fn pick_image(
    app: tauri::AppHandle,
    state: State<'_, AppState>,
) -> VectorizerResult<Option<SessionStatus>> {
    let (tx, rx) = oneshot::channel();
    app.dialog()
        .file()
        .set_title("Select Image File")
        .add_filter("Image Files", &supported_extensions())
        .pick_file(move |picked| {
            let _ = tx.send(picked);
        });

    let picked = rx
        .await
        .map_err(|_| VectorizerError::io("Open dialog closed unexpectedly"))?;
    let Some(picked) = picked else {
        debug!("Open dialog cancelled");
        return Ok(None);
    };

    let path = picked
        .into_path()
        .map_err(|e| VectorizerError::io(e.to_string()))?;
    state.load_image(path).map(Some)
}

/// Loaded image for the source pane, sent as a raw IPC body rather than JSON.
#[tauri::command]
pub async fn get_image_preview(state: State<'_, AppState>) -> VectorizerResult<Response> {
    state.image_bytes().await.map(Response::new)
}

/// Current enable/disable state for the frontend's controls.
#[tauri::command]
pub async fn get_status(state: State<'_, AppState>) -> VectorizerResult<SessionStatus> {
    state.status()
}

/// Starts converting the loaded image with the current parameters.
///
/// Returns the task id immediately; progress and the result arrive as
/// `conversion-progress`, `conversion-finished` and `conversion-failed`
/// events. Fails with `Busy` while another conversion is running.
#[tauri::command]
pub async fn convert_image(
    app: tauri::AppHandle,
    state: State<'_, AppState>,
) -> VectorizerResult<u64> {
    let handle = state.start_conversion()?;
    let task_id = handle.task_id;

    let state = state.inner().clone();
    tauri::async_runtime::spawn(async move {
        let notifier = TauriNotifier::new(app);
        drive_conversion(&state, handle, &notifier).await;
    });

    Ok(task_id)
}
