//! Tauri command handler for saving the converted SVG.

use std::path::PathBuf;
use tauri::State;
use tauri_plugin_dialog::{DialogExt, MessageDialogKind};
use tokio::sync::oneshot;
use tracing::debug;

use crate::core::AppState;
use crate::utils::{VectorizerError, VectorizerResult};

use super::events::notify;

/// Saves the last successful conversion.
///
/// With `path` unset a save dialog is shown, prefilled with `<stem>.svg`.
/// Returns `None` without writing anything when there is no result yet or
/// the dialog is cancelled. Outcome is also reported in a message box.
#[tauri::command]
pub async fn save_svg(
    app: tauri::AppHandle,
    state: State<'_, AppState>,
    path: Option<String>,
) -> VectorizerResult<Option<PathBuf>> {
    if !state.has_result()? {
        debug!("save_svg: no conversion result yet");
        return Ok(None);
    }

    let path = match path {
        Some(path) => PathBuf::from(path),
        None => match ask_for_path(&app, state.default_output_name()?).await? {
            Some(path) => path,
            None => return Ok(None),
        },
    };

    match state.save_svg(&path).await {
        Ok(saved) => {
            if let Some(saved) = &saved {
                let message = format!("SVG file saved successfully:\n{}", saved.display());
                notify(&app, MessageDialogKind::Info, "Success", &message);
            }
            Ok(saved)
        }
        Err(e) => {
            notify(&app, MessageDialogKind::Error, "Error", &e.to_string());
            Err(e)
        }
    }
}

async fn ask_for_path(
    app: &tauri::AppHandle,
    default_name: Option<String>,
) -> VectorizerResult<Option<PathBuf>> {
    let (tx, rx) = oneshot::channel();
    let mut dialog = app
        .dialog()
        .file()
        .set_title("Save SVG File")
        .add_filter("SVG Files", &["svg"]);
    if let Some(name) = default_name {
        dialog = dialog.set_file_name(name);
    }
    dialog.save_file(move |picked| {
        let _ = tx.send(picked);
    });

    let picked = rx
        .await
        .map_err(|_| VectorizerError::save("Save dialog closed unexpectedly"))?;
    picked
        .map(|p| p.into_path().map_err(|e| VectorizerError::save(e.to_string())))
        .transpose()
}
