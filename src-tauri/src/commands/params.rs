//! Tauri command handlers for the parameter panel.

use tauri::State;
use crate::core::{AppState, ControlDescriptor, ControlEvent, ParameterChange, ParameterSnapshot};
use crate::utils::VectorizerResult;

#[tauri::command]
pub async fn get_parameters(state: State<'_, AppState>) -> VectorizerResult<ParameterSnapshot> {
    state.parameters()
}

/// Control layout and current values, for building the panel.
#[tauri::command]
pub async fn get_parameter_controls(
    state: State<'_, AppState>,
) -> VectorizerResult<Vec<ControlDescriptor>> {
    state.controls()
}

/// Applies one control edit. The returned event carries the clamped value
/// and the label text; the same event is broadcast as `parameter-changed`.
#[tauri::command]
pub async fn update_parameter(
    state: State<'_, AppState>,
    change: ParameterChange,
) -> VectorizerResult<ControlEvent> {
    state.update_parameter(change)
}

#[tauri::command]
pub async fn reset_parameters(state: State<'_, AppState>) -> VectorizerResult<ParameterSnapshot> {
    state.reset_parameters()
}
