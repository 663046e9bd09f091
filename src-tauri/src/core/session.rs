//! Per-window conversion session.
//!
//! Holds the loaded image, the last successful SVG and the marker for the
//! single in-flight task. Only the controlling side mutates it; workers never
//! see it.

use std::path::{Path, PathBuf};
use serde::Serialize;
use tracing::{debug, info, warn};

use crate::core::{ConversionOutcome, ConversionTask, ParameterSnapshot};
use crate::utils::{
    VectorizerError, VectorizerResult, default_output_name, extract_filename, validate_input_path,
};

/// What the frontend needs to enable or disable its controls.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionStatus {
    pub image_path: Option<PathBuf>,
    pub image_name: Option<String>,
    pub converting: bool,
    pub active_task: Option<u64>,
    pub can_convert: bool,
    pub can_save: bool,
}

#[derive(Debug, Default)]
pub struct Session {
    image_path: Option<PathBuf>,
    svg: Option<String>,
    active_task: Option<u64>,
    next_task_id: u64,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    /// Validates and selects an image. The previous SVG stays available for
    /// saving until a new conversion succeeds.
    pub fn load_image(&mut self, path: impl Into<PathBuf>) -> VectorizerResult<&Path> {
        let path = path.into();
        validate_input_path(&path)?;
        info!("Selected image: {}", extract_filename(&path));
        Ok(self.image_path.insert(path).as_path())
    }

    pub fn image_path(&self) -> Option<&Path> {
        self.image_path.as_deref()
    }

    /// The last successful conversion, if any.
    pub fn svg(&self) -> Option<&str> {
        self.svg.as_deref()
    }

    pub fn is_converting(&self) -> bool {
        self.active_task.is_some()
    }

    /// Reserves the single in-flight slot and builds the task for it.
    pub fn begin_conversion(
        &mut self,
        parameters: ParameterSnapshot,
    ) -> VectorizerResult<ConversionTask> {
        if let Some(active) = self.active_task {
            return Err(VectorizerError::Busy(active));
        }
        let input_path = self.image_path.clone().ok_or(VectorizerError::NoImage)?;

        self.next_task_id += 1;
        let id = self.next_task_id;
        self.active_task = Some(id);
        debug!("Task {} reserved for {}", id, input_path.display());

        Ok(ConversionTask {
            id,
            input_path,
            parameters,
        })
    }

    /// Releases the in-flight slot for `task_id`, storing the SVG on success.
    ///
    /// Returns `false` and changes nothing if `task_id` is not the active task.
    pub fn finish_conversion(&mut self, task_id: u64, outcome: &ConversionOutcome) -> bool {
        if self.active_task != Some(task_id) {
            warn!("Ignoring outcome for stale task {}", task_id);
            return false;
        }
        self.active_task = None;
        if let Some(svg) = outcome.svg() {
            self.svg = Some(svg.to_string());
        }
        true
    }

    /// `<input stem>.svg`, or `None` with no image loaded.
    pub fn default_output_name(&self) -> Option<String> {
        self.image_path.as_deref().and_then(default_output_name)
    }

    pub fn status(&self) -> SessionStatus {
        SessionStatus {
            image_path: self.image_path.clone(),
            image_name: self.image_path.as_deref().map(extract_filename),
            converting: self.is_converting(),
            active_task: self.active_task,
            can_convert: self.image_path.is_some() && !self.is_converting(),
            can_save: self.svg.is_some(),
        }
    }
}
