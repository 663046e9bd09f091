//! Conversion task definition.

use std::path::PathBuf;
use serde::Serialize;
use crate::core::ParameterSnapshot;

/// One conversion request: an image and the settings captured when it started.
///
/// Created by [`crate::core::Session::begin_conversion`], consumed by the
/// worker, never reused.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ConversionTask {
    /// Session-unique id, increasing with every request
    pub id: u64,
    /// Path to the source raster
    pub input_path: PathBuf,
    /// Settings frozen at trigger time
    pub parameters: ParameterSnapshot,
}

/// How a task ended. Exactly one is produced per task.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "camelCase")]
pub enum ConversionOutcome {
    Succeeded { svg: String },
    Failed { message: String },
}

impl ConversionOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Succeeded { .. })
    }

    pub fn svg(&self) -> Option<&str> {
        match self {
            Self::Succeeded { svg } => Some(svg),
            Self::Failed { .. } => None,
        }
    }
}
