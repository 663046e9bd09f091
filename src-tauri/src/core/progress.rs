use serde::Serialize;

/// Coarse checkpoints reported by a conversion.
///
/// The tracer has no progress callback, so these only mark where the worker
/// is in its own sequence; they say nothing about how long tracing will take.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq, PartialOrd, Ord)]
#[serde(rename_all = "camelCase")]
pub enum Milestone {
    Started,
    FileRead,
    FormatDetected,
    Tracing,
    Completed,
}

impl Milestone {
    pub fn percentage(&self) -> u8 {
        match self {
            Self::Started => 10,
            Self::FileRead => 30,
            Self::FormatDetected => 50,
            Self::Tracing => 60,
            Self::Completed => 100,
        }
    }

    pub fn status(&self) -> &'static str {
        match self {
            Self::Started => "Starting conversion",
            Self::FileRead => "Image read",
            Self::FormatDetected => "Format detected",
            Self::Tracing => "Tracing",
            Self::Completed => "Complete",
        }
    }
}

/// Typed message posted by the worker to the controlling side.
#[derive(Debug, Clone, PartialEq)]
pub enum ConversionEvent {
    Progress { task_id: u64, milestone: Milestone },
    Finished { task_id: u64, svg: String },
    Failed { task_id: u64, message: String },
}

impl ConversionEvent {
    pub fn task_id(&self) -> u64 {
        match self {
            Self::Progress { task_id, .. }
            | Self::Finished { task_id, .. }
            | Self::Failed { task_id, .. } => *task_id,
        }
    }

    /// Success and failure end a task; progress does not.
    pub fn is_terminal(&self) -> bool {
        !matches!(self, Self::Progress { .. })
    }
}

/// Payload of the `conversion-progress` event for the frontend progress bar.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProgressUpdate {
    pub task_id: u64,
    pub milestone: Milestone,
    pub progress_percentage: u8,
    pub status: String,
}

impl ProgressUpdate {
    pub fn new(task_id: u64, milestone: Milestone) -> Self {
        Self {
            task_id,
            milestone,
            progress_percentage: milestone.percentage(),
            status: milestone.status().to_string(),
        }
    }
}
