// src-tauri/src/processing/executor.rs

//! Runs one conversion off the controlling thread.
//!
//! Each task gets its own `tokio::task::spawn_blocking` call: file IO and the
//! tracer both block, and there is never more than one task in flight, so a
//! pool or queue would add nothing. The worker only talks to the outside world
//! through the event channel it is handed.

use std::sync::Arc;
use std::time::Instant;
use tokio::sync::mpsc::{self, UnboundedReceiver};
use tracing::{debug, info, warn};

use crate::core::{ConversionEvent, ConversionTask, Milestone};
use crate::utils::{VectorizerError, VectorizerResult, extract_filename, format_from_path};

use super::Tracer;

/// Receiving end of a running task.
///
/// Dropping it abandons the task: the worker keeps running to completion but
/// its remaining events go nowhere.
#[derive(Debug)]
pub struct ConversionHandle {
    pub task_id: u64,
    pub events: UnboundedReceiver<ConversionEvent>,
}

/// Starts `task` on a blocking worker and returns the channel it reports on.
///
/// Must be called from within a tokio runtime.
pub fn spawn_conversion(task: ConversionTask, tracer: Arc<dyn Tracer>) -> ConversionHandle {
    let (tx, rx) = mpsc::unbounded_channel();
    let task_id = task.id;

    tokio::task::spawn_blocking(move || {
        run_conversion(&task, tracer.as_ref(), |event| {
            if tx.send(event).is_err() {
                debug!("Task {} was abandoned, dropping event", task_id);
            }
        });
    });

    ConversionHandle { task_id, events: rx }
}

/// Runs `task` to completion on the current thread.
///
/// `emit` sees the progress milestones in order followed by exactly one
/// `Finished` or `Failed`.
pub fn run_conversion<F>(task: &ConversionTask, tracer: &dyn Tracer, mut emit: F)
where
    F: FnMut(ConversionEvent),
{
    let started = Instant::now();
    let file_name = extract_filename(&task.input_path);
    info!("Task {}: converting {}", task.id, file_name);

    let terminal = match convert(task, tracer, &mut emit) {
        Ok(svg) => {
            emit(ConversionEvent::Progress {
                task_id: task.id,
                milestone: Milestone::Completed,
            });
            info!(
                "Task {}: {} traced in {:.2?} ({} bytes of SVG)",
                task.id,
                file_name,
                started.elapsed(),
                svg.len()
            );
            ConversionEvent::Finished { task_id: task.id, svg }
        }
        Err(e) => {
            warn!("Task {}: conversion of {} failed: {}", task.id, file_name, e);
            ConversionEvent::Failed {
                task_id: task.id,
                message: e.conversion_message(),
            }
        }
    };

    emit(terminal);
}

fn convert<F>(task: &ConversionTask, tracer: &dyn Tracer, emit: &mut F) -> VectorizerResult<String>
where
    F: FnMut(ConversionEvent),
{
    let mut milestone = |milestone: Milestone| {
        debug!("Task {}: {:?} ({}%)", task.id, milestone, milestone.percentage());
        emit(ConversionEvent::Progress { task_id: task.id, milestone });
    };

    milestone(Milestone::Started);

    let bytes = std::fs::read(&task.input_path).map_err(|e| {
        VectorizerError::io(format!("Cannot read '{}': {}", task.input_path.display(), e))
    })?;
    milestone(Milestone::FileRead);

    let format = format_from_path(&task.input_path);
    debug!("Task {}: {} bytes, format {}", task.id, bytes.len(), format.tag());
    milestone(Milestone::FormatDetected);

    debug!("Task {}: options {:?}", task.id, task.parameters.named_options());
    milestone(Milestone::Tracing);

    tracer.trace(&bytes, format, &task.parameters)
}
