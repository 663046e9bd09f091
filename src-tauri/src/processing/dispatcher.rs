// src-tauri/src/processing/dispatcher.rs

//! Controlling-side consumer of a task's event channel.

use tracing::{debug, info, warn};

use crate::core::{AppState, ConversionEvent, ConversionOutcome, ProgressUpdate};
use crate::utils::VectorizerError;

use super::ConversionHandle;

/// Where task events end up: the webview in the app, a recorder in tests.
pub trait ConversionNotifier: Send + Sync {
    fn progress(&self, update: &ProgressUpdate);
    fn finished(&self, task_id: u64, svg: &str);
    fn failed(&self, task_id: u64, message: &str);
}

/// Drains `handle` until its terminal event, then releases the session.
///
/// Calls exactly one of [`ConversionNotifier::finished`] or
/// [`ConversionNotifier::failed`]. A worker that disappears without a
/// terminal event, or one that outlives the configured timeout, is reported
/// as a failure; in the timeout case any later events are discarded.
pub async fn drive_conversion(
    state: &AppState,
    mut handle: ConversionHandle,
    notifier: &dyn ConversionNotifier,
) -> ConversionOutcome {
    let task_id = handle.task_id;

    let outcome = match state.config().conversion_timeout() {
        Some(limit) => {
            match tokio::time::timeout(limit, next_terminal(&mut handle, notifier)).await {
                Ok(outcome) => outcome,
                Err(_) => {
                    warn!("Task {} produced no result within {:?}, abandoning it", task_id, limit);
                    ConversionOutcome::Failed {
                        message: VectorizerError::Timeout(limit.as_secs()).conversion_message(),
                    }
                }
            }
        }
        None => next_terminal(&mut handle, notifier).await,
    };

    // Closing the receiver is what discards late events from an abandoned worker.
    drop(handle);

    match state.finish_conversion(task_id, &outcome) {
        Ok(true) => debug!("Task {} released", task_id),
        Ok(false) => {}
        Err(e) => warn!("Task {} could not update the session: {}", task_id, e),
    }

    match &outcome {
        ConversionOutcome::Succeeded { svg } => {
            info!("Task {} finished", task_id);
            notifier.finished(task_id, svg);
        }
        ConversionOutcome::Failed { message } => {
            info!("Task {} failed: {}", task_id, message);
            notifier.failed(task_id, message);
        }
    }

    outcome
}

async fn next_terminal(
    handle: &mut ConversionHandle,
    notifier: &dyn ConversionNotifier,
) -> ConversionOutcome {
    while let Some(event) = handle.events.recv().await {
        match event {
            ConversionEvent::Progress { task_id, milestone } => {
                notifier.progress(&ProgressUpdate::new(task_id, milestone));
            }
            ConversionEvent::Finished { svg, .. } => return ConversionOutcome::Succeeded { svg },
            ConversionEvent::Failed { message, .. } => return ConversionOutcome::Failed { message },
        }
    }

    warn!("Task {} channel closed without a result", handle.task_id);
    ConversionOutcome::Failed {
        message: VectorizerError::WorkerLost.conversion_message(),
    }
}
