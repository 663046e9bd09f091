//! Application state management for Tauri.

use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};
use tracing::{debug, info};

use crate::core::{
    AppConfig, ControlDescriptor, ControlEvent, ConversionOutcome, ParameterChange,
    ParameterPanel, ParameterSnapshot, Session, SessionStatus,
};
use crate::processing::{
    ConversionHandle, ConversionNotifier, Tracer, VtracerEngine, drive_conversion,
    spawn_conversion,
};
use crate::utils::{VectorizerError, VectorizerResult, read_image, write_svg};

/// Application state managed by Tauri.
///
/// The single owner of the session, the parameter panel and the tracer.
/// Clones share the same state, so a clone can be moved into the task that
/// drives a conversion.
#[derive(Clone)]
pub struct AppState {
    session: Arc<Mutex<Session>>,
    panel: Arc<Mutex<ParameterPanel>>,
    tracer: Arc<dyn Tracer>,
    config: Arc<AppConfig>,
}

impl AppState {
    /// Creates state backed by the real `vtracer` engine.
    pub fn new(config: AppConfig) -> Self {
        let tracer = Arc::new(VtracerEngine::new(config.path_precision));
        Self::with_tracer(config, tracer)
    }

    /// Creates state with a caller-supplied tracer.
    pub fn with_tracer(config: AppConfig, tracer: Arc<dyn Tracer>) -> Self {
        debug!("AppState created with {:?}", config);
        Self {
            session: Arc::new(Mutex::new(Session::new())),
            panel: Arc::new(Mutex::new(ParameterPanel::new())),
            tracer,
            config: Arc::new(config),
        }
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    pub fn load_image(&self, path: impl Into<PathBuf>) -> VectorizerResult<SessionStatus> {
        let mut session = self.session.lock()?;
        session.load_image(path)?;
        Ok(session.status())
    }

    pub fn status(&self) -> VectorizerResult<SessionStatus> {
        Ok(self.session.lock()?.status())
    }

    /// Bytes of the loaded image as they are on disk, for the source pane.
    pub async fn image_bytes(&self) -> VectorizerResult<Vec<u8>> {
        let path = self
            .session
            .lock()?
            .image_path()
            .map(Path::to_path_buf)
            .ok_or(VectorizerError::NoImage)?;
        read_image(&path).await
    }

    pub fn parameters(&self) -> VectorizerResult<ParameterSnapshot> {
        Ok(self.panel.lock()?.snapshot())
    }

    pub fn controls(&self) -> VectorizerResult<Vec<ControlDescriptor>> {
        Ok(self.panel.lock()?.controls())
    }

    pub fn update_parameter(&self, change: ParameterChange) -> VectorizerResult<ControlEvent> {
        Ok(self.panel.lock()?.apply(change))
    }

    pub fn reset_parameters(&self) -> VectorizerResult<ParameterSnapshot> {
        Ok(self.panel.lock()?.reset())
    }

    /// Registers a listener for parameter changes.
    ///
    /// Listeners run while the panel is locked and must not call back into
    /// the parameter methods of this state.
    pub fn subscribe_parameters<F>(&self, listener: F) -> VectorizerResult<()>
    where
        F: Fn(&ControlEvent) + Send + Sync + 'static,
    {
        self.panel.lock()?.subscribe(listener);
        Ok(())
    }

    /// Snapshots the panel, reserves the in-flight slot and starts the worker.
    ///
    /// Must be called from within a tokio runtime.
    pub fn start_conversion(&self) -> VectorizerResult<ConversionHandle> {
        let parameters = self.parameters()?;
        let task = self.session.lock()?.begin_conversion(parameters)?;
        info!("Starting task {} for {}", task.id, task.input_path.display());
        Ok(spawn_conversion(task, self.tracer.clone()))
    }

    /// Releases the in-flight slot; see [`Session::finish_conversion`].
    pub fn finish_conversion(&self, task_id: u64, outcome: &ConversionOutcome) -> VectorizerResult<bool> {
        Ok(self.session.lock()?.finish_conversion(task_id, outcome))
    }

    /// Starts a conversion and waits for its terminal event.
    pub async fn run_conversion(
        &self,
        notifier: &dyn ConversionNotifier,
    ) -> VectorizerResult<ConversionOutcome> {
        let handle = self.start_conversion()?;
        Ok(drive_conversion(self, handle, notifier).await)
    }

    pub fn has_result(&self) -> VectorizerResult<bool> {
        Ok(self.session.lock()?.svg().is_some())
    }

    pub fn default_output_name(&self) -> VectorizerResult<Option<String>> {
        Ok(self.session.lock()?.default_output_name())
    }

    /// Writes the last successful SVG to `path`.
    ///
    /// Without a successful conversion nothing is written and `Ok(None)` is
    /// returned. A failed write leaves the in-memory result untouched.
    pub async fn save_svg(&self, path: impl AsRef<Path>) -> VectorizerResult<Option<PathBuf>> {
        let svg = self.session.lock()?.svg().map(str::to_owned);
        let Some(svg) = svg else {
            debug!("Save requested with no conversion result, nothing to do");
            return Ok(None);
        };

        let saved = write_svg(path, &svg).await?;
        info!("SVG saved to {}", saved.display());
        Ok(Some(saved))
    }
}
