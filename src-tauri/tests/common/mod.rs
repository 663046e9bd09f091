//! Test harness and fixtures for the vectorizer integration tests.

#![allow(dead_code)]

use std::path::PathBuf;
use std::sync::mpsc::{self, Receiver, Sender};
use std::sync::{Arc, Mutex};

use tempfile::TempDir;
use vtracer_gui_lib::core::{AppConfig, AppState, ParameterSnapshot, ProgressUpdate};
use vtracer_gui_lib::processing::{ConversionNotifier, Tracer};
use vtracer_gui_lib::utils::{ImageFormat, VectorizerError, VectorizerResult};

/// Scratch directory plus application state.
pub struct TestHarness {
    pub dir: TempDir,
    pub state: AppState,
}

impl TestHarness {
    /// Harness backed by the real vtracer engine.
    pub fn new() -> Self {
        Self::with_config(AppConfig::default())
    }

    pub fn with_config(config: AppConfig) -> Self {
        TestHarness {
            dir: tempfile::tempdir().expect("create temp dir"),
            state: AppState::new(config),
        }
    }

    /// Harness with a stub tracer in place of vtracer.
    pub fn with_tracer(tracer: Arc<dyn Tracer>) -> Self {
        Self::with_tracer_and_config(tracer, AppConfig::default())
    }

    pub fn with_tracer_and_config(tracer: Arc<dyn Tracer>, config: AppConfig) -> Self {
        TestHarness {
            dir: tempfile::tempdir().expect("create temp dir"),
            state: AppState::with_tracer(config, tracer),
        }
    }

    pub fn path(&self, name: &str) -> PathBuf {
        self.dir.path().join(name)
    }

    /// Writes a two-tone test picture; the encoder is picked from the suffix.
    pub fn write_image(&self, name: &str) -> PathBuf {
        let path = self.path(name);
        sample_image().save(&path).expect("encode fixture");
        path
    }

    /// Writes a test picture as JPEG regardless of the file name.
    pub fn write_jpeg_as(&self, name: &str) -> PathBuf {
        let path = self.path(name);
        let rgb = image::DynamicImage::ImageRgba8(sample_image()).to_rgb8();
        rgb.save_with_format(&path, image::ImageFormat::Jpeg)
            .expect("encode jpeg fixture");
        path
    }

    pub fn write_bytes(&self, name: &str, bytes: &[u8]) -> PathBuf {
        let path = self.path(name);
        std::fs::write(&path, bytes).expect("write fixture");
        path
    }

    /// Loads a freshly written PNG into the session.
    pub fn with_loaded_image(self) -> Self {
        let path = self.write_image("sample.png");
        self.state.load_image(path).expect("load fixture");
        self
    }
}

/// 32×32: red left half, blue right half, white square in the middle.
pub fn sample_image() -> image::RgbaImage {
    image::RgbaImage::from_fn(32, 32, |x, y| {
        if (12..20).contains(&x) && (12..20).contains(&y) {
            image::Rgba([255, 255, 255, 255])
        } else if x < 16 {
            image::Rgba([220, 30, 30, 255])
        } else {
            image::Rgba([30, 30, 220, 255])
        }
    })
}

/// What a [`RecordingNotifier`] saw.
#[derive(Debug, Clone, PartialEq)]
pub enum Notification {
    Progress(u8),
    Finished { task_id: u64, svg: String },
    Failed { task_id: u64, message: String },
}

impl Notification {
    pub fn is_terminal(&self) -> bool {
        !matches!(self, Notification::Progress(_))
    }
}

#[derive(Default)]
pub struct RecordingNotifier {
    pub seen: Mutex<Vec<Notification>>,
}

impl RecordingNotifier {
    pub fn notifications(&self) -> Vec<Notification> {
        self.seen.lock().unwrap().clone()
    }

    pub fn terminal_count(&self) -> usize {
        self.notifications().iter().filter(|n| n.is_terminal()).count()
    }

    pub fn finished_count(&self) -> usize {
        self.notifications()
            .iter()
            .filter(|n| matches!(n, Notification::Finished { .. }))
            .count()
    }
}

impl ConversionNotifier for RecordingNotifier {
    fn progress(&self, update: &ProgressUpdate) {
        self.seen
            .lock()
            .unwrap()
            .push(Notification::Progress(update.progress_percentage));
    }

    fn finished(&self, task_id: u64, svg: &str) {
        self.seen.lock().unwrap().push(Notification::Finished {
            task_id,
            svg: svg.to_string(),
        });
    }

    fn failed(&self, task_id: u64, message: &str) {
        self.seen.lock().unwrap().push(Notification::Failed {
            task_id,
            message: message.to_string(),
        });
    }
}

/// Returns the same document for every input.
pub struct FixedTracer(pub String);

impl Tracer for FixedTracer {
    fn trace(&self, _: &[u8], _: ImageFormat, _: &ParameterSnapshot) -> VectorizerResult<String> {
        Ok(self.0.clone())
    }
}

/// Always fails the way the tracing library does.
pub struct FailingTracer(pub String);

impl Tracer for FailingTracer {
    fn trace(&self, _: &[u8], _: ImageFormat, _: &ParameterSnapshot) -> VectorizerResult<String> {
        Err(VectorizerError::tracing(self.0.clone()))
    }
}

/// Panics inside the worker.
pub struct PanickingTracer;

impl Tracer for PanickingTracer {
    fn trace(&self, _: &[u8], _: ImageFormat, _: &ParameterSnapshot) -> VectorizerResult<String> {
        panic!("tracer blew up");
    }
}

/// Blocks each call until the paired sender fires or is dropped.
pub struct GatedTracer {
    gate: Mutex<Receiver<()>>,
}

impl GatedTracer {
    pub fn new() -> (Arc<Self>, Sender<()>) {
        let (tx, rx) = mpsc::channel();
        (Arc::new(Self { gate: Mutex::new(rx) }), tx)
    }
}

impl Tracer for GatedTracer {
    fn trace(&self, _: &[u8], _: ImageFormat, _: &ParameterSnapshot) -> VectorizerResult<String> {
        let _ = self.gate.lock().unwrap().recv();
        Ok("<svg xmlns=\"http://www.w3.org/2000/svg\"/>".to_string())
    }
}
