//! Core application types and state management.
//!
//! This module contains the fundamental types used throughout the application:
//! - [`AppState`]: Application state managed by Tauri
//! - [`ParameterPanel`] and [`ParameterSnapshot`]: Conversion settings
//! - [`Session`]: Loaded image, last result and the in-flight task marker
//! - [`ConversionTask`] and [`ConversionOutcome`]: One conversion request and how it ended
//! - [`ConversionEvent`]: Messages from the worker to the controlling side

mod config;
mod panel;
mod params;
mod progress;
mod session;
mod state;
mod task;

pub use config::AppConfig;
pub use panel::{
    ChoiceOption, ControlDescriptor, ControlEvent, ControlKind, ParameterChange, ParameterListener,
    ParameterPanel, Slider,
};
pub use params::{
    ColorMode, CurveMode, Hierarchical, ParameterSnapshot, COLOR_PRECISION_RANGE,
    CORNER_THRESHOLD_RANGE, FILTER_SPECKLE_RANGE, GRADIENT_STEP_RANGE, MAX_ITERATIONS,
    SEGMENT_LENGTH_RANGE, SEGMENT_LENGTH_STEP, SPLICE_THRESHOLD_RANGE,
};
pub use progress::{ConversionEvent, Milestone, ProgressUpdate};
pub use session::{Session, SessionStatus};
pub use state::AppState;
pub use task::{ConversionOutcome, ConversionTask};
