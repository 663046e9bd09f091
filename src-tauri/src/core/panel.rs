//! The parameter panel: bounded controls, change notification and snapshots.
//!
//! Each control enforces its own range, so nothing a listener or the
//! frontend sends can push a value out of bounds. The panel never caches a
//! derived snapshot; [`ParameterPanel::snapshot`] reads the controls each time.

use std::ops::RangeInclusive;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::params::{
    self, ColorMode, CurveMode, Hierarchical, ParameterSnapshot, snap_to_step,
};

/// An integer slider with an optional step and display divisor.
#[derive(Debug, Clone, PartialEq)]
pub struct Slider {
    min: i32,
    max: i32,
    step: i32,
    divisor: i32,
    value: i32,
}

impl Slider {
    pub fn new(range: RangeInclusive<i32>, default: i32) -> Self {
        Self::scaled(range, 1, 1, default)
    }

    /// A slider whose label shows `value / divisor` with one decimal.
    pub fn scaled(range: RangeInclusive<i32>, step: i32, divisor: i32, default: i32) -> Self {
        let (min, max) = (*range.start(), *range.end());
        Self {
            min,
            max,
            step,
            divisor,
            value: snap_to_step(default, min, max, step),
        }
    }

    /// Moves the slider, clamping and snapping; returns the value it settled on.
    pub fn set(&mut self, value: i32) -> i32 {
        self.value = snap_to_step(value, self.min, self.max, self.step);
        self.value
    }

    pub fn value(&self) -> i32 {
        self.value
    }

    pub fn range(&self) -> RangeInclusive<i32> {
        self.min..=self.max
    }

    /// Text for the value label next to the slider.
    pub fn label(&self) -> String {
        if self.divisor > 1 {
            format!("{:.1}", self.value as f64 / self.divisor as f64)
        } else {
            self.value.to_string()
        }
    }
}

/// A single control edit coming from the frontend.
///
/// Slider variants carry raw slider positions; `SegmentLength` is in tenths.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "control", content = "value", rename_all = "camelCase")]
pub enum ParameterChange {
    ColorMode(ColorMode),
    Hierarchical(Hierarchical),
    CurveMode(CurveMode),
    FilterSpeckle(i32),
    ColorPrecision(i32),
    GradientStep(i32),
    CornerThreshold(i32),
    SegmentLength(i32),
    SpliceThreshold(i32),
}

/// Published to listeners after a change has been applied.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ControlEvent {
    /// The change as applied, after clamping
    pub change: ParameterChange,
    /// Display text for the control's value label
    pub label: String,
}

pub type ParameterListener = Box<dyn Fn(&ControlEvent) + Send + Sync>;

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChoiceOption {
    pub value: &'static str,
    pub label: &'static str,
}

#[derive(Debug, Clone, Serialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum ControlKind {
    Slider {
        min: i32,
        max: i32,
        step: i32,
        value: i32,
        display: String,
    },
    Choice {
        options: Vec<ChoiceOption>,
        current: &'static str,
    },
}

/// Everything the frontend needs to render one control.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ControlDescriptor {
    /// Same key as the `control` tag of [`ParameterChange`]
    pub id: &'static str,
    pub group: &'static str,
    pub label: &'static str,
    #[serde(flatten)]
    pub kind: ControlKind,
}

const CLUSTERING: &str = "Clustering";
const CURVE_FITTING: &str = "Curve Fitting";

pub struct ParameterPanel {
    color_mode: ColorMode,
    hierarchical: Hierarchical,
    curve_mode: CurveMode,
    filter_speckle: Slider,
    color_precision: Slider,
    gradient_step: Slider,
    corner_threshold: Slider,
    segment_length: Slider,
    splice_threshold: Slider,
    listeners: Vec<ParameterListener>,
}

impl Default for ParameterPanel {
    fn default() -> Self {
        Self {
            color_mode: ColorMode::default(),
            hierarchical: Hierarchical::default(),
            curve_mode: CurveMode::default(),
            filter_speckle: Slider::new(params::FILTER_SPECKLE_RANGE, params::DEFAULT_FILTER_SPECKLE),
            color_precision: Slider::new(params::COLOR_PRECISION_RANGE, params::DEFAULT_COLOR_PRECISION),
            gradient_step: Slider::new(params::GRADIENT_STEP_RANGE, params::DEFAULT_GRADIENT_STEP),
            corner_threshold: Slider::new(params::CORNER_THRESHOLD_RANGE, params::DEFAULT_CORNER_THRESHOLD),
            segment_length: Slider::scaled(
                params::SEGMENT_LENGTH_RANGE,
                params::SEGMENT_LENGTH_STEP,
                params::SEGMENT_LENGTH_DIVISOR,
                params::DEFAULT_SEGMENT_LENGTH,
            ),
            splice_threshold: Slider::new(params::SPLICE_THRESHOLD_RANGE, params::DEFAULT_SPLICE_THRESHOLD),
            listeners: Vec::new(),
        }
    }
}

impl ParameterPanel {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a listener that sees every applied change.
    pub fn subscribe<F>(&mut self, listener: F)
    where
        F: Fn(&ControlEvent) + Send + Sync + 'static,
    {
        self.listeners.push(Box::new(listener));
    }

    /// Current settings. Reads the controls, never mutates anything.
    pub fn snapshot(&self) -> ParameterSnapshot {
        ParameterSnapshot::from_positions(
            self.color_mode,
            self.hierarchical,
            self.curve_mode,
            self.filter_speckle.value(),
            self.color_precision.value(),
            self.gradient_step.value(),
            self.corner_threshold.value(),
            self.segment_length.value(),
            self.splice_threshold.value(),
        )
    }

    /// Applies one change and notifies listeners with what was actually set.
    pub fn apply(&mut self, change: ParameterChange) -> ControlEvent {
        let event = match change {
            ParameterChange::ColorMode(mode) => {
                self.color_mode = mode;
                ControlEvent { change, label: mode.display_name().to_string() }
            }
            ParameterChange::Hierarchical(mode) => {
                self.hierarchical = mode;
                ControlEvent { change, label: mode.display_name().to_string() }
            }
            ParameterChange::CurveMode(mode) => {
                self.curve_mode = mode;
                ControlEvent { change, label: mode.display_name().to_string() }
            }
            ParameterChange::FilterSpeckle(v) => {
                let v = self.filter_speckle.set(v);
                ControlEvent { change: ParameterChange::FilterSpeckle(v), label: self.filter_speckle.label() }
            }
            ParameterChange::ColorPrecision(v) => {
                let v = self.color_precision.set(v);
                ControlEvent { change: ParameterChange::ColorPrecision(v), label: self.color_precision.label() }
            }
            ParameterChange::GradientStep(v) => {
                let v = self.gradient_step.set(v);
                ControlEvent { change: ParameterChange::GradientStep(v), label: self.gradient_step.label() }
            }
            ParameterChange::CornerThreshold(v) => {
                let v = self.corner_threshold.set(v);
                ControlEvent { change: ParameterChange::CornerThreshold(v), label: self.corner_threshold.label() }
            }
            ParameterChange::SegmentLength(v) => {
                let v = self.segment_length.set(v);
                ControlEvent { change: ParameterChange::SegmentLength(v), label: self.segment_length.label() }
            }
            ParameterChange::SpliceThreshold(v) => {
                let v = self.splice_threshold.set(v);
                ControlEvent { change: ParameterChange::SpliceThreshold(v), label: self.splice_threshold.label() }
            }
        };

        debug!("Parameter changed: {:?} ({})", event.change, event.label);
        self.publish(&event);
        event
    }

    /// Restores every control to its default, publishing one event per control.
    pub fn reset(&mut self) -> ParameterSnapshot {
        let defaults = Self::default();
        for change in defaults.current_values() {
            self.apply(change);
        }
        self.snapshot()
    }

    /// Descriptors in display order, grouped as Clustering then Curve Fitting.
    pub fn controls(&self) -> Vec<ControlDescriptor> {
        fn slider(id: &'static str, group: &'static str, label: &'static str, s: &Slider) -> ControlDescriptor {
            ControlDescriptor {
                id,
                group,
                label,
                kind: ControlKind::Slider {
                    min: *s.range().start(),
                    max: *s.range().end(),
                    step: s.step,
                    value: s.value(),
                    display: s.label(),
                },
            }
        }

        fn choice<T: Copy + PartialEq>(
            id: &'static str,
            group: &'static str,
            label: &'static str,
            all: &[T],
            current: T,
            value: fn(&T) -> &'static str,
            display: fn(&T) -> &'static str,
        ) -> ControlDescriptor {
            ControlDescriptor {
                id,
                group,
                label,
                kind: ControlKind::Choice {
                    options: all
                        .iter()
                        .map(|o| ChoiceOption { value: value(o), label: display(o) })
                        .collect(),
                    current: value(&current),
                },
            }
        }

        vec![
            choice("colorMode", CLUSTERING, "Color Mode", &ColorMode::ALL, self.color_mode,
                ColorMode::option_name, ColorMode::display_name),
            choice("hierarchical", CLUSTERING, "Hierarchical", &Hierarchical::ALL, self.hierarchical,
                Hierarchical::option_name, Hierarchical::display_name),
            slider("filterSpeckle", CLUSTERING, "Filter Speckle", &self.filter_speckle),
            slider("colorPrecision", CLUSTERING, "Color Precision", &self.color_precision),
            slider("gradientStep", CLUSTERING, "Gradient Step", &self.gradient_step),
            choice("curveMode", CURVE_FITTING, "Mode", &CurveMode::ALL, self.curve_mode,
                CurveMode::option_name, CurveMode::display_name),
            slider("cornerThreshold", CURVE_FITTING, "Corner Threshold", &self.corner_threshold),
            slider("segmentLength", CURVE_FITTING, "Segment Length", &self.segment_length),
            slider("spliceThreshold", CURVE_FITTING, "Splice Threshold", &self.splice_threshold),
        ]
    }

    fn current_values(&self) -> [ParameterChange; 9] {
        [
            ParameterChange::ColorMode(self.color_mode),
            ParameterChange::Hierarchical(self.hierarchical),
            ParameterChange::FilterSpeckle(self.filter_speckle.value()),
            ParameterChange::ColorPrecision(self.color_precision.value()),
            ParameterChange::GradientStep(self.gradient_step.value()),
            ParameterChange::CurveMode(self.curve_mode),
            ParameterChange::CornerThreshold(self.corner_threshold.value()),
            ParameterChange::SegmentLength(self.segment_length.value()),
            ParameterChange::SpliceThreshold(self.splice_threshold.value()),
        ]
    }

    fn publish(&self, event: &ControlEvent) {
        for listener in &self.listeners {
            listener(event);
        }
    }
}
