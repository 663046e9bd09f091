//! Conversion parameters and their bounds.

use std::ops::RangeInclusive;
use serde::{Deserialize, Serialize};

pub const FILTER_SPECKLE_RANGE: RangeInclusive<i32> = 0..=128;
pub const COLOR_PRECISION_RANGE: RangeInclusive<i32> = 1..=8;
pub const GRADIENT_STEP_RANGE: RangeInclusive<i32> = 0..=128;
pub const CORNER_THRESHOLD_RANGE: RangeInclusive<i32> = 0..=180;
/// Segment length slider positions in tenths: 3.5 to 10.0.
pub const SEGMENT_LENGTH_RANGE: RangeInclusive<i32> = 35..=100;
/// Segment length moves in 0.5 steps, i.e. 5 slider positions.
pub const SEGMENT_LENGTH_STEP: i32 = 5;
pub const SEGMENT_LENGTH_DIVISOR: i32 = 10;
pub const SPLICE_THRESHOLD_RANGE: RangeInclusive<i32> = 0..=180;

pub const DEFAULT_FILTER_SPECKLE: i32 = 4;
pub const DEFAULT_COLOR_PRECISION: i32 = 6;
pub const DEFAULT_GRADIENT_STEP: i32 = 16;
pub const DEFAULT_CORNER_THRESHOLD: i32 = 60;
pub const DEFAULT_SEGMENT_LENGTH: i32 = 40;
pub const DEFAULT_SPLICE_THRESHOLD: i32 = 45;

/// Not exposed as a control.
pub const MAX_ITERATIONS: usize = 10;

/// Clamps `value` into `min..=max` and rounds it to the nearest `step` above `min`.
pub(crate) fn snap_to_step(value: i32, min: i32, max: i32, step: i32) -> i32 {
    let clamped = value.clamp(min, max);
    if step <= 1 {
        return clamped;
    }
    let snapped = min + ((clamped - min + step / 2) / step) * step;
    // Rounding up may overshoot when max is not on the step grid.
    if snapped > max { snapped - step } else { snapped }
}

/// Whether shapes are clustered by color or the image is binarized first.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorMode {
    #[default]
    Color,
    Binary,
}

/// How clusters are layered in the output.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Hierarchical {
    #[default]
    Stacked,
    Cutout,
}

/// Path simplification applied during curve fitting.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CurveMode {
    #[default]
    Spline,
    Polygon,
    /// Raw pixel outlines; the tracer calls this `none`.
    #[serde(rename = "none")]
    Pixel,
}

impl ColorMode {
    pub const ALL: [Self; 2] = [Self::Color, Self::Binary];

    pub fn option_name(&self) -> &'static str {
        match self {
            Self::Color => "color",
            Self::Binary => "binary",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Color => "Color",
            Self::Binary => "B/W",
        }
    }
}

impl Hierarchical {
    pub const ALL: [Self; 2] = [Self::Stacked, Self::Cutout];

    pub fn option_name(&self) -> &'static str {
        match self {
            Self::Stacked => "stacked",
            Self::Cutout => "cutout",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Stacked => "Stacked",
            Self::Cutout => "CutOut",
        }
    }
}

impl CurveMode {
    pub const ALL: [Self; 3] = [Self::Spline, Self::Polygon, Self::Pixel];

    pub fn option_name(&self) -> &'static str {
        match self {
            Self::Spline => "spline",
            Self::Polygon => "polygon",
            Self::Pixel => "none",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Spline => "Spline",
            Self::Polygon => "Polygon",
            Self::Pixel => "Pixel",
        }
    }
}

/// Immutable capture of the panel at the moment a conversion starts.
///
/// Fields are private: the only producers are [`crate::core::ParameterPanel`]
/// and `Default`, both of which keep every value inside its control's range.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ParameterSnapshot {
    color_mode: ColorMode,
    hierarchical: Hierarchical,
    curve_mode: CurveMode,
    filter_speckle: u32,
    color_precision: u32,
    layer_difference: u32,
    corner_threshold: u32,
    length_threshold: f64,
    splice_threshold: u32,
    max_iterations: usize,
}

impl ParameterSnapshot {
    /// Builds a snapshot from raw slider positions.
    ///
    /// Callers pass positions that already sit inside their ranges; they are
    /// clamped again here so the invariant never depends on the caller.
    #[allow(clippy::too_many_arguments)]
    pub(crate) fn from_positions(
        color_mode: ColorMode,
        hierarchical: Hierarchical,
        curve_mode: CurveMode,
        filter_speckle: i32,
        color_precision: i32,
        gradient_step: i32,
        corner_threshold: i32,
        segment_length: i32,
        splice_threshold: i32,
    ) -> Self {
        let clamp = |v: i32, r: RangeInclusive<i32>| v.clamp(*r.start(), *r.end()) as u32;
        let segment_length = snap_to_step(
            segment_length,
            *SEGMENT_LENGTH_RANGE.start(),
            *SEGMENT_LENGTH_RANGE.end(),
            SEGMENT_LENGTH_STEP,
        );

        Self {
            color_mode,
            hierarchical,
            curve_mode,
            filter_speckle: clamp(filter_speckle, FILTER_SPECKLE_RANGE),
            color_precision: clamp(color_precision, COLOR_PRECISION_RANGE),
            layer_difference: clamp(gradient_step, GRADIENT_STEP_RANGE),
            corner_threshold: clamp(corner_threshold, CORNER_THRESHOLD_RANGE),
            length_threshold: segment_length as f64 / SEGMENT_LENGTH_DIVISOR as f64,
            splice_threshold: clamp(splice_threshold, SPLICE_THRESHOLD_RANGE),
            max_iterations: MAX_ITERATIONS,
        }
    }

    pub fn color_mode(&self) -> ColorMode {
        self.color_mode
    }

    pub fn hierarchical(&self) -> Hierarchical {
        self.hierarchical
    }

    pub fn curve_mode(&self) -> CurveMode {
        self.curve_mode
    }

    pub fn filter_speckle(&self) -> u32 {
        self.filter_speckle
    }

    pub fn color_precision(&self) -> u32 {
        self.color_precision
    }

    pub fn layer_difference(&self) -> u32 {
        self.layer_difference
    }

    pub fn corner_threshold(&self) -> u32 {
        self.corner_threshold
    }

    pub fn length_threshold(&self) -> f64 {
        self.length_threshold
    }

    pub fn splice_threshold(&self) -> u32 {
        self.splice_threshold
    }

    pub fn max_iterations(&self) -> usize {
        self.max_iterations
    }

    /// True when every numeric field lies inside the range of its control.
    pub fn is_within_bounds(&self) -> bool {
        let within = |v: u32, r: RangeInclusive<i32>| r.contains(&(v as i32));
        let tenths = (self.length_threshold * SEGMENT_LENGTH_DIVISOR as f64).round() as i32;

        within(self.filter_speckle, FILTER_SPECKLE_RANGE)
            && within(self.color_precision, COLOR_PRECISION_RANGE)
            && within(self.layer_difference, GRADIENT_STEP_RANGE)
            && within(self.corner_threshold, CORNER_THRESHOLD_RANGE)
            && within(self.splice_threshold, SPLICE_THRESHOLD_RANGE)
            && SEGMENT_LENGTH_RANGE.contains(&tenths)
            && (tenths - SEGMENT_LENGTH_RANGE.start()) % SEGMENT_LENGTH_STEP == 0
            && self.max_iterations == MAX_ITERATIONS
    }

    /// The snapshot as the tracer's named options, in a stable order.
    pub fn named_options(&self) -> Vec<(&'static str, String)> {
        vec![
            ("colormode", self.color_mode.option_name().to_string()),
            ("hierarchical", self.hierarchical.option_name().to_string()),
            ("mode", self.curve_mode.option_name().to_string()),
            ("filter_speckle", self.filter_speckle.to_string()),
            ("color_precision", self.color_precision.to_string()),
            ("layer_difference", self.layer_difference.to_string()),
            ("corner_threshold", self.corner_threshold.to_string()),
            ("length_threshold", format!("{:.1}", self.length_threshold)),
            ("max_iterations", self.max_iterations.to_string()),
            ("splice_threshold", self.splice_threshold.to_string()),
        ]
    }
}

impl Default for ParameterSnapshot {
    fn default() -> Self {
        Self::from_positions(
            ColorMode::default(),
            Hierarchical::default(),
            CurveMode::default(),
            DEFAULT_FILTER_SPECKLE,
            DEFAULT_COLOR_PRECISION,
            DEFAULT_GRADIENT_STEP,
            DEFAULT_CORNER_THRESHOLD,
            DEFAULT_SEGMENT_LENGTH,
            DEFAULT_SPLICE_THRESHOLD,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_the_controls() {
        let snapshot = ParameterSnapshot::default();
        assert_eq!(snapshot.color_mode(), ColorMode::Color);
        assert_eq!(snapshot.hierarchical(), Hierarchical::Stacked);
        assert_eq!(snapshot.curve_mode(), CurveMode::Spline);
        assert_eq!(snapshot.filter_speckle(), 4);
        assert_eq!(snapshot.color_precision(), 6);
        assert_eq!(snapshot.layer_difference(), 16);
        assert_eq!(snapshot.corner_threshold(), 60);
        assert_eq!(snapshot.length_threshold(), 4.0);
        assert_eq!(snapshot.splice_threshold(), 45);
        assert_eq!(snapshot.max_iterations(), 10);
        assert!(snapshot.is_within_bounds());
    }

    #[test]
    fn pixel_mode_serializes_as_none() {
        assert_eq!(serde_json::to_string(&CurveMode::Pixel).unwrap(), "\"none\"");
        let mode: CurveMode = serde_json::from_str("\"none\"").unwrap();
        assert_eq!(mode, CurveMode::Pixel);
    }

    #[test]
    fn named_options_cover_every_field() {
        let names: Vec<_> = ParameterSnapshot::default()
            .named_options()
            .into_iter()
            .map(|(name, _)| name)
            .collect();
        assert_eq!(
            names,
            [
                "colormode",
                "hierarchical",
                "mode",
                "filter_speckle",
                "color_precision",
                "layer_difference",
                "corner_threshold",
                "length_threshold",
                "max_iterations",
                "splice_threshold",
            ]
        );
    }
}
