// src-tauri/src/processing/tracer/config.rs

//! Maps the panel's snapshot onto the tracer's own configuration type.

use visioncortex::PathSimplifyMode;

use crate::core::{ColorMode, CurveMode, Hierarchical, ParameterSnapshot};

/// Builds the `vtracer` configuration for one conversion.
pub fn vtracer_config(parameters: &ParameterSnapshot, path_precision: u32) -> vtracer::Config {
    vtracer::Config {
        color_mode: match parameters.color_mode() {
            ColorMode::Color => vtracer::ColorMode::Color,
            ColorMode::Binary => vtracer::ColorMode::Binary,
        },
        hierarchical: match parameters.hierarchical() {
            Hierarchical::Stacked => vtracer::Hierarchical::Stacked,
            Hierarchical::Cutout => vtracer::Hierarchical::Cutout,
        },
        mode: match parameters.curve_mode() {
            CurveMode::Spline => PathSimplifyMode::Spline,
            CurveMode::Polygon => PathSimplifyMode::Polygon,
            CurveMode::Pixel => PathSimplifyMode::None,
        },
        filter_speckle: parameters.filter_speckle() as usize,
        color_precision: parameters.color_precision() as i32,
        layer_difference: parameters.layer_difference() as i32,
        corner_threshold: parameters.corner_threshold() as i32,
        length_threshold: parameters.length_threshold(),
        max_iterations: parameters.max_iterations(),
        splice_threshold: parameters.splice_threshold() as i32,
        path_precision: Some(path_precision),
        ..vtracer::Config::default()
    }
}
