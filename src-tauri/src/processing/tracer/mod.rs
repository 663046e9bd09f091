// src-tauri/src/processing/tracer/mod.rs

//! Raster to SVG tracing via the `vtracer` crate.
//!
//! # Architecture
//!
//! - [`Tracer`]: The black-box boundary. Raw bytes, a format tag and a
//!   parameter snapshot in; SVG text out.
//! - [`VtracerEngine`]: Production implementation; decodes with `image` and
//!   hands RGBA pixels to `vtracer::convert`.
//! - [`config`]: Maps a `ParameterSnapshot` onto `vtracer::Config`.

mod config;
mod engine;

pub use config::vtracer_config;
pub use engine::{Tracer, VtracerEngine};
