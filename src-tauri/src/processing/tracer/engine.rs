// src-tauri/src/processing/tracer/engine.rs

use tracing::debug;
use visioncortex::ColorImage;

use crate::core::ParameterSnapshot;
use crate::utils::{ImageFormat, VectorizerError, VectorizerResult};

use super::config::vtracer_config;

/// The opaque image-to-vector conversion.
///
/// Called from the worker thread, so implementations block freely.
pub trait Tracer: Send + Sync {
    fn trace(
        &self,
        bytes: &[u8],
        format: ImageFormat,
        parameters: &ParameterSnapshot,
    ) -> VectorizerResult<String>;
}

/// [`Tracer`] backed by `vtracer`.
#[derive(Debug, Clone)]
pub struct VtracerEngine {
    path_precision: u32,
}

impl VtracerEngine {
    pub fn new(path_precision: u32) -> Self {
        Self { path_precision }
    }
}

impl Tracer for VtracerEngine {
    fn trace(
        &self,
        bytes: &[u8],
        format: ImageFormat,
        parameters: &ParameterSnapshot,
    ) -> VectorizerResult<String> {
        let rgba = image::load_from_memory_with_format(bytes, format.decoder())?.to_rgba8();
        let (width, height) = rgba.dimensions();
        debug!("Decoded {} image: {}×{}", format.tag(), width, height);

        let image = ColorImage {
            pixels: rgba.into_raw(),
            width: width as usize,
            height: height as usize,
        };

        let svg = vtracer::convert(image, vtracer_config(parameters, self.path_precision))
            .map_err(VectorizerError::tracing)?;

        Ok(svg.to_string())
    }
}
