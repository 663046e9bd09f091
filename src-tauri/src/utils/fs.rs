use std::path::{Path, PathBuf};
use tokio::fs;
use crate::utils::{VectorizerError, VectorizerResult};

/// Extension given to saved vector output.
pub const SVG_EXTENSION: &str = "svg";

/// Get the file name component for display, or the whole path if there is none.
pub fn extract_filename(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().to_string())
        .unwrap_or_else(|| path.display().to_string())
}

/// `<input stem>.svg`, used to prefill the save dialog.
pub fn default_output_name(input: &Path) -> Option<String> {
    input
        .file_stem()
        .map(|stem| format!("{}.{SVG_EXTENSION}", stem.to_string_lossy()))
}

/// Reads a source raster for display.
pub async fn read_image(path: impl AsRef<Path>) -> VectorizerResult<Vec<u8>> {
    let path = path.as_ref();
    fs::read(path)
        .await
        .map_err(|e| VectorizerError::io(format!("Cannot read '{}': {}", path.display(), e)))
}

/// Writes SVG text verbatim as UTF-8.
pub async fn write_svg(path: impl AsRef<Path>, svg: &str) -> VectorizerResult<PathBuf> {
    let path = path.as_ref();
    fs::write(path, svg.as_bytes())
        .await
        .map_err(|e| VectorizerError::save(format!("{}: {}", path.display(), e)))?;
    Ok(path.to_path_buf())
}
