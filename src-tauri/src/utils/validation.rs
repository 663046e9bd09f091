use std::path::Path;
use crate::utils::{ValidationError, VectorizerResult, is_image_file};

/// Validates a path chosen through the picker or dropped onto the window.
pub fn validate_input_path(path: impl AsRef<Path>) -> VectorizerResult<()> {
    let path = path.as_ref();

    if !path.exists() {
        return Err(ValidationError::path_not_found(path).into());
    }

    if !path.is_file() {
        return Err(ValidationError::not_a_file(path).into());
    }

    if !is_image_file(path) {
        return Err(ValidationError::unsupported_image(path).into());
    }

    Ok(())
}
