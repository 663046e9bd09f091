pub mod error;
pub mod validation;
pub mod formats;
pub mod fs;

pub use error::{PathError, ValidationError, VectorizerError, VectorizerResult};
pub use validation::validate_input_path;
pub use formats::{ImageFormat, DEFAULT_FORMAT, format_from_path, is_image_file, supported_extensions};
pub use fs::{default_output_name, extract_filename, read_image, write_svg};
