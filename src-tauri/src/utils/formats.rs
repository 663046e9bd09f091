use std::path::Path;

/// Raster encodings the tracer is told to decode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageFormat {
    JPEG,
    PNG,
    BMP,
    GIF,
    TIFF,
}

/// Fallback when a suffix is not in the table.
pub const DEFAULT_FORMAT: ImageFormat = ImageFormat::JPEG;

/// Every suffix the file picker and drop target accept, with the format it maps to.
const SUFFIX_TABLE: &[(&str, ImageFormat)] = &[
    ("png", ImageFormat::PNG),
    ("jpg", ImageFormat::JPEG),
    ("jpeg", ImageFormat::JPEG),
    ("bmp", ImageFormat::BMP),
    ("gif", ImageFormat::GIF),
    ("tiff", ImageFormat::TIFF),
];

impl ImageFormat {
    /// Short tag handed to the tracing library alongside the raw bytes.
    pub fn tag(&self) -> &'static str {
        match self {
            Self::JPEG => "jpg",
            Self::PNG => "png",
            Self::BMP => "bmp",
            Self::GIF => "gif",
            Self::TIFF => "tiff",
        }
    }

    /// Looks up an extension (without the dot) in the fixed table.
    pub fn from_extension(ext: &str) -> Option<Self> {
        let ext = ext.to_lowercase();
        SUFFIX_TABLE
            .iter()
            .find(|(suffix, _)| *suffix == ext)
            .map(|(_, format)| *format)
    }

    /// Decoder selection for the `image` crate.
    pub fn decoder(&self) -> image::ImageFormat {
        match self {
            Self::JPEG => image::ImageFormat::Jpeg,
            Self::PNG => image::ImageFormat::Png,
            Self::BMP => image::ImageFormat::Bmp,
            Self::GIF => image::ImageFormat::Gif,
            Self::TIFF => image::ImageFormat::Tiff,
        }
    }
}

/// Get format from file suffix, falling back to JPEG for anything unknown.
pub fn format_from_path(path: impl AsRef<Path>) -> ImageFormat {
    path.as_ref()
        .extension()
        .and_then(|e| e.to_str())
        .and_then(ImageFormat::from_extension)
        .unwrap_or(DEFAULT_FORMAT)
}

/// Whether the path carries one of the accepted image suffixes.
pub fn is_image_file(path: impl AsRef<Path>) -> bool {
    path.as_ref()
        .extension()
        .and_then(|e| e.to_str())
        .and_then(ImageFormat::from_extension)
        .is_some()
}

/// Suffixes for the open dialog filter, without dots.
pub fn supported_extensions() -> Vec<&'static str> {
    SUFFIX_TABLE.iter().map(|(suffix, _)| *suffix).collect()
}
