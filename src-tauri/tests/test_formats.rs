//! Suffix to format mapping and input validation.

mod common;

use common::TestHarness;
use vtracer_gui_lib::utils::{
    DEFAULT_FORMAT, ImageFormat, VectorizerError, ValidationError, format_from_path,
    is_image_file, supported_extensions, validate_input_path,
};

#[test]
fn test_supported_suffixes_map_to_fixed_tags() {
    let table = [
        ("a.jpg", "jpg"),
        ("a.jpeg", "jpg"),
        ("a.png", "png"),
        ("a.bmp", "bmp"),
        ("a.gif", "gif"),
        ("a.tiff", "tiff"),
    ];
    for (name, tag) in table {
        assert_eq!(format_from_path(name).tag(), tag, "{name}");
        assert!(is_image_file(name), "{name}");
    }
}

#[test]
fn test_unknown_suffixes_fall_back_to_jpeg() {
    for name in ["a.webp", "a.tif", "a.svg", "a", "archive.tar.gz", ".hidden"] {
        assert_eq!(format_from_path(name), DEFAULT_FORMAT, "{name}");
        assert_eq!(format_from_path(name).tag(), "jpg", "{name}");
    }
}

#[test]
fn test_suffix_matching_is_case_insensitive() {
    assert_eq!(format_from_path("/pics/HOLIDAY.PNG"), ImageFormat::PNG);
    assert_eq!(format_from_path("/pics/scan.TiFf"), ImageFormat::TIFF);
}

#[test]
fn test_dialog_filter_lists_every_supported_suffix() {
    let mut exts = supported_extensions();
    exts.sort_unstable();
    assert_eq!(exts, ["bmp", "gif", "jpeg", "jpg", "png", "tiff"]);
}

#[test]
fn test_validation_accepts_real_image() {
    let harness = TestHarness::new();
    let path = harness.write_image("ok.png");
    assert!(validate_input_path(&path).is_ok());
}

#[test]
fn test_load_rejects_unsupported_file() {
    let harness = TestHarness::new();
    let path = harness.write_bytes("readme.md", b"# hi");
    let err = harness.state.load_image(path).unwrap_err();
    assert!(matches!(
        err,
        VectorizerError::Validation(ValidationError::UnsupportedImage(_))
    ));
    assert!(!harness.state.status().unwrap().can_convert);
}

#[tokio::test]
async fn test_preview_returns_loaded_file_unchanged() {
    let harness = TestHarness::new();
    let path = harness.write_image("shown.gif");
    harness.state.load_image(&path).unwrap();

    let bytes = harness.state.image_bytes().await.unwrap();

    assert_eq!(bytes, std::fs::read(&path).unwrap());
}

#[tokio::test]
async fn test_preview_follows_the_latest_selection() {
    let harness = TestHarness::new();
    harness.state.load_image(harness.write_image("first.png")).unwrap();
    let second = harness.write_jpeg_as("second.jpg");
    harness.state.load_image(&second).unwrap();

    assert_eq!(harness.state.image_bytes().await.unwrap(), std::fs::read(&second).unwrap());
}

#[tokio::test]
async fn test_preview_without_image_is_rejected() {
    let harness = TestHarness::new();
    let err = harness.state.image_bytes().await.unwrap_err();
    assert!(matches!(err, VectorizerError::NoImage));
}

#[tokio::test]
async fn test_preview_of_vanished_file_is_an_io_error() {
    let harness = TestHarness::new();
    let path = harness.write_image("gone.png");
    harness.state.load_image(&path).unwrap();
    std::fs::remove_file(&path).unwrap();

    let err = harness.state.image_bytes().await.unwrap_err();
    assert!(matches!(err, VectorizerError::Io(_)), "{err:?}");
}
