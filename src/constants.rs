pub const DEFAULT_WIDTH: u32 = 1280;

/// Extensions picked up when scanning a directory, compared case-insensitively.
pub const SUPPORTED_IMAGE_EXTENSIONS: &[&str] = &["bmp", "jpg", "jpeg", "png", "webp"];

pub const OUTPUT_DIR_NAME: &str = "converted";
pub const OUTPUT_EXTENSION: &str = "webp";

pub const ENCODER_TOOL: &str = "cwebp";
pub const PROBE_TOOL: &str = "magick";

pub const ENCODER_PRESET: &str = "default";
pub const ENCODER_QUALITY: u8 = 85;
pub const ENCODER_METHOD: u8 = 6;
pub const ENCODER_PASSES: u8 = 10;

/// Minimum digit count of the `[i/n]` progress counter.
pub const PROGRESS_INDEX_WIDTH: usize = 3;

pub const PROGRESS_BAR_TEMPLATE: &str = "{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} {msg}";

pub const ERROR_MARKER: &str = "ERROR";
pub const WARN_MARKER: &str = "WARN";
