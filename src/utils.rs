/// Utility functions for common operations
///
/// Helpers shared by the resolver, the batch converter and the reporters.
use crate::constants::{OUTPUT_EXTENSION, PROGRESS_INDEX_WIDTH, SUPPORTED_IMAGE_EXTENSIONS};
use std::path::{Path, PathBuf};

/// Check if a file path carries one of the recognized image extensions
///
/// # Arguments
/// * `path` - The file path to check
///
/// # Returns
/// * `true` for `bmp`, `jpg`, `jpeg`, `png` or `webp` in any letter case
pub fn is_image_file(path: &Path) -> bool {
    path.extension()
        .and_then(|s| s.to_str())
        .map(|ext| {
            let ext_lower = ext.to_lowercase();
            SUPPORTED_IMAGE_EXTENSIONS.contains(&ext_lower.as_str())
        })
        .unwrap_or(false)
}

/// Build `<output_dir>/<stem>.webp` for a source image
pub fn output_path_for(input_path: &Path, output_dir: &Path) -> PathBuf {
    let stem = input_path
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();
    output_dir.join(format!("{}.{}", stem, OUTPUT_EXTENSION))
}

/// Format the `[i/n]` counter, zero-padded to a common width
///
/// # Arguments
/// * `index` - 1-based position of the current file
/// * `total` - Number of files in the batch
pub fn format_counter(index: usize, total: usize) -> String {
    let width = total.to_string().len().max(PROGRESS_INDEX_WIDTH);
    format!("[{:0width$}/{:0width$}]", index, total, width = width)
}

/// Display name of a path, falling back to the whole path
pub fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}
