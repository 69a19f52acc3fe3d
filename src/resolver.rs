use crate::constants::OUTPUT_DIR_NAME;
use crate::error::{ConvertError, Result};
use crate::natural::sort_paths;
use crate::utils::is_image_file;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Turns the user-supplied input into the ordered list of images to convert.
///
/// A file is returned as-is (absolute, no extension check). A directory is
/// scanned one level deep, filtered to the supported extensions and sorted
/// in natural order.
///
/// # Returns
/// * `Err(ConvertError::PathNotFound)` - If `input` is neither a file nor a directory
pub fn resolve_inputs(input: &Path) -> Result<Vec<PathBuf>> {
    if input.is_file() {
        return Ok(vec![absolute(input)?]);
    }
    if !input.is_dir() {
        return Err(ConvertError::PathNotFound(input.to_path_buf()));
    }

    let root = absolute(input)?;
    let mut image_files = Vec::new();
    for entry in WalkDir::new(&root).min_depth(1).max_depth(1) {
        let entry = entry?;
        let path = entry.path();
        if path.is_file() && is_image_file(path) {
            image_files.push(path.to_path_buf());
        }
    }

    sort_paths(&mut image_files);
    Ok(image_files)
}

/// The directory that holds the input: the parent of a file, or the directory itself.
pub fn parent_directory_of(input: &Path) -> Result<PathBuf> {
    if input.is_file() {
        let file = absolute(input)?;
        return Ok(file
            .parent()
            .map(Path::to_path_buf)
            .unwrap_or(file));
    }
    if input.is_dir() {
        return absolute(input);
    }
    Err(ConvertError::PathNotFound(input.to_path_buf()))
}

/// `<parent>/converted`, the sibling directory outputs are written to.
pub fn output_directory_for(input: &Path) -> Result<PathBuf> {
    Ok(parent_directory_of(input)?.join(OUTPUT_DIR_NAME))
}

fn absolute(path: &Path) -> Result<PathBuf> {
    Ok(std::path::absolute(path)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::File;
    use tempfile::TempDir;

    fn names(paths: &[PathBuf]) -> Vec<String> {
        paths
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
            .collect()
    }

    #[test]
    fn test_resolve_directory_natural_order() {
        let temp_dir = TempDir::new().unwrap();
        for name in ["img2.png", "img10.png", "img1.png"] {
            File::create(temp_dir.path().join(name)).unwrap();
        }

        let files = resolve_inputs(temp_dir.path()).unwrap();
        assert_eq!(names(&files), vec!["img1.png", "img2.png", "img10.png"]);
        assert!(files.iter().all(|p| p.is_absolute()));
    }

    #[test]
    fn test_resolve_directory_filters_extensions() {
        let temp_dir = TempDir::new().unwrap();
        for name in ["a.png", "b.txt", "c.JPG", "d.gif"] {
            File::create(temp_dir.path().join(name)).unwrap();
        }

        let files = resolve_inputs(temp_dir.path()).unwrap();
        assert_eq!(names(&files), vec!["a.png", "c.JPG"]);
    }

    #[test]
    fn test_resolve_directory_is_not_recursive() {
        let temp_dir = TempDir::new().unwrap();
        let subdir = temp_dir.path().join("nested.png");
        std::fs::create_dir(&subdir).unwrap();
        File::create(subdir.join("inner.png")).unwrap();
        File::create(temp_dir.path().join("top.jpeg")).unwrap();

        let files = resolve_inputs(temp_dir.path()).unwrap();
        assert_eq!(names(&files), vec!["top.jpeg"]);
    }

    #[test]
    fn test_resolve_single_file_skips_extension_filter() {
        let temp_dir = TempDir::new().unwrap();
        let test_file = temp_dir.path().join("scan.tiff");
        File::create(&test_file).unwrap();

        let files = resolve_inputs(&test_file).unwrap();
        assert_eq!(files, vec![test_file]);
    }

    #[test]
    fn test_resolve_empty_directory() {
        let temp_dir = TempDir::new().unwrap();
        assert!(resolve_inputs(temp_dir.path()).unwrap().is_empty());
    }

    #[test]
    fn test_resolve_missing_path() {
        let result = resolve_inputs(Path::new("/nonexistent/input"));
        assert!(matches!(result, Err(ConvertError::PathNotFound(_))));
    }

    #[test]
    fn test_parent_directory_of() {
        let temp_dir = TempDir::new().unwrap();
        let test_file = temp_dir.path().join("photo.png");
        File::create(&test_file).unwrap();

        assert_eq!(parent_directory_of(&test_file).unwrap(), temp_dir.path());
        assert_eq!(parent_directory_of(temp_dir.path()).unwrap(), temp_dir.path());
        assert!(matches!(
            parent_directory_of(Path::new("/nonexistent/input")),
            Err(ConvertError::PathNotFound(_))
        ));
    }

    #[test]
    fn test_output_directory_for() {
        let temp_dir = TempDir::new().unwrap();
        assert_eq!(
            output_directory_for(temp_dir.path()).unwrap(),
            temp_dir.path().join("converted")
        );
    }
}
