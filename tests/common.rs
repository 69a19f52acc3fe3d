#![allow(dead_code)]

use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

pub fn create_temp_directory() -> TempDir {
    TempDir::new().unwrap()
}

pub fn create_test_image_files(dir: &Path, names: &[&str]) -> Vec<PathBuf> {
    names
        .iter()
        .map(|name| {
            let path = dir.join(name);
            File::create(&path)
                .unwrap()
                .write_all(b"fake image data")
                .unwrap();
            path
        })
        .collect()
}

/// Stand-in for `cwebp`: touches the `-o` target and fails for inputs named `*bad*`.
const FAKE_CWEBP: &str = r#"#!/bin/sh
out=""
prev=""
for arg in "$@"; do
  if [ "$prev" = "-o" ]; then out="$arg"; fi
  prev="$arg"
done
case "$prev" in
  *bad*) echo "Decoding of $prev failed." >&2; exit 1 ;;
esac
echo "$@" > "$out"
"#;

/// Stand-in for `magick identify`: prints a fixed width, or fails for `*corrupt*`.
fn fake_magick(width: u32) -> String {
    format!(
        r#"#!/bin/sh
for last in "$@"; do :; done
case "$last" in
  *corrupt*) echo "identify: improper image header" >&2; exit 1 ;;
esac
printf '{}'
"#,
        width
    )
}

#[cfg(unix)]
fn write_script(path: &Path, body: &str) {
    use std::os::unix::fs::PermissionsExt;

    fs::write(path, body).unwrap();
    let mut permissions = fs::metadata(path).unwrap().permissions();
    permissions.set_mode(0o755);
    fs::set_permissions(path, permissions).unwrap();
}

/// Writes fake `cwebp` and `magick` scripts into `dir` and returns their paths.
#[cfg(unix)]
pub fn create_fake_tools(dir: &Path, width: u32) -> (PathBuf, PathBuf) {
    let bin = dir.join("bin");
    fs::create_dir_all(&bin).unwrap();

    let cwebp = bin.join("cwebp");
    let magick = bin.join("magick");
    write_script(&cwebp, FAKE_CWEBP);
    write_script(&magick, &fake_magick(width));
    (cwebp, magick)
}
