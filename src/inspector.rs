use crate::error::{ConvertError, Result};
use crate::process::ProcessRunner;
use std::ffi::OsString;
use std::path::{Path, PathBuf};

/// Arguments for `magick identify -ping -format '%w\n' <path>`.
///
/// `-ping` reads only the header, so the width comes back without decoding pixels.
/// Animated images print one width per frame; the trailing `\n` escape keeps
/// those on separate lines instead of running them together.
pub fn probe_args(path: &Path) -> Vec<OsString> {
    vec![
        "identify".into(),
        "-ping".into(),
        "-format".into(),
        "%w\\n".into(),
        path.as_os_str().to_os_string(),
    ]
}

/// Queries the pixel width of one image through the external prober.
pub struct ImageInspector<'a, R: ProcessRunner> {
    runner: &'a R,
    prober: PathBuf,
}

impl<'a, R: ProcessRunner> ImageInspector<'a, R> {
    pub fn new(runner: &'a R, prober: impl Into<PathBuf>) -> Self {
        Self {
            runner,
            prober: prober.into(),
        }
    }

    /// # Returns
    /// * `Ok(width)` - A positive pixel width
    /// * `Err(ConvertError::ProbeFailure)` - Spawn failure, non-zero exit, or output
    ///   that is not a positive integer
    pub fn width_of(&self, path: &Path) -> Result<u32> {
        let output = self
            .runner
            .run(self.prober.as_os_str(), &probe_args(path))
            .map_err(|e| probe_failure(path, e.to_string()))?;

        if !output.success() {
            return Err(probe_failure(path, output.diagnostic()));
        }

        parse_width(&output.stdout).ok_or_else(|| {
            let detail = if output.stdout.trim().is_empty() {
                output.diagnostic()
            } else {
                format!("unexpected output: {:?}", output.stdout.trim())
            };
            probe_failure(path, detail)
        })
    }
}

/// First line of the prober's stdout as a positive integer.
pub fn parse_width(stdout: &str) -> Option<u32> {
    stdout
        .lines()
        .next()
        .and_then(|line| line.trim().parse::<u32>().ok())
        .filter(|width| *width > 0)
}

fn probe_failure(path: &Path, detail: String) -> ConvertError {
    ConvertError::ProbeFailure {
        path: path.to_path_buf(),
        detail,
    }
}
