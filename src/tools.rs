use crate::constants::{ENCODER_TOOL, PROBE_TOOL};
use crate::error::{ConvertError, Result};
use std::path::{Path, PathBuf};

/// Finds external executables on the host.
pub trait ToolLocator {
    fn locate(&self, name: &str) -> Option<PathBuf>;

    fn is_available(&self, name: &str) -> bool {
        self.locate(name).is_some()
    }
}

/// Searches the executable search path (`PATH`, plus `PATHEXT` on Windows).
#[derive(Debug, Clone, Copy, Default)]
pub struct PathLocator;

impl ToolLocator for PathLocator {
    fn locate(&self, name: &str) -> Option<PathBuf> {
        which::which(name).ok()
    }
}

/// Executables used for one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toolchain {
    pub encoder: PathBuf,
    pub prober: PathBuf,
}

/// Resolve the encoder and the prober, failing before any file is touched.
///
/// An explicit override must name an existing file; otherwise the tool is
/// looked up by its default name through `locator`.
pub fn require_tools(
    locator: &dyn ToolLocator,
    encoder_override: Option<&Path>,
    prober_override: Option<&Path>,
) -> Result<Toolchain> {
    let encoder = require_tool(locator, ENCODER_TOOL, encoder_override)?;
    let prober = require_tool(locator, PROBE_TOOL, prober_override)?;
    Ok(Toolchain { encoder, prober })
}

fn require_tool(locator: &dyn ToolLocator, name: &str, explicit: Option<&Path>) -> Result<PathBuf> {
    match explicit {
        Some(path) if path.is_file() => Ok(path.to_path_buf()),
        Some(path) => Err(ConvertError::ToolNotFound(path.display().to_string())),
        None => locator
            .locate(name)
            .ok_or_else(|| ConvertError::ToolNotFound(name.to_string())),
    }
}
