use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConvertError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("The specified path does not exist: '{}'", .0.display())]
    PathNotFound(PathBuf),

    #[error("Failed to get width of image: '{}'\n{detail}", path.display())]
    ProbeFailure { path: PathBuf, detail: String },

    #[error("Failed to process image: '{}'\n{detail}", path.display())]
    EncodeFailure { path: PathBuf, detail: String },

    #[error("'{0}' is not found. Aborting...")]
    ToolNotFound(String),

    #[error("Failed to create output directory '{}'", path.display())]
    DirectoryCreationFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Walkdir error: {0}")]
    Walkdir(#[from] walkdir::Error),
}

pub type Result<T> = std::result::Result<T, ConvertError>;
