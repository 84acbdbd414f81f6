use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum VisionError {
    #[error("Unknown backend '{0}' (expected 'omniparser' or 'paddle')")]
    UnknownBackend(String),

    #[error("No frames found in {}", .0.display())]
    EmptyInput(PathBuf),

    #[error("Detection failed on frame '{frame}': {reason}")]
    FrameDetection { frame: String, reason: String },

    #[error("Failed to write report to {}: {}", .path.display(), .source)]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML deserialize error: {0}")]
    TomlDe(#[from] toml::de::Error),
}

pub type VisionResult<T> = Result<T, VisionError>;
