use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::errors::{VisionError, VisionResult};
use crate::frames::FrameSource;

/// Tunables loaded from an optional TOML file passed via `--config`.
/// Every field has a default so the file (and any key in it) may be omitted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PipelineConfig {
    /// Extension frame images must carry in directory mode (matched
    /// ASCII case-insensitively, without the dot).
    #[serde(default = "default_frame_extension")]
    pub frame_extension: String,
    #[serde(default)]
    pub sampling: SamplingConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SamplingConfig {
    /// Analyze every Nth frame, counting from 1. Values of 0 or 1 mean
    /// every frame.
    #[serde(default = "default_sample_interval")]
    pub sample_interval: usize,
    /// Components scoring below this are dropped by the strategy.
    #[serde(default)]
    pub min_confidence: f32,
}

impl SamplingConfig {
    /// Whether the frame at 0-based `index` should be analyzed.
    pub fn should_sample(&self, index: usize) -> bool {
        if self.sample_interval <= 1 {
            return true;
        }
        (index + 1) % self.sample_interval == 0
    }
}

fn default_frame_extension() -> String {
    "jpg".to_string()
}

fn default_sample_interval() -> usize {
    5
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            frame_extension: default_frame_extension(),
            sampling: SamplingConfig::default(),
        }
    }
}

impl Default for SamplingConfig {
    fn default() -> Self {
        Self {
            sample_interval: default_sample_interval(),
            min_confidence: 0.0,
        }
    }
}

pub fn load_pipeline_config(path: Option<&Path>) -> VisionResult<PipelineConfig> {
    let Some(path) = path else {
        return Ok(PipelineConfig::default());
    };
    if !path.exists() {
        return Err(VisionError::Config(format!(
            "config file not found: {}",
            path.display()
        )));
    }
    let content = std::fs::read_to_string(path)?;
    let config: PipelineConfig = toml::from_str(&content)?;
    tracing::info!(path = %path.display(), interval = config.sampling.sample_interval, "config loaded");
    Ok(config)
}

/// Everything one run needs, resolved up front and passed through the
/// pipeline explicitly.
#[derive(Debug, Clone)]
pub struct RunConfig {
    pub backend: String,
    pub source: FrameSource,
    pub output_dir: PathBuf,
    pub pipeline: PipelineConfig,
}
