pub mod omniparser;
pub mod paddle;
pub mod traits;
pub mod types;

use std::fmt;

use crate::config::PipelineConfig;
use crate::errors::{VisionError, VisionResult};
use crate::frames::Frame;
use omniparser::OmniParserStrategy;
use paddle::PaddleStrategy;
use traits::DetectionStrategy;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Backend {
    OmniParser,
    Paddle,
}

impl Backend {
    pub fn parse(name: &str) -> VisionResult<Self> {
        match name {
            "omniparser" => Ok(Self::OmniParser),
            "paddle" => Ok(Self::Paddle),
            other => Err(VisionError::UnknownBackend(other.to_string())),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::OmniParser => "omniparser",
            Self::Paddle => "paddle",
        }
    }
}

impl fmt::Display for Backend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Map a requested backend name to its detection strategy, configured with
/// the run's sampling policy. Anything outside the fixed set is
/// `UnknownBackend`.
pub fn select_backend(
    name: &str,
    config: &PipelineConfig,
) -> VisionResult<Box<dyn DetectionStrategy>> {
    match Backend::parse(name)? {
        Backend::OmniParser => Ok(Box::new(OmniParserStrategy::new(config.sampling.clone()))),
        Backend::Paddle => Ok(Box::new(PaddleStrategy::new(config.sampling.clone()))),
    }
}

/// Read and decode a frame image to learn its dimensions. Any failure here
/// is a per-frame detection error, contained by the pipeline.
pub(crate) async fn frame_dimensions(frame: &Frame) -> VisionResult<(u32, u32)> {
    let bytes = tokio::fs::read(&frame.path)
        .await
        .map_err(|e| VisionError::FrameDetection {
            frame: frame.id.clone(),
            reason: format!("read: {e}"),
        })?;
    let img = image::load_from_memory(&bytes).map_err(|e| VisionError::FrameDetection {
        frame: frame.id.clone(),
        reason: format!("decode: {e}"),
    })?;
    Ok((img.width(), img.height()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_backends_parse() {
        assert_eq!(Backend::parse("omniparser").unwrap(), Backend::OmniParser);
        assert_eq!(Backend::parse("paddle").unwrap(), Backend::Paddle);
    }

    #[test]
    fn unknown_backend_is_rejected() {
        let result = Backend::parse("tesseract");
        assert!(matches!(result, Err(VisionError::UnknownBackend(name)) if name == "tesseract"));
    }

    #[test]
    fn selector_builds_the_requested_strategy() {
        let config = PipelineConfig::default();
        let strategy = select_backend("paddle", &config).unwrap();
        assert_eq!(strategy.backend(), Backend::Paddle);
    }
}
