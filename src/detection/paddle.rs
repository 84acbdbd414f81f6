/// Paddle-flavored adapter: OCR text-region detection with recognized text
/// and confidence, CPU-resident. Like the OmniParser adapter, this is the
/// seam a real PaddleOCR session plugs into.
use async_trait::async_trait;

use crate::config::SamplingConfig;
use crate::detection::traits::DetectionStrategy;
use crate::detection::types::{ComponentType, UIComponent};
use crate::detection::{frame_dimensions, Backend};
use crate::errors::VisionResult;
use crate::frames::{Frame, FrameKind};

pub struct PaddleStrategy {
    sampling: SamplingConfig,
}

impl PaddleStrategy {
    pub fn new(sampling: SamplingConfig) -> Self {
        tracing::info!(
            interval = sampling.sample_interval,
            "Initializing PaddleOCR backend (CPU)"
        );
        Self { sampling }
    }

    fn components_for(&self, width: u32, height: u32) -> Vec<UIComponent> {
        let text_region = UIComponent::new(
            ComponentType::Text,
            "Hello World",
            0.85,
            [
                width / 10,
                height / 10,
                (width / 3).max(1),
                (height / 20).max(1),
            ],
        );

        let mut components = vec![text_region];
        components.retain(|c| c.confidence >= self.sampling.min_confidence);
        components
    }
}

#[async_trait]
impl DetectionStrategy for PaddleStrategy {
    fn backend(&self) -> Backend {
        Backend::Paddle
    }

    async fn detect(&self, frame: &Frame) -> VisionResult<Vec<UIComponent>> {
        match frame.kind {
            FrameKind::VideoUnit => Ok(vec![UIComponent::new(
                ComponentType::Text,
                "Hello World",
                0.85,
                [100, 100, 200, 120],
            )]),
            FrameKind::Image => {
                if !self.sampling.should_sample(frame.index) {
                    return Ok(Vec::new());
                }
                let (width, height) = frame_dimensions(frame).await?;
                Ok(self.components_for(width, height))
            }
        }
    }
}
