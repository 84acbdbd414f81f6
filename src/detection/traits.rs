use async_trait::async_trait;

use crate::detection::types::UIComponent;
use crate::detection::Backend;
use crate::errors::VisionResult;
use crate::frames::Frame;

/// Strategy trait for per-frame UI detection.
/// Two implementations: OmniParser (GPU element detection) and Paddle (CPU OCR).
/// A strategy is constructed once per run and reused across frames; `detect`
/// is stateless from the caller's point of view.
#[async_trait]
pub trait DetectionStrategy: Send + Sync {
    fn backend(&self) -> Backend;

    async fn detect(&self, frame: &Frame) -> VisionResult<Vec<UIComponent>>;
}
