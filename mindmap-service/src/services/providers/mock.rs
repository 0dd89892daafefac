//! Mock provider implementation for testing.

use super::{ImagePayload, ProviderError, VisionProvider};
use crate::models::MindmapNode;
use async_trait::async_trait;
use image::GenericImageView;
use uuid::Uuid;

/// Canned reply selection for the mock provider.
#[derive(Debug, Clone)]
pub enum MockReply {
    /// A small valid tree whose root label records the image dimensions.
    EchoImageSize,
    /// Return this exact text, no matter what was uploaded.
    Fixed(String),
    /// Fail the call with an API error.
    Fail(String),
}

/// Mock vision provider for testing.
pub struct MockVisionProvider {
    reply: MockReply,
}

impl MockVisionProvider {
    pub fn new(reply: MockReply) -> Self {
        Self { reply }
    }
}

#[async_trait]
impl VisionProvider for MockVisionProvider {
    async fn analyze(&self, _prompt: &str, image: &ImagePayload) -> Result<String, ProviderError> {
        // Simulate a slow upstream call so concurrent requests overlap.
        tokio::time::sleep(tokio::time::Duration::from_millis(100)).await;

        match &self.reply {
            MockReply::EchoImageSize => {
                let decoded = image::load_from_memory(&image.data).map_err(|e| {
                    ProviderError::ApiError(format!("Mock could not decode image: {}", e))
                })?;
                let (width, height) = decoded.dimensions();

                let tree = MindmapNode {
                    id: "root".to_string(),
                    label: format!("note {}x{}", width, height),
                    children: vec![MindmapNode {
                        id: Uuid::new_v4().to_string(),
                        label: "first idea".to_string(),
                        children: Vec::new(),
                    }],
                };

                serde_json::to_string(&tree)
                    .map_err(|e| ProviderError::ApiError(e.to_string()))
            }
            MockReply::Fixed(text) => Ok(text.clone()),
            MockReply::Fail(message) => Err(ProviderError::ApiError(message.clone())),
        }
    }
}
