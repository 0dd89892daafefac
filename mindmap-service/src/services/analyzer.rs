//! Note analysis pipeline: decode the upload, call the provider, parse JSON.

use crate::services::providers::{ImagePayload, ProviderError, VisionProvider};
use image::ImageOutputFormat;
use service_core::error::AppError;
use std::io::Cursor;
use std::sync::Arc;
use thiserror::Error;

/// Instruction sent with every note image.
pub const MINDMAP_PROMPT: &str = r#"You are a smart study-assistant AI. Your task:
Analyze this notebook-page image and produce a mindmap structure.
Return the result as JSON (NO markdown) using this recursive shape:
{
    "id": "root",
    "label": "Main topic",
    "children": [
        {
            "id": "unique_id_1",
            "label": "Key idea 1",
            "children": [...]
        },
        ...
    ]
}
Notes:
1. Keep each "label" short (under 10 words).
2. Give every node a random but unique id.
3. Keep the tree structure logical.
"#;

/// Error type for the analysis pipeline.
#[derive(Error, Debug)]
pub enum AnalyzeError {
    #[error("No file uploaded")]
    MissingFile,

    #[error("Failed to read upload: {0}")]
    UploadRead(String),

    #[error("Could not decode image: {0}")]
    ImageDecode(String),

    #[error(transparent)]
    Provider(#[from] ProviderError),

    #[error("Model returned invalid JSON: {0}")]
    ResponseParse(String),
}

impl From<AnalyzeError> for AppError {
    fn from(err: AnalyzeError) -> Self {
        match err {
            AnalyzeError::MissingFile
            | AnalyzeError::UploadRead(_)
            | AnalyzeError::ImageDecode(_) => AppError::BadRequest(anyhow::anyhow!(err)),
            AnalyzeError::Provider(_) | AnalyzeError::ResponseParse(_) => {
                AppError::BadGateway(err.to_string())
            }
        }
    }
}

/// Runs the fixed-prompt analysis against whichever provider was injected.
#[derive(Clone)]
pub struct NoteAnalyzer {
    provider: Arc<dyn VisionProvider>,
}

impl NoteAnalyzer {
    pub fn new(provider: Arc<dyn VisionProvider>) -> Self {
        Self { provider }
    }

    /// Decode the uploaded bytes, submit them with the fixed prompt, and
    /// parse the provider's reply as JSON. The parsed value is returned
    /// verbatim; the tree shape is not validated here.
    pub async fn analyze(&self, upload: &[u8]) -> Result<serde_json::Value, AnalyzeError> {
        let image = decode_to_png(upload)?;

        let text = self.provider.analyze(MINDMAP_PROMPT, &image).await?;

        serde_json::from_str(&text).map_err(|e| AnalyzeError::ResponseParse(e.to_string()))
    }
}

/// Decode arbitrary uploaded bytes and normalize them to a PNG payload.
fn decode_to_png(bytes: &[u8]) -> Result<ImagePayload, AnalyzeError> {
    let decoded =
        image::load_from_memory(bytes).map_err(|e| AnalyzeError::ImageDecode(e.to_string()))?;

    let mut buffer = Cursor::new(Vec::new());
    decoded
        .write_to(&mut buffer, ImageOutputFormat::Png)
        .map_err(|e| AnalyzeError::ImageDecode(e.to_string()))?;

    Ok(ImagePayload {
        mime_type: "image/png".to_string(),
        data: buffer.into_inner(),
    })
}
