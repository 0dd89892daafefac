//! One-shot diagnostic: print every catalog model that can serve
//! `generateContent` requests. Any failure aborts the process.

use anyhow::Context;
use mindmap_service::config::DEFAULT_VISION_MODEL;
use mindmap_service::services::providers::gemini::{GeminiConfig, GeminiVisionProvider};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let api_key = std::env::var("GEMINI_API_KEY").context("GEMINI_API_KEY is not set")?;

    let provider = GeminiVisionProvider::new(GeminiConfig {
        api_key,
        model: DEFAULT_VISION_MODEL.to_string(),
    });

    let models = provider.list_models().await?;

    println!("Models available for content generation:");
    for model in models.iter().filter(|m| m.supports_generation()) {
        println!("- {}", model.name);
    }

    Ok(())
}
