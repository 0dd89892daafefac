use mindmap_service::config::MindmapConfig;
use mindmap_service::services::providers::mock::{MockReply, MockVisionProvider};
use mindmap_service::services::providers::VisionProvider;
use mindmap_service::startup::Application;
use std::io::Cursor;
use std::sync::Arc;

pub struct TestApp {
    pub address: String,
}

impl TestApp {
    /// Spawn the service on a random port with a mock provider double.
    pub async fn spawn(reply: MockReply) -> Self {
        Self::spawn_inner(reply, false).await
    }

    /// Same, but with status-code error signaling enabled.
    #[allow(dead_code)]
    pub async fn spawn_strict(reply: MockReply) -> Self {
        Self::spawn_inner(reply, true).await
    }

    async fn spawn_inner(reply: MockReply, strict_errors: bool) -> Self {
        std::env::set_var("GEMINI_API_KEY", "test-key");

        let mut config = MindmapConfig::load().expect("Failed to load configuration");
        config.common.port = 0; // Random port for testing
        config.strict_errors = strict_errors;

        let provider: Arc<dyn VisionProvider> = Arc::new(MockVisionProvider::new(reply));
        let app = Application::build_with_provider(config, provider)
            .await
            .expect("Failed to build test application");

        let address = format!("http://127.0.0.1:{}", app.port());

        tokio::spawn(async move {
            app.run_until_stopped().await.ok();
        });

        TestApp { address }
    }
}

/// Encode a solid-color PNG of the given dimensions.
#[allow(dead_code)]
pub fn png_fixture(width: u32, height: u32) -> Vec<u8> {
    let img = image::DynamicImage::ImageRgb8(image::RgbImage::from_pixel(
        width,
        height,
        image::Rgb([200u8, 40, 40]),
    ));
    let mut buffer = Cursor::new(Vec::new());
    img.write_to(&mut buffer, image::ImageOutputFormat::Png)
        .expect("Failed to encode fixture image");
    buffer.into_inner()
}
