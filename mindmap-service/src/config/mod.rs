use serde::Deserialize;
use service_core::config as core_config;
use service_core::error::AppError;
use std::env;

/// Vision model used when `MINDMAP_VISION_MODEL` is not set.
pub const DEFAULT_VISION_MODEL: &str = "gemini-2.5-flash";

#[derive(Debug, Clone, Deserialize)]
pub struct MindmapConfig {
    #[serde(flatten)]
    pub common: core_config::Config,
    pub google: GoogleConfig,
    pub models: ModelConfig,
    /// When true, failure kinds map to distinct HTTP status codes instead
    /// of the body-level `{"error": ...}` contract.
    pub strict_errors: bool,
}

#[derive(Debug, Clone, Deserialize)]
pub struct GoogleConfig {
    pub api_key: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ModelConfig {
    /// Vision-capable model for note analysis (e.g., gemini-2.5-flash)
    pub vision_model: String,
}

impl MindmapConfig {
    pub fn load() -> Result<Self, AppError> {
        let common_config = core_config::Config::load()?;
        let is_prod = env::var("ENVIRONMENT").unwrap_or_else(|_| "dev".to_string()) == "prod";

        Ok(MindmapConfig {
            common: common_config,
            google: GoogleConfig {
                api_key: get_env("GEMINI_API_KEY", None, is_prod)?,
            },
            models: ModelConfig {
                vision_model: get_env(
                    "MINDMAP_VISION_MODEL",
                    Some(DEFAULT_VISION_MODEL),
                    is_prod,
                )?,
            },
            strict_errors: get_env("MINDMAP_STRICT_ERRORS", Some("false"), is_prod)?
                .parse()
                .unwrap_or(false),
        })
    }
}

fn get_env(key: &str, default: Option<&str>, is_prod: bool) -> Result<String, AppError> {
    match env::var(key) {
        Ok(val) => Ok(val),
        Err(_) => {
            if is_prod {
                Err(AppError::ConfigError(anyhow::anyhow!(
                    "{} is required in production but not set",
                    key
                )))
            } else if let Some(def) = default {
                Ok(def.to_string())
            } else {
                Err(AppError::ConfigError(anyhow::anyhow!(
                    "{} is required but not set",
                    key
                )))
            }
        }
    }
}
