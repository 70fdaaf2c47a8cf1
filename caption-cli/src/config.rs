//! Run configuration resolved from flags and the environment

use crate::prompt::default_prompt;
use crate::Cli;
use caption_core::SizeBudget;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Default chat-completion endpoint
pub const DEFAULT_API_URL: &str =
    "https://dashscope.aliyuncs.com/compatible-mode/v1/chat/completions";

/// Default vision model
pub const DEFAULT_MODEL: &str = "qwen-vl-plus";

/// Environment variable holding the API key
pub const API_KEY_ENV: &str = "YUMO_IMG_CAPTION_QWEN_API_KEY";

/// Configuration errors, reported before any image or network work
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("No API key found in environment variable YUMO_IMG_CAPTION_QWEN_API_KEY; create one in the provider console and export it")]
    MissingApiKey,

    #[error("No image file given; use --file to specify the image path")]
    MissingFile,

    #[error("Size budget must be at least 1 byte")]
    InvalidBudget,
}

/// Everything a run needs, captured once
#[derive(Debug, Clone)]
pub struct Config {
    pub url: String,
    pub api_key: String,
    pub model: String,
    pub file: Option<PathBuf>,
    pub prompt: String,
    pub title_count: u32,
    pub content_count: u32,
    pub budget: SizeBudget,
    pub timeout: Duration,
    pub show_info: bool,
    pub save_base64: bool,
}

impl Config {
    /// Resolves flags plus an environment lookup into a configuration
    pub fn from_cli<F>(cli: Cli, env: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let api_key = env(API_KEY_ENV)
            .filter(|key| !key.is_empty())
            .ok_or(ConfigError::MissingApiKey)?;

        let budget = SizeBudget::new(cli.max_bytes).ok_or(ConfigError::InvalidBudget)?;

        let model = if cli.model.is_empty() {
            DEFAULT_MODEL.to_string()
        } else {
            cli.model
        };

        let prompt = if cli.prompt.is_empty() {
            default_prompt(cli.title_count, cli.content_count)
        } else {
            cli.prompt
        };

        Ok(Self {
            url: cli.url,
            api_key,
            model,
            file: cli.file,
            prompt,
            title_count: cli.title_count,
            content_count: cli.content_count,
            budget,
            timeout: Duration::from_secs(cli.timeout),
            show_info: cli.info,
            save_base64: cli.save_base64,
        })
    }

    /// Image path, or an error when none was given
    pub fn image_path(&self) -> Result<&Path, ConfigError> {
        self.file.as_deref().ok_or(ConfigError::MissingFile)
    }
}
