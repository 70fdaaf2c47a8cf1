//! Image Caption CLI Tool
//!
//! Command-line interface that captions a local image with a vision
//! chat-completion model.

mod config;
mod display;
mod prompt;

use anyhow::{Context, Result};
use caption_client::{CaptionClient, CaptionResult, ChatRequest};
use caption_core::budget::DEFAULT_BUDGET_BYTES;
use caption_core::ImageAsset;
use clap::Parser;
use config::{Config, DEFAULT_API_URL, DEFAULT_MODEL};
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

/// File the data URI is written to with `--base64`
const BASE64_OUTPUT_FILE: &str = "base64.txt";

#[derive(Parser, Debug)]
#[command(name = "img-caption")]
#[command(about = "Generate a title and description for a local image with a vision model")]
#[command(version)]
pub struct Cli {
    /// API request URL
    #[arg(long, default_value = DEFAULT_API_URL)]
    pub url: String,

    /// Image file to caption (.jpg, .jpeg or .png)
    #[arg(long)]
    pub file: Option<PathBuf>,

    /// Vision model name
    #[arg(long, default_value = DEFAULT_MODEL)]
    pub model: String,

    /// Show the resolved configuration before sending the request
    #[arg(long)]
    pub info: bool,

    /// Save the image data URI to base64.txt in the working directory
    #[arg(long = "base64")]
    pub save_base64: bool,

    /// Recommended word count for the generated description
    #[arg(long = "content_count", default_value_t = 30)]
    pub content_count: u32,

    /// Recommended word count for the generated title
    #[arg(long = "title_count", default_value_t = 20)]
    pub title_count: u32,

    /// Prompt sent with the image (empty = built-in template)
    #[arg(long, default_value = "")]
    pub prompt: String,

    /// Maximum encoded image size in bytes
    #[arg(long, default_value_t = DEFAULT_BUDGET_BYTES)]
    pub max_bytes: u64,

    /// HTTP request timeout in seconds
    #[arg(long, default_value_t = 60)]
    pub timeout: u64,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {:#}", err);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    let config = Config::from_cli(cli, |key| std::env::var(key).ok())?;

    // Show info if requested
    if config.show_info {
        print_info(&config);
    }

    let image_path = config.image_path()?;

    display::section(|| {
        println!("Parsing image file: {}", image_path.display());
        println!("Using model: {}", config.model);
    });

    // Read and fit the image under the size budget
    let asset = ImageAsset::read(image_path)
        .with_context(|| format!("Failed to read image file {}", image_path.display()))?;

    let encoded = caption_encoder::fit(&asset, config.budget)
        .context("Failed to prepare image")?;
    tracing::debug!(original = asset.data_size(), encoded = encoded.len(), "image prepared");
    let data_uri = caption_core::wrap(&encoded, asset.format());

    if config.save_base64 {
        let saved = save_data_uri(Path::new("."), &data_uri)?;
        display::section(|| {
            println!("Image base64 data URI saved to {}", saved.display());
        });
    }

    // Send the caption request
    let request = ChatRequest::caption(&config.model, &config.prompt, data_uri);
    let client = CaptionClient::new(&config.url, &config.api_key, config.timeout)
        .context("Failed to create HTTP client")?;
    let result = client
        .caption(&request)
        .context("Caption request failed")?;

    print_caption(&result);

    Ok(())
}

/// Writes the data URI to `base64.txt` inside `dir`
fn save_data_uri(dir: &Path, data_uri: &str) -> Result<PathBuf> {
    let path = dir.join(BASE64_OUTPUT_FILE);
    std::fs::write(&path, data_uri)
        .with_context(|| format!("Failed to write {}", path.display()))?;
    Ok(path)
}

fn print_info(config: &Config) {
    display::section(|| {
        println!("API URL: {}", config.url);
        println!("API key: {}", display::mask_secret(&config.api_key, 12));
        println!("Model: {}", config.model);
        match &config.file {
            Some(file) => {
                println!("Image file (as given): {}", file.display());
                println!(
                    "Image file (absolute): {}",
                    display::absolute_path(file).display()
                );
            }
            None => println!("Image file: <not set>"),
        }
        println!("Prompt:\n{}", config.prompt);
        println!("Recommended description word count: {}", config.content_count);
        println!("Recommended title word count: {}", config.title_count);
        println!("Size budget: {}", config.budget);
        println!("Request timeout: {} s", config.timeout.as_secs());
    });
}

fn print_caption(result: &CaptionResult) {
    display::section(|| {
        println!("Caption generated successfully");
        println!("\n{}\n", result.text);
        println!("Prompt tokens:\t{}\ttokens", result.usage.prompt);
        println!("Completion tokens:\t{}\ttokens", result.usage.completion);
        println!("Total tokens:\t{}\ttokens", result.usage.total);
    });
}
