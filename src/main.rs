mod adapters;
mod client_config;
mod core;
mod global_constants;


use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Context;
use clap::Parser;

use crate::adapters::GoogleVisionRecognitionService;
use crate::client_config::RecognitionClientConfig;
use crate::core::orchestrators::TextExtractor;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Path to the image file to extract text from
    image_path: PathBuf,

    /// Path to the file holding the recognition service API key
    #[arg(long)]
    credentials: PathBuf,

    /// Override the recognition service endpoint
    #[arg(long)]
    endpoint: Option<String>,

    /// Request timeout in seconds
    #[arg(long)]
    timeout_secs: Option<u64>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::init();

    log::info!("[MAIN] Starting visiontext");

    let args = Args::parse();

    let mut config = RecognitionClientConfig::new(args.credentials);
    if let Some(endpoint) = args.endpoint {
        config = config.with_endpoint(endpoint);
    }
    if let Some(timeout_secs) = args.timeout_secs {
        config = config.with_request_timeout(Duration::from_secs(timeout_secs));
    }

    let recognition_service = GoogleVisionRecognitionService::build(config)
        .context("failed to initialize recognition service")?;
    let extractor = TextExtractor::new(Arc::new(recognition_service));

    let outcome = extractor
        .extract_text(&args.image_path)
        .await
        .context("text extraction failed")?;

    println!("{}", outcome);

    Ok(())
}
