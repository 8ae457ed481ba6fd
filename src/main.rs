use anyhow::Result;
use glypnet_client::{
    config,
    session::{SessionController, SessionPhase},
    translate::{HttpTranslateClient, ImageFile, TargetLanguage},
};
use std::path::Path;
use std::sync::Arc;
use tracing::info;

/// Validates that a log level string is valid
fn validate_log_level(level: &str) -> Result<()> {
    level
        .parse::<tracing_subscriber::filter::LevelFilter>()
        .map_err(|_| {
            anyhow::anyhow!(
                "Invalid log level: '{}'. Valid levels: error, warn, info, debug, trace",
                level
            )
        })?;
    Ok(())
}

/// The browser supplied the MIME type with the picked file; on the command
/// line it is derived from the extension. Unknown extensions fall through to
/// a non-image type and are rejected by selection validation.
fn media_type_for(path: &Path) -> &'static str {
    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.to_ascii_lowercase());

    match extension.as_deref() {
        Some("jpg") | Some("jpeg") => "image/jpeg",
        Some("png") => "image/png",
        Some("gif") => "image/gif",
        Some("webp") => "image/webp",
        Some("tif") | Some("tiff") => "image/tiff",
        Some("bmp") => "image/bmp",
        _ => "application/octet-stream",
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (before logging setup)
    let config = match config::load().await {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Failed to load configuration: {}", e);
            std::process::exit(1);
        }
    };

    // Determine log level: environment variable overrides config
    let log_level = std::env::var("RUST_LOG").unwrap_or_else(|_| config.logs.level.clone());

    if let Err(e) = validate_log_level(&log_level) {
        eprintln!("{}", e);
        std::process::exit(1);
    }

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| log_level.parse().unwrap()),
        )
        .json()
        .init();

    let mut args = std::env::args().skip(1);
    let image_path = match args.next() {
        Some(path) => path,
        None => {
            eprintln!("Usage: glypnet <inscription-image> [en|ta|fr]");
            std::process::exit(1);
        }
    };
    let target_language: TargetLanguage = match args.next() {
        Some(code) => code.parse()?,
        None => TargetLanguage::default(),
    };

    info!(
        "Submitting '{}' for decipherment (target '{}')",
        image_path, target_language
    );

    let path = Path::new(&image_path);
    let bytes = tokio::fs::read(path).await?;
    let candidate = ImageFile {
        file_name: path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| image_path.clone()),
        media_type: media_type_for(path).to_string(),
        bytes,
    };

    let transport = HttpTranslateClient::new(config.service.clone())?;
    let mut session = SessionController::new(Arc::new(transport));

    session.select_file(candidate)?;
    session.submit(target_language).await?;

    let result = session
        .last_result()
        .ok_or_else(|| anyhow::anyhow!("Session finished without a result"))?;

    if session.phase() == SessionPhase::Failed {
        println!("Service unavailable, showing simulated decipherment.\n");
    }
    println!("Source script:  {}", result.source_script);
    println!("Confidence:     {:.1}%", result.confidence * 100.0);
    println!("Deciphered:     {}", result.original_text);
    println!("Translation:    {}", result.translated_text);
    println!("Techniques:     {}", result.techniques_used.join(", "));

    Ok(())
}
