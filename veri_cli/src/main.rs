use clap::{Parser, Subcommand};
use infer::Infer;
use std::path::PathBuf;

use veriscan_client::{AnalysisClient, ClientError, ImagePayload, DEFAULT_API_URL};

mod report;

use report::{DetectionReport, SourceInfo};

#[derive(Parser)]
#[command(
    name = "veriscan",
    version = "0.1.0",
    about = "CLI to detect fake news and deepfake images via the VeriScan API"
)]
struct Args {
    #[command(subcommand)]
    command: Command,

    /// Base URL of the detection API
    #[arg(long, global = true, default_value = DEFAULT_API_URL)]
    api_url: String,

    /// Write the JSON report to this path
    #[arg(short, long, global = true)]
    output: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Command {
    /// Analyze a news article or claim
    Text {
        /// Text to analyze
        #[arg(short, long)]
        input: Option<String>,

        /// Read the text from a file instead
        #[arg(short, long, conflicts_with = "input")]
        file: Option<PathBuf>,
    },
    /// Analyze an image for deepfake manipulation
    Image {
        /// Path to the image file
        #[arg(short, long, required = true)]
        file: PathBuf,
    },
}

#[tokio::main]
async fn main() {
    pretty_env_logger::init();
    let args = Args::parse();

    let client = AnalysisClient::new(&args.api_url);

    let report = match run(&client, &args.command, args.verbose).await {
        Ok(report) => report,
        Err(err) => {
            eprintln!("error: {err}");
            std::process::exit(1);
        }
    };

    match report.to_json() {
        Ok(json) => println!("{json}"),
        Err(err) => {
            eprintln!("error: failed to serialize report: {err}");
            std::process::exit(1);
        }
    }

    if let Some(path) = &args.output {
        if let Err(err) = report.save_to_file(&path.to_string_lossy()) {
            eprintln!("error: failed to save report to {}: {err}", path.display());
            std::process::exit(1);
        }
        log::info!("Report saved to {}", path.display());
    }
}

async fn run(
    client: &AnalysisClient,
    command: &Command,
    verbose: bool,
) -> Result<DetectionReport, Box<dyn std::error::Error>> {
    match command {
        Command::Text { input, file } => {
            let text = match (input, file) {
                (Some(text), _) => text.clone(),
                (None, Some(path)) => std::fs::read_to_string(path)?,
                (None, None) => return Err(empty_text_error().into()),
            };
            if text.trim().is_empty() {
                return Err(empty_text_error().into());
            }

            if verbose {
                log::info!(
                    "Analyzing {} characters of text via {}",
                    text.chars().count(),
                    client.base_url()
                );
            }

            let result = client.analyze_text(&text).await?;
            Ok(DetectionReport::new(
                SourceInfo::Text {
                    characters: text.chars().count(),
                },
                result,
            ))
        }
        Command::Image { file } => {
            let bytes = std::fs::read(file)?;
            let content_type = detect_image_type(&bytes)?;
            let file_name = file
                .file_name()
                .and_then(|name| name.to_str())
                .unwrap_or("upload")
                .to_string();

            if verbose {
                log::info!(
                    "Analyzing image {} ({} bytes, {}) via {}",
                    file_name,
                    bytes.len(),
                    content_type,
                    client.base_url()
                );
            }

            let size_bytes = bytes.len() as u64;
            let payload = ImagePayload::new(bytes, file_name, content_type.clone());
            let result = client.analyze_image(payload).await?;
            Ok(DetectionReport::new(
                SourceInfo::Image {
                    path: file.to_string_lossy().to_string(),
                    size_bytes,
                    content_type,
                },
                result,
            ))
        }
    }
}

fn empty_text_error() -> ClientError {
    ClientError::Validation("Please enter some news text to analyze.".to_string())
}

/// Sniff the media type and require an image, like the upload form's
/// `accept="image/*"` filter.
fn detect_image_type(bytes: &[u8]) -> Result<String, ClientError> {
    let infer = Infer::new();
    match infer.get(bytes) {
        Some(kind) if kind.mime_type().starts_with("image/") => Ok(kind.mime_type().to_string()),
        _ => Err(ClientError::Validation(
            "Please select an image to analyze.".to_string(),
        )),
    }
}
