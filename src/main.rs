use clap::Parser;
use covercrop::config::AppConfig;
use covercrop::envelope::ResponseEnvelope;
use covercrop::error::CoverError;
use covercrop::fetch::{self, SourceKind};
use covercrop::imaging::{CoverOutput, Quality, RustBackend, TargetSize, cover};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "covercrop")]
#[command(about = "Cover-fit an image to a target size and emit JPEG")]
#[command(long_about = "\
Cover-fit an image to a target size and emit JPEG

The source is scaled until it fully covers the target box, then the
overflow is cropped away symmetrically. Either target dimension may be
'auto', meaning: derive it from the other dimension and the source
aspect ratio. With both dimensions auto the image keeps its size.

Sources:
  https://example.com/photo.jpg        generic HTTP fetch
  https://bucket.s3.us-east-1.amazonaws.com/key.jpg  S3 virtual-hosted URL
  ./photo.jpg                          local file

Size strings:
  120x300      exact box
  autox200     height 200, width from aspect ratio
  200xauto     width 200, height from aspect ratio
  (malformed sizes fall back to the image's own dimensions)")]
#[command(version)]
struct Cli {
    /// Source image: an http(s) URL or a local file path
    src: String,

    /// Target size as {width|auto}x{height|auto}
    #[arg(long)]
    size: Option<String>,

    /// Output file for the JPEG
    #[arg(long, default_value = "cover.jpg")]
    output: PathBuf,

    /// Print a JSON response envelope (base64 body) to stdout instead of
    /// writing a file
    #[arg(long)]
    envelope: bool,

    /// JPEG quality 1-100 (overrides config)
    #[arg(long)]
    quality: Option<u32>,

    /// Config file (TOML)
    #[arg(long)]
    config: Option<PathBuf>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let config = AppConfig::load(cli.config.as_deref())?;

    let quality = Quality::new(cli.quality.unwrap_or(config.output.quality));
    let size = cli
        .size
        .as_deref()
        .map(TargetSize::parse)
        .unwrap_or_default();

    if cli.envelope {
        let envelope = match run(&cli, &config, &size, quality, false) {
            Ok(output) => ResponseEnvelope::jpeg(&output.jpeg),
            Err(err) => ResponseEnvelope::from_error(&err),
        };
        println!("{}", serde_json::to_string(&envelope)?);
        if envelope.status_code != 200 {
            std::process::exit(1);
        }
        return Ok(());
    }

    let output = run(&cli, &config, &size, quality, true)?;
    std::fs::write(&cli.output, &output.jpeg)?;
    println!(
        "==> Wrote {} ({}x{}, {} bytes)",
        cli.output.display(),
        output.width,
        output.height,
        output.jpeg.len()
    );

    Ok(())
}

/// Fetch or read the source, then run the cover pipeline.
fn run(
    cli: &Cli,
    config: &AppConfig,
    size: &TargetSize,
    quality: Quality,
    verbose: bool,
) -> Result<CoverOutput, CoverError> {
    let bytes = load_source(&cli.src, config, verbose)?;
    cover(&RustBackend::new(), &bytes, size, quality)
}

fn load_source(src: &str, config: &AppConfig, verbose: bool) -> Result<Vec<u8>, CoverError> {
    if src.starts_with("http://") || src.starts_with("https://") {
        let agent = fetch::build_agent(&config.fetch);
        let bytes = fetch::fetch(&agent, src)?;
        if verbose {
            match fetch::classify_source(src) {
                SourceKind::ObjectStorage { bucket, region } => println!(
                    "==> Fetched {} bytes from bucket '{bucket}' ({region})",
                    bytes.len()
                ),
                SourceKind::Generic => println!("==> Fetched {} bytes from {src}", bytes.len()),
            }
        }
        Ok(bytes)
    } else {
        let bytes = std::fs::read(src)?;
        if verbose {
            println!("==> Read {} bytes from {src}", bytes.len());
        }
        Ok(bytes)
    }
}
