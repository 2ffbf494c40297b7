//! The `wayfarer describe` command: one image in, one guide out.

use clap::{ArgGroup, Args, ValueEnum};
use std::path::PathBuf;
use wayfarer_core::prompt::GuideSection;
use wayfarer_core::{
    Config, GuideReport, ImageSource, InferenceResult, OutputFormat as CoreOutputFormat,
    OutputWriter, Wayfarer,
};

use super::render;

/// Arguments for the `describe` command.
#[derive(Args, Debug)]
#[command(group(ArgGroup::new("source").required(true).args(["url", "file"])))]
pub struct DescribeArgs {
    /// URL of the image to describe
    #[arg(long)]
    pub url: Option<String>,

    /// Local image file to describe
    #[arg(long)]
    pub file: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "text")]
    pub format: OutputFormat,

    /// Pretty-print JSON output
    #[arg(long)]
    pub pretty: bool,

    /// Gemini model to use (overrides config)
    #[arg(short, long, env = "WAYFARER_MODEL")]
    pub model: Option<String>,
}

/// Supported output formats.
#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum OutputFormat {
    /// The generated guide as plain text
    Text,
    /// A JSON object with the guide plus image and model metadata
    Json,
}

impl From<OutputFormat> for CoreOutputFormat {
    fn from(format: OutputFormat) -> Self {
        match format {
            OutputFormat::Text => CoreOutputFormat::Text,
            OutputFormat::Json => CoreOutputFormat::Json,
        }
    }
}

/// Execute the describe command.
pub async fn execute(args: DescribeArgs, mut config: Config) -> anyhow::Result<()> {
    if let Some(model) = args.model {
        config.gemini.model = model;
    }

    let (source, origin) = match (args.url, args.file) {
        (Some(url), _) => {
            let url = url.trim().to_string();
            (ImageSource::RemoteUrl(url.clone()), url)
        }
        (None, Some(path)) => {
            let bytes = super::read_upload(&path, &config.upload)?;
            (ImageSource::UploadedBytes(bytes), path.display().to_string())
        }
        (None, None) => anyhow::bail!("one of --url or --file is required"),
    };

    let app = Wayfarer::new(config)?;
    let mut interaction = app.interaction();
    let text_mode = matches!(args.format, OutputFormat::Text);

    let spinner = render::spinner("Loading image...");
    let resolved = interaction.provide_source(source).await.map(|_| ());
    spinner.finish_and_clear();
    resolved?;

    if let Some(image) = interaction.image() {
        tracing::info!(
            "Resolved {}: {}x{} {}",
            origin,
            image.width,
            image.height,
            image.format_name()
        );
        if text_mode {
            render::print_image_summary(&origin, image);
        }
    }

    let spinner = render::spinner(format!(
        "Generating information with {}...",
        app.provider().model()
    ));
    let outcome = interaction.generate().await.map(Clone::clone);
    spinner.finish_and_clear();

    let response = match outcome? {
        InferenceResult::Success(response) => response,
        InferenceResult::Failure(kind, message) => {
            anyhow::bail!("{}: {message}", render::failure_heading(kind))
        }
    };

    let image = interaction
        .image()
        .ok_or_else(|| anyhow::anyhow!("No image held after generation"))?;
    let report = GuideReport::new(origin, image, &response);

    let stdout = std::io::stdout();
    let mut writer = OutputWriter::new(stdout.lock(), args.format.into(), args.pretty);
    writer.write(&report)?;

    tracing::info!(
        "Generated {} chars in {}ms ({} of {} sections)",
        report.text.len(),
        report.latency_ms,
        report.sections.len(),
        GuideSection::ALL.len()
    );

    Ok(())
}
