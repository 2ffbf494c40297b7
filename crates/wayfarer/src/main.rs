//! Wayfarer CLI - point it at a photo of a place, get a travel guide back.
//!
//! Wayfarer takes an image (a URL or a local file), asks Gemini to identify the
//! place, and prints a short description together with nearby accommodations
//! and local food.
//!
//! # Usage
//!
//! ```bash
//! # Guided, menu-driven mode
//! wayfarer
//!
//! # One-shot from a URL or file
//! wayfarer describe --url https://example.com/colosseum.jpg
//! wayfarer describe --file ~/Pictures/taj-mahal.png --format json
//!
//! # View configuration
//! wayfarer config show
//! ```

use clap::{CommandFactory, Parser, Subcommand};
use wayfarer_core::{Config, Wayfarer};

mod cli;
mod logging;

/// Wayfarer - identify a place from a photo and get a travel guide for it.
#[derive(Parser, Debug)]
#[command(name = "wayfarer")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Enable verbose (debug) logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Output logs in JSON format
    #[arg(long, global = true)]
    json_logs: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

/// Available commands.
#[derive(Subcommand, Debug)]
enum Commands {
    /// Start the guided, menu-driven mode (default on a terminal)
    Guide,

    /// Describe the place in one image and exit
    Describe(cli::describe::DescribeArgs),

    /// View and manage configuration
    Config(cli::config::ConfigArgs),
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Must run before anything reads GEMINI_API_KEY.
    let dotenv = dotenvy::dotenv();

    let cli = Cli::parse();

    // Logging isn't initialized yet, so use eprintln for config warnings.
    let config = match Config::load() {
        Ok(config) => config,
        Err(e) => {
            eprintln!(
                "Warning: Failed to load config: {e}\n  \
                 Using default configuration. Check your config file with `wayfarer config path`."
            );
            Config::default()
        }
    };

    let interactive = matches!(cli.command, None | Some(Commands::Guide));
    logging::init_from_config(&config, cli.verbose, cli.json_logs, interactive);

    match dotenv {
        Ok(path) => tracing::debug!("Loaded environment from {}", path.display()),
        Err(e) if e.not_found() => {}
        Err(e) => tracing::warn!("Failed to read .env file: {e}"),
    }

    tracing::debug!("Wayfarer v{}", wayfarer_core::VERSION);

    match cli.command {
        Some(Commands::Config(args)) => cli::config::execute(args).await,
        Some(Commands::Describe(args)) => cli::describe::execute(args, config).await,
        Some(Commands::Guide) => {
            let app = Wayfarer::new(config)?;
            cli::interactive::run(&app).await
        }
        None if console::user_attended() => {
            let app = Wayfarer::new(config)?;
            cli::interactive::run(&app).await
        }
        None => {
            Cli::command().print_help()?;
            Ok(())
        }
    }
}
