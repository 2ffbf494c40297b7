//! Interactive CLI mode, the guided experience for bare `wayfarer` invocation.
//!
//! Menu-driven front-end over the same [`Interaction`](wayfarer_core::Interaction)
//! state machine the `describe` command uses.

pub mod guide;
pub mod theme;

use console::Style;
use dialoguer::Select;
use wayfarer_core::{Config, Wayfarer};

/// Convert a dialoguer result into `Ok(Some(value))` on success, `Ok(None)` on
/// interrupt (Ctrl+C / terminal disconnect), and `Err` for other I/O failures.
///
/// Use this to wrap `interact_text()` / `interact()` calls that lack an `_opt`
/// variant, so interrupts exit the current flow cleanly instead of panicking.
fn handle_interrupt<T>(result: dialoguer::Result<T>) -> anyhow::Result<Option<T>> {
    match result {
        Ok(v) => Ok(Some(v)),
        Err(dialoguer::Error::IO(e)) if e.kind() == std::io::ErrorKind::Interrupted => Ok(None),
        Err(e) => Err(e.into()),
    }
}

/// Main menu options presented to the user.
const MENU_ITEMS: &[&str] = &["Describe a place from an image", "Show configuration", "Exit"];

/// Entry point for interactive mode.
pub async fn run(app: &Wayfarer) -> anyhow::Result<()> {
    theme::print_banner(app.provider().model());

    let theme = theme::wayfarer_theme();

    loop {
        let selection = Select::with_theme(&theme)
            .with_prompt("What would you like to do?")
            .items(MENU_ITEMS)
            .default(0)
            .interact_opt()?;

        match selection {
            Some(0) => guide::guided_describe(app).await?,
            Some(1) => show_config(app.config())?,
            Some(2) | None => break, // Exit or Ctrl+C / Esc
            _ => unreachable!(),
        }
    }

    Ok(())
}

/// Interactive config viewer: a summary of current settings, plus the full
/// TOML or the config file path on request.
fn show_config(config: &Config) -> anyhow::Result<()> {
    let theme = theme::wayfarer_theme();
    let dim = Style::new().for_stderr().dim();
    let cyan = Style::new().for_stderr().cyan();
    let label = Style::new().for_stderr().bold();

    loop {
        eprintln!();
        eprintln!("  {}", cyan.apply_to("Current configuration:"));
        eprintln!();

        let config_path = Config::default_path();
        let path_note = if config_path.exists() {
            "(exists)"
        } else {
            "(using defaults)"
        };

        eprintln!(
            "    {:<20} {} {}",
            label.apply_to("Config file:"),
            config_path.display(),
            dim.apply_to(path_note)
        );
        eprintln!(
            "    {:<20} {}",
            label.apply_to("Model:"),
            config.gemini.model
        );
        eprintln!(
            "    {:<20} {}",
            label.apply_to("Endpoint:"),
            config.gemini.endpoint
        );
        eprintln!(
            "    {:<20} {}",
            label.apply_to("Temperature:"),
            config
                .inference
                .temperature
                .map_or_else(|| "model default".to_string(), |t| t.to_string())
        );
        eprintln!(
            "    {:<20} {}",
            label.apply_to("Downscale:"),
            match config.inference.max_image_dimension {
                0 => "off".to_string(),
                px => format!("longest side ≤ {px}px"),
            }
        );
        eprintln!(
            "    {:<20} {}s",
            label.apply_to("Timeout:"),
            config.limits.llm_timeout_ms / 1000
        );
        eprintln!(
            "    {:<20} {}",
            label.apply_to("Uploads:"),
            config.upload.allowed_extensions.join(", ")
        );
        eprintln!(
            "    {:<20} {}",
            label.apply_to("Log level:"),
            config.logging.level
        );
        eprintln!();

        let items = &["View full config (TOML)", "Show config file path", "Back"];

        let selection = Select::with_theme(&theme)
            .with_prompt("Configuration")
            .items(items)
            .default(0)
            .interact_opt()?;

        match selection {
            Some(0) => match config.redacted().to_toml() {
                Ok(toml) => {
                    eprintln!();
                    eprintln!("{}", dim.apply_to("─".repeat(50)));
                    eprintln!("{toml}");
                    eprintln!("{}", dim.apply_to("─".repeat(50)));
                    eprintln!();
                }
                Err(e) => {
                    let err = Style::new().for_stderr().red();
                    eprintln!("  {} Failed to serialize config: {e}", err.apply_to("✗"));
                    eprintln!();
                }
            },
            Some(1) => {
                eprintln!();
                eprintln!("  {}", Config::default_path().display());
                eprintln!();
            }
            Some(2) | None => break,
            _ => unreachable!(),
        }
    }

    Ok(())
}
