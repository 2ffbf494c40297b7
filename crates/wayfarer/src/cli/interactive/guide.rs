//! Guided describe flow.
//!
//! Drives one [`Interaction`] from the menu: pick a source → image summary →
//! generate → guide or error banner → start over, re-generate, or leave.

use console::Style;
use dialoguer::theme::ColorfulTheme;
use dialoguer::{Input, Select};
use std::path::PathBuf;
use wayfarer_core::config::UploadConfig;
use wayfarer_core::{ImageSource, InferenceResult, Interaction, InteractionState, Wayfarer};

use super::theme::wayfarer_theme;
use crate::cli::{read_upload, render};

/// Loop through interactions until the user goes back to the main menu.
pub async fn guided_describe(app: &Wayfarer) -> anyhow::Result<()> {
    let theme = wayfarer_theme();
    let mut interaction = app.interaction();

    loop {
        match interaction.state() {
            InteractionState::AwaitingInput => {
                let Some((source, origin)) = prompt_source(&theme, &app.config().upload)? else {
                    return Ok(());
                };

                let spinner = render::spinner("Loading image...");
                let resolved = interaction.provide_source(source).await;
                spinner.finish_and_clear();

                match resolved {
                    Ok(image) => render::print_image_summary(&origin, image),
                    Err(e) => render::print_failure(e.kind(), &e.detail()),
                }
            }

            InteractionState::ImageResolved => {
                let items = &["Generate information", "Use a different image", "Back to main menu"];
                let selection = Select::with_theme(&theme)
                    .with_prompt("Image ready")
                    .items(items)
                    .default(0)
                    .interact_opt()?;

                match selection {
                    Some(0) => generate(&mut interaction, app.provider().model()).await?,
                    Some(1) => interaction.reset(),
                    Some(2) | None => return Ok(()),
                    _ => unreachable!(),
                }
            }

            InteractionState::Done | InteractionState::Failed => {
                let can_retry = interaction.image().is_some();
                let items: &[&str] = if can_retry {
                    &["Describe another image", "Generate again", "Back to main menu"]
                } else {
                    &["Try another image", "Back to main menu"]
                };

                let selection = Select::with_theme(&theme)
                    .with_prompt("What next?")
                    .items(items)
                    .default(0)
                    .interact_opt()?;

                match (selection, can_retry) {
                    (Some(0), _) => interaction.reset(),
                    (Some(1), true) => generate(&mut interaction, app.provider().model()).await?,
                    _ => return Ok(()),
                }
            }

            // generate() is awaited to completion before the state is read again
            InteractionState::InferenceInProgress => unreachable!(),
        }
    }
}

/// Run the model on the held image and render the outcome.
async fn generate(interaction: &mut Interaction<'_>, model: &str) -> anyhow::Result<()> {
    let spinner = render::spinner(format!("Generating information with {model}..."));
    let outcome = interaction.generate().await;
    spinner.finish_and_clear();

    match outcome? {
        InferenceResult::Success(response) => render::print_guide(response),
        InferenceResult::Failure(kind, message) => render::print_failure(*kind, message),
    }

    Ok(())
}

/// Ask for an image URL or a file to upload.
///
/// Returns the source and a label for it, or `None` if the user backs out.
/// Upload paths are re-prompted until one passes the extension allow-list
/// and can be read.
fn prompt_source(
    theme: &ColorfulTheme,
    upload: &UploadConfig,
) -> anyhow::Result<Option<(ImageSource, String)>> {
    let selection = Select::with_theme(theme)
        .with_prompt("Image source")
        .items(&["Image URL", "Upload image"])
        .default(0)
        .interact_opt()?;

    match selection {
        Some(0) => {
            let Some(url) = super::handle_interrupt(
                Input::<String>::with_theme(theme)
                    .with_prompt("Image URL")
                    .interact_text(),
            )?
            else {
                return Ok(None);
            };

            let url = url.trim().to_string();
            Ok(Some((ImageSource::RemoteUrl(url.clone()), url)))
        }

        Some(1) => loop {
            let Some(raw_path) = super::handle_interrupt(
                Input::<String>::with_theme(theme)
                    .with_prompt(format!(
                        "Path to image ({})",
                        upload.allowed_extensions.join(", ")
                    ))
                    .interact_text(),
            )?
            else {
                return Ok(None);
            };

            let path = PathBuf::from(shellexpand::tilde(raw_path.trim()).into_owned());

            match read_upload(&path, upload) {
                Ok(bytes) => {
                    return Ok(Some((
                        ImageSource::UploadedBytes(bytes),
                        path.display().to_string(),
                    )))
                }
                Err(e) => {
                    let warn = Style::new().for_stderr().yellow();
                    eprintln!("  {}", warn.apply_to(e));
                }
            }
        },

        _ => Ok(None),
    }
}
