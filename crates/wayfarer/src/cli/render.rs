//! Terminal rendering shared by the interactive and one-shot front-ends.
//!
//! Everything decorative goes to stderr; only the generated guide is written
//! to stdout.

use console::Style;
use indicatif::{ProgressBar, ProgressStyle};
use std::borrow::Cow;
use std::time::Duration;
use wayfarer_core::{DecodedImage, ErrorKind, LlmResponse};

/// A spinner on stderr for a step with no measurable progress.
pub fn spinner(message: impl Into<Cow<'static, str>>) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    if let Ok(style) = ProgressStyle::default_spinner().template("{spinner:.cyan} {msg}") {
        pb.set_style(style);
    }
    pb.set_message(message);
    pb.enable_steady_tick(Duration::from_millis(80));
    pb
}

/// Heading shown above a failure, by kind.
pub fn failure_heading(kind: ErrorKind) -> &'static str {
    match kind {
        ErrorKind::Network => "Error fetching image from URL",
        ErrorKind::Decode => "Error opening image",
        ErrorKind::Inference => "Error generating content",
    }
}

/// Summary of the resolved image, standing in for the image preview.
pub fn print_image_summary(origin: &str, image: &DecodedImage) {
    let green = Style::new().for_stderr().green();
    let label = Style::new().for_stderr().bold();

    eprintln!();
    eprintln!("  {} Image loaded", green.apply_to("✓"));
    eprintln!("    {:<14} {}", label.apply_to("Source:"), origin);
    eprintln!(
        "    {:<14} {} × {}",
        label.apply_to("Dimensions:"),
        image.width,
        image.height
    );
    eprintln!("    {:<14} {}", label.apply_to("Format:"), image.format_name());
    eprintln!(
        "    {:<14} {}",
        label.apply_to("Size:"),
        format_size(image.byte_len())
    );
    eprintln!();
}

/// The generated guide: heading and stats on stderr, text on stdout.
pub fn print_guide(response: &LlmResponse) {
    let heading = Style::new().for_stderr().cyan().bold();
    let dim = Style::new().for_stderr().dim();

    eprintln!();
    eprintln!("{}", heading.apply_to("Generated Information:"));
    eprintln!();
    println!("{}", response.text.trim_end());
    eprintln!();

    let mut stats = format!(
        "{} · {:.1}s",
        response.model,
        response.latency_ms as f64 / 1000.0
    );
    if let Some(tokens) = response.tokens_used {
        stats.push_str(&format!(" · {tokens} tokens"));
    }
    eprintln!("{}", dim.apply_to(stats));
    eprintln!();
}

/// Red error banner for a failed step.
pub fn print_failure(kind: ErrorKind, detail: &str) {
    let red = Style::new().for_stderr().red();
    let bold_red = Style::new().for_stderr().red().bold();

    eprintln!();
    eprintln!(
        "  {} {}",
        bold_red.apply_to("✗"),
        bold_red.apply_to(failure_heading(kind))
    );
    eprintln!("    {}", red.apply_to(detail));
    eprintln!();
}

fn format_size(bytes: usize) -> String {
    const KB: f64 = 1024.0;
    const MB: f64 = KB * 1024.0;

    let bytes = bytes as f64;
    if bytes >= MB {
        format!("{:.1} MB", bytes / MB)
    } else if bytes >= KB {
        format!("{:.1} KB", bytes / KB)
    } else {
        format!("{bytes} B")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_failure_heading_per_kind() {
        assert_eq!(
            failure_heading(ErrorKind::Network),
            "Error fetching image from URL"
        );
        assert_eq!(failure_heading(ErrorKind::Decode), "Error opening image");
        assert_eq!(
            failure_heading(ErrorKind::Inference),
            "Error generating content"
        );
    }

    #[test]
    fn test_format_size() {
        assert_eq!(format_size(512), "512 B");
        assert_eq!(format_size(2048), "2.0 KB");
        assert_eq!(format_size(3 * 1024 * 1024 + 512 * 1024), "3.5 MB");
    }
}
