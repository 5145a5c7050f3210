use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};
use scraper::Html;

use crate::lineup::SampleSize;

/// Decodes HTML character references (`&amp;`, `&#8217;`, ...) in a rendered
/// title. Markup, if any, is dropped and only the text content is kept.
pub fn decode_html_entities(raw: &str) -> String {
    if !raw.contains('&') && !raw.contains('<') {
        return raw.to_string();
    }

    Html::parse_fragment(raw)
        .root_element()
        .text()
        .collect::<String>()
}

/// Clap value parser for `--sample-size`. Accepts any integer and rejects the
/// negative ones with an explicit message.
pub fn parse_sample_size(s: &str) -> Result<SampleSize, String> {
    let trimmed = s.trim();
    if trimmed.is_empty() {
        return Err("sample size cannot be empty".into());
    }

    let raw = trimmed
        .parse::<i64>()
        .map_err(|_| format!("invalid value '{}' (expected a whole number)", trimmed))?;

    SampleSize::try_from(raw).map_err(|e| e.to_string())
}

pub fn spinner(message: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.set_message(message.to_string());
    pb.enable_steady_tick(Duration::from_millis(100));
    if let Ok(style) = ProgressStyle::with_template("{spinner:.blue} {msg}") {
        pb.set_style(style.tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏"));
    }
    pb
}
