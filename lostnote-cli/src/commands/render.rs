//! Render command implementation

use super::load_story;
use anyhow::{Context, Result};
use lostnote_core::encoder::{encoder_for_format, HtmlEncoder, PageEncoder};
use lostnote_core::reader::ReaderController;
use std::fs::File;
use std::io::Write;

/// Render one page (1-based) to stdout or a file
pub fn render(
    page: usize,
    content: Option<&str>,
    format: &str,
    output: Option<&str>,
) -> Result<()> {
    let story = load_story(content)?;

    let encoder: Box<dyn PageEncoder> = match format.to_lowercase().as_str() {
        // A file gets a complete document; stdout gets the fragment
        "html" | "htm" if output.is_some() => {
            Box::new(HtmlEncoder::standalone(format!("Page {} | Little Lost Note", page)))
        }
        _ => encoder_for_format(format)
            .with_context(|| format!("No encoder available for {} format", format))?,
    };

    let mut reader = ReaderController::new(&story)?;
    reader.go_to_index(page.saturating_sub(1));
    if reader.index() + 1 != page {
        tracing::warn!(
            "Page {} is out of range, showing page {}",
            page,
            reader.index() + 1
        );
    }
    let tree = reader.render_current();

    match output {
        Some(path) => {
            let mut file = File::create(path)
                .with_context(|| format!("Failed to create output file: {}", path))?;
            encoder
                .encode(&tree, &mut file)
                .with_context(|| format!("Failed to encode to {}", format))?;
            tracing::info!(
                "Rendered page {} as {} -> {}",
                reader.index() + 1,
                encoder.format_name(),
                path
            );
        }
        None => {
            let stdout = std::io::stdout();
            let mut lock = stdout.lock();
            encoder
                .encode(&tree, &mut lock)
                .with_context(|| format!("Failed to encode to {}", format))?;
            lock.flush()?;
        }
    }

    Ok(())
}
