//! Export command implementation

use super::load_story;
use anyhow::{bail, Context, Result};
use lostnote_core::encoder::{encoder_for_format, HtmlEncoder, PageEncoder};
use lostnote_core::render::render_page;
use lostnote_core::StoryPage;
use indicatif::{ProgressBar, ProgressStyle};
use rayon::prelude::*;
use std::fs::{self, File};
use std::path::Path;
use std::sync::atomic::{AtomicUsize, Ordering};

/// Render every page of the story into a directory
pub fn export(content: Option<&str>, output_dir: &str, format: &str, jobs: usize) -> Result<()> {
    let story = load_story(content)?;
    let output_path = Path::new(output_dir);

    // Ensure output directory exists
    fs::create_dir_all(output_path)
        .with_context(|| format!("Failed to create output directory: {}", output_dir))?;

    // Get encoder; HTML pages are written as complete documents
    let encoder: Box<dyn PageEncoder> = match format.to_lowercase().as_str() {
        "html" | "htm" => Box::new(HtmlEncoder::standalone("Little Lost Note")),
        _ => encoder_for_format(format)
            .with_context(|| format!("No encoder available for {} format", format))?,
    };

    println!("Exporting {} pages as {}", story.len(), encoder.format_name());

    let pb = ProgressBar::new(story.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("[{elapsed_precise}] {bar:40.cyan/blue} {pos:>7}/{len:7} {msg}")?
            .progress_chars("##-"),
    );

    let success_count = AtomicUsize::new(0);
    let error_count = AtomicUsize::new(0);

    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(jobs)
        .build()
        .context("Failed to build thread pool")?;

    pool.install(|| {
        story
            .pages()
            .par_iter()
            .enumerate()
            .for_each(|(index, page)| {
                match export_page(index, page, output_path, &*encoder) {
                    Ok(_) => {
                        success_count.fetch_add(1, Ordering::Relaxed);
                    }
                    Err(e) => {
                        error_count.fetch_add(1, Ordering::Relaxed);
                        tracing::error!("Failed to export page {}: {}", page.id, e);
                    }
                }
                pb.inc(1);
            });
    });

    pb.finish();

    let success = success_count.load(Ordering::Relaxed);
    let errors = error_count.load(Ordering::Relaxed);

    println!("\nExport complete:");
    println!("  Success: {}", success);
    println!("  Errors:  {}", errors);

    if errors > 0 {
        bail!("Export completed with {} errors", errors);
    }

    Ok(())
}

/// File name for the page at a reading position, e.g. `page-03.html`
fn page_file_name(index: usize, extension: &str) -> String {
    format!("page-{:02}.{}", index + 1, extension)
}

fn export_page(
    index: usize,
    page: &StoryPage,
    output_dir: &Path,
    encoder: &dyn PageEncoder,
) -> Result<()> {
    let output_file = output_dir.join(page_file_name(index, encoder.file_extension()));

    let mut output = File::create(&output_file)?;
    encoder.encode(&render_page(page), &mut output)?;

    tracing::debug!("Exported page {} -> {:?}", page.id, output_file);

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_file_name_is_padded() {
        assert_eq!(page_file_name(0, "html"), "page-01.html");
        assert_eq!(page_file_name(20, "txt"), "page-21.txt");
    }
}
