//! CLI command implementations

mod export;
mod info;
mod read;
mod render;
mod validate;

pub use export::export;
pub use info::info;
pub use read::read;
pub use render::render;
pub use validate::validate;

use anyhow::{Context, Result};
use lostnote_core::content::little_lost_note;
use lostnote_core::Storybook;

/// The story from `--content`, or the bundled one, refusing content with
/// hard validation errors
fn load_story(content: Option<&str>) -> Result<Storybook> {
    let story = read_story(content)?;
    story
        .ensure_valid()
        .with_context(|| format!("Invalid story content: {}", content.unwrap_or("bundled story")))?;
    Ok(story)
}

/// The story from `--content`, or the bundled one, without validation
fn read_story(content: Option<&str>) -> Result<Storybook> {
    match content {
        Some(path) => Storybook::load(path)
            .with_context(|| format!("Failed to load content file: {}", path)),
        None => Ok(little_lost_note().clone()),
    }
}
