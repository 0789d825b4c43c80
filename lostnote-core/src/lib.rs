//! Lost Note Core Library
//!
//! This crate provides the content model, page layout renderer and reader
//! state for the Little Lost Note storybook. Every page record is rendered to
//! a backend-agnostic layout tree before being encoded to an output format.

pub mod content;
pub mod encoder;
pub mod error;
pub mod reader;
pub mod render;
pub mod types;
pub mod validate;

pub use error::{ContentError, LostNoteError, ReaderError, RenderError, Result};
pub use reader::{ClickZone, Key, MountedReader, ReaderController, SheetMusicViewer};
pub use render::{render_page, Node};
pub use types::{
    ImagePosition, PageLayout, PageType, SheetMusicPage, StoryImage, StoryPage, Storybook,
};
pub use validate::{Severity, ValidationIssue, ValidationReport};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_every_bundled_page() {
        for page in content::little_lost_note().pages() {
            let tree = render_page(page);
            assert_eq!(tree, render_page(page), "page {} not deterministic", page.id);
        }
    }
}
