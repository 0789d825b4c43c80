//! The storybook: an ordered, immutable list of pages

use super::StoryPage;
use crate::error::{ContentError, LostNoteError};
use crate::validate::ValidationReport;
use serde::{Deserialize, Serialize};
use std::io::Read;
use std::path::Path;

/// The complete story, addressed by position
///
/// Navigation always indexes by array position. Page ids happen to match
/// positions in the seed data, but nothing relies on it.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(transparent)]
pub struct Storybook {
    pages: Vec<StoryPage>,
}

impl Storybook {
    /// Build a storybook from pages in reading order
    pub fn new(pages: Vec<StoryPage>) -> Self {
        Self { pages }
    }

    /// Parse a JSON array of page records
    pub fn from_json(json: &str) -> Result<Self, LostNoteError> {
        serde_json::from_str(json).map_err(parse_error)
    }

    /// Read a JSON array of page records
    pub fn from_reader(reader: impl Read) -> Result<Self, LostNoteError> {
        serde_json::from_reader(reader).map_err(parse_error)
    }

    /// Load a JSON content file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, LostNoteError> {
        let file = std::fs::File::open(path.as_ref())?;
        let book = Self::from_reader(std::io::BufReader::new(file))?;
        tracing::debug!(
            "Loaded {} pages from {}",
            book.len(),
            path.as_ref().display()
        );
        Ok(book)
    }

    /// All pages in reading order
    pub fn pages(&self) -> &[StoryPage] {
        &self.pages
    }

    /// Page at a traversal position
    pub fn page(&self, index: usize) -> Option<&StoryPage> {
        self.pages.get(index)
    }

    /// Traversal position of the page with the given id
    pub fn position_of(&self, id: u32) -> Option<usize> {
        self.pages.iter().position(|p| p.id == id)
    }

    pub fn len(&self) -> usize {
        self.pages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pages.is_empty()
    }

    /// Check the content and collect every finding
    pub fn validate(&self) -> ValidationReport {
        crate::validate::validate(self)
    }

    /// Fail on the first hard content error
    pub fn ensure_valid(&self) -> Result<(), ContentError> {
        match self.validate().into_first_error() {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }
}

/// Well-formed JSON of the wrong shape is a content problem, not a JSON one
fn parse_error(err: serde_json::Error) -> LostNoteError {
    if err.is_data() {
        ContentError::MalformedContent(err.to_string()).into()
    } else {
        err.into()
    }
}
