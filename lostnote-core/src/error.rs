//! Error types for Lost Note Core

use thiserror::Error;

/// Result type alias using LostNoteError
pub type Result<T> = std::result::Result<T, LostNoteError>;

/// Top-level error type for all Lost Note operations
#[derive(Debug, Error)]
pub enum LostNoteError {
    #[error("Content error: {0}")]
    Content(#[from] ContentError),

    #[error("Render error: {0}")]
    Render(#[from] RenderError),

    #[error("Reader error: {0}")]
    Reader(#[from] ReaderError),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors in the static story content
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ContentError {
    #[error("Storybook has no pages")]
    Empty,

    #[error("Duplicate page id: {0}")]
    DuplicateId(u32),

    #[error("Page {page_id} is missing required field: {field}")]
    MissingField { page_id: u32, field: &'static str },

    #[error("Malformed content: {0}")]
    MalformedContent(String),
}

/// Errors that occur while encoding a layout tree
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("Encoding failed: {0}")]
    EncodingFailed(String),

    #[error("Unsupported output format: {0}")]
    UnsupportedFormat(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors raised when mounting a reader
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ReaderError {
    #[error("Cannot read a storybook with no pages")]
    EmptyContent,
}
