//! Static content validation
//!
//! Content is author-controlled and checked once, before it is served or
//! exported. Errors are problems the renderer cannot draw around; warnings are
//! records the renderer tolerates but that are probably mistakes.

use crate::error::ContentError;
use crate::types::{PageLayout, PageType, Storybook};
use serde::Serialize;
use std::collections::HashSet;

/// How serious a validation finding is
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq, PartialOrd, Ord)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Warning,
    Error,
}

/// A single validation finding
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct ValidationIssue {
    pub severity: Severity,

    /// Id of the offending page, if the finding is page-specific
    pub page_id: Option<u32>,

    pub message: String,

    #[serde(skip)]
    error: Option<ContentError>,
}

impl ValidationIssue {
    fn error(page_id: Option<u32>, error: ContentError) -> Self {
        Self {
            severity: Severity::Error,
            page_id,
            message: error.to_string(),
            error: Some(error),
        }
    }

    fn warning(page_id: u32, message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Warning,
            page_id: Some(page_id),
            message: message.into(),
            error: None,
        }
    }
}

/// All findings for a storybook
#[derive(Debug, Clone, Default, Serialize, PartialEq, Eq)]
pub struct ValidationReport {
    pub issues: Vec<ValidationIssue>,
}

impl ValidationReport {
    pub fn errors(&self) -> impl Iterator<Item = &ValidationIssue> {
        self.issues.iter().filter(|i| i.severity == Severity::Error)
    }

    pub fn warnings(&self) -> impl Iterator<Item = &ValidationIssue> {
        self.issues.iter().filter(|i| i.severity == Severity::Warning)
    }

    pub fn has_errors(&self) -> bool {
        self.errors().next().is_some()
    }

    /// Whether the content passes; strict mode also fails on warnings
    pub fn is_valid(&self, strict: bool) -> bool {
        if strict {
            self.issues.is_empty()
        } else {
            !self.has_errors()
        }
    }

    /// The first hard error, if any
    pub fn into_first_error(self) -> Option<ContentError> {
        self.issues.into_iter().find_map(|i| i.error)
    }
}

/// Check a storybook against the content contract
pub fn validate(book: &Storybook) -> ValidationReport {
    let mut report = ValidationReport::default();

    if book.is_empty() {
        report
            .issues
            .push(ValidationIssue::error(None, ContentError::Empty));
        return report;
    }

    let mut seen = HashSet::new();
    for (index, page) in book.pages().iter().enumerate() {
        if !seen.insert(page.id) {
            report.issues.push(ValidationIssue::error(
                Some(page.id),
                ContentError::DuplicateId(page.id),
            ));
        }

        if let Some(layout) = page.layout {
            if layout.requires_image_src() && page.image_src.is_none() {
                report.issues.push(ValidationIssue::error(
                    Some(page.id),
                    ContentError::MissingField {
                        page_id: page.id,
                        field: "imageSrc",
                    },
                ));
            }

            if layout == PageLayout::MultiImage && page.image_list().is_empty() {
                report.issues.push(ValidationIssue::warning(
                    page.id,
                    "multi-image layout without images renders as plain text",
                ));
            }

            if layout == PageLayout::Other {
                report.issues.push(ValidationIssue::warning(
                    page.id,
                    "unrecognized layout renders as plain text",
                ));
            }
        }

        if page.image_src.is_some() && page.images.is_some() {
            report.issues.push(ValidationIssue::warning(
                page.id,
                "both imageSrc and images are set; only one is used by any layout",
            ));
        }

        if page.audio_src.is_some() && page.page_type != PageType::Music {
            report.issues.push(ValidationIssue::warning(
                page.id,
                "audioSrc is ignored on non-music pages",
            ));
        }

        if page.image_list().iter().any(|img| img.src.is_empty()) {
            report
                .issues
                .push(ValidationIssue::warning(page.id, "image with empty src"));
        }

        if page.id as usize != index + 1 {
            report.issues.push(ValidationIssue::warning(
                page.id,
                format!("id does not match reading position {}", index + 1),
            ));
        }
    }

    for issue in report.warnings() {
        tracing::debug!(page_id = ?issue.page_id, "content warning: {}", issue.message);
    }

    report
}
