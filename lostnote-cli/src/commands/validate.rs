//! Validate command implementation

use super::read_story;
use anyhow::{bail, Result};
use lostnote_core::validate::Severity;

/// Validate story content
pub fn validate(content: Option<&str>, strict: bool) -> Result<()> {
    let source = content.unwrap_or("bundled story");
    let story = read_story(content)?;
    let report = story.validate();

    for issue in &report.issues {
        let label = match issue.severity {
            Severity::Error => "error",
            Severity::Warning => "warning",
        };
        match issue.page_id {
            Some(id) => eprintln!("{}: page {}: {}", label, id, issue.message),
            None => eprintln!("{}: {}", label, issue.message),
        }
    }

    let errors = report.errors().count();
    let warnings = report.warnings().count();

    if report.is_valid(strict) {
        println!("Valid story content ({})", source);
        println!("  Pages:    {}", story.len());
        println!("  Warnings: {}", warnings);
        Ok(())
    } else {
        bail!(
            "Validation failed for {}: {} errors, {} warnings",
            source,
            errors,
            warnings
        );
    }
}
