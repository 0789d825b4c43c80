//! Encoders for turning layout trees into output formats

mod html;
mod json;
mod text;

pub use html::{escape_html, HtmlEncoder, STYLESHEET};
pub use json::JsonEncoder;
pub use text::TextEncoder;

use crate::error::RenderError;
use crate::render::Node;
use std::io::Write;

/// Trait for encoding rendered pages to output formats
pub trait PageEncoder: Send + Sync {
    /// Encode a layout tree to a writer
    fn encode(&self, node: &Node, writer: &mut dyn Write) -> Result<(), RenderError>;

    /// Format name (e.g., "HTML", "JSON")
    fn format_name(&self) -> &str;

    /// File extension for this format
    fn file_extension(&self) -> &str;

    /// MIME type for this format
    fn mime_type(&self) -> &str;
}

/// Get an encoder by format name
pub fn encoder_for_format(format: &str) -> Option<Box<dyn PageEncoder>> {
    match format.to_lowercase().as_str() {
        "html" | "htm" => Some(Box::new(HtmlEncoder::new())),
        "json" => Some(Box::new(JsonEncoder::new())),
        "text" | "txt" => Some(Box::new(TextEncoder::new())),
        _ => None,
    }
}

/// Like [`encoder_for_format`], but reports unknown names as an error
pub fn require_encoder(format: &str) -> Result<Box<dyn PageEncoder>, RenderError> {
    encoder_for_format(format).ok_or_else(|| RenderError::UnsupportedFormat(format.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::TextStyle;

    #[test]
    fn test_lookup_is_case_insensitive() {
        assert_eq!(encoder_for_format("HTML").unwrap().file_extension(), "html");
        assert_eq!(encoder_for_format("txt").unwrap().format_name(), "Text");
        assert_eq!(
            encoder_for_format("Json").unwrap().mime_type(),
            "application/json"
        );
    }

    #[test]
    fn test_unknown_format() {
        assert!(encoder_for_format("epub").is_none());
        assert!(matches!(
            require_encoder("pdf"),
            Err(RenderError::UnsupportedFormat(f)) if f == "pdf"
        ));
    }

    #[test]
    fn test_encode_to_buffer() {
        let node = Node::paragraph("Hello", TextStyle::Body);
        for format in ["html", "json", "text"] {
            let encoder = encoder_for_format(format).unwrap();
            let mut buf = Vec::new();
            encoder.encode(&node, &mut buf).unwrap();
            let out = String::from_utf8(buf).unwrap();
            assert!(out.contains("Hello"), "{format}: {out}");
        }
    }
}
