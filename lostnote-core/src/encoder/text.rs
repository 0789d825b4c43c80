//! Plain-text rendering for terminals

use super::PageEncoder;
use crate::error::RenderError;
use crate::render::{Node, Shade};
use std::io::Write;

/// Encoder producing readable plain text
///
/// Images become `[image: alt]` lines and audio becomes `[audio: src]`.
/// Grid cells are emitted in wide-viewport order.
#[derive(Debug, Clone, Default)]
pub struct TextEncoder;

impl TextEncoder {
    pub fn new() -> Self {
        Self
    }

    pub fn to_text(&self, node: &Node) -> String {
        let mut lines = Vec::new();
        collect_lines(node, &mut lines);
        let mut out = lines.join("\n");
        out.push('\n');
        out
    }
}

fn collect_lines(node: &Node, lines: &mut Vec<String>) {
    match node {
        Node::Column { children, .. } => {
            for child in children {
                collect_lines(child, lines);
            }
        }
        Node::Grid { cells, .. } => {
            let mut ordered: Vec<_> = cells.iter().enumerate().collect();
            ordered.sort_by_key(|(index, cell)| {
                cell.order.map(|o| usize::from(o.wide)).unwrap_or(index + 1)
            });
            for (_, cell) in ordered {
                collect_lines(&cell.content, lines);
            }
        }
        Node::Paragraph { text, .. } => lines.push(format!("    {text}")),
        Node::Heading { text, .. } => lines.push(text.clone()),
        Node::Band { shade, child } => {
            let start = lines.len();
            collect_lines(child, lines);
            if *shade == Shade::Light {
                for line in &mut lines[start..] {
                    line.insert_str(0, "| ");
                }
            }
        }
        Node::Image { alt, .. } => lines.push(format!("[image: {alt}]")),
        Node::Audio { src, .. } => lines.push(format!("[audio: {src}]")),
    }
}

impl PageEncoder for TextEncoder {
    fn encode(&self, node: &Node, writer: &mut dyn Write) -> Result<(), RenderError> {
        writer.write_all(self.to_text(node).as_bytes())?;
        Ok(())
    }

    fn format_name(&self) -> &str {
        "Text"
    }

    fn file_extension(&self) -> &str {
        "txt"
    }

    fn mime_type(&self) -> &str {
        "text/plain"
    }
}
