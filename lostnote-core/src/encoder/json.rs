use super::PageEncoder;
use crate::error::RenderError;
use crate::render::Node;
use std::io::Write;

/// Encoder producing the layout tree as JSON
#[derive(Debug, Clone, Default)]
pub struct JsonEncoder {
    pretty: bool,
}

impl JsonEncoder {
    pub fn new() -> Self {
        Self { pretty: true }
    }

    pub fn compact() -> Self {
        Self { pretty: false }
    }
}

impl PageEncoder for JsonEncoder {
    fn encode(&self, node: &Node, writer: &mut dyn Write) -> Result<(), RenderError> {
        let result = if self.pretty {
            serde_json::to_writer_pretty(&mut *writer, node)
        } else {
            serde_json::to_writer(&mut *writer, node)
        };
        result.map_err(|e| RenderError::EncodingFailed(e.to_string()))?;
        writer.write_all(b"\n")?;
        Ok(())
    }

    fn format_name(&self) -> &str {
        "JSON"
    }

    fn file_extension(&self) -> &str {
        "json"
    }

    fn mime_type(&self) -> &str {
        "application/json"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::{Extent, Height};

    #[test]
    fn test_tagged_by_kind() {
        let node = Node::image("/assets/a.png", "a", Height::at_least(Extent::Vh(60)));
        let mut buf = Vec::new();
        JsonEncoder::compact().encode(&node, &mut buf).unwrap();
        let value: serde_json::Value = serde_json::from_slice(&buf).unwrap();
        assert_eq!(value["kind"], "image");
        assert_eq!(value["height"]["rule"], "at_least");
        assert_eq!(value["height"]["min"]["unit"], "vh");
        assert_eq!(value["height"]["min"]["value"], 60);
    }

    #[test]
    fn test_output_parses_back() {
        let node = Node::column(4, vec![]);
        let mut buf = Vec::new();
        JsonEncoder::new().encode(&node, &mut buf).unwrap();
        let back: Node = serde_json::from_slice(&buf).unwrap();
        assert_eq!(back, node);
    }
}
