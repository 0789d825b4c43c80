//! HTML encoder for layout trees

use super::PageEncoder;
use crate::error::RenderError;
use crate::render::{Align, Cell, HeadingStyle, Height, Node, Shade, TextStyle, Width};
use std::io::Write;

/// Styles the class names emitted by [`HtmlEncoder`]
pub const STYLESHEET: &str = r#".ln-column{display:flex;flex-direction:column}
.ln-grid{display:grid;grid-template-columns:1fr}
.ln-cell{position:relative;order:var(--order-narrow,0)}
.ln-align-stretch{align-items:stretch}.ln-align-start{align-items:flex-start}
.ln-align-center{align-items:center}.ln-align-end{align-items:flex-end}
.ln-justify-stretch,.ln-justify-start{justify-content:flex-start}
.ln-justify-center{justify-content:center}.ln-justify-end{justify-content:flex-end}
.ln-grid.ln-align-start{align-items:start}.ln-grid.ln-align-center{align-items:center}
.ln-grid.ln-align-end{align-items:end}
.ln-centered-text{text-align:center}
.ln-body,.ln-compact{line-height:1.625;color:#1f2937;margin:0}
.ln-body{font-size:1.5rem;text-indent:2rem}
.ln-compact{font-size:1.25rem;text-indent:1.5rem}
.ln-heading{color:#1f2937;margin:0}
.ln-display{font-size:3.75rem;font-weight:700;margin-bottom:1rem}
.ln-subtitle{font-size:1.875rem;font-weight:300}
.ln-note{font-size:1.25rem;font-weight:400;margin-bottom:1rem}
.ln-closing{font-size:3rem;font-weight:700;margin-bottom:1.5rem}
.ln-band{padding:1.5rem}.ln-shade-light{background:rgba(255,255,255,.5)}
.ln-frame{position:relative;width:100%;min-height:var(--min-narrow,auto)}
.ln-frame img{width:100%;height:100%;object-fit:contain}
.ln-fixed{height:var(--height)}.ln-fixed img{position:absolute;inset:0}
.ln-width-narrow{max-width:32rem}.ln-width-medium{max-width:36rem}.ln-width-wide{max-width:42rem}
.ln-audio{display:flex;justify-content:center;margin-top:1.5rem}
.ln-audio audio{width:100%;max-width:28rem}
@media (min-width:768px){
.ln-cell{order:var(--order-wide,0)}
.ln-cols-2{grid-template-columns:repeat(2,1fr)}
.ln-cols-3{grid-template-columns:repeat(3,1fr)}
.ln-cols-4{grid-template-columns:repeat(4,1fr)}
.ln-frame{min-height:var(--min-wide,var(--min-narrow,auto))}
.ln-body{font-size:1.875rem;text-indent:3rem}
.ln-compact{font-size:1.5rem;text-indent:2.5rem}
.ln-display{font-size:4.5rem}.ln-subtitle{font-size:2.25rem}
.ln-note{font-size:1.5rem}.ln-closing{font-size:3.75rem}
}
"#;

/// Encoder producing an HTML fragment, or a standalone document
#[derive(Debug, Clone, Default)]
pub struct HtmlEncoder {
    standalone: Option<String>,
}

impl HtmlEncoder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Wrap the fragment in a complete document with the given title
    pub fn standalone(title: impl Into<String>) -> Self {
        Self {
            standalone: Some(title.into()),
        }
    }

    /// Encode a tree to an HTML string
    pub fn to_html(&self, node: &Node) -> String {
        let mut html = String::new();
        write_node(&mut html, node);
        match &self.standalone {
            Some(title) => format!(
                "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"UTF-8\"/>\n\
                 <meta name=\"viewport\" content=\"width=device-width, initial-scale=1\"/>\n\
                 <title>{}</title>\n<style>\n{}</style>\n</head>\n<body>\n{}</body>\n</html>\n",
                escape_html(title),
                STYLESHEET,
                html
            ),
            None => html,
        }
    }
}

impl PageEncoder for HtmlEncoder {
    fn encode(&self, node: &Node, writer: &mut dyn Write) -> Result<(), RenderError> {
        writer.write_all(self.to_html(node).as_bytes())?;
        Ok(())
    }

    fn format_name(&self) -> &str {
        "HTML"
    }

    fn file_extension(&self) -> &str {
        "html"
    }

    fn mime_type(&self) -> &str {
        "text/html"
    }
}

fn align_name(align: Align) -> &'static str {
    match align {
        Align::Stretch => "stretch",
        Align::Start => "start",
        Align::Center => "center",
        Align::End => "end",
    }
}

fn write_node(html: &mut String, node: &Node) {
    match node {
        Node::Column {
            gap,
            align,
            justify,
            min_height,
            centered_text,
            children,
        } => {
            let mut class = format!(
                "ln-column ln-align-{} ln-justify-{}",
                align_name(*align),
                align_name(*justify)
            );
            if *centered_text {
                class.push_str(" ln-centered-text");
            }
            let mut style = format!("gap:{}rem", gap_rem(*gap));
            if let Some(min) = min_height {
                style.push_str(&format!(";min-height:{}", min.css()));
            }
            html.push_str(&format!("<div class=\"{class}\" style=\"{style}\">\n"));
            for child in children {
                write_node(html, child);
            }
            html.push_str("</div>\n");
        }
        Node::Grid {
            columns,
            gap,
            align,
            min_height,
            cells,
        } => {
            let mut style = format!("gap:{}rem", gap_rem(*gap));
            if let Some(min) = min_height {
                style.push_str(&format!(";min-height:{}", min.css()));
            }
            html.push_str(&format!(
                "<div class=\"ln-grid ln-cols-{} ln-align-{}\" style=\"{}\">\n",
                columns,
                align_name(*align),
                style
            ));
            for cell in cells {
                write_cell(html, cell);
            }
            html.push_str("</div>\n");
        }
        Node::Paragraph { text, style } => {
            let class = match style {
                TextStyle::Body => "ln-body",
                TextStyle::Compact => "ln-compact",
            };
            html.push_str(&format!("<p class=\"{class}\">{}</p>\n", escape_html(text)));
        }
        Node::Heading { text, style } => {
            let class = match style {
                HeadingStyle::Display => "ln-display",
                HeadingStyle::Subtitle => "ln-subtitle",
                HeadingStyle::Note => "ln-note",
                HeadingStyle::Closing => "ln-closing",
            };
            html.push_str(&format!(
                "<h1 class=\"ln-heading {class}\">{}</h1>\n",
                escape_html(text)
            ));
        }
        Node::Band { shade, child } => {
            let class = match shade {
                Shade::Light => "ln-band ln-shade-light",
                Shade::Clear => "ln-band ln-shade-clear",
            };
            html.push_str(&format!("<div class=\"{class}\">\n"));
            write_node(html, child);
            html.push_str("</div>\n");
        }
        Node::Image {
            src,
            alt,
            height,
            width,
        } => {
            let mut class = String::from("ln-frame");
            let style = match height {
                Height::AtLeast { min } => format!("--min-narrow:{}", min.css()),
                Height::Responsive { narrow, wide } => {
                    format!("--min-narrow:{};--min-wide:{}", narrow.css(), wide.css())
                }
                Height::Exactly { height } => {
                    class.push_str(" ln-fixed");
                    format!("--height:{}", height.css())
                }
            };
            match width {
                Width::Full => {}
                Width::Narrow => class.push_str(" ln-width-narrow"),
                Width::Medium => class.push_str(" ln-width-medium"),
                Width::Wide => class.push_str(" ln-width-wide"),
            }
            html.push_str(&format!(
                "<div class=\"{class}\" style=\"{style}\"><img src=\"{}\" alt=\"{}\" loading=\"lazy\"/></div>\n",
                escape_html(src),
                escape_html(alt)
            ));
        }
        Node::Audio { src, label } => {
            let src = escape_html(src);
            html.push_str(&format!(
                "<div class=\"ln-audio\"><audio controls aria-label=\"{}\">\
                 <source src=\"{src}\" type=\"audio/mpeg\"/>\
                 <source src=\"{src}\" type=\"audio/mp3\"/>\
                 Your browser does not support the audio element.</audio></div>\n",
                escape_html(label)
            ));
        }
    }
}

fn write_cell(html: &mut String, cell: &Cell) {
    let mut style = String::new();
    if cell.span > 1 {
        style.push_str(&format!("grid-column:span {}", cell.span));
    }
    if let Some(order) = cell.order {
        if !style.is_empty() {
            style.push(';');
        }
        style.push_str(&format!(
            "--order-narrow:{};--order-wide:{}",
            order.narrow, order.wide
        ));
    }
    if style.is_empty() {
        html.push_str("<div class=\"ln-cell\">\n");
    } else {
        html.push_str(&format!("<div class=\"ln-cell\" style=\"{style}\">\n"));
    }
    write_node(html, &cell.content);
    html.push_str("</div>\n");
}

/// Spacing steps are quarter-rems
fn gap_rem(gap: u8) -> String {
    let rem = f32::from(gap) * 0.25;
    format!("{rem}")
}

/// Escape text for HTML content and attribute values
pub fn escape_html(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#x27;")
}
