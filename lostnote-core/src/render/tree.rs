//! Layout tree produced by the page renderer
//!
//! The tree is backend-agnostic: encoders turn it into HTML, JSON or plain
//! text. Grids collapse to a single column on narrow viewports, so every cell
//! carries its order for both viewport classes.

use serde::{Deserialize, Serialize};

/// Spacing step between siblings, in quarter-rem units
pub type Gap = u8;

/// A length used for minimum and fixed heights
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "unit", content = "value", rename_all = "snake_case")]
pub enum Extent {
    /// CSS pixels
    Px(u32),
    /// Percent of viewport height
    Vh(u32),
}

impl Extent {
    pub fn css(&self) -> String {
        match self {
            Extent::Px(v) => format!("{v}px"),
            Extent::Vh(v) => format!("{v}vh"),
        }
    }
}

/// Height rule for an image frame
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "rule", rename_all = "snake_case")]
pub enum Height {
    /// Grows with the layout but never below `min`
    AtLeast { min: Extent },
    /// Different minimums per viewport class
    Responsive { narrow: Extent, wide: Extent },
    /// A fixed frame
    Exactly { height: Extent },
}

impl Height {
    pub fn at_least(min: Extent) -> Self {
        Height::AtLeast { min }
    }
}

/// Maximum width of an image frame
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum Width {
    #[default]
    Full,
    /// 32rem
    Narrow,
    /// 36rem
    Medium,
    /// 42rem
    Wide,
}

/// Cross-axis alignment
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum Align {
    #[default]
    Stretch,
    Start,
    Center,
    End,
}

/// Body text treatments
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum TextStyle {
    /// Plain reading text with a deep indent
    Body,
    /// Slightly smaller text used beside illustrations
    Compact,
}

/// Display heading treatments
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum HeadingStyle {
    /// Most prominent: first line of a title page
    Display,
    /// Lighter follow-up lines of a title page
    Subtitle,
    /// Reduced emphasis for the about page
    Note,
    /// Large bold centered text of the closing slide
    Closing,
}

/// Background of a zebra band
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Shade {
    Light,
    Clear,
}

impl Shade {
    /// Even rows are light, odd rows clear
    pub fn for_row(index: usize) -> Self {
        if index % 2 == 0 {
            Shade::Light
        } else {
            Shade::Clear
        }
    }
}

/// Position of a cell in each viewport class (1-based)
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct Order {
    pub narrow: u8,
    pub wide: u8,
}

/// One cell of a grid
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Cell {
    /// Columns spanned on wide viewports
    pub span: u8,

    /// Explicit ordering; document order when absent
    pub order: Option<Order>,

    pub content: Node,
}

impl Cell {
    pub fn new(content: Node) -> Self {
        Self {
            span: 1,
            order: None,
            content,
        }
    }

    /// Place the cell at `narrow` on small screens and `wide` on large ones
    pub fn ordered(mut self, narrow: u8, wide: u8) -> Self {
        self.order = Some(Order { narrow, wide });
        self
    }

    pub fn spanning(mut self, span: u8) -> Self {
        self.span = span;
        self
    }
}

/// A node of the layout tree
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Node {
    /// Vertical flow
    Column {
        gap: Gap,
        align: Align,
        justify: Align,
        min_height: Option<Extent>,
        centered_text: bool,
        children: Vec<Node>,
    },

    /// Responsive grid: one column when narrow, `columns` when wide
    Grid {
        columns: u8,
        gap: Gap,
        align: Align,
        min_height: Option<Extent>,
        cells: Vec<Cell>,
    },

    /// Paragraph of reading text
    Paragraph { text: String, style: TextStyle },

    /// Display heading
    Heading { text: String, style: HeadingStyle },

    /// Shaded row of a zebra strip
    Band { shade: Shade, child: Box<Node> },

    /// Illustration frame
    Image {
        src: String,
        alt: String,
        height: Height,
        width: Width,
    },

    /// Audio player
    Audio { src: String, label: String },
}

impl Node {
    /// A plain vertical flow
    pub fn column(gap: Gap, children: Vec<Node>) -> Self {
        Node::Column {
            gap,
            align: Align::Stretch,
            justify: Align::Start,
            min_height: None,
            centered_text: false,
            children,
        }
    }

    /// A vertical flow centered on both axes
    pub fn centered_column(gap: Gap, min_height: Option<Extent>, children: Vec<Node>) -> Self {
        Node::Column {
            gap,
            align: Align::Center,
            justify: Align::Center,
            min_height,
            centered_text: false,
            children,
        }
    }

    pub fn grid(columns: u8, gap: Gap, align: Align, cells: Vec<Cell>) -> Self {
        Node::Grid {
            columns,
            gap,
            align,
            min_height: None,
            cells,
        }
    }

    pub fn paragraph(text: impl Into<String>, style: TextStyle) -> Self {
        Node::Paragraph {
            text: text.into(),
            style,
        }
    }

    pub fn heading(text: impl Into<String>, style: HeadingStyle) -> Self {
        Node::Heading {
            text: text.into(),
            style,
        }
    }

    pub fn image(src: impl Into<String>, alt: impl Into<String>, height: Height) -> Self {
        Node::Image {
            src: src.into(),
            alt: alt.into(),
            height,
            width: Width::Full,
        }
    }

    /// Set the minimum height of a column or grid; other nodes are unchanged
    pub fn with_min_height(mut self, extent: Extent) -> Self {
        match &mut self {
            Node::Column { min_height, .. } | Node::Grid { min_height, .. } => {
                *min_height = Some(extent)
            }
            _ => {}
        }
        self
    }

    /// Set the maximum width of an image; other nodes are unchanged
    pub fn with_width(mut self, new_width: Width) -> Self {
        if let Node::Image { width, .. } = &mut self {
            *width = new_width;
        }
        self
    }

    /// Visit this node and every descendant in document order
    pub fn walk<'a>(&'a self, visit: &mut dyn FnMut(&'a Node)) {
        visit(self);
        match self {
            Node::Column { children, .. } => {
                for child in children {
                    child.walk(visit);
                }
            }
            Node::Grid { cells, .. } => {
                for cell in cells {
                    cell.content.walk(visit);
                }
            }
            Node::Band { child, .. } => child.walk(visit),
            _ => {}
        }
    }

    /// Image sources in document order
    pub fn image_sources(&self) -> Vec<&str> {
        let mut out = Vec::new();
        self.walk(&mut |node| {
            if let Node::Image { src, .. } = node {
                out.push(src.as_str());
            }
        });
        out
    }

    /// Text of every paragraph and heading in document order
    pub fn texts(&self) -> Vec<&str> {
        let mut out = Vec::new();
        self.walk(&mut |node| match node {
            Node::Paragraph { text, .. } | Node::Heading { text, .. } => out.push(text.as_str()),
            _ => {}
        });
        out
    }

    /// Audio sources in document order
    pub fn audio_sources(&self) -> Vec<&str> {
        let mut out = Vec::new();
        self.walk(&mut |node| {
            if let Node::Audio { src, .. } = node {
                out.push(src.as_str());
            }
        });
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_walk_visits_grid_and_band_children() {
        let tree = Node::column(
            4,
            vec![
                Node::grid(
                    2,
                    6,
                    Align::Start,
                    vec![
                        Cell::new(Node::image("/a.png", "a", Height::at_least(Extent::Px(400)))),
                        Cell::new(Node::paragraph("one", TextStyle::Compact)),
                    ],
                ),
                Node::Band {
                    shade: Shade::for_row(1),
                    child: Box::new(Node::paragraph("two", TextStyle::Compact)),
                },
            ],
        );

        assert_eq!(tree.image_sources(), vec!["/a.png"]);
        assert_eq!(tree.texts(), vec!["one", "two"]);
        assert!(tree.audio_sources().is_empty());
    }

    #[test]
    fn test_min_height_only_applies_to_containers() {
        let para = Node::paragraph("x", TextStyle::Body).with_min_height(Extent::Vh(80));
        assert_eq!(para, Node::paragraph("x", TextStyle::Body));

        let col = Node::column(6, vec![]).with_min_height(Extent::Vh(80));
        assert!(matches!(
            col,
            Node::Column {
                min_height: Some(Extent::Vh(80)),
                ..
            }
        ));
    }

    #[test]
    fn test_extent_css() {
        assert_eq!(Extent::Px(400).css(), "400px");
        assert_eq!(Extent::Vh(60).css(), "60vh");
    }
}
