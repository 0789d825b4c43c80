//! Illustration references used by multi-image pages

use serde::{Deserialize, Serialize};

/// Intended placement of an image within a multi-image layout
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "kebab-case")]
pub enum ImagePosition {
    Top,
    Bottom,
    Left,
    Right,
    TopLeft,
    TopRight,
    BottomLeft,
    BottomRight,
    Center,
}

impl ImagePosition {
    /// Every position, in bucket composition order
    pub const ALL: [ImagePosition; 9] = [
        ImagePosition::Top,
        ImagePosition::TopLeft,
        ImagePosition::TopRight,
        ImagePosition::Left,
        ImagePosition::Right,
        ImagePosition::Center,
        ImagePosition::BottomLeft,
        ImagePosition::BottomRight,
        ImagePosition::Bottom,
    ];

    /// The tag used in content files
    pub fn as_str(&self) -> &'static str {
        match self {
            ImagePosition::Top => "top",
            ImagePosition::Bottom => "bottom",
            ImagePosition::Left => "left",
            ImagePosition::Right => "right",
            ImagePosition::TopLeft => "top-left",
            ImagePosition::TopRight => "top-right",
            ImagePosition::BottomLeft => "bottom-left",
            ImagePosition::BottomRight => "bottom-right",
            ImagePosition::Center => "center",
        }
    }
}

/// One image of a multi-image page
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct StoryImage {
    /// Asset path, opaque to the renderer
    pub src: String,

    /// Alternative text
    pub alt_text: String,

    /// Placement hint
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position: Option<ImagePosition>,
}

impl StoryImage {
    /// Create an image without a placement hint
    pub fn new(src: impl Into<String>, alt_text: impl Into<String>) -> Self {
        Self {
            src: src.into(),
            alt_text: alt_text.into(),
            position: None,
        }
    }

    /// Set the placement hint
    pub fn at(mut self, position: ImagePosition) -> Self {
        self.position = Some(position);
        self
    }

    pub fn is_at(&self, position: ImagePosition) -> bool {
        self.position == Some(position)
    }
}
