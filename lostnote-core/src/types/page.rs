//! The page record: one static unit of story content

use super::StoryImage;
use serde::{Deserialize, Serialize};

/// Informational page category, consulted by a few layouts
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum PageType {
    Title,
    Dedication,
    Story,
    Music,
    End,
}

/// Rendering strategy tag
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "kebab-case")]
pub enum PageLayout {
    ImageTop,
    ImageBottom,
    ImageLeft,
    ImageRight,
    TextOnly,
    FullImage,
    ZebraStrip,
    MultiImage,

    /// Any tag this renderer does not know; rendered as plain text
    #[serde(other)]
    Other,
}

impl PageLayout {
    /// The tag used in content files
    pub fn as_str(&self) -> &'static str {
        match self {
            PageLayout::ImageTop => "image-top",
            PageLayout::ImageBottom => "image-bottom",
            PageLayout::ImageLeft => "image-left",
            PageLayout::ImageRight => "image-right",
            PageLayout::TextOnly => "text-only",
            PageLayout::FullImage => "full-image",
            PageLayout::ZebraStrip => "zebra-strip",
            PageLayout::MultiImage => "multi-image",
            PageLayout::Other => "other",
        }
    }

    /// Layouts that cannot be drawn without `imageSrc`
    pub fn requires_image_src(&self) -> bool {
        matches!(self, PageLayout::ImageLeft | PageLayout::ImageRight)
    }
}

/// A single story page
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct StoryPage {
    /// Unique, stable identifier
    pub id: u32,

    /// Page category
    #[serde(rename = "type")]
    pub page_type: PageType,

    /// Rendering strategy; `None` renders plain paragraphs
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub layout: Option<PageLayout>,

    /// Ordered paragraphs
    #[serde(default)]
    pub content: Vec<String>,

    /// Single illustration for the simple layouts
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_src: Option<String>,

    /// Alternative text for `image_src`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alt_text: Option<String>,

    /// Positioned illustrations for the multi-image layout
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub images: Option<Vec<StoryImage>>,

    /// Audio track, played only on music pages
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub audio_src: Option<String>,
}

impl StoryPage {
    /// Create a page with no content or media
    pub fn new(id: u32, page_type: PageType, layout: PageLayout) -> Self {
        Self {
            id,
            page_type,
            layout: Some(layout),
            content: Vec::new(),
            image_src: None,
            alt_text: None,
            images: None,
            audio_src: None,
        }
    }

    /// Set the paragraphs
    pub fn with_content<I, S>(mut self, paragraphs: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.content = paragraphs.into_iter().map(Into::into).collect();
        self
    }

    /// Set the single illustration
    pub fn with_image(mut self, src: impl Into<String>, alt_text: impl Into<String>) -> Self {
        self.image_src = Some(src.into());
        self.alt_text = Some(alt_text.into());
        self
    }

    /// Set the positioned illustrations
    pub fn with_images(mut self, images: Vec<StoryImage>) -> Self {
        self.images = Some(images);
        self
    }

    /// Set the audio track
    pub fn with_audio(mut self, src: impl Into<String>) -> Self {
        self.audio_src = Some(src.into());
        self
    }

    /// Positioned illustrations, empty when absent
    pub fn image_list(&self) -> &[StoryImage] {
        self.images.as_deref().unwrap_or_default()
    }

    /// Audio source, only for music pages
    pub fn playable_audio(&self) -> Option<&str> {
        match self.page_type {
            PageType::Music => self.audio_src.as_deref(),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_layout_tag_is_other() {
        let page: StoryPage = serde_json::from_str(
            r#"{"id": 1, "type": "story", "layout": "spiral", "content": ["x"]}"#,
        )
        .unwrap();
        assert_eq!(page.layout, Some(PageLayout::Other));
    }

    #[test]
    fn test_missing_layout_and_content() {
        let page: StoryPage = serde_json::from_str(r#"{"id": 3, "type": "end"}"#).unwrap();
        assert_eq!(page.layout, None);
        assert!(page.content.is_empty());
        assert!(page.image_list().is_empty());
    }

    #[test]
    fn test_camel_case_fields() {
        let page = StoryPage::new(8, PageType::Music, PageLayout::FullImage)
            .with_image("/assets/s.png", "score")
            .with_audio("/assets/song.mp3");
        let json = serde_json::to_value(&page).unwrap();
        assert_eq!(json["type"], "music");
        assert_eq!(json["layout"], "full-image");
        assert_eq!(json["imageSrc"], "/assets/s.png");
        assert_eq!(json["altText"], "score");
        assert_eq!(json["audioSrc"], "/assets/song.mp3");
        assert!(json.get("images").is_none());
    }

    #[test]
    fn test_audio_only_playable_on_music_pages() {
        let music = StoryPage::new(1, PageType::Music, PageLayout::FullImage).with_audio("a.mp3");
        let story = StoryPage {
            page_type: PageType::Story,
            ..music.clone()
        };
        assert_eq!(music.playable_audio(), Some("a.mp3"));
        assert_eq!(story.playable_audio(), None);
    }
}
