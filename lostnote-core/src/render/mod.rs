//! Page layout rendering
//!
//! [`render_page`] maps one page record to a layout tree. It is a pure
//! function: no I/O, no shared state, and equal input always yields an equal
//! tree. The primary key is the page's layout tag; multi-image pages go
//! through a second dispatcher in [`multi_image`].

mod multi_image;
mod overrides;
mod tree;

pub use overrides::{LayoutOverride, CENTER_INSERTS, LAYOUT_OVERRIDES};
pub use tree::{
    Align, Cell, Extent, Gap, Height, HeadingStyle, Node, Order, Shade, TextStyle, Width,
};

use crate::types::{PageLayout, StoryPage};

/// Page whose text-only rendering uses the reduced-emphasis style
pub const ABOUT_PAGE_ID: u32 = 2;

/// The closing slide of the story
pub const END_PAGE_ID: u32 = 21;

/// Alt text used when a page gives none
pub const DEFAULT_ALT_TEXT: &str = "Story illustration";

/// Render a page record to a layout tree
pub fn render_page(page: &StoryPage) -> Node {
    match page.layout {
        Some(PageLayout::ImageTop) => image_top(page),
        Some(PageLayout::ImageBottom) => image_bottom(page),
        Some(PageLayout::ImageLeft) => image_beside(page, Side::Left),
        Some(PageLayout::ImageRight) => image_beside(page, Side::Right),
        Some(PageLayout::TextOnly) => text_only(page),
        Some(PageLayout::FullImage) => full_image(page),
        Some(PageLayout::ZebraStrip) => zebra_strip(page),
        Some(PageLayout::MultiImage) => multi_image::render(page),
        Some(PageLayout::Other) | None => plain_content(page),
    }
}

/// Plain paragraph flow, the fallback for every unknown case
pub fn plain_content(page: &StoryPage) -> Node {
    Node::column(
        4,
        page.content
            .iter()
            .map(|p| Node::paragraph(p.as_str(), TextStyle::Body))
            .collect(),
    )
}

/// The page's single illustration, if it has one
fn single_image(page: &StoryPage, min: Extent) -> Option<Node> {
    let src = page.image_src.as_deref()?;
    Some(Node::image(
        src,
        page.alt_text.as_deref().unwrap_or(DEFAULT_ALT_TEXT),
        Height::at_least(min),
    ))
}

fn image_top(page: &StoryPage) -> Node {
    let mut children: Vec<Node> = single_image(page, Extent::Vh(60)).into_iter().collect();
    children.push(plain_content(page));
    Node::column(6, children).with_min_height(Extent::Vh(80))
}

fn image_bottom(page: &StoryPage) -> Node {
    let mut children = vec![plain_content(page)];
    children.extend(single_image(page, Extent::Vh(60)));
    Node::column(6, children).with_min_height(Extent::Vh(80))
}

#[derive(Clone, Copy)]
enum Side {
    Left,
    Right,
}

fn image_beside(page: &StoryPage, side: Side) -> Node {
    let text = Cell::new(plain_content(page));
    let image = single_image(page, Extent::Vh(60)).map(Cell::new);

    // Narrow viewports always read text first
    let cells = match (side, image) {
        (Side::Left, Some(image)) => vec![image.ordered(2, 1), text.ordered(1, 2)],
        (Side::Right, Some(image)) => vec![text, image],
        (_, None) => vec![text],
    };

    Node::Grid {
        columns: 2,
        gap: 8,
        align: Align::Center,
        min_height: Some(Extent::Vh(70)),
        cells,
    }
}

fn text_only(page: &StoryPage) -> Node {
    let is_about = page.id == ABOUT_PAGE_ID;
    let headings = page
        .content
        .iter()
        .enumerate()
        .map(|(index, text)| {
            let style = match (is_about, index) {
                (true, _) => HeadingStyle::Note,
                (false, 0) => HeadingStyle::Display,
                (false, _) => HeadingStyle::Subtitle,
            };
            Node::heading(text.as_str(), style)
        })
        .collect();

    Node::Column {
        gap: 4,
        align: Align::Center,
        justify: Align::Center,
        min_height: Some(Extent::Vh(60)),
        centered_text: true,
        children: headings,
    }
}

fn full_image(page: &StoryPage) -> Node {
    let mut children: Vec<Node> = single_image(page, Extent::Vh(65)).into_iter().collect();
    if !page.content.is_empty() {
        children.push(plain_content(page));
    }
    if let Some(src) = page.playable_audio() {
        children.push(Node::Audio {
            src: src.to_string(),
            label: "Audio player for sheet music".to_string(),
        });
    }

    Node::Column {
        gap: 6,
        align: Align::Center,
        justify: Align::Start,
        min_height: Some(Extent::Vh(80)),
        centered_text: false,
        children,
    }
}

fn zebra_strip(page: &StoryPage) -> Node {
    let mut children: Vec<Node> = page
        .content
        .iter()
        .enumerate()
        .map(|(index, text)| Node::Band {
            shade: Shade::for_row(index),
            child: Box::new(Node::paragraph(text.as_str(), TextStyle::Compact)),
        })
        .collect();
    children.extend(single_image(page, Extent::Vh(60)));
    Node::column(6, children).with_min_height(Extent::Vh(80))
}
