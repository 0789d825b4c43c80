//! Multi-image layout
//!
//! First match wins: no images, closing slide, cover, page overrides, then
//! the generic position-bucket composition.

use super::overrides::{center_insert_after, find_override};
use super::tree::{Align, Cell, Extent, HeadingStyle, Height, Node, TextStyle, Width};
use super::{plain_content, END_PAGE_ID};
use crate::types::{ImagePosition, PageType, StoryImage, StoryPage};

pub(super) fn render(page: &StoryPage) -> Node {
    let images = page.image_list();
    if images.is_empty() {
        return plain_content(page);
    }

    if images.len() == 1 && page.page_type == PageType::End && page.id == END_PAGE_ID {
        return closing_slide(page, &images[0]);
    }

    if images.len() == 2 && page.page_type == PageType::Title && page.content.is_empty() {
        return cover(images);
    }

    if let Some(entry) = find_override(page, images) {
        if let Some(tree) = (entry.render)(page, images) {
            tracing::debug!(page_id = page.id, name = entry.name, "Layout override applied");
            return tree;
        }
    }

    by_position(page, images)
}

fn frame(image: &StoryImage) -> Node {
    Node::image(
        image.src.as_str(),
        image.alt_text.as_str(),
        Height::at_least(Extent::Px(400)),
    )
}

fn compact(text: &str) -> Node {
    Node::paragraph(text, TextStyle::Compact)
}

/// Closing words centered above the final illustration
fn closing_slide(page: &StoryPage, image: &StoryImage) -> Node {
    let words = Node::Column {
        gap: 6,
        align: Align::Stretch,
        justify: Align::Start,
        min_height: None,
        centered_text: true,
        children: page
            .content
            .iter()
            .map(|p| Node::heading(p.as_str(), HeadingStyle::Closing))
            .collect(),
    };

    Node::centered_column(
        8,
        Some(Extent::Vh(80)),
        vec![words, frame(image).with_width(Width::Wide)],
    )
}

/// Title logo stacked above the cover art, whatever their input order
fn cover(images: &[StoryImage]) -> Node {
    let logo = images
        .iter()
        .find(|img| img.src.contains("logo") || img.is_at(ImagePosition::Top))
        .unwrap_or(&images[0]);
    let art = images
        .iter()
        .find(|img| img.src.contains("cover") || img.is_at(ImagePosition::Center))
        .unwrap_or(&images[1]);

    Node::centered_column(
        8,
        Some(Extent::Vh(80)),
        vec![
            Node::image(
                logo.src.as_str(),
                logo.alt_text.as_str(),
                Height::Exactly {
                    height: Extent::Px(192),
                },
            )
            .with_width(Width::Narrow),
            Node::image(
                art.src.as_str(),
                art.alt_text.as_str(),
                Height::Exactly {
                    height: Extent::Px(500),
                },
            )
            .with_width(Width::Wide),
        ],
    )
}

/// Images grouped by placement hint; images without a hint are not drawn
#[derive(Default)]
struct Buckets<'a> {
    top: Vec<&'a StoryImage>,
    top_left: Vec<&'a StoryImage>,
    top_right: Vec<&'a StoryImage>,
    bottom: Vec<&'a StoryImage>,
    bottom_left: Vec<&'a StoryImage>,
    bottom_right: Vec<&'a StoryImage>,
    left: Vec<&'a StoryImage>,
    right: Vec<&'a StoryImage>,
    center: Vec<&'a StoryImage>,
}

impl<'a> Buckets<'a> {
    fn sort(images: &'a [StoryImage]) -> Self {
        let mut buckets = Self::default();
        for image in images {
            let Some(position) = image.position else {
                continue;
            };
            let bucket = match position {
                ImagePosition::Top => &mut buckets.top,
                ImagePosition::TopLeft => &mut buckets.top_left,
                ImagePosition::TopRight => &mut buckets.top_right,
                ImagePosition::Bottom => &mut buckets.bottom,
                ImagePosition::BottomLeft => &mut buckets.bottom_left,
                ImagePosition::BottomRight => &mut buckets.bottom_right,
                ImagePosition::Left => &mut buckets.left,
                ImagePosition::Right => &mut buckets.right,
                ImagePosition::Center => &mut buckets.center,
            };
            bucket.push(image);
        }
        buckets
    }

    fn has_sides(&self) -> bool {
        !self.left.is_empty() || !self.right.is_empty()
    }
}

/// Full-width row holding every image of a bucket
fn image_row(images: &[&StoryImage]) -> Option<Node> {
    if images.is_empty() {
        return None;
    }
    let columns = if images.len() > 1 { 2 } else { 1 };
    Some(Node::grid(
        columns,
        4,
        Align::Stretch,
        images.iter().map(|img| Cell::new(frame(img))).collect(),
    ))
}

/// Row holding the first image of each corner bucket
fn corner_pair(left: &[&StoryImage], right: &[&StoryImage], gap: u8) -> Option<Node> {
    let cells: Vec<Cell> = left
        .first()
        .into_iter()
        .chain(right.first())
        .map(|img| Cell::new(frame(img)))
        .collect();
    if cells.is_empty() {
        return None;
    }
    Some(Node::grid(2, gap, Align::Stretch, cells))
}

fn centered(image: &StoryImage) -> Node {
    Node::centered_column(0, None, vec![frame(image).with_width(Width::Medium)])
}

/// Paragraphs paired with side images, one image per paragraph
fn side_flow(page: &StoryPage, buckets: &Buckets<'_>) -> Node {
    let last = page.content.len().saturating_sub(1);
    let rows = page
        .content
        .iter()
        .enumerate()
        .map(|(index, text)| {
            let left = buckets
                .left
                .get(index)
                .or_else(|| (index == 0).then(|| buckets.left.first()).flatten());
            let right = buckets
                .right
                .get(index)
                .or_else(|| (index == last).then(|| buckets.right.first()).flatten());

            match (left, right) {
                (Some(left), _) => Node::grid(
                    2,
                    6,
                    Align::Start,
                    vec![
                        Cell::new(frame(left)).ordered(2, 1),
                        Cell::new(Node::column(4, vec![compact(text)])).ordered(1, 2),
                    ],
                ),
                (None, Some(right)) => Node::grid(
                    2,
                    6,
                    Align::Start,
                    vec![
                        Cell::new(Node::column(4, vec![compact(text)])),
                        Cell::new(frame(right)),
                    ],
                ),
                (None, None) => compact(text),
            }
        })
        .collect();
    Node::column(6, rows)
}

/// Paragraphs without side images, optionally broken by a center image
fn plain_flow(page: &StoryPage, center: Option<(&StoryImage, usize)>) -> Node {
    let mut rows = Vec::with_capacity(page.content.len() + 1);
    for (index, text) in page.content.iter().enumerate() {
        rows.push(compact(text));
        if let Some((image, after)) = center {
            if after == index {
                rows.push(centered(image));
            }
        }
    }
    Node::column(4, rows)
}

fn by_position(page: &StoryPage, images: &[StoryImage]) -> Node {
    let buckets = Buckets::sort(images);
    let mut sections = Vec::new();

    sections.extend(image_row(&buckets.top));
    sections.extend(corner_pair(&buckets.top_left, &buckets.top_right, 6));

    let insert_after = if buckets.has_sides() {
        None
    } else {
        center_insert_after(page.id).filter(|after| *after < page.content.len())
    };
    let first_center = buckets.center.first().copied();

    if buckets.has_sides() {
        sections.push(side_flow(page, &buckets));
    } else {
        sections.push(plain_flow(page, first_center.zip(insert_after)));
    }

    // The center image trails the text unless this page inserts it inline
    if let Some(image) = first_center {
        if insert_after.is_none() {
            sections.push(centered(image));
        }
    }

    sections.extend(corner_pair(&buckets.bottom_left, &buckets.bottom_right, 4));
    sections.extend(image_row(&buckets.bottom));

    Node::column(6, sections)
}
