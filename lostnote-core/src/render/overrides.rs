//! Hand-designed compositions for specific pages
//!
//! Each entry reproduces one page of the printed book. These are keyed by
//! literal page id and are not a general rule; new pages go through the
//! position-bucket layout instead.

use super::tree::{Align, Cell, Extent, Height, Node, TextStyle};
use crate::types::{ImagePosition, StoryImage, StoryPage};

/// A page-identity override of the multi-image layout
pub struct LayoutOverride {
    /// Page this composition belongs to
    pub page_id: u32,

    /// Number of images the composition expects
    pub image_count: usize,

    /// Short name for diagnostics
    pub name: &'static str,

    /// Builds the tree; `None` defers to the generic layout
    pub render: fn(&StoryPage, &[StoryImage]) -> Option<Node>,
}

impl LayoutOverride {
    pub fn matches(&self, page: &StoryPage, images: &[StoryImage]) -> bool {
        self.page_id == page.id && self.image_count == images.len()
    }
}

impl std::fmt::Debug for LayoutOverride {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LayoutOverride")
            .field("page_id", &self.page_id)
            .field("image_count", &self.image_count)
            .field("name", &self.name)
            .finish()
    }
}

/// Every page-identity override, checked before the generic layout
pub const LAYOUT_OVERRIDES: &[LayoutOverride] = &[
    LayoutOverride {
        page_id: 5,
        image_count: 2,
        name: "baton-pairing",
        render: baton_pairing,
    },
    LayoutOverride {
        page_id: 13,
        image_count: 2,
        name: "bassoon-column",
        render: bassoon_column,
    },
    LayoutOverride {
        page_id: 7,
        image_count: 3,
        name: "string-family-tiers",
        render: string_family_tiers,
    },
];

/// Pages whose first center image sits after a given paragraph index
pub const CENTER_INSERTS: &[(u32, usize)] = &[(7, 2)];

/// Paragraph index after which a page's center image is inserted
pub(super) fn center_insert_after(page_id: u32) -> Option<usize> {
    CENTER_INSERTS
        .iter()
        .find(|(id, _)| *id == page_id)
        .map(|(_, index)| *index)
}

pub(super) fn find_override(page: &StoryPage, images: &[StoryImage]) -> Option<&'static LayoutOverride> {
    LAYOUT_OVERRIDES.iter().find(|o| o.matches(page, images))
}

/// First image matching `pred`, else the image at `fallback`
fn pick<'a>(
    images: &'a [StoryImage],
    pred: impl Fn(&StoryImage) -> bool,
    fallback: usize,
) -> Option<&'a StoryImage> {
    images.iter().find(|img| pred(img)).or_else(|| images.get(fallback))
}

fn frame(image: &StoryImage, height: Height) -> Node {
    Node::image(image.src.as_str(), image.alt_text.as_str(), height)
}

fn px(value: u32) -> Height {
    Height::at_least(Extent::Px(value))
}

fn compact(text: &str) -> Node {
    Node::paragraph(text, TextStyle::Compact)
}

/// Paragraphs at `indices` that exist, as a single flow
fn paragraphs(page: &StoryPage, indices: impl IntoIterator<Item = usize>) -> Node {
    Node::column(
        4,
        indices
            .into_iter()
            .filter_map(|i| page.content.get(i))
            .map(|p| compact(p))
            .collect(),
    )
}

/// First paragraph beside a smaller image; the rest beside a larger one
fn baton_pairing(page: &StoryPage, images: &[StoryImage]) -> Option<Node> {
    let left = pick(images, |img| img.is_at(ImagePosition::Left), 0)?;
    let right = pick(images, |img| img.is_at(ImagePosition::Right), 1)?;

    let opening = Node::grid(
        2,
        6,
        Align::Center,
        vec![
            Cell::new(frame(left, px(300))).ordered(2, 1),
            Cell::new(paragraphs(page, [0])).ordered(1, 2),
        ],
    );
    let rest = Node::grid(
        2,
        6,
        Align::Start,
        vec![
            Cell::new(paragraphs(page, 1..page.content.len())).ordered(2, 1),
            Cell::new(frame(right, px(400))).ordered(1, 2),
        ],
    );

    Some(Node::column(6, vec![opening, rest]))
}

/// Bassoon in a narrow left column; text and a second image stacked to its
/// right, both bottom-aligned
fn bassoon_column(page: &StoryPage, images: &[StoryImage]) -> Option<Node> {
    let bassoon = pick(images, |img| img.src.contains("10-1"), 0)?;
    let sad = pick(images, |img| img.src.contains("10-2"), 1)?;

    let stacked = Node::Column {
        gap: 6,
        align: Align::Stretch,
        justify: Align::End,
        min_height: None,
        centered_text: false,
        children: vec![
            paragraphs(page, 0..page.content.len()),
            frame(sad, px(400)),
        ],
    };

    Some(Node::Grid {
        columns: 4,
        gap: 6,
        align: Align::End,
        min_height: Some(Extent::Vh(80)),
        cells: vec![
            Cell::new(frame(
                bassoon,
                Height::Responsive {
                    narrow: Extent::Px(500),
                    wide: Extent::Px(700),
                },
            ))
            .ordered(2, 1),
            Cell::new(stacked).spanning(3).ordered(1, 2),
        ],
    })
}

/// Three tiers of text and instruments, following the printed page
fn string_family_tiers(page: &StoryPage, images: &[StoryImage]) -> Option<Node> {
    let bass_fiddle = pick(images, |img| img.src.contains("4-1"), 0)?;
    let cello = pick(images, |img| img.src.contains("4-2"), 1)?;
    let violins = pick(images, |img| img.src.contains("4-3"), 2)?;

    let top = Node::grid(
        2,
        6,
        Align::Center,
        vec![
            Cell::new(frame(bass_fiddle, px(300))).ordered(2, 1),
            Cell::new(paragraphs(page, [0, 1])).ordered(1, 2),
        ],
    );
    let middle = Node::grid(
        3,
        6,
        Align::Center,
        vec![
            Cell::new(paragraphs(page, [2])).ordered(2, 1),
            Cell::new(frame(cello, px(400))).ordered(1, 2),
            Cell::new(paragraphs(page, [3])).ordered(3, 3),
        ],
    );
    let bottom = Node::grid(
        2,
        6,
        Align::Center,
        vec![
            Cell::new(paragraphs(page, [4])).ordered(2, 1),
            Cell::new(frame(violins, px(300))).ordered(1, 2),
        ],
    );

    Some(Node::column(8, vec![top, middle, bottom]))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::little_lost_note;
    use crate::render::{render_page, Order};

    fn bundled_tree(page_id: u32) -> (&'static StoryPage, Node) {
        let story = little_lost_note();
        let page = story
            .pages()
            .iter()
            .find(|p| p.id == page_id)
            .unwrap_or_else(|| panic!("no page {page_id}"));
        (page, render_page(page))
    }

    fn children(node: &Node) -> &[Node] {
        let Node::Column { children, .. } = node else {
            panic!("expected column, got {node:?}");
        };
        children
    }

    fn cells(node: &Node) -> &[Cell] {
        let Node::Grid { cells, .. } = node else {
            panic!("expected grid, got {node:?}");
        };
        cells
    }

    fn image(node: &Node) -> (&str, Height) {
        let Node::Image { src, height, .. } = node else {
            panic!("expected image, got {node:?}");
        };
        (src.as_str(), *height)
    }

    fn order(narrow: u8, wide: u8) -> Option<Order> {
        Some(Order { narrow, wide })
    }

    fn texts(page: &StoryPage, range: std::ops::Range<usize>) -> Vec<&str> {
        page.content[range].iter().map(String::as_str).collect()
    }

    #[test]
    fn test_override_ids_are_unique() {
        let mut ids: Vec<u32> = LAYOUT_OVERRIDES.iter().map(|o| o.page_id).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), LAYOUT_OVERRIDES.len());
    }

    #[test]
    fn test_every_override_matches_a_bundled_page() {
        let story = little_lost_note();
        for entry in LAYOUT_OVERRIDES {
            let page = story
                .pages()
                .iter()
                .find(|p| p.id == entry.page_id)
                .unwrap_or_else(|| panic!("no page for {:?}", entry));
            assert!(entry.matches(page, page.image_list()), "{:?}", entry);
        }
    }

    #[test]
    fn test_image_count_mismatch_skips_override() {
        let story = little_lost_note();
        let page = story.page(4).unwrap();
        assert_eq!(page.id, 5);
        assert!(find_override(page, &page.image_list()[..1]).is_none());
    }

    #[test]
    fn test_pick_prefers_predicate_then_index() {
        let images = vec![
            StoryImage::new("/assets/b.png", "b"),
            StoryImage::new("/assets/a.png", "a").at(ImagePosition::Left),
        ];
        let left = pick(&images, |img| img.is_at(ImagePosition::Left), 0).unwrap();
        assert_eq!(left.src, "/assets/a.png");
        let right = pick(&images, |img| img.is_at(ImagePosition::Right), 0).unwrap();
        assert_eq!(right.src, "/assets/b.png");
    }

    #[test]
    fn test_center_insert_table() {
        assert_eq!(center_insert_after(7), Some(2));
        assert_eq!(center_insert_after(6), None);
    }

    #[test]
    fn test_baton_pairing_composition() {
        let (page, tree) = bundled_tree(5);
        let rows = children(&tree);
        assert_eq!(rows.len(), 2);

        let opening = cells(&rows[0]);
        assert_eq!(opening.len(), 2);
        assert_eq!(image(&opening[0].content), ("/assets/2-1.png", px(300)));
        assert_eq!(opening[0].order, order(2, 1));
        assert_eq!(opening[1].content.texts(), texts(page, 0..1));
        assert_eq!(opening[1].order, order(1, 2));

        let rest = cells(&rows[1]);
        assert_eq!(rest.len(), 2);
        assert_eq!(rest[0].content.texts(), texts(page, 1..page.content.len()));
        assert_eq!(rest[0].order, order(2, 1));
        assert_eq!(image(&rest[1].content), ("/assets/2-2.png", px(400)));
        assert_eq!(rest[1].order, order(1, 2));
    }

    #[test]
    fn test_bassoon_column_composition() {
        let (page, tree) = bundled_tree(13);
        let Node::Grid {
            columns,
            align,
            min_height,
            cells,
            ..
        } = &tree
        else {
            panic!("expected grid, got {tree:?}");
        };
        assert_eq!(*columns, 4);
        assert_eq!(*align, Align::End);
        assert_eq!(*min_height, Some(Extent::Vh(80)));
        assert_eq!(cells.len(), 2);

        assert_eq!(
            image(&cells[0].content),
            (
                "/assets/10-1.png",
                Height::Responsive {
                    narrow: Extent::Px(500),
                    wide: Extent::Px(700),
                }
            )
        );
        assert_eq!(cells[0].order, order(2, 1));

        assert_eq!(cells[1].span, 3);
        assert_eq!(cells[1].order, order(1, 2));
        let Node::Column {
            justify, children, ..
        } = &cells[1].content
        else {
            panic!("expected stacked column");
        };
        assert_eq!(*justify, Align::End);
        assert_eq!(children.len(), 2);
        assert_eq!(children[0].texts(), texts(page, 0..page.content.len()));
        assert_eq!(image(&children[1]), ("/assets/10-2.png", px(400)));
    }

    #[test]
    fn test_string_family_tiers_composition() {
        let (page, tree) = bundled_tree(7);
        let tiers = children(&tree);
        assert_eq!(tiers.len(), 3);

        let top = cells(&tiers[0]);
        assert_eq!(top.len(), 2);
        assert_eq!(image(&top[0].content), ("/assets/4-1.png", px(300)));
        assert_eq!(top[0].order, order(2, 1));
        assert_eq!(top[1].content.texts(), texts(page, 0..2));
        assert_eq!(top[1].order, order(1, 2));

        let Node::Grid { columns, .. } = &tiers[1] else {
            panic!("expected grid");
        };
        assert_eq!(*columns, 3);
        let middle = cells(&tiers[1]);
        assert_eq!(middle.len(), 3);
        assert_eq!(middle[0].content.texts(), texts(page, 2..3));
        assert_eq!(middle[0].order, order(2, 1));
        assert_eq!(image(&middle[1].content), ("/assets/4-2.png", px(400)));
        assert_eq!(middle[1].order, order(1, 2));
        assert_eq!(middle[2].content.texts(), texts(page, 3..4));
        assert_eq!(middle[2].order, order(3, 3));

        let bottom = cells(&tiers[2]);
        assert_eq!(bottom.len(), 2);
        assert_eq!(bottom[0].content.texts(), texts(page, 4..5));
        assert_eq!(bottom[0].order, order(2, 1));
        assert_eq!(image(&bottom[1].content), ("/assets/4-3.png", px(300)));
        assert_eq!(bottom[1].order, order(1, 2));
    }
}
