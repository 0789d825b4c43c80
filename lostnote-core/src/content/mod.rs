//! Bundled story content
//!
//! Both lists are built on first use and never mutated afterwards.

mod story;

use crate::types::{SheetMusicPage, Storybook};
use std::sync::OnceLock;

/// Title of the bundled story
pub const STORY_TITLE: &str = "Little Lost Note";

/// Heading shared by the about overlay and the about page
pub const ABOUT_TITLE: &str = "About Little Lost Note";

/// Body of the about overlay shown over the reader
pub const ABOUT_OVERLAY: &[&str] = &[
    "Little Lost Note is a family story that has been passed down through generations. \
     This digital edition brings the tale to life with beautiful illustrations and \
     interactive elements.",
    "We hope this story brings joy and warmth to your family, just as it has to ours \
     for many years.",
];

/// Body of the standalone about page
pub const ABOUT_PAGE: &[&str] = &[
    "This book was written in the Fall of 1957 as a final paper for a child development class. \
     We did not want to take the book apart. The following pages are scans of the pages of the book. \
     We hope you enjoy this introduction to the orchestra.",
];

/// Signature line under the about page
pub const ABOUT_SIGNATURE: &str = "Suzy";

/// The bundled 21-page story
pub fn little_lost_note() -> &'static Storybook {
    static STORY: OnceLock<Storybook> = OnceLock::new();
    STORY.get_or_init(story::build)
}

/// The two pages of the standalone sheet-music viewer
pub fn sheet_music() -> &'static [SheetMusicPage] {
    static SHEETS: OnceLock<Vec<SheetMusicPage>> = OnceLock::new();
    SHEETS.get_or_init(|| {
        vec![
            SheetMusicPage::new(
                1,
                "/assets/sheet-music-1.png",
                "Sheet music page 1 - Little Lost Note song",
            ),
            SheetMusicPage::new(
                2,
                "/assets/sheet-music-2.png",
                "Sheet music page 2 - Little Lost Note song",
            ),
        ]
    })
}
