//! Core types for the story content model

mod book;
mod image;
mod page;
mod sheet_music;

pub use book::Storybook;
pub use image::{ImagePosition, StoryImage};
pub use page::{PageLayout, PageType, StoryPage};
pub use sheet_music::SheetMusicPage;
