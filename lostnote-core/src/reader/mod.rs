//! Reading state and input handling
//!
//! [`ReaderController`] owns the current position over a [`Storybook`] and
//! turns key presses and clicks into moves. [`MountedReader`] ties a
//! controller to a host's listeners for the lifetime of a mount.
//!
//! [`Storybook`]: crate::types::Storybook

mod controller;
mod input;
mod mount;
mod pager;
mod sheet_music;

pub use controller::{Chrome, ReaderController};
pub use input::{
    classify_click, ClickZone, Key, NavCommand, UnknownKey, NEXT_ZONE_START, PREVIOUS_ZONE_END,
};
pub use mount::{EventHost, ListenerId, ListenerTarget, MountedReader};
pub use pager::Pager;
pub use sheet_music::{SheetMusicViewer, SHEET_MUSIC_TITLE};
