//! The story reader's navigation state

use super::input::{classify_click, ClickZone, Key, NavCommand};
use super::pager::Pager;
use crate::error::ReaderError;
use crate::render::{render_page, Node};
use crate::types::{StoryPage, Storybook};
use serde::Serialize;

/// Navigation affordances drawn around the current page
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Chrome {
    pub show_previous: bool,
    pub show_next: bool,

    /// Page counter, e.g. "3 / 21"
    pub indicator: String,

    pub show_about_button: bool,
    pub about_open: bool,
}

impl Chrome {
    pub(crate) fn for_pager(pager: &Pager) -> Self {
        Self {
            show_previous: pager.can_go_previous(),
            show_next: pager.can_go_next(),
            indicator: pager.indicator(),
            show_about_button: false,
            about_open: false,
        }
    }
}

/// Holds the current page index over a storybook and maps input to moves
#[derive(Debug, Clone)]
pub struct ReaderController<'a> {
    book: &'a Storybook,
    pager: Pager,
    about_open: bool,
    show_about_button: bool,
}

impl<'a> ReaderController<'a> {
    /// Start reading at the first page
    pub fn new(book: &'a Storybook) -> Result<Self, ReaderError> {
        let pager = Pager::new(book.len()).ok_or(ReaderError::EmptyContent)?;
        Ok(Self {
            book,
            pager,
            about_open: false,
            show_about_button: false,
        })
    }

    /// Offer the about button in the chrome
    pub fn with_about_button(mut self, show: bool) -> Self {
        self.show_about_button = show;
        self
    }

    pub fn book(&self) -> &'a Storybook {
        self.book
    }

    pub fn index(&self) -> usize {
        self.pager.index()
    }

    pub fn page_count(&self) -> usize {
        self.pager.count()
    }

    pub fn current_page(&self) -> &'a StoryPage {
        // The pager keeps the index inside the non-empty, immutable page list
        &self.book.pages()[self.pager.index()]
    }

    pub fn render_current(&self) -> Node {
        render_page(self.current_page())
    }

    pub fn can_go_next(&self) -> bool {
        self.pager.can_go_next()
    }

    pub fn can_go_previous(&self) -> bool {
        self.pager.can_go_previous()
    }

    pub fn go_next(&mut self) -> bool {
        let moved = self.pager.go_next();
        if moved {
            tracing::debug!(index = self.index(), "Next page");
        }
        moved
    }

    pub fn go_previous(&mut self) -> bool {
        let moved = self.pager.go_previous();
        if moved {
            tracing::debug!(index = self.index(), "Previous page");
        }
        moved
    }

    /// Jump toward a reading position; past the end stops at the last page
    pub fn go_to_index(&mut self, index: usize) {
        self.pager.go_to_index(index);
        tracing::debug!(requested = index, index = self.index(), "Go to page");
    }

    pub fn about_open(&self) -> bool {
        self.about_open
    }

    /// Open the about overlay; returns whether it was closed before
    pub fn open_about(&mut self) -> bool {
        let changed = !self.about_open;
        self.about_open = true;
        changed
    }

    /// Close the about overlay; returns whether it was open before
    pub fn close_about(&mut self) -> bool {
        let changed = self.about_open;
        self.about_open = false;
        changed
    }

    /// Carry out a navigation command
    pub fn apply(&mut self, command: NavCommand) -> bool {
        match command {
            NavCommand::Next => self.go_next(),
            NavCommand::Previous => self.go_previous(),
            NavCommand::CloseAbout => self.close_about(),
        }
    }

    /// React to a key press
    ///
    /// Arrows always navigate. Escape only matters while the about overlay
    /// is open. Returns the command the key mapped to, if any.
    pub fn handle_key(&mut self, key: Key) -> Option<NavCommand> {
        let command = match key {
            Key::ArrowLeft => NavCommand::Previous,
            Key::ArrowRight => NavCommand::Next,
            Key::Escape if self.about_open => NavCommand::CloseAbout,
            Key::Escape => return None,
        };
        self.apply(command);
        Some(command)
    }

    /// React to a click at offset `x` on a page surface `width` wide
    pub fn handle_click(&mut self, x: f64, width: f64) -> ClickZone {
        let zone = classify_click(x, width);
        match zone {
            ClickZone::Next => {
                self.go_next();
            }
            ClickZone::Previous => {
                self.go_previous();
            }
            ClickZone::Dead => {}
        }
        zone
    }

    pub fn chrome(&self) -> Chrome {
        Chrome {
            show_about_button: self.show_about_button,
            about_open: self.about_open,
            ..Chrome::for_pager(&self.pager)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::little_lost_note;
    use crate::types::{PageLayout, PageType};

    #[test]
    fn test_empty_storybook_is_rejected() {
        let empty = Storybook::default();
        assert_eq!(
            ReaderController::new(&empty).unwrap_err(),
            ReaderError::EmptyContent
        );
    }

    #[test]
    fn test_starts_on_cover() {
        let reader = ReaderController::new(little_lost_note()).unwrap();
        assert_eq!(reader.index(), 0);
        assert_eq!(reader.current_page().id, 1);
        let chrome = reader.chrome();
        assert!(!chrome.show_previous);
        assert!(chrome.show_next);
        assert_eq!(chrome.indicator, "1 / 21");
        assert!(!chrome.show_about_button);
    }

    #[test]
    fn test_keys_navigate() {
        let mut reader = ReaderController::new(little_lost_note()).unwrap();
        assert_eq!(reader.handle_key(Key::ArrowRight), Some(NavCommand::Next));
        assert_eq!(reader.handle_key(Key::ArrowRight), Some(NavCommand::Next));
        assert_eq!(reader.index(), 2);
        reader.handle_key(Key::ArrowLeft);
        assert_eq!(reader.index(), 1);
    }

    #[test]
    fn test_escape_only_closes_open_overlay() {
        let mut reader = ReaderController::new(little_lost_note())
            .unwrap()
            .with_about_button(true);
        assert_eq!(reader.handle_key(Key::Escape), None);

        assert!(reader.open_about());
        assert!(!reader.open_about());
        assert!(reader.chrome().about_open);

        assert_eq!(reader.handle_key(Key::Escape), Some(NavCommand::CloseAbout));
        assert!(!reader.about_open());
        assert_eq!(reader.index(), 0);
    }

    #[test]
    fn test_clicks_navigate_by_zone() {
        let mut reader = ReaderController::new(little_lost_note()).unwrap();
        assert_eq!(reader.handle_click(900.0, 1000.0), ClickZone::Next);
        assert_eq!(reader.index(), 1);
        assert_eq!(reader.handle_click(500.0, 1000.0), ClickZone::Dead);
        assert_eq!(reader.index(), 1);
        assert_eq!(reader.handle_click(100.0, 1000.0), ClickZone::Previous);
        assert_eq!(reader.index(), 0);
        assert_eq!(reader.handle_click(100.0, 1000.0), ClickZone::Previous);
        assert_eq!(reader.index(), 0);
    }

    #[test]
    fn test_indexes_by_position_not_id() {
        let book = Storybook::new(vec![
            StoryPage::new(30, PageType::Story, PageLayout::TextOnly).with_content(["a"]),
            StoryPage::new(10, PageType::Story, PageLayout::TextOnly).with_content(["b"]),
        ]);
        let mut reader = ReaderController::new(&book).unwrap();
        reader.go_next();
        assert_eq!(reader.current_page().id, 10);
        assert_eq!(reader.render_current().texts(), vec!["b"]);
        assert!(!reader.chrome().show_next);
    }
}
