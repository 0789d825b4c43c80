use super::controller::Chrome;
use super::pager::Pager;
use crate::error::ReaderError;
use crate::render::{Extent, Height, Node};
use crate::types::SheetMusicPage;

/// Heading above the sheet-music pages
pub const SHEET_MUSIC_TITLE: &str = "Sheet Music";

/// Pages through the song's sheet music; no layout dispatch
#[derive(Debug, Clone)]
pub struct SheetMusicViewer<'a> {
    pages: &'a [SheetMusicPage],
    pager: Pager,
}

impl<'a> SheetMusicViewer<'a> {
    pub fn new(pages: &'a [SheetMusicPage]) -> Result<Self, ReaderError> {
        let pager = Pager::new(pages.len()).ok_or(ReaderError::EmptyContent)?;
        Ok(Self { pages, pager })
    }

    pub fn index(&self) -> usize {
        self.pager.index()
    }

    pub fn page_count(&self) -> usize {
        self.pager.count()
    }

    pub fn current_page(&self) -> &'a SheetMusicPage {
        &self.pages[self.pager.index()]
    }

    pub fn go_next(&mut self) -> bool {
        self.pager.go_next()
    }

    pub fn go_previous(&mut self) -> bool {
        self.pager.go_previous()
    }

    pub fn go_to_index(&mut self, index: usize) {
        self.pager.go_to_index(index);
    }

    /// The current sheet as a tall image frame
    pub fn render_current(&self) -> Node {
        let page = self.current_page();
        Node::image(
            page.image_src.as_str(),
            page.alt_text.as_str(),
            Height::Responsive {
                narrow: Extent::Px(500),
                wide: Extent::Px(700),
            },
        )
    }

    pub fn chrome(&self) -> Chrome {
        Chrome::for_pager(&self.pager)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::sheet_music;

    #[test]
    fn test_two_sheets() {
        let mut viewer = SheetMusicViewer::new(sheet_music()).unwrap();
        assert_eq!(viewer.chrome().indicator, "1 / 2");
        assert!(!viewer.chrome().show_previous);
        assert!(viewer.go_next());
        assert!(!viewer.go_next());
        assert_eq!(viewer.current_page().id, 2);
        assert_eq!(
            viewer.render_current().image_sources(),
            vec!["/assets/sheet-music-2.png"]
        );
        assert!(!viewer.chrome().show_next);
    }

    #[test]
    fn test_empty_sheets_rejected() {
        assert_eq!(
            SheetMusicViewer::new(&[]).unwrap_err(),
            ReaderError::EmptyContent
        );
    }

    #[test]
    fn test_go_to_index_clamps() {
        let mut viewer = SheetMusicViewer::new(sheet_music()).unwrap();
        viewer.go_to_index(9);
        assert_eq!(viewer.index(), 1);
        viewer.go_to_index(0);
        assert_eq!(viewer.index(), 0);
    }
}
