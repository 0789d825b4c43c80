//! Per-route metadata for search engines and link previews

use lostnote_core::encoder::escape_html;

pub const SITE_NAME: &str = "Little Lost Note";
pub const TITLE_TEMPLATE: &str = "%s | Little Lost Note";
pub const DEFAULT_TITLE: &str = "Little Lost Note - A Family Story";
pub const DEFAULT_DESCRIPTION: &str = "A digital ebook of the family story Little Lost Note, \
    written in 1957. An introduction to the orchestra through the tale of a little lost note.";
pub const TWITTER_HANDLE: &str = "@littlelostnote";

/// Cover used as the share image, relative to the base URL
const SHARE_IMAGE: &str = "/assets/little-lost-note-cover.png";

/// Routes that carry their own metadata
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    Home,
    Story,
    SheetMusic,
    About,
}

impl Route {
    pub fn path(&self) -> &'static str {
        match self {
            Route::Home => "/",
            Route::Story => "/story",
            Route::SheetMusic => "/sheet-music",
            Route::About => "/about",
        }
    }
}

/// Metadata for one route
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageMeta {
    /// Short title run through the template; `None` uses the default title
    pub title: Option<&'static str>,
    pub description: &'static str,
}

impl PageMeta {
    pub fn for_route(route: Route) -> Self {
        match route {
            Route::Home => Self {
                title: None,
                description: "Welcome to Little Lost Note - A Family Story. Start reading the digital ebook.",
            },
            Route::Story => Self {
                title: Some("Story"),
                description: "Read the story of Little Lost Note - a tale about a note searching for its place in the music.",
            },
            Route::SheetMusic => Self {
                title: Some("Sheet Music"),
                description: "View and listen to the sheet music for Little Lost Note song with lyrics.",
            },
            Route::About => Self {
                title: Some("About"),
                description: "Learn about Little Lost Note - a family story written in 1957 as a final paper for a child development class.",
            },
        }
    }

    /// Document title after applying the template
    pub fn full_title(&self) -> String {
        match self.title {
            Some(title) => TITLE_TEMPLATE.replace("%s", title),
            None => DEFAULT_TITLE.to_string(),
        }
    }

    /// `<head>` tags for this route
    pub fn head_tags(&self, base_url: &str, path: &str) -> String {
        let title = escape_html(&self.full_title());
        let description = escape_html(self.description);
        let url = escape_html(&format!("{}{}", base_url, path));
        let image = escape_html(&format!("{}{}", base_url, SHARE_IMAGE));

        let mut tags = vec![
            format!("<title>{title}</title>"),
            format!("<meta name=\"description\" content=\"{description}\"/>"),
            "<meta name=\"viewport\" content=\"width=device-width, initial-scale=1, maximum-scale=5\"/>"
                .to_string(),
            format!("<link rel=\"canonical\" href=\"{url}\"/>"),
            "<meta property=\"og:type\" content=\"website\"/>".to_string(),
            "<meta property=\"og:locale\" content=\"en_US\"/>".to_string(),
            format!("<meta property=\"og:site_name\" content=\"{SITE_NAME}\"/>"),
            format!("<meta property=\"og:url\" content=\"{url}\"/>"),
            format!("<meta property=\"og:title\" content=\"{title}\"/>"),
            format!("<meta property=\"og:description\" content=\"{description}\"/>"),
            format!("<meta property=\"og:image\" content=\"{image}\"/>"),
            "<meta property=\"og:image:width\" content=\"1200\"/>".to_string(),
            "<meta property=\"og:image:height\" content=\"630\"/>".to_string(),
            "<meta property=\"og:image:alt\" content=\"Little Lost Note Cover\"/>".to_string(),
            "<meta name=\"twitter:card\" content=\"summary_large_image\"/>".to_string(),
            format!("<meta name=\"twitter:site\" content=\"{TWITTER_HANDLE}\"/>"),
            format!("<meta name=\"twitter:creator\" content=\"{TWITTER_HANDLE}\"/>"),
            format!("<meta name=\"twitter:title\" content=\"{title}\"/>"),
            format!("<meta name=\"twitter:description\" content=\"{description}\"/>"),
        ];
        tags.push(String::new());
        tags.join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_title_template() {
        assert_eq!(
            PageMeta::for_route(Route::Story).full_title(),
            "Story | Little Lost Note"
        );
        assert_eq!(PageMeta::for_route(Route::Home).full_title(), DEFAULT_TITLE);
    }

    #[test]
    fn test_head_tags_use_base_url() {
        let tags =
            PageMeta::for_route(Route::SheetMusic).head_tags("https://example.com", "/sheet-music");
        assert!(tags.contains("<link rel=\"canonical\" href=\"https://example.com/sheet-music\"/>"));
        assert!(tags.contains(
            "<meta property=\"og:image\" content=\"https://example.com/assets/little-lost-note-cover.png\"/>"
        ));
        assert!(tags.contains("<title>Sheet Music | Little Lost Note</title>"));
    }
}
