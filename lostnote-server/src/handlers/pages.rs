//! HTML pages: reader, sheet music and about

use crate::seo::{PageMeta, Route};
use crate::shell::{reader_script, Document};
use crate::state::AppState;
use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::Html,
};
use lostnote_core::content::{ABOUT_OVERLAY, ABOUT_PAGE, ABOUT_SIGNATURE, ABOUT_TITLE};
use lostnote_core::encoder::{escape_html, HtmlEncoder};
use lostnote_core::reader::{ReaderController, SheetMusicViewer, SHEET_MUSIC_TITLE};
use serde::Deserialize;

/// Query parameters of paginated pages
#[derive(Debug, Default, Deserialize)]
pub struct PageQuery {
    /// Page number (1-indexed, 0 treated as 1)
    pub page: Option<usize>,

    /// `1` opens the about overlay
    pub about: Option<u8>,
}

impl PageQuery {
    fn index(&self) -> usize {
        self.page.unwrap_or(1).saturating_sub(1)
    }
}

fn page_link(path: &str, index: usize) -> String {
    format!("{}?page={}", path, index + 1)
}

/// Reader at `/`
pub async fn home(
    State(state): State<AppState>,
    Query(query): Query<PageQuery>,
) -> Result<Html<String>, StatusCode> {
    reader_page(&state, &query, Route::Home)
}

/// Reader at `/story`
pub async fn story(
    State(state): State<AppState>,
    Query(query): Query<PageQuery>,
) -> Result<Html<String>, StatusCode> {
    reader_page(&state, &query, Route::Story)
}

fn reader_page(state: &AppState, query: &PageQuery, route: Route) -> Result<Html<String>, StatusCode> {
    let show_about = state.config.show_about;
    let mut reader = ReaderController::new(&state.story)
        .map_err(|_| StatusCode::INTERNAL_SERVER_ERROR)?
        .with_about_button(show_about);
    reader.go_to_index(query.index());
    if show_about && query.about == Some(1) {
        reader.open_about();
    }

    let path = route.path();
    let index = reader.index();
    let chrome = reader.chrome();
    let fragment = HtmlEncoder::new().to_html(&reader.render_current());

    let mut body = format!(
        "<div class=\"ln-reader\" data-page-index=\"{}\" data-page-count=\"{}\">\n",
        index,
        reader.page_count()
    );
    if chrome.show_about_button {
        body.push_str(&format!(
            "<a class=\"ln-about-button\" href=\"{}&amp;about=1\" aria-label=\"Open about page\">About</a>\n",
            page_link(path, index)
        ));
    }
    body.push_str(&format!(
        "<main class=\"ln-surface\" id=\"ln-surface\">\n<div class=\"ln-page\" data-page-id=\"{}\">\n{}</div>\n</main>\n",
        reader.current_page().id,
        fragment
    ));
    if chrome.show_previous {
        body.push_str(&format!(
            "<a class=\"ln-arrow ln-prev\" id=\"ln-prev\" href=\"{}\" aria-label=\"Go to previous page\">&#8249;</a>\n",
            page_link(path, index - 1)
        ));
    }
    if chrome.show_next {
        body.push_str(&format!(
            "<a class=\"ln-arrow ln-next\" id=\"ln-next\" href=\"{}\" aria-label=\"Go to next page\">&#8250;</a>\n",
            page_link(path, index + 1)
        ));
    }
    body.push_str(&format!(
        "<div class=\"ln-indicator\">{}</div>\n",
        escape_html(&chrome.indicator)
    ));
    if chrome.about_open {
        body.push_str(&about_overlay(&page_link(path, index)));
    }
    body.push_str("</div>\n");

    let meta = PageMeta::for_route(route);
    Ok(Html(
        Document {
            head: meta.head_tags(&state.config.base_url, path),
            path,
            body,
            script: Some(reader_script()),
            scroll_locked: chrome.about_open,
        }
        .render(),
    ))
}

fn about_overlay(close_href: &str) -> String {
    let paragraphs: String = ABOUT_OVERLAY
        .iter()
        .map(|p| format!("<p>{}</p>\n", escape_html(p)))
        .collect();
    format!(
        "<a class=\"ln-backdrop\" href=\"{close_href}\" aria-hidden=\"true\" tabindex=\"-1\"></a>\n\
         <div class=\"ln-dialog\" role=\"dialog\" aria-modal=\"true\" aria-labelledby=\"about-title\">\n\
         <div class=\"ln-dialog-body\">\n\
         <a class=\"ln-dialog-close\" id=\"ln-about-close\" href=\"{close_href}\" aria-label=\"Close about modal\">&#10005;</a>\n\
         <h2 id=\"about-title\">{}</h2>\n{paragraphs}</div>\n</div>\n",
        escape_html(ABOUT_TITLE)
    )
}

/// Sheet-music viewer at `/sheet-music`
pub async fn sheet_music(
    State(state): State<AppState>,
    Query(query): Query<PageQuery>,
) -> Result<Html<String>, StatusCode> {
    let mut viewer =
        SheetMusicViewer::new(state.sheets).map_err(|_| StatusCode::INTERNAL_SERVER_ERROR)?;
    viewer.go_to_index(query.index());

    let path = Route::SheetMusic.path();
    let index = viewer.index();
    let chrome = viewer.chrome();

    let mut nav = String::new();
    if chrome.show_previous {
        nav.push_str(&format!(
            "<a class=\"ln-arrow\" href=\"{}\" aria-label=\"Go to previous page\">&#8249;</a>\n",
            page_link(path, index - 1)
        ));
    }
    nav.push_str(&format!(
        "<div class=\"ln-indicator\">{}</div>\n",
        escape_html(&chrome.indicator)
    ));
    if chrome.show_next {
        nav.push_str(&format!(
            "<a class=\"ln-arrow\" href=\"{}\" aria-label=\"Go to next page\">&#8250;</a>\n",
            page_link(path, index + 1)
        ));
    }

    let body = format!(
        "<div class=\"ln-sheet\">\n<h1 class=\"ln-heading ln-display\">{}</h1>\n\
         <div class=\"ln-page\">\n{}</div>\n<div class=\"ln-sheet-nav\">\n{}</div>\n</div>\n",
        escape_html(SHEET_MUSIC_TITLE),
        HtmlEncoder::new().to_html(&viewer.render_current()),
        nav
    );

    let meta = PageMeta::for_route(Route::SheetMusic);
    Ok(Html(
        Document {
            head: meta.head_tags(&state.config.base_url, path),
            path,
            body,
            script: None,
            scroll_locked: false,
        }
        .render(),
    ))
}

/// Standalone about page at `/about`
pub async fn about(State(state): State<AppState>) -> Html<String> {
    let paragraphs: String = ABOUT_PAGE
        .iter()
        .map(|p| format!("<p>{}</p>\n", escape_html(p)))
        .collect();
    let body = format!(
        "<div class=\"ln-about\">\n<div class=\"ln-about-card\">\n<h1>{}</h1>\n{}\
         <p class=\"ln-signature\">{}</p>\n</div>\n</div>\n",
        escape_html(ABOUT_TITLE),
        paragraphs,
        escape_html(ABOUT_SIGNATURE)
    );

    let path = Route::About.path();
    let meta = PageMeta::for_route(Route::About);
    Html(
        Document {
            head: meta.head_tags(&state.config.base_url, path),
            path,
            body,
            script: None,
            scroll_locked: false,
        }
        .render(),
    )
}
