//! JSON API over the story

use crate::state::AppState;
use axum::{
    extract::{Path, Query, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use lostnote_core::encoder::require_encoder;
use lostnote_core::reader::{Chrome, ReaderController};
use lostnote_core::render::{render_page, Node};
use lostnote_core::types::{PageLayout, PageType, SheetMusicPage, StoryPage};
use serde::{Deserialize, Serialize};

/// Page summary for list response
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PageSummary {
    /// Reading position (0-based)
    pub index: usize,
    pub id: u32,
    #[serde(rename = "type")]
    pub page_type: PageType,
    pub layout: Option<PageLayout>,
    pub paragraphs: usize,
    pub images: usize,
    pub has_audio: bool,
}

impl PageSummary {
    fn new(index: usize, page: &StoryPage) -> Self {
        Self {
            index,
            id: page.id,
            page_type: page.page_type,
            layout: page.layout,
            paragraphs: page.content.len(),
            images: page.image_list().len() + usize::from(page.image_src.is_some()),
            has_audio: page.playable_audio().is_some(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ListPagesResponse {
    pub pages: Vec<PageSummary>,
    pub total: usize,
}

/// List every page in reading order
pub async fn list_pages(State(state): State<AppState>) -> Json<ListPagesResponse> {
    let pages: Vec<PageSummary> = state
        .story
        .pages()
        .iter()
        .enumerate()
        .map(|(index, page)| PageSummary::new(index, page))
        .collect();
    let total = pages.len();
    Json(ListPagesResponse { pages, total })
}

/// A page record with its layout tree and reader chrome
#[derive(Debug, Serialize)]
pub struct PageResponse {
    pub index: usize,
    pub page: StoryPage,
    pub chrome: Chrome,
    pub tree: Node,
}

/// Get one page by reading position
pub async fn get_page(
    State(state): State<AppState>,
    Path(index): Path<usize>,
) -> Result<Json<PageResponse>, StatusCode> {
    if index >= state.story.len() {
        return Err(StatusCode::NOT_FOUND);
    }
    let mut reader = ReaderController::new(&state.story)
        .map_err(|_| StatusCode::INTERNAL_SERVER_ERROR)?
        .with_about_button(state.config.show_about);
    reader.go_to_index(index);

    Ok(Json(PageResponse {
        index,
        page: reader.current_page().clone(),
        chrome: reader.chrome(),
        tree: reader.render_current(),
    }))
}

/// Query parameters for rendering a page
#[derive(Debug, Deserialize)]
pub struct RenderQuery {
    #[serde(default = "default_format")]
    pub format: String,
}

fn default_format() -> String {
    "html".to_string()
}

/// Render one page in a chosen output format
pub async fn render_page_as(
    State(state): State<AppState>,
    Path(index): Path<usize>,
    Query(query): Query<RenderQuery>,
) -> Result<Response, (StatusCode, String)> {
    let page = state
        .story
        .page(index)
        .ok_or_else(|| (StatusCode::NOT_FOUND, format!("No page at index {}", index)))?;
    let encoder =
        require_encoder(&query.format).map_err(|e| (StatusCode::BAD_REQUEST, e.to_string()))?;

    let mut body = Vec::new();
    encoder
        .encode(&render_page(page), &mut body)
        .map_err(|e| (StatusCode::INTERNAL_SERVER_ERROR, e.to_string()))?;

    Ok(([(header::CONTENT_TYPE, encoder.mime_type().to_string())], body).into_response())
}

#[derive(Debug, Serialize)]
pub struct SheetMusicResponse {
    pub pages: &'static [SheetMusicPage],
    pub total: usize,
}

/// List the sheet-music pages
pub async fn list_sheet_music(State(state): State<AppState>) -> Json<SheetMusicResponse> {
    Json(SheetMusicResponse {
        pages: state.sheets,
        total: state.sheets.len(),
    })
}
