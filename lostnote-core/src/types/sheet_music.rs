//! Pages of the standalone sheet-music viewer

use serde::{Deserialize, Serialize};

/// A single scanned page of sheet music
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct SheetMusicPage {
    pub id: u32,
    pub image_src: String,
    pub alt_text: String,
}

impl SheetMusicPage {
    pub fn new(id: u32, image_src: impl Into<String>, alt_text: impl Into<String>) -> Self {
        Self {
            id,
            image_src: image_src.into(),
            alt_text: alt_text.into(),
        }
    }
}
