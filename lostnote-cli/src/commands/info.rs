//! Info command implementation

use super::load_story;
use anyhow::Result;
use lostnote_core::content::{sheet_music, STORY_TITLE};
use serde::Serialize;
use std::collections::BTreeMap;

/// Story info output
#[derive(Serialize)]
struct StoryInfo {
    title: &'static str,
    pages: usize,
    paragraphs: usize,
    images: usize,
    audio_tracks: usize,
    layouts: BTreeMap<&'static str, usize>,
    sheet_music_pages: usize,
}

/// Display information about the story
pub fn info(content: Option<&str>, json: bool) -> Result<()> {
    let story = load_story(content)?;

    let mut layouts = BTreeMap::new();
    for page in story.pages() {
        let name = page.layout.map(|l| l.as_str()).unwrap_or("none");
        *layouts.entry(name).or_insert(0) += 1;
    }

    let info = StoryInfo {
        title: STORY_TITLE,
        pages: story.len(),
        paragraphs: story.pages().iter().map(|p| p.content.len()).sum(),
        images: story
            .pages()
            .iter()
            .map(|p| p.image_list().len() + usize::from(p.image_src.is_some()))
            .sum(),
        audio_tracks: story
            .pages()
            .iter()
            .filter(|p| p.playable_audio().is_some())
            .count(),
        layouts,
        sheet_music_pages: sheet_music().len(),
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&info)?);
    } else {
        println!("Title:       {}", info.title);
        println!("Pages:       {}", info.pages);
        println!("Paragraphs:  {}", info.paragraphs);
        println!("Images:      {}", info.images);
        println!("Audio:       {}", info.audio_tracks);
        println!("Sheet music: {}", info.sheet_music_pages);
        println!("Layouts:");
        for (name, count) in &info.layouts {
            println!("  {:<13}{}", name, count);
        }
    }

    Ok(())
}
