//! Application state

use crate::config::ServerConfig;
use anyhow::{bail, Context, Result};
use lostnote_core::content::{little_lost_note, sheet_music};
use lostnote_core::types::{SheetMusicPage, Storybook};
use std::sync::Arc;

/// Shared application state
///
/// Everything here is immutable after startup; handlers build a fresh reader
/// per request, so no locks are needed.
#[derive(Clone)]
pub struct AppState {
    /// Story being served
    pub story: Arc<Storybook>,

    /// Pages of the sheet-music viewer
    pub sheets: &'static [SheetMusicPage],

    pub config: Arc<ServerConfig>,
}

impl AppState {
    /// Load the configured story, or the bundled one
    pub async fn new(config: ServerConfig) -> Result<Self> {
        let story = match &config.content_path {
            Some(path) => {
                let data = tokio::fs::read_to_string(path)
                    .await
                    .with_context(|| format!("Failed to read content file {}", path.display()))?;
                let story = Storybook::from_json(&data)
                    .with_context(|| format!("Failed to parse content file {}", path.display()))?;
                tracing::info!("Loaded {} pages from {}", story.len(), path.display());
                story
            }
            None => little_lost_note().clone(),
        };

        Self::with_story(story, config)
    }

    /// Build state around a story, refusing content with hard errors
    pub fn with_story(story: Storybook, config: ServerConfig) -> Result<Self> {
        let report = story.validate();
        for issue in report.warnings() {
            tracing::warn!(page_id = ?issue.page_id, "Content warning: {}", issue.message);
        }
        if let Some(err) = report.into_first_error() {
            bail!("Invalid story content: {}", err);
        }

        Ok(Self {
            story: Arc::new(story),
            sheets: sheet_music(),
            config: Arc::new(config),
        })
    }

    /// State for the bundled story with default settings
    pub fn bundled() -> Self {
        Self {
            story: Arc::new(little_lost_note().clone()),
            sheets: sheet_music(),
            config: Arc::new(ServerConfig::default()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_story_is_refused() {
        let err = AppState::with_story(Storybook::default(), ServerConfig::default())
            .err()
            .unwrap();
        assert!(err.to_string().contains("no pages"));
    }

    #[tokio::test]
    async fn test_missing_content_file() {
        let config = ServerConfig {
            content_path: Some("/definitely/not/here.json".into()),
            ..ServerConfig::default()
        };
        assert!(AppState::new(config).await.is_err());
    }
}
